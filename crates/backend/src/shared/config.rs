use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub mock: MockConfig,
    #[serde(default)]
    pub options: OptionsConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct MockConfig {
    /// Искусственная задержка каждого вызова сервиса
    pub latency_ms: u64,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct OptionsConfig {
    /// Сколько опций показывать без поискового запроса
    pub default_limit: usize,
    pub debounce_ms: u64,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ExportConfig {
    /// Лимит, которым выгрузка приближает "все подходящие записи"
    pub max_records: usize,
    pub csv_delimiter: char,
    pub output_dir: String,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self { latency_ms: 300 }
    }
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            default_limit: 10,
            debounce_ms: 300,
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            max_records: 10_000,
            csv_delimiter: ',',
            output_dir: "exports".to_string(),
        }
    }
}

impl MockConfig {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

impl ExportConfig {
    /// Разделитель CSV как байт (`csv` crate работает с ASCII-разделителями)
    ///
    /// Кавычка и переводы строк в роли разделителя ломают экранирование полей.
    pub fn delimiter_byte(&self) -> anyhow::Result<u8> {
        let byte = u8::try_from(self.csv_delimiter)
            .ok()
            .filter(u8::is_ascii)
            .ok_or_else(|| {
                anyhow::anyhow!("csv_delimiter must be ASCII, got {:?}", self.csv_delimiter)
            })?;
        if matches!(byte, b'"' | b'\r' | b'\n') {
            anyhow::bail!(
                "csv_delimiter must not be a quote or line break, got {:?}",
                self.csv_delimiter
            );
        }
        Ok(byte)
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[mock]
latency_ms = 300

[options]
default_limit = 10
debounce_ms = 300

[export]
max_records = 10000
csv_delimiter = ","
output_dir = "exports"
"#;

/// Embedded default configuration (used by the browser build and by tests)
pub fn default_config() -> Config {
    toml::from_str(DEFAULT_CONFIG).unwrap_or_else(|e| {
        tracing::error!("Embedded default config is invalid: {}", e);
        Config {
            mock: MockConfig::default(),
            options: OptionsConfig::default(),
            export: ExportConfig::default(),
        }
    })
}

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                return load_config_from(&config_path);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

pub fn load_config_from(path: &Path) -> anyhow::Result<Config> {
    let contents = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&contents)?;
    config.export.delimiter_byte()?;
    Ok(config)
}

/// Get the export directory from configuration
/// Resolves relative paths relative to the executable directory
pub fn get_export_dir(config: &Config) -> PathBuf {
    let dir = Path::new(&config.export.output_dir);

    if dir.is_absolute() {
        return dir.to_path_buf();
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            return exe_dir.join(dir);
        }
    }

    PathBuf::from(&config.export.output_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Result<Config, _> = toml::from_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.mock.latency_ms, 300);
        assert_eq!(config.options.default_limit, 10);
        assert_eq!(config.export.max_records, 10_000);
        assert_eq!(config.export.csv_delimiter, ',');
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config: Config = toml::from_str("[mock]\nlatency_ms = 0\n").unwrap();
        assert_eq!(config.mock.latency_ms, 0);
        assert_eq!(config.options, OptionsConfig::default());
        assert_eq!(config.export, ExportConfig::default());
    }

    #[test]
    fn test_non_ascii_delimiter_rejected() {
        let export = ExportConfig {
            csv_delimiter: '§',
            ..ExportConfig::default()
        };
        assert!(export.delimiter_byte().is_err());
        assert_eq!(ExportConfig::default().delimiter_byte().unwrap(), b',');
    }

    #[test]
    fn test_quote_and_line_break_delimiters_rejected() {
        for delimiter in ['"', '\r', '\n'] {
            let export = ExportConfig {
                csv_delimiter: delimiter,
                ..ExportConfig::default()
            };
            assert!(export.delimiter_byte().is_err(), "{:?} accepted", delimiter);
        }

        let tab = ExportConfig {
            csv_delimiter: '\t',
            ..ExportConfig::default()
        };
        assert_eq!(tab.delimiter_byte().unwrap(), b'\t');
    }
}
