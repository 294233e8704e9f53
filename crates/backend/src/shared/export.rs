//! Выгрузка списков справочников в CSV / JSON

use contracts::shared::master_data::ExportFormat;
use serde::Serialize;

use crate::shared::error::{ServiceError, ServiceResult};

/// Trait для типов, которые могут быть выгружены в CSV
pub trait CsvExportable {
    /// Заголовки колонок в порядке выгрузки
    fn headers() -> &'static [&'static str];

    /// Значения колонок в том же порядке, что и `headers`
    fn to_csv_row(&self) -> Vec<String>;
}

/// Готовый файл выгрузки
#[derive(Debug, Clone, PartialEq)]
pub struct ExportBlob {
    pub bytes: Vec<u8>,
    pub mime_type: &'static str,
    pub file_name: String,
}

impl ExportBlob {
    pub fn as_text(&self) -> String {
        String::from_utf8_lossy(&self.bytes).into_owned()
    }
}

/// CSV: строка заголовков и по строке на запись
///
/// Все поля берутся в кавычки, кавычки внутри значения удваиваются,
/// поэтому разделители и переводы строк в данных безопасны.
pub fn to_csv<T: CsvExportable>(items: &[T], delimiter: u8) -> ServiceResult<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .quote_style(csv::QuoteStyle::Always)
        .double_quote(true)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(T::headers())?;
    for item in items {
        writer.write_record(item.to_csv_row())?;
    }

    writer
        .into_inner()
        .map_err(|e| ServiceError::Transport(format!("csv: {}", e.error())))
}

/// JSON: массив сериализованных записей
pub fn to_json<T: Serialize>(items: &[T]) -> ServiceResult<Vec<u8>> {
    Ok(serde_json::to_vec_pretty(items)?)
}

pub fn build_blob<T>(
    items: &[T],
    format: ExportFormat,
    delimiter: u8,
    base_name: &str,
) -> ServiceResult<ExportBlob>
where
    T: CsvExportable + Serialize,
{
    let bytes = match format {
        ExportFormat::Csv => to_csv(items, delimiter)?,
        ExportFormat::Json => to_json(items)?,
    };
    let stamp = chrono::Utc::now().format("%Y%m%d_%H%M%S");

    Ok(ExportBlob {
        bytes,
        mime_type: format.mime_type(),
        file_name: format!("{}_{}.{}", base_name, stamp, format.extension()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Line {
        name: String,
        note: String,
    }

    impl CsvExportable for Line {
        fn headers() -> &'static [&'static str] {
            &["name", "note"]
        }

        fn to_csv_row(&self) -> Vec<String> {
            vec![self.name.clone(), self.note.clone()]
        }
    }

    fn line(name: &str, note: &str) -> Line {
        Line {
            name: name.to_string(),
            note: note.to_string(),
        }
    }

    #[test]
    fn test_csv_quotes_every_field_and_doubles_quotes() {
        let items = vec![line("Acme, Inc.", "say \"hi\""), line("Plain", "")];
        let text = String::from_utf8(to_csv(&items, b',').unwrap()).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "\"name\",\"note\"");
        assert_eq!(lines[1], "\"Acme, Inc.\",\"say \"\"hi\"\"\"");
        assert_eq!(lines[2], "\"Plain\",\"\"");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_csv_keeps_line_breaks_inside_quotes() {
        let items = vec![line("Multi\nline", "x")];
        let bytes = to_csv(&items, b';').unwrap();

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b';')
            .from_reader(bytes.as_slice());
        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "Multi\nline");
    }

    #[test]
    fn test_blob_carries_mime_type_and_name() {
        let items = vec![line("A", "B")];
        let csv_blob = build_blob(&items, ExportFormat::Csv, b',', "a001_company").unwrap();
        assert_eq!(csv_blob.mime_type, "text/csv;charset=utf-8");
        assert!(csv_blob.file_name.starts_with("a001_company_"));
        assert!(csv_blob.file_name.ends_with(".csv"));

        let json_blob = build_blob(&items, ExportFormat::Json, b',', "a001_company").unwrap();
        assert_eq!(json_blob.mime_type, "application/json");
        let parsed: serde_json::Value = serde_json::from_slice(&json_blob.bytes).unwrap();
        assert_eq!(parsed[0]["name"], "A");
    }
}
