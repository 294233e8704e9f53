//! Paginated filter service
//!
//! Общая часть сервисов справочников: список с фильтрами и страницами,
//! чтение по ID, вставка/изменение/удаление и выгрузка. Доменные сервисы
//! добавляют к нему создание из DTO и частичное обновление со своими правилами.

use std::sync::Arc;

use contracts::domain::common::{AggregateId, AggregateRoot};
use contracts::shared::master_data::{ExportFormat, FilterQuery, ListFilters, PageResult};
use serde::Serialize;

use crate::shared::config::Config;
use crate::shared::data::MemoryStore;
use crate::shared::error::{ServiceError, ServiceResult};
use crate::shared::export::{self, CsvExportable, ExportBlob};
use crate::shared::filtering::{self, Filterable};
use crate::shared::latency::{Latency, NoLatency};
use crate::shared::paging;

/// Параметры выгрузки, взятые из конфигурации
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExportSettings {
    pub max_records: usize,
    pub delimiter: u8,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            max_records: 10_000,
            delimiter: b',',
        }
    }
}

impl ExportSettings {
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        Ok(Self {
            max_records: config.export.max_records.max(1),
            delimiter: config.export.delimiter_byte()?,
        })
    }
}

pub struct EntityService<T> {
    store: MemoryStore<T>,
    latency: Arc<dyn Latency>,
    export: ExportSettings,
}

impl<T> Clone for EntityService<T> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            latency: Arc::clone(&self.latency),
            export: self.export,
        }
    }
}

impl<T> EntityService<T>
where
    T: AggregateRoot + Filterable + CsvExportable + Serialize + Clone,
    T::Id: AggregateId,
{
    pub fn new(store: MemoryStore<T>, latency: Arc<dyn Latency>, export: ExportSettings) -> Self {
        Self {
            store,
            latency,
            export,
        }
    }

    /// Сервис без задержки с пустым хранилищем
    pub fn in_memory() -> Self {
        Self::new(MemoryStore::new(), Arc::new(NoLatency), ExportSettings::default())
    }

    pub fn store(&self) -> &MemoryStore<T> {
        &self.store
    }

    pub async fn list(&self, query: &FilterQuery) -> ServiceResult<PageResult<T>> {
        paging::validate_page(query.page, query.limit)?;
        self.latency.delay().await;

        let filtered = self
            .store
            .read(|items| filtering::apply_filters(items, &query.filters))??;
        let page = paging::paginate(filtered, query.page, query.limit)?;

        tracing::debug!(
            "{} list: page={} limit={} total={}",
            T::full_name(),
            page.page,
            page.limit,
            page.total
        );
        Ok(page)
    }

    pub async fn get_by_id(&self, id: &str) -> ServiceResult<Option<T>> {
        self.latency.delay().await;
        self.store.find_by_id(id)
    }

    /// Вставить новую запись в начало коллекции
    ///
    /// `check` вызывается под блокировкой с текущей коллекцией (проверки уникальности).
    pub async fn insert_with<F>(&self, record: T, check: F) -> ServiceResult<T>
    where
        F: FnOnce(&[T], &T) -> ServiceResult<()>,
    {
        self.latency.delay().await;

        let id = record.id().as_string();
        self.store.write(|items| {
            if MemoryStore::<T>::position_of(items, &id).is_some() {
                return Err(ServiceError::duplicate("id", id.clone()));
            }
            check(items.as_slice(), &record)?;
            items.insert(0, record.clone());
            Ok(())
        })??;

        tracing::info!("{} created: {}", T::full_name(), id);
        Ok(record)
    }

    pub async fn insert(&self, record: T) -> ServiceResult<T> {
        self.insert_with(record, |_, _| Ok(())).await
    }

    /// Изменить запись по ID
    ///
    /// `apply` работает с копией записи; если он вернул ошибку, коллекция не меняется.
    /// После успешного изменения обновляется `updated_at` и растёт `version`.
    pub async fn modify<F>(&self, id: &str, apply: F) -> ServiceResult<T>
    where
        F: FnOnce(&mut T, &[T]) -> ServiceResult<()>,
    {
        self.latency.delay().await;

        let updated = self.store.write(|items| {
            let pos = MemoryStore::<T>::position_of(items, id)
                .ok_or_else(|| ServiceError::not_found(T::element_name(), id))?;
            let mut updated = items[pos].clone();
            apply(&mut updated, items.as_slice())?;

            let metadata = updated.metadata_mut();
            metadata.touch();
            metadata.increment_version();

            items[pos] = updated.clone();
            Ok::<T, ServiceError>(updated)
        })?;

        match updated {
            Ok(record) => {
                tracing::info!("{} updated: {}", T::full_name(), id);
                Ok(record)
            }
            Err(e) => {
                tracing::warn!("{} update of {} rejected: {}", T::full_name(), id, e);
                Err(e)
            }
        }
    }

    pub async fn delete(&self, id: &str) -> ServiceResult<()> {
        self.latency.delay().await;

        let removed = self
            .store
            .write(|items| MemoryStore::<T>::position_of(items, id).map(|pos| items.remove(pos)))?;

        match removed {
            Some(_) => {
                tracing::info!("{} deleted: {}", T::full_name(), id);
                Ok(())
            }
            None => {
                tracing::warn!("{} delete: {} not found", T::full_name(), id);
                Err(ServiceError::not_found(T::element_name(), id))
            }
        }
    }

    /// Выгрузить все подходящие под фильтры записи
    pub async fn export(&self, filters: &ListFilters, format: ExportFormat) -> ServiceResult<ExportBlob> {
        let query = FilterQuery::new(1, self.export.max_records).with_filters(filters.clone());
        let page = self.list(&query).await?;

        if page.total > page.data.len() {
            tracing::warn!(
                "{} export truncated: {} of {} records",
                T::full_name(),
                page.data.len(),
                page.total
            );
        }

        let blob = export::build_blob(&page.data, format, self.export.delimiter, &T::full_name())?;
        tracing::info!(
            "{} exported {} records as {:?} ({} bytes)",
            T::full_name(),
            page.data.len(),
            format,
            blob.bytes.len()
        );
        Ok(blob)
    }
}

/// Бизнес-код для записи без кода: `PREFIX-XXXXXXXX`
pub fn generate_code(prefix: &str) -> String {
    let id = uuid::Uuid::new_v4().simple().to_string();
    format!("{}-{}", prefix, id[..8].to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_company::aggregate::Company;
    use std::sync::Mutex;

    #[test]
    fn test_generate_code_shape() {
        let code = generate_code("CMP");
        assert!(code.starts_with("CMP-"));
        assert_eq!(code.len(), "CMP-".len() + 8);
        assert_ne!(generate_code("CMP"), code);
    }

    #[test]
    fn test_export_settings_from_config() {
        let mut config = crate::shared::config::default_config();
        config.export.csv_delimiter = ';';
        config.export.max_records = 0;

        let settings = ExportSettings::from_config(&config).unwrap();
        assert_eq!(settings.delimiter, b';');
        assert_eq!(settings.max_records, 1);
    }

    struct CapturedLog {
        records: Mutex<Vec<(log::Level, String)>>,
    }

    impl log::Log for CapturedLog {
        fn enabled(&self, _: &log::Metadata) -> bool {
            true
        }

        fn log(&self, record: &log::Record) {
            if let Ok(mut records) = self.records.lock() {
                records.push((record.level(), record.args().to_string()));
            }
        }

        fn flush(&self) {}
    }

    static CAPTURED: CapturedLog = CapturedLog {
        records: Mutex::new(Vec::new()),
    };

    #[tokio::test]
    async fn test_events_reach_log_without_subscriber() {
        // так работает wasm-сборка: подписчика tracing нет, логгер только `log`
        let _ = log::set_logger(&CAPTURED);
        log::set_max_level(log::LevelFilter::Trace);

        let service = EntityService::<Company>::in_memory();
        let result = service.delete("ghost-record").await;
        assert!(matches!(result, Err(ServiceError::NotFound { .. })));

        let records = CAPTURED.records.lock().unwrap();
        assert!(records
            .iter()
            .any(|(level, msg)| *level == log::Level::Warn && msg.contains("ghost-record not found")));
    }
}
