//! Option Provider
//!
//! Поставщик опций для выпадающего списка справочника: по поисковой строке
//! (или без неё) возвращает ограниченный список опций. В опции попадают
//! только активные записи, неактивные остаются доступны лишь в полном списке.

use async_trait::async_trait;
use contracts::domain::common::{AggregateId, AggregateRoot, RecordStatus};
use contracts::shared::master_data::{FilterQuery, ListFilters, SelectOption};
use serde::Serialize;

use crate::shared::error::ServiceResult;
use crate::shared::export::CsvExportable;
use crate::shared::filtering::{Filterable, STATUS_FIELD};
use crate::shared::service::EntityService;

/// Запись, которую можно показать опцией выпадающего списка
pub trait SelectableRecord {
    /// Типизированные дополнительные поля опции
    type Extra: Clone;

    fn to_option(&self) -> SelectOption<Self::Extra>;
}

#[async_trait(?Send)]
pub trait OptionProvider: Send + Sync {
    type Extra;

    /// Опции для поисковой строки; `None` или пустая строка — начальный набор
    async fn load_options(
        &self,
        search: Option<&str>,
    ) -> ServiceResult<Vec<SelectOption<Self::Extra>>>;
}

/// Поставщик активных записей поверх сервиса справочника
pub struct ActiveOptionProvider<T> {
    service: EntityService<T>,
    limit: usize,
}

impl<T> Clone for ActiveOptionProvider<T> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
            limit: self.limit,
        }
    }
}

impl<T> ActiveOptionProvider<T> {
    pub fn new(service: EntityService<T>, limit: usize) -> Self {
        Self {
            service,
            limit: limit.max(1),
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}

#[async_trait(?Send)]
impl<T> OptionProvider for ActiveOptionProvider<T>
where
    T: AggregateRoot + Filterable + CsvExportable + SelectableRecord + Serialize + Clone + Send + Sync,
    T::Id: AggregateId,
{
    type Extra = T::Extra;

    async fn load_options(
        &self,
        search: Option<&str>,
    ) -> ServiceResult<Vec<SelectOption<Self::Extra>>> {
        let mut filters = ListFilters::new().eq(STATUS_FIELD, RecordStatus::Active.as_str());
        if let Some(term) = search.map(str::trim).filter(|s| !s.is_empty()) {
            filters = filters.search(term);
        }

        let query = FilterQuery::new(1, self.limit).with_filters(filters);
        let page = self.service.list(&query).await?;

        tracing::debug!(
            "{} options for {:?}: {} of {}",
            T::full_name(),
            search,
            page.data.len(),
            page.total
        );
        Ok(page.data.iter().map(SelectableRecord::to_option).collect())
    }
}
