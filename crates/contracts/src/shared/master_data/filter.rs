use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Набор фильтров списка
///
/// Все условия объединяются через AND: `search` ищет подстроку без учёта
/// регистра по текстовым полям сущности, `equals` требует точного
/// совпадения значения поля.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ListFilters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub equals: BTreeMap<String, String>,
}

impl ListFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = Some(text.into());
        self
    }

    pub fn eq(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.equals.insert(field.into(), value.into());
        self
    }

    /// Поисковая строка без пробелов по краям; пустая строка означает отсутствие поиска
    pub fn search_term(&self) -> Option<&str> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

/// Запрос страницы списка
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterQuery {
    /// Номер страницы, начиная с 1
    pub page: usize,
    /// Размер страницы
    pub limit: usize,
    #[serde(default)]
    pub filters: ListFilters,
}

impl FilterQuery {
    pub fn new(page: usize, limit: usize) -> Self {
        Self {
            page,
            limit,
            filters: ListFilters::default(),
        }
    }

    pub fn with_filters(mut self, filters: ListFilters) -> Self {
        self.filters = filters;
        self
    }
}

impl Default for FilterQuery {
    fn default() -> Self {
        Self::new(1, 20)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_term_trims_and_drops_blank() {
        assert_eq!(ListFilters::new().search("  acme ").search_term(), Some("acme"));
        assert_eq!(ListFilters::new().search("   ").search_term(), None);
        assert_eq!(ListFilters::new().search_term(), None);
    }
}
