//! Фильтрация списков справочников
//!
//! Условия `ListFilters` объединяются через AND. Поиск — подстрока без учёта
//! регистра по набору текстовых полей записи, остальные условия — точное
//! (без учёта регистра) совпадение значения поля.

use contracts::shared::master_data::ListFilters;

use crate::shared::error::{ServiceError, ServiceResult};

/// Поле статуса записи, общее для всех справочников
pub const STATUS_FIELD: &str = "status";

/// Trait для записей, поддерживающих фильтрацию списка
pub trait Filterable {
    /// Поля, доступные для фильтра на равенство
    fn filter_fields() -> &'static [&'static str];

    /// Значение поля для фильтра на равенство
    fn field_value(&self, field: &str) -> Option<String>;

    /// Текстовые поля, по которым работает поиск
    fn search_fields(&self) -> Vec<&str>;

    /// Проверяет, соответствует ли запись поисковому запросу
    fn matches_search(&self, needle_lower: &str) -> bool {
        self.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(needle_lower))
    }
}

/// Проверяет, что все поля фильтров существуют у сущности
pub fn validate_filters<T: Filterable>(filters: &ListFilters) -> ServiceResult<()> {
    for field in filters.equals.keys() {
        if !T::filter_fields().contains(&field.as_str()) {
            return Err(ServiceError::validation(
                field.clone(),
                format!("unknown filter field '{}'", field),
            ));
        }
    }
    Ok(())
}

/// Соответствует ли запись всем условиям
///
/// Пустое значение фильтра означает "без условия".
pub fn matches<T: Filterable>(item: &T, filters: &ListFilters) -> bool {
    let equals_ok = filters
        .equals
        .iter()
        .filter(|(_, expected)| !expected.trim().is_empty())
        .all(|(field, expected)| {
            item.field_value(field)
                .map(|actual| actual.to_lowercase() == expected.trim().to_lowercase())
                .unwrap_or(false)
        });
    if !equals_ok {
        return false;
    }

    match filters.search_term() {
        Some(term) => item.matches_search(&term.to_lowercase()),
        None => true,
    }
}

/// Отфильтровать коллекцию, сохраняя порядок
pub fn apply_filters<T: Filterable + Clone>(
    items: &[T],
    filters: &ListFilters,
) -> ServiceResult<Vec<T>> {
    validate_filters::<T>(filters)?;
    Ok(items
        .iter()
        .filter(|item| matches(*item, filters))
        .cloned()
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row {
        name: &'static str,
        email: &'static str,
        status: &'static str,
    }

    impl Filterable for Row {
        fn filter_fields() -> &'static [&'static str] {
            &["status"]
        }

        fn field_value(&self, field: &str) -> Option<String> {
            match field {
                "status" => Some(self.status.to_string()),
                _ => None,
            }
        }

        fn search_fields(&self) -> Vec<&str> {
            vec![self.name, self.email]
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "Northwind", email: "info@northwind.io", status: "active" },
            Row { name: "Contoso", email: "sales@contoso.com", status: "inactive" },
            Row { name: "Fabrikam", email: "hello@NORTH.example", status: "active" },
        ]
    }

    #[test]
    fn test_search_is_case_insensitive_across_fields() {
        let found = apply_filters(&rows(), &ListFilters::new().search("NORTH")).unwrap();
        let names: Vec<_> = found.iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["Northwind", "Fabrikam"]);
    }

    #[test]
    fn test_conditions_are_combined_with_and() {
        let filters = ListFilters::new().search("o").eq("status", "inactive");
        let found = apply_filters(&rows(), &filters).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Contoso");
    }

    #[test]
    fn test_blank_values_are_ignored() {
        let filters = ListFilters::new().search("  ").eq("status", "");
        assert_eq!(apply_filters(&rows(), &filters).unwrap(), rows());
    }

    #[test]
    fn test_equals_ignores_case_for_cyrillic() {
        let items = vec![
            Row { name: "Ромашка", email: "info@romashka.example", status: "Архив" },
            Row { name: "Василёк", email: "info@vasilek.example", status: "active" },
        ];

        let by_status = apply_filters(&items, &ListFilters::new().eq("status", " архив ")).unwrap();
        assert_eq!(by_status.len(), 1);
        assert_eq!(by_status[0].name, "Ромашка");

        let by_search = apply_filters(&items, &ListFilters::new().search("РОМАШКА")).unwrap();
        assert_eq!(by_search, by_status);
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let err = apply_filters(&rows(), &ListFilters::new().eq("colour", "red")).unwrap_err();
        assert!(matches!(err, ServiceError::Validation { ref field, .. } if field == "colour"));
    }
}
