use serde::{Deserialize, Serialize};

/// Опция выпадающего списка справочника
///
/// `value` — уникальный идентификатор записи, `label` — отображаемое имя.
/// `extra` несёт типизированные поля конкретного справочника
/// (например, email компании или артикул товара).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption<X = ()> {
    pub value: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub extra: X,
}

impl<X> SelectOption<X> {
    pub fn new(value: impl Into<String>, label: impl Into<String>, extra: X) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            description: None,
            extra,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        let description = description.into();
        self.description = if description.trim().is_empty() {
            None
        } else {
            Some(description)
        };
        self
    }
}

impl SelectOption<()> {
    /// Опция без дополнительных полей
    pub fn plain(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(value, label, ())
    }
}
