use contracts::domain::common::FieldError;
use thiserror::Error;

/// Ошибки сервисов справочников
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// Обязательное поле не заполнено или заполнено неверно
    #[error("Validation failed for '{field}': {message}")]
    Validation { field: String, message: String },

    /// Запись с таким идентификатором не найдена
    #[error("{entity} '{id}' not found")]
    NotFound { entity: String, id: String },

    /// Сбой хранилища или транспорта
    #[error("Transport error: {0}")]
    Transport(String),

    /// Нарушение уникальности
    #[error("Duplicate {field}: '{value}'")]
    Duplicate { field: String, value: String },
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl ServiceError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    pub fn duplicate(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Duplicate {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<FieldError> for ServiceError {
    fn from(e: FieldError) -> Self {
        Self::Validation {
            field: e.field,
            message: e.message,
        }
    }
}

impl From<csv::Error> for ServiceError {
    fn from(e: csv::Error) -> Self {
        Self::Transport(format!("csv: {}", e))
    }
}

impl From<serde_json::Error> for ServiceError {
    fn from(e: serde_json::Error) -> Self {
        Self::Transport(format!("json: {}", e))
    }
}
