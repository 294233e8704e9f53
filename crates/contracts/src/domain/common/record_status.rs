use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Статус записи справочника
///
/// В списках выбора доступны только активные записи, остальные видны
/// лишь в полном постраничном списке.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    #[default]
    Active,
    Inactive,
    Suspended,
}

impl RecordStatus {
    pub const ALL: [RecordStatus; 3] = [
        RecordStatus::Active,
        RecordStatus::Inactive,
        RecordStatus::Suspended,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RecordStatus::Active => "active",
            RecordStatus::Inactive => "inactive",
            RecordStatus::Suspended => "suspended",
        }
    }
}

impl FromStr for RecordStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "active" => Ok(RecordStatus::Active),
            "inactive" => Ok(RecordStatus::Inactive),
            "suspended" => Ok(RecordStatus::Suspended),
            other => Err(format!("Unknown status: {}", other)),
        }
    }
}

impl std::fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_status_filter_value() {
        assert_eq!(" Active ".parse::<RecordStatus>(), Ok(RecordStatus::Active));
        assert_eq!("suspended".parse::<RecordStatus>(), Ok(RecordStatus::Suspended));
        // пустое значение фильтра "Все" не является статусом
        assert!("".parse::<RecordStatus>().is_err());
        assert!(RecordStatus::ALL
            .iter()
            .all(|s| s.as_str().parse::<RecordStatus>() == Ok(*s)));
    }
}
