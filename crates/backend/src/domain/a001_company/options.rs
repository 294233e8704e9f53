use contracts::domain::a001_company::aggregate::Company;
use contracts::shared::master_data::SelectOption;
use serde::{Deserialize, Serialize};

use crate::shared::options::{ActiveOptionProvider, SelectableRecord};

/// Дополнительные поля опции компании
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyOptionExtra {
    pub code: String,
    pub email: String,
    pub city: String,
}

pub type CompanyOption = SelectOption<CompanyOptionExtra>;

pub type CompanyOptionProvider = ActiveOptionProvider<Company>;

impl SelectableRecord for Company {
    type Extra = CompanyOptionExtra;

    fn to_option(&self) -> CompanyOption {
        SelectOption::new(
            self.to_string_id(),
            self.name().to_string(),
            CompanyOptionExtra {
                code: self.base.code.clone(),
                email: self.email.clone(),
                city: self.city.clone(),
            },
        )
        .with_description(self.city.clone())
    }
}
