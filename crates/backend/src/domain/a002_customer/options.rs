use contracts::domain::a002_customer::aggregate::Customer;
use contracts::shared::master_data::SelectOption;
use serde::{Deserialize, Serialize};

use crate::shared::options::{ActiveOptionProvider, SelectableRecord};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerOptionExtra {
    pub email: String,
    #[serde(rename = "companyId")]
    pub company_id: Option<String>,
}

pub type CustomerOption = SelectOption<CustomerOptionExtra>;

pub type CustomerOptionProvider = ActiveOptionProvider<Customer>;

impl SelectableRecord for Customer {
    type Extra = CustomerOptionExtra;

    fn to_option(&self) -> CustomerOption {
        SelectOption::new(
            self.to_string_id(),
            self.name().to_string(),
            CustomerOptionExtra {
                email: self.email.clone(),
                company_id: self.company_id.clone(),
            },
        )
        .with_description(self.email.clone())
    }
}
