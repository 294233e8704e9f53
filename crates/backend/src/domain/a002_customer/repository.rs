use contracts::domain::a002_customer::aggregate::Customer;

use crate::shared::data::MemoryStore;
use crate::shared::filtering::Filterable;

pub type CustomerRepository = MemoryStore<Customer>;

impl Filterable for Customer {
    fn filter_fields() -> &'static [&'static str] {
        &["status", "company_id", "code"]
    }

    fn field_value(&self, field: &str) -> Option<String> {
        match field {
            "status" => Some(self.status.as_str().to_string()),
            "company_id" => Some(self.company_id.clone().unwrap_or_default()),
            "code" => Some(self.base.code.clone()),
            _ => None,
        }
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.name(),
            self.base.code.as_str(),
            self.email.as_str(),
            self.phone.as_str(),
        ]
    }
}
