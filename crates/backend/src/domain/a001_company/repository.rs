use contracts::domain::a001_company::aggregate::Company;

use crate::shared::data::MemoryStore;
use crate::shared::filtering::Filterable;

pub type CompanyRepository = MemoryStore<Company>;

impl Filterable for Company {
    fn filter_fields() -> &'static [&'static str] {
        &["status", "city", "code", "inn"]
    }

    fn field_value(&self, field: &str) -> Option<String> {
        match field {
            "status" => Some(self.status.as_str().to_string()),
            "city" => Some(self.city.clone()),
            "code" => Some(self.base.code.clone()),
            "inn" => Some(self.inn.clone()),
            _ => None,
        }
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.name(),
            self.base.code.as_str(),
            self.email.as_str(),
            self.city.as_str(),
            self.inn.as_str(),
        ]
    }
}
