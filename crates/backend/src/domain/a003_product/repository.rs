use contracts::domain::a003_product::aggregate::Product;
use contracts::domain::common::AggregateId;

use crate::shared::data::MemoryStore;
use crate::shared::error::{ServiceError, ServiceResult};
use crate::shared::filtering::Filterable;

pub type ProductRepository = MemoryStore<Product>;

impl Filterable for Product {
    fn filter_fields() -> &'static [&'static str] {
        &["status", "category", "unit", "sku"]
    }

    fn field_value(&self, field: &str) -> Option<String> {
        match field {
            "status" => Some(self.status.as_str().to_string()),
            "category" => Some(self.category.clone()),
            "unit" => Some(self.unit.clone()),
            "sku" => Some(self.base.code.clone()),
            _ => None,
        }
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.name(),
            self.base.code.as_str(),
            self.category.as_str(),
        ]
    }
}

/// Артикул должен быть уникален (без учёта регистра) среди остальных товаров
pub fn ensure_unique_sku(items: &[Product], candidate: &Product) -> ServiceResult<()> {
    let sku = candidate.sku().trim();
    let taken = items.iter().any(|p| {
        p.base.id.as_string() != candidate.base.id.as_string()
            && p.sku().trim().eq_ignore_ascii_case(sku)
    });
    if taken {
        return Err(ServiceError::duplicate("sku", sku));
    }
    Ok(())
}
