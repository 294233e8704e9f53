use contracts::domain::a003_product::aggregate::Product;
use contracts::shared::master_data::SelectOption;
use serde::{Deserialize, Serialize};

use crate::shared::options::{ActiveOptionProvider, SelectableRecord};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductOptionExtra {
    pub sku: String,
    #[serde(rename = "unitPrice")]
    pub unit_price: f64,
    pub unit: String,
}

pub type ProductOption = SelectOption<ProductOptionExtra>;

pub type ProductOptionProvider = ActiveOptionProvider<Product>;

impl SelectableRecord for Product {
    type Extra = ProductOptionExtra;

    fn to_option(&self) -> ProductOption {
        SelectOption::new(
            self.to_string_id(),
            self.name().to_string(),
            ProductOptionExtra {
                sku: self.sku().to_string(),
                unit_price: self.unit_price,
                unit: self.unit.clone(),
            },
        )
        .with_description(self.sku())
    }
}
