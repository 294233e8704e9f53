use crate::domain::common::{
    AggregateId, AggregateRoot, BaseAggregate, EntityMetadata, FieldError, RecordStatus,
};
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================
crate::uuid_aggregate_id!(ProductId);

// ============================================================================
// Aggregate Root
// ============================================================================
/// Товар. Бизнес-код агрегата является артикулом (SKU) и уникален.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(flatten)]
    pub base: BaseAggregate<ProductId>,

    #[serde(default)]
    pub category: String,
    #[serde(rename = "unitPrice", default)]
    pub unit_price: f64,
    #[serde(default)]
    pub unit: String,

    #[serde(default)]
    pub status: RecordStatus,
}

impl Product {
    pub fn new_for_insert(dto: ProductDto) -> Self {
        let mut base = BaseAggregate::new(ProductId::new_v4(), dto.sku, dto.description);
        base.comment = dto.comment;

        Self {
            base,
            category: dto.category.unwrap_or_default(),
            unit_price: dto.unit_price.unwrap_or_default(),
            unit: dto.unit.unwrap_or_else(|| "pcs".to_string()),
            status: dto.status.unwrap_or_default(),
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn sku(&self) -> &str {
        &self.base.code
    }

    pub fn name(&self) -> &str {
        &self.base.description
    }

    pub fn apply_patch(&mut self, patch: &ProductPatch) {
        if let Some(sku) = &patch.sku {
            self.base.code = sku.clone();
        }
        if let Some(description) = &patch.description {
            self.base.description = description.clone();
        }
        if let Some(category) = &patch.category {
            self.category = category.clone();
        }
        if let Some(unit_price) = patch.unit_price {
            self.unit_price = unit_price;
        }
        if let Some(unit) = &patch.unit {
            self.unit = unit.clone();
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(comment) = &patch.comment {
            self.base.set_comment(comment.clone());
        }
    }

    pub fn validate(&self) -> Result<(), FieldError> {
        if self.base.description.trim().is_empty() {
            return Err(FieldError::required("name"));
        }
        if self.base.code.trim().is_empty() {
            return Err(FieldError::required("sku"));
        }
        if !self.unit_price.is_finite() || self.unit_price < 0.0 {
            return Err(FieldError::new(
                "unit_price",
                "unit price must be a non-negative number",
            ));
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

impl AggregateRoot for Product {
    type Id = ProductId;

    fn id(&self) -> Self::Id {
        self.base.id
    }

    fn code(&self) -> &str {
        &self.base.code
    }

    fn description(&self) -> &str {
        &self.base.description
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.base.metadata
    }

    fn metadata_mut(&mut self) -> &mut EntityMetadata {
        &mut self.base.metadata
    }

    fn aggregate_index() -> &'static str {
        "a003"
    }

    fn collection_name() -> &'static str {
        "product"
    }

    fn element_name() -> &'static str {
        "Product"
    }

    fn list_name() -> &'static str {
        "Products"
    }
}

// ============================================================================
// DTO
// ============================================================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ProductDto {
    pub sku: String,
    pub description: String,
    pub category: Option<String>,
    #[serde(rename = "unitPrice")]
    pub unit_price: Option<f64>,
    pub unit: Option<String>,
    pub status: Option<RecordStatus>,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ProductPatch {
    pub sku: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    #[serde(rename = "unitPrice")]
    pub unit_price: Option<f64>,
    pub unit: Option<String>,
    pub status: Option<RecordStatus>,
    pub comment: Option<Option<String>>,
}
