use std::sync::Arc;

use contracts::domain::a003_product::aggregate::{Product, ProductDto, ProductPatch};
use contracts::shared::master_data::{ExportFormat, FilterQuery, ListFilters, PageResult};

use super::options::ProductOptionProvider;
use super::repository::{ensure_unique_sku, ProductRepository};
use crate::shared::error::{ServiceError, ServiceResult};
use crate::shared::export::{CsvExportable, ExportBlob};
use crate::shared::format::{format_price, format_timestamp};
use crate::shared::latency::Latency;
use crate::shared::service::{EntityService, ExportSettings};

impl CsvExportable for Product {
    fn headers() -> &'static [&'static str] {
        &[
            "id",
            "sku",
            "name",
            "category",
            "unit_price",
            "unit",
            "status",
            "created_at",
            "updated_at",
        ]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.to_string_id(),
            self.sku().to_string(),
            self.name().to_string(),
            self.category.clone(),
            format_price(self.unit_price),
            self.unit.clone(),
            self.status.as_str().to_string(),
            format_timestamp(&self.base.metadata.created_at),
            format_timestamp(&self.base.metadata.updated_at),
        ]
    }
}

#[derive(Clone)]
pub struct ProductService {
    inner: EntityService<Product>,
}

impl ProductService {
    pub fn new(
        repository: ProductRepository,
        latency: Arc<dyn Latency>,
        export: ExportSettings,
    ) -> Self {
        Self {
            inner: EntityService::new(repository, latency, export),
        }
    }

    pub fn repository(&self) -> &ProductRepository {
        self.inner.store()
    }

    pub async fn list(&self, query: &FilterQuery) -> ServiceResult<PageResult<Product>> {
        self.inner.list(query).await
    }

    pub async fn get_by_id(&self, id: &str) -> ServiceResult<Option<Product>> {
        self.inner.get_by_id(id).await
    }

    /// Создать товар; артикул обязателен и уникален
    pub async fn create(&self, dto: ProductDto) -> ServiceResult<Product> {
        let mut aggregate = Product::new_for_insert(dto);

        aggregate.validate().map_err(|e| {
            tracing::warn!("Product validation failed: {}", e);
            ServiceError::from(e)
        })?;
        aggregate.before_write();

        self.inner
            .insert_with(aggregate, |items, candidate| {
                ensure_unique_sku(items, candidate)
            })
            .await
    }

    pub async fn update(&self, id: &str, patch: ProductPatch) -> ServiceResult<Product> {
        self.inner
            .modify(id, |product, items| {
                product.apply_patch(&patch);
                product.validate()?;
                ensure_unique_sku(items, product)
            })
            .await
    }

    pub async fn delete(&self, id: &str) -> ServiceResult<()> {
        self.inner.delete(id).await
    }

    pub async fn export(
        &self,
        filters: &ListFilters,
        format: ExportFormat,
    ) -> ServiceResult<ExportBlob> {
        self.inner.export(filters, format).await
    }

    pub fn option_provider(&self, limit: usize) -> ProductOptionProvider {
        ProductOptionProvider::new(self.inner.clone(), limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::seed;
    use crate::shared::latency::NoLatency;
    use crate::shared::options::OptionProvider;
    use contracts::domain::common::RecordStatus;

    fn seeded() -> ProductService {
        ProductService::new(
            ProductRepository::from_vec(seed::products()),
            Arc::new(NoLatency),
            ExportSettings::default(),
        )
    }

    fn dto(sku: &str, name: &str) -> ProductDto {
        ProductDto {
            sku: sku.to_string(),
            description: name.to_string(),
            category: Some("Hardware".to_string()),
            unit_price: Some(1.5),
            ..ProductDto::default()
        }
    }

    #[tokio::test]
    async fn test_duplicate_sku_is_rejected_on_create() {
        let service = seeded();
        let err = service.create(dto("sku-1001", "Clone")).await.unwrap_err();

        assert_eq!(err, ServiceError::duplicate("sku", "sku-1001"));
        assert_eq!(service.repository().len().unwrap(), 10);
    }

    #[tokio::test]
    async fn test_duplicate_sku_is_rejected_on_update() {
        let service = seeded();
        let created = service.create(dto("SKU-9000", "Washer M8")).await.unwrap();
        let before = service.repository().snapshot().unwrap();

        let err = service
            .update(
                &created.to_string_id(),
                ProductPatch {
                    sku: Some("SKU-2001".to_string()),
                    ..ProductPatch::default()
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::Duplicate { .. }));
        assert_eq!(service.repository().snapshot().unwrap(), before);
    }

    #[tokio::test]
    async fn test_update_keeping_own_sku_is_allowed() {
        let service = seeded();
        let id = service.repository().snapshot().unwrap()[0].to_string_id();

        let updated = service
            .update(
                &id,
                ProductPatch {
                    unit_price: Some(2.99),
                    ..ProductPatch::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.unit_price, 2.99);
    }

    #[tokio::test]
    async fn test_negative_price_is_validation_error() {
        let service = seeded();
        let mut input = dto("SKU-9100", "Broken");
        input.unit_price = Some(-1.0);

        let err = service.create(input).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation { ref field, .. } if field == "unit_price"));
    }

    #[tokio::test]
    async fn test_category_filter_and_search() {
        let service = seeded();
        let filters = ListFilters::new().eq("category", "job work").search("laser");
        let found = service
            .list(&FilterQuery::new(1, 10).with_filters(filters))
            .await
            .unwrap();
        assert_eq!(found.total, 1);
        assert_eq!(found.data[0].sku(), "SKU-3002");
    }

    #[tokio::test]
    async fn test_options_carry_sku_and_price() {
        let service = seeded();
        let provider = service.option_provider(10);

        let options = provider.load_options(Some("brass")).await.unwrap();
        assert!(options.is_empty(), "inactive product must not be offered");

        let options = provider.load_options(Some("bracket")).await.unwrap();
        assert_eq!(options.len(), 2);
        assert_eq!(options[0].extra.sku, "SKU-1001");
        assert_eq!(options[0].extra.unit_price, 2.45);
        assert_eq!(options[0].description.as_deref(), Some("SKU-1001"));
    }

    #[tokio::test]
    async fn test_csv_export_escapes_quotes() {
        let service = seeded();
        let blob = service
            .export(&ListFilters::new().eq("category", "PPE"), ExportFormat::Csv)
            .await
            .unwrap();
        let text = blob.as_text();
        assert!(text.contains("\"Ear protection \"\"Quiet\"\"\""));
        assert!(text.contains("\"4.80\""));
        assert_eq!(text.lines().count(), 3);
    }

    #[tokio::test]
    async fn test_create_round_trip() {
        let service = seeded();
        let input = ProductDto {
            unit: Some("box".to_string()),
            status: Some(RecordStatus::Suspended),
            ..dto("SKU-6001", "Cable ties 200mm")
        };

        let created = service.create(input.clone()).await.unwrap();
        let loaded = service
            .get_by_id(&created.to_string_id())
            .await
            .unwrap()
            .unwrap();

        assert_eq!(loaded, created);
        assert_eq!(loaded.sku(), "SKU-6001");
        assert_eq!(loaded.base.description, input.description);
        assert_eq!(Some(loaded.category.clone()), input.category);
        assert_eq!(Some(loaded.unit_price), input.unit_price);
        assert_eq!(loaded.unit, "box");
        assert_eq!(loaded.status, RecordStatus::Suspended);
        assert_eq!(service.repository().len().unwrap(), seed::products().len() + 1);
    }
}
