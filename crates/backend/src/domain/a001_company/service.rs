use std::sync::Arc;

use contracts::domain::a001_company::aggregate::{Company, CompanyDto, CompanyPatch};
use contracts::shared::master_data::{ExportFormat, FilterQuery, ListFilters, PageResult};

use super::options::CompanyOptionProvider;
use super::repository::CompanyRepository;
use crate::shared::error::{ServiceError, ServiceResult};
use crate::shared::export::{CsvExportable, ExportBlob};
use crate::shared::format::format_timestamp;
use crate::shared::latency::Latency;
use crate::shared::service::{generate_code, EntityService, ExportSettings};

impl CsvExportable for Company {
    fn headers() -> &'static [&'static str] {
        &[
            "id",
            "code",
            "name",
            "email",
            "phone",
            "city",
            "inn",
            "status",
            "created_at",
            "updated_at",
        ]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.to_string_id(),
            self.base.code.clone(),
            self.name().to_string(),
            self.email.clone(),
            self.phone.clone(),
            self.city.clone(),
            self.inn.clone(),
            self.status.as_str().to_string(),
            format_timestamp(&self.base.metadata.created_at),
            format_timestamp(&self.base.metadata.updated_at),
        ]
    }
}

#[derive(Clone)]
pub struct CompanyService {
    inner: EntityService<Company>,
}

impl CompanyService {
    pub fn new(
        repository: CompanyRepository,
        latency: Arc<dyn Latency>,
        export: ExportSettings,
    ) -> Self {
        Self {
            inner: EntityService::new(repository, latency, export),
        }
    }

    pub fn repository(&self) -> &CompanyRepository {
        self.inner.store()
    }

    pub async fn list(&self, query: &FilterQuery) -> ServiceResult<PageResult<Company>> {
        self.inner.list(query).await
    }

    pub async fn get_by_id(&self, id: &str) -> ServiceResult<Option<Company>> {
        self.inner.get_by_id(id).await
    }

    pub async fn create(&self, dto: CompanyDto) -> ServiceResult<Company> {
        let code = dto
            .code
            .clone()
            .filter(|c| !c.trim().is_empty())
            .unwrap_or_else(|| generate_code("CMP"));
        let mut aggregate = Company::new_for_insert(code, dto);

        aggregate.validate().map_err(|e| {
            tracing::warn!("Company validation failed: {}", e);
            ServiceError::from(e)
        })?;
        aggregate.before_write();

        self.inner.insert(aggregate).await
    }

    pub async fn update(&self, id: &str, patch: CompanyPatch) -> ServiceResult<Company> {
        self.inner
            .modify(id, |company, _| {
                company.apply_patch(&patch);
                company.validate()?;
                Ok(())
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

    pub fn option_provider(&self, limit: usize) -> CompanyOptionProvider {
        CompanyOptionProvider::new(self.inner.clone(), limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::seed;
    use crate::shared::latency::NoLatency;
    use crate::shared::options::OptionProvider;
    use contracts::domain::common::RecordStatus;

    fn service_with(items: Vec<Company>) -> CompanyService {
        CompanyService::new(
            CompanyRepository::from_vec(items),
            Arc::new(NoLatency),
            ExportSettings::default(),
        )
    }

    fn seeded() -> CompanyService {
        service_with(seed::companies())
    }

    fn dto(name: &str) -> CompanyDto {
        CompanyDto {
            description: name.to_string(),
            email: Some("team@example.com".to_string()),
            city: Some("Oslo".to_string()),
            ..CompanyDto::default()
        }
    }

    #[tokio::test]
    async fn test_list_page_lengths() {
        let service = seeded();
        let total = 15usize;
        for limit in [1usize, 4, 7, 15, 20] {
            for page in 1..=5usize {
                let result = service.list(&FilterQuery::new(page, limit)).await.unwrap();
                let expected = limit.min(total.saturating_sub((page - 1) * limit));
                assert_eq!(result.data.len(), expected);
                assert_eq!(result.total, total);
                assert_eq!(result.total_pages, total.div_ceil(limit));
            }
        }
    }

    #[tokio::test]
    async fn test_empty_repository_has_zero_pages() {
        let service = service_with(Vec::new());
        let result = service.list(&FilterQuery::new(1, 10)).await.unwrap();
        assert_eq!(result.total, 0);
        assert_eq!(result.total_pages, 0);
        assert!(result.data.is_empty());
    }

    #[tokio::test]
    async fn test_invalid_page_is_validation_error() {
        let service = seeded();
        let err = service.list(&FilterQuery::new(0, 10)).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_search_result_is_subset_of_unfiltered_page() {
        let service = seeded();
        let all = service.list(&FilterQuery::new(1, 100)).await.unwrap();
        let query = FilterQuery::new(1, 100).with_filters(ListFilters::new().search("WOOD"));
        let found = service.list(&query).await.unwrap();

        assert_eq!(found.total, 1);
        assert!(found.data.iter().all(|c| all.data.contains(c)));
        assert_eq!(found.data[0].base.description, "Woodgrove Bank");
    }

    #[tokio::test]
    async fn test_status_and_city_filters_combine() {
        let service = seeded();
        let filters = ListFilters::new().eq("status", "inactive").eq("city", "boston");
        let found = service
            .list(&FilterQuery::new(1, 10).with_filters(filters))
            .await
            .unwrap();
        assert_eq!(found.total, 1);
        assert_eq!(found.data[0].base.description, "Margie's Travel");
    }

    #[tokio::test]
    async fn test_get_by_id_is_idempotent() {
        let service = seeded();
        let id = seed_first_id(&service);

        let first = service.get_by_id(&id).await.unwrap();
        let second = service.get_by_id(&id).await.unwrap();
        assert!(first.is_some());
        assert_eq!(first, second);
        assert_eq!(service.get_by_id("no-such-id").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_create_round_trip_and_newest_first() {
        let service = seeded();
        let input = dto("Graphic Design Institute");

        let created = service.create(input.clone()).await.unwrap();
        let loaded = service
            .get_by_id(&created.to_string_id())
            .await
            .unwrap()
            .unwrap();

        assert_eq!(loaded, created);
        assert_eq!(loaded.base.description, input.description);
        assert_eq!(Some(loaded.email.clone()), input.email);
        assert_eq!(Some(loaded.city.clone()), input.city);
        assert_eq!(loaded.status, RecordStatus::Active);
        assert!(loaded.base.code.starts_with("CMP-"));
        assert_eq!(loaded.base.metadata.version, 0);

        let first_page = service.list(&FilterQuery::new(1, 1)).await.unwrap();
        assert_eq!(first_page.data[0].to_string_id(), created.to_string_id());
        assert_eq!(first_page.total, 16);
    }

    #[tokio::test]
    async fn test_create_requires_name() {
        let service = seeded();
        let err = service.create(dto("   ")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation { ref field, .. } if field == "name"));
        assert_eq!(service.repository().len().unwrap(), 15);
    }

    #[tokio::test]
    async fn test_update_merges_patch() {
        let service = seeded();
        let id = seed_first_id(&service);
        let before = service.get_by_id(&id).await.unwrap().unwrap();

        let updated = service
            .update(
                &id,
                CompanyPatch {
                    city: Some("Vancouver".to_string()),
                    ..CompanyPatch::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.city, "Vancouver");
        assert_eq!(updated.base.description, before.base.description);
        assert_eq!(updated.email, before.email);
        assert_eq!(updated.base.metadata.version, before.base.metadata.version + 1);
        assert_ne!(updated.base.metadata.updated_at, before.base.metadata.updated_at);
        assert_eq!(updated.base.metadata.created_at, before.base.metadata.created_at);
    }

    #[tokio::test]
    async fn test_update_missing_id_leaves_collection_unchanged() {
        let service = seeded();
        let before = service.repository().snapshot().unwrap();

        let err = service
            .update(
                "missing-id",
                CompanyPatch {
                    description: Some("Ghost".to_string()),
                    ..CompanyPatch::default()
                },
            )
            .await
            .unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(service.repository().snapshot().unwrap(), before);
    }

    #[tokio::test]
    async fn test_invalid_update_is_not_applied() {
        let service = seeded();
        let id = seed_first_id(&service);
        let before = service.repository().snapshot().unwrap();

        let err = service
            .update(
                &id,
                CompanyPatch {
                    description: Some(String::new()),
                    ..CompanyPatch::default()
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::Validation { .. }));
        assert_eq!(service.repository().snapshot().unwrap(), before);
    }

    #[tokio::test]
    async fn test_delete() {
        let service = seeded();
        let id = seed_first_id(&service);

        service.delete(&id).await.unwrap();
        assert_eq!(service.get_by_id(&id).await.unwrap(), None);
        assert_eq!(service.repository().len().unwrap(), 14);

        assert!(service.delete(&id).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_csv_export_quotes_comma_in_name() {
        let service = service_with(Vec::new());
        for name in ["Alpha", "Proseware, Inc.", "Gamma"] {
            service.create(dto(name)).await.unwrap();
        }

        let blob = service
            .export(&ListFilters::new(), ExportFormat::Csv)
            .await
            .unwrap();
        let text = blob.as_text();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(blob.mime_type, "text/csv;charset=utf-8");
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("\"id\",\"code\",\"name\""));
        assert!(text.contains("\"Proseware, Inc.\""));
    }

    #[tokio::test]
    async fn test_json_export_respects_filters() {
        let service = seeded();
        let blob = service
            .export(&ListFilters::new().eq("status", "inactive"), ExportFormat::Json)
            .await
            .unwrap();

        let parsed: Vec<Company> = serde_json::from_slice(&blob.bytes).unwrap();
        assert_eq!(blob.mime_type, "application/json");
        assert_eq!(parsed.len(), 3);
        assert!(parsed.iter().all(|c| c.status == RecordStatus::Inactive));
    }

    #[tokio::test]
    async fn test_options_expose_only_active_companies() {
        let service = seeded();
        let provider = service.option_provider(10);

        let initial = provider.load_options(None).await.unwrap();
        assert_eq!(initial.len(), 10);
        let active_ids: Vec<String> = seed_active_ids(&service);
        assert!(initial.iter().all(|o| active_ids.contains(&o.value)));

        // "Trey Research" is inactive: visible in the listing, never as an option
        let listing = service
            .list(&FilterQuery::new(1, 10).with_filters(ListFilters::new().search("trey")))
            .await
            .unwrap();
        assert_eq!(listing.total, 1);
        let options = provider.load_options(Some("trey")).await.unwrap();
        assert!(options.is_empty());
    }

    #[tokio::test]
    async fn test_options_search_by_label() {
        let service = seeded();
        let provider = service.option_provider(10);

        let options = provider.load_options(Some("  coho ")).await.unwrap();
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].label, "Coho Winery");
        assert_eq!(options[0].extra.city, "Napa");
        assert_eq!(options[0].description.as_deref(), Some("Napa"));

        let blank = provider.load_options(Some("")).await.unwrap();
        assert_eq!(blank.len(), 10);
    }

    fn seed_first_id(service: &CompanyService) -> String {
        service.repository().snapshot().unwrap()[0].to_string_id()
    }

    fn seed_active_ids(service: &CompanyService) -> Vec<String> {
        service
            .repository()
            .snapshot()
            .unwrap()
            .iter()
            .filter(|c| c.status == RecordStatus::Active)
            .map(Company::to_string_id)
            .collect()
    }
}
