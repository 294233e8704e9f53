use std::sync::Arc;

use contracts::domain::a002_customer::aggregate::{Customer, CustomerDto, CustomerPatch};
use contracts::shared::master_data::{ExportFormat, FilterQuery, ListFilters, PageResult};

use super::options::CustomerOptionProvider;
use super::repository::CustomerRepository;
use crate::shared::error::{ServiceError, ServiceResult};
use crate::shared::export::{CsvExportable, ExportBlob};
use crate::shared::format::format_timestamp;
use crate::shared::latency::Latency;
use crate::shared::service::{generate_code, EntityService, ExportSettings};

impl CsvExportable for Customer {
    fn headers() -> &'static [&'static str] {
        &[
            "id",
            "code",
            "name",
            "email",
            "phone",
            "company_id",
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
            self.company_id.clone().unwrap_or_default(),
            self.status.as_str().to_string(),
            format_timestamp(&self.base.metadata.created_at),
            format_timestamp(&self.base.metadata.updated_at),
        ]
    }
}

#[derive(Clone)]
pub struct CustomerService {
    inner: EntityService<Customer>,
}

impl CustomerService {
    pub fn new(
        repository: CustomerRepository,
        latency: Arc<dyn Latency>,
        export: ExportSettings,
    ) -> Self {
        Self {
            inner: EntityService::new(repository, latency, export),
        }
    }

    pub fn repository(&self) -> &CustomerRepository {
        self.inner.store()
    }

    pub async fn list(&self, query: &FilterQuery) -> ServiceResult<PageResult<Customer>> {
        self.inner.list(query).await
    }

    pub async fn get_by_id(&self, id: &str) -> ServiceResult<Option<Customer>> {
        self.inner.get_by_id(id).await
    }

    pub async fn create(&self, dto: CustomerDto) -> ServiceResult<Customer> {
        let code = dto
            .code
            .clone()
            .filter(|c| !c.trim().is_empty())
            .unwrap_or_else(|| generate_code("CUS"));
        let mut aggregate = Customer::new_for_insert(code, dto);

        aggregate.validate().map_err(|e| {
            tracing::warn!("Customer validation failed: {}", e);
            ServiceError::from(e)
        })?;
        aggregate.before_write();

        self.inner.insert(aggregate).await
    }

    pub async fn update(&self, id: &str, patch: CustomerPatch) -> ServiceResult<Customer> {
        self.inner
            .modify(id, |customer, _| {
                customer.apply_patch(&patch);
                customer.validate()?;
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

    pub fn option_provider(&self, limit: usize) -> CustomerOptionProvider {
        CustomerOptionProvider::new(self.inner.clone(), limit)
    }
}
