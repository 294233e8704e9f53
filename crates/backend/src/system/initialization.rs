//! Composition root
//!
//! Создаёт хранилища и сервисы справочников. Один и тот же набор
//! используется нативным бинарником и фронтендом (в браузере, с задержкой
//! на таймерах), тесты собирают собственные пустые или заполненные наборы.

use std::sync::Arc;

use crate::domain::a001_company::options::CompanyOptionProvider;
use crate::domain::a001_company::repository::CompanyRepository;
use crate::domain::a001_company::service::CompanyService;
use crate::domain::a002_customer::options::CustomerOptionProvider;
use crate::domain::a002_customer::repository::CustomerRepository;
use crate::domain::a002_customer::service::CustomerService;
use crate::domain::a003_product::options::ProductOptionProvider;
use crate::domain::a003_product::repository::ProductRepository;
use crate::domain::a003_product::service::ProductService;
use crate::shared::config::Config;
use crate::shared::data::seed;
use crate::shared::latency::Latency;
use crate::shared::service::ExportSettings;

#[derive(Clone)]
pub struct MasterDataServices {
    pub companies: CompanyService,
    pub customers: CustomerService,
    pub products: ProductService,
    option_limit: usize,
}

impl MasterDataServices {
    /// Сервисы поверх пустых хранилищ
    pub fn empty(config: &Config, latency: Arc<dyn Latency>) -> anyhow::Result<Self> {
        Self::with_repositories(
            config,
            latency,
            CompanyRepository::new(),
            CustomerRepository::new(),
            ProductRepository::new(),
        )
    }

    /// Сервисы с демонстрационными данными
    pub fn seeded(config: &Config, latency: Arc<dyn Latency>) -> anyhow::Result<Self> {
        let companies = seed::companies();
        let customers = seed::customers(&companies);
        let products = seed::products();

        tracing::info!(
            "Seeding master data: {} companies, {} customers, {} products",
            companies.len(),
            customers.len(),
            products.len()
        );

        Self::with_repositories(
            config,
            latency,
            CompanyRepository::from_vec(companies),
            CustomerRepository::from_vec(customers),
            ProductRepository::from_vec(products),
        )
    }

    fn with_repositories(
        config: &Config,
        latency: Arc<dyn Latency>,
        companies: CompanyRepository,
        customers: CustomerRepository,
        products: ProductRepository,
    ) -> anyhow::Result<Self> {
        let export = ExportSettings::from_config(config)?;

        Ok(Self {
            companies: CompanyService::new(companies, Arc::clone(&latency), export),
            customers: CustomerService::new(customers, Arc::clone(&latency), export),
            products: ProductService::new(products, latency, export),
            option_limit: config.options.default_limit.max(1),
        })
    }

    pub fn option_limit(&self) -> usize {
        self.option_limit
    }

    pub fn company_options(&self) -> CompanyOptionProvider {
        self.companies.option_provider(self.option_limit)
    }

    pub fn customer_options(&self) -> CustomerOptionProvider {
        self.customers.option_provider(self.option_limit)
    }

    pub fn product_options(&self) -> ProductOptionProvider {
        self.products.option_provider(self.option_limit)
    }
}
