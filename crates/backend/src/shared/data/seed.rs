//! Демо-данные справочников
//!
//! Записи возвращаются от новых к старым, как их хранит `MemoryStore`.

use chrono::{DateTime, Duration, Utc};
use contracts::domain::a001_company::aggregate::{Company, CompanyDto};
use contracts::domain::a002_customer::aggregate::{Customer, CustomerDto};
use contracts::domain::a003_product::aggregate::{Product, ProductDto};
use contracts::domain::common::{EntityMetadata, RecordStatus};

/// 2026-01-15T09:00:00Z
const SEED_EPOCH_SECS: i64 = 1_768_467_600;

fn seed_timestamp(index: usize) -> DateTime<Utc> {
    let newest = DateTime::<Utc>::from_timestamp(SEED_EPOCH_SECS, 0).unwrap_or_else(Utc::now);
    newest - Duration::days(index as i64)
}

// (name, city, email, inn, status)
const COMPANIES: &[(&str, &str, &str, &str, RecordStatus)] = &[
    ("Northwind Traders", "Seattle", "office@northwind.example", "7701000001", RecordStatus::Active),
    ("Contoso Ltd", "Redmond", "info@contoso.example", "7701000002", RecordStatus::Active),
    ("Fabrikam Industries", "Chicago", "sales@fabrikam.example", "7701000003", RecordStatus::Active),
    ("Blue Yonder Airlines", "Denver", "ops@blueyonder.example", "7701000004", RecordStatus::Inactive),
    ("Adventure Works", "Bothell", "hello@adventure-works.example", "7701000005", RecordStatus::Active),
    ("Tailspin Toys", "Portland", "team@tailspin.example", "7701000006", RecordStatus::Active),
    ("Wide World Importers", "San Francisco", "trade@wideworld.example", "7701000007", RecordStatus::Active),
    ("Margie's Travel", "Boston", "trips@margies.example", "7701000008", RecordStatus::Inactive),
    ("Litware Inc", "Austin", "contact@litware.example", "7701000009", RecordStatus::Active),
    ("Proseware, Inc.", "New York", "legal@proseware.example", "7701000010", RecordStatus::Active),
    ("Woodgrove Bank", "Toronto", "corp@woodgrove.example", "7701000011", RecordStatus::Active),
    ("Trey Research", "Atlanta", "lab@treyresearch.example", "7701000012", RecordStatus::Inactive),
    ("Lucerne Publishing", "Zurich", "books@lucerne.example", "7701000013", RecordStatus::Active),
    ("Coho Winery", "Napa", "cellar@coho.example", "7701000014", RecordStatus::Active),
    ("Alpine Ski House", "Vail", "lifts@alpineski.example", "7701000015", RecordStatus::Active),
];

// (name, email, phone, index in COMPANIES, status)
const CUSTOMERS: &[(&str, &str, &str, Option<usize>, RecordStatus)] = &[
    ("Nancy Davolio", "nancy.davolio@northwind.example", "+1 206 555 0101", Some(0), RecordStatus::Active),
    ("Andrew Fuller", "andrew.fuller@northwind.example", "+1 206 555 0102", Some(0), RecordStatus::Active),
    ("Kim Abercrombie", "kim@contoso.example", "+1 425 555 0110", Some(1), RecordStatus::Active),
    ("Dan Park", "dan.park@fabrikam.example", "+1 312 555 0120", Some(2), RecordStatus::Suspended),
    ("Terry Adams", "terry@adventure-works.example", "+1 425 555 0130", Some(4), RecordStatus::Active),
    ("Megan Sherman", "megan@tailspin.example", "+1 503 555 0140", Some(5), RecordStatus::Active),
    ("Jon Grande", "jon.grande@mail.example", "+1 617 555 0150", None, RecordStatus::Inactive),
    ("Lisa Miller", "lisa.miller@proseware.example", "+1 212 555 0160", Some(9), RecordStatus::Active),
];

// (sku, name, category, unit price, unit, status)
const PRODUCTS: &[(&str, &str, &str, f64, &str, RecordStatus)] = &[
    ("SKU-1001", "Steel bracket 40mm", "Hardware", 2.45, "pcs", RecordStatus::Active),
    ("SKU-1002", "Steel bracket 60mm", "Hardware", 3.10, "pcs", RecordStatus::Active),
    ("SKU-2001", "Hydraulic oil 5L", "Consumables", 38.90, "can", RecordStatus::Active),
    ("SKU-2002", "Cutting fluid 1L", "Consumables", 12.00, "bottle", RecordStatus::Active),
    ("SKU-3001", "CNC milling, hourly", "Job work", 85.00, "hour", RecordStatus::Active),
    ("SKU-3002", "Laser cutting, per sheet", "Job work", 27.50, "sheet", RecordStatus::Active),
    ("SKU-4001", "Aluminium sheet 2mm", "Raw material", 64.20, "sheet", RecordStatus::Active),
    ("SKU-4002", "Brass rod 10mm", "Raw material", 19.75, "m", RecordStatus::Inactive),
    ("SKU-5001", "Safety gloves", "PPE", 4.80, "pair", RecordStatus::Active),
    ("SKU-5002", "Ear protection \"Quiet\"", "PPE", 9.95, "pcs", RecordStatus::Active),
];

pub fn companies() -> Vec<Company> {
    COMPANIES
        .iter()
        .enumerate()
        .map(|(i, (name, city, email, inn, status))| {
            let mut company = Company::new_for_insert(
                format!("CMP-{:04}", COMPANIES.len() - i),
                CompanyDto {
                    description: name.to_string(),
                    email: Some(email.to_string()),
                    phone: None,
                    city: Some(city.to_string()),
                    inn: Some(inn.to_string()),
                    status: Some(*status),
                    ..CompanyDto::default()
                },
            );
            company.base.metadata = EntityMetadata::created_at(seed_timestamp(i));
            company
        })
        .collect()
}

/// Клиенты, привязанные к переданным компаниям (в порядке `companies()`)
pub fn customers(companies: &[Company]) -> Vec<Customer> {
    CUSTOMERS
        .iter()
        .enumerate()
        .map(|(i, (name, email, phone, company_idx, status))| {
            let company_id = company_idx
                .and_then(|idx| companies.get(idx))
                .map(Company::to_string_id);
            let mut customer = Customer::new_for_insert(
                format!("CUS-{:04}", CUSTOMERS.len() - i),
                CustomerDto {
                    description: name.to_string(),
                    email: Some(email.to_string()),
                    phone: Some(phone.to_string()),
                    company_id,
                    status: Some(*status),
                    ..CustomerDto::default()
                },
            );
            customer.base.metadata = EntityMetadata::created_at(seed_timestamp(i));
            customer
        })
        .collect()
}

pub fn products() -> Vec<Product> {
    PRODUCTS
        .iter()
        .enumerate()
        .map(|(i, (sku, name, category, price, unit, status))| {
            let mut product = Product::new_for_insert(ProductDto {
                sku: sku.to_string(),
                description: name.to_string(),
                category: Some(category.to_string()),
                unit_price: Some(*price),
                unit: Some(unit.to_string()),
                status: Some(*status),
                comment: None,
            });
            product.base.metadata = EntityMetadata::created_at(seed_timestamp(i));
            product
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_company_seed_has_twelve_active_and_three_inactive() {
        let items = companies();
        let active = items.iter().filter(|c| c.status == RecordStatus::Active).count();
        let inactive = items.iter().filter(|c| c.status == RecordStatus::Inactive).count();
        assert_eq!(active, 12);
        assert_eq!(inactive, 3);
    }

    #[test]
    fn test_seed_is_newest_first() {
        let items = companies();
        assert!(items
            .windows(2)
            .all(|w| w[0].base.metadata.created_at > w[1].base.metadata.created_at));
    }

    #[test]
    fn test_customers_link_to_given_companies() {
        let companies = companies();
        let customers = customers(&companies);
        assert_eq!(customers[0].company_id, Some(companies[0].to_string_id()));
        assert!(customers.iter().any(|c| c.company_id.is_none()));
    }

    #[test]
    fn test_seed_records_pass_validation() {
        let companies = companies();
        assert!(companies.iter().all(|c| c.validate().is_ok()));
        assert!(customers(&companies).iter().all(|c| c.validate().is_ok()));
        assert!(products().iter().all(|p| p.validate().is_ok()));
    }
}
