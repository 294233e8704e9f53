pub mod a001_company;
pub mod a002_customer;
pub mod a003_product;
pub mod common;
