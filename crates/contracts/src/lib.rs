//! Shared types between the master-data services and the UI
//!
//! - `domain` — агрегаты справочников (компании, клиенты, товары)
//! - `shared::master_data` — опции выбора, фильтры и страницы списков

pub mod domain;
pub mod shared;
