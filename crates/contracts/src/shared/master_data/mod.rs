//! Master Data
//!
//! Контракты для выбора и постраничного просмотра справочников:
//! опции выпадающих списков, фильтры списков, страница результата и формат экспорта.

pub mod export_format;
pub mod filter;
pub mod page;
pub mod select_option;

pub use export_format::ExportFormat;
pub use filter::{FilterQuery, ListFilters};
pub use page::PageResult;
pub use select_option::SelectOption;
