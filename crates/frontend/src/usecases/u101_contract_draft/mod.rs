pub mod view;

pub use view::ContractDraft;
