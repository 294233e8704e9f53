//! Master data select
//!
//! Выпадающий список записей справочника с поиском на стороне сервиса.
//!
//! ```ignore
//! view! {
//!     <MasterDataSelect
//!         provider=services.company_options()
//!         value=company_id
//!         on_change=Callback::new(move |option| set_company_id.set(option.map(|o| o.value)))
//!         allow_clear=true
//!     />
//! }
//! ```

pub mod component;
pub mod state;

pub use component::MasterDataSelect;
pub use state::{LoadOutcome, LoadTicket, SelectionState};
