use crate::app::use_master_data;
use crate::shared::master_data_select::MasterDataSelect;
use backend::domain::a001_company::options::CompanyOption;
use leptos::prelude::*;

/// Выбор активной компании
#[component]
pub fn CompanySelect(
    #[prop(into)] value: Signal<Option<String>>,
    on_change: Callback<Option<CompanyOption>>,
    #[prop(optional)] allow_clear: bool,
) -> impl IntoView {
    let services = use_master_data();

    view! {
        <MasterDataSelect
            provider=services.company_options()
            value=value
            on_change=on_change
            label="Компания"
            placeholder="Выберите компанию"
            allow_clear=allow_clear
        />
    }
}
