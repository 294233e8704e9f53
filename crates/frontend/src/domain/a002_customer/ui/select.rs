use crate::app::use_master_data;
use crate::shared::master_data_select::MasterDataSelect;
use backend::domain::a002_customer::options::CustomerOption;
use leptos::prelude::*;

/// Выбор активного клиента
#[component]
pub fn CustomerSelect(
    #[prop(into)] value: Signal<Option<String>>,
    on_change: Callback<Option<CustomerOption>>,
    #[prop(optional)] allow_clear: bool,
) -> impl IntoView {
    let services = use_master_data();

    view! {
        <MasterDataSelect
            provider=services.customer_options()
            value=value
            on_change=on_change
            label="Клиент"
            placeholder="Выберите клиента"
            allow_clear=allow_clear
        />
    }
}
