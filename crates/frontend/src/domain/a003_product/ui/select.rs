use crate::app::use_master_data;
use crate::shared::master_data_select::MasterDataSelect;
use backend::domain::a003_product::options::ProductOption;
use leptos::prelude::*;

/// Выбор активного товара (поиск по наименованию, артикулу, категории)
#[component]
pub fn ProductSelect(
    #[prop(into)] value: Signal<Option<String>>,
    on_change: Callback<Option<ProductOption>>,
    #[prop(optional)] allow_clear: bool,
) -> impl IntoView {
    let services = use_master_data();

    view! {
        <MasterDataSelect
            provider=services.product_options()
            value=value
            on_change=on_change
            label="Товар"
            placeholder="Выберите товар"
            allow_clear=allow_clear
        />
    }
}
