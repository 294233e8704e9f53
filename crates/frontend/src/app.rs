use crate::domain::a001_company::ui::list::CompanyList;
use crate::shared::icons::icon;
use crate::shared::latency::GlooLatency;
use crate::usecases::u101_contract_draft::ContractDraft;
use backend::shared::config::default_config;
use backend::system::initialization::MasterDataServices;
use leptos::prelude::*;
use std::sync::Arc;
use thaw::ConfigProvider;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Page {
    Companies,
    ContractDraft,
}

/// Сервисы справочников из контекста приложения
pub fn use_master_data() -> MasterDataServices {
    expect_context::<MasterDataServices>()
}

#[component]
pub fn App() -> impl IntoView {
    // В браузере файла конфигурации нет: используется встроенная
    let config = default_config();
    let latency = Arc::new(GlooLatency::from_millis(config.mock.latency_ms));

    let services = match MasterDataServices::seeded(&config, latency) {
        Ok(services) => services,
        Err(e) => {
            log::error!("Failed to initialize master data services: {}", e);
            return view! {
                <div class="alert alert--error">{format!("Ошибка инициализации: {}", e)}</div>
            }
            .into_any();
        }
    };

    provide_context(config);
    provide_context(services);

    let page = RwSignal::new(Page::Companies);
    let pages = [
        (Page::Companies, "customers", "Компании"),
        (Page::ContractDraft, "contract", "Черновик договора"),
    ];

    view! {
        <ConfigProvider>
            <div class="app-layout">
                <nav class="main-nav-bar">
                    <ul>
                        {pages.into_iter().map(|(target, icon_name, title)| {
                            view! {
                                <li
                                    class:active=move || page.get() == target
                                    on:click=move |_| page.set(target)
                                >
                                    {icon(icon_name)}
                                    <span>{title}</span>
                                </li>
                            }
                        }).collect_view()}
                    </ul>
                </nav>
                <div class="app-main">
                    {move || match page.get() {
                        Page::Companies => view! { <CompanyList /> }.into_any(),
                        Page::ContractDraft => view! { <ContractDraft /> }.into_any(),
                    }}
                </div>
            </div>
        </ConfigProvider>
    }
    .into_any()
}
