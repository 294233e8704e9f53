use super::state::{LoadOutcome, LoadTicket, SelectionState};
use crate::shared::icons::icon;
use backend::shared::config::Config;
use backend::shared::options::OptionProvider;
use contracts::shared::master_data::SelectOption;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// Выпадающий список справочника с поиском
///
/// - загрузка опций при монтировании и при открытии (если опции устарели)
/// - поиск с задержкой `debounce_ms`; устаревшие запросы не отправляются,
///   устаревшие ответы не применяются
/// - повторный выбор той же опции или крестик снимают выбор (при `allow_clear`)
/// - клик вне списка или Escape закрывают список
#[component]
pub fn MasterDataSelect<P, X>(
    /// Поставщик опций (только активные записи)
    provider: P,
    /// Выбранное значение (ID записи)
    #[prop(into)]
    value: Signal<Option<String>>,
    /// Вызывается при выборе или снятии выбора
    on_change: Callback<Option<SelectOption<X>>>,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional)] allow_clear: bool,
    /// По умолчанию берётся из `options.debounce_ms` конфигурации
    #[prop(optional)]
    debounce_ms: Option<u64>,
) -> impl IntoView
where
    P: OptionProvider<Extra = X> + Clone + 'static,
    X: Clone + Send + Sync + 'static,
{
    let state = RwSignal::new(SelectionState::<X>::new(allow_clear));
    let provider = StoredValue::new(provider);
    let placeholder = placeholder.unwrap_or_else(|| "Выберите...".to_string());

    let debounce_ms = debounce_ms
        .or_else(|| use_context::<Config>().map(|c| c.options.debounce_ms))
        .unwrap_or(DEFAULT_DEBOUNCE_MS);
    let debounce = u32::try_from(debounce_ms).unwrap_or(u32::MAX);

    let run_load = move |ticket: LoadTicket, debounced: bool| {
        spawn_local(async move {
            if debounced && debounce > 0 {
                TimeoutFuture::new(debounce).await;
                let current = state
                    .try_with_untracked(|s| s.is_current(&ticket))
                    .unwrap_or(false);
                if !current {
                    return;
                }
            }

            let Some(provider) = provider.try_get_value() else {
                return;
            };
            let result = provider.load_options(ticket.search()).await;

            match state.try_update(|s| s.complete_load(&ticket, result)) {
                Some(LoadOutcome::Failed(e)) => {
                    log::error!("Failed to load options ({:?}): {}", ticket.search(), e)
                }
                Some(LoadOutcome::Discarded) => {
                    log::debug!("Discarded stale options response #{}", ticket.seq())
                }
                Some(LoadOutcome::Applied) | None => {}
            }
        });
    };

    // Внешнее значение и загрузка при монтировании
    Effect::new(move |_| {
        let external = value.get();
        let ticket = state
            .try_update(|s| {
                s.set_value(external);
                s.preload()
            })
            .flatten();
        if let Some(ticket) = ticket {
            run_load(ticket, false);
        }
    });

    let toggle = move |_| {
        if state.with_untracked(|s| s.is_open()) {
            state.update(|s| s.close());
        } else if let Some(ticket) = state.try_update(|s| s.open()).flatten() {
            run_load(ticket, false);
        }
    };

    let close = move || state.update(|s| s.close());

    let handle_search = move |text: String| {
        if let Some(ticket) = state.try_update(|s| s.on_search_input(&text)) {
            run_load(ticket, true);
        }
    };

    let handle_select = move |option_value: String| {
        let selected = state
            .try_update(|s| {
                s.select(&option_value);
                s.selected_option().cloned()
            })
            .flatten();
        on_change.run(selected);
    };

    let handle_clear = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        if state.try_update(|s| s.clear()).unwrap_or(false) {
            on_change.run(None);
        }
    };

    view! {
        <div class="master-data-select" style="position: relative;">
            {label.map(|text| view! { <label class="master-data-select__label">{text}</label> })}

            <div
                class="master-data-select__control"
                class:master-data-select__control--open=move || state.with(|s| s.is_open())
                on:click=toggle
            >
                <span class="master-data-select__value">
                    {move || {
                        state
                            .with(|s| s.display_label())
                            .unwrap_or_else(|| placeholder.clone())
                    }}
                </span>
                <Show when=move || state.with(|s| s.allow_clear() && s.selected_value().is_some())>
                    <button
                        class="master-data-select__clear"
                        title="Очистить"
                        on:click=handle_clear
                    >
                        {icon("x")}
                    </button>
                </Show>
                {icon("chevron-down")}
            </div>

            <Show when=move || state.with(|s| s.is_open())>
                <div
                    class="master-data-select__backdrop"
                    style="position: fixed; inset: 0; z-index: 10;"
                    on:click=move |_| close()
                ></div>
                <div
                    class="master-data-select__popover"
                    style="position: absolute; left: 0; right: 0; z-index: 11;"
                >
                    <input
                        class="master-data-select__search"
                        type="text"
                        placeholder="Поиск..."
                        autofocus=true
                        prop:value=move || state.with(|s| s.search_query().to_string())
                        on:input=move |ev| handle_search(event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Escape" {
                                close();
                            }
                        }
                    />
                    {move || {
                        state.with(|s| {
                            if s.is_loading() {
                                view! { <div class="master-data-select__loading">"Загрузка..."</div> }
                                    .into_any()
                            } else if s.options().is_empty() && !s.is_loaded() {
                                view! { <div class="master-data-select__empty">"Не удалось загрузить список"</div> }
                                    .into_any()
                            } else if s.options().is_empty() {
                                view! { <div class="master-data-select__empty">"Ничего не найдено"</div> }
                                    .into_any()
                            } else {
                                view! {
                                    <ul class="master-data-select__options">
                                        {s.options().iter().map(|option| {
                                            let option_value = option.value.clone();
                                            let is_selected = s.selected_value() == Some(option.value.as_str());
                                            view! {
                                                <li
                                                    class="master-data-select__option"
                                                    class:master-data-select__option--selected=is_selected
                                                    on:click=move |_| handle_select(option_value.clone())
                                                >
                                                    <span class="master-data-select__option-label">
                                                        {option.label.clone()}
                                                    </span>
                                                    {option.description.clone().map(|d| view! {
                                                        <span class="master-data-select__option-description">{d}</span>
                                                    })}
                                                </li>
                                            }
                                        }).collect_view()}
                                    </ul>
                                }
                                    .into_any()
                            }
                        })
                    }}
                </div>
            </Show>
        </div>
    }
}
