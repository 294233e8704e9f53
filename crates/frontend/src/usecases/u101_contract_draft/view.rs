use crate::domain::a001_company::ui::select::CompanySelect;
use crate::domain::a002_customer::ui::select::CustomerSelect;
use crate::domain::a003_product::ui::select::ProductSelect;
use backend::domain::a001_company::options::CompanyOption;
use backend::domain::a002_customer::options::CustomerOption;
use backend::domain::a003_product::options::ProductOption;
use backend::shared::format::format_price;
use leptos::prelude::*;
use thaw::*;

/// Черновик договора: стороны и позиция выбираются из справочников
#[component]
pub fn ContractDraft() -> impl IntoView {
    let company = RwSignal::new(None::<CompanyOption>);
    let customer = RwSignal::new(None::<CustomerOption>);
    let product = RwSignal::new(None::<ProductOption>);
    let quantity = RwSignal::new("1".to_string());

    let company_id = Signal::derive(move || company.with(|c| c.as_ref().map(|o| o.value.clone())));
    let customer_id = Signal::derive(move || customer.with(|c| c.as_ref().map(|o| o.value.clone())));
    let product_id = Signal::derive(move || product.with(|p| p.as_ref().map(|o| o.value.clone())));

    // Клиент другой компании сбрасывается при смене компании
    let on_company_change = Callback::new(move |option: Option<CompanyOption>| {
        let company_value = option.as_ref().map(|o| o.value.clone());
        let foreign_customer = customer.with_untracked(|c| {
            c.as_ref().is_some_and(|c| {
                company_value.is_some() && c.extra.company_id != company_value
            })
        });
        if foreign_customer {
            customer.set(None);
        }
        company.set(option);
    });

    let line_total = Signal::derive(move || {
        let qty = quantity.with(|q| q.trim().parse::<f64>().ok())?;
        product.with(|p| p.as_ref().map(|p| p.extra.unit_price * qty))
    });

    let is_complete = Signal::derive(move || {
        company.with(Option::is_some) && customer.with(Option::is_some) && line_total.get().is_some()
    });

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Черновик договора"</h1>
                </div>
            </div>

            <div class="page__content">
                <div class="card">
                    <div class="card__body">
                        <Flex vertical=true gap=FlexGap::Large>
                            <CompanySelect
                                value=company_id
                                on_change=on_company_change
                                allow_clear=true
                            />
                            <CustomerSelect
                                value=customer_id
                                on_change=Callback::new(move |option| customer.set(option))
                                allow_clear=true
                            />
                            <Flex gap=FlexGap::Small align=FlexAlign::End>
                                <div style="flex: 1;">
                                    <ProductSelect
                                        value=product_id
                                        on_change=Callback::new(move |option| product.set(option))
                                    />
                                </div>
                                <Flex vertical=true gap=FlexGap::Small>
                                    <Label>"Количество:"</Label>
                                    <Input value=quantity />
                                </Flex>
                            </Flex>
                        </Flex>
                    </div>
                </div>

                <div class="card">
                    <div class="card__body">
                        <h2 class="section-title">"Итого"</h2>
                        <dl class="summary">
                            <dt>"Компания"</dt>
                            <dd>
                                {move || company.with(|c| match c {
                                    Some(c) => format!("{} ({}, {})", c.label, c.extra.code, c.extra.city),
                                    None => "-".to_string(),
                                })}
                            </dd>
                            <dt>"Клиент"</dt>
                            <dd>
                                {move || customer.with(|c| match c {
                                    Some(c) => format!("{} <{}>", c.label, c.extra.email),
                                    None => "-".to_string(),
                                })}
                            </dd>
                            <dt>"Позиция"</dt>
                            <dd>
                                {move || product.with(|p| match p {
                                    Some(p) => format!(
                                        "{} [{}] {} / {}",
                                        p.label,
                                        p.extra.sku,
                                        format_price(p.extra.unit_price),
                                        p.extra.unit
                                    ),
                                    None => "-".to_string(),
                                })}
                            </dd>
                            <dt>"Сумма"</dt>
                            <dd>{move || line_total.get().map(format_price).unwrap_or_else(|| "-".to_string())}</dd>
                        </dl>
                        <Badge
                            appearance=BadgeAppearance::Tint
                            color=Signal::derive(move || {
                                if is_complete.get() { BadgeColor::Success } else { BadgeColor::Warning }
                            })
                        >
                            {move || if is_complete.get() { "Готов к оформлению" } else { "Не все поля заполнены" }}
                        </Badge>
                    </div>
                </div>
            </div>
        </div>
    }
}
