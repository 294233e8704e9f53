use crate::app::use_master_data;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::export::download_export;
use crate::shared::icons::icon;
use backend::shared::filtering::STATUS_FIELD;
use contracts::domain::a001_company::aggregate::Company;
use contracts::domain::common::RecordStatus;
use contracts::shared::master_data::{ExportFormat, FilterQuery, ListFilters, PageResult};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Clone, Debug, PartialEq)]
pub struct CompanyRow {
    pub id: String,
    pub code: String,
    pub name: String,
    pub email: String,
    pub city: String,
    pub inn: String,
    pub status: RecordStatus,
    pub created_at: String,
}

impl From<Company> for CompanyRow {
    fn from(c: Company) -> Self {
        Self {
            id: c.to_string_id(),
            code: c.base.code,
            name: c.base.description,
            email: c.email,
            city: c.city,
            inn: c.inn,
            status: c.status,
            created_at: c.base.metadata.created_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

fn status_badge(status: RecordStatus) -> impl IntoView {
    let color = match status {
        RecordStatus::Active => BadgeColor::Success,
        RecordStatus::Inactive => BadgeColor::Informative,
        RecordStatus::Suspended => BadgeColor::Warning,
    };
    view! {
        <Badge appearance=BadgeAppearance::Tint color=color>
            {status.as_str()}
        </Badge>
    }
}

/// Список компаний: поиск, фильтр по статусу, страницы, выгрузка CSV/JSON
#[component]
pub fn CompanyList() -> impl IntoView {
    let services = StoredValue::new(use_master_data());

    let search = RwSignal::new(String::new());
    let status = RwSignal::new(String::new());
    let page = RwSignal::new(1usize);
    let page_size = RwSignal::new(DEFAULT_PAGE_SIZE);
    let result = RwSignal::new(PageResult::<CompanyRow>::empty(1, DEFAULT_PAGE_SIZE));
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    // Номер последнего запроса списка; ответы на более ранние игнорируются
    let request_seq = StoredValue::new(0u64);

    let current_filters = move || {
        let mut filters = ListFilters::new().search(search.get_untracked());
        if let Ok(value) = status.get_untracked().parse::<RecordStatus>() {
            filters = filters.eq(STATUS_FIELD, value.as_str());
        }
        filters
    };

    let load_items = move || {
        let Some(services) = services.try_get_value() else {
            return;
        };
        let query = FilterQuery::new(page.get_untracked(), page_size.get_untracked())
            .with_filters(current_filters());

        request_seq.update_value(|seq| *seq += 1);
        let seq = request_seq.get_value();
        set_loading.set(true);

        spawn_local(async move {
            let response = services.companies.list(&query).await;
            if request_seq.try_get_value() != Some(seq) {
                return;
            }
            match response {
                Ok(data) => {
                    result.set(data.map(CompanyRow::from));
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("Failed to load companies: {}", e);
                    set_error.set(Some(e.to_string()));
                }
            }
            set_loading.set(false);
        });
    };

    let export = move |format: ExportFormat| {
        let Some(services) = services.try_get_value() else {
            return;
        };
        let filters = current_filters();

        spawn_local(async move {
            let outcome = match services.companies.export(&filters, format).await {
                Ok(blob) => {
                    log::info!("Exported {} ({} bytes)", blob.file_name, blob.bytes.len());
                    download_export(&blob)
                }
                Err(e) => Err(e.to_string()),
            };
            if let Err(e) = outcome {
                log::error!("Failed to export companies: {}", e);
                set_error.set(Some(e));
            }
        });
    };

    let apply_filters = move || {
        page.set(1);
        load_items();
    };

    let go_to_page = move |new_page: usize| {
        page.set(new_page);
        load_items();
    };

    let change_page_size = move |new_size: usize| {
        page_size.set(new_size);
        page.set(1);
        load_items();
    };

    load_items();

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Компании"</h1>
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Informative>
                        {move || result.with(|r| r.total.to_string())}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| export(ExportFormat::Csv)
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("download")}
                        " CSV"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| export(ExportFormat::Json)
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("download")}
                        " JSON"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="filter-panel">
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <Flex vertical=true gap=FlexGap::Small>
                            <Label>"Поиск:"</Label>
                            <Input value=search placeholder="Наименование, код, e-mail, город, ИНН..." />
                        </Flex>
                        <Flex vertical=true gap=FlexGap::Small>
                            <Label>"Статус:"</Label>
                            <Select value=status>
                                <option value="">"Все"</option>
                                {RecordStatus::ALL.iter().map(|s| view! {
                                    <option value=s.as_str()>{s.as_str()}</option>
                                }).collect_view()}
                            </Select>
                        </Flex>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| apply_filters()
                            disabled=Signal::derive(move || loading.get())
                        >
                            {icon("refresh")}
                            {move || if loading.get() { " Загрузка..." } else { " Найти" }}
                        </Button>
                    </Flex>

                    <PaginationControls
                        current_page=Signal::derive(move || page.get())
                        total_pages=Signal::derive(move || result.with(|r| r.total_pages))
                        total_count=Signal::derive(move || result.with(|r| r.total))
                        page_size=Signal::derive(move || page_size.get())
                        on_page_change=Callback::new(go_to_page)
                        on_page_size_change=Callback::new(change_page_size)
                    />
                </div>

                {move || error.get().map(|err| view! {
                    <div class="alert alert--error">{err}</div>
                })}

                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Код"</TableHeaderCell>
                            <TableHeaderCell>"Наименование"</TableHeaderCell>
                            <TableHeaderCell>"E-mail"</TableHeaderCell>
                            <TableHeaderCell>"Город"</TableHeaderCell>
                            <TableHeaderCell>"ИНН"</TableHeaderCell>
                            <TableHeaderCell>"Статус"</TableHeaderCell>
                            <TableHeaderCell>"Создано"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || result.with(|r| r.data.clone())
                            key=|row| row.id.clone()
                            children=move |row: CompanyRow| {
                                view! {
                                    <TableRow>
                                        <TableCell><TableCellLayout>{row.code}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout truncate=true>{row.name}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout truncate=true>{row.email}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{row.city}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{row.inn}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{status_badge(row.status)}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{row.created_at}</TableCellLayout></TableCell>
                                    </TableRow>
                                }
                            }
                        />
                    </TableBody>
                </Table>
            </div>
        </div>
    }
}
