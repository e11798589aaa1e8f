//! Generic enquiry list: filter panel, paginated fetch and the result table.
//!
//! Stock and indent enquiries differ only in their [`EnquiryConfig`].

pub mod state;

use self::state::{clear_results, create_state};
use crate::layout::global_context::use_app_context;
use crate::projections::p103_spare_list::api::load_spare_list;
use crate::shared::components::enquiry_table::EnquiryTable;
use crate::shared::components::filter_panel::{FilterFieldInput, FilterPanel};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::http;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{page_id, PAGE_CAT_LIST};
use crate::shared::toast::use_toasts;
use contracts::enums::company::Company;
use contracts::projections::p103_spare_list::SpareListItem;
use contracts::shared::enquiry::{ColumnDef, EnquiryRequest, EnquiryRow, FilterField, PaginationState};
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Debug)]
pub struct EnquiryConfig {
    /// Tab key; also the key of the saved filter state
    pub key: String,
    pub title: String,
    pub endpoint: String,
    pub columns: &'static [ColumnDef],
    pub filter_fields: Vec<FilterField>,
    /// Source of the spare code/description suggestions
    pub company: Company,
}

#[component]
pub fn EnquiryListPage(config: EnquiryConfig) -> impl IntoView {
    let ctx = use_app_context();
    let toasts = use_toasts();
    let EnquiryConfig {
        key,
        title,
        endpoint,
        columns,
        filter_fields,
        company,
    } = config;

    let state = create_state(ctx, &key);
    let criteria = RwSignal::new(state.get_untracked().criteria);
    let rows = RwSignal::new(Vec::<EnquiryRow>::new());
    let loading = RwSignal::new(false);
    let panel_open = RwSignal::new(false);
    let spares = RwSignal::new(Vec::<SpareListItem>::new());

    let fetch = StoredValue::new(move || {
        let current = state.get_untracked();
        let url = EnquiryRequest::new(&current.criteria, current.pagination).url(&endpoint);
        loading.set(true);
        spawn_local(async move {
            match http::get_page(&url, "Failed to fetch data").await {
                Ok(page) => {
                    log!("enquiry: {} rows, total {}", page.records.len(), page.total_records);
                    state.update(|s| s.pagination.apply(&page));
                    rows.set(page.records);
                }
                Err(e) => {
                    rows.set(Vec::new());
                    toasts.api_error(&e);
                }
            }
            loading.set(false);
        });
    });
    let run_fetch = move || fetch.with_value(|f| f());

    let on_search = Callback::new(move |_| {
        let filters = criteria.get_untracked();
        state.update(|s| {
            s.criteria = filters;
            s.search();
        });
        run_fetch();
    });

    let on_clear = Callback::new(move |_| {
        criteria.update(|c| c.clear());
        state.update(|s| rows.update(|r| clear_results(s, r)));
    });

    let on_page_change = Callback::new(move |pagination: PaginationState| {
        state.update(|s| s.pagination = pagination);
        run_fetch();
    });

    // rows stay empty until the first Search
    load_spare_list(company, spares);

    view! {
        <PageFrame page_id=page_id(&key, PAGE_CAT_LIST) category=PAGE_CAT_LIST>
            <div class="page__header">
                <h2>{title.clone()}</h2>
                <div class="page__header-actions">
                    <button class="button button--secondary" on:click=move |_| panel_open.update(|o| *o = !*o)>
                        {icon("filter")}
                        "Filters"
                    </button>
                    <button class="button button--secondary" on:click=move |_| run_fetch()>
                        {icon("refresh")}
                        "Refresh"
                    </button>
                </div>
            </div>

            <div class="page__content">
                <FilterPanel
                    is_open=panel_open
                    active_filters_count=Signal::derive(move || criteria.with(|c| c.active_count()))
                    on_search=on_search
                    on_clear=on_clear
                >
                    {filter_fields
                        .into_iter()
                        .map(|field| view! { <FilterFieldInput field=field criteria=criteria spares=spares /> })
                        .collect_view()}
                </FilterPanel>

                <PaginationControls
                    state=Signal::derive(move || state.get().pagination)
                    rows_on_page=Signal::derive(move || rows.with(Vec::len))
                    on_change=on_page_change
                />

                <EnquiryTable
                    title=title
                    columns=columns
                    rows=rows
                    loading=loading
                    offset=Signal::derive(move || state.get().pagination.offset())
                    total_records=Signal::derive(move || state.get().pagination.total_records)
                />
            </div>
        </PageFrame>
    }
}
