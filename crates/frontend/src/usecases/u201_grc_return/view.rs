use super::api::{self, GrcOutcome};
use crate::shared::components::enquiry_table::EnquiryTable;
use crate::shared::export::open_pdf;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{page_id, PAGE_CAT_USECASE};
use crate::shared::reload::reload_after_delay;
use crate::shared::toast::use_toasts;
use contracts::enums::company::Company;
use contracts::shared::api_error::Notice;
use contracts::shared::enquiry::row::{set_row_quantity, toggle_row_flag, INVOICE};
use contracts::shared::enquiry::EnquiryRow;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u201_grc_return::{build_request, GrcAction, GrcForm, GrcReturn, ReportType, COLUMNS};
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

pub fn tab_key(company: Company) -> String {
    format!("{}_{}", GrcReturn::full_name(), company.route_suffix())
}

#[component]
pub fn GrcReturnView(company: Company) -> impl IntoView {
    let toasts = use_toasts();
    let form = RwSignal::new(GrcForm::default());
    let rows = RwSignal::new(Vec::<EnquiryRow>::new());
    let loading = RwSignal::new(false);
    let submitting = RwSignal::new(false);

    spawn_local(async move {
        let code = api::next_challan_code(company).await;
        form.update(|f| f.challan_number = code);
    });

    let load_division = move |division: String| {
        form.update(|f| f.division = division.clone());
        if division.is_empty() {
            rows.set(Vec::new());
            return;
        }
        loading.set(true);
        spawn_local(async move {
            match api::fetch_rows(company, &division).await {
                Ok(list) => {
                    log!("GRC {}: {} rows for {}", company, list.len(), division);
                    form.update(|f| f.prefill_from(&list));
                    rows.set(list);
                }
                Err(e) => {
                    rows.set(Vec::new());
                    toasts.api_error(&e);
                }
            }
            loading.set(false);
        });
    };

    let on_toggle = Callback::new(move |(index, key): (usize, &'static str)| {
        rows.update(|list| {
            if key == INVOICE {
                if let Some(row) = list.get_mut(index) {
                    row.toggle_invoice();
                }
            } else {
                toggle_row_flag(list, index, key);
            }
        });
    });

    let on_quantity = Callback::new(move |(index, key, qty): (usize, &'static str, Option<u32>)| {
        rows.update(|list| set_row_quantity(list, index, key, qty));
    });

    let on_execute = move |_| {
        let current = form.get_untracked();
        let request = match build_request(&current, &rows.get_untracked()) {
            Ok(request) => request,
            Err(e) => {
                toasts.action_error(&e);
                return;
            }
        };
        let action = current.action;
        submitting.set(true);
        spawn_local(async move {
            match api::execute(company, request).await {
                Ok(GrcOutcome::Report(pdf)) => {
                    if let Err(e) = open_pdf(&pdf) {
                        log!("Opening report failed: {}", e);
                    }
                    toasts.notify(Notice::success(action.success_message()));
                }
                Ok(GrcOutcome::Done) => {
                    toasts.notify(Notice::success(action.success_message()));
                    if action.reloads_on_success() {
                        reload_after_delay();
                    }
                }
                Ok(GrcOutcome::Skipped) => {}
                Err(e) => toasts.api_error(&e),
            }
            submitting.set(false);
        });
    };

    let key = tab_key(company);

    view! {
        <PageFrame page_id=page_id(&key, PAGE_CAT_USECASE) category=PAGE_CAT_USECASE>
            <div class="page__header">
                <h2>{format!("{} ({})", GrcReturn::display_name(), company)}</h2>
            </div>
            <div class="page__content">
                <div class="form form--inline">
                    <div class="form__group">
                        <label class="form__label">"Division"</label>
                        <select
                            class="form__select"
                            prop:value=move || form.with(|f| f.division.clone())
                            on:change=move |ev| load_division(event_target_value(&ev))
                        >
                            <option value="">"Select"</option>
                            {company.divisions().iter().map(|d| view! { <option value=*d>{*d}</option> }).collect_view()}
                        </select>
                    </div>
                    <div class="form__group">
                        <label class="form__label">"Challan Number"</label>
                        <input
                            class="form__input"
                            prop:value=move || form.with(|f| f.challan_number.clone())
                            on:input=move |ev| form.update(|f| f.challan_number = event_target_value(&ev))
                        />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"Returned Through"</label>
                        <input
                            class="form__input"
                            prop:value=move || form.with(|f| f.sent_through.clone())
                            on:input=move |ev| form.update(|f| f.sent_through = event_target_value(&ev))
                        />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"Consignment No."</label>
                        <input
                            class="form__input"
                            prop:value=move || form.with(|f| f.docket_number.clone())
                            on:input=move |ev| form.update(|f| f.docket_number = event_target_value(&ev))
                        />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"Action"</label>
                        <select
                            class="form__select"
                            prop:value=move || form.with(|f| f.action.label())
                            on:change=move |ev| {
                                if let Some(action) = GrcAction::from_label(&event_target_value(&ev)) {
                                    form.update(|f| f.action = action);
                                }
                            }
                        >
                            {GrcAction::all().into_iter().map(|a| view! { <option value=a.label()>{a.label()}</option> }).collect_view()}
                        </select>
                    </div>
                    <Show when=move || form.with(|f| f.action == GrcAction::Report)>
                        <div class="form__group">
                            <label class="form__label">"Report Type"</label>
                            <select
                                class="form__select"
                                prop:value=move || form.with(|f| f.report_type.as_str())
                                on:change=move |ev| {
                                    if let Some(report_type) = ReportType::parse(&event_target_value(&ev)) {
                                        form.update(|f| f.report_type = report_type);
                                    }
                                }
                            >
                                {ReportType::all().into_iter().map(|t| view! { <option value=t.as_str()>{t.as_str()}</option> }).collect_view()}
                            </select>
                        </div>
                    </Show>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=on_execute
                        disabled=Signal::derive(move || submitting.get() || loading.get())
                    >
                        "Execute"
                    </Button>
                </div>

                <EnquiryTable
                    title=format!("GRC Return {}", company)
                    columns=COLUMNS
                    rows=rows
                    loading=loading
                    no_data_message="Select a division to load GRC records".to_string()
                    on_toggle=on_toggle
                    on_quantity=on_quantity
                />
            </div>
        </PageFrame>
    }
}
