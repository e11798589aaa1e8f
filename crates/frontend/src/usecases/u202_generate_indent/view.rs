use super::api;
use crate::shared::components::enquiry_table::EnquiryTable;
use crate::shared::date_utils::today_iso;
use crate::shared::dispatch::{submit, Submit};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{page_id, PAGE_CAT_USECASE};
use crate::shared::toast::use_toasts;
use contracts::enums::company::Company;
use contracts::shared::enquiry::row::{count_flagged, toggle_row_flag};
use contracts::shared::enquiry::{EnquiryRow, Payload};
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u202_generate_indent::{build_request, GenerateIndent, generate_endpoint, IndentForm, COLUMNS, INDENT_FLAG};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

pub fn tab_key(company: Company) -> String {
    format!("{}_{}", GenerateIndent::full_name(), company.route_suffix())
}

#[component]
pub fn GenerateIndentView(company: Company) -> impl IntoView {
    let toasts = use_toasts();
    let form = RwSignal::new(IndentForm {
        indent_date: today_iso(),
        ..IndentForm::default()
    });
    let rows = RwSignal::new(Vec::<EnquiryRow>::new());
    let loading = RwSignal::new(false);
    let submitting = RwSignal::new(false);

    spawn_local(async move {
        let code = api::next_indent_code(company).await;
        form.update(|f| f.indent_number = code);
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
                Ok(list) => rows.set(list),
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
            toggle_row_flag(list, index, key);
        });
    });

    let on_generate = move |_| {
        let request = match build_request(&form.get_untracked(), &rows.get_untracked()) {
            Ok(request) => request,
            Err(e) => {
                toasts.action_error(&e);
                return;
            }
        };
        let payload = match Payload::json(&request) {
            Ok(payload) => payload,
            Err(e) => {
                toasts.action_error(&e);
                return;
            }
        };
        submitting.set(true);
        spawn_local(async move {
            submit(
                toasts,
                Submit {
                    path: &generate_endpoint(company),
                    payload: &payload,
                    fallback: "Error while generating indent",
                    success: request.success_notice(),
                    reload: true,
                },
            )
            .await;
            submitting.set(false);
        });
    };

    let key = tab_key(company);
    let selected = move || rows.with(|list| count_flagged(list, INDENT_FLAG));

    view! {
        <PageFrame page_id=page_id(&key, PAGE_CAT_USECASE) category=PAGE_CAT_USECASE>
            <div class="page__header">
                <h2>{format!("{} ({})", GenerateIndent::display_name(), company)}</h2>
            </div>
            <div class="page__content">
                <div class="form form--inline">
                    <div class="form__group">
                        <label class="form__label">"Indent Number"</label>
                        <input class="form__input" readonly prop:value=move || form.with(|f| f.indent_number.clone()) />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"Indent Date"</label>
                        <input class="form__input" type="date" readonly prop:value=move || form.with(|f| f.indent_date.clone()) />
                    </div>
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
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=on_generate
                        disabled=Signal::derive(move || submitting.get() || loading.get())
                    >
                        {move || format!("Generate Indent ({})", selected())}
                    </Button>
                </div>

                <EnquiryTable
                    title=format!("Indent {}", company)
                    columns=COLUMNS
                    rows=rows
                    loading=loading
                    no_data_message="Select a division to load pending indents".to_string()
                    on_toggle=on_toggle
                />
            </div>
        </PageFrame>
    }
}
