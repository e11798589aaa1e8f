use super::api;
use crate::shared::components::enquiry_table::EnquiryTable;
use crate::shared::dispatch::{submit, Submit};
use crate::shared::modal::Modal;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{page_id, PAGE_CAT_USECASE};
use crate::shared::toast::use_toasts;
use contracts::enums::company::RFR_DIVISIONS;
use contracts::shared::enquiry::{EnquiryRow, Selection, SelectionMode};
use contracts::usecases::u204_generate_rfr::{
    build_request, selection_mode, GenerateRfr, GenerateRfrRequest, RfrForm, COLUMNS, PRODUCT_TYPES,
    REPORT_ENDPOINT, RFR_TYPES,
};
use contracts::usecases::common::UseCaseMetadata;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

pub const TAB_KEY: &str = "u204_generate_rfr";

fn options(values: &'static [&'static str]) -> impl IntoView {
    view! {
        <option value="">"Select"</option>
        {values.iter().map(|v| view! { <option value=*v>{*v}</option> }).collect_view()}
    }
}

#[component]
pub fn GenerateRfrView() -> impl IntoView {
    let toasts = use_toasts();
    let form = RwSignal::new(RfrForm::default());
    let rows = RwSignal::new(Vec::<EnquiryRow>::new());
    let selection = RwSignal::new(Selection::new(SelectionMode::Multiple));
    let loading = RwSignal::new(false);
    let confirm = RwSignal::new(None::<GenerateRfrRequest>);
    let submitting = RwSignal::new(false);

    spawn_local(async move {
        let number = api::next_rfr_number().await;
        form.update(|f| f.rfr_number = number);
    });

    let load_division = move |division: String| {
        form.update(|f| f.product_division = division.clone());
        selection.update(Selection::clear);
        if division.is_empty() {
            rows.set(Vec::new());
            return;
        }
        loading.set(true);
        spawn_local(async move {
            match api::fetch_rows(&division).await {
                Ok(list) => rows.set(list),
                Err(e) => {
                    rows.set(Vec::new());
                    toasts.api_error(&e);
                }
            }
            loading.set(false);
        });
    };

    let set_rfr_type = move |rfr_type: String| {
        selection.update(|s| s.set_mode(selection_mode(&rfr_type)));
        form.update(|f| f.rfr_type = rfr_type);
    };

    let on_select = Callback::new(move |id: String| selection.update(|s| s.toggle(&id)));

    let select_all = move |_| {
        let ids: Vec<String> = rows.with(|list| list.iter().map(|r| r.text("complaint_number")).collect());
        selection.update(|s| {
            if s.covers(&ids) {
                s.clear();
            } else {
                s.select_all(ids);
            }
        });
    };

    let on_generate = move |_| match build_request(&form.get_untracked(), &selection.get_untracked()) {
        Ok(request) => confirm.set(Some(request)),
        Err(e) => toasts.action_error(&e),
    };

    let close_confirm = Callback::new(move |_| confirm.set(None));

    let on_confirm = move |_| {
        let Some(request) = confirm.get_untracked() else {
            return;
        };
        let payload = match request.to_payload() {
            Ok(payload) => payload,
            Err(e) => {
                toasts.action_error(&e);
                return;
            }
        };
        submitting.set(true);
        spawn_local(async move {
            let done = submit(
                toasts,
                Submit {
                    path: REPORT_ENDPOINT,
                    payload: &payload,
                    fallback: "Failed to generate RFR",
                    success: request.success_notice(),
                    reload: true,
                },
            )
            .await;
            if done.is_some() {
                confirm.set(None);
            }
            submitting.set(false);
        });
    };

    view! {
        <PageFrame page_id=page_id(TAB_KEY, PAGE_CAT_USECASE) category=PAGE_CAT_USECASE>
            <div class="page__header">
                <h2>{GenerateRfr::display_name()}</h2>
            </div>
            <div class="page__content">
                <div class="form form--inline">
                    <div class="form__group">
                        <label class="form__label">"Division"</label>
                        <select
                            class="form__select"
                            prop:value=move || form.with(|f| f.product_division.clone())
                            on:change=move |ev| load_division(event_target_value(&ev))
                        >
                            {options(RFR_DIVISIONS)}
                        </select>
                    </div>
                    <div class="form__group">
                        <label class="form__label">"RFR Type"</label>
                        <select
                            class="form__select"
                            prop:value=move || form.with(|f| f.rfr_type.clone())
                            on:change=move |ev| set_rfr_type(event_target_value(&ev))
                        >
                            {options(RFR_TYPES)}
                        </select>
                    </div>
                    <div class="form__group">
                        <label class="form__label">"Product Type"</label>
                        <select
                            class="form__select"
                            prop:value=move || form.with(|f| f.product_type.clone())
                            on:change=move |ev| form.update(|f| f.product_type = event_target_value(&ev))
                        >
                            {options(PRODUCT_TYPES)}
                        </select>
                    </div>
                    <div class="form__group">
                        <label class="form__label">"RFR Number"</label>
                        <input
                            class="form__input"
                            prop:value=move || form.with(|f| f.rfr_number.clone())
                            on:input=move |ev| form.update(|f| f.rfr_number = event_target_value(&ev))
                        />
                    </div>
                    <Show when=move || selection.with(|s| s.mode() == SelectionMode::Multiple)>
                        <Button on_click=select_all>"Select All"</Button>
                    </Show>
                    <Button appearance=ButtonAppearance::Primary on_click=on_generate>
                        {move || format!("Generate RFR ({})", selection.with(Selection::len))}
                    </Button>
                </div>

                <EnquiryTable
                    title="RFR Complaints"
                    columns=COLUMNS
                    rows=rows
                    loading=loading
                    no_data_message="Select a division to load complaints".to_string()
                    selection=selection
                    on_select=on_select
                />
            </div>

            {move || confirm.get().map(|request| {
                let summary = format!(
                    "{} RFR {} for {} complaint(s) of {} ({})",
                    request.rfr_type,
                    request.rfr_number,
                    request.complaint_numbers.len(),
                    request.product_division,
                    request.product_type,
                );
                view! {
                    <Modal
                        title="Confirm RFR"
                        on_close=close_confirm
                        footer=move || view! {
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=on_confirm
                                disabled=Signal::derive(move || submitting.get())
                            >
                                "Confirm"
                            </Button>
                            <Button on_click=move |_| close_confirm.run(())>"Cancel"</Button>
                        }
                    >
                        <p>{summary}</p>
                        <p class="modal-body__list">{request.complaint_numbers.join(", ")}</p>
                    </Modal>
                }
            })}
        </PageFrame>
    }
}
