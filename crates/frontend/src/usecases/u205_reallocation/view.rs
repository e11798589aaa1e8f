use super::api;
use crate::shared::components::enquiry_table::EnquiryTable;
use crate::shared::dispatch::{submit, Submit};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{page_id, PAGE_CAT_USECASE};
use crate::shared::toast::use_toasts;
use contracts::shared::enquiry::{EnquiryRow, Payload, Selection};
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u205_reallocation::{build_request, Reallocation, ReallocationForm, COLUMNS, REALLOCATE_ENDPOINT};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

pub const TAB_KEY: &str = "u205_reallocation";

#[component]
fn TechnicianSelect(
    #[prop(into)] label: String,
    value: Signal<String>,
    employees: RwSignal<Vec<String>>,
    /// Technician to leave out of the list
    #[prop(optional, into)]
    exclude: Signal<String>,
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            <select
                class="form__select"
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                <option value="">"Select"</option>
                {move || {
                    let skip = exclude.get();
                    employees
                        .get()
                        .into_iter()
                        .filter(|name| skip.is_empty() || *name != skip)
                        .map(|name| view! { <option value=name.clone()>{name.clone()}</option> })
                        .collect_view()
                }}
            </select>
        </div>
    }
}

#[component]
pub fn ReallocationView() -> impl IntoView {
    let toasts = use_toasts();
    let employees = RwSignal::new(Vec::<String>::new());
    let form = RwSignal::new(ReallocationForm::default());
    let rows = RwSignal::new(Vec::<EnquiryRow>::new());
    let selection = RwSignal::new(Selection::default());
    let loading = RwSignal::new(false);
    let submitting = RwSignal::new(false);

    spawn_local(async move {
        match api::fetch_employees().await {
            Ok(list) => employees.set(list),
            Err(e) => toasts.api_error(&e),
        }
    });

    let on_old_change = Callback::new(move |technician: String| {
        form.update(|f| {
            f.old_technician = technician.clone();
            if f.new_technician == technician {
                f.new_technician.clear();
            }
        });
        selection.update(Selection::clear);
        if technician.is_empty() {
            rows.set(Vec::new());
            return;
        }
        loading.set(true);
        spawn_local(async move {
            match api::fetch_allocated(&technician).await {
                Ok(list) => rows.set(list),
                Err(e) => {
                    rows.set(Vec::new());
                    toasts.api_error(&e);
                }
            }
            loading.set(false);
        });
    });

    let on_new_change = Callback::new(move |technician: String| {
        form.update(|f| f.new_technician = technician);
    });

    let on_select = Callback::new(move |id: String| selection.update(|s| s.toggle(&id)));

    let on_reallocate = move |_| {
        let request = match build_request(&form.get_untracked(), &selection.get_untracked()) {
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
                    path: REALLOCATE_ENDPOINT,
                    payload: &payload,
                    fallback: "Failed to reallocate complaints",
                    success: request.success_notice(),
                    reload: true,
                },
            )
            .await;
            submitting.set(false);
        });
    };

    view! {
        <PageFrame page_id=page_id(TAB_KEY, PAGE_CAT_USECASE) category=PAGE_CAT_USECASE>
            <div class="page__header">
                <h2>{Reallocation::display_name()}</h2>
            </div>
            <div class="page__content">
                <div class="form form--inline">
                    <TechnicianSelect
                        label="Allocated To"
                        value=Signal::derive(move || form.with(|f| f.old_technician.clone()))
                        employees=employees
                        on_change=on_old_change
                    />
                    <TechnicianSelect
                        label="Reallocate To"
                        value=Signal::derive(move || form.with(|f| f.new_technician.clone()))
                        employees=employees
                        exclude=Signal::derive(move || form.with(|f| f.old_technician.clone()))
                        on_change=on_new_change
                    />
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=on_reallocate
                        disabled=Signal::derive(move || submitting.get())
                    >
                        {move || format!("Reallocate ({})", selection.with(Selection::len))}
                    </Button>
                </div>

                <EnquiryTable
                    title="Allocated Complaints"
                    columns=COLUMNS
                    rows=rows
                    loading=loading
                    no_data_message="Select a technician to load allocated complaints".to_string()
                    selection=selection
                    on_select=on_select
                />
            </div>
        </PageFrame>
    }
}
