use super::api;
use crate::layout::global_context::{url_params, use_app_context};
use crate::shared::components::enquiry_table::EnquiryTable;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::config::config;
use crate::shared::dispatch::{submit, Submit};
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{page_id, PAGE_CAT_USECASE};
use crate::shared::toast::use_toasts;
use contracts::shared::api_error::Notice;
use contracts::shared::enquiry::row::{count_flagged, toggle_row_flag};
use contracts::shared::enquiry::{EnquiryRow, PaginationState, Payload};
use contracts::usecases::u203_complaint_mail::{
    complaint_numbers, enquiry_criteria, ComplaintMail, preview_columns, select_for_export, COLUMNS, EXPORT_FLAG,
    SEND_ENDPOINT,
};
use contracts::usecases::common::UseCaseMetadata;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

pub const TAB_KEY: &str = "u203_complaint_mail";

#[component]
pub fn ComplaintMailView() -> impl IntoView {
    let ctx = use_app_context();
    let toasts = use_toasts();
    let rows = RwSignal::new(Vec::<EnquiryRow>::new());
    let loading = RwSignal::new(false);
    let pagination = RwSignal::new(PaginationState::new(config().ui.default_page_size));
    let preview = RwSignal::new(None::<Vec<EnquiryRow>>);
    let sending = RwSignal::new(false);

    let fetch = move || {
        let criteria = enquiry_criteria(&url_params(), ctx.company.get_untracked());
        let current = pagination.get_untracked();
        loading.set(true);
        spawn_local(async move {
            match api::fetch_page(&criteria, current).await {
                Ok(page) => {
                    pagination.update(|p| p.apply(&page));
                    rows.set(page.records);
                }
                Err(e) => {
                    rows.set(Vec::new());
                    toasts.api_error(&e);
                }
            }
            loading.set(false);
        });
    };

    // refetch from the first page whenever the header company changes
    Effect::new(move |_| {
        ctx.company.track();
        pagination.update(|p| *p = p.at_page(1));
        fetch();
    });

    let on_page_change = Callback::new(move |next: PaginationState| {
        pagination.set(next);
        fetch();
    });

    let on_toggle = Callback::new(move |(index, key): (usize, &'static str)| {
        rows.update(|list| {
            toggle_row_flag(list, index, key);
        });
    });

    let on_export = move |_| match select_for_export(&rows.get_untracked()) {
        Ok(selected) => preview.set(Some(selected)),
        Err(e) => toasts.action_error(&e),
    };

    let close_preview = Callback::new(move |_| preview.set(None));

    let on_send = move |_| {
        let Some(selected) = preview.get_untracked() else {
            return;
        };
        let numbers = complaint_numbers(&selected);
        let count = numbers.len();
        let payload = Payload::Json(serde_json::json!(numbers));
        sending.set(true);
        spawn_local(async move {
            let sent = submit(
                toasts,
                Submit {
                    path: SEND_ENDPOINT,
                    payload: &payload,
                    fallback: "Failed to send complaints",
                    success: Notice::success("Complaints sent to HO")
                        .with_resolution(format!("{} complaint(s) mailed.", count)),
                    reload: true,
                },
            )
            .await;
            if sent.is_some() {
                preview.set(None);
            }
            sending.set(false);
        });
    };

    let selected_count = move || rows.with(|list| count_flagged(list, EXPORT_FLAG));

    view! {
        <PageFrame page_id=page_id(TAB_KEY, PAGE_CAT_USECASE) category=PAGE_CAT_USECASE>
            <div class="page__header">
                <h2>{ComplaintMail::display_name()}</h2>
                <div class="page__header-actions">
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                        {move || ctx.company.get().map(|c| c.code()).unwrap_or("All companies")}
                    </Badge>
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        "Refresh"
                    </button>
                    <Button appearance=ButtonAppearance::Primary on_click=on_export>
                        {move || format!("Export ({})", selected_count())}
                    </Button>
                </div>
            </div>
            <div class="page__content">
                <PaginationControls
                    state=pagination
                    rows_on_page=Signal::derive(move || rows.with(Vec::len))
                    on_change=on_page_change
                />
                <EnquiryTable
                    title="Mail To Be Sent Complaints"
                    columns=COLUMNS
                    rows=rows
                    loading=loading
                    total_records=Signal::derive(move || pagination.get().total_records)
                    on_toggle=on_toggle
                />
            </div>

            {move || preview.get().map(|selected| {
                let count = selected.len();
                view! {
                    <Modal
                        title=format!("Export Preview ({} complaints)", count)
                        on_close=close_preview
                        footer=move || view! {
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=on_send
                                disabled=Signal::derive(move || sending.get())
                            >
                                {icon("mail")}
                                "Send to HO"
                            </Button>
                            <Button on_click=move |_| close_preview.run(())>"Cancel"</Button>
                        }
                    >
                        <EnquiryTable
                            title="Complaints to HO"
                            columns=preview_columns()
                            rows=Signal::derive(move || selected.clone())
                            loading=false
                        />
                    </Modal>
                }
            })}
        </PageFrame>
    }
}
