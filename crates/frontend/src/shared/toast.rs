//! Dismissible notification toasts
//!
//! Pages report outcomes through `ToastService::notify`; the `Toaster`
//! mounted once in the app renders the stack and drops each toast after
//! `[ui] toast_dismiss_ms`.

use super::config::config;
use super::icons::icon;
use contracts::shared::api_error::{ApiError, Notice};
use contracts::shared::enquiry::ActionError;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub notice: Notice,
}

#[derive(Clone, Copy)]
pub struct ToastService {
    toasts: RwSignal<Vec<Toast>>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
        }
    }

    pub fn notify(&self, notice: Notice) {
        let id = Uuid::new_v4();
        log::debug!("toast {:?}: {}", notice.kind, notice.message);
        self.toasts.update(|list| list.push(Toast { id, notice }));

        let this = *self;
        let delay = config().ui.toast_dismiss_ms;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(delay).await;
            this.dismiss(id);
        });
    }

    pub fn api_error(&self, err: &ApiError) {
        self.notify(Notice::from(err));
    }

    pub fn action_error(&self, err: &ActionError) {
        self.notify(err.to_notice());
    }

    pub fn dismiss(&self, id: Uuid) {
        self.toasts.update(|list| list.retain(|t| t.id != id));
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_toasts() -> ToastService {
    use_context::<ToastService>().expect("ToastService not provided in context")
}

fn intent(notice: &Notice) -> MessageBarIntent {
    use contracts::shared::api_error::NoticeKind;
    match notice.kind {
        NoticeKind::Success => MessageBarIntent::Success,
        NoticeKind::Info => MessageBarIntent::Info,
        NoticeKind::Warning => MessageBarIntent::Warning,
        NoticeKind::Error => MessageBarIntent::Error,
    }
}

#[component]
pub fn Toaster() -> impl IntoView {
    let service = use_toasts();

    view! {
        <div class="toaster">
            <For
                each=move || service.toasts.get()
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    let class = format!("toast toast--{}", toast.notice.kind.css_modifier());
                    let resolution = toast.notice.resolution.clone();
                    view! {
                        <div class=class>
                            <MessageBar intent=intent(&toast.notice)>
                                <div class="toast__body">
                                    <span class="toast__message">{toast.notice.message.clone()}</span>
                                    {resolution.map(|r| view! { <span class="toast__resolution">{r}</span> })}
                                </div>
                                <button
                                    class="button button--icon toast__close"
                                    title="Close"
                                    on:click=move |_| service.dismiss(id)
                                >
                                    {icon("x")}
                                </button>
                            </MessageBar>
                        </div>
                    }
                }
            />
        </div>
    }
}
