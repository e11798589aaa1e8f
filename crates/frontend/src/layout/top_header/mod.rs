//! Top bar: sidebar toggle, application title and the company picker that
//! scopes the dashboard and the mail-to-be-sent list.

use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;
use contracts::enums::company::Company;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_app_context();

    let is_sidebar_visible = move || ctx.left_open.get();

    let on_company_change = move |ev: leptos::ev::Event| {
        ctx.set_company(Company::from_code(&event_target_value(&ev)));
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {move || if is_sidebar_visible() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>
                <span class="top-header__title">"Service Desk"</span>
            </div>

            <div class="top-header__actions">
                <select
                    class="top-header__company"
                    prop:value=move || ctx.company.get().map(|c| c.code()).unwrap_or("")
                    on:change=on_company_change
                >
                    <option value="">"All companies"</option>
                    {Company::all().into_iter().map(|c| view! {
                        <option value=c.code()>{c.code()}</option>
                    }).collect_view()}
                </select>
            </div>
        </div>
    }
}
