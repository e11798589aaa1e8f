use crate::shared::icons::icon;
use contracts::shared::enquiry::page::PAGE_SIZE_OPTIONS;
use contracts::shared::enquiry::PaginationState;
use leptos::prelude::*;

/// Previous / Next buttons and the page-size select of an enquiry list
#[component]
pub fn PaginationControls(
    #[prop(into)] state: Signal<PaginationState>,
    /// Rows on the current page, for the full-page Next heuristic
    #[prop(into)]
    rows_on_page: Signal<usize>,
    /// Receives the new state; the owner refetches
    on_change: Callback<PaginationState>,
) -> impl IntoView {
    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_change.run(state.get().previous_page())
                disabled=move || !state.get().has_previous()
                title="Previous page"
            >
                {icon("chevron-left")}
                "Previous"
            </button>
            <span class="pagination-info">
                {move || format!("Page {}", state.get().page)}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| on_change.run(state.get().next_page())
                disabled=move || !state.get().has_next(rows_on_page.get())
                title="Next page"
            >
                "Next"
                {icon("chevron-right")}
            </button>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    if let Ok(limit) = event_target_value(&ev).parse::<usize>() {
                        on_change.run(state.get().with_limit(limit));
                    }
                }
                prop:value=move || state.get().limit.to_string()
            >
                {PAGE_SIZE_OPTIONS.iter().map(|&size| {
                    view! {
                        <option value=size.to_string() selected=move || state.get().limit == size>
                            {size.to_string()}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}
