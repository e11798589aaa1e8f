use super::suggest_input::SuggestInput;
use crate::shared::icons::icon;
use contracts::projections::p103_spare_list::{suggestions, SpareListItem};
use contracts::shared::enquiry::{FilterCriteria, FilterField, FilterKind};
use leptos::prelude::*;

/// Slide-in filter panel. Open/closed only switches a CSS class, so the
/// field values survive closing the panel.
#[component]
pub fn FilterPanel(
    is_open: RwSignal<bool>,
    /// Number of non-blank fields, shown as a badge on the toggle
    #[prop(into)]
    active_filters_count: Signal<usize>,
    on_search: Callback<()>,
    on_clear: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=move || {
            if is_open.get() {
                "filter-panel filter-panel--open"
            } else {
                "filter-panel"
            }
        }>
            <div class="filter-panel-header">
                <div class="filter-panel-header__left" on:click=move |_| is_open.update(|o| *o = !*o)>
                    {icon("filter")}
                    <span class="filter-panel__title">"Filters"</span>
                    {move || {
                        let count = active_filters_count.get();
                        (count > 0).then(|| view! { <span class="badge badge--primary">{count}</span> })
                    }}
                </div>
                <button class="button button--icon" on:click=move |_| is_open.set(false)>
                    {icon("x")}
                </button>
            </div>

            <div class="filter-panel-content">
                {children()}
            </div>

            <div class="filter-panel-footer">
                <button
                    class="button button--primary"
                    on:click=move |_| {
                        on_search.run(());
                        is_open.set(false);
                    }
                >
                    {icon("search")}
                    "Search"
                </button>
                <button class="button button--secondary" on:click=move |_| on_clear.run(())>
                    "Clear"
                </button>
            </div>
        </div>
    }
}

/// Renders one filter field bound to `criteria[field.key]`
#[component]
pub fn FilterFieldInput(
    field: FilterField,
    criteria: RwSignal<FilterCriteria>,
    /// Spare master used by `FilterKind::Suggest` fields
    #[prop(into)]
    spares: Signal<Vec<SpareListItem>>,
) -> impl IntoView {
    let key = field.key;
    let value = Signal::derive(move || criteria.with(|c| c.get(key).to_string()));
    let set = move |text: String| criteria.update(|c| c.set(key, &text));

    let input = match field.kind {
        FilterKind::Text | FilterKind::Number => {
            let input_type = if field.kind == FilterKind::Number { "number" } else { "text" };
            view! {
                <input
                    class="form__input"
                    type=input_type
                    prop:value=value
                    on:input=move |ev| set(event_target_value(&ev))
                />
            }
            .into_any()
        }
        FilterKind::Date => view! {
            <input
                class="form__input"
                type="date"
                prop:value=value
                on:change=move |ev| set(event_target_value(&ev))
            />
        }
        .into_any(),
        FilterKind::Select(options) => view! {
            <select class="form__select" prop:value=value on:change=move |ev| set(event_target_value(&ev))>
                <option value="">"Select"</option>
                {options.iter().map(|(v, label)| view! { <option value=*v>{*label}</option> }).collect_view()}
            </select>
        }
        .into_any(),
        FilterKind::Choice(options) => view! {
            <select class="form__select" prop:value=value on:change=move |ev| set(event_target_value(&ev))>
                <option value="">"Select"</option>
                {options.iter().map(|v| view! { <option value=*v>{*v}</option> }).collect_view()}
            </select>
        }
        .into_any(),
        FilterKind::Suggest(source_key) => {
            let options =
                Signal::derive(move || suggestions(&spares.get(), source_key, &value.get()));
            view! {
                <SuggestInput value=value on_change=Callback::new(set) suggestions=options />
            }
            .into_any()
        }
    };

    view! {
        <div class="form__group">
            <label class="form__label">{field.label}</label>
            {input}
        </div>
    }
}
