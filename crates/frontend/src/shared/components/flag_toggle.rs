use contracts::shared::enquiry::YesNo;
use leptos::prelude::*;

/// Yes/No button bound to one row flag
#[component]
pub fn FlagToggle(
    #[prop(into)] value: Signal<YesNo>,
    on_toggle: Callback<()>,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <button
            class=move || {
                if value.get().is_yes() {
                    "flag-toggle flag-toggle--yes"
                } else {
                    "flag-toggle flag-toggle--no"
                }
            }
            disabled=move || disabled.get()
            on:click=move |ev| {
                ev.stop_propagation();
                on_toggle.run(());
            }
        >
            {move || value.get().label()}
        </button>
    }
}
