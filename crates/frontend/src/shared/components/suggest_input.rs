use crate::shared::config::config;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Text input with a dropdown of matching values. The list hides on blur
/// after `[ui] suggestion_blur_ms`, long enough for a click on an item to land.
#[component]
pub fn SuggestInput(
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
    /// Already filtered for the current value
    #[prop(into)]
    suggestions: Signal<Vec<String>>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let (focused, set_focused) = signal(false);

    let on_blur = move |_| {
        let delay = config().ui.suggestion_blur_ms;
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            set_focused.set(false);
        });
    };

    view! {
        <div class="suggest-input">
            <input
                class="form__input"
                type="text"
                autocomplete="off"
                placeholder=placeholder
                prop:value=value
                on:input=move |ev| on_change.run(event_target_value(&ev))
                on:focus=move |_| set_focused.set(true)
                on:blur=on_blur
            />
            {move || {
                let items = suggestions.get();
                (focused.get() && !items.is_empty()).then(|| view! {
                    <ul class="suggest-input__list">
                        {items.into_iter().map(|item| {
                            let picked = item.clone();
                            view! {
                                <li
                                    class="suggest-input__item"
                                    on:mousedown=move |_| {
                                        on_change.run(picked.clone());
                                        set_focused.set(false);
                                    }
                                >
                                    {item}
                                </li>
                            }
                        }).collect_view()}
                    </ul>
                })
            }}
        </div>
    }
}
