use super::config::config;
use leptos::task::spawn_local;

/// Full page reload after `[ui] reload_delay_ms`, leaving time to read the
/// success toast
pub fn reload_after_delay() {
    let delay = config().ui.reload_delay_ms;
    spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(delay).await;
        if let Some(window) = web_sys::window() {
            if window.location().reload().is_err() {
                log::warn!("page reload failed");
            }
        }
    });
}
