use crate::shared::http;
use contracts::enums::company::Company;
use contracts::projections::p103_spare_list::{endpoint, SpareListItem};
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Fills `target` with the spare master of `company`. Suggestions are a
/// convenience, so a failed fetch just leaves the list empty.
pub fn load_spare_list(company: Company, target: RwSignal<Vec<SpareListItem>>) {
    spawn_local(async move {
        match http::get_json::<Vec<SpareListItem>>(&endpoint(company), "Failed to load spares").await {
            Ok(items) => target.set(items),
            Err(e) => log!("spare list unavailable: {}", e),
        }
    });
}
