//! Single-attempt submit of an action page
//!
//! Validation happens before this point; here the request is sent once, the
//! outcome is toasted and a success schedules the delayed page reload.

use super::http;
use super::reload::reload_after_delay;
use super::toast::ToastService;
use contracts::shared::api_error::Notice;
use contracts::shared::enquiry::Payload;
use leptos::logging::log;
use serde_json::Value;

pub struct Submit<'a> {
    pub path: &'a str,
    pub payload: &'a Payload,
    /// Shown when a failed response carries no message of its own
    pub fallback: &'a str,
    pub success: Notice,
    pub reload: bool,
}

pub async fn submit(toasts: ToastService, request: Submit<'_>) -> Option<Value> {
    match http::post(request.path, request.payload, request.fallback).await {
        Ok(body) => {
            log!("{} succeeded", request.path);
            toasts.notify(request.success);
            if request.reload {
                reload_after_delay();
            }
            Some(body)
        }
        Err(e) => {
            toasts.api_error(&e);
            None
        }
    }
}
