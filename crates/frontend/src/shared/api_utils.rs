//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

use super::config::{config, API_BASE_OVERRIDE_KEY};
use super::storage;

/// Get the base URL for API requests
///
/// Resolution order: the `api_base_url` storage override, `[api] base_url`
/// from `config.toml`, then the page host on the configured port.
///
/// # Example
/// ```rust,no_run
/// # use frontend::shared::api_utils::api_base;
/// let url = format!("{}/stock_cgcel/enquiry", api_base());
/// ```
pub fn api_base() -> String {
    let override_url = storage::get_item(API_BASE_OVERRIDE_KEY);
    let (protocol, hostname) = match web_sys::window() {
        Some(window) => {
            let location = window.location();
            (
                location.protocol().unwrap_or_else(|_| "http:".to_string()),
                location
                    .hostname()
                    .unwrap_or_else(|_| "127.0.0.1".to_string()),
            )
        }
        None => ("http:".to_string(), "127.0.0.1".to_string()),
    };
    config().api_base(&protocol, &hostname, override_url.as_deref())
}

/// Build a full API URL from a path such as `/complaints/employees`
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
