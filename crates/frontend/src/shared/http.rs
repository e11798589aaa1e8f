//! REST calls to the service backend
//!
//! Every helper takes a path relative to the API base and the call site's
//! fallback message, which is shown when a failed response carries neither
//! `message` nor `detail`.

use super::api_utils::api_url;
use contracts::shared::api_error::ApiError;
use contracts::shared::enquiry::{EnquiryPage, EnquiryResponse, Payload};
use gloo_net::http::{Request, RequestBuilder, Response};
use leptos::logging::log;
use serde::de::DeserializeOwned;
use serde_json::Value;

fn network(e: gloo_net::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

async fn checked(response: Response, fallback: &str) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    log!("HTTP {} from {}: {}", status, response.url(), body);
    Err(ApiError::from_response(status, &body, fallback))
}

/// Empty bodies read as `null`, non-JSON bodies as a plain string
fn lenient_json(text: String) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(&text).unwrap_or(Value::String(text))
}

fn form_data(fields: &[(String, String)]) -> Result<web_sys::FormData, ApiError> {
    let form = web_sys::FormData::new().map_err(|e| ApiError::Network(format!("{e:?}")))?;
    for (name, value) in fields {
        form.append_with_str(name, value)
            .map_err(|e| ApiError::Network(format!("{e:?}")))?;
    }
    Ok(form)
}

fn with_payload(builder: RequestBuilder, payload: &Payload) -> Result<Request, ApiError> {
    match payload {
        Payload::Json(body) => builder.json(body).map_err(network),
        Payload::Multipart(fields) => builder.body(form_data(fields)?).map_err(network),
    }
}

pub async fn get_json<T: DeserializeOwned>(path: &str, fallback: &str) -> Result<T, ApiError> {
    let url = api_url(path);
    log!("GET {}", url);
    let response = Request::get(&url).send().await.map_err(network)?;
    let response = checked(response, fallback).await?;
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Enquiry endpoints answer with either a bare array or a `{records,
/// total_records}` envelope
pub async fn get_page(path_and_query: &str, fallback: &str) -> Result<EnquiryPage, ApiError> {
    let url = api_url(path_and_query);
    log!("GET {}", url);
    let response = Request::get(&url).send().await.map_err(network)?;
    let response = checked(response, fallback).await?;
    let text = response.text().await.map_err(network)?;
    EnquiryResponse::parse(&text).map_err(|e| ApiError::Decode(e.to_string()))
}

pub async fn post(path: &str, payload: &Payload, fallback: &str) -> Result<Value, ApiError> {
    let url = api_url(path);
    log!("POST {}", url);
    let request = with_payload(Request::post(&url), payload)?;
    let response = request.send().await.map_err(network)?;
    let response = checked(response, fallback).await?;
    let text = response.text().await.map_err(network)?;
    Ok(lenient_json(text))
}

/// POST returning a binary document (PDF reports)
pub async fn post_for_blob(path: &str, payload: &Payload, fallback: &str) -> Result<Vec<u8>, ApiError> {
    let url = api_url(path);
    log!("POST {} (binary)", url);
    let request = with_payload(Request::post(&url), payload)?;
    let response = request.send().await.map_err(network)?;
    let response = checked(response, fallback).await?;
    response.binary().await.map_err(network)
}

/// Reads `field` out of a lookup response such as `{"next_rfr_number": "..."}`
pub fn lookup_field(value: &Value, field: &str) -> String {
    match value.get(field) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_lenient_json() {
        assert_eq!(lenient_json("  ".to_string()), Value::Null);
        assert_eq!(lenient_json(r#"{"ok":true}"#.to_string()), json!({"ok": true}));
        assert_eq!(lenient_json("Saved".to_string()), json!("Saved"));
    }

    #[test]
    fn test_lookup_field() {
        let value = json!({"next_cgcel_challan_code": "CH/25/0042", "next_rfr_number": 17});
        assert_eq!(lookup_field(&value, "next_cgcel_challan_code"), "CH/25/0042");
        assert_eq!(lookup_field(&value, "next_rfr_number"), "17");
        assert_eq!(lookup_field(&value, "next_cgpisl_challan_code"), "");
    }
}
