//! Submit/execute dispatcher building blocks
//!
//! An action page gathers flagged rows, checks its companion form fields,
//! builds a payload and makes a single request. Validation failures never
//! reach the network; success is followed by a delayed full page reload.

use crate::shared::api_error::{ApiError, Notice};
use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

/// Delay between the success toast and the page reload
pub const RELOAD_DELAY_MS: u32 = 1500;

/// Request body of an action
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Json(serde_json::Value),
    Multipart(Vec<(String, String)>),
}

impl Payload {
    pub fn json<T: Serialize>(body: &T) -> Result<Self, ActionError> {
        serde_json::to_value(body)
            .map(Payload::Json)
            .map_err(|e| ActionError::Api(ApiError::Decode(e.to_string())))
    }

    /// Flattens a JSON object into text form fields; arrays and objects are
    /// sent as their JSON text
    pub fn multipart_from(value: &serde_json::Value) -> Self {
        let fields = value
            .as_object()
            .map(|map| {
                map.iter()
                    .map(|(k, v)| {
                        let text = match v {
                            serde_json::Value::String(s) => s.clone(),
                            serde_json::Value::Null => String::new(),
                            other => other.to_string(),
                        };
                        (k.clone(), text)
                    })
                    .collect()
            })
            .unwrap_or_default();
        Payload::Multipart(fields)
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ActionError {
    #[error("{0}")]
    Validation(Notice),
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl ActionError {
    pub fn to_notice(&self) -> Notice {
        match self {
            ActionError::Validation(notice) => notice.clone(),
            ActionError::Api(err) => Notice::from(err),
        }
    }
}

/// Companion form field that must be non-blank before submitting
#[derive(Debug, Clone, PartialEq)]
pub struct Requirement {
    pub field: &'static str,
    pub message: &'static str,
    pub resolution: &'static str,
}

impl Requirement {
    pub const fn new(field: &'static str, message: &'static str, resolution: &'static str) -> Self {
        Self {
            field,
            message,
            resolution,
        }
    }
}

/// Plain key/value form state of an action page
pub type ActionForm = BTreeMap<String, String>;

pub fn form_value<'a>(form: &'a ActionForm, field: &str) -> &'a str {
    form.get(field).map(|v| v.trim()).unwrap_or("")
}

/// Fails on the first blank required field, in declaration order
pub fn validate_required(form: &ActionForm, requirements: &[Requirement]) -> Result<(), ActionError> {
    match requirements
        .iter()
        .find(|req| form_value(form, req.field).is_empty())
    {
        Some(req) => Err(ActionError::Validation(
            Notice::warning(req.message).with_resolution(req.resolution),
        )),
        None => Ok(()),
    }
}

pub fn require_selection(count: usize, message: &str, resolution: &str) -> Result<(), ActionError> {
    if count == 0 {
        Err(ActionError::Validation(
            Notice::warning(message).with_resolution(resolution),
        ))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api_error::NoticeKind;
    use serde_json::json;

    const REQS: &[Requirement] = &[
        Requirement::new("docket_number", "Consignment No. is required", ""),
        Requirement::new("sent_through", "Returned Through is required", ""),
    ];

    #[test]
    fn test_first_missing_field_reported() {
        let mut form = ActionForm::new();
        form.insert("docket_number".into(), "  ".into());
        let err = validate_required(&form, REQS).unwrap_err();
        let notice = err.to_notice();
        assert_eq!(notice.kind, NoticeKind::Warning);
        assert_eq!(notice.message, "Consignment No. is required");
        assert_eq!(notice.resolution, None);

        form.insert("docket_number".into(), "DK123".into());
        let err = validate_required(&form, REQS).unwrap_err();
        assert_eq!(err.to_string(), "Returned Through is required");

        form.insert("sent_through".into(), "Courier".into());
        assert!(validate_required(&form, REQS).is_ok());
    }

    #[test]
    fn test_require_selection() {
        assert!(require_selection(2, "x", "y").is_ok());
        let notice = require_selection(0, "No records selected.", "Please select at least one record.")
            .unwrap_err()
            .to_notice();
        assert_eq!(notice.resolution.as_deref(), Some("Please select at least one record."));
    }

    #[test]
    fn test_multipart_flattening() {
        let payload = Payload::multipart_from(&json!({
            "rfr_number": "RFR/25/001",
            "complaint_numbers": ["C1", "C2"],
            "note": null
        }));
        let Payload::Multipart(mut fields) = payload else {
            panic!("expected multipart payload");
        };
        fields.sort();
        assert_eq!(
            fields,
            vec![
                ("complaint_numbers".to_string(), r#"["C1","C2"]"#.to_string()),
                ("note".to_string(), String::new()),
                ("rfr_number".to_string(), "RFR/25/001".to_string()),
            ]
        );
    }
}
