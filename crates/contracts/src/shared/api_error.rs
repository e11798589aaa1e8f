//! Uniform error contract of the REST backend and its client-side rendering
//!
//! Non-2xx responses carry `{message, detail, resolution}`. The client shows
//! `message` (falling back to `detail`) together with `resolution` in a
//! dismissible toast.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error body as returned by the backend
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    /// Either a plain string or the validation error list `[{msg, loc, ...}]`
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
    #[serde(default)]
    pub resolution: Option<String>,
}

impl ApiErrorBody {
    /// `message`, then `detail`, skipping blanks
    pub fn best_message(&self) -> Option<String> {
        non_blank(self.message.as_deref()).or_else(|| self.detail.as_ref().and_then(detail_text))
    }
}

fn non_blank(s: Option<&str>) -> Option<String> {
    s.map(str::trim).filter(|s| !s.is_empty()).map(String::from)
}

fn detail_text(detail: &serde_json::Value) -> Option<String> {
    match detail {
        serde_json::Value::String(s) => non_blank(Some(s)),
        serde_json::Value::Array(items) => {
            let parts: Vec<String> = items
                .iter()
                .filter_map(|item| match item {
                    serde_json::Value::String(s) => Some(s.clone()),
                    other => other.get("msg").and_then(|m| m.as_str()).map(String::from),
                })
                .collect();
            if parts.is_empty() {
                None
            } else {
                Some(parts.join("; "))
            }
        }
        _ => None,
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("{message}")]
    Backend {
        status: u16,
        message: String,
        resolution: Option<String>,
    },
    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Normalizes a non-2xx response. `fallback` is the call site's message
    /// when the body carries neither `message` nor `detail` (or is not JSON).
    pub fn from_response(status: u16, body: &str, fallback: &str) -> Self {
        let parsed: ApiErrorBody = serde_json::from_str(body).unwrap_or_default();
        ApiError::Backend {
            status,
            message: parsed
                .best_message()
                .unwrap_or_else(|| fallback.to_string()),
            resolution: non_blank(parsed.resolution.as_deref()),
        }
    }

    pub fn resolution(&self) -> Option<&str> {
        match self {
            ApiError::Backend { resolution, .. } => resolution.as_deref(),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Info,
    Warning,
    Error,
}

impl NoticeKind {
    pub fn css_modifier(&self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Info => "info",
            NoticeKind::Warning => "warning",
            NoticeKind::Error => "error",
        }
    }
}

/// User-facing message rendered as a toast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    pub resolution: Option<String>,
}

impl Notice {
    pub fn new(kind: NoticeKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            resolution: None,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Success, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Error, message)
    }

    pub fn with_resolution(mut self, resolution: impl Into<String>) -> Self {
        let resolution = resolution.into();
        if !resolution.trim().is_empty() {
            self.resolution = Some(resolution);
        }
        self
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl From<&ApiError> for Notice {
    fn from(err: &ApiError) -> Self {
        let notice = Notice::error(err.to_string());
        match err.resolution() {
            Some(resolution) => notice.with_resolution(resolution),
            None => notice.with_resolution("Please try again."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_preferred_over_detail() {
        let err = ApiError::from_response(
            409,
            r#"{"message":"Complaint number already exists","detail":"dup","resolution":"Use another number"}"#,
            "Failed",
        );
        assert_eq!(err.to_string(), "Complaint number already exists");
        assert_eq!(err.resolution(), Some("Use another number"));
    }

    #[test]
    fn test_detail_fallback_and_validation_list() {
        let err = ApiError::from_response(404, r#"{"detail":"Not Found"}"#, "Failed");
        assert_eq!(err.to_string(), "Not Found");

        let err = ApiError::from_response(
            422,
            r#"{"detail":[{"loc":["body","division"],"msg":"field required"},{"msg":"bad qty"}]}"#,
            "Failed",
        );
        assert_eq!(err.to_string(), "field required; bad qty");
        assert_eq!(err.resolution(), None);
    }

    #[test]
    fn test_non_json_body_uses_fallback() {
        let err = ApiError::from_response(502, "<html>Bad Gateway</html>", "Failed to fetch records");
        assert_eq!(
            err,
            ApiError::Backend {
                status: 502,
                message: "Failed to fetch records".to_string(),
                resolution: None,
            }
        );
    }

    #[test]
    fn test_notice_from_error() {
        let err = ApiError::from_response(400, r#"{"message":"Stock not available","resolution":""}"#, "x");
        let notice = Notice::from(&err);
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.message, "Stock not available");
        assert_eq!(notice.resolution.as_deref(), Some("Please try again."));
    }
}
