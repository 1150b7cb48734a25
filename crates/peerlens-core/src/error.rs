//! Structured error types for the JSON boundary.
//!
//! The analyzers never fail; these errors only describe problems with the
//! request itself (malformed JSON, bad settings, unknown mode).

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Error codes for peerlens operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// Invalid JSON input.
    InvalidJson,
    /// Invalid settings or arguments.
    InvalidSettings,
    /// Unknown operation mode.
    UnknownMode,
    /// Internal error (unexpected state).
    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCode::InvalidJson => write!(f, "invalid_json"),
            ErrorCode::InvalidSettings => write!(f, "invalid_settings"),
            ErrorCode::UnknownMode => write!(f, "unknown_mode"),
            ErrorCode::InternalError => write!(f, "internal_error"),
        }
    }
}

/// Structured error for binding-friendly error reporting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeerlensError {
    /// Error code for programmatic handling.
    pub code: ErrorCode,
    /// Human-readable error message.
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl PeerlensError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(
        code: ErrorCode,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            details: Some(details.into()),
        }
    }

    pub fn invalid_json(err: impl fmt::Display) -> Self {
        Self::new(ErrorCode::InvalidJson, format!("Invalid JSON: {}", err))
    }

    /// A request field is present but has the wrong type or value.
    pub fn invalid_field(field: &str, expected: &str) -> Self {
        Self::new(
            ErrorCode::InvalidSettings,
            format!("Invalid value for '{}': expected {}", field, expected),
        )
    }

    /// Settings parsed but failed validation.
    pub fn invalid_settings(err: impl fmt::Display) -> Self {
        Self::with_details(
            ErrorCode::InvalidSettings,
            "Invalid settings",
            err.to_string(),
        )
    }

    pub fn unknown_mode(mode: &str) -> Self {
        Self::new(ErrorCode::UnknownMode, format!("Unknown mode: {}", mode))
    }

    pub fn internal(err: impl fmt::Display) -> Self {
        Self::new(ErrorCode::InternalError, format!("Internal error: {}", err))
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            format!(
                r#"{{"code":"{}","message":"{}"}}"#,
                self.code, self.message
            )
        })
    }
}

impl fmt::Display for PeerlensError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(details) = &self.details {
            write!(f, "[{}] {}: {}", self.code, self.message, details)
        } else {
            write!(f, "[{}] {}", self.code, self.message)
        }
    }
}

impl std::error::Error for PeerlensError {}

impl From<serde_json::Error> for PeerlensError {
    fn from(err: serde_json::Error) -> Self {
        Self::invalid_json(err)
    }
}

/// `{"ok": true, "data": ...}` or `{"ok": false, "error": {...}}`.
#[derive(Debug, Clone, Serialize)]
pub struct ResponseEnvelope {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<PeerlensError>,
}

impl ResponseEnvelope {
    pub fn success(data: Value) -> Self {
        Self {
            ok: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(err: &PeerlensError) -> Self {
        Self {
            ok: false,
            data: None,
            error: Some(err.clone()),
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| {
            format!(
                r#"{{"ok":false,"error":{}}}"#,
                PeerlensError::internal(e).to_json()
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes_serialize_to_snake_case() {
        let err = PeerlensError::invalid_json("eof");
        let json = err.to_json();
        assert!(json.contains("\"code\":\"invalid_json\""));
        assert!(!json.contains("details"));
    }

    #[test]
    fn error_display_includes_code_and_details() {
        let err = PeerlensError::invalid_settings("weights must not all be zero");
        let display = err.to_string();
        assert_eq!(
            display,
            "[invalid_settings] Invalid settings: weights must not all be zero"
        );
    }

    #[test]
    fn internal_errors_use_internal_code() {
        let err = PeerlensError::internal("float out of range");
        assert_eq!(err.code, ErrorCode::InternalError);
        assert_eq!(err.to_string(), "[internal_error] Internal error: float out of range");
    }

    #[test]
    fn envelope_error_omits_data() {
        let json = ResponseEnvelope::error(&PeerlensError::unknown_mode("x")).to_json();
        let v: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v["ok"], false);
        assert!(v.get("data").is_none());
        assert_eq!(v["error"]["code"], "unknown_mode");
    }
}
