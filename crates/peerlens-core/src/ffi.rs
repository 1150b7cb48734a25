//! FFI-friendly JSON entrypoint for language bindings.
//!
//! This module provides a single `run_json` function that accepts
//! a mode string and JSON arguments, returning a JSON result.
//!
//! ## Response Envelope
//!
//! - Success: `{"ok": true, "data": {...}}`
//! - Error: `{"ok": false, "error": {"code": "...", "message": "...", "details": ...}}`
//!
//! ## Strict Parsing
//!
//! - Missing keys use sensible defaults
//! - Invalid values return errors (no silent fallback to defaults)
//!
//! ## Modes
//!
//! | mode | arguments |
//! |---|---|
//! | `analyze` | `content`, `kind`, `language`, `settings` |
//! | `similarity` | `content`, `corpus`, `settings` |
//! | `feedback` | `metrics` (a text-metrics object) or `content` |
//! | `submission` | `content`, `kind`, `language`, `corpus`, `settings` |
//! | `batch` | `items`, `settings` |
//! | `version` | none |

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use peerlens_settings::EngineSettings;
use peerlens_types::{BatchItem, ContentKind, DocumentRef, TextMetrics};

use crate::error::{PeerlensError, ResponseEnvelope};

/// Run a peerlens operation with JSON arguments, returning JSON output.
///
/// # Example
///
/// ```
/// let out = peerlens_core::ffi::run_json("analyze", r#"{"content": "A short note."}"#);
/// assert!(out.starts_with(r#"{"ok":true"#));
/// ```
pub fn run_json(mode: &str, args_json: &str) -> String {
    match run_json_inner(mode, args_json) {
        Ok(data) => ResponseEnvelope::success(data).to_json(),
        Err(err) => {
            tracing::debug!(mode, code = %err.code, "run_json failed");
            ResponseEnvelope::error(&err).to_json()
        }
    }
}

fn run_json_inner(mode: &str, args_json: &str) -> Result<Value, PeerlensError> {
    let args: Value = serde_json::from_str(args_json)?;
    if !args.is_object() {
        return Err(PeerlensError::invalid_json("arguments must be a JSON object"));
    }

    match mode {
        "analyze" => {
            let settings = parse_settings(&args)?;
            let content = parse_string(&args, "content", "")?;
            let kind = parse_kind(&args)?;
            let language = parse_optional_string(&args, "language")?;
            let analysis =
                crate::analyze_content_with(&content, kind, language.as_deref(), &settings);
            to_data(&analysis)
        }
        "similarity" => {
            let settings = parse_settings(&args)?;
            let content = parse_string(&args, "content", "")?;
            let corpus: Vec<DocumentRef> = parse_array(&args, "corpus", "an array of documents")?;
            let report = crate::detect_similarity_with(&content, &corpus, &settings.similarity);
            to_data(&report)
        }
        "feedback" => {
            let metrics = match args.get("metrics") {
                None | Some(Value::Null) => {
                    let settings = parse_settings(&args)?;
                    let content = parse_string(&args, "content", "")?;
                    peerlens_text::analyze_text_with(&content, &settings.text)
                }
                Some(v) => serde_json::from_value::<TextMetrics>(v.clone())
                    .map_err(|_| PeerlensError::invalid_field("metrics", "a text metrics object"))?,
            };
            to_data(&crate::synthesize_feedback(&metrics))
        }
        "submission" => {
            let settings = parse_settings(&args)?;
            let content = parse_string(&args, "content", "")?;
            let kind = parse_kind(&args)?;
            let language = parse_optional_string(&args, "language")?;
            let corpus: Option<Vec<DocumentRef>> = match args.get("corpus") {
                None | Some(Value::Null) => None,
                Some(_) => Some(parse_array(&args, "corpus", "an array of documents")?),
            };
            let result = crate::analyze_submission_with(
                &content,
                kind,
                language.as_deref(),
                corpus.as_deref(),
                &settings,
            );
            to_data(&result)
        }
        "batch" => {
            let settings = parse_settings(&args)?;
            let items: Vec<BatchItem> = parse_array(&args, "items", "an array of batch items")?;
            to_data(&crate::analyze_batch_with(&items, &settings))
        }
        "version" => Ok(serde_json::json!({
            "version": version(),
            "schema_version": schema_version(),
        })),
        _ => Err(PeerlensError::unknown_mode(mode)),
    }
}

// ============================================================================
// Strict parsing helpers
// ============================================================================

/// Parse a string field strictly: missing/null -> default, non-string -> error.
fn parse_string(args: &Value, field: &str, default: &str) -> Result<String, PeerlensError> {
    match args.get(field) {
        None | Some(Value::Null) => Ok(default.to_string()),
        Some(v) => v
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| PeerlensError::invalid_field(field, "a string")),
    }
}

/// Parse an optional string field strictly: missing/null -> None, non-string -> error.
fn parse_optional_string(args: &Value, field: &str) -> Result<Option<String>, PeerlensError> {
    match args.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(v) => v
            .as_str()
            .map(|s| Some(s.to_string()))
            .ok_or_else(|| PeerlensError::invalid_field(field, "a string")),
    }
}

/// Parse an array field strictly: missing/null -> empty, invalid -> error.
fn parse_array<T: DeserializeOwned>(
    args: &Value,
    field: &str,
    expected: &str,
) -> Result<Vec<T>, PeerlensError> {
    match args.get(field) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(v) => serde_json::from_value::<Vec<T>>(v.clone())
            .map_err(|_| PeerlensError::invalid_field(field, expected)),
    }
}

/// Serialize a result; a failure here is ours, not the caller's.
fn to_data<T: Serialize>(value: &T) -> Result<Value, PeerlensError> {
    serde_json::to_value(value).map_err(PeerlensError::internal)
}

fn parse_kind(args: &Value) -> Result<ContentKind, PeerlensError> {
    match args.get("kind") {
        None | Some(Value::Null) => Ok(ContentKind::default()),
        Some(v) => serde_json::from_value::<ContentKind>(v.clone())
            .map_err(|_| PeerlensError::invalid_field("kind", "'text', 'code', or 'mixed'")),
    }
}

/// Parse the optional `settings` object; partial objects fill in defaults.
fn parse_settings(args: &Value) -> Result<EngineSettings, PeerlensError> {
    let settings = match args.get("settings") {
        None | Some(Value::Null) => return Ok(EngineSettings::default()),
        Some(v) if v.is_object() => serde_json::from_value::<EngineSettings>(v.clone())
            .map_err(PeerlensError::invalid_settings)?,
        Some(_) => return Err(PeerlensError::invalid_field("settings", "an object")),
    };
    settings
        .validate()
        .map_err(|e| PeerlensError::invalid_settings(format!("{:#}", e)))?;
    Ok(settings)
}

/// Crate version of the engine.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Version of the JSON result contracts.
pub fn schema_version() -> u32 {
    peerlens_types::SCHEMA_VERSION
}
