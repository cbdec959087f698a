//! Error types for the sanitization layer.

use thiserror::Error;

/// Errors surfaced by the JSON, typed-model and configuration layers.
///
/// The record primitives in [`crate::security::sanitizer`] never fail; these
/// variants only come from the looser entry points that accept arbitrary
/// JSON or strings.
#[derive(Debug, Error)]
pub enum SanitizeError {
    /// A scalar was handed to a sanitizer that expects a record.
    #[error("expected a record or list of records, got {kind}")]
    NotARecord { kind: &'static str },

    /// A list element was itself a list.
    #[error("nested array at index {index} is not a record")]
    NestedArray { index: usize },

    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("unknown audience: {0}")]
    UnknownAudience(String),

    #[error("unknown environment: {0}")]
    UnknownEnvironment(String),
}

/// Short name of a JSON value's type, for error messages.
pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
