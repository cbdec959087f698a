//! Response body shaping.
//!
//! Last step before serialization: every payload bound for a response
//! body passes through the policy of the context's audience.

use std::fmt::Display;

use serde::Serialize;
use serde_json::{json, Value};

use crate::error::SanitizeError;
use crate::security::error_message::sanitize_error_message;
use crate::security::sanitizer::sanitize_value;
use crate::{log_debug, log_warn};

use super::context::ResponseContext;

/// What shaping removed from a payload.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ShapeSummary {
    pub records: usize,
    pub fields_removed: usize,
}

/// Count records and their fields in a payload.
fn count_fields(value: &Value) -> (usize, usize) {
    match value {
        Value::Object(record) => (1, record.len()),
        Value::Array(items) => items
            .iter()
            .filter_map(|item| item.as_object())
            .fold((0, 0), |(records, fields), record| {
                (records + 1, fields + record.len())
            }),
        _ => (0, 0),
    }
}

/// Shape a payload and report what was removed.
pub fn shape_response_with_summary(
    ctx: &ResponseContext,
    payload: &Value,
) -> Result<(Value, ShapeSummary), SanitizeError> {
    let log_ctx = ctx.log_context();
    let policy = ctx.audience.policy();

    let shaped = match sanitize_value(payload, &policy) {
        Ok(shaped) => shaped,
        Err(e) => {
            log_warn!(
                log_ctx,
                "RESPONSE_REJECTED",
                error = e.to_string(),
            );
            return Err(e);
        }
    };

    let (records, fields_before) = count_fields(payload);
    let (_, fields_after) = count_fields(&shaped);
    let summary = ShapeSummary {
        records,
        fields_removed: fields_before - fields_after,
    };

    log_debug!(
        log_ctx,
        "RESPONSE_SHAPED",
        policy = policy.name(),
        records = summary.records,
        fields_removed = summary.fields_removed,
        elapsed_ms = ctx.elapsed_ms(),
    );

    Ok((shaped, summary))
}

/// Shape a payload for the context's audience.
pub fn shape_response(ctx: &ResponseContext, payload: &Value) -> Result<Value, SanitizeError> {
    shape_response_with_summary(ctx, payload).map(|(shaped, _)| shaped)
}

/// Serialize a value and shape the result.
pub fn shape_serializable<T>(ctx: &ResponseContext, value: &T) -> Result<Value, SanitizeError>
where
    T: Serialize + ?Sized,
{
    let payload = serde_json::to_value(value)?;
    shape_response(ctx, &payload)
}

/// Build an `{"error": ...}` body, hiding the real text in production.
pub fn error_body<E>(ctx: &ResponseContext, error: &E) -> Value
where
    E: Display + ?Sized,
{
    let message = sanitize_error_message(error, &ctx.fallback_error_message, ctx.environment);

    log_warn!(
        ctx.log_context(),
        "RESPONSE_ERROR",
        environment = ctx.environment.as_str(),
        redacted = ctx.environment.is_production(),
        elapsed_ms = ctx.elapsed_ms(),
    );

    json!({ "error": message })
}
