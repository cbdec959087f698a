//! Error text redaction for client-facing responses.

use std::fmt::Display;

use crate::config::environment::Environment;

/// Choose the error text a client may see.
///
/// Production deployments always get `fallback`, so internal detail never
/// reaches the client. Every other environment gets the real message.
pub fn sanitize_error_message<E>(error: &E, fallback: &str, environment: Environment) -> String
where
    E: Display + ?Sized,
{
    if environment.is_production() {
        fallback.to_string()
    } else {
        error.to_string()
    }
}
