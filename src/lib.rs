//! Wedplan Core - Response field sanitization
//!
//! This crate guarantees that records handed over by the data-access layer
//! never expose credential or account-security fields in an API response.
//! The implementation prioritizes:
//!
//! 1. **Security** - Deny-lists and an allow-list layered for defense in depth
//! 2. **Purity** - Sanitizers copy, never mutate, and cannot fail on records
//! 3. **Logging** - Every shaped response logged with request context
//!
//! ## Architecture
//!
//! The crate is organized into modules:
//! - `security` - Field sanitizer primitives and error-text redaction
//! - `policy` - Field vocabulary, standing policies, audiences
//! - `response` - Per-response shaping by audience
//! - `models` - Typed user rows and public projections
//! - `config` - Deployment environment and sanitizer settings
//! - `logging` - Structured logging with request context

pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod policy;
pub mod response;
pub mod security;

pub use config::{Environment, SanitizerConfig};
pub use error::SanitizeError;
pub use policy::{Audience, FieldPolicy, PolicyKind, UserField};
pub use response::{error_body, shape_response, shape_serializable, ResponseContext};
pub use security::{
    exclude_fields, sanitize_error_message, sanitize_list, sanitize_user,
    sanitize_user_for_admin, sanitize_users, sanitize_users_for_admin, sanitize_value,
    select_fields, to_public_user, to_public_users, Record,
};

/// Initialize the process-wide logger.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_logger() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .format_timestamp_millis()
        .try_init();
}
