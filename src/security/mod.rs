//! Security module.
//!
//! Provides field sanitization for response records and error-text
//! redaction for client-facing failures.

pub mod error_message;
pub mod sanitizer;

pub use error_message::*;
pub use sanitizer::*;
