//! Logging helpers.
//!
//! `LogContext` prefixes plus `log_info!`, `log_warn!` and `log_debug!`
//! for `EVENT key=value` lines on top of the `log` facade.

pub mod structured;

pub use structured::*;
