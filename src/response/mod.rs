//! Response construction module.
//!
//! Shapes payloads for the audience of a response:
//! - Policy selection by audience
//! - Record sanitization
//! - Error body redaction

pub mod context;
pub mod shaping;

pub use context::*;
pub use shaping::*;
