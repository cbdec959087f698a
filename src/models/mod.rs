//! Domain models.
//!
//! Typed rows handed over by the data-access layer, and the public
//! projections built from them.

pub mod user;

pub use user::*;
