//! Field policy module.
//!
//! Field vocabulary, the three standing policies, and the audiences that
//! select between them.

pub mod audience;
pub mod fields;
pub mod presets;

pub use audience::*;
pub use fields::*;
pub use presets::*;
