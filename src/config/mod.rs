//! Runtime configuration.
//!
//! The sanitizer never reads process state itself; callers build these
//! values once at startup and pass them down.

pub mod environment;

pub use environment::*;
