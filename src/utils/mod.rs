//! Utility functions
//!
//! Provides logging setup and deadline helpers.

pub mod deadline;
pub mod logging;

pub use deadline::with_deadline;
