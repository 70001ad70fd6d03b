//! Error handling
//!
//! Defines error types and handling for the transfer client.

pub mod handlers;
pub mod types;

pub use types::*;
