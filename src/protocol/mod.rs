//! Wire protocol
//!
//! Request serialization and payload classification.

pub mod commands;
pub mod responses;

pub use commands::{Command, LIST_PLACEHOLDER, Request};
pub use responses::{FILE_NOT_FOUND, TransferOutcome};
