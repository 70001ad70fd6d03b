//! Transfer module
//!
//! Handles the data channel: binding the listener, accepting the server's
//! connection and draining the payload.

pub mod data_channel;
pub mod read_strategy;

pub use data_channel::{DataConnection, DataListener};
pub use read_strategy::{Bounded, PayloadReader, ReadStrategy, UntilClose};
