//! Control channel
//!
//! Owns the outbound connection that carries the request and the status.

pub mod channel;

pub use channel::ControlChannel;
