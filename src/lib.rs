pub mod cli;
pub mod config;
pub mod control;
pub mod error;
pub mod protocol;
pub mod reconcile;
pub mod session;
pub mod storage;
pub mod transfer;
pub mod utils;

pub use crate::config::ClientConfig;
pub use error::ClientError;
pub use protocol::{Command, Request};
pub use session::{SessionReport, run_session};
