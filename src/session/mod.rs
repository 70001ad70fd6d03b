//! Transfer session
//!
//! Composes the control channel, data listener and reconciler for one run.

pub mod runner;
pub mod reporter;

pub use runner::{SessionReport, run_session};
pub use reporter::{ConsoleReporter, ProgressEvent, RecordingReporter, Reporter};
