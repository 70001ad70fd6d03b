//! Progress reporting
//!
//! The human-readable lines a session prints are routed through a
//! `Reporter`, so the transfer logic runs the same with or without a console.

use std::fmt;
use std::path::PathBuf;

/// Something the user may want to see while a session runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    Connecting { server: String },
    RequestSent { line: String },
    ReceivingListing { server: String },
    ReceivingFile { filename: String, server: String },
    Listing { text: String },
    TransferComplete { path: PathBuf },
    NotFound { line: String },
    EmptyPayload,
    ServerSays { server: String, status: String },
}

impl fmt::Display for ProgressEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProgressEvent::Connecting { server } => write!(f, "Connecting to {}", server),
            ProgressEvent::RequestSent { line } => write!(f, "Sent request \"{}\"", line),
            ProgressEvent::ReceivingListing { server } => {
                write!(f, "Receiving directory structure from\n{}\n", server)
            }
            ProgressEvent::ReceivingFile { filename, server } => {
                write!(f, "Receiving \"{}\" from {}", filename, server)
            }
            ProgressEvent::Listing { text } => f.write_str(text),
            ProgressEvent::TransferComplete { path } => {
                write!(f, "File Transfer complete. Saved as {}", path.display())
            }
            ProgressEvent::NotFound { line } => write!(f, "Not found: \"{}\"", line),
            ProgressEvent::EmptyPayload => write!(f, "Server sent no data"),
            ProgressEvent::ServerSays { server, status } => {
                write!(f, "{} says\n{}", server, status)
            }
        }
    }
}

pub trait Reporter {
    fn report(&mut self, event: ProgressEvent);
}

/// Prints progress to standard output.
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn report(&mut self, event: ProgressEvent) {
        match event {
            // request text is diagnostic, not narration
            ProgressEvent::RequestSent { line } => log::debug!("Request: {}", line),
            event => println!("{}", event),
        }
    }
}

/// Keeps every event, for callers that inspect a session afterwards.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    pub events: Vec<ProgressEvent>,
}

impl Reporter for RecordingReporter {
    fn report(&mut self, event: ProgressEvent) {
        self.events.push(event);
    }
}
