//! Module `reconcile`
//!
//! Decides what a received payload means for the request that produced it
//! and acts on it: print a listing, save a file, or report not-found.

use log::{info, warn};
use rand::Rng;
use std::path::PathBuf;

use crate::config::ClientConfig;
use crate::error::StorageError;
use crate::protocol::{Command, Request, TransferOutcome};
use crate::session::reporter::{ProgressEvent, Reporter};
use crate::storage::persist_payload;

/// What a session ended up doing with the data channel payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    Listed(String),
    Saved(PathBuf),
    NotFound,
    Empty,
}

/// Dispatches `outcome` on the request's command.
///
/// `server` is only used for the progress lines.
pub fn reconcile<R, P>(
    request: &Request,
    outcome: TransferOutcome,
    server: &str,
    config: &ClientConfig,
    reporter: &mut P,
    rng: &mut R,
) -> Result<SessionOutcome, StorageError>
where
    R: Rng,
    P: Reporter + ?Sized,
{
    let payload = match outcome {
        TransferOutcome::NotFound => {
            info!("Server echoed the request, target not found");
            reporter.report(ProgressEvent::NotFound {
                line: request.line(),
            });
            return Ok(SessionOutcome::NotFound);
        }
        TransferOutcome::Empty => {
            warn!("Data connection closed without a payload");
            reporter.report(ProgressEvent::EmptyPayload);
            return Ok(SessionOutcome::Empty);
        }
        TransferOutcome::Found(payload) => payload,
    };

    match (request.command(), request.filename()) {
        (Command::Get, Some(filename)) => {
            reporter.report(ProgressEvent::ReceivingFile {
                filename: filename.to_string(),
                server: server.to_string(),
            });
            let path = persist_payload(
                &config.download_path(),
                filename,
                &payload,
                config.naming_policy,
                config.max_name_attempts,
                rng,
            )?;
            reporter.report(ProgressEvent::TransferComplete { path: path.clone() });
            Ok(SessionOutcome::Saved(path))
        }
        // `Request::get` is the only constructor for Get and always sets a filename
        (Command::Get, None) => unreachable!("fetch request without a filename"),
        (Command::List, _) => {
            let text = String::from_utf8_lossy(&payload).into_owned();
            reporter.report(ProgressEvent::ReceivingListing {
                server: server.to_string(),
            });
            reporter.report(ProgressEvent::Listing { text: text.clone() });
            Ok(SessionOutcome::Listed(text))
        }
    }
}
