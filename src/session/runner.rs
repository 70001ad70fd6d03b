//! Session orchestration
//!
//! Runs one request from start to finish: data listener first, then the
//! control connection, the single data transfer, reconciliation and the
//! trailing status. Each step is awaited in turn, which is what orders the
//! exchange with the server.

use log::{debug, info};

use crate::config::ClientConfig;
use crate::control::ControlChannel;
use crate::error::ClientError;
use crate::protocol::{Request, TransferOutcome};
use crate::reconcile::{SessionOutcome, reconcile};
use crate::session::reporter::{ProgressEvent, Reporter};
use crate::transfer::{DataListener, PayloadReader};

/// Result of a completed session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionReport {
    pub outcome: SessionOutcome,
    /// Trailing control channel text; `None` if the server sent nothing.
    pub status: Option<String>,
}

/// Runs `request` against `host:port`.
///
/// The listener is bound before the request goes out so the server can
/// never dial back to a port that is not yet listening. Both sockets are
/// released on every path: explicitly on success, by drop on error.
pub async fn run_session<P>(
    host: &str,
    port: u16,
    request: &Request,
    config: &ClientConfig,
    reporter: &mut P,
) -> Result<SessionReport, ClientError>
where
    P: Reporter + ?Sized,
{
    let listener = DataListener::bind(&config.bind_address, request.data_port())?;

    let server = format!("{}:{}", host, port);
    reporter.report(ProgressEvent::Connecting {
        server: server.clone(),
    });
    let mut control = ControlChannel::connect(host, port, config.connect_timeout()).await?;

    let line = request.line();
    control.send_request(&line, config.io_timeout()).await?;
    reporter.report(ProgressEvent::RequestSent { line });

    let connection = listener.accept_once(config.accept_timeout()).await?;
    let reader = PayloadReader::from_config(config);
    let payload = connection
        .receive_payload(&reader, config.io_timeout())
        .await?;

    let outcome = TransferOutcome::classify(request, payload);
    let outcome = reconcile(
        request,
        outcome,
        &server,
        config,
        reporter,
        &mut rand::thread_rng(),
    )?;

    let status = control
        .receive_status(config.buffer_size, config.io_timeout())
        .await?;
    control.close().await;

    let status = if status.is_empty() {
        debug!("No status from {}", server);
        None
    } else {
        reporter.report(ProgressEvent::ServerSays {
            server: server.clone(),
            status: status.clone(),
        });
        Some(status)
    };

    info!("Session with {} finished: {:?}", server, outcome);
    Ok(SessionReport { outcome, status })
}
