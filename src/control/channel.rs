//! Module `channel`
//!
//! The control connection: one outbound stream that carries the request
//! line to the server and brings back its closing status text.

use log::{debug, info, warn};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use crate::error::ConnectionError;
use crate::utils::with_deadline;

/// Established control connection, owned exclusively by one session.
#[derive(Debug)]
pub struct ControlChannel {
    stream: TcpStream,
    server: String,
}

impl ControlChannel {
    /// Connects to `host:port`. No retry; a failure ends the session.
    pub async fn connect(
        host: &str,
        port: u16,
        timeout: Option<Duration>,
    ) -> Result<Self, ConnectionError> {
        let server = format!("{}:{}", host, port);

        let stream = with_deadline(
            timeout,
            async {
                TcpStream::connect((host, port))
                    .await
                    .map_err(|e| ConnectionError::ConnectFailed(server.clone(), e))
            },
            || ConnectionError::Timeout("connect"),
        )
        .await?;

        info!("Control connection established to {}", server);
        Ok(Self { stream, server })
    }

    /// Sends `line` followed by the newline the server parses on.
    pub async fn send_request(
        &mut self,
        line: &str,
        timeout: Option<Duration>,
    ) -> Result<(), ConnectionError> {
        let message = format!("{}\n", line);
        let stream = &mut self.stream;

        with_deadline(
            timeout,
            async {
                stream
                    .write_all(message.as_bytes())
                    .await
                    .map_err(ConnectionError::SendFailed)?;
                stream.flush().await.map_err(ConnectionError::SendFailed)
            },
            || ConnectionError::Timeout("request send"),
        )
        .await?;

        debug!("Sent request to {}: {}", self.server, line);
        Ok(())
    }

    /// Single bounded receive of the server's trailing status. Only call
    /// this once the data channel read has finished; the server writes its
    /// status after the payload. Returns an empty string if the server
    /// closed without sending anything.
    pub async fn receive_status(
        &mut self,
        buffer_size: usize,
        timeout: Option<Duration>,
    ) -> Result<String, ConnectionError> {
        let mut buffer = vec![0u8; buffer_size];
        let stream = &mut self.stream;

        let n = with_deadline(
            timeout,
            async { stream.read(&mut buffer).await.map_err(ConnectionError::ReceiveFailed) },
            || ConnectionError::Timeout("status receive"),
        )
        .await?;

        let status = String::from_utf8_lossy(&buffer[..n]).into_owned();
        debug!("Status from {}: {:?}", self.server, status);
        Ok(status)
    }

    /// Shuts the connection down. Consumes the channel so it closes once.
    pub async fn close(mut self) {
        if let Err(e) = self.stream.shutdown().await {
            warn!("Failed to shut down control connection to {}: {}", self.server, e);
        }
        debug!("Control connection to {} closed", self.server);
    }
}
