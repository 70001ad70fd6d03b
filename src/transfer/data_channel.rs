//! Module `data_channel`
//!
//! The client side of the data connection: a listener bound to the port
//! named in the request, which accepts exactly one connection from the
//! server and reads one payload from it.

use log::{debug, info, warn};
use std::io;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tokio::net::{TcpListener, TcpSocket, TcpStream};

use crate::error::TransferError;
use crate::transfer::read_strategy::ReadStrategy;
use crate::utils::with_deadline;

/// Only one inbound connection is ever expected per session.
const LISTEN_BACKLOG: u32 = 1;

/// A listening socket waiting for the server to dial back.
#[derive(Debug)]
pub struct DataListener {
    listener: TcpListener,
    local_addr: SocketAddr,
}

impl DataListener {
    /// Binds and listens on `bind_address:port`.
    ///
    /// # Errors
    ///
    /// * `TransferError::InvalidAddress` - `bind_address` is not an IP address
    /// * `TransferError::BindFailed` - the port is 0, taken or cannot be used
    pub fn bind(bind_address: &str, port: u16) -> Result<Self, TransferError> {
        let ip: IpAddr = bind_address
            .parse()
            .map_err(|_| TransferError::InvalidAddress(bind_address.to_string()))?;
        let addr = SocketAddr::new(ip, port);

        // the request line carries this port, so an ephemeral one is never reachable
        if port == 0 {
            return Err(TransferError::BindFailed(
                addr,
                io::Error::new(io::ErrorKind::InvalidInput, "data port must not be 0"),
            ));
        }

        let socket = match addr {
            SocketAddr::V4(_) => TcpSocket::new_v4(),
            SocketAddr::V6(_) => TcpSocket::new_v6(),
        }
        .map_err(|e| TransferError::BindFailed(addr, e))?;

        socket
            .bind(addr)
            .map_err(|e| TransferError::BindFailed(addr, e))?;
        let listener = socket
            .listen(LISTEN_BACKLOG)
            .map_err(|e| TransferError::BindFailed(addr, e))?;
        let local_addr = listener
            .local_addr()
            .map_err(|e| TransferError::BindFailed(addr, e))?;

        info!("Data listener bound to {}", local_addr);
        Ok(Self {
            listener,
            local_addr,
        })
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Waits for the server's data connection. The listener is released as
    /// soon as one peer has been accepted, so nothing else can connect.
    pub async fn accept_once(
        self,
        timeout: Option<Duration>,
    ) -> Result<DataConnection, TransferError> {
        debug!("Waiting for data connection on {}", self.local_addr);

        let (stream, peer_addr) = with_deadline(
            timeout,
            async { self.listener.accept().await.map_err(TransferError::AcceptFailed) },
            || TransferError::Timeout("data accept"),
        )
        .await?;

        let local_addr = self.local_addr;
        drop(self.listener);

        info!("Data connection accepted from {} on {}", peer_addr, local_addr);
        Ok(DataConnection { stream, peer_addr })
    }
}

/// The single accepted data connection.
#[derive(Debug)]
pub struct DataConnection {
    stream: TcpStream,
    peer_addr: SocketAddr,
}

impl DataConnection {
    /// Reads the payload with `strategy`, then closes the connection
    /// whatever was received.
    pub async fn receive_payload<R: ReadStrategy>(
        mut self,
        strategy: &R,
        timeout: Option<Duration>,
    ) -> Result<Vec<u8>, TransferError> {
        let result = with_deadline(
            timeout,
            strategy.read_payload(&mut self.stream),
            || TransferError::Timeout("payload read"),
        )
        .await;

        if let Err(e) = self.stream.shutdown().await {
            warn!("Failed to shut down data connection from {}: {}", self.peer_addr, e);
        }

        let payload = result?;
        info!("Received {} bytes from {}", payload.len(), self.peer_addr);
        Ok(payload)
    }
}
