//! Error types
//!
//! Defines domain-specific error types for each stage of a transfer session.

use std::fmt;
use std::io;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Invalid invocation detected after argument parsing
#[derive(Debug)]
pub enum ArgumentError {
    MissingFilename,
    InvalidFilename(String),
}

impl fmt::Display for ArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgumentError::MissingFilename => write!(f, "A filename is required to fetch a file"),
            ArgumentError::InvalidFilename(name) => write!(f, "Invalid filename: {:?}", name),
        }
    }
}

impl std::error::Error for ArgumentError {}

/// Control channel errors
#[derive(Debug)]
pub enum ConnectionError {
    ConnectFailed(String, io::Error),
    SendFailed(io::Error),
    ReceiveFailed(io::Error),
    Timeout(&'static str),
}

impl fmt::Display for ConnectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectionError::ConnectFailed(addr, e) => {
                write!(f, "Failed to connect to {}: {}", addr, e)
            }
            ConnectionError::SendFailed(e) => write!(f, "Failed to send request: {}", e),
            ConnectionError::ReceiveFailed(e) => write!(f, "Failed to receive status: {}", e),
            ConnectionError::Timeout(step) => write!(f, "Timed out during {}", step),
        }
    }
}

impl std::error::Error for ConnectionError {}

/// Data channel errors
#[derive(Debug)]
pub enum TransferError {
    InvalidAddress(String),
    BindFailed(SocketAddr, io::Error),
    AcceptFailed(io::Error),
    ReadFailed(io::Error),
    PayloadTooLarge(usize),
    Timeout(&'static str),
}

impl fmt::Display for TransferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransferError::InvalidAddress(addr) => write!(f, "Invalid data address: {}", addr),
            TransferError::BindFailed(addr, e) => write!(f, "Failed to bind to {}: {}", addr, e),
            TransferError::AcceptFailed(e) => {
                write!(f, "Failed to accept data connection: {}", e)
            }
            TransferError::ReadFailed(e) => write!(f, "Failed to read payload: {}", e),
            TransferError::PayloadTooLarge(limit) => {
                write!(f, "Payload exceeds the {} byte limit", limit)
            }
            TransferError::Timeout(step) => write!(f, "Timed out during {}", step),
        }
    }
}

impl std::error::Error for TransferError {}

/// Storage errors raised while persisting a fetched file
#[derive(Debug)]
pub enum StorageError {
    CreateFailed(PathBuf, io::Error),
    WriteFailed(PathBuf, io::Error),
    NameSpaceExhausted { filename: String, attempts: usize },
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::CreateFailed(p, e) => {
                write!(f, "Cannot create {}: {}", p.display(), e)
            }
            StorageError::WriteFailed(p, e) => write!(f, "Cannot write {}: {}", p.display(), e),
            StorageError::NameSpaceExhausted { filename, attempts } => write!(
                f,
                "No free name for {} after {} attempts",
                filename, attempts
            ),
        }
    }
}

impl std::error::Error for StorageError {}

/// General client error that encompasses all error types
#[derive(Debug)]
pub enum ClientError {
    Argument(ArgumentError),
    Config(config::ConfigError),
    Connection(ConnectionError),
    Transfer(TransferError),
    Storage(StorageError),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Argument(e) => write!(f, "Argument error: {}", e),
            ClientError::Config(e) => write!(f, "Configuration error: {}", e),
            ClientError::Connection(e) => write!(f, "Connection error: {}", e),
            ClientError::Transfer(e) => write!(f, "Transfer error: {}", e),
            ClientError::Storage(e) => write!(f, "Storage error: {}", e),
        }
    }
}

impl std::error::Error for ClientError {}

impl From<ArgumentError> for ClientError {
    fn from(error: ArgumentError) -> Self {
        ClientError::Argument(error)
    }
}

impl From<config::ConfigError> for ClientError {
    fn from(error: config::ConfigError) -> Self {
        ClientError::Config(error)
    }
}

impl From<ConnectionError> for ClientError {
    fn from(error: ConnectionError) -> Self {
        ClientError::Connection(error)
    }
}

impl From<TransferError> for ClientError {
    fn from(error: TransferError) -> Self {
        ClientError::Transfer(error)
    }
}

impl From<StorageError> for ClientError {
    fn from(error: StorageError) -> Self {
        ClientError::Storage(error)
    }
}
