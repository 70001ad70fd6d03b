//! Module `read_strategy`
//!
//! The data channel has no framing: the server writes its payload and
//! closes. How much of that the client keeps is decided here.

use log::debug;
use tokio::io::{AsyncRead, AsyncReadExt};

use crate::config::{ClientConfig, ReadStrategyKind};
use crate::error::TransferError;

/// Drains a payload from an accepted data connection.
#[allow(async_fn_in_trait)]
pub trait ReadStrategy {
    async fn read_payload<S>(&self, stream: &mut S) -> Result<Vec<u8>, TransferError>
    where
        S: AsyncRead + Unpin;
}

/// Keeps at most `capacity` bytes. Reading stops once the buffer is full
/// or the peer closes; anything the server sent past `capacity` is lost.
#[derive(Debug, Clone, Copy)]
pub struct Bounded {
    pub capacity: usize,
}

impl ReadStrategy for Bounded {
    async fn read_payload<S>(&self, stream: &mut S) -> Result<Vec<u8>, TransferError>
    where
        S: AsyncRead + Unpin,
    {
        let mut buffer = vec![0u8; self.capacity];
        let mut filled = 0;

        while filled < self.capacity {
            let n = stream
                .read(&mut buffer[filled..])
                .await
                .map_err(TransferError::ReadFailed)?;
            if n == 0 {
                break;
            }
            filled += n;
        }

        if filled == self.capacity {
            debug!(
                "Receive buffer full at {} bytes, remaining payload is dropped",
                self.capacity
            );
        }

        buffer.truncate(filled);
        Ok(buffer)
    }
}

/// Reads until the peer closes, refusing payloads above `limit`.
#[derive(Debug, Clone, Copy)]
pub struct UntilClose {
    pub limit: usize,
}

impl ReadStrategy for UntilClose {
    async fn read_payload<S>(&self, stream: &mut S) -> Result<Vec<u8>, TransferError>
    where
        S: AsyncRead + Unpin,
    {
        let mut buffer = Vec::new();
        (&mut *stream)
            .take(self.limit as u64 + 1)
            .read_to_end(&mut buffer)
            .await
            .map_err(TransferError::ReadFailed)?;

        if buffer.len() > self.limit {
            return Err(TransferError::PayloadTooLarge(self.limit));
        }
        Ok(buffer)
    }
}

/// The strategy selected by configuration.
#[derive(Debug, Clone, Copy)]
pub enum PayloadReader {
    Bounded(Bounded),
    UntilClose(UntilClose),
}

impl PayloadReader {
    pub fn from_config(config: &ClientConfig) -> Self {
        match config.read_strategy {
            ReadStrategyKind::Bounded => PayloadReader::Bounded(Bounded {
                capacity: config.buffer_size,
            }),
            ReadStrategyKind::UntilClose => PayloadReader::UntilClose(UntilClose {
                limit: config.max_payload_bytes,
            }),
        }
    }
}

impl ReadStrategy for PayloadReader {
    async fn read_payload<S>(&self, stream: &mut S) -> Result<Vec<u8>, TransferError>
    where
        S: AsyncRead + Unpin,
    {
        match self {
            PayloadReader::Bounded(strategy) => strategy.read_payload(stream).await,
            PayloadReader::UntilClose(strategy) => strategy.read_payload(stream).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::AsyncWriteExt;

    #[tokio::test]
    async fn test_bounded_keeps_exact_capacity() {
        let data = vec![b'a'; 4096];
        let mut source: &[u8] = &data;
        let payload = Bounded { capacity: 4096 }
            .read_payload(&mut source)
            .await
            .unwrap();
        assert_eq!(payload.len(), 4096);
    }

    #[tokio::test]
    async fn test_bounded_truncates_overflow() {
        let data = vec![b'a'; 4097];
        let mut source: &[u8] = &data;
        let payload = Bounded { capacity: 4096 }
            .read_payload(&mut source)
            .await
            .unwrap();
        assert_eq!(payload.len(), 4096);
    }

    #[tokio::test]
    async fn test_bounded_collects_split_writes() {
        let (mut client, mut server) = tokio::io::duplex(64);
        let writer = tokio::spawn(async move {
            server.write_all(b"hello ").await.unwrap();
            server.write_all(b"world").await.unwrap();
        });

        let payload = Bounded { capacity: 4096 }
            .read_payload(&mut client)
            .await
            .unwrap();
        writer.await.unwrap();
        assert_eq!(payload, b"hello world");
    }

    #[tokio::test]
    async fn test_until_close_reads_everything() {
        let data = vec![b'z'; 10_000];
        let mut source: &[u8] = &data;
        let payload = UntilClose { limit: 1 << 20 }
            .read_payload(&mut source)
            .await
            .unwrap();
        assert_eq!(payload.len(), 10_000);
    }

    #[tokio::test]
    async fn test_until_close_limit() {
        let data = vec![b'z'; 11];
        let mut source: &[u8] = &data;
        let err = UntilClose { limit: 10 }
            .read_payload(&mut source)
            .await
            .unwrap_err();
        assert!(matches!(err, TransferError::PayloadTooLarge(10)));
    }

    #[test]
    fn test_from_config() {
        let mut config = ClientConfig::default();
        assert!(matches!(
            PayloadReader::from_config(&config),
            PayloadReader::Bounded(Bounded { capacity: 4096 })
        ));
        config.read_strategy = ReadStrategyKind::UntilClose;
        assert!(matches!(
            PayloadReader::from_config(&config),
            PayloadReader::UntilClose(_)
        ));
    }
}
