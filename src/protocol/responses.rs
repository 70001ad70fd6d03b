//! Data channel responses
//!
//! Classifies a received payload. The server signals a missing file by
//! echoing the request line, so this is the one place that comparison lives.

use crate::protocol::Request;

/// Message the server writes on the control channel when a file is missing.
pub const FILE_NOT_FOUND: &str = "FILE NOT FOUND";

/// What arrived on the data channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferOutcome {
    Found(Vec<u8>),
    NotFound,
    Empty,
}

impl TransferOutcome {
    /// Interpret `payload` against the request that produced it.
    ///
    /// A legitimate payload that happens to equal the request line cannot
    /// be told apart from the not-found echo.
    pub fn classify(request: &Request, payload: Vec<u8>) -> Self {
        if payload.is_empty() {
            TransferOutcome::Empty
        } else if payload == request.line().as_bytes() {
            TransferOutcome::NotFound
        } else {
            TransferOutcome::Found(payload)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_echo_is_not_found() {
        let request = Request::get("missing.txt", 40000).unwrap();
        let payload = b"-g missing.txt 40000".to_vec();
        assert_eq!(
            TransferOutcome::classify(&request, payload),
            TransferOutcome::NotFound
        );
    }

    #[test]
    fn test_echo_with_newline_is_data() {
        let request = Request::get("missing.txt", 40000).unwrap();
        let payload = b"-g missing.txt 40000\n".to_vec();
        assert!(matches!(
            TransferOutcome::classify(&request, payload),
            TransferOutcome::Found(_)
        ));
    }

    #[test]
    fn test_empty_and_found() {
        let request = Request::list(40000);
        assert_eq!(
            TransferOutcome::classify(&request, Vec::new()),
            TransferOutcome::Empty
        );
        assert_eq!(
            TransferOutcome::classify(&request, b"a.txt\nb.txt\n".to_vec()),
            TransferOutcome::Found(b"a.txt\nb.txt\n".to_vec())
        );
    }
}
