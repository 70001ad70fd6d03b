//! Error handlers
//!
//! Reports a failed session and maps it to a process exit code.

use crate::error::types::ClientError;
use log::debug;

/// Log a client error for diagnostics and return the message shown to the
/// user. The caller prints it; this does not write to the console itself.
pub fn handle_error(err: &ClientError) -> String {
    debug!("ftclient error: {:?}", err);
    err.to_string()
}

/// Convert error to process exit code
pub fn error_to_exit_code(err: &ClientError) -> u8 {
    match err {
        ClientError::Argument(_) => 2,
        ClientError::Config(_) => 1,
        ClientError::Connection(_) => 1,
        ClientError::Transfer(_) => 1,
        ClientError::Storage(_) => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ArgumentError, ConnectionError};

    #[test]
    fn test_exit_codes() {
        let arg = ClientError::from(ArgumentError::MissingFilename);
        assert_eq!(error_to_exit_code(&arg), 2);

        let conn = ClientError::from(ConnectionError::Timeout("connect"));
        assert_eq!(error_to_exit_code(&conn), 1);
    }

    #[test]
    fn test_handle_error_returns_message_once() {
        let err = ClientError::from(ConnectionError::ConnectFailed(
            "127.0.0.1:1".into(),
            std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused"),
        ));
        let text = handle_error(&err);
        assert_eq!(text, err.to_string());
        assert!(text.contains("127.0.0.1:1"));
        assert!(text.contains("connection refused"));
    }
}
