//! Module `commands`
//!
//! Defines the request sent on the control channel: the command, its
//! optional filename and the data port the server should dial back on.

use std::fmt;

use crate::error::ArgumentError;
use crate::storage::validation::validate_filename;

/// Filename field sent with a LIST request, which carries no filename.
pub const LIST_PLACEHOLDER: &str = "x";

/// Commands understood by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    List,
    Get,
}

impl Command {
    /// Wire token for this command.
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::List => "-l",
            Command::Get => "-g",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single request, built once from validated input and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    command: Command,
    filename: Option<String>,
    data_port: u16,
}

impl Request {
    /// Request a directory listing.
    pub fn list(data_port: u16) -> Self {
        Self {
            command: Command::List,
            filename: None,
            data_port,
        }
    }

    /// Request a file. The name must be usable both on the wire and on disk.
    pub fn get(filename: &str, data_port: u16) -> Result<Self, ArgumentError> {
        validate_filename(filename)?;
        Ok(Self {
            command: Command::Get,
            filename: Some(filename.to_string()),
            data_port,
        })
    }

    pub fn command(&self) -> Command {
        self.command
    }

    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    pub fn data_port(&self) -> u16 {
        self.data_port
    }

    /// The request line without its terminator. A server that cannot find
    /// the target echoes exactly these bytes back on the data channel.
    pub fn line(&self) -> String {
        format!(
            "{} {} {}",
            self.command,
            self.filename.as_deref().unwrap_or(LIST_PLACEHOLDER),
            self.data_port
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_line_uses_placeholder() {
        let request = Request::list(50200);
        assert_eq!(request.line(), "-l x 50200");
        assert_eq!(request.filename(), None);
    }

    #[test]
    fn test_get_line() {
        let request = Request::get("report.txt", 50200).unwrap();
        assert_eq!(request.line(), "-g report.txt 50200");
        assert_eq!(request.command(), Command::Get);
        assert_eq!(request.data_port(), 50200);
    }

    #[test]
    fn test_get_rejects_unsafe_names() {
        assert!(Request::get("", 1).is_err());
        assert!(Request::get("two words.txt", 1).is_err());
        assert!(Request::get("../etc/passwd", 1).is_err());
        assert!(Request::get("dir/file.txt", 1).is_err());
    }
}
