//! Command line interface
//!
//! `ftclient <HOST> <PORT> -l <DATA_PORT>` or
//! `ftclient <HOST> <PORT> -g <FILENAME> <DATA_PORT>`.

use clap::{ArgGroup, Parser};
use std::path::PathBuf;

use crate::error::ArgumentError;
use crate::protocol::Request;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "ftclient",
    version,
    about = "Fetch a listing or a file over a dual-channel transfer protocol"
)]
#[command(group(ArgGroup::new("command").required(true).args(["list", "get"])))]
pub struct Cli {
    /// Host name or IP address of the server.
    pub host: String,
    /// Port the server accepts control connections on.
    #[arg(value_parser = clap::value_parser!(u16).range(1..))]
    pub port: u16,
    /// List the files available on the server.
    #[arg(short = 'l', long = "list")]
    pub list: bool,
    /// Fetch FILENAME from the server.
    #[arg(short = 'g', long = "get", value_name = "FILENAME")]
    pub get: Option<String>,
    /// Local port the server connects back to with the data.
    #[arg(value_parser = clap::value_parser!(u16).range(1..))]
    pub data_port: u16,
    /// Config file, instead of `ftclient.toml` in the working directory.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Builds the request this invocation describes.
    pub fn request(&self) -> Result<Request, ArgumentError> {
        match &self.get {
            Some(filename) => Request::get(filename, self.data_port),
            None => Ok(Request::list(self.data_port)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::Command;

    #[test]
    fn test_list_invocation() {
        let cli = Cli::try_parse_from(["ftclient", "flip1", "30021", "-l", "30020"]).unwrap();
        assert_eq!(cli.host, "flip1");
        assert_eq!(cli.port, 30021);
        assert!(cli.list);
        let request = cli.request().unwrap();
        assert_eq!(request.command(), Command::List);
        assert_eq!(request.line(), "-l x 30020");
    }

    #[test]
    fn test_get_invocation() {
        let cli = Cli::try_parse_from(["ftclient", "flip1", "30021", "-g", "report.txt", "50200"])
            .unwrap();
        assert_eq!(cli.get.as_deref(), Some("report.txt"));
        assert_eq!(cli.request().unwrap().line(), "-g report.txt 50200");
    }

    #[test]
    fn test_non_integer_ports_rejected() {
        assert!(Cli::try_parse_from(["ftclient", "flip1", "port", "-l", "30020"]).is_err());
        assert!(Cli::try_parse_from(["ftclient", "flip1", "30021", "-l", "data"]).is_err());
        assert!(
            Cli::try_parse_from(["ftclient", "flip1", "30021", "-g", "a.txt", "70000"]).is_err()
        );
    }

    #[test]
    fn test_zero_ports_rejected() {
        assert!(Cli::try_parse_from(["ftclient", "flip1", "30021", "-l", "0"]).is_err());
        assert!(Cli::try_parse_from(["ftclient", "flip1", "0", "-l", "30020"]).is_err());
        assert!(Cli::try_parse_from(["ftclient", "flip1", "30021", "-g", "a.txt", "0"]).is_err());
    }

    #[test]
    fn test_command_required_and_exclusive() {
        assert!(Cli::try_parse_from(["ftclient", "flip1", "30021", "30020"]).is_err());
        assert!(
            Cli::try_parse_from(["ftclient", "flip1", "30021", "-l", "-g", "a.txt", "30020"])
                .is_err()
        );
    }

    #[test]
    fn test_wrong_argument_count() {
        assert!(Cli::try_parse_from(["ftclient", "flip1", "30021", "-l"]).is_err());
        assert!(
            Cli::try_parse_from(["ftclient", "flip1", "30021", "-l", "30020", "extra"]).is_err()
        );
    }

    #[test]
    fn test_unsafe_filename_rejected_after_parse() {
        let cli =
            Cli::try_parse_from(["ftclient", "flip1", "30021", "-g", "../x", "50200"]).unwrap();
        assert!(cli.request().is_err());
    }
}
