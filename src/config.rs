//! Configuration management for ftclient
//!
//! Built-in defaults, then an optional TOML file, then `FTCLIENT_*`
//! environment overrides.

use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::storage::NamingPolicy;

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "ftclient";

/// Receive buffer used by the original protocol.
pub const DEFAULT_BUFFER_SIZE: usize = 4096;

/// How the data channel payload is drained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadStrategyKind {
    /// Receive at most `buffer_size` bytes; the rest is lost.
    Bounded,
    /// Read until the server closes, up to `max_payload_bytes`.
    UntilClose,
}

/// Complete client configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ClientConfig {
    // ═══ NETWORK ═══
    /// Local address the data listener binds to
    pub bind_address: String,

    /// Receive buffer for the payload and the trailing status
    pub buffer_size: usize,

    pub read_strategy: ReadStrategyKind,

    /// Upper bound for `until_close` reads
    pub max_payload_bytes: usize,

    // ═══ TIMEOUTS (0 = wait forever) ═══
    pub connect_timeout_secs: u64,
    pub accept_timeout_secs: u64,
    pub io_timeout_secs: u64,

    // ═══ STORAGE ═══
    pub naming_policy: NamingPolicy,

    /// Collision retries before giving up
    pub max_name_attempts: usize,

    /// Directory fetched files are written to
    pub download_dir: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1".to_string(),
            buffer_size: DEFAULT_BUFFER_SIZE,
            read_strategy: ReadStrategyKind::Bounded,
            max_payload_bytes: 100 * 1024 * 1024,
            connect_timeout_secs: 0,
            accept_timeout_secs: 0,
            io_timeout_secs: 0,
            naming_policy: NamingPolicy::RandomDigit,
            max_name_attempts: 64,
            download_dir: ".".to_string(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from `path` (or `ftclient.toml` in the working
    /// directory) with environment overrides. A missing default file is not
    /// an error; a missing explicit file is.
    pub fn load(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        let defaults = ClientConfig::default();

        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let settings = Config::builder()
            .set_default("bind_address", defaults.bind_address)?
            .set_default("buffer_size", defaults.buffer_size as i64)?
            .set_default("read_strategy", "bounded")?
            .set_default("max_payload_bytes", defaults.max_payload_bytes as i64)?
            .set_default("connect_timeout_secs", defaults.connect_timeout_secs as i64)?
            .set_default("accept_timeout_secs", defaults.accept_timeout_secs as i64)?
            .set_default("io_timeout_secs", defaults.io_timeout_secs as i64)?
            .set_default("naming_policy", "random_digit")?
            .set_default("max_name_attempts", defaults.max_name_attempts as i64)?
            .set_default("download_dir", defaults.download_dir)?
            .add_source(file)
            .add_source(Environment::with_prefix("FTCLIENT").try_parsing(true))
            .build()?;

        let config: ClientConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        if self.buffer_size == 0 {
            return Err(config::ConfigError::Message(
                "buffer_size must be greater than 0".into(),
            ));
        }

        if self.max_payload_bytes == 0 {
            return Err(config::ConfigError::Message(
                "max_payload_bytes must be greater than 0".into(),
            ));
        }

        if self.max_name_attempts == 0 {
            return Err(config::ConfigError::Message(
                "max_name_attempts must be greater than 0".into(),
            ));
        }

        if self.download_dir.is_empty() {
            return Err(config::ConfigError::Message(
                "download_dir cannot be empty".into(),
            ));
        }

        Ok(())
    }

    pub fn connect_timeout(&self) -> Option<Duration> {
        secs(self.connect_timeout_secs)
    }

    pub fn accept_timeout(&self) -> Option<Duration> {
        secs(self.accept_timeout_secs)
    }

    pub fn io_timeout(&self) -> Option<Duration> {
        secs(self.io_timeout_secs)
    }

    pub fn download_path(&self) -> PathBuf {
        PathBuf::from(&self.download_dir)
    }
}

fn secs(value: u64) -> Option<Duration> {
    (value > 0).then(|| Duration::from_secs(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_defaults_are_valid() {
        let config = ClientConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.buffer_size, 4096);
        assert_eq!(config.connect_timeout(), None);
        assert_eq!(config.download_path(), PathBuf::from("."));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("client.toml");
        fs::write(
            &path,
            concat!(
                "buffer_size = 8192\n",
                "read_strategy = \"until_close\"\n",
                "naming_policy = \"counter\"\n",
                "accept_timeout_secs = 5\n",
            ),
        )
        .unwrap();

        let config = ClientConfig::load(Some(path.as_path())).unwrap();
        assert_eq!(config.buffer_size, 8192);
        assert_eq!(config.read_strategy, ReadStrategyKind::UntilClose);
        assert_eq!(config.naming_policy, NamingPolicy::Counter);
        assert_eq!(config.accept_timeout(), Some(Duration::from_secs(5)));
        assert_eq!(config.bind_address, "127.0.0.1");
    }

    #[test]
    fn test_load_rejects_zero_buffer() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("client.toml");
        fs::write(&path, "buffer_size = 0\n").unwrap();

        assert!(ClientConfig::load(Some(path.as_path())).is_err());
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(ClientConfig::load(Some(dir.path().join("absent.toml").as_path())).is_err());
    }
}
