//! Logging utilities
//!
//! Diagnostics go through `log`; `RUST_LOG` controls verbosity. Progress
//! lines meant for the user are printed by the session reporter instead.

use env_logger::Env;

/// Setup logging for the client, defaulting to warnings only
pub fn setup_logging() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
}
