//! ftclient - Entry Point
//!
//! Sends one list or fetch request over the control channel and receives
//! the result on a data connection the server opens back to us.

use clap::Parser;
use log::info;
use std::process::ExitCode;

use ftclient::cli::Cli;
use ftclient::config::ClientConfig;
use ftclient::error::ClientError;
use ftclient::error::handlers::{error_to_exit_code, handle_error};
use ftclient::session::{ConsoleReporter, SessionReport, run_session};
use ftclient::utils::logging::setup_logging;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    setup_logging();

    // exits with a usage message before any socket is opened
    let cli = Cli::parse();

    match run(&cli).await {
        Ok(report) => {
            info!("Done: {:?}", report.outcome);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", handle_error(&e));
            ExitCode::from(error_to_exit_code(&e))
        }
    }
}

async fn run(cli: &Cli) -> Result<SessionReport, ClientError> {
    let request = cli.request()?;
    let config = ClientConfig::load(cli.config.as_deref())?;

    info!(
        "Sending \"{}\" to {}:{}",
        request.line(),
        cli.host,
        cli.port
    );

    let mut reporter = ConsoleReporter;
    run_session(&cli.host, cli.port, &request, &config, &mut reporter).await
}
