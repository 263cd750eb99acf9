//! Entry point for the `rmat` edge-list generator.
//!
//! Logging is initialised before argument handling so every later step can
//! emit structured diagnostics. Failures are logged with their stable error
//! code and mapped to a non-zero exit status.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use rmat_cli::{
    cli::{Cli, CliError, run_cli},
    logging::{self, LoggingError},
};
use tracing::{error, field};

fn try_main() -> Result<()> {
    let cli = Cli::parse();
    run_cli(cli).context("failed to generate edges")?;
    Ok(())
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    if let Err(err) = try_main() {
        let code = err
            .downcast_ref::<CliError>()
            .and_then(|cli_error| match cli_error {
                CliError::Rmat(rmat) => Some(rmat.code()),
                CliError::Io { .. } => None,
            });

        error!(
            error = %err,
            code = code.map(|code| field::display(code.as_str())),
            "command execution failed"
        );
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

#[expect(
    clippy::print_stderr,
    reason = "Emit one-off diagnostic before tracing is initialized"
)]
fn report_logging_init_error(err: &LoggingError) {
    eprintln!("failed to initialize logging: {err}");
}
