//! wirebox - Entry Point
//!
//! Binary entry point for the catalog inspection CLI.

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use wirebox::cli::{Cli, execute};
use wirebox_infrastructure::logging::init_logging;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let config = cli.load_config().context("Failed to load configuration")?;
    init_logging(&config.logging).context("Failed to initialize logging")?;

    let outcome = execute(&cli.command, &config)?;
    print!("{}", outcome.output);
    Ok(if outcome.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
