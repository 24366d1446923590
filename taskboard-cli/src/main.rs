//! Taskboard CLI - replay drag gestures against a task board.
//!
//! Commands:
//! - `taskboard show`: Print the starting board
//! - `taskboard replay <script>`: Replay a gesture script and print the final board
//!
//! Environment variables:
//! - TASKBOARD_SEED, TASKBOARD_OUTPUT, TASKBOARD_LOG_LEVEL: configuration overrides
//! - RUST_LOG: log filter, takes precedence over the configured level
//!
//! Exit codes:
//! - 0: Success
//! - 1: Error

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use taskboard_cli::{run, Cli, ConfigLoader};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match try_main(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn try_main(cli: &Cli) -> anyhow::Result<()> {
    let dir = match &cli.config_dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().context("unable to determine current directory")?,
    };
    let config = ConfigLoader::new(dir).load(&cli.overrides())?;

    // Initialize tracing with appropriate level
    let filter = if cli.debug {
        EnvFilter::new("taskboard=debug,taskboard_cli=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .init();

    let stdout = std::io::stdout();
    run(&cli.command, &config, &mut stdout.lock())
}
