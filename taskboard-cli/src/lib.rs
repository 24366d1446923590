//! Headless driver for the taskboard engine.
//!
//! Loads configuration, builds a board, replays gesture scripts and renders
//! the result. The `taskboard` binary is a thin wrapper over [`run`].

pub mod cli;
pub mod config;
pub mod script;
pub mod table;

pub use cli::{Cli, Commands};
pub use config::{CliConfig, CliOverrides, ConfigError, ConfigLoader, OutputFormat};

use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use taskboard::{BoardSnapshot, BoardStore, TaskBoard};
use tracing::info;

use script::StepReport;

/// JSON document printed by `replay --output json`
#[derive(Debug, Serialize)]
struct ReplayOutput<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    steps: Option<&'a [StepReport]>,
    board: &'a BoardSnapshot,
}

/// The starting board for this configuration
pub fn initial_board(config: &CliConfig) -> Result<TaskBoard> {
    let board = if config.seed {
        TaskBoard::demo()?
    } else {
        TaskBoard::new(BoardStore::new())
    };
    Ok(board)
}

/// Execute a parsed command, writing its output to `out`
pub fn run(command: &Commands, config: &CliConfig, out: &mut impl Write) -> Result<()> {
    let mut board = initial_board(config)?;

    match command {
        Commands::Show => render(out, config.output, None, &board.snapshot()),
        Commands::Replay { script, steps } => {
            let loaded = script::load(script)?;
            let reports = script::replay(&mut board, &loaded)?;
            if let Some(session) = board.drag_session() {
                info!(item = %session.item, "script ended mid-drag");
            }
            board.store().verify()?;
            let shown = steps.then_some(reports.as_slice());
            render(out, config.output, shown, &board.snapshot())
        }
    }
}

fn render(
    out: &mut impl Write,
    format: OutputFormat,
    steps: Option<&[StepReport]>,
    board: &BoardSnapshot,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let doc = ReplayOutput { steps, board };
            serde_json::to_writer_pretty(&mut *out, &doc)?;
            writeln!(out)?;
        }
        OutputFormat::Table => {
            if let Some(steps) = steps {
                writeln!(out, "{}", table::report_table(steps))?;
            }
            writeln!(out, "{}", table::board_table(board))?;
        }
    }
    Ok(())
}
