//! CLI definition for the taskboard command-line interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{CliOverrides, OutputFormat};

/// Taskboard - replay drag gestures against a task board.
///
/// Stands in for the gesture layer of a task board UI: builds a board, feeds
/// it recorded drag events and commands, and prints the result.
#[derive(Parser, Debug)]
#[command(name = "taskboard")]
#[command(version)]
#[command(about = "Replay drag gestures against a task board")]
#[command(
    long_about = "Builds a task board (the three-list demo board, or an empty one), replays a \
    script of drag events and commands against it, and prints the resulting board.\n\n\
    Configuration is read from taskboard.{toml,yaml,yml,json} in the configuration \
    directory, then TASKBOARD_* environment variables, then these flags.\n\n\
    Environment variables:\n  \
    TASKBOARD_SEED       Start from the demo board (true/false)\n  \
    TASKBOARD_OUTPUT     table or json\n  \
    TASKBOARD_LOG_LEVEL  Log filter used when RUST_LOG is unset"
)]
pub struct Cli {
    /// Enable debug output to stderr
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Directory searched for taskboard.* config files (default: current directory)
    #[arg(long, global = true, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum)]
    pub output: Option<OutputFormat>,

    /// Start from an empty board instead of the demo board
    #[arg(long, global = true)]
    pub empty: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Flags that override file and environment configuration
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            seed: self.empty.then_some(false),
            output: self.output,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the starting board
    Show,

    /// Replay a YAML or JSON gesture script and print the final board
    Replay {
        /// Path to the script
        script: PathBuf,

        /// Also print what each step did
        #[arg(long)]
        steps: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_replay() {
        let cli = Cli::parse_from(["taskboard", "replay", "drag.yaml", "--steps", "-o", "json"]);
        match &cli.command {
            Commands::Replay { script, steps } => {
                assert_eq!(script, &PathBuf::from("drag.yaml"));
                assert!(*steps);
            }
            other => panic!("unexpected command {other:?}"),
        }
        assert_eq!(cli.output, Some(OutputFormat::Json));
    }

    #[test]
    fn test_overrides_only_set_flags() {
        let cli = Cli::parse_from(["taskboard", "show"]);
        let overrides = cli.overrides();
        assert_eq!(overrides.seed, None);
        assert_eq!(overrides.output, None);

        let cli = Cli::parse_from(["taskboard", "--empty", "show"]);
        assert_eq!(cli.overrides().seed, Some(false));
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
