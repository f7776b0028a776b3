//! Command-line arguments

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Test The Room Hypothesis of Common Sense with scripted or interactive speech-acts.
#[derive(Debug, Parser)]
#[command(name = "room", version, about)]
pub struct Cli {
    /// Log level filter (error, warn, info, debug, trace). `RUST_LOG` wins when set.
    #[arg(long, global = true, env = "ROOM_LOG", default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run scenario files and report every step
    Run {
        /// Scenario files (JSON)
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Only print failing steps and the summary line
        #[arg(short, long)]
        quiet: bool,
    },

    /// Parse scenario files without running them
    Check {
        /// Scenario files (JSON)
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Start an interactive session
    Repl {
        /// Start from the objects of a scenario file
        #[arg(short, long)]
        scenario: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_run_with_files() {
        let cli = Cli::try_parse_from(["room", "run", "a.json", "b.json", "--quiet"]).unwrap();
        match cli.command {
            Command::Run { files, quiet } => {
                assert_eq!(files.len(), 2);
                assert!(quiet);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn run_requires_a_file() {
        assert!(Cli::try_parse_from(["room", "run"]).is_err());
    }

    #[test]
    fn log_level_is_global() {
        let cli = Cli::try_parse_from(["room", "repl", "--log-level", "debug"]).unwrap();
        assert_eq!(cli.log_level, "debug");
    }
}
