//! `room` command-line tool
//!
//! ```text
//! room run scenarios/door.json      run scenarios and report each step
//! room check scenarios/*.json       parse scenarios without running them
//! room repl --scenario door.json    interactive session
//! ```

mod cli;
mod commands;
mod logger;
mod repl;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init(&cli.log_level)?;

    match cli.command {
        Command::Run { files, quiet } => {
            if !commands::run(&files, quiet)? {
                std::process::exit(1);
            }
        }
        Command::Check { files } => commands::check(&files)?,
        Command::Repl { scenario } => repl::run(scenario.as_deref())?,
    }
    Ok(())
}
