//! Command-line interface layer.
//!
//! Parses arguments, dispatches to a command, and prints results. Commands
//! return an `ExitStatus`; internal errors propagate as `anyhow::Error` and
//! are turned into `ExitStatus::Error` by `main`.

mod args;
mod commands;
mod exit_status;
pub mod report;

use std::{env, time::Instant};

use anyhow::{Context, Result};

pub use args::{
    Arguments, ClosureArgs, ClosureCommand, Command, CommonArgs, NamesArgs, NamesCommand,
};
pub use exit_status::ExitStatus;

use commands::{closure::closure, init::init, names::names};

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let verbose = args.verbose();
    let start = Instant::now();

    let Some(Arguments { command }) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    let status = match command {
        Some(Command::Closure(cmd)) => closure(cmd),
        Some(Command::Names(cmd)) => names(cmd),
        Some(Command::Init) => {
            let cwd = env::current_dir().context("Failed to read current directory")?;
            init(&cwd)
        }
        None => anyhow::bail!("No command provided. Use --help to see available commands."),
    }?;

    if verbose {
        eprintln!("Finished in {:.2?}", start.elapsed());
    }
    Ok(status)
}
