//! CLI argument definitions using clap.
//!
//! This module defines the command-line interface structure for all typedeps
//! commands. It uses clap's derive API for declarative argument parsing.
//!
//! ## Commands
//!
//! - `closure`: Collect the declarations a set of types depends on
//! - `names`: Print the raw reference names of every type declaration
//! - `init`: Initialize typedeps configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Closure(cmd)) => cmd.args.common.verbose,
            Some(Command::Names(cmd)) => cmd.args.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all analysis commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Print machine-readable JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
pub struct ClosureArgs {
    /// TypeScript file to analyze
    pub file: PathBuf,

    /// Root type names (default: all exported types)
    /// Can be specified multiple times: -t User -t Role
    #[arg(short = 't', long = "type", value_name = "NAME")]
    pub types: Vec<String>,

    /// Follow `export { .. } from "./module"` into sibling files
    /// (overrides config file)
    #[arg(long)]
    pub follow_reexports: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct ClosureCommand {
    #[command(flatten)]
    pub args: ClosureArgs,
}

#[derive(Debug, Parser)]
pub struct NamesArgs {
    /// Files or glob patterns (e.g. "src/**/*.ts")
    #[arg(required = true, value_name = "PATTERN")]
    pub patterns: Vec<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct NamesCommand {
    #[command(flatten)]
    pub args: NamesArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Collect every declaration the given types depend on within a file
    Closure(ClosureCommand),
    /// Print the referenced type names of every type declaration
    Names(NamesCommand),
    /// Initialize a new .typedepsrc.json configuration file
    Init,
}
