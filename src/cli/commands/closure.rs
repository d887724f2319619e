use std::env;

use anyhow::{Context, Result};

use super::super::args::ClosureCommand;
use super::super::exit_status::ExitStatus;
use super::super::report::print_closure;
use crate::config::{CONFIG_FILE_NAME, load_config};
use crate::core::{ClosureOptions, build_closure};

pub fn closure(ClosureCommand { args }: ClosureCommand) -> Result<ExitStatus> {
    let verbose = args.common.verbose;

    let cwd = env::current_dir().context("Failed to read current directory")?;
    let loaded = load_config(&cwd)?;
    if verbose {
        if loaded.from_file {
            eprintln!("Using {}", CONFIG_FILE_NAME);
        } else {
            eprintln!("No {} found, using defaults", CONFIG_FILE_NAME);
        }
    }

    let mut options = ClosureOptions::from_config(&loaded.config)?;
    options.follow_reexports |= args.follow_reexports;
    options.verbose = verbose;

    let mut roots = args.types;
    roots.extend(loaded.config.roots);

    let closure = build_closure(&args.file, &roots, &options)
        .with_context(|| format!("Failed to analyze {}", args.file.display()))?;

    if args.common.json {
        println!("{}", serde_json::to_string_pretty(&closure)?);
    } else {
        print_closure(&closure);
    }

    if closure.has_missing_roots() {
        Ok(ExitStatus::Failure)
    } else {
        Ok(ExitStatus::Success)
    }
}
