//! Report formatting and printing utilities.
//!
//! Separate from core logic to allow typedeps to be used as a library.

use std::io::{self, Write};

use colored::Colorize;

use crate::core::{Closure, FileNames};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

fn plural(count: usize, one: &'static str, many: &'static str) -> &'static str {
    if count == 1 { one } else { many }
}

/// Print a closure and its followed re-exports to stdout.
pub fn print_closure(closure: &Closure) {
    print_closure_to(closure, &mut io::stdout().lock());
}

/// Print a closure to a custom writer.
///
/// Useful for testing or redirecting output.
pub fn print_closure_to<W: Write>(closure: &Closure, writer: &mut W) {
    print_closure_tree(closure, 0, writer);
    print_closure_summary(closure, writer);
}

fn print_closure_tree<W: Write>(closure: &Closure, depth: usize, writer: &mut W) {
    let indent = "  ".repeat(depth);
    let _ = writeln!(writer, "{}{}:", indent, closure.file.bold());

    for entry in &closure.declarations {
        let exported = if entry.exported { " (exported)" } else { "" };
        let _ = writeln!(
            writer,
            "{}  {:>4}  {} {}{}",
            indent,
            entry.line.to_string().dimmed(),
            entry.kind.as_str().cyan(),
            entry.name,
            exported.dimmed()
        );
    }
    if !closure.external.is_empty() {
        let _ = writeln!(
            writer,
            "{}  {} {}",
            indent,
            "external:".yellow(),
            closure.external.join(", ")
        );
    }
    for reexport in &closure.reexports {
        let _ = writeln!(
            writer,
            "{}  {} {}: {}",
            indent,
            "from".blue(),
            reexport.module,
            reexport.names.join(", ")
        );
    }
    if !closure.missing_roots.is_empty() {
        let _ = writeln!(
            writer,
            "{}  {} {}",
            indent,
            "missing:".red(),
            closure.missing_roots.join(", ")
        );
    }
    for module in &closure.unresolved_modules {
        let _ = writeln!(
            writer,
            "{}  {} cannot resolve module {}",
            indent,
            "warning:".bold().yellow(),
            module
        );
    }

    for nested in &closure.followed {
        print_closure_tree(nested, depth + 1, writer);
    }
}

fn count_closure(closure: &Closure) -> (usize, usize) {
    closure
        .followed
        .iter()
        .map(count_closure)
        .fold((closure.declarations.len(), 1), |(d, f), (nd, nf)| {
            (d + nd, f + nf)
        })
}

fn collect_missing<'a>(closure: &'a Closure, missing: &mut Vec<&'a str>) {
    missing.extend(closure.missing_roots.iter().map(String::as_str));
    for nested in &closure.followed {
        collect_missing(nested, missing);
    }
}

fn print_closure_summary<W: Write>(closure: &Closure, writer: &mut W) {
    let mut missing = Vec::new();
    collect_missing(closure, &mut missing);

    if !missing.is_empty() {
        let _ = writeln!(
            writer,
            "{} {}",
            FAILURE_MARK.red(),
            format!(
                "{} not found: {}",
                plural(missing.len(), "Type", "Types"),
                missing.join(", ")
            )
            .red()
        );
        return;
    }

    let (declarations, files) = count_closure(closure);
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Collected {} {} from {} {}",
            declarations,
            plural(declarations, "declaration", "declarations"),
            files,
            plural(files, "file", "files")
        )
        .green()
    );
}

/// Print extracted names for a set of files to stdout.
pub fn print_names(files: &[FileNames]) {
    print_names_to(files, &mut io::stdout().lock());
}

/// Print extracted names to a custom writer.
pub fn print_names_to<W: Write>(files: &[FileNames], writer: &mut W) {
    for file in files {
        let _ = writeln!(writer, "{}:", file.file.bold());
        for decl in &file.declarations {
            let _ = writeln!(
                writer,
                "  {:>4}  {} {}: {}",
                decl.line.to_string().dimmed(),
                decl.kind.as_str().cyan(),
                decl.name,
                decl.names.join(", ")
            );
        }
        for reexport in &file.reexports {
            let _ = writeln!(
                writer,
                "  {} {}: {}",
                "from".blue(),
                reexport.module,
                reexport.names.join(", ")
            );
        }
    }
}

/// Print a warning about files that could not be parsed.
pub fn print_parse_warning(count: usize, verbose: bool) {
    print_parse_warning_to(count, verbose, &mut io::stderr().lock());
}

/// Print a parse warning to a custom writer.
pub fn print_parse_warning_to<W: Write>(count: usize, verbose: bool, writer: &mut W) {
    if count > 0 && !verbose {
        let _ = writeln!(
            writer,
            "{} {} file(s) could not be parsed (use {} for details)",
            "warning:".bold().yellow(),
            count,
            "-v".cyan()
        );
    }
}
