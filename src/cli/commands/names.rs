use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use colored::Colorize;

use super::super::args::NamesCommand;
use super::super::exit_status::ExitStatus;
use super::super::report::{print_names, print_parse_warning};
use crate::core::{FileNames, extract_names_from_files};

pub fn names(NamesCommand { args }: NamesCommand) -> Result<ExitStatus> {
    let verbose = args.common.verbose;
    let files = expand_patterns(&args.patterns)?;
    if files.is_empty() {
        bail!("No TypeScript files matched: {}", args.patterns.join(" "));
    }
    if verbose {
        eprintln!("Analyzing {} file(s)", files.len());
    }

    let mut extracted: Vec<FileNames> = Vec::new();
    let mut failed = 0;
    for (path, result) in extract_names_from_files(&files) {
        match result {
            Ok(names) => extracted.push(names),
            Err(err) => {
                failed += 1;
                if verbose {
                    eprintln!("{} {}: {:#}", "warning:".bold().yellow(), path.display(), err);
                }
            }
        }
    }

    if args.common.json {
        println!("{}", serde_json::to_string_pretty(&extracted)?);
    } else {
        print_names(&extracted);
    }
    print_parse_warning(failed, verbose);

    if failed > 0 {
        Ok(ExitStatus::Failure)
    } else {
        Ok(ExitStatus::Success)
    }
}

fn is_typescript(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext == "ts" || ext == "tsx" || ext == "mts" || ext == "cts")
}

/// Expand glob patterns into TypeScript files, keeping literal paths as-is.
///
/// Order follows the patterns; each glob expands alphabetically. Duplicates
/// are dropped.
fn expand_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = Vec::new();

    for pattern in patterns {
        if !pattern.contains(['*', '?', '[']) {
            let path = PathBuf::from(pattern);
            if !files.contains(&path) {
                files.push(path);
            }
            continue;
        }

        let entries = glob::glob(pattern)
            .with_context(|| format!("Invalid glob pattern: \"{}\"", pattern))?;
        for entry in entries {
            let path = entry?;
            if path.is_file() && is_typescript(&path) && !files.contains(&path) {
                files.push(path);
            }
        }
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_expand_patterns() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("src");
        fs::create_dir_all(src.join("nested")).unwrap();
        fs::write(src.join("b.ts"), "").unwrap();
        fs::write(src.join("a.tsx"), "").unwrap();
        fs::write(src.join("nested").join("c.d.ts"), "").unwrap();
        fs::write(src.join("readme.md"), "").unwrap();

        let pattern = format!("{}/**/*", src.display());
        let literal = src.join("b.ts").display().to_string();
        let files = expand_patterns(&[literal, pattern]).unwrap();

        assert_eq!(files.len(), 3);
        assert_eq!(files[0], src.join("b.ts"));
        assert!(files.contains(&src.join("a.tsx")));
        assert!(files.contains(&src.join("nested").join("c.d.ts")));
    }

    #[test]
    fn test_expand_invalid_pattern() {
        let err = expand_patterns(&["src/[".to_string()]).unwrap_err();
        assert!(err.to_string().contains("Invalid glob pattern"));
    }

    #[test]
    fn test_is_typescript() {
        assert!(is_typescript(Path::new("a.ts")));
        assert!(is_typescript(Path::new("a.d.ts")));
        assert!(is_typescript(Path::new("a.tsx")));
        assert!(!is_typescript(Path::new("a.js")));
        assert!(!is_typescript(Path::new("Makefile")));
    }
}
