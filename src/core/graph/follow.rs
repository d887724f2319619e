use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use super::{Closure, ClosureBuilder, ClosureOptions};
use crate::core::parsers::parse_typescript_file;

/// Resolve a relative module specifier against the importing file.
///
/// Tries the specifier as written, then with each extension appended, then
/// as a directory `index` file. A trailing `.js` is also tried with the
/// extensions substituted, matching how TypeScript projects emitting ESM
/// spell their imports.
pub fn resolve_module(from_file: &Path, specifier: &str, extensions: &[String]) -> Option<PathBuf> {
    let base = from_file
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join(specifier);
    let base_str = base.to_string_lossy().into_owned();

    let mut candidates = vec![base.clone()];
    candidates.extend(extensions.iter().map(|ext| PathBuf::from(format!("{base_str}{ext}"))));
    if let Some(stem) = base_str.strip_suffix(".js") {
        candidates.extend(extensions.iter().map(|ext| PathBuf::from(format!("{stem}{ext}"))));
    }
    candidates.extend(extensions.iter().map(|ext| base.join(format!("index{ext}"))));

    candidates.into_iter().find(|candidate| candidate.is_file())
}

/// Parse `path` and build the closure of `roots`.
///
/// With `follow_reexports`, every relative re-export the closure needed is
/// resolved to a sibling file and a nested closure is built there for the
/// names it forwards, looked up by their name inside that file. Re-exports
/// resolving to the same file are followed together. A name is traversed at
/// most once per file, which also stops re-export cycles.
pub fn build_closure(path: &Path, roots: &[String], options: &ClosureOptions) -> Result<Closure> {
    let mut seen = HashSet::new();
    build_closure_inner(path, roots, options, &mut seen)
}

/// Names needed from one resolved sibling file.
struct FollowTarget {
    path: PathBuf,
    canonical: PathBuf,
    modules: Vec<String>,
    roots: Vec<String>,
}

fn build_closure_inner(
    path: &Path,
    roots: &[String],
    options: &ClosureOptions,
    seen: &mut HashSet<(PathBuf, String)>,
) -> Result<Closure> {
    if options.verbose {
        eprintln!("Parsing {}", path.display());
    }
    let file = canonical(path);
    for root in roots {
        seen.insert((file.clone(), root.clone()));
    }

    let parsed = parse_typescript_file(path)?;
    let mut closure = ClosureBuilder::new(&parsed, options).build(roots);

    // Default roots are only known after the build.
    let traversed = closure
        .roots
        .iter()
        .cloned()
        .chain(closure.declarations.iter().map(|entry| entry.name.clone()));
    for name in traversed {
        seen.insert((file.clone(), name));
    }

    if !options.follow_reexports {
        return Ok(closure);
    }

    let mut targets: Vec<FollowTarget> = Vec::new();
    let mut unresolved: Vec<String> = Vec::new();
    for reexport in &closure.reexports {
        let Some(target) = resolve_module(path, &reexport.module, &options.module_extensions)
        else {
            unresolved.push(reexport.module.clone());
            continue;
        };
        let target_canonical = canonical(&target);
        let index = match targets
            .iter()
            .position(|t| t.canonical == target_canonical)
        {
            Some(index) => index,
            None => {
                targets.push(FollowTarget {
                    path: target,
                    canonical: target_canonical,
                    modules: Vec::new(),
                    roots: Vec::new(),
                });
                targets.len() - 1
            }
        };
        let entry = &mut targets[index];
        if !entry.modules.contains(&reexport.module) {
            entry.modules.push(reexport.module.clone());
        }
        for name in &reexport.names {
            let origin = reexport.origin_of(name).to_string();
            if !entry.roots.contains(&origin) {
                entry.roots.push(origin);
            }
        }
    }

    closure.unresolved_modules.extend(unresolved);

    for target in targets {
        let roots: Vec<String> = target
            .roots
            .into_iter()
            .filter(|root| !seen.contains(&(target.canonical.clone(), root.clone())))
            .collect();
        if roots.is_empty() {
            if options.verbose {
                eprintln!("Skipping {} (already followed)", target.path.display());
            }
            continue;
        }
        let nested = build_closure_inner(&target.path, &roots, options, seen).with_context(|| {
            format!("Failed to follow re-export \"{}\"", target.modules.join("\", \""))
        })?;
        closure.followed.push(nested);
    }

    Ok(closure)
}

fn canonical(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}
