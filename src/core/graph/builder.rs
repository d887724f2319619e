use std::collections::{BTreeSet, VecDeque};

use anyhow::Result;
use glob::Pattern;

use super::{Closure, ClosureEntry};
use crate::config::Config;
use crate::core::collect::{FileDeclarations, collect_declarations};
use crate::core::parsers::ParsedSource;
use crate::core::traverse::ReferenceExtractor;

#[derive(Debug, Clone)]
pub struct ClosureOptions {
    /// Names matching any pattern are external without a table lookup.
    pub externals: Vec<Pattern>,
    pub follow_reexports: bool,
    pub module_extensions: Vec<String>,
    pub verbose: bool,
}

impl ClosureOptions {
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self {
            externals: config.external_patterns()?,
            follow_reexports: config.follow_reexports,
            module_extensions: config.module_extensions.clone(),
            verbose: false,
        })
    }

    fn is_external(&self, name: &str) -> bool {
        self.externals.iter().any(|pattern| pattern.matches(name))
    }
}

impl Default for ClosureOptions {
    fn default() -> Self {
        let config = Config::default();
        Self {
            externals: Vec::new(),
            follow_reexports: config.follow_reexports,
            module_extensions: config.module_extensions,
            verbose: false,
        }
    }
}

/// Worklist driver over one parsed file.
///
/// # Usage
///
/// ```ignore
/// let builder = ClosureBuilder::new(&parsed, &options);
/// let closure = builder.build(&["User".to_string()]);
/// for entry in &closure.declarations { ... }
/// ```
pub struct ClosureBuilder<'a> {
    parsed: &'a ParsedSource,
    options: &'a ClosureOptions,
    declarations: FileDeclarations,
}

impl<'a> ClosureBuilder<'a> {
    pub fn new(parsed: &'a ParsedSource, options: &'a ClosureOptions) -> Self {
        Self {
            parsed,
            options,
            declarations: collect_declarations(parsed),
        }
    }

    pub fn declarations(&self) -> &FileDeclarations {
        &self.declarations
    }

    /// Compute the closure of `roots`, or of every exported type declaration
    /// when `roots` is empty.
    ///
    /// Re-exports are recorded but not followed; see `build_closure`.
    pub fn build(&self, roots: &[String]) -> Closure {
        let roots = if roots.is_empty() {
            self.declarations.exported_names()
        } else {
            dedup(roots.iter().cloned())
        };

        let table = &self.declarations.table;
        let mut markers = self.declarations.markers.clone();
        let mut queue: VecDeque<String> = roots.iter().cloned().collect();
        let mut included = BTreeSet::new();
        let mut external: Vec<String> = Vec::new();
        let mut reexported: Vec<Vec<String>> = vec![Vec::new(); self.declarations.reexports.len()];
        let mut missing_roots: Vec<String> = Vec::new();

        while let Some(name) = queue.pop_front() {
            if markers.is_visited(&name) {
                continue;
            }

            if self.options.is_external(&name) {
                markers.mark_visited(&name);
                external.push(name);
                continue;
            }

            let indices = table.indices(&name);
            if !indices.is_empty() {
                let mut references = Vec::new();
                {
                    let extractor =
                        ReferenceExtractor::new(self.parsed.text()).with_markers(&markers);
                    for &index in indices {
                        if let Some(decl) = table.get(index) {
                            // The head is the declaration's own name.
                            references.extend(extractor.extract(decl.node()).into_iter().skip(1));
                            included.insert(index);
                        }
                    }
                }
                markers.mark_visited(&name);
                queue.extend(references.into_iter().filter(|r| !markers.is_visited(r)));
                continue;
            }

            markers.mark_visited(&name);
            if let Some(index) = self.declarations.reexport_of(&name) {
                reexported[index].push(name);
            } else if roots.contains(&name) {
                missing_roots.push(name);
            } else {
                external.push(name);
            }
        }

        let declarations = included
            .into_iter()
            .filter_map(|index| table.get(index))
            .map(|decl| ClosureEntry {
                name: decl.name.clone(),
                kind: decl.kind(),
                line: decl.line,
                exported: markers.is_exported(&decl.name),
            })
            .collect();

        let reexports = self
            .declarations
            .reexports
            .iter()
            .zip(reexported)
            .filter(|(_, names)| !names.is_empty())
            .map(|(reexport, names)| reexport.restricted_to(names))
            .collect();

        Closure {
            file: self.parsed.file_path.clone(),
            roots,
            declarations,
            external,
            reexports,
            missing_roots,
            followed: Vec::new(),
            unresolved_modules: Vec::new(),
        }
    }
}

fn dedup(names: impl Iterator<Item = String>) -> Vec<String> {
    let mut result: Vec<String> = Vec::new();
    for name in names {
        if !result.contains(&name) {
            result.push(name);
        }
    }
    result
}
