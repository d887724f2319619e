//! Raw reference names per declaration, across many files.
//!
//! Unlike the closure builder this does no resolution at all: every type
//! declaration of a file is run through the reference extractor on its own,
//! and the output is reported as-is (own name first, then twice, then the
//! references).

use std::path::PathBuf;

use anyhow::Result;
use rayon::prelude::*;
use serde::Serialize;

use crate::core::collect::{ReExport, collect_declarations};
use crate::core::parsers::{ParsedSource, parse_typescript_file};
use crate::core::traverse::{ReferenceExtractor, TypeKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeclarationNames {
    pub name: String,
    pub kind: TypeKind,
    pub line: usize,
    pub names: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileNames {
    pub file: String,
    pub declarations: Vec<DeclarationNames>,
    pub reexports: Vec<ReExport>,
}

/// Run the reference extractor over every type declaration of a file.
pub fn extract_names(parsed: &ParsedSource) -> FileNames {
    let collected = collect_declarations(parsed);
    let extractor = ReferenceExtractor::new(parsed.text());

    let declarations = collected
        .table
        .iter()
        .map(|decl| DeclarationNames {
            name: decl.name.clone(),
            kind: decl.kind(),
            line: decl.line,
            names: extractor.extract(decl.node()),
        })
        .collect();

    FileNames {
        file: parsed.file_path.clone(),
        declarations,
        reexports: collected.reexports,
    }
}

/// Parse and extract many files in parallel.
///
/// Results keep the order of `files`; a file that fails to read or parse
/// yields an `Err` in its slot without affecting the others.
pub fn extract_names_from_files(files: &[PathBuf]) -> Vec<(PathBuf, Result<FileNames>)> {
    files
        .par_iter()
        .map(|path| {
            let result = parse_typescript_file(path).map(|parsed| extract_names(&parsed));
            (path.clone(), result)
        })
        .collect()
}
