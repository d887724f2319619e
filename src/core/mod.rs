//! Core analysis engine.
//!
//! - `parsers`: TypeScript parsing with swc
//! - `traverse`: per-declaration reference extraction and re-export names
//! - `collect`: declaration table, export markers and relative re-exports
//! - `graph`: dependency closure over a file (and followed re-exports)
//! - `names`: raw extractor output across many files

pub mod collect;
pub mod graph;
pub mod names;
pub mod parsers;
pub mod traverse;

pub use graph::{Closure, ClosureBuilder, ClosureEntry, ClosureOptions, build_closure};
pub use names::{DeclarationNames, FileNames, extract_names, extract_names_from_files};
pub use traverse::{
    ReExportBinding, ReExportDecl, ReferenceExtractor, TypeKind, TypeMarkers, TypeNode,
    extracted_type_names, extracted_type_names_from_export, is_type_node, reexport_bindings,
};
