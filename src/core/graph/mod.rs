//! Dependency closure over the type declarations of a file.
//!
//! The closure builder is the driver for `ReferenceExtractor`: it owns the
//! worklist and the `visited` markers, resolves each reference name through
//! the file's declaration table, and records names it cannot resolve as
//! external or as provided by a relative re-export.
//!
//! ## Module Structure
//!
//! - `builder`: single-file worklist (`ClosureBuilder`)
//! - `follow`: building closures across relative re-exports

mod builder;
mod follow;

use serde::Serialize;

use crate::core::collect::ReExport;
use crate::core::traverse::TypeKind;

pub use builder::{ClosureBuilder, ClosureOptions};
pub use follow::{build_closure, resolve_module};

/// One declaration that belongs to a closure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClosureEntry {
    pub name: String,
    pub kind: TypeKind,
    pub line: usize,
    pub exported: bool,
}

/// Declarations reachable from a set of roots within one file.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Closure {
    pub file: String,
    pub roots: Vec<String>,
    /// Source order.
    pub declarations: Vec<ClosureEntry>,
    /// Discovery order.
    pub external: Vec<String>,
    /// Relative re-exports, each listing only the names the closure needed.
    pub reexports: Vec<ReExport>,
    /// Roots with no declaration and no re-export in this file.
    pub missing_roots: Vec<String>,
    /// Nested closures of followed re-exports.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub followed: Vec<Closure>,
    /// Re-exported module specifiers that matched no file when following.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unresolved_modules: Vec<String>,
}

impl Closure {
    pub fn declaration_names(&self) -> Vec<&str> {
        self.declarations.iter().map(|d| d.name.as_str()).collect()
    }

    /// True if this closure or any followed closure has missing roots.
    pub fn has_missing_roots(&self) -> bool {
        !self.missing_roots.is_empty() || self.followed.iter().any(Closure::has_missing_roots)
    }
}
