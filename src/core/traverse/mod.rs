//! Per-declaration reference extraction.
//!
//! This module is the analytical core of typedeps. Given a single type
//! declaration it reports the type names the declaration mentions, and given a
//! re-export statement it reports the names being forwarded. Both operate on
//! surface syntax only: names are compared by their exact source text, never
//! resolved to symbols.
//!
//! ## Module Structure
//!
//! - `references`: `ReferenceExtractor` for interfaces, type aliases and enums
//! - `reexports`: named re-export extraction for `export { .. } from "..."`

mod references;
mod reexports;


use std::collections::HashSet;

use swc_common::Span;
use swc_ecma_ast::{Decl, TsEnumDecl, TsInterfaceDecl, TsTypeAliasDecl};

pub use references::{ReferenceExtractor, extracted_type_names};
pub use reexports::{
    ReExportBinding, ReExportDecl, extracted_type_names_from_export, reexport_bindings,
};

/// A type declaration: interface, type alias, or enum.
///
/// Borrowed from a parsed module; the extractor never mutates it.
#[derive(Debug, Clone, Copy)]
pub enum TypeNode<'a> {
    Interface(&'a TsInterfaceDecl),
    TypeAlias(&'a TsTypeAliasDecl),
    Enum(&'a TsEnumDecl),
}

impl<'a> TypeNode<'a> {
    /// Narrow a declaration to a type node, if it is one.
    pub fn from_decl(decl: &'a Decl) -> Option<Self> {
        match decl {
            Decl::TsInterface(decl) => Some(Self::Interface(&**decl)),
            Decl::TsTypeAlias(decl) => Some(Self::TypeAlias(&**decl)),
            Decl::TsEnum(decl) => Some(Self::Enum(&**decl)),
            _ => None,
        }
    }

    /// The declared identifier.
    pub fn name(&self) -> &'a str {
        match self {
            Self::Interface(decl) => decl.id.sym.as_str(),
            Self::TypeAlias(decl) => decl.id.sym.as_str(),
            Self::Enum(decl) => decl.id.sym.as_str(),
        }
    }

    pub fn span(&self) -> Span {
        match self {
            Self::Interface(decl) => decl.span,
            Self::TypeAlias(decl) => decl.span,
            Self::Enum(decl) => decl.span,
        }
    }

    pub fn kind(&self) -> TypeKind {
        match self {
            Self::Interface(_) => TypeKind::Interface,
            Self::TypeAlias(_) => TypeKind::TypeAlias,
            Self::Enum(_) => TypeKind::Enum,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TypeKind {
    Interface,
    TypeAlias,
    Enum,
}

impl TypeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Interface => "interface",
            Self::TypeAlias => "type",
            Self::Enum => "enum",
        }
    }
}

/// Check whether a declaration is an interface, type alias, or enum.
pub fn is_type_node(decl: &Decl) -> bool {
    TypeNode::from_decl(decl).is_some()
}

/// Traversal markers owned by whoever drives extraction across many
/// declarations.
///
/// Keyed by declaration name. The extractor only reads `visited`; it is the
/// driver's job to set both markers.
#[derive(Debug, Default, Clone)]
pub struct TypeMarkers {
    visited: HashSet<String>,
    exported: HashSet<String>,
}

impl TypeMarkers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a declaration as visited. Returns false if it already was.
    pub fn mark_visited(&mut self, name: &str) -> bool {
        self.visited.insert(name.to_string())
    }

    pub fn is_visited(&self, name: &str) -> bool {
        self.visited.contains(name)
    }

    pub fn mark_exported(&mut self, name: &str) -> bool {
        self.exported.insert(name.to_string())
    }

    pub fn is_exported(&self, name: &str) -> bool {
        self.exported.contains(name)
    }
}
