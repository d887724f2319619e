//! Type definitions for declaration collection.
//!
//! All types in this module are created by `DeclarationCollector` in a single
//! pass over a file and consumed by the closure builder to resolve reference
//! names back to declarations.

use std::collections::HashMap;

use serde::Serialize;
use swc_ecma_ast::{TsEnumDecl, TsInterfaceDecl, TsTypeAliasDecl};

use crate::core::traverse::{ReExportBinding, TypeKind, TypeMarkers, TypeNode};

#[derive(Debug, Clone)]
enum DeclBody {
    Interface(Box<TsInterfaceDecl>),
    TypeAlias(Box<TsTypeAliasDecl>),
    Enum(Box<TsEnumDecl>),
}

/// A type declaration owned by the table.
///
/// Spans still point into the `SourceMap` of the file it was collected from.
#[derive(Debug, Clone)]
pub struct TypeDecl {
    /// Declared identifier (e.g., "User").
    pub name: String,
    /// 1-based line of the declaration.
    pub line: usize,
    body: DeclBody,
}

impl TypeDecl {
    pub fn new(node: TypeNode<'_>, line: usize) -> Self {
        let body = match node {
            TypeNode::Interface(decl) => DeclBody::Interface(Box::new(decl.clone())),
            TypeNode::TypeAlias(decl) => DeclBody::TypeAlias(Box::new(decl.clone())),
            TypeNode::Enum(decl) => DeclBody::Enum(Box::new(decl.clone())),
        };
        Self {
            name: node.name().to_string(),
            line,
            body,
        }
    }

    pub fn node(&self) -> TypeNode<'_> {
        match &self.body {
            DeclBody::Interface(decl) => TypeNode::Interface(&**decl),
            DeclBody::TypeAlias(decl) => TypeNode::TypeAlias(&**decl),
            DeclBody::Enum(decl) => TypeNode::Enum(&**decl),
        }
    }

    pub fn kind(&self) -> TypeKind {
        self.node().kind()
    }
}

/// Name-to-declaration lookup for one file, in source order.
///
/// A name declared more than once (interface merging) maps to every
/// declaration.
#[derive(Debug, Default, Clone)]
pub struct DeclarationTable {
    decls: Vec<TypeDecl>,
    by_name: HashMap<String, Vec<usize>>,
}

impl DeclarationTable {
    pub fn insert(&mut self, decl: TypeDecl) {
        self.by_name
            .entry(decl.name.clone())
            .or_default()
            .push(self.decls.len());
        self.decls.push(decl);
    }

    /// Indices of every declaration with `name`, in source order.
    pub fn indices(&self, name: &str) -> &[usize] {
        self.by_name.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn get(&self, index: usize) -> Option<&TypeDecl> {
        self.decls.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TypeDecl> {
        self.decls.iter()
    }
}

/// Names forwarded from a relative module.
///
/// ```typescript
/// export { User, Role as UserRole } from "./models";
/// ```
/// becomes `{ module: "./models", names: ["User", "UserRole"] }` with
/// `origins: ["User", "Role"]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReExport {
    pub module: String,
    /// Names as exported from this file.
    pub names: Vec<String>,
    /// Names inside `module`, parallel to `names`.
    #[serde(skip)]
    pub origins: Vec<String>,
}

impl ReExport {
    pub fn new(module: impl Into<String>, bindings: Vec<ReExportBinding>) -> Self {
        let (names, origins) = bindings
            .into_iter()
            .map(|binding| (binding.exported, binding.origin))
            .unzip();
        Self {
            module: module.into(),
            names,
            origins,
        }
    }

    /// Name inside `module` of the exported `name`.
    pub fn origin_of<'a>(&'a self, name: &'a str) -> &'a str {
        self.names
            .iter()
            .position(|n| n == name)
            .and_then(|index| self.origins.get(index))
            .map_or(name, String::as_str)
    }

    /// Keep only the exported names in `needed`, in the order given.
    pub fn restricted_to(&self, needed: Vec<String>) -> Self {
        let origins = needed
            .iter()
            .map(|name| self.origin_of(name).to_string())
            .collect();
        Self {
            module: self.module.clone(),
            names: needed,
            origins,
        }
    }
}

/// Everything collected from one file.
#[derive(Debug, Default)]
pub struct FileDeclarations {
    pub table: DeclarationTable,
    /// Exported markers only; `visited` is left to the closure builder.
    pub markers: TypeMarkers,
    pub reexports: Vec<ReExport>,
}

impl FileDeclarations {
    /// Names of exported type declarations, deduplicated, in source order.
    pub fn exported_names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for decl in self.table.iter() {
            if self.markers.is_exported(&decl.name) && !names.contains(&decl.name) {
                names.push(decl.name.clone());
            }
        }
        names
    }

    /// The first relative re-export forwarding `name`, if any.
    pub fn reexport_of(&self, name: &str) -> Option<usize> {
        self.reexports
            .iter()
            .position(|reexport| reexport.names.iter().any(|n| n == name))
    }
}
