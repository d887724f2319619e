use swc_common::SourceMap;
use swc_ecma_ast::{
    ArrowExpr, Class, Decl, DefaultDecl, ExportDecl, ExportDefaultDecl, ExportSpecifier, Function,
    ModuleExportName, NamedExport, TsModuleDecl,
};
use swc_ecma_visit::{Visit, VisitWith};

use super::types::{FileDeclarations, ReExport, TypeDecl};
use crate::core::parsers::ParsedSource;
use crate::core::traverse::{ReExportDecl, TypeNode, reexport_bindings};

/// Gathers type declarations, export markers and relative re-exports in a
/// single AST pass.
///
/// # Usage
///
/// ```ignore
/// let mut collector = DeclarationCollector::new(&parsed.source_map);
/// parsed.module.visit_with(&mut collector);
/// let declarations = collector.finish();
/// ```
///
/// Function, arrow and class bodies are not entered: types declared there are
/// local and can never be extracted on their own.
pub struct DeclarationCollector<'a> {
    source_map: &'a SourceMap,
    /// 0 = module level, >0 = inside `namespace` / `declare module`.
    namespace_depth: usize,
    declarations: FileDeclarations,
}

impl<'a> DeclarationCollector<'a> {
    pub fn new(source_map: &'a SourceMap) -> Self {
        Self {
            source_map,
            namespace_depth: 0,
            declarations: FileDeclarations::default(),
        }
    }

    pub fn finish(self) -> FileDeclarations {
        self.declarations
    }

    fn is_module_level(&self) -> bool {
        self.namespace_depth == 0
    }

    fn record(&mut self, node: TypeNode<'_>) {
        let line = self.source_map.lookup_char_pos(node.span().lo).line;
        self.declarations.table.insert(TypeDecl::new(node, line));
    }

    fn mark_exported(&mut self, name: &str) {
        if self.is_module_level() {
            self.declarations.markers.mark_exported(name);
        }
    }
}

impl Visit for DeclarationCollector<'_> {
    fn visit_decl(&mut self, node: &Decl) {
        match TypeNode::from_decl(node) {
            Some(type_node) => self.record(type_node),
            None => node.visit_children_with(self),
        }
    }

    fn visit_export_decl(&mut self, node: &ExportDecl) {
        if let Some(type_node) = TypeNode::from_decl(&node.decl) {
            self.mark_exported(type_node.name());
        }
        node.visit_children_with(self);
    }

    fn visit_export_default_decl(&mut self, node: &ExportDefaultDecl) {
        if let DefaultDecl::TsInterfaceDecl(decl) = &node.decl {
            let type_node = TypeNode::Interface(&**decl);
            self.mark_exported(type_node.name());
            self.record(type_node);
        }
    }

    fn visit_named_export(&mut self, node: &NamedExport) {
        if !self.is_module_level() {
            return;
        }

        match ReExportDecl::new(node) {
            Some(reexport) => {
                if reexport.is_relative()
                    && let Some(module) = reexport.module_specifier()
                {
                    self.declarations
                        .reexports
                        .push(ReExport::new(module, reexport_bindings(&reexport)));
                }
            }
            None => {
                // Local export list: `export { A, B as C }` exports the
                // declarations named `A` and `B`.
                for specifier in &node.specifiers {
                    if let ExportSpecifier::Named(named) = specifier
                        && let ModuleExportName::Ident(ident) = &named.orig
                    {
                        self.mark_exported(ident.sym.as_str());
                    }
                }
            }
        }
    }

    fn visit_ts_module_decl(&mut self, node: &TsModuleDecl) {
        self.namespace_depth += 1;
        node.visit_children_with(self);
        self.namespace_depth -= 1;
    }

    fn visit_function(&mut self, _node: &Function) {}

    fn visit_arrow_expr(&mut self, _node: &ArrowExpr) {}

    fn visit_class(&mut self, _node: &Class) {}
}

/// Collect the declaration table, export markers and relative re-exports of
/// a parsed file.
pub fn collect_declarations(parsed: &ParsedSource) -> FileDeclarations {
    let mut collector = DeclarationCollector::new(&parsed.source_map);
    parsed.module.visit_with(&mut collector);
    collector.finish()
}
