use swc_ecma_ast::{ExportSpecifier, ModuleExportName, NamedExport, Str};

/// An `export { .. } from "<module>"` statement.
///
/// Only constructible from a named export that carries a string module
/// specifier, so local `export { A }` lists can never reach the extractor.
#[derive(Debug, Clone, Copy)]
pub struct ReExportDecl<'a> {
    decl: &'a NamedExport,
    specifier: &'a Str,
}

impl<'a> ReExportDecl<'a> {
    pub fn new(decl: &'a NamedExport) -> Option<Self> {
        decl.src
            .as_deref()
            .map(|specifier| Self { decl, specifier })
    }

    /// The module specifier text, e.g. `./models`.
    pub fn module_specifier(&self) -> Option<&'a str> {
        self.specifier.value.as_str()
    }

    /// True for `./` and `../` style specifiers.
    pub fn is_relative(&self) -> bool {
        self.module_specifier().is_some_and(|s| s.starts_with('.'))
    }
}

/// One forwarded name: `exported` is visible to importers of this file,
/// `origin` is what the declaration is called inside the source module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReExportBinding {
    pub exported: String,
    pub origin: String,
}

/// Bindings of a re-export, in clause order.
///
/// Only elements whose exported name is an identifier are kept. A
/// string-literal origin (`export { "a-b" as C }`) keeps its string value.
pub fn reexport_bindings(node: &ReExportDecl<'_>) -> Vec<ReExportBinding> {
    node.decl
        .specifiers
        .iter()
        .filter_map(|specifier| {
            let ExportSpecifier::Named(named) = specifier else {
                return None;
            };
            let ModuleExportName::Ident(ident) = named.exported.as_ref().unwrap_or(&named.orig)
            else {
                return None;
            };
            let exported = ident.sym.to_string();
            let origin = match &named.orig {
                ModuleExportName::Ident(orig) => orig.sym.to_string(),
                ModuleExportName::Str(orig) => orig
                    .value
                    .as_str()
                    .map_or_else(|| exported.clone(), String::from),
            };
            Some(ReExportBinding { exported, origin })
        })
        .collect()
}

/// Names forwarded by a re-export, in clause order.
///
/// The exported (outer) name is reported, so `export { A as B } from "./m"`
/// yields `B`. String-literal export names are skipped, as are namespace and
/// default specifiers.
pub fn extracted_type_names_from_export(node: &ReExportDecl<'_>) -> Vec<String> {
    reexport_bindings(node)
        .into_iter()
        .map(|binding| binding.exported)
        .collect()
}
