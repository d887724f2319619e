use std::collections::HashSet;

use swc_common::{Span, Spanned};
use swc_ecma_ast::{TsType, TsTypeElement, TsUnionOrIntersectionType};

use super::{TypeMarkers, TypeNode};
use crate::core::parsers::SourceText;

/// Insertion-ordered set of reference names.
///
/// Names are keyed by their exact source text, so `Foo` and `Foo<T>` are
/// distinct entries.
#[derive(Debug, Default)]
struct ReferenceNames {
    order: Vec<String>,
    seen: HashSet<String>,
}

impl ReferenceNames {
    fn seeded(name: &str) -> Self {
        let mut names = Self::default();
        names.insert(name.to_string());
        names
    }

    fn insert(&mut self, name: String) {
        if self.seen.insert(name.clone()) {
            self.order.push(name);
        }
    }

    fn into_vec(self) -> Vec<String> {
        self.order
    }
}

/// Collects the type names mentioned by a single type declaration.
///
/// # Usage
///
/// ```ignore
/// let parsed = parse_typescript_source(code, "types.ts")?;
/// let names = ReferenceExtractor::new(parsed.text())
///     .with_markers(&markers)
///     .extract(node);
/// ```
///
/// The first element of the result is always the declaration's own name.
/// Because the name also seeds the accumulation, it appears a second time
/// right after; drivers skip the head and treat the rest as references.
pub struct ReferenceExtractor<'a> {
    source: SourceText<'a>,
    markers: Option<&'a TypeMarkers>,
}

impl<'a> ReferenceExtractor<'a> {
    pub fn new(source: SourceText<'a>) -> Self {
        Self {
            source,
            markers: None,
        }
    }

    /// Consult driver-owned markers. A declaration already marked visited
    /// skips its heritage clauses.
    pub fn with_markers(mut self, markers: &'a TypeMarkers) -> Self {
        self.markers = Some(markers);
        self
    }

    pub fn extract(&self, node: TypeNode<'_>) -> Vec<String> {
        let name = node.name();
        let mut names = ReferenceNames::seeded(name);

        if !self.is_visited(name) {
            self.scan_heritage(node, &mut names);
        }
        if let TypeNode::Interface(decl) = node {
            self.scan_members(&decl.body.body, &mut names);
        }

        let mut result = vec![name.to_string()];
        result.extend(names.into_vec());
        result
    }

    fn is_visited(&self, name: &str) -> bool {
        self.markers.is_some_and(|m| m.is_visited(name))
    }

    fn add_rendered(&self, span: Span, names: &mut ReferenceNames) {
        if let Some(text) = self.source.snippet(span) {
            names.insert(text);
        }
    }

    /// `interface A extends B, C.D<E>` contributes `B` and `C.D`.
    fn scan_heritage(&self, node: TypeNode<'_>, names: &mut ReferenceNames) {
        let TypeNode::Interface(decl) = node else {
            return;
        };
        for heritage in &decl.extends {
            self.add_rendered(heritage.expr.span(), names);
        }
    }

    /// Only property signatures with a type annotation are inspected.
    fn scan_members(&self, members: &[TsTypeElement], names: &mut ReferenceNames) {
        for member in members {
            let TsTypeElement::TsPropertySignature(prop) = member else {
                continue;
            };
            if let Some(type_ann) = &prop.type_ann {
                self.scan_property_type(&type_ann.type_ann, names);
            }
        }
    }

    fn scan_property_type(&self, ts_type: &TsType, names: &mut ReferenceNames) {
        match ts_type {
            TsType::TsTypeRef(type_ref) => self.add_rendered(type_ref.span, names),
            TsType::TsArrayType(array) => self.add_rendered(array.elem_type.span(), names),
            TsType::TsTypeLit(lit) => self.scan_members(&lit.members, names),
            TsType::TsUnionOrIntersectionType(types) => self.scan_union(types, names),
            _ => {}
        }
    }

    fn scan_union(&self, types: &TsUnionOrIntersectionType, names: &mut ReferenceNames) {
        let members = match types {
            TsUnionOrIntersectionType::TsUnionType(union) => &union.types,
            TsUnionOrIntersectionType::TsIntersectionType(intersection) => &intersection.types,
        };
        for member in members {
            self.scan_union_member(member, names);
        }
    }

    fn scan_union_member(&self, ts_type: &TsType, names: &mut ReferenceNames) {
        match ts_type {
            TsType::TsTypeRef(type_ref) => self.add_rendered(type_ref.span, names),
            TsType::TsTypeLit(lit) => self.scan_members(&lit.members, names),
            TsType::TsUnionOrIntersectionType(types) => self.scan_union(types, names),
            TsType::TsParenthesizedType(paren) => self.scan_union_member(&paren.type_ann, names),
            // Arrays, keywords, literals, tuples and functions inside a
            // union name nothing.
            _ => {}
        }
    }
}

/// Extract reference names without any driver markers.
///
/// Equivalent to `ReferenceExtractor::new(source).extract(node)`.
pub fn extracted_type_names(node: TypeNode<'_>, source: SourceText<'_>) -> Vec<String> {
    ReferenceExtractor::new(source).extract(node)
}
