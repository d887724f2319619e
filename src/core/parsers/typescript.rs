use std::{fs, path::Path, sync::Arc};

use anyhow::{Context, Result, anyhow};
use swc_common::{FileName, GLOBALS, Globals, SourceMap, SourceMapper, Span};
use swc_ecma_ast::Module;
use swc_ecma_parser::{Parser, StringInput, Syntax, TsSyntax};

/// A parsed file together with the `SourceMap` its spans point into.
///
/// Each file owns its own `SourceMap`, so parsed files can be produced on
/// different rayon workers.
pub struct ParsedSource {
    pub module: Module,
    pub source_map: Arc<SourceMap>,
    pub file_path: String,
}

impl ParsedSource {
    /// Borrow a renderer for spans of this file.
    pub fn text(&self) -> SourceText<'_> {
        SourceText::new(&self.source_map)
    }

    /// 1-based line of a span start.
    pub fn line_of(&self, span: Span) -> usize {
        self.source_map.lookup_char_pos(span.lo).line
    }
}

/// Renders syntax nodes back to the exact text they were parsed from.
#[derive(Clone, Copy)]
pub struct SourceText<'a> {
    source_map: &'a SourceMap,
}

impl<'a> SourceText<'a> {
    pub fn new(source_map: &'a SourceMap) -> Self {
        Self { source_map }
    }

    /// Source text covered by `span`, or `None` if the span does not map
    /// back into a loaded file.
    pub fn snippet(&self, span: Span) -> Option<String> {
        self.source_map.span_to_snippet(span).ok()
    }
}

fn syntax_for(file_path: &str) -> Syntax {
    Syntax::Typescript(TsSyntax {
        tsx: file_path.ends_with(".tsx"),
        dts: file_path.ends_with(".d.ts"),
        ..Default::default()
    })
}

/// Parse TypeScript source code into an AST.
///
/// The file extension of `file_path` selects the dialect: `.tsx` enables
/// JSX, `.d.ts` enables declaration-file mode.
pub fn parse_typescript_source(code: String, file_path: &str) -> Result<ParsedSource> {
    let source_map = Arc::new(SourceMap::default());

    // Per-call swc globals so files can be parsed on any thread
    GLOBALS.set(&Globals::new(), || {
        let source_file =
            source_map.new_source_file(FileName::Real(file_path.into()).into(), code);

        let mut parser = Parser::new(
            syntax_for(file_path),
            StringInput::from(&*source_file),
            None,
        );
        let module = parser
            .parse_module()
            .map_err(|e| anyhow!("Failed to parse {}: {:?}", file_path, e))?;

        Ok(ParsedSource {
            module,
            source_map: source_map.clone(),
            file_path: file_path.to_string(),
        })
    })
}

/// Read and parse a TypeScript file from disk.
pub fn parse_typescript_file(path: &Path) -> Result<ParsedSource> {
    let code = fs::read_to_string(path)
        .with_context(|| format!("Failed to read source file: {}", path.display()))?;
    parse_typescript_source(code, &path.to_string_lossy())
}
