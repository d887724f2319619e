//! Source parsers.
//!
//! - `typescript`: TypeScript/TSX source parser (uses swc for AST generation)

pub mod typescript;

pub use typescript::{ParsedSource, SourceText, parse_typescript_file, parse_typescript_source};
