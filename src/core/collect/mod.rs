//! Declaration collection.
//!
//! A single AST pass per file builds everything the closure builder needs to
//! resolve reference names:
//! - the name-to-declaration table (interfaces, type aliases, enums)
//! - `exported` markers for module-level exports
//! - named re-exports from relative modules

mod collector;
pub mod types;

pub use collector::{DeclarationCollector, collect_declarations};
pub use types::*;
