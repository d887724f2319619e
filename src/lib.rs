//! typedeps - dependency closure for TypeScript type declarations
//!
//! typedeps is a CLI tool and library that reports which type names a
//! TypeScript interface, type alias or enum mentions, and follows those names
//! through a file to find every declaration that must travel together when a
//! subset of types is extracted.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (commands and reporting)
//! - `config`: Configuration file loading and parsing
//! - `core`: Core analysis engine (parsing, extraction, closure)

pub mod cli;
pub mod config;
pub mod core;
