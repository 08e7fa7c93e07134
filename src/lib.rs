//! Lingo - type-safe Go translations from TOML catalogs
//!
//! Lingo compiles one `<locale>.toml` catalog per language into a Go package
//! with one method per translation string. Placeholders (`{name}`, `{count}`)
//! become typed parameters and `{{singular|plural}}` clauses become a branch
//! on `count`. Every locale is checked against a base locale so the generated
//! interfaces always line up.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (`generate`, `check`, `init`)
//! - `config`: Configuration file loading and parsing
//! - `core`: Tokenizer, function compiler, catalog loader and validator
//! - `emit`: Go code generation
//! - `issues`: Issue type definitions and reporting
//! - `rules`: Turn compile results into located issues

pub mod cli;
pub mod config;
pub mod core;
pub mod emit;
pub mod issues;
pub mod rules;
