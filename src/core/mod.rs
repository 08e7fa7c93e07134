//! Core compilation pipeline.
//!
//! Per translation string: tokenizer → compiler → [`FunctionSpec`]. Per
//! locale: catalog loader. Across locales: validator.
//!
//! ## Module Structure
//!
//! - `tokenizer`: Scanner for the `{name}` / `{{s|p}}` mini-language
//! - `naming`: Key to identifier normalization, reserved names
//! - `compiler`: Token stream to function specification
//! - `catalog`: TOML document to compiled catalog
//! - `validate`: Cross-locale structural comparison
//! - `parsers`: Catalog file discovery and line lookup
//! - `context`: Pipeline orchestration for the CLI commands

pub mod catalog;
pub mod compiler;
pub mod context;
pub mod location;
pub mod naming;
pub mod parsers;
pub mod tokenizer;
pub mod validate;

pub use catalog::{
    Catalog, CatalogError, CatalogLoad, Entries, InterfaceShape, SectionShape, load_catalog,
    parse_catalog,
};
pub use compiler::{COUNT_PARAM, CompileError, FunctionSpec, ParamKind, Parameter, compile};
pub use context::{CompileContext, LocaleCatalog};
pub use location::{CatalogContext, CatalogLocation};
pub use naming::{RESERVED_NAMES, reserved_conflict, to_public_name};
pub use parsers::toml::{CatalogFile, extract_locale, is_locale_name};
pub use tokenizer::{PluralForms, Token, TokenKind, split_plural, tokenize};
pub use validate::{
    ValidationError, ValidationReport, validate, validate_catalog, validate_section,
};
