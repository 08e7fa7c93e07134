//! File parsers for translation catalogs.
//!
//! - `toml`: TOML catalog discovery, locale inference and line lookup

pub mod toml;
