//! Catalog loading: from a decoded TOML document to compiled entries.
//!
//! A catalog document is one level deep. Top-level strings are root entries,
//! top-level tables are sections whose values must all be strings:
//!
//! ```toml
//! root_message = "Hello"
//!
//! [menu]
//! family = "{count} {animal}{{|s}}"
//! ```
//!
//! Loading never stops at the first bad entry. Each problem is recorded as a
//! [`CatalogError`] and the remaining entries are still compiled, so one run
//! reports everything that is wrong with a file.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use toml::{Table, Value};

use super::compiler::{CompileError, FunctionSpec, compile};
use super::naming::{reserved_conflict, to_public_name};

/// Compiled entries keyed by their catalog key.
pub type Entries = BTreeMap<String, FunctionSpec>;

/// All compiled entries of one locale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    pub locale: String,
    pub root: Entries,
    pub sections: BTreeMap<String, Entries>,
}

impl Catalog {
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            ..Default::default()
        }
    }

    /// Number of compiled entries, sections included.
    pub fn len(&self) -> usize {
        self.root.len() + self.sections.values().map(BTreeMap::len).sum::<usize>()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Public shape of this catalog: callable names and signatures, no bodies.
    pub fn interface(&self) -> InterfaceShape {
        InterfaceShape {
            root: self.root.values().map(FunctionSpec::signature).collect(),
            sections: self
                .sections
                .iter()
                .map(|(name, entries)| SectionShape {
                    name: name.clone(),
                    callable_name: to_public_name(name),
                    signatures: entries.values().map(FunctionSpec::signature).collect(),
                })
                .collect(),
        }
    }
}

/// Signatures exposed by a catalog, in key order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceShape {
    pub root: Vec<String>,
    pub sections: Vec<SectionShape>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionShape {
    pub name: String,
    pub callable_name: String,
    pub signatures: Vec<String>,
}

/// A problem with a catalog document or one of its entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The document is not valid TOML. Nothing else is reported for it.
    Decode {
        message: String,
        /// Byte offset of the problem, when the decoder knows it.
        offset: Option<usize>,
    },
    /// A translation string does not tokenize.
    Syntax {
        section: Option<String>,
        key: String,
        source: String,
        message: String,
        offset: usize,
    },
    /// The key normalizes to a name reserved by the generated translator.
    ReservedName {
        section: Option<String>,
        key: String,
        reserved: &'static str,
    },
    /// Two keys of the same scope normalize to the same callable name.
    DuplicateName {
        section: Option<String>,
        key: String,
        other_key: String,
        callable_name: String,
    },
    /// A top-level value is neither a string nor a table.
    UnexpectedType { key: String, type_name: String },
    /// A section holds something other than a string.
    ExpectedString {
        section: String,
        key: String,
        found: String,
    },
}

impl CatalogError {
    fn from_compile(section: Option<&str>, err: CompileError) -> Self {
        let section = section.map(str::to_string);
        match err {
            CompileError::Syntax {
                key,
                source,
                message,
                offset,
            } => CatalogError::Syntax {
                section,
                key,
                source,
                message,
                offset,
            },
            CompileError::NameConflict { key, reserved } => CatalogError::ReservedName {
                section,
                key,
                reserved,
            },
        }
    }

    /// Section and key the error belongs to. `None` for document-level errors.
    pub fn entry(&self) -> Option<(Option<&str>, &str)> {
        match self {
            CatalogError::Decode { .. } => None,
            CatalogError::Syntax { section, key, .. }
            | CatalogError::ReservedName { section, key, .. }
            | CatalogError::DuplicateName { section, key, .. } => {
                Some((section.as_deref(), key.as_str()))
            }
            CatalogError::UnexpectedType { key, .. } => Some((None, key.as_str())),
            CatalogError::ExpectedString { section, key, .. } => {
                Some((Some(section.as_str()), key.as_str()))
            }
        }
    }
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Decode { message, .. } => {
                write!(f, "failed to decode TOML content: {}", message.trim_end())
            }
            CatalogError::Syntax {
                key,
                source,
                message,
                ..
            } => write!(f, "syntax error in '{}' (\"{}\"): {}", key, source, message),
            CatalogError::ReservedName { key, reserved, .. } => write!(
                f,
                "'{}' conflicts with '{}' and cannot be used as translation key",
                key, reserved
            ),
            CatalogError::DuplicateName {
                key,
                other_key,
                callable_name,
                ..
            } => write!(
                f,
                "'{}' conflicts with '{}', both are named '{}'",
                key, other_key, callable_name
            ),
            CatalogError::UnexpectedType { key, type_name } => {
                write!(f, "unexpected type for key {}: {}", key, type_name)
            }
            CatalogError::ExpectedString {
                section,
                key,
                found,
            } => write!(
                f,
                "expected string under {} > {}, but found {}",
                section, key, found
            ),
        }
    }
}

impl std::error::Error for CatalogError {}

/// Result of loading one locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogLoad {
    /// Every entry that compiled.
    pub catalog: Catalog,
    /// Every entry that did not.
    pub errors: Vec<CatalogError>,
}

impl CatalogLoad {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Tracks callable names within one scope (the root, or one section).
#[derive(Default)]
struct NameScope<'a> {
    seen: HashMap<String, &'a str>,
}

impl<'a> NameScope<'a> {
    /// Claim the callable name for `key`, or return the key that holds it.
    fn claim(&mut self, key: &'a str) -> Result<(), (&'a str, String)> {
        let name = to_public_name(key);
        match self.seen.get(&name) {
            Some(other) => Err((*other, name)),
            None => {
                self.seen.insert(name, key);
                Ok(())
            }
        }
    }
}

/// Build the catalog for `locale` from a decoded document.
pub fn load_catalog(locale: &str, document: &Table) -> CatalogLoad {
    let mut catalog = Catalog::new(locale);
    let mut errors = Vec::new();
    // Root entries and section accessors both become methods of the same type.
    let mut root_names = NameScope::default();

    for (key, value) in document {
        if let Some(reserved) = reserved_conflict(&to_public_name(key)) {
            errors.push(CatalogError::ReservedName {
                section: None,
                key: key.clone(),
                reserved,
            });
            continue;
        }

        match value {
            Value::String(raw) => {
                if let Some(err) = claim_name(&mut root_names, None, key) {
                    errors.push(err);
                    continue;
                }
                match compile(key, raw) {
                    Ok(spec) => {
                        catalog.root.insert(key.clone(), spec);
                    }
                    Err(err) => errors.push(CatalogError::from_compile(None, err)),
                }
            }
            Value::Table(table) => {
                if let Some(err) = claim_name(&mut root_names, None, key) {
                    errors.push(err);
                    continue;
                }
                let entries = load_section(key, table, &mut errors);
                catalog.sections.insert(key.clone(), entries);
            }
            other => errors.push(CatalogError::UnexpectedType {
                key: key.clone(),
                type_name: other.type_str().to_string(),
            }),
        }
    }

    CatalogLoad { catalog, errors }
}

fn load_section(section: &str, table: &Table, errors: &mut Vec<CatalogError>) -> Entries {
    let mut entries = Entries::new();
    let mut names = NameScope::default();

    for (key, value) in table {
        let raw = match value {
            Value::String(raw) => raw,
            Value::Table(_) => {
                errors.push(CatalogError::ExpectedString {
                    section: section.to_string(),
                    key: key.clone(),
                    found: "nested structure".to_string(),
                });
                continue;
            }
            other => {
                errors.push(CatalogError::ExpectedString {
                    section: section.to_string(),
                    key: key.clone(),
                    found: format!("'{}'", other),
                });
                continue;
            }
        };

        if let Some(err) = claim_name(&mut names, Some(section), key) {
            errors.push(err);
            continue;
        }

        match compile(key, raw) {
            Ok(spec) => {
                entries.insert(key.clone(), spec);
            }
            Err(err) => errors.push(CatalogError::from_compile(Some(section), err)),
        }
    }

    entries
}

fn claim_name<'a>(
    scope: &mut NameScope<'a>,
    section: Option<&str>,
    key: &'a str,
) -> Option<CatalogError> {
    scope
        .claim(key)
        .err()
        .map(|(other_key, callable_name)| CatalogError::DuplicateName {
            section: section.map(str::to_string),
            key: key.to_string(),
            other_key: other_key.to_string(),
            callable_name,
        })
}

/// Decode `content` as TOML and load it as the catalog for `locale`.
///
/// Only a decode failure is returned as `Err`; entry problems are collected
/// in [`CatalogLoad::errors`].
pub fn parse_catalog(locale: &str, content: &str) -> Result<CatalogLoad, CatalogError> {
    let document: Table = toml::from_str(content).map_err(|err| CatalogError::Decode {
        message: err.message().to_string(),
        offset: err.span().map(|span| span.start),
    })?;
    Ok(load_catalog(locale, &document))
}
