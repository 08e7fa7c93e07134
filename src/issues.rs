//! Issue types for catalog compilation results.
//!
//! Every problem the CLI reports is an [`Issue`]. Each issue carries the
//! location it points at, so the reporter can render it without going back to
//! the catalog files.

use enum_dispatch::enum_dispatch;

use crate::core::{CatalogContext, CatalogError, RESERVED_NAMES, ValidationError};

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each kind of problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    DecodeError,
    SyntaxError,
    NameConflict,
    TypeMismatch,
    MissingBaseLocale,
    MissingTranslation,
    WrongSignature,
    UnknownTranslation,
    MissingSection,
    UnknownSection,
    IgnoredFile,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::DecodeError => write!(f, "decode-error"),
            Rule::SyntaxError => write!(f, "syntax-error"),
            Rule::NameConflict => write!(f, "name-conflict"),
            Rule::TypeMismatch => write!(f, "type-mismatch"),
            Rule::MissingBaseLocale => write!(f, "missing-base-locale"),
            Rule::MissingTranslation => write!(f, "missing-translation"),
            Rule::WrongSignature => write!(f, "wrong-signature"),
            Rule::UnknownTranslation => write!(f, "unknown-translation"),
            Rule::MissingSection => write!(f, "missing-section"),
            Rule::UnknownSection => write!(f, "unknown-section"),
            Rule::IgnoredFile => write!(f, "ignored-file"),
        }
    }
}

// ============================================================
// Issue Types
// ============================================================

/// A catalog file that failed to decode, or one of its entries that failed
/// to compile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogIssue {
    pub context: CatalogContext,
    pub locale: String,
    pub error: CatalogError,
}

impl CatalogIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule(&self) -> Rule {
        match self.error {
            CatalogError::Decode { .. } => Rule::DecodeError,
            CatalogError::Syntax { .. } => Rule::SyntaxError,
            CatalogError::ReservedName { .. } | CatalogError::DuplicateName { .. } => {
                Rule::NameConflict
            }
            CatalogError::UnexpectedType { .. } | CatalogError::ExpectedString { .. } => {
                Rule::TypeMismatch
            }
        }
    }
}

/// A structural difference between a locale and the base locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub context: CatalogContext,
    pub base_locale: String,
    pub error: ValidationError,
}

impl ValidationIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule(&self) -> Rule {
        match self.error {
            ValidationError::MissingBaseLocale { .. } => Rule::MissingBaseLocale,
            ValidationError::MissingTranslation { .. } => Rule::MissingTranslation,
            ValidationError::WrongSignature { .. } => Rule::WrongSignature,
            ValidationError::UnknownTranslation { .. } => Rule::UnknownTranslation,
            ValidationError::MissingSection { .. } => Rule::MissingSection,
            ValidationError::UnknownSection { .. } => Rule::UnknownSection,
        }
    }
}

/// A `*.toml` file in the input directory that is not named after a locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoredFileIssue {
    pub context: CatalogContext,
    pub reason: String,
}

impl IgnoredFileIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::IgnoredFile
    }
}

// ============================================================
// Issue Enum
// ============================================================

/// A problem found while compiling the translation catalogs.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    Catalog(CatalogIssue),
    Validation(ValidationIssue),
    IgnoredFile(IgnoredFileIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        match self {
            Issue::Catalog(_) => CatalogIssue::severity(),
            Issue::Validation(_) => ValidationIssue::severity(),
            Issue::IgnoredFile(_) => IgnoredFileIssue::severity(),
        }
    }

    pub fn rule(&self) -> Rule {
        match self {
            Issue::Catalog(issue) => issue.rule(),
            Issue::Validation(issue) => issue.rule(),
            Issue::IgnoredFile(_) => IgnoredFileIssue::rule(),
        }
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Trait for types that can be reported to CLI.
///
/// Implemented by all issue types; `enum_dispatch` forwards the calls from
/// the `Issue` enum.
#[enum_dispatch]
pub trait Report {
    /// Where the issue points. Line 0 means the whole file.
    fn context(&self) -> &CatalogContext;

    /// Primary message to display.
    fn message(&self) -> String;

    fn report_severity(&self) -> Severity;

    fn report_rule(&self) -> Rule;

    /// Optional hint for fixing the issue.
    fn hint(&self) -> Option<String> {
        None
    }

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }
}

// ============================================================
// Report Implementations
// ============================================================

impl Report for CatalogIssue {
    fn context(&self) -> &CatalogContext {
        &self.context
    }

    fn message(&self) -> String {
        self.error.to_string()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        self.rule()
    }

    fn hint(&self) -> Option<String> {
        match self.error {
            CatalogError::ReservedName { .. } => Some(format!(
                "{} are defined by the generated translator, rename the key",
                RESERVED_NAMES.join(" and ")
            )),
            CatalogError::DuplicateName { .. } => {
                Some("rename one of the keys so their names differ".to_string())
            }
            CatalogError::UnexpectedType { .. } | CatalogError::ExpectedString { .. } => Some(
                "values must be strings, either at the top level or in a [section]".to_string(),
            ),
            _ => None,
        }
    }

    fn details(&self) -> Option<String> {
        match self.error {
            CatalogError::Syntax { .. } | CatalogError::Decode { .. } => {
                Some(format!("in locale {}", self.locale))
            }
            _ => None,
        }
    }
}

impl Report for ValidationIssue {
    fn context(&self) -> &CatalogContext {
        &self.context
    }

    fn message(&self) -> String {
        self.error.to_string()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        self.rule()
    }

    fn hint(&self) -> Option<String> {
        match &self.error {
            ValidationError::MissingBaseLocale { base_locale } => Some(format!(
                "add {}.toml or choose another locale with --base-locale",
                base_locale
            )),
            ValidationError::WrongSignature { .. } => Some(
                "every locale must use the same substitutions as the base locale".to_string(),
            ),
            _ => None,
        }
    }

    fn details(&self) -> Option<String> {
        match &self.error {
            ValidationError::MissingTranslation { .. } | ValidationError::MissingSection { .. } => {
                Some(format!("defined in base locale {}", self.base_locale))
            }
            ValidationError::UnknownTranslation { .. } | ValidationError::UnknownSection { .. } => {
                Some(format!("not defined in base locale {}", self.base_locale))
            }
            _ => None,
        }
    }
}

impl Report for IgnoredFileIssue {
    fn context(&self) -> &CatalogContext {
        &self.context
    }

    fn message(&self) -> String {
        self.reason.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}

// ============================================================
// Ordering for Issue (for sorting in reports)
// ============================================================

impl Ord for Issue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Sort by: file_path, line, col, rule, message
        self.context()
            .location
            .cmp(&other.context().location)
            .then_with(|| self.rule().cmp(&other.rule()))
            .then_with(|| self.message().cmp(&other.message()))
    }
}

impl PartialOrd for Issue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ============================================================
// Tests
// ============================================================
