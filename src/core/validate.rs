//! Cross-locale validation.
//!
//! Every locale must expose exactly the callables of the base locale, with
//! the same signatures. The checks here are pure: they compare already built
//! catalogs and never touch the filesystem.

use std::collections::BTreeMap;
use std::fmt;

use super::catalog::{Catalog, Entries};

/// One structural difference between a locale and the base locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The base locale is not among the loaded locales.
    MissingBaseLocale { base_locale: String },
    MissingTranslation {
        locale: String,
        section: Option<String>,
        key: String,
    },
    WrongSignature {
        locale: String,
        section: Option<String>,
        key: String,
        expected: String,
        actual: String,
    },
    UnknownTranslation {
        locale: String,
        section: Option<String>,
        key: String,
    },
    MissingSection { locale: String, section: String },
    UnknownSection { locale: String, section: String },
}

impl ValidationError {
    /// Locale the error was found in. For a missing base locale, the base
    /// locale itself.
    pub fn locale(&self) -> &str {
        match self {
            ValidationError::MissingBaseLocale { base_locale } => base_locale,
            ValidationError::MissingTranslation { locale, .. }
            | ValidationError::WrongSignature { locale, .. }
            | ValidationError::UnknownTranslation { locale, .. }
            | ValidationError::MissingSection { locale, .. }
            | ValidationError::UnknownSection { locale, .. } => locale,
        }
    }

    /// Section and key of entry-level errors.
    pub fn entry(&self) -> Option<(Option<&str>, &str)> {
        match self {
            ValidationError::MissingTranslation { section, key, .. }
            | ValidationError::WrongSignature { section, key, .. }
            | ValidationError::UnknownTranslation { section, key, .. } => {
                Some((section.as_deref(), key.as_str()))
            }
            _ => None,
        }
    }

    /// Section name of section-level errors.
    pub fn section(&self) -> Option<&str> {
        match self {
            ValidationError::MissingSection { section, .. }
            | ValidationError::UnknownSection { section, .. } => Some(section),
            _ => None,
        }
    }

    /// Key as reported: `section.key` for section entries.
    pub fn qualified_key(&self) -> Option<String> {
        self.entry()
            .map(|(section, key)| qualified(section, key))
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingBaseLocale { base_locale } => write!(
                f,
                "base locale '{}' not found among the translation files",
                base_locale
            ),
            ValidationError::MissingTranslation {
                locale,
                section,
                key,
            } => write!(
                f,
                "{} is missing translation '{}'",
                locale,
                qualified(section.as_deref(), key)
            ),
            ValidationError::WrongSignature {
                locale,
                section,
                key,
                expected,
                actual,
            } => write!(
                f,
                "{} has the wrong signature for '{}'. Should be `{}`, but was `{}`",
                locale,
                qualified(section.as_deref(), key),
                expected,
                actual
            ),
            ValidationError::UnknownTranslation {
                locale,
                section,
                key,
            } => write!(
                f,
                "{} has an unknown translation '{}'",
                locale,
                qualified(section.as_deref(), key)
            ),
            ValidationError::MissingSection { locale, section } => {
                write!(f, "{} is missing section [{}]", locale, section)
            }
            ValidationError::UnknownSection { locale, section } => {
                write!(f, "{} has unknown section [{}]", locale, section)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validation errors per locale. Locales without errors are absent.
pub type ValidationReport = BTreeMap<String, Vec<ValidationError>>;

/// Qualify `key` with its section, if any.
fn qualified(section: Option<&str>, key: &str) -> String {
    match section {
        Some(section) => format!("{}.{}", section, key),
        None => key.to_string(),
    }
}

/// Compare one scope (the root, or one section) of `other` against `base`.
pub fn validate_section(
    base: &Entries,
    other: &Entries,
    section: Option<&str>,
    locale: &str,
) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for (key, base_spec) in base {
        match other.get(key) {
            None => errors.push(ValidationError::MissingTranslation {
                locale: locale.to_string(),
                section: section.map(str::to_string),
                key: key.clone(),
            }),
            Some(other_spec) => {
                let expected = base_spec.signature();
                let actual = other_spec.signature();
                if expected != actual {
                    errors.push(ValidationError::WrongSignature {
                        locale: locale.to_string(),
                        section: section.map(str::to_string),
                        key: key.clone(),
                        expected,
                        actual,
                    });
                }
            }
        }
    }

    errors.extend(
        other
            .keys()
            .filter(|key| !base.contains_key(*key))
            .map(|key| ValidationError::UnknownTranslation {
                locale: locale.to_string(),
                section: section.map(str::to_string),
                key: key.clone(),
            }),
    );

    errors
}

/// Compare a whole catalog against the base catalog.
pub fn validate_catalog(base: &Catalog, other: &Catalog) -> Vec<ValidationError> {
    let locale = other.locale.as_str();
    let mut errors = validate_section(&base.root, &other.root, None, locale);

    for (name, base_entries) in &base.sections {
        match other.sections.get(name) {
            Some(other_entries) => {
                errors.extend(validate_section(
                    base_entries,
                    other_entries,
                    Some(name),
                    locale,
                ));
            }
            None => errors.push(ValidationError::MissingSection {
                locale: locale.to_string(),
                section: name.clone(),
            }),
        }
    }

    errors.extend(
        other
            .sections
            .keys()
            .filter(|name| !base.sections.contains_key(*name))
            .map(|name| ValidationError::UnknownSection {
                locale: locale.to_string(),
                section: name.clone(),
            }),
    );

    errors
}

/// Validate every locale in `catalogs` against `base_locale`.
///
/// If the base locale itself is missing, the report holds a single
/// [`ValidationError::MissingBaseLocale`] under the base locale's name and no
/// locale is compared.
pub fn validate(base_locale: &str, catalogs: &BTreeMap<String, Catalog>) -> ValidationReport {
    let mut report = ValidationReport::new();

    let Some(base) = catalogs.get(base_locale) else {
        report.insert(
            base_locale.to_string(),
            vec![ValidationError::MissingBaseLocale {
                base_locale: base_locale.to_string(),
            }],
        );
        return report;
    };

    for (locale, catalog) in catalogs {
        if locale == base_locale {
            continue;
        }
        let errors = validate_catalog(base, catalog);
        if !errors.is_empty() {
            report.insert(locale.clone(), errors);
        }
    }

    report
}
