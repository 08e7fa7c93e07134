//! Cross-locale consistency rule.
//!
//! Turns the validation report into issues. Problems that something is
//! missing point at the base locale's definition; problems that something is
//! extra or different point at the other locale's file.

use std::path::Path;

use crate::{
    core::{
        CatalogContext, CatalogLocation, CompileContext, LocaleCatalog, ValidationError,
        ValidationReport,
    },
    issues::ValidationIssue,
};

pub fn check_consistency_issues(ctx: &CompileContext) -> Vec<ValidationIssue> {
    report_issues(
        &ctx.locales,
        &ctx.base_locale,
        &ctx.input_dir,
        ctx.validation(),
    )
}

/// Locate every error of `report` in the loaded catalog files.
pub fn report_issues(
    locales: &[LocaleCatalog],
    base_locale: &str,
    input_dir: &Path,
    report: &ValidationReport,
) -> Vec<ValidationIssue> {
    let find = |locale: &str| locales.iter().find(|l| l.locale() == locale);

    let mut issues: Vec<ValidationIssue> = report
        .values()
        .flatten()
        .map(|error| {
            let context = match error {
                ValidationError::MissingBaseLocale { .. } => CatalogContext::without_source(
                    CatalogLocation::file(input_dir.display().to_string()),
                ),
                ValidationError::MissingTranslation { .. } | ValidationError::MissingSection { .. } => {
                    locate(find(base_locale), error)
                }
                _ => locate(find(error.locale()), error),
            };
            ValidationIssue {
                context,
                base_locale: base_locale.to_string(),
                error: error.clone(),
            }
        })
        .collect();

    issues.sort_by(|a, b| {
        a.context
            .location
            .cmp(&b.context.location)
            .then_with(|| a.error.locale().cmp(b.error.locale()))
    });
    issues
}

fn locate(locale: Option<&LocaleCatalog>, error: &ValidationError) -> CatalogContext {
    let Some(locale) = locale else {
        return CatalogContext::without_source(CatalogLocation::file(error.locale()));
    };
    let file = &locale.file;
    match (error.entry(), error.section()) {
        (Some((section, key)), _) => file.entry_context(section, key),
        (None, Some(section)) => file.section_context(section),
        (None, None) => CatalogContext::without_source(CatalogLocation::file(file.file_path.clone())),
    }
}
