//! Ignored file rule.
//!
//! `*.toml` files that the scanner skipped are reported as warnings, so a
//! misnamed catalog does not silently drop out of the generated package.

use crate::{
    core::{CatalogContext, CatalogLocation, CompileContext, parsers::toml::CatalogScanWarning},
    issues::IgnoredFileIssue,
};

pub fn check_ignored_file_issues(ctx: &CompileContext) -> Vec<IgnoredFileIssue> {
    warning_issues(&ctx.scan_warnings)
}

pub fn warning_issues(warnings: &[CatalogScanWarning]) -> Vec<IgnoredFileIssue> {
    warnings
        .iter()
        .map(|warning| IgnoredFileIssue {
            context: CatalogContext::without_source(CatalogLocation::file(
                warning.file_path.clone(),
            )),
            reason: warning.error.clone(),
        })
        .collect()
}
