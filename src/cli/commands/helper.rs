use super::{CommandResult, CommandSummary};
use crate::{
    core::CompileContext,
    issues::{Issue, Severity},
    rules::{
        catalog::check_catalog_issues, consistency::check_consistency_issues,
        ignored_file::check_ignored_file_issues,
    },
};

/// Collect every issue of a compile run.
///
/// Locales are only compared against the base locale once all of them
/// loaded without errors.
pub fn compile_issues(ctx: &CompileContext) -> Vec<Issue> {
    let mut issues: Vec<Issue> = check_ignored_file_issues(ctx)
        .into_iter()
        .map(Issue::IgnoredFile)
        .collect();

    let catalog_issues = check_catalog_issues(ctx);
    if catalog_issues.is_empty() {
        issues.extend(
            check_consistency_issues(ctx)
                .into_iter()
                .map(Issue::Validation),
        );
    } else {
        issues.extend(catalog_issues.into_iter().map(Issue::Catalog));
    }

    issues
}

pub fn has_errors(issues: &[Issue]) -> bool {
    issues.iter().any(|i| i.severity() == Severity::Error)
}

pub fn finish(
    summary: CommandSummary,
    mut issues: Vec<Issue>,
    locale_files_checked: usize,
) -> CommandResult {
    issues.sort();

    let error_count = issues
        .iter()
        .filter(|i| i.severity() == Severity::Error)
        .count();
    let warning_count = issues.len() - error_count;

    CommandResult {
        summary,
        error_count,
        warning_count,
        issues,
        locale_files_checked,
    }
}
