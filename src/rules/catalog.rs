//! Catalog error rule.
//!
//! Reports every decode failure and every entry that did not compile, in
//! every locale.

use crate::{
    core::{CatalogContext, CatalogError, CatalogFile, CatalogLocation, CompileContext, LocaleCatalog},
    issues::CatalogIssue,
};

pub fn check_catalog_issues(ctx: &CompileContext) -> Vec<CatalogIssue> {
    ctx.locales.iter().flat_map(check_locale).collect()
}

/// Issues of one locale.
pub fn check_locale(locale: &LocaleCatalog) -> Vec<CatalogIssue> {
    let errors: Vec<&CatalogError> = match &locale.load {
        Ok(load) => load.errors.iter().collect(),
        Err(error) => vec![error],
    };

    errors
        .into_iter()
        .map(|error| CatalogIssue {
            context: locate_error(&locale.file, error),
            locale: locale.locale().to_string(),
            error: error.clone(),
        })
        .collect()
}

/// Point at the place in `file` that `error` is about.
pub fn locate_error(file: &CatalogFile, error: &CatalogError) -> CatalogContext {
    match error {
        CatalogError::Decode {
            offset: Some(offset),
            ..
        } => file.offset_context(*offset),
        CatalogError::Decode { offset: None, .. } => {
            CatalogContext::without_source(CatalogLocation::file(file.file_path.clone()))
        }
        CatalogError::Syntax {
            section,
            key,
            source,
            offset,
            ..
        } => file.value_context(section.as_deref(), key, source, *offset),
        CatalogError::ReservedName { section, key, .. }
        | CatalogError::DuplicateName { section, key, .. } => {
            file.entry_context(section.as_deref(), key)
        }
        CatalogError::UnexpectedType { key, .. } => file.entry_context(None, key),
        CatalogError::ExpectedString { section, key, .. } => {
            file.entry_context(Some(section), key)
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::issues::{Report, Rule};

    fn issues(content: &str) -> Vec<CatalogIssue> {
        let file = CatalogFile::new("en", "translations/en.toml", content);
        let load = file.load();
        check_locale(&LocaleCatalog { file, load })
    }

    fn positions(issues: &[CatalogIssue]) -> Vec<(usize, usize)> {
        issues
            .iter()
            .map(|i| (i.context.line(), i.context.col()))
            .collect()
    }

    #[test]
    fn test_clean_catalog_has_no_issues() {
        assert!(issues("a = \"A {name}\"\n[s]\nb = \"{{x}}\"").is_empty());
    }

    #[test]
    fn test_syntax_error_points_at_clause() {
        let issues = issues("title = \"Hi\"\ngreeting = \"Hello {name\"\n");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].rule(), Rule::SyntaxError);
        assert_eq!(positions(&issues), vec![(2, 19)]);
        assert_eq!(
            issues[0].context.source_line.as_deref(),
            Some("greeting = \"Hello {name\"")
        );
        assert_eq!(issues[0].locale, "en");
    }

    #[test]
    fn test_decode_error_points_at_offset() {
        let issues = issues("a = \"A\"\nb c\n");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].rule(), Rule::DecodeError);
        assert_eq!(issues[0].context.line(), 2);
        assert!(issues[0].message().starts_with("failed to decode TOML content"));
    }

    #[test]
    fn test_entry_errors_point_at_keys() {
        let issues = issues("age = 1\n\n[menu]\nopen = \"Open\"\ncount = 3\n[set_language]\nx = \"y\"");
        let mut found: Vec<(Rule, usize)> = issues
            .iter()
            .map(|i| (i.rule(), i.context.line()))
            .collect();
        found.sort();
        assert_eq!(
            found,
            vec![
                (Rule::NameConflict, 6),
                (Rule::TypeMismatch, 1),
                (Rule::TypeMismatch, 5),
            ]
        );
    }
}
