use std::{
    fs,
    path::{Path, PathBuf},
    sync::LazyLock,
};

use anyhow::{Context, Result, bail};
use glob::Pattern;
use rayon::prelude::*;
use regex::Regex;

use crate::core::{CatalogContext, CatalogError, CatalogLoad, CatalogLocation, parse_catalog};

static LOCALE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]{2}(_[a-z]{2})?$").unwrap());

/// Returns true if `name` is a valid locale name (`en`, `pt_br`).
pub fn is_locale_name(name: &str) -> bool {
    LOCALE_REGEX.is_match(name)
}

/// A warning from scanning the input directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogScanWarning {
    pub file_path: String,
    pub error: String,
}

#[derive(Debug, Default)]
pub struct ScanCatalogsResult {
    /// Catalog files sorted by locale.
    pub files: Vec<CatalogFile>,
    pub warnings: Vec<CatalogScanWarning>,
}

/// The raw content of one locale's catalog file.
#[derive(Debug, Clone)]
pub struct CatalogFile {
    pub locale: String,
    pub file_path: String,
    pub content: String,
    line_index: Vec<usize>,
    /// Byte offset of the first invalid UTF-8 sequence, if the file had one.
    invalid_utf8_at: Option<usize>,
}

impl CatalogFile {
    pub fn new(
        locale: impl Into<String>,
        file_path: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        let content = content.into();
        // Pre-compute line index for O(log n) line lookups
        let line_index = build_line_index(&content);
        Self {
            locale: locale.into(),
            file_path: file_path.into(),
            content,
            line_index,
            invalid_utf8_at: None,
        }
    }

    /// Build a file from raw bytes. Invalid UTF-8 is replaced in `content`
    /// and reported as a decode error by [`CatalogFile::load`].
    pub fn from_bytes(
        locale: impl Into<String>,
        file_path: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        match String::from_utf8(bytes) {
            Ok(content) => Self::new(locale, file_path, content),
            Err(err) => {
                let valid_up_to = err.utf8_error().valid_up_to();
                let content = String::from_utf8_lossy(err.as_bytes()).into_owned();
                Self {
                    invalid_utf8_at: Some(valid_up_to),
                    ..Self::new(locale, file_path, content)
                }
            }
        }
    }

    /// Decode and compile this file.
    pub fn load(&self) -> Result<CatalogLoad, CatalogError> {
        if let Some(offset) = self.invalid_utf8_at {
            return Err(CatalogError::Decode {
                message: "invalid UTF-8 sequence, TOML files must be UTF-8 encoded".to_string(),
                offset: Some(offset),
            });
        }
        parse_catalog(&self.locale, &self.content)
    }

    /// Text of the 1-based `line`, without its line terminator.
    pub fn line_text(&self, line: usize) -> Option<&str> {
        let start = *self.line_index.get(line.checked_sub(1)?)?;
        let end = self
            .line_index
            .get(line)
            .copied()
            .unwrap_or(self.content.len());
        Some(self.content[start..end].trim_end_matches(['\n', '\r']))
    }

    /// Location of a byte offset into the file.
    pub fn offset_context(&self, offset: usize) -> CatalogContext {
        let offset = offset.min(self.content.len());
        let line = offset_to_line(&self.line_index, offset);
        let line_start = self.line_index[line - 1];
        let col = self
            .content
            .get(line_start..offset)
            .map_or(1, |prefix| prefix.chars().count() + 1);
        self.context_at(line, col)
    }

    /// Location of the `key = ...` line of an entry.
    ///
    /// A key that opens a table (`[key]`, `[section.key]`) points at its
    /// header. Falls back to the section header, then to line 1, when the
    /// key cannot be found textually (dotted keys, inline tables).
    pub fn entry_context(&self, section: Option<&str>, key: &str) -> CatalogContext {
        if let Some(line) = find_entry_line(&self.content, section, key) {
            let col = self.line_text(line).map_or(1, indent_col);
            return self.context_at(line, col);
        }

        let table = match section {
            Some(section) => format!("{}.{}", section, key),
            None => key.to_string(),
        };
        let line = find_section_line(&self.content, &table)
            .or_else(|| section.and_then(|s| find_section_line(&self.content, s)))
            .unwrap_or(1);
        self.context_at(line, 1)
    }

    /// Location of a `[section]` header.
    pub fn section_context(&self, section: &str) -> CatalogContext {
        let line = find_section_line(&self.content, section).unwrap_or(1);
        self.context_at(line, 1)
    }

    /// Location of the byte `offset` inside the value of an entry whose
    /// decoded value is `raw`.
    ///
    /// Exact only when the value is written on the key line without escapes;
    /// otherwise the key itself is pointed at.
    pub fn value_context(
        &self,
        section: Option<&str>,
        key: &str,
        raw: &str,
        offset: usize,
    ) -> CatalogContext {
        let entry = self.entry_context(section, key);
        let Some(line_text) = self.line_text(entry.line()) else {
            return entry;
        };
        let value_start = line_text
            .find('=')
            .and_then(|eq| line_text[eq..].find(raw).map(|pos| eq + pos));
        match value_start.and_then(|start| line_text.get(..start + offset)) {
            Some(prefix) => self.context_at(entry.line(), prefix.chars().count() + 1),
            None => entry,
        }
    }

    fn context_at(&self, line: usize, col: usize) -> CatalogContext {
        let location = CatalogLocation::new(self.file_path.clone(), line, col);
        match self.line_text(line) {
            Some(text) => CatalogContext::new(location, text),
            None => CatalogContext::without_source(location),
        }
    }
}

/// Build an index of line start byte offsets for O(log n) line lookups.
///
/// Line 1 starts at offset 0, line 2 starts after the first '\n', etc.
fn build_line_index(content: &str) -> Vec<usize> {
    let mut offsets = vec![0];
    for (i, c) in content.char_indices() {
        if c == '\n' {
            offsets.push(i + 1);
        }
    }
    offsets
}

/// Find the 1-based line number for a byte offset using binary search.
fn offset_to_line(line_index: &[usize], offset: usize) -> usize {
    match line_index.binary_search(&offset) {
        Ok(line) => line + 1,
        Err(line) => line,
    }
}

fn indent_col(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count() + 1
}

/// Name of the table opened by a `[header]` line.
fn table_header(line: &str) -> Option<&str> {
    let line = line.trim();
    if line.starts_with("[[") {
        return None;
    }
    let inner = line.strip_prefix('[')?;
    let end = inner.find(']')?;
    Some(unquote(inner[..end].trim()))
}

fn unquote(name: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = name
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    name
}

/// Returns true if `line` assigns to `key`, bare or quoted.
fn assigns_key(line: &str, key: &str) -> bool {
    let line = line.trim_start();
    let quoted_double = format!("\"{}\"", key);
    let quoted_single = format!("'{}'", key);
    [key, quoted_double.as_str(), quoted_single.as_str()]
        .iter()
        .any(|candidate| {
            line.strip_prefix(*candidate)
                .is_some_and(|rest| rest.trim_start().starts_with('='))
        })
}

/// Find the line where `key` is assigned inside `section` (or at the root).
fn find_entry_line(content: &str, section: Option<&str>, key: &str) -> Option<usize> {
    let mut current: Option<&str> = None;
    for (index, line) in content.lines().enumerate() {
        if let Some(header) = table_header(line) {
            current = Some(header);
            continue;
        }
        if current == section && assigns_key(line, key) {
            return Some(index + 1);
        }
    }
    None
}

fn find_section_line(content: &str, section: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| table_header(line) == Some(section))
        .map(|index| index + 1)
}

/// Extracts the locale from a catalog filename.
///
/// The stem is lower-cased and must match `^[a-z]{2}(_[a-z]{2})?$`.
///
/// Examples:
/// - "en.toml" -> Some("en")
/// - "translations/PT_BR.toml" -> Some("pt_br")
/// - "english.toml" -> None
pub fn extract_locale(path: impl AsRef<Path>) -> Option<String> {
    let stem = path.as_ref().file_stem()?.to_str()?.to_lowercase();
    is_locale_name(&stem).then_some(stem)
}

pub fn read_catalog_file(path: &Path, locale: &str) -> Result<CatalogFile> {
    let bytes =
        fs::read(path).with_context(|| format!("Failed to read translation file: {:?}", path))?;
    Ok(CatalogFile::from_bytes(
        locale,
        path.to_string_lossy().to_string(),
        bytes,
    ))
}

/// Find every `*.toml` file in `input_dir` and read the ones named after a
/// locale. Other files are reported as warnings.
pub fn scan_catalog_files(input_dir: impl AsRef<Path>) -> Result<ScanCatalogsResult> {
    let input_dir = input_dir.as_ref();

    if !input_dir.exists() {
        bail!(
            "Input directory '{}' does not exist.\n\
             Hint: Check your .lingorc.json 'inputDir' setting.",
            input_dir.display()
        );
    }

    if !input_dir.is_dir() {
        bail!("'{}' is not a directory.", input_dir.display());
    }

    let pattern = format!(
        "{}/*.toml",
        Pattern::escape(&input_dir.to_string_lossy())
    );
    let mut warnings = Vec::new();
    let mut located: Vec<(PathBuf, String)> = Vec::new();

    for entry in glob::glob(&pattern).context("Invalid input directory pattern")? {
        let path = entry?;
        let file_path = path.to_string_lossy().to_string();
        match extract_locale(&path) {
            Some(locale) if located.iter().any(|(_, seen)| *seen == locale) => {
                warnings.push(CatalogScanWarning {
                    file_path,
                    error: format!("duplicate file for locale '{}', skipping", locale),
                });
            }
            Some(locale) => located.push((path, locale)),
            None => warnings.push(CatalogScanWarning {
                file_path,
                error: "file name is not a locale (expected e.g. en.toml or pt_br.toml), skipping"
                    .to_string(),
            }),
        }
    }

    let mut files = located
        .par_iter()
        .map(|(path, locale)| read_catalog_file(path, locale))
        .collect::<Result<Vec<_>>>()?;
    files.sort_by(|a, b| a.locale.cmp(&b.locale));

    Ok(ScanCatalogsResult { files, warnings })
}
