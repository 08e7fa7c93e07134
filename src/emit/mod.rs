//! Go code generation.
//!
//! The emitter only consumes validated [`Catalog`]s. It renders:
//!
//! - `<locale>.go`: one unexported struct per locale and per section,
//! - `base.go`: the `Translations` interfaces, shaped after the base locale,
//! - `translator.go`: the `T` wrapper with `NewTranslator` and `SetLanguage`.

use std::{collections::BTreeMap, fs, path::Path};

use anyhow::{Context, Result, anyhow, bail};

use crate::core::Catalog;

pub mod go;
pub mod package;

pub use package::{render_base, render_locale, render_translator};

/// First line of every generated file.
pub const GENERATED_HEADER: &str = "// Code generated by lingo. DO NOT EDIT.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub file_name: String,
    pub content: String,
}

/// Render every file of the generated package.
pub fn render_package(
    package: &str,
    base_locale: &str,
    catalogs: &BTreeMap<String, Catalog>,
) -> Result<Vec<GeneratedFile>> {
    let base = catalogs
        .get(base_locale)
        .ok_or_else(|| anyhow!("Base locale '{}' has no catalog", base_locale))?;

    let shape = base.interface();
    if let Some(other) = catalogs.values().find(|c| c.interface() != shape) {
        bail!(
            "Locale '{}' does not match the interface of base locale '{}'",
            other.locale,
            base_locale
        );
    }

    let mut files: Vec<GeneratedFile> = catalogs
        .values()
        .map(|catalog| GeneratedFile {
            file_name: format!("{}.go", catalog.locale),
            content: render_locale(package, catalog),
        })
        .collect();

    files.push(GeneratedFile {
        file_name: "base.go".to_string(),
        content: render_base(package, base),
    });

    let locales: Vec<&str> = catalogs.keys().map(String::as_str).collect();
    files.push(GeneratedFile {
        file_name: "translator.go".to_string(),
        content: render_translator(package, &locales, base),
    });

    Ok(files)
}

/// Write `files` into `output_dir`, creating it if needed.
pub fn write_package(output_dir: &Path, files: &[GeneratedFile], verbose: bool) -> Result<()> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create directory: {}", output_dir.display()))?;

    for file in files {
        let path = output_dir.join(&file.file_name);
        fs::write(&path, &file.content)
            .with_context(|| format!("Failed to write file: {}", path.display()))?;
        if verbose {
            eprintln!("Wrote {} bytes to {}", file.content.len(), path.display());
        }
    }

    Ok(())
}
