use std::{
    cell::OnceCell,
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use anyhow::{Result, bail};
use rayon::prelude::*;

use crate::{
    cli::args::CommonArgs,
    config::{CONFIG_FILE_NAME, Config, load_config},
    core::{
        Catalog, CatalogError, CatalogLoad, ValidationReport,
        parsers::toml::{CatalogFile, CatalogScanWarning, scan_catalog_files},
        validate,
    },
};

/// One locale's catalog file and what came out of loading it.
#[derive(Debug)]
pub struct LocaleCatalog {
    pub file: CatalogFile,
    /// `Err` when the file is not valid TOML.
    pub load: Result<CatalogLoad, CatalogError>,
}

impl LocaleCatalog {
    pub fn locale(&self) -> &str {
        &self.file.locale
    }

    /// Number of errors found while loading this locale.
    pub fn error_count(&self) -> usize {
        match &self.load {
            Ok(load) => load.errors.len(),
            Err(_) => 1,
        }
    }
}

/// Pipeline context shared by the `generate` and `check` commands.
///
/// Configuration is merged with the following priority (highest to lowest):
/// 1. CLI arguments (e.g., `--base-locale en`)
/// 2. `.lingorc.json` config file
/// 3. Built-in defaults
///
/// Every locale is loaded eagerly, in parallel. Validation runs lazily on
/// first access, and only makes sense once [`CompileContext::load_error_count`]
/// is zero.
pub struct CompileContext {
    /// Merged configuration (CLI args > config file > defaults).
    pub config: Config,

    /// Directory the catalogs were read from.
    pub input_dir: PathBuf,

    /// Directory `generate` writes the package to.
    pub output_dir: PathBuf,

    /// Locale every other locale is compared against.
    pub base_locale: String,

    /// Whether to print verbose diagnostic messages.
    pub verbose: bool,

    /// Loaded locales, sorted by locale.
    pub locales: Vec<LocaleCatalog>,

    /// Files in the input directory that were skipped.
    pub scan_warnings: Vec<CatalogScanWarning>,

    validation: OnceCell<ValidationReport>,
}

impl CompileContext {
    /// Create a new `CompileContext` from command line arguments, searching
    /// for the config file from the current directory.
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        Self::with_root(Path::new("."), common_args, |_| {})
    }

    /// Create a context rooted at `root_dir`.
    ///
    /// `customize` applies command-specific overrides to the merged config
    /// before it is validated.
    pub fn with_root(
        root_dir: &Path,
        common_args: &CommonArgs,
        customize: impl FnOnce(&mut Config),
    ) -> Result<Self> {
        let verbose = common_args.verbose;

        let config_result = load_config(root_dir)?;
        if verbose && !config_result.from_file {
            eprintln!(
                "Note: No {} found, using default configuration",
                CONFIG_FILE_NAME
            );
        }

        let mut config = config_result.config;
        if let Some(ref input_dir) = common_args.input_dir {
            config.input_dir = input_dir.to_string_lossy().to_string();
        }
        if let Some(ref base_locale) = common_args.base_locale {
            config.base_locale = Some(base_locale.clone());
        }
        customize(&mut config);
        config.validate()?;

        let input_dir = resolve_dir(root_dir, &config.input_dir);
        let output_dir = resolve_dir(root_dir, &config.output_dir);
        let scan = scan_catalog_files(&input_dir)?;

        if verbose {
            for warning in &scan.warnings {
                eprintln!("Warning: {} - {}", warning.file_path, warning.error);
            }
        }

        if scan.files.is_empty() {
            bail!(
                "No translation files found in '{}'.\n\
                 Hint: Add one <locale>.toml file per locale, e.g. en.toml.",
                input_dir.display()
            );
        }

        let base_locale = match config.base_locale {
            Some(ref locale) => locale.clone(),
            // Files are sorted by locale
            None => scan.files[0].locale.clone(),
        };

        let locales: Vec<LocaleCatalog> = scan
            .files
            .into_par_iter()
            .map(|file| {
                let load = file.load();
                LocaleCatalog { file, load }
            })
            .collect();

        if verbose {
            for locale in &locales {
                if let Ok(ref load) = locale.load {
                    eprintln!(
                        "Loaded {} ({} entries) from {}",
                        locale.locale(),
                        load.catalog.len(),
                        locale.file.file_path
                    );
                }
            }
        }

        Ok(Self {
            config,
            input_dir,
            output_dir,
            base_locale,
            verbose,
            locales,
            scan_warnings: scan.warnings,
            validation: OnceCell::new(),
        })
    }

    /// Locale names, sorted.
    pub fn locale_names(&self) -> Vec<&str> {
        self.locales.iter().map(LocaleCatalog::locale).collect()
    }

    pub fn locale(&self, locale: &str) -> Option<&LocaleCatalog> {
        self.locales.iter().find(|l| l.locale() == locale)
    }

    /// Total number of decode and entry errors across all locales.
    pub fn load_error_count(&self) -> usize {
        self.locales.iter().map(LocaleCatalog::error_count).sum()
    }

    /// Catalogs of every locale that decoded, keyed by locale.
    pub fn catalogs(&self) -> BTreeMap<String, Catalog> {
        self.locales
            .iter()
            .filter_map(|l| {
                l.load
                    .as_ref()
                    .ok()
                    .map(|load| (l.locale().to_string(), load.catalog.clone()))
            })
            .collect()
    }

    /// Cross-locale validation report (lazy initialization).
    pub fn validation(&self) -> &ValidationReport {
        self.validation
            .get_or_init(|| validate(&self.base_locale, &self.catalogs()))
    }
}

/// Resolve a configured directory against the root directory.
fn resolve_dir(root_dir: &Path, dir: &str) -> PathBuf {
    let path = Path::new(dir);
    if path.is_absolute() || root_dir == Path::new(".") {
        path.to_path_buf()
    } else {
        root_dir.join(path)
    }
}
