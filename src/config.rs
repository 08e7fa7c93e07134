use std::{
    fs,
    path::{Path, PathBuf},
    sync::LazyLock,
};

use anyhow::{Context, Result, bail};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::core::is_locale_name;

pub const CONFIG_FILE_NAME: &str = ".lingorc.json";

static PACKAGE_NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_]*$").unwrap());

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory holding one `<locale>.toml` per locale.
    #[serde(default = "default_input_dir")]
    pub input_dir: String,
    /// Directory the generated package is written to.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    /// Go package name. Defaults to the output directory's base name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_name: Option<String>,
    /// Locale every other locale is compared against. Defaults to the
    /// alphabetically first locale found.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_locale: Option<String>,
}

fn default_input_dir() -> String {
    "translations".to_string()
}

fn default_output_dir() -> String {
    "i18n".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_dir: default_input_dir(),
            output_dir: default_output_dir(),
            package_name: None,
            base_locale: None,
        }
    }
}

/// Returns true if `name` can be used as a Go package name.
pub fn is_valid_package_name(name: &str) -> bool {
    PACKAGE_NAME_REGEX.is_match(name)
}

impl Config {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if let Some(ref package) = self.package_name
            && !is_valid_package_name(package)
        {
            bail!(
                "Invalid package name: \"{}\" (must match ^[a-zA-Z_][a-zA-Z0-9_]*$)",
                package
            );
        }

        if let Some(ref locale) = self.base_locale
            && !is_locale_name(locale)
        {
            bail!(
                "Invalid base locale: \"{}\" (expected e.g. \"en\" or \"pt_br\")",
                locale
            );
        }

        Ok(())
    }

    /// Package name to generate, falling back to the output directory's
    /// base name.
    pub fn resolved_package_name(&self) -> Result<String> {
        if let Some(ref package) = self.package_name {
            return Ok(package.clone());
        }

        let package = Path::new(&self.output_dir)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default()
            .to_string();
        if !is_valid_package_name(&package) {
            bail!(
                "Cannot derive a package name from output directory '{}'.\n\
                 Hint: Pass --package or set 'packageName' in {}.",
                self.output_dir,
                CONFIG_FILE_NAME
            );
        }
        Ok(package)
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}

#[cfg(test)]
mod tests {
    use crate::config::*;
    use std::fs::File;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.input_dir, "translations");
        assert_eq!(config.output_dir, "i18n");
        assert!(config.package_name.is_none());
        assert!(config.base_locale.is_none());
    }

    #[test]
    fn test_parse_config() {
        let json = r#"{
              "inputDir": "locales",
              "outputDir": "internal/texts",
              "packageName": "texts",
              "baseLocale": "sv"
          }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.input_dir, "locales");
        assert_eq!(config.output_dir, "internal/texts");
        assert_eq!(config.package_name.as_deref(), Some("texts"));
        assert_eq!(config.base_locale.as_deref(), Some("sv"));
    }

    #[test]
    fn test_partial_config() {
        let json = r#"{ "baseLocale": "en" }"#;
        let config: Config = serde_json::from_str(json).unwrap();

        assert_eq!(config.base_locale.as_deref(), Some("en"));
        assert_eq!(config.input_dir, default_input_dir());
        assert_eq!(config.output_dir, default_output_dir());
    }

    #[test]
    fn test_find_config_file() {
        let dir = tempdir().unwrap();
        let sub_dir = dir.path().join("cmd").join("server");
        fs::create_dir_all(&sub_dir).unwrap();

        let config_path = dir.path().join(CONFIG_FILE_NAME);
        File::create(&config_path).unwrap();

        let found = find_config_file(&sub_dir);
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_find_config_not_found() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();

        assert!(find_config_file(dir.path()).is_none());
    }

    #[test]
    fn test_load_config_from_file() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            r#"{ "inputDir": "locales" }"#,
        )
        .unwrap();

        let result = load_config(dir.path()).unwrap();
        assert!(result.from_file);
        assert_eq!(result.config.input_dir, "locales");
    }

    #[test]
    fn test_load_config_default_when_not_found() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();

        let result = load_config(dir.path()).unwrap();
        assert!(!result.from_file);
        assert_eq!(result.config, Config::default());
    }

    #[test]
    fn test_load_config_with_invalid_package_fails() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            r#"{ "packageName": "my-package" }"#,
        )
        .unwrap();

        let err = load_config(dir.path()).err().unwrap();
        assert!(err.to_string().contains("Invalid package name"));
    }

    #[test]
    fn test_validate_base_locale() {
        let config = Config {
            base_locale: Some("en-US".to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = Config {
            base_locale: Some("pt_br".to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_package_name_validation() {
        assert!(is_valid_package_name("i18n"));
        assert!(is_valid_package_name("_texts"));
        assert!(!is_valid_package_name("9lives"));
        assert!(!is_valid_package_name("my-package"));
        assert!(!is_valid_package_name(""));
    }

    #[test]
    fn test_resolved_package_name() {
        let config = Config {
            output_dir: "internal/texts".to_string(),
            ..Default::default()
        };
        assert_eq!(config.resolved_package_name().unwrap(), "texts");

        let config = Config {
            output_dir: "out/my-texts".to_string(),
            ..Default::default()
        };
        assert!(config.resolved_package_name().is_err());

        let config = Config {
            output_dir: "out/my-texts".to_string(),
            package_name: Some("texts".to_string()),
            ..Default::default()
        };
        assert_eq!(config.resolved_package_name().unwrap(), "texts");
    }

    #[test]
    fn test_default_config_json_omits_optional_fields() {
        let json = default_config_json().unwrap();
        assert!(json.contains("\"inputDir\": \"translations\""));
        assert!(json.contains("\"outputDir\": \"i18n\""));
        assert!(!json.contains("packageName"));
    }
}
