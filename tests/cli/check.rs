use anyhow::Result;

use crate::{CliTest, run};

const EN: &str = r#"
title = "Lingo"
greeting = "Hello {name}"
items = "{count} {{item|items}}"

[menu]
open = "Open"
"#;

const SV: &str = r#"
title = "Lingo"
greeting = "Hej {name}"
items = "{count} {{sak|saker}}"

[menu]
open = "Öppna"
"#;

#[test]
fn test_consistent_locales() -> Result<()> {
    let test = CliTest::with_translations(&[("en.toml", EN), ("sv.toml", SV)])?;

    let out = run(test.check_command())?;
    assert_eq!(out.code, Some(0), "stdout: {}", out.stdout);
    assert!(out.stdout.contains("✓ Checked 2 locale files - no issues found"));
    assert!(!test.root().join("i18n").exists());

    Ok(())
}

#[test]
fn test_syntax_error_is_located() -> Result<()> {
    let test = CliTest::with_translations(&[("en.toml", "greeting = \"Hello {name\"\n")])?;

    let out = run(test.check_command())?;
    assert_eq!(out.code, Some(1));
    assert!(out.stdout.contains("error: \"syntax error in 'greeting'"));
    assert!(out.stdout.contains("syntax-error"));
    assert!(out.stdout.contains("--> translations/en.toml:1:19"));
    assert!(out.stdout.contains("1 | greeting = \"Hello {name\""));
    assert!(out.stdout.contains("1 problem (1 error, 0 warnings)"));

    Ok(())
}

#[test]
fn test_validation_report() -> Result<()> {
    let sv = r#"
title = "Lingo"
greeting = "Hej {count}"
extra = "Extra"
"#;
    let test = CliTest::with_translations(&[("en.toml", EN), ("sv.toml", sv)])?;

    let out = run(test.check_command())?;
    assert_eq!(out.code, Some(1));
    assert!(out.stdout.contains("sv is missing translation 'items'"));
    assert!(out.stdout.contains("sv is missing section [menu]"));
    assert!(out.stdout.contains("sv has an unknown translation 'extra'"));
    assert!(out.stdout.contains(
        "sv has the wrong signature for 'greeting'. Should be `Greeting(name string)`, but was `Greeting(count int)`"
    ));
    assert!(out.stdout.contains("--> translations/en.toml:4:1"));
    assert!(out.stdout.contains("--> translations/sv.toml:3:1"));
    assert!(out.stdout.contains("4 problems (4 errors, 0 warnings)"));

    Ok(())
}

#[test]
fn test_load_errors_skip_validation() -> Result<()> {
    let test = CliTest::with_translations(&[
        ("en.toml", EN),
        ("sv.toml", "title = 1\n"),
    ])?;

    let out = run(test.check_command())?;
    assert_eq!(out.code, Some(1));
    assert!(out.stdout.contains("type-mismatch"));
    assert!(!out.stdout.contains("missing-translation"));

    Ok(())
}

#[test]
fn test_ignored_file_is_a_warning() -> Result<()> {
    let test = CliTest::with_translations(&[("en.toml", EN), ("english.toml", EN)])?;

    let out = run(test.check_command())?;
    assert_eq!(out.code, Some(0));
    assert!(out.stdout.contains("warning: \"file name is not a locale"));
    assert!(out.stdout.contains("--> translations/english.toml\n"));
    assert!(out.stdout.contains("1 problem (0 errors, 1 warning)"));

    Ok(())
}

#[test]
fn test_missing_base_locale() -> Result<()> {
    let test = CliTest::with_translations(&[("sv.toml", SV)])?;

    let mut cmd = test.check_command();
    cmd.args(["--base-locale", "en"]);
    let out = run(cmd)?;
    assert_eq!(out.code, Some(1));
    assert!(out.stdout.contains("base locale 'en' not found among the translation files"));
    assert!(out.stdout.contains("missing-base-locale"));

    Ok(())
}

#[test]
fn test_missing_input_dir() -> Result<()> {
    let test = CliTest::new()?;

    let out = run(test.check_command())?;
    assert_eq!(out.code, Some(2));
    assert!(out.stderr.contains("Error: Input directory"));

    Ok(())
}

#[test]
fn test_input_dir_from_config() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".lingorc.json", r#"{ "inputDir": "locales" }"#)?;
    test.write_file("locales/de.toml", "a = \"A\"\n")?;

    let out = run(test.check_command())?;
    assert_eq!(out.code, Some(0), "stderr: {}", out.stderr);
    assert!(out.stdout.contains("Checked 1 locale file - no issues found"));

    Ok(())
}

#[test]
fn test_verbose_notes() -> Result<()> {
    let test = CliTest::with_translations(&[("en.toml", EN)])?;

    let mut cmd = test.check_command();
    cmd.arg("-v");
    let out = run(cmd)?;
    assert_eq!(out.code, Some(0));
    assert!(out.stderr.contains("Note: No .lingorc.json found, using default configuration"));
    assert!(out.stderr.contains("Loaded en (4 entries) from translations/en.toml"));

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let out = run({
        let mut cmd = test.command();
        cmd.arg("--help");
        cmd
    })?;
    assert_eq!(out.code, Some(0));
    assert!(out.stdout.contains("generate"));
    assert!(out.stdout.contains("check"));
    assert!(out.stdout.contains("init"));

    Ok(())
}
