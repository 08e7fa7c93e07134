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
fn test_generate_package() -> Result<()> {
    let test = CliTest::with_translations(&[("en.toml", EN), ("sv.toml", SV)])?;

    let out = run(test.generate_command())?;
    assert_eq!(out.code, Some(0), "stdout: {}\nstderr: {}", out.stdout, out.stderr);
    assert!(out.stdout.contains("Generated translation files for locales: en, sv"));

    for name in ["en.go", "sv.go", "base.go", "translator.go"] {
        let content = test.read_file(&format!("i18n/{}", name))?;
        assert!(content.starts_with("// Code generated by lingo. DO NOT EDIT.\n"));
        assert!(content.contains("package i18n\n"));
    }

    let sv = test.read_file("i18n/sv.go")?;
    assert!(sv.contains("func (svTranslations) Greeting(name string) string {"));
    assert!(sv.contains("return fmt.Sprintf(\"Hej %s\", name)"));
    assert!(sv.contains("func (svMenuTranslations) Open() string {\n\treturn \"Öppna\"\n}"));

    let translator = test.read_file("i18n/translator.go")?;
    assert!(translator.contains("const BaseLocale = \"en\""));
    assert!(translator.contains("var SupportedLanguages = []string{\"en\", \"sv\"}"));

    let base = test.read_file("i18n/base.go")?;
    assert!(base.contains("Items(count int) string"));
    assert!(base.contains("Menu() MenuTranslations"));

    Ok(())
}

#[test]
fn test_generate_with_overrides() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("locales/en.toml", EN)?;
    test.write_file("locales/sv.toml", SV)?;

    let mut cmd = test.generate_command();
    cmd.args(["-i", "locales", "-o", "internal/texts", "-p", "texts", "-b", "sv"]);
    let out = run(cmd)?;
    assert_eq!(out.code, Some(0), "stderr: {}", out.stderr);

    let translator = test.read_file("internal/texts/translator.go")?;
    assert!(translator.contains("package texts\n"));
    assert!(translator.contains("const BaseLocale = \"sv\""));

    Ok(())
}

#[test]
fn test_generate_uses_config() -> Result<()> {
    let test = CliTest::with_translations(&[("en.toml", EN)])?;
    test.write_file(
        ".lingorc.json",
        r#"{ "outputDir": "gen/messages", "packageName": "msg" }"#,
    )?;

    let out = run(test.generate_command())?;
    assert_eq!(out.code, Some(0), "stderr: {}", out.stderr);
    assert!(test.read_file("gen/messages/en.go")?.contains("package msg\n"));

    Ok(())
}

#[test]
fn test_generate_refuses_inconsistent_locales() -> Result<()> {
    let test = CliTest::with_translations(&[("en.toml", EN), ("sv.toml", "title = \"Lingo\"\n")])?;

    let out = run(test.generate_command())?;
    assert_eq!(out.code, Some(1));
    assert!(out.stdout.contains("sv is missing translation 'greeting'"));
    assert!(!out.stdout.contains("Generated translation files"));
    assert!(!test.root().join("i18n").exists());

    Ok(())
}

#[test]
fn test_generate_invalid_package_name() -> Result<()> {
    let test = CliTest::with_translations(&[("en.toml", EN)])?;

    let mut cmd = test.generate_command();
    cmd.args(["-p", "not-a-package"]);
    let out = run(cmd)?;
    assert_eq!(out.code, Some(2));
    assert!(out.stderr.starts_with("Error: "));
    assert!(!test.root().join("i18n").exists());

    Ok(())
}

#[test]
fn test_generate_verbose_writes() -> Result<()> {
    let test = CliTest::with_translations(&[("en.toml", EN)])?;

    let mut cmd = test.generate_command();
    cmd.arg("--verbose");
    let out = run(cmd)?;
    assert_eq!(out.code, Some(0));
    assert!(out.stderr.contains("Wrote "));
    assert!(out.stderr.contains("i18n/translator.go"));

    Ok(())
}
