use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, run};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let out = run({
        let mut cmd = test.command();
        cmd.arg("init");
        cmd
    })?;
    assert_eq!(out.code, Some(0));
    assert!(out.stdout.contains("✓ Created .lingorc.json"));

    let content = test.read_file(".lingorc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["inputDir"], "translations");
    assert_eq!(parsed["outputDir"], "i18n");
    assert!(parsed.get("packageName").is_none());
    assert!(content.contains("\n  \"inputDir\""), "2-space indentation");

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".lingorc.json", "{}")?;

    let out = run({
        let mut cmd = test.command();
        cmd.arg("init");
        cmd
    })?;
    assert_eq!(out.code, Some(1));
    assert!(out.stderr.contains("Error: .lingorc.json already exists"));
    assert_eq!(test.read_file(".lingorc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;
    test.command().arg("init").output()?;
    test.write_file("translations/en.toml", "hello = \"Hello\"\n")?;

    let out = run(test.generate_command())?;
    assert!(
        out.code == Some(0),
        "Generate should work with initialized config. stderr: {}",
        out.stderr
    );
    assert!(test.root().join("i18n/en.go").exists());

    Ok(())
}
