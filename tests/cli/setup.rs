use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_setup_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["setup", "public/locales", "../app/locales", "../web/locales"])?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Created i18nHelper.config.json"));

    let content = test.read_file("i18nHelper.config.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["targetFolder"], "public/locales");
    assert_eq!(
        parsed["additionalFolders"],
        serde_json::json!(["../app/locales", "../web/locales"])
    );
    assert_eq!(parsed["sortItemByName"], true);
    assert_eq!(parsed["deepL_ApiKey"], "");
    assert!(content.contains("\n  \"targetFolder\""), "2-space indentation");

    Ok(())
}

#[test]
fn test_setup_refuses_to_overwrite() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("i18nHelper.config.json", r#"{"targetFolder": "old"}"#)?;

    let output = test.run(&["setup", "new"])?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("already exists"));
    assert!(test.read_file("i18nHelper.config.json")?.contains("old"));

    let output = test.run(&["setup", "new", "--force"])?;
    assert!(output.status.success());
    assert!(test.read_file("i18nHelper.config.json")?.contains("\"new\""));

    Ok(())
}

#[test]
fn test_setup_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;
    test.run(&["setup", "locales"])?;
    test.write_locale("en", r#"{"hello": "Hello"}"#)?;

    let output = test.run(&["find", "hello"])?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Found 1 entry"));

    Ok(())
}

#[test]
fn test_missing_config_is_an_error() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["find", "hello"])?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("i18nHelper.config.json not found"));

    Ok(())
}
