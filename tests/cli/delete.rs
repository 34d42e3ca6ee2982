use anyhow::Result;

use crate::{CliTest, stderr, stdout};

fn setup(mirrors: &[&str]) -> Result<CliTest> {
    let test = CliTest::with_config(mirrors)?;
    test.write_locale(
        "en",
        r#"{"save": "Save", "save_all": "Save all", "cancel": "Cancel"}"#,
    )?;
    test.write_locale("tr", r#"{"save": "Kaydet", "cancel": "İptal"}"#)?;
    Ok(test)
}

#[test]
fn test_delete_exact_key() -> Result<()> {
    let test = setup(&["mirror"])?;

    let output = test.run(&["delete", "save"])?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Deleted save from en folder and 1 additional folder."));

    let en = test.read_locale("locales", "en")?;
    assert!(!en.contains_key("save"));
    assert!(en.contains_key("save_all"));
    assert!(!test.read_locale("locales", "tr")?.contains_key("save"));
    assert_eq!(
        test.read_file("mirror/en/common.json")?,
        test.read_file("locales/en/common.json")?
    );

    Ok(())
}

#[test]
fn test_delete_missing_key_reports_per_locale() -> Result<()> {
    let test = setup(&[])?;

    let output = test.run(&["delete", "save_all"])?;
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("Deleted save_all from en folder."));
    assert!(out.contains("No key found in tr folder."));

    Ok(())
}

#[test]
fn test_delete_selective() -> Result<()> {
    let test = setup(&[])?;

    let output = test.run_with_input(&["delete", "save", "--selective"], "2\n")?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("Found 2 entries:"));
    assert!(out.contains("Enter the key's numbers to delete"));
    assert!(out.contains("Deleted save_all from en folder."));

    let en = test.read_locale("locales", "en")?;
    assert!(en.contains_key("save"));
    assert!(!en.contains_key("save_all"));

    Ok(())
}

#[test]
fn test_delete_selective_multiple_and_invalid() -> Result<()> {
    let test = setup(&[])?;

    let output = test.run_with_input(&["delete", "a", "-s"], "1, 3, 42\n")?;
    assert!(output.status.success());
    assert!(stderr(&output).contains("Ignoring \"42\""));

    // en matches: save (1), save_all (2), cancel (3)
    let en = test.read_locale("locales", "en")?;
    assert!(!en.contains_key("save"));
    assert!(en.contains_key("save_all"));
    assert!(!en.contains_key("cancel"));
    assert!(test.read_locale("locales", "tr")?.is_empty());

    Ok(())
}

#[test]
fn test_delete_selective_nothing_selected() -> Result<()> {
    let test = setup(&[])?;
    let before = test.read_file("locales/en/common.json")?;

    let output = test.run_with_input(&["delete", "save", "--selective"], "\n")?;
    assert!(output.status.success());
    assert!(stdout(&output).contains("Nothing selected"));
    assert_eq!(test.read_file("locales/en/common.json")?, before);

    Ok(())
}

#[test]
fn test_delete_selective_no_matches() -> Result<()> {
    let test = setup(&[])?;

    let output = test.run_with_input(&["delete", "zzz", "--selective"], "")?;
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("No entries found."));
    assert!(!out.contains("Enter the key's numbers"));

    Ok(())
}
