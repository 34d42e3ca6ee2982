use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

fn setup(mirrors: &[&str]) -> Result<CliTest> {
    let test = CliTest::with_config(mirrors)?;
    test.write_locale("en", r#"{"hello": "Hello"}"#)?;
    test.write_locale("tr", r#"{"hello": "Merhaba"}"#)?;
    Ok(test)
}

#[test]
fn test_add_to_all_locales() -> Result<()> {
    let test = setup(&[])?;

    let output = test.run(&["add", "bye", "Goodbye"])?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("Added bye: Goodbye to en folder."));
    assert!(out.contains("Added bye: Goodbye to tr folder."));

    assert_eq!(test.read_locale("locales", "en")?["bye"], "Goodbye");
    assert_eq!(test.read_locale("locales", "tr")?["bye"], "Goodbye");

    Ok(())
}

#[test]
fn test_add_with_locale_override() -> Result<()> {
    let test = setup(&[])?;

    let output = test.run(&["add", "bye", "Goodbye", "--locale", "tr=Hoşça kal"])?;
    assert!(output.status.success());

    assert_eq!(test.read_locale("locales", "en")?["bye"], "Goodbye");
    assert_eq!(test.read_locale("locales", "tr")?["bye"], "Hoşça kal");

    Ok(())
}

#[test]
fn test_add_existing_key_without_overwrite() -> Result<()> {
    let test = setup(&[])?;
    let before = test.read_file("locales/en/common.json")?;

    let output = test.run(&["add", "hello", "Hi"])?;
    assert!(output.status.success());
    assert!(stdout(&output).contains("Key hello already exists in en folder."));
    assert_eq!(test.read_file("locales/en/common.json")?, before);

    Ok(())
}

#[test]
fn test_add_existing_key_with_overwrite() -> Result<()> {
    let test = setup(&[])?;

    let output = test.run(&["add", "hello", "Hi", "-o", "-l", "tr=Selam"])?;
    assert!(output.status.success());
    assert_eq!(test.read_locale("locales", "en")?["hello"], "Hi");
    assert_eq!(test.read_locale("locales", "tr")?["hello"], "Selam");

    Ok(())
}

#[test]
fn test_add_sorts_keys() -> Result<()> {
    let test = setup(&[])?;

    test.run(&["add", "about", "About"])?;
    let keys: Vec<String> = test.read_locale("locales", "en")?.keys().cloned().collect();
    assert_eq!(keys, vec!["about", "hello"]);
    assert_eq!(
        test.read_file("locales/en/common.json")?,
        "{\n  \"about\": \"About\",\n  \"hello\": \"Hello\"\n}\n"
    );

    Ok(())
}

#[test]
fn test_add_writes_mirrors() -> Result<()> {
    let test = setup(&["mirror/a", "mirror/b"])?;

    let output = test.run(&["add", "bye", "Goodbye"])?;
    assert!(stdout(&output).contains("to en folder and 2 additional folders."));

    for locale in ["en", "tr"] {
        let primary = test.read_file(&format!("locales/{}/common.json", locale))?;
        assert_eq!(test.read_file(&format!("mirror/a/{}/common.json", locale))?, primary);
        assert_eq!(test.read_file(&format!("mirror/b/{}/common.json", locale))?, primary);
    }

    Ok(())
}

#[test]
fn test_add_skips_locale_without_document() -> Result<()> {
    let test = setup(&[])?;
    std::fs::create_dir_all(test.root().join("locales/de"))?;

    let output = test.run(&["add", "bye", "Goodbye"])?;
    assert!(output.status.success());
    assert!(stderr(&output).contains("No common.json file found in de folder"));
    assert!(!test.root().join("locales/de/common.json").exists());
    assert_eq!(test.read_locale("locales", "tr")?["bye"], "Goodbye");

    Ok(())
}

#[test]
fn test_add_rejects_malformed_override() -> Result<()> {
    let test = setup(&[])?;

    let output = test.run(&["add", "bye", "Goodbye", "--locale", "tr"])?;
    assert!(!output.status.success());
    assert!(!test.read_file("locales/en/common.json")?.contains("bye"));

    Ok(())
}

#[test]
fn test_add_warns_about_unknown_override_locale() -> Result<()> {
    let test = setup(&[])?;

    let output = test.run(&["add", "bye", "Goodbye", "-l", "xx=???", "-l", "tr=Hoşça kal"])?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stderr(&output).contains("No xx folder found, override for it ignored."));
    assert!(!test.root().join("locales/xx").exists());
    assert_eq!(test.read_locale("locales", "tr")?["bye"], "Hoşça kal");

    Ok(())
}
