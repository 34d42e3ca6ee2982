use anyhow::Result;

use crate::{CliTest, stderr, stdout};

fn setup() -> Result<CliTest> {
    let test = CliTest::with_config(&[])?;
    test.write_locale("en", r#"{"hello_world": "Hello", "goodbye": "Bye Bye"}"#)?;
    test.write_locale("tr", r#"{"hello_world": "Merhaba", "goodbye": "Hoşça kal"}"#)?;
    Ok(test)
}

#[test]
fn test_find_matches_value() -> Result<()> {
    let test = setup()?;

    let output = test.run(&["find", "bye"])?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("Found 1 entry:"));
    assert!(out.contains("Result #1"));
    assert!(out.contains("Key   : goodbye"));
    assert!(out.contains("Value : Bye Bye"));

    Ok(())
}

#[test]
fn test_find_in_keys_only() -> Result<()> {
    let test = setup()?;

    let output = test.run(&["find", "HELLO", "key"])?;
    let out = stdout(&output);
    assert!(out.contains("Found 1 entry:"));
    assert!(out.contains("Key   : hello_world"));

    let output = test.run(&["find", "hello", "value"])?;
    assert!(stdout(&output).contains("Found 1 entry:"));

    let output = test.run(&["find", "world", "value"])?;
    assert!(stdout(&output).contains("No entries found."));

    Ok(())
}

#[test]
fn test_find_in_named_locale() -> Result<()> {
    let test = setup()?;

    let output = test.run(&["find", "kal", "both", "tr"])?;
    assert!(output.status.success());
    assert!(stdout(&output).contains("Value : Hoşça kal"));

    Ok(())
}

#[test]
fn test_find_without_matches_succeeds() -> Result<()> {
    let test = setup()?;

    let output = test.run(&["find", "nothing-like-this"])?;
    assert!(output.status.success());
    assert!(stdout(&output).contains("No entries found."));

    Ok(())
}

#[test]
fn test_find_unknown_locale_fails() -> Result<()> {
    let test = setup()?;

    let output = test.run(&["find", "hello", "both", "xx"])?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("'xx'"));

    Ok(())
}

#[test]
fn test_find_rejects_unknown_scope() -> Result<()> {
    let test = setup()?;

    let output = test.run(&["find", "hello", "everywhere"])?;
    assert!(!output.status.success());

    Ok(())
}
