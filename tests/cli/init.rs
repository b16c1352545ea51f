use anyhow::{Context, Result};
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::CliTest;

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.init_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Created .transcheckrc.json

    ----- stderr -----
    ");

    assert!(test.root().join(".transcheckrc.json").exists());

    let content = test.read_file(".transcheckrc.json")?;
    let config: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(config["messagesRoot"], "./messages");
    assert_eq!(config["referenceLocale"], "en");
    assert_eq!(config["filePattern"], "??.json");
    assert_eq!(config["placeholderMarker"], "$");

    Ok(())
}

#[test]
fn test_init_keeps_existing_config() -> Result<()> {
    let test = CliTest::new()?;
    let existing = r#"{ "referenceLocale": "de" }"#;
    test.write_file(".transcheckrc.json", existing)?;

    assert_cmd_snapshot!(test.init_command(), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    error: .transcheckrc.json already exists
    ");

    assert_eq!(test.read_file(".transcheckrc.json")?, existing);

    Ok(())
}

#[test]
fn test_init_config_is_used_by_check() -> Result<()> {
    let test = CliTest::with_messages(&[("en", r#"{ "a": "A" }"#), ("de", r#"{ "a": "B" }"#)])?;

    assert_cmd_snapshot!(test.init_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Created .transcheckrc.json

    ----- stderr -----
    ");

    assert_cmd_snapshot!(test.check_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Checked 2 locale files - no issues found

    ----- stderr -----
    ");

    Ok(())
}
