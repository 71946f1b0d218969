use anyhow::{Context, Result};
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["init"])?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "✓ Created .starlight-i18n.json\n");

    let content = test.read_file(".starlight-i18n.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["configDirectories"], serde_json::json!(["."]));
    assert!(parsed["ignores"].is_array());

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".starlight-i18n.json", "{}")?;

    let output = test.run(&["init"])?;

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(stderr(&output), "Error: .starlight-i18n.json already exists\n");
    assert_eq!(test.read_file(".starlight-i18n.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;
    test.run(&["init"])?;
    test.write_file("astro.config.mjs", crate::ASTRO_CONFIG)?;

    let output = test.run(&["locales"])?;

    assert!(
        output.status.success(),
        "Locales command should work with initialized config. stderr: {}",
        stderr(&output)
    );

    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&[])?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Usage:"));

    Ok(())
}
