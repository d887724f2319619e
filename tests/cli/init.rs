use anyhow::{Context, Result};
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, stderr_of, stdout_of};

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert!(parsed.get("roots").is_some(), "Config should have 'roots' field");
    assert!(
        parsed.get("externals").is_some(),
        "Config should have 'externals' field"
    );
    assert_eq!(parsed["followReexports"], Value::Bool(false));
    assert_eq!(
        parsed["moduleExtensions"],
        serde_json::json!([".ts", ".tsx", ".d.ts"])
    );

    assert!(content.contains("\n  \""), "Config should use 2-space indentation");

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_of(&output), "✓ Created .typedepsrc.json\n");

    assert!(test.root().join(".typedepsrc.json").exists());
    let content = test.read_file(".typedepsrc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".typedepsrc.json", "{}")?;

    let output = test.command().arg("init").output()?;
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr_of(&output), "Error: .typedepsrc.json already exists\n");
    assert_eq!(test.read_file(".typedepsrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;
    test.command().arg("init").output()?;
    test.write_file("types.ts", "export interface A {}\n")?;

    let output = test.closure_command().arg("types.ts").output()?;
    assert!(
        output.status.success(),
        "Closure command should work with initialized config. stderr: {}",
        stderr_of(&output)
    );

    Ok(())
}
