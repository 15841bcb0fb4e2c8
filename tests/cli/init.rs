use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;
    assert!(output.status.success());
    assert_eq!(stdout(&output), "✓ Created .arbyrc.json\n");

    let content = test.read_file(".arbyrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["gitlabEndpoint"], "https://gitlab.com");
    assert_eq!(parsed["branch"], "main");
    assert!(parsed["filePaths"].as_array().is_some_and(Vec::is_empty));
    assert!(
        parsed.get("privateToken").is_none(),
        "Token should not be written by default"
    );

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".arbyrc.json", "{}")?;

    let output = test.command().arg("init").output()?;
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr(&output), "error: .arbyrc.json already exists\n");
    assert_eq!(test.read_file(".arbyrc.json")?, "{}");

    Ok(())
}
