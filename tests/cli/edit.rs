use anyhow::Result;
use serde_json::json;

use crate::{CliTest, stderr, stdout};

const EN: &str = r#"{"@@locale": "en", "title": "Title", "@title": {"description": "Page title"}}"#;
const ZH: &str = r#"{"title": "标题"}"#;

fn project() -> Result<CliTest> {
    CliTest::with_session(&[("en.arb", EN), ("zh.arb", ZH)])
}

#[test]
fn test_set_then_status() -> Result<()> {
    let test = project()?;

    let output = test
        .command()
        .args(["set", "title", "zharb", "新标题"])
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "✓ title [zharb]: \"标题\" -> \"新标题\"\n"
    );

    let output = test.command().arg("status").output()?;
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "1 edited cell:\n  title  zharb  \"标题\" -> \"新标题\"\n"
    );

    Ok(())
}

#[test]
fn test_set_by_file_path_and_json() -> Result<()> {
    let test = project()?;

    let output = test
        .command()
        .args(["set", "@title", "zh.arb", r#"{"description": "页面标题"}"#])
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let session = test.session()?;
    assert_eq!(
        session.rows.get("@title").and_then(|row| row.value("zharb")),
        Some(&json!({"description": "页面标题"}))
    );

    Ok(())
}

#[test]
fn test_set_unknown_locale() -> Result<()> {
    let test = project()?;

    let output = test
        .command()
        .args(["set", "title", "fr", "Titre"])
        .output()?;
    assert_eq!(output.status.code(), Some(2));
    assert_eq!(
        stderr(&output),
        "Error: Unknown locale \"fr\" (known: enarb, zharb)\n"
    );

    Ok(())
}

#[test]
fn test_status_without_session() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("status").output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("run `arby fetch` first"));

    Ok(())
}

#[test]
fn test_status_warns_about_orphan_annotations() -> Result<()> {
    let test = CliTest::with_session(&[("en.arb", r#"{"a": "A", "@b": {}}"#)])?;

    let output = test.command().arg("status").output()?;
    assert!(output.status.success());
    assert_eq!(stdout(&output), "✓ No edits (2 keys)\n");
    assert_eq!(
        stderr(&output),
        "warning: \"@b\" has no key \"b\" and will not be written\n"
    );

    Ok(())
}
