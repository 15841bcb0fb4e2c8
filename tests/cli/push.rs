use anyhow::Result;

use crate::{CliTest, stderr, stdout};

const EN: &str = r#"{"@@locale": "en", "title": "Title", "@title": {"description": "Page title"}}"#;
const ZH: &str = r#"{"title": "标题"}"#;

#[test]
fn test_push_defaults_to_dry_run() -> Result<()> {
    let test = CliTest::with_session(&[("l10n/en.arb", EN), ("l10n/zh.arb", ZH)])?;
    test.command()
        .args(["set", "title", "l10n/zh.arb", "新标题"])
        .output()?;

    let output = test.command().arg("push").output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "  l10n/en.arb (3 keys)\n  l10n/zh.arb (1 key)\nDry run: 2 files with 1 edited cell would be committed (use --apply to commit)\n"
    );

    Ok(())
}

#[test]
fn test_push_verbose_prints_rendered_files() -> Result<()> {
    let test = CliTest::with_session(&[("en.arb", EN), ("zh.arb", ZH)])?;

    let output = test.command().args(["push", "--verbose"]).output()?;
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains(
        "    {\n      \"@@locale\": \"en\",\n      \"title\": \"Title\",\n      \"@title\": {\"description\":\"Page title\"}\n    }\n"
    ));
    assert!(out.contains("    {\n      \"title\": \"标题\"\n    }\n"));

    Ok(())
}

#[test]
fn test_push_apply_requires_token() -> Result<()> {
    let test = CliTest::with_session(&[("en.arb", EN)])?;
    let before = test.read_file(".arby/session.json")?;

    let output = test
        .command()
        .args(["push", "--apply", "--project-id", "42"])
        .output()?;
    assert_eq!(output.status.code(), Some(2));
    assert_eq!(stderr(&output), "Error: Private token is required\n");
    assert_eq!(test.read_file(".arby/session.json")?, before);

    Ok(())
}
