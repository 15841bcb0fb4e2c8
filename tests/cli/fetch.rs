use anyhow::Result;

use crate::{CliTest, stderr};

#[test]
fn test_fetch_requires_token() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("fetch").output()?;
    assert_eq!(output.status.code(), Some(2));
    assert_eq!(stderr(&output), "Error: Private token is required\n");
    assert!(!test.root().join(".arby").exists());

    Ok(())
}

#[test]
fn test_fetch_reports_first_missing_parameter() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".arbyrc.json",
        r#"{ "projectId": "42", "filePaths": ["lib/l10n/app_en.arb"] }"#,
    )?;

    let output = test
        .command()
        .arg("fetch")
        .env("ARBY_PRIVATE_TOKEN", "secret")
        .env("ARBY_GITLAB_ENDPOINT", " ")
        .output()?;
    assert_eq!(output.status.code(), Some(2));
    assert_eq!(stderr(&output), "Error: GitLab endpoint is required\n");

    Ok(())
}

#[test]
fn test_fetch_rejects_colliding_locales() -> Result<()> {
    let test = CliTest::new()?;

    let output = test
        .command()
        .args(["fetch", "--project-id", "42", "--file-paths", "l10n/en.arb,l10n/e-n.arb"])
        .env("ARBY_PRIVATE_TOKEN", "secret")
        .output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(
        stderr(&output).contains("lnenarb"),
        "unexpected stderr: {}",
        stderr(&output)
    );

    Ok(())
}
