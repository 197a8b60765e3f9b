use anyhow::Result;

use crate::CliTest;

#[test]
fn test_missing_app_prints_usage() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage:"));

    Ok(())
}

#[test]
fn test_extra_argument_prints_usage() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().args(["maze", "bird"]).output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage:"));

    Ok(())
}

#[test]
fn test_missing_project_root_is_an_error() -> Result<()> {
    let test = CliTest::new()?;

    let output = test
        .command()
        .args(["--project-root", "does-not-exist", "maze"])
        .output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(
        String::from_utf8_lossy(&output.stderr)
            .contains("Project root is not a directory: does-not-exist")
    );
    assert!(!test.root().join("appengine").exists());

    Ok(())
}
