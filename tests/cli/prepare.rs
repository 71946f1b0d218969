use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_prepare_missing_is_a_dry_run_by_default() -> Result<()> {
    let test = CliTest::with_site()?;

    let output = test.run(&["prepare", "fr", "api.md"])?;
    let stdout = stdout(&output);

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(stdout.starts_with("Would create src/content/docs/fr/api.md for 'api.md':\n"));
    assert!(stdout.contains("---\ntitle: API\ndescription: Reference\n---\n\n"));
    assert!(!test.root().join("src/content/docs/fr/api.md").exists());

    Ok(())
}

#[test]
fn test_prepare_missing_apply() -> Result<()> {
    let test = CliTest::with_site()?;

    let output = test.run(&["prepare", "fr", "api.md", "--apply"])?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "✓ Created src/content/docs/fr/api.md\n");
    assert_eq!(
        test.read_file("src/content/docs/fr/api.md")?,
        "---\ntitle: API\ndescription: Reference\n---\n\n"
    );

    Ok(())
}

#[test]
fn test_prepare_outdated_shows_source_diff() -> Result<()> {
    let test = CliTest::with_site()?;

    let output = test.run(&["prepare", "fr", "guide.md"])?;
    let stdout = stdout(&output);

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(stdout.starts_with(
        "Outdated: 'guide.md' changed since its translation at src/content/docs/fr/guide.md\n"
    ));
    assert!(stdout.contains("  --> src/content/docs/guide.md ("));
    assert!(stdout.contains("+More details.\n"));

    Ok(())
}

#[test]
fn test_prepare_up_to_date_page() -> Result<()> {
    let test = CliTest::with_site()?;

    let output = test.run(&["prepare", "fr", "index.md"])?;

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(
        stderr(&output),
        "Error: The page 'index.md' is already up to date in the 'fr' locale.\n"
    );

    Ok(())
}

#[test]
fn test_prepare_unknown_page() -> Result<()> {
    let test = CliTest::with_site()?;

    let output = test.run(&["prepare", "fr", "missing.md"])?;

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(
        stderr(&output),
        "Error: Failed to find a page with id 'missing.md' in the default locale.\n"
    );

    Ok(())
}
