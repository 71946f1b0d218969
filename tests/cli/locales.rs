use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::{CliTest, stderr, stdout};

#[test]
fn test_locales_text() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("astro.config.mjs", crate::ASTRO_CONFIG)?;

    let output = test.run(&["locales"])?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    insta::assert_snapshot!(stdout(&output), @r"
    Config: astro.config.mjs
    Content: src/content/docs
    Default locale: en

      fr  Français  fr
      ja  日本語    ja
    ");

    Ok(())
}

#[test]
fn test_locales_from_json_import_in_subdirectory() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "website/astro.config.ts",
        r#"import starlight from '@astrojs/starlight';
import locales from './locales.json';

export default defineConfig({ integrations: [starlight({ title: 'Docs', locales })] });
"#,
    )?;
    test.write_file(
        "website/locales.json",
        r#"{ "root": { "label": "English", "lang": "en" }, "pt-br": { "label": "Português do Brasil", "lang": "pt-BR" } }"#,
    )?;

    let output = test.run(&["locales", "--config-dir", "website", "--format", "json"])?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    let json: Value = serde_json::from_str(&stdout(&output))?;
    assert_eq!(
        json,
        json!({
            "defaultLocale": "en",
            "locales": {
                "pt-br": { "label": "Português do Brasil", "lang": "pt-BR" }
            }
        })
    );

    Ok(())
}

#[test]
fn test_locales_with_malformed_config() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("astro.config.mjs", "export default {;")?;

    let output = test.run(&["locales"])?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).starts_with("Error: Failed to parse Astro configuration file: "));

    Ok(())
}

#[test]
fn test_locales_without_starlight_integration() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "astro.config.mjs",
        "export default defineConfig({ integrations: [mdx()] });",
    )?;

    let output = test.run(&["locales"])?;

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(
        stderr(&output),
        "Error: Failed to find the `starlight` integration in the Astro configuration.\n"
    );

    Ok(())
}
