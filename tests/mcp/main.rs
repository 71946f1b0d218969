use std::{
    fs,
    path::{Path, PathBuf},
    process::Command,
};

use anyhow::{Context, Result, bail};
use serde_json::Value;
use tempfile::TempDir;

mod tools;

const BASE_DATE: i64 = 1_704_067_200;
const DAY: i64 = 86_400;

/// Test fixture for MCP integration tests
///
/// Manages a temporary Starlight site inside its own git repository.
pub struct McpTestFixture {
    _temp_dir: TempDir,
    project_root: PathBuf,
}

impl McpTestFixture {
    /// Create an empty test project
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_root = temp_dir.path().canonicalize()?;

        Ok(Self {
            _temp_dir: temp_dir,
            project_root,
        })
    }

    /// A site with French and German locales.
    ///
    /// French has `index.md` up to date and `guide.md` outdated; German has no
    /// translation at all.
    pub fn with_site() -> Result<Self> {
        let fixture = Self::new()?;
        fixture.git(&["init", "-q"], None)?;

        fixture.write_file(
            "astro.config.mjs",
            r#"import starlight from '@astrojs/starlight';

export default defineConfig({
  integrations: [
    starlight({
      title: 'Docs',
      defaultLocale: 'en',
      locales: {
        en: { label: 'English' },
        fr: { label: 'Français', lang: 'fr' },
        de: { label: 'Deutsch' },
      },
    }),
  ],
});
"#,
        )?;
        fixture.write_file("src/content/docs/en/index.md", "---\ntitle: Home\n---\n")?;
        fixture.write_file(
            "src/content/docs/en/guide.md",
            "---\ntitle: Guide\n---\n\nStep one.\n",
        )?;
        fixture.write_file("src/content/docs/fr/index.md", "---\ntitle: Accueil\n---\n")?;
        fixture.write_file(
            "src/content/docs/fr/guide.md",
            "---\ntitle: Guide\n---\n\nÉtape un.\n",
        )?;
        fixture.commit("Initial docs", BASE_DATE)?;

        fixture.write_file(
            "src/content/docs/en/guide.md",
            "---\ntitle: Guide\n---\n\nStep one.\n\nStep two.\n",
        )?;
        fixture.commit("Add step two", BASE_DATE + DAY)?;

        Ok(fixture)
    }

    pub fn write_file(&self, relative_path: &str, content: &str) -> Result<()> {
        let path = self.project_root.join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content)
            .with_context(|| format!("Failed to write file: {}", path.display()))?;
        Ok(())
    }

    /// Write a .starlight-i18n.json config file
    pub fn write_config(&self, content: &Value) -> Result<()> {
        let json_str = serde_json::to_string_pretty(content)?;
        self.write_file(".starlight-i18n.json", &format!("{}\n", json_str))
    }

    fn git(&self, args: &[&str], date: Option<i64>) -> Result<()> {
        let mut command = Command::new("git");
        command
            .args([
                "-c",
                "user.name=Docs Bot",
                "-c",
                "user.email=docs@example.com",
                "-c",
                "commit.gpgsign=false",
            ])
            .args(args)
            .current_dir(&self.project_root);

        if let Some(date) = date {
            let date = format!("{date} +0000");
            command
                .env("GIT_AUTHOR_DATE", &date)
                .env("GIT_COMMITTER_DATE", &date);
        }

        if !command.status().context("Failed to run git")?.success() {
            bail!("git {} failed", args.join(" "));
        }
        Ok(())
    }

    fn commit(&self, message: &str, date: i64) -> Result<()> {
        self.git(&["add", "-A"], None)?;
        self.git(&["commit", "-q", "-m", message], Some(date))
    }

    /// Get the project root path as a string (for MCP parameters)
    pub fn root(&self) -> String {
        self.project_root.to_string_lossy().to_string()
    }

    /// Get the project root path as a Path reference
    pub fn root_path(&self) -> &Path {
        &self.project_root
    }
}

/// Extract the JSON payload of a successful tool call.
pub fn extract_tool_result_json(result: &rmcp::model::CallToolResult) -> Value {
    // Check for errors using is_error field
    if let Some(true) = result.is_error {
        panic!("Tool call returned an error: {:?}", result);
    }

    assert!(
        !result.content.is_empty(),
        "Tool result should have content"
    );

    // Extract text from the content
    let content_item = &result.content[0];
    let text_content = content_item
        .as_text()
        .expect("Tool result content should be text");

    serde_json::from_str(&text_content.text).expect("Tool result should be valid JSON")
}
