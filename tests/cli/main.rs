use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

use anyhow::{Context, Ok, Result, bail};
use insta_cmd::get_cargo_bin;
use tempfile::TempDir;

mod init;
mod locales;
mod prepare;

const BIN_NAME: &str = "starlight-i18n";

/// 2024-01-01T00:00:00Z, the date of the first commit of a fixture.
pub const BASE_DATE: i64 = 1_704_067_200;
pub const DAY: i64 = 86_400;

pub const ASTRO_CONFIG: &str = r#"import { defineConfig } from 'astro/config';
import starlight from '@astrojs/starlight';

export default defineConfig({
  integrations: [
    starlight({
      title: 'Docs',
      locales: {
        root: { label: 'English', lang: 'en' },
        fr: { label: 'Français', lang: 'fr' },
        ja: { label: '日本語', lang: 'ja' },
      },
    }),
  ],
});
"#;

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    /// A Starlight site with a git history:
    ///
    /// - day 0: English `index.md` and `guide.md`, French translations of both
    /// - day 1: `guide.md` expanded, `api.md` added
    /// - day 2: typo fix in `index.md`
    /// - day 3: Japanese translations of every page
    ///
    /// French ends with `guide.md` outdated and `api.md` missing; Japanese is done.
    pub fn with_site() -> Result<Self> {
        let test = Self::new()?;
        test.git(&["init", "-q"])?;

        test.write_file("astro.config.mjs", ASTRO_CONFIG)?;
        test.write_file(
            "src/content/docs/index.md",
            "---\ntitle: Home\n---\n\nWelcome to the docs.\n",
        )?;
        test.write_file(
            "src/content/docs/guide.md",
            "---\ntitle: Guide\n---\n\nGetting started.\n",
        )?;
        test.write_file(
            "src/content/docs/fr/index.md",
            "---\ntitle: Accueil\n---\n\nBienvenue.\n",
        )?;
        test.write_file(
            "src/content/docs/fr/guide.md",
            "---\ntitle: Guide\n---\n\nPremiers pas.\n",
        )?;
        test.commit("Initial docs", BASE_DATE)?;

        test.write_file(
            "src/content/docs/guide.md",
            "---\ntitle: Guide\n---\n\nGetting started.\n\nMore details.\n",
        )?;
        test.write_file(
            "src/content/docs/api.md",
            "---\ntitle: API\ndescription: Reference\n---\n\nEndpoints.\n",
        )?;
        test.commit("Expand guide and add API reference", BASE_DATE + DAY)?;

        test.write_file(
            "src/content/docs/index.md",
            "---\ntitle: Home\n---\n\nWelcome to the documentation.\n",
        )?;
        test.commit("Fix typo on home page", BASE_DATE + 2 * DAY)?;

        test.write_file("src/content/docs/ja/index.md", "---\ntitle: ホーム\n---\n")?;
        test.write_file("src/content/docs/ja/guide.md", "---\ntitle: ガイド\n---\n")?;
        test.write_file("src/content/docs/ja/api.md", "---\ntitle: API\n---\n")?;
        test.commit("Add Japanese translation", BASE_DATE + 3 * DAY)?;

        Ok(test)
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    /// Run git in the project with a fixed identity.
    pub fn git(&self, args: &[&str]) -> Result<()> {
        let status = Command::new("git")
            .args([
                "-c",
                "user.name=Docs Bot",
                "-c",
                "user.email=docs@example.com",
                "-c",
                "commit.gpgsign=false",
            ])
            .args(args)
            .current_dir(&self.project_dir)
            .status()
            .context("Failed to run git")?;

        if !status.success() {
            bail!("git {} failed", args.join(" "));
        }
        Ok(())
    }

    /// Commit every change with `date` as author and committer date.
    pub fn commit(&self, message: &str, date: i64) -> Result<()> {
        self.git(&["add", "-A"])?;

        let date = format!("{date} +0000");
        let status = Command::new("git")
            .args([
                "-c",
                "user.name=Docs Bot",
                "-c",
                "user.email=docs@example.com",
                "-c",
                "commit.gpgsign=false",
                "commit",
                "-q",
                "-m",
                message,
            ])
            .env("GIT_AUTHOR_DATE", &date)
            .env("GIT_COMMITTER_DATE", &date)
            .current_dir(&self.project_dir)
            .status()
            .context("Failed to run git commit")?;

        if !status.success() {
            bail!("git commit failed");
        }
        Ok(())
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        // git must stay reachable
        if let Some(path) = std::env::var_os("PATH") {
            cmd.env("PATH", path);
        }
        cmd.env("HOME", &self.project_dir);
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd
    }

    pub fn run(&self, args: &[&str]) -> Result<Output> {
        Ok(self.command().args(args).output()?)
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
