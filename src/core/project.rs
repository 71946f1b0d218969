//! Locating the Starlight site inside a workspace.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::workspace::Workspace;
use crate::error::{Error, Result};

/// Astro configuration file names, in no particular priority.
pub const CONFIG_FILE_NAMES: [&str; 4] = [
    "astro.config.mjs",
    "astro.config.ts",
    "astro.config.cjs",
    "astro.config.js",
];

/// Content directory of a Starlight site, relative to its configuration file.
const CONTENT_DIRECTORY: [&str; 3] = ["src", "content", "docs"];

/// Paths of a located Starlight site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StarlightProject {
    /// The Astro configuration file.
    pub config: PathBuf,
    /// The `src/content/docs` directory next to the configuration file.
    pub content: PathBuf,
    /// The workspace root.
    pub workspace: PathBuf,
}

impl StarlightProject {
    /// Directory JSON imports of the configuration file are relative to.
    pub fn config_directory(&self) -> &Path {
        self.config.parent().unwrap_or(&self.workspace)
    }
}

/// Find the first Astro configuration file in `config_directories`.
///
/// Directories are relative to the workspace root and searched in order; in a
/// directory, the first file entry with a known name wins. Directories that
/// cannot be read are skipped.
pub fn locate_project(
    workspace: &impl Workspace,
    config_directories: &[String],
) -> Result<StarlightProject> {
    for config_directory in config_directories {
        let directory = workspace.root().join(config_directory);

        let entries = match workspace.read_directory(&directory) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(directory = %directory.display(), error = %e, "skipping configuration directory");
                continue;
            }
        };

        let config_file = entries
            .iter()
            .find(|entry| entry.is_file && CONFIG_FILE_NAMES.contains(&entry.name.as_str()));

        if let Some(entry) = config_file {
            let config = directory.join(&entry.name);
            let content = CONTENT_DIRECTORY
                .iter()
                .fold(directory.clone(), |path, segment| path.join(segment));

            debug!(config = %config.display(), "found Astro configuration file");

            return Ok(StarlightProject {
                config,
                content,
                workspace: workspace.root().to_path_buf(),
            });
        }
    }

    Err(Error::ProjectNotFound)
}
