//! Filesystem access used by the project locator, the inventory and the
//! translation workflow.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use colored::Colorize;
use glob::Pattern;
use tracing::warn;
use walkdir::WalkDir;

use crate::{
    error::{Error, Result},
    utils::to_slash_path,
};

/// An entry returned by [`Workspace::read_directory`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub name: String,
    pub is_file: bool,
}

/// Access to the files of a workspace.
pub trait Workspace: Sync {
    /// Absolute root of the workspace.
    fn root(&self) -> &Path;

    fn read_file(&self, path: &Path) -> Result<String>;

    /// Write a file, creating missing parent directories.
    fn write_file(&self, path: &Path, contents: &str) -> Result<()>;

    fn exists(&self, path: &Path) -> bool;

    /// Files below `directory` with one of `extensions`, in a stable order.
    fn find_files(&self, directory: &Path, extensions: &[&str]) -> Vec<PathBuf>;

    /// Entries of a single directory, sorted by name.
    fn read_directory(&self, directory: &Path) -> io::Result<Vec<DirectoryEntry>>;
}

/// A workspace backed by the local filesystem.
///
/// `ignores` are glob patterns matched against paths relative to the root.
pub struct LocalWorkspace {
    root: PathBuf,
    ignores: Vec<Pattern>,
    verbose: bool,
}

impl LocalWorkspace {
    pub fn new(root: impl Into<PathBuf>, ignores: &[String], verbose: bool) -> Self {
        let ignores = ignores
            .iter()
            .filter_map(|pattern| match Pattern::new(pattern) {
                Ok(pattern) => Some(pattern),
                Err(e) => {
                    warn!(pattern = %pattern, error = %e, "skipping invalid ignore pattern");
                    None
                }
            })
            .collect();

        Self {
            root: root.into(),
            ignores,
            verbose,
        }
    }

    fn is_ignored(&self, path: &Path) -> bool {
        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        let relative = to_slash_path(relative);
        self.ignores.iter().any(|pattern| pattern.matches(&relative))
    }
}

impl Workspace for LocalWorkspace {
    fn root(&self) -> &Path {
        &self.root
    }

    fn read_file(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).map_err(|e| Error::io(path, e))
    }

    fn write_file(&self, path: &Path, contents: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }
        fs::write(path, contents).map_err(|e| Error::io(path, e))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn find_files(&self, directory: &Path, extensions: &[&str]) -> Vec<PathBuf> {
        let mut files = Vec::new();
        let mut skipped_count = 0;

        for entry in WalkDir::new(directory).sort_by_file_name() {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    skipped_count += 1;
                    warn!(error = %e, "cannot access path");
                    continue;
                }
            };

            let path = entry.path();
            if !entry.file_type().is_file() || self.is_ignored(path) {
                continue;
            }

            let has_extension = path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| extensions.contains(&ext));

            if has_extension {
                files.push(path.to_path_buf());
            }
        }

        if skipped_count > 0 && self.verbose {
            eprintln!(
                "{} {} path(s) skipped due to access errors",
                "warning:".bold().yellow(),
                skipped_count
            );
        }

        files
    }

    fn read_directory(&self, directory: &Path) -> io::Result<Vec<DirectoryEntry>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(directory)? {
            let entry = entry?;
            entries.push(DirectoryEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                is_file: entry.file_type()?.is_file(),
            });
        }
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }
}
