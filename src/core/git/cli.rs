use std::{
    path::{Path, PathBuf},
    process::Command,
};

use tracing::debug;

use super::{Commit, VersionControl};
use crate::{error::HistoryError, utils::to_slash_path};

const FIELD_SEPARATOR: char = '\x1f';
const RECORD_SEPARATOR: char = '\x1e';

/// `git log` format: hash, committer timestamp and full message per record.
const LOG_FORMAT: &str = "--format=%H%x1f%ct%x1f%B%x1e";

/// History backed by the `git` executable.
///
/// The repository top level is resolved once, when the handle is created.
#[derive(Debug, Clone)]
pub struct GitCli {
    top_level: PathBuf,
}

impl GitCli {
    /// Find the repository containing `directory`.
    pub fn discover(directory: &Path) -> Result<Self, HistoryError> {
        let output = Command::new("git")
            .args(["rev-parse", "--show-toplevel"])
            .current_dir(directory)
            .output()
            .map_err(|_| HistoryError::Repository)?;

        if !output.status.success() {
            return Err(HistoryError::Repository);
        }

        let top_level = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if top_level.is_empty() {
            return Err(HistoryError::Repository);
        }

        debug!(top_level = %top_level, "found git repository");

        Ok(Self {
            top_level: PathBuf::from(top_level),
        })
    }

    pub fn top_level(&self) -> &Path {
        &self.top_level
    }

    /// Path of `path` relative to the top level, as git expects in pathspecs
    /// and `<rev>:<path>` arguments.
    fn repository_path(&self, path: &Path) -> String {
        let relative = path.strip_prefix(&self.top_level).unwrap_or(path);
        to_slash_path(relative)
    }

    fn run(&self, args: &[&str]) -> Result<String, HistoryError> {
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.top_level)
            .output()
            .map_err(|e| HistoryError::Command {
                args: args.join(" "),
                stderr: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(HistoryError::Command {
                args: args.join(" "),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl VersionControl for GitCli {
    fn log(&self, path: &Path) -> Result<Vec<Commit>, HistoryError> {
        let path = self.repository_path(path);
        let output = self.run(&["log", LOG_FORMAT, "--", &path])?;
        Ok(parse_log(&output))
    }

    fn show_at_ref(&self, path: &Path, reference: &str) -> Result<String, HistoryError> {
        let object = format!("{reference}:{}", self.repository_path(path));
        self.run(&["show", &object])
    }

    fn diff(&self, path: &Path, from: &str, to: &str) -> Result<String, HistoryError> {
        let path = self.repository_path(path);
        self.run(&["diff", from, to, "--", &path])
    }
}

/// Parse the output of `git log` produced with [`LOG_FORMAT`].
fn parse_log(output: &str) -> Vec<Commit> {
    output
        .split(RECORD_SEPARATOR)
        .map(|record| record.trim_start_matches('\n'))
        .filter(|record| !record.is_empty())
        .filter_map(|record| {
            let mut fields = record.splitn(3, FIELD_SEPARATOR);
            let hash = fields.next()?.trim();
            let date = fields.next()?.trim().parse().ok();
            let message = fields.next().unwrap_or_default().trim_end();

            Some(Commit {
                hash: hash.to_string(),
                message: message.to_string(),
                date,
            })
        })
        .collect()
}
