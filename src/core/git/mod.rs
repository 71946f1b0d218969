//! Version-control history of content files.
//!
//! - `cli`: `VersionControl` implementation shelling out to `git`

mod cli;

use std::{
    path::{Path, PathBuf},
    sync::LazyLock,
};

use regex::Regex;
use serde::Serialize;

use crate::error::HistoryError;

pub use cli::GitCli;

/// Commit messages matching this pattern do not make a translation outdated.
static IGNORABLE_COMMIT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(en-only|typo|broken link|i18nready|i18nignore)")
        .expect("ignorable commit pattern is valid")
});

/// A commit touching a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    pub hash: String,
    pub message: String,
    /// Committer date as a Unix timestamp.
    pub date: Option<i64>,
}

/// Access to the history of files in a single repository.
pub trait VersionControl: Sync {
    /// Commits touching `path`, most recent first.
    fn log(&self, path: &Path) -> Result<Vec<Commit>, HistoryError>;

    /// Content of `path` at commit `reference`.
    fn show_at_ref(&self, path: &Path, reference: &str) -> Result<String, HistoryError>;

    /// Unified diff of `path` between two commits.
    fn diff(&self, path: &Path, from: &str, to: &str) -> Result<String, HistoryError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GitFileChange {
    pub date: i64,
    #[serde(rename = "ref")]
    pub reference: String,
}

/// The latest commit touching a file and the latest one that matters for
/// translations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GitFileChanges {
    pub last: GitFileChange,
    pub previous: GitFileChange,
}

pub fn is_ignorable_commit(message: &str) -> bool {
    IGNORABLE_COMMIT.is_match(message)
}

/// Compute the changes of `path` from its history.
///
/// `previous` is the most recent commit that is not ignorable, or `last` if
/// every commit is.
pub fn file_changes(
    vcs: &(impl VersionControl + ?Sized),
    path: &Path,
) -> Result<GitFileChanges, HistoryError> {
    let commits = vcs.log(path)?;
    changes_from_log(&commits, path)
}

fn changes_from_log(commits: &[Commit], path: &Path) -> Result<GitFileChanges, HistoryError> {
    let last = commits
        .first()
        .ok_or_else(|| HistoryError::NoCommits(PathBuf::from(path)))?;

    let previous = commits
        .iter()
        .find(|commit| !is_ignorable_commit(&commit.message))
        .unwrap_or(last);

    let (Some(last_date), Some(previous_date)) = (last.date, previous.date) else {
        return Err(HistoryError::MissingDates(PathBuf::from(path)));
    };

    Ok(GitFileChanges {
        last: GitFileChange {
            date: last_date,
            reference: last.hash.clone(),
        },
        previous: GitFileChange {
            date: previous_date,
            reference: previous.hash.clone(),
        },
    })
}

/// The commit a stale translation was based on.
///
/// Walks the log from the most recent commit, skipping undated ones, and
/// stops at the first commit strictly older than `date`. When no commit is
/// older, the oldest dated commit is returned.
pub fn reference_commit_before(commits: &[Commit], date: i64) -> Option<&Commit> {
    let mut current = None;

    for commit in commits {
        let Some(commit_date) = commit.date else {
            continue;
        };

        current = Some(commit);

        if commit_date < date {
            break;
        }
    }

    current
}
