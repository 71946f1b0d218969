//! Translation work as reportable issues.
//!
//! Each issue is self-contained with all information needed by the CLI
//! reporter: a location, a message, a severity and an optional note and hint.

use std::path::Path;

use enum_dispatch::enum_dispatch;

use crate::core::{LocaleStatuses, PageStatus};

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    OutdatedPage,
    MissingPage,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::OutdatedPage => write!(f, "outdated"),
            Rule::MissingPage => write!(f, "missing"),
        }
    }
}

// ============================================================
// Issue Types
// ============================================================

/// A default-locale page with no translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingPageIssue {
    /// Locale directory key.
    pub locale: String,
    pub id: String,
    /// Display path of the source page.
    pub source_path: String,
    pub hint: String,
}

impl MissingPageIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::MissingPage
    }
}

/// A translation older than the last meaningful change of its source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutdatedPageIssue {
    pub locale: String,
    pub id: String,
    /// Display path of the translated page.
    pub translation_path: String,
    /// Last commit of the translation.
    pub translation_ref: String,
    /// Last commit of the source.
    pub source_ref: String,
    pub hint: String,
}

impl OutdatedPageIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::OutdatedPage
    }
}

#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    Missing(MissingPageIssue),
    Outdated(OutdatedPageIssue),
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Unified interface for the report functions.
#[enum_dispatch]
pub trait Report {
    /// Path shown on the `-->` line.
    fn location(&self) -> &str;

    /// Primary message to display (the page id).
    fn message(&self) -> String;

    fn report_severity(&self) -> Severity;

    fn report_rule(&self) -> Rule;

    /// Optional hint for fixing the issue.
    fn hint(&self) -> Option<&str> {
        None
    }

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }
}

impl Report for MissingPageIssue {
    fn location(&self) -> &str {
        &self.source_path
    }

    fn message(&self) -> String {
        self.id.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn hint(&self) -> Option<&str> {
        Some(&self.hint)
    }

    fn details(&self) -> Option<String> {
        Some(format!("no translation in '{}'", self.locale))
    }
}

impl Report for OutdatedPageIssue {
    fn location(&self) -> &str {
        &self.translation_path
    }

    fn message(&self) -> String {
        self.id.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn hint(&self) -> Option<&str> {
        Some(&self.hint)
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "translated at {}, source changed in {}",
            short_ref(&self.translation_ref),
            short_ref(&self.source_ref)
        ))
    }
}

// ============================================================
// Building issues from statuses
// ============================================================

/// Issues of one locale: outdated pages first, then missing pages, each in
/// status order.
pub fn locale_issues(
    directory: &str,
    statuses: &LocaleStatuses,
    display_path: impl Fn(&Path) -> String,
) -> Vec<Issue> {
    let outdated = statuses.outdated().filter_map(|status| {
        let page = status.page.as_ref()?;
        Some(Issue::Outdated(OutdatedPageIssue {
            locale: directory.to_string(),
            id: status.source.id.clone(),
            translation_path: display_path(&page.file),
            translation_ref: page.changes.last.reference.clone(),
            source_ref: status.source.changes.last.reference.clone(),
            hint: prepare_hint(directory, status),
        }))
    });

    let missing = statuses.missing().map(|status| {
        Issue::Missing(MissingPageIssue {
            locale: directory.to_string(),
            id: status.source.id.clone(),
            source_path: display_path(&status.source.file),
            hint: prepare_hint(directory, status),
        })
    });

    outdated.chain(missing).collect()
}

fn prepare_hint(directory: &str, status: &PageStatus) -> String {
    format!(
        "run `starlight-i18n prepare {} {}`",
        directory, status.source.id
    )
}

fn short_ref(reference: &str) -> &str {
    reference.get(..7).unwrap_or(reference)
}
