use crate::{
    core::{locales::LocalesConfig, translation::PreparedTranslation},
    issues::Issue,
};

use super::super::args::OutputFormat;

#[derive(Debug)]
pub enum CommandSummary {
    Status(StatusSummary),
    Locales(LocalesSummary),
    Prepare(PrepareSummary),
    Init(InitSummary),
}

/// Translation work of one locale.
#[derive(Debug)]
pub struct LocaleReport {
    pub label: String,
    pub description: String,
    pub page_count: usize,
    pub up_to_date_count: usize,
    pub issues: Vec<Issue>,
}

#[derive(Debug)]
pub struct StatusSummary {
    pub locales: Vec<LocaleReport>,
    /// Pretty JSON of the statuses when `--format json` was requested.
    pub json: Option<String>,
}

#[derive(Debug)]
pub struct LocalesSummary {
    pub format: OutputFormat,
    pub config_file: String,
    pub content_dir: String,
    pub config: LocalesConfig,
}

#[derive(Debug)]
pub struct PrepareSummary {
    pub prepared: PreparedTranslation,
    pub source_path: String,
    pub translation_path: String,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running starlight-i18n commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    pub warning_count: usize,
    /// If true, exit code 1 should be returned when error_count > 0.
    /// If false, always exit 0.
    pub exit_on_errors: bool,
}
