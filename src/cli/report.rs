//! Report formatting and printing utilities.
//!
//! This module displays command results in cargo-style format. Kept apart
//! from the core so the library can be used without any terminal output.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::{
    args::OutputFormat,
    commands::{
        CommandResult, CommandSummary, InitSummary, LocaleReport, LocalesSummary, PrepareSummary,
        StatusSummary,
    },
};
use crate::config::CONFIG_FILE_NAME;
use crate::core::translation::PreparedTranslation;
use crate::issues::{Issue, Report, Severity};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print(result: &CommandResult, verbose: bool) {
    print_to(result, verbose, &mut io::stdout().lock());
}

/// Print a command result to a custom writer.
pub fn print_to<W: Write>(result: &CommandResult, verbose: bool, writer: &mut W) {
    match &result.summary {
        CommandSummary::Status(summary) => {
            print_status(summary, verbose, writer);
            if summary.json.is_none() {
                print_summary(result.error_count, result.warning_count, writer);
            }
        }
        CommandSummary::Locales(summary) => print_locales(summary, writer),
        CommandSummary::Prepare(summary) => print_prepare(summary, writer),
        CommandSummary::Init(summary) => print_init(summary, writer),
    }
}

// ============================================================
// status
// ============================================================

fn print_status<W: Write>(summary: &StatusSummary, verbose: bool, writer: &mut W) {
    if let Some(json) = &summary.json {
        let _ = writeln!(writer, "{}", json);
        return;
    }

    for locale in &summary.locales {
        print_locale_report(locale, verbose, writer);
    }
}

fn print_locale_report<W: Write>(locale: &LocaleReport, verbose: bool, writer: &mut W) {
    if locale.issues.is_empty() {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("{}: nothing left to translate", locale.label).green()
        );
        return;
    }

    let _ = writeln!(
        writer,
        "{} {}",
        locale.label.bold(),
        format!("({})", locale.description).dimmed()
    );

    if verbose {
        let _ = writeln!(
            writer,
            "{} of {} pages up to date",
            locale.up_to_date_count, locale.page_count
        );
    }
    let _ = writeln!(writer);

    for issue in &locale.issues {
        print_issue(issue, writer);
    }
}

fn print_issue<W: Write>(issue: &Issue, writer: &mut W) {
    let severity_str = match issue.report_severity() {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: \"{}\"  {}",
        severity_str,
        issue.message(),
        issue.report_rule().to_string().dimmed().cyan()
    );

    let _ = writeln!(writer, "  {} {}", "-->".blue(), issue.location());

    if let Some(details) = issue.details() {
        let _ = writeln!(writer, "  {} {} {}", "=".blue(), "note:".bold(), details);
    }

    if let Some(hint) = issue.hint() {
        let _ = writeln!(writer, "  {} {} {}", "=".blue(), "hint:".bold().cyan(), hint);
    }

    let _ = writeln!(writer); // Empty line between issues
}

/// Missing pages are errors, outdated pages warnings.
fn print_summary<W: Write>(total_errors: usize, total_warnings: usize, writer: &mut W) {
    let total_problems = total_errors + total_warnings;

    if total_problems > 0 {
        let _ = writeln!(
            writer,
            "{} {} problems ({} {}, {} {})",
            FAILURE_MARK.red(),
            total_problems,
            total_errors,
            if total_errors == 1 { "missing page" } else { "missing pages" }.red(),
            total_warnings,
            if total_warnings == 1 {
                "outdated page"
            } else {
                "outdated pages"
            }
            .yellow()
        );
    }
}

// ============================================================
// locales
// ============================================================

fn print_locales<W: Write>(summary: &LocalesSummary, writer: &mut W) {
    if summary.format == OutputFormat::Json {
        if let Ok(json) = serde_json::to_string_pretty(&summary.config) {
            let _ = writeln!(writer, "{}", json);
        }
        return;
    }

    let config = &summary.config;
    let _ = writeln!(writer, "{} {}", "Config:".bold(), summary.config_file);
    let _ = writeln!(writer, "{} {}", "Content:".bold(), summary.content_dir);
    let _ = writeln!(
        writer,
        "{} {}",
        "Default locale:".bold(),
        config.default_locale
    );
    let _ = writeln!(writer);

    let dir_width = column_width(config.locales.keys().map(String::as_str));
    let label_width = column_width(config.locales.values().map(|l| l.label.as_str()));

    for (directory, locale) in config.locales.iter() {
        let _ = writeln!(
            writer,
            "  {}  {}  {}",
            pad(directory, dir_width).cyan(),
            pad(&locale.label, label_width),
            locale.lang.as_deref().unwrap_or("-").dimmed()
        );
    }
}

fn column_width<'a>(values: impl Iterator<Item = &'a str>) -> usize {
    values
        .map(UnicodeWidthStr::width)
        .max()
        .unwrap_or(0)
}

/// Pad `value` to `width` terminal columns.
fn pad(value: &str, width: usize) -> String {
    let padding = width.saturating_sub(UnicodeWidthStr::width(value));
    format!("{}{}", value, " ".repeat(padding))
}

// ============================================================
// prepare / init
// ============================================================

fn print_prepare<W: Write>(summary: &PrepareSummary, writer: &mut W) {
    match &summary.prepared {
        PreparedTranslation::Missing {
            id,
            contents,
            written,
            ..
        } => {
            if *written {
                let _ = writeln!(
                    writer,
                    "{} {}",
                    SUCCESS_MARK.green(),
                    format!("Created {}", summary.translation_path).green()
                );
            } else {
                let _ = writeln!(
                    writer,
                    "{} {} for '{}':",
                    "Would create".yellow().bold(),
                    summary.translation_path,
                    id
                );
                let _ = writeln!(writer);
                let _ = write!(writer, "{}", contents);
                let _ = writeln!(writer, "Run with {} to create this file.", "--apply".cyan());
            }
        }
        PreparedTranslation::Outdated {
            id,
            reference,
            last,
            diff,
            ..
        } => {
            let _ = writeln!(
                writer,
                "{} '{}' changed since its translation at {}",
                "Outdated:".yellow().bold(),
                id,
                summary.translation_path
            );
            let _ = writeln!(
                writer,
                "  {} {} ({}..{})",
                "-->".blue(),
                summary.source_path,
                reference,
                last
            );
            let _ = writeln!(writer);
            let _ = write!(writer, "{}", diff);
        }
    }
}

fn print_init<W: Write>(summary: &InitSummary, writer: &mut W) {
    if summary.created {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
}
