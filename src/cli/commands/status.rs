use std::time::Duration;

use anyhow::{Context, Result};

use super::super::args::{OutputFormat, StatusCommand};
use super::{
    CommandResult, CommandSummary, LocaleReport, StatusSummary, helper::finish,
};
use crate::{
    core::{Cancellation, PageStatusesByLocale, StatusContext},
    error::TranslationError,
    issues::locale_issues,
};

pub fn status(cmd: StatusCommand) -> Result<CommandResult> {
    let ctx = StatusContext::new(&cmd.common)?;

    let cancellation = match cmd.timeout {
        Some(seconds) => Cancellation::with_timeout(Duration::from_secs(seconds)),
        None => Cancellation::none(),
    };

    let (_, statuses) = ctx.get_content_pages_statuses(&cancellation)?;
    let statuses = select_locales(statuses, &cmd.locales)?;

    let json = match cmd.format {
        OutputFormat::Json => Some(
            serde_json::to_string_pretty(&statuses)
                .context("Failed to serialize translation statuses.")?,
        ),
        OutputFormat::Text => None,
    };

    let locales = statuses
        .iter()
        .map(|(directory, locale_statuses)| LocaleReport {
            label: locale_statuses.locale.label.clone(),
            description: locale_statuses.locale.description(directory).to_string(),
            page_count: locale_statuses.statuses.len(),
            up_to_date_count: locale_statuses.up_to_date_count(),
            issues: locale_issues(directory, locale_statuses, |path| ctx.display_path(path)),
        })
        .collect();

    Ok(finish(
        CommandSummary::Status(StatusSummary { locales, json }),
        true,
    ))
}

/// Keep the requested locales, in configuration order. No request keeps all.
fn select_locales(
    statuses: PageStatusesByLocale,
    requested: &[String],
) -> Result<PageStatusesByLocale, TranslationError> {
    if let Some(unknown) = requested.iter().find(|l| !statuses.contains_key(*l)) {
        return Err(TranslationError::UnknownLocale(unknown.clone()));
    }

    if requested.is_empty() {
        return Ok(statuses);
    }

    Ok(statuses
        .into_iter()
        .filter(|(directory, _)| requested.contains(directory))
        .collect())
}
