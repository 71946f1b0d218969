//! Per-locale translation statuses.

use serde::Serialize;

use super::{
    content::{ContentInventory, Page},
    locales::{Locale, LocalesConfig},
};
use crate::{
    error::{InvariantViolation, Result},
    utils::OrderedMap,
};

/// Translation status of one default-locale page in one locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageStatus {
    pub missing: bool,
    pub outdated: bool,
    pub source: Page,
    /// The translated page, absent only when `missing`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<Page>,
}

impl PageStatus {
    pub fn new(source: &Page, translation: Option<&Page>) -> Self {
        let outdated = translation.is_some_and(|translation| {
            source.changes.previous.date > translation.changes.previous.date
        });

        Self {
            missing: translation.is_none(),
            outdated,
            source: source.clone(),
            page: translation.cloned(),
        }
    }

    pub fn is_up_to_date(&self) -> bool {
        !self.missing && !self.outdated
    }
}

/// Statuses of every default-locale page for one locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocaleStatuses {
    pub locale: Locale,
    pub statuses: Vec<PageStatus>,
}

impl LocaleStatuses {
    pub fn outdated(&self) -> impl Iterator<Item = &PageStatus> {
        self.statuses.iter().filter(|status| status.outdated)
    }

    pub fn missing(&self) -> impl Iterator<Item = &PageStatus> {
        self.statuses.iter().filter(|status| status.missing)
    }

    pub fn up_to_date_count(&self) -> usize {
        self.statuses.iter().filter(|s| s.is_up_to_date()).count()
    }

    /// Nothing is left to translate in this locale.
    pub fn is_done(&self) -> bool {
        self.statuses.iter().all(PageStatus::is_up_to_date)
    }
}

pub type PageStatusesByLocale = OrderedMap<LocaleStatuses>;

/// Compare every configured locale against the default locale's pages.
///
/// Locales keep the configuration order; statuses keep the order of the
/// default locale's pages.
pub fn compute_statuses(
    config: &LocalesConfig,
    inventory: &ContentInventory,
) -> Result<PageStatusesByLocale> {
    let source_pages = inventory
        .get(&config.default_locale)
        .filter(|pages| !pages.is_empty())
        .ok_or(InvariantViolation::MissingDefaultLocalePages)?;

    let statuses = config
        .locales
        .iter()
        .map(|(directory, locale)| {
            let translations = inventory.get(directory);
            let statuses = source_pages
                .iter()
                .map(|(id, source)| {
                    PageStatus::new(source, translations.and_then(|pages| pages.get(id)))
                })
                .collect();

            (
                directory.to_string(),
                LocaleStatuses {
                    locale: locale.clone(),
                    statuses,
                },
            )
        })
        .collect();

    Ok(statuses)
}
