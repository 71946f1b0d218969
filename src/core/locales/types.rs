use std::collections::HashMap;

use serde::Serialize;

use crate::utils::OrderedMap;

/// Directory key reserved for the default locale's unprefixed content.
pub const ROOT_LOCALE: &str = "root";

/// A configured Starlight locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Locale {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
}

impl Locale {
    pub fn new(label: impl Into<String>, lang: Option<&str>) -> Self {
        Self {
            label: label.into(),
            lang: lang.map(str::to_string),
        }
    }

    /// Build a locale from the string-valued properties of a locale entry.
    ///
    /// Returns `None` when the record has no `label`: such entries are not
    /// locales and are filtered out rather than reported.
    pub fn from_record(record: &HashMap<&str, &str>) -> Option<Self> {
        let label = record.get("label")?;
        Some(Self::new(*label, record.get("lang").copied()))
    }

    /// Name shown next to the label: the language tag, or the directory key.
    pub fn description<'a>(&'a self, directory: &'a str) -> &'a str {
        self.lang.as_deref().unwrap_or(directory)
    }
}

/// The translatable locales of a Starlight site.
///
/// `locales` never contains [`ROOT_LOCALE`] nor the default locale key and is
/// never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalesConfig {
    pub default_locale: String,
    pub locales: OrderedMap<Locale>,
}

impl LocalesConfig {
    /// Whether `directory` names a locale whose content lives in its own subdirectory.
    pub fn is_locale_directory(&self, directory: &str) -> bool {
        directory == self.default_locale || self.locales.contains_key(directory)
    }
}
