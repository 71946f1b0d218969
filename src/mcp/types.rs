use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// ============================================================
// Tool Parameters
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetConfigParams {
    /// Absolute path of the project root
    pub project_root_path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetLocalesParams {
    /// Absolute path of the project root
    pub project_root_path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetTranslationStatusParams {
    /// Absolute path of the project root
    pub project_root_path: String,
    /// Only report this locale directory (default: all locales)
    pub locale: Option<String>,
    /// Maximum number of items per locale (default: 20, max: 100)
    pub limit: Option<u32>,
    /// Number of items to skip per locale (default: 0)
    pub offset: Option<u32>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PrepareTranslationParams {
    /// Absolute path of the project root
    pub project_root_path: String,
    /// Locale directory of the translation
    pub locale: String,
    /// Page id relative to the locale directory, e.g. `guides/intro.md`
    pub page_id: String,
}

// ============================================================
// Config Types (get_config)
// ============================================================

/// Configuration DTO for MCP
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDto {
    /// True if config was loaded from a file, false if using defaults
    pub from_file: bool,
    pub config: ConfigValues,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigValues {
    pub config_directories: Vec<String>,
    pub ignores: Vec<String>,
}

impl From<crate::config::Config> for ConfigValues {
    fn from(c: crate::config::Config) -> Self {
        Self {
            config_directories: c.config_directories,
            ignores: c.ignores,
        }
    }
}

// ============================================================
// Locales Types (get_locales)
// ============================================================

/// Result of get_locales operation
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LocalesResult {
    pub config_file: String,
    pub content_dir: String,
    pub default_locale: String,
    pub locales: Vec<LocaleInfo>,
}

/// Information about a single locale
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LocaleInfo {
    pub directory: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
}

// ============================================================
// Status Types (get_translation_status)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TranslationStatusResult {
    pub locales: Vec<LocaleStatusResult>,
}

/// Translation work of one locale
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LocaleStatusResult {
    pub directory: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    pub up_to_date_count: usize,
    pub missing_count: usize,
    pub outdated_count: usize,
    /// Missing and outdated pages only
    pub items: Vec<StatusItem>,
    pub pagination: Pagination,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum StatusKind {
    Missing,
    Outdated,
}

/// A page that needs translation work
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatusItem {
    pub id: String,
    pub status: StatusKind,
    pub source_path: String,
    /// Absent for missing pages
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translation_path: Option<String>,
}

/// Pagination information
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub offset: usize,
    pub limit: usize,
    pub has_more: bool,
}

// ============================================================
// Preparation Types (prepare_translation)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PreparedTranslationResult {
    #[serde(rename_all = "camelCase")]
    Missing {
        id: String,
        source_path: String,
        translation_path: String,
        /// Initial contents of the new translation file
        contents: String,
    },
    #[serde(rename_all = "camelCase")]
    Outdated {
        id: String,
        source_path: String,
        translation_path: String,
        /// Source commit the translation was based on
        reference: String,
        /// Latest source commit
        last: String,
        diff: String,
        /// Source page as it was at `reference`
        reference_source: String,
    },
}
