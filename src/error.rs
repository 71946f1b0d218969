//! Error taxonomy for the translation status engine.
//!
//! Every fatal condition aborts the whole call chain: there is no partial
//! configuration and no partial status result. Each checkpoint carries its own
//! message so callers can surface it verbatim.

use std::{fmt, io, path::PathBuf};

use thiserror::Error;

use crate::core::locales::STARLIGHT_INTEGRATION;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Extraction(#[from] ExtractionError),
    #[error(transparent)]
    ImportRead(#[from] ImportReadError),
    #[error(transparent)]
    History(#[from] HistoryError),
    #[error(transparent)]
    Invariant(#[from] InvariantViolation),
    #[error(transparent)]
    Translation(#[from] TranslationError),
    #[error("Failed to find a Starlight instance in the current workspace.")]
    ProjectNotFound,
    #[error("The translation status computation was cancelled.")]
    Cancelled,
    #[error("Failed to access '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

/// A single parser diagnostic with a 1-based position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub message: String,
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}:{})", self.message, self.line, self.column)
    }
}

/// Source text is not syntactically valid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Failed to parse Astro configuration file: {}", join_diagnostics(.diagnostics))]
pub struct ParseError {
    pub diagnostics: Vec<Diagnostic>,
}

fn join_diagnostics(diagnostics: &[Diagnostic]) -> String {
    diagnostics
        .iter()
        .map(Diagnostic::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// A required structural checkpoint of the Astro configuration is absent or malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ExtractionError {
    #[error("Failed to find Starlight configuration in the Astro configuration file.")]
    MissingDefaultExport,
    #[error(
        "The default export of the Astro configuration file must be a call to the `defineConfig` function."
    )]
    DefaultExportNotCall,
    #[error(
        "The first argument of the `defineConfig` function must be an object containing the Astro configuration."
    )]
    InvalidAstroConfig,
    #[error("The Astro configuration must contain an `integrations` property that must be an array.")]
    MissingIntegrations,
    #[error("Failed to find the `{}` integration in the Astro configuration.", STARLIGHT_INTEGRATION)]
    IntegrationNotFound,
    #[error(
        "The first argument of the `{}` integration must be an object containing the Starlight configuration.",
        STARLIGHT_INTEGRATION
    )]
    InvalidStarlightConfig,
    #[error("Failed to find locales in Starlight configuration.")]
    MissingLocales,
    #[error("Failed to find valid locales configuration in Starlight configuration.")]
    UnresolvedLocales,
}

/// The JSON import collaborator failed or returned unusable content.
#[derive(Debug, Error)]
pub enum ImportReadError {
    #[error("Failed to read imported JSON locales configuration at '{path}'.")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("The imported JSON locales configuration is empty.")]
    Empty,
    #[error("Failed to parse imported JSON locales configuration.")]
    Parse(#[source] ParseError),
    #[error("The imported JSON locales configuration must be a single object literal.")]
    NotAnObject,
}

/// Version-control history is unavailable for a file.
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("Failed to find the last commit for the file at '{}'.", .0.display())]
    NoCommits(PathBuf),
    #[error("Failed to find commit dates for the file at '{}'.", .0.display())]
    MissingDates(PathBuf),
    #[error("Failed to find a unique git repository.")]
    Repository,
    #[error("Failed to run git {args}: {stderr}")]
    Command { args: String, stderr: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("Failed to find Starlight default locale.")]
    MissingDefaultLocale,
    #[error("Failed to find any Starlight locale to translate.")]
    NoLocaleToTranslate,
    #[error("Failed to find content pages matching the default locale.")]
    MissingDefaultLocalePages,
}

/// A translation cannot be prepared for the requested page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslationError {
    #[error("Unknown locale '{0}'.")]
    UnknownLocale(String),
    #[error("Failed to find a page with id '{0}' in the default locale.")]
    UnknownPage(String),
    #[error("The page '{id}' is already up to date in the '{locale}' locale.")]
    UpToDate { id: String, locale: String },
    #[error("Missing page reference to prepare outdated translation.")]
    MissingPageReference,
    #[error("Failed to find the reference commit to translate '{0}'.")]
    NoReferenceCommit(String),
    #[error("A translation already exists at '{}'.", .0.display())]
    AlreadyExists(PathBuf),
}
