//! Static extraction of the Starlight locales configuration.
//!
//! The Astro configuration file is parsed but never evaluated. Only a small
//! set of shapes is recognized: inline object literals, references to local
//! or exported variables, and default imports of relative JSON files.

mod astro;
mod helpers;
mod resolve;
mod types;


use std::{collections::HashMap, io};

use swc_ecma_ast::ObjectLit;
use tracing::debug;

use crate::{
    core::parsers::source::{ParsedSource, parse_source},
    error::{InvariantViolation, Result},
    utils::OrderedMap,
};

pub use types::{Locale, LocalesConfig, ROOT_LOCALE};

use helpers::{Shape, find_property, properties};

/// Callee name of the Starlight integration in the `integrations` array.
pub const STARLIGHT_INTEGRATION: &str = "starlight";

/// Reads the text of a JSON file imported by the Astro configuration.
///
/// Paths are passed exactly as written in the import declaration, relative to
/// the configuration file.
pub trait JsonReader {
    fn read_json(&self, relative_path: &str) -> io::Result<String>;
}

impl<F> JsonReader for F
where
    F: Fn(&str) -> io::Result<String>,
{
    fn read_json(&self, relative_path: &str) -> io::Result<String> {
        self(relative_path)
    }
}

/// Parse `code` and extract its locales configuration.
pub fn extract_locales_config_from_code(
    code: &str,
    file_name: &str,
    reader: &impl JsonReader,
) -> Result<LocalesConfig> {
    let parsed = parse_source(code, file_name)?;
    extract_locales_config(&parsed, reader)
}

/// Extract the locales configuration from a parsed Astro configuration.
pub fn extract_locales_config(
    parsed: &ParsedSource,
    reader: &impl JsonReader,
) -> Result<LocalesConfig> {
    let starlight_config = astro::find_starlight_config(parsed)?;
    let locales_object = resolve::resolve_locales(&parsed.program, starlight_config, reader)?;
    let all_locales = collect_locales(&locales_object);

    let default_locale = default_locale(starlight_config, &all_locales)
        .ok_or(InvariantViolation::MissingDefaultLocale)?;

    let locales: OrderedMap<Locale> = all_locales
        .into_iter()
        .filter(|(directory, _)| directory != ROOT_LOCALE && *directory != default_locale)
        .collect();

    if locales.is_empty() {
        return Err(InvariantViolation::NoLocaleToTranslate.into());
    }

    debug!(
        default_locale = %default_locale,
        locales = locales.len(),
        "extracted Starlight locales configuration"
    );

    Ok(LocalesConfig {
        default_locale,
        locales,
    })
}

/// Collect every entry of the locales object that is a valid locale.
///
/// Entries whose value is not an object literal, or that lack a string
/// `label`, are skipped.
fn collect_locales(locales: &ObjectLit) -> OrderedMap<Locale> {
    properties(locales)
        .filter_map(|property| {
            let directory = property.key?;
            let Shape::Object(entry) = property.value else {
                return None;
            };

            let record: HashMap<&str, &str> = properties(entry)
                .filter_map(|field| match (field.key, field.value) {
                    (Some(key), Shape::Str(value)) => Some((key, value)),
                    _ => None,
                })
                .collect();

            Locale::from_record(&record).map(|locale| (directory.to_string(), locale))
        })
        .collect()
}

/// An explicit `defaultLocale` string, else the language of the root locale.
///
/// An explicit value that is not a string literal is ignored. An empty
/// result is no default locale at all.
fn default_locale(starlight_config: &ObjectLit, locales: &OrderedMap<Locale>) -> Option<String> {
    let explicit = match find_property(starlight_config, "defaultLocale") {
        Some(Shape::Str(value)) => Some(value.to_string()),
        _ => None,
    };

    explicit
        .or_else(|| locales.get(ROOT_LOCALE).and_then(|root| root.lang.clone()))
        .filter(|locale| !locale.is_empty())
}
