//! Resolving the `locales` property to an object literal.
//!
//! Resolution is a linear scan over the top-level statements, never a symbol
//! table: the last matching variable declaration wins, while a matching JSON
//! import returns as soon as it is reached.

use std::borrow::Cow;

use swc_ecma_ast::{ImportDecl, ImportSpecifier, ObjectLit, Pat, Program};
use tracing::debug;

use super::{
    JsonReader,
    helpers::{Shape, Statement, find_property, statements},
};
use crate::{
    core::parsers::source::parse_source,
    error::{ExtractionError, ImportReadError, Result},
};

/// Find the object literal describing the locales of a Starlight configuration.
pub fn resolve_locales<'a>(
    program: &'a Program,
    starlight_config: &'a ObjectLit,
    reader: &impl JsonReader,
) -> Result<Cow<'a, ObjectLit>> {
    match find_property(starlight_config, "locales") {
        Some(Shape::Object(locales)) => Ok(Cow::Borrowed(locales)),
        Some(Shape::Ident(name)) => resolve_identifier(program, name, reader)?
            .ok_or_else(|| ExtractionError::UnresolvedLocales.into()),
        _ => Err(ExtractionError::MissingLocales.into()),
    }
}

/// Single-hop resolution of `name`: an initializer that is itself an
/// identifier does not count as a match.
fn resolve_identifier<'a>(
    program: &'a Program,
    name: &str,
    reader: &impl JsonReader,
) -> Result<Option<Cow<'a, ObjectLit>>> {
    let mut resolved = None;

    for statement in statements(program) {
        match statement {
            Statement::Import(import) => {
                if let Some(locales) = read_json_import(import, name, reader)? {
                    debug!(identifier = name, "resolved locales from a JSON import");
                    return Ok(Some(Cow::Owned(locales)));
                }
            }
            Statement::Var(var) => {
                for declarator in &var.decls {
                    if let Pat::Ident(binding) = &declarator.name
                        && binding.id.sym.as_str() == name
                        && let Some(init) = &declarator.init
                        && let Shape::Object(locales) = Shape::of(init)
                    {
                        resolved = Some(Cow::Borrowed(locales));
                    }
                }
            }
            Statement::DefaultExport(..) | Statement::Other => {}
        }
    }

    if resolved.is_some() {
        debug!(identifier = name, "resolved locales from a variable declaration");
    }

    Ok(resolved)
}

/// Read the locales object behind `import name from './locales.json'`.
///
/// Returns `None` when the import does not bind `name` as its default import
/// or when its source is not a relative JSON path; the reader is only called
/// once both hold.
fn read_json_import(
    import: &ImportDecl,
    name: &str,
    reader: &impl JsonReader,
) -> Result<Option<ObjectLit>, ImportReadError> {
    let binds_name = import.specifiers.iter().any(|specifier| {
        matches!(specifier, ImportSpecifier::Default(default) if default.local.sym.as_str() == name)
    });
    if !binds_name {
        return Ok(None);
    }

    let Some(path) = import.src.value.as_str() else {
        return Ok(None);
    };
    if !is_relative_json(path) {
        return Ok(None);
    }

    let text = reader
        .read_json(path)
        .map_err(|source| ImportReadError::Read {
            path: path.to_string(),
            source,
        })?;

    if text.trim().is_empty() {
        return Err(ImportReadError::Empty);
    }

    let parsed =
        parse_source(&format!("export default {text}"), path).map_err(ImportReadError::Parse)?;

    match statements(&parsed.program).as_slice() {
        [Statement::DefaultExport(Some(expr), _)] => match Shape::of(expr) {
            Shape::Object(locales) => Ok(Some(locales.clone())),
            _ => Err(ImportReadError::NotAnObject),
        },
        _ => Err(ImportReadError::NotAnObject),
    }
}

fn is_relative_json(path: &str) -> bool {
    path.starts_with('.') && path.ends_with(".json")
}
