//! Locating the Starlight configuration object inside an Astro configuration.

use swc_ecma_ast::ObjectLit;
use tracing::debug;

use super::{
    STARLIGHT_INTEGRATION,
    helpers::{Shape, Statement, callee_name, find_property, first_argument, statements},
};
use crate::{
    core::parsers::source::ParsedSource,
    error::{ExtractionError, ParseError, Result},
};

/// Walk from the default export down to the object passed to `starlight()`.
///
/// Each structural checkpoint fails with its own [`ExtractionError`].
pub fn find_starlight_config(parsed: &ParsedSource) -> Result<&ObjectLit> {
    let mut default_export = None;

    for statement in statements(&parsed.program) {
        if let Statement::DefaultExport(expr, span) = statement {
            if default_export.is_some() {
                return Err(ParseError {
                    diagnostics: vec![parsed.diagnostic(span, "Duplicate export 'default'")],
                }
                .into());
            }
            default_export = Some(expr);
        }
    }

    let Some(declaration) = default_export else {
        return Err(ExtractionError::MissingDefaultExport.into());
    };

    let Some(Shape::Call(define_config)) = declaration.map(Shape::of) else {
        return Err(ExtractionError::DefaultExportNotCall.into());
    };

    let Shape::Object(astro_config) = first_argument(define_config) else {
        return Err(ExtractionError::InvalidAstroConfig.into());
    };

    let Some(Shape::Array(integrations)) = find_property(astro_config, "integrations") else {
        return Err(ExtractionError::MissingIntegrations.into());
    };

    let starlight = integrations
        .elems
        .iter()
        .flatten()
        .filter(|element| element.spread.is_none())
        .find_map(|element| match Shape::of(&element.expr) {
            Shape::Call(call) if callee_name(call) == Some(STARLIGHT_INTEGRATION) => Some(call),
            _ => None,
        })
        .ok_or(ExtractionError::IntegrationNotFound)?;

    let Shape::Object(starlight_config) = first_argument(starlight) else {
        return Err(ExtractionError::InvalidStarlightConfig.into());
    };

    debug!(
        integrations = integrations.elems.len(),
        "found the Starlight integration configuration"
    );

    Ok(starlight_config)
}
