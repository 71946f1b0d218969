use std::sync::Arc;

use swc_common::{FileName, GLOBALS, Globals, SourceMap, Span, Spanned};
use swc_ecma_ast::Program;
use swc_ecma_parser::{Parser, StringInput, Syntax, TsSyntax, error::Error as SyntaxError};

use crate::error::{Diagnostic, ParseError};

/// A syntax tree together with the source map needed to locate its spans.
pub struct ParsedSource {
    pub program: Program,
    pub source_map: Arc<SourceMap>,
}

impl ParsedSource {
    /// Build a diagnostic pointing at `span` in this source.
    pub fn diagnostic(&self, span: Span, message: impl Into<String>) -> Diagnostic {
        diagnostic_at(&self.source_map, span, message.into())
    }
}

/// Parse JavaScript or TypeScript source text into a syntax tree.
///
/// The TypeScript grammar is a superset of the JavaScript one, so type
/// annotations never cause a failure. `parse_program` decides between module
/// and script goal from the presence of `import`/`export` statements.
/// Recoverable errors reported by swc are treated as fatal, like any other
/// syntax error: the caller never sees a partially valid tree.
pub fn parse_source(code: &str, file_name: &str) -> Result<ParsedSource, ParseError> {
    let source_map: Arc<SourceMap> = Default::default();

    GLOBALS.set(&Globals::new(), || {
        let source_file = source_map.new_source_file(
            FileName::Custom(file_name.to_string()).into(),
            code.to_string(),
        );

        let syntax = Syntax::Typescript(TsSyntax {
            tsx: false,
            ..Default::default()
        });

        let mut parser = Parser::new(syntax, StringInput::from(&*source_file), None);
        let result = parser.parse_program();
        let mut errors = parser.take_errors();

        let program = match result {
            Ok(program) => Some(program),
            Err(error) => {
                errors.push(error);
                None
            }
        };

        match program {
            Some(program) if errors.is_empty() => Ok(ParsedSource {
                program,
                source_map: source_map.clone(),
            }),
            _ => Err(ParseError {
                diagnostics: errors
                    .iter()
                    .map(|error| to_diagnostic(&source_map, error))
                    .collect(),
            }),
        }
    })
}

fn to_diagnostic(source_map: &SourceMap, error: &SyntaxError) -> Diagnostic {
    diagnostic_at(source_map, error.span(), error.kind().msg().to_string())
}

fn diagnostic_at(source_map: &SourceMap, span: Span, message: String) -> Diagnostic {
    let loc = source_map.lookup_char_pos(span.lo);
    Diagnostic {
        message,
        line: loc.line,
        column: loc.col_display + 1,
    }
}
