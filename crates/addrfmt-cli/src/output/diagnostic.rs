//! Miette diagnostic wrapper for template errors.
//!
//! Note: This module has an exception for `unused_assignments` because miette
//! derive macros read struct fields in generated code that rustc cannot track.
#![allow(unused_assignments)]

use addrfmt::parser::ParseError;
use addrfmt::FieldError;
use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

const FIELD_CODES_HELP: &str =
    "field codes are R, 1, 2, A, S, C, D, Z, X, N, O, T, F and L; %n is a newline";

/// A miette-compatible diagnostic for address format templates.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("template error: {message}")]
#[diagnostic(code(addrfmt::template))]
pub struct TemplateDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("error here")]
    span: SourceSpan,

    message: String,

    #[help]
    help: Option<String>,
}

impl TemplateDiagnostic {
    /// Create a diagnostic pointing at the character a ParseError names.
    pub fn from_parse_error(name: &str, template: &str, err: &ParseError) -> Self {
        let (message, help) = match err {
            ParseError::DanglingEscape { .. } => (
                "'%' at end of template".to_string(),
                Some("every '%' must be followed by a field code or 'n'".to_string()),
            ),
            ParseError::InvalidField { source, .. } => {
                (source.to_string(), Some(FIELD_CODES_HELP.to_string()))
            }
        };

        // Columns count characters, spans count bytes. An escape is two
        // characters; point at the code after the '%'.
        let column = match err {
            ParseError::InvalidField { column, .. } => column + 1,
            ParseError::DanglingEscape { column } => *column,
        };
        let offset = template
            .char_indices()
            .nth(column.saturating_sub(1))
            .map_or(template.len(), |(offset, _)| offset);
        let len = template[offset..].chars().next().map_or(0, char::len_utf8);

        TemplateDiagnostic {
            src: NamedSource::new(name, template.to_string()),
            span: (offset, len).into(),
            message,
            help,
        }
    }

    /// Create a diagnostic covering the whole template.
    pub fn whole_template(name: &str, template: &str, err: &FieldError) -> Self {
        TemplateDiagnostic {
            src: NamedSource::new(name, template.to_string()),
            span: (0, template.len()).into(),
            message: err.to_string(),
            help: None,
        }
    }
}
