//! Parse error types for format templates.

use thiserror::Error;

use crate::types::FieldError;

/// An error that occurred while reading template or metadata syntax.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A `%` with nothing after it.
    #[error("dangling '%' at column {column}: escape has no code")]
    DanglingEscape { column: usize },

    /// A `%x` escape whose code names no field.
    #[error("invalid escape at column {column}: {source}")]
    InvalidField {
        column: usize,
        #[source]
        source: FieldError,
    },
}

impl ParseError {
    /// 1-based column of the offending character.
    pub fn column(&self) -> usize {
        match self {
            ParseError::DanglingEscape { column } | ParseError::InvalidField { column, .. } => {
                *column
            }
        }
    }
}
