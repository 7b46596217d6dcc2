//! Token types for address format templates.

use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::types::{AddressField, FieldError};

/// Escape character that introduces a field reference or newline.
pub const ESCAPE: char = '%';

/// Escape code that marks a line break.
pub const NEWLINE_CODE: char = 'n';

/// A tokenized format template such as `"%N%n%O%n%A%n%C, %S %Z"`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Template {
    pub tokens: Vec<Token>,
}

/// One piece of a format template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// `%n`: ends the current envelope line.
    Newline,
    /// `%x` for any other `x`. The code is resolved to an [`AddressField`]
    /// only when the field is needed, so unknown codes fail at that point.
    Field(char),
    /// A run of literal text between escapes.
    Literal(String),
}

impl Token {
    /// Resolve a field token to its field.
    ///
    /// Returns `Ok(None)` for newline and literal tokens.
    pub fn field(&self) -> Result<Option<AddressField>, FieldError> {
        match self {
            Token::Field(code) => AddressField::from_code(*code).map(Some),
            Token::Newline | Token::Literal(_) => Ok(None),
        }
    }

    pub fn is_field(&self) -> bool {
        matches!(self, Token::Field(_))
    }
}

impl Display for Token {
    /// Writes the token back in template syntax.
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Token::Newline => write!(f, "{ESCAPE}{NEWLINE_CODE}"),
            Token::Field(code) => write!(f, "{ESCAPE}{code}"),
            Token::Literal(text) => f.write_str(text),
        }
    }
}

impl Template {
    /// Every field referenced by the template, in order, duplicates included.
    pub fn fields(&self) -> impl Iterator<Item = Result<AddressField, FieldError>> + '_ {
        self.tokens
            .iter()
            .filter_map(|token| token.field().transpose())
    }
}

impl Display for Template {
    /// Reproduces the source template exactly.
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        self.tokens.iter().try_for_each(|token| write!(f, "{token}"))
    }
}
