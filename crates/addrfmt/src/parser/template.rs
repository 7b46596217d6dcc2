//! Format template tokenizer using winnow.
//!
//! `%` always starts a two-character escape: `%n` is a newline and any other
//! `%x` refers to the field with code `x`. Everything else is literal text,
//! and adjacent literal characters form a single token.

use winnow::combinator::{alt, preceded, repeat};
use winnow::prelude::*;
use winnow::token::{any, take_while};

use super::ast::{ESCAPE, NEWLINE_CODE, Template, Token};
use super::error::ParseError;

/// Tokenize a template string.
///
/// Concatenating the tokens' [`Display`](std::fmt::Display) output
/// reproduces `input` exactly.
///
/// # Example
///
/// ```
/// use addrfmt::parser::{Token, parse_template};
///
/// let t = parse_template("%n%Axyz").unwrap();
/// assert_eq!(
///     t.tokens,
///     vec![Token::Newline, Token::Field('A'), Token::Literal("xyz".into())]
/// );
/// ```
pub fn parse_template(input: &str) -> Result<Template, ParseError> {
    let mut remaining = input;
    let tokens: Vec<Token> = match repeat(0.., token).parse_next(&mut remaining) {
        Ok(tokens) => tokens,
        Err(_) => return Err(dangling_escape(input, remaining)),
    };
    if remaining.is_empty() {
        Ok(Template { tokens })
    } else {
        Err(dangling_escape(input, remaining))
    }
}

/// Tokenize a template and check that every escape names a known field.
pub fn parse_template_strict(input: &str) -> Result<Template, ParseError> {
    let template = parse_template(input)?;
    let mut column = 1;
    for token in &template.tokens {
        token
            .field()
            .map_err(|source| ParseError::InvalidField { column, source })?;
        column += token.to_string().chars().count();
    }
    Ok(template)
}

/// The only way tokenizing stops early is a trailing `%`.
fn dangling_escape(original: &str, remaining: &str) -> ParseError {
    let consumed = &original[..original.len() - remaining.len()];
    ParseError::DanglingEscape {
        column: consumed.chars().count() + 1,
    }
}

fn token(input: &mut &str) -> ModalResult<Token> {
    alt((escape, literal)).parse_next(input)
}

/// Parse `%` followed by exactly one character.
fn escape(input: &mut &str) -> ModalResult<Token> {
    preceded(ESCAPE, any)
        .map(|code: char| {
            if code == NEWLINE_CODE {
                Token::Newline
            } else {
                Token::Field(code)
            }
        })
        .parse_next(input)
}

/// Parse a maximal run of characters other than `%`.
fn literal(input: &mut &str) -> ModalResult<Token> {
    take_while(1.., |c: char| c != ESCAPE)
        .map(|text: &str| Token::Literal(text.to_string()))
        .parse_next(input)
}
