//! Envelope line rendering.
//!
//! Rendering walks the raw template tokens rather than the resolved field
//! order so that punctuation and line breaks survive. Tokens belonging to
//! empty fields are pruned first, together with the literal separators
//! that would otherwise dangle next to them.

use std::mem;

use crate::parser::Token;
use crate::types::{AddressData, AddressField, FieldError};

/// Drop field tokens the address has no value for, and literals left orphaned.
///
/// A literal survives only when the token after it is kept (or is a newline,
/// or there is none) and the token before it was not a dropped field.
pub fn prune_tokens<'t>(
    tokens: &'t [Token],
    address: &AddressData,
) -> Result<Vec<&'t Token>, FieldError> {
    let mut kept: Vec<&Token> = Vec::with_capacity(tokens.len());
    for (index, token) in tokens.iter().enumerate() {
        match token {
            Token::Newline => kept.push(token),
            Token::Field(_) => {
                if has_value(token, address)? {
                    kept.push(token);
                }
            }
            Token::Literal(_) => {
                let next_kept = match tokens.get(index + 1) {
                    None | Some(Token::Newline) => true,
                    Some(next) => has_value(next, address)?,
                };
                let previous_kept = index == 0
                    || !tokens[index - 1].is_field()
                    || kept.last().is_some_and(|last| last.is_field());
                if next_kept && previous_kept {
                    kept.push(token);
                }
            }
        }
    }
    Ok(kept)
}

/// Render pruned tokens into non-empty envelope lines.
///
/// The country is never printed. Street address lines after the first
/// each become a line of their own.
pub fn render_lines(tokens: &[&Token], address: &AddressData) -> Result<Vec<String>, FieldError> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for token in tokens {
        match token {
            Token::Newline => flush(&mut lines, &mut current),
            Token::Literal(text) => current.push_str(text),
            Token::Field(_) => match token.field()? {
                Some(AddressField::Country) | None => {}
                Some(AddressField::StreetAddress) => {
                    if let Some((first, rest)) = address.address_lines().split_first() {
                        current.push_str(first);
                        if !rest.is_empty() {
                            flush(&mut lines, &mut current);
                            lines.extend(rest.iter().cloned());
                        }
                    }
                }
                Some(field) => {
                    if let Some(value) = address.field_value(field) {
                        current.push_str(&value);
                    }
                }
            },
        }
    }
    flush(&mut lines, &mut current);
    Ok(lines)
}

/// Whether `token` stays after pruning. Non-field tokens always do.
fn has_value(token: &Token, address: &AddressData) -> Result<bool, FieldError> {
    Ok(token
        .field()?
        .is_none_or(|field| address.has_value(field)))
}

fn flush(lines: &mut Vec<String>, current: &mut String) {
    if !current.is_empty() {
        lines.push(mem::take(current));
    }
}
