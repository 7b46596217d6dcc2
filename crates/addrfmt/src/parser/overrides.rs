//! Decoders for the `require` and `width_overrides` metadata strings.

use std::collections::BTreeSet;

use super::ast::Token;
use super::template::parse_template;
use crate::types::{AddressField, FieldError, WidthType};

const WIDTH_SEPARATOR: char = ':';

/// Decode a `require` string such as `"ACSZ"` into the required fields.
///
/// Each character is a field code. The country is always required, whatever
/// the string says.
pub fn parse_required_fields(require: &str) -> Result<BTreeSet<AddressField>, FieldError> {
    let mut required = BTreeSet::from([AddressField::Country]);
    for code in require.chars() {
        required.insert(AddressField::from_code(code)?);
    }
    Ok(required)
}

/// Decode a `width_overrides` string such as `"%C:L%S:S"`.
///
/// The string is a sequence of `%<field code>:<width code>` segments.
/// Returns `None` if any segment is malformed: a missing or misplaced `:`,
/// an empty or multi-character width, or an unknown width code. One bad
/// segment invalidates the whole string. Field codes are returned
/// unresolved, so a code that names no field simply never matches.
///
/// # Example
///
/// ```
/// use addrfmt::WidthType;
/// use addrfmt::parser::parse_width_overrides;
///
/// let overrides = parse_width_overrides("%C:L%S:S").unwrap();
/// assert_eq!(overrides, vec![('C', WidthType::Long), ('S', WidthType::Short)]);
/// assert_eq!(parse_width_overrides("%C L"), None);
/// ```
pub fn parse_width_overrides(overrides: &str) -> Option<Vec<(char, WidthType)>> {
    let template = parse_template(overrides).ok()?;
    let mut tokens = template.tokens.iter();
    let mut decoded = Vec::new();
    while let Some(token) = tokens.next() {
        let Token::Field(code) = token else {
            return None;
        };
        let Some(Token::Literal(value)) = tokens.next() else {
            return None;
        };
        let mut chars = value.chars();
        let (Some(WIDTH_SEPARATOR), Some(width), None) = (chars.next(), chars.next(), chars.next())
        else {
            return None;
        };
        decoded.push((*code, WidthType::from_code(width).ok()?));
    }
    Some(decoded)
}
