//! Integration tests for the template tokenizer and metadata decoders.

use std::collections::BTreeSet;

use addrfmt::parser::{
    ParseError, Token, parse_required_fields, parse_template, parse_template_strict,
    parse_width_overrides,
};
use addrfmt::{AddressField, FieldError, WidthType};

// =============================================================================
// Tokenizing
// =============================================================================

#[test]
fn test_escapes_and_literals() {
    let t = parse_template("%n%Axyz").unwrap();
    assert_eq!(
        t.tokens,
        vec![Token::Newline, Token::Field('A'), Token::Literal("xyz".into())]
    );
}

#[test]
fn test_empty_template() {
    let t = parse_template("").unwrap();
    assert!(t.tokens.is_empty());
}

#[test]
fn test_literal_run_is_coalesced() {
    let t = parse_template("AX-%Z %C").unwrap();
    assert_eq!(
        t.tokens,
        vec![
            Token::Literal("AX-".into()),
            Token::Field('Z'),
            Token::Literal(" ".into()),
            Token::Field('C'),
        ]
    );
}

#[test]
fn test_us_template() {
    let t = parse_template("%N%n%O%n%A%n%C, %S %Z").unwrap();
    assert_eq!(t.tokens.len(), 11);
    assert_eq!(t.tokens[7], Token::Literal(", ".into()));
    let fields: Vec<AddressField> = t.fields().map(Result::unwrap).collect();
    assert_eq!(
        fields,
        vec![
            AddressField::Recipient,
            AddressField::Organization,
            AddressField::StreetAddress,
            AddressField::Locality,
            AddressField::AdminArea,
            AddressField::PostalCode,
        ]
    );
}

#[test]
fn test_non_ascii_literal() {
    let t = parse_template("〒%Z%n%S").unwrap();
    assert_eq!(t.tokens[0], Token::Literal("〒".into()));
    assert_eq!(t.tokens[1], Token::Field('Z'));
}

#[test]
fn test_escaped_percent_is_a_field_token() {
    let t = parse_template("%%").unwrap();
    assert_eq!(t.tokens, vec![Token::Field('%')]);
}

#[test]
fn test_display_reproduces_input() {
    for input in ["%N%n%O%n%A%n%C, %S %Z", "〒%Z%n%S%n%A", "plain", "%Q%n"] {
        assert_eq!(parse_template(input).unwrap().to_string(), input);
    }
}

// =============================================================================
// Malformed templates
// =============================================================================

#[test]
fn test_dangling_escape_at_end() {
    let err = parse_template("%C, %").unwrap_err();
    assert_eq!(err, ParseError::DanglingEscape { column: 5 });
    assert_eq!(err.column(), 5);
}

#[test]
fn test_lone_percent() {
    let err = parse_template("%").unwrap_err();
    assert_eq!(err, ParseError::DanglingEscape { column: 1 });
}

#[test]
fn test_unknown_field_code_tokenizes() {
    let t = parse_template("%C%Q").unwrap();
    assert_eq!(t.tokens[1], Token::Field('Q'));
    assert_eq!(
        t.tokens[1].field().unwrap_err(),
        FieldError::UnknownCode('Q')
    );
}

#[test]
fn test_strict_rejects_unknown_field_code() {
    let err = parse_template_strict("ab%C%Q").unwrap_err();
    assert_eq!(
        err,
        ParseError::InvalidField {
            column: 5,
            source: FieldError::UnknownCode('Q'),
        }
    );
}

#[test]
fn test_strict_accepts_known_codes() {
    assert!(parse_template_strict("%N%n%O%n%A%n%C, %S %Z").is_ok());
}

// =============================================================================
// Required fields
// =============================================================================

#[test]
fn test_required_fields_include_country() {
    let required = parse_required_fields("ACSZ").unwrap();
    assert_eq!(
        required,
        BTreeSet::from([
            AddressField::Country,
            AddressField::StreetAddress,
            AddressField::Locality,
            AddressField::AdminArea,
            AddressField::PostalCode,
        ])
    );
}

#[test]
fn test_empty_required_string_is_country_only() {
    assert_eq!(
        parse_required_fields("").unwrap(),
        BTreeSet::from([AddressField::Country])
    );
}

#[test]
fn test_required_unknown_code() {
    assert_eq!(
        parse_required_fields("AQ").unwrap_err(),
        FieldError::UnknownCode('Q')
    );
}

// =============================================================================
// Width overrides
// =============================================================================

#[test]
fn test_width_overrides() {
    assert_eq!(
        parse_width_overrides("%C:L%S:S"),
        Some(vec![('C', WidthType::Long), ('S', WidthType::Short)])
    );
}

#[test]
fn test_width_override_narrow_is_short() {
    assert_eq!(
        parse_width_overrides("%Z:N"),
        Some(vec![('Z', WidthType::Short)])
    );
}

#[test]
fn test_width_overrides_empty_string() {
    assert_eq!(parse_width_overrides(""), Some(vec![]));
}

#[test]
fn test_width_overrides_malformed() {
    for malformed in [
        "%C L", "%C:", "%C:LL", "%C::L", "C:L", "%C:L%S", "%C:Q", "%C:L%", "%n:L",
    ] {
        assert_eq!(parse_width_overrides(malformed), None, "{malformed}");
    }
}

#[test]
fn test_width_overrides_one_bad_segment_invalidates_all() {
    assert_eq!(parse_width_overrides("%C:L%S-S%Z:S"), None);
}
