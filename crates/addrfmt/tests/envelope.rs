//! Integration tests for envelope rendering.

use addrfmt::interpreter::{prune_tokens, render_lines};
use addrfmt::{AddressData, FormatError, FormatInterpreter, RegionDataMap, Token, parse_template};

fn render(address: &AddressData) -> String {
    let interpreter = FormatInterpreter::builder().build().unwrap();
    interpreter.envelope_address(address).unwrap().join("\n")
}

fn render_with_template(template: &str, address: &AddressData) -> Vec<String> {
    let template = parse_template(template).unwrap();
    let tokens = prune_tokens(&template.tokens, address).unwrap();
    render_lines(&tokens, address).unwrap()
}

fn us_address() -> AddressData {
    AddressData::builder()
        .set_region_code("US")
        .set_recipient("Jane Doe")
        .set_organization("Google")
        .set_address("1098 Alta Ave")
        .set_locality("Mountain View")
        .set_admin_area("CA")
        .set_postal_code("94043")
        .build()
}

// =============================================================================
// Built-in regions
// =============================================================================

#[test]
fn test_us_envelope() {
    insta::assert_snapshot!(render(&us_address()), @r"
    Jane Doe
    Google
    1098 Alta Ave
    Mountain View, CA 94043
    ");
}

#[test]
fn test_empty_organization_line_is_dropped() {
    let address = us_address()
        .to_builder()
        .set_organization("")
        .build();
    insta::assert_snapshot!(render(&address), @r"
    Jane Doe
    1098 Alta Ave
    Mountain View, CA 94043
    ");
}

#[test]
fn test_missing_admin_area_drops_its_separator() {
    let address = us_address().to_builder().set_admin_area(" ").build();
    insta::assert_snapshot!(render(&address), @r"
    Jane Doe
    Google
    1098 Alta Ave
    Mountain View 94043
    ");
}

#[test]
fn test_missing_locality_drops_leading_comma() {
    let address = us_address().to_builder().set_locality("").build();
    insta::assert_snapshot!(render(&address), @r"
    Jane Doe
    Google
    1098 Alta Ave
    CA 94043
    ");
}

#[test]
fn test_multi_line_street_address() {
    let address = AddressData::builder()
        .set_region_code("US")
        .set_address("1600 Amphitheatre Ave\n\nRoom 122")
        .set_locality("Mountain View")
        .set_admin_area("CA")
        .set_postal_code("94043")
        .build();
    insta::assert_snapshot!(render(&address), @r"
    1600 Amphitheatre Ave
    Room 122
    Mountain View, CA 94043
    ");
}

#[test]
fn test_japan_local_script() {
    let address = AddressData::builder()
        .set_region_code("JP")
        .set_postal_code("150-0002")
        .set_admin_area("東京都")
        .set_address("渋谷区渋谷2-21-1")
        .set_recipient("山田太郎")
        .build();
    insta::assert_snapshot!(render(&address), @r"
    〒150-0002
    東京都
    渋谷区渋谷2-21-1
    山田太郎
    ");
}

#[test]
fn test_japan_prefix_dropped_without_postal_code() {
    let address = AddressData::builder()
        .set_region_code("JP")
        .set_admin_area("東京都")
        .set_address("渋谷区渋谷2-21-1")
        .build();
    insta::assert_snapshot!(render(&address), @r"
    東京都
    渋谷区渋谷2-21-1
    ");
}

#[test]
fn test_latin_language_tag_selects_latin_format() {
    let address = AddressData::builder()
        .set_region_code("JP")
        .set_language_code("ja-Latn")
        .set_postal_code("150-0002")
        .set_admin_area("Tokyo")
        .set_address("2-21-1 Shibuya")
        .set_recipient("Taro Yamada")
        .build();
    insta::assert_snapshot!(render(&address), @r"
    Taro Yamada
    2-21-1 Shibuya, Tokyo
    150-0002
    ");
}

#[test]
fn test_non_latin_language_tag_keeps_local_format() {
    let address = AddressData::builder()
        .set_region_code("JP")
        .set_language_code("ja")
        .set_postal_code("150-0002")
        .set_admin_area("東京都")
        .build();
    assert_eq!(
        render(&address),
        "〒150-0002\n東京都"
    );
}

#[test]
fn test_sark_uses_guernsey_format() {
    let address = AddressData::builder()
        .set_region_code("CQ")
        .set_address("La Seigneurie")
        .set_locality("Sark")
        .set_postal_code("GY10 1SF")
        .build();
    insta::assert_snapshot!(render(&address), @r"
    La Seigneurie
    Sark
    GUERNSEY
    GY10 1SF
    ");
}

#[test]
fn test_missing_region_uses_default_format() {
    let address = AddressData::builder()
        .set_recipient("Jane Doe")
        .set_address("1 Main St")
        .set_locality("Springfield")
        .set_postal_code("12345")
        .build();
    insta::assert_snapshot!(render(&address), @r"
    Jane Doe
    1 Main St
    Springfield
    ");
}

#[test]
fn test_empty_address_renders_nothing() {
    let address = AddressData::builder().set_region_code("US").build();
    assert_eq!(render(&address), "");
}

// =============================================================================
// Pruning
// =============================================================================

#[test]
fn test_prune_keeps_newlines() {
    let address = AddressData::builder().set_locality("Town").build();
    let template = parse_template("%N%n%C").unwrap();
    let tokens = prune_tokens(&template.tokens, &address).unwrap();
    assert_eq!(tokens, vec![&Token::Newline, &Token::Field('C')]);
}

#[test]
fn test_literal_between_newlines_is_kept() {
    let address = AddressData::builder().set_locality("Town").build();
    assert_eq!(
        render_with_template("%N%nCEDEX%n%C", &address),
        vec!["CEDEX", "Town"]
    );
}

#[test]
fn test_country_is_never_rendered() {
    let address = AddressData::builder()
        .set_region_code("XA")
        .set_address("1 Main St")
        .build();
    assert_eq!(render_with_template("%R%n%A", &address), vec!["1 Main St"]);
}

#[test]
fn test_two_consecutive_empty_fields() {
    let address = AddressData::builder()
        .set_locality("Town")
        .set_postal_code("12345")
        .build();
    assert_eq!(
        render_with_template("%C, %D, %S %Z", &address),
        vec!["Town 12345"]
    );
}

#[test]
fn test_leading_empty_fields() {
    let address = AddressData::builder().set_admin_area("State").build();
    assert_eq!(
        render_with_template("%C, %D, %S", &address),
        vec!["State"]
    );
}

#[test]
fn test_empty_field_between_populated_fields() {
    let address = AddressData::builder()
        .set_locality("Town")
        .set_admin_area("State")
        .build();
    assert_eq!(
        render_with_template("%C, %D, %S", &address),
        vec!["Town, State"]
    );
}

#[test]
fn test_landmark_fields_render_their_values() {
    let address = AddressData::builder()
        .set_landmark_affix("Near")
        .set_landmark_name("Clock Tower")
        .build();
    assert_eq!(
        render_with_template("%F %L%n%T", &address),
        vec!["Near Clock Tower"]
    );
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn test_invalid_region_template() {
    let data = RegionDataMap::from_entries([
        ("ZZ", r#"{"fmt":"%N%n%A"}"#),
        ("XC", r#"{"fmt":"%A%Q"}"#),
    ])
    .unwrap();
    let interpreter = FormatInterpreter::builder()
        .region_data(&data)
        .build()
        .unwrap();
    let address = AddressData::builder().set_region_code("XC").build();
    let err = interpreter.envelope_address(&address).unwrap_err();
    assert!(matches!(err, FormatError::InvalidTemplate { ref region, .. } if region == "XC"));
}
