//! Integration tests for the address value object and its builder.

use addrfmt::{AddressData, AddressField};

// =============================================================================
// Normalization
// =============================================================================

#[test]
fn test_blank_lines_are_dropped() {
    let address = AddressData::builder()
        .set_address("1600 Amphitheatre Ave\n\nRoom 122")
        .build();
    assert_eq!(
        address.address_lines(),
        ["1600 Amphitheatre Ave", "Room 122"]
    );
}

#[test]
fn test_lines_are_trimmed_and_split() {
    let address = AddressData::builder()
        .set_address_lines(["  Line 1 \n\tLine 2", "", "Line 3\n"])
        .build();
    assert_eq!(address.address_lines(), ["Line 1", "Line 2", "Line 3"]);
}

#[test]
fn test_blank_values_are_absent() {
    let address = AddressData::builder()
        .set_locality("   ")
        .set_postal_code("\t")
        .set_recipient(" Jane ")
        .build();
    assert_eq!(address.locality(), None);
    assert_eq!(address.postal_code(), None);
    assert_eq!(address.recipient(), Some("Jane"));
}

#[test]
fn test_blank_language_is_absent() {
    let address = AddressData::builder().set_language_code(" ").build();
    assert_eq!(address.language_code(), None);
}

#[test]
fn test_setting_blank_clears_value() {
    let mut builder = AddressData::builder();
    builder.set_locality("Town");
    assert_eq!(builder.build().locality(), Some("Town"));
    builder.set_locality("");
    assert_eq!(builder.build().locality(), None);
}

// =============================================================================
// Legacy address lines
// =============================================================================

#[test]
fn test_legacy_line_accessors() {
    let address = AddressData::builder()
        .set_address_lines(["Line 1", "Line 2", "Line 3"])
        .build();
    assert_eq!(address.address_line_1(), Some("Line 1"));
    assert_eq!(address.address_line_2().as_deref(), Some("Line 2, Line 3"));
}

#[test]
fn test_legacy_line_two_with_two_lines() {
    let address = AddressData::builder()
        .set_address_lines(["Line 1", "Line 2"])
        .build();
    assert_eq!(address.address_line_2().as_deref(), Some("Line 2"));
}

#[test]
fn test_legacy_line_two_absent() {
    let address = AddressData::builder().set_address("Line 1").build();
    assert_eq!(address.address_line_2(), None);
    assert!(!address.has_value(AddressField::AddressLine2));
}

#[test]
fn test_set_second_line_only() {
    let address = AddressData::builder()
        .set_address_line_2(Some("Suite 5"))
        .build();
    assert_eq!(address.address_lines(), ["Suite 5"]);
}

#[test]
fn test_set_legacy_lines() {
    let mut builder = AddressData::builder();
    builder
        .set_address_line_1(Some("Line 1"))
        .set_address_line_2(Some("Line 2"));
    assert_eq!(builder.build().address_lines(), ["Line 1", "Line 2"]);

    builder.set_address_line_1(None);
    assert_eq!(builder.build().address_lines(), ["Line 2"]);

    builder.set_address_line_2(None);
    assert!(builder.build().address_lines().is_empty());
}

#[test]
fn test_clear_last_line_trims_cleared_slots() {
    let mut builder = AddressData::builder();
    builder
        .set_address_line_1(Some("Line 1"))
        .set_address_line_2(Some("Line 2"))
        .set_address_line_1(None)
        .set_address_line_2(None)
        .set_address_line_1(Some("New"));
    assert_eq!(builder.build().address_lines(), ["New"]);
}

// =============================================================================
// Generic field access
// =============================================================================

#[test]
fn test_set_by_field() {
    let address = AddressData::builder()
        .set(AddressField::Country, Some("CH"))
        .set(AddressField::PostalCode, Some("8001"))
        .set(AddressField::StreetAddress, Some("Bahnhofstrasse 1\nPostfach"))
        .set(AddressField::LandmarkName, Some("Clock"))
        .build();
    assert_eq!(address.region_code(), Some("CH"));
    assert_eq!(
        address.field_value(AddressField::PostalCode).as_deref(),
        Some("8001")
    );
    assert_eq!(
        address.field_value(AddressField::StreetAddress).as_deref(),
        Some("Bahnhofstrasse 1\nPostfach")
    );
    assert_eq!(address.landmark_name(), Some("Clock"));
}

#[test]
fn test_set_street_address_none_clears() {
    let address = AddressData::builder()
        .set_address("1 Main St")
        .set(AddressField::StreetAddress, None)
        .build();
    assert!(address.address_lines().is_empty());
    assert_eq!(address.field_value(AddressField::StreetAddress), None);
}

#[test]
fn test_has_value() {
    let address = AddressData::builder()
        .set_region_code("US")
        .set_address("1 Main St")
        .build();
    assert!(address.has_value(AddressField::Country));
    assert!(address.has_value(AddressField::StreetAddress));
    assert!(address.has_value(AddressField::AddressLine1));
    assert!(!address.has_value(AddressField::Locality));
}

#[test]
fn test_to_builder_round_trips() {
    let address = AddressData::builder()
        .set_region_code("US")
        .set_address_lines(["1 Main St", "Apt 2"])
        .set_locality("Springfield")
        .set_language_code("en")
        .build();
    assert_eq!(address.to_builder().build(), address);
}

#[test]
fn test_display() {
    let address = AddressData::builder()
        .set_region_code("US")
        .set_address_lines(["1 Main St", "Apt 2"])
        .set_language_code("en")
        .build();
    assert_eq!(
        address.to_string(),
        "(AddressData: language=en; country=US; street_address=1 Main St | Apt 2;)"
    );
}

// =============================================================================
// Serde
// =============================================================================

#[test]
fn test_deserialize_normalizes() {
    let address: AddressData = serde_json::from_str(
        r#"{"region_code":"US","address_lines":["1 Main St\n\nApt 2"],"locality":"  "}"#,
    )
    .unwrap();
    assert_eq!(address.address_lines(), ["1 Main St", "Apt 2"]);
    assert_eq!(address.locality(), None);
}

#[test]
fn test_serialize_skips_absent_fields() {
    let address = AddressData::builder()
        .set_region_code("US")
        .set_locality("Springfield")
        .build();
    assert_eq!(
        serde_json::to_string(&address).unwrap(),
        r#"{"region_code":"US","locality":"Springfield"}"#
    );
}
