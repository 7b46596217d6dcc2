//! Integration tests for lookup key encoding and derivation.

use addrfmt::{AddressData, AddressField, KeyError, KeyType, LookupKey, ScriptType};

fn key(s: &str) -> LookupKey {
    s.parse().unwrap()
}

// =============================================================================
// Decoding
// =============================================================================

#[test]
fn test_decode_data_key() {
    let k = key("data/US/CA/Mountain View");
    assert_eq!(k.key_type(), KeyType::Data);
    assert_eq!(k.depth(), 3);
    assert_eq!(k.value_for_upper_level_field(AddressField::Country), Some("US"));
    assert_eq!(k.value_for_upper_level_field(AddressField::AdminArea), Some("CA"));
    assert_eq!(
        k.value_for_upper_level_field(AddressField::Locality),
        Some("Mountain View")
    );
    assert_eq!(
        k.value_for_upper_level_field(AddressField::DependentLocality),
        None
    );
    assert_eq!(k.language_code(), None);
}

#[test]
fn test_decode_root_key() {
    let k = key("data");
    assert_eq!(k.depth(), 0);
    assert_eq!(k.to_string(), "data");
}

#[test]
fn test_decode_language_suffix() {
    let k = key("data/CA/QC--fr");
    assert_eq!(k.depth(), 2);
    assert_eq!(k.value_for_upper_level_field(AddressField::AdminArea), Some("QC"));
    assert_eq!(k.language_code(), Some("fr"));
    assert_eq!(k.to_string(), "data/CA/QC--fr");
}

#[test]
fn test_decode_trailing_slash() {
    assert_eq!(key("data/US/").to_string(), "data/US");
}

#[test]
fn test_empty_segment_ends_hierarchy() {
    let k = key("data/US//Mountain View");
    assert_eq!(k.depth(), 1);
    assert_eq!(k.to_string(), "data/US");
}

#[test]
fn test_excess_segments_fold_into_dependent_locality() {
    let k = key("data/A/B/C/D/E");
    assert_eq!(k.depth(), 4);
    assert_eq!(
        k.value_for_upper_level_field(AddressField::DependentLocality),
        Some("D/E")
    );
    assert_eq!(k.to_string(), "data/A/B/C/D/E");
}

#[test]
fn test_segments_are_trimmed() {
    assert_eq!(key("data/ US /CA").to_string(), "data/US/CA");
}

#[test]
fn test_wrong_key_type() {
    assert_eq!(
        "foo/US".parse::<LookupKey>().unwrap_err(),
        KeyError::WrongKeyType {
            prefix: "foo".into()
        }
    );
    assert!(matches!(
        "".parse::<LookupKey>(),
        Err(KeyError::WrongKeyType { .. })
    ));
}

#[test]
fn test_prefix_is_case_sensitive() {
    assert!(matches!(
        "DATA/US".parse::<LookupKey>(),
        Err(KeyError::WrongKeyType { .. })
    ));
}

#[test]
fn test_misplaced_language() {
    assert_eq!(
        "data/US--en/CA".parse::<LookupKey>().unwrap_err(),
        KeyError::MisplacedLanguage {
            segment: "CA".into()
        }
    );
}

#[test]
fn test_malformed_language() {
    for malformed in ["data/US--en--fr", "data/--en"] {
        assert!(
            matches!(
                malformed.parse::<LookupKey>(),
                Err(KeyError::MalformedLanguage { .. })
            ),
            "{malformed}"
        );
    }
}

#[test]
fn test_decode_examples_key() {
    let k = key("examples/TW/local/_default");
    assert_eq!(k.key_type(), KeyType::Examples);
    assert_eq!(k.script_type(), ScriptType::Local);
    assert_eq!(k.language_code(), None);
    assert_eq!(k.value_for_upper_level_field(AddressField::Country), Some("TW"));
    assert_eq!(k.to_string(), "examples/TW/local/_default");
}

#[test]
fn test_decode_latin_examples_key() {
    let k = key("examples/JP/latin/ja-Latn");
    assert_eq!(k.script_type(), ScriptType::Latin);
    assert_eq!(k.language_code(), Some("ja-Latn"));
    assert_eq!(k.to_string(), "examples/JP/latin/ja-Latn");
}

#[test]
fn test_examples_key_invalid_script() {
    assert_eq!(
        "examples/TW/Local/_default"
            .parse::<LookupKey>()
            .unwrap_err(),
        KeyError::InvalidScript {
            value: "Local".into()
        }
    );
}

#[test]
fn test_has_valid_key_prefix() {
    assert!(LookupKey::has_valid_key_prefix("data/US"));
    assert!(LookupKey::has_valid_key_prefix("examples/US/local/_default"));
    assert!(!LookupKey::has_valid_key_prefix("invalid/US"));
}

// =============================================================================
// Derived keys
// =============================================================================

#[test]
fn test_parent_key() {
    let parent = key("data/US/CA").parent_key().unwrap().unwrap();
    assert_eq!(parent.to_string(), "data/US");
    assert_eq!(
        parent.value_for_upper_level_field(AddressField::Country),
        Some("US")
    );
    assert_eq!(
        parent.value_for_upper_level_field(AddressField::AdminArea),
        None
    );
}

#[test]
fn test_parent_key_keeps_language() {
    let parent = key("data/CA/QC--fr").parent_key().unwrap().unwrap();
    assert_eq!(parent.to_string(), "data/CA--fr");
}

#[test]
fn test_parent_of_country_is_root() {
    let parent = key("data/US").parent_key().unwrap().unwrap();
    assert_eq!(parent.to_string(), "data");
    assert_eq!(parent.parent_key().unwrap(), None);
}

#[test]
fn test_parent_of_examples_key() {
    assert!(matches!(
        key("examples/US/local/_default").parent_key(),
        Err(KeyError::NotDataKey { .. })
    ));
}

#[test]
fn test_key_for_upper_level_field() {
    let k = key("data/US/CA/Mountain View--en");
    assert_eq!(
        k.key_for_upper_level_field(AddressField::Country)
            .unwrap()
            .unwrap()
            .to_string(),
        "data/US--en"
    );
    assert_eq!(
        k.key_for_upper_level_field(AddressField::Locality)
            .unwrap()
            .unwrap(),
        k
    );
}

#[test]
fn test_key_for_absent_or_foreign_level() {
    let k = key("data/US/CA");
    assert_eq!(
        k.key_for_upper_level_field(AddressField::Locality).unwrap(),
        None
    );
    assert_eq!(
        k.key_for_upper_level_field(AddressField::PostalCode).unwrap(),
        None
    );
}

// =============================================================================
// Builder
// =============================================================================

#[test]
fn test_builder_from_address() {
    let address = AddressData::builder()
        .set_region_code("US")
        .set_admin_area("CA")
        .set_locality("Mountain View")
        .set_language_code("en")
        .build();
    let k = LookupKey::builder(KeyType::Data)
        .set_address_data(&address)
        .build();
    assert_eq!(k.to_string(), "data/US/CA/Mountain View--en");
    assert_eq!(k.script_type(), ScriptType::Local);
}

#[test]
fn test_builder_from_address_stops_at_gap() {
    let address = AddressData::builder()
        .set_region_code("US")
        .set_locality("Mountain View")
        .build();
    let k = LookupKey::builder(KeyType::Data)
        .set_address_data(&address)
        .build();
    assert_eq!(k.to_string(), "data/US");
}

#[test]
fn test_builder_from_latin_address() {
    let address = AddressData::builder()
        .set_region_code("JP")
        .set_language_code("ja-Latn")
        .build();
    let k = LookupKey::builder(KeyType::Examples)
        .set_address_data(&address)
        .build();
    assert_eq!(k.script_type(), ScriptType::Latin);
    assert_eq!(k.to_string(), "examples/JP/latin/ja-Latn");
}

#[test]
fn test_builder_set_node() {
    let mut builder = LookupKey::builder(KeyType::Data);
    builder
        .set_node(AddressField::Country, "US")
        .unwrap()
        .set_node(AddressField::AdminArea, "CA")
        .unwrap();
    assert_eq!(builder.build().to_string(), "data/US/CA");

    builder.set_node(AddressField::Country, "CA").unwrap();
    assert_eq!(builder.build().to_string(), "data/CA/CA");
}

#[test]
fn test_builder_rejects_gaps_and_foreign_fields() {
    let mut builder = LookupKey::builder(KeyType::Data);
    assert_eq!(
        builder
            .set_node(AddressField::Locality, "Mountain View")
            .unwrap_err(),
        KeyError::HierarchyGap {
            field: AddressField::Locality
        }
    );
    assert_eq!(
        builder
            .set_node(AddressField::PostalCode, "94043")
            .unwrap_err(),
        KeyError::NotInHierarchy {
            field: AddressField::PostalCode
        }
    );
}

#[test]
fn test_root_key_never_carries_language() {
    let k = LookupKey::builder(KeyType::Data)
        .set_language_code("en")
        .build();
    assert_eq!(k.to_string(), "data");
}

// =============================================================================
// Equality and serde
// =============================================================================

#[test]
fn test_equality_uses_key_string() {
    let local = key("data/JP");
    let latin = LookupKey::builder(KeyType::Data)
        .set_script(ScriptType::Latin)
        .set_node(AddressField::Country, "JP")
        .unwrap()
        .build();
    assert_eq!(local, latin);
}

#[test]
fn test_serde_as_string() {
    let k = key("data/US/CA--en");
    let json = serde_json::to_string(&k).unwrap();
    assert_eq!(json, r#""data/US/CA--en""#);
    let back: LookupKey = serde_json::from_str(&json).unwrap();
    assert_eq!(back, k);
    assert!(serde_json::from_str::<LookupKey>(r#""nope/US""#).is_err());
}
