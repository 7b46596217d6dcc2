//! Tests for the compiled-in region table.

use addrfmt_data::{DEFAULT_REGION, REGION_DATA, lookup, region_codes};

#[test]
fn table_is_sorted_and_unique() {
    let codes: Vec<&str> = region_codes().collect();
    let mut sorted = codes.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(codes, sorted);
}

#[test]
fn every_code_is_two_uppercase_letters() {
    for (code, _) in REGION_DATA {
        assert_eq!(code.len(), 2, "bad code {code}");
        assert!(code.chars().all(|c| c.is_ascii_uppercase()), "bad code {code}");
    }
}

#[test]
fn default_region_is_present() {
    let zz = lookup(DEFAULT_REGION).unwrap();
    assert!(zz.contains(r#""fmt":"%N%n%O%n%A%n%C""#));
}

#[test]
fn lookup_finds_known_regions() {
    assert!(lookup("US").unwrap().contains("UNITED STATES"));
    assert!(lookup("JP").unwrap().contains("JAPAN"));
    assert!(lookup("GG").unwrap().contains("CHANNEL ISLANDS"));
}

#[test]
fn lookup_misses_unknown_and_lowercase_codes() {
    assert_eq!(lookup("QQ"), None);
    assert_eq!(lookup("us"), None);
    assert_eq!(lookup(""), None);
}

#[test]
fn sark_has_no_entry_of_its_own() {
    assert_eq!(lookup("CQ"), None);
}
