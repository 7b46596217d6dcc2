//! Property tests for the tokenizer, field ordering, rendering and key codec.

use std::collections::HashSet;

use addrfmt::interpreter::{apply_custom_order, prune_tokens, render_lines, template_field_order};
use addrfmt::{
    AddressData, AddressField, FormatInterpreter, LookupKey, RegionDataMap, ScriptType,
    parse_template,
};
use proptest::prelude::*;
use proptest::sample::subsequence;

/// Codes of fields that hold a single value.
const SINGLE_VALUED_CODES: [char; 7] = ['N', 'O', 'C', 'S', 'D', 'Z', 'X'];

fn field_code() -> impl Strategy<Value = char> {
    prop::sample::select(AddressField::ALL.map(AddressField::code).to_vec())
}

fn data_key() -> impl Strategy<Value = String> {
    (
        prop::collection::vec("[A-Za-z0-9][A-Za-z0-9 .]{0,5}[A-Za-z0-9]", 0..=4),
        prop::option::of("[a-z]{2,3}(-[A-Z][a-z]{3})?"),
    )
        .prop_map(|(nodes, language)| {
            let mut key = String::from("data");
            for node in &nodes {
                key.push('/');
                key.push_str(node);
            }
            if let (false, Some(language)) = (nodes.is_empty(), language) {
                key.push_str("--");
                key.push_str(&language);
            }
            key
        })
}

fn examples_key() -> impl Strategy<Value = String> {
    (
        "[A-Z]{2}",
        prop::sample::select(vec!["local", "latin"]),
        prop_oneof![Just("_default".to_string()), "[a-z]{2}(-[A-Z][a-z]{3})?"],
    )
        .prop_map(|(country, script, language)| format!("examples/{country}/{script}/{language}"))
}

proptest! {
    /// Tokens reproduce the input; the only failure is a trailing escape.
    #[test]
    fn tokens_concatenate_to_input(input in "[a-zA-Z %,\n〒]{0,40}") {
        match parse_template(&input) {
            Ok(template) => prop_assert_eq!(template.to_string(), input),
            Err(err) => {
                prop_assert!(input.ends_with('%'));
                prop_assert_eq!(err.column(), input.chars().count());
            }
        }
    }

    /// Field order keeps the first mention of each field and nothing else.
    #[test]
    fn field_order_is_first_seen(codes in prop::collection::vec(field_code(), 0..20)) {
        let template: String = codes.iter().map(|code| format!("%{code}, ")).collect();
        let order = template_field_order(&parse_template(&template).unwrap()).unwrap();

        let mut seen = HashSet::new();
        let expected: Vec<AddressField> = codes
            .iter()
            .filter(|code| seen.insert(**code))
            .map(|code| AddressField::from_code(*code).unwrap())
            .collect();
        prop_assert_eq!(order, expected);
    }

    /// Custom orders naming only fields the template lacks change nothing.
    #[test]
    fn custom_order_of_absent_fields_is_identity(
        present in subsequence(AddressField::ALL.to_vec(), 0..=14),
        shuffle in any::<prop::sample::Index>(),
    ) {
        let mut custom: Vec<AddressField> = AddressField::ALL
            .into_iter()
            .filter(|field| !present.contains(field))
            .collect();
        if !custom.is_empty() {
            let pivot = shuffle.index(custom.len());
            custom.rotate_left(pivot);
        }
        let mut order = present.clone();
        apply_custom_order("XX", &mut order, &custom).unwrap();
        prop_assert_eq!(order, present);
    }

    /// Applying a custom order permutes fields and never adds or drops one.
    #[test]
    fn custom_order_is_a_permutation(
        present in subsequence(AddressField::ALL.to_vec(), 0..=14),
        custom in subsequence(AddressField::ALL.to_vec(), 0..=14).prop_shuffle(),
    ) {
        let mut order = present.clone();
        apply_custom_order("XX", &mut order, &custom).unwrap();

        let mut sorted = order.clone();
        sorted.sort();
        let mut expected = present.clone();
        expected.sort();
        prop_assert_eq!(sorted, expected);

        // Fields outside the custom list keep their slots.
        for (slot, field) in present.iter().enumerate() {
            if !custom.contains(field) {
                prop_assert_eq!(order[slot], *field);
            }
        }
    }

    /// Runs of empty fields between `", "` separators leave no stray separator.
    #[test]
    fn empty_field_runs_leave_no_orphan_separators(
        values in prop::collection::vec(prop::option::of("[a-z]{1,6}"), SINGLE_VALUED_CODES.len()),
    ) {
        let template: Vec<String> = SINGLE_VALUED_CODES.iter().map(|code| format!("%{code}")).collect();
        let template = parse_template(&template.join(", ")).unwrap();

        let mut builder = AddressData::builder();
        for (code, value) in SINGLE_VALUED_CODES.iter().zip(&values) {
            builder.set(AddressField::from_code(*code).unwrap(), value.as_deref());
        }
        let address = builder.build();

        let tokens = prune_tokens(&template.tokens, &address).unwrap();
        let lines = render_lines(&tokens, &address).unwrap();
        let present: Vec<&str> = values.iter().flatten().map(String::as_str).collect();
        if present.is_empty() {
            prop_assert!(lines.is_empty());
        } else {
            prop_assert_eq!(lines, vec![present.join(", ")]);
        }
    }

    /// Decoding then encoding a canonical data key is the identity.
    #[test]
    fn data_key_round_trip(key in data_key()) {
        let decoded: LookupKey = key.parse().unwrap();
        prop_assert_eq!(decoded.to_string(), key);
    }

    /// Decoding then encoding a canonical examples key is the identity.
    #[test]
    fn examples_key_round_trip(key in examples_key()) {
        let decoded: LookupKey = key.parse().unwrap();
        prop_assert_eq!(decoded.to_string(), key);
    }
}

#[test]
fn builtin_field_orders_have_no_duplicates() {
    let interpreter = FormatInterpreter::builder().build().unwrap();
    for region in RegionDataMap::builtin().region_codes() {
        for script in [ScriptType::Local, ScriptType::Latin] {
            let order = interpreter.address_field_order(script, region).unwrap();
            let unique: HashSet<AddressField> = order.iter().copied().collect();
            assert_eq!(unique.len(), order.len(), "{region} {script}");
        }
    }
}
