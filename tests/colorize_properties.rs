//! Property-based tests for the colorizer.
//!
//! The colorizer may only add escape codes: stripping them must give back the
//! input, line for line.

use proptest::prelude::*;
use utl::color::{strip_ansi, Color, Palette};
use utl::document::{json_to_bytes, yaml_to_bytes};
use utl::value::Value;
use utl::yaml::{colorize, tokenize, Colorizer};

fn arb_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        (-1.0e6..1.0e6f64).prop_map(Value::Float),
        "[a-zA-Z0-9 _.:#&*'\"-]{0,16}".prop_map(Value::String),
        "[a-z]{1,6}(\n[a-z ]{0,6}){1,3}".prop_map(Value::String),
    ];
    leaf.prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::vec(("[a-z]{1,8}", inner), 0..6)
                .prop_map(|pairs| Value::Object(pairs.into_iter().collect())),
        ]
    })
}

fn newlines(s: &str) -> usize {
    s.matches('\n').count()
}

// ============================================================================
// Arbitrary text
// ============================================================================

proptest! {
    /// Token origins partition the input
    #[test]
    fn origins_concatenate_to_input(text in "[^\\x1b]{0,200}") {
        let tokens = tokenize(&text);
        let joined: String = tokens.iter().map(|t| t.origin()).collect();
        prop_assert_eq!(joined, text);
    }

    /// Stripping escape codes gives back the input, even for non-YAML text
    #[test]
    fn strip_recovers_any_text(text in "[^\\x1b]{0,200}") {
        let colored = colorize(text.as_bytes());
        prop_assert_eq!(strip_ansi(&colored), text);
    }

    /// Line breaks are never added or removed
    #[test]
    fn line_count_preserved_for_any_text(text in "[^\\x1b]{0,200}") {
        let colored = colorize(text.as_bytes());
        prop_assert_eq!(newlines(&colored), newlines(&text));
    }

    /// A monochrome palette reproduces the input exactly
    #[test]
    fn monochrome_is_identity(text in "[^\\x1b]{0,200}") {
        let colored = Colorizer::new(Palette::monochrome()).colorize(text.as_bytes());
        prop_assert_eq!(colored, text);
    }
}

// ============================================================================
// Serialized documents
// ============================================================================

proptest! {
    #[test]
    fn yaml_documents_round_trip(value in arb_value()) {
        let yaml = String::from_utf8(yaml_to_bytes(&value).unwrap()).unwrap();
        let colored = colorize(yaml.as_bytes());
        prop_assert_eq!(strip_ansi(&colored), yaml.clone());
        prop_assert_eq!(newlines(&colored), newlines(&yaml));
    }

    #[test]
    fn json_documents_round_trip(value in arb_value(), indent in 0usize..5) {
        let json = String::from_utf8(json_to_bytes(&value, indent).unwrap()).unwrap();
        let colored = colorize(json.as_bytes());
        prop_assert_eq!(strip_ansi(&colored), json.clone());
        prop_assert_eq!(newlines(&colored), newlines(&json));
    }

    /// In pretty JSON every key is painted as a key and every integer as a
    /// number
    #[test]
    fn json_keys_and_numbers_colored(
        pairs in prop::collection::vec(("[a-z]{1,8}", any::<i64>()), 1..8)
    ) {
        let object = Value::Object(
            pairs.iter().map(|(k, n)| (k.clone(), Value::Int(*n))).collect()
        );
        let json = String::from_utf8(json_to_bytes(&object, 2).unwrap()).unwrap();
        let colored = colorize(json.as_bytes());
        for (key, n) in object.as_object().unwrap() {
            let key_span = Color::LightBlue.paint(&format!("  \"{}\"", key));
            let num_span = match n {
                Value::Int(n) => Color::LightMagenta.paint(&format!(" {}", n)),
                _ => unreachable!(),
            };
            prop_assert!(colored.contains(&key_span), "key {} not painted in {:?}", key, colored);
            prop_assert!(colored.contains(&num_span), "number {:?} not painted", n);
        }
    }
}
