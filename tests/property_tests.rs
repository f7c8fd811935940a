//! Property-based tests for the decode/encode round trip.
//!
//! Generated trees stay inside the round-trippable subset: identifier keys,
//! finite numbers, strings without `]]`, and blocks that are either all
//! positional or all keyed.

use proptest::prelude::*;
use serde::{Deserialize, Serialize};
use serde_luaml::{decode, encode, from_str, to_string, Mode, Table, Value};

fn key() -> impl Strategy<Value = String> {
    "[a-zA-Z_][a-zA-Z0-9_]{0,8}"
        .prop_filter("keywords are not keys", |k| !matches!(k.as_str(), "true" | "false" | "nil"))
}

fn text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 _.,:;!?'\"\\\\\t\n\\[\\]-]{0,16}"
        .prop_filter("\"]]\" cannot appear in a raw string", |s| !s.contains("]]"))
}

fn number() -> impl Strategy<Value = f64> {
    any::<f64>().prop_filter("finite", |n| n.is_finite())
}

fn leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Nil),
        any::<bool>().prop_map(Value::Bool),
        number().prop_map(Value::Number),
        any::<i32>().prop_map(Value::from),
        text().prop_map(Value::String),
    ]
}

fn object(inner: impl Strategy<Value = Value>) -> impl Strategy<Value = Table> {
    prop::collection::vec((key(), inner), 0..6).prop_map(|entries| entries.into_iter().collect())
}

fn tree() -> impl Strategy<Value = Value> {
    leaf().prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::from),
            object(inner).prop_map(Value::Table),
        ]
    })
}

fn table_tree() -> impl Strategy<Value = Value> {
    prop_oneof![
        prop::collection::vec(tree(), 0..6).prop_map(Value::from),
        object(tree()).prop_map(Value::Table),
    ]
}

fn roundtrip<T: Serialize + for<'de> Deserialize<'de> + PartialEq + std::fmt::Debug>(
    value: &T,
) -> bool {
    match to_string(value) {
        Ok(serialized) => match from_str::<T>(&serialized) {
            Ok(deserialized) => *value == deserialized,
            Err(e) => {
                eprintln!("Deserialize failed: {}", e);
                eprintln!("Serialized was: {}", serialized);
                false
            }
        },
        Err(e) => {
            eprintln!("Serialize failed: {}", e);
            false
        }
    }
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Record {
    id: i64,
    label: String,
    score: f64,
    flags: Vec<bool>,
    parent: Option<u32>,
}

proptest! {
    #[test]
    fn prop_table_mode_roundtrip(value in table_tree()) {
        let text = encode(&value, Mode::Table);
        prop_assert_eq!(decode(&text).unwrap(), value, "encoded as:\n{}", text);
    }

    #[test]
    fn prop_global_mode_roundtrip(root in object(tree())) {
        let value = Value::Table(root);
        let text = encode(&value, Mode::Global);
        prop_assert_eq!(decode(&text).unwrap(), value, "encoded as:\n{}", text);
    }

    #[test]
    fn prop_global_mode_scalar_statements(values in prop::collection::vec(leaf(), 0..10)) {
        let value = Value::from(values);
        let text = encode(&value, Mode::Global);
        prop_assert_eq!(decode(&text).unwrap(), value, "encoded as:\n{}", text);
    }

    #[test]
    fn prop_multiline_strings_with_brackets(
        head in "[a-z\\[\\]]{0,6}",
        tail in "[a-z\\[\\]]{0,6}",
    ) {
        let s = format!("{}\n{}", head, tail);
        prop_assume!(!s.contains("]]"));

        let mut root = Table::new();
        root.insert("s", Value::from(s));
        let value = Value::Table(root);
        let text = encode(&value, Mode::Global);
        prop_assert_eq!(decode(&text).unwrap(), value, "encoded as:\n{}", text);
    }

    #[test]
    fn prop_encode_is_deterministic(value in tree()) {
        prop_assert_eq!(encode(&value, Mode::Global), encode(&value, Mode::Global));
        prop_assert_eq!(encode(&value, Mode::Table), encode(&value, Mode::Table));
    }

    #[test]
    fn prop_trailing_comma_is_ignored(values in prop::collection::vec(any::<i32>(), 1..10)) {
        let body = values.iter().map(i32::to_string).collect::<Vec<_>>().join(", ");
        let plain = decode(&format!("{{ {} }}", body)).unwrap();
        let trailing = decode(&format!("{{ {}, }}", body)).unwrap();
        prop_assert_eq!(plain, trailing);
    }

    #[test]
    fn prop_hex_literals(n in any::<u32>()) {
        let value = decode(&format!("n = {:#x}", n)).unwrap();
        prop_assert_eq!(&value["n"], &Value::from(n));
    }

    #[test]
    fn prop_mixed_blocks_fail(k in key(), a in any::<i32>(), b in any::<i32>()) {
        let keyed_first = format!("{{ {} = {}, {} }}", k, a, b);
        let list_first = format!("{{ {}, {} = {} }}", a, k, b);
        prop_assert!(decode(&keyed_first).unwrap_err().is_parse());
        prop_assert!(decode(&list_first).unwrap_err().is_parse());
    }

    #[test]
    fn prop_lexer_never_panics(input in "\\PC{0,64}") {
        let _ = decode(&input);
    }

    #[test]
    fn prop_record_roundtrip(
        id in any::<i32>(),
        label in text(),
        score in number(),
        flags in prop::collection::vec(any::<bool>(), 0..5),
        parent in proptest::option::of(any::<u32>()),
    ) {
        let record = Record { id: id.into(), label, score, flags, parent };
        prop_assert!(roundtrip(&record));
    }

    #[test]
    fn prop_vec_i32(v in prop::collection::vec(any::<i32>(), 0..20)) {
        prop_assert!(roundtrip(&v));
    }
}
