//! Generic JSON value: structural round trips and equality.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use serde_json::{json, Value};

use feeds_core::JsonValue;

fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        any::<u64>().prop_map(Value::from),
        (-1.0e9f64..1.0e9).prop_map(|f| json!(f)),
        "\\PC{0,12}".prop_map(Value::String),
    ];
    leaf.prop_recursive(5, 64, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::btree_map("[a-z]{1,6}", inner, 0..6)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

fn hash_of(v: &JsonValue) -> u64 {
    let mut h = DefaultHasher::new();
    v.hash(&mut h);
    h.finish()
}

proptest! {
    #[test]
    fn decode_encode_decode_is_stable(doc in arb_json()) {
        let text = serde_json::to_string(&doc).unwrap();
        let first: JsonValue = serde_json::from_str(&text).unwrap();
        let encoded = serde_json::to_string(&first).unwrap();
        let second: JsonValue = serde_json::from_str(&encoded).unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(hash_of(&first), hash_of(&second));
    }

    #[test]
    fn conversion_from_serde_json_matches_deserialize(doc in arb_json()) {
        let via_from = JsonValue::from(doc.clone());
        let via_serde: JsonValue = serde_json::from_value(doc.clone()).unwrap();
        prop_assert_eq!(&via_from, &via_serde);
        prop_assert_eq!(Value::from(via_from), doc);
    }
}

#[test]
fn key_order_does_not_matter() {
    let a: JsonValue = serde_json::from_str(r#"{"b": 1, "a": [true, null], "c": {"y": 1, "x": 2}}"#).unwrap();
    let b: JsonValue = serde_json::from_str(r#"{"c": {"x": 2, "y": 1}, "a": [true, null], "b": 1}"#).unwrap();
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
    // Emitted sorted.
    assert_eq!(a.to_string(), r#"{"a":[true,null],"b":1,"c":{"x":2,"y":1}}"#);
}

#[test]
fn array_order_matters() {
    let a: JsonValue = serde_json::from_str("[1, 2]").unwrap();
    let b: JsonValue = serde_json::from_str("[2, 1]").unwrap();
    assert_ne!(a, b);
}

#[test]
fn integers_and_floats_stay_distinct() {
    let v: JsonValue = serde_json::from_str(r#"[1, 1.0, -7, 18446744073709551615, 0.1]"#).unwrap();
    assert_eq!(
        v,
        JsonValue::Array(vec![
            JsonValue::Integer(1),
            JsonValue::Float(1.0),
            JsonValue::Integer(-7),
            JsonValue::UInteger(u64::MAX),
            JsonValue::Float(0.1),
        ])
    );
    assert_ne!(JsonValue::Integer(1), JsonValue::Float(1.0));
    assert_eq!(v.to_string(), "[1,1.0,-7,18446744073709551615,0.1]");
}

#[test]
fn duplicate_keys_keep_the_last_value() {
    let v: JsonValue = serde_json::from_str(r#"{"k": 1, "k": 2}"#).unwrap();
    assert_eq!(v.get("k"), Some(&JsonValue::Integer(2)));
}

#[test]
fn negative_zero_hashes_like_zero() {
    let a = JsonValue::Float(0.0);
    let b = JsonValue::Float(-0.0);
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
}

#[test]
fn non_finite_floats_become_null() {
    assert_eq!(JsonValue::from(f64::NAN), JsonValue::Null);
    assert_eq!(JsonValue::from(f64::INFINITY), JsonValue::Null);
}

#[test]
fn accessors() {
    let v: JsonValue = serde_json::from_str(r#"{"s": "x", "n": 3, "f": 1.5, "b": false, "a": [], "z": null}"#).unwrap();
    assert_eq!(v.kind(), "object");
    assert_eq!(v.get("s").and_then(JsonValue::as_str), Some("x"));
    assert_eq!(v.get("n").and_then(JsonValue::as_i64), Some(3));
    assert_eq!(v.get("n").and_then(JsonValue::as_f64), Some(3.0));
    assert_eq!(v.get("f").and_then(JsonValue::as_f64), Some(1.5));
    assert_eq!(v.get("b").and_then(JsonValue::as_bool), Some(false));
    assert_eq!(v.get("a").and_then(JsonValue::as_array).map(<[_]>::len), Some(0));
    assert!(v.get("z").is_some_and(JsonValue::is_null));
    assert_eq!(v.get("missing"), None);
    assert_eq!(JsonValue::Integer(1).get("s"), None);
}
