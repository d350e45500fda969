//! Property tests for the attribute codec.
//!
//! Generates arbitrary encodable values (finite numbers, non-empty sets,
//! composites nested well under the depth limit) and checks the wire and
//! JSON round trips.

use itemwire_core::{Number, Value};
use itemwire_wire::{decode_attribute, encode_attribute, WireValue};
use proptest::prelude::*;

fn number_strategy() -> impl Strategy<Value = Number> {
    prop_oneof![
        any::<i64>().prop_map(Number::Int),
        any::<f64>()
            .prop_filter("wire numbers are finite", |f| f.is_finite())
            .prop_map(Number::Float),
    ]
}

fn scalar_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<bool>().prop_map(Value::Bool),
        number_strategy().prop_map(Value::Number),
        "[a-z0-9 ]{1,12}".prop_map(Value::string),
        proptest::collection::vec(any::<u8>(), 0..16).prop_map(Value::bytes),
    ]
}

fn set_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        proptest::collection::btree_set("[a-z]{1,8}", 1..5).prop_map(Value::StringSet),
        proptest::collection::btree_set(number_strategy(), 1..5).prop_map(Value::NumberSet),
        proptest::collection::btree_set(proptest::collection::vec(any::<u8>(), 1..8), 1..5)
            .prop_map(Value::BinarySet),
    ]
}

fn value_strategy() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![scalar_strategy(), set_strategy()];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            proptest::collection::vec(inner.clone(), 0..4).prop_map(Value::List),
            proptest::collection::hash_map("[a-z]{1,8}", inner, 0..4).prop_map(Value::Map),
        ]
    })
}

proptest! {
    #[test]
    fn prop_wire_round_trip(original in value_strategy()) {
        let wire = encode_attribute(&original)
            .expect("generated values are encodable")
            .expect("generated values are never absent");
        let decoded = decode_attribute(&wire).expect("own encoding decodes");
        prop_assert_eq!(decoded, original);
    }

    #[test]
    fn prop_json_round_trip(original in value_strategy()) {
        let wire = encode_attribute(&original)
            .expect("generated values are encodable")
            .expect("generated values are never absent");
        let json = wire.to_json();
        let reparsed = WireValue::from_json(&json).expect("own JSON parses");
        prop_assert_eq!(reparsed, wire);
    }

    #[test]
    fn prop_number_text_round_trips_exactly(n in number_strategy()) {
        let text = n.to_string();
        prop_assert_eq!(text.parse::<Number>().expect("canonical text parses"), n);
    }
}
