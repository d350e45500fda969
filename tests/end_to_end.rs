//! End-to-end tests across the facade: native values through the wire
//! codec to transport JSON and back, with and without a record schema.

use itemwire::prelude::*;
use serde_json::json;
use std::collections::HashMap;

fn map(entries: Vec<(&str, Value)>) -> Value {
    Value::Map(
        entries
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect(),
    )
}

// === Raw codec surface ===

#[test]
fn test_composite_attribute_renders_expected_json() {
    let native = map(vec![
        ("k1", Value::string("v1")),
        ("k2", Value::List(vec![Value::int(1), Value::int(2)])),
    ]);
    let wire = encode_attribute(&native).unwrap().unwrap();
    assert_eq!(
        wire.to_json(),
        json!({
            "M": {
                "k1": {"S": "v1"},
                "k2": {"L": [{"N": "1"}, {"N": "2"}]},
            }
        })
    );
}

#[test]
fn test_text_set_renders_sorted() {
    let wire = encode_attribute(&Value::string_set(["b", "a"]))
        .unwrap()
        .unwrap();
    assert_eq!(wire.to_json(), json!({"SS": ["a", "b"]}));
}

#[test]
fn test_transport_json_parses_and_decodes() {
    let wire = WireValue::from_json(&json!({"M": {"x": {"N": "5"}}})).unwrap();
    let value = decode_attribute(&wire).unwrap();
    assert_eq!(value, map(vec![("x", Value::int(5))]));
}

#[test]
fn test_booleans_stay_first_class_when_nested() {
    let native = map(vec![("public", Value::Bool(true))]);
    let wire = encode_attribute(&native).unwrap().unwrap();
    assert_eq!(wire.to_json(), json!({"M": {"public": {"BOOL": true}}}));
    assert_eq!(decode_attribute(&wire).unwrap(), native);
}

#[test]
fn test_malformed_and_unknown_documents_are_rejected() {
    use itemwire_core::Error as CodecError;

    assert!(matches!(
        WireValue::from_json(&json!({"S": "x", "N": "1"})),
        Err(CodecError::MalformedEntry(_))
    ));
    assert_eq!(
        WireValue::from_json(&json!({"X": "boom"})),
        Err(CodecError::UnknownTag("X".to_string()))
    );
}

#[test]
fn test_depth_limit_holds_for_inbound_json() {
    use itemwire_core::Error as CodecError;

    let mut doc = json!({"N": "0"});
    for _ in 0..(itemwire::MAX_DEPTH + 1) {
        doc = json!({ "L": [doc] });
    }
    assert!(matches!(
        WireValue::from_json(&doc),
        Err(CodecError::DepthExceeded(_))
    ));
}

// === Record pipeline ===

fn thread_schema() -> RecordSchema {
    RecordSchema::new(vec![
        AttributeDef::new("forum_name", AttributeKind::String).hash_key(),
        AttributeDef::new("subject", AttributeKind::String).range_key(),
        AttributeDef::new("views", AttributeKind::Number).default_value(0i64),
        AttributeDef::new("tags", AttributeKind::StringSet).nullable(),
        AttributeDef::new("test_map", AttributeKind::Map).nullable(),
        AttributeDef::new("test_list", AttributeKind::List).nullable(),
        AttributeDef::new("public", AttributeKind::Boolean).nullable(),
    ])
    .unwrap()
}

#[test]
fn test_record_through_transport_json_and_back() {
    let schema = thread_schema();

    let mut values = HashMap::new();
    values.insert("forum_name".to_string(), Value::string("Test_map"));
    values.insert("subject".to_string(), Value::string("subject 3"));
    values.insert("tags".to_string(), Value::string_set(["foo", "bar"]));
    values.insert(
        "test_map".to_string(),
        map(vec![
            ("k1", Value::string("v1")),
            ("k2", Value::Bool(true)),
            ("k3", map(vec![("k3k1", Value::string("k3v1"))])),
            ("k4", Value::List(vec![Value::string("1"), Value::int(2)])),
        ]),
    );
    values.insert(
        "test_list".to_string(),
        Value::List(vec![Value::string("12"), Value::string("13"), Value::int(14)]),
    );
    values.insert("public".to_string(), Value::Bool(true));

    // Serialize and push through the JSON transport representation.
    let item = schema.serialize_record(&values).unwrap();
    let transport: HashMap<String, serde_json::Value> = item
        .iter()
        .map(|(name, wire)| (name.clone(), wire.to_json()))
        .collect();

    // A store would hand this exact shape back.
    let returned: HashMap<String, WireValue> = transport
        .iter()
        .map(|(name, doc)| (name.clone(), WireValue::from_json(doc).unwrap()))
        .collect();
    let decoded = schema.deserialize_record(&returned).unwrap();

    // The default materialized at write time.
    let mut expected = values;
    expected.insert("views".to_string(), Value::int(0));
    assert_eq!(decoded, expected);
}

#[test]
fn test_schema_errors_surface_through_unified_error() {
    let schema = thread_schema();
    let values = HashMap::new();

    let result: itemwire::Result<_> = schema.serialize_record(&values).map_err(Into::into);
    assert_eq!(
        result.err(),
        Some(itemwire::Error::Schema(SchemaError::MissingAttribute(
            "forum_name".to_string()
        )))
    );
}

#[test]
fn test_codec_errors_surface_through_unified_error() {
    let schema = thread_schema();
    let mut values = HashMap::new();
    values.insert("forum_name".to_string(), Value::string("f"));
    values.insert("subject".to_string(), Value::string("s"));
    values.insert("views".to_string(), Value::float(f64::NAN));

    let result: itemwire::Result<_> = schema.serialize_record(&values).map_err(Into::into);
    assert!(matches!(
        result,
        Err(itemwire::Error::Codec(
            itemwire_core::Error::NonFiniteNumber(_)
        ))
    ));
}
