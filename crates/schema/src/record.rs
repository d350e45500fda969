//! Record schemas and the record (de)serialization boundary.
//!
//! `RecordSchema` is the explicit replacement for attribute-object magic:
//! the schema owns validation (kind checks, nullability, key rules,
//! defaults) and delegates the actual value conversion to the wire codec.

use chrono::{DateTime, FixedOffset, Utc};
use itemwire_core::Value;
use itemwire_wire::{decode_attribute, encode_attribute, WireValue};
use std::collections::{HashMap, HashSet};

use crate::attribute::{AttributeDef, KeyRole};
use crate::error::{Result, SchemaError};
use crate::kind::AttributeKind;

/// Canonical text format for timestamp attributes: UTC datetime with
/// microsecond precision and a numeric offset.
pub const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f%z";

/// The declared attributes of a record.
///
/// Declaration order is preserved and duplicate names are rejected.
#[derive(Debug, Clone)]
pub struct RecordSchema {
    attributes: Vec<AttributeDef>,
}

impl RecordSchema {
    /// Build a schema from attribute definitions.
    ///
    /// Fails with [`SchemaError::DuplicateAttribute`] on repeated names
    /// and [`SchemaError::InvalidKeyDefinition`] if a key attribute is
    /// nullable or carries a default.
    pub fn new(attributes: Vec<AttributeDef>) -> Result<Self> {
        let mut seen = HashSet::new();
        for def in &attributes {
            if !seen.insert(def.name().to_string()) {
                return Err(SchemaError::DuplicateAttribute(def.name().to_string()));
            }
            if def.key_role() != KeyRole::NonKey && (def.is_nullable() || def.default().is_some())
            {
                return Err(SchemaError::InvalidKeyDefinition(def.name().to_string()));
            }
        }
        Ok(RecordSchema { attributes })
    }

    /// Look up an attribute definition by name.
    pub fn get(&self, name: &str) -> Option<&AttributeDef> {
        self.attributes.iter().find(|def| def.name() == name)
    }

    /// The partition key attribute, if declared.
    pub fn hash_key(&self) -> Option<&AttributeDef> {
        self.attributes
            .iter()
            .find(|def| def.key_role() == KeyRole::Hash)
    }

    /// The sort key attribute, if declared.
    pub fn range_key(&self) -> Option<&AttributeDef> {
        self.attributes
            .iter()
            .find(|def| def.key_role() == KeyRole::Range)
    }

    /// All declared attributes, in declaration order.
    pub fn attributes(&self) -> &[AttributeDef] {
        &self.attributes
    }

    /// Serialize a record's attribute values into a wire item.
    ///
    /// Defaults fill in missing or null values; nullable attributes with
    /// nothing to write are omitted; everything else is kind-checked,
    /// canonicalized (timestamps, JSON) and run through the wire encoder.
    pub fn serialize_record(
        &self,
        values: &HashMap<String, Value>,
    ) -> Result<HashMap<String, WireValue>> {
        for name in values.keys() {
            if self.get(name).is_none() {
                return Err(SchemaError::UnknownAttribute(name.clone()));
            }
        }

        let mut item = HashMap::with_capacity(self.attributes.len());
        for def in &self.attributes {
            let supplied = values.get(def.name());
            let effective = match supplied {
                Some(Value::Null) | None => def.default(),
                Some(value) => Some(value),
            };
            let value = match effective {
                Some(value) => value,
                None if def.is_nullable() => continue,
                None => {
                    return Err(match supplied {
                        Some(Value::Null) => SchemaError::NullNotAllowed(def.name().to_string()),
                        _ => SchemaError::MissingAttribute(def.name().to_string()),
                    })
                }
            };

            if !def.kind().matches(value) {
                return Err(SchemaError::WrongKind {
                    attribute: def.name().to_string(),
                    expected: def.kind().name(),
                    actual: value.type_name(),
                });
            }

            let canonical = canonicalize(def, value)?;
            match encode_attribute(&canonical)? {
                Some(wire) => {
                    item.insert(def.name().to_string(), wire);
                }
                // A value with no wire form (empty string, empty set)
                // behaves like null: fine when nullable, an error when not.
                None if def.is_nullable() => {}
                None => return Err(SchemaError::MissingAttribute(def.name().to_string())),
            }
        }
        Ok(item)
    }

    /// Deserialize a wire item back into the record's attribute values.
    ///
    /// Every stored tag is verified against the declared kind before
    /// decoding; timestamp and JSON attributes are re-validated. Missing
    /// attributes are simply absent from the result — items written by
    /// older schemas stay readable.
    pub fn deserialize_record(
        &self,
        item: &HashMap<String, WireValue>,
    ) -> Result<HashMap<String, Value>> {
        let mut values = HashMap::with_capacity(item.len());
        for (name, wire) in item {
            let def = self
                .get(name)
                .ok_or_else(|| SchemaError::UnknownAttribute(name.clone()))?;

            let expected = def.kind().wire_tag();
            if wire.tag() != expected {
                return Err(SchemaError::WrongTag {
                    attribute: name.clone(),
                    expected,
                    actual: wire.tag(),
                });
            }

            let value = decode_attribute(wire)?;
            validate_content(def, &value)?;
            values.insert(name.clone(), value);
        }
        Ok(values)
    }
}

/// Canonicalize refinement kinds before encoding.
fn canonicalize(def: &AttributeDef, value: &Value) -> Result<Value> {
    match def.kind() {
        AttributeKind::Timestamp => {
            let text = expect_text(def, value)?;
            let parsed = parse_timestamp(def.name(), text)?;
            let canonical = parsed.with_timezone(&Utc).format(DATETIME_FORMAT).to_string();
            Ok(Value::String(canonical))
        }
        AttributeKind::Json => {
            let text = expect_text(def, value)?;
            serde_json::from_str::<serde_json::Value>(text).map_err(|e| {
                SchemaError::InvalidJson {
                    attribute: def.name().to_string(),
                    reason: e.to_string(),
                }
            })?;
            Ok(value.clone())
        }
        _ => Ok(value.clone()),
    }
}

/// Re-validate refinement kinds after decoding.
fn validate_content(def: &AttributeDef, value: &Value) -> Result<()> {
    match def.kind() {
        AttributeKind::Timestamp => {
            let text = expect_text(def, value)?;
            parse_timestamp(def.name(), text)?;
            Ok(())
        }
        AttributeKind::Json => {
            let text = expect_text(def, value)?;
            serde_json::from_str::<serde_json::Value>(text)
                .map(|_| ())
                .map_err(|e| SchemaError::InvalidJson {
                    attribute: def.name().to_string(),
                    reason: e.to_string(),
                })
        }
        _ => Ok(()),
    }
}

fn expect_text<'a>(def: &AttributeDef, value: &'a Value) -> Result<&'a str> {
    match value {
        Value::String(s) => Ok(s),
        other => Err(SchemaError::WrongKind {
            attribute: def.name().to_string(),
            expected: def.kind().name(),
            actual: other.type_name(),
        }),
    }
}

/// Parse timestamp text: the canonical format first, RFC 3339 as the
/// accepted input form.
fn parse_timestamp(attribute: &str, text: &str) -> Result<DateTime<FixedOffset>> {
    DateTime::parse_from_str(text, DATETIME_FORMAT)
        .or_else(|_| DateTime::parse_from_rfc3339(text))
        .map_err(|_| SchemaError::InvalidTimestamp {
            attribute: attribute.to_string(),
            text: text.to_string(),
        })
}
