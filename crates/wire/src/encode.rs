//! Encoding of native values into wire documents.
//!
//! The attribute boundary is [`encode_attribute`]: null, empty strings,
//! and empty sets encode to "no attribute written". Below the boundary
//! the recursive encoder dispatches on the value's variant; booleans keep
//! the `BOOL` tag at every nesting level.

use base64::Engine;
use itemwire_core::{Error, Number, Result, Value};
use std::collections::HashMap;

use crate::value::WireValue;
use crate::MAX_DEPTH;

/// Encode one attribute value.
///
/// Returns `Ok(None)` for values the store represents by omission: null,
/// the empty string, and empty sets. Everything else becomes a wire
/// document.
pub fn encode_attribute(value: &Value) -> Result<Option<WireValue>> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) if s.is_empty() => Ok(None),
        Value::StringSet(s) if s.is_empty() => Ok(None),
        Value::NumberSet(s) if s.is_empty() => Ok(None),
        Value::BinarySet(s) if s.is_empty() => Ok(None),
        other => encode_value(other, 0).map(Some),
    }
}

/// Encode a full item: attribute name → wire document.
///
/// Attributes whose value encodes to absent are omitted from the result.
pub fn encode_item(attributes: &HashMap<String, Value>) -> Result<HashMap<String, WireValue>> {
    let mut item = HashMap::with_capacity(attributes.len());
    for (name, value) in attributes {
        if name.is_empty() {
            return Err(Error::InvalidKey("empty attribute name".to_string()));
        }
        if let Some(wire) = encode_attribute(value)? {
            item.insert(name.clone(), wire);
        }
    }
    Ok(item)
}

/// Encode a value that must be a map.
///
/// Fails with [`Error::TypeMismatch`] for any other kind.
pub fn encode_map(value: &Value) -> Result<WireValue> {
    match value {
        Value::Map(_) => encode_value(value, 0),
        other => Err(Error::TypeMismatch {
            expected: "map",
            actual: other.type_name(),
        }),
    }
}

/// Encode a value that must be a list.
///
/// Fails with [`Error::TypeMismatch`] for any other kind.
pub fn encode_list(value: &Value) -> Result<WireValue> {
    match value {
        Value::List(_) => encode_value(value, 0),
        other => Err(Error::TypeMismatch {
            expected: "list",
            actual: other.type_name(),
        }),
    }
}

/// The recursive dispatcher: route a value to its codec arm.
fn encode_value(value: &Value, depth: usize) -> Result<WireValue> {
    if depth > MAX_DEPTH {
        return Err(Error::DepthExceeded(depth));
    }
    match value {
        // Null has no tag; only the attribute boundary may omit it.
        Value::Null => Err(Error::UnsupportedType("null")),
        Value::Bool(b) => Ok(WireValue::Bool(*b)),
        Value::Number(n) => number_text(n).map(WireValue::N),
        Value::String(s) => Ok(WireValue::S(s.clone())),
        Value::Bytes(b) => Ok(WireValue::B(base64_text(b))),
        Value::StringSet(set) => {
            if set.is_empty() {
                return Err(Error::EmptySet("string set"));
            }
            Ok(WireValue::Ss(set.iter().cloned().collect()))
        }
        Value::NumberSet(set) => {
            if set.is_empty() {
                return Err(Error::EmptySet("number set"));
            }
            let texts = set.iter().map(number_text).collect::<Result<Vec<_>>>()?;
            Ok(WireValue::Ns(texts))
        }
        Value::BinarySet(set) => {
            if set.is_empty() {
                return Err(Error::EmptySet("binary set"));
            }
            Ok(WireValue::Bs(set.iter().map(|b| base64_text(b)).collect()))
        }
        Value::Map(entries) => {
            let mut out = HashMap::with_capacity(entries.len());
            for (key, entry) in entries {
                if key.is_empty() {
                    return Err(Error::InvalidKey("empty map key".to_string()));
                }
                out.insert(key.clone(), encode_value(entry, depth + 1)?);
            }
            Ok(WireValue::M(out))
        }
        Value::List(items) => {
            let out = items
                .iter()
                .map(|item| encode_value(item, depth + 1))
                .collect::<Result<Vec<_>>>()?;
            Ok(WireValue::L(out))
        }
    }
}

fn number_text(n: &Number) -> Result<String> {
    if !n.is_finite() {
        return Err(Error::NonFiniteNumber(n.to_string()));
    }
    Ok(n.to_string())
}

fn base64_text(bytes: &[u8]) -> String {
    base64::engine::general_purpose::STANDARD.encode(bytes)
}
