//! Decoding of wire documents back into native values.
//!
//! Decoding mirrors the encode dispatch: the document's tag selects the
//! codec arm, and `M`/`L` recurse into their elements under the same depth
//! guard. Set documents rebuild native sets — element order is lost and
//! uniqueness is enforced by the set type.

use base64::Engine;
use itemwire_core::{Error, Number, Result, Value};
use std::collections::{BTreeSet, HashMap};

use crate::value::WireValue;
use crate::MAX_DEPTH;

/// Decode one attribute document.
pub fn decode_attribute(wire: &WireValue) -> Result<Value> {
    decode_value(wire, 0)
}

/// Decode a full item: attribute name → native value.
pub fn decode_item(item: &HashMap<String, WireValue>) -> Result<HashMap<String, Value>> {
    item.iter()
        .map(|(name, wire)| Ok((name.clone(), decode_attribute(wire)?)))
        .collect()
}

fn decode_value(wire: &WireValue, depth: usize) -> Result<Value> {
    if depth > MAX_DEPTH {
        return Err(Error::DepthExceeded(depth));
    }
    match wire {
        WireValue::S(s) => Ok(Value::String(s.clone())),
        WireValue::N(text) => text.parse::<Number>().map(Value::Number),
        WireValue::B(b64) => base64_bytes(b64).map(Value::Bytes),
        WireValue::Bool(b) => Ok(Value::Bool(*b)),
        WireValue::Ss(items) => Ok(Value::StringSet(items.iter().cloned().collect())),
        WireValue::Ns(items) => {
            let set = items
                .iter()
                .map(|text| text.parse::<Number>())
                .collect::<Result<BTreeSet<_>>>()?;
            Ok(Value::NumberSet(set))
        }
        WireValue::Bs(items) => {
            let set = items
                .iter()
                .map(|b64| base64_bytes(b64))
                .collect::<Result<BTreeSet<_>>>()?;
            Ok(Value::BinarySet(set))
        }
        WireValue::M(entries) => {
            let map = entries
                .iter()
                .map(|(key, entry)| Ok((key.clone(), decode_value(entry, depth + 1)?)))
                .collect::<Result<HashMap<_, _>>>()?;
            Ok(Value::Map(map))
        }
        WireValue::L(items) => {
            let list = items
                .iter()
                .map(|item| decode_value(item, depth + 1))
                .collect::<Result<Vec<_>>>()?;
            Ok(Value::List(list))
        }
    }
}

fn base64_bytes(text: &str) -> Result<Vec<u8>> {
    base64::engine::general_purpose::STANDARD
        .decode(text)
        .map_err(|e| Error::Decode(e.to_string()))
}
