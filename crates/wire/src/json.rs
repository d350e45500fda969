//! JSON transport interop.
//!
//! The remote store's protocol carries wire documents as JSON:
//! a single-key object `{ "<tag>": <payload> }` per attribute. This module
//! converts [`WireValue`] to and from `serde_json::Value` at that boundary
//! and is where the single-tag and tag-enumeration invariants of inbound
//! data are checked.

use itemwire_core::{Error, Result};
use serde_json::{Map as JsonMap, Value as Json};
use std::collections::HashMap;

use crate::tag::WireTag;
use crate::value::WireValue;
use crate::MAX_DEPTH;

impl WireValue {
    /// Render this document as transport JSON.
    pub fn to_json(&self) -> Json {
        let payload = match self {
            WireValue::S(s) | WireValue::N(s) | WireValue::B(s) => Json::String(s.clone()),
            WireValue::Bool(b) => Json::Bool(*b),
            WireValue::Ss(items) | WireValue::Ns(items) | WireValue::Bs(items) => {
                Json::Array(items.iter().cloned().map(Json::String).collect())
            }
            WireValue::M(entries) => Json::Object(
                entries
                    .iter()
                    .map(|(key, entry)| (key.clone(), entry.to_json()))
                    .collect(),
            ),
            WireValue::L(items) => Json::Array(items.iter().map(WireValue::to_json).collect()),
        };
        let mut doc = JsonMap::with_capacity(1);
        doc.insert(self.tag().as_str().to_string(), payload);
        Json::Object(doc)
    }

    /// Parse a transport JSON document.
    ///
    /// Fails with [`Error::MalformedEntry`] if the document is not an
    /// object carrying exactly one tag or a payload has the wrong shape,
    /// and with [`Error::UnknownTag`] if the tag is not in the fixed
    /// enumeration.
    pub fn from_json(doc: &Json) -> Result<WireValue> {
        from_json_at(doc, 0)
    }
}

fn from_json_at(doc: &Json, depth: usize) -> Result<WireValue> {
    if depth > MAX_DEPTH {
        return Err(Error::DepthExceeded(depth));
    }
    let entries = doc.as_object().ok_or_else(|| {
        Error::MalformedEntry(format!(
            "expected a single-tag object, got {}",
            json_kind(doc)
        ))
    })?;
    let mut iter = entries.iter();
    let (tag_text, payload) = match (iter.next(), iter.next()) {
        (Some(entry), None) => entry,
        _ => {
            return Err(Error::MalformedEntry(format!(
                "expected exactly one tag, found {}",
                entries.len()
            )))
        }
    };
    let tag: WireTag = tag_text.parse()?;
    match tag {
        WireTag::S => expect_text(tag, payload).map(WireValue::S),
        WireTag::N => expect_text(tag, payload).map(WireValue::N),
        WireTag::B => expect_text(tag, payload).map(WireValue::B),
        WireTag::Bool => match payload {
            Json::Bool(b) => Ok(WireValue::Bool(*b)),
            other => Err(payload_error(tag, "a boolean", other)),
        },
        WireTag::Ss => expect_text_array(tag, payload).map(WireValue::Ss),
        WireTag::Ns => expect_text_array(tag, payload).map(WireValue::Ns),
        WireTag::Bs => expect_text_array(tag, payload).map(WireValue::Bs),
        WireTag::M => {
            let object = payload
                .as_object()
                .ok_or_else(|| payload_error(tag, "an object", payload))?;
            let entries = object
                .iter()
                .map(|(key, entry)| Ok((key.clone(), from_json_at(entry, depth + 1)?)))
                .collect::<Result<HashMap<_, _>>>()?;
            Ok(WireValue::M(entries))
        }
        WireTag::L => {
            let array = payload
                .as_array()
                .ok_or_else(|| payload_error(tag, "an array", payload))?;
            let items = array
                .iter()
                .map(|item| from_json_at(item, depth + 1))
                .collect::<Result<Vec<_>>>()?;
            Ok(WireValue::L(items))
        }
    }
}

fn expect_text(tag: WireTag, payload: &Json) -> Result<String> {
    payload
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| payload_error(tag, "a string", payload))
}

fn expect_text_array(tag: WireTag, payload: &Json) -> Result<Vec<String>> {
    let array = payload
        .as_array()
        .ok_or_else(|| payload_error(tag, "an array of strings", payload))?;
    array
        .iter()
        .map(|item| {
            item.as_str()
                .map(str::to_string)
                .ok_or_else(|| payload_error(tag, "an array of strings", item))
        })
        .collect()
}

fn payload_error(tag: WireTag, want: &str, got: &Json) -> Error {
    Error::MalformedEntry(format!("tag {} expects {}, got {}", tag, want, json_kind(got)))
}

fn json_kind(value: &Json) -> &'static str {
    match value {
        Json::Null => "null",
        Json::Bool(_) => "boolean",
        Json::Number(_) => "number",
        Json::String(_) => "string",
        Json::Array(_) => "array",
        Json::Object(_) => "object",
    }
}
