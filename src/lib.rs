//! # itemwire
//!
//! Attribute typing and wire serialization for tagged-document key-value
//! stores.
//!
//! itemwire converts between native in-memory values (strings, numbers,
//! booleans, binary, sets, nested maps and lists) and the single-tag
//! documents a remote store exchanges: `{ "S": "text" }`,
//! `{ "N": "42" }`, `{ "M": { ... } }` and so on. The conversion is
//! recursive, validated, and round-trips.
//!
//! ## Wire Format
//!
//! | Tag | Native Kind | Payload |
//! |------|-------------|---------|
//! | `S` | String | text |
//! | `N` | Number | decimal text |
//! | `B` | Bytes | base64 text |
//! | `BOOL` | Bool | boolean |
//! | `SS` | StringSet | sorted array of text |
//! | `NS` | NumberSet | sorted array of decimal text |
//! | `BS` | BinarySet | sorted array of base64 text |
//! | `M` | Map | object of nested documents |
//! | `L` | List | array of nested documents |
//!
//! ## Quick Start
//!
//! ```
//! use itemwire::prelude::*;
//! use std::collections::HashMap;
//!
//! // Declare a record schema.
//! let schema = RecordSchema::new(vec![
//!     AttributeDef::new("forum_name", AttributeKind::String).hash_key(),
//!     AttributeDef::new("views", AttributeKind::Number).default_value(0i64),
//!     AttributeDef::new("tags", AttributeKind::StringSet).nullable(),
//! ])?;
//!
//! // Serialize a record.
//! let mut values = HashMap::new();
//! values.insert("forum_name".to_string(), Value::string("General"));
//! values.insert("tags".to_string(), Value::string_set(["rust", "db"]));
//!
//! let item = schema.serialize_record(&values)?;
//! assert_eq!(item["views"].to_json(), serde_json::json!({"N": "0"}));
//! assert_eq!(item["tags"].to_json(), serde_json::json!({"SS": ["db", "rust"]}));
//!
//! // And back.
//! let decoded = schema.deserialize_record(&item)?;
//! assert_eq!(decoded["views"], Value::int(0));
//! # Ok::<(), itemwire::Error>(())
//! ```
//!
//! Below the schema layer, [`encode_attribute`]/[`decode_attribute`] and
//! [`WireValue::to_json`]/[`WireValue::from_json`] are the raw codec
//! surface for callers that manage their own validation.

#![warn(missing_docs)]

mod error;

pub mod prelude;

pub use error::{Error, Result};

// Re-export the value model
pub use itemwire_core::{Number, Value};

// Re-export the wire codec
pub use itemwire_wire::{
    decode_attribute, decode_item, encode_attribute, encode_item, encode_list, encode_map,
    WireTag, WireValue, MAX_DEPTH,
};

// Re-export the schema layer
pub use itemwire_schema::{
    AttributeDef, AttributeKind, KeyRole, RecordSchema, SchemaError, DATETIME_FORMAT,
};
