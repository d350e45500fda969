//! Convenient imports for itemwire.
//!
//! Re-exports the most commonly used types so you can get started with a
//! single import:
//!
//! ```
//! use itemwire::prelude::*;
//!
//! let value = Value::string_set(["a", "b"]);
//! let wire = encode_attribute(&value).unwrap().unwrap();
//! assert_eq!(wire.tag(), WireTag::Ss);
//! ```

// Error handling
pub use crate::error::{Error, Result};

// Value model
pub use itemwire_core::{Number, Value};

// Wire codec
pub use itemwire_wire::{
    decode_attribute, decode_item, encode_attribute, encode_item, WireTag, WireValue,
};

// Schema layer
pub use itemwire_schema::{AttributeDef, AttributeKind, KeyRole, RecordSchema, SchemaError};
