//! Declared attribute kinds.

use itemwire_core::Value;
use itemwire_wire::WireTag;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind an attribute is declared as.
///
/// The first nine kinds map one-to-one onto native value kinds and wire
/// tags. `Timestamp` and `Json` are schema-level refinements of `String`:
/// they travel under the `S` tag and are validated (and, for timestamps,
/// canonicalized) before encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttributeKind {
    /// UTF-8 text
    String,
    /// Integer or float
    Number,
    /// Boolean
    Boolean,
    /// Binary data
    Binary,
    /// Set of text values
    StringSet,
    /// Set of numbers
    NumberSet,
    /// Set of binary values
    BinarySet,
    /// Nested map document
    Map,
    /// Nested list document
    List,
    /// UTC datetime carried as canonical text
    Timestamp,
    /// Free-form JSON carried as text
    Json,
}

impl AttributeKind {
    /// Whether a native value has the shape this kind requires.
    ///
    /// `Timestamp` and `Json` require text; their content is validated
    /// separately during record serialization.
    pub fn matches(&self, value: &Value) -> bool {
        matches!(
            (self, value),
            (AttributeKind::String, Value::String(_))
                | (AttributeKind::Number, Value::Number(_))
                | (AttributeKind::Boolean, Value::Bool(_))
                | (AttributeKind::Binary, Value::Bytes(_))
                | (AttributeKind::StringSet, Value::StringSet(_))
                | (AttributeKind::NumberSet, Value::NumberSet(_))
                | (AttributeKind::BinarySet, Value::BinarySet(_))
                | (AttributeKind::Map, Value::Map(_))
                | (AttributeKind::List, Value::List(_))
                | (AttributeKind::Timestamp, Value::String(_))
                | (AttributeKind::Json, Value::String(_))
        )
    }

    /// The wire tag values of this kind are stored under.
    pub fn wire_tag(&self) -> WireTag {
        match self {
            AttributeKind::String => WireTag::S,
            AttributeKind::Number => WireTag::N,
            AttributeKind::Boolean => WireTag::Bool,
            AttributeKind::Binary => WireTag::B,
            AttributeKind::StringSet => WireTag::Ss,
            AttributeKind::NumberSet => WireTag::Ns,
            AttributeKind::BinarySet => WireTag::Bs,
            AttributeKind::Map => WireTag::M,
            AttributeKind::List => WireTag::L,
            AttributeKind::Timestamp => WireTag::S,
            AttributeKind::Json => WireTag::S,
        }
    }

    /// Kind name for error messages.
    pub fn name(&self) -> &'static str {
        match self {
            AttributeKind::String => "string",
            AttributeKind::Number => "number",
            AttributeKind::Boolean => "boolean",
            AttributeKind::Binary => "binary",
            AttributeKind::StringSet => "string set",
            AttributeKind::NumberSet => "number set",
            AttributeKind::BinarySet => "binary set",
            AttributeKind::Map => "map",
            AttributeKind::List => "list",
            AttributeKind::Timestamp => "timestamp",
            AttributeKind::Json => "json",
        }
    }
}

impl fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
