//! Native value model.
//!
//! [`Value`] is the canonical in-memory representation of attribute data.
//! Applications build values; the wire codec converts them to and from the
//! store's tagged documents. Values have no lifecycle beyond a single
//! encode/decode call and the codec never retains references to them.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

use crate::number::Number;

/// A native attribute value.
///
/// ## The Ten Kinds
///
/// 1. `Null` - explicit absence; at the attribute boundary nothing is written
/// 2. `Bool` - boolean true or false
/// 3. `Number` - 64-bit integer or float, one wire tag
/// 4. `String` - UTF-8 text
/// 5. `Bytes` - arbitrary binary data (distinct from String)
/// 6. `StringSet` - unordered unique text values
/// 7. `NumberSet` - unordered unique numbers
/// 8. `BinarySet` - unordered unique binary values
/// 9. `Map` - string-keyed mapping of values, recursive
/// 10. `List` - ordered sequence of values, recursive
///
/// Sets are backed by `BTreeSet`, so uniqueness and the canonical element
/// order the wire format requires are structural rather than enforced at
/// encode time.
///
/// ## Equality
///
/// Different kinds are never equal. Numbers follow [`Number`] equality
/// (total-ordered, no cross-variant coercion), so
/// `Value::from(1i64) != Value::from(1.0)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Value {
    /// Explicit absence of a value
    Null,

    /// Boolean true or false
    Bool(bool),

    /// Integer or float scalar
    Number(Number),

    /// UTF-8 text
    String(String),

    /// Arbitrary binary data
    Bytes(Vec<u8>),

    /// Unordered unique text values
    StringSet(BTreeSet<String>),

    /// Unordered unique numbers
    NumberSet(BTreeSet<Number>),

    /// Unordered unique binary values
    BinarySet(BTreeSet<Vec<u8>>),

    /// String-keyed mapping of values
    Map(HashMap<String, Value>),

    /// Ordered sequence of values
    List(Vec<Value>),
}

impl Value {
    /// Returns the kind name, for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Bytes(_) => "binary",
            Value::StringSet(_) => "string set",
            Value::NumberSet(_) => "number set",
            Value::BinarySet(_) => "binary set",
            Value::Map(_) => "map",
            Value::List(_) => "list",
        }
    }

    /// Check if this value is null
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Try to get as bool
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get as number
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Try to get as string slice
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get as bytes slice
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Try to get as map reference
    pub fn as_map(&self) -> Option<&HashMap<String, Value>> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Try to get as list slice
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(l) => Some(l),
            _ => None,
        }
    }

    // --- Constructors ---

    /// Build a string value.
    pub fn string(s: impl Into<String>) -> Self {
        Value::String(s.into())
    }

    /// Build an integer number value.
    pub fn int(i: i64) -> Self {
        Value::Number(Number::Int(i))
    }

    /// Build a float number value.
    pub fn float(f: f64) -> Self {
        Value::Number(Number::Float(f))
    }

    /// Build a binary value.
    pub fn bytes(b: impl Into<Vec<u8>>) -> Self {
        Value::Bytes(b.into())
    }

    /// Build a string set from any iterator; duplicates collapse.
    pub fn string_set<I, S>(iter: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Value::StringSet(iter.into_iter().map(Into::into).collect())
    }

    /// Build a number set from any iterator; duplicates collapse.
    pub fn number_set<I, N>(iter: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Number>,
    {
        Value::NumberSet(iter.into_iter().map(Into::into).collect())
    }

    /// Build a binary set from any iterator; duplicates collapse.
    pub fn binary_set<I, B>(iter: I) -> Self
    where
        I: IntoIterator<Item = B>,
        B: Into<Vec<u8>>,
    {
        Value::BinarySet(iter.into_iter().map(Into::into).collect())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Number(Number::Int(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Number(Number::Float(f))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        Value::Number(n)
    }
}
