//! The wire-level tagged union.

use std::collections::HashMap;

use crate::tag::WireTag;

/// A wire document: one tag, one payload.
///
/// This is the shape the remote store exchanges. Scalar payloads are
/// already in wire text form (numbers as decimal text, binary as base64);
/// set payloads are sorted sequences of scalar wire text; `M` and `L`
/// nest recursively. The "exactly one tag" invariant of the wire format
/// holds structurally — an enum value has exactly one variant.
#[derive(Debug, Clone, PartialEq)]
pub enum WireValue {
    /// Text
    S(String),
    /// Number as decimal text
    N(String),
    /// Binary as base64 text
    B(String),
    /// Boolean
    Bool(bool),
    /// String set, sorted
    Ss(Vec<String>),
    /// Number set as decimal text, numerically sorted
    Ns(Vec<String>),
    /// Binary set as base64 text, sorted by raw bytes
    Bs(Vec<String>),
    /// Map of nested documents
    M(HashMap<String, WireValue>),
    /// List of nested documents, order significant
    L(Vec<WireValue>),
}

impl WireValue {
    /// The tag this document carries.
    pub fn tag(&self) -> WireTag {
        match self {
            WireValue::S(_) => WireTag::S,
            WireValue::N(_) => WireTag::N,
            WireValue::B(_) => WireTag::B,
            WireValue::Bool(_) => WireTag::Bool,
            WireValue::Ss(_) => WireTag::Ss,
            WireValue::Ns(_) => WireTag::Ns,
            WireValue::Bs(_) => WireTag::Bs,
            WireValue::M(_) => WireTag::M,
            WireValue::L(_) => WireTag::L,
        }
    }
}
