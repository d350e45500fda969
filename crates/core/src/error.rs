//! Codec error taxonomy.
//!
//! Every failure in the encode/decode engine maps to exactly one variant
//! here. Errors are raised synchronously at the point of failure and
//! propagate to the caller unmodified: a serialize/deserialize call either
//! fully succeeds with a complete structure or fails with no partial
//! output. This layer never logs, retries, or suppresses.

use thiserror::Error;

/// All codec errors.
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    /// Native value has no wire representation in this position
    /// (e.g. `Null` nested inside a map or list).
    #[error("unsupported type: {0} has no wire representation here")]
    UnsupportedType(&'static str),

    /// Input shape disagrees with the codec's requirement
    /// (e.g. a non-map value given to the map codec).
    #[error("type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        /// Shape the codec requires
        expected: &'static str,
        /// Shape that was actually given
        actual: &'static str,
    },

    /// Map key is not usable as an attribute name.
    #[error("invalid map key: {0}")]
    InvalidKey(String),

    /// Wire document does not carry exactly one tag, or its payload has
    /// the wrong shape for the tag it carries.
    #[error("malformed wire entry: {0}")]
    MalformedEntry(String),

    /// Tag is not in the fixed wire enumeration.
    #[error("unknown wire tag: {0}")]
    UnknownTag(String),

    /// Number payload is not valid decimal text.
    #[error("invalid number: {0}")]
    Parse(String),

    /// Binary payload is not valid base64.
    #[error("invalid base64: {0}")]
    Decode(String),

    /// Recursion guard tripped while encoding or decoding a nested
    /// document.
    #[error("nesting depth exceeded: {0} levels")]
    DepthExceeded(usize),

    /// Non-finite float given to the number codec. The store's number
    /// type is finite decimal text; NaN and the infinities cannot travel.
    #[error("number is not finite: {0}")]
    NonFiniteNumber(String),

    /// Empty set nested inside a document. The store forbids empty
    /// multi-value attributes; at the attribute boundary an empty set is
    /// absent instead.
    #[error("empty {0} cannot be encoded inside a document")]
    EmptySet(&'static str),
}

/// Result type for codec operations.
pub type Result<T> = std::result::Result<T, Error>;
