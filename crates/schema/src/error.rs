//! Schema-level errors.

use itemwire_wire::WireTag;
use thiserror::Error;

/// All schema and record validation errors.
#[derive(Debug, Error, PartialEq)]
pub enum SchemaError {
    /// Value supplied for an attribute the schema does not declare.
    #[error("unknown attribute: {0}")]
    UnknownAttribute(String),

    /// Non-nullable attribute has nothing to write: no value, no default,
    /// or a value the store represents by omission.
    #[error("missing required attribute: {0}")]
    MissingAttribute(String),

    /// Explicit null supplied for a non-nullable attribute.
    #[error("attribute {0} is not nullable")]
    NullNotAllowed(String),

    /// Two attribute definitions share a name.
    #[error("duplicate attribute: {0}")]
    DuplicateAttribute(String),

    /// Key attributes must always be written, so they can be neither
    /// nullable nor defaulted.
    #[error("key attribute {0} cannot be nullable or defaulted")]
    InvalidKeyDefinition(String),

    /// Native value kind disagrees with the declared attribute kind.
    #[error("attribute {attribute}: expected {expected}, got {actual}")]
    WrongKind {
        /// Attribute name
        attribute: String,
        /// Declared kind
        expected: &'static str,
        /// Kind of the supplied value
        actual: &'static str,
    },

    /// Stored wire tag disagrees with the declared attribute kind.
    #[error("attribute {attribute}: expected tag {expected}, got {actual}")]
    WrongTag {
        /// Attribute name
        attribute: String,
        /// Tag the declared kind stores under
        expected: WireTag,
        /// Tag found in the item
        actual: WireTag,
    },

    /// Timestamp attribute text does not parse as a datetime.
    #[error("attribute {attribute}: invalid timestamp: {text}")]
    InvalidTimestamp {
        /// Attribute name
        attribute: String,
        /// The text that failed to parse
        text: String,
    },

    /// JSON attribute text is not well-formed JSON.
    #[error("attribute {attribute}: invalid JSON payload: {reason}")]
    InvalidJson {
        /// Attribute name
        attribute: String,
        /// Parser diagnostic
        reason: String,
    },

    /// Failure inside the wire codec.
    #[error(transparent)]
    Codec(#[from] itemwire_core::Error),
}

/// Result type for schema operations.
pub type Result<T> = std::result::Result<T, SchemaError>;
