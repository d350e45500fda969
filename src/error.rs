//! Unified error type for the itemwire facade.
//!
//! Callers that work through the facade see a single error enum; the
//! codec and schema taxonomies stay intact underneath and can be matched
//! through it.

use thiserror::Error;

/// All itemwire errors.
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    /// Failure in the wire codec (dispatch, parsing, depth, malformed
    /// documents).
    #[error(transparent)]
    Codec(#[from] itemwire_core::Error),

    /// Failure in schema validation or record (de)serialization.
    #[error(transparent)]
    Schema(itemwire_schema::SchemaError),
}

impl From<itemwire_schema::SchemaError> for Error {
    fn from(e: itemwire_schema::SchemaError) -> Self {
        // Codec errors keep their own variant even when they surface
        // through the schema layer.
        match e {
            itemwire_schema::SchemaError::Codec(inner) => Error::Codec(inner),
            other => Error::Schema(other),
        }
    }
}

/// Result type for itemwire operations.
pub type Result<T> = std::result::Result<T, Error>;
