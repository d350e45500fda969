//! # itemwire-schema
//!
//! Attribute schemas and record serialization.
//!
//! A [`RecordSchema`] declares the attributes of a record: name, kind, key
//! role, nullability, and an optional default. Serialization is explicit —
//! [`RecordSchema::serialize_record`] and
//! [`RecordSchema::deserialize_record`] are plain functions over attribute
//! maps, with validation (kind checks, nullability, key rules) happening
//! before the wire codec runs.
//!
//! Two kinds go beyond the native value model:
//!
//! - [`AttributeKind::Timestamp`] — UTC datetimes carried as text under
//!   the `S` tag, canonicalized through `chrono`.
//! - [`AttributeKind::Json`] — free-form JSON carried as text under the
//!   `S` tag, validated for well-formedness.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod attribute;
mod error;
mod kind;
mod record;

pub use attribute::{AttributeDef, KeyRole};
pub use error::{Result, SchemaError};
pub use kind::AttributeKind;
pub use record::{RecordSchema, DATETIME_FORMAT};
