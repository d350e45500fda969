//! # itemwire-core
//!
//! Native value model for itemwire.
//!
//! This crate defines the canonical [`Value`] type that applications build
//! attribute data from, the [`Number`] scalar it carries, and the error
//! taxonomy shared by the wire codec and the schema layer.
//!
//! The value model is a closed tagged union: every supported native kind is
//! a variant, and the wire codec dispatches by exhaustive pattern matching.
//! There is no runtime type inspection and no open extension point.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
mod number;
mod value;

pub use error::{Error, Result};
pub use number::Number;
pub use value::Value;
