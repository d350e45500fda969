//! Wire encoding for itemwire
//!
//! This crate implements the store's tagged document format. Every encoded
//! attribute is a single-tag document `{ "<tag>": <payload> }`; composite
//! documents nest recursively.
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
//! Null, empty strings, and empty sets have no wire form at the attribute
//! boundary: [`encode_attribute`] returns `Ok(None)` and the attribute is
//! omitted from the item.
//!
//! ## Examples
//!
//! ```
//! use itemwire_core::Value;
//! use itemwire_wire::{decode_attribute, encode_attribute};
//!
//! let native = Value::string_set(["b", "a"]);
//! let wire = encode_attribute(&native).unwrap().unwrap();
//! assert_eq!(
//!     wire.to_json(),
//!     serde_json::json!({"SS": ["a", "b"]})
//! );
//! assert_eq!(decode_attribute(&wire).unwrap(), native);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod decode;
mod encode;
mod json;
mod tag;
mod value;

pub use decode::{decode_attribute, decode_item};
pub use encode::{encode_attribute, encode_item, encode_list, encode_map};
pub use tag::WireTag;
pub use value::WireValue;

/// Maximum nesting depth for composite documents.
///
/// Encode and decode recursion both fail with
/// [`Error::DepthExceeded`](itemwire_core::Error::DepthExceeded) past this
/// limit, so adversarial input cannot grow the call stack without bound.
pub const MAX_DEPTH: usize = 32;
