//! Attribute definitions.

use itemwire_core::Value;

use crate::kind::AttributeKind;

/// The role an attribute plays in the record's primary key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyRole {
    /// Partition key
    Hash,
    /// Sort key
    Range,
    /// Not part of the key
    NonKey,
}

/// One declared attribute: name, kind, key role, nullability, default.
///
/// Built with chained constructors:
///
/// ```
/// use itemwire_schema::{AttributeDef, AttributeKind};
///
/// let views = AttributeDef::new("views", AttributeKind::Number)
///     .default_value(0i64);
/// let forum = AttributeDef::new("forum_name", AttributeKind::String)
///     .hash_key();
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeDef {
    name: String,
    kind: AttributeKind,
    key_role: KeyRole,
    nullable: bool,
    default: Option<Value>,
}

impl AttributeDef {
    /// Declare a non-key, non-nullable attribute with no default.
    pub fn new(name: impl Into<String>, kind: AttributeKind) -> Self {
        AttributeDef {
            name: name.into(),
            kind,
            key_role: KeyRole::NonKey,
            nullable: false,
            default: None,
        }
    }

    /// Mark this attribute as the partition key.
    pub fn hash_key(mut self) -> Self {
        self.key_role = KeyRole::Hash;
        self
    }

    /// Mark this attribute as the sort key.
    pub fn range_key(mut self) -> Self {
        self.key_role = KeyRole::Range;
        self
    }

    /// Allow this attribute to be absent or null.
    ///
    /// Key attributes cannot be nullable; the combination is rejected
    /// when the schema is built.
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Value written when the attribute is missing or null.
    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Attribute name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared kind.
    pub fn kind(&self) -> AttributeKind {
        self.kind
    }

    /// Key role.
    pub fn key_role(&self) -> KeyRole {
        self.key_role
    }

    /// Whether absence/null is allowed.
    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    /// Declared default, if any.
    pub fn default(&self) -> Option<&Value> {
        self.default.as_ref()
    }
}
