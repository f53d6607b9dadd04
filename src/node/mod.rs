//! The editable schema tree.
//!
//! This module provides [`PropertyNode`], the unit of the tree a schema
//! builder edits, together with [`PropertyType`] and the per-type
//! constraint sets. Each node corresponds to one property of a JSON
//! Schema object.
//!
//! Constraints live inside [`PropertyKind`], a tagged union keyed by the
//! node's type, so a node can only ever hold the constraint fields legal
//! for its current type. "Illegal constraint present" is unrepresentable
//! rather than merely avoided.
//!
//! # Example
//!
//! ```rust
//! use schematree::{IdGenerator, PropertyKind, PropertyNode, StringConstraints};
//!
//! let ids = IdGenerator::new();
//! let username = PropertyNode::new(
//!     ids.next_id(),
//!     "username",
//!     PropertyKind::String(StringConstraints::new().min_length(3)),
//! )
//! .required(true);
//!
//! assert_eq!(username.key, "username");
//! assert!(username.required);
//! ```

mod array;
mod numeric;
mod string;

pub use array::ArrayConstraints;
pub use numeric::NumericConstraints;
pub use string::StringConstraints;

use crate::id::PropertyId;
use std::fmt::{self, Display};

/// The type a property node can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyType {
    String,
    Number,
    Integer,
    Boolean,
    Object,
    Array,
    /// Binary file contents. Not a native JSON Schema type; serialized
    /// as `{"type": "string", "format": "binary"}`.
    File,
}

impl PropertyType {
    /// Every selectable type, in presentation order.
    pub const ALL: [PropertyType; 7] = [
        PropertyType::String,
        PropertyType::Number,
        PropertyType::Integer,
        PropertyType::Boolean,
        PropertyType::Object,
        PropertyType::Array,
        PropertyType::File,
    ];

    /// Returns the lowercase type name.
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::String => "string",
            PropertyType::Number => "number",
            PropertyType::Integer => "integer",
            PropertyType::Boolean => "boolean",
            PropertyType::Object => "object",
            PropertyType::Array => "array",
            PropertyType::File => "file",
        }
    }
}

impl Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A node's type together with the constraint fields legal for it.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyKind {
    String(StringConstraints),
    Number(NumericConstraints),
    Integer(NumericConstraints),
    Boolean,
    /// An object property with its ordered child properties. Order is
    /// significant and survives generate/parse round trips.
    Object { children: Vec<PropertyNode> },
    Array(ArrayConstraints),
    File,
}

impl PropertyKind {
    /// Returns the declared type of this kind.
    pub fn property_type(&self) -> PropertyType {
        match self {
            PropertyKind::String(_) => PropertyType::String,
            PropertyKind::Number(_) => PropertyType::Number,
            PropertyKind::Integer(_) => PropertyType::Integer,
            PropertyKind::Boolean => PropertyType::Boolean,
            PropertyKind::Object { .. } => PropertyType::Object,
            PropertyKind::Array(_) => PropertyType::Array,
            PropertyKind::File => PropertyType::File,
        }
    }

    /// Returns the unconstrained kind for a type.
    pub fn empty(property_type: PropertyType) -> Self {
        match property_type {
            PropertyType::String => PropertyKind::String(StringConstraints::default()),
            PropertyType::Number => PropertyKind::Number(NumericConstraints::default()),
            PropertyType::Integer => PropertyKind::Integer(NumericConstraints::default()),
            PropertyType::Boolean => PropertyKind::Boolean,
            PropertyType::Object => PropertyKind::Object {
                children: Vec::new(),
            },
            PropertyType::Array => PropertyKind::Array(ArrayConstraints::default()),
            PropertyType::File => PropertyKind::File,
        }
    }
}

/// One unit of the editable schema tree.
///
/// A node is created with a fresh id, updated by structural copy, and
/// destroyed by removal from its parent's child sequence. Ownership is
/// strictly tree-shaped; a node is never shared between parents.
///
/// Sibling key uniqueness and tree-wide id uniqueness are caller
/// invariants. They are assumed, not enforced: a duplicate key shadows
/// the earlier entry in generated output.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyNode {
    /// Stable identity, independent of `key`. Never on the wire.
    pub id: PropertyId,
    /// Property name; unique among siblings.
    pub key: String,
    /// Whether the parent lists this key in its `required` array.
    pub required: bool,
    /// Optional human-readable title.
    pub title: Option<String>,
    /// Optional description.
    pub description: Option<String>,
    /// Declared type plus the constraints legal for it.
    pub kind: PropertyKind,
}

impl PropertyNode {
    /// Creates a node with the given kind, not required, no title or
    /// description.
    pub fn new(id: PropertyId, key: impl Into<String>, kind: PropertyKind) -> Self {
        Self {
            id,
            key: key.into(),
            required: false,
            title: None,
            description: None,
            kind,
        }
    }

    /// Creates an unconstrained string node, the default for new properties.
    pub fn string(id: PropertyId, key: impl Into<String>) -> Self {
        Self::new(id, key, PropertyKind::empty(PropertyType::String))
    }

    /// Creates an unconstrained number node.
    pub fn number(id: PropertyId, key: impl Into<String>) -> Self {
        Self::new(id, key, PropertyKind::empty(PropertyType::Number))
    }

    /// Creates an unconstrained integer node.
    pub fn integer(id: PropertyId, key: impl Into<String>) -> Self {
        Self::new(id, key, PropertyKind::empty(PropertyType::Integer))
    }

    /// Creates a boolean node.
    pub fn boolean(id: PropertyId, key: impl Into<String>) -> Self {
        Self::new(id, key, PropertyKind::Boolean)
    }

    /// Creates an object node with the given ordered children.
    pub fn object(
        id: PropertyId,
        key: impl Into<String>,
        children: Vec<PropertyNode>,
    ) -> Self {
        Self::new(id, key, PropertyKind::Object { children })
    }

    /// Creates an unconstrained array node.
    pub fn array(id: PropertyId, key: impl Into<String>) -> Self {
        Self::new(id, key, PropertyKind::empty(PropertyType::Array))
    }

    /// Creates a file node.
    pub fn file(id: PropertyId, key: impl Into<String>) -> Self {
        Self::new(id, key, PropertyKind::File)
    }

    /// Sets the required flag and returns self for chaining.
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Sets the title and returns self for chaining.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the description and returns self for chaining.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns the node's declared type.
    pub fn property_type(&self) -> PropertyType {
        self.kind.property_type()
    }

    /// Returns the child sequence for object nodes, `None` otherwise.
    pub fn children(&self) -> Option<&[PropertyNode]> {
        match &self.kind {
            PropertyKind::Object { children } => Some(children),
            _ => None,
        }
    }
}
