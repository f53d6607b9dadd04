//! # Schematree
//!
//! Bidirectional conversion between a tree of typed property nodes and a
//! JSON Schema object document, for hosts that let users build schemas
//! visually.
//!
//! ## Overview
//!
//! The host owns one canonical JSON Schema value. On every user edit it
//! produces an updated node tree and calls [`generate_schema`] to obtain
//! the new canonical value; on load (or whenever the canonical value
//! changes externally) it calls [`parse_schema`] to re-derive the tree
//! for display. The two functions are exact inverses for every schema
//! the generator can produce, up to node ids, which are regenerated on
//! every parse.
//!
//! ## Core Types
//!
//! - [`PropertyNode`]: one unit of the editable tree, corresponding to
//!   one JSON Schema property
//! - [`PropertyKind`]: the node's type plus exactly the constraint
//!   fields legal for it
//! - [`SchemaMetadata`]: root-level title/description/version
//! - [`IdGenerator`]: stable, content-independent node identity
//! - [`SchemaBuilder`]: a session facade over the canonical schema with
//!   atomic add/update/delete operations
//!
//! ## Example
//!
//! ```rust
//! use schematree::{generate_schema, parse_schema, IdGenerator, PropertyNode, SchemaMetadata};
//! use serde_json::json;
//!
//! let ids = IdGenerator::new();
//! let nodes = vec![
//!     PropertyNode::string(ids.next_id(), "username").required(true),
//!     PropertyNode::boolean(ids.next_id(), "active"),
//! ];
//!
//! let schema = generate_schema(&nodes, &SchemaMetadata::new(), true);
//! assert_eq!(schema["required"], json!(["username"]));
//!
//! // Parsing inverts generation, assigning fresh ids.
//! let parsed = parse_schema(Some(&schema), &ids);
//! assert_eq!(parsed.properties.len(), 2);
//! assert_eq!(parsed.properties[0].key, "username");
//! ```

pub mod builder;
pub mod generate;
pub mod id;
pub mod io;
pub mod metadata;
pub mod node;
pub mod normalize;
pub mod parse;

pub use builder::SchemaBuilder;
pub use generate::generate_schema;
pub use id::{IdGenerator, PropertyId};
pub use io::{export_schema_file, import_schema_file, SchemaFileError};
pub use metadata::{MetadataField, SchemaMetadata};
pub use node::{
    ArrayConstraints, NumericConstraints, PropertyKind, PropertyNode, PropertyType,
    StringConstraints,
};
pub use normalize::normalize_for_type;
pub use parse::{parse_schema, ParsedSchema};
