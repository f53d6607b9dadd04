//! Schema-to-tree parsing.
//!
//! This module lifts a JSON Schema object document into an ordered
//! sequence of [`PropertyNode`]s plus root metadata. Parsing is a
//! defensive, lossy read: malformed input degrades to the closest valid
//! structure rather than erroring, because the contract is "always
//! produce an editable tree", not "validate the user's schema".

use std::collections::HashSet;

use serde_json::{Map, Number, Value};

use crate::id::IdGenerator;
use crate::metadata::SchemaMetadata;
use crate::node::{
    ArrayConstraints, NumericConstraints, PropertyKind, PropertyNode, PropertyType,
    StringConstraints,
};

/// The result of parsing a schema: an ordered node sequence plus root
/// metadata.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParsedSchema {
    pub properties: Vec<PropertyNode>,
    pub metadata: SchemaMetadata,
}

/// Lifts a JSON Schema object into a property tree.
///
/// Inverse of [`generate_schema`](crate::generate_schema) for every
/// schema it can produce. `properties` is read in key-enumeration order;
/// `required` is treated as a membership set, not an ordering. Every
/// reconstructed node receives a fresh id from `ids` — identity is a
/// tree-local concern and is never carried on the wire.
///
/// Defensive behavior:
///
/// - `None`, a non-object value, or a schema without a `properties`
///   object yields an empty [`ParsedSchema`]. Never panics, never errors.
/// - An unrecognized or missing `type` falls back to `string`.
/// - `{"type": "string", "format": "binary"}` maps back to the `file`
///   type, inverting the generator's sentinel.
/// - Constraint fields illegal for the mapped type, or carrying the
///   wrong JSON type, are silently dropped.
///
/// # Example
///
/// ```rust
/// use schematree::{parse_schema, IdGenerator, PropertyType};
/// use serde_json::json;
///
/// let ids = IdGenerator::new();
/// let schema = json!({
///     "type": "object",
///     "title": "User",
///     "properties": {
///         "username": { "type": "string", "minLength": 3 },
///         "age": { "type": "integer", "minimum": 18 }
///     },
///     "required": ["username"]
/// });
///
/// let parsed = parse_schema(Some(&schema), &ids);
/// assert_eq!(parsed.metadata.title, "User");
/// assert_eq!(parsed.properties.len(), 2);
/// assert!(parsed.properties[0].required);
/// assert_eq!(parsed.properties[1].property_type(), PropertyType::Integer);
///
/// // Degenerate input degrades to the empty tree.
/// assert!(parse_schema(None, &ids).properties.is_empty());
/// ```
pub fn parse_schema(schema: Option<&Value>, ids: &IdGenerator) -> ParsedSchema {
    let root = match schema.and_then(Value::as_object) {
        Some(root) if root.get("properties").is_some_and(Value::is_object) => root,
        _ => return ParsedSchema::default(),
    };

    ParsedSchema {
        properties: parse_members(root, ids),
        metadata: SchemaMetadata {
            title: text_field(root, "title"),
            description: text_field(root, "description"),
            version: text_field(root, "version"),
        },
    }
}

/// Reads `properties` (in key order) and `required` (as a set) from one
/// object schema level.
fn parse_members(schema: &Map<String, Value>, ids: &IdGenerator) -> Vec<PropertyNode> {
    let required: HashSet<&str> = schema
        .get("required")
        .and_then(Value::as_array)
        .map(|keys| keys.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default();

    match schema.get("properties").and_then(Value::as_object) {
        Some(properties) => properties
            .iter()
            .map(|(key, sub)| parse_node(key, sub, required.contains(key.as_str()), ids))
            .collect(),
        None => Vec::new(),
    }
}

/// Reconstructs one node from its sub-schema.
fn parse_node(key: &str, schema: &Value, required: bool, ids: &IdGenerator) -> PropertyNode {
    let node = PropertyNode::string(ids.next_id(), key).required(required);

    let Some(obj) = schema.as_object() else {
        // A non-object sub-schema carries nothing we can read.
        return node;
    };

    let kind = match wire_type(obj) {
        PropertyType::String => PropertyKind::String(StringConstraints {
            min_length: u64_field(obj, "minLength"),
            max_length: u64_field(obj, "maxLength"),
            pattern: string_field(obj, "pattern"),
            enum_values: string_list_field(obj, "enum"),
        }),
        PropertyType::Number => PropertyKind::Number(bounds(obj)),
        PropertyType::Integer => PropertyKind::Integer(bounds(obj)),
        PropertyType::Boolean => PropertyKind::Boolean,
        PropertyType::Object => PropertyKind::Object {
            children: parse_members(obj, ids),
        },
        PropertyType::Array => PropertyKind::Array(ArrayConstraints {
            min_items: u64_field(obj, "minItems"),
            max_items: u64_field(obj, "maxItems"),
            unique_items: obj.get("uniqueItems").and_then(Value::as_bool),
            items: obj
                .get("items")
                .filter(|v| v.is_object())
                .map(|items| Box::new(parse_node("", items, false, ids))),
        }),
        PropertyType::File => PropertyKind::File,
    };

    PropertyNode {
        title: string_field(obj, "title"),
        description: string_field(obj, "description"),
        kind,
        ..node
    }
}

/// Maps a sub-schema's `type` back to a [`PropertyType`], recognizing
/// the file sentinel. Anything unrecognized falls back to `string`.
fn wire_type(obj: &Map<String, Value>) -> PropertyType {
    match obj.get("type").and_then(Value::as_str) {
        Some("string") => {
            if obj.get("format").and_then(Value::as_str) == Some("binary") {
                PropertyType::File
            } else {
                PropertyType::String
            }
        }
        Some("number") => PropertyType::Number,
        Some("integer") => PropertyType::Integer,
        Some("boolean") => PropertyType::Boolean,
        Some("object") => PropertyType::Object,
        Some("array") => PropertyType::Array,
        _ => PropertyType::String,
    }
}

fn bounds(obj: &Map<String, Value>) -> NumericConstraints {
    NumericConstraints {
        minimum: number_field(obj, "minimum"),
        maximum: number_field(obj, "maximum"),
    }
}

fn u64_field(obj: &Map<String, Value>, key: &str) -> Option<u64> {
    obj.get(key).and_then(Value::as_u64)
}

fn number_field(obj: &Map<String, Value>, key: &str) -> Option<Number> {
    obj.get(key).and_then(Value::as_number).cloned()
}

fn string_field(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key).and_then(Value::as_str).map(str::to_string)
}

/// Reads an array of strings, dropping entries of other JSON types.
fn string_list_field(obj: &Map<String, Value>, key: &str) -> Option<Vec<String>> {
    obj.get(key).and_then(Value::as_array).map(|values| {
        values
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect()
    })
}

/// Reads a root metadata field, defaulting to the empty string.
fn text_field(obj: &Map<String, Value>, key: &str) -> String {
    obj.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}
