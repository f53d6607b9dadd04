//! Tree-to-schema generation.
//!
//! This module lowers an ordered sequence of [`PropertyNode`]s into a
//! JSON Schema object document. Generation is the exact inverse of
//! [`parse_schema`](crate::parse_schema) for every schema it can
//! produce.

use indexmap::IndexMap;
use serde_json::{json, Map, Value};

use crate::metadata::SchemaMetadata;
use crate::node::{PropertyKind, PropertyNode};

/// Lowers a node sequence and metadata into a JSON Schema object.
///
/// The output always has the shape
/// `{ "type": "object", "properties": {...}, "required": [...] }`:
///
/// - `properties` holds one entry per node, keyed by `node.key`, in
///   input order.
/// - `required` is the subsequence of keys whose node is required, in
///   the same relative order as `properties`.
/// - Each sub-schema carries exactly the constraint fields set on the
///   node. Absent constraints are absent from the JSON, never `null`.
/// - `file` nodes emit the sentinel `{"type": "string", "format": "binary"}`.
/// - Object nodes recurse into their children; array nodes recurse into
///   their item sub-schema when one is set.
///
/// When `include_metadata` is true, non-empty `title`, `description`,
/// and `version` fields merge into the top level; empty fields are
/// omitted rather than emitted as `""`.
///
/// Pure: no side effects, deterministic over its inputs.
///
/// # Example
///
/// ```rust
/// use schematree::{generate_schema, IdGenerator, PropertyNode, SchemaMetadata};
/// use serde_json::json;
///
/// let ids = IdGenerator::new();
/// let nodes = vec![
///     PropertyNode::string(ids.next_id(), "name").required(true),
///     PropertyNode::boolean(ids.next_id(), "active"),
/// ];
///
/// let schema = generate_schema(&nodes, &SchemaMetadata::new(), true);
/// assert_eq!(schema["type"], "object");
/// assert_eq!(schema["required"], json!(["name"]));
/// assert_eq!(schema["properties"]["active"]["type"], "boolean");
/// ```
pub fn generate_schema(
    nodes: &[PropertyNode],
    metadata: &SchemaMetadata,
    include_metadata: bool,
) -> Value {
    let mut schema = Map::new();
    schema.insert("type".to_string(), json!("object"));

    if include_metadata {
        if !metadata.title.is_empty() {
            schema.insert("title".to_string(), json!(metadata.title));
        }
        if !metadata.description.is_empty() {
            schema.insert("description".to_string(), json!(metadata.description));
        }
        if !metadata.version.is_empty() {
            schema.insert("version".to_string(), json!(metadata.version));
        }
    }

    let (properties, required) = members_to_schema(nodes);
    schema.insert("properties".to_string(), properties);
    schema.insert("required".to_string(), required);
    Value::Object(schema)
}

/// Lowers a sibling sequence into its `properties` map and `required`
/// list. A duplicate key shadows the earlier entry; sibling uniqueness
/// is a caller invariant.
fn members_to_schema(nodes: &[PropertyNode]) -> (Value, Value) {
    let mut properties: IndexMap<String, Value> = IndexMap::with_capacity(nodes.len());
    let mut required = Vec::new();

    for node in nodes {
        if node.required {
            required.push(Value::String(node.key.clone()));
        }
        properties.insert(node.key.clone(), node_to_schema(node));
    }

    (
        Value::Object(properties.into_iter().collect()),
        Value::Array(required),
    )
}

/// Lowers one node into its sub-schema.
fn node_to_schema(node: &PropertyNode) -> Value {
    let mut out = Map::new();

    match &node.kind {
        PropertyKind::String(c) => {
            out.insert("type".to_string(), json!("string"));
            if let Some(min) = c.min_length {
                out.insert("minLength".to_string(), json!(min));
            }
            if let Some(max) = c.max_length {
                out.insert("maxLength".to_string(), json!(max));
            }
            if let Some(pattern) = &c.pattern {
                out.insert("pattern".to_string(), json!(pattern));
            }
            if let Some(values) = &c.enum_values {
                out.insert("enum".to_string(), json!(values));
            }
        }
        PropertyKind::Number(c) | PropertyKind::Integer(c) => {
            out.insert("type".to_string(), json!(node.property_type().as_str()));
            if let Some(min) = &c.minimum {
                out.insert("minimum".to_string(), Value::Number(min.clone()));
            }
            if let Some(max) = &c.maximum {
                out.insert("maximum".to_string(), Value::Number(max.clone()));
            }
        }
        PropertyKind::Boolean => {
            out.insert("type".to_string(), json!("boolean"));
        }
        PropertyKind::Object { children } => {
            out.insert("type".to_string(), json!("object"));
            let (properties, required) = members_to_schema(children);
            out.insert("properties".to_string(), properties);
            out.insert("required".to_string(), required);
        }
        PropertyKind::Array(c) => {
            out.insert("type".to_string(), json!("array"));
            if let Some(min) = c.min_items {
                out.insert("minItems".to_string(), json!(min));
            }
            if let Some(max) = c.max_items {
                out.insert("maxItems".to_string(), json!(max));
            }
            if let Some(unique) = c.unique_items {
                out.insert("uniqueItems".to_string(), json!(unique));
            }
            if let Some(items) = &c.items {
                out.insert("items".to_string(), node_to_schema(items));
            }
        }
        PropertyKind::File => {
            // No native JSON Schema type for files; the binary-format
            // sentinel is the fixed wire convention the parser inverts.
            out.insert("type".to_string(), json!("string"));
            out.insert("format".to_string(), json!("binary"));
        }
    }

    if let Some(title) = &node.title {
        out.insert("title".to_string(), json!(title));
    }
    if let Some(description) = &node.description {
        out.insert("description".to_string(), json!(description));
    }

    Value::Object(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::StringConstraints;
    use crate::IdGenerator;

    #[test]
    fn test_constraints_absent_when_unset() {
        let ids = IdGenerator::new();
        let node = PropertyNode::string(ids.next_id(), "name");
        let schema = node_to_schema(&node);
        let obj = schema.as_object().unwrap();
        assert_eq!(obj.len(), 1);
        assert_eq!(obj["type"], "string");
    }

    #[test]
    fn test_set_constraints_emitted() {
        let ids = IdGenerator::new();
        let node = PropertyNode::new(
            ids.next_id(),
            "name",
            PropertyKind::String(StringConstraints::new().min_length(3)),
        );
        let schema = node_to_schema(&node);
        assert_eq!(schema["minLength"], 3);
        assert!(schema.get("maxLength").is_none());
        assert!(schema.get("pattern").is_none());
    }

    #[test]
    fn test_file_sentinel() {
        let ids = IdGenerator::new();
        let schema = node_to_schema(&PropertyNode::file(ids.next_id(), "avatar"));
        assert_eq!(schema["type"], "string");
        assert_eq!(schema["format"], "binary");
    }
}
