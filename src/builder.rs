//! Schema builder session.
//!
//! This module provides [`SchemaBuilder`], the stateful facade a host
//! (UI layer, service endpoint) drives. It owns the canonical schema
//! value and the parsed tree derived from it, and regenerates the schema
//! exactly once per mutation so the canonical value is always updated
//! atomically.

use parking_lot::RwLock;
use serde_json::Value;
use std::sync::Arc;

use crate::generate::generate_schema;
use crate::id::{IdGenerator, PropertyId};
use crate::metadata::{MetadataField, SchemaMetadata};
use crate::node::PropertyNode;
use crate::parse::parse_schema;

/// Canonical schema plus the tree it was generated from (or parsed into).
struct BuilderState {
    schema: Value,
    properties: Vec<PropertyNode>,
    metadata: SchemaMetadata,
}

/// A thread-safe editing session over one canonical JSON Schema.
///
/// The builder keeps the parsed node tree cached alongside the canonical
/// schema, so node ids stay stable across snapshots until the schema is
/// replaced wholesale with [`replace_schema`](Self::replace_schema).
/// Every mutation clones the current sequence, applies the edit, and
/// regenerates the schema once inside a single write-lock critical
/// section.
///
/// Cloning a builder shares the session: edits made through any clone
/// are visible to all. Callers still serialize logical edits; the lock
/// only makes each individual operation atomic.
///
/// # Example
///
/// ```rust
/// use schematree::SchemaBuilder;
/// use serde_json::json;
///
/// let builder = SchemaBuilder::new();
///
/// // New nodes are detached until passed to update_property.
/// let mut name = builder.add_property().required(true);
/// name.key = "name".to_string();
/// let schema = builder.update_property(name.id, name);
///
/// assert_eq!(schema["required"], json!(["name"]));
/// assert_eq!(builder.schema(), schema);
/// ```
pub struct SchemaBuilder {
    state: Arc<RwLock<BuilderState>>,
    ids: IdGenerator,
    include_metadata: bool,
}

impl SchemaBuilder {
    /// Creates a session over the empty object schema, with metadata
    /// included in generated output.
    pub fn new() -> Self {
        Self::with_id_generator(IdGenerator::new())
    }

    /// Creates a session drawing node ids from `ids`, for deterministic
    /// ids in tests or for sharing an id space across sessions.
    pub fn with_id_generator(ids: IdGenerator) -> Self {
        let metadata = SchemaMetadata::new();
        let schema = generate_schema(&[], &metadata, true);
        Self {
            state: Arc::new(RwLock::new(BuilderState {
                schema,
                properties: Vec::new(),
                metadata,
            })),
            ids,
            include_metadata: true,
        }
    }

    /// Creates a session from an existing schema, parsing it into the
    /// editable tree.
    pub fn from_schema(schema: Value) -> Self {
        let builder = Self::new();
        builder.replace_schema(schema);
        builder
    }

    /// Sets whether generated schemas carry root metadata. Takes effect
    /// from the next mutation.
    pub fn include_metadata(mut self, include: bool) -> Self {
        self.include_metadata = include;
        self
    }

    /// Returns the id generator backing this session.
    pub fn id_generator(&self) -> IdGenerator {
        self.ids.clone()
    }

    /// Returns a clone of the canonical schema.
    pub fn schema(&self) -> Value {
        self.state.read().schema.clone()
    }

    /// Returns a snapshot of the current node sequence. Ids are stable
    /// between snapshots as long as the schema is edited through this
    /// session rather than replaced.
    pub fn properties(&self) -> Vec<PropertyNode> {
        self.state.read().properties.clone()
    }

    /// Returns the current root metadata.
    pub fn metadata(&self) -> SchemaMetadata {
        self.state.read().metadata.clone()
    }

    /// Creates a new default property: a fresh id, empty key, string
    /// type, not required. The node is detached; it joins the tree only
    /// when passed to [`update_property`](Self::update_property).
    pub fn add_property(&self) -> PropertyNode {
        PropertyNode::string(self.ids.next_id(), "")
    }

    /// Replaces the node with the given id, or appends `updated` when no
    /// node matches. Returns the regenerated canonical schema.
    pub fn update_property(&self, id: PropertyId, updated: PropertyNode) -> Value {
        let mut state = self.state.write();
        let mut properties = state.properties.clone();
        match properties.iter_mut().find(|p| p.id == id) {
            Some(slot) => *slot = updated,
            None => properties.push(updated),
        }
        self.commit(&mut state, properties, None)
    }

    /// Removes the node with the given id; a missing id is a no-op that
    /// still regenerates. Returns the regenerated canonical schema.
    pub fn delete_property(&self, id: PropertyId) -> Value {
        let mut state = self.state.write();
        let mut properties = state.properties.clone();
        properties.retain(|p| p.id != id);
        self.commit(&mut state, properties, None)
    }

    /// Removes every property and resets the metadata. Returns the
    /// regenerated canonical schema.
    pub fn clear_all(&self) -> Value {
        let mut state = self.state.write();
        self.commit(&mut state, Vec::new(), Some(SchemaMetadata::new()))
    }

    /// Sets one metadata field. Returns the regenerated canonical schema.
    pub fn update_metadata(&self, field: MetadataField, value: impl Into<String>) -> Value {
        let mut state = self.state.write();
        let mut metadata = state.metadata.clone();
        metadata.set(field, value);
        let properties = state.properties.clone();
        self.commit(&mut state, properties, Some(metadata))
    }

    /// Replaces the canonical schema with an externally produced value
    /// (an import, a collaborator edit) and re-derives the tree. Every
    /// node gets a fresh id; snapshots taken before this call no longer
    /// match by id.
    pub fn replace_schema(&self, schema: Value) {
        let parsed = parse_schema(Some(&schema), &self.ids);
        let mut state = self.state.write();
        state.schema = schema;
        state.properties = parsed.properties;
        state.metadata = parsed.metadata;
    }

    /// Regenerates the schema from the new sequence and swaps all state
    /// in one step, so readers never observe a tree/schema mismatch.
    fn commit(
        &self,
        state: &mut BuilderState,
        properties: Vec<PropertyNode>,
        metadata: Option<SchemaMetadata>,
    ) -> Value {
        if let Some(metadata) = metadata {
            state.metadata = metadata;
        }
        let schema = generate_schema(&properties, &state.metadata, self.include_metadata);
        state.properties = properties;
        state.schema = schema.clone();
        schema
    }
}

impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for SchemaBuilder {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            ids: self.ids.clone(),
            include_metadata: self.include_metadata,
        }
    }
}
