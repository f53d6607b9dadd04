//! Root-level schema metadata.

/// Free-text metadata attached to the root schema only.
///
/// An empty string means the field is absent; the generator never emits
/// an empty metadata field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SchemaMetadata {
    pub title: String,
    pub description: String,
    pub version: String,
}

impl SchemaMetadata {
    /// Creates metadata with all fields empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when every field is empty.
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.description.is_empty() && self.version.is_empty()
    }

    /// Sets one field in place.
    pub fn set(&mut self, field: MetadataField, value: impl Into<String>) {
        let value = value.into();
        match field {
            MetadataField::Title => self.title = value,
            MetadataField::Description => self.description = value,
            MetadataField::Version => self.version = value,
        }
    }
}

/// Selects one [`SchemaMetadata`] field for targeted updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetadataField {
    Title,
    Description,
    Version,
}
