//! Array property constraints.
//!
//! This module provides [`ArrayConstraints`], the constraint fields legal
//! for `array` properties: item count bounds, uniqueness, and an optional
//! item sub-schema.

use super::PropertyNode;

/// Constraint fields for an `array` property.
///
/// `items` is a full [`PropertyNode`] so an item schema can itself be an
/// object with children; its `key` and `required` flag are meaningless in
/// item position and are ignored when the schema is generated.
///
/// # Example
///
/// ```rust
/// use schematree::{ArrayConstraints, IdGenerator, PropertyNode};
///
/// let ids = IdGenerator::new();
/// let constraints = ArrayConstraints::new()
///     .min_items(1)
///     .unique_items(true)
///     .items(PropertyNode::string(ids.next_id(), ""));
///
/// assert_eq!(constraints.min_items, Some(1));
/// assert!(constraints.items.is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ArrayConstraints {
    /// Minimum item count (`minItems`).
    pub min_items: Option<u64>,
    /// Maximum item count (`maxItems`).
    pub max_items: Option<u64>,
    /// Whether items must be unique (`uniqueItems`).
    pub unique_items: Option<bool>,
    /// Sub-schema every item must satisfy (`items`).
    pub items: Option<Box<PropertyNode>>,
}

impl ArrayConstraints {
    /// Creates an empty constraint set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the minimum item count.
    pub fn min_items(mut self, min: u64) -> Self {
        self.min_items = Some(min);
        self
    }

    /// Sets the maximum item count.
    pub fn max_items(mut self, max: u64) -> Self {
        self.max_items = Some(max);
        self
    }

    /// Sets the uniqueness requirement.
    pub fn unique_items(mut self, unique: bool) -> Self {
        self.unique_items = Some(unique);
        self
    }

    /// Sets the item sub-schema.
    pub fn items(mut self, items: PropertyNode) -> Self {
        self.items = Some(Box::new(items));
        self
    }
}
