//! Type-change constraint cleanup.
//!
//! Changing a property's type must not leave constraints behind that are
//! illegal for the new type. [`normalize_for_type`] returns a copy of the
//! node retyped to the target type, keeping every field that remains
//! legal and dropping the rest.

use crate::node::{PropertyKind, PropertyNode, PropertyType};

/// Returns a copy of `node` retyped to `new_type`.
///
/// Universal fields (`id`, `key`, `required`, `title`, `description`)
/// always survive. Constraints survive only where legal for the new
/// type; concretely, `minimum`/`maximum` carry across number/integer
/// switches, since both types share the same constraint set. Everything
/// else starts fresh. Retyping to the current type is a no-op.
///
/// Switching away from `object` discards the node's children entirely.
/// This is a deliberate, lossy transition; hosts should confirm it with
/// the user before calling.
///
/// The function is pure and idempotent.
///
/// # Example
///
/// ```rust
/// use schematree::{
///     normalize_for_type, IdGenerator, PropertyKind, PropertyNode, PropertyType,
///     StringConstraints,
/// };
///
/// let ids = IdGenerator::new();
/// let node = PropertyNode::new(
///     ids.next_id(),
///     "name",
///     PropertyKind::String(StringConstraints::new().min_length(3)),
/// );
///
/// let retyped = normalize_for_type(&node, PropertyType::Boolean);
/// assert_eq!(retyped.kind, PropertyKind::Boolean);
/// assert_eq!(retyped.key, node.key);
/// assert_eq!(retyped.id, node.id);
/// ```
pub fn normalize_for_type(node: &PropertyNode, new_type: PropertyType) -> PropertyNode {
    let kind = match (&node.kind, new_type) {
        (kind, ty) if kind.property_type() == ty => kind.clone(),
        (PropertyKind::Number(bounds), PropertyType::Integer) => {
            PropertyKind::Integer(bounds.clone())
        }
        (PropertyKind::Integer(bounds), PropertyType::Number) => {
            PropertyKind::Number(bounds.clone())
        }
        (_, ty) => PropertyKind::empty(ty),
    };

    PropertyNode {
        kind,
        ..node.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{ArrayConstraints, NumericConstraints, StringConstraints};
    use crate::IdGenerator;

    fn string_node(ids: &IdGenerator) -> PropertyNode {
        PropertyNode::new(
            ids.next_id(),
            "field",
            PropertyKind::String(StringConstraints::new().min_length(1).max_length(9)),
        )
        .required(true)
        .title("Field")
    }

    #[test]
    fn test_same_type_is_noop() {
        let ids = IdGenerator::new();
        let node = string_node(&ids);
        assert_eq!(normalize_for_type(&node, PropertyType::String), node);
    }

    #[test]
    fn test_idempotent() {
        let ids = IdGenerator::new();
        let node = string_node(&ids);
        let once = normalize_for_type(&node, PropertyType::Array);
        let twice = normalize_for_type(&once, PropertyType::Array);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_universal_fields_survive() {
        let ids = IdGenerator::new();
        let node = string_node(&ids);
        let retyped = normalize_for_type(&node, PropertyType::Integer);
        assert_eq!(retyped.id, node.id);
        assert_eq!(retyped.key, node.key);
        assert_eq!(retyped.required, node.required);
        assert_eq!(retyped.title, node.title);
        assert_eq!(retyped.description, node.description);
    }

    #[test]
    fn test_string_constraints_purged() {
        let ids = IdGenerator::new();
        let node = string_node(&ids);
        let retyped = normalize_for_type(&node, PropertyType::Boolean);
        assert_eq!(retyped.kind, PropertyKind::Boolean);
    }

    #[test]
    fn test_number_integer_bounds_carry_over() {
        let ids = IdGenerator::new();
        let bounds = NumericConstraints::new().minimum(0).maximum(10);
        let node = PropertyNode::new(
            ids.next_id(),
            "count",
            PropertyKind::Number(bounds.clone()),
        );
        let retyped = normalize_for_type(&node, PropertyType::Integer);
        assert_eq!(retyped.kind, PropertyKind::Integer(bounds.clone()));
        let back = normalize_for_type(&retyped, PropertyType::Number);
        assert_eq!(back.kind, PropertyKind::Number(bounds));
    }

    #[test]
    fn test_leaving_object_discards_children() {
        let ids = IdGenerator::new();
        let child = PropertyNode::string(ids.next_id(), "inner");
        let node = PropertyNode::object(ids.next_id(), "outer", vec![child]);
        let retyped = normalize_for_type(&node, PropertyType::Array);
        assert_eq!(retyped.kind, PropertyKind::Array(ArrayConstraints::default()));
    }
}
