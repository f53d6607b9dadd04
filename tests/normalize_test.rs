use schematree::{
    generate_schema, normalize_for_type, ArrayConstraints, IdGenerator, NumericConstraints,
    PropertyKind, PropertyNode, PropertyType, SchemaMetadata, StringConstraints,
};

fn constrained_string(ids: &IdGenerator) -> PropertyNode {
    PropertyNode::new(
        ids.next_id(),
        "field",
        PropertyKind::String(
            StringConstraints::new()
                .min_length(1)
                .max_length(50)
                .pattern(r"^\w+$")
                .unwrap()
                .enum_values(["a", "b"]),
        ),
    )
    .required(true)
    .title("Field")
    .description("a field")
}

#[test]
fn test_switch_to_boolean_purges_string_constraints() {
    let ids = IdGenerator::new();
    let node = constrained_string(&ids);
    let retyped = normalize_for_type(&node, PropertyType::Boolean);

    assert_eq!(retyped.kind, PropertyKind::Boolean);

    // The purged constraints must not re-serialize either.
    let schema = generate_schema(&[retyped], &SchemaMetadata::new(), true);
    let sub = &schema["properties"]["field"];
    assert!(sub.get("minLength").is_none());
    assert!(sub.get("maxLength").is_none());
    assert!(sub.get("pattern").is_none());
    assert!(sub.get("enum").is_none());
}

#[test]
fn test_normalization_is_idempotent_for_all_types() {
    let ids = IdGenerator::new();
    let node = constrained_string(&ids);
    for ty in PropertyType::ALL {
        let once = normalize_for_type(&node, ty);
        let twice = normalize_for_type(&once, ty);
        assert_eq!(once, twice, "normalizing to {ty} twice changed the node");
    }
}

#[test]
fn test_same_type_switch_is_noop() {
    let ids = IdGenerator::new();
    let node = constrained_string(&ids);
    assert_eq!(normalize_for_type(&node, PropertyType::String), node);

    let object = PropertyNode::object(
        ids.next_id(),
        "outer",
        vec![PropertyNode::string(ids.next_id(), "inner")],
    );
    assert_eq!(normalize_for_type(&object, PropertyType::Object), object);
}

#[test]
fn test_universal_fields_always_preserved() {
    let ids = IdGenerator::new();
    let node = constrained_string(&ids);
    for ty in PropertyType::ALL {
        let retyped = normalize_for_type(&node, ty);
        assert_eq!(retyped.id, node.id);
        assert_eq!(retyped.key, node.key);
        assert_eq!(retyped.required, node.required);
        assert_eq!(retyped.title, node.title);
        assert_eq!(retyped.description, node.description);
    }
}

#[test]
fn test_number_integer_switch_keeps_bounds() {
    let ids = IdGenerator::new();
    let bounds = NumericConstraints::new().minimum(1).maximum(10);
    let node = PropertyNode::new(
        ids.next_id(),
        "count",
        PropertyKind::Integer(bounds.clone()),
    );

    let as_number = normalize_for_type(&node, PropertyType::Number);
    assert_eq!(as_number.kind, PropertyKind::Number(bounds.clone()));

    let back = normalize_for_type(&as_number, PropertyType::Integer);
    assert_eq!(back.kind, PropertyKind::Integer(bounds));
}

#[test]
fn test_leaving_object_discards_subtree() {
    let ids = IdGenerator::new();
    let node = PropertyNode::object(
        ids.next_id(),
        "config",
        vec![
            PropertyNode::string(ids.next_id(), "host"),
            PropertyNode::integer(ids.next_id(), "port"),
        ],
    );
    let retyped = normalize_for_type(&node, PropertyType::String);
    assert_eq!(
        retyped.kind,
        PropertyKind::String(StringConstraints::default())
    );

    // Coming back to object starts with an empty child list.
    let back = normalize_for_type(&retyped, PropertyType::Object);
    assert_eq!(back.children(), Some(&[][..]));
}

#[test]
fn test_scalar_to_array_starts_unconstrained() {
    let ids = IdGenerator::new();
    let node = constrained_string(&ids);
    let retyped = normalize_for_type(&node, PropertyType::Array);
    assert_eq!(retyped.kind, PropertyKind::Array(ArrayConstraints::default()));
}
