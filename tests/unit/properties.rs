//! Property-based tests for the definition grammar and core value rules.

use ldap_schema::schema::parser::{parse_attribute_type, parse_object_class};
use ldap_schema::schema::reader::is_numeric_oid;
use ldap_schema::schema::{
    AttributeType, ObjectClass, ObjectClassKind, SchemaBuilder, SchemaElement,
    StaticSchemaSource, SubschemaEntry,
};
use proptest::prelude::*;

use crate::common::core;

/// Dotted-decimal OIDs of one to eight arcs
fn numeric_oid_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(0u32..100_000, 1..8).prop_map(|arcs| {
        arcs.iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(".")
    })
}

fn descr_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9-]{0,24}"
}

proptest! {
    #[test]
    fn test_numeric_oids_are_recognised(oid in numeric_oid_strategy()) {
        prop_assert!(is_numeric_oid(&oid));
        let doubled = format!("{oid}..1");
        prop_assert!(!is_numeric_oid(&doubled));
        let trailing = format!("{oid}.");
        prop_assert!(!is_numeric_oid(&trailing));
    }

    #[test]
    fn test_descriptors_are_not_numeric_oids(name in descr_strategy()) {
        prop_assert!(!is_numeric_oid(&name));
    }

    #[test]
    fn test_synthesized_definitions_parse_back(
        oid in numeric_oid_strategy(),
        names in prop::collection::vec(descr_strategy(), 1..4),
        description in "[ -~]{0,40}",
        single_value in any::<bool>(),
    ) {
        let attribute = AttributeType::new(oid.clone())
            .with_names(names.clone())
            .with_description(description.clone())
            .with_superior("name")
            .with_single_value(single_value);

        let parsed = parse_attribute_type(&attribute.definition()).unwrap();
        prop_assert_eq!(parsed.oid(), oid.as_str());
        prop_assert_eq!(parsed.names(), names.as_slice());
        prop_assert_eq!(parsed.description(), Some(description.as_str()));
        prop_assert_eq!(parsed.is_single_value(), single_value);
    }

    #[test]
    fn test_object_class_definitions_parse_back(
        oid in numeric_oid_strategy(),
        names in prop::collection::vec(descr_strategy(), 1..3),
        kind in prop_oneof![
            Just(ObjectClassKind::Abstract),
            Just(ObjectClassKind::Structural),
            Just(ObjectClassKind::Auxiliary),
        ],
        required in prop::collection::vec(descr_strategy(), 0..4),
        origins in prop::collection::vec("[a-zA-Z0-9]{1,12}", 1..4),
    ) {
        let class = ObjectClass::new(oid)
            .with_names(names)
            .with_superiors(["top"])
            .with_kind(kind)
            .with_required_attributes(required)
            .with_extension("X-ORIGIN", origins);

        let parsed = parse_object_class(&class.definition()).unwrap();
        prop_assert_eq!(parsed, class);
    }

    #[test]
    fn test_integer_ordering_matches_numeric_order(left in any::<i64>(), right in any::<i64>()) {
        let schema = core();
        let rule = schema.get_matching_rule("integerOrderingMatch").unwrap();
        let left_normalized = rule.normalize_attribute_value(schema, left.to_string().as_bytes()).unwrap();
        let right_normalized = rule.normalize_attribute_value(schema, right.to_string().as_bytes()).unwrap();
        prop_assert_eq!(rule.compare(&left_normalized, &right_normalized), left.cmp(&right));
    }

    #[test]
    fn test_generated_uuids_are_acceptable(bits in any::<u128>()) {
        let schema = core();
        let entry_uuid = schema.get_attribute_type("entryUUID").unwrap();
        let value = uuid::Uuid::from_u128(bits).to_string();
        prop_assert!(schema.value_is_acceptable(entry_uuid, value.as_bytes()).is_ok());
    }

    #[test]
    fn test_source_import_accepts_generated_names(name in descr_strategy()) {
        tokio_test::block_on(async {
            let mut entry = SubschemaEntry::new();
            entry.add_value(
                SubschemaEntry::ATTRIBUTE_TYPES,
                format!("( 1.3.6.1.4.1.99999.1.70 NAME '{name}' SUP name )"),
            );
            let source = StaticSchemaSource::new().with_entry("cn=schema", entry);

            let mut builder = SchemaBuilder::from_schema(core());
            builder.add_schema_from_source(&source, "cn=schema", false).await.unwrap();
            let schema = builder.to_schema().unwrap();
            // Generated names may collide with core names
            let matches = schema.attribute_types_with_name(&name);
            assert!(matches.iter().any(|attribute| attribute.oid() == "1.3.6.1.4.1.99999.1.70"));
        });
    }
}
