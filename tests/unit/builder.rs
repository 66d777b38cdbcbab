//! Schema builder tests.

use ldap_schema::error::{ElementKind, SchemaError};
use ldap_schema::schema::{
    AttributeType, ObjectClass, ObjectClassKind, Schema, SchemaBuilder, SchemaElement,
    SchemaOptions,
};

use crate::common::builders::DefinitionSet;
use crate::common::{core, init_logging};
use crate::{assert_error_message_contains, assert_schema_error};

#[test]
fn test_conflicting_identifier_names_both_elements() {
    init_logging();
    let result = DefinitionSet::new()
        .attribute_type("( 1.2.3.4 NAME 'employeeBadge' SUP name )")
        .attribute_type("( 1.2.3.4 NAME 'visitorBadge' SUP name )")
        .build();

    assert_error_message_contains!(&result, "employeeBadge", "visitorBadge", "1.2.3.4");
    match result {
        Err(SchemaError::Conflict {
            kind,
            identifier,
            new_name,
            existing_name,
        }) => {
            assert_eq!(kind, ElementKind::AttributeType);
            assert_eq!(identifier, "1.2.3.4");
            assert_eq!(new_name, "visitorBadge");
            assert_eq!(existing_name, "employeeBadge");
        }
        other => panic!("expected a conflict, got {other:?}"),
    }
}

#[test]
fn test_overwrite_replaces_names() {
    let schema = DefinitionSet::new()
        .overwriting()
        .attribute_type("( 1.2.3.4 NAME 'employeeBadge' SUP name )")
        .attribute_type("( 1.2.3.4 NAME 'visitorBadge' SUP name )")
        .build()
        .unwrap();

    assert!(schema.get_attribute_type("employeeBadge").unwrap_err().is_not_found());
    let badge = schema.get_attribute_type("visitorBadge").unwrap();
    assert_eq!(badge.oid(), "1.2.3.4");
    assert_eq!(schema.attribute_types_with_name("employeeBadge").len(), 0);
}

#[test]
fn test_overwriting_a_core_element() {
    let mut builder = SchemaBuilder::from_schema(core());
    builder
        .add_attribute_type_definition(
            "( 2.5.4.3 NAME ( 'cn' 'commonName' ) SUP name SINGLE-VALUE )",
            true,
        )
        .unwrap();
    let schema = builder.to_schema().unwrap();

    assert!(schema.get_attribute_type("cn").unwrap().is_single_value());
    assert!(!core().get_attribute_type("cn").unwrap().is_single_value());
}

#[test]
fn test_structured_elements() {
    let mut builder = SchemaBuilder::from_schema(core()).with_name("Structured");
    builder
        .add_attribute_type(
            AttributeType::new("1.3.6.1.4.1.99999.1.10")
                .with_name("shoeSize")
                .with_syntax("1.3.6.1.4.1.1466.115.121.1.27")
                .with_single_value(true),
            false,
        )
        .unwrap()
        .add_object_class(
            ObjectClass::new("1.3.6.1.4.1.99999.2.10")
                .with_name("shopper")
                .with_superiors(["top"])
                .with_kind(ObjectClassKind::Auxiliary)
                .with_optional_attributes(["shoeSize"]),
            false,
        )
        .unwrap();
    let schema = builder.to_schema().unwrap();

    assert_eq!(schema.name(), "Structured");
    let shoe_size = schema.get_attribute_type("shoeSize").unwrap();
    assert_eq!(
        schema.equality_matching_rule_of(shoe_size).map(|rule| rule.oid()),
        Some("2.5.13.14")
    );
    let shopper = schema.get_object_class("shopper").unwrap();
    assert!(shopper.is_optional(shoe_size));
    assert!(shopper.definition().contains("AUXILIARY"));
}

#[test]
fn test_remove_then_build() {
    let mut builder = SchemaBuilder::from_schema(core());
    assert!(!builder.remove_dit_structure_rule(99));
    assert!(builder.remove_object_class("inetOrgPerson"));
    let schema = builder.to_schema().unwrap();

    assert!(!schema.has_object_class("inetOrgPerson"));
    assert!(schema.has_object_class("organizationalPerson"));
    assert!(core().has_object_class("inetOrgPerson"));
}

#[test]
fn test_removing_a_referenced_element_breaks_the_build() {
    let mut builder = SchemaBuilder::from_schema(core());
    assert!(builder.remove_attribute_type("sn"));
    assert_schema_error!(
        builder.to_schema(),
        SchemaError::UnresolvedReference {
            reference_kind: ElementKind::AttributeType,
            ..
        }
    );
}

#[test]
fn test_add_schema_merges_elements() {
    let extra = DefinitionSet::new()
        .attribute_type("( 1.3.6.1.4.1.99999.1.20 NAME 'favouriteColour' SUP name )")
        .build()
        .unwrap();

    let mut builder = SchemaBuilder::from_schema(core());
    assert_schema_error!(
        builder.add_schema(&extra, false).map(|_| ()),
        SchemaError::Conflict { .. }
    );

    let mut builder = SchemaBuilder::from_schema(core());
    builder.add_schema(&extra, true).unwrap();
    let merged = builder.to_schema().unwrap();
    assert!(merged.has_attribute_type("favouriteColour"));
}

#[test]
fn test_empty_builder_borrows_implementations_from_core() {
    let mut builder = SchemaBuilder::new("Standalone");
    builder
        .add_syntax_definition("( 1.3.6.1.4.1.1466.115.121.1.27 DESC 'INTEGER' )", false)
        .unwrap()
        .add_matching_rule_definition(
            "( 2.5.13.14 NAME 'integerMatch' SYNTAX 1.3.6.1.4.1.1466.115.121.1.27 )",
            false,
        )
        .unwrap()
        .add_attribute_type_definition(
            "( 1.3.6.1.4.1.99999.1.30 NAME 'floor' EQUALITY integerMatch \
             SYNTAX 1.3.6.1.4.1.1466.115.121.1.27 )",
            false,
        )
        .unwrap();
    let schema = builder.to_schema().unwrap();

    let floor = schema.get_attribute_type("floor").unwrap();
    assert!(schema.value_is_acceptable(floor, b"12").is_ok());
    assert!(schema.value_is_acceptable(floor, b"twelve").is_err());
    assert!(!schema.has_attribute_type("cn"));
}

#[test]
fn test_options_travel_with_the_schema() {
    let options = SchemaOptions {
        allow_zero_length_directory_strings: true,
        ..Default::default()
    };
    let mut builder = SchemaBuilder::from_schema(core()).with_options(options.clone());
    assert_eq!(builder.options(), &options);
    builder.options_mut().strict_format_for_telephone_numbers = true;
    let schema = builder.to_schema().unwrap();

    assert!(schema.options().allow_zero_length_directory_strings);
    assert!(schema.options().strict_format_for_telephone_numbers);

    let copy = SchemaBuilder::from_schema(&schema).to_schema().unwrap();
    assert_eq!(copy.options(), schema.options());
}

#[test]
fn test_schema_snapshots_are_independent() {
    let first = DefinitionSet::new()
        .attribute_type("( 1.3.6.1.4.1.99999.1.40 NAME 'snapshotOne' SUP name )")
        .build()
        .unwrap();
    let mut builder = SchemaBuilder::from_schema(&first);
    builder.remove_attribute_type("snapshotOne");
    let second = builder.to_schema().unwrap();

    assert!(first.has_attribute_type("snapshotOne"));
    assert!(!second.has_attribute_type("snapshotOne"));
}

#[test]
fn test_core_schema_is_shared() {
    assert!(std::ptr::eq(Schema::core_schema(), core()));
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| Schema::core_schema().has_object_class("person")))
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
