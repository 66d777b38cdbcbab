//! Subschema entry import tests.

use ldap_schema::error::SchemaError;
use ldap_schema::schema::{
    Schema, SchemaBuilder, SchemaEntrySource, StaticSchemaSource, StaticSourceError,
    SubschemaEntry,
};

use crate::assert_schema_error;
use crate::common::{core, init_logging};

const SUBSCHEMA_DN: &str = "cn=schema";

fn departmental_entry() -> SubschemaEntry {
    let mut entry = SubschemaEntry::new();
    entry.add_value(
        SubschemaEntry::ATTRIBUTE_TYPES,
        "( 1.3.6.1.4.1.99999.1.60 NAME 'costCentre' SUP name SINGLE-VALUE )",
    );
    entry.add_value(
        SubschemaEntry::OBJECT_CLASSES,
        "( 1.3.6.1.4.1.99999.2.60 NAME 'departmentMember' SUP top AUXILIARY MUST costCentre )",
    );
    entry
}

/// A source whose connection layer always fails.
struct UnreachableSource;

#[derive(Debug, thiserror::Error)]
#[error("directory unreachable")]
struct Unreachable;

impl SchemaEntrySource for UnreachableSource {
    type Error = Unreachable;

    async fn read_subschema_entry(&self, _dn: &str) -> Result<SubschemaEntry, Self::Error> {
        Err(Unreachable)
    }
}

#[tokio::test]
async fn test_import_from_static_source() {
    init_logging();
    let source = StaticSchemaSource::new().with_entry(SUBSCHEMA_DN, departmental_entry());

    let mut builder = SchemaBuilder::from_schema(core());
    builder
        .add_schema_from_source(&source, "CN=Schema", false)
        .await
        .unwrap();
    let schema = builder.to_schema().unwrap();

    let cost_centre = schema.get_attribute_type("costCentre").unwrap();
    assert!(cost_centre.is_single_value());
    let member = schema.get_object_class("departmentMember").unwrap();
    assert!(member.is_required(cost_centre));
}

#[tokio::test]
async fn test_missing_entry_is_a_source_error() {
    let source = StaticSchemaSource::new();
    let mut builder = SchemaBuilder::from_schema(core());
    let result = builder
        .add_schema_from_source(&source, SUBSCHEMA_DN, false)
        .await
        .map(|_| ());

    match result {
        Err(SchemaError::Source(error)) => {
            let source_error = error.downcast_ref::<StaticSourceError>().unwrap();
            assert_eq!(
                source_error,
                &StaticSourceError::NoSuchEntry {
                    dn: SUBSCHEMA_DN.to_string()
                }
            );
        }
        other => panic!("expected a source error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_connection_failure_is_wrapped() {
    let mut builder = SchemaBuilder::from_schema(core());
    let result = builder
        .add_schema_from_source(&UnreachableSource, SUBSCHEMA_DN, false)
        .await
        .map(|_| ());
    assert!(result.as_ref().is_err_and(|e| e.to_string().contains("directory unreachable")));
    assert_schema_error!(result, SchemaError::Source(_));
}

#[test]
fn test_undecodable_values_are_skipped_with_warnings() {
    init_logging();
    let mut entry = departmental_entry();
    entry.add_value(SubschemaEntry::ATTRIBUTE_TYPES, "( 1.3.6.1.4.1.99999.1.61 NAME 'broken' ");
    entry.add_value(SubschemaEntry::OBJECT_CLASSES, "not a definition");

    let mut builder = SchemaBuilder::from_schema(core());
    builder.add_subschema_entry(&entry, false).unwrap();
    assert_eq!(builder.warnings().len(), 2);

    let schema = builder.to_schema().unwrap();
    assert_eq!(schema.warnings().len(), 2);
    assert!(schema.has_attribute_type("costCentre"));
    assert!(!schema.has_attribute_type("broken"));
}

#[test]
fn test_conflicts_in_entries_still_fail() {
    let mut entry = SubschemaEntry::new();
    entry.add_value(
        SubschemaEntry::ATTRIBUTE_TYPES,
        "( 2.5.4.3 NAME 'shadowCn' SUP name )",
    );
    let mut builder = SchemaBuilder::from_schema(core());
    assert_schema_error!(
        builder.add_subschema_entry(&entry, false).map(|_| ()),
        SchemaError::Conflict { .. }
    );
}

#[test]
fn test_entry_round_trip_preserves_custom_elements() {
    let mut builder = SchemaBuilder::from_schema(core());
    builder.add_subschema_entry(&departmental_entry(), false).unwrap();
    let schema = builder.to_schema().unwrap();

    let entry = schema.to_subschema_entry();
    let json = serde_json::to_string(&entry).unwrap();
    let decoded: SubschemaEntry = serde_json::from_str(&json).unwrap();

    let mut copy = SchemaBuilder::new("Copy");
    copy.add_subschema_entry(&decoded, false).unwrap();
    let copy: Schema = copy.to_schema().unwrap();
    assert!(copy.has_object_class("departmentMember"));
    assert_eq!(
        copy.attribute_types().count(),
        schema.attribute_types().count()
    );
}
