//! Resolution tests driven by RFC 4512 definitions.
//!
//! Each test layers a handful of definitions on the core schema and checks
//! either the resolved relationships or the error that stops the build.

use ldap_schema::error::{ElementKind, SchemaError};
use ldap_schema::schema::{ObjectClassKind, SchemaElement};

use crate::common::builders::DefinitionSet;
use crate::common::fixtures::rfc_examples;
use crate::common::{core, init_logging};
use crate::{assert_error_message_contains, assert_schema_error};

#[test]
fn test_subtype_inherits_equality_rule() {
    init_logging();
    let schema = DefinitionSet::new()
        .overwriting()
        .attribute_type(rfc_examples::CN_ATTRIBUTE_TYPE)
        .build()
        .unwrap();

    let cn = schema.get_attribute_type("cn").unwrap();
    assert_eq!(cn.equality_matching_rule(), None);
    assert_eq!(
        schema.equality_matching_rule_of(cn).and_then(|rule| rule.name()),
        Some("caseIgnoreMatch")
    );
    assert_eq!(cn.resolved().unwrap().superior.as_deref(), Some("2.5.4.41"));
    assert!(!cn.has_name("commonName"));
}

#[test]
fn test_content_rule_cannot_prohibit_superior_requirement() {
    let result = DefinitionSet::new()
        .content_rule("( 2.16.840.1.113730.3.2.2 NAME 'inetOrgPersonContent' NOT cn )")
        .build();

    assert_error_message_contains!(&result, "cn", "organizationalPerson");
    assert_schema_error!(result, SchemaError::ProhibitedAttributeRequired { .. });
}

#[test]
fn test_content_rule_resolution() {
    let schema = DefinitionSet::new()
        .content_rule(rfc_examples::CONTENT_RULE)
        .build()
        .unwrap();

    let rule = schema.get_dit_content_rule("personContent").unwrap();
    let resolved = rule.resolved().unwrap();
    assert_eq!(resolved.structural_class, "2.5.6.6");
    assert_eq!(resolved.auxiliary_classes, vec!["1.3.6.1.1.3.1".to_string()]);
    assert_eq!(resolved.required, vec!["2.5.4.20".to_string()]);
    assert_eq!(resolved.prohibited, vec!["2.5.4.34".to_string()]);

    let person = schema.get_object_class("person").unwrap();
    assert!(schema.dit_content_rule_for(person).is_some());
    assert!(schema.has_dit_content_rule("person"));
}

#[test]
fn test_name_form_and_structure_rule_from_definitions() {
    let schema = DefinitionSet::new()
        .name_form(rfc_examples::UID_NAME_FORM)
        .structure_rule(rfc_examples::STRUCTURE_RULE)
        .build()
        .unwrap();

    let form = schema.get_name_form("uidNameForm").unwrap();
    let resolved = form.resolved().unwrap();
    assert_eq!(resolved.structural_class, "2.16.840.1.113730.3.2.2");
    assert_eq!(resolved.required, vec!["0.9.2342.19200300.100.1.1".to_string()]);

    let rule = schema.get_dit_structure_rule("personRule").unwrap();
    assert_eq!(rule.identifier(), "1");
    assert_eq!(schema.dit_structure_rules_for(form).len(), 1);
}

#[test]
fn test_structure_rule_with_unknown_name_form() {
    let result = DefinitionSet::new()
        .structure_rule("( 5 NAME 'lost' FORM noSuchForm )")
        .build();
    assert_schema_error!(
        result,
        SchemaError::UnresolvedReference {
            kind: ElementKind::DitStructureRule,
            reference_kind: ElementKind::NameForm,
            ..
        }
    );
}

#[test]
fn test_name_form_with_unknown_attribute() {
    let result = DefinitionSet::new()
        .name_form("( 1.3.6.1.4.1.99999.3.9 NAME 'badForm' OC person MUST shoeSize )")
        .build();
    assert_error_message_contains!(&result, "badForm", "shoeSize");
    assert_schema_error!(
        result,
        SchemaError::UnresolvedReference {
            reference_kind: ElementKind::AttributeType,
            ..
        }
    );
}

#[test]
fn test_unknown_equality_rule() {
    let result = DefinitionSet::new()
        .attribute_type(
            "( 1.3.6.1.4.1.99999.1.50 NAME 'oddly' SUP name EQUALITY fuzzyishMatch )",
        )
        .build();
    assert_schema_error!(
        result,
        SchemaError::UnresolvedReference {
            kind: ElementKind::AttributeType,
            reference_kind: ElementKind::MatchingRule,
            ..
        }
    );
}

#[test]
fn test_approximate_rule_from_extension() {
    let schema = DefinitionSet::new()
        .attribute_type(
            "( 1.3.6.1.4.1.99999.1.51 NAME 'soundsLike' SYNTAX 1.3.6.1.4.1.1466.115.121.1.26 \
             X-APPROX 'ds-mr-double-metaphone-approx' )",
        )
        .build()
        .unwrap();

    let sounds_like = schema.get_attribute_type("soundsLike").unwrap();
    assert_eq!(
        sounds_like.approximate_matching_rule(),
        Some("ds-mr-double-metaphone-approx")
    );
    let rule = schema.approximate_matching_rule_of(sounds_like).unwrap();
    assert_eq!(rule.name(), Some("ds-mr-double-metaphone-approx"));
}

#[test]
fn test_matching_rule_with_unknown_syntax() {
    let result = DefinitionSet::new()
        .matching_rule("( 1.3.6.1.4.1.99999.5.1 NAME 'strangeMatch' SYNTAX 1.2.3.4.5 )")
        .build();
    assert_schema_error!(
        result,
        SchemaError::UnresolvedReference {
            kind: ElementKind::MatchingRule,
            reference_kind: ElementKind::Syntax,
            ..
        }
    );
}

#[test]
fn test_matching_rule_use_with_unknown_attribute() {
    let result = DefinitionSet::new()
        .matching_rule_use("( 2.5.13.2 NAME 'caseIgnoreUse' APPLIES ( cn $ noSuchAttribute ) )")
        .build();
    assert_schema_error!(
        result,
        SchemaError::UnresolvedReference {
            kind: ElementKind::MatchingRuleUse,
            ..
        }
    );
}

#[test]
fn test_structural_class_with_auxiliary_superior() {
    let result = DefinitionSet::new()
        .object_class(
            "( 1.3.6.1.4.1.99999.2.30 NAME 'contractor' SUP ( organizationalPerson $ uidObject ) STRUCTURAL )",
        )
        .build();
    match result {
        Err(SchemaError::InvalidSuperiorKind {
            object_class,
            superior,
            ..
        }) => {
            assert_eq!(object_class, "contractor");
            assert_eq!(superior, "uidObject");
        }
        other => panic!("expected an invalid superior kind, got {other:?}"),
    }
}

#[test]
fn test_auxiliary_class_with_several_superiors() {
    let schema = DefinitionSet::new()
        .object_class(
            "( 1.3.6.1.4.1.99999.2.31 NAME 'domainAccount' SUP ( dcObject $ uidObject ) AUXILIARY \
             MAY description )",
        )
        .build()
        .unwrap();

    let account = schema.get_object_class("domainAccount").unwrap();
    assert_eq!(account.object_class_kind(), ObjectClassKind::Auxiliary);
    let resolved = account.resolved().unwrap();
    assert_eq!(resolved.superiors.len(), 2);
    assert!(resolved.required.contains("0.9.2342.19200300.100.1.25"));
    assert!(resolved.required.contains("0.9.2342.19200300.100.1.1"));
    assert!(resolved.ancestors.contains("2.5.6.0"));
    assert_eq!(resolved.declared_optional, vec!["2.5.4.13".to_string()]);
}

#[test]
fn test_abstract_class_cannot_derive_from_structural() {
    let result = DefinitionSet::new()
        .object_class("( 1.3.6.1.4.1.99999.2.32 NAME 'abstractPerson' SUP person ABSTRACT )")
        .build();
    assert_schema_error!(result, SchemaError::InvalidSuperiorKind { .. });
}

#[test]
fn test_circular_object_class_inheritance() {
    let result = DefinitionSet::new()
        .object_class("( 1.3.6.1.4.1.99999.2.33 NAME 'chicken' SUP egg AUXILIARY )")
        .object_class("( 1.3.6.1.4.1.99999.2.34 NAME 'egg' SUP chicken AUXILIARY )")
        .build();
    assert_schema_error!(
        result,
        SchemaError::CircularInheritance {
            kind: ElementKind::ObjectClass,
            ..
        }
    );
}

#[test]
fn test_collective_flag_must_match_superior() {
    let result = DefinitionSet::new()
        .attribute_type("( 1.3.6.1.4.1.99999.1.53 NAME 'c-locality' SUP l COLLECTIVE )")
        .build();
    assert_schema_error!(result, SchemaError::CollectiveMismatch { .. });
}

#[test]
fn test_core_schema_relationships() {
    let schema = core();
    let top = schema.get_object_class("top").unwrap();
    assert_eq!(top.object_class_kind(), ObjectClassKind::Abstract);
    assert!(top.resolved().unwrap().ancestors.is_empty());

    let extensible = schema.get_object_class("extensibleObject").unwrap();
    assert!(extensible.is_extensible_object());

    let inet_org_person = schema.get_object_class("inetOrgPerson").unwrap();
    for ancestor in ["organizationalPerson", "person", "top"] {
        let oid = schema.get_object_class(ancestor).unwrap().oid();
        assert!(inet_org_person.is_descendant_of(oid), "{ancestor}");
    }

    let create_timestamp = schema.get_attribute_type("createTimestamp").unwrap();
    assert!(create_timestamp.is_operational());
    assert!(create_timestamp.is_no_user_modification());

    let given_name = schema.get_attribute_type("givenName").unwrap();
    assert!(given_name.is_subtype_of("2.5.4.41"));
    assert_eq!(schema.oid_for_name("givenName").as_deref(), Some("2.5.4.42"));
}
