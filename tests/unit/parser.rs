//! Definition decoding tests.
//!
//! Every failure carries the 0-based position of the offending character so
//! administrators can find it in long subschema values.

use ldap_schema::error::{DecodeError, ElementKind};
use ldap_schema::schema::parser::{
    check_definition, parse_attribute_type, parse_dit_content_rule, parse_dit_structure_rule,
    parse_matching_rule, parse_matching_rule_use, parse_name_form, parse_object_class,
    parse_syntax,
};
use ldap_schema::schema::{AttributeUsage, ObjectClassKind, SchemaElement};

use crate::common::fixtures::rfc_examples;

#[test]
fn test_rfc_examples_decode() {
    let name = parse_attribute_type(rfc_examples::NAME_ATTRIBUTE_TYPE).unwrap();
    assert_eq!(name.syntax(), Some("1.3.6.1.4.1.1466.115.121.1.15"));
    assert_eq!(name.syntax_length(), Some(32768));
    assert_eq!(name.substring_matching_rule(), Some("caseIgnoreSubstringsMatch"));

    let cn = parse_attribute_type(rfc_examples::CN_ATTRIBUTE_TYPE).unwrap();
    assert_eq!(cn.superior(), Some("name"));
    assert_eq!(cn.syntax(), None);

    let timestamp = parse_attribute_type(rfc_examples::CREATE_TIMESTAMP).unwrap();
    assert_eq!(timestamp.usage(), AttributeUsage::DirectoryOperation);
    assert!(timestamp.is_operational());
    assert_eq!(timestamp.ordering_matching_rule(), Some("generalizedTimeOrderingMatch"));

    let person = parse_object_class(rfc_examples::PERSON_OBJECT_CLASS).unwrap();
    assert_eq!(person.object_class_kind(), ObjectClassKind::Structural);
    assert_eq!(person.optional_attributes().len(), 4);

    let extensible = parse_object_class(rfc_examples::EXTENSIBLE_OBJECT).unwrap();
    assert_eq!(extensible.object_class_kind(), ObjectClassKind::Auxiliary);

    let rule = parse_matching_rule(rfc_examples::CASE_IGNORE_MATCH).unwrap();
    assert_eq!(rule.syntax(), "1.3.6.1.4.1.1466.115.121.1.15");

    let syntax = parse_syntax(rfc_examples::DIRECTORY_STRING_SYNTAX).unwrap();
    assert_eq!(syntax.description(), Some("Directory String"));
}

#[test]
fn test_rule_definitions_decode() {
    let form = parse_name_form(rfc_examples::UID_NAME_FORM).unwrap();
    assert_eq!(form.structural_class(), "inetOrgPerson");
    assert_eq!(form.required_attributes(), ["uid"]);
    assert!(form.optional_attributes().is_empty());

    let structure = parse_dit_structure_rule(rfc_examples::STRUCTURE_RULE).unwrap();
    assert_eq!(structure.rule_id(), 1);
    assert_eq!(structure.name_form(), "uidNameForm");
    assert!(structure.superior_rules().is_empty());

    let content = parse_dit_content_rule(rfc_examples::CONTENT_RULE).unwrap();
    assert_eq!(content.structural_class(), "2.5.6.6");
    assert_eq!(content.auxiliary_classes(), ["uidObject"]);
    assert_eq!(content.required_attributes(), ["telephoneNumber"]);
    assert_eq!(content.optional_attributes(), ["description"]);
    assert_eq!(content.prohibited_attributes(), ["seeAlso"]);

    let rule_use = parse_matching_rule_use(rfc_examples::MATCHING_RULE_USE).unwrap();
    assert_eq!(rule_use.matching_rule_oid(), "2.5.13.2");
    assert_eq!(rule_use.attributes(), ["cn", "sn", "description"]);
}

#[test]
fn test_keywords_ignore_case() {
    let attribute =
        parse_attribute_type("( 1.2.3 name 'lower' sup name single-value usage dSAOperation )")
            .unwrap();
    assert_eq!(attribute.name(), Some("lower"));
    assert!(attribute.is_single_value());
    assert_eq!(attribute.usage(), AttributeUsage::DsaOperation);
}

#[test]
fn test_repeated_keyword_keeps_last_value() {
    let attribute = parse_attribute_type("( 1.2.3 SUP name DESC 'first' DESC 'second' )").unwrap();
    assert_eq!(attribute.description(), Some("second"));
}

#[test]
fn test_multiple_names_and_obsolete() {
    let class = parse_object_class("( 1.2.3 NAME ( 'first' 'second' ) OBSOLETE AUXILIARY )").unwrap();
    assert_eq!(class.names(), ["first", "second"]);
    assert_eq!(class.name(), Some("first"));
    assert!(class.is_obsolete());
    assert!(class.has_name("SECOND"));
}

#[test]
fn test_escaped_description() {
    let syntax = parse_syntax(r"( 1.2.3 DESC 'O\27Brien' )").unwrap();
    assert_eq!(syntax.description(), Some("O'Brien"));
}

#[test]
fn test_error_positions() {
    // Missing opening parenthesis
    let error = parse_attribute_type("2.5.4.3 NAME 'cn' )").unwrap_err();
    assert!(matches!(
        error,
        DecodeError::UnexpectedCharacter { position: 0, character: '2', .. }
    ));

    // A name starting with a digit
    let error = parse_attribute_type("( 1.2.3 NAME '9lives' SUP name )").unwrap_err();
    assert!(matches!(error, DecodeError::IllegalIdentifier { position: 14, .. }));

    // A keyword the element kind does not know
    let error = parse_syntax("( 1.2.3 SUP name )").unwrap_err();
    assert_eq!(
        error,
        DecodeError::UnexpectedToken {
            position: 8,
            token: "SUP".to_string()
        }
    );
}

#[test]
fn test_missing_mandatory_tokens_name_the_element() {
    let error = parse_attribute_type("( 1.2.3 NAME 'orphan' )").unwrap_err();
    match error {
        DecodeError::MissingToken { kind, element, token, .. } => {
            assert_eq!(kind, ElementKind::AttributeType);
            assert_eq!(element, "1.2.3");
            assert_eq!(token, "SUP or SYNTAX");
        }
        other => panic!("expected a missing token error, got {other:?}"),
    }
}

#[test]
fn test_rule_id_must_be_numeric() {
    let error = parse_dit_structure_rule("( x FORM someForm )").unwrap_err();
    assert_eq!(error.position(), 2);
    assert!(parse_dit_structure_rule("( 7 FORM someForm SUP ( 1 x ) )").is_err());
}

#[test]
fn test_check_definition_dispatches_on_kind() {
    assert!(check_definition(ElementKind::AttributeType, rfc_examples::CN_ATTRIBUTE_TYPE).is_ok());
    assert!(check_definition(ElementKind::ObjectClass, rfc_examples::CN_ATTRIBUTE_TYPE).is_err());
    assert!(check_definition(ElementKind::DitStructureRule, rfc_examples::STRUCTURE_RULE).is_ok());
    assert!(check_definition(ElementKind::Syntax, "( 1.2.3 )").is_ok());
}

#[test]
fn test_generated_syntax_errors() {
    let error = parse_syntax("( 1.2.3 X-PATTERN '[unclosed' )").unwrap_err();
    assert!(matches!(error, DecodeError::InvalidPattern { .. }));
    assert!(error.to_string().contains("[unclosed"));
}
