//! Matching rules applied through the attribute types that use them.

use std::cmp::Ordering;

use ldap_schema::matching::ConditionResult;
use ldap_schema::schema::SchemaElement;

use super::extended;
use crate::common::builders::DefinitionSet;
use crate::common::core;
use crate::common::fixtures::{rfc_examples, values};

#[test]
fn test_case_ignore_equality_on_names() {
    let schema = core();
    let cn = schema.get_attribute_type("cn").unwrap();
    let rule = schema.equality_matching_rule_of(cn).unwrap();
    assert_eq!(rule.name(), Some("caseIgnoreMatch"));

    let assertion = rule.assertion(schema, b"Babs  Jensen").unwrap();
    assert!(assertion.matches(b" babs jensen ").is_true());
    assert!(assertion.matches(b"BABS\tJENSEN").is_true());
    assert_eq!(assertion.matches(b"Barbara Jensen"), ConditionResult::False);
}

#[test]
fn test_case_ignore_substrings() {
    let schema = core();
    let sn = schema.get_attribute_type("sn").unwrap();
    let rule = schema.substring_matching_rule_of(sn).unwrap();

    let assertion = rule
        .substring_assertion(schema, Some(&b"JEN"[..]), &[&b"s"[..]], Some(&b"N"[..]))
        .unwrap();
    assert!(assertion.matches(b"Jensen").is_true());
    assert_eq!(assertion.matches(b"Jenkins"), ConditionResult::False);

    let anywhere = rule.substring_assertion(schema, None, &[&b"ens"[..]], None).unwrap();
    assert!(anywhere.matches(b"Jensen").is_true());
    assert_eq!(anywhere.matches(b"Hansen"), ConditionResult::False);
}

#[test]
fn test_case_ignore_ordering_through_the_syntax_default() {
    let schema = core();
    let description = schema.get_attribute_type("description").unwrap();
    let rule = schema.ordering_matching_rule_of(description).unwrap();
    assert_eq!(rule.name(), Some("caseIgnoreOrderingMatch"));

    let from_m = rule.greater_or_equal_assertion(schema, b"M").unwrap();
    assert!(from_m.matches(b"zebra").is_true());
    assert!(from_m.matches(b"m").is_true());
    assert_eq!(from_m.matches(b"Apple"), ConditionResult::False);

    let normalized_a = rule.normalize_attribute_value(schema, b"apple").unwrap();
    let normalized_b = rule.normalize_attribute_value(schema, b"BANANA").unwrap();
    assert_eq!(rule.compare(&normalized_a, &normalized_b), Ordering::Less);
}

#[test]
fn test_equality_rule_without_ordering_is_undefined() {
    let schema = core();
    let rule = schema.get_matching_rule("caseIgnoreMatch").unwrap();
    let assertion = rule.greater_or_equal_assertion(schema, b"M").unwrap();
    assert_eq!(assertion.matches(b"zebra"), ConditionResult::Undefined);
    let assertion = rule.substring_assertion(schema, Some(&b"a"[..]), &[], None).unwrap();
    assert_eq!(assertion.matches(b"abc"), ConditionResult::Undefined);
}

#[test]
fn test_approximate_matching_by_sound() {
    let schema = core();
    let sn = schema.get_attribute_type("sn").unwrap();
    let rule = schema.approximate_matching_rule_of(sn).unwrap();
    assert_eq!(rule.name(), Some("ds-mr-double-metaphone-approx"));

    let assertion = rule.assertion(schema, b"Smyth").unwrap();
    assert!(assertion.matches(b"Smith").is_true());
    assert_eq!(assertion.matches(b"Jones"), ConditionResult::False);
}

#[test]
fn test_integer_matching() {
    let schema = core();
    let equality = schema.get_matching_rule("integerMatch").unwrap();
    let assertion = equality.assertion(schema, b"42").unwrap();
    assert!(assertion.matches(b"42").is_true());
    assert_eq!(assertion.matches(b"042"), ConditionResult::Undefined);

    let ordering = schema.get_matching_rule("integerOrderingMatch").unwrap();
    let at_least = ordering.greater_or_equal_assertion(schema, b"-5").unwrap();
    assert!(at_least.matches(b"10").is_true());
    assert!(at_least.matches(b"-5").is_true());
    assert_eq!(at_least.matches(b"-6"), ConditionResult::False);

    let at_most = ordering.less_or_equal_assertion(schema, b"100").unwrap();
    assert!(at_most.matches(b"99").is_true());
    assert_eq!(at_most.matches(b"1000"), ConditionResult::False);
}

#[test]
fn test_object_identifier_matching_resolves_names() {
    let schema = core();
    let object_class = schema.get_attribute_type("objectClass").unwrap();
    let rule = schema.equality_matching_rule_of(object_class).unwrap();
    let assertion = rule.assertion(schema, b"person").unwrap();
    assert!(assertion.matches(b"2.5.6.6").is_true());
    assert!(assertion.matches(b"PERSON").is_true());
    assert_eq!(assertion.matches(b"2.5.6.7"), ConditionResult::False);
}

#[test]
fn test_first_component_matching_on_subschema_values() {
    let schema = core();
    let attribute_types = schema.get_attribute_type("attributeTypes").unwrap();
    let rule = schema.equality_matching_rule_of(attribute_types).unwrap();
    assert_eq!(rule.name(), Some("objectIdentifierFirstComponentMatch"));

    let assertion = rule.assertion(schema, b"commonName").unwrap();
    assert!(assertion.matches(rfc_examples::CN_ATTRIBUTE_TYPE.as_bytes()).is_true());
    assert_eq!(
        assertion.matches(rfc_examples::NAME_ATTRIBUTE_TYPE.as_bytes()),
        ConditionResult::False
    );
}

#[test]
fn test_boolean_bit_string_and_uuid_matching() {
    let schema = extended();

    let locked = schema.get_attribute_type("accountLocked").unwrap();
    let rule = schema.equality_matching_rule_of(locked).unwrap();
    assert_eq!(rule.name(), Some("booleanMatch"));
    assert!(rule.assertion(schema, b"true").unwrap().matches(b"TRUE").is_true());

    let unique = schema.get_attribute_type("x500UniqueIdentifier").unwrap();
    let rule = schema.equality_matching_rule_of(unique).unwrap();
    let assertion = rule.assertion(schema, b"'0110'B").unwrap();
    assert!(assertion.matches(b"'011000'B").is_true());
    assert_eq!(assertion.matches(b"'0111'B"), ConditionResult::False);

    let entry_uuid = schema.get_attribute_type("entryUUID").unwrap();
    let rule = schema.equality_matching_rule_of(entry_uuid).unwrap();
    let assertion = rule.assertion(schema, values::UUID.to_uppercase().as_bytes()).unwrap();
    assert!(assertion.matches(values::UUID.as_bytes()).is_true());
}

#[test]
fn test_postal_address_lines_match_independently() {
    let schema = core();
    let postal = schema.get_attribute_type("postalAddress").unwrap();
    let rule = schema.equality_matching_rule_of(postal).unwrap();
    let assertion = rule.assertion(schema, b"1 Queen  St$AUCKLAND").unwrap();
    assert!(assertion.matches(b"1 queen st$Auckland").is_true());
    assert_eq!(assertion.matches(b"1 queen st auckland"), ConditionResult::False);
}

#[test]
fn test_word_and_keyword_matching() {
    let schema = core();
    let word = schema.get_matching_rule("wordMatch").unwrap();
    let assertion = word.assertion(schema, b"Smith").unwrap();
    assert!(assertion.matches(b"John Smith Jr").is_true());
    assert_eq!(assertion.matches(b"John Smithers"), ConditionResult::False);

    let keyword = schema.get_matching_rule("keywordMatch").unwrap();
    let assertion = keyword.assertion(schema, b"smith").unwrap();
    assert!(assertion.matches(b"Smith,John").is_true());
}

#[test]
fn test_enumeration_ordering() {
    let schema = extended();
    let priority = schema.get_attribute_type("ticketPriority").unwrap();

    let equality = schema.equality_matching_rule_of(priority).unwrap();
    assert!(equality.assertion(schema, b"HIGH").unwrap().matches(b"high").is_true());

    let ordering = schema.ordering_matching_rule_of(priority).unwrap();
    assert_eq!(ordering.name(), Some("enumOrderingMatch1.3.6.1.4.1.99999.4.1"));
    let at_least_medium = ordering.greater_or_equal_assertion(schema, b"medium").unwrap();
    assert!(at_least_medium.matches(b"high").is_true());
    assert!(at_least_medium.matches(b"Medium").is_true());
    assert_eq!(at_least_medium.matches(b"low"), ConditionResult::False);
    assert_eq!(at_least_medium.matches(b"urgent"), ConditionResult::Undefined);

    let below_high = ordering.assertion(schema, b"high").unwrap();
    assert!(below_high.matches(b"low").is_true());
    assert_eq!(below_high.matches(b"high"), ConditionResult::False);
}

#[test]
fn test_matching_rule_use_lookup() {
    let schema = DefinitionSet::new()
        .matching_rule_use(rfc_examples::MATCHING_RULE_USE)
        .build()
        .unwrap();
    let rule = schema.get_matching_rule("caseIgnoreMatch").unwrap();
    let rule_use = schema.matching_rule_use_for(rule).unwrap();
    assert_eq!(rule_use.attributes(), ["cn", "sn", "description"]);

    let integer = schema.get_matching_rule("integerMatch").unwrap();
    assert!(schema.matching_rule_use_for(integer).is_none());
}
