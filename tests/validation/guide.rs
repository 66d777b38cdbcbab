//! Guide and Enhanced Guide values.

use ldap_schema::error::ValidationError;
use ldap_schema::syntax::guide::MAX_CRITERIA_NESTING;

use crate::common::builders::DefinitionSet;
use crate::common::core;
use crate::common::fixtures::values;
use crate::{assert_value_accepted, assert_value_rejected};

#[test]
fn test_guide_fixtures() {
    let schema = core();
    for value in values::VALID_GUIDES {
        assert_value_accepted!(schema, "searchGuide", value);
    }
    for value in values::INVALID_GUIDES {
        assert_value_rejected!(schema, "searchGuide", value);
    }
}

#[test]
fn test_guide_error_positions() {
    let schema = core();
    assert_value_rejected!(schema, "searchGuide", "(cn$eq|)", at 7);
    assert_value_rejected!(schema, "searchGuide", "cn$bogus", at 3);
    assert_value_rejected!(schema, "searchGuide", "(cn$eq", at 6);
    assert_value_rejected!(schema, "searchGuide", "cn$eq)", at 5);
    assert_value_rejected!(schema, "searchGuide", "person#cn$eq|", at 13);
    assert_value_rejected!(schema, "searchGuide", "  nosuchclass#cn$eq", at 2);
    let error = assert_value_rejected!(schema, "searchGuide", "");
    assert!(matches!(error, ValidationError::EmptyValue { .. }));
}

#[test]
fn test_guide_object_class_must_exist_in_the_schema() {
    assert_value_rejected!(core(), "searchGuide", "shopper#(cn$eq)", at 0);

    let schema = DefinitionSet::new()
        .object_class("( 1.3.6.1.4.1.99999.2.40 NAME 'shopper' SUP top AUXILIARY MAY cn )")
        .build()
        .unwrap();
    assert_value_accepted!(&schema, "searchGuide", "shopper#(cn$eq)");
    assert_value_accepted!(&schema, "searchGuide", "1.3.6.1.4.1.99999.2.40#(cn$eq)");
}

#[test]
fn test_enhanced_guide_values() {
    let schema = core();
    assert_value_accepted!(schema, "enhancedSearchGuide", "person # (cn$eq) # wholeSubtree");
    assert_value_accepted!(schema, "enhancedSearchGuide", "person#cn$eq&sn$substr#oneLevel");
    assert_value_accepted!(schema, "enhancedSearchGuide", "person#?false#baseObject");

    assert_value_rejected!(schema, "enhancedSearchGuide", "person#cn$eq#everything", at 13);
    assert_value_rejected!(schema, "enhancedSearchGuide", "nosuchclass # cn$eq # oneLevel", at 0);
    assert_value_rejected!(schema, "enhancedSearchGuide", "person # cn$eq& # oneLevel");

    let error = assert_value_rejected!(schema, "enhancedSearchGuide", "person#cn$eq");
    assert!(error.position().is_none());
}

#[test]
fn test_deeply_nested_guides_are_rejected() {
    let schema = core();
    let value = format!("person#{}cn$eq{}", "(".repeat(100_000), ")".repeat(100_000));
    assert_value_rejected!(schema, "searchGuide", value.as_str(), at 7 + MAX_CRITERIA_NESTING);

    let value = format!("person # {}cn$eq # oneLevel", "!".repeat(100_000));
    assert_value_rejected!(schema, "enhancedSearchGuide", value.as_str());
}
