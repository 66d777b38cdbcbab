//! UTC Time and Generalized Time values and their matching rules.

use chrono::{Datelike, Timelike};
use ldap_schema::error::ValidationError;
use ldap_schema::matching::ConditionResult;
use ldap_schema::schema::SchemaElement;
use ldap_schema::syntax::time::{parse_generalized_time, parse_utc_time, scan_generalized_time};

use super::extended;
use crate::common::core;
use crate::common::fixtures::values;
use crate::{assert_value_accepted, assert_value_rejected};

#[test]
fn test_utc_time_fixtures() {
    let schema = extended();
    for value in values::VALID_UTC_TIMES {
        assert_value_accepted!(schema, "lastLogonUtc", value);
    }
    for value in values::INVALID_UTC_TIMES {
        assert_value_rejected!(schema, "lastLogonUtc", value);
    }
}

#[test]
fn test_utc_time_error_positions() {
    let schema = extended();
    assert_value_rejected!(schema, "lastLogonUtc", "9913010000Z", at 3);
    assert_value_rejected!(schema, "lastLogonUtc", "9900010000Z", at 3);
    assert_value_rejected!(schema, "lastLogonUtc", "9912312459Z", at 7);
    assert_value_rejected!(schema, "lastLogonUtc", "9912312359X", at 10);
    let error = assert_value_rejected!(schema, "lastLogonUtc", "99123123");
    assert!(matches!(error, ValidationError::TooShort { .. }));
}

#[test]
fn test_utc_time_century_pivot() {
    assert_eq!(parse_utc_time("4912312359Z").unwrap().year(), 2049);
    assert_eq!(parse_utc_time("5001010000Z").unwrap().year(), 1950);

    let schema = extended();
    let last_logon = schema.get_attribute_type("lastLogonUtc").unwrap();
    let ordering = schema.ordering_matching_rule_of(last_logon).unwrap();
    assert_eq!(ordering.name(), Some("uTCTimeOrderingMatch"));
    let since_1950 = ordering.greater_or_equal_assertion(schema, b"5001010000Z").unwrap();
    assert!(since_1950.matches(b"4912312359Z").is_true());
    assert_eq!(since_1950.matches(b"4912312359+0000"), ConditionResult::True);
}

#[test]
fn test_generalized_time_fixtures() {
    let schema = core();
    for value in values::VALID_GENERALIZED_TIMES {
        assert_value_accepted!(schema, "createTimestamp", value);
    }
    for value in values::INVALID_GENERALIZED_TIMES {
        assert_value_rejected!(schema, "createTimestamp", value);
    }
}

#[test]
fn test_generalized_time_components() {
    let components = scan_generalized_time("2024022910Z").unwrap();
    assert_eq!((components.year, components.month, components.day), (2024, 2, 29));
    assert_eq!(components.minute, None);
    assert_eq!(components.second, None);

    let components = scan_generalized_time("20240229103059.123-0800").unwrap();
    assert_eq!(components.fraction, Some((123, 3)));
    assert_eq!(components.offset_seconds, -8 * 3600);
}

#[test]
fn test_generalized_time_conversion() {
    let instant = parse_generalized_time("2024022910,5-0800").unwrap();
    assert_eq!((instant.hour(), instant.minute()), (18, 30));

    // A leap second lands on the next minute
    let leap = parse_generalized_time("20161231235960Z").unwrap();
    assert_eq!(leap, parse_generalized_time("20170101000000Z").unwrap());

    // Syntax checks are not calendar aware but conversion is
    assert_value_accepted!(core(), "createTimestamp", "20230231000000Z");
    assert!(parse_generalized_time("20230231000000Z").is_err());
}

#[test]
fn test_generalized_time_matching_across_zones() {
    let schema = core();
    let created = schema.get_attribute_type("createTimestamp").unwrap();

    let equality = schema.equality_matching_rule_of(created).unwrap();
    let assertion = equality.assertion(schema, b"20240101120000+0100").unwrap();
    assert!(assertion.matches(b"20240101110000Z").is_true());
    assert_eq!(assertion.matches(b"20240101120000Z"), ConditionResult::False);

    let assertion = equality.assertion(schema, b"2024010111,5Z").unwrap();
    assert!(assertion.matches(b"20240101113000Z").is_true());

    // Candidates that cannot be normalized are undefined
    assert_eq!(assertion.matches(b"yesterday"), ConditionResult::Undefined);
}

#[test]
fn test_generalized_time_ordering() {
    let schema = core();
    let created = schema.get_attribute_type("createTimestamp").unwrap();
    let ordering = schema.ordering_matching_rule_of(created).unwrap();

    let not_before = ordering.greater_or_equal_assertion(schema, b"20240101000000Z").unwrap();
    assert!(not_before.matches(b"20240101000000Z").is_true());
    assert!(not_before.matches(b"20240101010000+0100").is_true());
    assert_eq!(not_before.matches(b"20231231235959Z"), ConditionResult::False);

    let not_after = ordering.less_or_equal_assertion(schema, b"20240101000000Z").unwrap();
    assert!(not_after.matches(b"20231231235959Z").is_true());
    assert_eq!(not_after.matches(b"20240101000001Z"), ConditionResult::False);

    // The plain assertion of an ordering rule is "less than"
    let before = ordering.assertion(schema, b"20240101000000Z").unwrap();
    assert!(before.matches(b"20231231235959Z").is_true());
    assert_eq!(before.matches(b"20240101000000Z"), ConditionResult::False);
}
