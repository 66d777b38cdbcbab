//! Telephone Number, Facsimile, Telex and Teletex values.

use ldap_schema::matching::ConditionResult;
use ldap_schema::schema::{SchemaElement, SchemaOptions};

use crate::common::builders::schema_with_options;
use crate::common::core;
use crate::{assert_value_accepted, assert_value_rejected};

fn strict_telephone_schema() -> ldap_schema::schema::Schema {
    schema_with_options(SchemaOptions {
        strict_format_for_telephone_numbers: true,
        ..Default::default()
    })
}

#[test]
fn test_lenient_telephone_numbers() {
    let schema = core();
    for value in ["+1 512 315 0280", "(03) 555-1234", "ext. 42"] {
        assert_value_accepted!(schema, "telephoneNumber", value);
    }
    assert_value_rejected!(schema, "telephoneNumber", "none");
    assert_value_rejected!(schema, "telephoneNumber", "");
    assert_value_rejected!(schema, "mobile", "021 555 0123 #2", at 13);
}

#[test]
fn test_strict_telephone_numbers() {
    let schema = strict_telephone_schema();
    assert_value_accepted!(&schema, "telephoneNumber", "+64 9-555-1234");
    assert_value_accepted!(&schema, "mobile", "+6421555012");
    assert_value_rejected!(&schema, "telephoneNumber", "09 555 1234", at 0);
    assert_value_rejected!(&schema, "telephoneNumber", "+64(9)5551234", at 3);
    assert_value_rejected!(&schema, "telephoneNumber", "+");
}

#[test]
fn test_facsimile_numbers() {
    let schema = core();
    assert_value_accepted!(schema, "facsimileTelephoneNumber", "+1 512 555 0100");
    assert_value_accepted!(
        schema,
        "facsimileTelephoneNumber",
        "+1 512 555 0100$twoDimensional$FINERESOLUTION"
    );
    assert_value_rejected!(schema, "facsimileTelephoneNumber", "+1 512 555 0100$colour", at 16);
    assert_value_rejected!(schema, "facsimileTelephoneNumber", "+1 512 555 0100$");
}

#[test]
fn test_telex_numbers() {
    let schema = core();
    assert_value_accepted!(schema, "telexNumber", "123$NZ$answer");
    assert_value_rejected!(schema, "telexNumber", "123$NZ");
    assert_value_rejected!(schema, "telexNumber", "123$NZ$a$b", at 8);
    assert_value_rejected!(schema, "telexNumber", "123$$answer", at 4);
}

#[test]
fn test_teletex_terminal_identifiers() {
    let schema = core();
    assert_value_accepted!(schema, "teletexTerminalIdentifier", "term");
    assert_value_accepted!(
        schema,
        "teletexTerminalIdentifier",
        r"term$graphic:abc$page:x\24y"
    );
    assert_value_rejected!(schema, "teletexTerminalIdentifier", "term$colour:red", at 5);
    assert_value_rejected!(schema, "teletexTerminalIdentifier", r"term$misc:a\zz", at 11);
    assert_value_rejected!(schema, "teletexTerminalIdentifier", "term$misc");
}

#[test]
fn test_telephone_number_matching_ignores_separators() {
    let schema = core();
    let phone = schema.get_attribute_type("telephoneNumber").unwrap();

    let equality = schema.equality_matching_rule_of(phone).unwrap();
    assert_eq!(equality.name(), Some("telephoneNumberMatch"));
    let assertion = equality.assertion(schema, b"+1 512-315-0280").unwrap();
    assert!(assertion.matches(b"+1 512 315 0280").is_true());
    assert!(assertion.matches(b"+15123150280").is_true());
    assert_eq!(assertion.matches(b"+1 512 315 0281"), ConditionResult::False);

    let substrings = schema.substring_matching_rule_of(phone).unwrap();
    let assertion = substrings
        .substring_assertion(schema, Some(&b"+1 512"[..]), &[], Some(&b"0280"[..]))
        .unwrap();
    assert!(assertion.matches(b"+1-512-315-0280").is_true());
    assert_eq!(assertion.matches(b"+1-512-315-0281"), ConditionResult::False);
}
