//! Value acceptability for the string, scalar, identifier and binary
//! syntaxes.

use ldap_schema::error::ValidationError;
use ldap_schema::schema::{SchemaElement, SchemaOptions};

use super::extended;
use crate::common::builders::schema_with_options;
use crate::common::fixtures::values;
use crate::common::{core, init_logging};
use crate::{assert_value_accepted, assert_value_rejected};

#[test]
fn test_directory_string_rejects_empty_values_by_default() {
    init_logging();
    assert_value_accepted!(core(), "description", "Head office, level 3");
    let error = assert_value_rejected!(core(), "description", "");
    assert!(matches!(error, ValidationError::EmptyValue { .. }));

    let lenient = schema_with_options(SchemaOptions {
        allow_zero_length_directory_strings: true,
        ..Default::default()
    });
    assert_value_accepted!(&lenient, "description", "");
}

#[test]
fn test_textual_syntaxes_reject_invalid_utf8() {
    let error = assert_value_rejected!(core(), "description", b"caf\xe9");
    assert!(matches!(error, ValidationError::NotUtf8 { .. }));
    assert_eq!(error.position(), None);
}

#[test]
fn test_ia5_printable_and_numeric_strings() {
    let schema = core();
    assert_value_accepted!(schema, "mail", "bjensen@example.com");
    assert_value_rejected!(schema, "mail", "caf\u{e9}@example.com", at 3);

    assert_value_accepted!(schema, "serialNumber", "SN-1234 (A)");
    assert_value_rejected!(schema, "serialNumber", "a@b", at 1);
    assert_value_rejected!(schema, "serialNumber", "");

    assert_value_accepted!(schema, "x121Address", "1234 5678");
    assert_value_rejected!(schema, "x121Address", "12a", at 2);
}

#[test]
fn test_country_string_strictness_follows_options() {
    assert_value_accepted!(core(), "c", "NZ");
    assert_value_rejected!(core(), "c", "nz", at 0);
    assert_value_rejected!(core(), "c", "NZL");

    let relaxed = schema_with_options(SchemaOptions {
        strict_format_for_country_strings: false,
        ..Default::default()
    });
    assert_value_accepted!(&relaxed, "c", "nz");
    assert_value_rejected!(&relaxed, "c", "n$", at 1);
}

#[test]
fn test_boolean_values_ignore_case() {
    let schema = extended();
    for value in ["TRUE", "FALSE", "true", "False"] {
        assert_value_accepted!(schema, "accountLocked", value);
    }
    assert_value_rejected!(schema, "accountLocked", "yes");
    assert_value_rejected!(schema, "accountLocked", "");
}

#[test]
fn test_integer_values() {
    let schema = core();
    for value in ["0", "3", "-17", "123456789012345678901234567890"] {
        assert_value_accepted!(schema, "supportedLDAPVersion", value);
    }
    for value in ["", "-", "007", "-0", "+3", "1.5"] {
        assert_value_rejected!(schema, "supportedLDAPVersion", value);
    }
    assert_value_rejected!(schema, "supportedLDAPVersion", "12x4", at 2);
}

#[test]
fn test_bit_string_values() {
    let schema = core();
    assert_value_accepted!(schema, "x500UniqueIdentifier", "'0101'B");
    assert_value_accepted!(schema, "x500UniqueIdentifier", "''B");
    assert_value_rejected!(schema, "x500UniqueIdentifier", "'0121'B", at 3);
    assert_value_rejected!(schema, "x500UniqueIdentifier", "0101", at 0);
}

#[test]
fn test_oid_values() {
    let schema = core();
    assert_value_accepted!(schema, "objectClass", "2.5.6.6");
    assert_value_accepted!(schema, "objectClass", "inetOrgPerson");
    assert_value_rejected!(schema, "objectClass", "2.5..3", at 4);
    assert_value_rejected!(schema, "objectClass", "2.5.6.");
    assert_value_rejected!(schema, "objectClass", "");
}

#[test]
fn test_uuid_values() {
    let schema = core();
    assert_value_accepted!(schema, "entryUUID", values::UUID);
    assert_value_accepted!(schema, "entryUUID", values::UUID.to_uppercase());
    assert_value_rejected!(schema, "entryUUID", values::broken_uuid(), at 8);
    assert_value_rejected!(schema, "entryUUID", &values::UUID[..35]);
}

#[test]
fn test_postal_and_delivery_values() {
    let schema = core();
    assert_value_accepted!(schema, "postalAddress", "1 Queen St$Auckland 1010$New Zealand");
    assert_value_accepted!(schema, "postalAddress", r"Unit \24 5$Auckland");
    assert_value_rejected!(schema, "postalAddress", "line$$line", at 5);
    assert_value_rejected!(schema, "postalAddress", r"line\x", at 4);

    assert_value_accepted!(schema, "preferredDeliveryMethod", "telephone $ physical");
    assert_value_accepted!(schema, "preferredDeliveryMethod", "ANY");
    assert_value_rejected!(schema, "preferredDeliveryMethod", "mhs $ pigeon", at 6);
}

#[test]
fn test_other_mailbox_values() {
    let schema = extended();
    assert_value_accepted!(schema, "alternateMailbox", "internet$bjensen@example.com");
    assert_value_rejected!(schema, "alternateMailbox", "internet");
    assert_value_rejected!(schema, "alternateMailbox", "internet$");
}

#[test]
fn test_password_storage_values() {
    let schema = extended();
    assert_value_accepted!(schema, "authPassword", "SHA256$c2FsdA==$aGFzaGVkdmFsdWU=");
    assert_value_accepted!(schema, "authPassword", "MD5 $ c2FsdA== $ aGFzaGVkdmFsdWU=");
    assert_value_rejected!(schema, "authPassword", "sha256$c2FsdA==$aGFzaGVkdmFsdWU=", at 0);
    assert_value_rejected!(schema, "authPassword", "SHA256$c2FsdA==");
    assert_value_rejected!(schema, "authPassword", "SHA256$$aGFzaGVkdmFsdWU=", at 7);

    assert_value_accepted!(schema, "storedPassword", "{SSHA}abcdef");
    assert_value_rejected!(schema, "storedPassword", "SSHA}abcdef", at 0);
    assert_value_rejected!(schema, "storedPassword", "{}abcdef", at 1);
    assert_value_rejected!(schema, "storedPassword", "{SS HA}abcdef", at 3);

    let stored = schema.get_attribute_type("storedPassword").unwrap();
    assert!(!schema.syntax_of(stored).unwrap().is_human_readable());
}

#[test]
fn test_binary_values() {
    let schema = extended();
    assert_value_accepted!(schema, "jpegPhoto", [0xff_u8, 0xd8, 0xff, 0xe0]);
    assert_value_rejected!(schema, "jpegPhoto", b"GIF89a");

    let certificate = [0x30_u8, 0x03, 0x02, 0x01, 0x05];
    assert_value_accepted!(schema, "userCertificate", certificate);
    assert_value_rejected!(schema, "userCertificate", [0x31_u8, 0x00]);
    assert_value_rejected!(schema, "userCertificate", [0x30_u8, 0x05, 0x02]);
    assert_value_accepted!(schema, "revocationList", certificate);

    let user_certificate = schema.get_attribute_type("userCertificate").unwrap();
    assert!(schema.syntax_of(user_certificate).unwrap().is_ber_encoding_required());

    // Octet strings accept anything
    assert_value_accepted!(schema, "userPassword", [0x00_u8, 0xff]);
}

#[test]
fn test_definition_values() {
    let schema = core();
    assert_value_accepted!(
        schema,
        "attributeTypes",
        "( 1.2.3 NAME 'x' SYNTAX 1.3.6.1.4.1.1466.115.121.1.15 )"
    );
    assert_value_rejected!(schema, "attributeTypes", "( 1.2.3 NAME 'x' BOGUS )", at 17);
    assert_value_accepted!(
        schema,
        "objectClasses",
        "( 1.2.4 NAME 'y' SUP top AUXILIARY MAY description )"
    );
    assert_value_rejected!(schema, "objectClasses", "( 1.2.4 NAME 'y' SYNTAX 1.2.3 )");
}

#[test]
fn test_substring_assertion_values() {
    let schema = extended();
    assert_value_accepted!(schema, "savedFilter", "jo*sm*th");
    assert_value_accepted!(schema, "savedFilter", r"*100\2a*");
    assert_value_rejected!(schema, "savedFilter", "josmith");
    assert_value_rejected!(schema, "savedFilter", "jo**th", at 3);
}

#[test]
fn test_name_and_optional_uid_values() {
    let schema = core();
    assert_value_accepted!(schema, "uniqueMember", "cn=Staff,dc=example,dc=com");
    assert_value_accepted!(schema, "uniqueMember", "cn=Staff,dc=example,dc=com#'0101'B");
    assert_value_rejected!(schema, "uniqueMember", "cn=Staff,dc=example,dc=com#'0121'B");
    assert_value_rejected!(schema, "uniqueMember", "not a dn");
}

#[test]
fn test_generated_syntaxes() {
    let schema = extended();
    assert_value_accepted!(schema, "ticketPriority", "Medium");
    assert_value_rejected!(schema, "ticketPriority", "urgent");

    assert_value_accepted!(schema, "staffCode", "ABC-1234");
    assert_value_rejected!(schema, "staffCode", "abc-1234");
    assert_value_rejected!(schema, "staffCode", "XABC-1234");

    assert_value_accepted!(schema, "legacyCounter", "12");
    assert_value_rejected!(schema, "legacyCounter", "twelve");
    let counter = schema.get_attribute_type("legacyCounter").unwrap();
    assert_eq!(
        schema.equality_matching_rule_of(counter).and_then(|rule| rule.name()),
        Some("integerMatch")
    );
}
