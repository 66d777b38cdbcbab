//! DN values, parsing and `distinguishedNameMatch`.

use ldap_schema::dn::DistinguishedName;
use ldap_schema::matching::ConditionResult;
use ldap_schema::schema::SchemaElement;

use crate::common::core;
use crate::{assert_value_accepted, assert_value_rejected};

#[test]
fn test_dn_values() {
    let schema = core();
    for value in [
        "cn=admin,dc=example,dc=com",
        "",
        "uid=bjensen+cn=Babs Jensen, ou=People; dc=example",
        r"cn=Smith\, John,o=Example",
        "2.5.4.3=#04024869,o=Example",
        r#"cn="Jensen, Babs",o=Example"#,
    ] {
        assert_value_accepted!(schema, "member", value);
    }
    assert_value_rejected!(schema, "member", "admin");
    assert_value_rejected!(schema, "member", "cn=a,");
    assert_value_rejected!(schema, "distinguishedName", "cn=a, ou=b\"c", at 10);
    assert_value_rejected!(schema, "seeAlso", r"cn=a\zz");
}

#[test]
fn test_dn_structure() {
    let dn: DistinguishedName = "uid=bjensen+cn=Babs Jensen,ou=People,dc=example,dc=com"
        .parse()
        .unwrap();
    assert_eq!(dn.len(), 4);
    let rdn = dn.rdn().unwrap();
    assert_eq!(rdn.avas().len(), 2);
    assert!(rdn.has_attribute_type("CN"));
    assert_eq!(rdn.avas()[1].value(), b"Babs Jensen");

    let parent = dn.parent().unwrap();
    assert_eq!(parent.to_string(), "ou=People,dc=example,dc=com");
    assert!(DistinguishedName::root().parent().is_none());
}

#[test]
fn test_dn_matching_uses_attribute_equality_rules() {
    let schema = core();
    let member = schema.get_attribute_type("member").unwrap();
    let rule = schema.equality_matching_rule_of(member).unwrap();
    assert_eq!(rule.name(), Some("distinguishedNameMatch"));

    let assertion = rule
        .assertion(schema, b"CN=Babs  Jensen+UID=bjensen, DC=Example,DC=COM")
        .unwrap();
    assert!(assertion
        .matches(b"uid=BJENSEN+cn=babs jensen,dc=example,dc=com")
        .is_true());
    assert!(assertion
        .matches(b"2.5.4.3=babs jensen+0.9.2342.19200300.100.1.1=bjensen,dc=example,dc=com")
        .is_true());
    assert_eq!(
        assertion.matches(b"cn=babs jensen+uid=bjensen,dc=example,dc=org"),
        ConditionResult::False
    );
    assert_eq!(assertion.matches(b"not a dn"), ConditionResult::Undefined);
}

#[test]
fn test_unique_member_matching_keeps_the_uid() {
    let schema = core();
    let unique_member = schema.get_attribute_type("uniqueMember").unwrap();
    let rule = schema.equality_matching_rule_of(unique_member).unwrap();
    assert_eq!(rule.name(), Some("uniqueMemberMatch"));

    let assertion = rule.assertion(schema, b"CN=Staff,DC=Example#'0101'B").unwrap();
    assert!(assertion.matches(b"cn=staff,dc=example#'0101'B").is_true());
    assert_eq!(assertion.matches(b"cn=staff,dc=example"), ConditionResult::False);
}
