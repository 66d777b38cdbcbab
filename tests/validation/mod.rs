//! Validation tests module.
//!
//! Value acceptability and matching tests for the built-in syntaxes and
//! matching rules, organized by syntax family.

pub mod dn;
pub mod guide;
pub mod matching;
pub mod syntaxes;
pub mod telephone;
pub mod time;

use ldap_schema::schema::Schema;
use once_cell::sync::Lazy;

use crate::common::builders::DefinitionSet;

/// Attribute types for the syntaxes no core attribute type uses, plus one
/// attribute type per generated syntax flavour.
static EXTENDED: Lazy<Schema> = Lazy::new(|| {
    DefinitionSet::new()
        .syntax("( 1.3.6.1.4.1.99999.4.1 DESC 'Ticket priority' X-ENUM ( 'low' 'medium' 'high' ) )")
        .syntax("( 1.3.6.1.4.1.99999.4.2 DESC 'Staff code' X-PATTERN '[A-Z]{3}-[0-9]{4}' )")
        .syntax("( 1.3.6.1.4.1.99999.4.3 DESC 'Legacy counter' X-SUBST '1.3.6.1.4.1.1466.115.121.1.27' )")
        .attribute_type("( 1.3.6.1.4.1.99999.1.80 NAME 'lastLogonUtc' SYNTAX 1.3.6.1.4.1.1466.115.121.1.53 SINGLE-VALUE )")
        .attribute_type("( 1.3.6.1.4.1.99999.1.81 NAME 'accountLocked' SYNTAX 1.3.6.1.4.1.1466.115.121.1.7 SINGLE-VALUE )")
        .attribute_type("( 1.3.6.1.4.1.99999.1.82 NAME 'alternateMailbox' SYNTAX 1.3.6.1.4.1.1466.115.121.1.39 )")
        .attribute_type("( 1.3.6.1.4.1.99999.1.83 NAME 'storedPassword' SYNTAX 1.3.6.1.4.1.26027.1.3.1 )")
        .attribute_type("( 1.3.6.1.4.1.99999.1.84 NAME 'savedFilter' SYNTAX 1.3.6.1.4.1.1466.115.121.1.58 )")
        .attribute_type("( 1.3.6.1.4.1.99999.1.85 NAME 'revocationList' SYNTAX 1.3.6.1.4.1.1466.115.121.1.9 )")
        .attribute_type("( 1.3.6.1.4.1.99999.1.86 NAME 'ticketPriority' SYNTAX 1.3.6.1.4.1.99999.4.1 )")
        .attribute_type("( 1.3.6.1.4.1.99999.1.87 NAME 'staffCode' SYNTAX 1.3.6.1.4.1.99999.4.2 )")
        .attribute_type("( 1.3.6.1.4.1.99999.1.88 NAME 'legacyCounter' SYNTAX 1.3.6.1.4.1.99999.4.3 )")
        .build()
        .expect("extended test schema builds")
});

/// The core schema plus the attribute types above.
pub fn extended() -> &'static Schema {
    &EXTENDED
}

#[cfg(test)]
mod integration_tests {
    use super::*;
    use crate::common::fixtures::values;
    use crate::{assert_value_accepted, assert_value_rejected};

    #[test]
    fn test_extended_schema_keeps_core_elements() {
        let schema = extended();
        assert!(schema.has_object_class("inetOrgPerson"));
        assert!(schema.has_attribute_type("lastLogonUtc"));
        assert_eq!(schema.name(), "Test Schema");
        assert!(Schema::core_schema().get_attribute_type("lastLogonUtc").is_err());
    }

    #[test]
    fn test_values_across_syntax_families() {
        let schema = extended();
        assert_value_accepted!(schema, "cn", "Babs Jensen");
        assert_value_accepted!(schema, "entryUUID", values::UUID);
        assert_value_accepted!(schema, "createTimestamp", "20240229103059Z");
        assert_value_accepted!(schema, "member", "cn=admin,dc=example,dc=com");
        assert_value_accepted!(schema, "accountLocked", "TRUE");
        assert_value_rejected!(schema, "entryUUID", values::broken_uuid(), at 8);
        assert_value_rejected!(schema, "supportedLDAPVersion", "three");
    }
}
