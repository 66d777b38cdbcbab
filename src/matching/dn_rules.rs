//! `distinguishedNameMatch` and `uniqueMemberMatch`.

use super::{Assertion, EqualityAssertion, MatchingRuleImpl};
use crate::dn::DistinguishedName;
use crate::error::{ValidationError, ValidationResult};
use crate::schema::Schema;
use crate::syntax::identifiers::split_optional_uid;

fn text<'a>(rule: &str, value: &'a [u8]) -> ValidationResult<&'a str> {
    std::str::from_utf8(value).map_err(|_| ValidationError::NotUtf8 {
        syntax: rule.to_string(),
    })
}

/// DNs match when their RDNs match pairwise, each AVA compared with its
/// attribute type's equality rule.
#[derive(Debug, Default, Clone, Copy)]
pub struct DistinguishedNameEqualityMatchingRule;

impl MatchingRuleImpl for DistinguishedNameEqualityMatchingRule {
    fn normalize_attribute_value(&self, schema: &Schema, value: &[u8]) -> ValidationResult<Vec<u8>> {
        DistinguishedName::parse(text("distinguishedNameMatch", value)?)?.normalize(schema)
    }

    fn assertion(&self, schema: &Schema, value: &[u8]) -> ValidationResult<Box<dyn Assertion>> {
        Ok(Box::new(EqualityAssertion::new(
            self.normalize_attribute_value(schema, value)?,
        )))
    }
}

/// Name And Optional UID equality: the DN part compares as a DN and the
/// optional `#'bits'B` suffix compares exactly.
#[derive(Debug, Default, Clone, Copy)]
pub struct UniqueMemberEqualityMatchingRule;

impl MatchingRuleImpl for UniqueMemberEqualityMatchingRule {
    fn normalize_attribute_value(&self, schema: &Schema, value: &[u8]) -> ValidationResult<Vec<u8>> {
        let (dn, uid) = split_optional_uid(text("uniqueMemberMatch", value)?.trim());
        let mut normalized = DistinguishedName::parse(dn)?.normalize(schema)?;
        if let Some(uid) = uid {
            normalized.push(b'#');
            normalized.extend_from_slice(uid.as_bytes());
        }
        Ok(normalized)
    }

    fn assertion(&self, schema: &Schema, value: &[u8]) -> ValidationResult<Box<dyn Assertion>> {
        Ok(Box::new(EqualityAssertion::new(
            self.normalize_attribute_value(schema, value)?,
        )))
    }
}
