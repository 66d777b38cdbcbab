//! Identifier syntaxes: UUID, DN, Name And Optional UID and Substring
//! Assertion.

use super::strings::BitStringSyntax;
use super::{SyntaxImpl, as_utf8};
use crate::dn::DistinguishedName;
use crate::error::{ValidationError, ValidationResult};
use crate::schema::Schema;
use crate::schema::oids::*;

/// RFC 4530 UUID: `8-4-4-4-12` hexadecimal digits.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidSyntax;

impl UuidSyntax {
    const HYPHENS: [usize; 4] = [8, 13, 18, 23];
}

impl SyntaxImpl for UuidSyntax {
    fn name(&self) -> &str {
        "UUID"
    }

    fn equality_matching_rule(&self) -> Option<&str> {
        Some(EMR_UUID)
    }

    fn ordering_matching_rule(&self) -> Option<&str> {
        Some(OMR_UUID)
    }

    fn value_is_acceptable(&self, _schema: &Schema, value: &[u8]) -> ValidationResult<()> {
        let text = as_utf8(self.name(), value)?;
        if text.len() != 36 {
            return Err(ValidationError::invalid(
                self.name(),
                text,
                format!("expected 36 characters but found {}", text.len()),
            ));
        }
        for (i, c) in text.char_indices() {
            let acceptable = if Self::HYPHENS.contains(&i) {
                c == '-'
            } else {
                c.is_ascii_hexdigit()
            };
            if !acceptable {
                return Err(ValidationError::illegal_character(self.name(), text, c, i));
            }
        }
        Ok(())
    }
}

/// RFC 4517 DN.
#[derive(Debug, Default, Clone, Copy)]
pub struct DistinguishedNameSyntax;

impl SyntaxImpl for DistinguishedNameSyntax {
    fn name(&self) -> &str {
        "DN"
    }

    fn equality_matching_rule(&self) -> Option<&str> {
        Some(EMR_DISTINGUISHED_NAME)
    }

    fn value_is_acceptable(&self, _schema: &Schema, value: &[u8]) -> ValidationResult<()> {
        DistinguishedName::parse(as_utf8(self.name(), value)?).map(|_| ())
    }
}

/// Split a Name And Optional UID value into the DN and the optional bit string.
pub(crate) fn split_optional_uid(text: &str) -> (&str, Option<&str>) {
    match text.rfind("#'") {
        Some(sharp) if text.ends_with("'B") && sharp + 2 < text.len() => {
            (&text[..sharp], Some(&text[sharp + 1..]))
        }
        _ => (text, None),
    }
}

/// RFC 4517 Name And Optional UID: `distinguishedName [ "#" BitString ]`.
#[derive(Debug, Default, Clone, Copy)]
pub struct NameAndOptionalUidSyntax;

impl SyntaxImpl for NameAndOptionalUidSyntax {
    fn name(&self) -> &str {
        "Name And Optional UID"
    }

    fn equality_matching_rule(&self) -> Option<&str> {
        Some(EMR_UNIQUE_MEMBER)
    }

    fn value_is_acceptable(&self, schema: &Schema, value: &[u8]) -> ValidationResult<()> {
        let text = as_utf8(self.name(), value)?;
        let (dn, uid) = split_optional_uid(text);
        DistinguishedName::parse(dn).map_err(|e| {
            ValidationError::invalid(self.name(), text, format!("invalid DN: {e}"))
        })?;
        if let Some(uid) = uid {
            BitStringSyntax
                .value_is_acceptable(schema, uid.as_bytes())
                .map_err(|e| ValidationError::invalid(self.name(), text, format!("invalid UID: {e}")))?;
        }
        Ok(())
    }
}

/// RFC 4517 Substring Assertion: `[initial] * *(substring *) [final]`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SubstringAssertionSyntax;

impl SyntaxImpl for SubstringAssertionSyntax {
    fn name(&self) -> &str {
        "Substring Assertion"
    }

    fn equality_matching_rule(&self) -> Option<&str> {
        Some(EMR_CASE_IGNORE)
    }

    fn ordering_matching_rule(&self) -> Option<&str> {
        Some(OMR_CASE_IGNORE)
    }

    fn substring_matching_rule(&self) -> Option<&str> {
        Some(SMR_CASE_IGNORE)
    }

    fn value_is_acceptable(&self, _schema: &Schema, value: &[u8]) -> ValidationResult<()> {
        let text = as_utf8(self.name(), value)?;
        if !text.contains('*') {
            return Err(ValidationError::invalid(
                self.name(),
                text,
                "a substring assertion must contain '*'",
            ));
        }
        let bytes = text.as_bytes();
        let mut i = 0;
        while i < bytes.len() {
            match bytes[i] {
                b'*' if bytes.get(i + 1) == Some(&b'*') => {
                    return Err(ValidationError::component(
                        self.name(),
                        text,
                        i + 1,
                        "consecutive '*' characters",
                    ));
                }
                b'\\' => {
                    let escape = text.get(i + 1..i + 3).unwrap_or("");
                    if !(escape.eq_ignore_ascii_case("2a") || escape.eq_ignore_ascii_case("5c")) {
                        return Err(ValidationError::component(
                            self.name(),
                            text,
                            i,
                            "a backslash must be followed by 2A or 5C",
                        ));
                    }
                    i += 2;
                }
                _ => {}
            }
            i += 1;
        }
        Ok(())
    }
}
