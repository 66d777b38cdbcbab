//! Character-string syntaxes and the small scalar syntaxes (Boolean, Integer,
//! Bit String, OID).

use super::{SyntaxImpl, as_utf8, check_printable_string, is_printable_char};
use crate::error::{ValidationError, ValidationResult};
use crate::schema::Schema;
use crate::schema::oids::*;
use crate::schema::reader::{check_descr, is_numeric_oid};

/// RFC 4517 Directory String: one or more UTF-8 characters.
///
/// Zero-length values are rejected unless
/// [`SchemaOptions::allow_zero_length_directory_strings`](crate::schema::SchemaOptions)
/// is set.
#[derive(Debug, Default, Clone, Copy)]
pub struct DirectoryStringSyntax;

impl SyntaxImpl for DirectoryStringSyntax {
    fn name(&self) -> &str {
        "Directory String"
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

    fn approximate_matching_rule(&self) -> Option<&str> {
        Some(AMR_DOUBLE_METAPHONE)
    }

    fn value_is_acceptable(&self, schema: &Schema, value: &[u8]) -> ValidationResult<()> {
        as_utf8(self.name(), value)?;
        if value.is_empty() && !schema.options().allow_zero_length_directory_strings {
            return Err(ValidationError::empty(self.name()));
        }
        Ok(())
    }
}

/// RFC 4517 IA5 String: ASCII characters only.
#[derive(Debug, Default, Clone, Copy)]
pub struct Ia5StringSyntax;

impl SyntaxImpl for Ia5StringSyntax {
    fn name(&self) -> &str {
        "IA5 String"
    }

    fn equality_matching_rule(&self) -> Option<&str> {
        Some(EMR_CASE_IGNORE_IA5)
    }

    fn ordering_matching_rule(&self) -> Option<&str> {
        Some(OMR_CASE_IGNORE)
    }

    fn substring_matching_rule(&self) -> Option<&str> {
        Some(SMR_CASE_IGNORE_IA5)
    }

    fn approximate_matching_rule(&self) -> Option<&str> {
        Some(AMR_DOUBLE_METAPHONE)
    }

    fn value_is_acceptable(&self, _schema: &Schema, value: &[u8]) -> ValidationResult<()> {
        match value.iter().position(|b| !b.is_ascii()) {
            Some(position) => Err(ValidationError::illegal_character(
                self.name(),
                String::from_utf8_lossy(value),
                char::from(value[position]),
                position,
            )),
            None => Ok(()),
        }
    }
}

/// RFC 4517 Printable String.
#[derive(Debug, Default, Clone, Copy)]
pub struct PrintableStringSyntax;

impl SyntaxImpl for PrintableStringSyntax {
    fn name(&self) -> &str {
        "Printable String"
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

    fn approximate_matching_rule(&self) -> Option<&str> {
        Some(AMR_DOUBLE_METAPHONE)
    }

    fn value_is_acceptable(&self, _schema: &Schema, value: &[u8]) -> ValidationResult<()> {
        let text = as_utf8(self.name(), value)?;
        if text.is_empty() {
            return Err(ValidationError::empty(self.name()));
        }
        check_printable_string(self.name(), text, text, 0)
    }
}

/// RFC 4517 Numeric String: digits and spaces.
#[derive(Debug, Default, Clone, Copy)]
pub struct NumericStringSyntax;

impl SyntaxImpl for NumericStringSyntax {
    fn name(&self) -> &str {
        "Numeric String"
    }

    fn equality_matching_rule(&self) -> Option<&str> {
        Some(EMR_NUMERIC_STRING)
    }

    fn ordering_matching_rule(&self) -> Option<&str> {
        Some(OMR_NUMERIC_STRING)
    }

    fn substring_matching_rule(&self) -> Option<&str> {
        Some(SMR_NUMERIC_STRING)
    }

    fn value_is_acceptable(&self, _schema: &Schema, value: &[u8]) -> ValidationResult<()> {
        let text = as_utf8(self.name(), value)?;
        if text.is_empty() {
            return Err(ValidationError::empty(self.name()));
        }
        match text.char_indices().find(|(_, c)| !(c.is_ascii_digit() || *c == ' ')) {
            Some((i, c)) => Err(ValidationError::illegal_character(self.name(), text, c, i)),
            None => Ok(()),
        }
    }
}

/// RFC 4517 Country String: a two character ISO 3166 code.
///
/// With `strict_format_for_country_strings` both characters must be upper
/// case letters, otherwise any two printable characters are accepted.
#[derive(Debug, Default, Clone, Copy)]
pub struct CountryStringSyntax;

impl SyntaxImpl for CountryStringSyntax {
    fn name(&self) -> &str {
        "Country String"
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

    fn approximate_matching_rule(&self) -> Option<&str> {
        Some(AMR_DOUBLE_METAPHONE)
    }

    fn value_is_acceptable(&self, schema: &Schema, value: &[u8]) -> ValidationResult<()> {
        let text = as_utf8(self.name(), value)?;
        let chars: Vec<char> = text.chars().collect();
        if chars.len() != 2 {
            return Err(ValidationError::invalid(
                self.name(),
                text,
                "a country code must be exactly two characters",
            ));
        }
        let strict = schema.options().strict_format_for_country_strings;
        for (i, c) in chars.into_iter().enumerate() {
            let acceptable = if strict {
                c.is_ascii_uppercase()
            } else {
                is_printable_char(c)
            };
            if !acceptable {
                return Err(ValidationError::illegal_character(self.name(), text, c, i));
            }
        }
        Ok(())
    }
}

/// RFC 4517 Boolean: `TRUE` or `FALSE`.
#[derive(Debug, Default, Clone, Copy)]
pub struct BooleanSyntax;

impl SyntaxImpl for BooleanSyntax {
    fn name(&self) -> &str {
        "Boolean"
    }

    fn equality_matching_rule(&self) -> Option<&str> {
        Some(EMR_BOOLEAN)
    }

    fn value_is_acceptable(&self, _schema: &Schema, value: &[u8]) -> ValidationResult<()> {
        let text = as_utf8(self.name(), value)?;
        if text.eq_ignore_ascii_case("TRUE") || text.eq_ignore_ascii_case("FALSE") {
            Ok(())
        } else {
            Err(ValidationError::invalid(
                self.name(),
                text,
                "the value must be TRUE or FALSE",
            ))
        }
    }
}

/// RFC 4517 Integer: an optional minus sign and digits without leading zeros.
#[derive(Debug, Default, Clone, Copy)]
pub struct IntegerSyntax;

impl SyntaxImpl for IntegerSyntax {
    fn name(&self) -> &str {
        "Integer"
    }

    fn equality_matching_rule(&self) -> Option<&str> {
        Some(EMR_INTEGER)
    }

    fn ordering_matching_rule(&self) -> Option<&str> {
        Some(OMR_INTEGER)
    }

    fn value_is_acceptable(&self, _schema: &Schema, value: &[u8]) -> ValidationResult<()> {
        let text = as_utf8(self.name(), value)?;
        check_integer(self.name(), text)
    }
}

/// Shared by Integer and the integer first-component matching rule.
pub(crate) fn check_integer(syntax: &str, text: &str) -> ValidationResult<()> {
    if text.is_empty() {
        return Err(ValidationError::empty(syntax));
    }
    let digits_start = usize::from(text.starts_with('-'));
    let digits = &text[digits_start..];
    if digits.is_empty() {
        return Err(ValidationError::too_short(syntax, text));
    }
    if let Some((i, c)) = digits.char_indices().find(|(_, c)| !c.is_ascii_digit()) {
        return Err(ValidationError::illegal_character(syntax, text, c, digits_start + i));
    }
    if digits.len() > 1 && digits.starts_with('0') {
        return Err(ValidationError::component(
            syntax,
            text,
            digits_start,
            "an integer cannot have leading zeros",
        ));
    }
    if digits_start == 1 && digits == "0" {
        return Err(ValidationError::component(
            syntax,
            text,
            0,
            "zero cannot be negative",
        ));
    }
    Ok(())
}

/// RFC 4517 Bit String: `'0101'B`.
#[derive(Debug, Default, Clone, Copy)]
pub struct BitStringSyntax;

impl SyntaxImpl for BitStringSyntax {
    fn name(&self) -> &str {
        "Bit String"
    }

    fn equality_matching_rule(&self) -> Option<&str> {
        Some(EMR_BIT_STRING)
    }

    fn value_is_acceptable(&self, _schema: &Schema, value: &[u8]) -> ValidationResult<()> {
        let text = as_utf8(self.name(), value)?;
        if text.len() < 3 {
            return Err(ValidationError::too_short(self.name(), text));
        }
        if !text.starts_with('\'') {
            return Err(ValidationError::component(
                self.name(),
                text,
                0,
                "a bit string must start with a quote",
            ));
        }
        let last = text.len() - 1;
        if !text.ends_with('B') || text.as_bytes()[last - 1] != b'\'' {
            return Err(ValidationError::component(
                self.name(),
                text,
                last,
                "a bit string must end with 'B",
            ));
        }
        match text[1..last - 1].char_indices().find(|(_, c)| *c != '0' && *c != '1') {
            Some((i, c)) => Err(ValidationError::illegal_character(self.name(), text, c, i + 1)),
            None => Ok(()),
        }
    }
}

/// RFC 4517 OID: a numeric OID or a descriptor.
#[derive(Debug, Default, Clone, Copy)]
pub struct OidSyntax;

impl SyntaxImpl for OidSyntax {
    fn name(&self) -> &str {
        "OID"
    }

    fn equality_matching_rule(&self) -> Option<&str> {
        Some(EMR_OBJECT_IDENTIFIER)
    }

    fn value_is_acceptable(&self, _schema: &Schema, value: &[u8]) -> ValidationResult<()> {
        let text = as_utf8(self.name(), value)?;
        check_oid(self.name(), text)
    }
}

/// Accept a numeric OID or descriptor, reporting the first bad character.
pub(crate) fn check_oid(syntax: &str, text: &str) -> ValidationResult<()> {
    match text.chars().next() {
        None => Err(ValidationError::empty(syntax)),
        Some(c) if c.is_ascii_digit() => {
            if is_numeric_oid(text) {
                return Ok(());
            }
            let mut previous_dot = false;
            for (i, c) in text.char_indices() {
                match c {
                    '0'..='9' => previous_dot = false,
                    '.' if !previous_dot => previous_dot = true,
                    other => return Err(ValidationError::illegal_character(syntax, text, other, i)),
                }
            }
            Err(ValidationError::component(
                syntax,
                text,
                text.len() - 1,
                "an OID cannot end with a period",
            ))
        }
        Some(_) => check_descr(text)
            .map_err(|(i, c)| ValidationError::illegal_character(syntax, text, c, i)),
    }
}
