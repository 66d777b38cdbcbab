//! Telephone-number-like syntaxes: Telephone Number, Facsimile Telephone
//! Number, Telex Number and Teletex Terminal Identifier.

use super::{SyntaxImpl, as_utf8, check_dollar_escapes, check_printable_string, split_dollar};
use crate::error::{ValidationError, ValidationResult};
use crate::schema::Schema;
use crate::schema::oids::*;

const FAX_PARAMETERS: [&str; 7] = [
    "twoDimensional",
    "fineResolution",
    "unlimitedLength",
    "b4Length",
    "a3Width",
    "b4Width",
    "uncompressed",
];

const TELETEX_KEYS: [&str; 5] = ["graphic", "control", "misc", "page", "private"];

/// RFC 4517 Telephone Number.
///
/// By default any printable string holding at least one digit is accepted.
/// With `strict_format_for_telephone_numbers` the value must be in
/// international form: `+`, then digits separated by optional spaces or
/// hyphens.
#[derive(Debug, Default, Clone, Copy)]
pub struct TelephoneNumberSyntax;

impl TelephoneNumberSyntax {
    fn check_strict(&self, text: &str) -> ValidationResult<()> {
        if !text.starts_with('+') {
            let c = text.chars().next().unwrap_or(' ');
            return Err(ValidationError::illegal_character(self.name(), text, c, 0));
        }
        let mut digits = 0;
        for (i, c) in text.char_indices().skip(1) {
            match c {
                '0'..='9' => digits += 1,
                ' ' | '-' => {}
                other => return Err(ValidationError::illegal_character(self.name(), text, other, i)),
            }
        }
        if digits == 0 {
            return Err(ValidationError::too_short(self.name(), text));
        }
        Ok(())
    }
}

impl SyntaxImpl for TelephoneNumberSyntax {
    fn name(&self) -> &str {
        "Telephone Number"
    }

    fn equality_matching_rule(&self) -> Option<&str> {
        Some(EMR_TELEPHONE_NUMBER)
    }

    fn substring_matching_rule(&self) -> Option<&str> {
        Some(SMR_TELEPHONE_NUMBER)
    }

    fn value_is_acceptable(&self, schema: &Schema, value: &[u8]) -> ValidationResult<()> {
        let text = as_utf8(self.name(), value)?;
        if text.is_empty() {
            return Err(ValidationError::empty(self.name()));
        }
        if schema.options().strict_format_for_telephone_numbers {
            return self.check_strict(text);
        }
        check_printable_string(self.name(), text, text, 0)?;
        if !text.chars().any(|c| c.is_ascii_digit()) {
            return Err(ValidationError::invalid(
                self.name(),
                text,
                "a telephone number must contain at least one digit",
            ));
        }
        Ok(())
    }
}

/// RFC 4517 Facsimile Telephone Number: `number *( $ fax-parameter )`.
#[derive(Debug, Default, Clone, Copy)]
pub struct FacsimileTelephoneNumberSyntax;

impl SyntaxImpl for FacsimileTelephoneNumberSyntax {
    fn name(&self) -> &str {
        "Facsimile Telephone Number"
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
        if text.is_empty() {
            return Err(ValidationError::empty(self.name()));
        }
        let segments = split_dollar(text);
        let (offset, number) = segments[0];
        check_printable_string(self.name(), text, number, offset)?;
        for &(offset, parameter) in &segments[1..] {
            if !FAX_PARAMETERS.iter().any(|p| p.eq_ignore_ascii_case(parameter)) {
                return Err(ValidationError::component(
                    self.name(),
                    text,
                    offset,
                    format!("unknown fax parameter '{parameter}'"),
                ));
            }
        }
        Ok(())
    }
}

/// RFC 4517 Telex Number: `actual-number $ country-code $ answerback`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TelexNumberSyntax;

impl SyntaxImpl for TelexNumberSyntax {
    fn name(&self) -> &str {
        "Telex Number"
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
        if text.is_empty() {
            return Err(ValidationError::empty(self.name()));
        }
        let segments = split_dollar(text);
        if segments.len() < 3 {
            return Err(ValidationError::too_short(self.name(), text));
        }
        if segments.len() > 3 {
            let (offset, _) = segments[3];
            return Err(ValidationError::illegal_character(self.name(), text, '$', offset - 1));
        }
        for (offset, segment) in segments {
            check_printable_string(self.name(), text, segment, offset)?;
        }
        Ok(())
    }
}

/// RFC 4517 Teletex Terminal Identifier: `ttx-term *( $ key:value )`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TeletexTerminalIdentifierSyntax;

impl SyntaxImpl for TeletexTerminalIdentifierSyntax {
    fn name(&self) -> &str {
        "Teletex Terminal Identifier"
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
        if text.is_empty() {
            return Err(ValidationError::empty(self.name()));
        }
        let segments = split_dollar(text);
        let (offset, terminal) = segments[0];
        check_printable_string(self.name(), text, terminal, offset)?;
        for &(offset, parameter) in &segments[1..] {
            let colon = parameter.find(':').ok_or_else(|| {
                ValidationError::component(
                    self.name(),
                    text,
                    offset + parameter.len(),
                    "expected ':' after the parameter name",
                )
            })?;
            let key = &parameter[..colon];
            if !TELETEX_KEYS.iter().any(|k| k.eq_ignore_ascii_case(key)) {
                return Err(ValidationError::component(
                    self.name(),
                    text,
                    offset,
                    format!("unknown parameter '{key}'"),
                ));
            }
            check_dollar_escapes(self.name(), text, &parameter[colon + 1..], offset + colon + 1)?;
        }
        Ok(())
    }
}
