//! Postal Address, Delivery Method and Other Mailbox syntaxes.

use super::{SyntaxImpl, as_utf8, check_dollar_escapes, check_printable_string, split_dollar};
use crate::error::{ValidationError, ValidationResult};
use crate::schema::Schema;
use crate::schema::oids::*;

const DELIVERY_METHODS: [&str; 10] = [
    "any",
    "mhs",
    "physical",
    "telex",
    "teletex",
    "g3fax",
    "g4fax",
    "ia5",
    "videotex",
    "telephone",
];

/// RFC 4517 Postal Address: non-empty `$`-separated lines.
#[derive(Debug, Default, Clone, Copy)]
pub struct PostalAddressSyntax;

impl SyntaxImpl for PostalAddressSyntax {
    fn name(&self) -> &str {
        "Postal Address"
    }

    fn equality_matching_rule(&self) -> Option<&str> {
        Some(EMR_CASE_IGNORE_LIST)
    }

    fn substring_matching_rule(&self) -> Option<&str> {
        Some(SMR_CASE_IGNORE_LIST)
    }

    fn value_is_acceptable(&self, _schema: &Schema, value: &[u8]) -> ValidationResult<()> {
        let text = as_utf8(self.name(), value)?;
        if text.is_empty() {
            return Err(ValidationError::empty(self.name()));
        }
        for (offset, line) in split_dollar(text) {
            if line.is_empty() {
                return Err(ValidationError::component(
                    self.name(),
                    text,
                    offset,
                    "an address line cannot be empty",
                ));
            }
            check_dollar_escapes(self.name(), text, line, offset)?;
        }
        Ok(())
    }
}

/// RFC 4517 Delivery Method: `pdm *( WSP "$" WSP pdm )`.
#[derive(Debug, Default, Clone, Copy)]
pub struct DeliveryMethodSyntax;

impl SyntaxImpl for DeliveryMethodSyntax {
    fn name(&self) -> &str {
        "Delivery Method"
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
        for (offset, segment) in split_dollar(text) {
            let method = segment.trim_matches(' ');
            if !DELIVERY_METHODS.iter().any(|m| m.eq_ignore_ascii_case(method)) {
                let leading = segment.len() - segment.trim_start_matches(' ').len();
                return Err(ValidationError::component(
                    self.name(),
                    text,
                    offset + leading,
                    format!("unknown delivery method '{method}'"),
                ));
            }
        }
        Ok(())
    }
}

/// RFC 4517 Other Mailbox: `mailbox-type $ mailbox`.
#[derive(Debug, Default, Clone, Copy)]
pub struct OtherMailboxSyntax;

impl SyntaxImpl for OtherMailboxSyntax {
    fn name(&self) -> &str {
        "Other Mailbox"
    }

    fn equality_matching_rule(&self) -> Option<&str> {
        Some(EMR_CASE_IGNORE_IA5)
    }

    fn substring_matching_rule(&self) -> Option<&str> {
        Some(SMR_CASE_IGNORE_IA5)
    }

    fn value_is_acceptable(&self, _schema: &Schema, value: &[u8]) -> ValidationResult<()> {
        let text = as_utf8(self.name(), value)?;
        let dollar = text.find('$').ok_or_else(|| {
            ValidationError::invalid(self.name(), text, "expected mailbox-type$mailbox")
        })?;
        check_printable_string(self.name(), text, &text[..dollar], 0)?;
        let mailbox = &text[dollar + 1..];
        if mailbox.is_empty() {
            return Err(ValidationError::too_short(self.name(), text));
        }
        match mailbox.char_indices().find(|(_, c)| !c.is_ascii()) {
            Some((i, c)) => Err(ValidationError::illegal_character(
                self.name(),
                text,
                c,
                dollar + 1 + i,
            )),
            None => Ok(()),
        }
    }
}
