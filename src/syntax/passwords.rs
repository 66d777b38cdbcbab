//! Password storage syntaxes: RFC 3112 authPassword and `{SCHEME}value`
//! userPassword values.

use base64::{Engine, engine::general_purpose::STANDARD as BASE64};

use super::{SyntaxImpl, as_utf8};
use crate::error::{ValidationError, ValidationResult};
use crate::schema::Schema;
use crate::schema::oids::*;

const MAX_SCHEME_LENGTH: usize = 64;

fn is_scheme_char(c: char) -> bool {
    c.is_ascii_digit() || c.is_ascii_uppercase() || matches!(c, '-' | '.' | '_')
}

/// RFC 3112 authPassword: `scheme $ authInfo $ authValue`, with base64
/// `authInfo` and `authValue`.
#[derive(Debug, Default, Clone, Copy)]
pub struct AuthPasswordSyntax;

impl AuthPasswordSyntax {
    fn check_base64(&self, text: &str, part: &str, offset: usize) -> ValidationResult<()> {
        if part.is_empty() {
            return Err(ValidationError::component(
                self.name(),
                text,
                offset,
                "a base64 value is required",
            ));
        }
        BASE64.decode(part).map(|_| ()).map_err(|e| {
            ValidationError::component(self.name(), text, offset, format!("invalid base64: {e}"))
        })
    }
}

impl SyntaxImpl for AuthPasswordSyntax {
    fn name(&self) -> &str {
        "Authentication Password"
    }

    fn equality_matching_rule(&self) -> Option<&str> {
        Some(EMR_AUTH_PASSWORD_EXACT)
    }

    fn value_is_acceptable(&self, _schema: &Schema, value: &[u8]) -> ValidationResult<()> {
        let text = as_utf8(self.name(), value)?;
        let parts: Vec<(usize, &str)> = {
            let mut parts = Vec::with_capacity(3);
            let mut start = 0;
            for (i, c) in text.char_indices() {
                if c == '$' {
                    parts.push((start, &text[start..i]));
                    start = i + 1;
                }
            }
            parts.push((start, &text[start..]));
            parts
        };
        if parts.len() != 3 {
            return Err(ValidationError::invalid(
                self.name(),
                text,
                "expected scheme$authInfo$authValue",
            ));
        }

        fn trimmed((offset, part): (usize, &str)) -> (usize, &str) {
            let leading = part.len() - part.trim_start().len();
            (offset + leading, part.trim())
        }

        let (scheme_offset, scheme) = trimmed(parts[0]);
        if scheme.is_empty() || scheme.len() > MAX_SCHEME_LENGTH {
            return Err(ValidationError::component(
                self.name(),
                text,
                scheme_offset,
                format!("the scheme must be 1 to {MAX_SCHEME_LENGTH} characters"),
            ));
        }
        if let Some((i, c)) = scheme.char_indices().find(|(_, c)| !is_scheme_char(*c)) {
            return Err(ValidationError::illegal_character(self.name(), text, c, scheme_offset + i));
        }

        let (info_offset, info) = trimmed(parts[1]);
        self.check_base64(text, info, info_offset)?;
        let (value_offset, auth_value) = trimmed(parts[2]);
        self.check_base64(text, auth_value, value_offset)
    }
}

/// `{SCHEME}encoded` user password storage values.
#[derive(Debug, Default, Clone, Copy)]
pub struct UserPasswordSyntax;

impl SyntaxImpl for UserPasswordSyntax {
    fn name(&self) -> &str {
        "User Password"
    }

    fn is_human_readable(&self) -> bool {
        false
    }

    fn equality_matching_rule(&self) -> Option<&str> {
        Some(EMR_USER_PASSWORD_EXACT)
    }

    fn value_is_acceptable(&self, _schema: &Schema, value: &[u8]) -> ValidationResult<()> {
        let text = as_utf8(self.name(), value)?;
        if !text.starts_with('{') {
            return Err(ValidationError::component(
                self.name(),
                text,
                0,
                "expected '{' before the storage scheme",
            ));
        }
        let close = text.find('}').ok_or_else(|| {
            ValidationError::component(self.name(), text, text.len(), "missing '}' after the storage scheme")
        })?;
        if close == 1 {
            return Err(ValidationError::component(
                self.name(),
                text,
                1,
                "the storage scheme cannot be empty",
            ));
        }
        if let Some((i, c)) = text[1..close]
            .char_indices()
            .find(|(_, c)| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')))
        {
            return Err(ValidationError::illegal_character(self.name(), text, c, i + 1));
        }
        Ok(())
    }
}
