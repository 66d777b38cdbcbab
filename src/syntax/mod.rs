//! Attribute syntax validators.
//!
//! Every LDAP syntax is backed by a [`SyntaxImpl`]: a stateless value
//! acceptability check plus the default matching rules attribute types of that
//! syntax inherit. Validators receive the schema being used so nested
//! references (object class names inside a Guide, attribute types inside a DN)
//! can be checked, but they never mutate anything.

pub mod binary;
pub mod definitions;
pub mod generated;
pub mod guide;
pub mod identifiers;
pub mod passwords;
pub mod postal;
pub mod strings;
pub mod telephone;
pub mod time;

use std::fmt;

use crate::error::{ValidationError, ValidationResult};
use crate::schema::Schema;

pub use generated::{EnumSyntaxImpl, PatternSyntaxImpl, SubstitutionSyntaxImpl};

/// Value acceptability contract implemented by every syntax.
pub trait SyntaxImpl: Send + Sync + fmt::Debug {
    /// Human-readable syntax name used in diagnostics
    fn name(&self) -> &str;

    /// Whether values are human readable text
    fn is_human_readable(&self) -> bool {
        true
    }

    /// Whether values must be transferred with the `;binary` option
    fn is_ber_encoding_required(&self) -> bool {
        false
    }

    fn equality_matching_rule(&self) -> Option<&str> {
        None
    }

    fn ordering_matching_rule(&self) -> Option<&str> {
        None
    }

    fn substring_matching_rule(&self) -> Option<&str> {
        None
    }

    fn approximate_matching_rule(&self) -> Option<&str> {
        None
    }

    /// Accept the value, or explain why it is rejected.
    fn value_is_acceptable(&self, schema: &Schema, value: &[u8]) -> ValidationResult<()>;
}

/// Interpret `value` as UTF-8 text for a textual syntax.
pub(crate) fn as_utf8<'a>(syntax: &str, value: &'a [u8]) -> ValidationResult<&'a str> {
    std::str::from_utf8(value).map_err(|_| ValidationError::NotUtf8 {
        syntax: syntax.to_string(),
    })
}

/// RFC 4517 PrintableCharacter.
pub(crate) fn is_printable_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(
            c,
            '\'' | '(' | ')' | '+' | ',' | '-' | '.' | '=' | '/' | ':' | '?' | ' '
        )
}

/// Check that `text` is a non-empty PrintableString.
///
/// `offset` is added to reported positions so callers validating a segment of
/// a larger value report positions relative to the whole value.
pub(crate) fn check_printable_string(
    syntax: &str,
    whole: &str,
    text: &str,
    offset: usize,
) -> ValidationResult<()> {
    if text.is_empty() {
        return Err(ValidationError::component(
            syntax,
            whole,
            offset,
            "expected at least one printable character",
        ));
    }
    match text.char_indices().find(|(_, c)| !is_printable_char(*c)) {
        Some((i, c)) => Err(ValidationError::illegal_character(syntax, whole, c, offset + i)),
        None => Ok(()),
    }
}

/// Decode the `\24` and `\5C` escapes used by `$`-separated syntaxes.
///
/// Any other backslash sequence is rejected at its position.
pub(crate) fn check_dollar_escapes(
    syntax: &str,
    whole: &str,
    text: &str,
    offset: usize,
) -> ValidationResult<String> {
    let mut decoded = String::with_capacity(text.len());
    let mut chars = text.char_indices();
    while let Some((i, c)) = chars.next() {
        if c != '\\' {
            decoded.push(c);
            continue;
        }
        let escape = text.get(i + 1..i + 3).unwrap_or("");
        if escape.eq_ignore_ascii_case("24") {
            decoded.push('$');
        } else if escape.eq_ignore_ascii_case("5c") {
            decoded.push('\\');
        } else {
            return Err(ValidationError::component(
                syntax,
                whole,
                offset + i,
                "a backslash must be followed by 24 or 5C",
            ));
        }
        chars.next();
        chars.next();
    }
    Ok(decoded)
}

/// Split on `$`, returning each segment with its byte offset.
pub(crate) fn split_dollar(value: &str) -> Vec<(usize, &str)> {
    let mut segments = Vec::new();
    let mut start = 0;
    for (i, c) in value.char_indices() {
        if c == '$' {
            segments.push((start, &value[start..i]));
            start = i + 1;
        }
    }
    segments.push((start, &value[start..]));
    segments
}
