//! Guide and Enhanced Guide syntaxes (RFC 4517 section 3.3.14 and 3.3.10).
//!
//! ```text
//! Guide         = [ object-class SHARP ] criteria
//! EnhancedGuide = object-class SHARP WSP criteria WSP SHARP WSP subset
//! criteria      = and-term *( BAR and-term )
//! and-term      = term *( AMPERSAND term )
//! term          = EXCLAIM term / attributetype DOLLAR match-type /
//!                 LPAREN criteria RPAREN / true / false
//! ```
//!
//! `true` and `false` are accepted with or without a leading `?`.

use super::strings::check_oid;
use super::{SyntaxImpl, as_utf8};
use crate::error::{ValidationError, ValidationResult};
use crate::schema::Schema;
use crate::schema::oids::*;

const MATCH_TYPES: [&str; 5] = ["eq", "substr", "ge", "le", "approx"];
const SUBSETS: [&str; 3] = ["baseobject", "oneLevel", "wholeSubtree"];

/// Deepest run of nested `(` and `!` a criteria may use.
pub const MAX_CRITERIA_NESTING: usize = 64;

/// Recursive-descent checker over the criteria part of a guide value.
///
/// Positions are reported relative to the whole value.
struct CriteriaChecker<'a> {
    syntax: &'a str,
    whole: &'a str,
    criteria: &'a str,
    offset: usize,
    position: usize,
    depth: usize,
}

impl<'a> CriteriaChecker<'a> {
    fn peek(&self) -> Option<char> {
        self.criteria[self.position..].chars().next()
    }

    fn error(&self, reason: impl Into<String>) -> ValidationError {
        ValidationError::component(self.syntax, self.whole, self.offset + self.position, reason)
    }

    fn check(mut self) -> ValidationResult<()> {
        if self.criteria.is_empty() {
            return Err(self.error("the criteria cannot be empty"));
        }
        self.criteria_expr()?;
        match self.peek() {
            None => Ok(()),
            Some(')') => Err(self.error("unbalanced closing parenthesis")),
            Some(_) => Err(self.error("expected '&' or '|'")),
        }
    }

    fn criteria_expr(&mut self) -> ValidationResult<()> {
        self.and_term()?;
        while self.peek() == Some('|') {
            self.position += 1;
            self.and_term()?;
        }
        Ok(())
    }

    fn and_term(&mut self) -> ValidationResult<()> {
        self.term()?;
        while self.peek() == Some('&') {
            self.position += 1;
            self.term()?;
        }
        Ok(())
    }

    fn nested<T>(
        &mut self,
        inner: impl FnOnce(&mut Self) -> ValidationResult<T>,
    ) -> ValidationResult<T> {
        if self.depth == MAX_CRITERIA_NESTING {
            return Err(self.error(format!(
                "criteria nested deeper than {MAX_CRITERIA_NESTING} levels"
            )));
        }
        self.depth += 1;
        self.position += 1;
        let result = inner(self);
        self.depth -= 1;
        result
    }

    fn term(&mut self) -> ValidationResult<()> {
        match self.peek() {
            None => Err(self.error("a connective must be followed by a term")),
            Some('!') => self.nested(Self::term),
            Some('(') => self.nested(|checker| {
                checker.criteria_expr()?;
                match checker.peek() {
                    Some(')') => {
                        checker.position += 1;
                        Ok(())
                    }
                    None => Err(checker.error("missing closing parenthesis")),
                    Some(_) => Err(checker.error("expected '&', '|' or ')'")),
                }
            }),
            Some('|' | '&' | ')') => Err(self.error("expected a term")),
            Some(_) => self.simple_term(),
        }
    }

    /// `attr$matchtype`, or a boolean literal.
    fn simple_term(&mut self) -> ValidationResult<()> {
        let start = self.position;
        let rest = &self.criteria[start..];
        let end = rest
            .find(['$', '|', '&', '(', ')', '!'])
            .unwrap_or(rest.len());
        let word = &rest[..end];

        if self.criteria[start + end..].starts_with('$') {
            check_oid(self.syntax, word).map_err(|e| {
                let position = e.position().unwrap_or(0);
                ValidationError::component(
                    self.syntax,
                    self.whole,
                    self.offset + start + position,
                    "invalid attribute type",
                )
            })?;
            self.position = start + end + 1;
            let match_start = self.position;
            let tail = &self.criteria[match_start..];
            let match_end = tail
                .find(|c: char| !c.is_ascii_alphabetic())
                .unwrap_or(tail.len());
            let match_type = &tail[..match_end];
            if !MATCH_TYPES.iter().any(|m| m.eq_ignore_ascii_case(match_type)) {
                return Err(self.error(format!("invalid match type '{match_type}'")));
            }
            self.position = match_start + match_end;
            return Ok(());
        }

        let literal = word.strip_prefix('?').unwrap_or(word);
        if literal.eq_ignore_ascii_case("true") || literal.eq_ignore_ascii_case("false") {
            self.position = start + end;
            return Ok(());
        }
        if word.is_empty() {
            return Err(self.error("expected a term"));
        }
        self.position = start + end;
        Err(self.error("expected '$' followed by a match type"))
    }
}

/// Check the criteria part of a guide value.
pub(crate) fn check_criteria(
    syntax: &str,
    whole: &str,
    criteria: &str,
    offset: usize,
) -> ValidationResult<()> {
    CriteriaChecker {
        syntax,
        whole,
        criteria,
        offset,
        position: 0,
        depth: 0,
    }
    .check()
}

fn check_object_class(
    syntax: &str,
    schema: &Schema,
    whole: &str,
    object_class: &str,
    offset: usize,
) -> ValidationResult<()> {
    check_oid(syntax, object_class).map_err(|e| {
        ValidationError::component(
            syntax,
            whole,
            offset + e.position().unwrap_or(0),
            "invalid object class",
        )
    })?;
    if !schema.has_object_class(object_class) {
        return Err(ValidationError::component(
            syntax,
            whole,
            offset,
            format!("unknown object class '{object_class}'"),
        ));
    }
    Ok(())
}

/// Trim surrounding spaces, returning the trimmed slice and its offset.
fn trim_with_offset(text: &str, offset: usize) -> (&str, usize) {
    let leading = text.len() - text.trim_start().len();
    (text.trim(), offset + leading)
}

#[derive(Debug, Default, Clone, Copy)]
pub struct GuideSyntax;

impl SyntaxImpl for GuideSyntax {
    fn name(&self) -> &str {
        "Guide"
    }

    fn equality_matching_rule(&self) -> Option<&str> {
        Some(EMR_OCTET_STRING)
    }

    fn ordering_matching_rule(&self) -> Option<&str> {
        Some(OMR_OCTET_STRING)
    }

    fn value_is_acceptable(&self, schema: &Schema, value: &[u8]) -> ValidationResult<()> {
        let text = as_utf8(self.name(), value)?;
        if text.is_empty() {
            return Err(ValidationError::empty(self.name()));
        }
        match text.find('#') {
            Some(sharp) => {
                let (object_class, oc_offset) = trim_with_offset(&text[..sharp], 0);
                check_object_class(self.name(), schema, text, object_class, oc_offset)?;
                check_criteria(self.name(), text, &text[sharp + 1..], sharp + 1)
            }
            None => check_criteria(self.name(), text, text, 0),
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct EnhancedGuideSyntax;

impl SyntaxImpl for EnhancedGuideSyntax {
    fn name(&self) -> &str {
        "Enhanced Guide"
    }

    fn equality_matching_rule(&self) -> Option<&str> {
        Some(EMR_OCTET_STRING)
    }

    fn ordering_matching_rule(&self) -> Option<&str> {
        Some(OMR_OCTET_STRING)
    }

    fn value_is_acceptable(&self, schema: &Schema, value: &[u8]) -> ValidationResult<()> {
        let text = as_utf8(self.name(), value)?;
        if text.is_empty() {
            return Err(ValidationError::empty(self.name()));
        }
        let first = text.find('#').ok_or_else(|| {
            ValidationError::invalid(self.name(), text, "missing '#' after the object class")
        })?;
        let last = text.rfind('#').filter(|&last| last > first).ok_or_else(|| {
            ValidationError::invalid(self.name(), text, "missing '#' before the subset")
        })?;

        let (object_class, oc_offset) = trim_with_offset(&text[..first], 0);
        check_object_class(self.name(), schema, text, object_class, oc_offset)?;

        let (criteria, criteria_offset) = trim_with_offset(&text[first + 1..last], first + 1);
        check_criteria(self.name(), text, criteria, criteria_offset)?;

        let (subset, subset_offset) = trim_with_offset(&text[last + 1..], last + 1);
        if !SUBSETS.iter().any(|s| s.eq_ignore_ascii_case(subset)) {
            return Err(ValidationError::component(
                self.name(),
                text,
                subset_offset,
                format!("invalid subset '{subset}'"),
            ));
        }
        Ok(())
    }
}
