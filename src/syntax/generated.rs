//! Syntax implementations generated from `X-PATTERN`, `X-ENUM` and `X-SUBST`
//! extension properties.

use regex::Regex;
use std::sync::Arc;

use super::{SyntaxImpl, as_utf8};
use crate::error::{ValidationError, ValidationResult};
use crate::schema::Schema;
use crate::schema::oids::*;

/// Values must match a regular expression in full.
#[derive(Debug, Clone)]
pub struct PatternSyntaxImpl {
    pattern: String,
    regex: Regex,
}

impl PatternSyntaxImpl {
    /// `regex` must already be anchored at both ends.
    pub(crate) fn new(pattern: String, regex: Regex) -> Self {
        Self { pattern, regex }
    }

    /// The pattern as declared.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl SyntaxImpl for PatternSyntaxImpl {
    fn name(&self) -> &str {
        "Regex"
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
        if self.regex.is_match(text) {
            Ok(())
        } else {
            Err(ValidationError::invalid(
                self.name(),
                text,
                format!("the value does not match the pattern '{}'", self.pattern),
            ))
        }
    }
}

/// Values must be one of a fixed list, compared case-insensitively.
///
/// Values are ordered by their position in the list through the paired
/// ordering rule `1.3.6.1.4.1.26027.1.4.3.<syntax OID>`.
#[derive(Debug, Clone)]
pub struct EnumSyntaxImpl {
    oid: String,
    values: Vec<String>,
    ordering_rule: String,
}

impl EnumSyntaxImpl {
    pub(crate) fn new(oid: &str, values: Vec<String>) -> Self {
        Self {
            oid: oid.to_string(),
            values,
            ordering_rule: format!("{OMR_GENERIC_ENUM}.{oid}"),
        }
    }

    /// OID of the syntax this enumeration belongs to.
    pub fn syntax_oid(&self) -> &str {
        &self.oid
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Rank of `value` in the declared list.
    pub fn index_of(&self, value: &str) -> Option<usize> {
        let value = value.trim();
        self.values.iter().position(|v| v.eq_ignore_ascii_case(value))
    }

    /// OID of the generated ordering rule.
    pub fn ordering_rule_oid(&self) -> &str {
        &self.ordering_rule
    }

    /// Name of the generated ordering rule.
    pub fn ordering_rule_name(&self) -> String {
        format!("{OMR_GENERIC_ENUM_NAME}{}", self.oid)
    }
}

impl SyntaxImpl for EnumSyntaxImpl {
    fn name(&self) -> &str {
        "Enumeration"
    }

    fn equality_matching_rule(&self) -> Option<&str> {
        Some(EMR_CASE_IGNORE)
    }

    fn ordering_matching_rule(&self) -> Option<&str> {
        Some(&self.ordering_rule)
    }

    fn substring_matching_rule(&self) -> Option<&str> {
        Some(SMR_CASE_IGNORE)
    }

    fn approximate_matching_rule(&self) -> Option<&str> {
        Some(AMR_DOUBLE_METAPHONE)
    }

    fn value_is_acceptable(&self, _schema: &Schema, value: &[u8]) -> ValidationResult<()> {
        let text = as_utf8(self.name(), value)?;
        match self.index_of(text) {
            Some(_) => Ok(()),
            None => Err(ValidationError::invalid(
                self.name(),
                text,
                format!("the value must be one of {:?}", self.values),
            )),
        }
    }
}

/// Delegates to the implementation of another syntax.
#[derive(Debug, Clone)]
pub struct SubstitutionSyntaxImpl {
    target_oid: String,
    target: Arc<dyn SyntaxImpl>,
}

impl SubstitutionSyntaxImpl {
    pub(crate) fn new(target_oid: impl Into<String>, target: Arc<dyn SyntaxImpl>) -> Self {
        Self {
            target_oid: target_oid.into(),
            target,
        }
    }

    /// OID of the substituted syntax.
    pub fn target_oid(&self) -> &str {
        &self.target_oid
    }
}

impl SyntaxImpl for SubstitutionSyntaxImpl {
    fn name(&self) -> &str {
        self.target.name()
    }

    fn is_human_readable(&self) -> bool {
        self.target.is_human_readable()
    }

    fn is_ber_encoding_required(&self) -> bool {
        self.target.is_ber_encoding_required()
    }

    fn equality_matching_rule(&self) -> Option<&str> {
        self.target.equality_matching_rule()
    }

    fn ordering_matching_rule(&self) -> Option<&str> {
        self.target.ordering_matching_rule()
    }

    fn substring_matching_rule(&self) -> Option<&str> {
        self.target.substring_matching_rule()
    }

    fn approximate_matching_rule(&self) -> Option<&str> {
        self.target.approximate_matching_rule()
    }

    fn value_is_acceptable(&self, schema: &Schema, value: &[u8]) -> ValidationResult<()> {
        self.target.value_is_acceptable(schema, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::strings::IntegerSyntax;

    #[test]
    fn test_pattern_matches_whole_value() {
        let regex = Regex::new("^(?:[a-z]+-[0-9]+)$").unwrap();
        let syntax = PatternSyntaxImpl::new("[a-z]+-[0-9]+".to_string(), regex);
        let schema = Schema::core_schema();
        assert!(syntax.value_is_acceptable(schema, b"abc-123").is_ok());
        assert!(syntax.value_is_acceptable(schema, b"xabc-123!").is_err());
    }

    #[test]
    fn test_enum_ranks_and_ordering_rule() {
        let syntax = EnumSyntaxImpl::new(
            "1.2.3.4",
            vec!["low".to_string(), "medium".to_string(), "high".to_string()],
        );
        assert_eq!(syntax.index_of("HIGH"), Some(2));
        assert_eq!(syntax.index_of("urgent"), None);
        assert_eq!(syntax.ordering_rule_oid(), "1.3.6.1.4.1.26027.1.4.3.1.2.3.4");
        assert_eq!(syntax.ordering_matching_rule(), Some("1.3.6.1.4.1.26027.1.4.3.1.2.3.4"));
        assert_eq!(syntax.ordering_rule_name(), "enumOrderingMatch1.2.3.4");
        assert!(syntax.value_is_acceptable(Schema::core_schema(), b"Medium").is_ok());
    }

    #[test]
    fn test_substitution_delegates() {
        let syntax = SubstitutionSyntaxImpl::new(SYNTAX_INTEGER, Arc::new(IntegerSyntax));
        assert_eq!(syntax.equality_matching_rule(), Some(EMR_INTEGER));
        assert!(syntax.value_is_acceptable(Schema::core_schema(), b"12").is_ok());
        assert!(syntax.value_is_acceptable(Schema::core_schema(), b"twelve").is_err());
    }
}
