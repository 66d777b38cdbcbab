//! The matching rule element and the assertions built from it.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use crate::error::{ElementKind, ValidationError, ValidationResult};
use crate::matching::{Assertion, ConditionResult, MatchingRuleImpl};
use crate::schema::Schema;
use crate::schema::types::{ElementInfo, SchemaElement, element_info_setters};
use crate::schema::writer::DefinitionWriter;

/// A matching rule: an OID, the syntax of its assertion values and the
/// normalization logic behind it.
#[derive(Debug, Clone)]
pub struct MatchingRule {
    oid: String,
    info: ElementInfo,
    syntax: String,
    implementation: Option<Arc<dyn MatchingRuleImpl>>,
    definition: Option<String>,
    resolved: Option<ResolvedMatchingRule>,
}

/// References wired by the resolution pass.
#[derive(Debug, Clone)]
pub struct ResolvedMatchingRule {
    /// Numeric OID of the assertion syntax
    pub syntax: String,
    /// Implementation in effect, possibly borrowed from the fallback schema
    pub implementation: Arc<dyn MatchingRuleImpl>,
}

element_info_setters!(MatchingRule);

impl MatchingRule {
    pub fn new(oid: impl Into<String>, syntax: impl Into<String>) -> Self {
        Self {
            oid: oid.into(),
            info: ElementInfo::default(),
            syntax: syntax.into(),
            implementation: None,
            definition: None,
            resolved: None,
        }
    }

    pub fn with_implementation(mut self, implementation: Arc<dyn MatchingRuleImpl>) -> Self {
        self.implementation = Some(implementation);
        self
    }

    pub fn oid(&self) -> &str {
        &self.oid
    }

    /// The syntax as declared.
    pub fn syntax(&self) -> &str {
        &self.syntax
    }

    /// The implementation supplied when the rule was created, if any.
    pub fn implementation(&self) -> Option<&Arc<dyn MatchingRuleImpl>> {
        self.implementation.as_ref()
    }

    pub fn resolved(&self) -> Option<&ResolvedMatchingRule> {
        self.resolved.as_ref()
    }

    pub(crate) fn set_resolved(&mut self, resolved: ResolvedMatchingRule) {
        self.resolved = Some(resolved);
    }

    fn resolved_implementation(&self, value: &[u8]) -> ValidationResult<&Arc<dyn MatchingRuleImpl>> {
        self.resolved
            .as_ref()
            .map(|resolved| &resolved.implementation)
            .ok_or_else(|| {
                ValidationError::invalid(
                    self.name_or_oid(),
                    String::from_utf8_lossy(value),
                    "the matching rule has not been resolved against a schema",
                )
            })
    }

    /// Produce the comparison form of an attribute value.
    pub fn normalize_attribute_value(&self, schema: &Schema, value: &[u8]) -> ValidationResult<Vec<u8>> {
        self.resolved_implementation(value)?
            .normalize_attribute_value(schema, value)
    }

    /// Order two normalized values. Unresolved rules fall back to byte order.
    pub fn compare(&self, left: &[u8], right: &[u8]) -> Ordering {
        match &self.resolved {
            Some(resolved) => resolved.implementation.compare(left, right),
            None => left.cmp(right),
        }
    }

    pub fn assertion(&self, schema: &Schema, value: &[u8]) -> ValidationResult<RuleAssertion> {
        let implementation = self.resolved_implementation(value)?;
        let assertion = implementation.assertion(schema, value)?;
        Ok(RuleAssertion::new(schema, implementation, assertion))
    }

    pub fn greater_or_equal_assertion(
        &self,
        schema: &Schema,
        value: &[u8],
    ) -> ValidationResult<RuleAssertion> {
        let implementation = self.resolved_implementation(value)?;
        let assertion = implementation.greater_or_equal_assertion(schema, value)?;
        Ok(RuleAssertion::new(schema, implementation, assertion))
    }

    pub fn less_or_equal_assertion(
        &self,
        schema: &Schema,
        value: &[u8],
    ) -> ValidationResult<RuleAssertion> {
        let implementation = self.resolved_implementation(value)?;
        let assertion = implementation.less_or_equal_assertion(schema, value)?;
        Ok(RuleAssertion::new(schema, implementation, assertion))
    }

    pub fn substring_assertion(
        &self,
        schema: &Schema,
        sub_initial: Option<&[u8]>,
        sub_any: &[&[u8]],
        sub_final: Option<&[u8]>,
    ) -> ValidationResult<RuleAssertion> {
        let implementation = self.resolved_implementation(sub_initial.unwrap_or_default())?;
        let assertion = implementation.substring_assertion(schema, sub_initial, sub_any, sub_final)?;
        Ok(RuleAssertion::new(schema, implementation, assertion))
    }

    fn synthesize_definition(&self) -> String {
        DefinitionWriter::new(&self.oid)
            .names_and_description(&self.info)
            .syntax(Some(&self.syntax), None)
            .finish(&self.info)
    }
}

impl SchemaElement for MatchingRule {
    fn kind(&self) -> ElementKind {
        ElementKind::MatchingRule
    }

    fn identifier(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.oid)
    }

    fn info(&self) -> &ElementInfo {
        &self.info
    }

    fn definition(&self) -> Cow<'_, str> {
        match &self.definition {
            Some(definition) => Cow::Borrowed(definition),
            None => Cow::Owned(self.synthesize_definition()),
        }
    }
}

impl PartialEq for MatchingRule {
    fn eq(&self, other: &Self) -> bool {
        self.oid == other.oid && self.info == other.info && self.syntax == other.syntax
    }
}

impl fmt::Display for MatchingRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.definition())
    }
}

/// An assertion that accepts raw attribute values.
///
/// Candidates are normalized with the rule before testing; a candidate the
/// rule cannot normalize evaluates to [`ConditionResult::Undefined`].
#[derive(Debug)]
pub struct RuleAssertion {
    schema: Schema,
    implementation: Arc<dyn MatchingRuleImpl>,
    assertion: Box<dyn Assertion>,
}

impl RuleAssertion {
    fn new(
        schema: &Schema,
        implementation: &Arc<dyn MatchingRuleImpl>,
        assertion: Box<dyn Assertion>,
    ) -> Self {
        Self {
            schema: schema.clone(),
            implementation: Arc::clone(implementation),
            assertion,
        }
    }

    pub fn matches(&self, attribute_value: &[u8]) -> ConditionResult {
        match self
            .implementation
            .normalize_attribute_value(&self.schema, attribute_value)
        {
            Ok(normalized) => self.assertion.matches(&normalized),
            Err(_) => ConditionResult::Undefined,
        }
    }

    /// Test a value that has already been normalized with the same rule.
    pub fn matches_normalized(&self, normalized_attribute_value: &[u8]) -> ConditionResult {
        self.assertion.matches(normalized_attribute_value)
    }
}
