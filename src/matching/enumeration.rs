//! Ordering rules generated for enumeration syntaxes.

use std::sync::Arc;

use super::{Assertion, LessThanAssertion, MatchingRuleImpl, OrderingAssertion, byte_order};
use crate::error::{ValidationError, ValidationResult};
use crate::schema::Schema;
use crate::syntax::EnumSyntaxImpl;

/// Orders values by their position in the enumeration.
///
/// The normalized form is the 4-byte big-endian rank, so byte order is
/// declaration order.
#[derive(Debug, Clone)]
pub struct EnumOrderingMatchingRule {
    syntax: Arc<EnumSyntaxImpl>,
}

impl EnumOrderingMatchingRule {
    pub fn new(syntax: Arc<EnumSyntaxImpl>) -> Self {
        Self { syntax }
    }

    pub fn syntax(&self) -> &EnumSyntaxImpl {
        &self.syntax
    }

    fn rank(&self, value: &[u8]) -> ValidationResult<Vec<u8>> {
        let text = std::str::from_utf8(value).map_err(|_| ValidationError::NotUtf8 {
            syntax: self.syntax.ordering_rule_name(),
        })?;
        let index = self.syntax.index_of(text).ok_or_else(|| {
            ValidationError::invalid(
                self.syntax.ordering_rule_name(),
                text,
                format!("the value must be one of {:?}", self.syntax.values()),
            )
        })?;
        Ok((index as u32).to_be_bytes().to_vec())
    }
}

impl MatchingRuleImpl for EnumOrderingMatchingRule {
    fn normalize_attribute_value(&self, _schema: &Schema, value: &[u8]) -> ValidationResult<Vec<u8>> {
        self.rank(value)
    }

    fn assertion(&self, _schema: &Schema, value: &[u8]) -> ValidationResult<Box<dyn Assertion>> {
        Ok(Box::new(LessThanAssertion::new(self.rank(value)?, byte_order)))
    }

    fn greater_or_equal_assertion(
        &self,
        _schema: &Schema,
        value: &[u8],
    ) -> ValidationResult<Box<dyn Assertion>> {
        Ok(Box::new(OrderingAssertion::greater_or_equal(self.rank(value)?, byte_order)))
    }

    fn less_or_equal_assertion(
        &self,
        _schema: &Schema,
        value: &[u8],
    ) -> ValidationResult<Box<dyn Assertion>> {
        Ok(Box::new(OrderingAssertion::less_or_equal(self.rank(value)?, byte_order)))
    }
}
