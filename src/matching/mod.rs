//! Matching rule implementations.
//!
//! A matching rule implementation turns raw attribute values into normalized
//! bytes and builds [`Assertion`]s that test normalized values. The schema
//! element [`MatchingRule`](crate::schema::MatchingRule) binds an OID to one
//! of these implementations.
//!
//! # Key Types
//!
//! - [`MatchingRuleImpl`] - normalization, comparison and assertion builders
//! - [`Assertion`] - a prepared test over normalized attribute values
//! - [`ConditionResult`] - three-valued match outcome

pub mod approximate;
pub mod dn_rules;
pub mod enumeration;
pub mod normalize;
pub mod string_rules;
pub mod value_rules;

use std::cmp::Ordering;
use std::fmt;

use crate::error::ValidationResult;
use crate::schema::Schema;

pub use approximate::DoubleMetaphoneApproximateMatchingRule;
pub use dn_rules::{DistinguishedNameEqualityMatchingRule, UniqueMemberEqualityMatchingRule};
pub use enumeration::EnumOrderingMatchingRule;
pub use string_rules::{StringFlavor, StringMatchingRule, WordMatchingRule};
pub use value_rules::{
    BitStringEqualityMatchingRule, BooleanEqualityMatchingRule, FirstComponent,
    FirstComponentEqualityMatchingRule, GeneralizedTimeMatchingRule, IntegerMatchingRule,
    ObjectIdentifierEqualityMatchingRule, OctetStringMatchingRule, UuidMatchingRule,
};

/// Outcome of evaluating an assertion.
///
/// `Undefined` is reported when a value cannot be normalized against the
/// rule, so that filters never turn a malformed value into a false negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConditionResult {
    True,
    False,
    Undefined,
}

impl ConditionResult {
    pub fn from_bool(value: bool) -> Self {
        if value { Self::True } else { Self::False }
    }

    pub fn is_true(&self) -> bool {
        *self == Self::True
    }

    /// Three-valued negation.
    pub fn not(self) -> Self {
        match self {
            Self::True => Self::False,
            Self::False => Self::True,
            Self::Undefined => Self::Undefined,
        }
    }
}

/// Role a matching rule plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleUsage {
    Equality,
    Ordering,
    Substring,
    Approximate,
}

/// A prepared test over normalized attribute values.
pub trait Assertion: Send + Sync + fmt::Debug {
    fn matches(&self, normalized_attribute_value: &[u8]) -> ConditionResult;
}

/// Comparison function over normalized values.
pub type CompareFn = fn(&[u8], &[u8]) -> Ordering;

/// Plain byte order, the default comparator.
pub fn byte_order(left: &[u8], right: &[u8]) -> Ordering {
    left.cmp(right)
}

/// Normalization and assertion logic behind a matching rule OID.
///
/// Only `normalize_attribute_value` is mandatory. Assertion builders a rule
/// does not support return an assertion that always evaluates to
/// [`ConditionResult::Undefined`].
pub trait MatchingRuleImpl: Send + Sync + fmt::Debug {
    /// Produce the storage/comparison form of an attribute value.
    fn normalize_attribute_value(&self, schema: &Schema, value: &[u8]) -> ValidationResult<Vec<u8>>;

    /// Order two normalized values.
    fn compare(&self, left: &[u8], right: &[u8]) -> Ordering {
        left.cmp(right)
    }

    /// Equality (or approximate) assertion.
    fn assertion(&self, _schema: &Schema, _value: &[u8]) -> ValidationResult<Box<dyn Assertion>> {
        Ok(Box::new(UndefinedAssertion))
    }

    fn greater_or_equal_assertion(
        &self,
        _schema: &Schema,
        _value: &[u8],
    ) -> ValidationResult<Box<dyn Assertion>> {
        Ok(Box::new(UndefinedAssertion))
    }

    fn less_or_equal_assertion(
        &self,
        _schema: &Schema,
        _value: &[u8],
    ) -> ValidationResult<Box<dyn Assertion>> {
        Ok(Box::new(UndefinedAssertion))
    }

    fn substring_assertion(
        &self,
        _schema: &Schema,
        _sub_initial: Option<&[u8]>,
        _sub_any: &[&[u8]],
        _sub_final: Option<&[u8]>,
    ) -> ValidationResult<Box<dyn Assertion>> {
        Ok(Box::new(UndefinedAssertion))
    }
}

/// Assertion for operations a rule does not support.
#[derive(Debug, Clone, Copy, Default)]
pub struct UndefinedAssertion;

impl Assertion for UndefinedAssertion {
    fn matches(&self, _normalized_attribute_value: &[u8]) -> ConditionResult {
        ConditionResult::Undefined
    }
}

/// Byte-for-byte equality against a normalized assertion value.
#[derive(Debug, Clone)]
pub struct EqualityAssertion {
    normalized: Vec<u8>,
}

impl EqualityAssertion {
    pub fn new(normalized: Vec<u8>) -> Self {
        Self { normalized }
    }
}

impl Assertion for EqualityAssertion {
    fn matches(&self, normalized_attribute_value: &[u8]) -> ConditionResult {
        ConditionResult::from_bool(self.normalized == normalized_attribute_value)
    }
}

/// `>=` or `<=` against a bound, using the rule's comparator.
#[derive(Debug, Clone)]
pub struct OrderingAssertion {
    bound: Vec<u8>,
    greater_or_equal: bool,
    compare: CompareFn,
}

impl OrderingAssertion {
    pub fn greater_or_equal(bound: Vec<u8>, compare: CompareFn) -> Self {
        Self {
            bound,
            greater_or_equal: true,
            compare,
        }
    }

    pub fn less_or_equal(bound: Vec<u8>, compare: CompareFn) -> Self {
        Self {
            bound,
            greater_or_equal: false,
            compare,
        }
    }
}

impl Assertion for OrderingAssertion {
    fn matches(&self, normalized_attribute_value: &[u8]) -> ConditionResult {
        let ordering = (self.compare)(normalized_attribute_value, &self.bound);
        ConditionResult::from_bool(if self.greater_or_equal {
            ordering != Ordering::Less
        } else {
            ordering != Ordering::Greater
        })
    }
}

/// Strictly-less-than test, the plain assertion of an ordering rule.
#[derive(Debug, Clone)]
pub struct LessThanAssertion {
    bound: Vec<u8>,
    compare: CompareFn,
}

impl LessThanAssertion {
    pub fn new(bound: Vec<u8>, compare: CompareFn) -> Self {
        Self { bound, compare }
    }
}

impl Assertion for LessThanAssertion {
    fn matches(&self, normalized_attribute_value: &[u8]) -> ConditionResult {
        ConditionResult::from_bool((self.compare)(normalized_attribute_value, &self.bound) == Ordering::Less)
    }
}

/// `initial*any*...*final` over normalized bytes.
#[derive(Debug, Clone, Default)]
pub struct SubstringAssertion {
    sub_initial: Option<Vec<u8>>,
    sub_any: Vec<Vec<u8>>,
    sub_final: Option<Vec<u8>>,
}

impl SubstringAssertion {
    pub fn new(sub_initial: Option<Vec<u8>>, sub_any: Vec<Vec<u8>>, sub_final: Option<Vec<u8>>) -> Self {
        Self {
            sub_initial,
            sub_any,
            sub_final,
        }
    }
}

fn find_from(haystack: &[u8], needle: &[u8], from: usize) -> Option<usize> {
    if needle.is_empty() {
        return Some(from);
    }
    haystack
        .get(from..)?
        .windows(needle.len())
        .position(|window| window == needle)
        .map(|p| p + from)
}

impl Assertion for SubstringAssertion {
    fn matches(&self, value: &[u8]) -> ConditionResult {
        let mut position = 0;
        let mut end = value.len();

        if let Some(initial) = &self.sub_initial {
            if !value.starts_with(initial) {
                return ConditionResult::False;
            }
            position = initial.len();
        }

        if let Some(final_part) = &self.sub_final {
            if !value.ends_with(final_part) || end - final_part.len() < position {
                return ConditionResult::False;
            }
            end -= final_part.len();
        }

        let middle = &value[..end];
        for any in &self.sub_any {
            match find_from(middle, any, position) {
                Some(found) => position = found + any.len(),
                None => return ConditionResult::False,
            }
        }
        ConditionResult::True
    }
}

/// Normalize substring components with the same function used for values.
pub(crate) fn substring_assertion_with<F>(
    sub_initial: Option<&[u8]>,
    sub_any: &[&[u8]],
    sub_final: Option<&[u8]>,
    mut normalize: F,
) -> ValidationResult<Box<dyn Assertion>>
where
    F: FnMut(&[u8]) -> ValidationResult<Vec<u8>>,
{
    let initial = sub_initial.map(&mut normalize).transpose()?;
    let any = sub_any
        .iter()
        .map(|part| normalize(part))
        .collect::<ValidationResult<Vec<_>>>()?;
    let final_part = sub_final.map(&mut normalize).transpose()?;
    Ok(Box::new(SubstringAssertion::new(initial, any, final_part)))
}
