//! Matching rules over non-string values: integers, booleans, bit strings,
//! octet strings, object identifiers, times, UUIDs and the
//! first-component rules used by schema definition attributes.

use std::cmp::Ordering;

use uuid::Uuid;

use super::normalize::prepare_string;
use super::{
    Assertion, CompareFn, EqualityAssertion, LessThanAssertion, MatchingRuleImpl,
    OrderingAssertion, RuleUsage, UndefinedAssertion, byte_order, substring_assertion_with,
};
use crate::error::{ValidationError, ValidationResult};
use crate::schema::Schema;
use crate::schema::reader::is_numeric_oid;
use crate::syntax::strings::{check_integer, check_oid};
use crate::syntax::time::{parse_generalized_time, parse_utc_time};

fn utf8<'a>(rule: &str, value: &'a [u8]) -> ValidationResult<&'a str> {
    std::str::from_utf8(value).map_err(|_| ValidationError::NotUtf8 {
        syntax: rule.to_string(),
    })
}

/// Equality, ordering or nothing, given a normalized assertion value.
fn usage_assertion(
    usage: RuleUsage,
    normalized: Vec<u8>,
    compare: CompareFn,
) -> Box<dyn Assertion> {
    match usage {
        RuleUsage::Equality => Box::new(EqualityAssertion::new(normalized)),
        RuleUsage::Ordering => Box::new(LessThanAssertion::new(normalized, compare)),
        _ => Box::new(UndefinedAssertion),
    }
}

/// Order two canonical decimal integers without parsing them.
pub fn compare_integers(left: &[u8], right: &[u8]) -> Ordering {
    let left_negative = left.first() == Some(&b'-');
    let right_negative = right.first() == Some(&b'-');
    match (left_negative, right_negative) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => left.len().cmp(&right.len()).then_with(|| left.cmp(right)),
        (true, true) => right.len().cmp(&left.len()).then_with(|| right.cmp(left)),
    }
}

/// `integerMatch` and `integerOrderingMatch`.
#[derive(Debug, Clone, Copy)]
pub struct IntegerMatchingRule {
    usage: RuleUsage,
}

impl IntegerMatchingRule {
    pub fn new(usage: RuleUsage) -> Self {
        Self { usage }
    }
}

fn normalize_integer(value: &[u8]) -> ValidationResult<Vec<u8>> {
    let text = utf8("integer", value)?.trim();
    check_integer("Integer", text)?;
    Ok(text.as_bytes().to_vec())
}

impl MatchingRuleImpl for IntegerMatchingRule {
    fn normalize_attribute_value(&self, _schema: &Schema, value: &[u8]) -> ValidationResult<Vec<u8>> {
        normalize_integer(value)
    }

    fn compare(&self, left: &[u8], right: &[u8]) -> Ordering {
        compare_integers(left, right)
    }

    fn assertion(&self, _schema: &Schema, value: &[u8]) -> ValidationResult<Box<dyn Assertion>> {
        Ok(usage_assertion(self.usage, normalize_integer(value)?, compare_integers))
    }

    fn greater_or_equal_assertion(
        &self,
        _schema: &Schema,
        value: &[u8],
    ) -> ValidationResult<Box<dyn Assertion>> {
        if self.usage != RuleUsage::Ordering {
            return Ok(Box::new(UndefinedAssertion));
        }
        Ok(Box::new(OrderingAssertion::greater_or_equal(
            normalize_integer(value)?,
            compare_integers,
        )))
    }

    fn less_or_equal_assertion(
        &self,
        _schema: &Schema,
        value: &[u8],
    ) -> ValidationResult<Box<dyn Assertion>> {
        if self.usage != RuleUsage::Ordering {
            return Ok(Box::new(UndefinedAssertion));
        }
        Ok(Box::new(OrderingAssertion::less_or_equal(
            normalize_integer(value)?,
            compare_integers,
        )))
    }
}

/// `booleanMatch`.
#[derive(Debug, Default, Clone, Copy)]
pub struct BooleanEqualityMatchingRule;

impl MatchingRuleImpl for BooleanEqualityMatchingRule {
    fn normalize_attribute_value(&self, _schema: &Schema, value: &[u8]) -> ValidationResult<Vec<u8>> {
        let text = utf8("booleanMatch", value)?.trim();
        if text.eq_ignore_ascii_case("TRUE") {
            Ok(b"TRUE".to_vec())
        } else if text.eq_ignore_ascii_case("FALSE") {
            Ok(b"FALSE".to_vec())
        } else {
            Err(ValidationError::invalid(
                "Boolean",
                text,
                "the value must be TRUE or FALSE",
            ))
        }
    }

    fn assertion(&self, schema: &Schema, value: &[u8]) -> ValidationResult<Box<dyn Assertion>> {
        Ok(Box::new(EqualityAssertion::new(
            self.normalize_attribute_value(schema, value)?,
        )))
    }
}

/// `bitStringMatch`: compares the bits, ignoring trailing zero bits.
#[derive(Debug, Default, Clone, Copy)]
pub struct BitStringEqualityMatchingRule;

impl MatchingRuleImpl for BitStringEqualityMatchingRule {
    fn normalize_attribute_value(&self, _schema: &Schema, value: &[u8]) -> ValidationResult<Vec<u8>> {
        let text = utf8("bitStringMatch", value)?.trim();
        let bits = text
            .strip_prefix('\'')
            .and_then(|t| t.strip_suffix("'B"))
            .ok_or_else(|| ValidationError::invalid("Bit String", text, "expected 'bits'B"))?;
        if let Some((i, c)) = bits.char_indices().find(|(_, c)| *c != '0' && *c != '1') {
            return Err(ValidationError::illegal_character("Bit String", text, c, i + 1));
        }
        Ok(bits.trim_end_matches('0').as_bytes().to_vec())
    }

    fn assertion(&self, schema: &Schema, value: &[u8]) -> ValidationResult<Box<dyn Assertion>> {
        Ok(Box::new(EqualityAssertion::new(
            self.normalize_attribute_value(schema, value)?,
        )))
    }
}

/// `octetStringMatch`, `octetStringOrderingMatch`, `octetStringSubstringsMatch`
/// and the exact password rules: values compare byte for byte.
#[derive(Debug, Clone, Copy)]
pub struct OctetStringMatchingRule {
    usage: RuleUsage,
}

impl OctetStringMatchingRule {
    pub fn new(usage: RuleUsage) -> Self {
        Self { usage }
    }
}

impl MatchingRuleImpl for OctetStringMatchingRule {
    fn normalize_attribute_value(&self, _schema: &Schema, value: &[u8]) -> ValidationResult<Vec<u8>> {
        Ok(value.to_vec())
    }

    fn assertion(&self, _schema: &Schema, value: &[u8]) -> ValidationResult<Box<dyn Assertion>> {
        Ok(usage_assertion(self.usage, value.to_vec(), byte_order))
    }

    fn greater_or_equal_assertion(
        &self,
        _schema: &Schema,
        value: &[u8],
    ) -> ValidationResult<Box<dyn Assertion>> {
        if self.usage != RuleUsage::Ordering {
            return Ok(Box::new(UndefinedAssertion));
        }
        Ok(Box::new(OrderingAssertion::greater_or_equal(value.to_vec(), byte_order)))
    }

    fn less_or_equal_assertion(
        &self,
        _schema: &Schema,
        value: &[u8],
    ) -> ValidationResult<Box<dyn Assertion>> {
        if self.usage != RuleUsage::Ordering {
            return Ok(Box::new(UndefinedAssertion));
        }
        Ok(Box::new(OrderingAssertion::less_or_equal(value.to_vec(), byte_order)))
    }

    fn substring_assertion(
        &self,
        _schema: &Schema,
        sub_initial: Option<&[u8]>,
        sub_any: &[&[u8]],
        sub_final: Option<&[u8]>,
    ) -> ValidationResult<Box<dyn Assertion>> {
        if self.usage != RuleUsage::Substring {
            return Ok(Box::new(UndefinedAssertion));
        }
        substring_assertion_with(sub_initial, sub_any, sub_final, |part| Ok(part.to_vec()))
    }
}

/// Resolve a descriptor to the numeric OID of the element carrying it.
fn normalize_oid(schema: &Schema, text: &str) -> ValidationResult<Vec<u8>> {
    let text = text.trim();
    check_oid("OID", text)?;
    if is_numeric_oid(text) {
        return Ok(text.as_bytes().to_vec());
    }
    Ok(schema
        .oid_for_name(text)
        .unwrap_or_else(|| text.to_ascii_lowercase())
        .into_bytes())
}

/// `objectIdentifierMatch`: names and numeric OIDs of the same element match.
#[derive(Debug, Default, Clone, Copy)]
pub struct ObjectIdentifierEqualityMatchingRule;

impl MatchingRuleImpl for ObjectIdentifierEqualityMatchingRule {
    fn normalize_attribute_value(&self, schema: &Schema, value: &[u8]) -> ValidationResult<Vec<u8>> {
        normalize_oid(schema, utf8("objectIdentifierMatch", value)?)
    }

    fn assertion(&self, schema: &Schema, value: &[u8]) -> ValidationResult<Box<dyn Assertion>> {
        Ok(Box::new(EqualityAssertion::new(
            self.normalize_attribute_value(schema, value)?,
        )))
    }
}

/// Instants encoded so that byte order is time order.
fn encode_instant(millis: i64) -> Vec<u8> {
    ((millis as u64) ^ (1 << 63)).to_be_bytes().to_vec()
}

/// `generalizedTimeMatch`/`generalizedTimeOrderingMatch`, and the UTC Time
/// pair when built with [`GeneralizedTimeMatchingRule::utc`].
#[derive(Debug, Clone, Copy)]
pub struct GeneralizedTimeMatchingRule {
    usage: RuleUsage,
    utc: bool,
}

impl GeneralizedTimeMatchingRule {
    pub fn new(usage: RuleUsage) -> Self {
        Self { usage, utc: false }
    }

    pub fn utc(usage: RuleUsage) -> Self {
        Self { usage, utc: true }
    }

    fn normalize(&self, value: &[u8]) -> ValidationResult<Vec<u8>> {
        let text = utf8("time", value)?.trim();
        let instant = if self.utc {
            parse_utc_time(text)?
        } else {
            parse_generalized_time(text)?
        };
        Ok(encode_instant(instant.timestamp_millis()))
    }
}

impl MatchingRuleImpl for GeneralizedTimeMatchingRule {
    fn normalize_attribute_value(&self, _schema: &Schema, value: &[u8]) -> ValidationResult<Vec<u8>> {
        self.normalize(value)
    }

    fn assertion(&self, _schema: &Schema, value: &[u8]) -> ValidationResult<Box<dyn Assertion>> {
        Ok(usage_assertion(self.usage, self.normalize(value)?, byte_order))
    }

    fn greater_or_equal_assertion(
        &self,
        _schema: &Schema,
        value: &[u8],
    ) -> ValidationResult<Box<dyn Assertion>> {
        if self.usage != RuleUsage::Ordering {
            return Ok(Box::new(UndefinedAssertion));
        }
        Ok(Box::new(OrderingAssertion::greater_or_equal(self.normalize(value)?, byte_order)))
    }

    fn less_or_equal_assertion(
        &self,
        _schema: &Schema,
        value: &[u8],
    ) -> ValidationResult<Box<dyn Assertion>> {
        if self.usage != RuleUsage::Ordering {
            return Ok(Box::new(UndefinedAssertion));
        }
        Ok(Box::new(OrderingAssertion::less_or_equal(self.normalize(value)?, byte_order)))
    }
}

/// `uuidMatch` and `uuidOrderingMatch` (RFC 4530).
#[derive(Debug, Clone, Copy)]
pub struct UuidMatchingRule {
    usage: RuleUsage,
}

impl UuidMatchingRule {
    pub fn new(usage: RuleUsage) -> Self {
        Self { usage }
    }

    fn normalize(&self, value: &[u8]) -> ValidationResult<Vec<u8>> {
        let text = utf8("uuidMatch", value)?.trim();
        let uuid = Uuid::parse_str(text)
            .map_err(|e| ValidationError::invalid("UUID", text, e.to_string()))?;
        Ok(uuid.hyphenated().to_string().into_bytes())
    }
}

impl MatchingRuleImpl for UuidMatchingRule {
    fn normalize_attribute_value(&self, _schema: &Schema, value: &[u8]) -> ValidationResult<Vec<u8>> {
        self.normalize(value)
    }

    fn assertion(&self, _schema: &Schema, value: &[u8]) -> ValidationResult<Box<dyn Assertion>> {
        Ok(usage_assertion(self.usage, self.normalize(value)?, byte_order))
    }

    fn greater_or_equal_assertion(
        &self,
        _schema: &Schema,
        value: &[u8],
    ) -> ValidationResult<Box<dyn Assertion>> {
        if self.usage != RuleUsage::Ordering {
            return Ok(Box::new(UndefinedAssertion));
        }
        Ok(Box::new(OrderingAssertion::greater_or_equal(self.normalize(value)?, byte_order)))
    }

    fn less_or_equal_assertion(
        &self,
        _schema: &Schema,
        value: &[u8],
    ) -> ValidationResult<Box<dyn Assertion>> {
        if self.usage != RuleUsage::Ordering {
            return Ok(Box::new(UndefinedAssertion));
        }
        Ok(Box::new(OrderingAssertion::less_or_equal(self.normalize(value)?, byte_order)))
    }
}

/// Type of the first component compared by a first-component rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FirstComponent {
    Integer,
    ObjectIdentifier,
    DirectoryString,
}

/// `integerFirstComponentMatch`, `objectIdentifierFirstComponentMatch` and
/// `directoryStringFirstComponentMatch`.
///
/// Attribute values are parenthesized definitions whose first component is
/// compared; assertion values are the component itself.
#[derive(Debug, Clone, Copy)]
pub struct FirstComponentEqualityMatchingRule {
    component: FirstComponent,
}

impl FirstComponentEqualityMatchingRule {
    pub fn new(component: FirstComponent) -> Self {
        Self { component }
    }

    fn normalize_component(&self, schema: &Schema, component: &str) -> ValidationResult<Vec<u8>> {
        match self.component {
            FirstComponent::Integer => normalize_integer(component.as_bytes()),
            FirstComponent::ObjectIdentifier => normalize_oid(schema, component),
            FirstComponent::DirectoryString => {
                let unquoted = component
                    .strip_prefix('\'')
                    .and_then(|c| c.strip_suffix('\''))
                    .unwrap_or(component);
                Ok(prepare_string(unquoted, true).into_bytes())
            }
        }
    }
}

/// The first whitespace-delimited token after the opening parenthesis.
fn first_component(text: &str) -> ValidationResult<&str> {
    let inner = text
        .trim_start()
        .strip_prefix('(')
        .ok_or_else(|| ValidationError::component("first component", text, 0, "expected '('"))?
        .trim_start();
    let end = inner
        .find(|c: char| c.is_whitespace() || c == ')')
        .unwrap_or(inner.len());
    if end == 0 {
        return Err(ValidationError::too_short("first component", text));
    }
    Ok(&inner[..end])
}

impl MatchingRuleImpl for FirstComponentEqualityMatchingRule {
    fn normalize_attribute_value(&self, schema: &Schema, value: &[u8]) -> ValidationResult<Vec<u8>> {
        let text = utf8("first component", value)?;
        self.normalize_component(schema, first_component(text)?)
    }

    fn assertion(&self, schema: &Schema, value: &[u8]) -> ValidationResult<Box<dyn Assertion>> {
        let text = utf8("first component", value)?.trim();
        Ok(Box::new(EqualityAssertion::new(
            self.normalize_component(schema, text)?,
        )))
    }
}
