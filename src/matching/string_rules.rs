//! String matching rules: caseIgnore*, caseExact*, the IA5 variants,
//! numericString*, telephoneNumber*, caseIgnoreList* and word/keyword
//! matching.

use super::normalize::{
    prepare_numeric_string, prepare_string, prepare_substring, prepare_telephone_number,
};
use super::{
    Assertion, ConditionResult, EqualityAssertion, LessThanAssertion, MatchingRuleImpl,
    OrderingAssertion, RuleUsage, UndefinedAssertion, byte_order, substring_assertion_with,
};
use crate::error::{ValidationError, ValidationResult};
use crate::schema::Schema;

/// How a string rule prepares values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StringFlavor {
    CaseIgnore,
    CaseExact,
    CaseIgnoreIa5,
    CaseExactIa5,
    NumericString,
    TelephoneNumber,
    /// `$`-separated lines, each prepared case-insensitively
    CaseIgnoreList,
}

impl StringFlavor {
    fn label(&self) -> &'static str {
        match self {
            Self::CaseIgnore => "caseIgnore",
            Self::CaseExact => "caseExact",
            Self::CaseIgnoreIa5 => "caseIgnoreIA5",
            Self::CaseExactIa5 => "caseExactIA5",
            Self::NumericString => "numericString",
            Self::TelephoneNumber => "telephoneNumber",
            Self::CaseIgnoreList => "caseIgnoreList",
        }
    }

    fn text<'a>(&self, value: &'a [u8]) -> ValidationResult<&'a str> {
        let text = std::str::from_utf8(value).map_err(|_| ValidationError::NotUtf8 {
            syntax: self.label().to_string(),
        })?;
        if matches!(self, Self::CaseIgnoreIa5 | Self::CaseExactIa5) {
            if let Some((i, c)) = text.char_indices().find(|(_, c)| !c.is_ascii()) {
                return Err(ValidationError::illegal_character(self.label(), text, c, i));
            }
        }
        if *self == Self::NumericString {
            if let Some((i, c)) = text
                .char_indices()
                .find(|(_, c)| !(c.is_ascii_digit() || *c == ' '))
            {
                return Err(ValidationError::illegal_character(self.label(), text, c, i));
            }
        }
        Ok(text)
    }

    fn prepare(&self, text: &str, substring: bool) -> String {
        let prepare_text = |text: &str, fold: bool| {
            if substring {
                prepare_substring(text, fold)
            } else {
                prepare_string(text, fold)
            }
        };
        match self {
            Self::CaseIgnore | Self::CaseIgnoreIa5 => prepare_text(text, true),
            Self::CaseExact | Self::CaseExactIa5 => prepare_text(text, false),
            Self::NumericString => prepare_numeric_string(text),
            Self::TelephoneNumber => prepare_telephone_number(text),
            Self::CaseIgnoreList => text
                .split('$')
                .map(|line| prepare_string(&line.replace("\\24", "$").replace("\\5C", "\\"), true))
                .collect::<Vec<_>>()
                .join("$"),
        }
    }

    /// Prepare a complete value.
    pub fn normalize(&self, value: &[u8]) -> ValidationResult<Vec<u8>> {
        Ok(self.prepare(self.text(value)?, false).into_bytes())
    }

    /// Prepare one component of a substring assertion.
    pub fn normalize_substring(&self, value: &[u8]) -> ValidationResult<Vec<u8>> {
        Ok(self.prepare(self.text(value)?, true).into_bytes())
    }
}

/// A string rule of a given flavor used for one purpose.
#[derive(Debug, Clone, Copy)]
pub struct StringMatchingRule {
    flavor: StringFlavor,
    usage: RuleUsage,
}

impl StringMatchingRule {
    pub fn new(flavor: StringFlavor, usage: RuleUsage) -> Self {
        Self { flavor, usage }
    }

    pub fn flavor(&self) -> StringFlavor {
        self.flavor
    }

    pub fn usage(&self) -> RuleUsage {
        self.usage
    }
}

impl MatchingRuleImpl for StringMatchingRule {
    fn normalize_attribute_value(&self, _schema: &Schema, value: &[u8]) -> ValidationResult<Vec<u8>> {
        self.flavor.normalize(value)
    }

    fn assertion(&self, _schema: &Schema, value: &[u8]) -> ValidationResult<Box<dyn Assertion>> {
        let normalized = self.flavor.normalize(value)?;
        match self.usage {
            RuleUsage::Equality => Ok(Box::new(EqualityAssertion::new(normalized))),
            // An ordering rule used as a plain assertion tests "less than"
            RuleUsage::Ordering => Ok(Box::new(LessThanAssertion::new(normalized, byte_order))),
            _ => Ok(Box::new(UndefinedAssertion)),
        }
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
            self.flavor.normalize(value)?,
            byte_order,
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
            self.flavor.normalize(value)?,
            byte_order,
        )))
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
        substring_assertion_with(sub_initial, sub_any, sub_final, |part| {
            self.flavor.normalize_substring(part)
        })
    }
}

/// `wordMatch` and `keywordMatch`: the assertion matches when it equals one
/// word of the attribute value, ignoring case.
///
/// Words are separated by whitespace; keywords are additionally split on
/// punctuation.
#[derive(Debug, Clone, Copy)]
pub struct WordMatchingRule {
    keyword: bool,
}

impl WordMatchingRule {
    pub fn word() -> Self {
        Self { keyword: false }
    }

    pub fn keyword() -> Self {
        Self { keyword: true }
    }
}

#[derive(Debug, Clone)]
struct WordAssertion {
    word: String,
    keyword: bool,
}

impl Assertion for WordAssertion {
    fn matches(&self, normalized_attribute_value: &[u8]) -> ConditionResult {
        let Ok(text) = std::str::from_utf8(normalized_attribute_value) else {
            return ConditionResult::Undefined;
        };
        let found = if self.keyword {
            text.split(|c: char| c.is_whitespace() || c.is_ascii_punctuation())
                .any(|w| w == self.word)
        } else {
            text.split(' ').any(|w| w == self.word)
        };
        ConditionResult::from_bool(found)
    }
}

impl MatchingRuleImpl for WordMatchingRule {
    fn normalize_attribute_value(&self, _schema: &Schema, value: &[u8]) -> ValidationResult<Vec<u8>> {
        StringFlavor::CaseIgnore.normalize(value)
    }

    fn assertion(&self, _schema: &Schema, value: &[u8]) -> ValidationResult<Box<dyn Assertion>> {
        let normalized = StringFlavor::CaseIgnore.normalize(value)?;
        let word = String::from_utf8(normalized).unwrap_or_default();
        Ok(Box::new(WordAssertion {
            word,
            keyword: self.keyword,
        }))
    }
}
