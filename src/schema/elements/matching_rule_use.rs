//! The matching rule use element.

use std::borrow::Cow;
use std::fmt;

use crate::error::ElementKind;
use crate::schema::types::{ElementInfo, SchemaElement, element_info_setters};
use crate::schema::writer::DefinitionWriter;

/// Restricts a matching rule to a set of attribute types.
///
/// Keyed by the OID of the matching rule it applies to.
#[derive(Debug, Clone)]
pub struct MatchingRuleUse {
    oid: String,
    info: ElementInfo,
    attributes: Vec<String>,
    definition: Option<String>,
    resolved: Option<Vec<String>>,
}

element_info_setters!(MatchingRuleUse);

impl MatchingRuleUse {
    pub fn new<I, S>(matching_rule_oid: impl Into<String>, attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            oid: matching_rule_oid.into(),
            info: ElementInfo::default(),
            attributes: attributes.into_iter().map(Into::into).collect(),
            definition: None,
            resolved: None,
        }
    }

    /// OID of the matching rule.
    pub fn matching_rule_oid(&self) -> &str {
        &self.oid
    }

    /// Attribute types as declared in `APPLIES`.
    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }

    /// Numeric OIDs of the attribute types, once resolved.
    pub fn resolved_attributes(&self) -> Option<&[String]> {
        self.resolved.as_deref()
    }

    /// Whether the rule may be used with the attribute type `oid`.
    pub fn applies_to(&self, oid: &str) -> bool {
        self.resolved
            .as_ref()
            .is_some_and(|attributes| attributes.iter().any(|a| a == oid))
    }

    pub(crate) fn set_resolved(&mut self, attributes: Vec<String>) {
        self.resolved = Some(attributes);
    }

    fn synthesize_definition(&self) -> String {
        DefinitionWriter::new(&self.oid)
            .names_and_description(&self.info)
            .oids("APPLIES", &self.attributes)
            .finish(&self.info)
    }
}

impl SchemaElement for MatchingRuleUse {
    fn kind(&self) -> ElementKind {
        ElementKind::MatchingRuleUse
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

impl PartialEq for MatchingRuleUse {
    fn eq(&self, other: &Self) -> bool {
        self.oid == other.oid && self.info == other.info && self.attributes == other.attributes
    }
}

impl fmt::Display for MatchingRuleUse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.definition())
    }
}
