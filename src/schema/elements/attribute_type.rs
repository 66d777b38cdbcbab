//! The attribute type element.

use std::borrow::Cow;
use std::fmt;

use crate::error::ElementKind;
use crate::schema::types::{
    AttributeUsage, ElementInfo, SchemaElement, X_APPROX, element_info_setters,
};
use crate::schema::writer::DefinitionWriter;

/// An attribute type as declared, plus the references the resolution pass
/// wires in.
#[derive(Debug, Clone)]
pub struct AttributeType {
    oid: String,
    info: ElementInfo,
    superior: Option<String>,
    syntax: Option<String>,
    syntax_length: Option<u32>,
    equality_matching_rule: Option<String>,
    ordering_matching_rule: Option<String>,
    substring_matching_rule: Option<String>,
    approximate_matching_rule: Option<String>,
    single_value: bool,
    collective: bool,
    no_user_modification: bool,
    usage: AttributeUsage,
    definition: Option<String>,
    resolved: Option<ResolvedAttributeType>,
}

/// Effective values after inheritance, all as numeric OIDs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAttributeType {
    pub superior: Option<String>,
    pub syntax: String,
    pub equality_matching_rule: Option<String>,
    pub ordering_matching_rule: Option<String>,
    pub substring_matching_rule: Option<String>,
    pub approximate_matching_rule: Option<String>,
    /// Every superior type, nearest first
    pub ancestors: Vec<String>,
}

element_info_setters!(AttributeType);

impl AttributeType {
    pub fn new(oid: impl Into<String>) -> Self {
        Self {
            oid: oid.into(),
            info: ElementInfo::default(),
            superior: None,
            syntax: None,
            syntax_length: None,
            equality_matching_rule: None,
            ordering_matching_rule: None,
            substring_matching_rule: None,
            approximate_matching_rule: None,
            single_value: false,
            collective: false,
            no_user_modification: false,
            usage: AttributeUsage::UserApplications,
            definition: None,
            resolved: None,
        }
    }

    pub fn with_superior(mut self, superior: impl Into<String>) -> Self {
        self.superior = Some(superior.into());
        self.definition = None;
        self
    }

    pub fn with_syntax(mut self, syntax: impl Into<String>) -> Self {
        self.syntax = Some(syntax.into());
        self.definition = None;
        self
    }

    /// Suggested maximum length, written as `SYNTAX oid{length}`.
    pub fn with_syntax_length(mut self, length: u32) -> Self {
        self.syntax_length = Some(length);
        self.definition = None;
        self
    }

    pub fn with_equality_matching_rule(mut self, rule: impl Into<String>) -> Self {
        self.equality_matching_rule = Some(rule.into());
        self.definition = None;
        self
    }

    pub fn with_ordering_matching_rule(mut self, rule: impl Into<String>) -> Self {
        self.ordering_matching_rule = Some(rule.into());
        self.definition = None;
        self
    }

    pub fn with_substring_matching_rule(mut self, rule: impl Into<String>) -> Self {
        self.substring_matching_rule = Some(rule.into());
        self.definition = None;
        self
    }

    /// Recorded in the definition as the `X-APPROX` extension.
    pub fn with_approximate_matching_rule(mut self, rule: impl Into<String>) -> Self {
        let rule = rule.into();
        self.info
            .extensions
            .insert(X_APPROX.to_string(), vec![rule.clone()]);
        self.approximate_matching_rule = Some(rule);
        self.definition = None;
        self
    }

    pub fn with_single_value(mut self, single_value: bool) -> Self {
        self.single_value = single_value;
        self.definition = None;
        self
    }

    pub fn with_collective(mut self, collective: bool) -> Self {
        self.collective = collective;
        self.definition = None;
        self
    }

    pub fn with_no_user_modification(mut self, no_user_modification: bool) -> Self {
        self.no_user_modification = no_user_modification;
        self.definition = None;
        self
    }

    pub fn with_usage(mut self, usage: AttributeUsage) -> Self {
        self.usage = usage;
        self.definition = None;
        self
    }

    pub fn oid(&self) -> &str {
        &self.oid
    }

    /// The superior type as declared.
    pub fn superior(&self) -> Option<&str> {
        self.superior.as_deref()
    }

    /// The syntax as declared.
    pub fn syntax(&self) -> Option<&str> {
        self.syntax.as_deref()
    }

    pub fn syntax_length(&self) -> Option<u32> {
        self.syntax_length
    }

    pub fn equality_matching_rule(&self) -> Option<&str> {
        self.equality_matching_rule.as_deref()
    }

    pub fn ordering_matching_rule(&self) -> Option<&str> {
        self.ordering_matching_rule.as_deref()
    }

    pub fn substring_matching_rule(&self) -> Option<&str> {
        self.substring_matching_rule.as_deref()
    }

    pub fn approximate_matching_rule(&self) -> Option<&str> {
        self.approximate_matching_rule.as_deref()
    }

    pub fn is_single_value(&self) -> bool {
        self.single_value
    }

    pub fn is_collective(&self) -> bool {
        self.collective
    }

    pub fn is_no_user_modification(&self) -> bool {
        self.no_user_modification
    }

    pub fn usage(&self) -> AttributeUsage {
        self.usage
    }

    pub fn is_operational(&self) -> bool {
        self.usage.is_operational()
    }

    /// Effective syntax and matching rules, once the owning schema is built.
    pub fn resolved(&self) -> Option<&ResolvedAttributeType> {
        self.resolved.as_ref()
    }

    pub(crate) fn set_resolved(&mut self, resolved: ResolvedAttributeType) {
        self.resolved = Some(resolved);
    }

    /// Whether this type is `oid` or inherits from it.
    pub fn is_subtype_of(&self, oid: &str) -> bool {
        self.oid == oid
            || self
                .resolved
                .as_ref()
                .is_some_and(|resolved| resolved.ancestors.iter().any(|a| a == oid))
    }

    fn synthesize_definition(&self) -> String {
        let mut writer = DefinitionWriter::new(&self.oid)
            .names_and_description(&self.info)
            .oid("SUP", self.superior.as_deref())
            .oid("EQUALITY", self.equality_matching_rule.as_deref())
            .oid("ORDERING", self.ordering_matching_rule.as_deref())
            .oid("SUBSTR", self.substring_matching_rule.as_deref())
            .syntax(self.syntax.as_deref(), self.syntax_length)
            .flag("SINGLE-VALUE", self.single_value)
            .flag("COLLECTIVE", self.collective)
            .flag("NO-USER-MODIFICATION", self.no_user_modification);
        if self.usage != AttributeUsage::UserApplications {
            writer = writer.keyword("USAGE", self.usage.keyword());
        }
        writer.finish(&self.info)
    }
}

impl SchemaElement for AttributeType {
    fn kind(&self) -> ElementKind {
        ElementKind::AttributeType
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

impl PartialEq for AttributeType {
    fn eq(&self, other: &Self) -> bool {
        self.oid == other.oid
            && self.info == other.info
            && self.superior == other.superior
            && self.syntax == other.syntax
            && self.syntax_length == other.syntax_length
            && self.equality_matching_rule == other.equality_matching_rule
            && self.ordering_matching_rule == other.ordering_matching_rule
            && self.substring_matching_rule == other.substring_matching_rule
            && self.approximate_matching_rule == other.approximate_matching_rule
            && self.single_value == other.single_value
            && self.collective == other.collective
            && self.no_user_modification == other.no_user_modification
            && self.usage == other.usage
    }
}

impl fmt::Display for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.definition())
    }
}
