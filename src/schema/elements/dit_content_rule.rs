//! The DIT content rule element.

use std::borrow::Cow;
use std::fmt;

use crate::error::ElementKind;
use crate::schema::types::{ElementInfo, SchemaElement, element_info_setters};
use crate::schema::writer::DefinitionWriter;

/// Extends the content of entries whose structural class is the rule's key.
#[derive(Debug, Clone)]
pub struct DitContentRule {
    structural_class: String,
    info: ElementInfo,
    auxiliary_classes: Vec<String>,
    required: Vec<String>,
    optional: Vec<String>,
    prohibited: Vec<String>,
    definition: Option<String>,
    resolved: Option<ResolvedDitContentRule>,
}

/// Numeric OIDs of everything a content rule refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDitContentRule {
    pub structural_class: String,
    pub auxiliary_classes: Vec<String>,
    pub required: Vec<String>,
    pub optional: Vec<String>,
    pub prohibited: Vec<String>,
}

element_info_setters!(DitContentRule);

fn collect<I, S>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    values.into_iter().map(Into::into).collect()
}

impl DitContentRule {
    pub fn new(structural_class: impl Into<String>) -> Self {
        Self {
            structural_class: structural_class.into(),
            info: ElementInfo::default(),
            auxiliary_classes: Vec::new(),
            required: Vec::new(),
            optional: Vec::new(),
            prohibited: Vec::new(),
            definition: None,
            resolved: None,
        }
    }

    pub fn with_auxiliary_classes<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.auxiliary_classes = collect(classes);
        self.definition = None;
        self
    }

    pub fn with_required_attributes<I, S>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required = collect(attributes);
        self.definition = None;
        self
    }

    pub fn with_optional_attributes<I, S>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.optional = collect(attributes);
        self.definition = None;
        self
    }

    pub fn with_prohibited_attributes<I, S>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.prohibited = collect(attributes);
        self.definition = None;
        self
    }

    /// OID of the structural class, which is also the rule's identifier.
    pub fn structural_class(&self) -> &str {
        &self.structural_class
    }

    pub fn auxiliary_classes(&self) -> &[String] {
        &self.auxiliary_classes
    }

    pub fn required_attributes(&self) -> &[String] {
        &self.required
    }

    pub fn optional_attributes(&self) -> &[String] {
        &self.optional
    }

    pub fn prohibited_attributes(&self) -> &[String] {
        &self.prohibited
    }

    pub fn resolved(&self) -> Option<&ResolvedDitContentRule> {
        self.resolved.as_ref()
    }

    pub(crate) fn set_resolved(&mut self, resolved: ResolvedDitContentRule) {
        self.resolved = Some(resolved);
    }

    fn synthesize_definition(&self) -> String {
        DefinitionWriter::new(&self.structural_class)
            .names_and_description(&self.info)
            .oids("AUX", &self.auxiliary_classes)
            .oids("MUST", &self.required)
            .oids("MAY", &self.optional)
            .oids("NOT", &self.prohibited)
            .finish(&self.info)
    }
}

impl SchemaElement for DitContentRule {
    fn kind(&self) -> ElementKind {
        ElementKind::DitContentRule
    }

    fn identifier(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.structural_class)
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

impl PartialEq for DitContentRule {
    fn eq(&self, other: &Self) -> bool {
        self.structural_class == other.structural_class
            && self.info == other.info
            && self.auxiliary_classes == other.auxiliary_classes
            && self.required == other.required
            && self.optional == other.optional
            && self.prohibited == other.prohibited
    }
}

impl fmt::Display for DitContentRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.definition())
    }
}
