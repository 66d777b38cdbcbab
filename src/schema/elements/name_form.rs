//! The name form element.

use std::borrow::Cow;
use std::fmt;

use crate::error::ElementKind;
use crate::schema::types::{ElementInfo, SchemaElement, element_info_setters};
use crate::schema::writer::DefinitionWriter;

/// Which attributes may name entries of a structural object class.
#[derive(Debug, Clone)]
pub struct NameForm {
    oid: String,
    info: ElementInfo,
    structural_class: String,
    required: Vec<String>,
    optional: Vec<String>,
    definition: Option<String>,
    resolved: Option<ResolvedNameForm>,
}

/// Numeric OIDs of everything a name form refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedNameForm {
    pub structural_class: String,
    pub required: Vec<String>,
    pub optional: Vec<String>,
}

element_info_setters!(NameForm);

impl NameForm {
    pub fn new<I, S>(oid: impl Into<String>, structural_class: impl Into<String>, required: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            oid: oid.into(),
            info: ElementInfo::default(),
            structural_class: structural_class.into(),
            required: required.into_iter().map(Into::into).collect(),
            optional: Vec::new(),
            definition: None,
            resolved: None,
        }
    }

    pub fn with_optional_attributes<I, S>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.optional = attributes.into_iter().map(Into::into).collect();
        self.definition = None;
        self
    }

    pub fn oid(&self) -> &str {
        &self.oid
    }

    /// The `OC` reference as declared.
    pub fn structural_class(&self) -> &str {
        &self.structural_class
    }

    pub fn required_attributes(&self) -> &[String] {
        &self.required
    }

    pub fn optional_attributes(&self) -> &[String] {
        &self.optional
    }

    pub fn resolved(&self) -> Option<&ResolvedNameForm> {
        self.resolved.as_ref()
    }

    pub(crate) fn set_resolved(&mut self, resolved: ResolvedNameForm) {
        self.resolved = Some(resolved);
    }

    fn synthesize_definition(&self) -> String {
        DefinitionWriter::new(&self.oid)
            .names_and_description(&self.info)
            .oid("OC", Some(&self.structural_class))
            .oids("MUST", &self.required)
            .oids("MAY", &self.optional)
            .finish(&self.info)
    }
}

impl SchemaElement for NameForm {
    fn kind(&self) -> ElementKind {
        ElementKind::NameForm
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

impl PartialEq for NameForm {
    fn eq(&self, other: &Self) -> bool {
        self.oid == other.oid
            && self.info == other.info
            && self.structural_class == other.structural_class
            && self.required == other.required
            && self.optional == other.optional
    }
}

impl fmt::Display for NameForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.definition())
    }
}
