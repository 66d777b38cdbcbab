//! The object class element.

use std::borrow::Cow;
use std::collections::BTreeSet;
use std::fmt;

use crate::error::ElementKind;
use crate::schema::elements::AttributeType;
use crate::schema::oids::OC_EXTENSIBLE_OBJECT;
use crate::schema::types::{ElementInfo, ObjectClassKind, SchemaElement, element_info_setters};
use crate::schema::writer::DefinitionWriter;

/// An object class: the attributes entries of that class must and may hold.
#[derive(Debug, Clone)]
pub struct ObjectClass {
    oid: String,
    info: ElementInfo,
    superiors: Vec<String>,
    kind: ObjectClassKind,
    required: Vec<String>,
    optional: Vec<String>,
    definition: Option<String>,
    resolved: Option<ResolvedObjectClass>,
}

/// Inherited structure, all as numeric OIDs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedObjectClass {
    /// Direct superiors
    pub superiors: Vec<String>,
    /// Every class reachable through `SUP`
    pub ancestors: BTreeSet<String>,
    /// Required attribute types declared by this class alone
    pub declared_required: Vec<String>,
    /// Optional attribute types declared by this class alone
    pub declared_optional: Vec<String>,
    /// Required attribute types including inherited ones
    pub required: BTreeSet<String>,
    /// Optional attribute types including inherited ones
    pub optional: BTreeSet<String>,
}

element_info_setters!(ObjectClass);

impl ObjectClass {
    pub fn new(oid: impl Into<String>) -> Self {
        Self {
            oid: oid.into(),
            info: ElementInfo::default(),
            superiors: Vec::new(),
            kind: ObjectClassKind::Structural,
            required: Vec::new(),
            optional: Vec::new(),
            definition: None,
            resolved: None,
        }
    }

    pub fn with_superiors<I, S>(mut self, superiors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.superiors = superiors.into_iter().map(Into::into).collect();
        self.definition = None;
        self
    }

    pub fn with_kind(mut self, kind: ObjectClassKind) -> Self {
        self.kind = kind;
        self.definition = None;
        self
    }

    pub fn with_required_attributes<I, S>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required = attributes.into_iter().map(Into::into).collect();
        self.definition = None;
        self
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

    /// Superior classes as declared.
    pub fn superiors(&self) -> &[String] {
        &self.superiors
    }

    pub fn object_class_kind(&self) -> ObjectClassKind {
        self.kind
    }

    /// `MUST` as declared.
    pub fn required_attributes(&self) -> &[String] {
        &self.required
    }

    /// `MAY` as declared.
    pub fn optional_attributes(&self) -> &[String] {
        &self.optional
    }

    pub fn resolved(&self) -> Option<&ResolvedObjectClass> {
        self.resolved.as_ref()
    }

    pub(crate) fn set_resolved(&mut self, resolved: ResolvedObjectClass) {
        self.resolved = Some(resolved);
    }

    pub fn is_extensible_object(&self) -> bool {
        self.oid == OC_EXTENSIBLE_OBJECT
    }

    /// Whether this class is `oid` or inherits from it.
    pub fn is_descendant_of(&self, oid: &str) -> bool {
        self.oid == oid
            || self
                .resolved
                .as_ref()
                .is_some_and(|resolved| resolved.ancestors.contains(oid))
    }

    /// Whether entries of this class must hold `attribute`, directly or
    /// through one of its subtypes.
    pub fn is_required(&self, attribute: &AttributeType) -> bool {
        self.resolved.as_ref().is_some_and(|resolved| {
            resolved
                .required
                .iter()
                .any(|oid| attribute.is_subtype_of(oid))
        })
    }

    /// Whether entries of this class may hold `attribute`.
    ///
    /// `extensibleObject` allows every user attribute type.
    pub fn is_optional(&self, attribute: &AttributeType) -> bool {
        if self.is_extensible_object() && !attribute.is_operational() {
            return true;
        }
        self.resolved.as_ref().is_some_and(|resolved| {
            resolved
                .optional
                .iter()
                .any(|oid| attribute.is_subtype_of(oid))
        })
    }

    pub fn is_required_or_optional(&self, attribute: &AttributeType) -> bool {
        self.is_required(attribute) || self.is_optional(attribute)
    }

    fn synthesize_definition(&self) -> String {
        let mut writer = DefinitionWriter::new(&self.oid)
            .names_and_description(&self.info)
            .oids("SUP", &self.superiors);
        // STRUCTURAL is the default and is left implicit
        if self.kind != ObjectClassKind::Structural {
            writer = writer.flag(self.kind.keyword(), true);
        }
        writer
            .oids("MUST", &self.required)
            .oids("MAY", &self.optional)
            .finish(&self.info)
    }
}

impl SchemaElement for ObjectClass {
    fn kind(&self) -> ElementKind {
        ElementKind::ObjectClass
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

impl PartialEq for ObjectClass {
    fn eq(&self, other: &Self) -> bool {
        self.oid == other.oid
            && self.info == other.info
            && self.superiors == other.superiors
            && self.kind == other.kind
            && self.required == other.required
            && self.optional == other.optional
    }
}

impl fmt::Display for ObjectClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.definition())
    }
}
