//! Core type definitions shared by every schema element kind.
//!
//! This module contains the data every element carries regardless of its kind
//! (names, description, obsolete flag, extension properties) together with the
//! small enumerations used by attribute types and object classes.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

use crate::error::ElementKind;

/// Vendor extension properties, e.g. `X-ORIGIN 'RFC 4519'`.
///
/// Keys keep their declared case; each key maps to one or more values.
pub type Extensions = BTreeMap<String, Vec<String>>;

/// Extension property naming the substitute syntax.
pub const X_SUBST: &str = "X-SUBST";
/// Extension property holding a regular expression values must match.
pub const X_PATTERN: &str = "X-PATTERN";
/// Extension property listing the permitted values of an enumeration syntax.
pub const X_ENUM: &str = "X-ENUM";
/// Extension property naming the approximate matching rule of an attribute type.
pub const X_APPROX: &str = "X-APPROX";
/// Extension property recording where an element was defined.
pub const X_ORIGIN: &str = "X-ORIGIN";

/// Fields common to every schema element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementInfo {
    /// User-defined names, in declaration order
    pub names: Vec<String>,
    /// Free-text description
    pub description: Option<String>,
    /// Whether the element is obsolete
    pub obsolete: bool,
    /// Extension properties
    pub extensions: Extensions,
}

impl ElementInfo {
    /// Returns `true` if one of the names matches `name` case-insensitively.
    pub fn has_name(&self, name: &str) -> bool {
        self.names.iter().any(|n| n.eq_ignore_ascii_case(name))
    }

    pub(crate) fn lowercase_names(&self) -> impl Iterator<Item = String> + '_ {
        self.names.iter().map(|n| n.to_ascii_lowercase())
    }
}

/// Behaviour shared by all schema elements.
pub trait SchemaElement {
    /// The element kind
    fn kind(&self) -> ElementKind;

    /// The primary identifier: numeric OID, or rule ID for DIT structure rules
    fn identifier(&self) -> Cow<'_, str>;

    /// Common fields
    fn info(&self) -> &ElementInfo;

    /// The canonical RFC 4512 definition
    fn definition(&self) -> Cow<'_, str>;

    fn names(&self) -> &[String] {
        &self.info().names
    }

    fn name(&self) -> Option<&str> {
        self.info().names.first().map(String::as_str)
    }

    fn has_name(&self, name: &str) -> bool {
        self.info().has_name(name)
    }

    /// The first name, or the identifier when the element is unnamed.
    fn name_or_oid(&self) -> Cow<'_, str> {
        match self.name() {
            Some(name) => Cow::Borrowed(name),
            None => self.identifier(),
        }
    }

    fn description(&self) -> Option<&str> {
        self.info().description.as_deref()
    }

    fn is_obsolete(&self) -> bool {
        self.info().obsolete
    }

    fn extensions(&self) -> &Extensions {
        &self.info().extensions
    }

    fn extension(&self, key: &str) -> Option<&[String]> {
        self.info()
            .extensions
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_slice())
    }

    /// `true` when the identifier or one of the names matches.
    fn has_name_or_oid(&self, value: &str) -> bool {
        self.identifier() == value || self.has_name(value)
    }
}

/// Implements the builder-style setters for [`ElementInfo`] on an element type.
///
/// Every setter drops the verbatim definition so that the synthesized one
/// reflects the change.
macro_rules! element_info_setters {
    ($element:ty) => {
        impl $element {
            /// Replace the names of this element.
            pub fn with_names<I, S>(mut self, names: I) -> Self
            where
                I: IntoIterator<Item = S>,
                S: Into<String>,
            {
                self.info.names = names.into_iter().map(Into::into).collect();
                self.definition = None;
                self
            }

            /// Append a name.
            pub fn with_name(mut self, name: impl Into<String>) -> Self {
                self.info.names.push(name.into());
                self.definition = None;
                self
            }

            pub fn with_description(mut self, description: impl Into<String>) -> Self {
                self.info.description = Some(description.into());
                self.definition = None;
                self
            }

            pub fn with_obsolete(mut self, obsolete: bool) -> Self {
                self.info.obsolete = obsolete;
                self.definition = None;
                self
            }

            /// Add or replace an extension property.
            pub fn with_extension<I, S>(mut self, key: impl Into<String>, values: I) -> Self
            where
                I: IntoIterator<Item = S>,
                S: Into<String>,
            {
                self.info
                    .extensions
                    .insert(key.into(), values.into_iter().map(Into::into).collect());
                self.definition = None;
                self
            }

            pub(crate) fn with_info(mut self, info: $crate::schema::types::ElementInfo) -> Self {
                self.info = info;
                self.definition = None;
                self
            }

            pub(crate) fn with_definition(mut self, definition: impl Into<String>) -> Self {
                self.definition = Some(definition.into());
                self
            }
        }
    };
}

pub(crate) use element_info_setters;

/// Kind of an object class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ObjectClassKind {
    Abstract,
    #[default]
    Structural,
    Auxiliary,
}

impl ObjectClassKind {
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Abstract => "ABSTRACT",
            Self::Structural => "STRUCTURAL",
            Self::Auxiliary => "AUXILIARY",
        }
    }

    /// Whether a class of this kind may derive from a class of `superior` kind.
    pub fn may_derive_from(&self, superior: ObjectClassKind) -> bool {
        match self {
            Self::Abstract => superior == Self::Abstract,
            Self::Auxiliary => matches!(superior, Self::Abstract | Self::Auxiliary),
            Self::Structural => matches!(superior, Self::Abstract | Self::Structural),
        }
    }
}

impl fmt::Display for ObjectClassKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Usage category of an attribute type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AttributeUsage {
    #[default]
    UserApplications,
    DirectoryOperation,
    DistributedOperation,
    #[serde(rename = "dSAOperation")]
    DsaOperation,
}

impl AttributeUsage {
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::UserApplications => "userApplications",
            Self::DirectoryOperation => "directoryOperation",
            Self::DistributedOperation => "distributedOperation",
            Self::DsaOperation => "dSAOperation",
        }
    }

    /// Parse the RFC 4512 usage keyword, ignoring case.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        [
            Self::UserApplications,
            Self::DirectoryOperation,
            Self::DistributedOperation,
            Self::DsaOperation,
        ]
        .into_iter()
        .find(|usage| usage.keyword().eq_ignore_ascii_case(keyword))
    }

    pub fn is_operational(&self) -> bool {
        *self != Self::UserApplications
    }
}

impl fmt::Display for AttributeUsage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}
