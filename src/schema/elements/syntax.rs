//! The LDAP syntax element.

use regex::Regex;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::error::{DecodeError, DecodeResult, ElementKind, ValidationError, ValidationResult};
use crate::schema::Schema;
use crate::schema::types::{
    ElementInfo, SchemaElement, X_ENUM, X_PATTERN, X_SUBST, element_info_setters,
};
use crate::schema::writer::DefinitionWriter;
use crate::syntax::{EnumSyntaxImpl, PatternSyntaxImpl, SyntaxImpl};

/// How a syntax obtains its validator.
#[derive(Debug, Clone)]
pub enum SyntaxImplementation {
    /// Borrowed from the fallback schema, or the configured default syntax
    Unspecified,
    /// Supplied by the caller
    Provided(Arc<dyn SyntaxImpl>),
    /// `X-SUBST`: use another syntax's validator
    Substitution(String),
    /// `X-PATTERN`: values must match a regular expression
    Pattern(Arc<PatternSyntaxImpl>),
    /// `X-ENUM`: values must be one of a fixed list
    Enumeration(Arc<EnumSyntaxImpl>),
}

impl SyntaxImplementation {
    /// Derive the implementation from `X-SUBST`, `X-PATTERN` or `X-ENUM`, in that order.
    pub(crate) fn from_extensions(
        oid: &str,
        info: &ElementInfo,
        position: usize,
    ) -> DecodeResult<Option<Self>> {
        let extension = |key: &str| {
            info.extensions
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(key))
                .map(|(_, v)| v.as_slice())
        };

        if let Some(target) = extension(X_SUBST).and_then(|values| values.first()) {
            if target == oid {
                return Err(DecodeError::SelfSubstitution {
                    syntax: oid.to_string(),
                    position,
                });
            }
            return Ok(Some(Self::Substitution(target.clone())));
        }

        if let Some(pattern) = extension(X_PATTERN).and_then(|values| values.first()) {
            let regex = Regex::new(&format!("^(?:{pattern})$")).map_err(|e| {
                DecodeError::InvalidPattern {
                    syntax: oid.to_string(),
                    pattern: pattern.clone(),
                    reason: e.to_string(),
                    position,
                }
            })?;
            return Ok(Some(Self::Pattern(Arc::new(PatternSyntaxImpl::new(
                pattern.clone(),
                regex,
            )))));
        }

        if let Some(values) = extension(X_ENUM) {
            let mut seen: Vec<String> = Vec::with_capacity(values.len());
            for value in values {
                let folded = value.to_lowercase();
                if seen.contains(&folded) {
                    return Err(DecodeError::DuplicateEnumValue {
                        syntax: oid.to_string(),
                        value: value.clone(),
                        position,
                    });
                }
                seen.push(folded);
            }
            return Ok(Some(Self::Enumeration(Arc::new(EnumSyntaxImpl::new(
                oid,
                values.to_vec(),
            )))));
        }

        Ok(None)
    }
}

/// An LDAP syntax: an OID bound to a value validator.
#[derive(Debug, Clone)]
pub struct Syntax {
    oid: String,
    info: ElementInfo,
    implementation: SyntaxImplementation,
    definition: Option<String>,
    resolved: Option<Arc<dyn SyntaxImpl>>,
}

element_info_setters!(Syntax);

impl Syntax {
    pub fn new(oid: impl Into<String>) -> Self {
        Self {
            oid: oid.into(),
            info: ElementInfo::default(),
            implementation: SyntaxImplementation::Unspecified,
            definition: None,
            resolved: None,
        }
    }

    /// Attach a concrete validator.
    pub fn with_implementation(mut self, implementation: Arc<dyn SyntaxImpl>) -> Self {
        self.implementation = SyntaxImplementation::Provided(implementation);
        self
    }

    pub(crate) fn with_implementation_kind(mut self, implementation: SyntaxImplementation) -> Self {
        self.implementation = implementation;
        self
    }

    pub fn oid(&self) -> &str {
        &self.oid
    }

    /// How diagnostics refer to this syntax: its name, else its OID with the
    /// description that usually stands in for a name.
    pub fn label(&self) -> String {
        match (self.info.names.first(), &self.info.description) {
            (Some(name), _) => name.clone(),
            (None, Some(description)) => format!("{} ({description})", self.oid),
            (None, None) => self.oid.clone(),
        }
    }

    pub fn implementation(&self) -> &SyntaxImplementation {
        &self.implementation
    }

    /// The validator in effect once the owning schema is built.
    pub fn resolved_implementation(&self) -> Option<&Arc<dyn SyntaxImpl>> {
        self.resolved.as_ref()
    }

    pub(crate) fn set_resolved(&mut self, implementation: Arc<dyn SyntaxImpl>) {
        self.resolved = Some(implementation);
    }

    pub(crate) fn clear_resolved(&mut self) {
        self.resolved = None;
    }

    pub fn is_human_readable(&self) -> bool {
        self.resolved.as_ref().is_some_and(|i| i.is_human_readable())
    }

    pub fn is_ber_encoding_required(&self) -> bool {
        self.resolved.as_ref().is_some_and(|i| i.is_ber_encoding_required())
    }

    pub fn equality_matching_rule(&self) -> Option<&str> {
        self.resolved.as_ref()?.equality_matching_rule()
    }

    pub fn ordering_matching_rule(&self) -> Option<&str> {
        self.resolved.as_ref()?.ordering_matching_rule()
    }

    pub fn substring_matching_rule(&self) -> Option<&str> {
        self.resolved.as_ref()?.substring_matching_rule()
    }

    pub fn approximate_matching_rule(&self) -> Option<&str> {
        self.resolved.as_ref()?.approximate_matching_rule()
    }

    /// Check a value against this syntax.
    pub fn value_is_acceptable(&self, schema: &Schema, value: &[u8]) -> ValidationResult<()> {
        match &self.resolved {
            Some(implementation) => implementation.value_is_acceptable(schema, value),
            None => Err(ValidationError::invalid(
                self.oid.clone(),
                String::from_utf8_lossy(value),
                "the syntax has not been resolved against a schema",
            )),
        }
    }

    fn synthesize_definition(&self) -> String {
        DefinitionWriter::new(&self.oid)
            .names_and_description(&self.info)
            .finish(&self.info)
    }
}

impl SchemaElement for Syntax {
    fn kind(&self) -> ElementKind {
        ElementKind::Syntax
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

impl PartialEq for Syntax {
    fn eq(&self, other: &Self) -> bool {
        self.oid == other.oid && self.info == other.info
    }
}

impl fmt::Display for Syntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.definition())
    }
}
