//! Syntaxes whose values are schema element definitions.

use super::{SyntaxImpl, as_utf8};
use crate::error::{ElementKind, ValidationError, ValidationResult};
use crate::schema::Schema;
use crate::schema::oids::*;
use crate::schema::parser;

/// One of the RFC 4517 `... Description` syntaxes, validated with the
/// definition parser for the matching element kind.
#[derive(Debug, Clone, Copy)]
pub struct DefinitionSyntax {
    kind: ElementKind,
}

impl DefinitionSyntax {
    pub fn new(kind: ElementKind) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }
}

impl SyntaxImpl for DefinitionSyntax {
    fn name(&self) -> &str {
        match self.kind {
            ElementKind::Syntax => "LDAP Syntax Description",
            ElementKind::MatchingRule => "Matching Rule Description",
            ElementKind::MatchingRuleUse => "Matching Rule Use Description",
            ElementKind::AttributeType => "Attribute Type Description",
            ElementKind::ObjectClass => "Object Class Description",
            ElementKind::NameForm => "Name Form Description",
            ElementKind::DitContentRule => "DIT Content Rule Description",
            ElementKind::DitStructureRule => "DIT Structure Rule Description",
        }
    }

    fn equality_matching_rule(&self) -> Option<&str> {
        match self.kind {
            ElementKind::DitStructureRule => Some(EMR_INTEGER_FIRST_COMPONENT),
            _ => Some(EMR_OBJECT_IDENTIFIER_FIRST_COMPONENT),
        }
    }

    fn value_is_acceptable(&self, _schema: &Schema, value: &[u8]) -> ValidationResult<()> {
        let text = as_utf8(self.name(), value)?;
        parser::check_definition(self.kind, text)
            .map_err(|e| ValidationError::component(self.name(), text, e.position(), e.to_string()))
    }
}
