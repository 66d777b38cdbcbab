//! The DIT structure rule element.

use std::borrow::Cow;
use std::fmt;

use crate::error::ElementKind;
use crate::schema::types::{ElementInfo, SchemaElement, element_info_setters};
use crate::schema::writer::DefinitionWriter;

/// Which name forms may appear beneath which others.
#[derive(Debug, Clone)]
pub struct DitStructureRule {
    rule_id: u32,
    info: ElementInfo,
    name_form: String,
    superior_rules: Vec<u32>,
    definition: Option<String>,
    resolved_name_form: Option<String>,
}

element_info_setters!(DitStructureRule);

impl DitStructureRule {
    pub fn new(rule_id: u32, name_form: impl Into<String>) -> Self {
        Self {
            rule_id,
            info: ElementInfo::default(),
            name_form: name_form.into(),
            superior_rules: Vec::new(),
            definition: None,
            resolved_name_form: None,
        }
    }

    pub fn with_superior_rules(mut self, superior_rules: impl IntoIterator<Item = u32>) -> Self {
        self.superior_rules = superior_rules.into_iter().collect();
        self.definition = None;
        self
    }

    pub fn rule_id(&self) -> u32 {
        self.rule_id
    }

    /// The `FORM` reference as declared.
    pub fn name_form(&self) -> &str {
        &self.name_form
    }

    pub fn superior_rules(&self) -> &[u32] {
        &self.superior_rules
    }

    /// Numeric OID of the name form, once resolved.
    pub fn resolved_name_form(&self) -> Option<&str> {
        self.resolved_name_form.as_deref()
    }

    pub(crate) fn set_resolved(&mut self, name_form_oid: String) {
        self.resolved_name_form = Some(name_form_oid);
    }

    fn synthesize_definition(&self) -> String {
        DefinitionWriter::new(&self.rule_id.to_string())
            .names_and_description(&self.info)
            .oid("FORM", Some(&self.name_form))
            .rule_ids("SUP", &self.superior_rules)
            .finish(&self.info)
    }
}

impl SchemaElement for DitStructureRule {
    fn kind(&self) -> ElementKind {
        ElementKind::DitStructureRule
    }

    fn identifier(&self) -> Cow<'_, str> {
        Cow::Owned(self.rule_id.to_string())
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

impl PartialEq for DitStructureRule {
    fn eq(&self, other: &Self) -> bool {
        self.rule_id == other.rule_id
            && self.info == other.info
            && self.name_form == other.name_form
            && self.superior_rules == other.superior_rules
    }
}

impl fmt::Display for DitStructureRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.definition())
    }
}
