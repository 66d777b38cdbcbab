//! Test data builders for assembling small schemas on top of the core schema.
//!
//! Definitions are collected per element kind and added in dependency order,
//! so tests can list them in whatever order reads best.

use ldap_schema::error::SchemaResult;
use ldap_schema::schema::{Schema, SchemaBuilder, SchemaOptions};

/// Fluent collection of RFC 4512 definitions
#[derive(Debug, Clone, Default)]
pub struct DefinitionSet {
    syntaxes: Vec<String>,
    matching_rules: Vec<String>,
    matching_rule_uses: Vec<String>,
    attribute_types: Vec<String>,
    object_classes: Vec<String>,
    name_forms: Vec<String>,
    content_rules: Vec<String>,
    structure_rules: Vec<String>,
    options: Option<SchemaOptions>,
    overwrite: bool,
}

impl DefinitionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn syntax(mut self, definition: &str) -> Self {
        self.syntaxes.push(definition.to_string());
        self
    }

    pub fn matching_rule(mut self, definition: &str) -> Self {
        self.matching_rules.push(definition.to_string());
        self
    }

    pub fn matching_rule_use(mut self, definition: &str) -> Self {
        self.matching_rule_uses.push(definition.to_string());
        self
    }

    pub fn attribute_type(mut self, definition: &str) -> Self {
        self.attribute_types.push(definition.to_string());
        self
    }

    pub fn object_class(mut self, definition: &str) -> Self {
        self.object_classes.push(definition.to_string());
        self
    }

    pub fn name_form(mut self, definition: &str) -> Self {
        self.name_forms.push(definition.to_string());
        self
    }

    pub fn content_rule(mut self, definition: &str) -> Self {
        self.content_rules.push(definition.to_string());
        self
    }

    pub fn structure_rule(mut self, definition: &str) -> Self {
        self.structure_rules.push(definition.to_string());
        self
    }

    pub fn with_options(mut self, options: SchemaOptions) -> Self {
        self.options = Some(options);
        self
    }

    /// Replace existing elements instead of failing on conflicts
    pub fn overwriting(mut self) -> Self {
        self.overwrite = true;
        self
    }

    /// Add every definition to a builder seeded from the core schema
    pub fn builder(&self) -> SchemaResult<SchemaBuilder> {
        let mut builder = SchemaBuilder::from_schema(Schema::core_schema()).with_name("Test Schema");
        if let Some(options) = &self.options {
            builder = builder.with_options(options.clone());
        }
        let overwrite = self.overwrite;
        for definition in &self.syntaxes {
            builder.add_syntax_definition(definition, overwrite)?;
        }
        for definition in &self.matching_rules {
            builder.add_matching_rule_definition(definition, overwrite)?;
        }
        for definition in &self.matching_rule_uses {
            builder.add_matching_rule_use_definition(definition, overwrite)?;
        }
        for definition in &self.attribute_types {
            builder.add_attribute_type_definition(definition, overwrite)?;
        }
        for definition in &self.object_classes {
            builder.add_object_class_definition(definition, overwrite)?;
        }
        for definition in &self.name_forms {
            builder.add_name_form_definition(definition, overwrite)?;
        }
        for definition in &self.content_rules {
            builder.add_dit_content_rule_definition(definition, overwrite)?;
        }
        for definition in &self.structure_rules {
            builder.add_dit_structure_rule_definition(definition, overwrite)?;
        }
        Ok(builder)
    }

    /// Add every definition and build the schema
    pub fn build(&self) -> SchemaResult<Schema> {
        self.builder()?.to_schema()
    }
}

/// A schema whose options differ from the defaults
pub fn schema_with_options(options: SchemaOptions) -> Schema {
    DefinitionSet::new()
        .with_options(options)
        .build()
        .expect("core schema builds with any valid options")
}
