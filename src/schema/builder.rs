//! Schema builder for assembling and resolving schemas.
//!
//! The builder owns a working copy of a catalog. Elements are added from
//! structured values or from RFC 4512 definitions, removed by name or OID,
//! and finally resolved into an immutable [`Schema`] with
//! [`to_schema`](SchemaBuilder::to_schema). A failed build leaves the working
//! copy untouched so the caller can correct it and try again.
//!
//! # Example
//! ```rust
//! use ldap_schema::schema::{Schema, SchemaBuilder};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut builder = SchemaBuilder::from_schema(Schema::core_schema());
//!     builder
//!         .add_attribute_type_definition(
//!             "( 1.3.6.1.4.1.99999.1 NAME 'badgeNumber' SUP name SINGLE-VALUE )",
//!             false,
//!         )?
//!         .add_object_class_definition(
//!             "( 1.3.6.1.4.1.99999.2 NAME 'badgeHolder' SUP top AUXILIARY MAY badgeNumber )",
//!             false,
//!         )?;
//!     let schema = builder.to_schema()?;
//!
//!     let badge = schema.get_attribute_type("badgeNumber")?;
//!     assert_eq!(
//!         schema.equality_matching_rule_of(badge).map(|rule| rule.oid()),
//!         Some("2.5.13.2")
//!     );
//!     Ok(())
//! }
//! ```

use log::{debug, info, warn};
use std::sync::Arc;

use crate::error::{DecodeResult, ElementKind, SchemaError, SchemaResult};
use crate::matching::EnumOrderingMatchingRule;
use crate::schema::Schema;
use crate::schema::elements::{
    AttributeType, DitContentRule, DitStructureRule, MatchingRule, MatchingRuleUse, NameForm,
    ObjectClass, Syntax, SyntaxImplementation,
};
use crate::schema::oids::OMR_GENERIC_ENUM;
use crate::schema::options::SchemaOptions;
use crate::schema::parser;
use crate::schema::registry::{Catalog, ElementTable};
use crate::schema::source::{SchemaEntrySource, SubschemaEntry};
use crate::schema::types::SchemaElement;
use crate::schema::validation;

/// Builder for [`Schema`] values.
#[derive(Debug, Clone)]
pub struct SchemaBuilder {
    name: String,
    catalog: Catalog,
    options: SchemaOptions,
    fallback: Option<Schema>,
    warnings: Vec<String>,
}

fn add_element<E: SchemaElement>(
    table: &mut ElementTable<E>,
    element: E,
    overwrite: bool,
) -> SchemaResult<()> {
    let identifier = element.identifier().into_owned();
    if let Some(existing) = table.get(&identifier) {
        if !overwrite {
            return Err(SchemaError::Conflict {
                kind: table.kind(),
                identifier,
                new_name: element.name_or_oid().into_owned(),
                existing_name: existing.name_or_oid().into_owned(),
            });
        }
        debug!("Replacing {} '{}'", table.kind(), existing.name_or_oid());
    } else {
        debug!("Adding {} '{}'", table.kind(), element.name_or_oid());
    }
    table.insert(element);
    Ok(())
}

fn remove_element<E: SchemaElement>(table: &mut ElementTable<E>, name_or_oid: &str) -> Option<E> {
    let identifier = table.lookup_identifier(name_or_oid).ok()?.to_string();
    let removed = table.remove(&identifier)?;
    debug!("Removed {} '{}'", table.kind(), removed.name_or_oid());
    Some(removed)
}

macro_rules! element_additions {
    ($field:ident, $element:ty, $add:ident, $add_definition:ident, $parse:path, $remove:ident) => {
        /// Add an element; with `overwrite` an element with the same
        /// identifier is replaced, otherwise it is a conflict.
        pub fn $add(&mut self, element: $element, overwrite: bool) -> SchemaResult<&mut Self> {
            add_element(&mut self.catalog.$field, element, overwrite)?;
            Ok(self)
        }

        /// Parse an RFC 4512 definition and add the result.
        pub fn $add_definition(&mut self, definition: &str, overwrite: bool) -> SchemaResult<&mut Self> {
            let element = $parse(definition)?;
            self.$add(element, overwrite)
        }

        /// Remove by identifier or unique name. Returns whether anything was removed.
        pub fn $remove(&mut self, name_or_oid: &str) -> bool {
            remove_element(&mut self.catalog.$field, name_or_oid).is_some()
        }
    };
}

impl SchemaBuilder {
    /// Create an empty builder that borrows missing implementations from the
    /// core schema.
    pub fn new(name: impl Into<String>) -> Self {
        Self::bare(name).with_fallback_schema(Schema::core_schema().clone())
    }

    /// An empty builder with no fallback schema.
    pub(crate) fn bare(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            catalog: Catalog::default(),
            options: SchemaOptions::default(),
            fallback: None,
            warnings: Vec::new(),
        }
    }

    /// Seed a builder with a copy of every element of `schema`.
    ///
    /// The copy is independent: changes to the builder never affect `schema`.
    /// The builder keeps the fallback `schema` was built with, so a schema
    /// built without one yields a builder without one. Builders seeded from
    /// the core schema fall back on the core schema itself.
    pub fn from_schema(schema: &Schema) -> Self {
        let fallback = match schema.fallback_schema() {
            Some(fallback) => Some(fallback.clone()),
            None if schema.is_core_schema() => Some(schema.clone()),
            None => None,
        };
        Self {
            name: schema.name().to_string(),
            catalog: schema.catalog().clone(),
            options: schema.options().clone(),
            fallback,
            warnings: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_options(mut self, options: SchemaOptions) -> Self {
        self.options = options;
        self
    }

    /// Use `fallback` for syntaxes and matching rules declared without an
    /// implementation.
    pub fn with_fallback_schema(mut self, fallback: Schema) -> Self {
        self.fallback = Some(fallback);
        self
    }

    pub fn without_fallback_schema(mut self) -> Self {
        self.fallback = None;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn options(&self) -> &SchemaOptions {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut SchemaOptions {
        &mut self.options
    }

    /// Warnings collected while adding elements.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Add a syntax.
    ///
    /// An `X-ENUM` syntax brings its ordering rule along: a matching rule with
    /// OID `1.3.6.1.4.1.26027.1.4.3.<syntax OID>` that ranks values by their
    /// position in the enumeration.
    pub fn add_syntax(&mut self, syntax: Syntax, overwrite: bool) -> SchemaResult<&mut Self> {
        let ordering_rule = match syntax.implementation() {
            SyntaxImplementation::Enumeration(enumeration) => Some(
                MatchingRule::new(enumeration.ordering_rule_oid(), syntax.oid())
                    .with_name(enumeration.ordering_rule_name())
                    .with_implementation(Arc::new(EnumOrderingMatchingRule::new(Arc::clone(
                        enumeration,
                    )))),
            ),
            _ => None,
        };
        add_element(&mut self.catalog.syntaxes, syntax, overwrite)?;
        if let Some(rule) = ordering_rule {
            add_element(&mut self.catalog.matching_rules, rule, true)?;
        }
        Ok(self)
    }

    pub fn add_syntax_definition(&mut self, definition: &str, overwrite: bool) -> SchemaResult<&mut Self> {
        let syntax = parser::parse_syntax(definition)?;
        self.add_syntax(syntax, overwrite)
    }

    /// Remove a syntax, and the ordering rule of an `X-ENUM` syntax.
    pub fn remove_syntax(&mut self, name_or_oid: &str) -> bool {
        let Some(removed) = remove_element(&mut self.catalog.syntaxes, name_or_oid) else {
            return false;
        };
        if let SyntaxImplementation::Enumeration(enumeration) = removed.implementation() {
            self.catalog
                .matching_rules
                .remove(enumeration.ordering_rule_oid());
        }
        true
    }

    element_additions!(
        matching_rules,
        MatchingRule,
        add_matching_rule,
        add_matching_rule_definition,
        parser::parse_matching_rule,
        remove_matching_rule
    );
    element_additions!(
        matching_rule_uses,
        MatchingRuleUse,
        add_matching_rule_use,
        add_matching_rule_use_definition,
        parser::parse_matching_rule_use,
        remove_matching_rule_use
    );
    element_additions!(
        attribute_types,
        AttributeType,
        add_attribute_type,
        add_attribute_type_definition,
        parser::parse_attribute_type,
        remove_attribute_type
    );
    element_additions!(
        object_classes,
        ObjectClass,
        add_object_class,
        add_object_class_definition,
        parser::parse_object_class,
        remove_object_class
    );
    element_additions!(
        name_forms,
        NameForm,
        add_name_form,
        add_name_form_definition,
        parser::parse_name_form,
        remove_name_form
    );
    /// Add a content rule; with `overwrite` a rule for the same structural
    /// class is replaced, otherwise it is a conflict.
    ///
    /// Rules are keyed by structural class, so `person` and `2.5.6.6` name
    /// the same rule once the class is known to the builder.
    pub fn add_dit_content_rule(
        &mut self,
        rule: DitContentRule,
        overwrite: bool,
    ) -> SchemaResult<&mut Self> {
        let class = self.structural_class_key(rule.structural_class());
        let alias = self
            .catalog
            .dit_content_rules
            .values()
            .find(|other| {
                other.structural_class() != rule.structural_class()
                    && self.structural_class_key(other.structural_class()) == class
            })
            .map(|other| (other.structural_class().to_string(), other.name_or_oid().into_owned()));
        if let Some((identifier, existing_name)) = alias {
            if !overwrite {
                return Err(SchemaError::Conflict {
                    kind: ElementKind::DitContentRule,
                    identifier: rule.structural_class().to_string(),
                    new_name: rule.name_or_oid().into_owned(),
                    existing_name,
                });
            }
            debug!("Replacing {} '{}'", ElementKind::DitContentRule, existing_name);
            self.catalog.dit_content_rules.remove(&identifier);
        }
        add_element(&mut self.catalog.dit_content_rules, rule, overwrite)?;
        Ok(self)
    }

    /// Parse an RFC 4512 definition and add the result.
    pub fn add_dit_content_rule_definition(
        &mut self,
        definition: &str,
        overwrite: bool,
    ) -> SchemaResult<&mut Self> {
        let rule = parser::parse_dit_content_rule(definition)?;
        self.add_dit_content_rule(rule, overwrite)
    }

    /// Remove by structural class (any of its names or its OID) or unique
    /// rule name. Returns whether anything was removed.
    pub fn remove_dit_content_rule(&mut self, name_or_oid: &str) -> bool {
        if remove_element(&mut self.catalog.dit_content_rules, name_or_oid).is_some() {
            return true;
        }
        let class = self.structural_class_key(name_or_oid);
        let identifier = self
            .catalog
            .dit_content_rules
            .values()
            .find(|rule| self.structural_class_key(rule.structural_class()) == class)
            .map(|rule| rule.structural_class().to_string());
        match identifier {
            Some(identifier) => {
                debug!("Removed {} '{}'", ElementKind::DitContentRule, identifier);
                self.catalog.dit_content_rules.remove(&identifier).is_some()
            }
            None => false,
        }
    }

    /// The OID of a structural class reference, or the lowercased reference
    /// when the class is not (yet) known.
    fn structural_class_key(&self, class: &str) -> String {
        self.catalog
            .object_classes
            .lookup_identifier(class)
            .map(str::to_string)
            .unwrap_or_else(|_| class.to_ascii_lowercase())
    }

    pub fn add_dit_structure_rule(
        &mut self,
        rule: DitStructureRule,
        overwrite: bool,
    ) -> SchemaResult<&mut Self> {
        add_element(&mut self.catalog.dit_structure_rules, rule, overwrite)?;
        Ok(self)
    }

    pub fn add_dit_structure_rule_definition(
        &mut self,
        definition: &str,
        overwrite: bool,
    ) -> SchemaResult<&mut Self> {
        let rule = parser::parse_dit_structure_rule(definition)?;
        self.add_dit_structure_rule(rule, overwrite)
    }

    pub fn remove_dit_structure_rule(&mut self, rule_id: u32) -> bool {
        remove_element(&mut self.catalog.dit_structure_rules, &rule_id.to_string()).is_some()
    }

    /// Copy every element of `schema` into this builder.
    pub fn add_schema(&mut self, schema: &Schema, overwrite: bool) -> SchemaResult<&mut Self> {
        let catalog = schema.catalog();
        for syntax in catalog.syntaxes.values() {
            self.add_syntax(syntax.clone(), overwrite)?;
        }
        for rule in catalog.matching_rules.values() {
            // Ordering rules of enumeration syntaxes arrive with the syntax
            if rule.oid().starts_with(OMR_GENERIC_ENUM) && self.catalog.matching_rules.contains(rule.oid()) {
                continue;
            }
            self.add_matching_rule(rule.clone(), overwrite)?;
        }
        for rule_use in catalog.matching_rule_uses.values() {
            self.add_matching_rule_use(rule_use.clone(), overwrite)?;
        }
        for attribute_type in catalog.attribute_types.values() {
            self.add_attribute_type(attribute_type.clone(), overwrite)?;
        }
        for object_class in catalog.object_classes.values() {
            self.add_object_class(object_class.clone(), overwrite)?;
        }
        for name_form in catalog.name_forms.values() {
            self.add_name_form(name_form.clone(), overwrite)?;
        }
        for rule in catalog.dit_content_rules.values() {
            self.add_dit_content_rule(rule.clone(), overwrite)?;
        }
        for rule in catalog.dit_structure_rules.values() {
            self.add_dit_structure_rule(rule.clone(), overwrite)?;
        }
        Ok(self)
    }

    /// Parse every definition held by a subschema entry.
    ///
    /// Definitions that fail to decode are skipped and recorded as warnings;
    /// conflicts still fail the call.
    pub fn add_subschema_entry(
        &mut self,
        entry: &SubschemaEntry,
        overwrite: bool,
    ) -> SchemaResult<&mut Self> {
        self.add_entry_values(
            entry,
            SubschemaEntry::LDAP_SYNTAXES,
            overwrite,
            parser::parse_syntax,
            Self::add_syntax,
        )?;
        self.add_entry_values(
            entry,
            SubschemaEntry::MATCHING_RULES,
            overwrite,
            parser::parse_matching_rule,
            Self::add_matching_rule,
        )?;
        self.add_entry_values(
            entry,
            SubschemaEntry::MATCHING_RULE_USE,
            overwrite,
            parser::parse_matching_rule_use,
            Self::add_matching_rule_use,
        )?;
        self.add_entry_values(
            entry,
            SubschemaEntry::ATTRIBUTE_TYPES,
            overwrite,
            parser::parse_attribute_type,
            Self::add_attribute_type,
        )?;
        self.add_entry_values(
            entry,
            SubschemaEntry::OBJECT_CLASSES,
            overwrite,
            parser::parse_object_class,
            Self::add_object_class,
        )?;
        self.add_entry_values(
            entry,
            SubschemaEntry::NAME_FORMS,
            overwrite,
            parser::parse_name_form,
            Self::add_name_form,
        )?;
        self.add_entry_values(
            entry,
            SubschemaEntry::DIT_CONTENT_RULES,
            overwrite,
            parser::parse_dit_content_rule,
            Self::add_dit_content_rule,
        )?;
        self.add_entry_values(
            entry,
            SubschemaEntry::DIT_STRUCTURE_RULES,
            overwrite,
            parser::parse_dit_structure_rule,
            Self::add_dit_structure_rule,
        )?;
        Ok(self)
    }

    fn add_entry_values<E>(
        &mut self,
        entry: &SubschemaEntry,
        attribute: &str,
        overwrite: bool,
        parse: fn(&str) -> DecodeResult<E>,
        add: fn(&mut Self, E, bool) -> SchemaResult<&mut Self>,
    ) -> SchemaResult<()> {
        for definition in entry.values(attribute) {
            match parse(definition) {
                Ok(element) => {
                    add(self, element, overwrite)?;
                }
                Err(error) => {
                    let message = format!("Skipping {attribute} value '{definition}': {error}");
                    warn!("{message}");
                    self.warnings.push(message);
                }
            }
        }
        Ok(())
    }

    /// Read the subschema entry `dn` from `source` and add its definitions.
    pub async fn add_schema_from_source<S: SchemaEntrySource>(
        &mut self,
        source: &S,
        dn: &str,
        overwrite: bool,
    ) -> SchemaResult<&mut Self> {
        debug!("Reading subschema entry '{dn}'");
        let entry = source
            .read_subschema_entry(dn)
            .await
            .map_err(SchemaError::source_error)?;
        self.add_subschema_entry(&entry, overwrite)
    }

    /// Resolve the working copy into an immutable schema.
    ///
    /// The builder is left as it was, whether or not resolution succeeds.
    pub fn to_schema(&self) -> SchemaResult<Schema> {
        self.options.validate()?;
        let mut catalog = self.catalog.clone();
        let resolution = validation::resolve(&mut catalog, &self.options, self.fallback.as_ref())?;

        let mut warnings = self.warnings.clone();
        warnings.extend(resolution.warnings);
        info!(
            "Built schema '{}' with {} elements and {} warnings",
            self.name,
            catalog.element_count(),
            warnings.len()
        );
        Ok(Schema::from_parts(
            self.name.clone(),
            self.options.clone(),
            catalog,
            resolution.indexes,
            warnings,
            self.fallback.clone(),
        ))
    }
}
