//! The immutable schema and the catalog it is built from.
//!
//! A [`Schema`] is a cheaply cloneable handle over a fully resolved catalog.
//! Every element kind is stored in an element table: a map from primary
//! identifier to element plus a multi-valued index from lower-cased name to
//! identifiers. Names may be shared by several elements; lookups by such a
//! name fail as ambiguous rather than picking one.

use once_cell::sync::Lazy;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use crate::error::{ElementKind, SchemaError, SchemaResult, ValidationError, ValidationResult};
use crate::schema::elements::{
    AttributeType, DitContentRule, DitStructureRule, MatchingRule, MatchingRuleUse, NameForm,
    ObjectClass, Syntax,
};
use crate::schema::options::SchemaOptions;
use crate::schema::source::SubschemaEntry;
use crate::schema::types::SchemaElement;

/// Elements of one kind, indexed by identifier and by name.
#[derive(Debug, Clone)]
pub(crate) struct ElementTable<E> {
    kind: ElementKind,
    elements: BTreeMap<String, E>,
    names: HashMap<String, Vec<String>>,
}

impl<E: SchemaElement> ElementTable<E> {
    pub(crate) fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            elements: BTreeMap::new(),
            names: HashMap::new(),
        }
    }

    pub(crate) fn kind(&self) -> ElementKind {
        self.kind
    }

    pub(crate) fn len(&self) -> usize {
        self.elements.len()
    }

    pub(crate) fn get(&self, identifier: &str) -> Option<&E> {
        self.elements.get(identifier)
    }

    pub(crate) fn get_mut(&mut self, identifier: &str) -> Option<&mut E> {
        self.elements.get_mut(identifier)
    }

    pub(crate) fn contains(&self, identifier: &str) -> bool {
        self.elements.contains_key(identifier)
    }

    pub(crate) fn values(&self) -> impl Iterator<Item = &E> {
        self.elements.values()
    }

    pub(crate) fn values_mut(&mut self) -> impl Iterator<Item = &mut E> {
        self.elements.values_mut()
    }

    pub(crate) fn identifiers(&self) -> Vec<String> {
        self.elements.keys().cloned().collect()
    }

    /// Store `element`, replacing any element with the same identifier.
    pub(crate) fn insert(&mut self, element: E) -> Option<E> {
        let identifier = element.identifier().into_owned();
        let replaced = self.remove(&identifier);
        for name in element.info().lowercase_names() {
            let bucket = self.names.entry(name).or_default();
            if !bucket.contains(&identifier) {
                bucket.push(identifier.clone());
            }
        }
        self.elements.insert(identifier, element);
        replaced
    }

    /// Remove the element with this identifier together with its name entries.
    pub(crate) fn remove(&mut self, identifier: &str) -> Option<E> {
        let element = self.elements.remove(identifier)?;
        for name in element.info().lowercase_names() {
            if let Some(bucket) = self.names.get_mut(&name) {
                bucket.retain(|id| id != identifier);
                if bucket.is_empty() {
                    self.names.remove(&name);
                }
            }
        }
        Some(element)
    }

    /// Find the identifier for `name_or_oid`: identifier first, then names.
    pub(crate) fn lookup_identifier(&self, name_or_oid: &str) -> SchemaResult<&str> {
        if let Some((identifier, _)) = self.elements.get_key_value(name_or_oid) {
            return Ok(identifier.as_str());
        }
        match self.names.get(&name_or_oid.to_ascii_lowercase()).map(Vec::as_slice) {
            Some([identifier]) => Ok(identifier.as_str()),
            Some(candidates) if !candidates.is_empty() => Err(SchemaError::Ambiguous {
                kind: self.kind,
                identifier: name_or_oid.to_string(),
                candidates: candidates.to_vec(),
            }),
            _ => Err(SchemaError::not_found(self.kind, name_or_oid)),
        }
    }

    pub(crate) fn lookup(&self, name_or_oid: &str) -> SchemaResult<&E> {
        let identifier = self.lookup_identifier(name_or_oid)?;
        self.elements
            .get(identifier)
            .ok_or_else(|| SchemaError::not_found(self.kind, name_or_oid))
    }

    pub(crate) fn with_name(&self, name: &str) -> Vec<&E> {
        self.names
            .get(&name.to_ascii_lowercase())
            .into_iter()
            .flatten()
            .filter_map(|identifier| self.elements.get(identifier))
            .collect()
    }
}

/// One table per element kind.
#[derive(Debug, Clone)]
pub(crate) struct Catalog {
    pub(crate) syntaxes: ElementTable<Syntax>,
    pub(crate) matching_rules: ElementTable<MatchingRule>,
    pub(crate) matching_rule_uses: ElementTable<MatchingRuleUse>,
    pub(crate) attribute_types: ElementTable<AttributeType>,
    pub(crate) object_classes: ElementTable<ObjectClass>,
    pub(crate) name_forms: ElementTable<NameForm>,
    pub(crate) dit_content_rules: ElementTable<DitContentRule>,
    pub(crate) dit_structure_rules: ElementTable<DitStructureRule>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            syntaxes: ElementTable::new(ElementKind::Syntax),
            matching_rules: ElementTable::new(ElementKind::MatchingRule),
            matching_rule_uses: ElementTable::new(ElementKind::MatchingRuleUse),
            attribute_types: ElementTable::new(ElementKind::AttributeType),
            object_classes: ElementTable::new(ElementKind::ObjectClass),
            name_forms: ElementTable::new(ElementKind::NameForm),
            dit_content_rules: ElementTable::new(ElementKind::DitContentRule),
            dit_structure_rules: ElementTable::new(ElementKind::DitStructureRule),
        }
    }
}

impl Catalog {
    pub(crate) fn element_count(&self) -> usize {
        self.syntaxes.len()
            + self.matching_rules.len()
            + self.matching_rule_uses.len()
            + self.attribute_types.len()
            + self.object_classes.len()
            + self.name_forms.len()
            + self.dit_content_rules.len()
            + self.dit_structure_rules.len()
    }
}

/// Side tables filled in by the resolution pass.
#[derive(Debug, Clone, Default)]
pub(crate) struct ReverseIndexes {
    /// Structural class OID to the name forms naming it
    pub(crate) name_forms_by_class: HashMap<String, Vec<String>>,
    /// Name form OID to the structure rules using it
    pub(crate) structure_rules_by_name_form: HashMap<String, Vec<String>>,
    /// Structural class OID to the identifier of its content rule
    pub(crate) content_rule_by_class: HashMap<String, String>,
}

#[derive(Debug)]
struct SchemaInner {
    name: String,
    options: SchemaOptions,
    catalog: Catalog,
    indexes: ReverseIndexes,
    warnings: Vec<String>,
    fallback: Option<Schema>,
}

/// An immutable, fully resolved LDAP schema.
///
/// Cloning is cheap and clones share the same catalog, so a schema can be
/// handed to any number of threads.
///
/// # Examples
///
/// ```rust
/// use ldap_schema::schema::{Schema, SchemaElement};
///
/// let schema = Schema::core_schema();
/// let cn = schema.get_attribute_type("CN").unwrap();
/// assert_eq!(cn.oid(), "2.5.4.3");
///
/// let equality = schema.equality_matching_rule_of(cn).unwrap();
/// assert_eq!(equality.name(), Some("caseIgnoreMatch"));
/// ```
#[derive(Debug, Clone)]
pub struct Schema {
    inner: Arc<SchemaInner>,
}

static CORE_SCHEMA: Lazy<Schema> = Lazy::new(|| {
    crate::schema::core_schema::build_core_schema().expect("core schema definitions are consistent")
});

macro_rules! element_lookups {
    ($field:ident, $element:ty, $has:ident, $get:ident, $all:ident, $with_name:ident) => {
        pub fn $has(&self, name_or_oid: &str) -> bool {
            self.inner.catalog.$field.lookup(name_or_oid).is_ok()
        }

        /// Look up by identifier, then by unique name.
        pub fn $get(&self, name_or_oid: &str) -> SchemaResult<&$element> {
            self.inner.catalog.$field.lookup(name_or_oid)
        }

        pub fn $all(&self) -> impl Iterator<Item = &$element> {
            self.inner.catalog.$field.values()
        }

        /// Every element carrying `name`, ignoring case.
        pub fn $with_name(&self, name: &str) -> Vec<&$element> {
            self.inner.catalog.$field.with_name(name)
        }
    };
}

impl Schema {
    pub(crate) fn from_parts(
        name: String,
        options: SchemaOptions,
        catalog: Catalog,
        indexes: ReverseIndexes,
        warnings: Vec<String>,
        fallback: Option<Schema>,
    ) -> Self {
        Self {
            inner: Arc::new(SchemaInner {
                name,
                options,
                catalog,
                indexes,
                warnings,
                fallback,
            }),
        }
    }

    /// The process-wide core schema: RFC 4512, 4517, 4519 and 4530 elements.
    ///
    /// Built on first use and shared afterwards. Builders use it as their
    /// default fallback for syntax and matching rule implementations.
    pub fn core_schema() -> &'static Schema {
        &CORE_SCHEMA
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    pub fn options(&self) -> &SchemaOptions {
        &self.inner.options
    }

    /// The schema that supplied missing implementations when this one was built.
    pub fn fallback_schema(&self) -> Option<&Schema> {
        self.inner.fallback.as_ref()
    }

    /// Whether this is the process-wide core schema, or a clone of it.
    pub fn is_core_schema(&self) -> bool {
        Arc::ptr_eq(&self.inner, &CORE_SCHEMA.inner)
    }

    /// Degraded-but-accepted situations met while the schema was built.
    pub fn warnings(&self) -> &[String] {
        &self.inner.warnings
    }

    pub(crate) fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    element_lookups!(syntaxes, Syntax, has_syntax, get_syntax, syntaxes, syntaxes_with_name);
    element_lookups!(
        matching_rules,
        MatchingRule,
        has_matching_rule,
        get_matching_rule,
        matching_rules,
        matching_rules_with_name
    );
    element_lookups!(
        matching_rule_uses,
        MatchingRuleUse,
        has_matching_rule_use,
        get_matching_rule_use,
        matching_rule_uses,
        matching_rule_uses_with_name
    );
    element_lookups!(
        attribute_types,
        AttributeType,
        has_attribute_type,
        get_attribute_type,
        attribute_types,
        attribute_types_with_name
    );
    element_lookups!(
        object_classes,
        ObjectClass,
        has_object_class,
        get_object_class,
        object_classes,
        object_classes_with_name
    );
    element_lookups!(name_forms, NameForm, has_name_form, get_name_form, name_forms, name_forms_with_name);
    element_lookups!(
        dit_structure_rules,
        DitStructureRule,
        has_dit_structure_rule,
        get_dit_structure_rule,
        dit_structure_rules,
        dit_structure_rules_with_name
    );

    pub fn has_dit_content_rule(&self, name_or_oid: &str) -> bool {
        self.get_dit_content_rule(name_or_oid).is_ok()
    }

    /// Look up by structural class (any of its names or its OID), then by
    /// unique rule name.
    pub fn get_dit_content_rule(&self, name_or_oid: &str) -> SchemaResult<&DitContentRule> {
        let by_class = self
            .get_object_class(name_or_oid)
            .ok()
            .and_then(|class| self.dit_content_rule_for(class));
        match by_class {
            Some(rule) => Ok(rule),
            None => self.inner.catalog.dit_content_rules.lookup(name_or_oid),
        }
    }

    pub fn dit_content_rules(&self) -> impl Iterator<Item = &DitContentRule> {
        self.inner.catalog.dit_content_rules.values()
    }

    pub fn dit_content_rules_with_name(&self, name: &str) -> Vec<&DitContentRule> {
        self.inner.catalog.dit_content_rules.with_name(name)
    }

    pub fn get_dit_structure_rule_by_id(&self, rule_id: u32) -> SchemaResult<&DitStructureRule> {
        let identifier = rule_id.to_string();
        self.inner
            .catalog
            .dit_structure_rules
            .get(&identifier)
            .ok_or_else(|| SchemaError::not_found(ElementKind::DitStructureRule, identifier))
    }

    /// The numeric OID of the single element carrying `name`.
    ///
    /// Searches attribute types, object classes, matching rules, name forms
    /// and syntaxes. Returns `None` when the name is unknown or is carried by
    /// more than one element.
    pub fn oid_for_name(&self, name: &str) -> Option<String> {
        let catalog = &self.inner.catalog;
        let mut found: Vec<String> = Vec::new();
        let mut collect = |oids: Vec<String>| {
            for oid in oids {
                if !found.contains(&oid) {
                    found.push(oid);
                }
            }
        };
        collect(ids(catalog.attribute_types.with_name(name)));
        collect(ids(catalog.object_classes.with_name(name)));
        collect(ids(catalog.matching_rules.with_name(name)));
        collect(ids(catalog.name_forms.with_name(name)));
        collect(ids(catalog.syntaxes.with_name(name)));
        match found.as_slice() {
            [oid] => Some(oid.clone()),
            _ => None,
        }
    }

    /// The syntax in effect for `attribute_type`.
    pub fn syntax_of(&self, attribute_type: &AttributeType) -> Option<&Syntax> {
        let resolved = attribute_type.resolved()?;
        self.inner.catalog.syntaxes.get(&resolved.syntax)
    }

    pub fn equality_matching_rule_of(&self, attribute_type: &AttributeType) -> Option<&MatchingRule> {
        let oid = attribute_type.resolved()?.equality_matching_rule.as_deref()?;
        self.inner.catalog.matching_rules.get(oid)
    }

    pub fn ordering_matching_rule_of(&self, attribute_type: &AttributeType) -> Option<&MatchingRule> {
        let oid = attribute_type.resolved()?.ordering_matching_rule.as_deref()?;
        self.inner.catalog.matching_rules.get(oid)
    }

    pub fn substring_matching_rule_of(&self, attribute_type: &AttributeType) -> Option<&MatchingRule> {
        let oid = attribute_type.resolved()?.substring_matching_rule.as_deref()?;
        self.inner.catalog.matching_rules.get(oid)
    }

    pub fn approximate_matching_rule_of(
        &self,
        attribute_type: &AttributeType,
    ) -> Option<&MatchingRule> {
        let oid = attribute_type.resolved()?.approximate_matching_rule.as_deref()?;
        self.inner.catalog.matching_rules.get(oid)
    }

    /// Name forms whose structural class is `object_class`.
    pub fn name_forms_for(&self, object_class: &ObjectClass) -> Vec<&NameForm> {
        let catalog = &self.inner.catalog;
        self.inner
            .indexes
            .name_forms_by_class
            .get(object_class.oid())
            .into_iter()
            .flatten()
            .filter_map(|oid| catalog.name_forms.get(oid))
            .collect()
    }

    /// Structure rules that use `name_form`.
    pub fn dit_structure_rules_for(&self, name_form: &NameForm) -> Vec<&DitStructureRule> {
        let catalog = &self.inner.catalog;
        self.inner
            .indexes
            .structure_rules_by_name_form
            .get(name_form.oid())
            .into_iter()
            .flatten()
            .filter_map(|id| catalog.dit_structure_rules.get(id))
            .collect()
    }

    /// The content rule governing entries of structural class `object_class`.
    pub fn dit_content_rule_for(&self, object_class: &ObjectClass) -> Option<&DitContentRule> {
        let identifier = self
            .inner
            .indexes
            .content_rule_by_class
            .get(object_class.oid())?;
        self.inner.catalog.dit_content_rules.get(identifier)
    }

    /// The use restriction of `matching_rule`, if one is defined.
    pub fn matching_rule_use_for(&self, matching_rule: &MatchingRule) -> Option<&MatchingRuleUse> {
        self.inner
            .catalog
            .matching_rule_uses
            .get(matching_rule.oid())
    }

    /// Check `value` against the syntax in effect for `attribute_type`.
    pub fn value_is_acceptable(&self, attribute_type: &AttributeType, value: &[u8]) -> ValidationResult<()> {
        match self.syntax_of(attribute_type) {
            Some(syntax) => syntax.value_is_acceptable(self, value),
            None => Err(ValidationError::invalid(
                attribute_type.name_or_oid(),
                String::from_utf8_lossy(value),
                "the attribute type has no syntax in this schema",
            )),
        }
    }

    /// Serialise every element as the values of a subschema entry.
    pub fn to_subschema_entry(&self) -> SubschemaEntry {
        let catalog = &self.inner.catalog;
        let mut entry = SubschemaEntry::new();
        fn add_all<'a, E: SchemaElement + 'a>(
            entry: &mut SubschemaEntry,
            attribute: &str,
            elements: impl Iterator<Item = &'a E>,
        ) {
            for element in elements {
                entry.add_value(attribute, element.definition().into_owned());
            }
        }
        add_all(&mut entry, SubschemaEntry::LDAP_SYNTAXES, catalog.syntaxes.values());
        add_all(&mut entry, SubschemaEntry::MATCHING_RULES, catalog.matching_rules.values());
        add_all(&mut entry, SubschemaEntry::ATTRIBUTE_TYPES, catalog.attribute_types.values());
        add_all(&mut entry, SubschemaEntry::OBJECT_CLASSES, catalog.object_classes.values());
        add_all(&mut entry, SubschemaEntry::MATCHING_RULE_USE, catalog.matching_rule_uses.values());
        add_all(&mut entry, SubschemaEntry::NAME_FORMS, catalog.name_forms.values());
        add_all(&mut entry, SubschemaEntry::DIT_CONTENT_RULES, catalog.dit_content_rules.values());
        add_all(
            &mut entry,
            SubschemaEntry::DIT_STRUCTURE_RULES,
            catalog.dit_structure_rules.values(),
        );
        entry
    }
}

fn ids<E: SchemaElement>(elements: Vec<&E>) -> Vec<String> {
    elements
        .into_iter()
        .map(|element| element.identifier().into_owned())
        .collect()
}
