//! The resolution pass that turns a catalog of declared elements into a
//! consistent schema.
//!
//! Elements are resolved kind by kind: syntaxes, matching rules, attribute
//! types, object classes, matching rule uses, name forms, DIT content rules
//! and DIT structure rules. Each phase writes its results back into the
//! catalog before the next phase starts, so later phases can rely on the
//! resolved state of earlier ones. The first inconsistency aborts the pass.

use log::{debug, warn};
use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{ElementKind, SchemaError, SchemaResult};
use crate::matching::MatchingRuleImpl;
use crate::schema::Schema;
use crate::schema::elements::{
    ResolvedAttributeType, ResolvedDitContentRule, ResolvedMatchingRule, ResolvedNameForm,
    ResolvedObjectClass, Syntax, SyntaxImplementation,
};
use crate::schema::oids::OC_TOP;
use crate::schema::options::SchemaOptions;
use crate::schema::registry::{Catalog, ElementTable, ReverseIndexes};
use crate::schema::types::{AttributeUsage, ObjectClassKind, SchemaElement};
use crate::syntax::{SubstitutionSyntaxImpl, SyntaxImpl};

/// What the pass produces besides the resolved catalog.
#[derive(Debug, Default)]
pub(crate) struct Resolution {
    pub(crate) indexes: ReverseIndexes,
    pub(crate) warnings: Vec<String>,
}

/// Resolve every element of `catalog` in place.
///
/// `fallback` supplies implementations for syntaxes and matching rules the
/// catalog declares without one.
pub(crate) fn resolve(
    catalog: &mut Catalog,
    options: &SchemaOptions,
    fallback: Option<&Schema>,
) -> SchemaResult<Resolution> {
    let mut resolver = Resolver {
        options,
        fallback,
        resolution: Resolution::default(),
    };
    resolver.resolve_syntaxes(catalog)?;
    resolver.resolve_matching_rules(catalog)?;
    resolver.resolve_attribute_types(catalog)?;
    resolver.resolve_object_classes(catalog)?;
    resolver.resolve_matching_rule_uses(catalog)?;
    resolver.resolve_name_forms(catalog)?;
    resolver.resolve_dit_content_rules(catalog)?;
    resolver.resolve_dit_structure_rules(catalog)?;
    Ok(resolver.resolution)
}

/// Resolve `reference` to the identifier of an element in `table`.
///
/// A missing target is reported against the referring element.
fn reference<E: SchemaElement>(
    table: &ElementTable<E>,
    kind: ElementKind,
    element: &str,
    reference: &str,
) -> SchemaResult<String> {
    table
        .lookup_identifier(reference)
        .map(str::to_string)
        .map_err(|error| {
            if error.is_not_found() {
                SchemaError::unresolved(kind, element, table.kind(), reference)
            } else {
                error
            }
        })
}

fn references<E: SchemaElement>(
    table: &ElementTable<E>,
    kind: ElementKind,
    element: &str,
    values: &[String],
) -> SchemaResult<Vec<String>> {
    values
        .iter()
        .map(|value| reference(table, kind, element, value))
        .collect()
}

struct Resolver<'a> {
    options: &'a SchemaOptions,
    fallback: Option<&'a Schema>,
    resolution: Resolution,
}

impl Resolver<'_> {
    fn warn(&mut self, message: String) {
        warn!("{message}");
        self.resolution.warnings.push(message);
    }

    fn fallback_syntax(&self, oid: &str) -> Option<Arc<dyn SyntaxImpl>> {
        self.fallback?
            .get_syntax(oid)
            .ok()?
            .resolved_implementation()
            .cloned()
    }

    fn fallback_matching_rule(&self, oid: &str) -> Option<Arc<dyn MatchingRuleImpl>> {
        let rule = self.fallback?.get_matching_rule(oid).ok()?;
        rule.resolved()
            .map(|resolved| Arc::clone(&resolved.implementation))
    }

    fn resolve_syntaxes(&mut self, catalog: &mut Catalog) -> SchemaResult<()> {
        debug!("Resolving {} syntaxes", catalog.syntaxes.len());
        let mut done = HashMap::new();
        for oid in catalog.syntaxes.identifiers() {
            let mut chain = Vec::new();
            self.syntax_implementation(&catalog.syntaxes, &oid, &mut chain, &mut done)?;
        }
        for syntax in catalog.syntaxes.values_mut() {
            match done.remove(syntax.oid()) {
                Some(implementation) => syntax.set_resolved(implementation),
                None => syntax.clear_resolved(),
            }
        }
        Ok(())
    }

    fn syntax_implementation(
        &mut self,
        syntaxes: &ElementTable<Syntax>,
        oid: &str,
        chain: &mut Vec<String>,
        done: &mut HashMap<String, Arc<dyn SyntaxImpl>>,
    ) -> SchemaResult<Arc<dyn SyntaxImpl>> {
        if let Some(implementation) = done.get(oid) {
            return Ok(Arc::clone(implementation));
        }
        let syntax = syntaxes
            .get(oid)
            .ok_or_else(|| SchemaError::not_found(ElementKind::Syntax, oid))?;
        if let Some(first) = chain.first() {
            if chain.iter().any(|link| link == oid) {
                return Err(SchemaError::CyclicSubstitution {
                    syntax: first.clone(),
                    target: oid.to_string(),
                });
            }
        }
        chain.push(oid.to_string());

        let implementation: Arc<dyn SyntaxImpl> = match syntax.implementation() {
            SyntaxImplementation::Provided(implementation) => Arc::clone(implementation),
            SyntaxImplementation::Pattern(pattern) => pattern.clone(),
            SyntaxImplementation::Enumeration(enumeration) => enumeration.clone(),
            SyntaxImplementation::Substitution(target) => {
                let (target_oid, target_implementation) = match syntaxes.lookup_identifier(target) {
                    Ok(target_oid) => {
                        let target_oid = target_oid.to_string();
                        let implementation =
                            self.syntax_implementation(syntaxes, &target_oid, chain, done)?;
                        (target_oid, implementation)
                    }
                    Err(error) if error.is_not_found() => {
                        let implementation = self.fallback_syntax(target).ok_or_else(|| {
                            SchemaError::unresolved(
                                ElementKind::Syntax,
                                syntax.label(),
                                ElementKind::Syntax,
                                target.as_str(),
                            )
                        })?;
                        (target.clone(), implementation)
                    }
                    Err(error) => return Err(error),
                };
                Arc::new(SubstitutionSyntaxImpl::new(target_oid, target_implementation))
            }
            SyntaxImplementation::Unspecified => match self.fallback_syntax(oid) {
                Some(implementation) => implementation,
                None => {
                    let default_oid = self.options.default_syntax_oid.clone();
                    let implementation = if default_oid != oid && syntaxes.contains(&default_oid) {
                        self.syntax_implementation(syntaxes, &default_oid, chain, done)?
                    } else {
                        self.fallback_syntax(&default_oid).ok_or_else(|| {
                            SchemaError::unresolved(
                                ElementKind::Syntax,
                                syntax.label(),
                                ElementKind::Syntax,
                                default_oid.as_str(),
                            )
                        })?
                    };
                    self.warn(format!(
                        "Syntax '{}' has no implementation, values will be checked with the default syntax {}",
                        syntax.label(),
                        default_oid
                    ));
                    implementation
                }
            },
        };

        chain.pop();
        done.insert(oid.to_string(), Arc::clone(&implementation));
        Ok(implementation)
    }

    /// The implementation declared in `catalog` for `oid`, else the fallback's.
    fn matching_rule_implementation(
        &self,
        catalog: &Catalog,
        oid: &str,
    ) -> Option<Arc<dyn MatchingRuleImpl>> {
        catalog
            .matching_rules
            .get(oid)
            .and_then(|rule| rule.implementation().cloned())
            .or_else(|| self.fallback_matching_rule(oid))
    }

    fn resolve_matching_rules(&mut self, catalog: &mut Catalog) -> SchemaResult<()> {
        debug!("Resolving {} matching rules", catalog.matching_rules.len());
        let mut resolved = Vec::with_capacity(catalog.matching_rules.len());
        for rule in catalog.matching_rules.values() {
            let name = rule.name_or_oid().into_owned();
            let syntax = reference(&catalog.syntaxes, ElementKind::MatchingRule, &name, rule.syntax())?;
            let implementation = match self.matching_rule_implementation(catalog, rule.oid()) {
                Some(implementation) => implementation,
                None => {
                    let options = self.options;
                    let default_oid = &options.default_matching_rule_oid;
                    let implementation = self
                        .matching_rule_implementation(catalog, default_oid)
                        .ok_or_else(|| {
                            SchemaError::unresolved(
                                ElementKind::MatchingRule,
                                name.as_str(),
                                ElementKind::MatchingRule,
                                default_oid.as_str(),
                            )
                        })?;
                    let message = format!(
                        "Matching rule '{name}' has no implementation, values will be compared with the default matching rule {default_oid}"
                    );
                    self.warn(message);
                    implementation
                }
            };
            resolved.push((
                rule.oid().to_string(),
                ResolvedMatchingRule {
                    syntax,
                    implementation,
                },
            ));
        }
        for (oid, resolved) in resolved {
            if let Some(rule) = catalog.matching_rules.get_mut(&oid) {
                rule.set_resolved(resolved);
            }
        }
        Ok(())
    }

    fn resolve_attribute_types(&mut self, catalog: &mut Catalog) -> SchemaResult<()> {
        debug!("Resolving {} attribute types", catalog.attribute_types.len());
        let mut done = HashMap::new();
        for oid in catalog.attribute_types.identifiers() {
            let mut stack = Vec::new();
            self.attribute_type(catalog, &oid, &mut stack, &mut done)?;
        }
        for attribute_type in catalog.attribute_types.values_mut() {
            if let Some(resolved) = done.remove(attribute_type.oid()) {
                attribute_type.set_resolved(resolved);
            }
        }
        Ok(())
    }

    fn attribute_type(
        &mut self,
        catalog: &Catalog,
        oid: &str,
        stack: &mut Vec<String>,
        done: &mut HashMap<String, ResolvedAttributeType>,
    ) -> SchemaResult<ResolvedAttributeType> {
        if let Some(resolved) = done.get(oid) {
            return Ok(resolved.clone());
        }
        let attribute_type = catalog
            .attribute_types
            .get(oid)
            .ok_or_else(|| SchemaError::not_found(ElementKind::AttributeType, oid))?;
        let name = attribute_type.name_or_oid().into_owned();
        if stack.iter().any(|visited| visited == oid) {
            return Err(SchemaError::CircularInheritance {
                kind: ElementKind::AttributeType,
                element: name,
            });
        }
        if attribute_type.is_collective() && attribute_type.usage() != AttributeUsage::UserApplications {
            return Err(SchemaError::CollectiveNotUserApplication { attribute_type: name });
        }
        if attribute_type.is_no_user_modification() && !attribute_type.is_operational() {
            return Err(SchemaError::NoUserModificationUserApplication { attribute_type: name });
        }

        let kind = ElementKind::AttributeType;
        let superior = match attribute_type.superior() {
            Some(superior_reference) => {
                let superior_oid = reference(&catalog.attribute_types, kind, &name, superior_reference)?;
                stack.push(oid.to_string());
                let superior_resolved = self.attribute_type(catalog, &superior_oid, stack, done)?;
                stack.pop();
                if let Some(superior) = catalog.attribute_types.get(&superior_oid) {
                    if superior.usage() != attribute_type.usage() {
                        return Err(SchemaError::UsageMismatch {
                            attribute_type: name,
                            usage: attribute_type.usage().to_string(),
                            superior: superior.name_or_oid().into_owned(),
                            superior_usage: superior.usage().to_string(),
                        });
                    }
                    if superior.is_collective() != attribute_type.is_collective() {
                        return Err(SchemaError::CollectiveMismatch {
                            attribute_type: name,
                            superior: superior.name_or_oid().into_owned(),
                        });
                    }
                }
                Some((superior_oid, superior_resolved))
            }
            None => None,
        };

        let syntax = match (attribute_type.syntax(), &superior) {
            (Some(syntax), _) => reference(&catalog.syntaxes, kind, &name, syntax)?,
            (None, Some((_, superior))) => superior.syntax.clone(),
            (None, None) => reference(&catalog.syntaxes, kind, &name, &self.options.default_syntax_oid)?,
        };
        let syntax_element = catalog.syntaxes.get(&syntax);

        let mut rule = |declared: Option<&str>,
                        inherited: Option<&String>,
                        syntax_default: Option<&str>|
         -> SchemaResult<Option<String>> {
            if let Some(declared) = declared {
                return reference(&catalog.matching_rules, kind, &name, declared).map(Some);
            }
            if let Some(inherited) = inherited {
                return Ok(Some(inherited.clone()));
            }
            match syntax_default {
                Some(default) if catalog.matching_rules.contains(default) => Ok(Some(default.to_string())),
                Some(default) => {
                    self.warn(format!(
                        "Attribute type '{name}' cannot use the default matching rule {default} of its syntax because the schema does not define it"
                    ));
                    Ok(None)
                }
                None => Ok(None),
            }
        };
        let superior_resolved = superior.as_ref().map(|(_, resolved)| resolved);
        let equality = rule(
            attribute_type.equality_matching_rule(),
            superior_resolved.and_then(|s| s.equality_matching_rule.as_ref()),
            syntax_element.and_then(Syntax::equality_matching_rule),
        )?;
        let ordering = rule(
            attribute_type.ordering_matching_rule(),
            superior_resolved.and_then(|s| s.ordering_matching_rule.as_ref()),
            syntax_element.and_then(Syntax::ordering_matching_rule),
        )?;
        let substring = rule(
            attribute_type.substring_matching_rule(),
            superior_resolved.and_then(|s| s.substring_matching_rule.as_ref()),
            syntax_element.and_then(Syntax::substring_matching_rule),
        )?;
        let approximate = rule(
            attribute_type.approximate_matching_rule(),
            superior_resolved.and_then(|s| s.approximate_matching_rule.as_ref()),
            syntax_element.and_then(Syntax::approximate_matching_rule),
        )?;

        let mut ancestors = Vec::new();
        if let Some((superior_oid, superior)) = &superior {
            ancestors.push(superior_oid.clone());
            ancestors.extend(superior.ancestors.iter().cloned());
        }
        let resolved = ResolvedAttributeType {
            superior: superior.map(|(superior_oid, _)| superior_oid),
            syntax,
            equality_matching_rule: equality,
            ordering_matching_rule: ordering,
            substring_matching_rule: substring,
            approximate_matching_rule: approximate,
            ancestors,
        };
        done.insert(oid.to_string(), resolved.clone());
        Ok(resolved)
    }

    fn resolve_object_classes(&mut self, catalog: &mut Catalog) -> SchemaResult<()> {
        debug!("Resolving {} object classes", catalog.object_classes.len());
        let mut done = HashMap::new();
        for oid in catalog.object_classes.identifiers() {
            let mut stack = Vec::new();
            object_class(catalog, &oid, &mut stack, &mut done)?;
        }
        for object_class in catalog.object_classes.values_mut() {
            if let Some(resolved) = done.remove(object_class.oid()) {
                object_class.set_resolved(resolved);
            }
        }
        Ok(())
    }

    fn resolve_matching_rule_uses(&mut self, catalog: &mut Catalog) -> SchemaResult<()> {
        let kind = ElementKind::MatchingRuleUse;
        let mut resolved = Vec::with_capacity(catalog.matching_rule_uses.len());
        for rule_use in catalog.matching_rule_uses.values() {
            let name = rule_use.name_or_oid().into_owned();
            reference(&catalog.matching_rules, kind, &name, rule_use.matching_rule_oid())?;
            let attributes = references(&catalog.attribute_types, kind, &name, rule_use.attributes())?;
            resolved.push((rule_use.matching_rule_oid().to_string(), attributes));
        }
        for (oid, attributes) in resolved {
            if let Some(rule_use) = catalog.matching_rule_uses.get_mut(&oid) {
                rule_use.set_resolved(attributes);
            }
        }
        Ok(())
    }

    fn resolve_name_forms(&mut self, catalog: &mut Catalog) -> SchemaResult<()> {
        let kind = ElementKind::NameForm;
        let mut resolved = Vec::with_capacity(catalog.name_forms.len());
        for name_form in catalog.name_forms.values() {
            let name = name_form.name_or_oid().into_owned();
            let structural_class =
                reference(&catalog.object_classes, kind, &name, name_form.structural_class())?;
            require_structural(catalog, kind, &name, &structural_class)?;
            if name_form.required_attributes().is_empty() {
                return Err(SchemaError::EmptyRequiredAttributes { name_form: name });
            }
            let required =
                references(&catalog.attribute_types, kind, &name, name_form.required_attributes())?;
            let optional =
                references(&catalog.attribute_types, kind, &name, name_form.optional_attributes())?;
            self.resolution
                .indexes
                .name_forms_by_class
                .entry(structural_class.clone())
                .or_default()
                .push(name_form.oid().to_string());
            resolved.push((
                name_form.oid().to_string(),
                ResolvedNameForm {
                    structural_class,
                    required,
                    optional,
                },
            ));
        }
        for (oid, resolved) in resolved {
            if let Some(name_form) = catalog.name_forms.get_mut(&oid) {
                name_form.set_resolved(resolved);
            }
        }
        Ok(())
    }

    fn resolve_dit_content_rules(&mut self, catalog: &mut Catalog) -> SchemaResult<()> {
        let kind = ElementKind::DitContentRule;
        let mut resolved = Vec::with_capacity(catalog.dit_content_rules.len());
        for rule in catalog.dit_content_rules.values() {
            let name = rule.name_or_oid().into_owned();
            let structural_class =
                reference(&catalog.object_classes, kind, &name, rule.structural_class())?;
            require_structural(catalog, kind, &name, &structural_class)?;

            let auxiliary_classes =
                references(&catalog.object_classes, kind, &name, rule.auxiliary_classes())?;
            for auxiliary in &auxiliary_classes {
                if let Some(class) = catalog.object_classes.get(auxiliary) {
                    if class.object_class_kind() != ObjectClassKind::Auxiliary {
                        return Err(SchemaError::NotAuxiliary {
                            rule: name,
                            object_class: class.name_or_oid().into_owned(),
                        });
                    }
                }
            }

            let required = references(&catalog.attribute_types, kind, &name, rule.required_attributes())?;
            let optional = references(&catalog.attribute_types, kind, &name, rule.optional_attributes())?;
            let prohibited =
                references(&catalog.attribute_types, kind, &name, rule.prohibited_attributes())?;
            for attribute in &prohibited {
                let declaring = std::iter::once(&structural_class)
                    .chain(&auxiliary_classes)
                    .find_map(|class| requiring_class(catalog, class, attribute));
                if let Some(class) = declaring {
                    let attribute = catalog
                        .attribute_types
                        .get(attribute)
                        .map(|a| a.name_or_oid().into_owned())
                        .unwrap_or_else(|| attribute.clone());
                    return Err(SchemaError::ProhibitedAttributeRequired {
                        rule: name,
                        attribute,
                        object_class: class,
                    });
                }
            }

            if let Some(existing) = self
                .resolution
                .indexes
                .content_rule_by_class
                .get(&structural_class)
            {
                let existing_name = catalog
                    .dit_content_rules
                    .get(existing)
                    .map(|other| other.name_or_oid().into_owned())
                    .unwrap_or_else(|| existing.clone());
                return Err(SchemaError::Conflict {
                    kind,
                    identifier: structural_class,
                    new_name: name,
                    existing_name,
                });
            }
            self.resolution
                .indexes
                .content_rule_by_class
                .insert(structural_class.clone(), rule.structural_class().to_string());
            resolved.push((
                rule.structural_class().to_string(),
                ResolvedDitContentRule {
                    structural_class,
                    auxiliary_classes,
                    required,
                    optional,
                    prohibited,
                },
            ));
        }
        for (identifier, resolved) in resolved {
            if let Some(rule) = catalog.dit_content_rules.get_mut(&identifier) {
                rule.set_resolved(resolved);
            }
        }
        Ok(())
    }

    fn resolve_dit_structure_rules(&mut self, catalog: &mut Catalog) -> SchemaResult<()> {
        let kind = ElementKind::DitStructureRule;
        let mut resolved = Vec::with_capacity(catalog.dit_structure_rules.len());
        for rule in catalog.dit_structure_rules.values() {
            let name = rule.name_or_oid().into_owned();
            let name_form = reference(&catalog.name_forms, kind, &name, rule.name_form())?;
            for superior in rule.superior_rules() {
                if !catalog.dit_structure_rules.contains(&superior.to_string()) {
                    return Err(SchemaError::unresolved(kind, name, kind, superior.to_string()));
                }
            }
            let identifier = rule.rule_id().to_string();
            self.resolution
                .indexes
                .structure_rules_by_name_form
                .entry(name_form.clone())
                .or_default()
                .push(identifier.clone());
            resolved.push((identifier, name_form));
        }
        for (identifier, name_form) in resolved {
            if let Some(rule) = catalog.dit_structure_rules.get_mut(&identifier) {
                rule.set_resolved(name_form);
            }
        }
        Ok(())
    }
}

fn object_class(
    catalog: &Catalog,
    oid: &str,
    stack: &mut Vec<String>,
    done: &mut HashMap<String, ResolvedObjectClass>,
) -> SchemaResult<ResolvedObjectClass> {
    if let Some(resolved) = done.get(oid) {
        return Ok(resolved.clone());
    }
    let kind = ElementKind::ObjectClass;
    let class = catalog
        .object_classes
        .get(oid)
        .ok_or_else(|| SchemaError::not_found(kind, oid))?;
    let name = class.name_or_oid().into_owned();
    if stack.iter().any(|visited| visited == oid) {
        return Err(SchemaError::CircularInheritance { kind, element: name });
    }

    let mut resolved = ResolvedObjectClass::default();
    stack.push(oid.to_string());
    for superior_reference in class.superiors() {
        let superior_oid = reference(&catalog.object_classes, kind, &name, superior_reference)?;
        if let Some(superior) = catalog.object_classes.get(&superior_oid) {
            if !class
                .object_class_kind()
                .may_derive_from(superior.object_class_kind())
            {
                return Err(SchemaError::InvalidSuperiorKind {
                    object_class: name,
                    kind: class.object_class_kind().to_string(),
                    superior: superior.name_or_oid().into_owned(),
                    superior_kind: superior.object_class_kind().to_string(),
                });
            }
        }
        let superior = object_class(catalog, &superior_oid, stack, done)?;
        resolved.ancestors.insert(superior_oid.clone());
        resolved.ancestors.extend(superior.ancestors);
        resolved.required.extend(superior.required);
        resolved.optional.extend(superior.optional);
        resolved.superiors.push(superior_oid);
    }
    stack.pop();

    resolved.declared_required =
        references(&catalog.attribute_types, kind, &name, class.required_attributes())?;
    resolved.declared_optional =
        references(&catalog.attribute_types, kind, &name, class.optional_attributes())?;
    resolved.required.extend(resolved.declared_required.iter().cloned());
    resolved.optional.extend(resolved.declared_optional.iter().cloned());

    if class.object_class_kind() == ObjectClassKind::Structural && !resolved.ancestors.contains(OC_TOP) {
        return Err(SchemaError::StructuralNotDerivedFromTop { object_class: name });
    }

    done.insert(oid.to_string(), resolved.clone());
    Ok(resolved)
}

fn require_structural(
    catalog: &Catalog,
    kind: ElementKind,
    element: &str,
    object_class: &str,
) -> SchemaResult<()> {
    match catalog.object_classes.get(object_class) {
        Some(class) if class.object_class_kind() != ObjectClassKind::Structural => {
            Err(SchemaError::NotStructural {
                kind,
                element: element.to_string(),
                object_class: class.name_or_oid().into_owned(),
            })
        }
        _ => Ok(()),
    }
}

/// The class to blame when `attribute` is required through `class`: the
/// class itself when it declares the attribute, otherwise its nearest
/// superior whose full required set contains it.
fn requiring_class(catalog: &Catalog, class: &str, attribute: &str) -> Option<String> {
    let object_class = catalog.object_classes.get(class)?;
    let resolved = object_class.resolved()?;
    if !resolved.required.contains(attribute) {
        return None;
    }
    if resolved.declared_required.iter().any(|a| a == attribute) {
        return Some(object_class.name_or_oid().into_owned());
    }
    resolved
        .superiors
        .iter()
        .filter_map(|oid| catalog.object_classes.get(oid))
        .find(|superior| {
            superior
                .resolved()
                .is_some_and(|r| r.required.contains(attribute))
        })
        .map(|superior| superior.name_or_oid().into_owned())
}
