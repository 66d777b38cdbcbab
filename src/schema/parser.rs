//! RFC 4512 definition parser.
//!
//! One function per element kind turns a definition string into an unresolved
//! element. The parser knows nothing about other elements: references stay as
//! written until the resolution pass runs.
//!
//! Keywords may appear in any order and are matched without regard to case.
//! A keyword repeated within one definition keeps its last value.

use std::collections::HashMap;

use crate::error::{DecodeError, DecodeResult, ElementKind};
use crate::schema::elements::{
    AttributeType, DitContentRule, DitStructureRule, MatchingRule, MatchingRuleUse, NameForm,
    ObjectClass, Syntax, SyntaxImplementation,
};
use crate::schema::reader::DefinitionReader;
use crate::schema::types::{
    AttributeUsage, ElementInfo, ObjectClassKind, X_APPROX, X_ENUM, X_PATTERN, X_SUBST,
};

/// Keyword positions seen while parsing, keyed by upper-cased keyword.
type KeywordPositions = HashMap<String, usize>;

/// Parse the parts shared by every kind, handing other keywords to `token`.
///
/// `token` returns `false` for keywords the kind does not understand.
fn parse_body<'a, F>(
    reader: &mut DefinitionReader<'a>,
    info: &mut ElementInfo,
    mut token: F,
) -> DecodeResult<KeywordPositions>
where
    F: FnMut(&mut DefinitionReader<'a>, &str) -> DecodeResult<bool>,
{
    let mut positions = KeywordPositions::new();
    while let Some((position, keyword)) = reader.read_keyword()? {
        let upper = keyword.to_ascii_uppercase();
        match upper.as_str() {
            "NAME" => info.names = reader.read_names()?,
            "DESC" => info.description = Some(reader.read_qdstring()?),
            "OBSOLETE" => info.obsolete = true,
            _ if upper.starts_with("X-") && upper.len() > 2 => {
                let values = reader.read_qdstrings()?;
                info.extensions.insert(keyword.to_string(), values);
            }
            _ => {
                if !token(reader, &upper)? {
                    return Err(DecodeError::UnexpectedToken {
                        position,
                        token: keyword.to_string(),
                    });
                }
            }
        }
        positions.insert(upper, position);
    }
    reader.finish()?;
    Ok(positions)
}

fn missing(kind: ElementKind, element: &str, token: &str, position: usize) -> DecodeError {
    DecodeError::MissingToken {
        kind,
        element: element.to_string(),
        token: token.to_string(),
        position,
    }
}

/// Parse an `ldapSyntaxes` value.
///
/// `X-SUBST`, `X-PATTERN` and `X-ENUM` select a generated implementation.
pub fn parse_syntax(definition: &str) -> DecodeResult<Syntax> {
    let mut reader = DefinitionReader::new(definition);
    reader.expect('(')?;
    let oid = reader.read_numeric_oid()?;
    let mut info = ElementInfo::default();
    let positions = parse_body(&mut reader, &mut info, |_, _| Ok(false))?;

    let position = [X_SUBST, X_PATTERN, X_ENUM]
        .iter()
        .find_map(|key| positions.get(*key).copied())
        .unwrap_or(0);
    let implementation = SyntaxImplementation::from_extensions(&oid, &info, position)?
        .unwrap_or(SyntaxImplementation::Unspecified);

    Ok(Syntax::new(oid)
        .with_info(info)
        .with_implementation_kind(implementation)
        .with_definition(definition.trim()))
}

/// Parse a `matchingRules` value.
pub fn parse_matching_rule(definition: &str) -> DecodeResult<MatchingRule> {
    let mut reader = DefinitionReader::new(definition);
    reader.expect('(')?;
    let oid = reader.read_numeric_oid()?;
    let mut info = ElementInfo::default();
    let mut syntax = None;
    parse_body(&mut reader, &mut info, |reader, keyword| {
        match keyword {
            "SYNTAX" => syntax = Some(reader.read_oid()?),
            _ => return Ok(false),
        }
        Ok(true)
    })?;
    let syntax = syntax.ok_or_else(|| {
        missing(ElementKind::MatchingRule, &oid, "SYNTAX", reader.position())
    })?;
    Ok(MatchingRule::new(oid, syntax)
        .with_info(info)
        .with_definition(definition.trim()))
}

/// Parse a `matchingRuleUse` value.
pub fn parse_matching_rule_use(definition: &str) -> DecodeResult<MatchingRuleUse> {
    let mut reader = DefinitionReader::new(definition);
    reader.expect('(')?;
    let oid = reader.read_numeric_oid()?;
    let mut info = ElementInfo::default();
    let mut applies = None;
    parse_body(&mut reader, &mut info, |reader, keyword| {
        match keyword {
            "APPLIES" => applies = Some(reader.read_oids()?),
            _ => return Ok(false),
        }
        Ok(true)
    })?;
    let applies = applies.ok_or_else(|| {
        missing(ElementKind::MatchingRuleUse, &oid, "APPLIES", reader.position())
    })?;
    Ok(MatchingRuleUse::new(oid, applies)
        .with_info(info)
        .with_definition(definition.trim()))
}

/// Parse an `attributeTypes` value.
///
/// Either `SUP` or `SYNTAX` must be present. The approximate matching rule
/// is read from the `X-APPROX` extension.
pub fn parse_attribute_type(definition: &str) -> DecodeResult<AttributeType> {
    let mut reader = DefinitionReader::new(definition);
    reader.expect('(')?;
    let oid = reader.read_numeric_oid()?;
    let mut info = ElementInfo::default();
    let mut superior = None;
    let mut equality = None;
    let mut ordering = None;
    let mut substring = None;
    let mut syntax = None;
    let mut syntax_length = None;
    let mut single_value = false;
    let mut collective = false;
    let mut no_user_modification = false;
    let mut usage = AttributeUsage::UserApplications;

    parse_body(&mut reader, &mut info, |reader, keyword| {
        match keyword {
            "SUP" => superior = Some(reader.read_oid()?),
            "EQUALITY" => equality = Some(reader.read_oid()?),
            "ORDERING" => ordering = Some(reader.read_oid()?),
            "SUBSTR" => substring = Some(reader.read_oid()?),
            "SYNTAX" => {
                syntax = Some(reader.read_oid()?);
                syntax_length = reader.read_length_hint()?;
            }
            "SINGLE-VALUE" => single_value = true,
            "COLLECTIVE" => collective = true,
            "NO-USER-MODIFICATION" => no_user_modification = true,
            "USAGE" => {
                reader.skip_whitespace();
                let start = reader.position();
                let value = reader.read_oid()?;
                usage = AttributeUsage::from_keyword(&value).ok_or_else(|| {
                    DecodeError::InvalidTokenValue {
                        position: start,
                        token: "USAGE".to_string(),
                        reason: format!("unknown usage '{value}'"),
                    }
                })?;
            }
            _ => return Ok(false),
        }
        Ok(true)
    })?;

    if superior.is_none() && syntax.is_none() {
        return Err(missing(
            ElementKind::AttributeType,
            &oid,
            "SUP or SYNTAX",
            reader.position(),
        ));
    }

    let approximate = info
        .extensions
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(X_APPROX))
        .and_then(|(_, values)| values.first().cloned());

    let mut attribute = AttributeType::new(oid)
        .with_info(info)
        .with_single_value(single_value)
        .with_collective(collective)
        .with_no_user_modification(no_user_modification)
        .with_usage(usage);
    if let Some(superior) = superior {
        attribute = attribute.with_superior(superior);
    }
    if let Some(syntax) = syntax {
        attribute = attribute.with_syntax(syntax);
    }
    if let Some(length) = syntax_length {
        attribute = attribute.with_syntax_length(length);
    }
    if let Some(rule) = equality {
        attribute = attribute.with_equality_matching_rule(rule);
    }
    if let Some(rule) = ordering {
        attribute = attribute.with_ordering_matching_rule(rule);
    }
    if let Some(rule) = substring {
        attribute = attribute.with_substring_matching_rule(rule);
    }
    if let Some(rule) = approximate {
        attribute = attribute.with_approximate_matching_rule(rule);
    }
    Ok(attribute.with_definition(definition.trim()))
}

/// Parse an `objectClasses` value. The kind defaults to STRUCTURAL.
pub fn parse_object_class(definition: &str) -> DecodeResult<ObjectClass> {
    let mut reader = DefinitionReader::new(definition);
    reader.expect('(')?;
    let oid = reader.read_numeric_oid()?;
    let mut info = ElementInfo::default();
    let mut superiors = Vec::new();
    let mut kind = ObjectClassKind::Structural;
    let mut required = Vec::new();
    let mut optional = Vec::new();

    parse_body(&mut reader, &mut info, |reader, keyword| {
        match keyword {
            "SUP" => superiors = reader.read_oids()?,
            "ABSTRACT" => kind = ObjectClassKind::Abstract,
            "STRUCTURAL" => kind = ObjectClassKind::Structural,
            "AUXILIARY" => kind = ObjectClassKind::Auxiliary,
            "MUST" => required = reader.read_oids()?,
            "MAY" => optional = reader.read_oids()?,
            _ => return Ok(false),
        }
        Ok(true)
    })?;

    Ok(ObjectClass::new(oid)
        .with_info(info)
        .with_superiors(superiors)
        .with_kind(kind)
        .with_required_attributes(required)
        .with_optional_attributes(optional)
        .with_definition(definition.trim()))
}

/// Parse a `nameForms` value. `OC` and `MUST` are mandatory.
pub fn parse_name_form(definition: &str) -> DecodeResult<NameForm> {
    let mut reader = DefinitionReader::new(definition);
    reader.expect('(')?;
    let oid = reader.read_numeric_oid()?;
    let mut info = ElementInfo::default();
    let mut structural_class = None;
    let mut required = None;
    let mut optional = Vec::new();

    parse_body(&mut reader, &mut info, |reader, keyword| {
        match keyword {
            "OC" => structural_class = Some(reader.read_oid()?),
            "MUST" => required = Some(reader.read_oids()?),
            "MAY" => optional = reader.read_oids()?,
            _ => return Ok(false),
        }
        Ok(true)
    })?;

    let end = reader.position();
    let structural_class =
        structural_class.ok_or_else(|| missing(ElementKind::NameForm, &oid, "OC", end))?;
    let required = required.ok_or_else(|| missing(ElementKind::NameForm, &oid, "MUST", end))?;
    Ok(NameForm::new(oid, structural_class, required)
        .with_info(info)
        .with_optional_attributes(optional)
        .with_definition(definition.trim()))
}

/// Parse a `dITContentRules` value.
pub fn parse_dit_content_rule(definition: &str) -> DecodeResult<DitContentRule> {
    let mut reader = DefinitionReader::new(definition);
    reader.expect('(')?;
    let oid = reader.read_numeric_oid()?;
    let mut info = ElementInfo::default();
    let mut auxiliary = Vec::new();
    let mut required = Vec::new();
    let mut optional = Vec::new();
    let mut prohibited = Vec::new();

    parse_body(&mut reader, &mut info, |reader, keyword| {
        match keyword {
            "AUX" => auxiliary = reader.read_oids()?,
            "MUST" => required = reader.read_oids()?,
            "MAY" => optional = reader.read_oids()?,
            "NOT" => prohibited = reader.read_oids()?,
            _ => return Ok(false),
        }
        Ok(true)
    })?;

    Ok(DitContentRule::new(oid)
        .with_info(info)
        .with_auxiliary_classes(auxiliary)
        .with_required_attributes(required)
        .with_optional_attributes(optional)
        .with_prohibited_attributes(prohibited)
        .with_definition(definition.trim()))
}

/// Parse a `dITStructureRules` value. `FORM` is mandatory.
pub fn parse_dit_structure_rule(definition: &str) -> DecodeResult<DitStructureRule> {
    let mut reader = DefinitionReader::new(definition);
    reader.expect('(')?;
    let rule_id = reader.read_rule_id()?;
    let mut info = ElementInfo::default();
    let mut name_form = None;
    let mut superiors = Vec::new();

    parse_body(&mut reader, &mut info, |reader, keyword| {
        match keyword {
            "FORM" => name_form = Some(reader.read_oid()?),
            "SUP" => superiors = reader.read_rule_ids()?,
            _ => return Ok(false),
        }
        Ok(true)
    })?;

    let name_form = name_form.ok_or_else(|| {
        missing(
            ElementKind::DitStructureRule,
            &rule_id.to_string(),
            "FORM",
            reader.position(),
        )
    })?;
    Ok(DitStructureRule::new(rule_id, name_form)
        .with_info(info)
        .with_superior_rules(superiors)
        .with_definition(definition.trim()))
}

/// Check that `definition` is a well-formed definition of `kind`.
pub fn check_definition(kind: ElementKind, definition: &str) -> DecodeResult<()> {
    match kind {
        ElementKind::Syntax => parse_syntax(definition).map(drop),
        ElementKind::MatchingRule => parse_matching_rule(definition).map(drop),
        ElementKind::MatchingRuleUse => parse_matching_rule_use(definition).map(drop),
        ElementKind::AttributeType => parse_attribute_type(definition).map(drop),
        ElementKind::ObjectClass => parse_object_class(definition).map(drop),
        ElementKind::NameForm => parse_name_form(definition).map(drop),
        ElementKind::DitContentRule => parse_dit_content_rule(definition).map(drop),
        ElementKind::DitStructureRule => parse_dit_structure_rule(definition).map(drop),
    }
}
