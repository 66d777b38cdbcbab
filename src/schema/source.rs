//! Subschema entries and the directory collaborator that supplies them.
//!
//! A directory publishes its schema as a subschema entry: eight multi-valued
//! attributes whose values are RFC 4512 definitions. This crate never talks
//! to a directory itself. Callers implement [`SchemaEntrySource`] over their
//! connection layer and hand it to
//! [`SchemaBuilder::add_schema_from_source`](crate::schema::SchemaBuilder::add_schema_from_source).
//!
//! # Example Usage
//!
//! ```rust
//! use ldap_schema::schema::{SchemaBuilder, StaticSchemaSource, SubschemaEntry};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut entry = SubschemaEntry::new();
//! entry.add_value(
//!     SubschemaEntry::ATTRIBUTE_TYPES,
//!     "( 1.3.6.1.4.1.99999.1 NAME 'badgeNumber' SUP name )",
//! );
//! let source = StaticSchemaSource::new().with_entry("cn=schema", entry);
//!
//! let mut builder = SchemaBuilder::from_schema(ldap_schema::schema::Schema::core_schema());
//! builder.add_schema_from_source(&source, "cn=schema", false).await?;
//! let schema = builder.to_schema()?;
//! assert!(schema.has_attribute_type("badgeNumber"));
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::future::Future;

/// The schema attributes of a subschema entry.
///
/// Attribute names are matched case-insensitively; values keep their order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubschemaEntry {
    attributes: BTreeMap<String, Vec<String>>,
}

impl SubschemaEntry {
    pub const LDAP_SYNTAXES: &'static str = "ldapSyntaxes";
    pub const MATCHING_RULES: &'static str = "matchingRules";
    pub const MATCHING_RULE_USE: &'static str = "matchingRuleUse";
    pub const ATTRIBUTE_TYPES: &'static str = "attributeTypes";
    pub const OBJECT_CLASSES: &'static str = "objectClasses";
    pub const NAME_FORMS: &'static str = "nameForms";
    pub const DIT_CONTENT_RULES: &'static str = "dITContentRules";
    pub const DIT_STRUCTURE_RULES: &'static str = "dITStructureRules";

    pub fn new() -> Self {
        Self::default()
    }

    fn key(&self, attribute: &str) -> Option<&String> {
        self.attributes
            .keys()
            .find(|key| key.eq_ignore_ascii_case(attribute))
    }

    /// Append a value, creating the attribute on first use.
    pub fn add_value(&mut self, attribute: &str, value: impl Into<String>) {
        let key = self
            .key(attribute)
            .cloned()
            .unwrap_or_else(|| attribute.to_string());
        self.attributes.entry(key).or_default().push(value.into());
    }

    /// Values of `attribute`; empty when the entry does not hold it.
    pub fn values(&self, attribute: &str) -> &[String] {
        self.key(attribute)
            .and_then(|key| self.attributes.get(key))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn attribute_names(&self) -> impl Iterator<Item = &str> {
        self.attributes.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.values().all(Vec::is_empty)
    }
}

/// Reads subschema entries from a directory.
///
/// Implementations wrap whatever connection layer the caller uses. The
/// builder calls [`read_subschema_entry`](Self::read_subschema_entry) once per
/// import and wraps failures in
/// [`SchemaError::Source`](crate::error::SchemaError::Source).
pub trait SchemaEntrySource: Send + Sync {
    /// The error type returned by the connection layer.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Fetch the subschema entry named `dn`.
    fn read_subschema_entry(
        &self,
        dn: &str,
    ) -> impl Future<Output = Result<SubschemaEntry, Self::Error>> + Send;
}

/// Errors raised by [`StaticSchemaSource`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StaticSourceError {
    #[error("No subschema entry named '{dn}'")]
    NoSuchEntry { dn: String },
}

/// In-memory source, keyed by DN ignoring case.
#[derive(Debug, Clone, Default)]
pub struct StaticSchemaSource {
    entries: HashMap<String, SubschemaEntry>,
}

impl StaticSchemaSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, dn: impl Into<String>, entry: SubschemaEntry) -> Self {
        self.entries.insert(dn.into().to_ascii_lowercase(), entry);
        self
    }
}

impl SchemaEntrySource for StaticSchemaSource {
    type Error = StaticSourceError;

    async fn read_subschema_entry(&self, dn: &str) -> Result<SubschemaEntry, Self::Error> {
        self.entries
            .get(&dn.to_ascii_lowercase())
            .cloned()
            .ok_or_else(|| StaticSourceError::NoSuchEntry { dn: dn.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_names_ignore_case() {
        let mut entry = SubschemaEntry::new();
        entry.add_value("attributetypes", "( 1.1 SUP name )");
        entry.add_value(SubschemaEntry::ATTRIBUTE_TYPES, "( 1.2 SUP name )");

        assert_eq!(entry.values("ATTRIBUTETYPES").len(), 2);
        assert_eq!(entry.attribute_names().count(), 1);
        assert!(entry.values(SubschemaEntry::OBJECT_CLASSES).is_empty());
    }

    #[test]
    fn test_serde_shape() {
        let mut entry = SubschemaEntry::new();
        entry.add_value(SubschemaEntry::LDAP_SYNTAXES, "( 1.2.3 DESC 'x' )");
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["attributes"]["ldapSyntaxes"][0], "( 1.2.3 DESC 'x' )");
    }

    #[tokio::test]
    async fn test_static_source() {
        let source = StaticSchemaSource::new().with_entry("CN=Schema", SubschemaEntry::new());
        assert!(source.read_subschema_entry("cn=schema").await.is_ok());
        assert_eq!(
            source.read_subschema_entry("cn=other").await,
            Err(StaticSourceError::NoSuchEntry {
                dn: "cn=other".to_string()
            })
        );
    }
}
