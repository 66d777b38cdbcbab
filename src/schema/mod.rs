//! LDAP schema definitions, construction and resolution.
//!
//! A [`Schema`] is an immutable, resolved snapshot of eight element kinds:
//! syntaxes, matching rules, matching rule uses, attribute types, object
//! classes, name forms, DIT content rules and DIT structure rules. Schemas are
//! produced by a [`SchemaBuilder`], which accepts elements as values or as
//! RFC 4512 definition strings and resolves every cross-reference when
//! [`SchemaBuilder::to_schema`] is called.
//!
//! # Key Types
//!
//! - [`Schema`] - Resolved snapshot with lookup by OID or name
//! - [`SchemaBuilder`] - Mutable working copy used to assemble a schema
//! - [`SchemaOptions`] - Validation options carried by every schema
//! - [`SubschemaEntry`] - Schema as published by a directory
//!
//! # Examples
//!
//! ```rust
//! use ldap_schema::schema::{Schema, SchemaBuilder, SchemaElement};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut builder = SchemaBuilder::from_schema(Schema::core_schema());
//! builder.add_attribute_type_definition(
//!     "( 1.3.6.1.4.1.99999.1.1 NAME 'nickname' SUP name )",
//!     false,
//! )?;
//! builder.add_object_class_definition(
//!     "( 1.3.6.1.4.1.99999.2.1 NAME 'nicknamed' SUP top AUXILIARY MAY nickname )",
//!     false,
//! )?;
//! let schema = builder.to_schema()?;
//!
//! let nickname = schema.get_attribute_type("nickname")?;
//! let equality = schema.equality_matching_rule_of(nickname).unwrap();
//! assert_eq!(equality.name_or_oid(), "caseIgnoreMatch");
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub(crate) mod core_schema;
pub mod elements;
pub mod embedded;
pub mod oids;
pub mod options;
pub mod parser;
pub mod reader;
pub mod registry;
pub mod source;
pub mod types;
pub(crate) mod validation;
pub mod writer;


pub use builder::SchemaBuilder;
pub use elements::{
    AttributeType, DitContentRule, DitStructureRule, MatchingRule, MatchingRuleUse, NameForm,
    ObjectClass, RuleAssertion, Syntax, SyntaxImplementation,
};
pub use options::SchemaOptions;
pub use registry::Schema;
pub use source::{SchemaEntrySource, StaticSchemaSource, StaticSourceError, SubschemaEntry};
pub use types::{
    AttributeUsage, ElementInfo, Extensions, ObjectClassKind, SchemaElement, X_APPROX, X_ENUM,
    X_ORIGIN, X_PATTERN, X_SUBST,
};
