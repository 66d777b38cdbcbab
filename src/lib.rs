//! LDAP schema library for Rust.
//!
//! Parses, models, resolves and validates LDAP schema elements as defined by
//! RFC 4512, and validates attribute values against the RFC 4517 syntaxes.
//!
//! # Core Components
//!
//! - [`Schema`] - Immutable, fully resolved schema snapshot
//! - [`SchemaBuilder`] - Assembles elements and resolves them into a [`Schema`]
//! - [`SyntaxImpl`] - Value acceptability check behind every syntax
//! - [`MatchingRuleImpl`] - Normalization and assertions behind every matching rule
//!
//! # Quick Start
//!
//! ```rust
//! use ldap_schema::{Schema, SchemaBuilder};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let core = Schema::core_schema();
//! let cn = core.get_attribute_type("cn")?;
//! assert!(core.value_is_acceptable(cn, b"Babs Jensen").is_ok());
//!
//! let mut builder = SchemaBuilder::from_schema(core);
//! builder.add_object_class_definition(
//!     "( 1.3.6.1.4.1.99999.2.2 NAME 'badgeHolder' SUP person STRUCTURAL )",
//!     false,
//! )?;
//! let schema = builder.to_schema()?;
//! assert!(schema.has_object_class("badgeHolder"));
//! # Ok(())
//! # }
//! ```

pub mod dn;
pub mod error;
pub mod matching;
pub mod schema;
pub mod syntax;

// Re-export commonly used types for convenience
pub use error::{
    DecodeError, DecodeResult, ElementKind, SchemaError, SchemaResult, ValidationError,
    ValidationResult,
};
pub use matching::{ConditionResult, MatchingRuleImpl, RuleUsage};
pub use schema::{
    AttributeType, AttributeUsage, DitContentRule, DitStructureRule, MatchingRule,
    MatchingRuleUse, NameForm, ObjectClass, ObjectClassKind, Schema, SchemaBuilder,
    SchemaElement, SchemaEntrySource, SchemaOptions, SubschemaEntry, Syntax,
};
pub use syntax::SyntaxImpl;
