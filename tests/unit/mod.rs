//! Unit tests for LDAP schema components
//!
//! This module contains tests that build schemas from definitions and check
//! the resulting elements, relationships and failures.
//!
//! ## Organization
//!
//! - [`parser`] - Definition decoding
//! - [`builder`] - Element registration and replacement
//! - [`resolution`] - Inheritance and structural checks
//! - [`source`] - Subschema entry import
//! - [`properties`] - Property-based grammar tests

pub mod builder;
pub mod parser;
pub mod properties;
pub mod resolution;
pub mod source;
