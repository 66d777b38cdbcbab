//! Options that travel with a schema and tune validation.

use serde::{Deserialize, Serialize};

use crate::error::{SchemaError, SchemaResult};
use crate::schema::oids::{EMR_OCTET_STRING, SYNTAX_OCTET_STRING};
use crate::schema::reader::is_numeric_oid;

/// Validation options carried by a [`Schema`](crate::schema::Schema).
///
/// # Examples
///
/// ```rust
/// use ldap_schema::schema::SchemaOptions;
///
/// let options: SchemaOptions =
///     serde_json::from_str(r#"{"allowZeroLengthDirectoryStrings": true}"#).unwrap();
/// assert!(options.allow_zero_length_directory_strings);
/// assert!(options.strict_format_for_country_strings);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SchemaOptions {
    /// Accept empty Directory String values
    pub allow_zero_length_directory_strings: bool,
    /// Country strings must be two upper-case letters
    pub strict_format_for_country_strings: bool,
    /// Telephone numbers must follow E.123
    pub strict_format_for_telephone_numbers: bool,
    /// Syntax used when an element names a syntax with no implementation
    pub default_syntax_oid: String,
    /// Matching rule used when a rule OID has no implementation
    pub default_matching_rule_oid: String,
}

impl Default for SchemaOptions {
    fn default() -> Self {
        Self {
            allow_zero_length_directory_strings: false,
            strict_format_for_country_strings: true,
            strict_format_for_telephone_numbers: false,
            default_syntax_oid: SYNTAX_OCTET_STRING.to_string(),
            default_matching_rule_oid: EMR_OCTET_STRING.to_string(),
        }
    }
}

impl SchemaOptions {
    /// Reject options a schema cannot be built with.
    pub fn validate(&self) -> SchemaResult<()> {
        if !is_numeric_oid(&self.default_syntax_oid) {
            return Err(SchemaError::invalid_options(format!(
                "default syntax '{}' is not a numeric OID",
                self.default_syntax_oid
            )));
        }
        if !is_numeric_oid(&self.default_matching_rule_oid) {
            return Err(SchemaError::invalid_options(format!(
                "default matching rule '{}' is not a numeric OID",
                self.default_matching_rule_oid
            )));
        }
        Ok(())
    }
}
