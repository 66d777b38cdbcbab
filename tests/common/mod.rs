//! Common test utilities for LDAP schema testing.
//!
//! This module provides assertion macros, builders and fixtures shared by the
//! unit and validation suites.

use ldap_schema::schema::Schema;
use std::sync::Once;

pub mod builders;
pub mod fixtures;

static LOGGER: Once = Once::new();

/// Route `log` output through the test harness once per process.
pub fn init_logging() {
    LOGGER.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// The shared core schema.
pub fn core() -> &'static Schema {
    Schema::core_schema()
}

/// Assert that a core attribute type accepts a value
#[macro_export]
macro_rules! assert_value_accepted {
    ($schema:expr, $attribute:expr, $value:expr) => {{
        let schema = $schema;
        let attribute_type = schema
            .get_attribute_type($attribute)
            .unwrap_or_else(|e| panic!("unknown attribute type {}: {}", $attribute, e));
        if let Err(error) = schema.value_is_acceptable(attribute_type, $value.as_ref()) {
            panic!(
                "Expected {} to accept {:?}, got error: {}",
                $attribute, $value, error
            );
        }
    }};
}

/// Assert that a core attribute type rejects a value, optionally at a position
#[macro_export]
macro_rules! assert_value_rejected {
    ($schema:expr, $attribute:expr, $value:expr) => {{
        let schema = $schema;
        let attribute_type = schema
            .get_attribute_type($attribute)
            .unwrap_or_else(|e| panic!("unknown attribute type {}: {}", $attribute, e));
        match schema.value_is_acceptable(attribute_type, $value.as_ref()) {
            Ok(()) => panic!("Expected {} to reject {:?}, but it was accepted", $attribute, $value),
            Err(error) => error,
        }
    }};
    ($schema:expr, $attribute:expr, $value:expr, at $position:expr) => {{
        let error = $crate::assert_value_rejected!($schema, $attribute, $value);
        assert_eq!(
            error.position(),
            Some($position),
            "unexpected position in error: {}",
            error
        );
        error
    }};
}

/// Assert that a schema operation failed with a specific error variant
#[macro_export]
macro_rules! assert_schema_error {
    ($result:expr, $error_variant:pat) => {
        match $result {
            Err($error_variant) => {}
            Ok(_) => panic!("Expected schema error, but the operation succeeded"),
            Err(other) => panic!("Expected specific schema error, got {:?}", other),
        }
    };
}

/// Assert that an error's message mentions every given fragment
#[macro_export]
macro_rules! assert_error_message_contains {
    ($result:expr, $($substring:expr),+) => {
        match $result {
            Err(err) => {
                let message = err.to_string();
                $(
                    assert!(
                        message.contains($substring),
                        "Error message '{}' does not contain '{}'",
                        message,
                        $substring
                    );
                )+
            }
            Ok(_) => panic!("Expected an error, but the operation succeeded"),
        }
    };
}
