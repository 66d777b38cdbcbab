//! Error types for schema parsing, resolution and value validation.
//!
//! Three families of failure are kept apart:
//!
//! - [`DecodeError`] - a textual schema definition is malformed. Always carries
//!   the 0-based position of the offending character.
//! - [`SchemaError`] - the catalog is semantically inconsistent (dangling
//!   reference, conflicting identifier, illegal inheritance). Raised once per
//!   builder operation or per build.
//! - [`ValidationError`] - a single attribute value is not acceptable for a
//!   syntax or cannot be normalized by a matching rule. Returned, never raised
//!   as a build failure.

use std::fmt;

/// Kind of schema element, used to label errors and log messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Syntax,
    MatchingRule,
    MatchingRuleUse,
    AttributeType,
    ObjectClass,
    NameForm,
    DitContentRule,
    DitStructureRule,
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Syntax => "syntax",
            Self::MatchingRule => "matching rule",
            Self::MatchingRuleUse => "matching rule use",
            Self::AttributeType => "attribute type",
            Self::ObjectClass => "object class",
            Self::NameForm => "name form",
            Self::DitContentRule => "DIT content rule",
            Self::DitStructureRule => "DIT structure rule",
        };
        f.write_str(label)
    }
}

/// Errors raised while decoding a textual schema definition.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// Input ended while more was expected
    #[error("Unexpected end of definition at position {position}, expected {expected}")]
    UnexpectedEnd { position: usize, expected: String },

    /// A character that does not fit the grammar at this point
    #[error("Unexpected character '{character}' at position {position}, expected {expected}")]
    UnexpectedCharacter {
        position: usize,
        character: char,
        expected: String,
    },

    /// A keyword the element kind does not understand
    #[error("Unexpected token '{token}' at position {position}")]
    UnexpectedToken { position: usize, token: String },

    /// An OID, descriptor or rule ID that is not well formed
    #[error("Illegal identifier '{identifier}' at position {position}: {reason}")]
    IllegalIdentifier {
        position: usize,
        identifier: String,
        reason: String,
    },

    /// A mandatory keyword was never seen
    #[error("Definition of {kind} '{element}' is missing the mandatory {token} token")]
    MissingToken {
        kind: ElementKind,
        element: String,
        token: String,
        position: usize,
    },

    /// A token value that is syntactically valid but semantically unusable
    #[error("Invalid value for {token} at position {position}: {reason}")]
    InvalidTokenValue {
        position: usize,
        token: String,
        reason: String,
    },

    /// X-ENUM lists the same value twice
    #[error("Enumeration syntax '{syntax}' declares the value '{value}' more than once")]
    DuplicateEnumValue {
        syntax: String,
        value: String,
        position: usize,
    },

    /// X-SUBST names the syntax being defined
    #[error("Syntax '{syntax}' cannot substitute itself")]
    SelfSubstitution { syntax: String, position: usize },

    /// X-PATTERN does not compile
    #[error("Syntax '{syntax}' has an invalid pattern '{pattern}': {reason}")]
    InvalidPattern {
        syntax: String,
        pattern: String,
        reason: String,
        position: usize,
    },

    /// Non-whitespace content after the closing parenthesis
    #[error("Unexpected content after the end of the definition at position {position}")]
    TrailingContent { position: usize },
}

impl DecodeError {
    /// The 0-based position within the definition the error refers to.
    pub fn position(&self) -> usize {
        match self {
            Self::UnexpectedEnd { position, .. }
            | Self::UnexpectedCharacter { position, .. }
            | Self::UnexpectedToken { position, .. }
            | Self::IllegalIdentifier { position, .. }
            | Self::MissingToken { position, .. }
            | Self::InvalidTokenValue { position, .. }
            | Self::DuplicateEnumValue { position, .. }
            | Self::SelfSubstitution { position, .. }
            | Self::InvalidPattern { position, .. }
            | Self::TrailingContent { position } => *position,
        }
    }

    pub fn unexpected_end(position: usize, expected: impl Into<String>) -> Self {
        Self::UnexpectedEnd {
            position,
            expected: expected.into(),
        }
    }

    pub fn unexpected_character(position: usize, character: char, expected: impl Into<String>) -> Self {
        Self::UnexpectedCharacter {
            position,
            character,
            expected: expected.into(),
        }
    }

    pub fn illegal_identifier(
        position: usize,
        identifier: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::IllegalIdentifier {
            position,
            identifier: identifier.into(),
            reason: reason.into(),
        }
    }
}

/// Errors raised while assembling or resolving a schema.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// A definition could not be decoded
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    /// An element with the same identifier is already registered
    #[error(
        "Cannot add {kind} '{new_name}' because it conflicts with the existing {kind} '{existing_name}' (identifier {identifier})"
    )]
    Conflict {
        kind: ElementKind,
        identifier: String,
        new_name: String,
        existing_name: String,
    },

    /// Lookup found nothing
    #[error("No {kind} named '{identifier}' exists in the schema")]
    NotFound { kind: ElementKind, identifier: String },

    /// Lookup by name found several candidates
    #[error("The {kind} name '{identifier}' is ambiguous: it matches {candidates:?}")]
    Ambiguous {
        kind: ElementKind,
        identifier: String,
        candidates: Vec<String>,
    },

    /// An element refers to something the schema does not contain
    #[error("The {kind} '{element}' refers to the unknown {reference_kind} '{reference}'")]
    UnresolvedReference {
        kind: ElementKind,
        element: String,
        reference_kind: ElementKind,
        reference: String,
    },

    /// Attribute type and its superior have different usages
    #[error("Attribute type '{attribute_type}' has usage {usage} but its superior '{superior}' has usage {superior_usage}")]
    UsageMismatch {
        attribute_type: String,
        usage: String,
        superior: String,
        superior_usage: String,
    },

    /// Collective flag differs between attribute type and superior
    #[error("Attribute type '{attribute_type}' and its superior '{superior}' disagree on being collective")]
    CollectiveMismatch {
        attribute_type: String,
        superior: String,
    },

    /// Collective attribute types must be user attributes
    #[error("Collective attribute type '{attribute_type}' must have userApplications usage")]
    CollectiveNotUserApplication { attribute_type: String },

    /// NO-USER-MODIFICATION only applies to operational attributes
    #[error("Attribute type '{attribute_type}' is NO-USER-MODIFICATION but has userApplications usage")]
    NoUserModificationUserApplication { attribute_type: String },

    /// Object class derives from a class of an incompatible kind
    #[error("{kind} object class '{object_class}' cannot have the {superior_kind} superior class '{superior}'")]
    InvalidSuperiorKind {
        object_class: String,
        kind: String,
        superior: String,
        superior_kind: String,
    },

    /// Structural class that never reaches 'top'
    #[error("Structural object class '{object_class}' does not derive from 'top'")]
    StructuralNotDerivedFromTop { object_class: String },

    /// An inheritance chain loops back on itself
    #[error("The {kind} '{element}' is part of a circular inheritance chain")]
    CircularInheritance { kind: ElementKind, element: String },

    /// A reference that must be a structural object class is not
    #[error("The {kind} '{element}' refers to object class '{object_class}' which is not structural")]
    NotStructural {
        kind: ElementKind,
        element: String,
        object_class: String,
    },

    /// A DIT content rule lists a non-auxiliary class in AUX
    #[error("DIT content rule '{rule}' lists object class '{object_class}' as auxiliary but it is not")]
    NotAuxiliary { rule: String, object_class: String },

    /// A DIT content rule prohibits an attribute some class requires
    #[error(
        "DIT content rule '{rule}' prohibits attribute type '{attribute}' which is required by object class '{object_class}'"
    )]
    ProhibitedAttributeRequired {
        rule: String,
        attribute: String,
        object_class: String,
    },

    /// A name form with no required attributes
    #[error("Name form '{name_form}' must declare at least one required attribute")]
    EmptyRequiredAttributes { name_form: String },

    /// X-SUBST chains loop
    #[error("Syntax '{syntax}' substitutes '{target}' which leads back to itself")]
    CyclicSubstitution { syntax: String, target: String },

    /// Options that cannot be used to build a schema
    #[error("Invalid schema options: {message}")]
    InvalidOptions { message: String },

    /// The directory collaborator failed
    #[error("Schema source error: {0}")]
    Source(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl SchemaError {
    pub fn not_found(kind: ElementKind, identifier: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            identifier: identifier.into(),
        }
    }

    pub fn unresolved(
        kind: ElementKind,
        element: impl Into<String>,
        reference_kind: ElementKind,
        reference: impl Into<String>,
    ) -> Self {
        Self::UnresolvedReference {
            kind,
            element: element.into(),
            reference_kind,
            reference: reference.into(),
        }
    }

    pub fn invalid_options(message: impl Into<String>) -> Self {
        Self::InvalidOptions {
            message: message.into(),
        }
    }

    /// Wrap an error raised by a directory collaborator
    pub fn source_error<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Source(Box::new(error))
    }

    /// True when the error means "nothing by that name", as opposed to a broken schema.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Reasons an attribute value is rejected by a syntax or matching rule.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Zero-length value where the syntax forbids it
    #[error("An empty value is not a valid {syntax}")]
    EmptyValue { syntax: String },

    /// Value is not UTF-8 but the syntax is textual
    #[error("Value is not valid UTF-8 and so is not a valid {syntax}")]
    NotUtf8 { syntax: String },

    /// A character outside the syntax's alphabet
    #[error("Value '{value}' is not a valid {syntax}: illegal character '{character}' at position {position}")]
    IllegalCharacter {
        syntax: String,
        value: String,
        character: char,
        position: usize,
    },

    /// Value ended before the grammar was satisfied
    #[error("Value '{value}' is not a valid {syntax}: it is too short")]
    TooShort { syntax: String, value: String },

    /// A structural problem found at a specific position
    #[error("Value '{value}' is not a valid {syntax}: {reason} (at position {position})")]
    InvalidComponent {
        syntax: String,
        value: String,
        position: usize,
        reason: String,
    },

    /// A structural problem without a single offending position
    #[error("Value '{value}' is not a valid {syntax}: {reason}")]
    InvalidValue {
        syntax: String,
        value: String,
        reason: String,
    },
}

impl ValidationError {
    /// The 0-based position of the offending character, where one exists.
    pub fn position(&self) -> Option<usize> {
        match self {
            Self::IllegalCharacter { position, .. } | Self::InvalidComponent { position, .. } => {
                Some(*position)
            }
            _ => None,
        }
    }

    pub fn empty(syntax: impl Into<String>) -> Self {
        Self::EmptyValue {
            syntax: syntax.into(),
        }
    }

    pub fn illegal_character(
        syntax: impl Into<String>,
        value: impl Into<String>,
        character: char,
        position: usize,
    ) -> Self {
        Self::IllegalCharacter {
            syntax: syntax.into(),
            value: value.into(),
            character,
            position,
        }
    }

    pub fn too_short(syntax: impl Into<String>, value: impl Into<String>) -> Self {
        Self::TooShort {
            syntax: syntax.into(),
            value: value.into(),
        }
    }

    pub fn component(
        syntax: impl Into<String>,
        value: impl Into<String>,
        position: usize,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidComponent {
            syntax: syntax.into(),
            value: value.into(),
            position,
            reason: reason.into(),
        }
    }

    pub fn invalid(
        syntax: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidValue {
            syntax: syntax.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }
}

// Result type aliases for convenience
pub type DecodeResult<T> = Result<T, DecodeError>;
pub type SchemaResult<T> = Result<T, SchemaError>;
pub type ValidationResult<T> = Result<T, ValidationError>;
