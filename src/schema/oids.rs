//! Well-known object identifiers used by the core schema.

// Syntaxes (RFC 4517 unless noted)
pub const SYNTAX_ATTRIBUTE_TYPE_DESCRIPTION: &str = "1.3.6.1.4.1.1466.115.121.1.3";
pub const SYNTAX_BINARY: &str = "1.3.6.1.4.1.1466.115.121.1.5";
pub const SYNTAX_BIT_STRING: &str = "1.3.6.1.4.1.1466.115.121.1.6";
pub const SYNTAX_BOOLEAN: &str = "1.3.6.1.4.1.1466.115.121.1.7";
pub const SYNTAX_CERTIFICATE: &str = "1.3.6.1.4.1.1466.115.121.1.8";
pub const SYNTAX_CERTIFICATE_LIST: &str = "1.3.6.1.4.1.1466.115.121.1.9";
pub const SYNTAX_CERTIFICATE_PAIR: &str = "1.3.6.1.4.1.1466.115.121.1.10";
pub const SYNTAX_COUNTRY_STRING: &str = "1.3.6.1.4.1.1466.115.121.1.11";
pub const SYNTAX_DN: &str = "1.3.6.1.4.1.1466.115.121.1.12";
pub const SYNTAX_DELIVERY_METHOD: &str = "1.3.6.1.4.1.1466.115.121.1.14";
pub const SYNTAX_DIRECTORY_STRING: &str = "1.3.6.1.4.1.1466.115.121.1.15";
pub const SYNTAX_DIT_CONTENT_RULE_DESCRIPTION: &str = "1.3.6.1.4.1.1466.115.121.1.16";
pub const SYNTAX_DIT_STRUCTURE_RULE_DESCRIPTION: &str = "1.3.6.1.4.1.1466.115.121.1.17";
pub const SYNTAX_ENHANCED_GUIDE: &str = "1.3.6.1.4.1.1466.115.121.1.21";
pub const SYNTAX_FACSIMILE_TELEPHONE_NUMBER: &str = "1.3.6.1.4.1.1466.115.121.1.22";
pub const SYNTAX_FAX: &str = "1.3.6.1.4.1.1466.115.121.1.23";
pub const SYNTAX_GENERALIZED_TIME: &str = "1.3.6.1.4.1.1466.115.121.1.24";
pub const SYNTAX_GUIDE: &str = "1.3.6.1.4.1.1466.115.121.1.25";
pub const SYNTAX_IA5_STRING: &str = "1.3.6.1.4.1.1466.115.121.1.26";
pub const SYNTAX_INTEGER: &str = "1.3.6.1.4.1.1466.115.121.1.27";
pub const SYNTAX_JPEG: &str = "1.3.6.1.4.1.1466.115.121.1.28";
pub const SYNTAX_MATCHING_RULE_DESCRIPTION: &str = "1.3.6.1.4.1.1466.115.121.1.30";
pub const SYNTAX_MATCHING_RULE_USE_DESCRIPTION: &str = "1.3.6.1.4.1.1466.115.121.1.31";
pub const SYNTAX_NAME_AND_OPTIONAL_UID: &str = "1.3.6.1.4.1.1466.115.121.1.34";
pub const SYNTAX_NAME_FORM_DESCRIPTION: &str = "1.3.6.1.4.1.1466.115.121.1.35";
pub const SYNTAX_NUMERIC_STRING: &str = "1.3.6.1.4.1.1466.115.121.1.36";
pub const SYNTAX_OBJECT_CLASS_DESCRIPTION: &str = "1.3.6.1.4.1.1466.115.121.1.37";
pub const SYNTAX_OID: &str = "1.3.6.1.4.1.1466.115.121.1.38";
pub const SYNTAX_OTHER_MAILBOX: &str = "1.3.6.1.4.1.1466.115.121.1.39";
pub const SYNTAX_OCTET_STRING: &str = "1.3.6.1.4.1.1466.115.121.1.40";
pub const SYNTAX_POSTAL_ADDRESS: &str = "1.3.6.1.4.1.1466.115.121.1.41";
pub const SYNTAX_PROTOCOL_INFORMATION: &str = "1.3.6.1.4.1.1466.115.121.1.42";
pub const SYNTAX_PRESENTATION_ADDRESS: &str = "1.3.6.1.4.1.1466.115.121.1.43";
pub const SYNTAX_PRINTABLE_STRING: &str = "1.3.6.1.4.1.1466.115.121.1.44";
pub const SYNTAX_SUPPORTED_ALGORITHM: &str = "1.3.6.1.4.1.1466.115.121.1.49";
pub const SYNTAX_TELEPHONE_NUMBER: &str = "1.3.6.1.4.1.1466.115.121.1.50";
pub const SYNTAX_TELETEX_TERMINAL_IDENTIFIER: &str = "1.3.6.1.4.1.1466.115.121.1.51";
pub const SYNTAX_TELEX_NUMBER: &str = "1.3.6.1.4.1.1466.115.121.1.52";
pub const SYNTAX_UTC_TIME: &str = "1.3.6.1.4.1.1466.115.121.1.53";
pub const SYNTAX_LDAP_SYNTAX_DESCRIPTION: &str = "1.3.6.1.4.1.1466.115.121.1.54";
pub const SYNTAX_SUBSTRING_ASSERTION: &str = "1.3.6.1.4.1.1466.115.121.1.58";
/// RFC 4530
pub const SYNTAX_UUID: &str = "1.3.6.1.1.16.1";
/// RFC 3112
pub const SYNTAX_AUTH_PASSWORD: &str = "1.3.6.1.4.1.4203.1.1.2";
pub const SYNTAX_USER_PASSWORD: &str = "1.3.6.1.4.1.26027.1.3.1";

// Equality matching rules
pub const EMR_OBJECT_IDENTIFIER: &str = "2.5.13.0";
pub const EMR_DISTINGUISHED_NAME: &str = "2.5.13.1";
pub const EMR_CASE_IGNORE: &str = "2.5.13.2";
pub const EMR_CASE_EXACT: &str = "2.5.13.5";
pub const EMR_NUMERIC_STRING: &str = "2.5.13.8";
pub const EMR_CASE_IGNORE_LIST: &str = "2.5.13.11";
pub const EMR_INTEGER: &str = "2.5.13.14";
pub const EMR_BIT_STRING: &str = "2.5.13.16";
pub const EMR_OCTET_STRING: &str = "2.5.13.17";
pub const EMR_TELEPHONE_NUMBER: &str = "2.5.13.20";
pub const EMR_UNIQUE_MEMBER: &str = "2.5.13.23";
pub const EMR_GENERALIZED_TIME: &str = "2.5.13.27";
pub const EMR_INTEGER_FIRST_COMPONENT: &str = "2.5.13.29";
pub const EMR_OBJECT_IDENTIFIER_FIRST_COMPONENT: &str = "2.5.13.30";
pub const EMR_DIRECTORY_STRING_FIRST_COMPONENT: &str = "2.5.13.31";
pub const EMR_WORD: &str = "2.5.13.32";
pub const EMR_KEYWORD: &str = "2.5.13.33";
pub const EMR_BOOLEAN: &str = "2.5.13.13";
pub const EMR_UTC_TIME: &str = "2.5.13.25";
pub const EMR_PRESENTATION_ADDRESS: &str = "2.5.13.22";
pub const EMR_PROTOCOL_INFORMATION: &str = "2.5.13.24";
pub const EMR_CASE_EXACT_IA5: &str = "1.3.6.1.4.1.1466.109.114.1";
pub const EMR_CASE_IGNORE_IA5: &str = "1.3.6.1.4.1.1466.109.114.2";
pub const EMR_UUID: &str = "1.3.6.1.1.16.2";
pub const EMR_AUTH_PASSWORD_EXACT: &str = "1.3.6.1.4.1.4203.1.2.2";
pub const EMR_USER_PASSWORD_EXACT: &str = "1.3.6.1.4.1.26027.1.4.2";

// Ordering matching rules
pub const OMR_CASE_IGNORE: &str = "2.5.13.3";
pub const OMR_CASE_EXACT: &str = "2.5.13.6";
pub const OMR_NUMERIC_STRING: &str = "2.5.13.9";
pub const OMR_INTEGER: &str = "2.5.13.15";
pub const OMR_OCTET_STRING: &str = "2.5.13.18";
pub const OMR_GENERALIZED_TIME: &str = "2.5.13.28";
pub const OMR_UTC_TIME: &str = "2.5.13.26";
pub const OMR_UUID: &str = "1.3.6.1.1.16.3";
/// Prefix of the generated ordering rules paired with X-ENUM syntaxes
pub const OMR_GENERIC_ENUM: &str = "1.3.6.1.4.1.26027.1.4.3";
pub const OMR_GENERIC_ENUM_NAME: &str = "enumOrderingMatch";

// Substring matching rules
pub const SMR_CASE_IGNORE: &str = "2.5.13.4";
pub const SMR_CASE_EXACT: &str = "2.5.13.7";
pub const SMR_NUMERIC_STRING: &str = "2.5.13.10";
pub const SMR_CASE_IGNORE_LIST: &str = "2.5.13.12";
pub const SMR_TELEPHONE_NUMBER: &str = "2.5.13.21";
pub const SMR_OCTET_STRING: &str = "2.5.13.19";
pub const SMR_CASE_IGNORE_IA5: &str = "1.3.6.1.4.1.1466.109.114.3";

// Approximate matching rules
pub const AMR_DOUBLE_METAPHONE: &str = "1.3.6.1.4.1.26027.1.4.1";

// Object classes referenced by resolution rules
pub const OC_TOP: &str = "2.5.6.0";
pub const OC_TOP_NAME: &str = "top";
pub const OC_EXTENSIBLE_OBJECT: &str = "1.3.6.1.4.1.1466.101.120.111";
