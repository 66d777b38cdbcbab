//! Test fixtures: RFC example definitions and attribute values.

/// Definitions quoted from RFC 4512 and RFC 4519
pub mod rfc_examples {
    pub const CN_ATTRIBUTE_TYPE: &str = "( 2.5.4.3 NAME 'cn' SUP name )";

    pub const NAME_ATTRIBUTE_TYPE: &str = "( 2.5.4.41 NAME 'name' EQUALITY caseIgnoreMatch \
         SUBSTR caseIgnoreSubstringsMatch SYNTAX 1.3.6.1.4.1.1466.115.121.1.15{32768} )";

    pub const CREATE_TIMESTAMP: &str = "( 2.5.18.1 NAME 'createTimestamp' \
         EQUALITY generalizedTimeMatch ORDERING generalizedTimeOrderingMatch \
         SYNTAX 1.3.6.1.4.1.1466.115.121.1.24 SINGLE-VALUE NO-USER-MODIFICATION \
         USAGE directoryOperation )";

    pub const PERSON_OBJECT_CLASS: &str = "( 2.5.6.6 NAME 'person' SUP top STRUCTURAL \
         MUST ( sn $ cn ) MAY ( userPassword $ telephoneNumber $ seeAlso $ description ) )";

    pub const EXTENSIBLE_OBJECT: &str =
        "( 1.3.6.1.4.1.1466.101.120.111 NAME 'extensibleObject' SUP top AUXILIARY )";

    pub const CASE_IGNORE_MATCH: &str =
        "( 2.5.13.2 NAME 'caseIgnoreMatch' SYNTAX 1.3.6.1.4.1.1466.115.121.1.15 )";

    pub const DIRECTORY_STRING_SYNTAX: &str =
        "( 1.3.6.1.4.1.1466.115.121.1.15 DESC 'Directory String' )";

    pub const UID_NAME_FORM: &str =
        "( 1.3.6.1.4.1.99999.3.1 NAME 'uidNameForm' OC inetOrgPerson MUST uid )";

    pub const STRUCTURE_RULE: &str = "( 1 NAME 'personRule' FORM uidNameForm )";

    pub const CONTENT_RULE: &str = "( 2.5.6.6 NAME 'personContent' AUX uidObject \
         MUST telephoneNumber MAY description NOT seeAlso )";

    pub const MATCHING_RULE_USE: &str =
        "( 2.5.13.2 NAME 'caseIgnoreUse' APPLIES ( cn $ sn $ description ) )";
}

/// Values used by the validation suites
pub mod values {
    pub const UUID: &str = "f47ac10b-58cc-4372-a567-0e02b2c3d479";

    /// The UUID with its ninth character changed from `-` to `x`
    pub fn broken_uuid() -> String {
        let mut value = UUID.to_string();
        value.replace_range(8..9, "x");
        value
    }

    pub const VALID_UTC_TIMES: &[&str] = &[
        "9912312359Z",
        "991231235959Z",
        "0001010000Z",
        "9912312359+1030",
        "9912312359-05",
    ];

    pub const INVALID_UTC_TIMES: &[&str] = &[
        "",
        "99123123",
        "9913312359Z",
        "9912322359Z",
        "9912312459Z",
        "9912312360Z",
        "9912312359",
        "9912312359+24",
    ];

    pub const VALID_GENERALIZED_TIMES: &[&str] = &[
        "2024022910Z",
        "202402291030Z",
        "20240229103059Z",
        "20240229103059.123Z",
        "20240229103060Z",
        "2024022910,5-0800",
    ];

    pub const INVALID_GENERALIZED_TIMES: &[&str] = &[
        "2024",
        "20241301000000Z",
        "20240100000000Z",
        "20240229103059.Z",
        "20240229103059",
        "20240229103059+1",
    ];

    pub const VALID_GUIDES: &[&str] = &[
        "(cn$eq)",
        "cn$EQ&sn$substr",
        "!(cn$eq|sn$approx)&?true",
        "person#(cn$eq)",
    ];

    pub const INVALID_GUIDES: &[&str] = &["(cn$eq|)", "cn$bogus", "(cn$eq", "nosuchclass#cn$eq"];
}
