//! The core schema: standard syntaxes, matching rules, attribute types and
//! object classes every directory understands.

use std::sync::Arc;

use crate::error::{ElementKind, SchemaResult};
use crate::matching::{
    BitStringEqualityMatchingRule, BooleanEqualityMatchingRule,
    DistinguishedNameEqualityMatchingRule, DoubleMetaphoneApproximateMatchingRule,
    FirstComponent, FirstComponentEqualityMatchingRule, GeneralizedTimeMatchingRule,
    IntegerMatchingRule, MatchingRuleImpl, ObjectIdentifierEqualityMatchingRule,
    OctetStringMatchingRule, RuleUsage, StringFlavor, StringMatchingRule,
    UniqueMemberEqualityMatchingRule, UuidMatchingRule, WordMatchingRule,
};
use crate::schema::builder::SchemaBuilder;
use crate::schema::elements::{MatchingRule, Syntax};
use crate::schema::embedded::{
    core_object_classes, operational_attribute_types, user_attribute_types,
};
use crate::schema::oids::*;
use crate::schema::registry::Schema;
use crate::schema::types::X_ORIGIN;
use crate::syntax::SyntaxImpl;
use crate::syntax::binary::{
    BinarySyntax, CertificateListSyntax, CertificatePairSyntax, CertificateSyntax, FaxSyntax,
    JpegSyntax, OctetStringSyntax, PresentationAddressSyntax, ProtocolInformationSyntax,
    SupportedAlgorithmSyntax,
};
use crate::syntax::definitions::DefinitionSyntax;
use crate::syntax::guide::{EnhancedGuideSyntax, GuideSyntax};
use crate::syntax::identifiers::{
    DistinguishedNameSyntax, NameAndOptionalUidSyntax, SubstringAssertionSyntax, UuidSyntax,
};
use crate::syntax::passwords::{AuthPasswordSyntax, UserPasswordSyntax};
use crate::syntax::postal::{DeliveryMethodSyntax, OtherMailboxSyntax, PostalAddressSyntax};
use crate::syntax::strings::{
    BitStringSyntax, BooleanSyntax, CountryStringSyntax, DirectoryStringSyntax,
    Ia5StringSyntax, IntegerSyntax, NumericStringSyntax, OidSyntax, PrintableStringSyntax,
};
use crate::syntax::telephone::{
    FacsimileTelephoneNumberSyntax, TelephoneNumberSyntax, TeletexTerminalIdentifierSyntax,
    TelexNumberSyntax,
};
use crate::syntax::time::{GeneralizedTimeSyntax, UtcTimeSyntax};

/// Name of the core schema snapshot.
pub const CORE_SCHEMA_NAME: &str = "Core Schema";

fn syntax(oid: &str, description: &str, origin: &str, implementation: Arc<dyn SyntaxImpl>) -> Syntax {
    Syntax::new(oid)
        .with_description(description)
        .with_extension(X_ORIGIN, [origin])
        .with_implementation(implementation)
}

fn rule(
    oid: &str,
    name: &str,
    syntax: &str,
    origin: &str,
    implementation: Arc<dyn MatchingRuleImpl>,
) -> MatchingRule {
    MatchingRule::new(oid, syntax)
        .with_name(name)
        .with_extension(X_ORIGIN, [origin])
        .with_implementation(implementation)
}

fn core_syntaxes() -> Vec<Syntax> {
    let rfc = "RFC 4517";
    vec![
        syntax(
            SYNTAX_ATTRIBUTE_TYPE_DESCRIPTION,
            "Attribute Type Description",
            rfc,
            Arc::new(DefinitionSyntax::new(ElementKind::AttributeType)),
        ),
        syntax(SYNTAX_BINARY, "Binary", rfc, Arc::new(BinarySyntax)),
        syntax(SYNTAX_BIT_STRING, "Bit String", rfc, Arc::new(BitStringSyntax)),
        syntax(SYNTAX_BOOLEAN, "Boolean", rfc, Arc::new(BooleanSyntax)),
        syntax(SYNTAX_CERTIFICATE, "Certificate", "RFC 4523", Arc::new(CertificateSyntax)),
        syntax(
            SYNTAX_CERTIFICATE_LIST,
            "Certificate List",
            "RFC 4523",
            Arc::new(CertificateListSyntax),
        ),
        syntax(
            SYNTAX_CERTIFICATE_PAIR,
            "Certificate Pair",
            "RFC 4523",
            Arc::new(CertificatePairSyntax),
        ),
        syntax(SYNTAX_COUNTRY_STRING, "Country String", rfc, Arc::new(CountryStringSyntax)),
        syntax(SYNTAX_DN, "DN", rfc, Arc::new(DistinguishedNameSyntax)),
        syntax(SYNTAX_DELIVERY_METHOD, "Delivery Method", rfc, Arc::new(DeliveryMethodSyntax)),
        syntax(
            SYNTAX_DIRECTORY_STRING,
            "Directory String",
            rfc,
            Arc::new(DirectoryStringSyntax),
        ),
        syntax(
            SYNTAX_DIT_CONTENT_RULE_DESCRIPTION,
            "DIT Content Rule Description",
            rfc,
            Arc::new(DefinitionSyntax::new(ElementKind::DitContentRule)),
        ),
        syntax(
            SYNTAX_DIT_STRUCTURE_RULE_DESCRIPTION,
            "DIT Structure Rule Description",
            rfc,
            Arc::new(DefinitionSyntax::new(ElementKind::DitStructureRule)),
        ),
        syntax(SYNTAX_ENHANCED_GUIDE, "Enhanced Guide", rfc, Arc::new(EnhancedGuideSyntax)),
        syntax(
            SYNTAX_FACSIMILE_TELEPHONE_NUMBER,
            "Facsimile Telephone Number",
            rfc,
            Arc::new(FacsimileTelephoneNumberSyntax),
        ),
        syntax(SYNTAX_FAX, "Fax", rfc, Arc::new(FaxSyntax)),
        syntax(
            SYNTAX_GENERALIZED_TIME,
            "Generalized Time",
            rfc,
            Arc::new(GeneralizedTimeSyntax),
        ),
        syntax(SYNTAX_GUIDE, "Guide", rfc, Arc::new(GuideSyntax)),
        syntax(SYNTAX_IA5_STRING, "IA5 String", rfc, Arc::new(Ia5StringSyntax)),
        syntax(SYNTAX_INTEGER, "INTEGER", rfc, Arc::new(IntegerSyntax)),
        syntax(SYNTAX_JPEG, "JPEG", rfc, Arc::new(JpegSyntax)),
        syntax(
            SYNTAX_MATCHING_RULE_DESCRIPTION,
            "Matching Rule Description",
            rfc,
            Arc::new(DefinitionSyntax::new(ElementKind::MatchingRule)),
        ),
        syntax(
            SYNTAX_MATCHING_RULE_USE_DESCRIPTION,
            "Matching Rule Use Description",
            rfc,
            Arc::new(DefinitionSyntax::new(ElementKind::MatchingRuleUse)),
        ),
        syntax(
            SYNTAX_NAME_AND_OPTIONAL_UID,
            "Name And Optional UID",
            rfc,
            Arc::new(NameAndOptionalUidSyntax),
        ),
        syntax(
            SYNTAX_NAME_FORM_DESCRIPTION,
            "Name Form Description",
            rfc,
            Arc::new(DefinitionSyntax::new(ElementKind::NameForm)),
        ),
        syntax(SYNTAX_NUMERIC_STRING, "Numeric String", rfc, Arc::new(NumericStringSyntax)),
        syntax(
            SYNTAX_OBJECT_CLASS_DESCRIPTION,
            "Object Class Description",
            rfc,
            Arc::new(DefinitionSyntax::new(ElementKind::ObjectClass)),
        ),
        syntax(SYNTAX_OID, "OID", rfc, Arc::new(OidSyntax)),
        syntax(SYNTAX_OTHER_MAILBOX, "Other Mailbox", rfc, Arc::new(OtherMailboxSyntax)),
        syntax(SYNTAX_OCTET_STRING, "Octet String", rfc, Arc::new(OctetStringSyntax)),
        syntax(SYNTAX_POSTAL_ADDRESS, "Postal Address", rfc, Arc::new(PostalAddressSyntax)),
        syntax(
            SYNTAX_PROTOCOL_INFORMATION,
            "Protocol Information",
            "RFC 2252",
            Arc::new(ProtocolInformationSyntax),
        ),
        syntax(
            SYNTAX_PRESENTATION_ADDRESS,
            "Presentation Address",
            "RFC 2252",
            Arc::new(PresentationAddressSyntax),
        ),
        syntax(
            SYNTAX_PRINTABLE_STRING,
            "Printable String",
            rfc,
            Arc::new(PrintableStringSyntax),
        ),
        syntax(
            SYNTAX_SUPPORTED_ALGORITHM,
            "Supported Algorithm",
            "RFC 4523",
            Arc::new(SupportedAlgorithmSyntax),
        ),
        syntax(
            SYNTAX_TELEPHONE_NUMBER,
            "Telephone Number",
            rfc,
            Arc::new(TelephoneNumberSyntax),
        ),
        syntax(
            SYNTAX_TELETEX_TERMINAL_IDENTIFIER,
            "Teletex Terminal Identifier",
            rfc,
            Arc::new(TeletexTerminalIdentifierSyntax),
        ),
        syntax(SYNTAX_TELEX_NUMBER, "Telex Number", rfc, Arc::new(TelexNumberSyntax)),
        syntax(SYNTAX_UTC_TIME, "UTC Time", "RFC 2252", Arc::new(UtcTimeSyntax)),
        syntax(
            SYNTAX_LDAP_SYNTAX_DESCRIPTION,
            "LDAP Syntax Description",
            rfc,
            Arc::new(DefinitionSyntax::new(ElementKind::Syntax)),
        ),
        syntax(
            SYNTAX_SUBSTRING_ASSERTION,
            "Substring Assertion",
            rfc,
            Arc::new(SubstringAssertionSyntax),
        ),
        syntax(SYNTAX_UUID, "UUID", "RFC 4530", Arc::new(UuidSyntax)),
        syntax(
            SYNTAX_AUTH_PASSWORD,
            "Authentication Password Syntax",
            "RFC 3112",
            Arc::new(AuthPasswordSyntax),
        ),
        syntax(
            SYNTAX_USER_PASSWORD,
            "User Password Syntax",
            "RFC 3112",
            Arc::new(UserPasswordSyntax),
        ),
    ]
}

fn string_rule(flavor: StringFlavor, usage: RuleUsage) -> Arc<dyn MatchingRuleImpl> {
    Arc::new(StringMatchingRule::new(flavor, usage))
}

fn core_matching_rules() -> Vec<MatchingRule> {
    use RuleUsage::{Equality, Ordering, Substring};
    use StringFlavor::*;

    let rfc = "RFC 4517";
    vec![
        rule(
            EMR_OBJECT_IDENTIFIER,
            "objectIdentifierMatch",
            SYNTAX_OID,
            rfc,
            Arc::new(ObjectIdentifierEqualityMatchingRule),
        ),
        rule(
            EMR_DISTINGUISHED_NAME,
            "distinguishedNameMatch",
            SYNTAX_DN,
            rfc,
            Arc::new(DistinguishedNameEqualityMatchingRule),
        ),
        rule(
            EMR_CASE_IGNORE,
            "caseIgnoreMatch",
            SYNTAX_DIRECTORY_STRING,
            rfc,
            string_rule(CaseIgnore, Equality),
        ),
        rule(
            OMR_CASE_IGNORE,
            "caseIgnoreOrderingMatch",
            SYNTAX_DIRECTORY_STRING,
            rfc,
            string_rule(CaseIgnore, Ordering),
        ),
        rule(
            SMR_CASE_IGNORE,
            "caseIgnoreSubstringsMatch",
            SYNTAX_SUBSTRING_ASSERTION,
            rfc,
            string_rule(CaseIgnore, Substring),
        ),
        rule(
            EMR_CASE_EXACT,
            "caseExactMatch",
            SYNTAX_DIRECTORY_STRING,
            rfc,
            string_rule(CaseExact, Equality),
        ),
        rule(
            OMR_CASE_EXACT,
            "caseExactOrderingMatch",
            SYNTAX_DIRECTORY_STRING,
            rfc,
            string_rule(CaseExact, Ordering),
        ),
        rule(
            SMR_CASE_EXACT,
            "caseExactSubstringsMatch",
            SYNTAX_SUBSTRING_ASSERTION,
            rfc,
            string_rule(CaseExact, Substring),
        ),
        rule(
            EMR_NUMERIC_STRING,
            "numericStringMatch",
            SYNTAX_NUMERIC_STRING,
            rfc,
            string_rule(NumericString, Equality),
        ),
        rule(
            OMR_NUMERIC_STRING,
            "numericStringOrderingMatch",
            SYNTAX_NUMERIC_STRING,
            rfc,
            string_rule(NumericString, Ordering),
        ),
        rule(
            SMR_NUMERIC_STRING,
            "numericStringSubstringsMatch",
            SYNTAX_SUBSTRING_ASSERTION,
            rfc,
            string_rule(NumericString, Substring),
        ),
        rule(
            EMR_CASE_IGNORE_LIST,
            "caseIgnoreListMatch",
            SYNTAX_POSTAL_ADDRESS,
            rfc,
            string_rule(CaseIgnoreList, Equality),
        ),
        rule(
            SMR_CASE_IGNORE_LIST,
            "caseIgnoreListSubstringsMatch",
            SYNTAX_SUBSTRING_ASSERTION,
            rfc,
            string_rule(CaseIgnoreList, Substring),
        ),
        rule(
            EMR_BOOLEAN,
            "booleanMatch",
            SYNTAX_BOOLEAN,
            rfc,
            Arc::new(BooleanEqualityMatchingRule),
        ),
        rule(
            EMR_INTEGER,
            "integerMatch",
            SYNTAX_INTEGER,
            rfc,
            Arc::new(IntegerMatchingRule::new(Equality)),
        ),
        rule(
            OMR_INTEGER,
            "integerOrderingMatch",
            SYNTAX_INTEGER,
            rfc,
            Arc::new(IntegerMatchingRule::new(Ordering)),
        ),
        rule(
            EMR_BIT_STRING,
            "bitStringMatch",
            SYNTAX_BIT_STRING,
            rfc,
            Arc::new(BitStringEqualityMatchingRule),
        ),
        rule(
            EMR_OCTET_STRING,
            "octetStringMatch",
            SYNTAX_OCTET_STRING,
            rfc,
            Arc::new(OctetStringMatchingRule::new(Equality)),
        ),
        rule(
            OMR_OCTET_STRING,
            "octetStringOrderingMatch",
            SYNTAX_OCTET_STRING,
            rfc,
            Arc::new(OctetStringMatchingRule::new(Ordering)),
        ),
        rule(
            SMR_OCTET_STRING,
            "octetStringSubstringsMatch",
            SYNTAX_OCTET_STRING,
            rfc,
            Arc::new(OctetStringMatchingRule::new(Substring)),
        ),
        rule(
            EMR_TELEPHONE_NUMBER,
            "telephoneNumberMatch",
            SYNTAX_TELEPHONE_NUMBER,
            rfc,
            string_rule(TelephoneNumber, Equality),
        ),
        rule(
            SMR_TELEPHONE_NUMBER,
            "telephoneNumberSubstringsMatch",
            SYNTAX_SUBSTRING_ASSERTION,
            rfc,
            string_rule(TelephoneNumber, Substring),
        ),
        rule(
            EMR_PRESENTATION_ADDRESS,
            "presentationAddressMatch",
            SYNTAX_PRESENTATION_ADDRESS,
            "RFC 2252",
            string_rule(CaseIgnore, Equality),
        ),
        rule(
            EMR_UNIQUE_MEMBER,
            "uniqueMemberMatch",
            SYNTAX_NAME_AND_OPTIONAL_UID,
            rfc,
            Arc::new(UniqueMemberEqualityMatchingRule),
        ),
        rule(
            EMR_PROTOCOL_INFORMATION,
            "protocolInformationMatch",
            SYNTAX_PROTOCOL_INFORMATION,
            "RFC 2252",
            string_rule(CaseIgnore, Equality),
        ),
        rule(
            EMR_UTC_TIME,
            "uTCTimeMatch",
            SYNTAX_UTC_TIME,
            "RFC 2252",
            Arc::new(GeneralizedTimeMatchingRule::utc(Equality)),
        ),
        rule(
            OMR_UTC_TIME,
            "uTCTimeOrderingMatch",
            SYNTAX_UTC_TIME,
            "RFC 2252",
            Arc::new(GeneralizedTimeMatchingRule::utc(Ordering)),
        ),
        rule(
            EMR_GENERALIZED_TIME,
            "generalizedTimeMatch",
            SYNTAX_GENERALIZED_TIME,
            rfc,
            Arc::new(GeneralizedTimeMatchingRule::new(Equality)),
        ),
        rule(
            OMR_GENERALIZED_TIME,
            "generalizedTimeOrderingMatch",
            SYNTAX_GENERALIZED_TIME,
            rfc,
            Arc::new(GeneralizedTimeMatchingRule::new(Ordering)),
        ),
        rule(
            EMR_INTEGER_FIRST_COMPONENT,
            "integerFirstComponentMatch",
            SYNTAX_INTEGER,
            rfc,
            Arc::new(FirstComponentEqualityMatchingRule::new(FirstComponent::Integer)),
        ),
        rule(
            EMR_OBJECT_IDENTIFIER_FIRST_COMPONENT,
            "objectIdentifierFirstComponentMatch",
            SYNTAX_OID,
            rfc,
            Arc::new(FirstComponentEqualityMatchingRule::new(
                FirstComponent::ObjectIdentifier,
            )),
        ),
        rule(
            EMR_DIRECTORY_STRING_FIRST_COMPONENT,
            "directoryStringFirstComponentMatch",
            SYNTAX_DIRECTORY_STRING,
            rfc,
            Arc::new(FirstComponentEqualityMatchingRule::new(
                FirstComponent::DirectoryString,
            )),
        ),
        rule(
            EMR_WORD,
            "wordMatch",
            SYNTAX_DIRECTORY_STRING,
            rfc,
            Arc::new(WordMatchingRule::word()),
        ),
        rule(
            EMR_KEYWORD,
            "keywordMatch",
            SYNTAX_DIRECTORY_STRING,
            rfc,
            Arc::new(WordMatchingRule::keyword()),
        ),
        rule(
            EMR_CASE_EXACT_IA5,
            "caseExactIA5Match",
            SYNTAX_IA5_STRING,
            rfc,
            string_rule(CaseExactIa5, Equality),
        ),
        rule(
            EMR_CASE_IGNORE_IA5,
            "caseIgnoreIA5Match",
            SYNTAX_IA5_STRING,
            rfc,
            string_rule(CaseIgnoreIa5, Equality),
        ),
        rule(
            SMR_CASE_IGNORE_IA5,
            "caseIgnoreIA5SubstringsMatch",
            SYNTAX_SUBSTRING_ASSERTION,
            rfc,
            string_rule(CaseIgnoreIa5, Substring),
        ),
        rule(
            EMR_UUID,
            "uuidMatch",
            SYNTAX_UUID,
            "RFC 4530",
            Arc::new(UuidMatchingRule::new(Equality)),
        ),
        rule(
            OMR_UUID,
            "uuidOrderingMatch",
            SYNTAX_UUID,
            "RFC 4530",
            Arc::new(UuidMatchingRule::new(Ordering)),
        ),
        rule(
            AMR_DOUBLE_METAPHONE,
            "ds-mr-double-metaphone-approx",
            SYNTAX_DIRECTORY_STRING,
            "Directory Server",
            Arc::new(DoubleMetaphoneApproximateMatchingRule),
        ),
        rule(
            EMR_AUTH_PASSWORD_EXACT,
            "authPasswordExactMatch",
            SYNTAX_AUTH_PASSWORD,
            "RFC 3112",
            Arc::new(OctetStringMatchingRule::new(Equality)),
        ),
        rule(
            EMR_USER_PASSWORD_EXACT,
            "ds-mr-user-password-exact",
            SYNTAX_USER_PASSWORD,
            "Directory Server",
            Arc::new(OctetStringMatchingRule::new(Equality)),
        ),
    ]
}

/// Build the core schema from scratch.
///
/// Uses a builder without a fallback schema, since this is the schema every
/// other builder falls back to.
pub(crate) fn build_core_schema() -> SchemaResult<Schema> {
    let mut builder = SchemaBuilder::bare(CORE_SCHEMA_NAME);
    for syntax in core_syntaxes() {
        builder.add_syntax(syntax, false)?;
    }
    for rule in core_matching_rules() {
        builder.add_matching_rule(rule, false)?;
    }
    for definition in operational_attribute_types()
        .iter()
        .chain(user_attribute_types())
    {
        builder.add_attribute_type_definition(definition, false)?;
    }
    for definition in core_object_classes() {
        builder.add_object_class_definition(definition, false)?;
    }
    builder.to_schema()
}
