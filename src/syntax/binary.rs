//! Binary and opaque syntaxes.

use super::{SyntaxImpl, as_utf8};
use crate::error::{ValidationError, ValidationResult};
use crate::schema::Schema;
use crate::schema::oids::*;

/// Check that `value` is exactly one DER-encoded SEQUENCE.
fn check_der_sequence(syntax: &str, value: &[u8]) -> ValidationResult<()> {
    let describe = || format!("{} bytes", value.len());
    let Some((&tag, rest)) = value.split_first() else {
        return Err(ValidationError::empty(syntax));
    };
    if tag != 0x30 {
        return Err(ValidationError::invalid(
            syntax,
            describe(),
            format!("expected a SEQUENCE tag 0x30 but found 0x{tag:02x}"),
        ));
    }
    let Some((&first, rest)) = rest.split_first() else {
        return Err(ValidationError::too_short(syntax, describe()));
    };
    let (length, content) = if first & 0x80 == 0 {
        (usize::from(first), rest)
    } else {
        let count = usize::from(first & 0x7f);
        if count == 0 || count > std::mem::size_of::<usize>() || rest.len() < count {
            return Err(ValidationError::invalid(syntax, describe(), "invalid length encoding"));
        }
        let length = rest[..count]
            .iter()
            .fold(0usize, |acc, &b| (acc << 8) | usize::from(b));
        (length, &rest[count..])
    };
    if content.len() != length {
        return Err(ValidationError::invalid(
            syntax,
            describe(),
            format!("the encoded length {length} does not match the {} content bytes", content.len()),
        ));
    }
    Ok(())
}

macro_rules! opaque_syntax {
    ($(#[$doc:meta])* $type:ident, $name:literal, human_readable: $readable:expr, ber: $ber:expr, substring: $substring:expr) => {
        $(#[$doc])*
        #[derive(Debug, Default, Clone, Copy)]
        pub struct $type;

        impl $type {
            const NAME: &'static str = $name;
        }

        impl SyntaxImpl for $type {
            fn name(&self) -> &str {
                Self::NAME
            }

            fn is_human_readable(&self) -> bool {
                $readable
            }

            fn is_ber_encoding_required(&self) -> bool {
                $ber
            }

            fn equality_matching_rule(&self) -> Option<&str> {
                Some(EMR_OCTET_STRING)
            }

            fn ordering_matching_rule(&self) -> Option<&str> {
                Some(OMR_OCTET_STRING)
            }

            fn substring_matching_rule(&self) -> Option<&str> {
                $substring
            }

            fn value_is_acceptable(&self, _schema: &Schema, value: &[u8]) -> ValidationResult<()> {
                self.check(value)
            }
        }
    };
}

opaque_syntax!(
    /// Any sequence of bytes.
    OctetStringSyntax, "Octet String", human_readable: true, ber: false, substring: Some(SMR_OCTET_STRING)
);

impl OctetStringSyntax {
    fn check(&self, _value: &[u8]) -> ValidationResult<()> {
        Ok(())
    }
}

opaque_syntax!(
    /// Deprecated RFC 2252 Binary syntax.
    BinarySyntax, "Binary", human_readable: false, ber: false, substring: None
);

impl BinarySyntax {
    fn check(&self, _value: &[u8]) -> ValidationResult<()> {
        Ok(())
    }
}

opaque_syntax!(
    /// G3 facsimile image.
    FaxSyntax, "Fax", human_readable: false, ber: false, substring: None
);

impl FaxSyntax {
    fn check(&self, value: &[u8]) -> ValidationResult<()> {
        if value.is_empty() {
            return Err(ValidationError::empty(Self::NAME));
        }
        Ok(())
    }
}

opaque_syntax!(
    /// JFIF image: must start with the JPEG start-of-image marker.
    JpegSyntax, "JPEG", human_readable: false, ber: false, substring: None
);

impl JpegSyntax {
    fn check(&self, value: &[u8]) -> ValidationResult<()> {
        if !value.starts_with(&[0xff, 0xd8, 0xff]) {
            return Err(ValidationError::invalid(
                Self::NAME,
                format!("{} bytes", value.len()),
                "missing the start-of-image marker",
            ));
        }
        Ok(())
    }
}

opaque_syntax!(
    /// X.509 certificate (DER).
    CertificateSyntax, "Certificate", human_readable: false, ber: true, substring: None
);

impl CertificateSyntax {
    fn check(&self, value: &[u8]) -> ValidationResult<()> {
        check_der_sequence(Self::NAME, value)
    }
}

opaque_syntax!(
    /// X.509 certificate revocation list (DER).
    CertificateListSyntax, "Certificate List", human_readable: false, ber: true, substring: None
);

impl CertificateListSyntax {
    fn check(&self, value: &[u8]) -> ValidationResult<()> {
        check_der_sequence(Self::NAME, value)
    }
}

opaque_syntax!(
    /// X.509 cross-certificate pair (DER).
    CertificatePairSyntax, "Certificate Pair", human_readable: false, ber: true, substring: None
);

impl CertificatePairSyntax {
    fn check(&self, value: &[u8]) -> ValidationResult<()> {
        check_der_sequence(Self::NAME, value)
    }
}

opaque_syntax!(
    /// X.509 supported algorithm (DER).
    SupportedAlgorithmSyntax, "Supported Algorithm", human_readable: false, ber: true, substring: None
);

impl SupportedAlgorithmSyntax {
    fn check(&self, value: &[u8]) -> ValidationResult<()> {
        check_der_sequence(Self::NAME, value)
    }
}

/// RFC 1278 Presentation Address, accepted as free text.
#[derive(Debug, Default, Clone, Copy)]
pub struct PresentationAddressSyntax;

impl SyntaxImpl for PresentationAddressSyntax {
    fn name(&self) -> &str {
        "Presentation Address"
    }

    fn equality_matching_rule(&self) -> Option<&str> {
        Some(EMR_PRESENTATION_ADDRESS)
    }

    fn value_is_acceptable(&self, _schema: &Schema, value: &[u8]) -> ValidationResult<()> {
        if as_utf8(self.name(), value)?.is_empty() {
            return Err(ValidationError::empty(self.name()));
        }
        Ok(())
    }
}

/// Protocol Information, accepted as free text.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProtocolInformationSyntax;

impl SyntaxImpl for ProtocolInformationSyntax {
    fn name(&self) -> &str {
        "Protocol Information"
    }

    fn equality_matching_rule(&self) -> Option<&str> {
        Some(EMR_PROTOCOL_INFORMATION)
    }

    fn value_is_acceptable(&self, _schema: &Schema, value: &[u8]) -> ValidationResult<()> {
        if as_utf8(self.name(), value)?.is_empty() {
            return Err(ValidationError::empty(self.name()));
        }
        Ok(())
    }
}
