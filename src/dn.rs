//! Distinguished names (RFC 4514).
//!
//! This module parses the string form of distinguished names used by the DN
//! and Name And Optional UID syntaxes, and produces the schema-aware
//! normalized form used by `distinguishedNameMatch`.
//!
//! # Examples
//!
//! ```rust
//! use ldap_schema::dn::DistinguishedName;
//!
//! let dn: DistinguishedName = "cn=Babs Jensen+uid=bjensen, o=Example\\, Inc".parse().unwrap();
//! assert_eq!(dn.len(), 2);
//! assert_eq!(dn.rdns()[0].avas().len(), 2);
//! assert_eq!(dn.rdns()[1].avas()[0].value(), b"Example, Inc");
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::{ValidationError, ValidationResult};
use crate::schema::Schema;
use crate::schema::reader::check_descr;

const SYNTAX: &str = "DN";

/// A single `type=value` pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AttributeValueAssertion {
    attribute_type: String,
    value: Vec<u8>,
}

impl AttributeValueAssertion {
    pub fn new(attribute_type: impl Into<String>, value: impl Into<Vec<u8>>) -> Self {
        Self {
            attribute_type: attribute_type.into(),
            value: value.into(),
        }
    }

    /// The attribute type as written: a descriptor or numeric OID.
    pub fn attribute_type(&self) -> &str {
        &self.attribute_type
    }

    /// The unescaped value.
    pub fn value(&self) -> &[u8] {
        &self.value
    }

    /// Normalize the value with the attribute type's equality rule.
    ///
    /// Attribute types the schema does not know are compared by their
    /// lowercased name and a case-folded value.
    fn normalize(&self, schema: &Schema) -> ValidationResult<(String, Vec<u8>)> {
        let Ok(attribute_type) = schema.get_attribute_type(&self.attribute_type) else {
            let folded = String::from_utf8_lossy(&self.value).to_lowercase();
            return Ok((
                self.attribute_type.to_ascii_lowercase(),
                folded.split_whitespace().collect::<Vec<_>>().join(" ").into_bytes(),
            ));
        };
        let value = match schema.equality_matching_rule_of(attribute_type) {
            Some(rule) => rule.normalize_attribute_value(schema, &self.value)?,
            None => self.value.clone(),
        };
        Ok((attribute_type.oid().to_string(), value))
    }
}

impl fmt::Display for AttributeValueAssertion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}=", self.attribute_type)?;
        write_escaped(f, &self.value)
    }
}

/// One or more AVAs joined with `+`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RelativeDistinguishedName {
    avas: Vec<AttributeValueAssertion>,
}

impl RelativeDistinguishedName {
    pub fn new(avas: Vec<AttributeValueAssertion>) -> Self {
        Self { avas }
    }

    pub fn avas(&self) -> &[AttributeValueAssertion] {
        &self.avas
    }

    /// Whether any AVA of this RDN uses `attribute_type` (case-insensitive).
    pub fn has_attribute_type(&self, attribute_type: &str) -> bool {
        self.avas
            .iter()
            .any(|ava| ava.attribute_type.eq_ignore_ascii_case(attribute_type))
    }
}

impl fmt::Display for RelativeDistinguishedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, ava) in self.avas.iter().enumerate() {
            if i > 0 {
                f.write_str("+")?;
            }
            write!(f, "{ava}")?;
        }
        Ok(())
    }
}

/// A parsed distinguished name, most specific RDN first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DistinguishedName {
    rdns: Vec<RelativeDistinguishedName>,
}

impl DistinguishedName {
    /// The root DSE name.
    pub fn root() -> Self {
        Self::default()
    }

    /// Parse the RFC 4514 string form.
    ///
    /// Accepts `,` and `;` as RDN separators, whitespace around separators and
    /// `=`, backslash escapes (`\,` and `\2C` alike), `#`-prefixed hex values and
    /// legacy double-quoted values.
    pub fn parse(text: &str) -> ValidationResult<Self> {
        DnParser::new(text).parse()
    }

    pub fn rdns(&self) -> &[RelativeDistinguishedName] {
        &self.rdns
    }

    pub fn len(&self) -> usize {
        self.rdns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rdns.is_empty()
    }

    /// The most specific RDN.
    pub fn rdn(&self) -> Option<&RelativeDistinguishedName> {
        self.rdns.first()
    }

    /// The DN with its most specific RDN removed.
    pub fn parent(&self) -> Option<DistinguishedName> {
        (!self.rdns.is_empty()).then(|| Self {
            rdns: self.rdns[1..].to_vec(),
        })
    }

    /// Canonical bytes for equality matching.
    ///
    /// Attribute types become numeric OIDs, values are normalized with the
    /// attribute type's equality rule, and AVAs within an RDN are sorted so that
    /// `a=1+b=2` and `b=2+a=1` compare equal.
    pub fn normalize(&self, schema: &Schema) -> ValidationResult<Vec<u8>> {
        let mut normalized = Vec::new();
        for (i, rdn) in self.rdns.iter().enumerate() {
            if i > 0 {
                normalized.push(b',');
            }
            let mut avas = rdn
                .avas
                .iter()
                .map(|ava| ava.normalize(schema))
                .collect::<ValidationResult<Vec<_>>>()?;
            avas.sort();
            for (j, (attribute_type, value)) in avas.iter().enumerate() {
                if j > 0 {
                    normalized.push(b'+');
                }
                normalized.extend_from_slice(attribute_type.as_bytes());
                normalized.push(b'=');
                for &b in value {
                    if matches!(b, b',' | b'+' | b'=' | b'\\') || !(0x20..0x7f).contains(&b) {
                        normalized.extend_from_slice(format!("\\{b:02x}").as_bytes());
                    } else {
                        normalized.push(b);
                    }
                }
            }
        }
        Ok(normalized)
    }
}

impl FromStr for DistinguishedName {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for DistinguishedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, rdn) in self.rdns.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{rdn}")?;
        }
        Ok(())
    }
}

fn write_escaped(f: &mut fmt::Formatter<'_>, value: &[u8]) -> fmt::Result {
    let text = String::from_utf8_lossy(value);
    let last = text.chars().count().saturating_sub(1);
    for (i, c) in text.chars().enumerate() {
        let escape = matches!(c, ',' | '+' | '"' | '\\' | '<' | '>' | ';' | '=')
            || (i == 0 && matches!(c, ' ' | '#'))
            || (i == last && c == ' ');
        if escape {
            f.write_str("\\")?;
        }
        write!(f, "{c}")?;
    }
    Ok(())
}

struct DnParser<'a> {
    text: &'a str,
    position: usize,
}

impl<'a> DnParser<'a> {
    fn new(text: &'a str) -> Self {
        Self { text, position: 0 }
    }

    fn peek(&self) -> Option<char> {
        self.text[self.position..].chars().next()
    }

    fn skip_spaces(&mut self) {
        while self.peek() == Some(' ') {
            self.position += 1;
        }
    }

    fn error(&self, reason: impl Into<String>) -> ValidationError {
        ValidationError::component(SYNTAX, self.text, self.position, reason)
    }

    fn parse(mut self) -> ValidationResult<DistinguishedName> {
        self.skip_spaces();
        let mut rdns = Vec::new();
        if self.peek().is_none() {
            return Ok(DistinguishedName { rdns });
        }
        loop {
            rdns.push(self.rdn()?);
            self.skip_spaces();
            match self.peek() {
                None => return Ok(DistinguishedName { rdns }),
                Some(',' | ';') => {
                    self.position += 1;
                    self.skip_spaces();
                }
                Some(c) => {
                    return Err(ValidationError::illegal_character(
                        SYNTAX,
                        self.text,
                        c,
                        self.position,
                    ));
                }
            }
        }
    }

    fn rdn(&mut self) -> ValidationResult<RelativeDistinguishedName> {
        let mut avas = vec![self.ava()?];
        loop {
            self.skip_spaces();
            if self.peek() != Some('+') {
                return Ok(RelativeDistinguishedName { avas });
            }
            self.position += 1;
            self.skip_spaces();
            avas.push(self.ava()?);
        }
    }

    fn ava(&mut self) -> ValidationResult<AttributeValueAssertion> {
        let attribute_type = self.attribute_type()?;
        self.skip_spaces();
        match self.peek() {
            Some('=') => self.position += 1,
            None => return Err(ValidationError::too_short(SYNTAX, self.text)),
            Some(_) => return Err(self.error("expected '=' after the attribute type")),
        }
        self.skip_spaces();
        let value = match self.peek() {
            Some('#') => self.hex_value()?,
            Some('"') => self.quoted_value()?,
            _ => self.string_value()?,
        };
        Ok(AttributeValueAssertion {
            attribute_type,
            value,
        })
    }

    fn attribute_type(&mut self) -> ValidationResult<String> {
        let start = self.position;
        while matches!(self.peek(), Some(c) if c.is_ascii_alphanumeric() || c == '-' || c == '.' || c == '_')
        {
            self.position += 1;
        }
        let word = &self.text[start..self.position];
        if word.is_empty() {
            return match self.peek() {
                None => Err(ValidationError::too_short(SYNTAX, self.text)),
                Some(_) => Err(self.error("expected an attribute type")),
            };
        }
        let word = if word.len() > 4 && word[..4].eq_ignore_ascii_case("oid.") {
            &word[4..]
        } else {
            word
        };
        let valid = if word.starts_with(|c: char| c.is_ascii_digit()) {
            crate::schema::reader::is_numeric_oid(word)
        } else {
            check_descr(word).is_ok()
        };
        if !valid {
            return Err(ValidationError::component(
                SYNTAX,
                self.text,
                start,
                format!("invalid attribute type '{word}'"),
            ));
        }
        Ok(word.to_string())
    }

    fn hex_value(&mut self) -> ValidationResult<Vec<u8>> {
        self.position += 1;
        let mut bytes = Vec::new();
        while matches!(self.peek(), Some(c) if c.is_ascii_hexdigit()) {
            let pair = self.text.get(self.position..self.position + 2).unwrap_or("");
            let byte = u8::from_str_radix(pair, 16).map_err(|_| self.error("odd number of hex digits"))?;
            bytes.push(byte);
            self.position += 2;
        }
        if bytes.is_empty() {
            return Err(self.error("expected hex digits after '#'"));
        }
        Ok(bytes)
    }

    fn quoted_value(&mut self) -> ValidationResult<Vec<u8>> {
        self.position += 1;
        let mut bytes = Vec::new();
        loop {
            match self.peek() {
                None => return Err(self.error("missing closing quote")),
                Some('"') => {
                    self.position += 1;
                    return Ok(bytes);
                }
                Some('\\') => self.escape(&mut bytes)?,
                Some(c) => {
                    let mut buffer = [0; 4];
                    bytes.extend_from_slice(c.encode_utf8(&mut buffer).as_bytes());
                    self.position += c.len_utf8();
                }
            }
        }
    }

    fn string_value(&mut self) -> ValidationResult<Vec<u8>> {
        let mut bytes = Vec::new();
        // Length of `bytes` up to the last character that is not a plain space
        let mut significant = 0;
        loop {
            match self.peek() {
                None | Some(',' | ';' | '+') => break,
                Some('\\') => {
                    self.escape(&mut bytes)?;
                    significant = bytes.len();
                }
                Some('"') => return Err(self.error("quotes must be escaped")),
                Some(c) => {
                    let mut buffer = [0; 4];
                    bytes.extend_from_slice(c.encode_utf8(&mut buffer).as_bytes());
                    self.position += c.len_utf8();
                    if c != ' ' {
                        significant = bytes.len();
                    }
                }
            }
        }
        bytes.truncate(significant);
        Ok(bytes)
    }

    /// `\` followed by a special character or two hex digits.
    fn escape(&mut self, bytes: &mut Vec<u8>) -> ValidationResult<()> {
        let at = self.position;
        self.position += 1;
        match self.peek() {
            None => Err(ValidationError::component(
                SYNTAX,
                self.text,
                at,
                "a backslash must be followed by a character",
            )),
            Some(c) if c.is_ascii_hexdigit() => {
                let pair = self.text.get(self.position..self.position + 2).unwrap_or("");
                match u8::from_str_radix(pair, 16) {
                    Ok(byte) => {
                        bytes.push(byte);
                        self.position += 2;
                        Ok(())
                    }
                    Err(_) => Err(ValidationError::component(
                        SYNTAX,
                        self.text,
                        at,
                        "invalid hex escape",
                    )),
                }
            }
            Some(c) if matches!(c, ',' | '+' | '"' | '\\' | '<' | '>' | ';' | '=' | ' ' | '#') => {
                bytes.push(c as u8);
                self.position += 1;
                Ok(())
            }
            Some(c) => Err(ValidationError::illegal_character(SYNTAX, self.text, c, self.position)),
        }
    }
}
