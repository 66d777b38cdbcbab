//! Character-level reader for RFC 4512 schema definitions.
//!
//! Positions are byte offsets from the start of the definition, which equal
//! character offsets for the ASCII text the grammar is written in.

use crate::error::{DecodeError, DecodeResult};

/// Returns `true` for a dotted-decimal OID: digit groups separated by single periods.
pub fn is_numeric_oid(value: &str) -> bool {
    !value.is_empty()
        && value
            .split('.')
            .all(|group| !group.is_empty() && group.bytes().all(|b| b.is_ascii_digit()))
}

/// Checks a descriptor: a letter followed by letters, digits, `-`, `_` or `.`.
///
/// Returns the offset and character of the first offending character.
pub fn check_descr(value: &str) -> Result<(), (usize, char)> {
    let mut chars = value.char_indices();
    match chars.next() {
        None => return Err((0, ' ')),
        Some((_, c)) if c.is_ascii_alphabetic() => {}
        Some((i, c)) => return Err((i, c)),
    }
    for (i, c) in chars {
        if !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')) {
            return Err((i, c));
        }
    }
    Ok(())
}

/// Returns `true` for either a numeric OID or a descriptor.
pub fn is_oid_or_descr(value: &str) -> bool {
    match value.chars().next() {
        Some(c) if c.is_ascii_digit() => is_numeric_oid(value),
        Some(_) => check_descr(value).is_ok(),
        None => false,
    }
}

fn is_token_boundary(c: char) -> bool {
    c.is_whitespace() || matches!(c, '(' | ')' | '\'' | '$')
}

/// Cursor over a single definition string.
#[derive(Debug)]
pub(crate) struct DefinitionReader<'a> {
    input: &'a str,
    position: usize,
}

impl<'a> DefinitionReader<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, position: 0 }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn remaining(&self) -> &'a str {
        &self.input[self.position..]
    }

    pub fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.position += c.len_utf8();
        Some(c)
    }

    pub fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.advance();
        }
    }

    /// Consume `expected` after optional whitespace.
    pub fn expect(&mut self, expected: char) -> DecodeResult<()> {
        self.skip_whitespace();
        match self.advance() {
            Some(c) if c == expected => Ok(()),
            Some(c) => Err(DecodeError::unexpected_character(
                self.position - c.len_utf8(),
                c,
                format!("'{expected}'"),
            )),
            None => Err(DecodeError::unexpected_end(self.position, format!("'{expected}'"))),
        }
    }

    /// Consume `expected` if it is the next non-blank character.
    pub fn consume_if(&mut self, expected: char) -> bool {
        self.skip_whitespace();
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Read the next keyword, or `None` once the closing parenthesis is consumed.
    pub fn read_keyword(&mut self) -> DecodeResult<Option<(usize, &'a str)>> {
        self.skip_whitespace();
        match self.peek() {
            None => Err(DecodeError::unexpected_end(self.position, "a keyword or ')'")),
            Some(')') => {
                self.advance();
                Ok(None)
            }
            Some(c) if is_token_boundary(c) => Err(DecodeError::unexpected_character(
                self.position,
                c,
                "a keyword or ')'",
            )),
            Some(_) => {
                let start = self.position;
                self.read_word();
                Ok(Some((start, &self.input[start..self.position])))
            }
        }
    }

    fn read_word(&mut self) -> &'a str {
        let start = self.position;
        while matches!(self.peek(), Some(c) if !is_token_boundary(c) && c != '{') {
            self.advance();
        }
        &self.input[start..self.position]
    }

    /// Read a strictly numeric OID.
    pub fn read_numeric_oid(&mut self) -> DecodeResult<String> {
        self.skip_whitespace();
        let start = self.position;
        match self.peek() {
            None => return Err(DecodeError::unexpected_end(start, "a numeric OID")),
            Some(c) if !c.is_ascii_digit() => {
                return Err(DecodeError::unexpected_character(start, c, "a numeric OID"));
            }
            Some(_) => {}
        }
        let word = self.read_word();
        self.check_numeric_oid(start, word)?;
        Ok(word.to_string())
    }

    fn check_numeric_oid(&self, start: usize, word: &str) -> DecodeResult<()> {
        let mut previous_dot = true;
        for (i, c) in word.char_indices() {
            match c {
                '.' if previous_dot => {
                    return Err(DecodeError::illegal_identifier(
                        start + i,
                        word,
                        "a period must separate two digit groups",
                    ));
                }
                '.' => previous_dot = true,
                '0'..='9' => previous_dot = false,
                other => {
                    return Err(DecodeError::unexpected_character(
                        start + i,
                        other,
                        "a digit or '.'",
                    ));
                }
            }
        }
        if previous_dot {
            return Err(DecodeError::illegal_identifier(
                start + word.len().saturating_sub(1),
                word,
                "an OID cannot end with a period",
            ));
        }
        Ok(())
    }

    /// Read a numeric OID or a descriptor, optionally wrapped in single quotes.
    pub fn read_oid(&mut self) -> DecodeResult<String> {
        self.skip_whitespace();
        let quoted = self.peek() == Some('\'');
        if quoted {
            self.advance();
        }
        let start = self.position;
        let word = match self.peek() {
            None => return Err(DecodeError::unexpected_end(start, "an OID or name")),
            Some(c) if is_token_boundary(c) => {
                return Err(DecodeError::unexpected_character(start, c, "an OID or name"));
            }
            Some(c) if c.is_ascii_digit() => {
                let word = self.read_word();
                self.check_numeric_oid(start, word)?;
                word
            }
            Some(_) => {
                let word = self.read_word();
                if let Err((offset, c)) = check_descr(word) {
                    return Err(DecodeError::illegal_identifier(
                        start + offset,
                        word,
                        format!("illegal character '{c}' in a descriptor"),
                    ));
                }
                word
            }
        };
        if quoted {
            self.expect_immediate('\'')?;
        }
        Ok(word.to_string())
    }

    fn expect_immediate(&mut self, expected: char) -> DecodeResult<()> {
        match self.advance() {
            Some(c) if c == expected => Ok(()),
            Some(c) => Err(DecodeError::unexpected_character(
                self.position - c.len_utf8(),
                c,
                format!("'{expected}'"),
            )),
            None => Err(DecodeError::unexpected_end(self.position, format!("'{expected}'"))),
        }
    }

    /// Read `oid` or `( oid $ oid ... )`.
    pub fn read_oids(&mut self) -> DecodeResult<Vec<String>> {
        if !self.consume_if('(') {
            return Ok(vec![self.read_oid()?]);
        }
        let mut oids = vec![self.read_oid()?];
        loop {
            self.skip_whitespace();
            match self.advance() {
                Some(')') => return Ok(oids),
                Some('$') => oids.push(self.read_oid()?),
                Some(c) => {
                    return Err(DecodeError::unexpected_character(
                        self.position - c.len_utf8(),
                        c,
                        "'$' or ')'",
                    ));
                }
                None => return Err(DecodeError::unexpected_end(self.position, "'$' or ')'")),
            }
        }
    }

    /// Read a quoted string, decoding the `\27` and `\5C` escapes.
    pub fn read_qdstring(&mut self) -> DecodeResult<String> {
        self.skip_whitespace();
        self.expect_immediate('\'')?;
        let mut value = String::new();
        loop {
            let at = self.position;
            match self.advance() {
                None => return Err(DecodeError::unexpected_end(self.position, "a closing quote")),
                Some('\'') => return Ok(value),
                Some('\\') => {
                    let escape = self.remaining().get(..2).unwrap_or("");
                    if escape.eq_ignore_ascii_case("27") {
                        value.push('\'');
                    } else if escape.eq_ignore_ascii_case("5c") {
                        value.push('\\');
                    } else {
                        return Err(DecodeError::unexpected_character(
                            at,
                            '\\',
                            "an escape sequence \\27 or \\5C",
                        ));
                    }
                    self.position += 2;
                }
                Some(c) => value.push(c),
            }
        }
    }

    /// Read `'value'` or `( 'value' 'value' ... )`.
    pub fn read_qdstrings(&mut self) -> DecodeResult<Vec<String>> {
        if !self.consume_if('(') {
            return Ok(vec![self.read_qdstring()?]);
        }
        let mut values = Vec::new();
        loop {
            self.skip_whitespace();
            match self.peek() {
                Some(')') => {
                    self.advance();
                    return Ok(values);
                }
                Some('\'') => values.push(self.read_qdstring()?),
                Some(c) => {
                    return Err(DecodeError::unexpected_character(self.position, c, "a quoted string or ')'"));
                }
                None => return Err(DecodeError::unexpected_end(self.position, "a quoted string or ')'")),
            }
        }
    }

    /// Read one or more quoted descriptors (the argument of NAME).
    pub fn read_names(&mut self) -> DecodeResult<Vec<String>> {
        self.skip_whitespace();
        let start = self.position;
        let names = self.read_qdstrings()?;
        for name in &names {
            if let Err((offset, c)) = check_descr(name) {
                let position = self.input[start..]
                    .find(name.as_str())
                    .map(|p| start + p + offset)
                    .unwrap_or(start);
                return Err(DecodeError::illegal_identifier(
                    position,
                    name.clone(),
                    format!("illegal character '{c}' in a name"),
                ));
            }
        }
        if names.is_empty() {
            return Err(DecodeError::InvalidTokenValue {
                position: start,
                token: "NAME".to_string(),
                reason: "at least one name is required".to_string(),
            });
        }
        Ok(names)
    }

    /// Read a non-negative integer rule ID.
    pub fn read_rule_id(&mut self) -> DecodeResult<u32> {
        self.skip_whitespace();
        let start = self.position;
        match self.peek() {
            None => return Err(DecodeError::unexpected_end(start, "a rule ID")),
            Some(c) if !c.is_ascii_digit() => {
                return Err(DecodeError::unexpected_character(start, c, "a rule ID"));
            }
            Some(_) => {}
        }
        let word = self.read_word();
        word.parse::<u32>().map_err(|_| {
            DecodeError::illegal_identifier(start, word, "a rule ID must be a non-negative integer")
        })
    }

    /// Read `id` or `( id id ... )`.
    pub fn read_rule_ids(&mut self) -> DecodeResult<Vec<u32>> {
        if !self.consume_if('(') {
            return Ok(vec![self.read_rule_id()?]);
        }
        let mut ids = Vec::new();
        loop {
            self.skip_whitespace();
            if self.peek() == Some(')') {
                self.advance();
                return Ok(ids);
            }
            ids.push(self.read_rule_id()?);
        }
    }

    /// Read the optional `{length}` bound that may follow a syntax OID.
    pub fn read_length_hint(&mut self) -> DecodeResult<Option<u32>> {
        if self.peek() != Some('{') {
            return Ok(None);
        }
        let start = self.position;
        self.advance();
        let digits_start = self.position;
        while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
            self.advance();
        }
        let digits = &self.input[digits_start..self.position];
        self.expect_immediate('}')?;
        digits.parse::<u32>().map(Some).map_err(|_| DecodeError::InvalidTokenValue {
            position: start,
            token: "SYNTAX".to_string(),
            reason: format!("invalid length bound '{{{digits}}}'"),
        })
    }

    /// Everything after the closing parenthesis must be whitespace.
    pub fn finish(&mut self) -> DecodeResult<()> {
        self.skip_whitespace();
        if self.peek().is_some() {
            return Err(DecodeError::TrailingContent {
                position: self.position,
            });
        }
        Ok(())
    }
}
