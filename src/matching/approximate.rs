//! `ds-mr-double-metaphone-approx`: "sounds like" matching.
//!
//! Values are reduced to the primary key of a simplified Double Metaphone
//! encoding, word by word. Two values match approximately when their keys
//! are equal.

use super::normalize::prepare_string;
use super::{Assertion, EqualityAssertion, MatchingRuleImpl};
use crate::error::{ValidationError, ValidationResult};
use crate::schema::Schema;

const MAX_KEY_LENGTH: usize = 4;

/// Approximate matching by phonetic key.
#[derive(Debug, Default, Clone, Copy)]
pub struct DoubleMetaphoneApproximateMatchingRule;

impl MatchingRuleImpl for DoubleMetaphoneApproximateMatchingRule {
    fn normalize_attribute_value(&self, _schema: &Schema, value: &[u8]) -> ValidationResult<Vec<u8>> {
        let text = std::str::from_utf8(value).map_err(|_| ValidationError::NotUtf8 {
            syntax: "doubleMetaphoneApproximateMatch".to_string(),
        })?;
        let prepared = prepare_string(text, true);
        let keys: Vec<String> = prepared.split(' ').map(phonetic_key).collect();
        Ok(keys.join(" ").into_bytes())
    }

    fn assertion(&self, schema: &Schema, value: &[u8]) -> ValidationResult<Box<dyn Assertion>> {
        Ok(Box::new(EqualityAssertion::new(
            self.normalize_attribute_value(schema, value)?,
        )))
    }
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'A' | 'E' | 'I' | 'O' | 'U' | 'Y')
}

/// Primary phonetic key of one word.
pub fn phonetic_key(word: &str) -> String {
    let letters: Vec<char> = word
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_uppercase)
        .collect();
    let at = |i: usize| letters.get(i).copied().unwrap_or('\0');
    let mut key = String::new();
    let mut i = 0;

    // Silent leading pairs
    if matches!(
        (at(0), at(1)),
        ('G', 'N') | ('K', 'N') | ('P', 'N') | ('W', 'R') | ('P', 'S')
    ) {
        i = 1;
    }
    if at(0) == 'X' {
        key.push('S');
        i = 1;
    }

    while i < letters.len() && key.len() < MAX_KEY_LENGTH {
        let c = letters[i];
        let previous = if i > 0 { at(i - 1) } else { '\0' };
        let next = at(i + 1);
        let mut advance = 1;

        match c {
            'A' | 'E' | 'I' | 'O' | 'U' | 'Y' => {
                if i == 0 {
                    key.push('A');
                }
            }
            'B' => {
                key.push('P');
                if next == 'B' {
                    advance = 2;
                }
            }
            'C' => {
                if next == 'H' {
                    key.push('X');
                    advance = 2;
                } else if matches!(next, 'I' | 'E' | 'Y') {
                    key.push('S');
                } else {
                    key.push('K');
                    if matches!(next, 'C' | 'K' | 'Q') {
                        advance = 2;
                    }
                }
            }
            'D' => {
                if next == 'G' && matches!(at(i + 2), 'I' | 'E' | 'Y') {
                    key.push('J');
                    advance = 3;
                } else {
                    key.push('T');
                    if matches!(next, 'D' | 'T') {
                        advance = 2;
                    }
                }
            }
            'G' => {
                if next == 'H' {
                    if i == 0 || !is_vowel(previous) {
                        key.push('K');
                    }
                    advance = 2;
                } else if next == 'N' {
                    advance = 2;
                    key.push('N');
                } else if matches!(next, 'I' | 'E' | 'Y') {
                    key.push('J');
                } else {
                    key.push('K');
                    if next == 'G' {
                        advance = 2;
                    }
                }
            }
            'H' => {
                if (i == 0 || is_vowel(previous)) && is_vowel(next) {
                    key.push('H');
                }
            }
            'J' => key.push('J'),
            'K' => {
                key.push('K');
                if next == 'K' {
                    advance = 2;
                }
            }
            'P' => {
                if next == 'H' {
                    key.push('F');
                    advance = 2;
                } else {
                    key.push('P');
                    if matches!(next, 'P' | 'B') {
                        advance = 2;
                    }
                }
            }
            'Q' => key.push('K'),
            'S' => {
                if next == 'H' {
                    key.push('X');
                    advance = 2;
                } else if next == 'C' && at(i + 2) == 'H' {
                    key.push_str("SK");
                    advance = 3;
                } else {
                    key.push('S');
                    if matches!(next, 'S' | 'Z') {
                        advance = 2;
                    }
                }
            }
            'T' => {
                if next == 'H' {
                    key.push('0');
                    advance = 2;
                } else if next == 'I' && matches!(at(i + 2), 'O' | 'A') {
                    key.push('X');
                } else {
                    key.push('T');
                    if matches!(next, 'T' | 'D') {
                        advance = 2;
                    }
                }
            }
            'V' => key.push('F'),
            'W' => {
                if is_vowel(next) {
                    key.push('A');
                }
            }
            'X' => key.push_str("KS"),
            'Z' => key.push('S'),
            'F' | 'L' | 'M' | 'N' | 'R' => {
                key.push(c);
                if next == c {
                    advance = 2;
                }
            }
            // Digits and letters outside A-Z are kept as they are
            other => key.push(other),
        }
        i += advance;
    }
    key.truncate(MAX_KEY_LENGTH);
    key
}
