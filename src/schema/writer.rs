//! Synthesizes canonical RFC 4512 definitions from structured fields.
//!
//! Output of [`DefinitionWriter`] is accepted by the definition parser and
//! parses back to the same structured fields.

use super::types::ElementInfo;

/// Escape a value for use inside a quoted string.
fn escape_qdstring(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\'' => escaped.push_str("\\27"),
            '\\' => escaped.push_str("\\5C"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[derive(Debug)]
pub(crate) struct DefinitionWriter {
    buffer: String,
}

impl DefinitionWriter {
    pub fn new(identifier: &str) -> Self {
        let mut buffer = String::with_capacity(64);
        buffer.push_str("( ");
        buffer.push_str(identifier);
        Self { buffer }
    }

    /// NAME and DESC, OBSOLETE follows as its own flag.
    pub fn names_and_description(mut self, info: &ElementInfo) -> Self {
        match info.names.as_slice() {
            [] => {}
            [single] => {
                self.buffer.push_str(" NAME '");
                self.buffer.push_str(&escape_qdstring(single));
                self.buffer.push('\'');
            }
            many => {
                self.buffer.push_str(" NAME (");
                for name in many {
                    self.buffer.push_str(" '");
                    self.buffer.push_str(&escape_qdstring(name));
                    self.buffer.push('\'');
                }
                self.buffer.push_str(" )");
            }
        }
        if let Some(description) = &info.description {
            self.buffer.push_str(" DESC '");
            self.buffer.push_str(&escape_qdstring(description));
            self.buffer.push('\'');
        }
        self.flag("OBSOLETE", info.obsolete)
    }

    pub fn flag(mut self, keyword: &str, present: bool) -> Self {
        if present {
            self.buffer.push(' ');
            self.buffer.push_str(keyword);
        }
        self
    }

    pub fn oid(mut self, keyword: &str, oid: Option<&str>) -> Self {
        if let Some(oid) = oid {
            self.buffer.push(' ');
            self.buffer.push_str(keyword);
            self.buffer.push(' ');
            self.buffer.push_str(oid);
        }
        self
    }

    pub fn oids<S: AsRef<str>>(mut self, keyword: &str, oids: &[S]) -> Self {
        match oids {
            [] => {}
            [single] => {
                self.buffer.push(' ');
                self.buffer.push_str(keyword);
                self.buffer.push(' ');
                self.buffer.push_str(single.as_ref());
            }
            many => {
                self.buffer.push(' ');
                self.buffer.push_str(keyword);
                self.buffer.push_str(" ( ");
                let joined: Vec<&str> = many.iter().map(AsRef::as_ref).collect();
                self.buffer.push_str(&joined.join(" $ "));
                self.buffer.push_str(" )");
            }
        }
        self
    }

    pub fn rule_ids(mut self, keyword: &str, ids: &[u32]) -> Self {
        match ids {
            [] => {}
            [single] => {
                self.buffer.push_str(&format!(" {keyword} {single}"));
            }
            many => {
                let joined: Vec<String> = many.iter().map(u32::to_string).collect();
                self.buffer.push_str(&format!(" {keyword} ( {} )", joined.join(" ")));
            }
        }
        self
    }

    pub fn syntax(mut self, oid: Option<&str>, length: Option<u32>) -> Self {
        if let Some(oid) = oid {
            self.buffer.push_str(" SYNTAX ");
            self.buffer.push_str(oid);
            if let Some(length) = length {
                self.buffer.push_str(&format!("{{{length}}}"));
            }
        }
        self
    }

    pub fn keyword(mut self, keyword: &str, value: &str) -> Self {
        self.buffer.push(' ');
        self.buffer.push_str(keyword);
        self.buffer.push(' ');
        self.buffer.push_str(value);
        self
    }

    /// Extension properties, then the closing parenthesis.
    pub fn finish(mut self, info: &ElementInfo) -> String {
        for (key, values) in &info.extensions {
            self.buffer.push(' ');
            self.buffer.push_str(key);
            match values.as_slice() {
                [single] => {
                    self.buffer.push_str(" '");
                    self.buffer.push_str(&escape_qdstring(single));
                    self.buffer.push('\'');
                }
                many => {
                    self.buffer.push_str(" (");
                    for value in many {
                        self.buffer.push_str(" '");
                        self.buffer.push_str(&escape_qdstring(value));
                        self.buffer.push('\'');
                    }
                    self.buffer.push_str(" )");
                }
            }
        }
        self.buffer.push_str(" )");
        self.buffer
    }
}
