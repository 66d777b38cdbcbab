//! String preparation shared by the string matching rules (a subset of the
//! RFC 4518 algorithm).
//!
//! Control characters are dropped, every run of whitespace is replaced by a
//! single space and, for case-insensitive rules, characters are lowercased.

/// Prepare an attribute or assertion value for equality and ordering.
///
/// Leading and trailing whitespace is removed.
pub fn prepare_string(value: &str, fold_case: bool) -> String {
    prepare(value, fold_case, true)
}

/// Prepare a substring assertion component.
///
/// Leading and trailing whitespace is kept as a single space so that `"a "`
/// only matches before a word boundary.
pub fn prepare_substring(value: &str, fold_case: bool) -> String {
    prepare(value, fold_case, false)
}

fn prepare(value: &str, fold_case: bool, trim: bool) -> String {
    let mut prepared = String::with_capacity(value.len());
    let mut pending_space = false;
    for c in value.chars() {
        if c.is_whitespace() {
            pending_space = true;
            continue;
        }
        if c.is_control() || c == '\u{ad}' || c == '\u{200b}' {
            continue;
        }
        if pending_space && (!trim || !prepared.is_empty()) {
            prepared.push(' ');
        }
        pending_space = false;
        if fold_case {
            prepared.extend(c.to_lowercase());
        } else {
            prepared.push(c);
        }
    }
    if pending_space && !trim {
        prepared.push(' ');
    }
    prepared
}

/// Numeric strings compare with all spaces removed.
pub fn prepare_numeric_string(value: &str) -> String {
    value.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Telephone numbers compare with spaces and hyphens removed, ignoring case.
pub fn prepare_telephone_number(value: &str) -> String {
    value
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}
