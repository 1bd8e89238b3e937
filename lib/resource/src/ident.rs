//! Identifier rules of the generated target language.

use alloc::{format, string::String};

/// Returns `true` if `name` is a valid identifier: an ASCII letter or `_` followed by any number
/// of ASCII letters, digits or `_`.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };

    (first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Returns the enumeration constant generated for the entry `name` of a table using `prefix`.
pub fn symbol(prefix: &str, name: &str) -> String {
    format!("{prefix}_{name}").to_ascii_uppercase()
}

/// Returns the identifier of the data array generated for the entry `entry` of `table` holding
/// the resource `resource`.
pub fn data_name(table: &str, entry: &str, resource: &str) -> String {
    format!("{table}_{entry}_{resource}").to_ascii_lowercase()
}

/// Returns `text` with every character that may not appear in an identifier replaced by `_`.
pub fn sanitize(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}
