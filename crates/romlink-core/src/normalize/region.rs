//! Region extraction and extension splitting.

use regex::Regex;
use std::sync::OnceLock;

use crate::error::NameError;

/// Contents of the first `(...)` group in `name`.
pub fn region(name: &str) -> Result<&str, NameError> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"\((.*?)\)").unwrap());

    re.captures(name)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str())
        .ok_or_else(|| NameError::MissingRegion {
            name: name.to_string(),
        })
}

/// Splits `name` into stem and extension (dot included).
///
/// Splits at the last `.`; leading dots belong to the stem, so `.hidden`
/// has no extension.
pub fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(idx) if name[..idx].chars().any(|c| c != '.') => name.split_at(idx),
        _ => (name, ""),
    }
}
