//! Token classification for slug building.

use regex::Regex;
use std::sync::OnceLock;

use super::roman::{is_roman_numeral, roman_to_int};

/// Token made only of ASCII letters, digits, `_`, `-` or `'`.
pub fn is_plain_token(token: &str) -> bool {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"^[a-zA-Z0-9_\-']+$").unwrap());

    re.is_match(token)
}

/// Lone hyphen used as a title/subtitle separator.
pub fn is_separator(token: &str) -> bool {
    token == "-"
}

/// Maps one whitespace-delimited token to its slug form, or `None` when the
/// token is dropped (separators, region parentheticals, other punctuation).
pub fn slug_token(token: &str) -> Option<String> {
    if is_separator(token) {
        return None;
    }
    if is_roman_numeral(token) {
        return roman_to_int(token).ok().map(|n| n.to_string());
    }
    if is_plain_token(token) {
        return Some(token.to_lowercase().replace('\'', ""));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_tokens() {
        for token in ["Mario", "64", "Spider-Man", "Yoshi's", "snake_case", "-"] {
            assert!(is_plain_token(token), "token {token:?}");
        }
    }

    #[test]
    fn non_plain_tokens() {
        for token in ["(USA)", "Zelda:", "Rev.", "Pokémon", "a&b", ""] {
            assert!(!is_plain_token(token), "token {token:?}");
        }
    }

    #[test]
    fn slug_token_rules() {
        assert_eq!(slug_token("-"), None);
        assert_eq!(slug_token("VII").as_deref(), Some("7"));
        assert_eq!(slug_token("Yoshi's").as_deref(), Some("yoshis"));
        assert_eq!(slug_token("Spider-Man").as_deref(), Some("spider-man"));
        assert_eq!(slug_token("(Europe)"), None);
        assert_eq!(slug_token("Zelda:"), None);
    }

    #[test]
    fn lowercase_numeral_is_a_plain_word() {
        assert_eq!(slug_token("vii").as_deref(), Some("vii"));
    }
}
