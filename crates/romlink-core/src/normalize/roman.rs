//! Roman numeral lookup for sequel numbers (I..IX).

use crate::error::NameError;

const NUMERALS: [&str; 9] = ["I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX"];

/// True if `token` is exactly one of the literals I..IX (uppercase only).
pub fn is_roman_numeral(token: &str) -> bool {
    NUMERALS.contains(&token)
}

/// Resolves I..IX to 1..9.
///
/// Any other input is a lookup failure; guard with [`is_roman_numeral`] or
/// treat the error as "keep the original token".
pub fn roman_to_int(token: &str) -> Result<u32, NameError> {
    NUMERALS
        .iter()
        .position(|n| *n == token)
        .map(|i| i as u32 + 1)
        .ok_or_else(|| NameError::NotARomanNumeral(token.to_string()))
}
