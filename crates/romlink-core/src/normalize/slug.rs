//! Slug generation: `Final Fantasy VII (USA).zip` → `final-fantasy-7-usa.zip`.

use super::region::{region, split_extension};
use super::token::slug_token;
use crate::error::NameError;

/// Builds the lowercase, hyphen-joined link name for a ROM filename.
///
/// Tokens are filtered before joining, so dropped tokens leave no separator.
/// Hyphens already inside tokens are kept verbatim: `A -B- (USA).bin`
/// yields `a--b--usa.bin`, and a name whose words are all dropped yields
/// `-usa.bin`.
pub fn slug(filename: &str) -> Result<String, NameError> {
    let (stem, ext) = split_extension(filename);
    let region = region(stem)?.to_lowercase();

    let tokens: Vec<String> = stem.split_whitespace().filter_map(slug_token).collect();

    Ok(format!("{}-{}{}", tokens.join("-"), region, ext))
}
