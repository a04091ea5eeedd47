//! ROM filename normalization.
//!
//! Turns a release-style filename such as `Final Fantasy VII (USA).zip` into
//! a display title, a lowercase link-safe slug and a region code. All
//! functions here are pure; filesystem access lives in [`crate::scan`],
//! [`crate::catalog`] and [`crate::links`].

mod region;
mod roman;
mod slug;
mod title;
mod token;

pub use region::{region, split_extension};
pub use roman::{is_roman_numeral, roman_to_int};
pub use slug::slug;
pub use title::title;
pub use token::{is_plain_token, is_separator, slug_token};

use crate::error::NameError;
use crate::size;

/// Normalized view of one ROM file, built once and then only read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedRecord {
    pub title: String,
    pub slug: String,
    pub region: String,
    pub size_display: String,
    pub size_blocks: u64,
}

impl NormalizedRecord {
    /// Normalizes `filename` (no directory part) with its size in bytes.
    pub fn from_filename(filename: &str, size_bytes: u64) -> Result<Self, NameError> {
        let (stem, _) = split_extension(filename);
        Ok(Self {
            title: title(filename)?,
            slug: slug(filename)?,
            region: region(stem)?.to_string(),
            size_display: size::human_size(size_bytes),
            size_blocks: size::blocks(size_bytes),
        })
    }

    /// Block count as written to the catalog, e.g. `"2 Blocks"`.
    pub fn blocks_label(&self) -> String {
        format!("{} Blocks", self.size_blocks)
    }
}
