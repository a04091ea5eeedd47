//! Display titles: `Chrono Trigger - Prologue (Japan).sfc` → `Chrono Trigger: Prologue`.

use super::region::{region, split_extension};
use crate::error::NameError;

/// Human-readable title for a ROM filename.
///
/// The extension is dropped, the first ` - ` becomes `: `, and the
/// ` (<region>)` group is removed. Further parentheticals stay.
pub fn title(filename: &str) -> Result<String, NameError> {
    let (stem, _) = split_extension(filename);
    let region = region(stem)?;

    Ok(stem
        .replacen(" - ", ": ", 1)
        .replace(&format!(" ({region})"), ""))
}
