//! `romlink show <name>...` – print normalized names without touching the destination.

use anyhow::{Context, Result};
use romlink_core::normalize::NormalizedRecord;
use std::fs;
use std::path::Path;

/// Each argument may be a bare filename or a path to an existing file; sizes
/// are only shown for files that exist.
pub fn run_show(names: &[String]) -> Result<()> {
    for name in names {
        let path = Path::new(name);
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| name.clone());
        let size = fs::metadata(path).ok().filter(|m| m.is_file()).map(|m| m.len());

        let rec = NormalizedRecord::from_filename(&file_name, size.unwrap_or(0))
            .with_context(|| format!("normalize {name}"))?;

        match size {
            Some(_) => println!(
                "{}  {}  [{}]  {}, {}",
                rec.slug,
                rec.title,
                rec.region,
                rec.size_display,
                rec.blocks_label()
            ),
            None => println!("{}  {}  [{}]", rec.slug, rec.title, rec.region),
        }
    }
    Ok(())
}
