//! CSV catalog of normalized ROM names.
//!
//! One row per source file with header `title,filename,size_bytes,size_blocks`,
//! sorted by the normalized filename. Any file without a region tag aborts
//! the whole catalog; nothing is written in that case.

use anyhow::{Context, Result};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::RunConfig;
use crate::normalize::NormalizedRecord;
use crate::scan::{scan_roms, RomFile};

pub const HEADER: [&str; 4] = ["title", "filename", "size_bytes", "size_blocks"];

/// A single catalog line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogRow {
    pub title: String,
    pub filename: String,
    pub size_bytes: String,
    pub size_blocks: String,
}

impl From<NormalizedRecord> for CatalogRow {
    fn from(rec: NormalizedRecord) -> Self {
        let size_blocks = rec.blocks_label();
        Self {
            title: rec.title,
            filename: rec.slug,
            size_bytes: rec.size_display,
            size_blocks,
        }
    }
}

/// Normalizes every file and returns rows sorted by `filename`.
pub fn build_rows(files: &[RomFile]) -> Result<Vec<CatalogRow>> {
    let mut rows = files
        .iter()
        .map(|f| {
            NormalizedRecord::from_filename(&f.file_name, f.size_bytes)
                .map(CatalogRow::from)
                .with_context(|| format!("normalize {}", f.path.display()))
        })
        .collect::<Result<Vec<_>>>()?;
    rows.sort_by(|a, b| a.filename.cmp(&b.filename));
    Ok(rows)
}

/// Writes header and rows as CSV with minimal quoting and CRLF line endings.
pub fn write_rows<W: Write>(out: W, rows: &[CatalogRow]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Necessary)
        .terminator(csv::Terminator::CRLF)
        .from_writer(out);
    writer.write_record(HEADER)?;
    for row in rows {
        writer.write_record([
            &row.title,
            &row.filename,
            &row.size_bytes,
            &row.size_blocks,
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// Scans `run.source_dir` and writes the catalog to [`RunConfig::catalog_path`].
///
/// Returns the catalog path. A previous catalog inside the source tree is
/// not cataloged itself.
pub fn write_catalog(run: &RunConfig) -> Result<PathBuf> {
    run.validate()?;

    let out_path = run.catalog_path();
    let files: Vec<RomFile> = scan_roms(&run.source_dir, run.follow_links)?
        .into_iter()
        .filter(|f| !same_file(&f.path, &out_path))
        .collect();
    let rows = build_rows(&files)?;

    let file = std::fs::File::create(&out_path)
        .with_context(|| format!("create {}", out_path.display()))?;
    write_rows(file, &rows).with_context(|| format!("write {}", out_path.display()))?;

    tracing::info!(rows = rows.len(), path = %out_path.display(), "catalog written");
    Ok(out_path)
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
