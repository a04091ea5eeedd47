//! Source tree walk.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A regular file found under the source directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RomFile {
    /// Full path as walked (absolute when the root is absolute).
    pub path: PathBuf,
    /// Final path component; this is what gets normalized.
    pub file_name: String,
    pub size_bytes: u64,
}

/// Recursively lists regular files under `root`, sorted by name within each directory.
pub fn scan_roms(root: &Path, follow_links: bool) -> Result<Vec<RomFile>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root)
        .follow_links(follow_links)
        .sort_by_file_name()
    {
        let entry = entry.with_context(|| format!("walking {}", root.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        let size_bytes = entry
            .metadata()
            .with_context(|| format!("stat {}", path.display()))?
            .len();
        let file_name = entry.file_name().to_string_lossy().into_owned();
        tracing::debug!(path = %path.display(), size_bytes, "found rom");
        files.push(RomFile {
            path: path.to_path_buf(),
            file_name,
            size_bytes,
        });
    }
    Ok(files)
}
