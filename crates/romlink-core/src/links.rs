//! Symlink farm named by normalized filenames.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::RunConfig;
use crate::normalize::slug;
use crate::scan::scan_roms;

/// Outcome of a [`create_links`] run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkSummary {
    /// Links created (including ones that replaced an older entry).
    pub created: usize,
    /// Pre-existing entries removed before linking.
    pub replaced: usize,
    /// Slugs claimed by more than one source file in this run.
    pub collisions: usize,
}

/// Links every file under `run.source_dir` into `run.dest_dir` by its slug.
///
/// Existing entries at the link path are removed first, dangling links
/// included, so repeated runs converge on the same tree.
pub fn create_links(run: &RunConfig) -> Result<LinkSummary> {
    run.validate()?;

    let mut summary = LinkSummary::default();
    let mut claimed: HashMap<String, PathBuf> = HashMap::new();

    for rom in scan_roms(&run.source_dir, run.follow_links)? {
        let name =
            slug(&rom.file_name).with_context(|| format!("normalize {}", rom.path.display()))?;
        let target = std::path::absolute(&rom.path)
            .with_context(|| format!("resolve {}", rom.path.display()))?;
        let link_path = run.dest_dir.join(&name);

        if let Some(previous) = claimed.insert(name.clone(), target.clone()) {
            tracing::warn!(
                slug = %name,
                previous = %previous.display(),
                current = %target.display(),
                "slug collision, later file wins"
            );
            summary.collisions += 1;
        }

        if replace_link(&link_path, &target)? {
            summary.replaced += 1;
        }
        summary.created += 1;
        tracing::debug!(link = %link_path.display(), target = %target.display(), "linked");
    }

    tracing::info!(
        created = summary.created,
        replaced = summary.replaced,
        dest = %run.dest_dir.display(),
        "links created"
    );
    Ok(summary)
}

/// Points `link_path` at `target`, removing whatever was there.
/// Returns true when an existing entry was removed.
fn replace_link(link_path: &Path, target: &Path) -> Result<bool> {
    // symlink_metadata so a dangling link still counts as present.
    let existed = match fs::symlink_metadata(link_path) {
        Ok(meta) if meta.is_dir() => {
            anyhow::bail!("{} is a directory, refusing to replace it", link_path.display())
        }
        Ok(_) => {
            fs::remove_file(link_path)
                .with_context(|| format!("remove {}", link_path.display()))?;
            true
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => false,
        Err(e) => {
            return Err(e).with_context(|| format!("stat {}", link_path.display()));
        }
    };

    symlink(target, link_path)
        .with_context(|| format!("link {} -> {}", link_path.display(), target.display()))?;
    Ok(existed)
}

#[cfg(unix)]
fn symlink(target: &Path, link_path: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(target, link_path)
}

#[cfg(windows)]
fn symlink(target: &Path, link_path: &Path) -> io::Result<()> {
    std::os::windows::fs::symlink_file(target, link_path)
}
