use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::RunError;

/// Default catalog filename when neither CLI nor config names one.
pub const DEFAULT_CATALOG_FILENAME: &str = "games.csv";

/// Global configuration loaded from `~/.config/romlink/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RomlinkConfig {
    /// Catalog filename written into the destination directory.
    pub catalog_filename: String,
    /// Default source directory (None = current directory).
    #[serde(default)]
    pub source_dir: Option<PathBuf>,
    /// Default destination directory (None = current directory).
    #[serde(default)]
    pub dest_dir: Option<PathBuf>,
    /// Follow symlinked directories while walking the source tree.
    #[serde(default)]
    pub follow_links: bool,
}

impl Default for RomlinkConfig {
    fn default() -> Self {
        Self {
            catalog_filename: DEFAULT_CATALOG_FILENAME.to_string(),
            source_dir: None,
            dest_dir: None,
            follow_links: false,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("romlink")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<RomlinkConfig> {
    let path = config_path()?;
    load_or_init_at(&path)
}

/// Same as [`load_or_init`] for an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<RomlinkConfig> {
    if !path.exists() {
        let default_cfg = RomlinkConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)?;
    let cfg: RomlinkConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}

/// Fully resolved settings for one run. Built once by the caller; nothing
/// below this point consults the process working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub source_dir: PathBuf,
    pub dest_dir: PathBuf,
    pub catalog_filename: String,
    pub follow_links: bool,
}

impl RunConfig {
    /// Resolves CLI overrides against the config file, falling back to `cwd`.
    pub fn resolve(
        cfg: &RomlinkConfig,
        cwd: &Path,
        source_dir: Option<PathBuf>,
        dest_dir: Option<PathBuf>,
        catalog_filename: Option<String>,
    ) -> Self {
        let absolute = |p: PathBuf| if p.is_absolute() { p } else { cwd.join(p) };
        Self {
            source_dir: absolute(
                source_dir
                    .or_else(|| cfg.source_dir.clone())
                    .unwrap_or_else(|| cwd.to_path_buf()),
            ),
            dest_dir: absolute(
                dest_dir
                    .or_else(|| cfg.dest_dir.clone())
                    .unwrap_or_else(|| cwd.to_path_buf()),
            ),
            catalog_filename: catalog_filename.unwrap_or_else(|| cfg.catalog_filename.clone()),
            follow_links: cfg.follow_links,
        }
    }

    /// Checks that source and destination exist before any I/O happens.
    pub fn validate(&self) -> Result<(), RunError> {
        for dir in [&self.source_dir, &self.dest_dir] {
            if !dir.exists() {
                return Err(RunError::MissingDirectory(dir.clone()));
            }
        }
        Ok(())
    }

    /// Where the catalog is written; an absolute filename is used as is.
    pub fn catalog_path(&self) -> PathBuf {
        self.dest_dir.join(&self.catalog_filename)
    }
}
