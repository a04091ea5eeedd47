//! `romlink csv` – write the ROM catalog.

use anyhow::Result;
use romlink_core::catalog;
use romlink_core::config::RunConfig;

pub fn run_csv(run: &RunConfig) -> Result<()> {
    let path = catalog::write_catalog(run)?;
    println!("Created csv at {}", path.display());
    Ok(())
}
