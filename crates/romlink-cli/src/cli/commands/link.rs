//! `romlink link` – build the symlink directory.

use anyhow::Result;
use romlink_core::config::RunConfig;
use romlink_core::links;

pub fn run_link(run: &RunConfig) -> Result<()> {
    let summary = links::create_links(run)?;
    println!(
        "Linked {} file(s) into {} ({} replaced)",
        summary.created,
        run.dest_dir.display(),
        summary.replaced
    );
    if summary.collisions > 0 {
        println!(
            "{} name collision(s); later files won, see log for details",
            summary.collisions
        );
    }
    Ok(())
}
