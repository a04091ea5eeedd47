//! Integration test: catalog and symlink runs over a real ROM directory tree.

mod common;

use romlink_core::catalog::write_catalog;
use romlink_core::config::{RomlinkConfig, RunConfig};
use romlink_core::error::RunError;
use romlink_core::links::create_links;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn run_config(src: &Path, dest: &Path) -> RunConfig {
    RunConfig::resolve(
        &RomlinkConfig::default(),
        src,
        Some(src.to_path_buf()),
        Some(dest.to_path_buf()),
        None,
    )
}

#[test]
fn catalog_rows_sorted_and_formatted() {
    let src = tempdir().unwrap();
    let dest = tempdir().unwrap();
    common::rom_tree::populate(src.path());

    let path = write_catalog(&run_config(src.path(), dest.path())).unwrap();
    assert_eq!(path, dest.path().join("games.csv"));

    let text = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.split("\r\n").collect();
    assert_eq!(
        lines,
        [
            "title,filename,size_bytes,size_blocks",
            "Chrono Trigger: Prologue,chrono-trigger-prologue-japan.sfc,4.0 MB,32 Blocks",
            "Final Fantasy VI,final-fantasy-6-usa.sfc,3.5 MB,28 Blocks",
            "Final Fantasy VII,final-fantasy-7-usa.zip,0 B,0 Blocks",
            "Tetris (Rev 1),tetris-world.gb,32.0 KB,0 Blocks",
            "",
        ]
    );
}

#[test]
fn catalog_in_source_dir_is_rerunnable() {
    let src = tempdir().unwrap();
    common::rom_tree::populate(src.path());
    let run = run_config(src.path(), src.path());

    let first = fs::read_to_string(write_catalog(&run).unwrap()).unwrap();
    let second = fs::read_to_string(write_catalog(&run).unwrap()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn catalog_aborts_on_missing_region() {
    let src = tempdir().unwrap();
    let dest = tempdir().unwrap();
    common::rom_tree::populate(src.path());
    fs::write(src.path().join("notes.txt"), b"todo").unwrap();

    let err = write_catalog(&run_config(src.path(), dest.path())).unwrap_err();
    assert!(format!("{err:#}").contains("notes.txt"));
    assert!(!dest.path().join("games.csv").exists());
}

#[test]
fn missing_directory_rejected_before_io() {
    let src = tempdir().unwrap();
    let dest = src.path().join("missing");
    let err = write_catalog(&run_config(src.path(), &dest)).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<RunError>(),
        Some(RunError::MissingDirectory(p)) if *p == dest
    ));
    assert!(create_links(&run_config(src.path(), &dest)).is_err());
    assert!(!dest.exists());
}

#[cfg(unix)]
#[test]
fn links_point_at_absolute_sources_and_rerun_cleanly() {
    let src = tempdir().unwrap();
    let dest = tempdir().unwrap();
    common::rom_tree::populate(src.path());
    let run = run_config(src.path(), dest.path());

    let first = create_links(&run).unwrap();
    assert_eq!(first.created, 4);
    assert_eq!(first.replaced, 0);
    assert_eq!(first.collisions, 0);

    let link = dest.path().join("final-fantasy-6-usa.sfc");
    let target = fs::read_link(&link).unwrap();
    assert!(target.is_absolute());
    assert_eq!(target, src.path().join("snes/Final Fantasy VI (USA).sfc"));

    let second = create_links(&run).unwrap();
    assert_eq!(second.created, 4);
    assert_eq!(second.replaced, 4);

    let mut names: Vec<String> = fs::read_dir(dest.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(
        names,
        [
            "chrono-trigger-prologue-japan.sfc",
            "final-fantasy-6-usa.sfc",
            "final-fantasy-7-usa.zip",
            "tetris-world.gb",
        ]
    );
}

#[cfg(unix)]
#[test]
fn links_replace_stale_and_dangling_entries() {
    let src = tempdir().unwrap();
    let dest = tempdir().unwrap();
    common::rom_tree::populate(src.path());

    let stale = dest.path().join("tetris-world.gb");
    std::os::unix::fs::symlink(src.path().join("deleted.gb"), &stale).unwrap();
    assert!(!stale.exists());

    create_links(&run_config(src.path(), dest.path())).unwrap();
    assert_eq!(
        fs::read_link(&stale).unwrap(),
        src.path().join("gb/Tetris (World) (Rev 1).gb")
    );
    assert!(stale.exists());
}

#[cfg(unix)]
#[test]
fn links_count_slug_collisions() {
    let src = tempdir().unwrap();
    let dest = tempdir().unwrap();
    fs::create_dir_all(src.path().join("a")).unwrap();
    fs::create_dir_all(src.path().join("b")).unwrap();
    fs::write(src.path().join("a/Tetris (Japan).gb"), b"a").unwrap();
    fs::write(src.path().join("b/Tetris (Japan).gb"), b"b").unwrap();

    let summary = create_links(&run_config(src.path(), dest.path())).unwrap();
    assert_eq!(summary.created, 2);
    assert_eq!(summary.collisions, 1);
    assert_eq!(fs::read(dest.path().join("tetris-japan.gb")).unwrap(), b"b");
}
