//! Builds a small ROM library on disk for integration tests.

use std::fs;
use std::path::Path;

/// Files created by [`populate`], as (relative path, size in bytes).
pub const ROMS: &[(&str, usize)] = &[
    ("snes/Chrono Trigger - Prologue (Japan).sfc", 4 * 1024 * 1024),
    ("snes/Final Fantasy VI (USA).sfc", 3 * 1024 * 1024 + 512 * 1024),
    ("gb/Tetris (World) (Rev 1).gb", 32 * 1024),
    ("Final Fantasy VII (USA).zip", 0),
];

pub fn populate(root: &Path) {
    for (rel, size) in ROMS {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, vec![0u8; *size]).unwrap();
    }
}
