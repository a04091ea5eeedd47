//! Byte-size formatting for catalog rows.

/// Bytes per storage block on the target media (128 KiB).
pub const BLOCK_SIZE: u64 = 128 * 1024;

const UNITS: [&str; 9] = ["B", "KB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];

/// Formats a byte count with a binary unit, e.g. `1536` → `"1.5 KB"`.
///
/// The unit is `floor(log1024(bytes))`; the scaled value is rounded to two
/// decimals and always carries at least one fractional digit (`"1.0 KB"`).
pub fn human_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut unit = 0;
    let mut scale: u64 = 1;
    while unit + 1 < UNITS.len() {
        match scale.checked_mul(1024) {
            Some(next) if next <= bytes => {
                scale = next;
                unit += 1;
            }
            _ => break,
        }
    }

    let value = (bytes as f64 / scale as f64 * 100.0).round() / 100.0;
    format!("{} {}", format_decimal(value), UNITS[unit])
}

/// Number of whole blocks in `bytes`; a partial block does not count.
pub fn blocks(bytes: u64) -> u64 {
    bytes / BLOCK_SIZE
}

// Shortest round-trip digits, but never a bare integer.
fn format_decimal(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}
