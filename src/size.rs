//! Directory size measurement and human-readable size formatting.
//!
//! Measurement is deliberately best-effort: entries that cannot be read are
//! skipped rather than failing the whole traversal, and an unreadable root
//! yields a zero total. The [`DirSize::complete`] flag records whether any
//! entry had to be skipped so callers (and tests) can tell an exact total
//! from an approximation.

use std::path::Path;

use walkdir::WalkDir;

/// Size units, advancing by a factor of 1024 per step.
const SIZE_UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];

/// Result of measuring a directory tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DirSize {
    /// Total size of all regular files reached by the traversal, in bytes
    pub bytes: u64,

    /// `false` if any entry was inaccessible and therefore contributed 0
    pub complete: bool,
}

/// Measure the total size of a directory and all its contents.
///
/// Recursively sums the sizes of all regular files under `path`. Entries that
/// cannot be read — permission problems, broken links, files removed while
/// the walk is in progress — are skipped and the traversal continues. If the
/// root itself cannot be opened the result is `0` bytes with
/// `complete == false`; this is never an error.
///
/// Symlinked directories are not followed, which doubles as protection
/// against symlink loops.
#[must_use]
pub fn measure_dir(path: &Path) -> DirSize {
    let mut bytes = 0u64;
    let mut complete = true;

    for entry in WalkDir::new(path) {
        match entry {
            Ok(entry) => {
                if entry.file_type().is_file() {
                    match entry.metadata() {
                        Ok(metadata) => bytes += metadata.len(),
                        Err(_) => complete = false,
                    }
                }
            }
            Err(_) => complete = false,
        }
    }

    DirSize { bytes, complete }
}

/// Format a byte count as a human-readable string.
///
/// Uses a 1024 divisor per unit step and stops at TB. Values in the byte
/// range render as plain integers (`"1023 B"`); every other unit renders
/// with exactly two decimals (`"1.50 KB"`). Zero is `"0 B"`.
#[must_use]
pub fn format_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut size = bytes as f64;
    let mut unit = 0;

    while size >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }

    if unit == 0 {
        format!("{bytes} {}", SIZE_UNITS[unit])
    } else {
        format!("{size:.2} {}", SIZE_UNITS[unit])
    }
}

/// Format a possibly negative byte delta.
///
/// A clean that grows the project (the external tool wrote more than it
/// removed) produces a negative saving, shown with a leading minus sign.
#[must_use]
pub fn format_signed_size(bytes: i64) -> String {
    if bytes < 0 {
        format!("-{}", format_size(bytes.unsigned_abs()))
    } else {
        format_size(bytes.unsigned_abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_zero() {
        assert_eq!(format_size(0), "0 B");
    }

    #[test]
    fn test_format_byte_range_is_integer() {
        assert_eq!(format_size(1), "1 B");
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(1023), "1023 B");
    }

    #[test]
    fn test_format_larger_units_have_two_decimals() {
        assert_eq!(format_size(1024), "1.00 KB");
        assert_eq!(format_size(1536), "1.50 KB");
        assert_eq!(format_size(1024 * 1024), "1.00 MB");
        assert_eq!(format_size(1024 * 1024 * 1024), "1.00 GB");
    }

    #[test]
    fn test_format_stops_at_terabytes() {
        assert_eq!(format_size(1024u64.pow(4)), "1.00 TB");
        // Past the last unit, the value keeps growing instead of rolling over
        assert_eq!(format_size(1024u64.pow(5)), "1024.00 TB");
    }

    #[test]
    fn test_format_signed() {
        assert_eq!(format_signed_size(0), "0 B");
        assert_eq!(format_signed_size(1536), "1.50 KB");
        assert_eq!(format_signed_size(-1536), "-1.50 KB");
        assert_eq!(format_signed_size(-512), "-512 B");
    }
}
