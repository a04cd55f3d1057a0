//! Flutter project detection and discovery.
//!
//! Discovery is shallow by design: only the immediate children of the parent
//! folder are examined. A directory is recognized as a Flutter project by the
//! presence of a `pubspec.yaml` marker file directly inside it.

use std::{fs, path::Path};

use anyhow::{Context, Result};

use crate::project::FlutterProject;

/// Marker file whose presence identifies a Flutter project.
pub const MARKER_FILE: &str = "pubspec.yaml";

/// Check whether a directory is a Flutter project.
///
/// True iff `dir/pubspec.yaml` exists directly inside the directory; the
/// check is not recursive. A missing marker is an ordinary `Ok(false)`.
///
/// # Errors
///
/// Returns an error only when the marker's existence cannot be determined at
/// all (e.g. permission denied on the path itself).
pub fn is_flutter_project(dir: &Path) -> Result<bool> {
    let marker = dir.join(MARKER_FILE);

    marker
        .try_exists()
        .with_context(|| format!("Failed to check for {}", marker.display()))
}

/// Discover Flutter projects among the immediate children of `parent`.
///
/// Skips non-directories and hidden entries (names starting with `.`), then
/// applies the marker-file check to what remains. Matches are returned in the
/// order the filesystem yields them.
///
/// # Errors
///
/// Returns an error if the parent directory cannot be listed, or if a
/// child's marker check fails catastrophically.
pub fn discover_projects(parent: &Path) -> Result<Vec<FlutterProject>> {
    let entries = fs::read_dir(parent)
        .with_context(|| format!("Permission denied or unreadable: {}", parent.display()))?;

    let mut projects = Vec::new();

    for entry in entries {
        let entry =
            entry.with_context(|| format!("Failed to read an entry of {}", parent.display()))?;
        let path = entry.path();

        if !path.is_dir() {
            continue;
        }

        if entry.file_name().to_string_lossy().starts_with('.') {
            continue;
        }

        if is_flutter_project(&path)? {
            let name = read_pubspec_name(&path.join(MARKER_FILE));
            projects.push(FlutterProject::new(path, name));
        }
    }

    Ok(projects)
}

/// Extract the project name from a `pubspec.yaml` file.
///
/// Uses a line-by-line scan for a top-level `name:` field rather than a full
/// YAML parser; this trivial approach handles the common manifest layout.
/// Returns `None` when the file cannot be read or no name field is present.
fn read_pubspec_name(pubspec: &Path) -> Option<String> {
    let content = fs::read_to_string(pubspec).ok()?;
    parse_pubspec_name(&content)
}

/// Parse the `name:` field from pubspec content.
fn parse_pubspec_name(content: &str) -> Option<String> {
    for line in content.lines() {
        // Indented lines belong to nested mappings, not the package name.
        if line.starts_with(char::is_whitespace) {
            continue;
        }

        if let Some(value) = line.trim().strip_prefix("name:") {
            let value = value.trim().trim_matches('"').trim_matches('\'');

            if !value.is_empty() {
                return Some(value.to_string());
            }
        }
    }

    None
}
