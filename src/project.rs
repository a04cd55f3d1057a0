//! Core project data structures.
//!
//! This module defines the representation of a discovered Flutter project:
//! its root directory and a display name extracted from the project's
//! `pubspec.yaml` manifest.

use std::{
    fmt::{Display, Formatter, Result},
    path::PathBuf,
};

/// A Flutter project discovered under the parent folder.
///
/// Identified by its root directory; the directory exists outside this
/// program's control and nothing here owns or mutates it.
#[derive(Clone, Debug)]
pub struct FlutterProject {
    /// Absolute path to the project's root directory
    pub path: PathBuf,

    /// Display name: the `name:` field from `pubspec.yaml` when it can be
    /// parsed, otherwise the directory's base name
    pub name: String,
}

impl FlutterProject {
    /// Create a project from its root directory and an optional manifest name.
    ///
    /// When `name` is `None` the directory's base name is used instead.
    #[must_use]
    pub fn new(path: PathBuf, name: Option<String>) -> Self {
        let name = name.unwrap_or_else(|| {
            path.file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string())
        });

        Self { path, name }
    }
}

impl Display for FlutterProject {
    /// Format the project as `name (path)` for operator-facing output.
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} ({})", self.name, self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_name_preferred() {
        let project = FlutterProject::new(
            PathBuf::from("/home/user/apps/my_dir"),
            Some("my_app".to_string()),
        );

        assert_eq!(project.name, "my_app");
    }

    #[test]
    fn test_falls_back_to_directory_name() {
        let project = FlutterProject::new(PathBuf::from("/home/user/apps/my_dir"), None);

        assert_eq!(project.name, "my_dir");
    }

    #[test]
    fn test_display_includes_name_and_path() {
        let project =
            FlutterProject::new(PathBuf::from("/apps/demo"), Some("demo_app".to_string()));

        assert_eq!(project.to_string(), "demo_app (/apps/demo)");
    }
}
