//! Discovered migration file model

use crate::category::Category;
use crate::version::{version_token, VersionKey};
use std::path::{Path, PathBuf};

/// One discovered migration file.
///
/// Constructed once during discovery and immutable thereafter. The version
/// key is derived from the filename stem at construction time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationFile {
    /// Path as discovered (root-relative or absolute, per the discovery input)
    pub path: PathBuf,
    /// Inferred object category
    pub category: Category,
    /// Ordering key parsed from the filename
    pub version: VersionKey,
}

impl MigrationFile {
    /// Build a migration file record, parsing the version from the stem
    pub fn new(path: PathBuf, category: Category) -> Self {
        let version = path
            .file_stem()
            .and_then(|s| s.to_str())
            .map(|stem| VersionKey::parse(version_token(stem)))
            .unwrap_or_else(VersionKey::fallback);

        Self {
            path,
            category,
            version,
        }
    }

    /// Sort key: version first, lowercased path as the deterministic
    /// tie-break when versions collide or are both the fallback.
    pub fn sort_key(&self) -> (VersionKey, String) {
        (
            self.version.clone(),
            self.path.to_string_lossy().to_lowercase(),
        )
    }

    /// The filename without directories, for display
    pub fn file_name(&self) -> &str {
        self.path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("<invalid>")
    }

    /// The path relative to `root`, falling back to the full path
    pub fn relative_to(&self, root: &Path) -> &Path {
        self.path.strip_prefix(root).unwrap_or(&self.path)
    }
}

#[cfg(test)]
#[path = "migration_test.rs"]
mod tests;
