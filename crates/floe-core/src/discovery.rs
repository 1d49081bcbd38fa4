//! Migration file discovery
//!
//! Discovery enumerates SQL files either by walking a root directory or by
//! reading a flat list file (one root-relative path per line). Each file is
//! categorized from its path and bucketed; files matching no known category
//! are collected separately and never executed.

use crate::category::Category;
use crate::error::{CoreError, CoreResult};
use crate::migration::MigrationFile;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// SQL file extension recognized during directory walks
const SQL_EXTENSION: &str = "sql";

/// Result of a discovery pass: per-category buckets plus skipped files.
///
/// Built fresh on every run; never cached. Buckets are sorted by
/// `(version, lowercased path)` at construction, so repeated discovery over
/// an unchanged tree yields an identical ordered list.
#[derive(Debug, Default)]
pub struct DiscoveredFiles {
    buckets: HashMap<Category, Vec<MigrationFile>>,
    skipped: Vec<PathBuf>,
}

impl DiscoveredFiles {
    fn insert(&mut self, path: PathBuf) {
        match Category::from_path(&path) {
            Some(category) => {
                let file = MigrationFile::new(path, category);
                self.buckets.entry(category).or_default().push(file);
            }
            None => {
                log::warn!("Skipping {}: no recognized category", path.display());
                self.skipped.push(path);
            }
        }
    }

    fn sort_buckets(&mut self) {
        for files in self.buckets.values_mut() {
            files.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
        }
        self.skipped.sort();
    }

    /// Ordered files for one category, empty when the category is absent
    pub fn bucket(&self, category: Category) -> &[MigrationFile] {
        self.buckets
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Files that matched no known category (reported, never executed)
    pub fn skipped(&self) -> &[PathBuf] {
        &self.skipped
    }

    /// Total number of categorized files
    pub fn len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    /// True when no categorized files were found
    pub fn is_empty(&self) -> bool {
        self.buckets.values().all(Vec::is_empty)
    }
}

/// Recursively discover `*.sql` files under `root`.
///
/// A missing root is non-fatal: a warning is logged and an empty set is
/// returned, so a run over a root with nothing to do still succeeds.
pub fn discover(root: &Path) -> CoreResult<DiscoveredFiles> {
    let mut discovered = DiscoveredFiles::default();

    if !root.exists() {
        log::warn!(
            "Migration root {} does not exist; nothing to deploy",
            root.display()
        );
        return Ok(discovered);
    }

    walk_sql_files(root, &mut discovered)?;
    discovered.sort_buckets();
    Ok(discovered)
}

/// Discover `*.sql` files under several roots, merged into one set.
///
/// Missing roots are skipped with a warning, same as [`discover`].
pub fn discover_all(roots: &[PathBuf]) -> CoreResult<DiscoveredFiles> {
    let mut discovered = DiscoveredFiles::default();

    for root in roots {
        if !root.exists() {
            log::warn!(
                "Migration root {} does not exist; nothing to deploy",
                root.display()
            );
            continue;
        }
        walk_sql_files(root, &mut discovered)?;
    }

    discovered.sort_buckets();
    Ok(discovered)
}

/// Discover migration files from a flat list file.
///
/// Each non-blank line is a path resolved against `root`. The list file
/// itself must exist; listed entries that do not exist on disk are skipped
/// with a warning.
pub fn discover_from_list(root: &Path, list_path: &Path) -> CoreResult<DiscoveredFiles> {
    if !list_path.exists() {
        return Err(CoreError::ListFileNotFound {
            path: list_path.display().to_string(),
        });
    }

    let content = std::fs::read_to_string(list_path).map_err(|e| CoreError::IoWithPath {
        path: list_path.display().to_string(),
        source: e,
    })?;

    let mut discovered = DiscoveredFiles::default();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let path = root.join(line);
        if !path.exists() {
            log::warn!("Listed file {} does not exist; skipping", path.display());
            continue;
        }
        discovered.insert(path);
    }

    discovered.sort_buckets();
    Ok(discovered)
}

fn walk_sql_files(dir: &Path, discovered: &mut DiscoveredFiles) -> CoreResult<()> {
    for entry in std::fs::read_dir(dir).map_err(|e| CoreError::IoWithPath {
        path: dir.display().to_string(),
        source: e,
    })? {
        let entry = entry.map_err(|e| CoreError::IoWithPath {
            path: dir.display().to_string(),
            source: e,
        })?;
        let path = entry.path();
        if path.is_dir() {
            walk_sql_files(&path, discovered)?;
            continue;
        }
        if path
            .extension()
            .is_some_and(|e| e.eq_ignore_ascii_case(SQL_EXTENSION))
        {
            discovered.insert(path);
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "discovery_test.rs"]
mod tests;
