//! Warehouse object categories
//!
//! Migration files are grouped by the object type they create or modify.
//! The category determines the relative execution phase: tables must exist
//! before the views that read them, procedures before the triggers that
//! call them. The set is closed; files matching no category are skipped.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Object-type grouping for migration files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Table DDL
    Tables,
    /// View DDL
    Views,
    /// Stored procedure DDL
    Procedures,
    /// Trigger DDL
    Triggers,
}

impl Category {
    /// All categories in the default execution order
    pub const ALL: [Category; 4] = [
        Category::Tables,
        Category::Views,
        Category::Procedures,
        Category::Triggers,
    ];

    /// Parse a category name, case-insensitively. Returns None for
    /// unrecognized names.
    pub fn parse(s: &str) -> Option<Category> {
        match s.to_lowercase().as_str() {
            "tables" => Some(Category::Tables),
            "views" => Some(Category::Views),
            "procedures" => Some(Category::Procedures),
            "triggers" => Some(Category::Triggers),
            _ => None,
        }
    }

    /// Infer the category from a file's path.
    ///
    /// Checks the immediate parent directory name first, then scans the
    /// remaining path segments. Matching is an exact case-insensitive
    /// segment comparison — substring matching would misfire on names
    /// like `customer_views_raw`.
    pub fn from_path(path: &Path) -> Option<Category> {
        if let Some(parent) = path
            .parent()
            .and_then(|p| p.file_name())
            .and_then(|n| n.to_str())
        {
            if let Some(category) = Category::parse(parent) {
                return Some(category);
            }
        }

        path.components()
            .filter_map(|c| c.as_os_str().to_str())
            .find_map(Category::parse)
    }

    /// Directory name used when writing extracted DDL (`Tables`, `Views`, ...)
    pub fn dir_name(&self) -> &'static str {
        match self {
            Category::Tables => "Tables",
            Category::Views => "Views",
            Category::Procedures => "Procedures",
            Category::Triggers => "Triggers",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Tables => write!(f, "tables"),
            Category::Views => write!(f, "views"),
            Category::Procedures => write!(f, "procedures"),
            Category::Triggers => write!(f, "triggers"),
        }
    }
}

#[cfg(test)]
#[path = "category_test.rs"]
mod tests;
