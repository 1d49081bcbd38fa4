//! Configuration types and parsing for floe.yml

use crate::category::Category;
use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main project configuration from floe.yml
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Project name
    pub name: String,

    /// Directories containing migration SQL files
    #[serde(default = "default_sql_paths")]
    pub sql_paths: Vec<String>,

    /// Category execution order for deploys
    #[serde(default = "default_execution_order")]
    pub execution_order: Vec<Category>,

    /// What to do when a statement inside a file fails
    #[serde(default)]
    pub on_statement_error: StatementPolicy,

    /// Output directory for run results
    #[serde(default = "default_target_path")]
    pub target_path: String,

    /// Database connection configuration
    #[serde(default)]
    pub database: DatabaseConfig,
}

/// Per-statement failure policy within a single file.
///
/// Either way the file is reported failed and the run continues to the
/// next file; the policy only controls whether the remaining statements
/// of the failing file are attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StatementPolicy {
    /// Stop the file at the first failed statement (default)
    #[default]
    AbortFile,
    /// Attempt every statement in the file
    Continue,
}

impl std::fmt::Display for StatementPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatementPolicy::AbortFile => write!(f, "abort_file"),
            StatementPolicy::Continue => write!(f, "continue"),
        }
    }
}

/// Database type selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DbType {
    /// DuckDB (default)
    #[default]
    DuckDb,
    /// Snowflake
    Snowflake,
}

impl std::fmt::Display for DbType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DbType::DuckDb => write!(f, "duckdb"),
            DbType::Snowflake => write!(f, "snowflake"),
        }
    }
}

/// Database connection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database type (duckdb or snowflake)
    #[serde(rename = "type", default)]
    pub db_type: DbType,

    /// Database path (for DuckDB file-based or :memory:)
    #[serde(default = "default_db_path")]
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            db_type: DbType::default(),
            path: default_db_path(),
        }
    }
}

fn default_sql_paths() -> Vec<String> {
    vec!["sql".to_string()]
}

fn default_execution_order() -> Vec<Category> {
    Category::ALL.to_vec()
}

fn default_target_path() -> String {
    "target".to_string()
}

const DEFAULT_DB_PATH: &str = ":memory:";

fn default_db_path() -> String {
    DEFAULT_DB_PATH.to_string()
}

impl Config {
    /// Load configuration from a file path
    pub fn load(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Err(CoreError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;
        let config: Config = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a project directory
    /// Looks for floe.yml or floe.yaml
    pub fn load_from_dir(dir: &Path) -> CoreResult<Self> {
        let yml_path = dir.join("floe.yml");
        let yaml_path = dir.join("floe.yaml");

        if yml_path.exists() {
            Self::load(&yml_path)
        } else if yaml_path.exists() {
            Self::load(&yaml_path)
        } else {
            Err(CoreError::ConfigNotFound {
                path: yml_path.display().to_string(),
            })
        }
    }

    /// Validate the configuration
    fn validate(&self) -> CoreResult<()> {
        if self.name.is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "Project name cannot be empty".to_string(),
            });
        }

        if self.sql_paths.is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "At least one sql_paths entry must be specified".to_string(),
            });
        }

        if self.execution_order.is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "execution_order cannot be empty".to_string(),
            });
        }

        for (i, category) in self.execution_order.iter().enumerate() {
            if self.execution_order[..i].contains(category) {
                return Err(CoreError::ConfigInvalid {
                    message: format!("Duplicate category '{}' in execution_order", category),
                });
            }
        }

        Ok(())
    }

    /// Resolve relative path strings to absolute paths against a root directory
    pub fn sql_paths_absolute(&self, root: &Path) -> Vec<PathBuf> {
        self.sql_paths.iter().map(|p| root.join(p)).collect()
    }

    /// Get absolute target path relative to a project root
    pub fn target_path_absolute(&self, root: &Path) -> PathBuf {
        root.join(&self.target_path)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
