//! Shared utilities for CLI commands

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use floe_core::{discover_all, discover_from_list, Config, DbType, DiscoveredFiles};
use floe_db::{DuckDbWarehouse, SnowflakeSettings, SnowflakeWarehouse, Warehouse};
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::cli::GlobalArgs;

/// Error type representing a non-zero process exit code.
///
/// Use `return Err(ExitCode(N).into())` instead of `std::process::exit(N)`
/// so that RAII destructors run and cleanup happens properly.
#[derive(Debug)]
pub(crate) struct ExitCode(pub(crate) i32);

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Intentionally empty: ExitCode is a control-flow mechanism, not a
        // user-facing error. If anyhow's Display chain ever reaches this
        // (e.g. downcast_ref fails in main.rs), we don't want "exit code N"
        // leaking into stderr.
        write!(f, "")
    }
}

impl std::error::Error for ExitCode {}

/// Status for per-file migration outcomes.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum RunStatus {
    Success,
    Error,
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunStatus::Success => write!(f, "success"),
            RunStatus::Error => write!(f, "error"),
        }
    }
}

/// Resolve the project root and load its configuration.
pub(crate) fn load_config(global: &GlobalArgs) -> Result<(PathBuf, Config)> {
    let root = PathBuf::from(&global.project_dir);
    let config = match &global.config {
        Some(path) => Config::load(Path::new(path)),
        None => Config::load_from_dir(&root),
    }
    .context("Failed to load config")?;
    Ok((root, config))
}

/// Discover migration files from the configured roots, a path override,
/// or a list file.
///
/// Priority: `--file-list` > `--path` > `sql_paths` from config.
pub(crate) fn discover_migrations(
    root: &Path,
    config: &Config,
    path_override: Option<&str>,
    file_list: Option<&str>,
) -> Result<DiscoveredFiles> {
    let discovered = if let Some(list) = file_list {
        discover_from_list(root, &root.join(list))
    } else if let Some(path) = path_override {
        discover_all(&[root.join(path)])
    } else {
        discover_all(&config.sql_paths_absolute(root))
    }
    .context("Migration discovery failed")?;

    Ok(discovered)
}

/// Report files that matched no known category.
pub(crate) fn report_skipped(discovered: &DiscoveredFiles) {
    for path in discovered.skipped() {
        eprintln!("[warn] Skipping {}: no recognized category", path.display());
    }
}

/// Create a warehouse connection from a config.
pub(crate) fn create_warehouse(config: &Config) -> Result<Arc<dyn Warehouse>> {
    let db: Arc<dyn Warehouse> = match config.database.db_type {
        DbType::DuckDb => Arc::new(
            DuckDbWarehouse::new(&config.database.path)
                .context("Failed to connect to warehouse")?,
        ),
        DbType::Snowflake => {
            let settings =
                SnowflakeSettings::from_env().context("Failed to read Snowflake settings")?;
            Arc::new(
                SnowflakeWarehouse::connect(settings)
                    .context("Failed to connect to warehouse")?,
            )
        }
    };
    Ok(db)
}

/// Generic wrapper for command results written to JSON.
///
/// Commands that report per-item outcomes share the same envelope: a
/// timestamp, elapsed seconds, success/failure counts, and a vec of
/// per-item results.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct CommandResults<T: Serialize> {
    pub timestamp: DateTime<Utc>,
    pub elapsed_secs: f64,
    pub success_count: usize,
    pub failure_count: usize,
    pub results: Vec<T>,
}

/// Serialize `data` as pretty-printed JSON and write it to `path`.
///
/// Creates any missing parent directories before writing.
pub(crate) fn write_json_results<T: Serialize + ?Sized>(path: &Path, data: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).context("Failed to create target directory")?;
    }
    let json = serde_json::to_string_pretty(data).context("Failed to serialize results")?;
    std::fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
