//! Script application
//!
//! Drives one migration file through a [`Warehouse`], choosing between
//! whole-file and per-statement execution and honoring the configured
//! per-statement failure policy.

use crate::error::{DbError, DbResult};
use crate::statement::{execution_mode, split_statements, ExecutionMode};
use crate::traits::Warehouse;
use floe_core::StatementPolicy;
use std::path::Path;

/// Applies migration scripts against a warehouse.
///
/// Stateless apart from the policy; one runner serves a whole deploy run.
#[derive(Debug, Clone, Copy)]
pub struct ScriptRunner {
    policy: StatementPolicy,
}

impl ScriptRunner {
    /// Create a runner with the given per-statement failure policy
    pub fn new(policy: StatementPolicy) -> Self {
        Self { policy }
    }

    /// Apply one script file.
    ///
    /// Reads the file, selects the execution mode, and drives the warehouse
    /// one statement at a time (or once, for whole-file scripts). Every
    /// failure is returned as an error value; nothing panics or propagates
    /// uncaught.
    pub async fn apply(&self, db: &dyn Warehouse, path: &Path) -> DbResult<()> {
        let sql = std::fs::read_to_string(path).map_err(|e| DbError::ScriptRead {
            path: path.display().to_string(),
            source: e,
        })?;

        match execution_mode(&sql) {
            ExecutionMode::WholeFile => db.execute_batch(&sql).await,
            ExecutionMode::PerStatement => self.apply_statements(db, path, &sql).await,
        }
    }

    async fn apply_statements(&self, db: &dyn Warehouse, path: &Path, sql: &str) -> DbResult<()> {
        let statements = split_statements(sql);
        let total = statements.len();
        let mut failed = 0;

        for statement in statements {
            match db.execute(statement).await {
                Ok(_) => {}
                Err(e) => match self.policy {
                    StatementPolicy::AbortFile => return Err(e),
                    StatementPolicy::Continue => {
                        log::warn!("Statement failed in {}: {}", path.display(), e);
                        failed += 1;
                    }
                },
            }
        }

        if failed > 0 {
            return Err(DbError::StatementsFailed {
                path: path.display().to_string(),
                failed,
                total,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "script_test.rs"]
mod tests;
