//! Error types for floe-db

use thiserror::Error;

/// Warehouse operation errors
#[derive(Error, Debug)]
pub enum DbError {
    /// Connection error (D001)
    #[error("[D001] Warehouse connection failed: {0}")]
    ConnectionError(String),

    /// Statement execution error (D002)
    #[error("[D002] SQL execution failed: {0}")]
    ExecutionError(String),

    /// Script file could not be read (D003)
    #[error("[D003] Failed to read script '{path}': {source}")]
    ScriptRead {
        path: String,
        source: std::io::Error,
    },

    /// One or more statements in a script failed (D004)
    #[error("[D004] {failed} of {total} statements failed in '{path}'")]
    StatementsFailed {
        path: String,
        failed: usize,
        total: usize,
    },

    /// Object not found during extraction (D005)
    #[error("[D005] Object not found: {0}")]
    ObjectNotFound(String),

    /// Not implemented (D006)
    #[error("[D006] Feature not implemented for {backend}: {feature}")]
    NotImplemented { backend: String, feature: String },
}

/// Result type alias for DbError
pub type DbResult<T> = Result<T, DbError>;
