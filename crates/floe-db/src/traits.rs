//! Warehouse trait definition

use crate::error::DbResult;
use async_trait::async_trait;
use floe_core::Category;

/// Warehouse abstraction trait for Floe
///
/// Implementations must be Send + Sync for async operation. Execution is
/// one synchronous round-trip per call; the engine waits for completion
/// before driving the next statement.
#[async_trait]
pub trait Warehouse: Send + Sync {
    /// Execute a single SQL statement, returning affected rows
    async fn execute(&self, sql: &str) -> DbResult<usize>;

    /// Execute a multi-statement script as one unit
    async fn execute_batch(&self, sql: &str) -> DbResult<()>;

    /// List user schemas, excluding system schemas
    async fn list_schemas(&self) -> DbResult<Vec<String>>;

    /// List objects of one category within a schema
    async fn list_objects(&self, schema: &str, category: Category) -> DbResult<Vec<String>>;

    /// Fetch the DDL definition of one object
    async fn fetch_ddl(&self, schema: &str, category: Category, name: &str) -> DbResult<String>;

    /// Backend identifier for logging
    fn backend(&self) -> &'static str;
}
