//! DuckDB warehouse backend implementation

use crate::error::{DbError, DbResult};
use crate::traits::Warehouse;
use async_trait::async_trait;
use duckdb::{params, Connection};
use floe_core::Category;
use std::path::Path;
use std::sync::Mutex;

/// Schemas never reported by `list_schemas`
const SYSTEM_SCHEMAS: [&str; 2] = ["information_schema", "pg_catalog"];

/// DuckDB warehouse backend
pub struct DuckDbWarehouse {
    conn: Mutex<Connection>,
}

impl DuckDbWarehouse {
    /// Create a new in-memory DuckDB connection
    pub fn in_memory() -> DbResult<Self> {
        let conn =
            Connection::open_in_memory().map_err(|e| DbError::ConnectionError(e.to_string()))?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Create a new DuckDB connection from a file path
    pub fn from_path(path: &Path) -> DbResult<Self> {
        let conn = Connection::open(path).map_err(|e| DbError::ConnectionError(e.to_string()))?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Create from path string (handles :memory: special case)
    pub fn new(path: &str) -> DbResult<Self> {
        if path == ":memory:" {
            Self::in_memory()
        } else {
            Self::from_path(Path::new(path))
        }
    }

    fn lock_conn(&self) -> std::sync::MutexGuard<'_, Connection> {
        self.conn.lock().unwrap_or_else(|p| p.into_inner())
    }

    /// Execute SQL synchronously
    fn execute_sync(&self, sql: &str) -> DbResult<usize> {
        let conn = self.lock_conn();
        conn.execute(sql, [])
            .map_err(|e| DbError::ExecutionError(format!("{}: {}", e, sql)))
    }

    /// Execute batch SQL synchronously
    fn execute_batch_sync(&self, sql: &str) -> DbResult<()> {
        let conn = self.lock_conn();
        conn.execute_batch(sql)
            .map_err(|e| DbError::ExecutionError(e.to_string()))
    }

    /// Query the first column of every row as strings
    fn query_strings_sync(&self, sql: &str, params: &[&dyn duckdb::ToSql]) -> DbResult<Vec<String>> {
        let conn = self.lock_conn();
        let mut stmt = conn
            .prepare(sql)
            .map_err(|e| DbError::ExecutionError(e.to_string()))?;
        let rows = stmt
            .query_map(params, |row| row.get::<_, String>(0))
            .map_err(|e| DbError::ExecutionError(e.to_string()))?;

        let mut values = Vec::new();
        for row in rows {
            values.push(row.map_err(|e| DbError::ExecutionError(e.to_string()))?);
        }
        Ok(values)
    }
}

#[async_trait]
impl Warehouse for DuckDbWarehouse {
    async fn execute(&self, sql: &str) -> DbResult<usize> {
        self.execute_sync(sql)
    }

    async fn execute_batch(&self, sql: &str) -> DbResult<()> {
        self.execute_batch_sync(sql)
    }

    async fn list_schemas(&self) -> DbResult<Vec<String>> {
        let excluded = SYSTEM_SCHEMAS
            .iter()
            .map(|s| format!("'{}'", s))
            .collect::<Vec<_>>()
            .join(", ");
        // schemata reports one row per attached catalog (memory, system,
        // temp), so the same schema name appears several times without
        // DISTINCT.
        let sql = format!(
            "SELECT DISTINCT schema_name FROM information_schema.schemata \
             WHERE schema_name NOT IN ({}) ORDER BY schema_name",
            excluded
        );
        self.query_strings_sync(&sql, &[])
    }

    async fn list_objects(&self, schema: &str, category: Category) -> DbResult<Vec<String>> {
        let sql = match category {
            Category::Tables => {
                "SELECT table_name FROM duckdb_tables() WHERE schema_name = ? ORDER BY table_name"
            }
            Category::Views => {
                "SELECT view_name FROM duckdb_views() WHERE schema_name = ? AND NOT internal \
                 ORDER BY view_name"
            }
            // DuckDB has no stored procedures or triggers
            Category::Procedures | Category::Triggers => {
                log::debug!("DuckDB does not support {}; listing none", category);
                return Ok(Vec::new());
            }
        };
        self.query_strings_sync(sql, &[&schema])
    }

    async fn fetch_ddl(&self, schema: &str, category: Category, name: &str) -> DbResult<String> {
        let sql = match category {
            Category::Tables => "SELECT sql FROM duckdb_tables() WHERE schema_name = ? AND table_name = ?",
            Category::Views => "SELECT sql FROM duckdb_views() WHERE schema_name = ? AND view_name = ?",
            Category::Procedures | Category::Triggers => {
                return Err(DbError::NotImplemented {
                    backend: "duckdb".to_string(),
                    feature: format!("{} DDL extraction", category),
                })
            }
        };

        let conn = self.lock_conn();
        conn.query_row(sql, params![schema, name], |row| row.get::<_, String>(0))
            .map_err(|e| match e {
                duckdb::Error::QueryReturnedNoRows => {
                    DbError::ObjectNotFound(format!("{}.{}", schema, name))
                }
                other => DbError::ExecutionError(other.to_string()),
            })
    }

    fn backend(&self) -> &'static str {
        "duckdb"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_in_memory() {
        let db = DuckDbWarehouse::in_memory().unwrap();
        assert_eq!(db.backend(), "duckdb");
    }

    #[tokio::test]
    async fn test_execute_and_batch() {
        let db = DuckDbWarehouse::in_memory().unwrap();
        db.execute("CREATE TABLE t (id INT)").await.unwrap();
        db.execute_batch("INSERT INTO t VALUES (1); INSERT INTO t VALUES (2);")
            .await
            .unwrap();

        let rows = db.execute("DELETE FROM t").await.unwrap();
        assert_eq!(rows, 2);
    }

    #[tokio::test]
    async fn test_execute_error_includes_sql() {
        let db = DuckDbWarehouse::in_memory().unwrap();
        let err = db.execute("SELECT * FROM missing_table").await.unwrap_err();
        assert!(err.to_string().contains("missing_table"));
    }

    #[tokio::test]
    async fn test_list_schemas_excludes_system() {
        let db = DuckDbWarehouse::in_memory().unwrap();
        db.execute("CREATE SCHEMA staging").await.unwrap();

        let schemas = db.list_schemas().await.unwrap();
        assert!(schemas.contains(&"staging".to_string()));
        assert!(!schemas.contains(&"information_schema".to_string()));

        // One entry per schema, regardless of how many catalogs report it
        let unique: std::collections::HashSet<&String> = schemas.iter().collect();
        assert_eq!(unique.len(), schemas.len());
    }

    #[tokio::test]
    async fn test_list_objects_tables_and_views() {
        let db = DuckDbWarehouse::in_memory().unwrap();
        db.execute_batch(
            "CREATE TABLE orders (id INT); CREATE VIEW daily AS SELECT * FROM orders;",
        )
        .await
        .unwrap();

        let tables = db.list_objects("main", Category::Tables).await.unwrap();
        assert_eq!(tables, vec!["orders"]);

        let views = db.list_objects("main", Category::Views).await.unwrap();
        assert_eq!(views, vec!["daily"]);
    }

    #[tokio::test]
    async fn test_list_objects_unsupported_categories_empty() {
        let db = DuckDbWarehouse::in_memory().unwrap();
        assert!(db
            .list_objects("main", Category::Procedures)
            .await
            .unwrap()
            .is_empty());
        assert!(db
            .list_objects("main", Category::Triggers)
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_fetch_ddl_for_table() {
        let db = DuckDbWarehouse::in_memory().unwrap();
        db.execute("CREATE TABLE orders (id INT)").await.unwrap();

        let ddl = db.fetch_ddl("main", Category::Tables, "orders").await.unwrap();
        assert!(ddl.to_uppercase().contains("CREATE TABLE"));
        assert!(ddl.contains("orders"));
    }

    #[tokio::test]
    async fn test_fetch_ddl_missing_object() {
        let db = DuckDbWarehouse::in_memory().unwrap();
        let err = db
            .fetch_ddl("main", Category::Tables, "ghost")
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::ObjectNotFound(_)));
    }
}
