//! Snowflake warehouse backend stub
//!
//! Connection settings are read from the conventional `SNOWFLAKE_*`
//! environment variables and validated, but the wire protocol itself is not
//! implemented yet; every operation returns `[D006] NotImplemented`.

use crate::error::{DbError, DbResult};
use crate::traits::Warehouse;
use async_trait::async_trait;
use floe_core::Category;

/// Role used when SNOWFLAKE_ROLE is unset
const DEFAULT_ROLE: &str = "SYSADMIN";

/// Snowflake connection settings from environment variables
#[derive(Debug, Clone)]
pub struct SnowflakeSettings {
    pub account: String,
    pub user: String,
    pub password: String,
    pub warehouse: String,
    pub database: String,
    pub schema: Option<String>,
    pub role: String,
}

impl SnowflakeSettings {
    /// Read settings from `SNOWFLAKE_*` environment variables.
    ///
    /// Account, user, password, warehouse, and database are required;
    /// schema is optional and role defaults to SYSADMIN.
    pub fn from_env() -> DbResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build settings through an arbitrary variable lookup (testable seam)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> DbResult<Self> {
        let required = |name: &str| {
            lookup(name)
                .filter(|v| !v.is_empty())
                .ok_or_else(|| DbError::ConnectionError(format!("{} is not set", name)))
        };

        Ok(Self {
            account: required("SNOWFLAKE_ACCOUNT")?,
            user: required("SNOWFLAKE_USER")?,
            password: required("SNOWFLAKE_PASSWORD")?,
            warehouse: required("SNOWFLAKE_WAREHOUSE")?,
            database: required("SNOWFLAKE_DATABASE")?,
            schema: lookup("SNOWFLAKE_SCHEMA").filter(|v| !v.is_empty()),
            role: lookup("SNOWFLAKE_ROLE")
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_ROLE.to_string()),
        })
    }
}

/// Snowflake warehouse backend (stub implementation)
///
/// This is a placeholder for future Snowflake support.
pub struct SnowflakeWarehouse {
    #[allow(dead_code)]
    settings: SnowflakeSettings,
}

impl SnowflakeWarehouse {
    /// Validate settings and construct the backend (not yet able to connect)
    pub fn connect(settings: SnowflakeSettings) -> DbResult<Self> {
        Ok(Self { settings })
    }

    fn not_implemented(feature: &str) -> DbError {
        DbError::NotImplemented {
            backend: "snowflake".to_string(),
            feature: feature.to_string(),
        }
    }
}

#[async_trait]
impl Warehouse for SnowflakeWarehouse {
    async fn execute(&self, _sql: &str) -> DbResult<usize> {
        Err(Self::not_implemented("execute"))
    }

    async fn execute_batch(&self, _sql: &str) -> DbResult<()> {
        Err(Self::not_implemented("execute_batch"))
    }

    async fn list_schemas(&self) -> DbResult<Vec<String>> {
        Err(Self::not_implemented("list_schemas"))
    }

    async fn list_objects(&self, _schema: &str, _category: Category) -> DbResult<Vec<String>> {
        Err(Self::not_implemented("list_objects"))
    }

    async fn fetch_ddl(&self, _schema: &str, _category: Category, _name: &str) -> DbResult<String> {
        Err(Self::not_implemented("fetch_ddl"))
    }

    fn backend(&self) -> &'static str {
        "snowflake"
    }
}
