//! floe-db - Warehouse abstraction layer for Floe
//!
//! This crate provides the `Warehouse` trait, the script runner that drives
//! migration files through it, and implementations for DuckDB (and a
//! Snowflake stub for future implementation).

pub mod duckdb;
pub mod error;
pub mod script;
pub mod snowflake;
pub mod statement;
pub mod traits;

pub use duckdb::DuckDbWarehouse;
pub use error::{DbError, DbResult};
pub use script::ScriptRunner;
pub use snowflake::{SnowflakeSettings, SnowflakeWarehouse};
pub use statement::{execution_mode, split_statements, ExecutionMode};
pub use traits::Warehouse;
