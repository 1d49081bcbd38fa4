//! floe-core - Core library for Floe
//!
//! This crate provides version parsing, migration file discovery, deploy-plan
//! ordering, and configuration shared across all Floe components.

pub mod category;
pub mod config;
pub mod discovery;
pub mod error;
pub mod migration;
pub mod plan;
pub mod version;

pub use category::Category;
pub use config::{Config, DbType, StatementPolicy};
pub use discovery::{discover, discover_all, discover_from_list, DiscoveredFiles};
pub use error::{CoreError, CoreResult};
pub use migration::MigrationFile;
pub use plan::DeployPlan;
pub use version::{Component, VersionKey};
