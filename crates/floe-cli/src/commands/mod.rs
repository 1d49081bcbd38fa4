//! Command implementations

pub mod common;
pub mod deploy;
pub mod extract;
pub mod plan;
