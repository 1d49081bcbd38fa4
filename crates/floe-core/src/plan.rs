//! Deploy plan construction
//!
//! A plan flattens discovered buckets into the exact sequence the executor
//! will drive: categories in the caller-supplied execution order, files
//! within each category already sorted by (version, path) at discovery time.

use crate::category::Category;
use crate::discovery::DiscoveredFiles;
use crate::migration::MigrationFile;

/// Ordered execution plan for one deploy run
#[derive(Debug, Default)]
pub struct DeployPlan {
    groups: Vec<(Category, Vec<MigrationFile>)>,
}

impl DeployPlan {
    /// Build a plan from discovered files and a category execution order.
    ///
    /// Categories absent from the discovered set, or present with zero
    /// files, are skipped and do not appear in the plan. Duplicate entries
    /// in `execution_order` are rejected by config validation upstream.
    pub fn build(discovered: &DiscoveredFiles, execution_order: &[Category]) -> Self {
        let groups = execution_order
            .iter()
            .filter_map(|&category| {
                let files = discovered.bucket(category);
                if files.is_empty() {
                    None
                } else {
                    Some((category, files.to_vec()))
                }
            })
            .collect();

        Self { groups }
    }

    /// Per-category groups in execution order
    pub fn groups(&self) -> &[(Category, Vec<MigrationFile>)] {
        &self.groups
    }

    /// All files flattened into execution order
    pub fn iter(&self) -> impl Iterator<Item = &MigrationFile> {
        self.groups.iter().flat_map(|(_, files)| files.iter())
    }

    /// Total number of files in the plan
    pub fn len(&self) -> usize {
        self.groups.iter().map(|(_, files)| files.len()).sum()
    }

    /// True when there is nothing to execute
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

#[cfg(test)]
#[path = "plan_test.rs"]
mod tests;
