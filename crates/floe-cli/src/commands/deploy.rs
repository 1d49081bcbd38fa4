//! Deploy command: sequential migration application.
//!
//! Files are applied one at a time in plan order. A failed file never
//! aborts the run — execution continues with the next file and the failure
//! is reflected in the exit code and results file.

use anyhow::Result;
use chrono::Utc;
use floe_core::{DeployPlan, MigrationFile};
use floe_db::{ScriptRunner, Warehouse};
use serde::Serialize;
use std::path::Path;
use std::time::Instant;

use crate::cli::{DeployArgs, GlobalArgs};
use crate::commands::common::{
    create_warehouse, discover_migrations, load_config, report_skipped, write_json_results,
    CommandResults, ExitCode, RunStatus,
};

/// Outcome of applying one migration file
#[derive(Debug, Clone, Serialize)]
pub(crate) struct MigrationRunResult {
    pub file: String,
    pub category: String,
    pub status: RunStatus,
    pub duration_secs: f64,
    pub error: Option<String>,
}

/// Execute the deploy command
pub async fn execute(args: &DeployArgs, global: &GlobalArgs) -> Result<()> {
    let (root, config) = load_config(global)?;

    let discovered =
        discover_migrations(&root, &config, args.path.as_deref(), args.file_list.as_deref())?;
    report_skipped(&discovered);

    let plan = DeployPlan::build(&discovered, &config.execution_order);
    if plan.is_empty() {
        println!("No migrations found; nothing to deploy.");
        return Ok(());
    }

    let db = create_warehouse(&config)?;
    let runner = ScriptRunner::new(config.on_statement_error);

    if global.verbose {
        eprintln!(
            "[verbose] Deploying {} migrations to {} ({})",
            plan.len(),
            config.name,
            db.backend()
        );
    }

    let start = Instant::now();
    let (results, success_count, failure_count) =
        apply_plan(&runner, db.as_ref(), &plan, &root).await;
    let elapsed = start.elapsed();

    println!(
        "\nDeployed {} migrations in {:.2}s: {} succeeded, {} failed",
        plan.len(),
        elapsed.as_secs_f64(),
        success_count,
        failure_count
    );

    let results_path = config.target_path_absolute(&root).join("deploy_results.json");
    let envelope = CommandResults {
        timestamp: Utc::now(),
        elapsed_secs: elapsed.as_secs_f64(),
        success_count,
        failure_count,
        results,
    };
    if let Err(e) = write_json_results(&results_path, &envelope) {
        eprintln!("[warn] Failed to write deploy results: {}", e);
    }

    if failure_count > 0 {
        return Err(ExitCode(1).into());
    }
    Ok(())
}

/// Apply every file in the plan, in order, recording per-file outcomes.
///
/// Never aborts early: a failed file is recorded and execution continues
/// with the next file in the same category and subsequent categories.
/// Returns `(results, success_count, failure_count)`.
pub(crate) async fn apply_plan(
    runner: &ScriptRunner,
    db: &dyn Warehouse,
    plan: &DeployPlan,
    root: &Path,
) -> (Vec<MigrationRunResult>, usize, usize) {
    let mut results = Vec::with_capacity(plan.len());
    let mut success_count = 0;
    let mut failure_count = 0;

    for (category, files) in plan.groups() {
        println!("{}:", category);
        for file in files {
            let result = apply_one(runner, db, file, root).await;
            match result.status {
                RunStatus::Success => success_count += 1,
                RunStatus::Error => failure_count += 1,
            }
            results.push(result);
        }
    }

    (results, success_count, failure_count)
}

async fn apply_one(
    runner: &ScriptRunner,
    db: &dyn Warehouse,
    file: &MigrationFile,
    root: &Path,
) -> MigrationRunResult {
    let display_path = file.relative_to(root).display().to_string();
    let file_start = Instant::now();

    match runner.apply(db, &file.path).await {
        Ok(()) => {
            let duration = file_start.elapsed();
            println!(
                "  \u{2713} {} [{}ms]",
                display_path,
                duration.as_millis()
            );
            MigrationRunResult {
                file: display_path,
                category: file.category.to_string(),
                status: RunStatus::Success,
                duration_secs: duration.as_secs_f64(),
                error: None,
            }
        }
        Err(e) => {
            let duration = file_start.elapsed();
            println!(
                "  \u{2717} {} - {} [{}ms]",
                display_path,
                e,
                duration.as_millis()
            );
            MigrationRunResult {
                file: display_path,
                category: file.category.to_string(),
                status: RunStatus::Error,
                duration_secs: duration.as_secs_f64(),
                error: Some(e.to_string()),
            }
        }
    }
}

#[cfg(test)]
#[path = "deploy_test.rs"]
mod tests;
