//! Plan command: show the ordered execution plan without applying it

use anyhow::{Context, Result};
use floe_core::DeployPlan;
use std::path::Path;

use crate::cli::{GlobalArgs, PlanArgs};
use crate::commands::common::{discover_migrations, load_config, report_skipped};

/// Execute the plan command
pub async fn execute(args: &PlanArgs, global: &GlobalArgs) -> Result<()> {
    let (root, config) = load_config(global)?;

    let discovered =
        discover_migrations(&root, &config, args.path.as_deref(), args.file_list.as_deref())?;
    report_skipped(&discovered);

    let plan = DeployPlan::build(&discovered, &config.execution_order);
    if plan.is_empty() {
        println!("No migrations found.");
        return Ok(());
    }

    for (category, files) in plan.groups() {
        println!("{} ({} files):", category, files.len());
        for file in files {
            println!("  {}  [version {}]", file.relative_to(&root).display(), file.version);
        }
    }
    println!("\n{} migrations total", plan.len());

    if let Some(output) = &args.output {
        write_sorted_paths(&plan, &root, Path::new(output))?;
        println!("Sorted migration paths written to: {}", output);
    }

    Ok(())
}

/// Write the flattened, ordered path list one per line
fn write_sorted_paths(plan: &DeployPlan, root: &Path, output: &Path) -> Result<()> {
    let mut lines = String::new();
    for file in plan.iter() {
        lines.push_str(&file.relative_to(root).display().to_string());
        lines.push('\n');
    }
    std::fs::write(output, lines)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    Ok(())
}
