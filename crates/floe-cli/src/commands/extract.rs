//! Extract command: pull object DDL out of the warehouse into files.
//!
//! The output tree mirrors the discovery layout
//! (`<out>/<schema>/<Category>/<name>.sql`), so extracted definitions can be
//! deployed back with `floe deploy`. Per-object failures are logged and the
//! run continues.

use anyhow::{Context, Result};
use floe_core::Category;
use floe_db::Warehouse;
use std::collections::HashSet;
use std::path::Path;

use crate::cli::{ExtractArgs, GlobalArgs};
use crate::commands::common::{create_warehouse, load_config, ExitCode};

/// Execute the extract command
pub async fn execute(args: &ExtractArgs, global: &GlobalArgs) -> Result<()> {
    let (root, config) = load_config(global)?;
    let db = create_warehouse(&config)?;
    let out_dir = root.join(&args.output_dir);

    let schema_filter: Option<HashSet<String>> = args
        .schemas
        .as_ref()
        .map(|s| s.split(',').map(|p| p.trim().to_lowercase()).collect());

    let schemas = db.list_schemas().await.context("Failed to list schemas")?;
    let mut exported = 0;
    let mut failed = 0;

    for schema in &schemas {
        if let Some(filter) = &schema_filter {
            if !filter.contains(&schema.to_lowercase()) {
                continue;
            }
        }

        println!("{}:", schema);
        for category in Category::ALL {
            let objects = match db.list_objects(schema, category).await {
                Ok(objects) => objects,
                Err(e) => {
                    eprintln!("  \u{2717} listing {} failed - {}", category, e);
                    failed += 1;
                    continue;
                }
            };

            for name in &objects {
                match extract_one(db.as_ref(), &out_dir, schema, category, name).await {
                    Ok(()) => {
                        println!("  \u{2713} {}/{}/{}.sql", schema, category.dir_name(), name);
                        exported += 1;
                    }
                    Err(e) => {
                        eprintln!("  \u{2717} {}.{} - {}", schema, name, e);
                        failed += 1;
                    }
                }
            }
        }
    }

    println!("\nExtracted {} objects, {} failures", exported, failed);

    if failed > 0 {
        return Err(ExitCode(1).into());
    }
    Ok(())
}

/// Fetch one object's DDL and write it under the category-shaped tree
async fn extract_one(
    db: &dyn Warehouse,
    out_dir: &Path,
    schema: &str,
    category: Category,
    name: &str,
) -> Result<()> {
    let ddl = db.fetch_ddl(schema, category, name).await?;

    let path = out_dir
        .join(schema)
        .join(category.dir_name())
        .join(format!("{}.sql", name));
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    std::fs::write(&path, ddl).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
