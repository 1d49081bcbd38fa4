use super::*;
use crate::discovery::discover;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_file(root: &Path, rel: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "SELECT 1;").unwrap();
}

#[test]
fn test_plan_follows_execution_order() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "Tables/1_create.sql");
    write_file(dir.path(), "Tables/2_alter.sql");
    write_file(dir.path(), "Views/1_v.sql");

    let discovered = discover(dir.path()).unwrap();
    let plan = DeployPlan::build(&discovered, &[Category::Tables, Category::Views]);

    let names: Vec<&str> = plan.iter().map(|m| m.file_name()).collect();
    assert_eq!(names, vec!["1_create.sql", "2_alter.sql", "1_v.sql"]);
}

#[test]
fn test_plan_respects_reversed_order() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "Tables/1_t.sql");
    write_file(dir.path(), "Views/1_v.sql");

    let discovered = discover(dir.path()).unwrap();
    let plan = DeployPlan::build(&discovered, &[Category::Views, Category::Tables]);

    let names: Vec<&str> = plan.iter().map(|m| m.file_name()).collect();
    assert_eq!(names, vec!["1_v.sql", "1_t.sql"]);
}

#[test]
fn test_plan_skips_empty_categories() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "Tables/1_t.sql");

    let discovered = discover(dir.path()).unwrap();
    let plan = DeployPlan::build(&discovered, &Category::ALL);

    assert_eq!(plan.groups().len(), 1);
    assert_eq!(plan.groups()[0].0, Category::Tables);
}

#[test]
fn test_plan_excludes_categories_not_in_order() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "Tables/1_t.sql");
    write_file(dir.path(), "Triggers/1_trg.sql");

    let discovered = discover(dir.path()).unwrap();
    let plan = DeployPlan::build(&discovered, &[Category::Tables]);

    assert_eq!(plan.len(), 1);
    assert_eq!(plan.iter().next().map(|m| m.category), Some(Category::Tables));
}

#[test]
fn test_empty_plan() {
    let dir = TempDir::new().unwrap();
    let discovered = discover(dir.path()).unwrap();
    let plan = DeployPlan::build(&discovered, &Category::ALL);
    assert!(plan.is_empty());
    assert_eq!(plan.len(), 0);
}
