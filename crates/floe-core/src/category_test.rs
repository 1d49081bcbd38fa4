use super::*;
use std::path::PathBuf;

#[test]
fn test_parse_case_insensitive() {
    assert_eq!(Category::parse("tables"), Some(Category::Tables));
    assert_eq!(Category::parse("Tables"), Some(Category::Tables));
    assert_eq!(Category::parse("VIEWS"), Some(Category::Views));
    assert_eq!(Category::parse("Procedures"), Some(Category::Procedures));
    assert_eq!(Category::parse("triggers"), Some(Category::Triggers));
}

#[test]
fn test_parse_unrecognized() {
    assert_eq!(Category::parse("misc"), None);
    assert_eq!(Category::parse("table"), None);
    assert_eq!(Category::parse(""), None);
}

#[test]
fn test_from_path_immediate_parent() {
    let path = PathBuf::from("sql/Tables/1_create.sql");
    assert_eq!(Category::from_path(&path), Some(Category::Tables));
}

#[test]
fn test_from_path_deeper_segment() {
    let path = PathBuf::from("sql/Views/reporting/daily_v.sql");
    assert_eq!(Category::from_path(&path), Some(Category::Views));
}

#[test]
fn test_from_path_parent_wins_over_earlier_segment() {
    // The immediate parent is checked before the segment scan
    let path = PathBuf::from("Tables/Views/x.sql");
    assert_eq!(Category::from_path(&path), Some(Category::Views));
}

#[test]
fn test_from_path_no_substring_matching() {
    let path = PathBuf::from("sql/customer_views_raw/x.sql");
    assert_eq!(Category::from_path(&path), None);
}

#[test]
fn test_from_path_unrecognized() {
    assert_eq!(Category::from_path(&PathBuf::from("Misc/x.sql")), None);
    assert_eq!(Category::from_path(&PathBuf::from("x.sql")), None);
}

#[test]
fn test_display_lowercase() {
    assert_eq!(Category::Tables.to_string(), "tables");
    assert_eq!(Category::Triggers.to_string(), "triggers");
}

#[test]
fn test_dir_name_capitalized() {
    assert_eq!(Category::Tables.dir_name(), "Tables");
    assert_eq!(Category::Procedures.dir_name(), "Procedures");
}

#[test]
fn test_serde_lowercase() {
    let yaml = "- tables\n- views\n";
    let parsed: Vec<Category> = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(parsed, vec![Category::Tables, Category::Views]);
}

#[test]
fn test_all_covers_every_category() {
    assert_eq!(Category::ALL.len(), 4);
    for c in Category::ALL {
        assert_eq!(Category::parse(&c.to_string()), Some(c));
    }
}
