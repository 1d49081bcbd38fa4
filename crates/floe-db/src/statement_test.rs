use super::*;

#[test]
fn test_plain_ddl_is_per_statement() {
    let sql = "CREATE TABLE t (id INT); INSERT INTO t VALUES (1);";
    assert_eq!(execution_mode(sql), ExecutionMode::PerStatement);
}

#[test]
fn test_procedure_is_whole_file() {
    let sql = "CREATE PROCEDURE refresh() AS BEGIN DELETE FROM t; END";
    assert_eq!(execution_mode(sql), ExecutionMode::WholeFile);
}

#[test]
fn test_function_is_whole_file() {
    let sql = "create or replace function add_one(x int) returns int as 'x + 1'";
    assert_eq!(execution_mode(sql), ExecutionMode::WholeFile);
}

#[test]
fn test_trigger_is_whole_file() {
    let sql = "CREATE TRIGGER trg AFTER INSERT ON t BEGIN UPDATE t SET x = 1; END";
    assert_eq!(execution_mode(sql), ExecutionMode::WholeFile);
}

#[test]
fn test_dollar_quoted_body_is_whole_file() {
    let sql = "SELECT 1; $$ BEGIN SELECT 2; END $$";
    assert_eq!(execution_mode(sql), ExecutionMode::WholeFile);
}

#[test]
fn test_routine_keyword_without_create_is_per_statement() {
    let sql = "INSERT INTO audit (note) VALUES ('ran the trigger backfill')";
    assert_eq!(execution_mode(sql), ExecutionMode::PerStatement);
}

#[test]
fn test_split_statements() {
    let sql = "CREATE TABLE t (id INT);\nINSERT INTO t VALUES (1);\n";
    assert_eq!(
        split_statements(sql),
        vec!["CREATE TABLE t (id INT)", "INSERT INTO t VALUES (1)"]
    );
}

#[test]
fn test_split_drops_empty_segments() {
    assert_eq!(split_statements(";;  ;\n;"), Vec::<&str>::new());
    assert_eq!(split_statements(""), Vec::<&str>::new());
}

#[test]
fn test_split_single_statement_without_semicolon() {
    assert_eq!(split_statements("SELECT 1"), vec!["SELECT 1"]);
}
