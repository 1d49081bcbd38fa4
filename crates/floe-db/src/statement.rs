//! SQL statement segmentation strategy
//!
//! Scripts are either executed whole or split into individual statements on
//! `;`. Splitting is naive by design: it breaks on semicolons inside string
//! literals and procedure bodies, which is why scripts that define routines
//! (dollar-quoted bodies, `CREATE PROCEDURE|FUNCTION|TRIGGER`) are executed
//! whole instead of being segmented.

/// How a script's text is driven through the warehouse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionMode {
    /// Execute the full script as one unit (routine definitions)
    WholeFile,
    /// Split on `;` and execute statement by statement
    PerStatement,
}

/// Routine-definition keywords that force whole-file execution
const ROUTINE_KEYWORDS: [&str; 3] = ["PROCEDURE", "FUNCTION", "TRIGGER"];

/// Select the execution mode for a script's content.
///
/// The predicate is a keyword match, not a parse: a `CREATE` paired with a
/// routine keyword, or a dollar-quoted body, selects whole-file execution.
/// A routine keyword inside a comment will also match — acceptable, since
/// whole-file execution is always safe, just coarser.
pub fn execution_mode(sql: &str) -> ExecutionMode {
    if sql.contains("$$") {
        return ExecutionMode::WholeFile;
    }

    let upper = sql.to_uppercase();
    if upper.contains("CREATE") && ROUTINE_KEYWORDS.iter().any(|kw| upper.contains(kw)) {
        return ExecutionMode::WholeFile;
    }

    ExecutionMode::PerStatement
}

/// Split a script into individual statements on `;`.
///
/// Statements are trimmed and empty segments dropped. Semicolons inside
/// string literals are not handled — see the module docs.
pub fn split_statements(sql: &str) -> Vec<&str> {
    sql.split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
#[path = "statement_test.rs"]
mod tests;
