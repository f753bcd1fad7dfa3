//! Schema bootstrap.
//!
//! Two sources are supported: the embedded migrations under `migrations/`
//! and user-supplied SQL scripts. Scripts are split into statements and run
//! one by one. Errors that only mean "this is already done" are skipped so a
//! script can be replayed; any other error stops the run and reports the
//! failing statement.

use serde::Serialize;
use serde_json::json;
use sqlx::PgPool;

use crate::error::AppError;
use crate::utils::db_error::{server_message, sqlstate};

/// Number of characters of a statement kept in reports and errors.
const PREVIEW_LEN: usize = 200;

/// SQLSTATE codes treated as idempotent during script replay.
///
/// - `42P04` duplicate_database, `42P06` duplicate_schema,
///   `42P07` duplicate_table, `42710` duplicate_object,
///   `42723` duplicate_function
/// - `23505` unique_violation (seed rows inserted twice)
/// - `42P01` undefined_table, `42704` undefined_object (drop of a missing object)
const IDEMPOTENT_CODES: [&str; 8] = [
    "42P04", "42P06", "42P07", "42710", "42723", "23505", "42P01", "42704",
];

/// A statement skipped because its error was idempotent.
#[derive(Debug, Clone, Serialize)]
pub struct SkippedStatement {
    pub preview: String,
    pub code: String,
    pub reason: String,
}

/// Outcome of a script run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BootstrapReport {
    pub executed: usize,
    pub skipped: Vec<SkippedStatement>,
}

/// Applies the embedded migrations.
///
/// # Errors
///
/// Returns [`AppError::Bootstrap`] when a migration fails.
pub async fn run_migrations(pool: &PgPool) -> Result<(), AppError> {
    sqlx::migrate!("./migrations").run(pool).await.map_err(|e| {
        AppError::bootstrap("Schema migration failed", json!({ "reason": e.to_string() }))
    })?;
    tracing::info!("Schema migrations applied");
    Ok(())
}

/// Returns whether an SQLSTATE code only signals an already-applied change.
pub fn is_idempotent_error(code: &str) -> bool {
    IDEMPOTENT_CODES.contains(&code)
}

/// Returns the first characters of a statement for diagnostics.
pub fn preview(statement: &str) -> String {
    let flat = statement.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() > PREVIEW_LEN {
        let cut: String = flat.chars().take(PREVIEW_LEN).collect();
        format!("{cut}...")
    } else {
        flat
    }
}

/// Runs a script statement by statement.
///
/// # Errors
///
/// Returns [`AppError::Bootstrap`] with the statement preview and its index on
/// the first non-idempotent failure. Statements before it stay applied.
pub async fn run_script(pool: &PgPool, script: &str) -> Result<BootstrapReport, AppError> {
    let statements = split_statements(script);
    let mut report = BootstrapReport::default();

    for (index, statement) in statements.iter().enumerate() {
        let Err(e) = sqlx::raw_sql(statement).execute(pool).await else {
            report.executed += 1;
            continue;
        };

        match sqlstate(&e) {
            Some(code) if is_idempotent_error(&code) => {
                tracing::debug!(index, %code, "Skipping already-applied statement");
                report.skipped.push(SkippedStatement {
                    preview: preview(statement),
                    code,
                    reason: server_message(&e),
                });
            }
            _ => {
                tracing::warn!(index, error = %e, "Bootstrap statement failed");
                return Err(AppError::bootstrap(
                    "Bootstrap script failed",
                    json!({
                        "statement_index": index,
                        "statement": preview(statement),
                        "code": sqlstate(&e),
                        "reason": server_message(&e),
                    }),
                ));
            }
        }
    }

    tracing::info!(
        executed = report.executed,
        skipped = report.skipped.len(),
        "Bootstrap script finished"
    );
    Ok(report)
}

#[derive(Clone, Copy, PartialEq)]
enum Mode {
    Normal,
    SingleQuote,
    DoubleQuote,
    LineComment,
    BlockComment,
}

/// Splits a PostgreSQL script into statements.
///
/// Statements end at `;` outside of string literals, quoted identifiers,
/// dollar-quoted bodies (`$$ ... $$`, `$tag$ ... $tag$`) and comments.
/// Comments are dropped; fragments that contain nothing but whitespace are
/// skipped. A trailing statement without `;` is kept.
pub fn split_statements(script: &str) -> Vec<String> {
    let chars: Vec<char> = script.chars().collect();
    let mut statements = Vec::new();
    let mut current = String::new();
    let mut mode = Mode::Normal;
    let mut dollar_tag: Option<String> = None;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let next = chars.get(i + 1).copied();

        if let Some(tag) = &dollar_tag {
            if starts_with_at(&chars, i, tag) {
                current.push_str(tag);
                i += tag.chars().count();
                dollar_tag = None;
            } else {
                current.push(c);
                i += 1;
            }
            continue;
        }

        match mode {
            Mode::LineComment => {
                if c == '\n' {
                    mode = Mode::Normal;
                    current.push('\n');
                }
                i += 1;
            }
            Mode::BlockComment => {
                if c == '*' && next == Some('/') {
                    mode = Mode::Normal;
                    current.push(' ');
                    i += 2;
                } else {
                    i += 1;
                }
            }
            Mode::SingleQuote | Mode::DoubleQuote => {
                current.push(c);
                let close = if mode == Mode::SingleQuote { '\'' } else { '"' };
                if c == close {
                    if next == Some(close) {
                        current.push(close);
                        i += 2;
                        continue;
                    }
                    mode = Mode::Normal;
                }
                i += 1;
            }
            Mode::Normal => match c {
                '-' if next == Some('-') => {
                    mode = Mode::LineComment;
                    i += 2;
                }
                '/' if next == Some('*') => {
                    mode = Mode::BlockComment;
                    i += 2;
                }
                '\'' => {
                    mode = Mode::SingleQuote;
                    current.push(c);
                    i += 1;
                }
                '"' => {
                    mode = Mode::DoubleQuote;
                    current.push(c);
                    i += 1;
                }
                '$' => {
                    if let Some(tag) = dollar_tag_at(&chars, i) {
                        current.push_str(&tag);
                        i += tag.chars().count();
                        dollar_tag = Some(tag);
                    } else {
                        current.push(c);
                        i += 1;
                    }
                }
                ';' => {
                    push_statement(&mut statements, &current);
                    current.clear();
                    i += 1;
                }
                _ => {
                    current.push(c);
                    i += 1;
                }
            },
        }
    }

    push_statement(&mut statements, &current);
    statements
}

fn push_statement(statements: &mut Vec<String>, raw: &str) {
    let trimmed = raw.trim();
    if !trimmed.is_empty() {
        statements.push(trimmed.to_string());
    }
}

fn starts_with_at(chars: &[char], at: usize, pattern: &str) -> bool {
    let mut idx = at;
    for p in pattern.chars() {
        if chars.get(idx) != Some(&p) {
            return false;
        }
        idx += 1;
    }
    true
}

/// Reads a dollar-quote opener (`$$` or `$tag$`) starting at `at`.
///
/// Positional parameters such as `$1` are not tags.
fn dollar_tag_at(chars: &[char], at: usize) -> Option<String> {
    let mut tag = String::from("$");
    let mut idx = at + 1;
    while let Some(&c) = chars.get(idx) {
        if c == '$' {
            tag.push('$');
            return Some(tag);
        }
        let valid = if idx == at + 1 {
            c.is_alphabetic() || c == '_'
        } else {
            c.is_alphanumeric() || c == '_'
        };
        if !valid {
            return None;
        }
        tag.push(c);
        idx += 1;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_on_semicolons() {
        let script = "CREATE TABLE a (id INT);\nINSERT INTO a VALUES (1);";
        let statements = split_statements(script);
        assert_eq!(
            statements,
            vec!["CREATE TABLE a (id INT)", "INSERT INTO a VALUES (1)"]
        );
    }

    #[test]
    fn test_keeps_trailing_statement_without_semicolon() {
        let statements = split_statements("SELECT 1;\nSELECT 2");
        assert_eq!(statements, vec!["SELECT 1", "SELECT 2"]);
    }

    #[test]
    fn test_skips_comments_and_blank_fragments() {
        let script = "-- header comment\n\n/* block; with semicolon */\nSELECT 1; -- trailing\n;\n";
        let statements = split_statements(script);
        assert_eq!(statements, vec!["SELECT 1"]);
    }

    #[test]
    fn test_semicolon_inside_string_literal() {
        let statements = split_statements("INSERT INTO t VALUES ('a;b', 'it''s');SELECT 2;");
        assert_eq!(
            statements,
            vec!["INSERT INTO t VALUES ('a;b', 'it''s')", "SELECT 2"]
        );
    }

    #[test]
    fn test_dollar_quoted_function_body() {
        let script = r#"
CREATE FUNCTION f() RETURNS INT LANGUAGE plpgsql AS $$
BEGIN
    PERFORM 1;
    RETURN 2;
END;
$$;
SELECT f();
"#;
        let statements = split_statements(script);
        assert_eq!(statements.len(), 2);
        assert!(statements[0].starts_with("CREATE FUNCTION f()"));
        assert!(statements[0].ends_with("$$"));
        assert!(statements[0].contains("RETURN 2;"));
        assert_eq!(statements[1], "SELECT f()");
    }

    #[test]
    fn test_tagged_dollar_quote() {
        let script = "DO $body$ BEGIN RAISE NOTICE '$$;'; END $body$; SELECT 1;";
        let statements = split_statements(script);
        assert_eq!(statements.len(), 2);
        assert_eq!(statements[0], "DO $body$ BEGIN RAISE NOTICE '$$;'; END $body$");
    }

    #[test]
    fn test_positional_parameter_is_not_a_tag() {
        let statements = split_statements("PREPARE p AS SELECT $1; EXECUTE p(1);");
        assert_eq!(statements, vec!["PREPARE p AS SELECT $1", "EXECUTE p(1)"]);
    }

    #[test]
    fn test_double_dash_inside_string_is_not_comment() {
        let statements = split_statements("SELECT '--not a comment';");
        assert_eq!(statements, vec!["SELECT '--not a comment'"]);
    }

    #[test]
    fn test_idempotent_codes() {
        assert!(is_idempotent_error("42P07"));
        assert!(is_idempotent_error("23505"));
        assert!(is_idempotent_error("42P01"));
        assert!(!is_idempotent_error("42601"));
        assert!(!is_idempotent_error("23503"));
    }

    #[test]
    fn test_preview_truncates_and_flattens() {
        let long = format!("SELECT\n   {}", "x".repeat(300));
        let p = preview(&long);
        assert!(p.starts_with("SELECT x"));
        assert!(p.ends_with("..."));
        assert_eq!(p.chars().count(), PREVIEW_LEN + 3);

        assert_eq!(preview("SELECT\n  1"), "SELECT 1");
    }
}
