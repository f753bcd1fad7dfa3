/// Returns the SQLSTATE code of a database error, if any.
pub fn sqlstate(e: &sqlx::Error) -> Option<String> {
    e.as_database_error()
        .and_then(|db| db.code())
        .map(|c| c.to_string())
}

/// Returns the server message of a database error, falling back to the
/// error's display text.
pub fn server_message(e: &sqlx::Error) -> String {
    e.as_database_error()
        .map(|db| db.message().to_string())
        .unwrap_or_else(|| e.to_string())
}
