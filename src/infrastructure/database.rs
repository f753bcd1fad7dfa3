//! Database session setup.
//!
//! The front end works with exactly one session: the pool is capped at a
//! single connection and every call is awaited before the next one is made.

use serde::Serialize;
use serde_json::json;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{ConnectOptions, Connection, PgConnection, PgPool};
use std::str::FromStr;
use std::time::Duration;

use crate::config::Config;
use crate::error::AppError;

/// Database used for server-level statements such as `CREATE DATABASE`.
const MAINTENANCE_DATABASE: &str = "postgres";

fn connect_options(database_url: &str) -> Result<PgConnectOptions, AppError> {
    PgConnectOptions::from_str(database_url).map_err(|e| {
        AppError::connection("Invalid database URL", json!({ "reason": e.to_string() }))
    })
}

fn connection_error(e: sqlx::Error) -> AppError {
    match e {
        sqlx::Error::Database(db) => AppError::connection(
            "Database rejected the connection",
            json!({ "code": db.code().map(|c| c.to_string()), "reason": db.message() }),
        ),
        other => AppError::connection(
            "Could not connect to the database",
            json!({ "reason": other.to_string() }),
        ),
    }
}

/// Opens the single-connection pool used by the whole session.
///
/// # Errors
///
/// Returns [`AppError::Connection`] when the server is unreachable or rejects
/// the credentials. Nothing is retried.
pub async fn connect(config: &Config) -> Result<PgPool, AppError> {
    let options = connect_options(&config.database_url)?;

    let pool = PgPoolOptions::new()
        .max_connections(1)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .connect_with(options)
        .await
        .map_err(connection_error)?;

    tracing::info!("Connected to database");
    Ok(pool)
}

/// Runs a trivial query to prove the session is alive.
pub async fn ping(pool: &PgPool) -> Result<(), AppError> {
    sqlx::query("SELECT 1")
        .execute(pool)
        .await
        .map_err(connection_error)?;
    Ok(())
}

/// Returns the server version string.
pub async fn server_version(pool: &PgPool) -> Result<String, AppError> {
    let version = sqlx::query_scalar::<_, String>("SELECT version()")
        .fetch_one(pool)
        .await?;
    Ok(version)
}

/// Tables whose row counts are reported by [`record_counts`].
const RECORD_TABLES: [&str; 5] = [
    "students",
    "courses",
    "scores",
    "graduation_requirements",
    "core_courses",
];

#[derive(Debug, Clone, Serialize)]
pub struct TableCount {
    pub table: &'static str,
    pub rows: i64,
}

/// Counts the rows of every record table.
pub async fn record_counts(pool: &PgPool) -> Result<Vec<TableCount>, AppError> {
    let mut counts = Vec::with_capacity(RECORD_TABLES.len());
    for table in RECORD_TABLES {
        let rows = sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(pool)
            .await?;
        counts.push(TableCount { table, rows });
    }
    Ok(counts)
}

/// Creates the configured database when it does not exist yet.
///
/// Connects to the server's maintenance database with the same credentials.
/// Returns `true` when the database was created.
///
/// # Errors
///
/// Returns [`AppError::Connection`] when the server is unreachable and
/// [`AppError::Validation`] when the URL names no database.
pub async fn ensure_database(config: &Config) -> Result<bool, AppError> {
    let options = connect_options(&config.database_url)?;
    let name = options
        .get_database()
        .map(str::to_string)
        .ok_or_else(|| {
            AppError::bad_request("Database URL does not name a database", json!({}))
        })?;

    let mut conn = options
        .database(MAINTENANCE_DATABASE)
        .connect()
        .await
        .map_err(connection_error)?;

    let exists = sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS (SELECT 1 FROM pg_database WHERE datname = $1)",
    )
    .bind(&name)
    .fetch_one(&mut conn)
    .await?;

    if !exists {
        sqlx::query(&format!("CREATE DATABASE {}", quote_identifier(&name)))
            .execute(&mut conn)
            .await?;
        tracing::info!(database = %name, "Created database");
    }

    close_quietly(conn).await;
    Ok(!exists)
}

async fn close_quietly(conn: PgConnection) {
    if let Err(e) = conn.close().await {
        tracing::debug!(error = %e, "Failed to close maintenance connection");
    }
}

/// Quotes an SQL identifier, doubling embedded quotes.
pub fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
