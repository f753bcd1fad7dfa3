//! Database panel: connection check, server info and schema bootstrap.

use clap::Subcommand;
use serde_json::json;
use std::path::PathBuf;

use crate::config::Config;
use crate::error::AppError;
use crate::infrastructure::{bootstrap, database};
use crate::presentation::Session;
use crate::presentation::render::{OutputFormat, to_json};

#[derive(Debug, Subcommand)]
pub enum DbAction {
    /// Check the database connection
    Check,

    /// Show server version and record counts
    Info,

    /// Create the schema, then optionally run a SQL script
    Init {
        /// SQL script executed statement by statement after the migrations
        #[arg(long, value_name = "FILE")]
        script: Option<PathBuf>,

        /// Create the database first when it does not exist
        #[arg(long)]
        create_database: bool,
    },
}

impl DbAction {
    /// Whether the action must run before a session to the target database
    /// can be opened.
    pub fn needs_database_creation(&self) -> bool {
        matches!(
            self,
            DbAction::Init {
                create_database: true,
                ..
            }
        )
    }
}

/// Creates the target database when asked to. Runs before connecting.
pub async fn prepare_database(format: OutputFormat, config: &Config) -> Result<(), AppError> {
    let created = database::ensure_database(config).await?;
    let message = if created {
        "Database created"
    } else {
        "Database already exists"
    };
    match format {
        OutputFormat::Text => println!("{message}"),
        OutputFormat::Json => eprintln!("{message}"),
    }
    Ok(())
}

pub async fn run(session: &Session, action: DbAction) -> Result<(), AppError> {
    let pool = session.ctx.pool.as_ref();

    match action {
        DbAction::Check => {
            session.heading("🔍 Checking database connection...");
            database::ping(pool).await?;
            session.success("Database connection OK");
            Ok(())
        }
        DbAction::Info => {
            let version = database::server_version(pool).await?;
            let counts = database::record_counts(pool).await?;

            match session.format {
                OutputFormat::Text => {
                    session.heading("ℹ️  Database Information");
                    println!("  PostgreSQL: {version}");
                    println!("  Database:   {}\n", session.config.masked_database_url());
                    session.show("📦 Records", &counts)
                }
                OutputFormat::Json => {
                    println!(
                        "{}",
                        to_json(&json!({
                            "server_version": version,
                            "database_url": session.config.masked_database_url(),
                            "tables": counts,
                        }))?
                    );
                    Ok(())
                }
            }
        }
        DbAction::Init { script, .. } => {
            session.heading("🛠  Initializing schema");
            bootstrap::run_migrations(pool).await?;
            session.success("Schema is up to date");

            let Some(path) = script else {
                return Ok(());
            };

            let sql = std::fs::read_to_string(&path).map_err(|e| {
                AppError::bootstrap(
                    "Cannot read script",
                    json!({ "path": path.display().to_string(), "reason": e.to_string() }),
                )
            })?;
            let report = bootstrap::run_script(pool, &sql).await?;

            session.success(format!(
                "Script {} applied: {} executed, {} skipped",
                path.display(),
                report.executed,
                report.skipped.len()
            ));
            if !report.skipped.is_empty() {
                session.show("⏭  Skipped statements", &report.skipped)?;
            }
            Ok(())
        }
    }
}
