//! Command-line definition.

use clap::{Parser, Subcommand};

use super::panels::PanelCommand;
use super::render::OutputFormat;
use crate::config::ConnectionOverrides;

/// Terminal front end for academic records.
#[derive(Debug, Parser)]
#[command(name = "academic-records")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub connection: ConnectionOverrides,

    /// Output format
    #[arg(long, value_enum, global = true, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Interactive session reusing one connection
    Shell,

    #[command(flatten)]
    Panel(PanelCommand),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::panels::db::DbAction;
    use crate::presentation::panels::report::ReportAction;
    use crate::presentation::panels::student::StudentAction;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "academic-records",
            "student",
            "list",
            "--format",
            "json",
            "--host",
            "db.local",
        ])
        .unwrap();

        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.connection.host.as_deref(), Some("db.local"));
        assert!(matches!(
            cli.command,
            Command::Panel(PanelCommand::Student {
                action: StudentAction::List
            })
        ));
    }

    #[test]
    fn test_parses_report_filter() {
        let cli =
            Cli::try_parse_from(["academic-records", "report", "failed-core", "--student", "S001"])
                .unwrap();

        match cli.command {
            Command::Panel(PanelCommand::Report {
                action: ReportAction::FailedCore { student },
            }) => assert_eq!(student.as_deref(), Some("S001")),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_db_init_with_database_creation() {
        let cli = Cli::try_parse_from([
            "academic-records",
            "db",
            "init",
            "--script",
            "seed.sql",
            "--create-database",
        ])
        .unwrap();

        match cli.command {
            Command::Panel(PanelCommand::Db { action }) => {
                assert!(action.needs_database_creation());
                assert!(matches!(action, DbAction::Init { script: Some(_), .. }));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_delete_requires_key() {
        assert!(Cli::try_parse_from(["academic-records", "student", "delete"]).is_err());
    }
}
