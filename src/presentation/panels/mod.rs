//! Command panels, one per entity plus reports and database tools.

pub mod core_course;
pub mod course;
pub mod db;
pub mod report;
pub mod requirement;
pub mod score;
pub mod student;

use clap::Subcommand;

use crate::error::AppError;
use crate::presentation::Session;

/// Commands available both from the command line and inside the shell.
#[derive(Debug, Subcommand)]
pub enum PanelCommand {
    /// Manage students
    Student {
        #[command(subcommand)]
        action: student::StudentAction,
    },

    /// Manage courses
    Course {
        #[command(subcommand)]
        action: course::CourseAction,
    },

    /// Record and correct scores
    Score {
        #[command(subcommand)]
        action: score::ScoreAction,
    },

    /// Manage graduation requirements
    Requirement {
        #[command(subcommand)]
        action: requirement::RequirementAction,
    },

    /// Manage core-course designations
    CoreCourse {
        #[command(subcommand)]
        action: core_course::CoreCourseAction,
    },

    /// Query and analysis reports
    Report {
        #[command(subcommand)]
        action: report::ReportAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: db::DbAction,
    },
}

/// Runs one panel command.
pub async fn dispatch(session: &Session, command: PanelCommand) -> Result<(), AppError> {
    tracing::debug!(?command, "Dispatching command");

    match command {
        PanelCommand::Student { action } => student::run(session, action).await,
        PanelCommand::Course { action } => course::run(session, action).await,
        PanelCommand::Score { action } => score::run(session, action).await,
        PanelCommand::Requirement { action } => requirement::run(session, action).await,
        PanelCommand::CoreCourse { action } => core_course::run(session, action).await,
        PanelCommand::Report { action } => report::run(session, action).await,
        PanelCommand::Db { action } => db::run(session, action).await,
    }
}
