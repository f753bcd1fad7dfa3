//! Query and analysis panel.

use clap::Subcommand;

use crate::error::AppError;
use crate::presentation::Session;

#[derive(Debug, Subcommand)]
pub enum ReportAction {
    /// Students at risk: too many core failures or GPA below the minimum
    Warnings,

    /// Students ranked by average grade point
    GpaRanking,

    /// Failed core courses
    FailedCore {
        /// Only this student
        #[arg(long)]
        student: Option<String>,
    },

    /// All failed courses
    Failed {
        /// Only this student
        #[arg(long)]
        student: Option<String>,
    },

    /// Credits earned per student
    Credits,

    /// Per-department statistics
    Departments,

    /// Per-semester statistics
    Semesters,
}

pub async fn run(session: &Session, action: ReportAction) -> Result<(), AppError> {
    let reports = &session.ctx.reports;

    match action {
        ReportAction::Warnings => {
            session.show("⚠️  Academic Warning List", &reports.warning_list().await?)
        }
        ReportAction::GpaRanking => session.show("🏆 GPA Ranking", &reports.gpa_ranking().await?),
        ReportAction::FailedCore { student } => session.show(
            &titled("❌ Failed Core Courses", student.as_deref()),
            &reports.failed_core_courses(student).await?,
        ),
        ReportAction::Failed { student } => session.show(
            &titled("❌ Failed Courses", student.as_deref()),
            &reports.failed_courses(student).await?,
        ),
        ReportAction::Credits => {
            session.show("📈 Credits Completed", &reports.credits_completed().await?)
        }
        ReportAction::Departments => session.show(
            "🏛  Department Statistics",
            &reports.department_statistics().await?,
        ),
        ReportAction::Semesters => session.show(
            "🗓  Semester Statistics",
            &reports.semester_statistics().await?,
        ),
    }
}

fn titled(title: &str, student: Option<&str>) -> String {
    match student.map(str::trim).filter(|s| !s.is_empty()) {
        Some(id) => format!("{title} of {id}"),
        None => title.to_string(),
    }
}
