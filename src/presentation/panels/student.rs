//! Student panel.

use clap::Subcommand;

use crate::error::AppError;
use crate::presentation::Session;
use crate::presentation::forms::StudentForm;
use crate::presentation::prompt::{ask, confirmed};
use crate::presentation::render::ScoreListing;

#[derive(Debug, Subcommand)]
pub enum StudentAction {
    /// List students with credits earned and average grade point
    List,

    /// Show a student and its scores
    Show { id: String },

    /// Add a student (missing fields are prompted)
    Add {
        #[arg(long)]
        id: Option<String>,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        department: Option<String>,
        /// Enrollment year
        #[arg(long)]
        year: Option<String>,
    },

    /// Edit a student; the id cannot change
    Edit {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        department: Option<String>,
        #[arg(long)]
        year: Option<String>,
    },

    /// Delete a student together with all of its scores
    Delete {
        id: String,
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

pub async fn run(session: &Session, action: StudentAction) -> Result<(), AppError> {
    match action {
        StudentAction::List => list(session).await,
        StudentAction::Show { id } => show(session, &id).await,
        StudentAction::Add {
            id,
            name,
            department,
            year,
        } => {
            session.heading("🎓 Add Student");
            let prompt = session.prompt();
            let form = StudentForm {
                id: ask(prompt, "Student id", id, None)?,
                name: ask(prompt, "Name", name, None)?,
                department: ask(prompt, "Department", department, None)?,
                enrollment_year: ask(prompt, "Enrollment year", year, None)?,
            };

            let student = session
                .ctx
                .students
                .create_student(form.into_new_student()?)
                .await?;
            session.success(format!("Student {} added", student.id));
            list(session).await
        }
        StudentAction::Edit {
            id,
            name,
            department,
            year,
        } => {
            let current = session.ctx.students.get_student(&id).await?;
            session.heading(format!("✏️  Edit Student {}", current.id));
            let prompt = session.prompt();
            let form = StudentForm {
                id: current.id.clone(),
                name: ask(prompt, "Name", name, Some(current.name))?,
                department: ask(prompt, "Department", department, Some(current.department))?,
                enrollment_year: ask(
                    prompt,
                    "Enrollment year",
                    year,
                    Some(current.enrollment_year.to_string()),
                )?,
            };

            session
                .ctx
                .students
                .update_student(&current.id, form.into_update()?)
                .await?;
            session.success(format!("Student {} updated", current.id));
            list(session).await
        }
        StudentAction::Delete { id, yes } => {
            let student = session.ctx.students.get_student(&id).await?;
            let question = format!(
                "Delete student {} ({}) and all of its scores?",
                student.id, student.name
            );
            if !confirmed(session.prompt(), &question, yes)? {
                session.cancelled();
                return Ok(());
            }

            session.ctx.students.delete_student(&student.id).await?;
            session.success(format!("Student {} deleted", student.id));
            list(session).await
        }
    }
}

async fn list(session: &Session) -> Result<(), AppError> {
    let students = session.ctx.students.list_summaries().await?;
    session.show("📋 Students", &students)
}

async fn show(session: &Session, id: &str) -> Result<(), AppError> {
    let student = session.ctx.students.get_student(id).await?;
    session.show_one(&format!("🎓 Student {}", student.id), &student)?;

    let scores = session.ctx.scores.list_student_scores(&student.id).await?;
    let listings: Vec<ScoreListing> = scores.iter().map(ScoreListing::from).collect();
    session.show("📝 Scores", &listings)
}
