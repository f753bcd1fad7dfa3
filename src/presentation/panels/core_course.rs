//! Core course panel.

use clap::Subcommand;

use crate::error::AppError;
use crate::presentation::Session;
use crate::presentation::forms::CoreCourseForm;
use crate::presentation::prompt::{ask, confirmed};

#[derive(Debug, Subcommand)]
pub enum CoreCourseAction {
    /// List core-course designations
    List {
        /// Only designations of this department
        #[arg(long)]
        department: Option<String>,
    },

    /// Mark a course as core for a department
    Add {
        #[arg(long)]
        department: Option<String>,
        #[arg(long)]
        course: Option<String>,
    },

    /// Remove a core-course designation
    Delete {
        #[arg(long)]
        department: Option<String>,
        #[arg(long)]
        course: Option<String>,
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

pub async fn run(session: &Session, action: CoreCourseAction) -> Result<(), AppError> {
    match action {
        CoreCourseAction::List { department } => list(session, department).await,
        CoreCourseAction::Add { department, course } => {
            session.heading("⭐ Add Core Course");
            let prompt = session.prompt();
            let form = CoreCourseForm {
                department: ask(prompt, "Department", department, None)?,
                course_id: ask(prompt, "Course id", course, None)?,
            };

            let core_course = session
                .ctx
                .core_courses
                .add_core_course(form.into_core_course()?)
                .await?;
            session.success(format!(
                "{} is now core for {}",
                core_course.course_id, core_course.department
            ));
            list(session, Some(core_course.department)).await
        }
        CoreCourseAction::Delete {
            department,
            course,
            yes,
        } => {
            let prompt = session.prompt();
            let core_course = CoreCourseForm {
                department: ask(prompt, "Department", department, None)?,
                course_id: ask(prompt, "Course id", course, None)?,
            }
            .into_core_course()?;
            session
                .ctx
                .core_courses
                .ensure_core_course(&core_course)
                .await?;

            let question = format!(
                "Remove {} from the core courses of {}?",
                core_course.course_id, core_course.department
            );
            if !confirmed(prompt, &question, yes)? {
                session.cancelled();
                return Ok(());
            }

            session
                .ctx
                .core_courses
                .remove_core_course(&core_course)
                .await?;
            session.success("Core course removed");
            list(session, Some(core_course.department)).await
        }
    }
}

async fn list(session: &Session, department: Option<String>) -> Result<(), AppError> {
    let department = department
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty());
    let title = match &department {
        Some(d) => format!("📋 Core Courses of {d}"),
        None => "📋 Core Courses".to_string(),
    };

    let core_courses = session.ctx.core_courses.list_core_courses(department).await?;
    session.show(&title, &core_courses)
}
