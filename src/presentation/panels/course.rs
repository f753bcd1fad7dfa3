//! Course panel.

use clap::Subcommand;

use crate::error::AppError;
use crate::presentation::Session;
use crate::presentation::forms::CourseForm;
use crate::presentation::prompt::{ask, confirmed};

#[derive(Debug, Subcommand)]
pub enum CourseAction {
    /// List courses
    List,

    /// Show one course
    Show { id: String },

    /// Add a course (missing fields are prompted)
    Add {
        #[arg(long)]
        id: Option<String>,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        credit: Option<String>,
        /// core, general or elective
        #[arg(long)]
        category: Option<String>,
    },

    /// Edit a course; the id cannot change
    Edit {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        credit: Option<String>,
        #[arg(long)]
        category: Option<String>,
    },

    /// Delete a course together with its scores and core designations
    Delete {
        id: String,
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

const CATEGORY_LABEL: &str = "Category (core/general/elective)";

pub async fn run(session: &Session, action: CourseAction) -> Result<(), AppError> {
    match action {
        CourseAction::List => list(session).await,
        CourseAction::Show { id } => {
            let course = session.ctx.courses.get_course(&id).await?;
            session.show_one(&format!("📚 Course {}", course.id), &course)
        }
        CourseAction::Add {
            id,
            name,
            credit,
            category,
        } => {
            session.heading("📚 Add Course");
            let prompt = session.prompt();
            let form = CourseForm {
                id: ask(prompt, "Course id", id, None)?,
                name: ask(prompt, "Name", name, None)?,
                credit: ask(prompt, "Credit", credit, None)?,
                category: ask(prompt, CATEGORY_LABEL, category, None)?,
            };

            let course = session
                .ctx
                .courses
                .create_course(form.into_new_course()?)
                .await?;
            session.success(format!("Course {} added", course.id));
            list(session).await
        }
        CourseAction::Edit {
            id,
            name,
            credit,
            category,
        } => {
            let current = session.ctx.courses.get_course(&id).await?;
            session.heading(format!("✏️  Edit Course {}", current.id));
            let prompt = session.prompt();
            let form = CourseForm {
                id: current.id.clone(),
                name: ask(prompt, "Name", name, Some(current.name))?,
                credit: ask(prompt, "Credit", credit, Some(current.credit.to_string()))?,
                category: ask(
                    prompt,
                    CATEGORY_LABEL,
                    category,
                    Some(current.category.to_string()),
                )?,
            };

            session
                .ctx
                .courses
                .update_course(&current.id, form.into_update()?)
                .await?;
            session.success(format!("Course {} updated", current.id));
            list(session).await
        }
        CourseAction::Delete { id, yes } => {
            let course = session.ctx.courses.get_course(&id).await?;
            let question = format!(
                "Delete course {} ({}) with its scores and core designations?",
                course.id, course.name
            );
            if !confirmed(session.prompt(), &question, yes)? {
                session.cancelled();
                return Ok(());
            }

            session.ctx.courses.delete_course(&course.id).await?;
            session.success(format!("Course {} deleted", course.id));
            list(session).await
        }
    }
}

async fn list(session: &Session) -> Result<(), AppError> {
    let courses = session.ctx.courses.list_courses().await?;
    session.show("📋 Courses", &courses)
}
