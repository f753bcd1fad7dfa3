//! Graduation requirement panel.

use clap::Subcommand;

use crate::error::AppError;
use crate::presentation::Session;
use crate::presentation::forms::RequirementForm;
use crate::presentation::prompt::{ask, confirmed};

#[derive(Debug, Subcommand)]
pub enum RequirementAction {
    /// List graduation requirements
    List,

    /// Show the requirement of a department
    Show { department: String },

    /// Add the requirement of a department (missing fields are prompted)
    Add {
        #[arg(long)]
        department: Option<String>,
        /// Total credits required to graduate
        #[arg(long)]
        credits: Option<String>,
        /// Core-course failures tolerated
        #[arg(long)]
        max_core_failures: Option<String>,
        /// Minimum average grade point
        #[arg(long)]
        min_gpa: Option<String>,
    },

    /// Edit the requirement of a department; the department cannot change
    Edit {
        department: String,
        #[arg(long)]
        credits: Option<String>,
        #[arg(long)]
        max_core_failures: Option<String>,
        #[arg(long)]
        min_gpa: Option<String>,
    },

    /// Delete the requirement of a department
    Delete {
        department: String,
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

pub async fn run(session: &Session, action: RequirementAction) -> Result<(), AppError> {
    match action {
        RequirementAction::List => list(session).await,
        RequirementAction::Show { department } => {
            let requirement = session.ctx.requirements.get_requirement(&department).await?;
            session.show_one(
                &format!("🎯 Requirement of {}", requirement.department),
                &requirement,
            )
        }
        RequirementAction::Add {
            department,
            credits,
            max_core_failures,
            min_gpa,
        } => {
            session.heading("🎯 Add Graduation Requirement");
            let prompt = session.prompt();
            let form = RequirementForm {
                department: ask(prompt, "Department", department, None)?,
                total_credits_required: ask(prompt, "Total credits required", credits, None)?,
                max_core_failures: ask(prompt, "Max core failures", max_core_failures, None)?,
                min_gpa: ask(prompt, "Minimum GPA", min_gpa, None)?,
            };

            let requirement = session
                .ctx
                .requirements
                .create_requirement(form.into_new_requirement()?)
                .await?;
            session.success(format!(
                "Graduation requirement of {} added",
                requirement.department
            ));
            list(session).await
        }
        RequirementAction::Edit {
            department,
            credits,
            max_core_failures,
            min_gpa,
        } => {
            let current = session.ctx.requirements.get_requirement(&department).await?;
            session.heading(format!("✏️  Edit Requirement of {}", current.department));
            let prompt = session.prompt();
            let form = RequirementForm {
                department: current.department.clone(),
                total_credits_required: ask(
                    prompt,
                    "Total credits required",
                    credits,
                    Some(current.total_credits_required.to_string()),
                )?,
                max_core_failures: ask(
                    prompt,
                    "Max core failures",
                    max_core_failures,
                    Some(current.max_core_failures.to_string()),
                )?,
                min_gpa: ask(prompt, "Minimum GPA", min_gpa, Some(current.min_gpa.to_string()))?,
            };

            session
                .ctx
                .requirements
                .update_requirement(&current.department, form.into_update()?)
                .await?;
            session.success(format!(
                "Graduation requirement of {} updated",
                current.department
            ));
            list(session).await
        }
        RequirementAction::Delete { department, yes } => {
            let requirement = session.ctx.requirements.get_requirement(&department).await?;
            let question = format!(
                "Delete the graduation requirement of {}?",
                requirement.department
            );
            if !confirmed(session.prompt(), &question, yes)? {
                session.cancelled();
                return Ok(());
            }

            session
                .ctx
                .requirements
                .delete_requirement(&requirement.department)
                .await?;
            session.success(format!(
                "Graduation requirement of {} deleted",
                requirement.department
            ));
            list(session).await
        }
    }
}

async fn list(session: &Session) -> Result<(), AppError> {
    let requirements = session.ctx.requirements.list_requirements().await?;
    session.show("📋 Graduation Requirements", &requirements)
}
