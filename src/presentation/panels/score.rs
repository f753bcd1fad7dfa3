//! Score panel.

use clap::{Args, Subcommand};

use crate::domain::entities::ScoreKey;
use crate::error::AppError;
use crate::presentation::Session;
use crate::presentation::forms::ScoreForm;
use crate::presentation::prompt::{Prompt, ask, confirmed};
use crate::presentation::render::ScoreListing;

/// Flags naming a score by its (student, course, semester) key.
#[derive(Debug, Clone, Default, Args)]
pub struct ScoreKeyArgs {
    #[arg(long)]
    pub student: Option<String>,
    #[arg(long)]
    pub course: Option<String>,
    #[arg(long)]
    pub semester: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum ScoreAction {
    /// List scores with grade point and pass flag
    List {
        /// Only scores of this student
        #[arg(long)]
        student: Option<String>,
    },

    /// Record a score (missing fields are prompted)
    Add {
        #[command(flatten)]
        key: ScoreKeyArgs,
        /// Score value between 0 and 100
        #[arg(long)]
        score: Option<String>,
    },

    /// Change the value of a score; the key cannot change
    Edit {
        #[command(flatten)]
        key: ScoreKeyArgs,
        #[arg(long)]
        score: Option<String>,
    },

    /// Delete a score
    Delete {
        #[command(flatten)]
        key: ScoreKeyArgs,
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Collects the key fields, prompting for the missing ones.
pub fn ask_key(prompt: &dyn Prompt, key: ScoreKeyArgs) -> Result<ScoreForm, AppError> {
    Ok(ScoreForm {
        student_id: ask(prompt, "Student id", key.student, None)?,
        course_id: ask(prompt, "Course id", key.course, None)?,
        semester: ask(prompt, "Semester", key.semester, None)?,
        value: String::new(),
    })
}

pub async fn run(session: &Session, action: ScoreAction) -> Result<(), AppError> {
    match action {
        ScoreAction::List { student } => list(session, student.as_deref()).await,
        ScoreAction::Add { key, score } => {
            session.heading("📝 Record Score");
            let prompt = session.prompt();
            let mut form = ask_key(prompt, key)?;
            form.value = ask(prompt, "Score (0-100)", score, None)?;

            let score = session
                .ctx
                .scores
                .record_score(form.into_new_score()?)
                .await?;
            session.success(format!(
                "Score recorded: {} / {} / {} = {}",
                score.key.student_id, score.key.course_id, score.key.semester, score.value
            ));
            list(session, Some(&score.key.student_id)).await
        }
        ScoreAction::Edit { key, score } => {
            let prompt = session.prompt();
            let mut form = ask_key(prompt, key)?;
            let key = form.key()?;
            let current = session.ctx.scores.get_score(&key).await?;

            session.heading(format!(
                "✏️  Edit Score {} / {} / {}",
                key.student_id, key.course_id, key.semester
            ));
            form.value = ask(prompt, "Score (0-100)", score, Some(current.value.to_string()))?;

            session.ctx.scores.update_score(&key, form.value()?).await?;
            session.success("Score updated");
            list(session, Some(&key.student_id)).await
        }
        ScoreAction::Delete { key, yes } => {
            let form = ask_key(session.prompt(), key)?;
            let key: ScoreKey = form.key()?;
            let current = session.ctx.scores.get_score(&key).await?;

            let question = format!(
                "Delete score {} of {} in {} for course {}?",
                current.value, key.student_id, key.semester, key.course_id
            );
            if !confirmed(session.prompt(), &question, yes)? {
                session.cancelled();
                return Ok(());
            }

            session.ctx.scores.delete_score(&key).await?;
            session.success("Score deleted");
            list(session, Some(&key.student_id)).await
        }
    }
}

async fn list(session: &Session, student: Option<&str>) -> Result<(), AppError> {
    let (title, scores) = match student.map(str::trim).filter(|s| !s.is_empty()) {
        Some(id) => (
            format!("📋 Scores of {id}"),
            session.ctx.scores.list_student_scores(id).await?,
        ),
        None => ("📋 Scores".to_string(), session.ctx.scores.list_scores().await?),
    };

    let listings: Vec<ScoreListing> = scores.iter().map(ScoreListing::from).collect();
    session.show(&title, &listings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::prompt::MockPrompt;

    #[test]
    fn test_ask_key_prompts_only_missing_fields() {
        let mut prompt = MockPrompt::new();
        prompt
            .expect_input()
            .withf(|label, _| label == "Semester")
            .times(1)
            .returning(|_, _| Ok("2024-1".to_string()));

        let form = ask_key(
            &prompt,
            ScoreKeyArgs {
                student: Some("S001".to_string()),
                course: Some("C101".to_string()),
                semester: None,
            },
        )
        .unwrap();

        assert_eq!(form.key().unwrap(), ScoreKey::new("S001", "C101", "2024-1"));
    }
}
