//! Interactive prompts standing in for modal dialogs.

use dialoguer::{Confirm, Input};

use crate::error::AppError;

/// Source of interactive answers.
///
/// Panels only ask through this trait so form collection can be tested
/// without a terminal.
#[cfg_attr(test, mockall::automock)]
pub trait Prompt {
    /// Asks for a line of text, pre-filled with `initial` when editing.
    fn input(&self, label: &str, initial: Option<String>) -> Result<String, AppError>;

    /// Asks a yes/no question. The default answer is "no".
    fn confirm(&self, question: &str) -> Result<bool, AppError>;
}

/// Terminal prompts backed by `dialoguer`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalPrompt;

impl Prompt for TerminalPrompt {
    fn input(&self, label: &str, initial: Option<String>) -> Result<String, AppError> {
        let mut input = Input::<String>::new().with_prompt(label).allow_empty(true);
        if let Some(initial) = initial {
            input = input.with_initial_text(initial);
        }
        Ok(input.interact_text()?)
    }

    fn confirm(&self, question: &str) -> Result<bool, AppError> {
        Ok(Confirm::new()
            .with_prompt(question)
            .default(false)
            .interact()?)
    }
}

/// Returns the flag value, or asks for it when the flag was not given.
///
/// Answers are trimmed.
pub fn ask(
    prompt: &dyn Prompt,
    label: &str,
    given: Option<String>,
    initial: Option<String>,
) -> Result<String, AppError> {
    let raw = match given {
        Some(value) => value,
        None => prompt.input(label, initial)?,
    };
    Ok(raw.trim().to_string())
}

/// Asks for confirmation unless `assume_yes` is set.
pub fn confirmed(prompt: &dyn Prompt, question: &str, assume_yes: bool) -> Result<bool, AppError> {
    if assume_yes {
        return Ok(true);
    }
    prompt.confirm(question)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ask_uses_flag_without_prompting() {
        let mut prompt = MockPrompt::new();
        prompt.expect_input().never();

        let value = ask(&prompt, "Name", Some(" Alice ".to_string()), None).unwrap();

        assert_eq!(value, "Alice");
    }

    #[test]
    fn test_ask_prompts_with_initial_value() {
        let mut prompt = MockPrompt::new();
        prompt
            .expect_input()
            .withf(|label, initial| label == "Name" && initial.as_deref() == Some("Alice"))
            .times(1)
            .returning(|_, _| Ok("Alicia ".to_string()));

        let value = ask(&prompt, "Name", None, Some("Alice".to_string())).unwrap();

        assert_eq!(value, "Alicia");
    }

    #[test]
    fn test_confirmed_skips_prompt_with_yes() {
        let mut prompt = MockPrompt::new();
        prompt.expect_confirm().never();

        assert!(confirmed(&prompt, "Delete?", true).unwrap());
    }

    #[test]
    fn test_confirmed_honours_answer() {
        let mut prompt = MockPrompt::new();
        prompt.expect_confirm().times(1).returning(|_| Ok(false));

        assert!(!confirmed(&prompt, "Delete?", false).unwrap());
    }
}
