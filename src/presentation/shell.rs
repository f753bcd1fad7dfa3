//! Interactive shell.
//!
//! Keeps the single session open across many commands. Each line is parsed
//! with the same panel commands as the command line; errors are reported and
//! the shell keeps going.

use clap::{Parser, Subcommand};
use colored::Colorize;
use serde_json::json;

use super::panels::{PanelCommand, dispatch};
use super::{Session, report_error};
use crate::error::AppError;

const PROMPT: &str = "academic";

#[derive(Debug, Parser)]
#[command(name = "academic", no_binary_name = true, disable_version_flag = true)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Debug, Subcommand)]
enum ShellCommand {
    /// Leave the shell
    #[command(alias = "quit")]
    Exit,

    #[command(flatten)]
    Panel(PanelCommand),
}

/// Runs the read-eval loop until `exit` or end of input.
pub async fn run(session: &Session) -> Result<(), AppError> {
    println!(
        "{}",
        "Academic records shell. Type 'help' for commands, 'exit' to leave."
            .bright_blue()
            .bold()
    );

    loop {
        let line = match session.prompt().input(PROMPT, None) {
            Ok(line) => line,
            Err(e) => {
                tracing::debug!(error = %e, "Input closed");
                break;
            }
        };

        let args = match split_args(&line) {
            Ok(args) if args.is_empty() => continue,
            Ok(args) => args,
            Err(message) => {
                eprintln!("{}", message.red());
                continue;
            }
        };

        match ShellLine::try_parse_from(args) {
            Ok(ShellLine {
                command: ShellCommand::Exit,
            }) => break,
            Ok(ShellLine {
                command: ShellCommand::Panel(command),
            }) => {
                let result = match check_supported(&command) {
                    Ok(()) => dispatch(session, command).await,
                    Err(e) => Err(e),
                };
                if let Err(e) = result {
                    report_error(session.format, &e);
                }
            }
            Err(e) => {
                if let Err(print_err) = e.print() {
                    tracing::debug!(error = %print_err, "Failed to print usage");
                }
            }
        }
    }

    Ok(())
}

/// Rejects commands that need a fresh connection.
///
/// The shell is already connected to the target database, so creating it
/// has to happen from the command line.
fn check_supported(command: &PanelCommand) -> Result<(), AppError> {
    if let PanelCommand::Db { action } = command
        && action.needs_database_creation()
    {
        return Err(AppError::bad_request(
            "--create-database is not available inside the shell",
            json!({ "hint": "run `academic-records db init --create-database` instead" }),
        ));
    }
    Ok(())
}

/// Splits a shell line into arguments.
///
/// Whitespace separates arguments; single or double quotes group words and
/// a backslash escapes the next character outside single quotes.
pub fn split_args(line: &str) -> Result<Vec<String>, String> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut in_arg = false;
    let mut quote: Option<char> = None;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some('"'), '\\') | (None, '\\') => match chars.next() {
                Some(escaped) => {
                    current.push(escaped);
                    in_arg = true;
                }
                None => return Err("trailing backslash".to_string()),
            },
            (Some(_), c) => current.push(c),
            (None, '\'' | '"') => {
                quote = Some(c);
                in_arg = true;
            }
            (None, c) if c.is_whitespace() => {
                if in_arg {
                    args.push(std::mem::take(&mut current));
                    in_arg = false;
                }
            }
            (None, c) => {
                current.push(c);
                in_arg = true;
            }
        }
    }

    if let Some(q) = quote {
        return Err(format!("unterminated {q} quote"));
    }
    if in_arg {
        args.push(current);
    }
    Ok(args)
}
