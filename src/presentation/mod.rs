//! Terminal presentation layer.
//!
//! One panel per entity plus the report and database panels. A panel turns
//! one command into one service call, renders the result and, after a
//! successful mutation, re-queries and re-renders its list.

pub mod cli;
pub mod forms;
pub mod panels;
pub mod prompt;
pub mod render;
pub mod shell;

use colored::Colorize;
use serde::Serialize;
use std::fmt::Display;

use crate::config::Config;
use crate::error::AppError;
use crate::state::AppContext;
use prompt::Prompt;
use render::{OutputFormat, TableRow, render, to_json};

/// Everything a panel needs to serve one action.
pub struct Session {
    pub ctx: AppContext,
    pub config: Config,
    pub format: OutputFormat,
    pub prompt: Box<dyn Prompt>,
}

impl Session {
    pub fn new(
        ctx: AppContext,
        config: Config,
        format: OutputFormat,
        prompt: Box<dyn Prompt>,
    ) -> Self {
        Self {
            ctx,
            config,
            format,
            prompt,
        }
    }

    pub fn prompt(&self) -> &dyn Prompt {
        self.prompt.as_ref()
    }

    /// Prints rows as a table or JSON array.
    pub fn show<T: TableRow + Serialize>(&self, title: &str, rows: &[T]) -> Result<(), AppError> {
        println!("{}", render(self.format, title, rows)?);
        Ok(())
    }

    /// Prints a single value; text mode uses the table layout.
    pub fn show_one<T: TableRow + Serialize>(&self, title: &str, row: &T) -> Result<(), AppError> {
        match self.format {
            OutputFormat::Text => self.show(title, std::slice::from_ref(row)),
            OutputFormat::Json => {
                println!("{}", to_json(row)?);
                Ok(())
            }
        }
    }

    /// Reports a successful mutation.
    ///
    /// JSON mode keeps stdout for data, so status lines go to stderr.
    pub fn success(&self, message: impl Display) {
        match self.format {
            OutputFormat::Text => println!("{}\n", format!("✅ {message}").green().bold()),
            OutputFormat::Json => eprintln!("{message}"),
        }
    }

    pub fn cancelled(&self) {
        match self.format {
            OutputFormat::Text => println!("{}", "❌ Cancelled".red()),
            OutputFormat::Json => eprintln!("Cancelled"),
        }
    }

    pub fn heading(&self, title: impl Display) {
        if self.format == OutputFormat::Text {
            println!("{}\n", title.to_string().bright_blue().bold());
        }
    }
}

/// Prints an error with its category.
pub fn report_error(format: OutputFormat, error: &AppError) {
    match format {
        OutputFormat::Text => {
            eprintln!(
                "{} {}",
                format!("error[{}]:", error.code()).red().bold(),
                error
            );
            let details = error.details();
            if details.as_object().is_some_and(|d| !d.is_empty()) {
                eprintln!("  {}", details.to_string().bright_black());
            }
        }
        OutputFormat::Json => match to_json(&error.to_info()) {
            Ok(json) => eprintln!("{json}"),
            Err(_) => eprintln!("{}: {}", error.code(), error),
        },
    }
}
