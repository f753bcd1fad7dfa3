//! Table and JSON rendering.
//!
//! Every listing goes through [`render`]: text mode prints an aligned table
//! with a title, header, rows and a record count, JSON mode prints the rows as
//! a pretty JSON array.

use clap::ValueEnum;
use colored::Colorize;
use comfy_table::{Cell, Table, TableComponent, presets};
use serde::Serialize;
use serde_json::json;

use crate::domain::entities::{
    CoreCourse, Course, GraduationRequirement, ScoreDetail, Student, StudentSummary,
};
use crate::domain::reports::{
    CreditsEntry, DepartmentStatistics, FailedCourseEntry, GpaRankingEntry, SemesterStatistics,
    WarningEntry,
};
use crate::error::AppError;
use crate::infrastructure::bootstrap::SkippedStatement;
use crate::infrastructure::database::TableCount;

pub const EMPTY_MESSAGE: &str = "No records found";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// A record that can be shown as one table row.
pub trait TableRow {
    fn headers() -> &'static [&'static str];
    fn cells(&self) -> Vec<String>;
}

/// Renders rows in the requested format.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if JSON serialization fails.
pub fn render<T: TableRow + Serialize>(
    format: OutputFormat,
    title: &str,
    rows: &[T],
) -> Result<String, AppError> {
    match format {
        OutputFormat::Text => Ok(format_table(
            title,
            T::headers(),
            &rows.iter().map(TableRow::cells).collect::<Vec<_>>(),
        )),
        OutputFormat::Json => to_json(rows),
    }
}

pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, AppError> {
    serde_json::to_string_pretty(value).map_err(|e| {
        AppError::internal("Failed to serialize output", json!({ "reason": e.to_string() }))
    })
}

/// Formats an aligned text table.
///
/// Columns are laid out by `comfy-table`, which measures cells by display
/// width, so double-width (CJK) text stays aligned.
pub fn format_table(title: &str, headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", title.bright_blue().bold()));

    if rows.is_empty() {
        out.push_str(&format!("  {}\n", EMPTY_MESSAGE.yellow()));
        return out;
    }

    let mut table = Table::new();
    table
        .load_preset(presets::NOTHING)
        .set_style(TableComponent::HeaderLines, '─')
        .set_header(headers.iter().map(Cell::new));
    for row in rows {
        table.add_row(row);
    }
    for column in table.column_iter_mut() {
        column.set_padding((2, 0));
    }

    for line in table.lines() {
        out.push_str(line.trim_end());
        out.push('\n');
    }

    out.push_str(&format!(
        "\n  Total: {}\n",
        rows.len().to_string().bright_white().bold()
    ));
    out
}

/// Formats a number rounded to two decimals, dropping trailing zeros.
pub fn number(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    format!("{rounded}")
}

pub fn grade(value: Option<f64>) -> String {
    value.map(|v| format!("{v:.2}")).unwrap_or_else(|| "-".to_string())
}

fn optional(value: Option<f64>) -> String {
    value.map(number).unwrap_or_else(|| "-".to_string())
}

fn yes_no(flag: bool) -> String {
    if flag { "yes" } else { "no" }.to_string()
}

impl TableRow for Student {
    fn headers() -> &'static [&'static str] {
        &["ID", "Name", "Department", "Enrolled"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.department.clone(),
            self.enrollment_year.to_string(),
        ]
    }
}

impl TableRow for StudentSummary {
    fn headers() -> &'static [&'static str] {
        &["ID", "Name", "Department", "Enrolled", "Credits", "GPA"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.department.clone(),
            self.enrollment_year.to_string(),
            number(self.credits_earned),
            grade(self.average_grade_point),
        ]
    }
}

impl TableRow for Course {
    fn headers() -> &'static [&'static str] {
        &["ID", "Name", "Credit", "Category"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            number(self.credit),
            self.category.to_string(),
        ]
    }
}

/// A score row with the client-side grade point and pass flag.
#[derive(Debug, Serialize)]
pub struct ScoreListing<'a> {
    #[serde(flatten)]
    pub detail: &'a ScoreDetail,
    pub grade_point: f64,
    pub passed: bool,
}

impl<'a> From<&'a ScoreDetail> for ScoreListing<'a> {
    fn from(detail: &'a ScoreDetail) -> Self {
        Self {
            detail,
            grade_point: detail.grade_point(),
            passed: detail.passed(),
        }
    }
}

impl TableRow for ScoreListing<'_> {
    fn headers() -> &'static [&'static str] {
        &[
            "Student", "Name", "Course", "Course name", "Semester", "Score", "Credit", "GP",
            "Passed",
        ]
    }

    fn cells(&self) -> Vec<String> {
        let d = self.detail;
        vec![
            d.key.student_id.clone(),
            d.student_name.clone(),
            d.key.course_id.clone(),
            d.course_name.clone(),
            d.key.semester.clone(),
            number(d.value),
            number(d.credit),
            format!("{:.1}", self.grade_point),
            yes_no(self.passed),
        ]
    }
}

impl TableRow for GraduationRequirement {
    fn headers() -> &'static [&'static str] {
        &["Department", "Credits required", "Max core failures", "Min GPA"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.department.clone(),
            number(self.total_credits_required),
            self.max_core_failures.to_string(),
            format!("{:.2}", self.min_gpa),
        ]
    }
}

impl TableRow for CoreCourse {
    fn headers() -> &'static [&'static str] {
        &["Department", "Course"]
    }

    fn cells(&self) -> Vec<String> {
        vec![self.department.clone(), self.course_id.clone()]
    }
}

impl TableRow for WarningEntry {
    fn headers() -> &'static [&'static str] {
        &[
            "ID",
            "Name",
            "Department",
            "Reason",
            "Credits",
            "Required",
            "Core failures",
            "GPA",
            "Min GPA",
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.student_id.clone(),
            self.name.clone(),
            self.department.clone(),
            self.reason.clone(),
            number(self.credits_earned),
            number(self.credits_required),
            format!("{}/{}", self.core_failures, self.core_failure_limit),
            grade(self.average_grade_point),
            format!("{:.2}", self.min_gpa),
        ]
    }
}

impl TableRow for GpaRankingEntry {
    fn headers() -> &'static [&'static str] {
        &["ID", "Name", "Department", "Credits", "GPA"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.student_id.clone(),
            self.name.clone(),
            self.department.clone(),
            number(self.credits_earned),
            grade(self.average_grade_point),
        ]
    }
}

impl TableRow for FailedCourseEntry {
    fn headers() -> &'static [&'static str] {
        &[
            "ID", "Name", "Department", "Course", "Course name", "Category", "Credit", "Score",
            "Semester",
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.student_id.clone(),
            self.name.clone(),
            self.department.clone(),
            self.course_id.clone(),
            self.course_name.clone(),
            self.category.to_string(),
            number(self.credit),
            number(self.score),
            self.semester.clone(),
        ]
    }
}

impl TableRow for CreditsEntry {
    fn headers() -> &'static [&'static str] {
        &["ID", "Name", "Credits"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.student_id.clone(),
            self.name.clone(),
            number(self.credits_earned),
        ]
    }
}

impl TableRow for DepartmentStatistics {
    fn headers() -> &'static [&'static str] {
        &["Department", "Students", "Avg GPA", "Avg credits"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.department.clone(),
            self.student_count.to_string(),
            grade(self.average_grade_point),
            optional(self.average_credits),
        ]
    }
}

impl TableRow for SemesterStatistics {
    fn headers() -> &'static [&'static str] {
        &["Semester", "Students", "Enrollments", "Courses", "Avg score"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.semester.clone(),
            self.student_count.to_string(),
            self.enrollment_count.to_string(),
            self.course_count.to_string(),
            optional(self.average_score),
        ]
    }
}

impl TableRow for TableCount {
    fn headers() -> &'static [&'static str] {
        &["Table", "Rows"]
    }

    fn cells(&self) -> Vec<String> {
        vec![self.table.to_string(), self.rows.to_string()]
    }
}

impl TableRow for SkippedStatement {
    fn headers() -> &'static [&'static str] {
        &["Code", "Reason", "Statement"]
    }

    fn cells(&self) -> Vec<String> {
        vec![self.code.clone(), self.reason.clone(), self.preview.clone()]
    }
}
