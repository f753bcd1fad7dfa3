//! Row types of the read-only reports.
//!
//! All figures are computed by database views and functions and consumed
//! verbatim.

use serde::Serialize;

use super::entities::CourseCategory;

/// A student flagged by `generate_warning_list()`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WarningEntry {
    pub student_id: String,
    pub name: String,
    pub department: String,
    pub reason: String,
    pub credits_earned: f64,
    pub credits_required: f64,
    pub core_failures: i64,
    pub core_failure_limit: i32,
    pub average_grade_point: Option<f64>,
    pub min_gpa: f64,
}

/// One row of `student_gpa_view`, ordered best first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GpaRankingEntry {
    pub student_id: String,
    pub name: String,
    pub department: String,
    pub credits_earned: f64,
    pub average_grade_point: Option<f64>,
}

/// A failed score row from `failed_courses_view` or `failed_core_courses_view`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FailedCourseEntry {
    pub student_id: String,
    pub name: String,
    pub department: String,
    pub course_id: String,
    pub course_name: String,
    pub credit: f64,
    pub category: CourseCategory,
    pub score: f64,
    pub semester: String,
}

/// One row of `credits_completed_view`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreditsEntry {
    pub student_id: String,
    pub name: String,
    pub credits_earned: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepartmentStatistics {
    pub department: String,
    pub student_count: i64,
    pub average_grade_point: Option<f64>,
    pub average_credits: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SemesterStatistics {
    pub semester: String,
    pub student_count: i64,
    pub enrollment_count: i64,
    pub course_count: i64,
    pub average_score: Option<f64>,
}
