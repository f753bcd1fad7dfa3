//! PostgreSQL repository implementations.
//!
//! Concrete implementations of the domain repository traits using SQLx with
//! bound parameters for every user-supplied value.
//!
//! # Repositories
//!
//! - [`PgStudentRepository`]
//! - [`PgCourseRepository`]
//! - [`PgScoreRepository`]
//! - [`PgGraduationRequirementRepository`]
//! - [`PgCoreCourseRepository`]
//! - [`PgReportRepository`] - Reporting views and the warning-list function

pub mod pg_core_course_repository;
pub mod pg_course_repository;
pub mod pg_graduation_requirement_repository;
pub mod pg_report_repository;
pub mod pg_score_repository;
pub mod pg_student_repository;

pub use pg_core_course_repository::PgCoreCourseRepository;
pub use pg_course_repository::PgCourseRepository;
pub use pg_graduation_requirement_repository::PgGraduationRequirementRepository;
pub use pg_report_repository::PgReportRepository;
pub use pg_score_repository::PgScoreRepository;
pub use pg_student_repository::PgStudentRepository;

use crate::domain::entities::CourseCategory;
use crate::error::AppError;
use serde_json::json;

/// Decodes the stored category label of a course.
pub(crate) fn decode_category(raw: &str) -> Result<CourseCategory, AppError> {
    raw.parse().map_err(|e: crate::domain::entities::UnknownCategory| {
        AppError::internal(
            "Unexpected course category in database",
            json!({ "value": raw, "reason": e.to_string() }),
        )
    })
}
