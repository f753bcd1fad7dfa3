//! Repository trait for the read-only reports.

use crate::domain::reports::{
    CreditsEntry, DepartmentStatistics, FailedCourseEntry, GpaRankingEntry, SemesterStatistics,
    WarningEntry,
};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface over the reporting views and functions.
///
/// Every method returns an empty vector when nothing matches.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgReportRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_reports.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReportRepository: Send + Sync {
    /// Students at risk according to their department's requirement.
    async fn warning_list(&self) -> Result<Vec<WarningEntry>, AppError>;

    /// Students ordered by average grade point, best first.
    async fn gpa_ranking(&self) -> Result<Vec<GpaRankingEntry>, AppError>;

    /// Failed scores in core courses of the student's department.
    async fn failed_core_courses(
        &self,
        student_id: Option<String>,
    ) -> Result<Vec<FailedCourseEntry>, AppError>;

    /// Failed scores in any course.
    async fn failed_courses(
        &self,
        student_id: Option<String>,
    ) -> Result<Vec<FailedCourseEntry>, AppError>;

    /// Credits earned per student, most first.
    async fn credits_completed(&self) -> Result<Vec<CreditsEntry>, AppError>;

    async fn department_statistics(&self) -> Result<Vec<DepartmentStatistics>, AppError>;

    async fn semester_statistics(&self) -> Result<Vec<SemesterStatistics>, AppError>;
}
