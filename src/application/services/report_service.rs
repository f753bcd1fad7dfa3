//! Read-only reporting service.

use crate::domain::reports::{
    CreditsEntry, DepartmentStatistics, FailedCourseEntry, GpaRankingEntry, SemesterStatistics,
    WarningEntry,
};
use crate::domain::repositories::ReportRepository;
use crate::error::AppError;
use std::sync::Arc;

/// Service exposing the precomputed reports.
///
/// Results come straight from the database views; this layer only normalizes
/// the optional student filter.
pub struct ReportService<R: ReportRepository> {
    repository: Arc<R>,
}

impl<R: ReportRepository> ReportService<R> {
    /// Creates a new report service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub async fn warning_list(&self) -> Result<Vec<WarningEntry>, AppError> {
        self.repository.warning_list().await
    }

    pub async fn gpa_ranking(&self) -> Result<Vec<GpaRankingEntry>, AppError> {
        self.repository.gpa_ranking().await
    }

    pub async fn failed_core_courses(
        &self,
        student_id: Option<String>,
    ) -> Result<Vec<FailedCourseEntry>, AppError> {
        self.repository
            .failed_core_courses(normalize_filter(student_id))
            .await
    }

    pub async fn failed_courses(
        &self,
        student_id: Option<String>,
    ) -> Result<Vec<FailedCourseEntry>, AppError> {
        self.repository
            .failed_courses(normalize_filter(student_id))
            .await
    }

    pub async fn credits_completed(&self) -> Result<Vec<CreditsEntry>, AppError> {
        self.repository.credits_completed().await
    }

    pub async fn department_statistics(&self) -> Result<Vec<DepartmentStatistics>, AppError> {
        self.repository.department_statistics().await
    }

    pub async fn semester_statistics(&self) -> Result<Vec<SemesterStatistics>, AppError> {
        self.repository.semester_statistics().await
    }
}

/// Blank filters mean "all students".
fn normalize_filter(student_id: Option<String>) -> Option<String> {
    student_id
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockReportRepository;

    #[tokio::test]
    async fn test_blank_filter_means_all() {
        let mut mock_repo = MockReportRepository::new();
        mock_repo
            .expect_failed_courses()
            .withf(|f| f.is_none())
            .times(1)
            .returning(|_| Ok(vec![]));

        let service = ReportService::new(Arc::new(mock_repo));
        let rows = service.failed_courses(Some("   ".to_string())).await.unwrap();

        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn test_filter_is_trimmed() {
        let mut mock_repo = MockReportRepository::new();
        mock_repo
            .expect_failed_core_courses()
            .withf(|f| f.as_deref() == Some("S001"))
            .times(1)
            .returning(|_| Ok(vec![]));

        let service = ReportService::new(Arc::new(mock_repo));
        service
            .failed_core_courses(Some(" S001 ".to_string()))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_warning_list_passes_rows_through() {
        let mut mock_repo = MockReportRepository::new();
        mock_repo.expect_warning_list().times(1).returning(|| {
            Ok(vec![WarningEntry {
                student_id: "S001".to_string(),
                name: "Alice".to_string(),
                department: "CS".to_string(),
                reason: "core course failures exceed limit".to_string(),
                credits_earned: 12.0,
                credits_required: 160.0,
                core_failures: 2,
                core_failure_limit: 1,
                average_grade_point: Some(1.2),
                min_gpa: 2.0,
            }])
        });

        let service = ReportService::new(Arc::new(mock_repo));
        let rows = service.warning_list().await.unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].core_failures, 2);
    }
}
