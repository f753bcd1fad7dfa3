//! PostgreSQL implementation of the report repository.
//!
//! Reads the reporting views and calls `generate_warning_list()`; no figure is
//! recomputed here.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use super::decode_category;
use crate::domain::reports::{
    CreditsEntry, DepartmentStatistics, FailedCourseEntry, GpaRankingEntry, SemesterStatistics,
    WarningEntry,
};
use crate::domain::repositories::ReportRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct WarningRow {
    student_id: String,
    name: String,
    department: String,
    reason: String,
    credits_earned: f64,
    credits_required: f64,
    core_failures: i64,
    core_failure_limit: i32,
    average_grade_point: Option<f64>,
    min_gpa: f64,
}

impl From<WarningRow> for WarningEntry {
    fn from(r: WarningRow) -> Self {
        WarningEntry {
            student_id: r.student_id,
            name: r.name,
            department: r.department,
            reason: r.reason,
            credits_earned: r.credits_earned,
            credits_required: r.credits_required,
            core_failures: r.core_failures,
            core_failure_limit: r.core_failure_limit,
            average_grade_point: r.average_grade_point,
            min_gpa: r.min_gpa,
        }
    }
}

#[derive(sqlx::FromRow)]
struct GpaRow {
    student_id: String,
    name: String,
    department: String,
    credits_earned: f64,
    average_grade_point: Option<f64>,
}

#[derive(sqlx::FromRow)]
struct FailedRow {
    student_id: String,
    name: String,
    department: String,
    course_id: String,
    course_name: String,
    credit: f64,
    category: String,
    score: f64,
    semester: String,
}

impl TryFrom<FailedRow> for FailedCourseEntry {
    type Error = AppError;

    fn try_from(r: FailedRow) -> Result<Self, Self::Error> {
        Ok(FailedCourseEntry {
            student_id: r.student_id,
            name: r.name,
            department: r.department,
            course_id: r.course_id,
            course_name: r.course_name,
            credit: r.credit,
            category: decode_category(&r.category)?,
            score: r.score,
            semester: r.semester,
        })
    }
}

#[derive(sqlx::FromRow)]
struct CreditsRow {
    student_id: String,
    name: String,
    credits_earned: f64,
}

#[derive(sqlx::FromRow)]
struct DepartmentRow {
    department: String,
    student_count: i64,
    average_grade_point: Option<f64>,
    average_credits: Option<f64>,
}

#[derive(sqlx::FromRow)]
struct SemesterRow {
    semester: String,
    student_count: i64,
    enrollment_count: i64,
    course_count: i64,
    average_score: Option<f64>,
}

/// PostgreSQL repository for the reporting views.
pub struct PgReportRepository {
    pool: Arc<PgPool>,
}

impl PgReportRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    async fn failed_from(
        &self,
        view: FailedView,
        student_id: Option<String>,
    ) -> Result<Vec<FailedCourseEntry>, AppError> {
        let sql = format!(
            r#"
            SELECT student_id, name, department, course_id, course_name,
                   credit, category, score, semester
            FROM {}
            WHERE ($1::TEXT IS NULL OR student_id = $1)
            ORDER BY student_id, semester, course_id
            "#,
            view.as_str()
        );

        let rows = sqlx::query_as::<_, FailedRow>(&sql)
            .bind(student_id)
            .fetch_all(self.pool.as_ref())
            .await?;

        rows.into_iter().map(FailedCourseEntry::try_from).collect()
    }
}

#[derive(Clone, Copy)]
enum FailedView {
    All,
    Core,
}

impl FailedView {
    fn as_str(self) -> &'static str {
        match self {
            FailedView::All => "failed_courses_view",
            FailedView::Core => "failed_core_courses_view",
        }
    }
}

#[async_trait]
impl ReportRepository for PgReportRepository {
    async fn warning_list(&self) -> Result<Vec<WarningEntry>, AppError> {
        let rows = sqlx::query_as::<_, WarningRow>("SELECT * FROM generate_warning_list()")
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(WarningEntry::from).collect())
    }

    async fn gpa_ranking(&self) -> Result<Vec<GpaRankingEntry>, AppError> {
        let rows = sqlx::query_as::<_, GpaRow>(
            r#"
            SELECT student_id, name, department, credits_earned, average_grade_point
            FROM student_gpa_view
            ORDER BY average_grade_point DESC NULLS LAST, student_id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| GpaRankingEntry {
                student_id: r.student_id,
                name: r.name,
                department: r.department,
                credits_earned: r.credits_earned,
                average_grade_point: r.average_grade_point,
            })
            .collect())
    }

    async fn failed_core_courses(
        &self,
        student_id: Option<String>,
    ) -> Result<Vec<FailedCourseEntry>, AppError> {
        self.failed_from(FailedView::Core, student_id).await
    }

    async fn failed_courses(
        &self,
        student_id: Option<String>,
    ) -> Result<Vec<FailedCourseEntry>, AppError> {
        self.failed_from(FailedView::All, student_id).await
    }

    async fn credits_completed(&self) -> Result<Vec<CreditsEntry>, AppError> {
        let rows = sqlx::query_as::<_, CreditsRow>(
            r#"
            SELECT student_id, name, credits_earned
            FROM credits_completed_view
            ORDER BY credits_earned DESC, student_id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| CreditsEntry {
                student_id: r.student_id,
                name: r.name,
                credits_earned: r.credits_earned,
            })
            .collect())
    }

    async fn department_statistics(&self) -> Result<Vec<DepartmentStatistics>, AppError> {
        let rows = sqlx::query_as::<_, DepartmentRow>(
            r#"
            SELECT
                s.department,
                COUNT(*) AS student_count,
                ROUND(AVG(g.average_grade_point)::NUMERIC, 2)::DOUBLE PRECISION
                    AS average_grade_point,
                ROUND(AVG(g.credits_earned)::NUMERIC, 2)::DOUBLE PRECISION
                    AS average_credits
            FROM students s
            JOIN student_gpa_view g ON g.student_id = s.id
            GROUP BY s.department
            ORDER BY average_grade_point DESC NULLS LAST, s.department
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| DepartmentStatistics {
                department: r.department,
                student_count: r.student_count,
                average_grade_point: r.average_grade_point,
                average_credits: r.average_credits,
            })
            .collect())
    }

    async fn semester_statistics(&self) -> Result<Vec<SemesterStatistics>, AppError> {
        let rows = sqlx::query_as::<_, SemesterRow>(
            r#"
            SELECT
                semester,
                COUNT(DISTINCT student_id) AS student_count,
                COUNT(*) AS enrollment_count,
                COUNT(DISTINCT course_id) AS course_count,
                ROUND(AVG(score_value)::NUMERIC, 2)::DOUBLE PRECISION AS average_score
            FROM scores
            GROUP BY semester
            ORDER BY semester
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| SemesterStatistics {
                semester: r.semester,
                student_count: r.student_count,
                enrollment_count: r.enrollment_count,
                course_count: r.course_count,
                average_score: r.average_score,
            })
            .collect())
    }
}
