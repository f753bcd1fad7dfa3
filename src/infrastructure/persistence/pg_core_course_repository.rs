//! PostgreSQL implementation of the core course repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::CoreCourse;
use crate::domain::repositories::CoreCourseRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct CoreCourseRow {
    department: String,
    course_id: String,
}

impl From<CoreCourseRow> for CoreCourse {
    fn from(r: CoreCourseRow) -> Self {
        CoreCourse::new(r.department, r.course_id)
    }
}

/// PostgreSQL repository for core-course designations.
pub struct PgCoreCourseRepository {
    pool: Arc<PgPool>,
}

impl PgCoreCourseRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CoreCourseRepository for PgCoreCourseRepository {
    async fn create(&self, core_course: CoreCourse) -> Result<CoreCourse, AppError> {
        let row = sqlx::query_as::<_, CoreCourseRow>(
            r#"
            INSERT INTO core_courses (department, course_id)
            VALUES ($1, $2)
            RETURNING department, course_id
            "#,
        )
        .bind(&core_course.department)
        .bind(&core_course.course_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn exists(&self, core_course: &CoreCourse) -> Result<bool, AppError> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM core_courses WHERE department = $1 AND course_id = $2
            )
            "#,
        )
        .bind(&core_course.department)
        .bind(&core_course.course_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(exists)
    }

    async fn list(&self, department: Option<String>) -> Result<Vec<CoreCourse>, AppError> {
        let rows = sqlx::query_as::<_, CoreCourseRow>(
            r#"
            SELECT department, course_id
            FROM core_courses
            WHERE ($1::TEXT IS NULL OR department = $1)
            ORDER BY department, course_id
            "#,
        )
        .bind(department)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(CoreCourse::from).collect())
    }

    async fn delete(&self, core_course: &CoreCourse) -> Result<(), AppError> {
        let result =
            sqlx::query("DELETE FROM core_courses WHERE department = $1 AND course_id = $2")
                .bind(&core_course.department)
                .bind(&core_course.course_id)
                .execute(self.pool.as_ref())
                .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(
                "Core course not found",
                json!({
                    "department": core_course.department,
                    "course_id": core_course.course_id,
                }),
            ));
        }

        Ok(())
    }
}
