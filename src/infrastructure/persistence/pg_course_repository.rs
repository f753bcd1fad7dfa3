//! PostgreSQL implementation of the course repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use super::decode_category;
use crate::domain::entities::{Course, NewCourse, UpdateCourse};
use crate::domain::repositories::CourseRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct CourseRow {
    id: String,
    name: String,
    credit: f64,
    category: String,
}

impl TryFrom<CourseRow> for Course {
    type Error = AppError;

    fn try_from(r: CourseRow) -> Result<Self, Self::Error> {
        Ok(Course::new(r.id, r.name, r.credit, decode_category(&r.category)?))
    }
}

/// PostgreSQL repository for courses.
pub struct PgCourseRepository {
    pool: Arc<PgPool>,
}

impl PgCourseRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CourseRepository for PgCourseRepository {
    async fn create(&self, new_course: NewCourse) -> Result<Course, AppError> {
        let row = sqlx::query_as::<_, CourseRow>(
            r#"
            INSERT INTO courses (id, name, credit, category)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, credit, category
            "#,
        )
        .bind(&new_course.id)
        .bind(&new_course.name)
        .bind(new_course.credit)
        .bind(new_course.category.as_str())
        .fetch_one(self.pool.as_ref())
        .await?;

        row.try_into()
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Course>, AppError> {
        let row = sqlx::query_as::<_, CourseRow>(
            "SELECT id, name, credit, category FROM courses WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Course::try_from).transpose()
    }

    async fn list(&self) -> Result<Vec<Course>, AppError> {
        let rows = sqlx::query_as::<_, CourseRow>(
            "SELECT id, name, credit, category FROM courses ORDER BY id",
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        rows.into_iter().map(Course::try_from).collect()
    }

    async fn update(&self, id: &str, update: UpdateCourse) -> Result<Course, AppError> {
        let row = sqlx::query_as::<_, CourseRow>(
            r#"
            UPDATE courses SET
                name     = $2,
                credit   = $3,
                category = $4
            WHERE id = $1
            RETURNING id, name, credit, category
            "#,
        )
        .bind(id)
        .bind(&update.name)
        .bind(update.credit)
        .bind(update.category.as_str())
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Course::try_from)
            .transpose()?
            .ok_or_else(|| AppError::not_found("Course not found", json!({ "id": id })))
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM courses WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Course not found", json!({ "id": id })));
        }

        Ok(())
    }
}
