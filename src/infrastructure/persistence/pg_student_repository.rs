//! PostgreSQL implementation of the student repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewStudent, Student, StudentSummary, UpdateStudent};
use crate::domain::repositories::StudentRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct StudentRow {
    id: String,
    name: String,
    department: String,
    enrollment_year: i32,
}

impl From<StudentRow> for Student {
    fn from(r: StudentRow) -> Self {
        Student::new(r.id, r.name, r.department, r.enrollment_year)
    }
}

#[derive(sqlx::FromRow)]
struct StudentSummaryRow {
    id: String,
    name: String,
    department: String,
    enrollment_year: i32,
    credits_earned: Option<f64>,
    average_grade_point: Option<f64>,
}

impl From<StudentSummaryRow> for StudentSummary {
    fn from(r: StudentSummaryRow) -> Self {
        StudentSummary {
            id: r.id,
            name: r.name,
            department: r.department,
            enrollment_year: r.enrollment_year,
            credits_earned: r.credits_earned.unwrap_or(0.0),
            average_grade_point: r.average_grade_point,
        }
    }
}

/// PostgreSQL repository for students.
pub struct PgStudentRepository {
    pool: Arc<PgPool>,
}

impl PgStudentRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StudentRepository for PgStudentRepository {
    async fn create(&self, new_student: NewStudent) -> Result<Student, AppError> {
        let row = sqlx::query_as::<_, StudentRow>(
            r#"
            INSERT INTO students (id, name, department, enrollment_year)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, department, enrollment_year
            "#,
        )
        .bind(&new_student.id)
        .bind(&new_student.name)
        .bind(&new_student.department)
        .bind(new_student.enrollment_year)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Student>, AppError> {
        let row = sqlx::query_as::<_, StudentRow>(
            r#"
            SELECT id, name, department, enrollment_year
            FROM students
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Student::from))
    }

    async fn list(&self) -> Result<Vec<Student>, AppError> {
        let rows = sqlx::query_as::<_, StudentRow>(
            r#"
            SELECT id, name, department, enrollment_year
            FROM students
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Student::from).collect())
    }

    async fn list_summaries(&self) -> Result<Vec<StudentSummary>, AppError> {
        let rows = sqlx::query_as::<_, StudentSummaryRow>(
            r#"
            SELECT s.id, s.name, s.department, s.enrollment_year,
                   g.credits_earned, g.average_grade_point
            FROM students s
            LEFT JOIN student_gpa_view g ON g.student_id = s.id
            ORDER BY s.id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(StudentSummary::from).collect())
    }

    async fn update(&self, id: &str, update: UpdateStudent) -> Result<Student, AppError> {
        let row = sqlx::query_as::<_, StudentRow>(
            r#"
            UPDATE students SET
                name            = $2,
                department      = $3,
                enrollment_year = $4
            WHERE id = $1
            RETURNING id, name, department, enrollment_year
            "#,
        )
        .bind(id)
        .bind(&update.name)
        .bind(&update.department)
        .bind(update.enrollment_year)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Student::from)
            .ok_or_else(|| AppError::not_found("Student not found", json!({ "id": id })))
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM students WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Student not found", json!({ "id": id })));
        }

        Ok(())
    }
}
