//! PostgreSQL implementation of the graduation requirement repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{
    GraduationRequirement, NewGraduationRequirement, UpdateGraduationRequirement,
};
use crate::domain::repositories::GraduationRequirementRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct RequirementRow {
    department: String,
    total_credits_required: f64,
    max_core_failures: i32,
    min_gpa: f64,
}

impl From<RequirementRow> for GraduationRequirement {
    fn from(r: RequirementRow) -> Self {
        GraduationRequirement::new(
            r.department,
            r.total_credits_required,
            r.max_core_failures,
            r.min_gpa,
        )
    }
}

/// PostgreSQL repository for graduation requirements.
pub struct PgGraduationRequirementRepository {
    pool: Arc<PgPool>,
}

impl PgGraduationRequirementRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GraduationRequirementRepository for PgGraduationRequirementRepository {
    async fn create(
        &self,
        new_requirement: NewGraduationRequirement,
    ) -> Result<GraduationRequirement, AppError> {
        let row = sqlx::query_as::<_, RequirementRow>(
            r#"
            INSERT INTO graduation_requirements
                (department, total_credits_required, max_core_failures, min_gpa)
            VALUES ($1, $2, $3, $4)
            RETURNING department, total_credits_required, max_core_failures, min_gpa
            "#,
        )
        .bind(&new_requirement.department)
        .bind(new_requirement.total_credits_required)
        .bind(new_requirement.max_core_failures)
        .bind(new_requirement.min_gpa)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_department(
        &self,
        department: &str,
    ) -> Result<Option<GraduationRequirement>, AppError> {
        let row = sqlx::query_as::<_, RequirementRow>(
            r#"
            SELECT department, total_credits_required, max_core_failures, min_gpa
            FROM graduation_requirements
            WHERE department = $1
            "#,
        )
        .bind(department)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(GraduationRequirement::from))
    }

    async fn list(&self) -> Result<Vec<GraduationRequirement>, AppError> {
        let rows = sqlx::query_as::<_, RequirementRow>(
            r#"
            SELECT department, total_credits_required, max_core_failures, min_gpa
            FROM graduation_requirements
            ORDER BY department
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(GraduationRequirement::from).collect())
    }

    async fn update(
        &self,
        department: &str,
        update: UpdateGraduationRequirement,
    ) -> Result<GraduationRequirement, AppError> {
        let row = sqlx::query_as::<_, RequirementRow>(
            r#"
            UPDATE graduation_requirements SET
                total_credits_required = $2,
                max_core_failures      = $3,
                min_gpa                = $4
            WHERE department = $1
            RETURNING department, total_credits_required, max_core_failures, min_gpa
            "#,
        )
        .bind(department)
        .bind(update.total_credits_required)
        .bind(update.max_core_failures)
        .bind(update.min_gpa)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(GraduationRequirement::from).ok_or_else(|| {
            AppError::not_found(
                "Graduation requirement not found",
                json!({ "department": department }),
            )
        })
    }

    async fn delete(&self, department: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM graduation_requirements WHERE department = $1")
            .bind(department)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(
                "Graduation requirement not found",
                json!({ "department": department }),
            ));
        }

        Ok(())
    }
}
