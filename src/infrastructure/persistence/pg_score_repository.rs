//! PostgreSQL implementation of the score repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use super::decode_category;
use crate::domain::entities::{NewScore, Score, ScoreDetail, ScoreKey};
use crate::domain::repositories::ScoreRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct ScoreRow {
    student_id: String,
    course_id: String,
    semester: String,
    score_value: f64,
}

impl From<ScoreRow> for Score {
    fn from(r: ScoreRow) -> Self {
        Score::new(ScoreKey::new(r.student_id, r.course_id, r.semester), r.score_value)
    }
}

#[derive(sqlx::FromRow)]
struct ScoreDetailRow {
    student_id: String,
    course_id: String,
    semester: String,
    score_value: f64,
    student_name: String,
    course_name: String,
    credit: f64,
    category: String,
}

impl TryFrom<ScoreDetailRow> for ScoreDetail {
    type Error = AppError;

    fn try_from(r: ScoreDetailRow) -> Result<Self, Self::Error> {
        Ok(ScoreDetail {
            key: ScoreKey::new(r.student_id, r.course_id, r.semester),
            value: r.score_value,
            student_name: r.student_name,
            course_name: r.course_name,
            credit: r.credit,
            category: decode_category(&r.category)?,
        })
    }
}

fn key_details(key: &ScoreKey) -> serde_json::Value {
    json!({
        "student_id": key.student_id,
        "course_id": key.course_id,
        "semester": key.semester,
    })
}

/// PostgreSQL repository for scores.
pub struct PgScoreRepository {
    pool: Arc<PgPool>,
}

impl PgScoreRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ScoreRepository for PgScoreRepository {
    async fn create(&self, new_score: NewScore) -> Result<Score, AppError> {
        let row = sqlx::query_as::<_, ScoreRow>(
            r#"
            INSERT INTO scores (student_id, course_id, semester, score_value)
            VALUES ($1, $2, $3, $4)
            RETURNING student_id, course_id, semester, score_value
            "#,
        )
        .bind(&new_score.key.student_id)
        .bind(&new_score.key.course_id)
        .bind(&new_score.key.semester)
        .bind(new_score.value)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find(&self, key: &ScoreKey) -> Result<Option<Score>, AppError> {
        let row = sqlx::query_as::<_, ScoreRow>(
            r#"
            SELECT student_id, course_id, semester, score_value
            FROM scores
            WHERE student_id = $1 AND course_id = $2 AND semester = $3
            "#,
        )
        .bind(&key.student_id)
        .bind(&key.course_id)
        .bind(&key.semester)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Score::from))
    }

    async fn list(&self) -> Result<Vec<ScoreDetail>, AppError> {
        let rows = sqlx::query_as::<_, ScoreDetailRow>(
            r#"
            SELECT sc.student_id, sc.course_id, sc.semester, sc.score_value,
                   s.name AS student_name, c.name AS course_name, c.credit, c.category
            FROM scores sc
            JOIN students s ON s.id = sc.student_id
            JOIN courses c ON c.id = sc.course_id
            ORDER BY sc.student_id, sc.semester, sc.course_id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        rows.into_iter().map(ScoreDetail::try_from).collect()
    }

    async fn list_for_student(&self, student_id: &str) -> Result<Vec<ScoreDetail>, AppError> {
        let rows = sqlx::query_as::<_, ScoreDetailRow>(
            r#"
            SELECT sc.student_id, sc.course_id, sc.semester, sc.score_value,
                   s.name AS student_name, c.name AS course_name, c.credit, c.category
            FROM scores sc
            JOIN students s ON s.id = sc.student_id
            JOIN courses c ON c.id = sc.course_id
            WHERE sc.student_id = $1
            ORDER BY sc.semester, c.name
            "#,
        )
        .bind(student_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        rows.into_iter().map(ScoreDetail::try_from).collect()
    }

    async fn update(&self, key: &ScoreKey, value: f64) -> Result<Score, AppError> {
        let row = sqlx::query_as::<_, ScoreRow>(
            r#"
            UPDATE scores SET score_value = $4
            WHERE student_id = $1 AND course_id = $2 AND semester = $3
            RETURNING student_id, course_id, semester, score_value
            "#,
        )
        .bind(&key.student_id)
        .bind(&key.course_id)
        .bind(&key.semester)
        .bind(value)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Score::from)
            .ok_or_else(|| AppError::not_found("Score not found", key_details(key)))
    }

    async fn delete(&self, key: &ScoreKey) -> Result<(), AppError> {
        let result = sqlx::query(
            "DELETE FROM scores WHERE student_id = $1 AND course_id = $2 AND semester = $3",
        )
        .bind(&key.student_id)
        .bind(&key.course_id)
        .bind(&key.semester)
        .execute(self.pool.as_ref())
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Score not found", key_details(key)));
        }

        Ok(())
    }
}
