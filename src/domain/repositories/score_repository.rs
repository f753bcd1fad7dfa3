//! Repository trait for scores.

use crate::domain::entities::{NewScore, Score, ScoreDetail, ScoreKey};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for scores.
///
/// Scores are addressed by their composite [`ScoreKey`]; only the value can
/// be updated.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgScoreRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_score.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ScoreRepository: Send + Sync {
    /// Records a score.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the key already exists or the
    /// student/course does not exist.
    async fn create(&self, new_score: NewScore) -> Result<Score, AppError>;

    async fn find(&self, key: &ScoreKey) -> Result<Option<Score>, AppError>;

    /// Lists every score joined with student and course, ordered by student
    /// and semester.
    async fn list(&self) -> Result<Vec<ScoreDetail>, AppError>;

    /// Lists the scores of one student; empty when the student has none or
    /// does not exist.
    async fn list_for_student(&self, student_id: &str) -> Result<Vec<ScoreDetail>, AppError>;

    /// Changes the value of a score.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no score has this key.
    async fn update(&self, key: &ScoreKey, value: f64) -> Result<Score, AppError>;

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no score has this key.
    async fn delete(&self, key: &ScoreKey) -> Result<(), AppError>;
}
