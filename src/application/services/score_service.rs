//! Score recording service.

use crate::domain::entities::{NewScore, Score, ScoreDetail, ScoreKey};
use crate::domain::repositories::ScoreRepository;
use crate::error::AppError;
use crate::utils::validation::{MAX_SEMESTER_LEN, require_key, require_label, require_range};
use serde_json::json;
use std::sync::Arc;

pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 100.0;

/// Service for recording and correcting scores.
///
/// Only the score value can change; the (student, course, semester) key is
/// fixed. Scores outside [0, 100] are rejected before reaching the database.
pub struct ScoreService<R: ScoreRepository> {
    repository: Arc<R>,
}

impl<R: ScoreRepository> ScoreService<R> {
    /// Creates a new score service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Records a score.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the key or value is invalid.
    /// Returns [`AppError::Conflict`] if the key already exists or refers to
    /// an unknown student or course.
    pub async fn record_score(&self, new_score: NewScore) -> Result<Score, AppError> {
        validate_key(&new_score.key)?;
        require_range("score", new_score.value, MIN_SCORE, MAX_SCORE)?;

        let score = self.repository.create(new_score).await?;
        tracing::info!(
            student_id = %score.key.student_id,
            course_id = %score.key.course_id,
            semester = %score.key.semester,
            "Score recorded"
        );
        Ok(score)
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no score has this key.
    pub async fn get_score(&self, key: &ScoreKey) -> Result<Score, AppError> {
        self.repository.find(key).await?.ok_or_else(|| {
            AppError::not_found(
                "Score not found",
                json!({
                    "student_id": key.student_id,
                    "course_id": key.course_id,
                    "semester": key.semester,
                }),
            )
        })
    }

    pub async fn list_scores(&self) -> Result<Vec<ScoreDetail>, AppError> {
        self.repository.list().await
    }

    pub async fn list_student_scores(&self, student_id: &str) -> Result<Vec<ScoreDetail>, AppError> {
        self.repository.list_for_student(student_id).await
    }

    /// Changes the value of an existing score.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the value is out of range.
    /// Returns [`AppError::NotFound`] if no score has this key.
    pub async fn update_score(&self, key: &ScoreKey, value: f64) -> Result<Score, AppError> {
        require_range("score", value, MIN_SCORE, MAX_SCORE)?;

        let score = self.repository.update(key, value).await?;
        tracing::info!(
            student_id = %key.student_id,
            course_id = %key.course_id,
            semester = %key.semester,
            "Score updated"
        );
        Ok(score)
    }

    pub async fn delete_score(&self, key: &ScoreKey) -> Result<(), AppError> {
        self.repository.delete(key).await?;
        tracing::info!(
            student_id = %key.student_id,
            course_id = %key.course_id,
            semester = %key.semester,
            "Score deleted"
        );
        Ok(())
    }
}

fn validate_key(key: &ScoreKey) -> Result<(), AppError> {
    require_key("student id", &key.student_id)?;
    require_key("course id", &key.course_id)?;
    require_label("semester", &key.semester, MAX_SEMESTER_LEN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockScoreRepository;

    fn key() -> ScoreKey {
        ScoreKey::new("S001", "C101", "2024-1")
    }

    #[tokio::test]
    async fn test_record_score_success() {
        let mut mock_repo = MockScoreRepository::new();
        mock_repo
            .expect_create()
            .withf(|s| s.key.student_id == "S001" && s.value == 60.0)
            .times(1)
            .returning(|s| Ok(Score::new(s.key, s.value)));

        let service = ScoreService::new(Arc::new(mock_repo));
        let score = service
            .record_score(NewScore {
                key: key(),
                value: 60.0,
            })
            .await
            .unwrap();

        assert!(score.passed());
        assert_eq!(score.grade_point(), 1.0);
    }

    #[tokio::test]
    async fn test_record_score_out_of_range_skips_repository() {
        let service = ScoreService::new(Arc::new(MockScoreRepository::new()));

        for value in [-0.1, 100.5, f64::NAN] {
            let result = service.record_score(NewScore { key: key(), value }).await;
            assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
        }
    }

    #[tokio::test]
    async fn test_record_score_boundaries_accepted() {
        let mut mock_repo = MockScoreRepository::new();
        mock_repo
            .expect_create()
            .times(2)
            .returning(|s| Ok(Score::new(s.key, s.value)));

        let service = ScoreService::new(Arc::new(mock_repo));
        for value in [0.0, 100.0] {
            assert!(service.record_score(NewScore { key: key(), value }).await.is_ok());
        }
    }

    #[tokio::test]
    async fn test_record_score_missing_semester() {
        let service = ScoreService::new(Arc::new(MockScoreRepository::new()));

        let result = service
            .record_score(NewScore {
                key: ScoreKey::new("S001", "C101", ""),
                value: 75.0,
            })
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_record_score_accepts_free_text_semester() {
        let mut mock_repo = MockScoreRepository::new();
        mock_repo
            .expect_create()
            .withf(|s| s.key.semester == "2023秋")
            .times(1)
            .returning(|s| Ok(Score::new(s.key, s.value)));

        let service = ScoreService::new(Arc::new(mock_repo));
        let score = service
            .record_score(NewScore {
                key: ScoreKey::new("S001", "C101", "2023秋"),
                value: 75.0,
            })
            .await
            .unwrap();

        assert_eq!(score.key.semester, "2023秋");
    }

    #[tokio::test]
    async fn test_update_score_out_of_range() {
        let service = ScoreService::new(Arc::new(MockScoreRepository::new()));

        let result = service.update_score(&key(), 101.0).await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_update_score_passes_key_through() {
        let mut mock_repo = MockScoreRepository::new();
        mock_repo
            .expect_update()
            .withf(|k, v| *k == ScoreKey::new("S001", "C101", "2024-1") && *v == 88.0)
            .times(1)
            .returning(|k, v| Ok(Score::new(k.clone(), v)));

        let service = ScoreService::new(Arc::new(mock_repo));
        let score = service.update_score(&key(), 88.0).await.unwrap();

        assert_eq!(score.key, key());
        assert_eq!(score.grade_point(), 3.0);
    }

    #[tokio::test]
    async fn test_get_score_not_found() {
        let mut mock_repo = MockScoreRepository::new();
        mock_repo.expect_find().times(1).returning(|_| Ok(None));

        let service = ScoreService::new(Arc::new(mock_repo));
        let result = service.get_score(&key()).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }
}
