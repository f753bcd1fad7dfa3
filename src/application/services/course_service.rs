//! Course management service.

use crate::domain::entities::{Course, NewCourse, UpdateCourse};
use crate::domain::repositories::CourseRepository;
use crate::error::AppError;
use crate::utils::validation::{require_key, require_positive, require_text};
use serde_json::json;
use std::sync::Arc;

/// Service for managing courses.
///
/// The course id is fixed once created.
pub struct CourseService<R: CourseRepository> {
    repository: Arc<R>,
}

impl<R: CourseRepository> CourseService<R> {
    /// Creates a new course service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates a course.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the id, name or credit is invalid.
    /// Returns [`AppError::Conflict`] if the id is taken.
    pub async fn create_course(&self, new_course: NewCourse) -> Result<Course, AppError> {
        require_key("course id", &new_course.id)?;
        require_text("course name", &new_course.name)?;
        require_positive("credit", new_course.credit)?;

        let course = self.repository.create(new_course).await?;
        tracing::info!(course_id = %course.id, "Course created");
        Ok(course)
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the course does not exist.
    pub async fn get_course(&self, id: &str) -> Result<Course, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Course not found", json!({ "id": id })))
    }

    pub async fn list_courses(&self) -> Result<Vec<Course>, AppError> {
        self.repository.list().await
    }

    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the name or credit is invalid.
    /// Returns [`AppError::NotFound`] if the course does not exist.
    pub async fn update_course(&self, id: &str, update: UpdateCourse) -> Result<Course, AppError> {
        require_text("course name", &update.name)?;
        require_positive("credit", update.credit)?;

        let course = self.repository.update(id, update).await?;
        tracing::info!(course_id = %id, "Course updated");
        Ok(course)
    }

    /// Deletes a course together with its scores and core designations.
    pub async fn delete_course(&self, id: &str) -> Result<(), AppError> {
        self.repository.delete(id).await?;
        tracing::info!(course_id = %id, "Course deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::CourseCategory;
    use crate::domain::repositories::MockCourseRepository;

    fn new_course(credit: f64) -> NewCourse {
        NewCourse {
            id: "C101".to_string(),
            name: "Data Structures".to_string(),
            credit,
            category: CourseCategory::Core,
        }
    }

    #[tokio::test]
    async fn test_create_course_success() {
        let mut mock_repo = MockCourseRepository::new();
        mock_repo.expect_create().times(1).returning(|c| {
            Ok(Course::new(c.id, c.name, c.credit, c.category))
        });

        let service = CourseService::new(Arc::new(mock_repo));
        let course = service.create_course(new_course(3.5)).await.unwrap();

        assert_eq!(course.id, "C101");
        assert_eq!(course.credit, 3.5);
        assert_eq!(course.category, CourseCategory::Core);
    }

    #[tokio::test]
    async fn test_create_course_zero_credit() {
        let mock_repo = MockCourseRepository::new();
        let service = CourseService::new(Arc::new(mock_repo));

        let result = service.create_course(new_course(0.0)).await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_update_course_negative_credit() {
        let mock_repo = MockCourseRepository::new();
        let service = CourseService::new(Arc::new(mock_repo));

        let update = UpdateCourse {
            name: "Algorithms".to_string(),
            credit: -1.0,
            category: CourseCategory::Elective,
        };
        let result = service.update_course("C101", update).await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_get_course_not_found() {
        let mut mock_repo = MockCourseRepository::new();
        mock_repo.expect_find_by_id().times(1).returning(|_| Ok(None));

        let service = CourseService::new(Arc::new(mock_repo));
        let result = service.get_course("C999").await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }
}
