//! Repository trait for courses.

use crate::domain::entities::{Course, NewCourse, UpdateCourse};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for courses.
///
/// Deleting a course cascades to its score rows and core-course designations.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCourseRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// Creates a course.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the id is taken.
    async fn create(&self, new_course: NewCourse) -> Result<Course, AppError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Course>, AppError>;

    /// Lists all courses ordered by id.
    async fn list(&self) -> Result<Vec<Course>, AppError>;

    /// Replaces the non-key fields of a course.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the course does not exist.
    async fn update(&self, id: &str, update: UpdateCourse) -> Result<Course, AppError>;

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the course does not exist.
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}
