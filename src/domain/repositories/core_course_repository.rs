//! Repository trait for core-course designations.

use crate::domain::entities::CoreCourse;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for core courses.
///
/// Every field is part of the key, so designations are added and removed but
/// never updated.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCoreCourseRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_core_course.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CoreCourseRepository: Send + Sync {
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the pair already exists or the course
    /// does not exist.
    async fn create(&self, core_course: CoreCourse) -> Result<CoreCourse, AppError>;

    async fn exists(&self, core_course: &CoreCourse) -> Result<bool, AppError>;

    /// Lists designations ordered by department and course, optionally for a
    /// single department.
    async fn list(&self, department: Option<String>) -> Result<Vec<CoreCourse>, AppError>;

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the pair does not exist.
    async fn delete(&self, core_course: &CoreCourse) -> Result<(), AppError>;
}
