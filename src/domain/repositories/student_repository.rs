//! Repository trait for student records.

use crate::domain::entities::{NewStudent, Student, StudentSummary, UpdateStudent};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for students.
///
/// Deleting a student removes its score rows through the `ON DELETE CASCADE`
/// foreign key.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgStudentRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_student.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Creates a student.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the id is taken.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_student: NewStudent) -> Result<Student, AppError>;

    /// Finds a student by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: &str) -> Result<Option<Student>, AppError>;

    /// Lists all students ordered by id.
    async fn list(&self) -> Result<Vec<Student>, AppError>;

    /// Lists all students with credits earned and average grade point.
    async fn list_summaries(&self) -> Result<Vec<StudentSummary>, AppError>;

    /// Replaces the non-key fields of a student.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the student does not exist.
    async fn update(&self, id: &str, update: UpdateStudent) -> Result<Student, AppError>;

    /// Deletes a student together with its scores.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the student does not exist.
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}
