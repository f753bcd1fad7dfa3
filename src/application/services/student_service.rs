//! Student management service.

use crate::domain::entities::{NewStudent, Student, StudentSummary, UpdateStudent};
use crate::domain::repositories::StudentRepository;
use crate::error::AppError;
use crate::utils::validation::{require_enrollment_year, require_key, require_text};
use serde_json::json;
use std::sync::Arc;

/// Service for managing students.
///
/// Validates input before any repository call. The student id is fixed once
/// created; updates only replace name, department and enrollment year.
pub struct StudentService<R: StudentRepository> {
    repository: Arc<R>,
}

impl<R: StudentRepository> StudentService<R> {
    /// Creates a new student service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates a student.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a field is invalid.
    /// Returns [`AppError::Conflict`] if the id is taken.
    pub async fn create_student(&self, new_student: NewStudent) -> Result<Student, AppError> {
        require_key("student id", &new_student.id)?;
        self.validate_fields(
            &new_student.name,
            &new_student.department,
            new_student.enrollment_year,
        )?;

        let student = self.repository.create(new_student).await?;
        tracing::info!(student_id = %student.id, "Student created");
        Ok(student)
    }

    /// Retrieves a student by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the student does not exist.
    pub async fn get_student(&self, id: &str) -> Result<Student, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Student not found", json!({ "id": id })))
    }

    pub async fn list_students(&self) -> Result<Vec<Student>, AppError> {
        self.repository.list().await
    }

    /// Lists students with their credits earned and average grade point.
    pub async fn list_summaries(&self) -> Result<Vec<StudentSummary>, AppError> {
        self.repository.list_summaries().await
    }

    /// Replaces the editable fields of a student.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a field is invalid.
    /// Returns [`AppError::NotFound`] if the student does not exist.
    pub async fn update_student(
        &self,
        id: &str,
        update: UpdateStudent,
    ) -> Result<Student, AppError> {
        self.validate_fields(&update.name, &update.department, update.enrollment_year)?;

        let student = self.repository.update(id, update).await?;
        tracing::info!(student_id = %id, "Student updated");
        Ok(student)
    }

    /// Deletes a student; its scores go with it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the student does not exist.
    pub async fn delete_student(&self, id: &str) -> Result<(), AppError> {
        self.repository.delete(id).await?;
        tracing::info!(student_id = %id, "Student deleted");
        Ok(())
    }

    fn validate_fields(
        &self,
        name: &str,
        department: &str,
        enrollment_year: i32,
    ) -> Result<(), AppError> {
        require_text("name", name)?;
        require_text("department", department)?;
        require_enrollment_year(enrollment_year)
    }
}
