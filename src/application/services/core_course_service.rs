//! Core-course designation service.

use crate::domain::entities::CoreCourse;
use crate::domain::repositories::CoreCourseRepository;
use crate::error::AppError;
use crate::utils::validation::{require_key, require_text};
use serde_json::json;
use std::sync::Arc;

/// Service for designating core courses per department.
pub struct CoreCourseService<R: CoreCourseRepository> {
    repository: Arc<R>,
}

impl<R: CoreCourseRepository> CoreCourseService<R> {
    /// Creates a new core course service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Marks a course as core for a department.
    ///
    /// An existing designation is reported before any write; the primary key
    /// rejects a duplicate that slips in between.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a field is empty.
    /// Returns [`AppError::Conflict`] if the pair exists or the course is unknown.
    pub async fn add_core_course(&self, core_course: CoreCourse) -> Result<CoreCourse, AppError> {
        require_text("department", &core_course.department)?;
        require_key("course id", &core_course.course_id)?;

        if self.repository.exists(&core_course).await? {
            return Err(AppError::conflict(
                "Core course already exists",
                json!({
                    "department": core_course.department,
                    "course_id": core_course.course_id,
                }),
            ));
        }

        let created = self.repository.create(core_course).await?;
        tracing::info!(
            department = %created.department,
            course_id = %created.course_id,
            "Core course added"
        );
        Ok(created)
    }

    /// Lists designations, optionally for one department.
    pub async fn list_core_courses(
        &self,
        department: Option<String>,
    ) -> Result<Vec<CoreCourse>, AppError> {
        self.repository.list(department).await
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the department has no such core course.
    pub async fn ensure_core_course(&self, core_course: &CoreCourse) -> Result<(), AppError> {
        if self.repository.exists(core_course).await? {
            return Ok(());
        }
        Err(AppError::not_found(
            "Core course not found",
            json!({
                "department": core_course.department,
                "course_id": core_course.course_id,
            }),
        ))
    }

    pub async fn remove_core_course(&self, core_course: &CoreCourse) -> Result<(), AppError> {
        self.repository.delete(core_course).await?;
        tracing::info!(
            department = %core_course.department,
            course_id = %core_course.course_id,
            "Core course removed"
        );
        Ok(())
    }
}
