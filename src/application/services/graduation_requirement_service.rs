//! Graduation requirement management service.

use crate::domain::entities::{
    GraduationRequirement, NewGraduationRequirement, UpdateGraduationRequirement,
};
use crate::domain::repositories::GraduationRequirementRepository;
use crate::error::AppError;
use crate::utils::validation::{require_non_negative, require_positive, require_text};
use serde_json::json;
use std::sync::Arc;

/// Service for managing per-department graduation requirements.
pub struct GraduationRequirementService<R: GraduationRequirementRepository> {
    repository: Arc<R>,
}

impl<R: GraduationRequirementRepository> GraduationRequirementService<R> {
    /// Creates a new graduation requirement service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates the requirement of a department.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a figure is out of range.
    /// Returns [`AppError::Conflict`] if the department already has one.
    pub async fn create_requirement(
        &self,
        new_requirement: NewGraduationRequirement,
    ) -> Result<GraduationRequirement, AppError> {
        require_text("department", &new_requirement.department)?;
        validate_figures(
            new_requirement.total_credits_required,
            new_requirement.max_core_failures,
            new_requirement.min_gpa,
        )?;

        let requirement = self.repository.create(new_requirement).await?;
        tracing::info!(department = %requirement.department, "Graduation requirement created");
        Ok(requirement)
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the department has no requirement.
    pub async fn get_requirement(&self, department: &str) -> Result<GraduationRequirement, AppError> {
        self.repository
            .find_by_department(department)
            .await?
            .ok_or_else(|| {
                AppError::not_found(
                    "Graduation requirement not found",
                    json!({ "department": department }),
                )
            })
    }

    pub async fn list_requirements(&self) -> Result<Vec<GraduationRequirement>, AppError> {
        self.repository.list().await
    }

    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a figure is out of range.
    /// Returns [`AppError::NotFound`] if the department has no requirement.
    pub async fn update_requirement(
        &self,
        department: &str,
        update: UpdateGraduationRequirement,
    ) -> Result<GraduationRequirement, AppError> {
        validate_figures(
            update.total_credits_required,
            update.max_core_failures,
            update.min_gpa,
        )?;

        let requirement = self.repository.update(department, update).await?;
        tracing::info!(department = %department, "Graduation requirement updated");
        Ok(requirement)
    }

    pub async fn delete_requirement(&self, department: &str) -> Result<(), AppError> {
        self.repository.delete(department).await?;
        tracing::info!(department = %department, "Graduation requirement deleted");
        Ok(())
    }
}

fn validate_figures(
    total_credits_required: f64,
    max_core_failures: i32,
    min_gpa: f64,
) -> Result<(), AppError> {
    require_positive("total credits required", total_credits_required)?;
    if max_core_failures < 0 {
        return Err(AppError::bad_request(
            "max core failures must not be negative",
            json!({ "field": "max core failures", "value": max_core_failures }),
        ));
    }
    require_non_negative("minimum GPA", min_gpa)
}
