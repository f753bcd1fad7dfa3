//! Repository trait for graduation requirements.

use crate::domain::entities::{
    GraduationRequirement, NewGraduationRequirement, UpdateGraduationRequirement,
};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for graduation requirements, keyed by department.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgGraduationRequirementRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GraduationRequirementRepository: Send + Sync {
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the department already has a requirement.
    async fn create(
        &self,
        new_requirement: NewGraduationRequirement,
    ) -> Result<GraduationRequirement, AppError>;

    async fn find_by_department(
        &self,
        department: &str,
    ) -> Result<Option<GraduationRequirement>, AppError>;

    /// Lists all requirements ordered by department.
    async fn list(&self) -> Result<Vec<GraduationRequirement>, AppError>;

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the department has no requirement.
    async fn update(
        &self,
        department: &str,
        update: UpdateGraduationRequirement,
    ) -> Result<GraduationRequirement, AppError>;

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the department has no requirement.
    async fn delete(&self, department: &str) -> Result<(), AppError>;
}
