//! Graduation requirement entity, one per department.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraduationRequirement {
    pub department: String,
    pub total_credits_required: f64,
    pub max_core_failures: i32,
    pub min_gpa: f64,
}

impl GraduationRequirement {
    pub fn new(
        department: String,
        total_credits_required: f64,
        max_core_failures: i32,
        min_gpa: f64,
    ) -> Self {
        Self {
            department,
            total_credits_required,
            max_core_failures,
            min_gpa,
        }
    }
}

/// Input data for creating a requirement.
#[derive(Debug, Clone)]
pub struct NewGraduationRequirement {
    pub department: String,
    pub total_credits_required: f64,
    pub max_core_failures: i32,
    pub min_gpa: f64,
}

/// Replacement values for a requirement; the department is the key.
#[derive(Debug, Clone)]
pub struct UpdateGraduationRequirement {
    pub total_credits_required: f64,
    pub max_core_failures: i32,
    pub min_gpa: f64,
}
