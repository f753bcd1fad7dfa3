//! Course entity and its category.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Category a course belongs to.
///
/// Stored in the database as `core`, `general` or `elective`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseCategory {
    Core,
    General,
    Elective,
}

impl CourseCategory {
    pub const ALL: [CourseCategory; 3] = [
        CourseCategory::Core,
        CourseCategory::General,
        CourseCategory::Elective,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CourseCategory::Core => "core",
            CourseCategory::General => "general",
            CourseCategory::Elective => "elective",
        }
    }
}

impl fmt::Display for CourseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown course category '{0}' (expected core, general or elective)")]
pub struct UnknownCategory(pub String);

impl FromStr for CourseCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "core" => Ok(CourseCategory::Core),
            "general" => Ok(CourseCategory::General),
            "elective" => Ok(CourseCategory::Elective),
            _ => Err(UnknownCategory(s.to_string())),
        }
    }
}

/// A course offered by the institution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Course {
    pub id: String,
    pub name: String,
    pub credit: f64,
    pub category: CourseCategory,
}

impl Course {
    pub fn new(id: String, name: String, credit: f64, category: CourseCategory) -> Self {
        Self {
            id,
            name,
            credit,
            category,
        }
    }
}

/// Input data for creating a course.
#[derive(Debug, Clone)]
pub struct NewCourse {
    pub id: String,
    pub name: String,
    pub credit: f64,
    pub category: CourseCategory,
}

/// Replacement values for an existing course; the course id is immutable.
#[derive(Debug, Clone)]
pub struct UpdateCourse {
    pub name: String,
    pub credit: f64,
    pub category: CourseCategory,
}
