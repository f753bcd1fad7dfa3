//! Score entity keyed by (student, course, semester).

use serde::Serialize;

use super::CourseCategory;
use crate::domain::grading::{grade_point, is_passed};

/// Composite key of a score row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreKey {
    pub student_id: String,
    pub course_id: String,
    pub semester: String,
}

impl ScoreKey {
    pub fn new(
        student_id: impl Into<String>,
        course_id: impl Into<String>,
        semester: impl Into<String>,
    ) -> Self {
        Self {
            student_id: student_id.into(),
            course_id: course_id.into(),
            semester: semester.into(),
        }
    }
}

/// A stored score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Score {
    #[serde(flatten)]
    pub key: ScoreKey,
    pub value: f64,
}

impl Score {
    pub fn new(key: ScoreKey, value: f64) -> Self {
        Self { key, value }
    }

    pub fn grade_point(&self) -> f64 {
        grade_point(self.value)
    }

    pub fn passed(&self) -> bool {
        is_passed(self.value)
    }
}

/// Input data for recording a score.
#[derive(Debug, Clone)]
pub struct NewScore {
    pub key: ScoreKey,
    pub value: f64,
}

/// A score joined with the student and course it belongs to.
///
/// Grade point and pass flag are computed on the client from `value`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreDetail {
    #[serde(flatten)]
    pub key: ScoreKey,
    pub value: f64,
    pub student_name: String,
    pub course_name: String,
    pub credit: f64,
    pub category: CourseCategory,
}

impl ScoreDetail {
    pub fn grade_point(&self) -> f64 {
        grade_point(self.value)
    }

    pub fn passed(&self) -> bool {
        is_passed(self.value)
    }
}
