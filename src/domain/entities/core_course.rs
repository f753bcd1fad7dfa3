//! Core-course designation of a course for a department.

use serde::Serialize;

/// Marks `course_id` as mandatory-core for `department`.
///
/// Both fields form the key, so a designation is only ever added or removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoreCourse {
    pub department: String,
    pub course_id: String,
}

impl CoreCourse {
    pub fn new(department: impl Into<String>, course_id: impl Into<String>) -> Self {
        Self {
            department: department.into(),
            course_id: course_id.into(),
        }
    }
}
