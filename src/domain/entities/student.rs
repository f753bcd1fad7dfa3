//! Student entity.

use serde::Serialize;

/// A student record.
///
/// Credits earned and average grade point are not stored here; they are
/// derived by the database and exposed through [`StudentSummary`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Student {
    pub id: String,
    pub name: String,
    pub department: String,
    pub enrollment_year: i32,
}

impl Student {
    pub fn new(id: String, name: String, department: String, enrollment_year: i32) -> Self {
        Self {
            id,
            name,
            department,
            enrollment_year,
        }
    }
}

/// Input data for creating a student.
#[derive(Debug, Clone)]
pub struct NewStudent {
    pub id: String,
    pub name: String,
    pub department: String,
    pub enrollment_year: i32,
}

/// Replacement values for an existing student.
///
/// The student id is the key and cannot be changed, so it is not part of
/// the update.
#[derive(Debug, Clone)]
pub struct UpdateStudent {
    pub name: String,
    pub department: String,
    pub enrollment_year: i32,
}

/// A student joined with the derived credit and GPA figures.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentSummary {
    pub id: String,
    pub name: String,
    pub department: String,
    pub enrollment_year: i32,
    pub credits_earned: f64,
    pub average_grade_point: Option<f64>,
}

impl From<NewStudent> for Student {
    fn from(new: NewStudent) -> Self {
        Student::new(new.id, new.name, new.department, new.enrollment_year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_from_new() {
        let student: Student = NewStudent {
            id: "S001".to_string(),
            name: "Alice".to_string(),
            department: "CS".to_string(),
            enrollment_year: 2023,
        }
        .into();

        assert_eq!(student.id, "S001");
        assert_eq!(student.department, "CS");
        assert_eq!(student.enrollment_year, 2023);
    }
}
