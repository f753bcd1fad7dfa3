//! Form input parsing.
//!
//! Panels collect every field as raw text (from flags or prompts). A form
//! checks the shape of that text with `validator` and converts it into the
//! typed input of a service call. Nothing here touches the database; a form
//! that fails to parse never reaches a service.

use serde_json::json;
use validator::Validate;

use crate::domain::entities::{
    CoreCourse, CourseCategory, NewCourse, NewGraduationRequirement, NewScore, NewStudent,
    ScoreKey, UpdateCourse, UpdateGraduationRequirement, UpdateStudent,
};
use crate::error::AppError;
use crate::utils::validation::KEY_REGEX;

fn parse_f64(field: &'static str, raw: &str) -> Result<f64, AppError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| {
            AppError::bad_request(
                format!("{field} must be a number"),
                json!({ "field": field, "value": raw }),
            )
        })
}

fn parse_i32(field: &'static str, raw: &str) -> Result<i32, AppError> {
    raw.trim().parse::<i32>().map_err(|_| {
        AppError::bad_request(
            format!("{field} must be a whole number"),
            json!({ "field": field, "value": raw }),
        )
    })
}

fn parse_category(raw: &str) -> Result<CourseCategory, AppError> {
    raw.parse::<CourseCategory>().map_err(|e| {
        AppError::bad_request(
            e.to_string(),
            json!({
                "field": "category",
                "value": raw,
                "allowed": CourseCategory::ALL.map(|c| c.as_str()),
            }),
        )
    })
}

#[derive(Debug, Clone, Default, Validate)]
pub struct StudentForm {
    #[validate(
        length(min = 1, max = 20, message = "student id is required (at most 20 characters)"),
        regex(path = "*KEY_REGEX", message = "student id may only contain letters, digits, '_', '-', '.'")
    )]
    pub id: String,
    #[validate(length(min = 1, max = 100, message = "name is required (at most 100 characters)"))]
    pub name: String,
    #[validate(length(min = 1, max = 100, message = "department is required (at most 100 characters)"))]
    pub department: String,
    pub enrollment_year: String,
}

impl StudentForm {
    pub fn into_new_student(self) -> Result<NewStudent, AppError> {
        self.validate()?;
        let enrollment_year = parse_i32("enrollment year", &self.enrollment_year)?;
        Ok(NewStudent {
            id: self.id,
            name: self.name,
            department: self.department,
            enrollment_year,
        })
    }

    /// The id is only carried for display; it is never part of an update.
    pub fn into_update(self) -> Result<UpdateStudent, AppError> {
        self.validate()?;
        let enrollment_year = parse_i32("enrollment year", &self.enrollment_year)?;
        Ok(UpdateStudent {
            name: self.name,
            department: self.department,
            enrollment_year,
        })
    }
}

#[derive(Debug, Clone, Default, Validate)]
pub struct CourseForm {
    #[validate(
        length(min = 1, max = 20, message = "course id is required (at most 20 characters)"),
        regex(path = "*KEY_REGEX", message = "course id may only contain letters, digits, '_', '-', '.'")
    )]
    pub id: String,
    #[validate(length(min = 1, max = 100, message = "course name is required (at most 100 characters)"))]
    pub name: String,
    pub credit: String,
    pub category: String,
}

impl CourseForm {
    pub fn into_new_course(self) -> Result<NewCourse, AppError> {
        self.validate()?;
        Ok(NewCourse {
            credit: parse_f64("credit", &self.credit)?,
            category: parse_category(&self.category)?,
            id: self.id,
            name: self.name,
        })
    }

    pub fn into_update(self) -> Result<UpdateCourse, AppError> {
        self.validate()?;
        Ok(UpdateCourse {
            credit: parse_f64("credit", &self.credit)?,
            category: parse_category(&self.category)?,
            name: self.name,
        })
    }
}

#[derive(Debug, Clone, Default, Validate)]
pub struct ScoreForm {
    #[validate(
        length(min = 1, max = 20, message = "student id is required (at most 20 characters)"),
        regex(path = "*KEY_REGEX", message = "student id may only contain letters, digits, '_', '-', '.'")
    )]
    pub student_id: String,
    #[validate(
        length(min = 1, max = 20, message = "course id is required (at most 20 characters)"),
        regex(path = "*KEY_REGEX", message = "course id may only contain letters, digits, '_', '-', '.'")
    )]
    pub course_id: String,
    #[validate(length(min = 1, max = 50, message = "semester is required (at most 50 characters)"))]
    pub semester: String,
    pub value: String,
}

impl ScoreForm {
    pub fn key(&self) -> Result<ScoreKey, AppError> {
        self.validate()?;
        Ok(ScoreKey::new(
            self.student_id.clone(),
            self.course_id.clone(),
            self.semester.clone(),
        ))
    }

    pub fn value(&self) -> Result<f64, AppError> {
        parse_f64("score", &self.value)
    }

    pub fn into_new_score(self) -> Result<NewScore, AppError> {
        Ok(NewScore {
            key: self.key()?,
            value: self.value()?,
        })
    }
}

#[derive(Debug, Clone, Default, Validate)]
pub struct RequirementForm {
    #[validate(length(min = 1, max = 100, message = "department is required (at most 100 characters)"))]
    pub department: String,
    pub total_credits_required: String,
    pub max_core_failures: String,
    pub min_gpa: String,
}

impl RequirementForm {
    fn figures(&self) -> Result<(f64, i32, f64), AppError> {
        self.validate()?;
        Ok((
            parse_f64("total credits required", &self.total_credits_required)?,
            parse_i32("max core failures", &self.max_core_failures)?,
            parse_f64("minimum GPA", &self.min_gpa)?,
        ))
    }

    pub fn into_new_requirement(self) -> Result<NewGraduationRequirement, AppError> {
        let (total_credits_required, max_core_failures, min_gpa) = self.figures()?;
        Ok(NewGraduationRequirement {
            department: self.department,
            total_credits_required,
            max_core_failures,
            min_gpa,
        })
    }

    pub fn into_update(self) -> Result<UpdateGraduationRequirement, AppError> {
        let (total_credits_required, max_core_failures, min_gpa) = self.figures()?;
        Ok(UpdateGraduationRequirement {
            total_credits_required,
            max_core_failures,
            min_gpa,
        })
    }
}

#[derive(Debug, Clone, Default, Validate)]
pub struct CoreCourseForm {
    #[validate(length(min = 1, max = 100, message = "department is required (at most 100 characters)"))]
    pub department: String,
    #[validate(
        length(min = 1, max = 20, message = "course id is required (at most 20 characters)"),
        regex(path = "*KEY_REGEX", message = "course id may only contain letters, digits, '_', '-', '.'")
    )]
    pub course_id: String,
}

impl CoreCourseForm {
    pub fn into_core_course(self) -> Result<CoreCourse, AppError> {
        self.validate()?;
        Ok(CoreCourse::new(self.department, self.course_id))
    }
}
