//! Field checks shared by the services.
//!
//! Each check fails with [`AppError::Validation`] naming the field, so the
//! caller can report it before any data-access call is made.

use chrono::Datelike;
use regex::Regex;
use serde_json::json;
use std::sync::LazyLock;

use crate::error::AppError;

/// Student and course ids are short tokens without whitespace.
pub static KEY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_.-]{0,19}$").unwrap());

pub const MAX_KEY_LEN: usize = 20;
pub const MAX_NAME_LEN: usize = 100;
pub const MAX_SEMESTER_LEN: usize = 50;
pub const MIN_ENROLLMENT_YEAR: i32 = 1900;

pub fn require_key(field: &'static str, value: &str) -> Result<(), AppError> {
    if value.is_empty() {
        return Err(AppError::bad_request(
            format!("{field} is required"),
            json!({ "field": field }),
        ));
    }
    if !KEY_REGEX.is_match(value) {
        return Err(AppError::bad_request(
            format!("{field} has an invalid format"),
            json!({
                "field": field,
                "value": value,
                "allowed": "letters, digits, '_', '-', '.'; at most 20 characters",
            }),
        ));
    }
    Ok(())
}

pub fn require_text(field: &'static str, value: &str) -> Result<(), AppError> {
    require_label(field, value, MAX_NAME_LEN)
}

/// Free-form label: any non-blank text of at most `max` characters.
pub fn require_label(field: &'static str, value: &str, max: usize) -> Result<(), AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::bad_request(
            format!("{field} is required"),
            json!({ "field": field }),
        ));
    }
    if trimmed.chars().count() > max {
        return Err(AppError::bad_request(
            format!("{field} is too long"),
            json!({ "field": field, "max": max }),
        ));
    }
    Ok(())
}

/// Checks `min <= value <= max` (NaN always fails).
pub fn require_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<(), AppError> {
    if !(min..=max).contains(&value) {
        return Err(AppError::bad_request(
            format!("{field} must be between {min} and {max}"),
            json!({ "field": field, "value": value, "min": min, "max": max }),
        ));
    }
    Ok(())
}

pub fn require_positive(field: &'static str, value: f64) -> Result<(), AppError> {
    if !(value.is_finite() && value > 0.0) {
        return Err(AppError::bad_request(
            format!("{field} must be greater than 0"),
            json!({ "field": field, "value": value }),
        ));
    }
    Ok(())
}

pub fn require_non_negative(field: &'static str, value: f64) -> Result<(), AppError> {
    if !(value.is_finite() && value >= 0.0) {
        return Err(AppError::bad_request(
            format!("{field} must not be negative"),
            json!({ "field": field, "value": value }),
        ));
    }
    Ok(())
}

/// Enrollment years run from 1900 to next calendar year.
pub fn require_enrollment_year(value: i32) -> Result<(), AppError> {
    let max = chrono::Utc::now().year() + 1;
    if value < MIN_ENROLLMENT_YEAR || value > max {
        return Err(AppError::bad_request(
            format!("enrollment year must be between {MIN_ENROLLMENT_YEAR} and {max}"),
            json!({ "field": "enrollment_year", "value": value }),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_key() {
        assert!(require_key("id", "S001").is_ok());
        assert!(require_key("id", "").is_err());
        assert!(require_key("id", "S 001").is_err());
        assert!(require_key("id", "-S001").is_err());
        assert!(require_key("id", &"X".repeat(MAX_KEY_LEN + 1)).is_err());
    }

    #[test]
    fn test_require_text() {
        assert!(require_text("name", "Alice Smith").is_ok());
        assert!(require_text("name", "   ").is_err());
        assert!(require_text("name", &"a".repeat(MAX_NAME_LEN + 1)).is_err());
    }

    #[test]
    fn test_require_label_accepts_free_text() {
        assert!(require_label("semester", "2023秋", MAX_SEMESTER_LEN).is_ok());
        assert!(require_label("semester", "2024 Spring", MAX_SEMESTER_LEN).is_ok());
        assert!(require_label("semester", "2023-2024学年第一学期", MAX_SEMESTER_LEN).is_ok());
        assert!(require_label("semester", " ", MAX_SEMESTER_LEN).is_err());
        assert!(require_label("semester", &"秋".repeat(MAX_SEMESTER_LEN + 1), MAX_SEMESTER_LEN).is_err());
    }

    #[test]
    fn test_require_range_is_inclusive() {
        assert!(require_range("score", 0.0, 0.0, 100.0).is_ok());
        assert!(require_range("score", 100.0, 0.0, 100.0).is_ok());
        assert!(require_range("score", 100.01, 0.0, 100.0).is_err());
        assert!(require_range("score", -0.5, 0.0, 100.0).is_err());
        assert!(require_range("score", f64::NAN, 0.0, 100.0).is_err());
    }

    #[test]
    fn test_require_positive_and_non_negative() {
        assert!(require_positive("credit", 0.5).is_ok());
        assert!(require_positive("credit", 0.0).is_err());
        assert!(require_positive("credit", f64::INFINITY).is_err());
        assert!(require_non_negative("min_gpa", 0.0).is_ok());
        assert!(require_non_negative("min_gpa", -1.0).is_err());
    }

    #[test]
    fn test_require_enrollment_year() {
        let this_year = chrono::Utc::now().year();
        assert!(require_enrollment_year(this_year).is_ok());
        assert!(require_enrollment_year(this_year + 1).is_ok());
        assert!(require_enrollment_year(this_year + 2).is_err());
        assert!(require_enrollment_year(1899).is_err());
    }

    #[test]
    fn test_error_names_field() {
        let err = require_key("course id", "").unwrap_err();
        assert_eq!(err.details()["field"], "course id");
        assert_eq!(err.to_string(), "course id is required");
    }
}
