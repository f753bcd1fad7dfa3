//! Unified application error type.
//!
//! Every layer returns [`AppError`]. The variants follow the error taxonomy of
//! the front end: input validation, missing records, constraint conflicts,
//! connectivity, schema bootstrap and everything else.

use serde::Serialize;
use serde_json::{Value, json};

/// Serializable error payload used by the JSON output format.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },
    #[error("{message}")]
    NotFound { message: String, details: Value },
    #[error("{message}")]
    Conflict { message: String, details: Value },
    #[error("{message}")]
    Connection { message: String, details: Value },
    #[error("{message}")]
    Bootstrap { message: String, details: Value },
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }
    pub fn connection(message: impl Into<String>, details: Value) -> Self {
        Self::Connection {
            message: message.into(),
            details,
        }
    }
    pub fn bootstrap(message: impl Into<String>, details: Value) -> Self {
        Self::Bootstrap {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// Stable machine-readable code for the error category.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation { .. } => "validation_error",
            AppError::NotFound { .. } => "not_found",
            AppError::Conflict { .. } => "conflict",
            AppError::Connection { .. } => "connection_error",
            AppError::Bootstrap { .. } => "bootstrap_error",
            AppError::Internal { .. } => "internal_error",
        }
    }

    pub fn details(&self) -> &Value {
        match self {
            AppError::Validation { details, .. }
            | AppError::NotFound { details, .. }
            | AppError::Conflict { details, .. }
            | AppError::Connection { details, .. }
            | AppError::Bootstrap { details, .. }
            | AppError::Internal { details, .. } => details,
        }
    }

    pub fn to_info(&self) -> ErrorInfo {
        ErrorInfo {
            code: self.code(),
            message: self.to_string(),
            details: self.details().clone(),
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        map_sqlx_error(e)
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        let fields: Vec<Value> = e
            .field_errors()
            .iter()
            .map(|(field, errors)| {
                let reasons: Vec<String> = errors
                    .iter()
                    .map(|err| {
                        err.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| err.code.to_string())
                    })
                    .collect();
                json!({ "field": field, "reasons": reasons })
            })
            .collect();

        AppError::bad_request("Invalid input", json!({ "fields": fields }))
    }
}

impl From<dialoguer::Error> for AppError {
    fn from(e: dialoguer::Error) -> Self {
        AppError::internal("Prompt failed", json!({ "reason": e.to_string() }))
    }
}

/// Maps a sqlx error onto the application taxonomy.
///
/// Unique and foreign-key violations become [`AppError::Conflict`], CHECK
/// violations become [`AppError::Validation`], and transport-level failures
/// become [`AppError::Connection`].
pub fn map_sqlx_error(e: sqlx::Error) -> AppError {
    if let Some(db) = e.as_database_error() {
        if db.is_unique_violation() {
            return AppError::conflict(
                "Record already exists",
                json!({ "constraint": db.constraint() }),
            );
        }
        if db.is_foreign_key_violation() {
            return AppError::conflict(
                "Referenced record does not exist",
                json!({ "constraint": db.constraint() }),
            );
        }
        if db.is_check_violation() {
            return AppError::bad_request(
                "Value rejected by database constraint",
                json!({ "constraint": db.constraint() }),
            );
        }
        return AppError::internal(
            "Database error",
            json!({ "code": db.code().map(|c| c.to_string()), "message": db.message() }),
        );
    }

    match e {
        sqlx::Error::RowNotFound => AppError::not_found("Record not found", json!({})),
        sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::Configuration(_) => {
            AppError::connection("Database is unreachable", json!({ "reason": e.to_string() }))
        }
        other => AppError::internal("Database error", json!({ "reason": other.to_string() })),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Sample {
        #[validate(length(min = 1, message = "must not be empty"))]
        name: String,
    }

    #[test]
    fn test_codes_are_stable() {
        assert_eq!(
            AppError::bad_request("x", json!({})).code(),
            "validation_error"
        );
        assert_eq!(AppError::not_found("x", json!({})).code(), "not_found");
        assert_eq!(AppError::conflict("x", json!({})).code(), "conflict");
        assert_eq!(
            AppError::connection("x", json!({})).code(),
            "connection_error"
        );
        assert_eq!(AppError::bootstrap("x", json!({})).code(), "bootstrap_error");
        assert_eq!(AppError::internal("x", json!({})).code(), "internal_error");
    }

    #[test]
    fn test_row_not_found_maps_to_not_found() {
        let err = map_sqlx_error(sqlx::Error::RowNotFound);
        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[test]
    fn test_pool_timeout_maps_to_connection() {
        let err = map_sqlx_error(sqlx::Error::PoolTimedOut);
        assert!(matches!(err, AppError::Connection { .. }));
    }

    #[test]
    fn test_validation_errors_become_validation() {
        let sample = Sample {
            name: String::new(),
        };
        let err: AppError = sample.validate().unwrap_err().into();

        assert!(matches!(err, AppError::Validation { .. }));
        let fields = err.details()["fields"].as_array().unwrap();
        assert_eq!(fields[0]["field"], "name");
        assert_eq!(fields[0]["reasons"][0], "must not be empty");
    }

    #[test]
    fn test_display_uses_message() {
        let err = AppError::conflict("Record already exists", json!({}));
        assert_eq!(err.to_string(), "Record already exists");
        assert_eq!(err.to_info().code, "conflict");
    }
}
