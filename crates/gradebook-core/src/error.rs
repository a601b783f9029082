//! Error types and exit codes for gradebook
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, invalid field values)
//! - 3: Data/store error (missing store, unknown assessment)

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes reported by the gradebook binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data/store error - missing store, unknown assessment (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during gradebook operations
#[derive(Error, Debug)]
pub enum GradebookError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    // Data/store errors (exit code 3)
    #[error("store not found (searched from {search_root:?})")]
    StoreNotFound { search_root: PathBuf },

    #[error("invalid store: {reason}")]
    InvalidStore { reason: String },

    #[error("assessment not found: {id}")]
    AssessmentNotFound { id: u64 },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl GradebookError {
    /// Create a validation error naming the field that failed
    pub fn validation(field: &str, reason: impl std::fmt::Display) -> Self {
        GradebookError::Validation {
            field: field.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create an error for an invalid or unreadable store
    pub fn invalid_store(reason: impl std::fmt::Display) -> Self {
        GradebookError::InvalidStore {
            reason: reason.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            // Usage errors
            GradebookError::UnknownFormat(_)
            | GradebookError::UsageError(_)
            | GradebookError::Validation { .. } => ExitCode::Usage,

            // Data/store errors
            GradebookError::StoreNotFound { .. }
            | GradebookError::InvalidStore { .. }
            | GradebookError::AssessmentNotFound { .. } => ExitCode::Data,

            // Generic failures
            GradebookError::Io(_)
            | GradebookError::Json(_)
            | GradebookError::Toml(_)
            | GradebookError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            GradebookError::UnknownFormat(_) => "unknown_format",
            GradebookError::UsageError(_) => "usage_error",
            GradebookError::Validation { .. } => "validation",
            GradebookError::StoreNotFound { .. } => "store_not_found",
            GradebookError::InvalidStore { .. } => "invalid_store",
            GradebookError::AssessmentNotFound { .. } => "assessment_not_found",
            GradebookError::Io(_) => "io_error",
            GradebookError::Json(_) => "json_error",
            GradebookError::Toml(_) => "toml_error",
            GradebookError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for gradebook operations
pub type Result<T> = std::result::Result<T, GradebookError>;
