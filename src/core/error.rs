//! Typed error handling for the learnx core
//!
//! This module provides a typed error hierarchy so callers can handle
//! failures specifically rather than dealing with generic `anyhow::Error`
//! values.
//!
//! # Error Categories
//!
//! - [`QueryError`]: contract violations around querying (page size, sort
//!   keys, filter fields)
//! - [`ConfigError`]: configuration parsing and validation
//! - [`ValidationError`]: record validation at collection load
//! - [`SessionError`]: persisted session values
//! - [`TaskError`]: simulated delayed operations
//!
//! # Example
//!
//! ```rust,ignore
//! use learnx::prelude::*;
//!
//! match state.run(&catalog.courses) {
//!     Ok(outcome) => render(outcome),
//!     Err(LearnxError::Query(QueryError::InvalidPageSize { page_size })) => {
//!         eprintln!("misconfigured view: page size {}", page_size);
//!     }
//!     Err(e) => eprintln!("other error: {}", e),
//! }
//! ```

use serde::Serialize;
use std::fmt;
use uuid::Uuid;

/// The main error type for the learnx core
///
/// Each variant wraps a more specific error type for that category.
#[derive(Debug)]
pub enum LearnxError {
    /// Query contract violations
    Query(QueryError),

    /// Configuration errors
    Config(ConfigError),

    /// Record validation errors
    Validation(ValidationError),

    /// Session persistence errors
    Session(SessionError),

    /// Simulated operation errors
    Task(TaskError),

    /// Internal errors (should not happen in normal operation)
    Internal(String),
}

impl fmt::Display for LearnxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LearnxError::Query(e) => write!(f, "{}", e),
            LearnxError::Config(e) => write!(f, "{}", e),
            LearnxError::Validation(e) => write!(f, "{}", e),
            LearnxError::Session(e) => write!(f, "{}", e),
            LearnxError::Task(e) => write!(f, "{}", e),
            LearnxError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for LearnxError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LearnxError::Query(e) => Some(e),
            LearnxError::Config(e) => Some(e),
            LearnxError::Validation(e) => Some(e),
            LearnxError::Session(e) => Some(e),
            LearnxError::Task(e) => Some(e),
            LearnxError::Internal(_) => None,
        }
    }
}

impl LearnxError {
    /// Get the error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            LearnxError::Query(e) => e.error_code(),
            LearnxError::Config(e) => e.error_code(),
            LearnxError::Validation(e) => e.error_code(),
            LearnxError::Session(e) => e.error_code(),
            LearnxError::Task(e) => e.error_code(),
            LearnxError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

// =============================================================================
// Query Errors
// =============================================================================

/// Contract violations around querying
#[derive(Debug)]
pub enum QueryError {
    /// Page size must be a positive integer; zero is a caller bug, not a
    /// value to silently patch over
    InvalidPageSize { page_size: usize },

    /// Sort key not present in the view's sort table
    UnknownSortKey { view: String, key: String },

    /// Filter field not declared by the view's configuration
    UnknownFilterField { view: String, field: String },

    /// Bucket label not declared for the given range filter
    UnknownBucket { field: String, label: String },
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::InvalidPageSize { page_size } => {
                write!(f, "Page size must be positive (got {})", page_size)
            }
            QueryError::UnknownSortKey { view, key } => {
                write!(f, "Unknown sort key '{}' for view '{}'", key, view)
            }
            QueryError::UnknownFilterField { view, field } => {
                write!(f, "View '{}' declares no filter on field '{}'", view, field)
            }
            QueryError::UnknownBucket { field, label } => {
                write!(f, "Unknown bucket '{}' for field '{}'", label, field)
            }
        }
    }
}

impl std::error::Error for QueryError {}

impl QueryError {
    pub fn error_code(&self) -> &'static str {
        match self {
            QueryError::InvalidPageSize { .. } => "INVALID_PAGE_SIZE",
            QueryError::UnknownSortKey { .. } => "UNKNOWN_SORT_KEY",
            QueryError::UnknownFilterField { .. } => "UNKNOWN_FILTER_FIELD",
            QueryError::UnknownBucket { .. } => "UNKNOWN_BUCKET",
        }
    }
}

impl From<QueryError> for LearnxError {
    fn from(err: QueryError) -> Self {
        LearnxError::Query(err)
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to view configuration
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to parse configuration
    ParseError {
        file: Option<String>,
        message: String,
    },

    /// View name not present in the configuration
    UnknownView { name: String },

    /// Invalid value in a view definition
    InvalidValue {
        view: String,
        field: String,
        message: String,
    },

    /// IO error while reading configuration
    IoError { message: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError { file, message } => {
                if let Some(file) = file {
                    write!(f, "Failed to parse config file '{}': {}", file, message)
                } else {
                    write!(f, "Failed to parse config: {}", message)
                }
            }
            ConfigError::UnknownView { name } => {
                write!(f, "Unknown view: {}", name)
            }
            ConfigError::InvalidValue {
                view,
                field,
                message,
            } => {
                write!(
                    f,
                    "Invalid value for '{}' in view '{}': {}",
                    field, view, message
                )
            }
            ConfigError::IoError { message } => {
                write!(f, "IO error: {}", message)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl ConfigError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ConfigError::ParseError { .. } => "CONFIG_PARSE_ERROR",
            ConfigError::UnknownView { .. } => "UNKNOWN_VIEW",
            ConfigError::InvalidValue { .. } => "CONFIG_INVALID_VALUE",
            ConfigError::IoError { .. } => "CONFIG_IO_ERROR",
        }
    }
}

impl From<ConfigError> for LearnxError {
    fn from(err: ConfigError) -> Self {
        LearnxError::Config(err)
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Errors raised while validating records at collection load
#[derive(Debug)]
pub enum ValidationError {
    /// Single field validation error
    FieldError { field: String, message: String },

    /// Multiple field validation errors
    FieldErrors(Vec<FieldValidationError>),

    /// Two records in the same collection share an id
    DuplicateId { collection: String, id: Uuid },

    /// Invalid JSON format
    InvalidJson { message: String },
}

/// A single field validation error
#[derive(Debug, Clone, Serialize)]
pub struct FieldValidationError {
    pub field: String,
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::FieldError { field, message } => {
                write!(f, "Validation error for field '{}': {}", field, message)
            }
            ValidationError::FieldErrors(errors) => {
                let msgs: Vec<String> = errors
                    .iter()
                    .map(|e| format!("{}: {}", e.field, e.message))
                    .collect();
                write!(f, "Validation errors: {}", msgs.join(", "))
            }
            ValidationError::DuplicateId { collection, id } => {
                write!(f, "Duplicate id '{}' in collection '{}'", id, collection)
            }
            ValidationError::InvalidJson { message } => {
                write!(f, "Invalid JSON: {}", message)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

impl ValidationError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ValidationError::FieldError { .. } => "VALIDATION_FIELD_ERROR",
            ValidationError::FieldErrors(_) => "VALIDATION_FIELD_ERRORS",
            ValidationError::DuplicateId { .. } => "DUPLICATE_RECORD_ID",
            ValidationError::InvalidJson { .. } => "INVALID_JSON",
        }
    }
}

impl From<ValidationError> for LearnxError {
    fn from(err: ValidationError) -> Self {
        LearnxError::Validation(err)
    }
}

// =============================================================================
// Session Errors
// =============================================================================

/// Errors related to the persisted session
#[derive(Debug)]
pub enum SessionError {
    /// Stored role string is not a known role
    InvalidRole { value: String },
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::InvalidRole { value } => {
                write!(f, "Invalid role: '{}'", value)
            }
        }
    }
}

impl std::error::Error for SessionError {}

impl SessionError {
    pub fn error_code(&self) -> &'static str {
        match self {
            SessionError::InvalidRole { .. } => "INVALID_ROLE",
        }
    }
}

impl From<SessionError> for LearnxError {
    fn from(err: SessionError) -> Self {
        LearnxError::Session(err)
    }
}

// =============================================================================
// Task Errors
// =============================================================================

/// Errors produced by simulated delayed operations
#[derive(Debug, PartialEq, Eq)]
pub enum TaskError {
    /// The operation was cancelled before it resolved
    Cancelled,

    /// The operation resolved with a failure
    Failed { message: String },
}

impl fmt::Display for TaskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskError::Cancelled => write!(f, "Operation cancelled"),
            TaskError::Failed { message } => write!(f, "Operation failed: {}", message),
        }
    }
}

impl std::error::Error for TaskError {}

impl TaskError {
    pub fn error_code(&self) -> &'static str {
        match self {
            TaskError::Cancelled => "TASK_CANCELLED",
            TaskError::Failed { .. } => "TASK_FAILED",
        }
    }
}

impl From<TaskError> for LearnxError {
    fn from(err: TaskError) -> Self {
        LearnxError::Task(err)
    }
}

// =============================================================================
// Conversions from external errors
// =============================================================================

impl From<serde_json::Error> for LearnxError {
    fn from(err: serde_json::Error) -> Self {
        LearnxError::Validation(ValidationError::InvalidJson {
            message: err.to_string(),
        })
    }
}

impl From<serde_yaml::Error> for LearnxError {
    fn from(err: serde_yaml::Error) -> Self {
        LearnxError::Config(ConfigError::ParseError {
            file: None,
            message: err.to_string(),
        })
    }
}

impl From<std::io::Error> for LearnxError {
    fn from(err: std::io::Error) -> Self {
        LearnxError::Config(ConfigError::IoError {
            message: err.to_string(),
        })
    }
}

/// Convert from anyhow::Error for store internals
impl From<anyhow::Error> for LearnxError {
    fn from(err: anyhow::Error) -> Self {
        LearnxError::Internal(err.to_string())
    }
}

// =============================================================================
// Result type alias
// =============================================================================

/// A specialized Result type for learnx operations
pub type LearnxResult<T> = Result<T, LearnxError>;

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_error_display() {
        let err = QueryError::InvalidPageSize { page_size: 0 };
        assert!(err.to_string().contains("positive"));
        assert!(err.to_string().contains('0'));
    }

    #[test]
    fn test_query_error_codes() {
        assert_eq!(
            QueryError::InvalidPageSize { page_size: 0 }.error_code(),
            "INVALID_PAGE_SIZE"
        );
        assert_eq!(
            QueryError::UnknownSortKey {
                view: "discovery".to_string(),
                key: "price_middle".to_string()
            }
            .error_code(),
            "UNKNOWN_SORT_KEY"
        );
    }

    #[test]
    fn test_validation_error_multiple_fields() {
        let err = ValidationError::FieldErrors(vec![
            FieldValidationError {
                field: "price".to_string(),
                message: "must not be negative".to_string(),
            },
            FieldValidationError {
                field: "rating".to_string(),
                message: "must be between 0 and 5".to_string(),
            },
        ]);
        let display = err.to_string();
        assert!(display.contains("price"));
        assert!(display.contains("rating"));
    }

    #[test]
    fn test_learnx_error_conversion() {
        let query_err = QueryError::UnknownBucket {
            field: "price".to_string(),
            label: "$1000+".to_string(),
        };
        let err: LearnxError = query_err.into();
        assert_eq!(err.error_code(), "UNKNOWN_BUCKET");
        assert!(err.to_string().contains("$1000+"));
    }

    #[test]
    fn test_task_error_display() {
        assert_eq!(TaskError::Cancelled.to_string(), "Operation cancelled");
        let err = TaskError::Failed {
            message: "Please fill in all fields".to_string(),
        };
        assert!(err.to_string().contains("Please fill in all fields"));
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: LearnxError = json_err.into();
        assert!(matches!(
            err,
            LearnxError::Validation(ValidationError::InvalidJson { .. })
        ));
    }

    #[test]
    fn test_from_serde_yaml_error() {
        let yaml_err = serde_yaml::from_str::<serde_yaml::Value>(": : :").unwrap_err();
        let err: LearnxError = yaml_err.into();
        assert_eq!(err.error_code(), "CONFIG_PARSE_ERROR");
    }

    #[test]
    fn test_error_source_chain() {
        let err = LearnxError::Config(ConfigError::UnknownView {
            name: "dashboard".to_string(),
        });
        assert!(std::error::Error::source(&err).is_some());
        assert!(std::error::Error::source(&LearnxError::Internal("x".into())).is_none());
    }
}
