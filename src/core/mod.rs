//! Core module containing fundamental traits and types

pub mod error;
pub mod field;
pub mod record;

pub use error::{
    ConfigError, FieldValidationError, LearnxError, LearnxResult, QueryError, SessionError,
    TaskError, ValidationError,
};
pub use field::{FieldFormat, FieldValue};
pub use record::Record;
