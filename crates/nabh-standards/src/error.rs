//! Error types for catalog loading operations.

use thiserror::Error;

/// Errors that can occur when loading the standards catalog.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StandardsError {
    /// Failed to read or parse a CSV row.
    #[error("Failed to parse {file}: {message}")]
    CsvParse { file: &'static str, message: String },

    /// Invalid value in CSV field.
    #[error("Invalid {field} value '{value}' in {file}")]
    InvalidValue {
        field: &'static str,
        value: String,
        file: &'static str,
    },

    /// A row references a parent code that was never declared.
    #[error("{kind} '{code}' references unknown parent '{parent}'")]
    UnknownParent {
        kind: &'static str,
        code: String,
        parent: String,
    },

    /// The same code was declared twice within its scope.
    #[error("Duplicate {kind} code '{code}'")]
    DuplicateCode { kind: &'static str, code: String },
}

/// Result type for catalog loading operations.
pub type Result<T> = std::result::Result<T, StandardsError>;
