//! Error types for hospital dataset loading.

use thiserror::Error;

/// Errors that can occur when loading the hospital dataset.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum HospitalError {
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

    /// The same identifier appears twice in one collection.
    #[error("Duplicate identifier '{id}' in {file}")]
    DuplicateId { id: String, file: &'static str },
}

/// Result type for hospital dataset loading.
pub type Result<T> = std::result::Result<T, HospitalError>;
