//! Custom error types for spendbook
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for spendbook operations
#[derive(Error, Debug)]
pub enum SpendbookError {
    /// Delete requested for an index not currently present in the ledger
    #[error("Index not found: {index}")]
    IndexNotFound { index: usize },

    /// No persisted ledger file exists for the given owner name
    #[error("No saved ledger found for '{name}'")]
    StorageNotFound { name: String },

    /// Storage errors (I/O or parse failures against the CSV file)
    #[error("Storage error: {0}")]
    Storage(String),

    /// CSV serialization/deserialization errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// Validation errors for user-supplied values
    #[error("Validation error: {0}")]
    Validation(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

impl SpendbookError {
    /// Create an "index not found" error
    pub fn index_not_found(index: usize) -> Self {
        Self::IndexNotFound { index }
    }

    /// Create a "storage not found" error for an owner name
    pub fn storage_not_found(name: impl Into<String>) -> Self {
        Self::StorageNotFound { name: name.into() }
    }

    /// Check if this is the missing-ledger-file error
    ///
    /// Callers treat this as "start with an empty ledger" rather than a
    /// fatal condition.
    pub fn is_storage_not_found(&self) -> bool {
        matches!(self, Self::StorageNotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for SpendbookError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<csv::Error> for SpendbookError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

/// Result type alias for spendbook operations
pub type SpendbookResult<T> = Result<T, SpendbookError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SpendbookError::Validation("bad amount".into());
        assert_eq!(err.to_string(), "Validation error: bad amount");
    }

    #[test]
    fn test_index_not_found() {
        let err = SpendbookError::index_not_found(5);
        assert_eq!(err.to_string(), "Index not found: 5");
        assert!(!err.is_storage_not_found());
    }

    #[test]
    fn test_storage_not_found() {
        let err = SpendbookError::storage_not_found("user");
        assert_eq!(err.to_string(), "No saved ledger found for 'user'");
        assert!(err.is_storage_not_found());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: SpendbookError = io_err.into();
        assert!(matches!(err, SpendbookError::Io(_)));
    }
}
