//! Custom error types for carteira-cli
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for carteira-cli operations
#[derive(Error, Debug)]
pub enum CarteiraError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for user-entered data
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// The underlying store could not be read or written
    #[error("Storage error: {0}")]
    Storage(String),

    /// The stored value does not parse as a transaction list
    #[error("Stored data is malformed: {0}")]
    MalformedData(String),

    /// Report export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl CarteiraError {
    /// Create a "not found" error for transactions
    pub fn transaction_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Transaction",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a malformed-data error
    pub fn is_malformed_data(&self) -> bool {
        matches!(self, Self::MalformedData(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for CarteiraError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CarteiraError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for carteira-cli operations
pub type CarteiraResult<T> = Result<T, CarteiraError>;
