//! Error types for EmSearch

use thiserror::Error;

/// Main error type for EmSearch operations
#[derive(Error, Debug)]
pub enum EmSearchError {
    #[error("Enter an employee number or a name.")]
    EmptyCriteria,

    #[error("Failed to load employee data from '{0}': {1}")]
    DataLoad(String, String),

    #[error("Failed to parse employee data: {0}")]
    DataFormat(#[from] serde_json::Error),

    #[error("Invalid employee record: {0}")]
    InvalidRecord(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Logging setup failed: {0}")]
    LoggingSetup(String),
}

/// Result type alias for EmSearch operations
pub type Result<T> = std::result::Result<T, EmSearchError>;
