//! Error types for the standards ingestion engine.
//!
//! This module defines a unified error enum covering configuration,
//! I/O, tokenizer and serialization failures.

use thiserror::Error;

/// Unified error type for the standards ingestion engine.
///
/// All fallible functions return `Result<T, IngestError>`.
/// We never panic — errors must be represented and propagated.
#[derive(Error, Debug)]
pub enum IngestError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O and filesystem errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Tokenizer capability errors. These propagate unmodified to the
    /// caller, who owns retry policy for the external dependency.
    #[error("Tokenizer error: {0}")]
    Tokenizer(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for IngestError {
    fn from(err: serde_json::Error) -> Self {
        IngestError::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for IngestError {
    fn from(err: serde_yaml::Error) -> Self {
        IngestError::Serialization(err.to_string())
    }
}

/// Convenience type alias for Results with IngestError.
pub type IngestResult<T> = Result<T, IngestError>;
