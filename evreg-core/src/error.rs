//! Error types for the evreg ecosystem.

use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur in evreg operations.
#[derive(Error, Debug)]
pub enum EvRegError {
    #[error("Event not found: {0}")]
    NotFound(Uuid),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Malformed row at line {line}: {reason}")]
    MalformedRow { line: usize, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for evreg operations.
pub type EvRegResult<T> = Result<T, EvRegError>;
