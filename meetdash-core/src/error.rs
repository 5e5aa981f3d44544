//! Error types for the meetdash ecosystem.

use thiserror::Error;

/// Errors that can occur in meetdash operations.
#[derive(Error, Debug)]
pub enum MeetdashError {
    #[error("Meeting not found: {0}")]
    MeetingNotFound(i64),

    #[error("Store error: {0}")]
    Store(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for meetdash operations.
pub type MeetdashResult<T> = Result<T, MeetdashError>;
