//! Error types for the dashboard backend

use thiserror::Error;

/// Result type alias for dashboard operations
pub type DashboardResult<T> = Result<T, DashboardError>;

/// Main error type for the dashboard backend
#[derive(Error, Debug)]
pub enum DashboardError {
    /// The background image store was never opened
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    /// A user-supplied input failed validation (e.g. empty engine name)
    #[error("Invalid input: {0}")]
    Validation(String),

    /// An operation would break a registry invariant (e.g. deleting the last engine)
    #[error("Operation not allowed: {0}")]
    InvariantViolation(String),

    /// An imported archive is missing its settings manifest
    #[error("Malformed archive: {0}")]
    MalformedArchive(String),

    /// Stored or imported JSON could not be parsed
    #[error("Decode failure: {0}")]
    Decode(String),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DashboardError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }
}
