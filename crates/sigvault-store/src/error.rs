//! Error types for the store module.

use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A record with this id already exists.
    ///
    /// Practically unreachable with random ids, but a distinct,
    /// reportable condition rather than a generic database error.
    #[error("record already exists: {0}")]
    AlreadyExists(String),

    /// No record with this id exists.
    #[error("record not found: {0}")]
    NotFound(String),

    /// Database error from SQLite.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// The backend is unreachable or unhealthy.
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// Migration error.
    #[error("migration error: {0}")]
    Migration(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
