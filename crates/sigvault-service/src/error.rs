//! Error types for the service layer.
//!
//! This is the caller-facing taxonomy: validation mistakes, missing
//! records, and duplicate ids are distinct from operational failures
//! of the signer or the storage backend, and timeouts are distinct
//! from all of them.

use sigvault_core::{SignerError, ValidationError};
use sigvault_store::StoreError;
use thiserror::Error;

/// Errors surfaced by service operations.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Inbound content or identifier failed validation.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Identifier is well-formed but no record exists.
    #[error("record not found: {0}")]
    NotFound(String),

    /// Identifier collision on store.
    #[error("record already exists: {0}")]
    AlreadyExists(String),

    /// The signer failed.
    #[error("signer error: {0}")]
    Signer(#[from] SignerError),

    /// The storage backend failed.
    #[error("storage error: {0}")]
    Storage(StoreError),

    /// The operation exceeded its deadline.
    #[error("operation timed out after {0:?}")]
    Timeout(std::time::Duration),
}

impl From<StoreError> for ServiceError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(id) => ServiceError::NotFound(id),
            StoreError::AlreadyExists(id) => ServiceError::AlreadyExists(id),
            other => ServiceError::Storage(other),
        }
    }
}

/// Result type for service operations.
pub type Result<T> = std::result::Result<T, ServiceError>;
