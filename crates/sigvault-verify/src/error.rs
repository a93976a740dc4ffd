//! Error types for offline verification.
//!
//! Hash mismatch (content corruption) and signature failure
//! (authenticity) are distinct conditions and stay distinct here;
//! neither is ever folded into the other or into success.

use std::path::PathBuf;

use sigvault_core::ValidationError;
use thiserror::Error;

/// Errors that can occur while verifying a downloaded artifact set.
#[derive(Debug, Error)]
pub enum VerifyError {
    /// An expected artifact file is absent.
    #[error("missing artifact: {0}")]
    MissingArtifact(PathBuf),

    /// I/O error reading or writing artifacts.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The metadata JSON could not be parsed.
    #[error("malformed metadata: {0}")]
    MalformedMetadata(#[from] serde_json::Error),

    /// The signature file is not valid base64.
    #[error("malformed signature encoding: {0}")]
    MalformedSignature(#[from] base64::DecodeError),

    /// The public key PEM could not be parsed.
    #[error("malformed public key: {0}")]
    MalformedKey(String),

    /// A metadata field failed validation.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The metadata describes a different record than requested.
    #[error("metadata id {metadata} does not match requested id {requested}")]
    IdMismatch { requested: String, metadata: String },

    /// The content file does not hash to the metadata's value.
    #[error("content hash mismatch: metadata has {expected}, computed {computed}")]
    HashMismatch { expected: String, computed: String },

    /// The signature did not verify against the canonical bytes.
    #[error("signature verification failed")]
    SignatureInvalid,
}

/// Result type for verification operations.
pub type Result<T> = std::result::Result<T, VerifyError>;
