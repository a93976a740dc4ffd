//! Error types for sigvault core operations.

use thiserror::Error;

use crate::validation::MAX_CONTENT_SIZE;

/// Errors raised by the signer.
#[derive(Debug, Error)]
pub enum SignerError {
    /// Key material could not be loaded or encoded.
    #[error("invalid key material: {0}")]
    KeyMaterial(String),

    /// A sign/verify input was structurally unusable.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),

    /// The underlying RSA primitive failed.
    #[error("signing failed: {0}")]
    Signing(#[from] rsa::Error),

    /// The signature did not verify against the message and key.
    #[error("signature verification failed")]
    SignatureInvalid,
}

/// Validation errors for inbound content and identifiers.
///
/// These are expected caller mistakes: detected before any
/// cryptographic or storage work, never partially applied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("content is empty")]
    EmptyContent,

    #[error("content exceeds maximum size of {MAX_CONTENT_SIZE} bytes: got {0}")]
    ContentTooLarge(usize),

    #[error("malformed record id: {0}")]
    MalformedId(String),

    #[error("malformed timestamp: {0}")]
    MalformedTimestamp(String),
}
