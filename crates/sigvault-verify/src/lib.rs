//! # sigvault verify
//!
//! The offline verifier: checks authenticity and integrity of a
//! retrieved record using only locally held files and a public key,
//! with no access to the service or its storage.
//!
//! ## Artifact set
//!
//! A client persists three files after retrieval:
//!
//! - `<id>.txt` - raw content bytes
//! - `<id>.sig` - base64-encoded signature
//! - `<id>.meta.json` - `{"uuid", "hash", "timestamp"}`
//!
//! [`verify_artifacts`] recomputes the content hash, rebuilds the
//! canonical record, and re-verifies the RSASSA-PSS signature against
//! the supplied `PUBLIC KEY` PEM. Hash mismatch and signature failure
//! are reported as distinct errors: the first means corruption, the
//! second means the artifacts were not signed by this key.

pub mod artifacts;
pub mod error;
pub mod verifier;

pub use artifacts::{read_artifacts, write_artifacts, ArtifactPaths, RecordMetadata};
pub use error::{Result, VerifyError};
pub use verifier::{verify_artifacts, VerifyReport};
