//! # sigvault core
//!
//! Core primitives for the sigvault signed-record protocol: the
//! canonical record model, its deterministic serialization, and the
//! RSA-PSS signer.
//!
//! ## Overview
//!
//! A [`CanonicalRecord`] is the exact set of fields that gets signed:
//! id, content, content hash, creation timestamp. [`canonical_bytes`]
//! turns it into the one acceptable byte representation, and
//! [`RsaSigner`] signs those bytes with RSASSA-PSS (SHA-256, salt
//! length 32). A [`SignedRecord`] pairs the record with its opaque
//! signature.
//!
//! ## Key Types
//!
//! - [`CanonicalRecord`] / [`SignedRecord`] - the signed unit
//! - [`RecordId`] - server-generated UUID identifier
//! - [`Sha256Hash`] - content digest with hex encoding
//! - [`RsaSigner`] - key pair loaded once, held immutable
//! - [`PssVerifier`] - verification-only half for offline checks
//!
//! ## Canonical form
//!
//! The serialization is RFC 8949 deterministic CBOR with a pinned
//! integer-keyed field order, encoded by hand. Identical field values
//! always produce identical bytes, independent of library version or
//! construction order; see [`canonical`] for the wire contract.

pub mod canonical;
pub mod crypto;
pub mod error;
pub mod record;
pub mod validation;

pub use canonical::{canonical_bytes, CANONICAL_VERSION};
pub use crypto::{PssVerifier, RsaSigner, Sha256Hash, RSA_KEY_BITS};
pub use error::{SignerError, ValidationError};
pub use record::{
    timestamp_now, CanonicalRecord, RecordId, SignedRecord, TIMESTAMP_FORMAT,
};
pub use validation::{validate_content, validate_timestamp, MAX_CONTENT_SIZE};
