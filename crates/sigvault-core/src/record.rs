//! The canonical record: the signed unit of the protocol.
//!
//! A record is immutable once assembled. Its `content_hash` is always
//! derived from `content`, never independently supplied, and its
//! `created_at` string is carried verbatim from assembly through
//! storage and back out, so the exact bytes that were signed can
//! always be reconstructed.

use std::fmt;

use bytes::Bytes;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::crypto::Sha256Hash;
use crate::error::ValidationError;

/// Format of `created_at`: RFC 3339 UTC, second precision.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// A server-generated, globally unique record identifier.
///
/// Opaque to callers beyond uniqueness; immutable once assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(Uuid);

impl RecordId {
    /// Generate a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an identifier, rejecting malformed input before any
    /// storage lookup happens.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|e| ValidationError::MalformedId(e.to_string()))
    }

    /// Wrap an existing UUID.
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// The underlying UUID.
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Hyphenated lowercase, the form used in canonical bytes.
        write!(f, "{}", self.0.hyphenated())
    }
}

/// The exact set of fields that is signed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalRecord {
    /// Server-generated identifier.
    pub id: RecordId,

    /// The original payload, non-empty, at most 262,144 bytes.
    pub content: Bytes,

    /// Lowercase hex SHA-256 of `content`.
    pub content_hash: String,

    /// RFC 3339 UTC timestamp, second precision, assigned once.
    pub created_at: String,
}

impl CanonicalRecord {
    /// Assemble a record, deriving `content_hash` from the content.
    pub fn assemble(id: RecordId, content: impl Into<Bytes>, created_at: String) -> Self {
        let content = content.into();
        let content_hash = Sha256Hash::hash(&content).to_hex();
        Self {
            id,
            content,
            content_hash,
            created_at,
        }
    }

    /// Recompute the content hash and compare against the stored one.
    ///
    /// A mismatch indicates corruption or tampering, detectable before
    /// even consulting the signature.
    pub fn content_hash_matches(&self) -> bool {
        Sha256Hash::hash(&self.content).to_hex() == self.content_hash
    }
}

/// A canonical record together with its signature.
///
/// The signature is opaque and probabilistic: never recomputed or
/// compared byte-for-byte, only re-verified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedRecord {
    pub record: CanonicalRecord,
    pub signature: Vec<u8>,
}

/// Current UTC time in the canonical timestamp form.
pub fn timestamp_now() -> String {
    Utc::now().format(TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_id_roundtrip() {
        let id = RecordId::generate();
        let parsed = RecordId::parse(&id.to_string()).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_record_id_rejects_garbage() {
        assert!(matches!(
            RecordId::parse("not-a-uuid"),
            Err(ValidationError::MalformedId(_))
        ));
        assert!(RecordId::parse("").is_err());
    }

    #[test]
    fn test_assemble_derives_hash() {
        let record = CanonicalRecord::assemble(
            RecordId::generate(),
            &b"hello-world"[..],
            timestamp_now(),
        );
        assert_eq!(
            record.content_hash,
            "afa27b44d43b02a9fea41d13cedc2e4016cfcf87c5dbf990e593669aa8ce286d"
        );
        assert!(record.content_hash_matches());
    }

    #[test]
    fn test_hash_mismatch_detected() {
        let mut record = CanonicalRecord::assemble(
            RecordId::generate(),
            &b"original"[..],
            timestamp_now(),
        );
        record.content = Bytes::from_static(b"tampered");
        assert!(!record.content_hash_matches());
    }

    #[test]
    fn test_timestamp_shape() {
        let ts = timestamp_now();
        // e.g. 2026-08-30T12:34:56Z
        assert_eq!(ts.len(), 20);
        assert!(ts.ends_with('Z'));
        assert_eq!(&ts[10..11], "T");
    }
}
