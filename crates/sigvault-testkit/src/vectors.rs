//! Golden test vectors for deterministic canonicalization.
//!
//! These vectors pin the canonical byte encoding. Any implementation
//! that signs or verifies records must reproduce them exactly, or
//! signatures stop interoperating.

use bytes::Bytes;
use sigvault_core::{canonical_bytes, CanonicalRecord, RecordId, Sha256Hash};

/// A golden test vector.
#[derive(Debug, Clone)]
pub struct GoldenVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// Hyphenated lowercase record id.
    pub id: &'static str,
    /// Content bytes.
    pub content: &'static [u8],
    /// Canonical timestamp string.
    pub created_at: &'static str,
    /// Expected lowercase hex SHA-256 of the content.
    pub expected_content_hash: &'static str,
    /// Expected length of the canonical encoding.
    pub expected_canonical_len: usize,
    /// Expected lowercase hex SHA-256 of the canonical encoding.
    pub expected_canonical_sha256: &'static str,
}

/// Get all golden test vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "nil id with hello-world content",
            id: "00000000-0000-0000-0000-000000000000",
            content: b"hello-world",
            created_at: "2024-01-15T12:00:00Z",
            expected_content_hash:
                "afa27b44d43b02a9fea41d13cedc2e4016cfcf87c5dbf990e593669aa8ce286d",
            expected_canonical_len: 142,
            expected_canonical_sha256:
                "641a623976dc71f6dd2b267a615211c4bc10b57203753948e0c071d489babdbf",
        },
        GoldenVector {
            name: "pangram content",
            id: "123e4567-e89b-42d3-a456-426614174000",
            content: b"The quick brown fox jumps over the lazy dog",
            created_at: "2025-06-01T00:00:00Z",
            expected_content_hash:
                "d7a8fbb307d7809469ca9abcb0082e4f8d5651e46d3cdb762d02d0bf37c9e592",
            expected_canonical_len: 175,
            expected_canonical_sha256:
                "c3c1cc997bfc11389c4e0dc25aa225c4b4eed0bd00cf3c84ad2618af36eea0a9",
        },
        GoldenVector {
            name: "single byte content",
            id: "ffffffff-ffff-4fff-bfff-ffffffffffff",
            content: b"a",
            created_at: "2030-12-31T23:59:59Z",
            expected_content_hash:
                "ca978112ca1bbdcafac231b39a23dc4da786eff8147c4e72b9807785afee48bb",
            expected_canonical_len: 132,
            expected_canonical_sha256:
                "80a68798d1514787c6b016260631e64e6f3d2098b4ce0f2a441d79e21bdb4012",
        },
    ]
}

/// Assemble the canonical record a golden vector describes.
pub fn record_from_vector(vector: &GoldenVector) -> CanonicalRecord {
    let id = RecordId::parse(vector.id).expect("vector ids are well formed");
    CanonicalRecord::assemble(
        id,
        Bytes::from_static(vector.content),
        vector.created_at.to_string(),
    )
}

/// Check every golden vector against the live encoder.
///
/// Returns `(name, matches, canonical_sha256)` per vector, so a
/// failing run reports the digest it actually produced.
pub fn verify_all_vectors() -> Vec<(String, bool, String)> {
    all_vectors()
        .iter()
        .map(|v| {
            let record = record_from_vector(v);
            let canon = canonical_bytes(&record);
            let digest = Sha256Hash::hash(&canon).to_hex();

            let matches = record.content_hash == v.expected_content_hash
                && canon.len() == v.expected_canonical_len
                && digest == v.expected_canonical_sha256;

            (v.name.to_string(), matches, digest)
        })
        .collect()
}
