//! Offline verification: prove that a locally held artifact set
//! corresponds to a record the key-holder actually signed, without
//! trusting the storage layer or the network path.
//!
//! The procedure is strictly ordered: cheap content-hash comparison
//! first (corruption is detectable without any cryptography), then
//! canonical reconstruction and RSASSA-PSS verification. A single
//! failure is terminal; there is no partial-trust outcome.

use std::path::Path;

use bytes::Bytes;
use tracing::debug;

use sigvault_core::{
    canonical_bytes, validate_timestamp, CanonicalRecord, PssVerifier, RecordId, Sha256Hash,
};

use crate::artifacts::read_artifacts;
use crate::error::{Result, VerifyError};

/// Outcome of a successful verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyReport {
    /// The verified record id.
    pub id: String,
    /// The confirmed content hash (lowercase hex).
    pub content_hash: String,
    /// The signed creation timestamp.
    pub created_at: String,
}

/// Verify the artifact set for `id` in `dir` against a public key PEM.
///
/// Succeeds only if the recomputed content hash matches the metadata
/// and the reconstructed canonical bytes verify against the signature.
pub fn verify_artifacts(dir: &Path, id: &str, public_key_pem: &str) -> Result<VerifyReport> {
    // Validation failures come before any cryptographic work.
    let requested = RecordId::parse(id)?;
    let verifier = PssVerifier::from_public_key_pem(public_key_pem)
        .map_err(|e| VerifyError::MalformedKey(e.to_string()))?;

    let (content, signature, metadata) = read_artifacts(dir, id)?;

    let record_id = RecordId::parse(&metadata.uuid)?;
    if record_id != requested {
        return Err(VerifyError::IdMismatch {
            requested: requested.to_string(),
            metadata: metadata.uuid,
        });
    }
    validate_timestamp(&metadata.timestamp)?;

    // Step 1: content integrity, hex against the metadata hash.
    let computed = Sha256Hash::hash(&content).to_hex();
    if computed != metadata.hash {
        return Err(VerifyError::HashMismatch {
            expected: metadata.hash,
            computed,
        });
    }
    debug!(id, hash = %computed, "content hash matches metadata");

    // Step 2: reconstruct the canonical record the server signed and
    // re-run verification over its canonical bytes.
    let record = CanonicalRecord {
        id: record_id,
        content: Bytes::from(content),
        content_hash: metadata.hash,
        created_at: metadata.timestamp,
    };
    let message = canonical_bytes(&record);

    verifier
        .verify(&message, &signature)
        .map_err(|_| VerifyError::SignatureInvalid)?;
    debug!(id, "signature verified");

    Ok(VerifyReport {
        id: record.id.to_string(),
        content_hash: record.content_hash,
        created_at: record.created_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::{write_artifacts, ArtifactPaths, RecordMetadata};
    use sigvault_core::{timestamp_now, RsaSigner, SignedRecord};
    use std::fs;
    use std::sync::OnceLock;

    fn test_signer() -> &'static RsaSigner {
        static SIGNER: OnceLock<RsaSigner> = OnceLock::new();
        SIGNER.get_or_init(|| RsaSigner::generate(2048).unwrap())
    }

    fn signed_record(content: &[u8]) -> SignedRecord {
        let record = CanonicalRecord::assemble(
            RecordId::generate(),
            content.to_vec(),
            timestamp_now(),
        );
        let signature = test_signer().sign(&canonical_bytes(&record)).unwrap();
        SignedRecord { record, signature }
    }

    fn write_set(dir: &Path, content: &[u8]) -> (String, ArtifactPaths) {
        let signed = signed_record(content);
        let paths = write_artifacts(dir, &signed).unwrap();
        (signed.record.id.to_string(), paths)
    }

    #[test]
    fn test_valid_artifacts_verify() {
        let dir = tempfile::tempdir().unwrap();
        let (id, _) = write_set(dir.path(), b"hello-world");
        let pem = test_signer().public_key_pem().unwrap();

        let report = verify_artifacts(dir.path(), &id, &pem).unwrap();
        assert_eq!(report.id, id);
        assert_eq!(report.content_hash, Sha256Hash::hash(b"hello-world").to_hex());
    }

    #[test]
    fn test_tampered_content_is_hash_mismatch() {
        let dir = tempfile::tempdir().unwrap();
        let (id, paths) = write_set(dir.path(), b"original content");
        fs::write(&paths.content, b"tampered content").unwrap();

        let pem = test_signer().public_key_pem().unwrap();
        let err = verify_artifacts(dir.path(), &id, &pem).unwrap_err();
        assert!(matches!(err, VerifyError::HashMismatch { .. }));
    }

    #[test]
    fn test_tampered_timestamp_is_signature_failure() {
        let dir = tempfile::tempdir().unwrap();
        let (id, paths) = write_set(dir.path(), b"payload");

        let raw = fs::read(&paths.metadata).unwrap();
        let mut meta: RecordMetadata = serde_json::from_slice(&raw).unwrap();
        meta.timestamp = "1999-12-31T23:59:59Z".to_string();
        fs::write(&paths.metadata, serde_json::to_vec(&meta).unwrap()).unwrap();

        let pem = test_signer().public_key_pem().unwrap();
        let err = verify_artifacts(dir.path(), &id, &pem).unwrap_err();
        assert!(matches!(err, VerifyError::SignatureInvalid));
    }

    #[test]
    fn test_flipped_signature_bit_fails() {
        let dir = tempfile::tempdir().unwrap();
        let signed = signed_record(b"bit flip target");
        let id = signed.record.id.to_string();

        let mut corrupted = signed.clone();
        corrupted.signature[0] ^= 0x01;
        write_artifacts(dir.path(), &corrupted).unwrap();

        let pem = test_signer().public_key_pem().unwrap();
        let err = verify_artifacts(dir.path(), &id, &pem).unwrap_err();
        assert!(matches!(err, VerifyError::SignatureInvalid));
    }

    #[test]
    fn test_wrong_key_fails() {
        let dir = tempfile::tempdir().unwrap();
        let (id, _) = write_set(dir.path(), b"payload");

        let other = RsaSigner::generate(2048).unwrap();
        let err =
            verify_artifacts(dir.path(), &id, &other.public_key_pem().unwrap()).unwrap_err();
        assert!(matches!(err, VerifyError::SignatureInvalid));
    }

    #[test]
    fn test_metadata_for_other_record_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let (id_a, paths_a) = write_set(dir.path(), b"record a");
        let (_id_b, paths_b) = write_set(dir.path(), b"record b");

        // Swap record B's metadata under record A's name
        fs::copy(&paths_b.metadata, &paths_a.metadata).unwrap();

        let pem = test_signer().public_key_pem().unwrap();
        let err = verify_artifacts(dir.path(), &id_a, &pem).unwrap_err();
        assert!(matches!(err, VerifyError::IdMismatch { .. }));
    }

    #[test]
    fn test_malformed_key_rejected_before_reads() {
        let dir = tempfile::tempdir().unwrap();
        let id = RecordId::generate().to_string();
        let err = verify_artifacts(dir.path(), &id, "not a pem").unwrap_err();
        assert!(matches!(err, VerifyError::MalformedKey(_)));
    }

    #[test]
    fn test_malformed_id_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let pem = test_signer().public_key_pem().unwrap();
        let err = verify_artifacts(dir.path(), "not-a-uuid", &pem).unwrap_err();
        assert!(matches!(err, VerifyError::Validation(_)));
    }
}
