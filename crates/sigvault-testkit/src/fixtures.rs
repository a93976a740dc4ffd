//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use std::sync::Arc;

use bytes::Bytes;
use sigvault_core::{
    canonical_bytes, timestamp_now, CanonicalRecord, RecordId, RsaSigner, SignedRecord,
};
use sigvault_store::MemoryStore;

use crate::keys::{TEST_PRIVATE_KEY_PEM, TEST_SECONDARY_PRIVATE_KEY_PEM};

/// A test fixture with a signing key and a memory store.
pub struct TestFixture {
    pub signer: Arc<RsaSigner>,
    pub store: Arc<MemoryStore>,
}

impl TestFixture {
    /// Create a fixture using the embedded primary key.
    pub fn new() -> Self {
        Self {
            signer: Arc::new(primary_signer()),
            store: Arc::new(MemoryStore::new()),
        }
    }

    /// Create a fixture using the embedded secondary key.
    ///
    /// Pair with [`TestFixture::new`] for wrong-key scenarios.
    pub fn with_secondary_key() -> Self {
        Self {
            signer: Arc::new(secondary_signer()),
            store: Arc::new(MemoryStore::new()),
        }
    }

    /// PEM of the fixture's public key, as handed to verifiers.
    pub fn public_key_pem(&self) -> String {
        self.signer
            .public_key_pem()
            .expect("fixture key exports PEM")
    }

    /// Assemble and sign a record with a fresh id and current timestamp.
    pub fn make_signed_record(&self, content: &[u8]) -> SignedRecord {
        self.make_signed_record_at(content, timestamp_now())
    }

    /// Assemble and sign a record with an explicit timestamp.
    pub fn make_signed_record_at(&self, content: &[u8], created_at: String) -> SignedRecord {
        let record = CanonicalRecord::assemble(
            RecordId::generate(),
            Bytes::copy_from_slice(content),
            created_at,
        );
        let signature = self
            .signer
            .sign(&canonical_bytes(&record))
            .expect("fixture signing succeeds");
        SignedRecord { record, signature }
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Signer built from the embedded primary key.
pub fn primary_signer() -> RsaSigner {
    RsaSigner::from_pkcs1_pem(TEST_PRIVATE_KEY_PEM).expect("embedded primary key is valid")
}

/// Signer built from the embedded secondary key.
pub fn secondary_signer() -> RsaSigner {
    RsaSigner::from_pkcs1_pem(TEST_SECONDARY_PRIVATE_KEY_PEM)
        .expect("embedded secondary key is valid")
}
