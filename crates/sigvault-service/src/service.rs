//! The record service: the only place write-path business rules live.
//!
//! Validates inbound content, assigns identity and timestamp exactly
//! once, builds the canonical record, signs its canonical bytes, and
//! persists record and signature as one logical unit. The read path
//! returns stored records unmodified; re-verification belongs to the
//! offline verifier and the caller, never to this service.

use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use tracing::error;

use sigvault_core::{
    canonical_bytes, timestamp_now, validate_content, CanonicalRecord, RecordId, RsaSigner,
    SignedRecord,
};
use sigvault_store::Store;

use crate::error::{Result, ServiceError};

/// Configuration for the record service.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Deadline applied to each storage-touching operation.
    ///
    /// A transport layer that carries per-request deadlines is
    /// expected to map them onto this, either by constructing the
    /// service with the tightest deadline it will honor or by
    /// enforcing the request deadline outside and treating this as
    /// the server-side ceiling.
    pub op_timeout: Duration,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            op_timeout: Duration::from_secs(5),
        }
    }
}

/// The record service.
///
/// Stateless across requests: the only shared state is the immutable
/// signer and the store handle, both safe for unlimited concurrent
/// reads.
pub struct RecordService<S: Store> {
    signer: Arc<RsaSigner>,
    store: Arc<S>,
    config: ServiceConfig,
}

impl<S: Store> RecordService<S> {
    /// Create a new service over a signer and a store.
    pub fn new(signer: Arc<RsaSigner>, store: Arc<S>, config: ServiceConfig) -> Self {
        Self {
            signer,
            store,
            config,
        }
    }

    /// Get the store reference.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Store content as a signed record, returning its new id.
    ///
    /// Validation happens before any hashing, signing, or storage
    /// work. If signing fails, nothing is written; if storage fails
    /// after signing, the error is surfaced and no id is returned as
    /// successful.
    pub async fn store_record(&self, content: impl Into<Bytes>) -> Result<RecordId> {
        let content = content.into();
        validate_content(&content)?;

        // Identity and timestamp are assigned exactly once per call.
        let id = RecordId::generate();
        let created_at = timestamp_now();

        let record = CanonicalRecord::assemble(id, content, created_at);
        let message = canonical_bytes(&record);

        let signature = self.signer.sign(&message).map_err(|e| {
            error!(record_id = %id, error = %e, "failed to sign canonical record");
            e
        })?;

        let signed = SignedRecord { record, signature };

        self.with_deadline(self.store.put(&signed))
            .await
            .map_err(|e| self.log_operational(e, "store"))?;

        Ok(id)
    }

    /// Retrieve a signed record by its identifier string.
    ///
    /// Malformed identifiers fail fast without a storage round-trip.
    /// The record and signature come back exactly as stored.
    pub async fn get_record(&self, id: &str) -> Result<SignedRecord> {
        let id = RecordId::parse(id)?;

        let found = self
            .with_deadline(self.store.get(&id))
            .await
            .map_err(|e| self.log_operational(e, "get"))?;

        found.ok_or_else(|| ServiceError::NotFound(id.to_string()))
    }

    /// Check whether a record exists, without fetching it.
    pub async fn record_exists(&self, id: &str) -> Result<bool> {
        let id = RecordId::parse(id)?;
        self.with_deadline(self.store.exists(&id))
            .await
            .map_err(|e| self.log_operational(e, "exists"))
    }

    /// Delete a record. Out of the hot path; has no bearing on
    /// verification artifacts already downloaded by clients.
    pub async fn delete_record(&self, id: &str) -> Result<()> {
        let id = RecordId::parse(id)?;
        self.with_deadline(self.store.delete(&id))
            .await
            .map_err(|e| self.log_operational(e, "delete"))
    }

    /// The public key PEM, a pure pass-through to the signer.
    pub fn public_key_pem(&self) -> Result<String> {
        Ok(self.signer.public_key_pem()?)
    }

    /// Liveness of the storage backend.
    pub async fn health(&self) -> Result<()> {
        self.with_deadline(self.store.ping())
            .await
            .map_err(|e| self.log_operational(e, "health"))
    }

    /// Run a store future under the configured deadline.
    async fn with_deadline<T>(
        &self,
        fut: impl std::future::Future<Output = sigvault_store::Result<T>>,
    ) -> Result<T> {
        match tokio::time::timeout(self.config.op_timeout, fut).await {
            Ok(result) => Ok(result?),
            Err(_) => Err(ServiceError::Timeout(self.config.op_timeout)),
        }
    }

    /// Operational failures get logged; expected caller mistakes
    /// (validation, not-found, already-exists) do not.
    fn log_operational(&self, e: ServiceError, op: &str) -> ServiceError {
        match &e {
            ServiceError::Storage(inner) => {
                error!(operation = op, error = %inner, "storage operation failed");
            }
            ServiceError::Timeout(deadline) => {
                error!(operation = op, ?deadline, "storage operation timed out");
            }
            _ => {}
        }
        e
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sigvault_core::{Sha256Hash, ValidationError, MAX_CONTENT_SIZE};
    use sigvault_store::MemoryStore;

    fn test_service() -> RecordService<MemoryStore> {
        // 1024-bit keys keep unit tests fast; integration tests use
        // the 2048-bit fixture keys from the testkit.
        let signer = RsaSigner::generate(1024).unwrap();
        RecordService::new(
            Arc::new(signer),
            Arc::new(MemoryStore::new()),
            ServiceConfig::default(),
        )
    }

    #[tokio::test]
    async fn test_store_and_get() {
        let service = test_service();
        let id = service.store_record(&b"hello-world"[..]).await.unwrap();

        let signed = service.get_record(&id.to_string()).await.unwrap();
        assert_eq!(signed.record.content.as_ref(), b"hello-world");
        assert_eq!(
            signed.record.content_hash,
            Sha256Hash::hash(b"hello-world").to_hex()
        );
        assert!(!signed.signature.is_empty());
    }

    #[tokio::test]
    async fn test_empty_content_rejected_before_side_effects() {
        let service = test_service();
        let err = service.store_record(&b""[..]).await.unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Validation(ValidationError::EmptyContent)
        ));
    }

    #[tokio::test]
    async fn test_size_boundary() {
        let service = test_service();

        let at_limit = vec![b'x'; MAX_CONTENT_SIZE];
        service.store_record(at_limit).await.unwrap();

        let over = vec![b'x'; MAX_CONTENT_SIZE + 1];
        let err = service.store_record(over).await.unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Validation(ValidationError::ContentTooLarge(_))
        ));
    }

    #[tokio::test]
    async fn test_malformed_id_fails_before_lookup() {
        let service = test_service();
        let err = service.get_record("definitely-not-a-uuid").await.unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Validation(ValidationError::MalformedId(_))
        ));
    }

    #[tokio::test]
    async fn test_missing_record_is_not_found() {
        let service = test_service();
        let absent = RecordId::generate().to_string();
        let err = service.get_record(&absent).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_then_get() {
        let service = test_service();
        let id = service.store_record(&b"ephemeral"[..]).await.unwrap();
        let id = id.to_string();

        assert!(service.record_exists(&id).await.unwrap());
        service.delete_record(&id).await.unwrap();
        assert!(!service.record_exists(&id).await.unwrap());
        assert!(matches!(
            service.get_record(&id).await.unwrap_err(),
            ServiceError::NotFound(_)
        ));
    }

    #[tokio::test]
    async fn test_public_key_pem_shape() {
        let service = test_service();
        let pem = service.public_key_pem().unwrap();
        assert!(pem.starts_with("-----BEGIN PUBLIC KEY-----"));
        assert!(pem.trim_end().ends_with("-----END PUBLIC KEY-----"));
    }

    #[tokio::test]
    async fn test_health() {
        let service = test_service();
        service.health().await.unwrap();
    }
}
