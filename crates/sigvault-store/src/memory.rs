//! In-memory implementation of the Store trait.
//!
//! Primarily for testing. Same semantics as SQLite but everything is
//! lost when the store is dropped.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use sigvault_core::{RecordId, SignedRecord};

use crate::error::{Result, StoreError};
use crate::traits::Store;

/// In-memory store. Thread-safe via RwLock.
pub struct MemoryStore {
    records: RwLock<HashMap<RecordId, SignedRecord>>,
}

impl MemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn put(&self, record: &SignedRecord) -> Result<()> {
        let mut records = self
            .records
            .write()
            .map_err(|e| StoreError::Unavailable(format!("lock poisoned: {e}")))?;

        if records.contains_key(&record.record.id) {
            return Err(StoreError::AlreadyExists(record.record.id.to_string()));
        }
        records.insert(record.record.id, record.clone());
        Ok(())
    }

    async fn get(&self, id: &RecordId) -> Result<Option<SignedRecord>> {
        let records = self
            .records
            .read()
            .map_err(|e| StoreError::Unavailable(format!("lock poisoned: {e}")))?;
        Ok(records.get(id).cloned())
    }

    async fn exists(&self, id: &RecordId) -> Result<bool> {
        let records = self
            .records
            .read()
            .map_err(|e| StoreError::Unavailable(format!("lock poisoned: {e}")))?;
        Ok(records.contains_key(id))
    }

    async fn delete(&self, id: &RecordId) -> Result<()> {
        let mut records = self
            .records
            .write()
            .map_err(|e| StoreError::Unavailable(format!("lock poisoned: {e}")))?;
        records
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use sigvault_core::CanonicalRecord;

    fn sample_record() -> SignedRecord {
        SignedRecord {
            record: CanonicalRecord::assemble(
                RecordId::generate(),
                Bytes::from_static(b"in-memory"),
                "2024-01-15T12:00:00Z".to_string(),
            ),
            signature: vec![0x01, 0x02, 0x03],
        }
    }

    #[tokio::test]
    async fn test_same_contract_as_sqlite() {
        let store = MemoryStore::new();
        let signed = sample_record();

        assert!(!store.exists(&signed.record.id).await.unwrap());
        store.put(&signed).await.unwrap();
        assert!(store.exists(&signed.record.id).await.unwrap());

        let fetched = store.get(&signed.record.id).await.unwrap().unwrap();
        assert_eq!(fetched, signed);

        assert!(matches!(
            store.put(&signed).await.unwrap_err(),
            StoreError::AlreadyExists(_)
        ));

        store.delete(&signed.record.id).await.unwrap();
        assert!(matches!(
            store.delete(&signed.record.id).await.unwrap_err(),
            StoreError::NotFound(_)
        ));
    }
}
