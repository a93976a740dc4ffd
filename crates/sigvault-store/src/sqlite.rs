//! SQLite implementation of the Store trait.
//!
//! The primary storage backend. Uses rusqlite with bundled SQLite,
//! wrapped in async via tokio::spawn_blocking.

use std::path::Path;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::Bytes;
use rusqlite::{params, Connection, ErrorCode, OptionalExtension};
use sigvault_core::{CanonicalRecord, RecordId, SignedRecord};

use crate::error::{Result, StoreError};
use crate::migration;
use crate::traits::Store;

/// SQLite-based store.
///
/// Thread-safe via an internal mutex; every operation runs on the
/// blocking thread pool so the async runtime is never stalled.
pub struct SqliteStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteStore {
    /// Open a database at the given path, creating the file and
    /// running migrations if needed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let mut conn = Connection::open(path)?;
        migration::migrate(&mut conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Open an in-memory database. Useful for testing.
    pub fn open_memory() -> Result<Self> {
        let mut conn = Connection::open_in_memory()?;
        migration::migrate(&mut conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Run a closure against the connection on the blocking pool.
    async fn blocking<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let conn = conn
                .lock()
                .map_err(|e| StoreError::Unavailable(format!("connection mutex poisoned: {e}")))?;
            f(&conn)
        })
        .await
        .map_err(|e| StoreError::Unavailable(format!("blocking task failed: {e}")))?
    }
}

fn row_to_record(row: &rusqlite::Row<'_>) -> rusqlite::Result<SignedRecord> {
    let id_str: String = row.get("record_id")?;
    let content: Vec<u8> = row.get("content")?;
    let content_hash: String = row.get("content_hash")?;
    let created_at: String = row.get("created_at")?;
    let signature: Vec<u8> = row.get("signature")?;

    let id = RecordId::parse(&id_str).map_err(|_| {
        rusqlite::Error::InvalidColumnType(0, "record_id".into(), rusqlite::types::Type::Text)
    })?;

    Ok(SignedRecord {
        record: CanonicalRecord {
            id,
            content: Bytes::from(content),
            content_hash,
            created_at,
        },
        signature,
    })
}

fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _) if e.code == ErrorCode::ConstraintViolation
    )
}

#[async_trait]
impl Store for SqliteStore {
    async fn put(&self, record: &SignedRecord) -> Result<()> {
        let record = record.clone();
        self.blocking(move |conn| {
            let result = conn.execute(
                "INSERT INTO signed_records
                     (record_id, content, content_hash, created_at, signature)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    record.record.id.to_string(),
                    record.record.content.as_ref(),
                    record.record.content_hash,
                    record.record.created_at,
                    record.signature,
                ],
            );

            match result {
                Ok(_) => Ok(()),
                Err(e) if is_unique_violation(&e) => {
                    Err(StoreError::AlreadyExists(record.record.id.to_string()))
                }
                Err(e) => Err(e.into()),
            }
        })
        .await
    }

    async fn get(&self, id: &RecordId) -> Result<Option<SignedRecord>> {
        let id = *id;
        self.blocking(move |conn| {
            conn.query_row(
                "SELECT record_id, content, content_hash, created_at, signature
                 FROM signed_records WHERE record_id = ?1",
                params![id.to_string()],
                row_to_record,
            )
            .optional()
            .map_err(StoreError::from)
        })
        .await
    }

    async fn exists(&self, id: &RecordId) -> Result<bool> {
        let id = *id;
        self.blocking(move |conn| {
            let exists: bool = conn.query_row(
                "SELECT EXISTS(SELECT 1 FROM signed_records WHERE record_id = ?1)",
                params![id.to_string()],
                |row| row.get(0),
            )?;
            Ok(exists)
        })
        .await
    }

    async fn delete(&self, id: &RecordId) -> Result<()> {
        let id = *id;
        self.blocking(move |conn| {
            let affected = conn.execute(
                "DELETE FROM signed_records WHERE record_id = ?1",
                params![id.to_string()],
            )?;
            if affected == 0 {
                return Err(StoreError::NotFound(id.to_string()));
            }
            Ok(())
        })
        .await
    }

    async fn ping(&self) -> Result<()> {
        self.blocking(|conn| {
            conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0))
                .map_err(|e| StoreError::Unavailable(e.to_string()))?;
            Ok(())
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record(content: &[u8]) -> SignedRecord {
        let record = CanonicalRecord::assemble(
            RecordId::generate(),
            content.to_vec(),
            "2024-01-15T12:00:00Z".to_string(),
        );
        SignedRecord {
            record,
            signature: vec![0xab; 256],
        }
    }

    #[tokio::test]
    async fn test_put_get_verbatim() {
        let store = SqliteStore::open_memory().unwrap();
        let signed = sample_record(b"hello-world");

        store.put(&signed).await.unwrap();
        let fetched = store.get(&signed.record.id).await.unwrap().unwrap();

        // Exact bytes back, field by field
        assert_eq!(fetched, signed);
    }

    #[tokio::test]
    async fn test_duplicate_put_is_already_exists() {
        let store = SqliteStore::open_memory().unwrap();
        let signed = sample_record(b"once");

        store.put(&signed).await.unwrap();
        let err = store.put(&signed).await.unwrap_err();
        assert!(matches!(err, StoreError::AlreadyExists(_)));
    }

    #[tokio::test]
    async fn test_exists_reflects_presence() {
        let store = SqliteStore::open_memory().unwrap();
        let signed = sample_record(b"present");

        assert!(!store.exists(&signed.record.id).await.unwrap());
        store.put(&signed).await.unwrap();
        assert!(store.exists(&signed.record.id).await.unwrap());

        store.delete(&signed.record.id).await.unwrap();
        assert!(!store.exists(&signed.record.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let store = SqliteStore::open_memory().unwrap();
        let err = store.delete(&RecordId::generate()).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_get_missing_is_none() {
        let store = SqliteStore::open_memory().unwrap();
        assert!(store.get(&RecordId::generate()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_ping() {
        let store = SqliteStore::open_memory().unwrap();
        store.ping().await.unwrap();
    }

    #[tokio::test]
    async fn test_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("records.db");
        let signed = sample_record(b"durable");

        {
            let store = SqliteStore::open(&path).unwrap();
            store.put(&signed).await.unwrap();
        }

        let store = SqliteStore::open(&path).unwrap();
        let fetched = store.get(&signed.record.id).await.unwrap().unwrap();
        assert_eq!(fetched, signed);
    }
}
