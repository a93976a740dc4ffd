//! Store trait: the abstract interface for signed-record persistence.
//!
//! Any backend implementing this capability set is substitutable.
//! Implementations include SQLite (primary) and in-memory (for tests).

use async_trait::async_trait;
use sigvault_core::{RecordId, SignedRecord};

use crate::error::Result;

/// The Store trait: async interface for signed-record persistence.
///
/// # Design Notes
///
/// - **Verbatim storage**: the store persists and returns the exact
///   bytes it was given. It never re-derives the content hash,
///   re-parses the timestamp, or re-validates the signature; the
///   canonical form must survive a round trip untouched.
/// - **At-most-one write per id**: a duplicate insert fails with
///   `AlreadyExists`; records are never updated in place.
/// - **Faithful `exists`**: the result reflects the actual lookup,
///   not merely the absence of an error.
#[async_trait]
pub trait Store: Send + Sync {
    /// Persist a signed record as a single atomic write.
    ///
    /// Fails with `AlreadyExists` if the id is taken; no partial
    /// writes are observable either way.
    async fn put(&self, record: &SignedRecord) -> Result<()>;

    /// Fetch a record by id, exactly as stored.
    async fn get(&self, id: &RecordId) -> Result<Option<SignedRecord>>;

    /// Check whether a record with this id exists.
    async fn exists(&self, id: &RecordId) -> Result<bool>;

    /// Remove a record entirely.
    ///
    /// Fails with `NotFound` if absent. Has no effect on artifacts
    /// already distributed to clients.
    async fn delete(&self, id: &RecordId) -> Result<()>;

    /// Cheap liveness probe.
    async fn ping(&self) -> Result<()>;
}
