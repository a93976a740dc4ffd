//! # sigvault store
//!
//! Storage abstraction for sigvault signed records. Provides a
//! trait-based interface with SQLite and in-memory implementations.
//!
//! ## Overview
//!
//! The [`Store`] trait abstracts record persistence so the service is
//! storage-agnostic. The primary implementation is [`SqliteStore`],
//! with [`MemoryStore`] for tests. The store's one job is fidelity:
//! hand back exactly the bytes it was given, because those bytes are
//! what the signature was computed over.
//!
//! ## Key Types
//!
//! - [`Store`] - the async trait for all storage operations
//! - [`SqliteStore`] - SQLite-based persistent storage
//! - [`MemoryStore`] - in-memory storage for tests
//! - [`wait_until_ready`] - bounded startup readiness polling
//!
//! ## Design Notes
//!
//! - **At-most-one write per id**: duplicate inserts fail with
//!   `AlreadyExists`; there is no update path at all.
//! - **No validation**: the store never re-hashes, re-parses, or
//!   re-verifies; that is the service's and the verifier's job.
//! - **Startup retry only**: readiness polling is the single retry
//!   loop; business operations surface failure immediately.

pub mod error;
pub mod memory;
pub mod migration;
pub mod retry;
pub mod sqlite;
pub mod traits;

pub use error::{Result, StoreError};
pub use memory::MemoryStore;
pub use retry::wait_until_ready;
pub use sqlite::SqliteStore;
pub use traits::Store;
