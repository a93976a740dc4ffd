//! # sigvault service
//!
//! The orchestrator for the signed-record protocol. This crate owns
//! the write-path business rules: validate content, assign identity
//! and timestamp once, build the canonical record, sign its canonical
//! bytes, and persist the pair atomically. On the read path it hands
//! back exactly what was stored; it never re-verifies signatures.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use sigvault_core::RsaSigner;
//! use sigvault_store::SqliteStore;
//! use sigvault_service::{RecordService, ServiceConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let signer = Arc::new(RsaSigner::from_pem_file("server.pem")?);
//! let store = Arc::new(SqliteStore::open("records.db")?);
//! let service = RecordService::new(signer, store, ServiceConfig::default());
//!
//! let id = service.store_record(&b"hello-world"[..]).await?;
//! let signed = service.get_record(&id.to_string()).await?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod service;

pub use error::{Result, ServiceError};
pub use service::{RecordService, ServiceConfig};
