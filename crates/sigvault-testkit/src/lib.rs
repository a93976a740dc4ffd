//! # Sigvault Testkit
//!
//! Testing utilities for sigvault.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Fixture keys**: pre-generated RSA keys so test suites skip key
//!   generation entirely
//! - **Fixtures**: helper structs for setting up signer-plus-store
//!   test scenarios
//! - **Golden vectors**: known records with pinned canonical encodings
//! - **Generators**: proptest strategies for property-based testing
//!
//! ## Test Fixtures
//!
//! Quickly set up test scenarios:
//!
//! ```rust
//! use sigvault_testkit::fixtures::TestFixture;
//!
//! let fixture = TestFixture::new();
//! let signed = fixture.make_signed_record(b"payload");
//! assert!(signed.record.content_hash_matches());
//! ```
//!
//! ## Golden Vectors
//!
//! Golden vectors pin the canonical encoding:
//!
//! ```rust
//! use sigvault_testkit::vectors::verify_all_vectors;
//!
//! for (name, matches, digest) in verify_all_vectors() {
//!     assert!(matches, "{} diverged: {}", name, digest);
//! }
//! ```
//!
//! ## Property Testing
//!
//! Use the generators with proptest:
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use sigvault_testkit::generators::{record_from_params, RecordParams};
//! use sigvault_core::canonical_bytes;
//!
//! proptest! {
//!     #[test]
//!     fn canonical_bytes_are_deterministic(params: RecordParams) {
//!         let r1 = record_from_params(&params);
//!         let r2 = record_from_params(&params);
//!         prop_assert_eq!(canonical_bytes(&r1), canonical_bytes(&r2));
//!     }
//! }
//! ```

pub mod fixtures;
pub mod generators;
pub mod keys;
pub mod vectors;

pub use fixtures::{primary_signer, secondary_signer, TestFixture};
pub use generators::{record_from_params, RecordParams};
pub use keys::{TEST_PRIVATE_KEY_PEM, TEST_SECONDARY_PRIVATE_KEY_PEM};
pub use vectors::{all_vectors, record_from_vector, verify_all_vectors, GoldenVector};
