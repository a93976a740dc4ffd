//! Proptest generators for property-based testing.

use proptest::prelude::*;

use bytes::Bytes;
use sigvault_core::{CanonicalRecord, RecordId, MAX_CONTENT_SIZE, TIMESTAMP_FORMAT};

/// Generate a random record id.
pub fn record_id() -> impl Strategy<Value = RecordId> {
    any::<u128>().prop_map(|n| RecordId::from_uuid(uuid::Uuid::from_u128(n)))
}

/// Generate non-empty content of at most `max_len` bytes.
pub fn content(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 1..=max_len)
}

/// Generate content near the size limit, for boundary testing.
pub fn boundary_content() -> impl Strategy<Value = Vec<u8>> {
    (MAX_CONTENT_SIZE - 2..=MAX_CONTENT_SIZE)
        .prop_map(|len| vec![0x61; len])
}

/// Generate a well-formed canonical timestamp.
pub fn timestamp() -> impl Strategy<Value = String> {
    // Seconds since epoch across a few decades, formatted canonically.
    (0i64..=2_000_000_000i64).prop_map(|secs| {
        chrono::DateTime::from_timestamp(secs, 0)
            .expect("in range")
            .format(TIMESTAMP_FORMAT)
            .to_string()
    })
}

/// Parameters for generating a canonical record.
#[derive(Debug, Clone)]
pub struct RecordParams {
    pub id: RecordId,
    pub content: Vec<u8>,
    pub created_at: String,
}

impl Arbitrary for RecordParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (record_id(), content(1024), timestamp())
            .prop_map(|(id, content, created_at)| RecordParams {
                id,
                content,
                created_at,
            })
            .boxed()
    }
}

/// Assemble a canonical record from parameters.
pub fn record_from_params(params: &RecordParams) -> CanonicalRecord {
    CanonicalRecord::assemble(
        params.id,
        Bytes::from(params.content.clone()),
        params.created_at.clone(),
    )
}
