//! Canonical CBOR encoding for deterministic serialization.
//!
//! This module implements RFC 8949 Core Deterministic Encoding:
//! - Map keys sorted by encoded byte comparison
//! - Integers use smallest valid encoding
//! - Definite lengths only
//! - No floats
//!
//! The canonical encoding is a first-class wire contract, not an
//! implementation artifact: signing and verification may happen in
//! different processes (and different implementations), and both must
//! produce identical bytes for identical field values. That rules out
//! any general-purpose encoder whose byte output depends on field
//! insertion order or library version; the record is encoded by hand
//! with a fixed key order instead.

use ciborium::value::Value;

use crate::record::CanonicalRecord;

/// Version of the canonical wire format. Bump on any change to the
/// field set or encoding rules.
pub const CANONICAL_VERSION: u8 = 1;

/// Record field keys (integer keys for compact encoding).
///
/// Keys 0-23 encode as single bytes in CBOR.
mod keys {
    pub const ID: u64 = 0;
    pub const CONTENT: u64 = 1;
    pub const CONTENT_HASH: u64 = 2;
    pub const CREATED_AT: u64 = 3;
}

/// Encode a record to its canonical bytes, the exact message that is
/// signed and re-verified.
pub fn canonical_bytes(record: &CanonicalRecord) -> Vec<u8> {
    let value = record_to_cbor_value(record);
    let mut buf = Vec::new();
    encode_value_to(&mut buf, &value);
    buf
}

/// Convert a record to a CBOR Value (map with integer keys).
fn record_to_cbor_value(record: &CanonicalRecord) -> Value {
    let entries = vec![
        (
            Value::Integer(keys::ID.into()),
            Value::Text(record.id.to_string()),
        ),
        (
            Value::Integer(keys::CONTENT.into()),
            Value::Bytes(record.content.to_vec()),
        ),
        (
            Value::Integer(keys::CONTENT_HASH.into()),
            Value::Text(record.content_hash.clone()),
        ),
        (
            Value::Integer(keys::CREATED_AT.into()),
            Value::Text(record.created_at.clone()),
        ),
    ];
    Value::Map(entries)
}

/// Recursively encode a CBOR value.
fn encode_value_to(buf: &mut Vec<u8>, value: &Value) {
    match value {
        Value::Integer(i) => encode_integer(buf, *i),
        Value::Bytes(b) => encode_bytes(buf, b),
        Value::Text(s) => encode_text(buf, s),
        Value::Map(entries) => encode_map_canonical(buf, entries),
        _ => panic!("unsupported CBOR value type in canonical encoding"),
    }
}

/// Encode a CBOR integer (major types 0 and 1).
fn encode_integer(buf: &mut Vec<u8>, i: ciborium::value::Integer) {
    let n: i128 = i.into();
    if n >= 0 {
        encode_uint(buf, 0, n as u64);
    } else {
        // CBOR encodes -1 as 0, -2 as 1, etc.
        encode_uint(buf, 1, (-1 - n) as u64);
    }
}

/// Encode an unsigned integer with the given major type, using the
/// smallest valid encoding.
fn encode_uint(buf: &mut Vec<u8>, major: u8, n: u64) {
    let mt = major << 5;
    if n < 24 {
        buf.push(mt | (n as u8));
    } else if n <= 0xff {
        buf.push(mt | 24);
        buf.push(n as u8);
    } else if n <= 0xffff {
        buf.push(mt | 25);
        buf.extend_from_slice(&(n as u16).to_be_bytes());
    } else if n <= 0xffff_ffff {
        buf.push(mt | 26);
        buf.extend_from_slice(&(n as u32).to_be_bytes());
    } else {
        buf.push(mt | 27);
        buf.extend_from_slice(&n.to_be_bytes());
    }
}

/// Encode a byte string (major type 2).
fn encode_bytes(buf: &mut Vec<u8>, bytes: &[u8]) {
    encode_uint(buf, 2, bytes.len() as u64);
    buf.extend_from_slice(bytes);
}

/// Encode a text string (major type 3).
fn encode_text(buf: &mut Vec<u8>, s: &str) {
    encode_uint(buf, 3, s.len() as u64);
    buf.extend_from_slice(s.as_bytes());
}

/// Encode a map canonically (major type 5).
///
/// Keys are sorted by their encoded byte comparison.
fn encode_map_canonical(buf: &mut Vec<u8>, entries: &[(Value, Value)]) {
    let mut key_value_pairs: Vec<(Vec<u8>, &Value)> = entries
        .iter()
        .map(|(k, v)| {
            let mut key_buf = Vec::new();
            encode_value_to(&mut key_buf, k);
            (key_buf, v)
        })
        .collect();

    key_value_pairs.sort_by(|a, b| a.0.cmp(&b.0));

    encode_uint(buf, 5, key_value_pairs.len() as u64);
    for (key_bytes, value) in key_value_pairs {
        buf.extend_from_slice(&key_bytes);
        encode_value_to(buf, value);
    }
}
