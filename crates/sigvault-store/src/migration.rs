//! Database schema migrations for SQLite.
//!
//! A simple versioned migration system: each migration transforms the
//! schema from version N to N+1, applied in order inside a transaction
//! before the store accepts any traffic.

use rusqlite::Connection;

use crate::error::{Result, StoreError};

/// Current schema version.
pub const CURRENT_VERSION: u32 = 1;

/// Initialize or migrate the database schema.
///
/// Idempotent: safe to call multiple times.
pub fn migrate(conn: &mut Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS schema_migrations (
            version INTEGER PRIMARY KEY,
            applied_at TEXT NOT NULL
        )",
        [],
    )?;

    let current: u32 = conn
        .query_row(
            "SELECT COALESCE(MAX(version), 0) FROM schema_migrations",
            [],
            |row| row.get(0),
        )
        .unwrap_or(0);

    if current < CURRENT_VERSION {
        let tx = conn.transaction()?;

        for version in (current + 1)..=CURRENT_VERSION {
            apply_migration(&tx, version)?;
            tx.execute(
                "INSERT INTO schema_migrations (version, applied_at)
                 VALUES (?1, datetime('now'))",
                rusqlite::params![version],
            )?;
        }

        tx.commit()?;
    }

    Ok(())
}

fn apply_migration(conn: &Connection, version: u32) -> Result<()> {
    match version {
        1 => apply_v1(conn),
        _ => Err(StoreError::Migration(format!(
            "unknown migration version: {version}"
        ))),
    }
}

/// Migration v1: the signed-record table.
fn apply_v1(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        -- One row per record id. created_at is stored as the original
        -- RFC 3339 string, never a native timestamp, so the exact
        -- signed bytes can always be reconstructed.
        CREATE TABLE signed_records (
            record_id    TEXT PRIMARY KEY,   -- hyphenated lowercase UUID
            content      BLOB NOT NULL,      -- raw payload bytes
            content_hash TEXT NOT NULL,      -- lowercase hex SHA-256
            created_at   TEXT NOT NULL,      -- RFC 3339, second precision
            signature    BLOB NOT NULL       -- raw RSASSA-PSS signature
        );

        CREATE INDEX idx_signed_records_hash ON signed_records(content_hash);
        CREATE INDEX idx_signed_records_created ON signed_records(created_at);
        "#,
    )?;

    Ok(())
}
