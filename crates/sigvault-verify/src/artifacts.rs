//! The offline artifact set: the three files a client persists after
//! retrieval, consumed later by the verifier with no service access.
//!
//! For a record `<id>` in a directory:
//! - `<id>.txt`       - raw content bytes, exactly as stored
//! - `<id>.sig`       - the signature, base64-encoded
//! - `<id>.meta.json` - `{"uuid", "hash", "timestamp"}`
//!
//! The file layout is an interoperability contract shared with every
//! other implementation of the protocol.

use std::fs;
use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use sigvault_core::SignedRecord;

use crate::error::{Result, VerifyError};

/// The signed metadata fields, as serialized to `<id>.meta.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordMetadata {
    pub uuid: String,
    pub hash: String,
    pub timestamp: String,
}

/// Paths of the three artifact files for one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub content: PathBuf,
    pub signature: PathBuf,
    pub metadata: PathBuf,
}

impl ArtifactPaths {
    /// Compute the artifact paths for a record id in a directory.
    pub fn for_id(dir: &Path, id: &str) -> Self {
        Self {
            content: dir.join(format!("{id}.txt")),
            signature: dir.join(format!("{id}.sig")),
            metadata: dir.join(format!("{id}.meta.json")),
        }
    }
}

/// Write the artifact set for a retrieved record.
///
/// If any write fails, files already created by this call are removed
/// so a failed download never leaves a partial artifact set behind.
pub fn write_artifacts(dir: &Path, signed: &SignedRecord) -> Result<ArtifactPaths> {
    let paths = ArtifactPaths::for_id(dir, &signed.record.id.to_string());

    let meta = RecordMetadata {
        uuid: signed.record.id.to_string(),
        hash: signed.record.content_hash.clone(),
        timestamp: signed.record.created_at.clone(),
    };
    let meta_json = serde_json::to_vec_pretty(&meta)?;
    let sig_b64 = BASE64.encode(&signed.signature);

    let result = (|| -> Result<()> {
        fs::write(&paths.content, &signed.record.content)?;
        fs::write(&paths.signature, sig_b64.as_bytes())?;
        fs::write(&paths.metadata, &meta_json)?;
        Ok(())
    })();

    if let Err(e) = result {
        for path in [&paths.content, &paths.signature, &paths.metadata] {
            let _ = fs::remove_file(path);
        }
        return Err(e);
    }

    Ok(paths)
}

/// Read the artifact set back: raw content, decoded signature bytes,
/// and parsed metadata.
pub fn read_artifacts(dir: &Path, id: &str) -> Result<(Vec<u8>, Vec<u8>, RecordMetadata)> {
    let paths = ArtifactPaths::for_id(dir, id);

    let content = read_file(&paths.content)?;
    let sig_b64 = read_file(&paths.signature)?;
    let meta_bytes = read_file(&paths.metadata)?;

    let signature = BASE64.decode(String::from_utf8_lossy(&sig_b64).trim())?;
    let metadata: RecordMetadata = serde_json::from_slice(&meta_bytes)?;

    Ok((content, signature, metadata))
}

fn read_file(path: &Path) -> Result<Vec<u8>> {
    match fs::read(path) {
        Ok(bytes) => Ok(bytes),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(VerifyError::MissingArtifact(path.to_path_buf()))
        }
        Err(e) => Err(e.into()),
    }
}
