//! Versioned binary serialization and legacy-format migration.
//!
//! Layout: a 4-byte little-endian version tag followed by a `bincode`
//! payload. The tag is read before anything else and decoding dispatches
//! on it once, into a tagged payload union:
//!
//! - version 2 (current): the full document enumeration, in insertion
//!   order, sufficient to rebuild store and reverse index exactly.
//! - version 1 (legacy): the old bigram/BM25 engine state. Only the
//!   embedded (name, aliases) pairs survive migration; the statistical
//!   postings and the k1/b ranking parameters are discarded because the
//!   current engine does not rank by frequency.
//!
//! Migration is one-directional; there is no downgrade path.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Current serialization format version.
pub const FORMAT_VERSION: u32 = 2;

/// Legacy bigram/BM25 format version.
pub const LEGACY_VERSION: u32 = 1;

const VERSION_TAG_LEN: usize = 4;

/// One serialized document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DumpDoc {
    /// Document id (the name).
    pub id: String,
    /// Alias list in stored order.
    pub aliases: Vec<String>,
}

/// Version-2 payload: documents in insertion order.
#[derive(Debug, Serialize, Deserialize)]
struct CurrentPayload {
    docs: Vec<DumpDoc>,
}

/// Version-1 payload as the old engine serialized it.
///
/// `postings` maps bigram tokens to posting lists and `doc_len` carries
/// the per-document token counts used by BM25 length normalization; both
/// exist only so the buffer decodes, and are dropped by [`migrate`].
#[derive(Debug, Deserialize)]
#[cfg_attr(test, derive(Serialize))]
pub struct LegacyPayload {
    /// Bigram token to document-id postings.
    pub postings: HashMap<String, Vec<String>>,
    /// Document id to token count.
    pub doc_len: HashMap<String, usize>,
    /// The embedded (name, aliases) pairs; the only part migration keeps.
    pub doc_aliases: HashMap<String, Vec<String>>,
    /// Document count recorded by the old engine.
    pub n_docs: usize,
    /// BM25 term-frequency saturation parameter.
    pub k1: f32,
    /// BM25 length normalization parameter.
    pub b: f32,
}

/// Decoded serialized state, dispatched once on the version tag.
#[derive(Debug)]
pub enum Payload {
    /// Current priority-based format.
    Current(Vec<DumpDoc>),
    /// Legacy ranked-retrieval format awaiting migration.
    Legacy(LegacyPayload),
}

/// Serializes documents into a version-2 buffer.
///
/// # Errors
///
/// Returns [`Error::Serialization`] if encoding fails.
pub fn encode(docs: Vec<DumpDoc>) -> Result<Vec<u8>> {
    let payload = CurrentPayload { docs };
    let mut buf = Vec::with_capacity(VERSION_TAG_LEN + 64);
    buf.extend_from_slice(&FORMAT_VERSION.to_le_bytes());
    bincode::serialize_into(&mut buf, &payload)
        .map_err(|e| Error::Serialization(e.to_string()))?;
    Ok(buf)
}

/// Reads the version tag and decodes the matching payload.
///
/// # Errors
///
/// - [`Error::UnsupportedVersion`] when the tag is neither 1 nor 2.
/// - [`Error::CorruptData`] when the buffer is truncated or the payload
///   does not decode under its declared version.
pub fn decode(bytes: &[u8]) -> Result<Payload> {
    if bytes.len() < VERSION_TAG_LEN {
        return Err(Error::CorruptData(format!(
            "buffer of {} bytes is too short for a version tag",
            bytes.len()
        )));
    }

    let mut tag = [0u8; VERSION_TAG_LEN];
    tag.copy_from_slice(&bytes[..VERSION_TAG_LEN]);
    let version = u32::from_le_bytes(tag);
    let payload = &bytes[VERSION_TAG_LEN..];

    match version {
        FORMAT_VERSION => {
            let current: CurrentPayload = bincode::deserialize(payload)
                .map_err(|e| Error::CorruptData(format!("version 2 payload: {e}")))?;
            Ok(Payload::Current(current.docs))
        }
        LEGACY_VERSION => {
            let legacy: LegacyPayload = bincode::deserialize(payload)
                .map_err(|e| Error::CorruptData(format!("version 1 payload: {e}")))?;
            Ok(Payload::Legacy(legacy))
        }
        other => Err(Error::UnsupportedVersion(other)),
    }
}

/// Pure conversion from the legacy payload to the current document set.
///
/// The legacy maps carried no insertion order, so migration sorts by name
/// to make the rebuilt order deterministic.
#[must_use]
pub fn migrate(legacy: LegacyPayload) -> Vec<DumpDoc> {
    if legacy.doc_aliases.len() != legacy.n_docs {
        tracing::warn!(
            recorded = legacy.n_docs,
            found = legacy.doc_aliases.len(),
            "legacy document count disagrees with embedded documents"
        );
    }

    let mut docs: Vec<DumpDoc> = legacy
        .doc_aliases
        .into_iter()
        .map(|(id, aliases)| DumpDoc { id, aliases })
        .collect();
    docs.sort_by(|a, b| a.id.cmp(&b.id));
    docs
}

#[cfg(test)]
pub(crate) mod testing {
    use super::{LegacyPayload, LEGACY_VERSION};
    use std::collections::HashMap;

    /// Builds a version-1 buffer around the given (name, aliases) pairs,
    /// with plausible bigram statistics filled in.
    pub(crate) fn legacy_fixture(docs: &[(&str, &[&str])]) -> Vec<u8> {
        let mut doc_aliases = HashMap::new();
        let mut doc_len = HashMap::new();
        for (id, aliases) in docs {
            doc_aliases.insert(
                (*id).to_string(),
                aliases.iter().map(ToString::to_string).collect(),
            );
            doc_len.insert((*id).to_string(), id.chars().count());
        }

        let payload = LegacyPayload {
            postings: HashMap::new(),
            doc_len,
            doc_aliases,
            n_docs: docs.len(),
            k1: 1.2,
            b: 0.75,
        };

        let mut buf = LEGACY_VERSION.to_le_bytes().to_vec();
        bincode::serialize_into(&mut buf, &payload).expect("legacy payload encodes");
        buf
    }
}
