use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::cid::{derive_cid, HASH_ALGORITHM, PROTOCOL};

/// One registry entry for a canonical license.
///
/// Field names match the persisted JSON document, so a registry written by
/// one implementation of this format loads in another.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegistryRecord {
    /// Content identifier derived from the canonical text's bytes.
    pub cid: String,
    /// Addressing-scheme tag (constant, see [`crate::cid::PROTOCOL`]).
    pub protocol: String,
    /// Hash algorithm tag (constant, see [`crate::cid::HASH_ALGORITHM`]).
    pub hash_algorithm: String,
    /// Byte length of the canonical text at registration time.
    pub size: u64,
    /// Creation time of the record.
    pub timestamp: DateTime<Utc>,
}

impl RegistryRecord {
    /// Build a record for the given canonical text, timestamped now.
    pub fn for_content(content: &[u8]) -> Self {
        Self {
            cid: derive_cid(content),
            protocol: PROTOCOL.to_string(),
            hash_algorithm: HASH_ALGORITHM.to_string(),
            size: content.len() as u64,
            timestamp: Utc::now(),
        }
    }
}

/// Mapping from canonical license name to its registry record.
///
/// `IndexMap` keeps insertion order, which fixes both the layout of the
/// persisted document and the resolver's first-match scan order.
pub type Registry = IndexMap<String, RegistryRecord>;
