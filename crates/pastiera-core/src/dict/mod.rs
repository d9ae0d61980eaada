//! Dictionary repository contract and implementations.
//!
//! `FrequencyDictionary` is the immutable system word list with precomputed
//! prefix buckets. `LoadableDictionary` gates lookups until a dictionary has
//! been installed, and `CompositeDictionary` merges system and user layers.

mod composite;
mod entry;
mod frequency;
mod frequency_io;
mod loadable;
#[cfg(test)]
mod tests;

pub use composite::CompositeDictionary;
pub use entry::{DictionaryEntry, EntrySource};
pub use frequency::FrequencyDictionary;
pub use loadable::LoadableDictionary;

use std::io;

/// Error type for dictionary loading, parsing and binary I/O.
#[derive(Debug, thiserror::Error)]
pub enum DictError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid header (too short)")]
    InvalidHeader,

    #[error("invalid magic bytes (expected PSDX)")]
    InvalidMagic,

    #[error("unsupported version: {0}")]
    UnsupportedVersion(u8),

    #[error("checksum mismatch: expected {expected:08x}, got {actual:08x}")]
    ChecksumMismatch { expected: u32, actual: u32 },

    #[error("serialization error: {0}")]
    Serialize(bincode::Error),

    #[error("deserialization error: {0}")]
    Deserialize(bincode::Error),

    #[error("parse error at line {line}: {reason}")]
    Parse { line: usize, reason: String },
}

/// Prefix-lookup capability consumed by the suggestion engine.
///
/// Keys are normalized with [`crate::unicode::normalize_word`]; callers pass
/// an already normalized prefix.
pub trait Dictionary: Send + Sync {
    /// Whether the dictionary has finished loading. Lookups on a dictionary
    /// that is not ready return nothing.
    fn is_ready(&self) -> bool;

    /// Entries whose normalized form starts with `prefix`, by descending
    /// frequency.
    fn lookup_by_prefix(&self, prefix: &str) -> Vec<DictionaryEntry>;

    /// The first `max_results` entries of [`Dictionary::lookup_by_prefix`].
    fn lookup_by_prefix_limited(&self, prefix: &str, max_results: usize) -> Vec<DictionaryEntry> {
        let mut entries = self.lookup_by_prefix(prefix);
        entries.truncate(max_results);
        entries
    }

    /// Whether some entry normalizes exactly to `normalized`.
    fn contains(&self, normalized: &str) -> bool;
}
