use std::fs::{self, File};
use std::path::Path;

use memmap2::Mmap;
use serde::{Deserialize, Serialize};

use crate::unicode::Locale;

use super::{DictError, FrequencyDictionary};

pub(super) const MAGIC: &[u8; 4] = b"PSDX";
pub(super) const VERSION: u8 = 1;
// magic + version + reserved(3) + crc32 + body_len
pub(super) const HEADER_SIZE: usize = 4 + 1 + 3 + 4 + 4;

/// Only the word list is persisted; the key index and buckets are rebuilt on
/// load so the file format does not depend on normalization details.
#[derive(Serialize, Deserialize)]
struct DictionaryBody {
    locale: String,
    words: Vec<(String, u32)>,
}

impl FrequencyDictionary {
    pub fn to_bytes(&self) -> Result<Vec<u8>, DictError> {
        let body = DictionaryBody {
            locale: self.locale().language().to_string(),
            words: self
                .iter()
                .map(|e| (e.word.clone(), e.frequency))
                .collect(),
        };
        let body = bincode::serialize(&body).map_err(DictError::Serialize)?;

        let body_len: u32 = body.len().try_into().map_err(|_| DictError::Parse {
            line: 0,
            reason: "dictionary body exceeds u32::MAX".to_string(),
        })?;
        let checksum = crc32fast::hash(&body);

        let mut buf = Vec::with_capacity(HEADER_SIZE + body.len());
        buf.extend_from_slice(MAGIC);
        buf.push(VERSION);
        buf.extend_from_slice(&[0u8; 3]); // reserved
        buf.extend_from_slice(&checksum.to_le_bytes());
        buf.extend_from_slice(&body_len.to_le_bytes());
        buf.extend_from_slice(&body);
        Ok(buf)
    }

    pub fn from_bytes(data: &[u8]) -> Result<Self, DictError> {
        if data.len() < 5 {
            return Err(DictError::InvalidHeader);
        }
        if &data[..4] != MAGIC {
            return Err(DictError::InvalidMagic);
        }
        if data[4] != VERSION {
            return Err(DictError::UnsupportedVersion(data[4]));
        }
        if data.len() < HEADER_SIZE {
            return Err(DictError::InvalidHeader);
        }

        let expected = read_u32(&data[8..12]);
        let body_len = read_u32(&data[12..16]) as usize;
        let body_end = HEADER_SIZE
            .checked_add(body_len)
            .ok_or(DictError::InvalidHeader)?;
        let body = data
            .get(HEADER_SIZE..body_end)
            .ok_or(DictError::InvalidHeader)?;

        let actual = crc32fast::hash(body);
        if actual != expected {
            return Err(DictError::ChecksumMismatch { expected, actual });
        }

        let body: DictionaryBody = bincode::deserialize(body).map_err(DictError::Deserialize)?;
        Ok(Self::from_words(body.words, Locale::new(&body.locale)))
    }

    /// Open a dictionary file, using mmap to avoid doubling peak memory.
    pub fn open(path: &Path) -> Result<Self, DictError> {
        let file = File::open(path)?;
        // SAFETY: The file is opened read-only and the mapping is immutable.
        // The Mmap is dropped after deserialization completes below.
        let mmap = unsafe { Mmap::map(&file)? };
        Self::from_bytes(&mmap)
    }

    pub fn save(&self, path: &Path) -> Result<(), DictError> {
        Ok(fs::write(path, self.to_bytes()?)?)
    }
}

fn read_u32(bytes: &[u8]) -> u32 {
    let mut word = [0u8; 4];
    word.copy_from_slice(bytes);
    u32::from_le_bytes(word)
}
