//! User dictionary with runtime word registration.
//!
//! HashMap-based dictionary that implements `Dictionary` trait for integration
//! with `CompositeDictionary`. Uses `RwLock` for interior mutability so that
//! `register`/`unregister` can be called while an engine holds a shared
//! reference. Entries are always tagged `EntrySource::User`.


use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use crate::dict::{Dictionary, DictionaryEntry};
use crate::settings::Settings;
use crate::unicode::{normalize_word, Locale};

const MAGIC: &[u8; 4] = b"PSUW";
const VERSION: u8 = 1;

/// Frequency given to words registered without an explicit value.
pub const DEFAULT_USER_FREQUENCY: u32 = 100;

pub struct UserDictionary {
    locale: Locale,
    default_frequency: u32,
    entries: RwLock<HashMap<String, u32>>,
}

fn poisoned() -> io::Error {
    io::Error::other("user dictionary lock poisoned")
}

impl UserDictionary {
    pub fn new() -> Self {
        Self {
            locale: Locale::root(),
            default_frequency: DEFAULT_USER_FREQUENCY,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Locale used to normalize words for prefix lookups.
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn with_default_frequency(mut self, frequency: u32) -> Self {
        self.default_frequency = frequency;
        self
    }

    /// Apply `[user_dict]` and the suggestion locale from settings.
    pub fn configured(self, settings: &Settings) -> Self {
        self.with_locale(Locale::new(&settings.suggestions.locale))
            .with_default_frequency(settings.user_dict.default_frequency)
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Register a word with the default frequency.
    /// Returns `true` if newly added, `false` if it already exists.
    pub fn register(&self, word: &str) -> bool {
        self.register_with_frequency(word, self.default_frequency)
    }

    /// Register a word. An existing word keeps the higher of the two
    /// frequencies and reports `false`. Blank words are rejected.
    pub fn register_with_frequency(&self, word: &str, frequency: u32) -> bool {
        let word = word.trim();
        if word.is_empty() {
            return false;
        }
        let Ok(mut map) = self.entries.write() else {
            return false;
        };
        match map.get_mut(word) {
            Some(existing) => {
                *existing = (*existing).max(frequency);
                false
            }
            None => {
                map.insert(word.to_string(), frequency);
                true
            }
        }
    }

    /// Unregister a word. Returns `true` if removed, `false` if not found.
    pub fn unregister(&self, word: &str) -> bool {
        self.entries
            .write()
            .map(|mut map| map.remove(word.trim()).is_some())
            .unwrap_or(false)
    }

    /// List all entries as (word, frequency) pairs, sorted by word.
    pub fn list(&self) -> Vec<(String, u32)> {
        let Ok(map) = self.entries.read() else {
            return Vec::new();
        };
        let mut result: Vec<(String, u32)> = map.iter().map(|(w, &f)| (w.clone(), f)).collect();
        result.sort();
        result
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Serialize to bytes (PSUW format).
    pub fn to_bytes(&self) -> Result<Vec<u8>, io::Error> {
        let records: Vec<UserWordRecord> = self
            .entries
            .read()
            .map_err(|_| poisoned())?
            .iter()
            .map(|(word, &frequency)| UserWordRecord {
                word: word.clone(),
                frequency,
            })
            .collect();

        let body = bincode::serialize(&records).map_err(io::Error::other)?;
        let mut buf = Vec::with_capacity(5 + body.len());
        buf.extend_from_slice(MAGIC);
        buf.push(VERSION);
        buf.extend_from_slice(&body);
        Ok(buf)
    }

    /// Deserialize from bytes (PSUW format).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, io::Error> {
        if bytes.len() < 5 {
            return Err(io::Error::new(io::ErrorKind::InvalidData, "too short"));
        }
        if &bytes[0..4] != MAGIC {
            return Err(io::Error::new(io::ErrorKind::InvalidData, "bad magic"));
        }
        if bytes[4] != VERSION {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "unsupported version",
            ));
        }
        let records: Vec<UserWordRecord> = bincode::deserialize(&bytes[5..])
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        let mut map: HashMap<String, u32> = HashMap::new();
        for rec in records {
            let f = map.entry(rec.word).or_insert(rec.frequency);
            *f = (*f).max(rec.frequency);
        }
        Ok(Self {
            entries: RwLock::new(map),
            ..Self::new()
        })
    }

    /// Atomic write: write to .tmp then rename.
    pub fn save(&self, path: &Path) -> Result<(), io::Error> {
        let bytes = self.to_bytes()?;
        let tmp = path.with_extension("tmp");
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&tmp, &bytes)?;
        fs::rename(&tmp, path)?;
        Ok(())
    }

    /// Open from file, returning empty UserDictionary if file doesn't exist.
    pub fn open(path: &Path) -> Result<Self, io::Error> {
        match fs::read(path) {
            Ok(bytes) => Self::from_bytes(&bytes),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::new()),
            Err(e) => Err(e),
        }
    }
}

impl Default for UserDictionary {
    fn default() -> Self {
        Self::new()
    }
}

impl Dictionary for UserDictionary {
    fn is_ready(&self) -> bool {
        true
    }

    fn lookup_by_prefix(&self, prefix: &str) -> Vec<DictionaryEntry> {
        let Ok(map) = self.entries.read() else {
            return Vec::new();
        };
        let mut results: Vec<DictionaryEntry> = map
            .iter()
            .filter(|(word, _)| normalize_word(word, &self.locale).starts_with(prefix))
            .map(|(word, &frequency)| DictionaryEntry::user(word.as_str(), frequency))
            .collect();
        results.sort_by(|a, b| b.frequency.cmp(&a.frequency).then_with(|| a.word.cmp(&b.word)));
        results
    }

    fn contains(&self, normalized: &str) -> bool {
        self.entries
            .read()
            .map(|map| {
                map.keys()
                    .any(|word| normalize_word(word, &self.locale) == normalized)
            })
            .unwrap_or(false)
    }
}

/// Flat serialization record. Source is always `User`, restored on load.
#[derive(Serialize, Deserialize)]
struct UserWordRecord {
    word: String,
    frequency: u32,
}
