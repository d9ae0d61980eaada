use serde::{Deserialize, Serialize};

/// Where an entry came from. User words get a scoring boost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntrySource {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryEntry {
    pub word: String,
    pub frequency: u32,
    pub source: EntrySource,
}

impl DictionaryEntry {
    pub fn system(word: impl Into<String>, frequency: u32) -> Self {
        Self {
            word: word.into(),
            frequency,
            source: EntrySource::System,
        }
    }

    pub fn user(word: impl Into<String>, frequency: u32) -> Self {
        Self {
            word: word.into(),
            frequency,
            source: EntrySource::User,
        }
    }
}
