use std::borrow::Cow;
use std::collections::HashMap;

use crate::unicode::{normalize_word, Locale};

use super::{DictError, Dictionary, DictionaryEntry};

/// Prefixes up to this many letters get a precomputed bucket. Short prefixes
/// fan out the most, so they are the ones worth paying memory for.
pub(super) const BUCKET_DEPTH: usize = 2;

/// Immutable system dictionary ranked by corpus frequency.
///
/// Entry ids are frequency ranks: `entries[0]` is the most frequent word. Both
/// the sorted key index and the prefix buckets store ids, so any id list put
/// back into ascending order is also in descending-frequency order.
pub struct FrequencyDictionary {
    locale: Locale,
    entries: Vec<DictionaryEntry>,
    /// `(normalized key, id)` sorted by key, then id.
    index: Vec<(String, u32)>,
    buckets: HashMap<String, Vec<u32>>,
}

impl FrequencyDictionary {
    /// Build from `(word, frequency)` pairs. A word listed twice keeps its
    /// highest frequency.
    pub fn from_words(words: impl IntoIterator<Item = (String, u32)>, locale: Locale) -> Self {
        let mut best: HashMap<String, u32> = HashMap::new();
        for (word, frequency) in words {
            best.entry(word)
                .and_modify(|f| *f = (*f).max(frequency))
                .or_insert(frequency);
        }

        let mut entries: Vec<DictionaryEntry> = best
            .into_iter()
            .map(|(word, frequency)| DictionaryEntry::system(word, frequency))
            .collect();
        entries.sort_by(|a, b| b.frequency.cmp(&a.frequency).then_with(|| a.word.cmp(&b.word)));

        let mut index: Vec<(String, u32)> = entries
            .iter()
            .enumerate()
            .map(|(id, e)| (normalize_word(&e.word, &locale), id as u32))
            .collect();

        let mut buckets: HashMap<String, Vec<u32>> = HashMap::new();
        for (key, id) in &index {
            let mut end = 0;
            for c in key.chars().take(BUCKET_DEPTH) {
                end += c.len_utf8();
                buckets.entry(key[..end].to_string()).or_default().push(*id);
            }
        }

        index.sort();

        Self {
            locale,
            entries,
            index,
            buckets,
        }
    }

    /// Parse a tab-separated word list: `word<TAB>frequency` per line.
    ///
    /// Blank lines and lines starting with `#` are skipped. A line without a
    /// frequency column counts as frequency 1.
    pub fn from_word_list(text: &str, locale: Locale) -> Result<Self, DictError> {
        let mut words = Vec::new();
        for (lineno, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let mut fields = line.split('\t');
            let word = fields.next().unwrap_or_default().trim();
            if word.is_empty() {
                return Err(DictError::Parse {
                    line: lineno + 1,
                    reason: "empty word".to_string(),
                });
            }
            let frequency = match fields.next().map(str::trim) {
                None | Some("") => 1,
                Some(raw) => raw.parse::<u32>().map_err(|e| DictError::Parse {
                    line: lineno + 1,
                    reason: format!("invalid frequency {raw:?}: {e}"),
                })?,
            };
            words.push((word.to_string(), frequency));
        }
        Ok(Self::from_words(words, locale))
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries by descending frequency.
    pub fn iter(&self) -> impl Iterator<Item = &DictionaryEntry> {
        self.entries.iter()
    }

    /// Returns (entry_count, bucket_count).
    pub fn stats(&self) -> (usize, usize) {
        (self.entries.len(), self.buckets.len())
    }

    fn ids_for_prefix(&self, prefix: &str) -> Cow<'_, [u32]> {
        let len = prefix.chars().count();
        if (1..=BUCKET_DEPTH).contains(&len) {
            return match self.buckets.get(prefix) {
                Some(ids) => Cow::Borrowed(ids.as_slice()),
                None => Cow::Borrowed(&[][..]),
            };
        }

        let start = self.index.partition_point(|(k, _)| k.as_str() < prefix);
        let mut ids: Vec<u32> = self.index[start..]
            .iter()
            .take_while(|(k, _)| k.starts_with(prefix))
            .map(|&(_, id)| id)
            .collect();
        ids.sort_unstable();
        Cow::Owned(ids)
    }
}

impl Dictionary for FrequencyDictionary {
    fn is_ready(&self) -> bool {
        true
    }

    fn lookup_by_prefix(&self, prefix: &str) -> Vec<DictionaryEntry> {
        self.lookup_by_prefix_limited(prefix, usize::MAX)
    }

    fn lookup_by_prefix_limited(&self, prefix: &str, max_results: usize) -> Vec<DictionaryEntry> {
        self.ids_for_prefix(prefix)
            .iter()
            .take(max_results)
            .map(|&id| self.entries[id as usize].clone())
            .collect()
    }

    fn contains(&self, normalized: &str) -> bool {
        let start = self.index.partition_point(|(k, _)| k.as_str() < normalized);
        self.index
            .get(start)
            .is_some_and(|(k, _)| k.as_str() == normalized)
    }
}
