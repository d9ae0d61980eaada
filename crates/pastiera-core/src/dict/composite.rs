use std::collections::HashMap;
use std::sync::Arc;

use super::{Dictionary, DictionaryEntry, EntrySource};

/// A dictionary that merges results from multiple layers.
///
/// The composite is ready only once every layer is. Duplicate words across
/// layers are deduplicated, keeping the highest frequency; on a tie the user
/// entry wins so it still gets the user boost.
pub struct CompositeDictionary {
    layers: Vec<Arc<dyn Dictionary>>,
}

impl CompositeDictionary {
    pub fn new(layers: Vec<Arc<dyn Dictionary>>) -> Self {
        Self { layers }
    }
}

fn wins_over(candidate: &DictionaryEntry, existing: &DictionaryEntry) -> bool {
    candidate.frequency > existing.frequency
        || (candidate.frequency == existing.frequency
            && candidate.source == EntrySource::User
            && existing.source == EntrySource::System)
}

/// Deduplicate entries by word and order by descending frequency.
fn dedup_entries(entries: Vec<DictionaryEntry>) -> Vec<DictionaryEntry> {
    let mut best: HashMap<String, DictionaryEntry> = HashMap::new();
    for e in entries {
        match best.get_mut(&e.word) {
            Some(existing) => {
                if wins_over(&e, existing) {
                    *existing = e;
                }
            }
            None => {
                best.insert(e.word.clone(), e);
            }
        }
    }
    let mut result: Vec<DictionaryEntry> = best.into_values().collect();
    result.sort_by(|a, b| b.frequency.cmp(&a.frequency).then_with(|| a.word.cmp(&b.word)));
    result
}

impl Dictionary for CompositeDictionary {
    fn is_ready(&self) -> bool {
        self.layers.iter().all(|l| l.is_ready())
    }

    fn lookup_by_prefix(&self, prefix: &str) -> Vec<DictionaryEntry> {
        if !self.is_ready() {
            return Vec::new();
        }
        let mut all = Vec::new();
        for layer in &self.layers {
            all.extend(layer.lookup_by_prefix(prefix));
        }
        dedup_entries(all)
    }

    fn lookup_by_prefix_limited(&self, prefix: &str, max_results: usize) -> Vec<DictionaryEntry> {
        if !self.is_ready() {
            return Vec::new();
        }
        let mut all = Vec::new();
        for layer in &self.layers {
            all.extend(layer.lookup_by_prefix_limited(prefix, max_results));
        }
        let mut merged = dedup_entries(all);
        merged.truncate(max_results);
        merged
    }

    fn contains(&self, normalized: &str) -> bool {
        self.is_ready() && self.layers.iter().any(|l| l.contains(normalized))
    }
}
