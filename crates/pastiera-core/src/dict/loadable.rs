use std::sync::{Arc, RwLock};

use super::{Dictionary, DictionaryEntry};

/// A slot that reports not-ready until a dictionary is installed.
///
/// Lets the engine be constructed before the system word list has finished
/// loading on a background thread. A poisoned lock reads as not ready.
#[derive(Default)]
pub struct LoadableDictionary {
    slot: RwLock<Option<Arc<dyn Dictionary>>>,
}

impl LoadableDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn install(&self, dict: Arc<dyn Dictionary>) {
        if let Ok(mut slot) = self.slot.write() {
            *slot = Some(dict);
        }
    }

    pub fn clear(&self) {
        if let Ok(mut slot) = self.slot.write() {
            *slot = None;
        }
    }

    pub fn current(&self) -> Option<Arc<dyn Dictionary>> {
        self.slot.read().ok().and_then(|slot| slot.clone())
    }
}

impl Dictionary for LoadableDictionary {
    fn is_ready(&self) -> bool {
        self.current().is_some_and(|d| d.is_ready())
    }

    fn lookup_by_prefix(&self, prefix: &str) -> Vec<DictionaryEntry> {
        match self.current() {
            Some(d) if d.is_ready() => d.lookup_by_prefix(prefix),
            _ => Vec::new(),
        }
    }

    fn lookup_by_prefix_limited(&self, prefix: &str, max_results: usize) -> Vec<DictionaryEntry> {
        match self.current() {
            Some(d) if d.is_ready() => d.lookup_by_prefix_limited(prefix, max_results),
            _ => Vec::new(),
        }
    }

    fn contains(&self, normalized: &str) -> bool {
        self.current()
            .is_some_and(|d| d.is_ready() && d.contains(normalized))
    }
}
