use std::sync::Arc;

use crate::unicode::{normalize_word, strip_accents, Locale};

use super::cache::MemoCache;

/// Memoized word forms used for scoring.
///
/// `normalized` is keyed by the raw dictionary word; `stripped` is keyed by
/// the normalized form it was derived from.
pub(crate) struct Normalizer {
    locale: Locale,
    normalized: MemoCache<Arc<str>>,
    stripped: MemoCache<Arc<str>>,
}

impl Normalizer {
    pub fn new(locale: Locale, capacity: usize) -> Self {
        Self {
            locale,
            normalized: MemoCache::new(capacity),
            stripped: MemoCache::new(capacity),
        }
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Same form as [`Self::lookup_key`], memoized per dictionary word.
    pub fn normalize(&mut self, word: &str) -> Arc<str> {
        let locale = &self.locale;
        self.normalized
            .get_or_insert_with(word, |w| Arc::from(normalize_word(w, locale)))
    }

    /// Diacritic-free form of a normalized word.
    pub fn strip(&mut self, normalized: &str) -> Arc<str> {
        self.stripped
            .get_or_insert_with(normalized, |w| Arc::from(strip_accents(w)))
    }

    /// Dictionary lookup key for typed input. Not cached: computed once per
    /// keystroke.
    pub fn lookup_key(&self, word: &str) -> String {
        normalize_word(word, &self.locale)
    }

    pub fn cached_forms(&self) -> usize {
        self.normalized.len() + self.stripped.len()
    }

    pub fn clear(&mut self) {
        self.normalized.clear();
        self.stripped.clear();
    }
}
