//! Autocorrect suggestion engine.
//!
//! `SuggestionEngine::suggest` normalizes the typed word, pulls the prefix
//! bucket from a [`Dictionary`], scores every candidate by bounded edit
//! distance, frequency and source, and keeps the best `limit` results.

mod cache;
mod distance;
mod normalize;
#[cfg(test)]
mod tests;
mod top_k;

pub use distance::bounded_levenshtein;
pub use top_k::rank_order;

use std::sync::Arc;

use tracing::{debug, debug_span};

use crate::dict::{Dictionary, EntrySource};
use crate::settings::Settings;
use crate::unicode::Locale;

use distance::bounded_levenshtein_chars;
use normalize::Normalizer;
use top_k::TopK;

/// A ranked correction or completion for the typed word.
#[derive(Debug, Clone, PartialEq)]
pub struct SuggestionResult {
    pub candidate: String,
    pub distance: usize,
    pub score: f64,
    pub source: EntrySource,
}

/// Scoring constants and engine limits.
#[derive(Debug, Clone)]
pub struct SuggestionConfig {
    pub limit: usize,
    pub accent_matching: bool,
    pub max_distance: usize,
    pub frequency_divisor: f64,
    pub user_boost: f64,
    /// `prefix_caps[i]` bounds the candidates scored for an input of `i + 1`
    /// letters. Longer inputs are uncapped.
    pub prefix_caps: Vec<usize>,
    pub cache_capacity: usize,
    pub locale: Locale,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        Self {
            limit: 3,
            accent_matching: true,
            max_distance: 2,
            frequency_divisor: 10_000.0,
            user_boost: 2.0,
            prefix_caps: vec![600, 300],
            cache_capacity: 4096,
            locale: Locale::new("it"),
        }
    }
}

impl SuggestionConfig {
    pub fn from_settings(settings: &Settings) -> Self {
        let s = &settings.suggestions;
        Self {
            limit: s.limit,
            accent_matching: s.accent_matching,
            max_distance: s.max_distance,
            frequency_divisor: s.frequency_divisor,
            user_boost: s.user_boost,
            prefix_caps: s.prefix_caps.clone(),
            cache_capacity: s.cache_capacity,
            locale: Locale::new(&s.locale),
        }
    }

    fn prefix_cap(&self, input_len: usize) -> Option<usize> {
        input_len
            .checked_sub(1)
            .and_then(|i| self.prefix_caps.get(i))
            .copied()
    }

    fn source_boost(&self, source: EntrySource) -> f64 {
        match source {
            EntrySource::User => self.user_boost,
            EntrySource::System => 1.0,
        }
    }
}

pub struct SuggestionEngine {
    dict: Arc<dyn Dictionary>,
    config: SuggestionConfig,
    normalizer: Normalizer,
    // Scratch buffers reused across candidates.
    row: Vec<usize>,
    candidate_chars: Vec<char>,
}

impl SuggestionEngine {
    pub fn new(dict: Arc<dyn Dictionary>, config: SuggestionConfig) -> Self {
        let normalizer = Normalizer::new(config.locale.clone(), config.cache_capacity);
        Self {
            dict,
            config,
            normalizer,
            row: Vec::new(),
            candidate_chars: Vec::new(),
        }
    }

    pub fn config(&self) -> &SuggestionConfig {
        &self.config
    }

    pub fn locale(&self) -> &Locale {
        self.normalizer.locale()
    }

    pub fn dictionary(&self) -> &Arc<dyn Dictionary> {
        &self.dict
    }

    /// Swap the backing dictionary. Cached word forms stay valid because
    /// they depend only on the locale.
    pub fn set_dictionary(&mut self, dict: Arc<dyn Dictionary>) {
        self.dict = dict;
    }

    /// Number of memoized word forms currently held.
    pub fn cached_forms(&self) -> usize {
        self.normalizer.cached_forms()
    }

    pub fn clear_caches(&mut self) {
        self.normalizer.clear();
    }

    /// `suggest` with the configured limit and accent matching.
    pub fn suggest_default(&mut self, current_word: &str) -> Vec<SuggestionResult> {
        self.suggest(
            current_word,
            self.config.limit,
            self.config.accent_matching,
        )
    }

    pub fn suggest(
        &mut self,
        current_word: &str,
        limit: usize,
        include_accent_matching: bool,
    ) -> Vec<SuggestionResult> {
        let _span = debug_span!("suggest", word = current_word, limit).entered();
        if limit == 0 || current_word.trim().is_empty() || !self.dict.is_ready() {
            return Vec::new();
        }

        let key = self.normalizer.lookup_key(current_word);
        if key.is_empty() {
            return Vec::new();
        }
        let key_chars: Vec<char> = key.chars().collect();

        let candidates = match self.config.prefix_cap(key_chars.len()) {
            Some(cap) => self.dict.lookup_by_prefix_limited(&key, cap),
            None => self.dict.lookup_by_prefix(&key),
        };
        let scored = candidates.len();

        let max = self.config.max_distance;
        let mut top = TopK::new(limit);
        for entry in candidates {
            let normalized = self.normalizer.normalize(&entry.word);

            self.candidate_chars.clear();
            self.candidate_chars.extend(normalized.chars());
            let primary = distance_or_prefix(&key_chars, &self.candidate_chars, max, &mut self.row);

            let secondary = if include_accent_matching {
                let stripped = self.normalizer.strip(&normalized);
                self.candidate_chars.clear();
                self.candidate_chars.extend(stripped.chars());
                distance_or_prefix(&key_chars, &self.candidate_chars, max, &mut self.row)
            } else {
                None
            };

            let distance = match (primary, secondary) {
                (Some(p), Some(s)) => p.min(s),
                (Some(d), None) | (None, Some(d)) => d,
                (None, None) => continue,
            };

            let score = (1.0 / (1.0 + distance as f64)
                + f64::from(entry.frequency) / self.config.frequency_divisor)
                * self.config.source_boost(entry.source);
            top.offer(SuggestionResult {
                candidate: entry.word,
                distance,
                score,
                source: entry.source,
            });
        }

        let results = top.into_vec();
        debug!(
            normalized = key.as_str(),
            scored,
            result_count = results.len()
        );
        results
    }
}

/// 0 for a prefix completion, otherwise the bounded edit distance.
fn distance_or_prefix(
    input: &[char],
    candidate: &[char],
    max_distance: usize,
    row: &mut Vec<usize>,
) -> Option<usize> {
    if candidate.starts_with(input) {
        Some(0)
    } else {
        bounded_levenshtein_chars(input, candidate, max_distance, row)
    }
}
