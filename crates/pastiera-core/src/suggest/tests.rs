use std::sync::Arc;

use super::*;
use crate::dict::{
    CompositeDictionary, DictionaryEntry, FrequencyDictionary, LoadableDictionary,
};
use crate::user_dict::UserDictionary;

fn italian(words: &[(&str, u32)]) -> Arc<dyn Dictionary> {
    let words = words.iter().map(|&(w, f)| (w.to_string(), f));
    Arc::new(FrequencyDictionary::from_words(words, Locale::new("it")))
}

fn engine(dict: Arc<dyn Dictionary>) -> SuggestionEngine {
    SuggestionEngine::new(dict, SuggestionConfig::default())
}

fn candidates(results: &[SuggestionResult]) -> Vec<&str> {
    results.iter().map(|r| r.candidate.as_str()).collect()
}

/// Returns every entry sharing the first letter of the prefix, the way a
/// coarse bucket index would. Lets the engine see non-prefix candidates.
struct BucketDictionary(Vec<DictionaryEntry>);

impl Dictionary for BucketDictionary {
    fn is_ready(&self) -> bool {
        true
    }

    fn lookup_by_prefix(&self, prefix: &str) -> Vec<DictionaryEntry> {
        let Some(first) = prefix.chars().next() else {
            return Vec::new();
        };
        self.0
            .iter()
            .filter(|e| e.word.starts_with(first))
            .cloned()
            .collect()
    }

    fn contains(&self, normalized: &str) -> bool {
        self.0.iter().any(|e| e.word == normalized)
    }
}

#[test]
fn test_blank_input_is_empty() {
    let mut engine = engine(italian(&[("casa", 100)]));
    assert!(engine.suggest("", 3, true).is_empty());
    assert!(engine.suggest("   ", 3, true).is_empty());
    // No letters after normalization
    assert!(engine.suggest("123", 3, true).is_empty());
    assert!(engine.suggest("?!", 3, true).is_empty());
}

#[test]
fn test_not_ready_dictionary_is_empty() {
    let pending = Arc::new(LoadableDictionary::new());
    let mut engine = engine(pending.clone());
    assert!(engine.suggest("casa", 3, true).is_empty());

    pending.install(italian(&[("casa", 100)]));
    assert_eq!(candidates(&engine.suggest("casa", 3, true)), vec!["casa"]);
}

#[test]
fn test_prefix_matches_ranked_by_frequency() {
    let mut engine = engine(italian(&[("casa", 100), ("cassa", 50)]));
    let results = engine.suggest("cas", 3, true);
    assert_eq!(candidates(&results), vec!["casa", "cassa"]);
    assert!(results.iter().all(|r| r.distance == 0));
    assert!(results[0].score > results[1].score);
    assert!((results[0].score - 1.01).abs() < 1e-9);
    assert!((results[1].score - 1.005).abs() < 1e-9);
}

#[test]
fn test_accent_insensitive_match() {
    let mut engine = engine(italian(&[("perche", 10)]));
    let results = engine.suggest("perché", 3, true);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].candidate, "perche");
    assert_eq!(results[0].distance, 0);
}

#[test]
fn test_accents_never_count_as_edits() {
    let mut engine = engine(italian(&[("perché", 10)]));
    for accents in [false, true] {
        let results = engine.suggest("perche", 3, accents);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].distance, 0);
        assert!((results[0].score - (1.0 + 0.001)).abs() < 1e-9);
    }

    let mut engine = self::engine(italian(&[("perche", 10)]));
    let results = engine.suggest("perché", 3, false);
    assert_eq!(results[0].distance, 0);
}

#[test]
fn test_user_entry_outranks_identical_system_entry() {
    let dict = Arc::new(BucketDictionary(vec![
        DictionaryEntry::system("ciao", 100),
        DictionaryEntry::user("ciao", 100),
    ]));
    let mut engine = engine(dict);
    let results = engine.suggest("cia", 3, true);
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].source, EntrySource::User);
    assert_eq!(results[1].source, EntrySource::System);
    assert!((results[0].score - 2.0 * results[1].score).abs() < 1e-9);
}

#[test]
fn test_user_words_through_composite() {
    let user = Arc::new(UserDictionary::new().with_locale(Locale::new("it")));
    user.register_with_frequency("casatiello", 10);
    let dict = Arc::new(CompositeDictionary::new(vec![
        italian(&[("casa", 900), ("casale", 200)]),
        user.clone() as Arc<dyn Dictionary>,
    ]));
    let mut engine = engine(dict);
    let results = engine.suggest("casa", 3, true);
    // 1.001 * 2.0 beats 1.09 and 1.02
    assert_eq!(candidates(&results), vec!["casatiello", "casa", "casale"]);
    assert_eq!(results[0].source, EntrySource::User);
}

#[test]
fn test_edit_distance_candidates() {
    let dict = Arc::new(BucketDictionary(vec![
        DictionaryEntry::system("casa", 900),
        DictionaryEntry::system("cosa", 800),
        DictionaryEntry::system("cassa", 50),
        DictionaryEntry::system("caserma", 10),
        DictionaryEntry::system("cantiere", 700),
    ]));
    let mut engine = engine(dict);
    let results = engine.suggest("cada", 10, true);
    // casa (1), cosa (2); cassa (2); cantiere and caserma are too far
    assert_eq!(candidates(&results), vec!["casa", "cosa", "cassa"]);
    assert_eq!(results[0].distance, 1);
    assert_eq!(results[1].distance, 2);
    assert_eq!(results[2].distance, 2);
}

#[test]
fn test_distance_dominates_frequency() {
    let dict = Arc::new(BucketDictionary(vec![
        DictionaryEntry::system("case", 9000),
        DictionaryEntry::system("casa", 1),
    ]));
    let mut engine = engine(dict);
    let results = engine.suggest("casa", 3, true);
    assert_eq!(candidates(&results), vec!["casa", "case"]);
}

#[test]
fn test_shorter_candidate_wins_exact_ties() {
    let dict = Arc::new(BucketDictionary(vec![
        DictionaryEntry::system("casetta", 100),
        DictionaryEntry::system("cases", 100),
    ]));
    let mut engine = engine(dict);
    let results = engine.suggest("case", 3, true);
    assert_eq!(candidates(&results), vec!["cases", "casetta"]);
}

#[test]
fn test_limit_respected() {
    let mut engine = engine(italian(&[
        ("casa", 900),
        ("caso", 800),
        ("cassa", 700),
        ("casale", 600),
    ]));
    assert_eq!(engine.suggest("cas", 2, true).len(), 2);
    assert_eq!(engine.suggest("cas", 10, true).len(), 4);
    assert!(engine.suggest("cas", 0, true).is_empty());
    assert_eq!(engine.suggest_default("cas").len(), 3);
}

#[test]
fn test_short_prefix_caps() {
    let words: Vec<(String, u32)> = (0..1000u32)
        .map(|i| (format!("a{}", to_letters(i)), 1000 - i))
        .collect();
    let dict = Arc::new(FrequencyDictionary::from_words(words, Locale::new("it")));
    let mut engine = engine(dict);

    let one = engine.suggest("a", 10_000, true);
    assert_eq!(one.len(), 600);
    // The cap keeps the most frequent entries.
    assert_eq!(one[0].candidate, format!("a{}", to_letters(0)));
    assert!(one.iter().all(|r| r.distance == 0));

    // 351 generated words share the key "ab"; the cap keeps the top 300.
    let two = engine.suggest("ab", 10_000, true);
    assert_eq!(two.len(), 300);
    assert_eq!(two[0].candidate, "ab");
    assert_eq!(two[299].candidate, format!("a{}", to_letters(948)));
    assert!(!candidates(&two).contains(&format!("a{}", to_letters(999)).as_str()));

    let custom = SuggestionConfig {
        prefix_caps: vec![5],
        ..SuggestionConfig::default()
    };
    let mut engine = SuggestionEngine::new(engine.dictionary().clone(), custom);
    assert_eq!(engine.suggest("a", 10_000, true).len(), 5);
    // No cap configured for two letters
    assert_eq!(engine.suggest("ab", 10_000, true).len(), 351);
}

/// Serves only limited lookups, so an uncapped fetch shows up as empty.
struct LimitedOnly(Arc<dyn Dictionary>);

impl Dictionary for LimitedOnly {
    fn is_ready(&self) -> bool {
        true
    }

    fn lookup_by_prefix(&self, _prefix: &str) -> Vec<DictionaryEntry> {
        Vec::new()
    }

    fn lookup_by_prefix_limited(&self, prefix: &str, max_results: usize) -> Vec<DictionaryEntry> {
        self.0.lookup_by_prefix_limited(prefix, max_results)
    }

    fn contains(&self, normalized: &str) -> bool {
        self.0.contains(normalized)
    }
}

#[test]
fn test_capped_prefix_uses_limited_lookup() {
    let inner = italian(&[("casa", 900), ("cosa", 800), ("casale", 100)]);
    let mut engine = engine(Arc::new(LimitedOnly(inner)));
    assert_eq!(candidates(&engine.suggest("c", 3, true)), vec!["casa", "cosa", "casale"]);
    assert_eq!(candidates(&engine.suggest("ca", 3, true)), vec!["casa", "casale"]);
    // Three letters are uncapped and go through the full lookup.
    assert!(engine.suggest("cas", 3, true).is_empty());
}

/// Base-26 letter encoding so every generated word is letters only.
fn to_letters(mut n: u32) -> String {
    let mut out = Vec::new();
    loop {
        out.push(char::from(b'a' + (n % 26) as u8));
        n /= 26;
        if n == 0 {
            break;
        }
    }
    out.into_iter().rev().collect()
}

#[test]
fn test_case_and_punctuation_are_ignored() {
    let mut engine = engine(italian(&[("roma", 500)]));
    assert_eq!(candidates(&engine.suggest("ROM", 3, true)), vec!["roma"]);
    assert_eq!(candidates(&engine.suggest("ro'm", 3, true)), vec!["roma"]);
}

#[test]
fn test_turkish_locale_lowercase() {
    let dict = Arc::new(FrequencyDictionary::from_words(
        vec![("ışık".to_string(), 100)],
        Locale::new("tr"),
    ));
    let config = SuggestionConfig {
        locale: Locale::new("tr"),
        ..SuggestionConfig::default()
    };
    let mut engine = SuggestionEngine::new(dict, config);
    assert_eq!(candidates(&engine.suggest("IŞI", 3, true)), vec!["ışık"]);
}

#[test]
fn test_caches_stay_bounded() {
    let words: Vec<(String, u32)> = (0..500u32).map(|i| (format!("b{}", to_letters(i)), 1)).collect();
    let dict = Arc::new(FrequencyDictionary::from_words(words, Locale::new("it")));
    let config = SuggestionConfig {
        cache_capacity: 16,
        ..SuggestionConfig::default()
    };
    let mut engine = SuggestionEngine::new(dict, config);
    engine.suggest("b", 3, true);
    assert!(engine.cached_forms() <= 4 * 16);
    engine.clear_caches();
    assert_eq!(engine.cached_forms(), 0);
}

#[test]
fn test_repeated_queries_are_stable() {
    let mut engine = engine(italian(&[("casa", 100), ("cassa", 50), ("caso", 70)]));
    let first = engine.suggest("cas", 3, true);
    let second = engine.suggest("cas", 3, true);
    assert_eq!(first, second);
}
