use std::sync::Arc;

use crate::dict::{Dictionary, FrequencyDictionary, LoadableDictionary};
use crate::unicode::Locale;

fn italian() -> Arc<dyn Dictionary> {
    let words = vec![("casa".to_string(), 900), ("cane".to_string(), 500)];
    Arc::new(FrequencyDictionary::from_words(words, Locale::new("it")))
}

#[test]
fn test_empty_slot_is_not_ready() {
    let dict = LoadableDictionary::new();
    assert!(!dict.is_ready());
    assert!(dict.current().is_none());
    assert!(dict.lookup_by_prefix("ca").is_empty());
    assert!(dict.lookup_by_prefix_limited("ca", 10).is_empty());
    assert!(!dict.contains("casa"));
}

#[test]
fn test_install_then_clear() {
    let dict = LoadableDictionary::new();
    dict.install(italian());
    assert!(dict.is_ready());
    assert_eq!(dict.lookup_by_prefix("ca").len(), 2);
    assert_eq!(dict.lookup_by_prefix_limited("ca", 1)[0].word, "casa");
    assert!(dict.contains("cane"));

    dict.clear();
    assert!(!dict.is_ready());
    assert!(dict.lookup_by_prefix("ca").is_empty());
}

#[test]
fn test_install_replaces_previous() {
    let dict = LoadableDictionary::new();
    dict.install(italian());
    let words = vec![("house".to_string(), 10)];
    dict.install(Arc::new(FrequencyDictionary::from_words(words, Locale::new("en"))));
    assert!(!dict.contains("casa"));
    assert!(dict.contains("house"));
}
