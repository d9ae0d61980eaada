mod nav_mode;
mod word_tracker;

use std::sync::Arc;

use pastiera_core::dict::{Dictionary, FrequencyDictionary};
use pastiera_core::settings::{parse_settings_toml, DEFAULT_SETTINGS_TOML};
use pastiera_core::unicode::Locale;

use super::{InputSession, SessionConfig, SessionResponse};

pub(super) fn make_test_dict() -> Arc<dyn Dictionary> {
    let words = [
        ("cosa", 800),
        ("ciao", 600),
        ("casa", 500),
        ("così", 450),
        ("città", 400),
        ("perché", 300),
        ("cassa", 200),
        ("casale", 50),
        ("l'albero", 40),
    ];
    Arc::new(FrequencyDictionary::from_words(
        words.iter().map(|&(w, f)| (w.to_string(), f)),
        Locale::new("it"),
    ))
}

pub(super) fn default_config() -> SessionConfig {
    let settings = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
    SessionConfig::from_settings(&settings)
}

pub(super) fn make_session() -> InputSession {
    InputSession::new(make_test_dict(), default_config())
}

/// Commit `text` one character at a time, returning the last response.
pub(super) fn type_string(session: &mut InputSession, text: &str) -> SessionResponse {
    let mut last = SessionResponse::keep();
    for c in text.chars() {
        last = session.on_text_committed(&c.to_string());
    }
    last
}

pub(super) fn shown(resp: &SessionResponse) -> Vec<String> {
    match &resp.suggestions {
        crate::SuggestionAction::Show(list) => list.iter().map(|s| s.candidate.clone()).collect(),
        _ => Vec::new(),
    }
}
