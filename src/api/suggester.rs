use std::sync::{Arc, Mutex, PoisonError};

use pastiera_core::settings::settings;
use pastiera_core::suggest::{SuggestionConfig, SuggestionEngine};

use super::resources::PastieraDictionary;
use super::types::convert_suggestions;
use super::PastieraSuggestion;

/// One-shot suggestion lookups. The engine keeps normalization
/// caches, hence the lock.
#[derive(uniffi::Object)]
pub struct PastieraSuggester {
    engine: Mutex<SuggestionEngine>,
}

#[uniffi::export]
impl PastieraSuggester {
    #[uniffi::constructor]
    fn new(dict: Arc<PastieraDictionary>) -> Arc<Self> {
        let engine = SuggestionEngine::new(
            Arc::clone(&dict.inner),
            SuggestionConfig::from_settings(settings()),
        );
        Arc::new(Self {
            engine: Mutex::new(engine),
        })
    }

    fn suggest(
        &self,
        word: String,
        limit: u32,
        include_accent_matching: bool,
    ) -> Vec<PastieraSuggestion> {
        let mut engine = self.engine.lock().unwrap_or_else(PoisonError::into_inner);
        convert_suggestions(&engine.suggest(&word, limit as usize, include_accent_matching))
    }

    /// Suggest with the configured limit and accent matching.
    fn suggest_default(&self, word: String) -> Vec<PastieraSuggestion> {
        let mut engine = self.engine.lock().unwrap_or_else(PoisonError::into_inner);
        convert_suggestions(&engine.suggest_default(&word))
    }

    fn set_dictionary(&self, dict: Arc<PastieraDictionary>) {
        let mut engine = self.engine.lock().unwrap_or_else(PoisonError::into_inner);
        engine.set_dictionary(Arc::clone(&dict.inner));
    }

    fn clear_caches(&self) {
        let mut engine = self.engine.lock().unwrap_or_else(PoisonError::into_inner);
        engine.clear_caches();
    }
}
