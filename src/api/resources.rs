use std::path::Path;
use std::sync::Arc;

use pastiera_core::dict::{
    CompositeDictionary, DictError, Dictionary, FrequencyDictionary, LoadableDictionary,
};
use pastiera_core::unicode::{normalize_word, Locale};

use super::user_dict::PastieraUserDictionary;
use super::{PastieraEntry, PastieraError};

fn dict_error(e: DictError) -> PastieraError {
    match e {
        DictError::Io(e) => PastieraError::Io { msg: e.to_string() },
        other => PastieraError::InvalidData {
            msg: other.to_string(),
        },
    }
}

/// Any dictionary the engine can read from: a compiled system dictionary,
/// a system + user composite, or a slot filled later.
#[derive(uniffi::Object)]
pub struct PastieraDictionary {
    pub(crate) inner: Arc<dyn Dictionary>,
    locale: Locale,
}

#[uniffi::export]
impl PastieraDictionary {
    #[uniffi::constructor]
    fn open(path: String) -> Result<Arc<Self>, PastieraError> {
        let dict = FrequencyDictionary::open(Path::new(&path)).map_err(dict_error)?;
        let locale = dict.locale().clone();
        Ok(Arc::new(Self {
            inner: Arc::new(dict),
            locale,
        }))
    }

    /// Build from a tab-separated `word<TAB>frequency` list.
    #[uniffi::constructor]
    pub(super) fn from_word_list(text: String, locale: String) -> Result<Arc<Self>, PastieraError> {
        let locale = Locale::new(&locale);
        let dict = FrequencyDictionary::from_word_list(&text, locale.clone()).map_err(dict_error)?;
        Ok(Arc::new(Self {
            inner: Arc::new(dict),
            locale,
        }))
    }

    /// System words layered with the user's own.
    #[uniffi::constructor]
    fn with_user(system: Arc<PastieraDictionary>, user: Arc<PastieraUserDictionary>) -> Arc<Self> {
        let layers: Vec<Arc<dyn Dictionary>> = vec![Arc::clone(&system.inner), user.inner.clone()];
        Arc::new(Self {
            inner: Arc::new(CompositeDictionary::new(layers)),
            locale: system.locale.clone(),
        })
    }

    fn is_ready(&self) -> bool {
        self.inner.is_ready()
    }

    fn contains(&self, word: String) -> bool {
        self.inner.contains(&normalize_word(&word, &self.locale))
    }

    fn lookup_prefix(&self, prefix: String, limit: u32) -> Vec<PastieraEntry> {
        let key = normalize_word(&prefix, &self.locale);
        self.inner
            .lookup_by_prefix_limited(&key, limit as usize)
            .into_iter()
            .map(|e| PastieraEntry {
                word: e.word,
                frequency: e.frequency,
                source: e.source.into(),
            })
            .collect()
    }
}

/// A dictionary that reports not-ready until `install` fills it, so a
/// session can start while the word list loads in the background.
#[derive(uniffi::Object)]
pub struct PastieraDictionarySlot {
    slot: Arc<LoadableDictionary>,
    locale: Locale,
}

#[uniffi::export]
impl PastieraDictionarySlot {
    #[uniffi::constructor]
    fn new(locale: String) -> Arc<Self> {
        Arc::new(Self {
            slot: Arc::new(LoadableDictionary::new()),
            locale: Locale::new(&locale),
        })
    }

    fn install(&self, dict: Arc<PastieraDictionary>) {
        self.slot.install(Arc::clone(&dict.inner));
    }

    fn clear(&self) {
        self.slot.clear();
    }

    fn is_ready(&self) -> bool {
        self.slot.is_ready()
    }

    /// View of the slot usable wherever a dictionary is expected.
    fn as_dictionary(&self) -> Arc<PastieraDictionary> {
        let inner: Arc<dyn Dictionary> = self.slot.clone();
        Arc::new(PastieraDictionary {
            inner,
            locale: self.locale.clone(),
        })
    }
}
