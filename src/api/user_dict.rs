use std::path::Path;
use std::sync::Arc;

use pastiera_core::settings::settings;
use pastiera_core::user_dict::UserDictionary;

use super::{PastieraError, PastieraUserWord};

#[derive(uniffi::Object)]
pub struct PastieraUserDictionary {
    pub(crate) inner: Arc<UserDictionary>,
}

#[uniffi::export]
impl PastieraUserDictionary {
    /// Open `path`, or start empty if it does not exist yet.
    #[uniffi::constructor]
    fn open(path: String) -> Result<Arc<Self>, PastieraError> {
        let dict = UserDictionary::open(Path::new(&path))
            .map_err(|e| PastieraError::Io { msg: e.to_string() })?;
        Ok(Arc::new(Self {
            inner: Arc::new(dict.configured(settings())),
        }))
    }

    fn register(&self, word: String) -> bool {
        self.inner.register(&word)
    }

    fn register_with_frequency(&self, word: String, frequency: u32) -> bool {
        self.inner.register_with_frequency(&word, frequency)
    }

    fn unregister(&self, word: String) -> bool {
        self.inner.unregister(&word)
    }

    fn list(&self) -> Vec<PastieraUserWord> {
        self.inner
            .list()
            .into_iter()
            .map(|(word, frequency)| PastieraUserWord { word, frequency })
            .collect()
    }

    fn save(&self, path: String) -> Result<(), PastieraError> {
        self.inner
            .save(Path::new(&path))
            .map_err(|e| PastieraError::Io { msg: e.to_string() })
    }
}
