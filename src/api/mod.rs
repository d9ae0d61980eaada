//! UniFFI export layer: Kotlin bindings for the Pastiera engine.
//!
//! Each public type here maps to a generated Kotlin class, data class, or
//! sealed class.

mod resources;
mod session;
mod suggester;
mod types;
mod user_dict;

pub use resources::{PastieraDictionary, PastieraDictionarySlot};
pub use session::{PastieraSession, PastieraTextSink};
pub use suggester::PastieraSuggester;
pub use types::{
    PastieraEntry, PastieraError, PastieraEvent, PastieraModifierKey, PastieraNavDirection,
    PastieraResponse, PastieraSource, PastieraSuggestion, PastieraSymKey, PastieraSymResult,
    PastieraUserWord,
};
pub use user_dict::PastieraUserDictionary;

use std::path::Path;

// ---------------------------------------------------------------------------
// Top-level functions
// ---------------------------------------------------------------------------

#[uniffi::export]
fn engine_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[uniffi::export]
fn settings_load_config(path: String) -> Result<(), PastieraError> {
    let content = std::fs::read_to_string(&path).map_err(|e| PastieraError::Io {
        msg: format!("{path}: {e}"),
    })?;
    pastiera_core::settings::init_custom(content)
        .map_err(|e| PastieraError::InvalidData { msg: e.to_string() })?;
    Ok(())
}

#[uniffi::export]
fn settings_default_config() -> String {
    pastiera_core::settings::DEFAULT_SETTINGS_TOML.to_string()
}

#[uniffi::export]
fn symbol_get(page: u8, key_code: u16) -> Option<String> {
    pastiera_core::settings::settings()
        .symbols
        .symbol_get(page, key_code)
        .map(|s| s.to_string())
}

#[uniffi::export]
fn trace_init(log_dir: String) {
    crate::trace_init::init_tracing(Path::new(&log_dir));
}

/// Edit distance between `a` and `b`, or `None` once it exceeds
/// `max_distance`.
#[uniffi::export]
fn bounded_levenshtein(a: String, b: String, max_distance: u32) -> Option<u32> {
    pastiera_core::suggest::bounded_levenshtein(&a, &b, max_distance as usize).map(|d| d as u32)
}
