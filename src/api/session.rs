use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use pastiera_core::settings::settings;
use pastiera_session::{InputSession, SessionConfig, SessionResponse, TextSink};
use tracing::debug;

use super::resources::PastieraDictionary;
use super::types::{convert_suggestions, convert_to_events};
use super::{
    PastieraModifierKey, PastieraNavDirection, PastieraResponse, PastieraSuggestion, PastieraSymKey,
    PastieraSymResult,
};

/// The host input connection. Counts are in characters.
#[uniffi::export(with_foreign)]
pub trait PastieraTextSink: Send + Sync {
    fn commit_text(&self, text: String);
    fn text_before_cursor(&self, n: u32) -> String;
    fn delete_before_cursor(&self, n: u32);
}

struct HostSink<'a>(&'a dyn PastieraTextSink);

impl TextSink for HostSink<'_> {
    fn commit_text(&mut self, text: &str) {
        self.0.commit_text(text.to_string());
    }

    fn text_before_cursor(&self, n: usize) -> String {
        self.0.text_before_cursor(u32::try_from(n).unwrap_or(u32::MAX))
    }

    fn delete_before_cursor(&mut self, n: usize) {
        self.0
            .delete_before_cursor(u32::try_from(n).unwrap_or(u32::MAX));
    }
}

#[derive(uniffi::Object)]
pub struct PastieraSession {
    session: Mutex<InputSession>,
}

impl PastieraSession {
    fn lock(&self) -> MutexGuard<'_, InputSession> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn respond(session: &InputSession, resp: SessionResponse) -> PastieraResponse {
        convert_to_events(resp, session.modifiers())
    }
}

#[uniffi::export]
impl PastieraSession {
    #[uniffi::constructor]
    fn new(dict: Arc<PastieraDictionary>) -> Arc<Self> {
        let session = InputSession::new(
            Arc::clone(&dict.inner),
            SessionConfig::from_settings(settings()),
        );
        debug!(locale = %session.engine().locale(), "session created");
        Arc::new(Self {
            session: Mutex::new(session),
        })
    }

    fn set_dictionary(&self, dict: Arc<PastieraDictionary>) {
        self.lock().set_dictionary(Arc::clone(&dict.inner));
    }

    fn set_smart_features_disabled(&self, disabled: bool) {
        self.lock().set_smart_features_disabled(disabled);
    }

    fn current_word(&self) -> String {
        self.lock().current_word().to_string()
    }

    fn suggestions(&self) -> Vec<PastieraSuggestion> {
        convert_suggestions(self.lock().suggestions())
    }

    // --- Text events ---

    fn on_text_committed(&self, text: String) -> PastieraResponse {
        let mut session = self.lock();
        let resp = session.on_text_committed(&text);
        Self::respond(&session, resp)
    }

    fn on_backspace(&self) -> PastieraResponse {
        let mut session = self.lock();
        let resp = session.on_backspace();
        Self::respond(&session, resp)
    }

    /// `boundary` is the typed separator; only its first character is used.
    fn on_boundary(
        &self,
        boundary: Option<String>,
        sink: Arc<dyn PastieraTextSink>,
    ) -> PastieraResponse {
        let c = boundary.and_then(|b| b.chars().next());
        let mut session = self.lock();
        let resp = session.on_boundary(c, &mut HostSink(sink.as_ref()));
        Self::respond(&session, resp)
    }

    fn on_cursor_moved(&self, before: String) -> PastieraResponse {
        let mut session = self.lock();
        let resp = session.on_cursor_moved(&before);
        Self::respond(&session, resp)
    }

    fn on_context_changed(&self, before: String) -> PastieraResponse {
        let mut session = self.lock();
        let resp = session.on_context_changed(&before);
        Self::respond(&session, resp)
    }

    fn on_selection_changed(&self, text: String, sel_start: u32, sel_end: u32) -> bool {
        self.lock()
            .on_selection_changed(&text, sel_start as usize, sel_end as usize)
    }

    fn set_word(&self, word: String) -> PastieraResponse {
        let mut session = self.lock();
        let resp = session.set_word(&word);
        Self::respond(&session, resp)
    }

    fn accept_suggestion(
        &self,
        index: u32,
        sink: Arc<dyn PastieraTextSink>,
    ) -> Option<PastieraResponse> {
        let mut session = self.lock();
        let resp = session.accept_suggestion(index as usize, &mut HostSink(sink.as_ref()))?;
        Some(Self::respond(&session, resp))
    }

    // --- Modifiers, nav mode, symbol pages ---

    fn on_modifier_down(&self, key: PastieraModifierKey) -> bool {
        self.lock().on_modifier_down(key.into())
    }

    fn on_modifier_up(&self, key: PastieraModifierKey, now_ms: u64) -> PastieraResponse {
        let mut session = self.lock();
        let resp = session.on_modifier_up(key.into(), now_ms);
        Self::respond(&session, resp)
    }

    fn reset_modifiers(&self, preserve_nav_mode: bool) -> PastieraResponse {
        let mut session = self.lock();
        let resp = session.reset_modifiers(preserve_nav_mode);
        Self::respond(&session, resp)
    }

    fn is_nav_mode_active(&self) -> bool {
        self.lock().is_nav_mode_active()
    }

    fn map_nav_key(&self, key_code: u16) -> Option<PastieraNavDirection> {
        self.lock().map_nav_key(key_code).map(Into::into)
    }

    fn exit_nav_mode(&self) -> bool {
        self.lock().exit_nav_mode().is_some()
    }

    fn toggle_sym(&self) -> u8 {
        self.lock().toggle_sym()
    }

    fn sym_page(&self) -> u8 {
        self.lock().sym_page()
    }

    fn restore_sym_page(&self, page: i32) {
        self.lock().restore_sym_page(page);
    }

    fn on_sym_key(&self, key: PastieraSymKey) -> PastieraSymResult {
        self.lock().on_sym_key(key.into()).into()
    }
}
