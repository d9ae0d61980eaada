//! Stateful keyboard session: word tracking, suggestions, and key state.
//!
//! `InputSession` owns everything the keyboard service needs between
//! keystrokes and answers each event with a [`SessionResponse`] that the
//! host translates into suggestion strip and indicator updates.

pub mod auto_space;
pub mod autocap;
pub mod modifiers;
pub mod nav_mode;
pub mod sym_layout;
pub mod word_tracker;

mod key_handlers;
mod types;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use pastiera_core::dict::Dictionary;
use pastiera_core::settings::Settings;
use pastiera_core::suggest::{SuggestionConfig, SuggestionEngine, SuggestionResult};
use pastiera_core::unicode::{apply_case, replacement_case};
use tracing::{debug, debug_span};

pub use auto_space::{TextBuffer, TextSink};
pub use autocap::AutoCapitalizer;
pub use modifiers::{Latch, ModifierConfig, ModifierKey, ModifierSnapshot, ModifierStateController};
pub use nav_mode::{NavDirection, NavModeConfig, NavModeEvent};
pub use sym_layout::{SymKey, SymKeyResult, SymLayoutConfig};
pub use types::{SessionResponse, SuggestionAction};
pub use word_tracker::{TrackerConfig, WordEvent};

use nav_mode::NavModeController;
use sym_layout::SymLayoutController;
use word_tracker::{WordEvents, WordTracker, BACKSPACE_MARKER};

/// Characters of context read back for auto-capitalisation.
const AUTOCAP_CONTEXT_CHARS: usize = 100;

#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    pub suggestions: SuggestionConfig,
    pub tracker: TrackerConfig,
    pub modifiers: ModifierConfig,
    pub autocap: AutoCapitalizer,
    pub sym: SymLayoutConfig,
    pub nav: NavModeConfig,
}

impl SessionConfig {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            suggestions: SuggestionConfig::from_settings(settings),
            tracker: TrackerConfig::from_settings(settings),
            modifiers: ModifierConfig::from_settings(settings),
            autocap: AutoCapitalizer::from_settings(settings),
            sym: SymLayoutConfig::from_settings(settings),
            nav: NavModeConfig::from_settings(settings),
        }
    }
}

pub struct InputSession {
    tracker: WordTracker<WordEvents>,
    engine: SuggestionEngine,
    modifiers: ModifierStateController,
    autocap: AutoCapitalizer,
    sym: SymLayoutController,
    nav: NavModeController,

    /// Suggestions last sent with `SuggestionAction::Show`.
    suggestions: Vec<SuggestionResult>,
    /// Password and similar fields: no auto-capitalisation.
    smart_features_disabled: bool,
}

impl InputSession {
    pub fn new(dict: Arc<dyn Dictionary>, config: SessionConfig) -> Self {
        Self {
            tracker: WordTracker::new(WordEvents::default(), config.tracker),
            engine: SuggestionEngine::new(dict, config.suggestions),
            modifiers: ModifierStateController::new(config.modifiers),
            autocap: config.autocap,
            sym: SymLayoutController::new(config.sym),
            nav: NavModeController::new(config.nav),
            suggestions: Vec::new(),
            smart_features_disabled: false,
        }
    }

    pub fn current_word(&self) -> &str {
        self.tracker.current_word()
    }

    pub fn suggestions(&self) -> &[SuggestionResult] {
        &self.suggestions
    }

    pub fn modifiers(&self) -> ModifierSnapshot {
        self.modifiers.snapshot()
    }

    pub fn engine(&self) -> &SuggestionEngine {
        &self.engine
    }

    /// Swap the dictionary, e.g. after a language change.
    pub fn set_dictionary(&mut self, dict: Arc<dyn Dictionary>) {
        self.engine.set_dictionary(dict);
    }

    pub fn set_smart_features_disabled(&mut self, disabled: bool) {
        self.smart_features_disabled = disabled;
    }

    pub fn is_auto_space_pending(&self) -> bool {
        self.tracker.auto_space().is_pending()
    }

    /// Text the host committed, as typed. May contain the backspace marker.
    pub fn on_text_committed(&mut self, text: &str) -> SessionResponse {
        let _span = debug_span!("on_text_committed", len = text.len()).entered();
        let shift_before = self.modifiers.latch(ModifierKey::Shift);
        if text.chars().any(|c| c != BACKSPACE_MARKER) {
            self.modifiers.on_regular_key();
        }
        self.tracker.on_character_committed(text);
        let mut resp = self.drain_word_events();
        resp.shift_changed = self.modifiers.latch(ModifierKey::Shift) != shift_before;
        resp
    }

    pub fn on_backspace(&mut self) -> SessionResponse {
        self.tracker.on_backspace();
        self.drain_word_events()
    }

    /// Space or punctuation key. `boundary` is committed through `sink`,
    /// replacing a pending auto-space for sentence punctuation.
    pub fn on_boundary(&mut self, boundary: Option<char>, sink: &mut dyn TextSink) -> SessionResponse {
        let _span = debug_span!("on_boundary", ?boundary).entered();
        let shift_before = self.modifiers.latch(ModifierKey::Shift);
        if boundary.is_some() {
            self.modifiers.on_regular_key();
        }
        self.tracker.on_boundary_reached(boundary, Some(&mut *sink));
        let mut resp = self.drain_word_events();
        self.apply_autocap(&sink.text_before_cursor(AUTOCAP_CONTEXT_CHARS));
        resp.shift_changed = self.modifiers.latch(ModifierKey::Shift) != shift_before;
        resp
    }

    /// The cursor moved without typing; `before` is the text preceding it.
    pub fn on_cursor_moved(&mut self, before: &str) -> SessionResponse {
        self.tracker.on_cursor_moved();
        self.after_context_reset(before)
    }

    /// A new field gained focus, or the field content was replaced.
    pub fn on_context_changed(&mut self, before: &str) -> SessionResponse {
        self.tracker.on_context_changed();
        self.sym.reset();
        self.after_context_reset(before)
    }

    /// Start tracking `word`, e.g. when the cursor lands inside a word.
    pub fn set_word(&mut self, word: &str) -> SessionResponse {
        self.tracker.set_word(word);
        self.drain_word_events()
    }

    /// Replace the tracked word with suggestion `index` followed by a space.
    ///
    /// The typed word's case pattern carries over ("Cas" → "Casa"). Returns
    /// `None` when there is no such suggestion or no word to replace.
    pub fn accept_suggestion(&mut self, index: usize, sink: &mut dyn TextSink) -> Option<SessionResponse> {
        let _span = debug_span!("accept_suggestion", index).entered();
        let candidate = self.suggestions.get(index)?.candidate.clone();
        let typed = self.tracker.current_word().to_string();
        if typed.is_empty() {
            return None;
        }

        let mut text = apply_case(&candidate, replacement_case(&typed), self.engine.locale());
        text.push(' ');
        sink.delete_before_cursor(typed.chars().count());
        sink.commit_text(&text);
        debug!(typed = typed.as_str(), committed = text.as_str(), "suggestion accepted");

        self.tracker.reset();
        self.tracker.auto_space_mut().mark();
        let shift_before = self.modifiers.latch(ModifierKey::Shift);
        let mut resp = self.drain_word_events();
        self.apply_autocap(&sink.text_before_cursor(AUTOCAP_CONTEXT_CHARS));
        resp.shift_changed = self.modifiers.latch(ModifierKey::Shift) != shift_before;
        Some(resp)
    }

    /// Re-evaluate auto-capitalisation for a selection change.
    pub fn on_selection_changed(&mut self, text: &str, sel_start: usize, sel_end: usize) -> bool {
        let capitalize = !self.smart_features_disabled
            && self.autocap.should_capitalize_selection(text, sel_start, sel_end);
        if capitalize {
            self.modifiers.request_auto_shift()
        } else {
            self.modifiers.clear_auto_shift()
        }
    }

    fn after_context_reset(&mut self, before: &str) -> SessionResponse {
        let shift_before = self.modifiers.latch(ModifierKey::Shift);
        let mut resp = self.drain_word_events();
        self.apply_autocap(before);
        resp.shift_changed = self.modifiers.latch(ModifierKey::Shift) != shift_before;
        resp
    }

    fn apply_autocap(&mut self, before: &str) -> bool {
        self.autocap
            .apply(&mut self.modifiers, before, self.smart_features_disabled)
    }

    /// Turn queued tracker events into one suggestion update. Only the
    /// final event of a batch matters.
    fn drain_word_events(&mut self) -> SessionResponse {
        let mut resp = SessionResponse::keep();
        resp.suggestions = match self.tracker.listener_mut().take().pop() {
            None => return resp,
            Some(WordEvent::Reset) => {
                self.suggestions.clear();
                SuggestionAction::Hide
            }
            Some(WordEvent::Changed(word)) => {
                self.suggestions = self.engine.suggest_default(&word);
                if self.suggestions.is_empty() {
                    SuggestionAction::Hide
                } else {
                    SuggestionAction::Show(self.suggestions.clone())
                }
            }
        };
        resp
    }
}
