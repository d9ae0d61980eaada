//! Tracks the word currently being typed, one committed character at a time.

use pastiera_core::settings::Settings;
use pastiera_core::unicode::{is_word_char, normalize_apostrophe};
use tracing::debug;

use crate::auto_space::{AutoSpaceTracker, TextSink, AUTO_SPACE_PUNCTUATION};

/// Multi-tap keys retract the previous character with this marker.
pub const BACKSPACE_MARKER: char = '\u{8}';

/// Receives word updates. For any single event exactly one of the two
/// methods fires, or neither.
pub trait WordListener {
    fn on_word_changed(&mut self, word: &str);
    fn on_word_reset(&mut self);
}

/// Adapts a pair of closures to [`WordListener`].
pub struct Callbacks<C, R> {
    pub on_changed: C,
    pub on_reset: R,
}

impl<C: FnMut(&str), R: FnMut()> WordListener for Callbacks<C, R> {
    fn on_word_changed(&mut self, word: &str) {
        (self.on_changed)(word)
    }

    fn on_word_reset(&mut self) {
        (self.on_reset)()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordEvent {
    Changed(String),
    Reset,
}

/// Listener that queues events for the owner to drain after each call.
#[derive(Debug, Default)]
pub struct WordEvents {
    events: Vec<WordEvent>,
}

impl WordEvents {
    pub fn take(&mut self) -> Vec<WordEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl WordListener for WordEvents {
    fn on_word_changed(&mut self, word: &str) {
        self.events.push(WordEvent::Changed(word.to_string()));
    }

    fn on_word_reset(&mut self) {
        self.events.push(WordEvent::Reset);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackerConfig {
    pub max_word_length: usize,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            max_word_length: 48,
        }
    }
}

impl TrackerConfig {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            max_word_length: settings.tracker.max_word_length,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ResetTrigger {
    NonWordChar,
    Backspace,
    Boundary,
    CursorMoved,
    ContextChanged,
    Explicit,
}

pub struct WordTracker<L: WordListener> {
    current: String,
    /// Length of `current` in chars.
    len: usize,
    max_len: usize,
    listener: L,
    auto_space: AutoSpaceTracker,
}

impl<L: WordListener> WordTracker<L> {
    pub fn new(listener: L, config: TrackerConfig) -> Self {
        Self {
            current: String::new(),
            len: 0,
            max_len: config.max_word_length.max(1),
            listener,
            auto_space: AutoSpaceTracker::new(),
        }
    }

    pub fn current_word(&self) -> &str {
        &self.current
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    pub fn listener(&self) -> &L {
        &self.listener
    }

    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }

    pub fn auto_space(&self) -> &AutoSpaceTracker {
        &self.auto_space
    }

    pub fn auto_space_mut(&mut self) -> &mut AutoSpaceTracker {
        &mut self.auto_space
    }

    /// Replace the tracked word, keeping only its trailing `max_word_length`
    /// characters. Always notifies, even when the text is unchanged.
    pub fn set_word(&mut self, word: &str) {
        let count = word.chars().count();
        let skip = count.saturating_sub(self.max_len);
        self.current = word.chars().skip(skip).collect();
        self.len = count - skip;
        self.listener.on_word_changed(&self.current);
    }

    /// Feed committed text, character by character.
    pub fn on_character_committed(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        self.auto_space.clear();
        for c in text.chars() {
            if c == BACKSPACE_MARKER {
                self.on_backspace();
                continue;
            }
            let c = normalize_apostrophe(c);
            let accepted = is_word_char(c)
                || (c == '\'' && self.current.chars().next_back().is_some_and(is_word_char));
            if accepted {
                if self.push(c) {
                    self.listener.on_word_changed(&self.current);
                }
            } else {
                self.reset_with(ResetTrigger::NonWordChar);
            }
        }
    }

    pub fn on_backspace(&mut self) {
        if self.current.pop().is_none() {
            return;
        }
        self.len -= 1;
        if self.current.is_empty() {
            // `current` is already empty, so notify directly
            debug!(trigger = ?ResetTrigger::Backspace, "word reset");
            self.listener.on_word_reset();
        } else {
            self.listener.on_word_changed(&self.current);
        }
    }

    /// Explicit word boundary (space or punctuation key).
    ///
    /// Sentence punctuation replaces a pending auto-space; any other boundary
    /// character is committed through `sink` as typed. The word always resets.
    pub fn on_boundary_reached(&mut self, boundary: Option<char>, sink: Option<&mut dyn TextSink>) {
        if let (Some(c), Some(sink)) = (boundary, sink) {
            let replaced = AUTO_SPACE_PUNCTUATION.contains(&c)
                && self.auto_space.replace_with_punctuation(sink, c);
            if !replaced {
                self.auto_space.clear();
                let mut buf = [0u8; 4];
                sink.commit_text(c.encode_utf8(&mut buf));
            }
        }
        self.reset_with(ResetTrigger::Boundary);
    }

    pub fn on_cursor_moved(&mut self) {
        self.auto_space.clear();
        self.reset_with(ResetTrigger::CursorMoved);
    }

    pub fn on_context_changed(&mut self) {
        self.auto_space.clear();
        self.reset_with(ResetTrigger::ContextChanged);
    }

    /// Clear the word. The reset callback fires only if there was a word.
    pub fn reset(&mut self) {
        self.reset_with(ResetTrigger::Explicit);
    }

    fn reset_with(&mut self, trigger: ResetTrigger) {
        if self.current.is_empty() {
            return;
        }
        debug!(?trigger, word = self.current.as_str(), "word reset");
        self.current.clear();
        self.len = 0;
        self.listener.on_word_reset();
    }

    /// Append unless the word is already full. Returns whether `c` was kept.
    fn push(&mut self, c: char) -> bool {
        if self.len >= self.max_len {
            return false;
        }
        self.current.push(c);
        self.len += 1;
        true
    }
}
