//! Pending auto-inserted space bookkeeping.
//!
//! When the engine commits a suggestion it appends a space for the user. If
//! the next key is sentence punctuation, that space belongs after the mark,
//! not before it: "ciao ," becomes "ciao, ".

/// Punctuation that swallows a pending auto-space.
pub const AUTO_SPACE_PUNCTUATION: [char; 6] = ['.', ',', ';', ':', '!', '?'];

/// The host input connection, as seen by the tracker and session.
///
/// Counts are in characters, not bytes.
pub trait TextSink {
    fn commit_text(&mut self, text: &str);
    fn text_before_cursor(&self, n: usize) -> String;
    fn delete_before_cursor(&mut self, n: usize);
}

/// In-memory sink with the cursor always at the end of the text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    text: String,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }
}

impl TextSink for TextBuffer {
    fn commit_text(&mut self, text: &str) {
        self.text.push_str(text);
    }

    fn text_before_cursor(&self, n: usize) -> String {
        let count = self.text.chars().count();
        self.text.chars().skip(count.saturating_sub(n)).collect()
    }

    fn delete_before_cursor(&mut self, n: usize) {
        for _ in 0..n {
            if self.text.pop().is_none() {
                break;
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct AutoSpaceTracker {
    pending: bool,
}

impl AutoSpaceTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that a space was just inserted on the user's behalf.
    pub fn mark(&mut self) {
        self.pending = true;
    }

    pub fn clear(&mut self) {
        self.pending = false;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Replace the pending space before the cursor with `"<punct> "`.
    ///
    /// Returns `false` and leaves the text alone when nothing is pending or
    /// the character before the cursor is not a space. After a replacement
    /// the new trailing space is pending in turn.
    pub fn replace_with_punctuation(&mut self, sink: &mut dyn TextSink, punct: char) -> bool {
        if !self.pending {
            return false;
        }
        if sink.text_before_cursor(1) != " " {
            self.pending = false;
            return false;
        }
        sink.delete_before_cursor(1);
        let mut replacement = String::with_capacity(2);
        replacement.push(punct);
        replacement.push(' ');
        sink.commit_text(&replacement);
        self.pending = true;
        true
    }
}
