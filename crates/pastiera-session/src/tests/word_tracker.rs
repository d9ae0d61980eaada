use crate::auto_space::{TextBuffer, TextSink};
use crate::word_tracker::{
    Callbacks, TrackerConfig, WordEvent, WordEvents, WordTracker, BACKSPACE_MARKER,
};

fn tracker(max_word_length: usize) -> WordTracker<WordEvents> {
    WordTracker::new(WordEvents::default(), TrackerConfig { max_word_length })
}

fn changed(word: &str) -> WordEvent {
    WordEvent::Changed(word.to_string())
}

#[test]
fn test_letters_accumulate_with_one_event_each() {
    let mut t = tracker(48);
    t.on_character_committed("ca");
    t.on_character_committed("sa");
    assert_eq!(t.current_word(), "casa");
    assert_eq!(
        t.listener_mut().take(),
        vec![changed("c"), changed("ca"), changed("cas"), changed("casa")]
    );
}

#[test]
fn test_empty_commit_is_ignored() {
    let mut t = tracker(48);
    t.on_character_committed("");
    assert!(t.is_empty());
    assert!(t.listener().is_empty());
}

#[test]
fn test_chars_past_max_length_are_dropped() {
    let mut t = tracker(3);
    t.on_character_committed("abcd");
    assert_eq!(t.current_word(), "abc");
    assert_eq!(
        t.listener_mut().take(),
        vec![changed("a"), changed("ab"), changed("abc")]
    );

    t.on_character_committed("e");
    assert_eq!(t.current_word(), "abc");
    assert!(t.listener().is_empty());
}

#[test]
fn test_full_word_still_resets_on_non_word_char() {
    let mut t = tracker(3);
    t.on_character_committed("abcd");
    t.listener_mut().take();
    t.on_character_committed(" ");
    assert!(t.is_empty());
    assert_eq!(t.listener_mut().take(), vec![WordEvent::Reset]);
}

#[test]
fn test_max_length_counts_chars_not_bytes() {
    let mut t = tracker(5);
    t.on_character_committed("perché");
    assert_eq!(t.current_word(), "perch");
    t.on_backspace();
    t.on_character_committed("é");
    assert_eq!(t.current_word(), "percé");
}

#[test]
fn test_superscript_digit_is_not_a_word_char() {
    let mut t = tracker(48);
    t.on_character_committed("x²");
    assert!(t.is_empty());
    assert_eq!(t.listener_mut().take(), vec![changed("x"), WordEvent::Reset]);

    t.on_character_committed("Ⅻ½");
    assert!(t.is_empty());

    t.on_character_committed("x2");
    assert_eq!(t.current_word(), "x2");
}

#[test]
fn test_non_word_char_resets() {
    let mut t = tracker(48);
    t.on_character_committed("ciao");
    t.listener_mut().take();
    t.on_character_committed("!");
    assert!(t.is_empty());
    assert_eq!(t.listener_mut().take(), vec![WordEvent::Reset]);
}

#[test]
fn test_reset_on_empty_word_is_silent() {
    let mut t = tracker(48);
    t.on_character_committed(" ");
    t.reset();
    t.on_cursor_moved();
    assert!(t.listener().is_empty());
}

#[test]
fn test_reset_twice_fires_once() {
    let mut t = tracker(48);
    t.on_character_committed("ciao");
    t.listener_mut().take();
    t.reset();
    t.reset();
    assert_eq!(t.listener_mut().take(), vec![WordEvent::Reset]);
}

#[test]
fn test_apostrophe_inside_word() {
    let mut t = tracker(48);
    t.on_character_committed("l'albero");
    assert_eq!(t.current_word(), "l'albero");
}

#[test]
fn test_leading_apostrophe_rejected() {
    let mut t = tracker(48);
    t.on_character_committed("'a");
    assert_eq!(t.current_word(), "a");
    // The rejected apostrophe found an empty word, so only the change fires.
    assert_eq!(t.listener_mut().take(), vec![changed("a")]);
}

#[test]
fn test_typographic_apostrophes_normalized() {
    for quote in ['\u{2019}', '\u{2018}', '\u{02BC}'] {
        let mut t = tracker(48);
        t.on_character_committed(&format!("l{quote}albero"));
        assert_eq!(t.current_word(), "l'albero", "quote {quote:?}");
    }
}

#[test]
fn test_double_apostrophe_resets() {
    let mut t = tracker(48);
    t.on_character_committed("l''");
    assert!(t.is_empty());
}

#[test]
fn test_backspace_marker_retracts() {
    let mut t = tracker(48);
    t.on_character_committed(&format!("ab{BACKSPACE_MARKER}c"));
    assert_eq!(t.current_word(), "ac");
    assert_eq!(
        t.listener_mut().take(),
        vec![changed("a"), changed("ab"), changed("a"), changed("ac")]
    );
}

#[test]
fn test_backspace_to_empty_fires_reset_once() {
    let mut t = tracker(48);
    t.on_character_committed("ab");
    t.listener_mut().take();

    t.on_backspace();
    t.on_backspace();
    t.on_backspace();
    assert!(t.is_empty());
    assert_eq!(t.listener_mut().take(), vec![changed("a"), WordEvent::Reset]);
}

#[test]
fn test_set_word_truncates_and_always_notifies() {
    let mut t = tracker(5);
    t.set_word("precipitevolissimevolmente");
    assert_eq!(t.current_word(), "mente");
    t.set_word("mente");
    assert_eq!(
        t.listener_mut().take(),
        vec![changed("mente"), changed("mente")]
    );
}

#[test]
fn test_boundary_commits_char_and_resets() {
    let mut t = tracker(48);
    let mut buf = TextBuffer::with_text("casa");
    t.on_character_committed("casa");
    t.listener_mut().take();

    t.on_boundary_reached(Some(' '), Some(&mut buf));
    assert_eq!(buf.as_str(), "casa ");
    assert!(t.is_empty());
    assert_eq!(t.listener_mut().take(), vec![WordEvent::Reset]);
}

#[test]
fn test_boundary_replaces_pending_auto_space() {
    let mut t = tracker(48);
    let mut buf = TextBuffer::with_text("ciao ");
    t.auto_space_mut().mark();

    t.on_boundary_reached(Some(','), Some(&mut buf));
    assert_eq!(buf.as_str(), "ciao, ");
    assert!(t.auto_space().is_pending());
}

#[test]
fn test_boundary_without_pending_space_commits_as_typed() {
    let mut t = tracker(48);
    let mut buf = TextBuffer::with_text("ciao ");

    t.on_boundary_reached(Some('.'), Some(&mut buf));
    assert_eq!(buf.as_str(), "ciao .");
    assert!(!t.auto_space().is_pending());
}

#[test]
fn test_non_punctuation_boundary_clears_auto_space() {
    let mut t = tracker(48);
    let mut buf = TextBuffer::with_text("ciao ");
    t.auto_space_mut().mark();

    t.on_boundary_reached(Some('-'), Some(&mut buf));
    assert_eq!(buf.as_str(), "ciao -");
    assert!(!t.auto_space().is_pending());
}

#[test]
fn test_boundary_without_sink_only_resets() {
    let mut t = tracker(48);
    t.on_character_committed("ciao");
    t.on_boundary_reached(Some('.'), None);
    assert!(t.is_empty());
}

#[test]
fn test_typing_clears_auto_space() {
    let mut t = tracker(48);
    t.auto_space_mut().mark();
    t.on_character_committed("a");
    assert!(!t.auto_space().is_pending());

    t.auto_space_mut().mark();
    t.on_context_changed();
    assert!(!t.auto_space().is_pending());
}

#[test]
fn test_closure_callbacks() {
    let mut words = Vec::new();
    let mut resets = 0;
    {
        let listener = Callbacks {
            on_changed: |w: &str| words.push(w.to_string()),
            on_reset: || resets += 1,
        };
        let mut t = WordTracker::new(listener, TrackerConfig::default());
        t.on_character_committed("si ");
        t.on_character_committed("no");
        t.on_cursor_moved();
    }
    assert_eq!(words, ["s", "si", "n", "no"]);
    assert_eq!(resets, 2);
}

#[test]
fn test_text_buffer_counts_chars() {
    let mut buf = TextBuffer::with_text("città");
    assert_eq!(buf.text_before_cursor(2), "tà");
    buf.delete_before_cursor(2);
    assert_eq!(buf.as_str(), "cit");
}
