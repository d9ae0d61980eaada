use std::path::Path;
use std::sync::Arc;

use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use pastiera_core::dict::{CompositeDictionary, Dictionary, EntrySource, FrequencyDictionary};
use pastiera_core::settings::settings;
use pastiera_core::suggest::{SuggestionConfig, SuggestionEngine, SuggestionResult};
use pastiera_session::{InputSession, SessionConfig, SuggestionAction, TextBuffer, TextSink};

use super::die;
use super::user_dict_ops::open_user_dict;

#[derive(Serialize)]
struct SuggestionJson<'a> {
    candidate: &'a str,
    distance: usize,
    score: f64,
    source: &'static str,
}

#[derive(Serialize)]
struct SuggestOutput<'a> {
    input: &'a str,
    suggestions: Vec<SuggestionJson<'a>>,
}

fn source_name(source: EntrySource) -> &'static str {
    match source {
        EntrySource::System => "system",
        EntrySource::User => "user",
    }
}

/// System dictionary, layered with the user dictionary when one is given.
pub fn load_dictionary(dict_file: &str, user_file: Option<&str>) -> Arc<dyn Dictionary> {
    let system = die!(
        FrequencyDictionary::open(Path::new(dict_file)),
        "Error opening {dict_file}: {}"
    );
    let Some(user_file) = user_file else {
        return Arc::new(system);
    };
    let user = open_user_dict(Path::new(user_file));
    let layers: Vec<Arc<dyn Dictionary>> = vec![Arc::new(system), Arc::new(user)];
    Arc::new(CompositeDictionary::new(layers))
}

fn print_table(results: &[SuggestionResult]) {
    if results.is_empty() {
        println!("(no suggestions)");
        return;
    }
    let width = results.iter().map(|r| r.candidate.width()).max().unwrap_or(0);
    for (i, r) in results.iter().enumerate() {
        let pad = " ".repeat(width - r.candidate.width());
        println!(
            "{:>2}. {}{pad}  d={}  score={:.5}  {}",
            i + 1,
            r.candidate,
            r.distance,
            r.score,
            source_name(r.source)
        );
    }
}

pub fn suggest(
    dict_file: &str,
    word: &str,
    n: usize,
    no_accents: bool,
    user_file: Option<&str>,
    json: bool,
) {
    let dict = load_dictionary(dict_file, user_file);
    let mut engine = SuggestionEngine::new(dict, SuggestionConfig::from_settings(settings()));
    let results = engine.suggest(word, n, !no_accents);

    if json {
        let output = SuggestOutput {
            input: word,
            suggestions: results
                .iter()
                .map(|r| SuggestionJson {
                    candidate: &r.candidate,
                    distance: r.distance,
                    score: r.score,
                    source: source_name(r.source),
                })
                .collect(),
        };
        println!(
            "{}",
            die!(serde_json::to_string_pretty(&output), "Error encoding JSON: {}")
        );
    } else {
        print_table(&results);
    }
}

/// Characters treated as word boundaries while replaying text.
fn is_boundary(c: char) -> bool {
    c.is_whitespace() || matches!(c, '.' | ',' | ';' | ':' | '!' | '?' | '-' | '(' | ')' | '"')
}

/// Type `text` through an `InputSession`, printing the strip after every
/// keystroke. With `autocorrect`, a space replaces the word with the top
/// suggestion whenever its spelling differs.
pub fn replay(dict_file: &str, text: &str, user_file: Option<&str>, autocorrect: bool) {
    let dict = load_dictionary(dict_file, user_file);
    let mut session = InputSession::new(dict, SessionConfig::from_settings(settings()));
    let mut buf = TextBuffer::new();
    session.on_context_changed("");

    for c in text.chars() {
        let resp = if c == ' ' && autocorrect && should_autocorrect(&session) {
            match session.accept_suggestion(0, &mut buf) {
                Some(resp) => resp,
                None => session.on_boundary(Some(c), &mut buf),
            }
        } else if is_boundary(c) {
            session.on_boundary(Some(c), &mut buf)
        } else {
            buf.commit_text(&c.to_string());
            session.on_text_committed(&c.to_string())
        };

        let strip = match &resp.suggestions {
            SuggestionAction::Show(list) => list
                .iter()
                .map(|s| s.candidate.as_str())
                .collect::<Vec<_>>()
                .join(" | "),
            SuggestionAction::Hide => "-".to_string(),
            SuggestionAction::Keep => "=".to_string(),
        };
        let shift = if session.modifiers().shift_active() { " ⇧" } else { "" };
        println!("{:<40} [{strip}]{shift}", buf.text_before_cursor(40));
    }
}

fn should_autocorrect(session: &InputSession) -> bool {
    session
        .suggestions()
        .first()
        .is_some_and(|top| top.distance > 0 && top.candidate != session.current_word())
}
