use pastiera_core::dict::EntrySource;
use pastiera_core::suggest::SuggestionResult;
use pastiera_session::{
    ModifierKey, ModifierSnapshot, NavDirection, NavModeEvent, SessionResponse, SuggestionAction,
    SymKey, SymKeyResult,
};

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum PastieraError {
    #[error("IO error: {msg}")]
    Io { msg: String },
    #[error("invalid data: {msg}")]
    InvalidData { msg: String },
    #[error("internal error: {msg}")]
    Internal { msg: String },
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, uniffi::Record)]
pub struct PastieraSuggestion {
    pub candidate: String,
    pub distance: u32,
    pub score: f64,
    pub source: PastieraSource,
}

#[derive(uniffi::Record)]
pub struct PastieraEntry {
    pub word: String,
    pub frequency: u32,
    pub source: PastieraSource,
}

#[derive(uniffi::Record)]
pub struct PastieraUserWord {
    pub word: String,
    pub frequency: u32,
}

/// Event-driven response from the session entry points.
#[derive(uniffi::Record)]
pub struct PastieraResponse {
    pub events: Vec<PastieraEvent>,
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq, uniffi::Enum)]
pub enum PastieraSource {
    System,
    User,
}

#[derive(Clone, Debug, uniffi::Enum)]
pub enum PastieraEvent {
    ShowSuggestions {
        suggestions: Vec<PastieraSuggestion>,
    },
    HideSuggestions,
    ShiftChanged {
        active: bool,
        caps_lock: bool,
    },
    NavModeChanged {
        active: bool,
    },
}

#[derive(Clone, Copy, Debug, uniffi::Enum)]
pub enum PastieraModifierKey {
    Shift,
    Ctrl,
    Alt,
}

#[derive(Clone, Copy, Debug, uniffi::Enum)]
pub enum PastieraNavDirection {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, uniffi::Enum)]
pub enum PastieraSymKey {
    Back,
    Enter,
    Alt,
    Code { key_code: u16 },
}

#[derive(Clone, Debug, uniffi::Enum)]
pub enum PastieraSymResult {
    NotHandled,
    Consume { text: String },
    CallSuper,
}

// ---------------------------------------------------------------------------
// Conversion helpers
// ---------------------------------------------------------------------------

impl From<EntrySource> for PastieraSource {
    fn from(source: EntrySource) -> Self {
        match source {
            EntrySource::System => Self::System,
            EntrySource::User => Self::User,
        }
    }
}

impl From<&SuggestionResult> for PastieraSuggestion {
    fn from(r: &SuggestionResult) -> Self {
        Self {
            candidate: r.candidate.clone(),
            distance: r.distance as u32,
            score: r.score,
            source: r.source.into(),
        }
    }
}

impl From<PastieraModifierKey> for ModifierKey {
    fn from(key: PastieraModifierKey) -> Self {
        match key {
            PastieraModifierKey::Shift => Self::Shift,
            PastieraModifierKey::Ctrl => Self::Ctrl,
            PastieraModifierKey::Alt => Self::Alt,
        }
    }
}

impl From<NavDirection> for PastieraNavDirection {
    fn from(dir: NavDirection) -> Self {
        match dir {
            NavDirection::Up => Self::Up,
            NavDirection::Down => Self::Down,
            NavDirection::Left => Self::Left,
            NavDirection::Right => Self::Right,
        }
    }
}

impl From<PastieraSymKey> for SymKey {
    fn from(key: PastieraSymKey) -> Self {
        match key {
            PastieraSymKey::Back => Self::Back,
            PastieraSymKey::Enter => Self::Enter,
            PastieraSymKey::Alt => Self::Alt,
            PastieraSymKey::Code { key_code } => Self::Code(key_code),
        }
    }
}

impl From<SymKeyResult> for PastieraSymResult {
    fn from(result: SymKeyResult) -> Self {
        match result {
            SymKeyResult::NotHandled => Self::NotHandled,
            SymKeyResult::Consume { text } => Self::Consume { text },
            SymKeyResult::CallSuper => Self::CallSuper,
        }
    }
}

pub(super) fn convert_suggestions(results: &[SuggestionResult]) -> Vec<PastieraSuggestion> {
    results.iter().map(PastieraSuggestion::from).collect()
}

/// Flatten a `SessionResponse` into host events: suggestions first, then
/// indicator changes.
pub(super) fn convert_to_events(resp: SessionResponse, mods: ModifierSnapshot) -> PastieraResponse {
    let mut events = Vec::new();

    match resp.suggestions {
        SuggestionAction::Show(list) => events.push(PastieraEvent::ShowSuggestions {
            suggestions: convert_suggestions(&list),
        }),
        SuggestionAction::Hide => events.push(PastieraEvent::HideSuggestions),
        SuggestionAction::Keep => {}
    }

    if resp.shift_changed {
        events.push(PastieraEvent::ShiftChanged {
            active: mods.shift_active(),
            caps_lock: mods.caps_lock(),
        });
    }

    if let Some(nav) = resp.nav_mode {
        events.push(PastieraEvent::NavModeChanged {
            active: nav == NavModeEvent::Activated,
        });
    }

    PastieraResponse { events }
}
