use pastiera_core::suggest::SuggestionResult;

use crate::nav_mode::NavModeEvent;

/// What the host should do with the suggestion strip.
#[derive(Debug, Clone, PartialEq)]
pub enum SuggestionAction {
    /// Leave the strip as-is.
    Keep,
    /// Show or update the strip with these suggestions, best first.
    Show(Vec<SuggestionResult>),
    /// Hide the strip.
    Hide,
}

/// Result of feeding one event into an `InputSession`.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionResponse {
    pub suggestions: SuggestionAction,
    /// The shift latch changed; the host should refresh its shift indicator.
    pub shift_changed: bool,
    pub nav_mode: Option<NavModeEvent>,
}

impl SessionResponse {
    pub(crate) fn keep() -> Self {
        Self {
            suggestions: SuggestionAction::Keep,
            shift_changed: false,
            nav_mode: None,
        }
    }

    pub fn is_noop(&self) -> bool {
        self.suggestions == SuggestionAction::Keep && !self.shift_changed && self.nav_mode.is_none()
    }
}
