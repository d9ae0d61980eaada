//! Smart auto-capitalisation: field start, new line, and sentence end.

use pastiera_core::settings::Settings;

use crate::modifiers::ModifierStateController;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoCapitalizer {
    pub first_letter: bool,
    pub after_period: bool,
}

impl Default for AutoCapitalizer {
    fn default() -> Self {
        Self {
            first_letter: true,
            after_period: true,
        }
    }
}

impl AutoCapitalizer {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            first_letter: settings.autocap.first_letter,
            after_period: settings.autocap.after_period,
        }
    }

    /// Whether the next letter typed after `before` starts a sentence.
    pub fn should_capitalize(&self, before: &str) -> bool {
        if self.first_letter && (before.is_empty() || before.ends_with('\n')) {
            return true;
        }
        if !self.after_period {
            return false;
        }

        let mut rev = before.trim_end().chars().rev();
        match rev.next() {
            Some('!' | '?') => true,
            // An ellipsis does not end the sentence.
            Some('.') => rev.next() != Some('.'),
            _ => false,
        }
    }

    /// Same rule for a selection: the selected text will be replaced, so only
    /// what precedes `sel_start` counts. Offsets are in chars.
    pub fn should_capitalize_selection(&self, text: &str, sel_start: usize, sel_end: usize) -> bool {
        if sel_start > sel_end || sel_end > text.chars().count() {
            return false;
        }
        let before: String = text.chars().take(sel_start).collect();
        self.should_capitalize(&before)
    }

    /// Request or clear the automatic shift for the cursor after `before`.
    /// Returns `true` if the shift latch changed.
    pub fn apply(
        &self,
        modifiers: &mut ModifierStateController,
        before: &str,
        smart_features_disabled: bool,
    ) -> bool {
        if !smart_features_disabled && self.should_capitalize(before) {
            modifiers.request_auto_shift()
        } else {
            modifiers.clear_auto_shift()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modifiers::{Latch, ModifierConfig, ModifierKey, Provenance};

    #[test]
    fn test_field_start_and_newline() {
        let cap = AutoCapitalizer::default();
        assert!(cap.should_capitalize(""));
        assert!(cap.should_capitalize("ciao\n"));
        assert!(!cap.should_capitalize("ciao"));
        assert!(!cap.should_capitalize("ciao "));
    }

    #[test]
    fn test_after_sentence_punctuation() {
        let cap = AutoCapitalizer::default();
        assert!(cap.should_capitalize("Ciao. "));
        assert!(cap.should_capitalize("Ciao."));
        assert!(cap.should_capitalize("Davvero? "));
        assert!(cap.should_capitalize("Evviva!  "));
        assert!(cap.should_capitalize(". "));
        assert!(!cap.should_capitalize("Allora... "));
        assert!(!cap.should_capitalize("ciao, "));
    }

    #[test]
    fn test_rules_can_be_disabled() {
        let cap = AutoCapitalizer {
            first_letter: false,
            after_period: true,
        };
        assert!(!cap.should_capitalize(""));
        assert!(cap.should_capitalize("Fine. "));

        let cap = AutoCapitalizer {
            first_letter: true,
            after_period: false,
        };
        assert!(cap.should_capitalize(""));
        assert!(!cap.should_capitalize("Fine. "));
    }

    #[test]
    fn test_selection() {
        let cap = AutoCapitalizer::default();
        let text = "Fine. parola dopo";
        assert!(cap.should_capitalize_selection(text, 6, 12));
        assert!(!cap.should_capitalize_selection(text, 8, 12));
        assert!(cap.should_capitalize_selection(text, 0, 4));
        assert!(!cap.should_capitalize_selection(text, 5, 100));
        assert!(!cap.should_capitalize_selection(text, 7, 6));
    }

    #[test]
    fn test_apply_requests_and_clears_automatic_shift() {
        let cap = AutoCapitalizer::default();
        let mut mods = ModifierStateController::new(ModifierConfig::default());

        assert!(cap.apply(&mut mods, "", false));
        assert_eq!(mods.latch(ModifierKey::Shift), Latch::OneShot(Provenance::Automatic));
        // Already on: no change
        assert!(!cap.apply(&mut mods, "Ciao. ", false));

        assert!(cap.apply(&mut mods, "Ciao", false));
        assert_eq!(mods.latch(ModifierKey::Shift), Latch::Off);
    }

    #[test]
    fn test_apply_keeps_manual_shift() {
        let cap = AutoCapitalizer::default();
        let mut mods = ModifierStateController::new(ModifierConfig::default());
        mods.key_down(ModifierKey::Shift);
        mods.key_up(ModifierKey::Shift, 1_000);
        assert_eq!(mods.latch(ModifierKey::Shift), Latch::OneShot(Provenance::Manual));

        assert!(!cap.apply(&mut mods, "ciao", false));
        assert_eq!(mods.latch(ModifierKey::Shift), Latch::OneShot(Provenance::Manual));
    }

    #[test]
    fn test_apply_disabled_smart_features() {
        let cap = AutoCapitalizer::default();
        let mut mods = ModifierStateController::new(ModifierConfig::default());
        assert!(!cap.apply(&mut mods, "", true));
        assert_eq!(mods.latch(ModifierKey::Shift), Latch::Off);
    }
}
