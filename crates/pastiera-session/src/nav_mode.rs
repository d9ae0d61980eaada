//! Nav mode: a ctrl latch that turns letter keys into cursor keys.
//!
//! Double-tapping ctrl locks it; when nav mode is enabled that lock is owned
//! by nav mode and mapped keys produce [`NavDirection`]s. The host shows and
//! cancels its notification in response to [`NavModeEvent`]s.

use std::collections::HashMap;

use pastiera_core::settings::Settings;
use tracing::debug;

pub use pastiera_core::settings::NavDirection;

use crate::modifiers::{Latch, ModifierKey, ModifierStateController};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavModeEvent {
    Activated,
    Deactivated,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavModeConfig {
    pub enabled: bool,
    pub keymap: HashMap<u16, NavDirection>,
}

impl Default for NavModeConfig {
    fn default() -> Self {
        // KEYCODE_E / S / D / F
        let keymap = HashMap::from([
            (33, NavDirection::Up),
            (47, NavDirection::Left),
            (32, NavDirection::Down),
            (34, NavDirection::Right),
        ]);
        Self {
            enabled: true,
            keymap,
        }
    }
}

impl NavModeConfig {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            enabled: settings.nav_mode.enabled,
            keymap: settings.nav_mode.keymap().clone(),
        }
    }
}

#[derive(Debug, Default)]
pub struct NavModeController {
    config: NavModeConfig,
}

impl NavModeController {
    pub fn new(config: NavModeConfig) -> Self {
        Self { config }
    }

    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    pub fn is_active(&self, modifiers: &ModifierStateController) -> bool {
        modifiers.is_nav_mode_latched()
    }

    /// Whether ctrl and mapped keys should be routed here at all.
    pub fn handles_keys(&self, modifiers: &ModifierStateController) -> bool {
        self.config.enabled || self.is_active(modifiers)
    }

    pub fn on_ctrl_down(&self, modifiers: &mut ModifierStateController) -> bool {
        self.handles_keys(modifiers) && modifiers.key_down(ModifierKey::Ctrl)
    }

    /// Ctrl released at `now_ms`. A double tap locks ctrl and activates nav
    /// mode; the next tap releases it.
    pub fn on_ctrl_up(
        &self,
        modifiers: &mut ModifierStateController,
        now_ms: u64,
    ) -> Option<NavModeEvent> {
        if !self.handles_keys(modifiers) {
            return None;
        }
        let was_active = self.is_active(modifiers);
        modifiers.key_up(ModifierKey::Ctrl, now_ms);

        let locked = modifiers.latch(ModifierKey::Ctrl) == Latch::Locked;
        let event = match (was_active, locked) {
            (false, true) if self.config.enabled => {
                modifiers.claim_ctrl_latch_for_nav_mode();
                Some(NavModeEvent::Activated)
            }
            (true, false) => Some(NavModeEvent::Deactivated),
            _ => None,
        };
        if let Some(event) = event {
            debug!(?event, "nav mode");
        }
        event
    }

    /// Cursor direction for `key_code` while nav mode is active.
    pub fn map_key(&self, modifiers: &ModifierStateController, key_code: u16) -> Option<NavDirection> {
        if !self.is_active(modifiers) {
            return None;
        }
        self.config.keymap.get(&key_code).copied()
    }

    /// Leave nav mode, if active.
    pub fn exit(&self, modifiers: &mut ModifierStateController) -> Option<NavModeEvent> {
        if !self.is_active(modifiers) {
            return None;
        }
        modifiers.set_ctrl_nav_latch(false);
        Some(NavModeEvent::Deactivated)
    }
}
