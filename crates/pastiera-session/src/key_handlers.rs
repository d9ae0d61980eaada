use tracing::debug_span;

use crate::modifiers::{Latch, ModifierKey};
use crate::nav_mode::{NavDirection, NavModeEvent};
use crate::sym_layout::{SymKey, SymKeyResult};
use crate::types::SessionResponse;
use crate::InputSession;

impl InputSession {
    /// Modifier key-down. Returns `false` for auto-repeat of a held key.
    pub fn on_modifier_down(&mut self, key: ModifierKey) -> bool {
        if key == ModifierKey::Ctrl && self.nav.handles_keys(&self.modifiers) {
            return self.nav.on_ctrl_down(&mut self.modifiers);
        }
        self.modifiers.key_down(key)
    }

    /// Modifier key-up at `now_ms` (host monotonic clock).
    pub fn on_modifier_up(&mut self, key: ModifierKey, now_ms: u64) -> SessionResponse {
        let _span = debug_span!("on_modifier_up", ?key).entered();
        let shift_before = self.modifiers.latch(ModifierKey::Shift);
        let mut resp = SessionResponse::keep();
        if key == ModifierKey::Ctrl && self.nav.handles_keys(&self.modifiers) {
            resp.nav_mode = self.nav.on_ctrl_up(&mut self.modifiers, now_ms);
        } else {
            self.modifiers.key_up(key, now_ms);
        }
        resp.shift_changed = self.modifiers.latch(ModifierKey::Shift) != shift_before;
        resp
    }

    /// Cursor direction for `key_code` while nav mode is active.
    pub fn map_nav_key(&self, key_code: u16) -> Option<NavDirection> {
        self.nav.map_key(&self.modifiers, key_code)
    }

    pub fn is_nav_mode_active(&self) -> bool {
        self.nav.is_active(&self.modifiers)
    }

    pub fn exit_nav_mode(&mut self) -> Option<NavModeEvent> {
        self.nav.exit(&mut self.modifiers)
    }

    /// Clear modifiers, e.g. when the keyboard is hidden.
    pub fn reset_modifiers(&mut self, preserve_nav_mode: bool) -> SessionResponse {
        let shift_before = self.modifiers.latch(ModifierKey::Shift);
        let nav_cancelled = self.modifiers.reset_modifiers(preserve_nav_mode);
        let mut resp = SessionResponse::keep();
        resp.shift_changed = shift_before != Latch::Off;
        if nav_cancelled {
            resp.nav_mode = Some(NavModeEvent::Deactivated);
        }
        resp
    }

    /// SYM key: cycle the symbol pages. Returns the page now shown.
    pub fn toggle_sym(&mut self) -> u8 {
        self.sym.toggle()
    }

    pub fn sym_page(&self) -> u8 {
        self.sym.current_page()
    }

    pub fn restore_sym_page(&mut self, page: i32) {
        self.sym.restore(page);
    }

    /// Route a key to the open symbol page, if any.
    pub fn on_sym_key(&mut self, key: SymKey) -> SymKeyResult {
        if !self.sym.is_active() {
            return SymKeyResult::NotHandled;
        }
        self.sym.handle_key_when_active(key)
    }
}
