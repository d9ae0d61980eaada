//! Shift / Ctrl / Alt latch state.
//!
//! Each modifier is `Off`, `OneShot` (applies to the next key) or `Locked`.
//! A one-shot records whether the user asked for it or auto-capitalisation
//! did, so automatic clearing never drops a shift the user pressed.

use pastiera_core::settings::Settings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModifierKey {
    Shift,
    Ctrl,
    Alt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provenance {
    Manual,
    Automatic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Latch {
    #[default]
    Off,
    OneShot(Provenance),
    /// Caps lock for shift, a sticky latch for ctrl and alt.
    Locked,
}

impl Latch {
    pub fn is_one_shot(self) -> bool {
        matches!(self, Latch::OneShot(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModifierConfig {
    pub double_tap_ms: u64,
}

impl Default for ModifierConfig {
    fn default() -> Self {
        Self { double_tap_ms: 300 }
    }
}

impl ModifierConfig {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            double_tap_ms: settings.modifiers.double_tap_ms,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct KeyState {
    /// Logically held: key-down seen and not yet released.
    pressed: bool,
    /// Hardware state. Survives `reset_modifiers`, so releasing a key held
    /// across a reset does not count as a tap.
    physically_pressed: bool,
    latch: Latch,
    /// Another key was typed while this one was held.
    chorded: bool,
    last_release_ms: Option<u64>,
}

impl KeyState {
    fn released(physically_pressed: bool) -> Self {
        Self {
            physically_pressed,
            ..Self::default()
        }
    }
}

/// Plain copyable view of every modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModifierSnapshot {
    pub shift: Latch,
    pub shift_pressed: bool,
    pub shift_physically_pressed: bool,
    pub ctrl: Latch,
    pub ctrl_pressed: bool,
    pub ctrl_physically_pressed: bool,
    pub ctrl_latch_from_nav_mode: bool,
    pub alt: Latch,
    pub alt_pressed: bool,
    pub alt_physically_pressed: bool,
}

impl ModifierSnapshot {
    pub fn caps_lock(&self) -> bool {
        self.shift == Latch::Locked
    }

    /// Whether the next letter should be upper case.
    pub fn shift_active(&self) -> bool {
        self.shift_pressed || self.shift != Latch::Off
    }
}

#[derive(Debug, Default)]
pub struct ModifierStateController {
    config: ModifierConfig,
    shift: KeyState,
    ctrl: KeyState,
    alt: KeyState,
    ctrl_latch_from_nav_mode: bool,
}

impl ModifierStateController {
    pub fn new(config: ModifierConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    fn state(&self, key: ModifierKey) -> &KeyState {
        match key {
            ModifierKey::Shift => &self.shift,
            ModifierKey::Ctrl => &self.ctrl,
            ModifierKey::Alt => &self.alt,
        }
    }

    fn state_mut(&mut self, key: ModifierKey) -> &mut KeyState {
        match key {
            ModifierKey::Shift => &mut self.shift,
            ModifierKey::Ctrl => &mut self.ctrl,
            ModifierKey::Alt => &mut self.alt,
        }
    }

    pub fn latch(&self, key: ModifierKey) -> Latch {
        self.state(key).latch
    }

    pub fn is_pressed(&self, key: ModifierKey) -> bool {
        self.state(key).pressed
    }

    pub fn is_physically_pressed(&self, key: ModifierKey) -> bool {
        self.state(key).physically_pressed
    }

    pub fn caps_lock(&self) -> bool {
        self.shift.latch == Latch::Locked
    }

    pub fn ctrl_latch_from_nav_mode(&self) -> bool {
        self.ctrl_latch_from_nav_mode
    }

    /// Key-down. Returns `false` when the key is already held (auto-repeat).
    pub fn key_down(&mut self, key: ModifierKey) -> bool {
        let state = self.state_mut(key);
        if state.pressed {
            return false;
        }
        state.pressed = true;
        state.physically_pressed = true;
        state.chorded = false;
        true
    }

    /// Key-up at `now_ms`. Returns `true` when the latch changed.
    ///
    /// A tap advances `Off → OneShot → Locked` (the second tap must land
    /// within `double_tap_ms` of the first release) and `Locked → Off`. A key
    /// used as part of a chord leaves the latch alone.
    pub fn key_up(&mut self, key: ModifierKey, now_ms: u64) -> bool {
        let double_tap_ms = self.config.double_tap_ms;
        let state = self.state_mut(key);
        let was_pressed = state.pressed;
        state.pressed = false;
        state.physically_pressed = false;
        if !was_pressed || state.chorded {
            state.chorded = false;
            return false;
        }

        let double_tap = state
            .last_release_ms
            .is_some_and(|t| now_ms.saturating_sub(t) <= double_tap_ms);
        state.last_release_ms = Some(now_ms);

        let before = state.latch;
        state.latch = match before {
            Latch::Off => Latch::OneShot(Provenance::Manual),
            Latch::OneShot(_) if double_tap => Latch::Locked,
            Latch::OneShot(_) | Latch::Locked => Latch::Off,
        };
        let changed = state.latch != before;
        if key == ModifierKey::Ctrl && self.ctrl.latch != Latch::Locked {
            self.ctrl_latch_from_nav_mode = false;
        }
        changed
    }

    /// A non-modifier key was typed: held modifiers become chords and every
    /// one-shot is spent. Returns `true` if any latch changed.
    pub fn on_regular_key(&mut self) -> bool {
        for state in [&mut self.shift, &mut self.ctrl, &mut self.alt] {
            if state.pressed {
                state.chorded = true;
            }
        }
        self.consume_one_shot()
    }

    /// Clear every `OneShot` latch. Returns `true` if any was set.
    pub fn consume_one_shot(&mut self) -> bool {
        let mut changed = false;
        for state in [&mut self.shift, &mut self.ctrl, &mut self.alt] {
            if state.latch.is_one_shot() {
                state.latch = Latch::Off;
                changed = true;
            }
        }
        changed
    }

    /// Turn on an automatic one-shot shift. Only applies from `Off`, so it
    /// never downgrades caps lock or relabels a manual shift.
    pub fn request_auto_shift(&mut self) -> bool {
        if self.shift.latch != Latch::Off {
            return false;
        }
        self.shift.latch = Latch::OneShot(Provenance::Automatic);
        true
    }

    /// Clear a shift that auto-capitalisation turned on. Manual state stays.
    pub fn clear_auto_shift(&mut self) -> bool {
        if self.shift.latch != Latch::OneShot(Provenance::Automatic) {
            return false;
        }
        self.shift.latch = Latch::Off;
        true
    }

    /// Lock (or release) ctrl on behalf of nav mode.
    pub fn set_ctrl_nav_latch(&mut self, active: bool) {
        self.ctrl.latch = if active { Latch::Locked } else { Latch::Off };
        self.ctrl_latch_from_nav_mode = active;
    }

    /// Mark an existing ctrl lock as nav-mode owned.
    pub fn claim_ctrl_latch_for_nav_mode(&mut self) -> bool {
        if self.ctrl.latch != Latch::Locked {
            return false;
        }
        self.ctrl_latch_from_nav_mode = true;
        true
    }

    pub fn is_nav_mode_latched(&self) -> bool {
        self.ctrl.latch == Latch::Locked && self.ctrl_latch_from_nav_mode
    }

    /// Clear all modifier state. With `preserve_nav_mode` a ctrl lock
    /// survives and is marked nav-mode owned. Returns `true` if a nav-mode
    /// latch was cancelled.
    pub fn reset_modifiers(&mut self, preserve_nav_mode: bool) -> bool {
        let keep_ctrl = preserve_nav_mode && self.ctrl.latch == Latch::Locked;
        let nav_cancelled = !keep_ctrl && self.ctrl_latch_from_nav_mode;

        self.shift = KeyState::released(self.shift.physically_pressed);
        self.alt = KeyState::released(self.alt.physically_pressed);
        self.ctrl = KeyState::released(self.ctrl.physically_pressed);
        if keep_ctrl {
            self.ctrl.latch = Latch::Locked;
        }
        self.ctrl_latch_from_nav_mode = keep_ctrl;
        nav_cancelled
    }

    pub fn snapshot(&self) -> ModifierSnapshot {
        ModifierSnapshot {
            shift: self.shift.latch,
            shift_pressed: self.shift.pressed,
            shift_physically_pressed: self.shift.physically_pressed,
            ctrl: self.ctrl.latch,
            ctrl_pressed: self.ctrl.pressed,
            ctrl_physically_pressed: self.ctrl.physically_pressed,
            ctrl_latch_from_nav_mode: self.ctrl_latch_from_nav_mode,
            alt: self.alt.latch,
            alt_pressed: self.alt.pressed,
            alt_physically_pressed: self.alt.physically_pressed,
        }
    }
}
