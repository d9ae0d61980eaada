//! Symbol pages reachable from the SYM key.

use std::collections::HashMap;

use pastiera_core::settings::Settings;

/// Page 0 means no symbol page is shown.
pub const SYM_PAGE_COUNT: u8 = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymLayoutConfig {
    pub auto_close: bool,
    pub page1: HashMap<u16, String>,
    pub page2: HashMap<u16, String>,
}

impl Default for SymLayoutConfig {
    fn default() -> Self {
        Self {
            auto_close: true,
            page1: HashMap::new(),
            page2: HashMap::new(),
        }
    }
}

impl SymLayoutConfig {
    pub fn from_settings(settings: &Settings) -> Self {
        let symbols = &settings.symbols;
        Self {
            auto_close: symbols.auto_close,
            page1: symbols.page(1).cloned().unwrap_or_default(),
            page2: symbols.page(2).cloned().unwrap_or_default(),
        }
    }
}

/// Keys that get special handling while a page is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymKey {
    Back,
    Enter,
    Alt,
    Code(u16),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SymKeyResult {
    /// Let the regular key path handle it.
    NotHandled,
    /// Commit `text` and swallow the key.
    Consume { text: String },
    /// Hand the key back to the platform default handler.
    CallSuper,
}

#[derive(Debug)]
pub struct SymLayoutController {
    config: SymLayoutConfig,
    page: u8,
}

impl SymLayoutController {
    pub fn new(config: SymLayoutConfig) -> Self {
        Self { config, page: 0 }
    }

    pub fn current_page(&self) -> u8 {
        self.page
    }

    pub fn is_active(&self) -> bool {
        self.page > 0
    }

    /// Cycle `0 → 1 → 2 → 0`, returning the new page.
    pub fn toggle(&mut self) -> u8 {
        self.page = (self.page + 1) % SYM_PAGE_COUNT;
        self.page
    }

    /// Returns `true` if a page was open.
    pub fn close(&mut self) -> bool {
        if self.page == 0 {
            return false;
        }
        self.page = 0;
        true
    }

    pub fn reset(&mut self) {
        self.page = 0;
    }

    /// Reopen a page saved by the host, clamped to a valid page.
    pub fn restore(&mut self, page: i32) {
        self.page = page.clamp(0, i32::from(SYM_PAGE_COUNT) - 1) as u8;
    }

    pub fn current_mappings(&self) -> Option<&HashMap<u16, String>> {
        match self.page {
            1 => Some(&self.config.page1),
            2 => Some(&self.config.page2),
            _ => None,
        }
    }

    pub fn handle_key_when_active(&mut self, key: SymKey) -> SymKeyResult {
        let auto_close = self.config.auto_close;
        let code = match key {
            SymKey::Back => {
                self.close();
                return SymKeyResult::CallSuper;
            }
            SymKey::Enter if auto_close => {
                self.close();
                return SymKeyResult::CallSuper;
            }
            SymKey::Enter => return SymKeyResult::NotHandled,
            SymKey::Alt => {
                self.close();
                return SymKeyResult::NotHandled;
            }
            SymKey::Code(code) => code,
        };

        let Some(text) = self.current_mappings().and_then(|m| m.get(&code)).cloned() else {
            return SymKeyResult::NotHandled;
        };
        if auto_close {
            self.close();
        }
        SymKeyResult::Consume { text }
    }
}
