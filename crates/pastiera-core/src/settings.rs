//! Global settings loaded from TOML.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`
//!
//! Components never read the singleton directly; each has a config struct with
//! a `from_settings` constructor so tests can run on local values.

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

/// Upper bound for `suggestions.max_distance`. The DP row is pruned against
/// this value on every keystroke, so large caps cost real latency.
const MAX_EDIT_DISTANCE: usize = 4;

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub suggestions: SuggestionSettings,
    pub tracker: TrackerSettings,
    pub user_dict: UserDictSettings,
    pub modifiers: ModifierSettings,
    pub autocap: AutocapSettings,
    pub symbols: SymbolSettings,
    pub nav_mode: NavModeSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SuggestionSettings {
    pub limit: usize,
    pub accent_matching: bool,
    pub max_distance: usize,
    pub frequency_divisor: f64,
    pub user_boost: f64,
    pub prefix_caps: Vec<usize>,
    pub cache_capacity: usize,
    pub locale: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackerSettings {
    pub max_word_length: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserDictSettings {
    pub default_frequency: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModifierSettings {
    pub double_tap_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AutocapSettings {
    pub first_letter: bool,
    pub after_period: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SymbolSettings {
    pub auto_close: bool,
    #[serde(default)]
    page1: HashMap<String, String>,
    #[serde(default)]
    page2: HashMap<String, String>,
    /// Parsed pages: key_code → output text, index 0 is page 1.
    #[serde(skip)]
    pages_parsed: [HashMap<u16, String>; 2],
}

impl SymbolSettings {
    /// Key table of symbol page `page` (1 or 2). Any other page is empty.
    pub fn page(&self, page: u8) -> Option<&HashMap<u16, String>> {
        match page {
            1 | 2 => self.pages_parsed.get(usize::from(page) - 1),
            _ => None,
        }
    }

    /// Look up the output of `key_code` on symbol page `page`.
    pub fn symbol_get(&self, page: u8, key_code: u16) -> Option<&str> {
        self.page(page)?.get(&key_code).map(String::as_str)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavDirection {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NavModeSettings {
    pub enabled: bool,
    #[serde(default)]
    keymap: HashMap<String, NavDirection>,
    #[serde(skip)]
    keymap_parsed: HashMap<u16, NavDirection>,
}

impl NavModeSettings {
    pub fn keymap(&self) -> &HashMap<u16, NavDirection> {
        &self.keymap_parsed
    }

    pub fn keymap_get(&self, key_code: u16) -> Option<NavDirection> {
        self.keymap_parsed.get(&key_code).copied()
    }
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let mut s: Settings =
        toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    s.symbols.pages_parsed = [
        parse_symbol_page("symbols.page1", &s.symbols.page1)?,
        parse_symbol_page("symbols.page2", &s.symbols.page2)?,
    ];
    s.nav_mode.keymap_parsed = parse_key_codes("nav_mode.keymap", &s.nav_mode.keymap)?;
    Ok(s)
}

fn parse_key_code(section: &str, key_str: &str) -> Result<u16, SettingsError> {
    key_str.parse().map_err(|_| SettingsError::InvalidValue {
        field: format!("{section}.{key_str}"),
        reason: "key_code must be a u16 integer".to_string(),
    })
}

fn parse_key_codes<V: Clone>(
    section: &str,
    raw: &HashMap<String, V>,
) -> Result<HashMap<u16, V>, SettingsError> {
    raw.iter()
        .map(|(key_str, value)| Ok((parse_key_code(section, key_str)?, value.clone())))
        .collect()
}

fn parse_symbol_page(
    section: &str,
    raw: &HashMap<String, String>,
) -> Result<HashMap<u16, String>, SettingsError> {
    if let Some((key_str, _)) = raw.iter().find(|(_, text)| text.is_empty()) {
        return Err(SettingsError::InvalidValue {
            field: format!("{section}.{key_str}"),
            reason: "output text must not be empty".to_string(),
        });
    }
    parse_key_codes(section, raw)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    macro_rules! check_positive_usize {
        ($section:ident . $field:ident) => {
            if s.$section.$field == 0 {
                return Err(SettingsError::InvalidValue {
                    field: concat!(stringify!($section), ".", stringify!($field)).to_string(),
                    reason: "must be positive".to_string(),
                });
            }
        };
    }
    macro_rules! check_positive_f64 {
        ($section:ident . $field:ident) => {
            if !(s.$section.$field > 0.0 && s.$section.$field.is_finite()) {
                return Err(SettingsError::InvalidValue {
                    field: concat!(stringify!($section), ".", stringify!($field)).to_string(),
                    reason: "must be a positive finite number".to_string(),
                });
            }
        };
    }

    check_positive_usize!(suggestions.cache_capacity);
    check_positive_f64!(suggestions.frequency_divisor);
    check_positive_f64!(suggestions.user_boost);
    if s.suggestions.max_distance > MAX_EDIT_DISTANCE {
        return Err(SettingsError::InvalidValue {
            field: "suggestions.max_distance".to_string(),
            reason: format!("must be at most {MAX_EDIT_DISTANCE}"),
        });
    }
    if s.suggestions.prefix_caps.contains(&0) {
        return Err(SettingsError::InvalidValue {
            field: "suggestions.prefix_caps".to_string(),
            reason: "every cap must be positive".to_string(),
        });
    }
    if s.suggestions.locale.trim().is_empty() {
        return Err(SettingsError::InvalidValue {
            field: "suggestions.locale".to_string(),
            reason: "must not be empty".to_string(),
        });
    }

    check_positive_usize!(tracker.max_word_length);

    if s.modifiers.double_tap_ms == 0 {
        return Err(SettingsError::InvalidValue {
            field: "modifiers.double_tap_ms".to_string(),
            reason: "must be positive".to_string(),
        });
    }

    // limit = 0 is allowed and disables suggestions.

    Ok(())
}
