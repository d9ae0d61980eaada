use std::fs;

use pastiera_core::settings;

use super::die;

pub fn settings_export() {
    print!("{}", settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(settings::parse_settings_toml(&content), "Error: {}");
    println!(
        "OK: suggestions.limit={}, suggestions.max_distance={}, suggestions.locale={}, tracker.max_word_length={}",
        s.suggestions.limit, s.suggestions.max_distance, s.suggestions.locale, s.tracker.max_word_length
    );
}

/// Install a custom settings file before any engine is built.
pub fn load_custom(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    die!(settings::init_custom(content), "Error: {}");
}
