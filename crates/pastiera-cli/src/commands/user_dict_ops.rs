use std::path::{Path, PathBuf};

use pastiera_core::settings::settings;
use pastiera_core::user_dict::UserDictionary;

use super::die;

/// `$XDG_DATA_HOME/pastiera/user_dict.psuw`, falling back to `~/.local/share`.
pub fn default_user_dict_path() -> PathBuf {
    let base = std::env::var("XDG_DATA_HOME").unwrap_or_else(|_| {
        let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
        format!("{home}/.local/share")
    });
    Path::new(&base).join("pastiera").join("user_dict.psuw")
}

/// Open `path` with the locale and default frequency from settings.
pub fn open_user_dict(path: &Path) -> UserDictionary {
    let dict = die!(
        UserDictionary::open(path),
        "Error opening user dictionary: {}"
    );
    dict.configured(settings())
}

pub fn user_dict_add(path: &Path, word: &str, frequency: Option<u32>) {
    let dict = open_user_dict(path);
    let added = match frequency {
        Some(f) => dict.register_with_frequency(word, f),
        None => dict.register(word),
    };
    // Saved either way: re-registering can raise the frequency.
    die!(dict.save(path), "Error saving user dictionary: {}");
    if added {
        println!("Added: {word}");
    } else {
        println!("Already exists: {word}");
    }
}

pub fn user_dict_remove(path: &Path, word: &str) {
    let dict = open_user_dict(path);
    if dict.unregister(word) {
        die!(dict.save(path), "Error saving user dictionary: {}");
        println!("Removed: {word}");
    } else {
        println!("Not found: {word}");
    }
}

pub fn user_dict_list(path: &Path) {
    let dict = open_user_dict(path);
    let entries = dict.list();
    if entries.is_empty() {
        println!("(empty)");
    } else {
        for (word, frequency) in &entries {
            println!("{word}\t{frequency}");
        }
        println!("---");
        println!("{} entries", entries.len());
    }
}
