//! Character-level Unicode classification and word normalization.
//!
//! Every dictionary index and the suggestion engine normalize through
//! [`normalize_word`], so prefix keys and query strings always agree.

use std::fmt;

use unic_ucd_category::GeneralCategory;
use unicode_normalization::UnicodeNormalization;

/// Language used for case mapping.
///
/// Only the primary language subtag matters: `"tr-TR"`, `"tr_TR"` and `"tr"`
/// all select Turkish dotted/dotless I handling.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Locale {
    language: String,
}

impl Locale {
    pub fn new(tag: &str) -> Self {
        let language = tag
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        Self { language }
    }

    /// Locale-independent case mapping.
    pub fn root() -> Self {
        Self::default()
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    fn is_turkic(&self) -> bool {
        matches!(self.language.as_str(), "tr" | "az")
    }

    pub fn lowercase(&self, s: &str) -> String {
        if !self.is_turkic() {
            return s.to_lowercase();
        }
        let mut out = String::with_capacity(s.len());
        for c in s.chars() {
            match c {
                'I' => out.push('ı'),
                'İ' => out.push('i'),
                _ => out.extend(c.to_lowercase()),
            }
        }
        out
    }

    pub fn uppercase(&self, s: &str) -> String {
        if !self.is_turkic() {
            return s.to_uppercase();
        }
        let mut out = String::with_capacity(s.len());
        for c in s.chars() {
            match c {
                'i' => out.push('İ'),
                'ı' => out.push('I'),
                _ => out.extend(c.to_uppercase()),
            }
        }
        out
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.language)
    }
}

pub fn is_letter(c: char) -> bool {
    GeneralCategory::of(c).is_letter()
}

/// Letters and decimal digits of any script.
pub fn is_word_char(c: char) -> bool {
    let category = GeneralCategory::of(c);
    category.is_letter() || category == GeneralCategory::DecimalNumber
}

/// Map typographic apostrophes to `'`.
pub fn normalize_apostrophe(c: char) -> char {
    match c {
        '\u{2019}' | '\u{2018}' | '\u{02BC}' => '\'',
        _ => c,
    }
}

/// Canonical decomposition followed by removal of nonspacing marks.
pub fn strip_accents(s: &str) -> String {
    s.nfd()
        .filter(|&c| GeneralCategory::of(c) != GeneralCategory::NonspacingMark)
        .collect()
}

/// Lowercase, strip diacritics, and drop everything that is not a letter.
pub fn normalize_word(word: &str, locale: &Locale) -> String {
    strip_accents(&locale.lowercase(word))
        .chars()
        .filter(|&c| is_letter(c))
        .collect()
}

/// Casing pattern of a typed word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseType {
    /// No cased letters at all (digits, punctuation, caseless scripts).
    NoLetters,
    /// "casa"
    AllLower,
    /// "Casa"
    FirstUpper,
    /// "CASA"
    AllUpper,
    /// "caSa"
    Complex,
}

pub fn detect_case(word: &str) -> CaseType {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return CaseType::NoLetters;
    };

    let first_uc = first.is_uppercase();
    let mut no_letters = !first_uc && !first.is_lowercase();
    let mut all_uc = !first.is_lowercase();
    let mut rest_lc = true;

    for c in chars {
        if c.is_uppercase() {
            no_letters = false;
            rest_lc = false;
        }
        if c.is_lowercase() {
            no_letters = false;
            all_uc = false;
        }
    }

    if no_letters {
        CaseType::NoLetters
    } else if all_uc {
        CaseType::AllUpper
    } else if !rest_lc {
        CaseType::Complex
    } else if first_uc {
        CaseType::FirstUpper
    } else {
        CaseType::AllLower
    }
}

/// Case pattern to carry over when `typed` is replaced by a suggestion.
///
/// A single capital letter ("I", "C") reads as sentence case, not caps lock.
pub fn replacement_case(typed: &str) -> CaseType {
    match detect_case(typed) {
        CaseType::AllUpper if typed.chars().filter(|c| c.is_uppercase()).count() < 2 => {
            CaseType::FirstUpper
        }
        other => other,
    }
}

/// Re-case `candidate` after `case`. `AllLower`, `Complex` and `NoLetters`
/// leave the dictionary spelling untouched.
pub fn apply_case(candidate: &str, case: CaseType, locale: &Locale) -> String {
    match case {
        CaseType::AllUpper => locale.uppercase(candidate),
        CaseType::FirstUpper => {
            let mut chars = candidate.chars();
            match chars.next() {
                Some(first) => {
                    let mut out = locale.uppercase(&first.to_string());
                    out.push_str(chars.as_str());
                    out
                }
                None => String::new(),
            }
        }
        CaseType::AllLower | CaseType::Complex | CaseType::NoLetters => candidate.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_word() {
        let it = Locale::new("it");
        assert_eq!(normalize_word("Perché", &it), "perche");
        assert_eq!(normalize_word("l'albero", &it), "lalbero");
        assert_eq!(normalize_word("Città!", &it), "citta");
        assert_eq!(normalize_word("abc123", &it), "abc");
        assert_eq!(normalize_word("Привет", &it), "привет");
        assert_eq!(normalize_word("123", &it), "");
        assert_eq!(normalize_word("", &it), "");
    }

    #[test]
    fn test_normalize_decomposed_input() {
        let root = Locale::root();
        assert_eq!(normalize_word("perche\u{0301}", &root), "perche");
    }

    #[test]
    fn test_strip_accents() {
        assert_eq!(strip_accents("àèìòù"), "aeiou");
        assert_eq!(strip_accents("naïve"), "naive");
        assert_eq!(strip_accents("plain"), "plain");
    }

    #[test]
    fn test_turkish_lowercase() {
        let tr = Locale::new("tr-TR");
        assert_eq!(tr.language(), "tr");
        assert_eq!(tr.lowercase("IŞIK"), "ışık");
        assert_eq!(tr.lowercase("İstanbul"), "istanbul");
        assert_eq!(tr.uppercase("istanbul"), "İSTANBUL");

        let it = Locale::new("it_IT");
        assert_eq!(it.lowercase("IO"), "io");
    }

    #[test]
    fn test_apostrophe_variants() {
        assert_eq!(normalize_apostrophe('\u{2019}'), '\'');
        assert_eq!(normalize_apostrophe('\u{2018}'), '\'');
        assert_eq!(normalize_apostrophe('\u{02BC}'), '\'');
        assert_eq!(normalize_apostrophe('a'), 'a');
    }

    #[test]
    fn test_word_chars() {
        assert!(is_word_char('a'));
        assert!(is_word_char('7'));
        assert!(is_word_char('ж'));
        assert!(is_word_char('字'));
        assert!(!is_word_char(' '));
        assert!(!is_word_char('\''));
        assert!(!is_word_char('.'));
        assert!(is_word_char('٣'));
        assert!(!is_word_char('²'));
        assert!(!is_word_char('½'));
        assert!(!is_word_char('Ⅻ'));
    }

    #[test]
    fn test_detect_case() {
        assert_eq!(detect_case("casa"), CaseType::AllLower);
        assert_eq!(detect_case("Casa"), CaseType::FirstUpper);
        assert_eq!(detect_case("CASA"), CaseType::AllUpper);
        assert_eq!(detect_case("caSa"), CaseType::Complex);
        assert_eq!(detect_case("123"), CaseType::NoLetters);
        assert_eq!(detect_case(""), CaseType::NoLetters);
    }

    #[test]
    fn test_replacement_case() {
        assert_eq!(replacement_case("C"), CaseType::FirstUpper);
        assert_eq!(replacement_case("CA"), CaseType::AllUpper);
        assert_eq!(replacement_case("ca"), CaseType::AllLower);
    }

    #[test]
    fn test_apply_case() {
        let it = Locale::new("it");
        assert_eq!(apply_case("casa", CaseType::FirstUpper, &it), "Casa");
        assert_eq!(apply_case("casa", CaseType::AllUpper, &it), "CASA");
        assert_eq!(apply_case("casa", CaseType::AllLower, &it), "casa");
        assert_eq!(apply_case("iPhone", CaseType::AllLower, &it), "iPhone");
        assert_eq!(apply_case("", CaseType::FirstUpper, &it), "");
    }
}
