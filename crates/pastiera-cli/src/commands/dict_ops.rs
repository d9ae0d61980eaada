use std::fs;
use std::path::Path;

use pastiera_core::dict::FrequencyDictionary;
use pastiera_core::unicode::Locale;

use super::die;

pub fn compile(input_file: &str, output_file: &str, locale: &str) {
    let text = die!(
        fs::read_to_string(input_file),
        "Error reading {input_file}: {}"
    );
    let dict = die!(
        FrequencyDictionary::from_word_list(&text, Locale::new(locale)),
        "Error parsing word list: {}"
    );
    let (entries, buckets) = dict.stats();
    eprintln!("Built {entries} entries ({buckets} prefix buckets), locale {locale}");

    die!(
        dict.save(Path::new(output_file)),
        "Error writing dictionary: {}"
    );
    let file_size = fs::metadata(output_file).map(|m| m.len()).unwrap_or(0);
    eprintln!(
        "Wrote {output_file} ({:.1} KB)",
        file_size as f64 / 1024.0
    );
}

pub fn info(file: &str) {
    let dict = die!(
        FrequencyDictionary::open(Path::new(file)),
        "Error opening {file}: {}"
    );
    let (entries, buckets) = dict.stats();
    println!("Locale: {}", dict.locale());
    println!("Entries: {entries}");
    println!("Prefix buckets: {buckets}");
    if let Some(top) = dict.iter().next() {
        println!("Most frequent: {} ({})", top.word, top.frequency);
    };
}

/// Print the entries of `file` in word-list format, most frequent first.
pub fn dump(file: &str, limit: Option<usize>) {
    let dict = die!(
        FrequencyDictionary::open(Path::new(file)),
        "Error opening {file}: {}"
    );
    for entry in dict.iter().take(limit.unwrap_or(usize::MAX)) {
        println!("{}\t{}", entry.word, entry.frequency);
    }
}
