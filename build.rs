//! Build script embedding the builtin dictionary
//!
//! Splits `data/four_letter_words.txt` on whitespace, checks that every entry
//! is a lowercase ASCII word of one shared length, drops repeats, and writes
//! the result as a const slice.

use std::collections::HashSet;
use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

const WORD_LIST: &str = "data/four_letter_words.txt";

fn main() {
    println!("cargo:rerun-if-changed={WORD_LIST}");

    let content = fs::read_to_string(WORD_LIST)
        .unwrap_or_else(|e| panic!("Failed to read {WORD_LIST}: {e}"));
    let words = checked_words(&content);

    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    let out_path = Path::new(&out_dir).join("builtin.rs");
    fs::write(&out_path, render(&words))
        .unwrap_or_else(|e| panic!("Failed to write {}: {e}", out_path.display()));
}

fn checked_words(content: &str) -> Vec<&str> {
    let mut seen = HashSet::new();
    let mut words = Vec::new();
    let mut word_len = None;

    for word in content.split_whitespace() {
        assert!(
            word.bytes().all(|b| b.is_ascii_lowercase()),
            "{WORD_LIST}: '{word}' is not a lowercase word"
        );
        let len = *word_len.get_or_insert(word.len());
        assert_eq!(word.len(), len, "{WORD_LIST}: '{word}' is not {len} letters");

        if seen.insert(word) {
            words.push(word);
        }
    }

    words
}

fn render(words: &[&str]) -> String {
    let mut out = String::new();
    let count = words.len();

    writeln!(out, "// Generated from {WORD_LIST} ({count} words)").unwrap();
    writeln!(out).unwrap();
    writeln!(out, "/// Builtin dictionary in file order").unwrap();
    writeln!(out, "pub const BUILTIN: &[&str] = &[").unwrap();
    for word in words {
        writeln!(out, "    {word:?},").unwrap();
    }
    writeln!(out, "];").unwrap();
    writeln!(out).unwrap();
    writeln!(out, "/// Number of words in BUILTIN").unwrap();
    writeln!(out, "pub const BUILTIN_COUNT: usize = {count};").unwrap();

    out
}
