//! Word list loading utilities
//!
//! Files are split on any whitespace, so one word per line and several words
//! per line both work. Entries that are not plain words, or whose length
//! differs from the dictionary's, are dropped here so the core only ever sees
//! clean, length-homogeneous input.

use crate::core::{Dictionary, FrequencyEntry, FrequencyTable, Word};
use anyhow::{Context, Result};
use log::debug;
use std::fmt;
use std::fs;
use std::path::Path;

/// Load a dictionary from a file
///
/// With `word_len` unset, the first valid word fixes the length. Words in
/// `denied` are removed.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use word_weaver::wordlists::loader::load_dictionary;
///
/// let dictionary = load_dictionary("4_letter_words.txt", Some(4), &[]).unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_dictionary<P: AsRef<Path>>(
    path: P,
    word_len: Option<usize>,
    denied: &[String],
) -> Result<Dictionary> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read dictionary {}", path.display()))?;

    let dictionary = dictionary_from_text(&content, word_len)?;
    Ok(dictionary.without(denied.iter().map(String::as_str)))
}

/// Build a dictionary from whitespace-separated text
///
/// # Errors
///
/// Returns an error if the dictionary cannot be built from the kept words.
pub fn dictionary_from_text(content: &str, word_len: Option<usize>) -> Result<Dictionary> {
    let words = words_from_text(content);
    let expected = word_len.or_else(|| words.first().map(Word::len));

    let (kept, skipped): (Vec<Word>, Vec<Word>) = words
        .into_iter()
        .partition(|w| expected.is_none_or(|len| w.len() == len));
    if !skipped.is_empty() {
        debug!("Skipped {} words of the wrong length", skipped.len());
    }

    Ok(Dictionary::new(kept)?)
}

/// Read whitespace-separated tokens from a file (seed lists, denylists)
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn load_tokens<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    Ok(content
        .split_whitespace()
        .map(str::to_lowercase)
        .collect())
}

/// Valid words from whitespace-separated text, in order
#[must_use]
pub fn words_from_text(content: &str) -> Vec<Word> {
    content
        .split_whitespace()
        .filter_map(|token| Word::new(token).ok())
        .collect()
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use word_weaver::wordlists::loader::words_from_slice;
/// use word_weaver::wordlists::BUILTIN;
///
/// let words = words_from_slice(BUILTIN);
/// assert_eq!(words.len(), BUILTIN.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

/// Error type for malformed corpus records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrequencyError {
    MissingFrequency { line: usize },
    InvalidFrequency { line: usize, value: String },
    InvalidPluralFlag { line: usize, value: String },
}

impl fmt::Display for FrequencyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFrequency { line } => write!(f, "Line {line}: missing frequency"),
            Self::InvalidFrequency { line, value } => {
                write!(f, "Line {line}: invalid frequency '{value}'")
            }
            Self::InvalidPluralFlag { line, value } => {
                write!(f, "Line {line}: invalid plural flag '{value}'")
            }
        }
    }
}

impl std::error::Error for FrequencyError {}

/// Parse a frequency corpus
///
/// One record per line: `word frequency [plural]`, where the optional flag is
/// one of `plural`/`p`/`1`/`true` or `singular`/`s`/`0`/`false`. Blank lines
/// and lines starting with `#` are ignored, as are records whose word is not
/// a plain word of `word_len` letters.
///
/// # Errors
///
/// Returns `FrequencyError` for a record with a missing or non-numeric
/// frequency, or an unknown plural flag.
///
/// # Examples
/// ```
/// use word_weaver::wordlists::loader::parse_frequencies;
///
/// let table = parse_frequencies("cold 120\ncats 40 plural\n", Some(4)).unwrap();
/// assert_eq!(table.frequency("cold"), 120);
/// assert!(table.is_plural("cats"));
/// ```
pub fn parse_frequencies(
    content: &str,
    word_len: Option<usize>,
) -> Result<FrequencyTable, FrequencyError> {
    let mut entries = Vec::new();

    for (i, line) in content.lines().enumerate() {
        let line_number = i + 1;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut fields = line.split_whitespace();
        let Some(text) = fields.next() else {
            continue;
        };

        let frequency = fields
            .next()
            .ok_or(FrequencyError::MissingFrequency { line: line_number })?;
        let frequency = frequency
            .parse::<u64>()
            .map_err(|_| FrequencyError::InvalidFrequency {
                line: line_number,
                value: frequency.to_string(),
            })?;

        let is_plural = match fields.next() {
            None => false,
            Some("plural" | "p" | "1" | "true") => true,
            Some("singular" | "s" | "0" | "false") => false,
            Some(other) => {
                return Err(FrequencyError::InvalidPluralFlag {
                    line: line_number,
                    value: other.to_string(),
                });
            }
        };

        match Word::new(text) {
            Ok(word) if word_len.is_none_or(|len| word.len() == len) => {
                entries.push(FrequencyEntry {
                    word,
                    frequency,
                    is_plural,
                });
            }
            _ => debug!("Skipping corpus record '{text}' on line {line_number}"),
        }
    }

    Ok(FrequencyTable::new(entries))
}

/// Load a frequency corpus from a file
///
/// # Errors
///
/// Returns an error if the file cannot be read or holds a malformed record.
pub fn load_frequencies<P: AsRef<Path>>(
    path: P,
    word_len: Option<usize>,
) -> Result<FrequencyTable> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read frequency corpus {}", path.display()))?;

    parse_frequencies(&content, word_len)
        .with_context(|| format!("Malformed frequency corpus {}", path.display()))
}
