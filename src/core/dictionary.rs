//! Ordered, length-homogeneous word collection
//!
//! Insertion order is load-bearing: every search and ranking iterates the
//! dictionary in this order, so it decides which of several equal branches
//! or equal-scoring candidates comes first.

use super::Word;
use rustc_hash::FxHashMap;
use std::fmt;

/// An ordered set of equal-length words
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<Word>,
    index: FxHashMap<String, usize>,
}

/// Error type for dictionary construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionaryError {
    MixedLengths { expected: usize, word: String },
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MixedLengths { expected, word } => write!(
                f,
                "Dictionary words must all have {expected} letters, got '{word}' ({} letters)",
                word.len()
            ),
        }
    }
}

impl std::error::Error for DictionaryError {}

impl Dictionary {
    /// Build a dictionary, keeping the first occurrence of each word
    ///
    /// # Errors
    /// Returns `DictionaryError::MixedLengths` if any word's length differs
    /// from the first word's.
    ///
    /// # Examples
    /// ```
    /// use word_weaver::core::{Dictionary, Word};
    ///
    /// let words = ["cold", "cord", "cold"].map(|w| Word::new(w).unwrap());
    /// let dictionary = Dictionary::new(words).unwrap();
    /// assert_eq!(dictionary.len(), 2);
    /// assert_eq!(dictionary.word_len(), Some(4));
    /// ```
    pub fn new(words: impl IntoIterator<Item = Word>) -> Result<Self, DictionaryError> {
        let mut dictionary = Self::default();

        for word in words {
            if let Some(expected) = dictionary.word_len()
                && word.len() != expected
            {
                return Err(DictionaryError::MixedLengths {
                    expected,
                    word: word.text().to_string(),
                });
            }

            if !dictionary.index.contains_key(word.text()) {
                dictionary
                    .index
                    .insert(word.text().to_string(), dictionary.words.len());
                dictionary.words.push(word);
            }
        }

        Ok(dictionary)
    }

    /// Letter count shared by every word, `None` when empty
    #[must_use]
    pub fn word_len(&self) -> Option<usize> {
        self.words.first().map(Word::len)
    }

    /// Number of words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True if the dictionary holds no words
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words in insertion order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Iterate words in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    /// Membership test in O(1)
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.index.contains_key(word.text())
    }

    /// Position of a word in insertion order
    #[must_use]
    pub fn position(&self, text: &str) -> Option<usize> {
        self.index.get(text).copied()
    }

    /// Look up the stored word with this text
    #[must_use]
    pub fn get(&self, text: &str) -> Option<&Word> {
        self.position(text).map(|i| &self.words[i])
    }

    /// Copy of this dictionary without the denied words, order preserved
    #[must_use]
    pub fn without<'a>(&self, denied: impl IntoIterator<Item = &'a str>) -> Self {
        let denied: rustc_hash::FxHashSet<&str> = denied.into_iter().collect();
        let words = self
            .words
            .iter()
            .filter(|w| !denied.contains(w.text()))
            .cloned();

        // Subset of a homogeneous dictionary, cannot mix lengths
        Self::new(words).unwrap_or_default()
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}
