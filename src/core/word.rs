//! Dictionary word representation
//!
//! A Word is a non-empty run of lowercase ASCII letters. Length is not fixed
//! here; a [`Dictionary`](super::Dictionary) enforces one length per instance.

use std::fmt;

/// A lowercase dictionary word
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is lowercased before validation.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The text is empty
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use word_weaver::core::Word;
    ///
    /// let word = Word::new("Cold").unwrap();
    /// assert_eq!(word.text(), "cold");
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("c0ld").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as bytes, one per letter
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false for a validated word
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Distinct letters in order of first appearance
    #[must_use]
    pub fn distinct_letters(&self) -> Vec<u8> {
        let mut seen = [false; 26];
        let mut letters = Vec::with_capacity(self.len());
        for &ch in self.chars() {
            let slot = &mut seen[usize::from(ch - b'a')];
            if !*slot {
                *slot = true;
                letters.push(ch);
            }
        }
        letters
    }

    /// Check whether `other` is one letter change away from this word
    #[inline]
    #[must_use]
    pub fn is_adjacent(&self, other: &Self) -> bool {
        is_adjacent(self, other)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Two words are adjacent iff they have equal length and differ in exactly one position
///
/// # Examples
/// ```
/// use word_weaver::core::{Word, is_adjacent};
///
/// let cold = Word::new("cold").unwrap();
/// let cord = Word::new("cord").unwrap();
/// let card = Word::new("card").unwrap();
///
/// assert!(is_adjacent(&cold, &cord));
/// assert!(!is_adjacent(&cold, &card));
/// assert!(!is_adjacent(&cold, &cold));
/// ```
#[must_use]
pub fn is_adjacent(a: &Word, b: &Word) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut differences = 0;
    for (x, y) in a.chars().iter().zip(b.chars()) {
        if x != y {
            differences += 1;
            if differences > 1 {
                return false;
            }
        }
    }

    differences == 1
}
