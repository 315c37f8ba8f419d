//! Guess feedback pattern calculation and representation
//!
//! A pattern holds one [`Mark`] per letter position, aligned with the guess.
//! Marks carry the digits used by the compact code form:
//! - 1 = Absent (letter not available in the target)
//! - 2 = Present (letter in the target, different position)
//! - 3 = Correct (letter in this position)
//!
//! Digit 0 is never produced, so a code always has one digit per letter.

use super::Word;
use std::fmt;

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Mark {
    Absent = 1,
    Present = 2,
    Correct = 3,
}

impl Mark {
    /// The code digit for this mark
    #[inline]
    #[must_use]
    pub const fn digit(self) -> u8 {
        self as u8
    }

    /// Parse a single feedback symbol
    ///
    /// Accepts `G`/`g`/`3`/🟩, `Y`/`y`/`2`/🟨 and `-`/`_`/`1`/⬜.
    #[must_use]
    pub const fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '3' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '2' | '🟨' => Some(Self::Present),
            '-' | '_' | '1' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }

    const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Feedback pattern for a guess
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pattern {
    marks: Vec<Mark>,
}

impl Pattern {
    /// Build a pattern from explicit marks
    #[must_use]
    pub const fn new(marks: Vec<Mark>) -> Self {
        Self { marks }
    }

    /// The all-correct pattern for words of `len` letters
    #[must_use]
    pub fn perfect(len: usize) -> Self {
        Self::new(vec![Mark::Correct; len])
    }

    /// Calculate the pattern when `guess` is scored against `answer`
    ///
    /// Words of different lengths score as all absent.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact position matches correct and consume both positions
    /// 2. Second pass: for each unconsumed guess position, consume the leftmost
    ///    unconsumed answer position holding the same letter and mark present;
    ///    otherwise mark absent
    ///
    /// A letter guessed k times is credited at most as many times as it remains
    /// in the answer.
    ///
    /// # Examples
    /// ```
    /// use word_weaver::core::{Word, Pattern};
    ///
    /// let guess = Word::new("tree").unwrap();
    /// let answer = Word::new("reed").unwrap();
    ///
    /// // T(absent) R(present) E(correct) E(present)
    /// assert_eq!(Pattern::calculate(&guess, &answer).code(), "1232");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        let len = guess.len();
        if len != answer.len() {
            return Self::new(vec![Mark::Absent; len]);
        }

        let guess = guess.chars();
        let answer = answer.chars();
        let mut marks = vec![Mark::Absent; len];
        let mut consumed = vec![false; len];

        // First pass: exact matches
        // Allow: Index needed to access guess[i], answer[i] and both marks
        #[allow(clippy::needless_range_loop)]
        for i in 0..len {
            if guess[i] == answer[i] {
                marks[i] = Mark::Correct;
                consumed[i] = true;
            }
        }

        // Second pass: leftmost unconsumed match in the answer
        for i in 0..len {
            if marks[i] == Mark::Correct {
                continue;
            }
            if let Some(j) = (0..len).find(|&j| !consumed[j] && answer[j] == guess[i]) {
                consumed[j] = true;
                marks[i] = Mark::Present;
            }
        }

        Self::new(marks)
    }

    /// Per-position marks
    #[inline]
    #[must_use]
    pub fn marks(&self) -> &[Mark] {
        &self.marks
    }

    /// Number of positions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    /// True for a zero-length pattern
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Check if every position is correct
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        !self.marks.is_empty() && self.marks.iter().all(|&m| m == Mark::Correct)
    }

    /// Count the correct positions
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.marks.iter().filter(|&&m| m == Mark::Correct).count()
    }

    /// Count the present-but-misplaced positions
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.marks.iter().filter(|&&m| m == Mark::Present).count()
    }

    /// Digit code, most significant position first (e.g. "3121")
    #[must_use]
    pub fn code(&self) -> String {
        self.marks
            .iter()
            .map(|m| char::from(b'0' + m.digit()))
            .collect()
    }

    /// Parse a pattern from a string like "GY--", "3211" or "🟩🟨⬜⬜"
    ///
    /// # Examples
    /// ```
    /// use word_weaver::core::Pattern;
    ///
    /// let p1 = Pattern::parse("GY--").unwrap();
    /// let p2 = Pattern::parse("🟩🟨⬜⬜").unwrap();
    /// assert_eq!(p1, p2);
    /// assert_eq!(p1.code(), "3211");
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let marks = s
            .chars()
            .map(Mark::from_symbol)
            .collect::<Option<Vec<_>>>()?;

        if marks.is_empty() {
            return None;
        }

        Some(Self::new(marks))
    }

    /// Convert pattern to emoji string
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.marks.iter().map(|m| m.emoji()).collect()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(guess: &str, answer: &str) -> Pattern {
        Pattern::calculate(&Word::new(guess).unwrap(), &Word::new(answer).unwrap())
    }

    #[test]
    fn pattern_all_absent() {
        let pattern = score("abcd", "efgh");
        assert_eq!(pattern.code(), "1111");
        assert_eq!(pattern.count_correct(), 0);
        assert_eq!(pattern.count_present(), 0);
    }

    #[test]
    fn pattern_self_is_perfect() {
        for w in ["cold", "warm", "boom", "aaaa", "oaky"] {
            let pattern = score(w, w);
            assert!(pattern.is_perfect());
            assert_eq!(pattern, Pattern::perfect(4));
        }
    }

    #[test]
    fn pattern_duplicate_guess_letters_in_target() {
        // A(correct) B(present, target pos 2) C(absent) A(present, target pos 1)
        assert_eq!(score("abca", "aabb").code(), "3212");
    }

    #[test]
    fn pattern_duplicate_letters_not_double_counted() {
        // BEER has two E's, both consumed by exact matches
        let pattern = score("eeek", "beer");
        assert_eq!(pattern.code(), "1331");
        assert_eq!(pattern.count_correct(), 2);
        assert_eq!(pattern.count_present(), 0);
    }

    #[test]
    fn pattern_present_credit_limited_by_target_count() {
        // Only one O in LOUD: the first O is credited, the second is absent
        assert_eq!(score("oboe", "loud").code(), "2111");
    }

    #[test]
    fn pattern_correct_takes_priority_over_present() {
        // First O matches in place; the second O finds nothing left
        assert_eq!(score("lool", "bold").code(), "2311");
    }

    #[test]
    fn pattern_mismatched_lengths_all_absent() {
        let pattern = score("cold", "colder");
        assert_eq!(pattern.code(), "1111");
        assert!(!pattern.is_perfect());
    }

    #[test]
    fn pattern_code_never_contains_zero() {
        let pattern = score("xyzw", "abcd");
        assert_eq!(pattern.code().len(), 4);
        assert!(!pattern.code().contains('0'));
    }

    #[test]
    fn pattern_parse_valid() {
        let p1 = Pattern::parse("GY-_").unwrap();
        let p2 = Pattern::parse("🟩🟨⬜⬜").unwrap();
        let p3 = Pattern::parse("3211").unwrap();
        assert_eq!(p1, p2);
        assert_eq!(p1, p3);
        assert_eq!(p1.to_emoji(), "🟩🟨⬜⬜");
    }

    #[test]
    fn pattern_parse_invalid() {
        assert!(Pattern::parse("").is_none());
        assert!(Pattern::parse("GXG-").is_none());
        assert!(Pattern::parse("0123").is_none());
    }

    #[test]
    fn pattern_ordering_follows_code() {
        let low = Pattern::parse("1113").unwrap();
        let high = Pattern::parse("1131").unwrap();
        assert!(low < high);
    }
}
