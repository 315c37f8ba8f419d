//! Guess history for one hidden word and the consistency filter

use crate::core::{Pattern, Word};

/// One hidden-word session
///
/// History only grows; it is never rolled back.
#[derive(Debug, Clone)]
pub struct GameState {
    secret: Word,
    history: Vec<(Word, Pattern)>,
}

impl GameState {
    #[must_use]
    pub const fn new(secret: Word) -> Self {
        Self {
            secret,
            history: Vec::new(),
        }
    }

    /// Score a guess against the secret and record it
    pub fn guess(&mut self, word: Word) -> Pattern {
        let pattern = Pattern::calculate(&word, &self.secret);
        self.history.push((word, pattern.clone()));
        pattern
    }

    /// Guesses so far with their feedback
    #[must_use]
    pub fn history(&self) -> &[(Word, Pattern)] {
        &self.history
    }

    /// Number of guesses made
    #[must_use]
    pub fn turns(&self) -> usize {
        self.history.len()
    }

    /// Solved iff the last feedback is all correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.history
            .last()
            .is_some_and(|(_, pattern)| pattern.is_perfect())
    }

    /// Could `candidate` still be the secret?
    #[must_use]
    pub fn is_consistent(&self, candidate: &Word) -> bool {
        is_consistent(candidate, &self.history)
    }

    /// The hidden word, for reporting once play is over
    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }
}

/// Check that scoring every past guess against `candidate` reproduces the recorded feedback
///
/// # Examples
/// ```
/// use word_weaver::core::{Pattern, Word};
/// use word_weaver::solver::is_consistent;
///
/// let guess = Word::new("cold").unwrap();
/// let secret = Word::new("cord").unwrap();
/// let history = vec![(guess.clone(), Pattern::calculate(&guess, &secret))];
///
/// assert!(is_consistent(&secret, &history));
/// assert!(!is_consistent(&Word::new("warm").unwrap(), &history));
/// ```
#[must_use]
pub fn is_consistent(candidate: &Word, history: &[(Word, Pattern)]) -> bool {
    history
        .iter()
        .all(|(guess, observed)| Pattern::calculate(guess, candidate) == *observed)
}
