//! Guessing loop driving a game to convergence

use super::cache::{CacheKey, OpeningGuessCache};
use super::entropy::calculate_entropy;
use super::game::GameState;
use super::strategy::RankingStrategy;
use crate::core::{Dictionary, Pattern, Word};
use log::{debug, trace};

/// How a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveOutcome {
    /// Last feedback was all correct
    Solved,
    /// No consistent candidate remained
    Unsolvable,
    /// The configured guess limit was reached first
    OutOfGuesses,
}

/// A single guess step in the transcript
#[derive(Debug, Clone)]
pub struct GuessStep {
    pub word: String,
    pub pattern: Pattern,
    pub candidates_before: usize,
    pub candidates_after: usize,
    pub entropy: Option<f64>,
}

/// Result of solving one hidden word
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub secret: String,
    pub outcome: SolveOutcome,
    pub guesses: Vec<GuessStep>,
}

impl SolveResult {
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.outcome == SolveOutcome::Solved
    }

    /// Ordered (guess, feedback) pairs
    pub fn transcript(&self) -> impl Iterator<Item = (&str, &Pattern)> {
        self.guesses.iter().map(|step| (step.word.as_str(), &step.pattern))
    }
}

/// Guessing engine
///
/// Coordinates the solving process using a given strategy. Every guess is
/// taken from the pool of candidates still consistent with the history.
pub struct Solver<'a, S: RankingStrategy> {
    strategy: S,
    candidates: Vec<&'a Word>,
    max_guesses: Option<usize>,
}

impl<'a, S: RankingStrategy> Solver<'a, S> {
    /// Create a solver over an ordered candidate pool
    ///
    /// Pool order is the tie-break order for every ranking.
    pub fn new(strategy: S, candidates: Vec<&'a Word>) -> Self {
        Self {
            strategy,
            candidates,
            max_guesses: None,
        }
    }

    /// Create a solver whose pool is the whole dictionary in its own order
    pub fn from_dictionary(strategy: S, dictionary: &'a Dictionary) -> Self {
        Self::new(strategy, dictionary.iter().collect())
    }

    /// Stop after `limit` guesses
    #[must_use]
    pub fn with_max_guesses(mut self, limit: Option<usize>) -> Self {
        self.max_guesses = limit;
        self
    }

    /// The ranking strategy
    pub const fn strategy(&self) -> &S {
        &self.strategy
    }

    /// The starting candidate pool
    pub fn candidates(&self) -> &[&'a Word] {
        &self.candidates
    }

    /// Best guess for an empty history, memoized per strategy configuration
    /// and starting pool
    pub fn opening_guess(&self, cache: &mut OpeningGuessCache) -> Option<&'a Word> {
        let key = CacheKey::for_game(&self.strategy, &self.candidates);
        let opening = cache.get_or_compute(key, || self.strategy.best(&self.candidates).cloned())?;

        self.candidates
            .iter()
            .copied()
            .find(|w| **w == opening)
            .or_else(|| self.strategy.best(&self.candidates))
    }

    /// Best guess among the given consistent pool
    pub fn next_guess(&self, pool: &[&'a Word]) -> Option<&'a Word> {
        if pool.len() == 1 {
            return Some(pool[0]);
        }
        self.strategy.best(pool)
    }

    /// Play a full game against `secret`
    ///
    /// # Examples
    /// ```
    /// use word_weaver::core::{Dictionary, Word};
    /// use word_weaver::solver::{EntropyStrategy, OpeningGuessCache, Solver};
    ///
    /// let words = ["cold", "cord", "card", "ward", "warm"].map(|w| Word::new(w).unwrap());
    /// let dictionary = Dictionary::new(words).unwrap();
    /// let solver = Solver::from_dictionary(EntropyStrategy::default(), &dictionary);
    /// let mut cache = OpeningGuessCache::new();
    ///
    /// let result = solver.solve(&Word::new("ward").unwrap(), &mut cache);
    /// assert!(result.is_solved());
    /// assert_eq!(result.guesses.last().unwrap().word, "ward");
    /// ```
    pub fn solve(&self, secret: &Word, cache: &mut OpeningGuessCache) -> SolveResult {
        let mut game = GameState::new(secret.clone());
        let mut pool = self.candidates.clone();
        let mut guesses = Vec::new();

        let outcome = loop {
            if game.is_solved() {
                break SolveOutcome::Solved;
            }
            if self.max_guesses.is_some_and(|limit| game.turns() >= limit) {
                break SolveOutcome::OutOfGuesses;
            }

            let guess = if game.turns() == 0 {
                self.opening_guess(cache)
            } else {
                self.next_guess(&pool)
            };
            let Some(guess) = guess else {
                debug!("No candidates remain for {secret}");
                break SolveOutcome::Unsolvable;
            };

            let candidates_before = pool.len();
            let entropy = (candidates_before > 1).then(|| calculate_entropy(guess, &pool));

            let pattern = game.guess(guess.clone());
            pool.retain(|candidate| game.is_consistent(candidate));
            trace!(
                "Guess {guess} -> {pattern}: {candidates_before} -> {} candidates",
                pool.len()
            );

            guesses.push(GuessStep {
                word: guess.text().to_string(),
                pattern,
                candidates_before,
                candidates_after: pool.len(),
                entropy,
            });
        };

        SolveResult {
            secret: secret.text().to_string(),
            outcome,
            guesses,
        }
    }
}
