//! Word solving command
//!
//! Plays one game against a hidden word and returns the transcript.

use crate::core::{Dictionary, Word};
use crate::solver::{OpeningGuessCache, RankingStrategy, SolveResult, Solver};

/// Configuration for solving a word
pub struct SolveConfig {
    pub secret: String,
    pub max_guesses: Option<usize>,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(secret: String) -> Self {
        Self {
            secret,
            max_guesses: None,
        }
    }
}

/// Solve a specific word using the whole dictionary as the candidate pool
///
/// A secret outside the dictionary is allowed; the game then ends
/// unsolvable once no candidate is left.
///
/// # Errors
///
/// Returns an error if:
/// - The secret is not a plain lowercase word
/// - The secret length differs from the dictionary's word length
pub fn solve_word<S: RankingStrategy>(
    config: &SolveConfig,
    strategy: S,
    dictionary: &Dictionary,
    cache: &mut OpeningGuessCache,
) -> Result<SolveResult, String> {
    let secret = Word::new(&config.secret).map_err(|e| format!("Invalid secret word: {e}"))?;

    if let Some(len) = dictionary.word_len()
        && len != secret.len()
    {
        return Err(format!("Secret word must have {len} letters"));
    }

    let solver = Solver::from_dictionary(strategy, dictionary).with_max_guesses(config.max_guesses);
    Ok(solver.solve(&secret, cache))
}
