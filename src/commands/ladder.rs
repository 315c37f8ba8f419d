//! Ladder command
//!
//! Finds every shortest chain between consecutive pairs of words.

use crate::core::{Dictionary, Word};
use crate::ladder::find_shortest_paths;

/// Words to ladder, taken two at a time as (start, target)
pub struct LadderConfig {
    pub keys: Vec<String>,
}

impl LadderConfig {
    #[must_use]
    pub const fn new(keys: Vec<String>) -> Self {
        Self { keys }
    }

    /// Start/target pairs in order
    ///
    /// # Errors
    ///
    /// Returns an error if the number of words is odd.
    pub fn pairs(&self) -> Result<Vec<(&str, &str)>, String> {
        if self.keys.len() % 2 != 0 {
            return Err(format!(
                "Expected start/target pairs, got {} words",
                self.keys.len()
            ));
        }

        Ok(self
            .keys
            .chunks_exact(2)
            .map(|pair| (pair[0].as_str(), pair[1].as_str()))
            .collect())
    }
}

/// Result of laddering one pair
#[derive(Debug, Clone)]
pub struct LadderOutcome {
    pub start: String,
    pub target: String,
    pub solution_count: usize,
    pub depth: Option<usize>,
    pub target_missing: bool,
    pub explored: usize,
    pub chains: Vec<Vec<String>>,
}

/// Ladder a single pair
///
/// The start word need not be in the dictionary; a target outside it yields
/// no solutions with `target_missing` set.
///
/// # Errors
///
/// Returns an error if either word is not a plain lowercase word.
pub fn solve_ladder(
    start: &str,
    target: &str,
    dictionary: &Dictionary,
) -> Result<LadderOutcome, String> {
    let start_word = Word::new(start).map_err(|e| format!("Invalid start word: {e}"))?;
    let target_word = Word::new(target).map_err(|e| format!("Invalid target word: {e}"))?;

    let result = find_shortest_paths(&start_word, &target_word, dictionary);

    Ok(LadderOutcome {
        start: start_word.text().to_string(),
        target: target_word.text().to_string(),
        solution_count: result.solution_count(),
        depth: result.depth(),
        target_missing: result.is_target_missing(),
        explored: result.explored(),
        chains: result
            .chains()
            .iter()
            .map(|chain| chain.iter().map(|w| w.text().to_string()).collect())
            .collect(),
    })
}

/// Ladder every configured pair in order
///
/// # Errors
///
/// Returns an error for an odd word count or an invalid word.
pub fn run_ladders(
    config: &LadderConfig,
    dictionary: &Dictionary,
) -> Result<Vec<LadderOutcome>, String> {
    config
        .pairs()?
        .into_iter()
        .map(|(start, target)| solve_ladder(start, target, dictionary))
        .collect()
}
