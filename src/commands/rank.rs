//! Opening ranking command
//!
//! Ranks the whole dictionary as opening guesses for one strategy.

use crate::core::Dictionary;
use crate::solver::RankingStrategy;

/// A ranked opening guess
#[derive(Debug, Clone)]
pub struct RankedGuess {
    pub word: String,
    pub score: f64,
}

/// Result of ranking opening guesses
#[derive(Debug, Clone)]
pub struct RankResult {
    pub strategy: &'static str,
    pub pool_size: usize,
    pub evaluated: usize,
    pub top: Vec<RankedGuess>,
}

/// Best `limit` opening guesses, best first
#[must_use]
pub fn rank_openings<S: RankingStrategy>(
    strategy: &S,
    dictionary: &Dictionary,
    limit: usize,
) -> RankResult {
    let pool: Vec<_> = dictionary.iter().collect();
    let scored = strategy.rank_scored(&pool);

    RankResult {
        strategy: strategy.name(),
        pool_size: pool.len(),
        evaluated: scored.len(),
        top: scored
            .into_iter()
            .take(limit)
            .map(|(word, score)| RankedGuess {
                word: word.text().to_string(),
                score: score.value(),
            })
            .collect(),
    }
}
