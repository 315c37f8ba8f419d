//! Guessing engine
//!
//! Consistency filtering, guess ranking strategies, opening-guess memoization
//! and the solve loop that ties them together.

mod cache;
mod engine;
pub mod entropy;
mod game;
pub mod minimax;
pub mod strategy;

pub use cache::{CacheKey, OpeningGuessCache};
pub use engine::{GuessStep, SolveOutcome, SolveResult, Solver};
pub use game::{GameState, is_consistent};
pub use strategy::{
    CoverageConfig, EntropyStrategy, LetterCoverageStrategy, MinimaxStrategy, RankingStrategy,
    Score, StrategyType,
};
