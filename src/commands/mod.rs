//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod connectivity;
pub mod ladder;
pub mod rank;
pub mod regress;
pub mod solve;

pub use analyze::{AnalysisResult, analyze_word};
pub use benchmark::{
    BenchmarkConfig, BenchmarkResult, benchmark_dictionary, run_benchmark, select_secrets,
};
pub use connectivity::{ComponentSummary, CountResult, PathsResult, count_components, find_farthest};
pub use ladder::{LadderConfig, LadderOutcome, run_ladders, solve_ladder};
pub use rank::{RankResult, RankedGuess, rank_openings};
pub use regress::{
    BUILTIN_FIXTURES, Fixture, FixtureFailure, RegressionResult, WEAVER_FIXTURES, run_regression,
};
pub use solve::{SolveConfig, solve_word};
