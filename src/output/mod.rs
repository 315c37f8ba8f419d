//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_analysis_result, print_benchmark_result, print_count_result, print_duration,
    print_ladder_outcome, print_paths_results, print_rank_result, print_regression_result,
    print_solve_result,
};
