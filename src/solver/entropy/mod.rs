//! Entropy-based guess evaluation
//!
//! Shannon entropy of the feedback partition a guess induces over the
//! remaining candidates.

mod calculator;

pub use calculator::{
    GuessMetrics, calculate_entropy, calculate_metrics, group_by_pattern, shannon_entropy,
};
