//! Feedback partitions and their information content
//!
//! A guess splits the remaining pool into buckets, one per feedback pattern.
//! Every score in this module is a function of the bucket sizes alone.

use crate::core::{Pattern, Word};
use rustc_hash::FxHashMap;
use std::collections::HashMap;
use std::hash::BuildHasher;

/// Partition statistics for one guess against one pool
#[derive(Debug, Clone, Copy)]
pub struct GuessMetrics {
    /// Information gained on average, in bits
    pub entropy: f64,
    /// Pool size left on average, weighting each bucket by its own size
    pub expected_remaining: f64,
    /// Size of the largest bucket
    pub max_partition: usize,
    /// Number of non-empty buckets
    pub pattern_count: usize,
}

/// Entropy in bits of the partition `guess` induces over `candidates`
///
/// Lies in `[0, log2(n)]` for a pool of n words; zero when every candidate
/// produces the same feedback.
///
/// # Examples
/// ```
/// use word_weaver::core::Word;
/// use word_weaver::solver::entropy::calculate_entropy;
///
/// let guess = Word::new("cold").unwrap();
/// let candidates = vec![
///     Word::new("cold").unwrap(),
///     Word::new("warm").unwrap(),
/// ];
/// let candidate_refs: Vec<&Word> = candidates.iter().collect();
///
/// let entropy = calculate_entropy(&guess, &candidate_refs);
/// assert!((entropy - 1.0).abs() < 1e-9); // two equal buckets
/// ```
#[must_use]
pub fn calculate_entropy(guess: &Word, candidates: &[&Word]) -> f64 {
    if candidates.is_empty() {
        return 0.0;
    }
    shannon_entropy(&group_by_pattern(guess, candidates))
}

/// Bucket sizes keyed by the feedback each candidate would give
#[must_use]
pub fn group_by_pattern(guess: &Word, candidates: &[&Word]) -> FxHashMap<Pattern, usize> {
    candidates
        .iter()
        .fold(FxHashMap::default(), |mut buckets, &candidate| {
            *buckets
                .entry(Pattern::calculate(guess, candidate))
                .or_insert(0) += 1;
            buckets
        })
}

/// Shannon entropy of a bucket-size distribution
///
/// `H = -sum(p * log2(p))` with `p = size / total`. Empty buckets contribute
/// nothing.
#[must_use]
pub fn shannon_entropy<S: BuildHasher>(buckets: &HashMap<Pattern, usize, S>) -> f64 {
    let total: usize = buckets.values().sum();
    if total == 0 {
        return 0.0;
    }

    let total = total as f64;
    buckets
        .values()
        .filter(|&&size| size > 0)
        .map(|&size| {
            let p = size as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// All partition statistics for a guess in one pass over the pool
#[must_use]
pub fn calculate_metrics(guess: &Word, candidates: &[&Word]) -> GuessMetrics {
    let buckets = group_by_pattern(guess, candidates);
    let total = candidates.len();

    // Sum over buckets of size * (size / total)
    let expected_remaining = if total == 0 {
        0.0
    } else {
        buckets.values().map(|&size| (size * size) as f64).sum::<f64>() / total as f64
    };

    GuessMetrics {
        entropy: shannon_entropy(&buckets),
        expected_remaining,
        max_partition: buckets.values().copied().max().unwrap_or(0),
        pattern_count: buckets.len(),
    }
}
