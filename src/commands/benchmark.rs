//! Benchmark command
//!
//! Tests solver performance across many hidden words sharing one
//! opening-guess cache.

use crate::core::{Dictionary, Word};
use crate::solver::{OpeningGuessCache, RankingStrategy, SolveOutcome, Solver};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Which hidden words to play
#[derive(Debug, Clone, Copy, Default)]
pub struct BenchmarkConfig {
    /// Play this many random words instead of the whole dictionary
    pub sample: Option<usize>,
    /// Seed for the sampler; a fresh seed is drawn when unset
    pub seed: Option<u64>,
    pub max_guesses: Option<usize>,
    pub show_progress: bool,
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub unsolved: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub distribution: BTreeMap<usize, usize>,
    pub hardest: Vec<(String, usize)>,
    pub cache_hits: usize,
    pub cache_misses: usize,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Pick the hidden words for a run, in dictionary order or sampled
#[must_use]
pub fn select_secrets<'a>(dictionary: &'a Dictionary, config: &BenchmarkConfig) -> Vec<&'a Word> {
    let words: Vec<&Word> = dictionary.iter().collect();

    match config.sample {
        Some(count) if count < words.len() => {
            let mut rng = StdRng::seed_from_u64(config.seed.unwrap_or_else(rand::random));
            words.choose_multiple(&mut rng, count).copied().collect()
        }
        _ => words,
    }
}

/// Play every secret and collect statistics
///
/// Only solved games count towards the guess statistics.
pub fn run_benchmark<S: RankingStrategy>(
    solver: &Solver<'_, S>,
    secrets: &[&Word],
    cache: &mut OpeningGuessCache,
    show_progress: bool,
) -> BenchmarkResult {
    let pb = if show_progress {
        ProgressBar::new(secrets.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let mut solved_counts = Vec::with_capacity(secrets.len());
    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();
    let mut unsolved = 0;

    for (idx, &secret) in secrets.iter().enumerate() {
        let result = solver.solve(secret, cache);
        let guesses = result.guesses.len();

        match result.outcome {
            SolveOutcome::Solved => {
                solved_counts.push((secret.text().to_string(), guesses));
                *distribution.entry(guesses).or_insert(0) += 1;
            }
            SolveOutcome::Unsolvable | SolveOutcome::OutOfGuesses => unsolved += 1,
        }

        if idx % 10 == 0 && !solved_counts.is_empty() {
            let avg = solved_counts.iter().map(|(_, n)| n).sum::<usize>() as f64
                / solved_counts.len() as f64;
            pb.set_message(format!("Avg: {avg:.2}"));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    let total_guesses: usize = solved_counts.iter().map(|(_, n)| n).sum();
    let solved = solved_counts.len();
    let average_guesses = if solved > 0 {
        total_guesses as f64 / solved as f64
    } else {
        0.0
    };

    let min_guesses = solved_counts.iter().map(|(_, n)| *n).min().unwrap_or(0);
    let max_guesses = solved_counts.iter().map(|(_, n)| *n).max().unwrap_or(0);

    let mut hardest = solved_counts;
    hardest.sort_by_key(|(_, n)| std::cmp::Reverse(*n));
    hardest.truncate(10);

    BenchmarkResult {
        total_words: secrets.len(),
        solved,
        unsolved,
        total_guesses,
        average_guesses,
        min_guesses,
        max_guesses,
        distribution,
        hardest,
        cache_hits: cache.hits(),
        cache_misses: cache.misses(),
        duration,
        words_per_second: secrets.len() as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

/// Select secrets and run the benchmark with a fresh cache
pub fn benchmark_dictionary<S: RankingStrategy>(
    strategy: S,
    dictionary: &Dictionary,
    config: &BenchmarkConfig,
) -> BenchmarkResult {
    let secrets = select_secrets(dictionary, config);
    let solver = Solver::from_dictionary(strategy, dictionary).with_max_guesses(config.max_guesses);
    let mut cache = OpeningGuessCache::new();

    run_benchmark(&solver, &secrets, &mut cache, config.show_progress)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::EntropyStrategy;
    use crate::wordlists::builtin_dictionary;

    fn sampled(count: usize) -> BenchmarkConfig {
        BenchmarkConfig {
            sample: Some(count),
            seed: Some(7),
            ..BenchmarkConfig::default()
        }
    }

    #[test]
    fn benchmark_runs() {
        let dictionary = builtin_dictionary();
        let result =
            benchmark_dictionary(EntropyStrategy::new(Some(25)), &dictionary, &sampled(10));

        assert_eq!(result.total_words, 10);
        assert_eq!(result.solved + result.unsolved, 10);
        assert_eq!(result.unsolved, 0);
        assert!(result.average_guesses >= 1.0);
        assert!(result.min_guesses >= 1);
    }

    #[test]
    fn opening_guess_is_computed_once() {
        let dictionary = builtin_dictionary();
        let result = benchmark_dictionary(EntropyStrategy::new(Some(25)), &dictionary, &sampled(8));

        assert_eq!(result.cache_misses, 1);
        assert_eq!(result.cache_hits, 7);
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let dictionary = builtin_dictionary();
        let result =
            benchmark_dictionary(EntropyStrategy::new(Some(25)), &dictionary, &sampled(12));

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.solved);
        assert!(result.average_guesses >= result.min_guesses as f64);
        assert!(result.average_guesses <= result.max_guesses as f64);
    }

    #[test]
    fn sampling_is_reproducible_with_a_seed() {
        let dictionary = builtin_dictionary();
        let first = select_secrets(&dictionary, &sampled(5));
        let second = select_secrets(&dictionary, &sampled(5));

        assert_eq!(first, second);
        assert_eq!(first.len(), 5);
    }

    #[test]
    fn no_sample_plays_every_word() {
        let dictionary = builtin_dictionary();
        let secrets = select_secrets(&dictionary, &BenchmarkConfig::default());
        assert_eq!(secrets.len(), dictionary.len());
    }

    #[test]
    fn benchmark_empty_word_list() {
        let dictionary = builtin_dictionary();
        let solver = Solver::from_dictionary(EntropyStrategy::new(Some(25)), &dictionary);
        let mut cache = OpeningGuessCache::new();

        let result = run_benchmark(&solver, &[], &mut cache, false);

        assert_eq!(result.total_words, 0);
        assert_eq!(result.total_guesses, 0);
        assert!(cache.is_empty());
    }
}
