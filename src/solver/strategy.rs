//! Guess ranking strategies
//!
//! Defines the `RankingStrategy` trait and concrete implementations.
//! Rankings are stable: candidates with equal scores keep their pool order.

use crate::core::{FrequencyTable, Word};
use rayon::prelude::*;
use rustc_hash::FxHasher;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// Comparable ranking score; higher ranks first
#[derive(Debug, Clone, Copy)]
pub struct Score(f64);

impl Score {
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl PartialEq for Score {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Score {}

impl PartialOrd for Score {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Score {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// A heuristic for ordering candidate guesses, best first
///
/// Scoring is pure, so candidates are scored in parallel.
pub trait RankingStrategy: Sync {
    /// Short identifier, also used as the opening-guess cache key
    fn name(&self) -> &'static str;

    /// Only the leading `n` pool members are scored; `None` scores all of them
    fn search_depth(&self) -> Option<usize> {
        None
    }

    /// Hash of any settings besides name and search depth that change rankings
    fn fingerprint(&self) -> u64 {
        0
    }

    /// Score one candidate guess against the remaining pool
    fn score(&self, candidate: &Word, pool: &[&Word]) -> Score;

    /// Scored prefix of the pool, best first
    fn rank_scored<'a>(&self, pool: &[&'a Word]) -> Vec<(&'a Word, Score)> {
        rank_by_score(self, pool)
    }

    /// Whole pool in ranked order: the scored prefix followed by the
    /// unscored tail in pool order
    fn rank<'a>(&self, pool: &[&'a Word]) -> Vec<&'a Word> {
        let evaluated = evaluated_len(self.search_depth(), pool.len());
        self.rank_scored(pool)
            .into_iter()
            .map(|(word, _)| word)
            .chain(pool[evaluated..].iter().copied())
            .collect()
    }

    /// Top-ranked guess, `None` for an empty pool
    fn best<'a>(&self, pool: &[&'a Word]) -> Option<&'a Word> {
        self.rank_scored(pool).first().map(|&(word, _)| word)
    }
}

// A depth of zero still scores one candidate
fn evaluated_len(search_depth: Option<usize>, pool_len: usize) -> usize {
    search_depth.map_or(pool_len, |depth| depth.max(1).min(pool_len))
}

/// Score the leading `search_depth` pool members and sort them descending
///
/// Scores are collected in pool order and the sort is stable, so ties keep
/// pool order.
pub fn rank_by_score<'a, S>(strategy: &S, pool: &[&'a Word]) -> Vec<(&'a Word, Score)>
where
    S: RankingStrategy + ?Sized,
{
    let evaluated = evaluated_len(strategy.search_depth(), pool.len());

    let mut scored: Vec<(&'a Word, Score)> = pool[..evaluated]
        .par_iter()
        .map(|&word| (word, strategy.score(word, pool)))
        .collect();

    scored.sort_by(|(_, a), (_, b)| b.cmp(a));
    scored
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone)]
pub enum StrategyType {
    /// Letter-frequency coverage with corpus-frequency bonus
    Coverage(LetterCoverageStrategy),
    /// Shannon entropy maximization
    Entropy(EntropyStrategy),
    /// Smallest worst-case bucket
    Minimax(MinimaxStrategy),
}

impl RankingStrategy for StrategyType {
    fn name(&self) -> &'static str {
        match self {
            Self::Coverage(s) => s.name(),
            Self::Entropy(s) => s.name(),
            Self::Minimax(s) => s.name(),
        }
    }

    fn search_depth(&self) -> Option<usize> {
        match self {
            Self::Coverage(s) => s.search_depth(),
            Self::Entropy(s) => s.search_depth(),
            Self::Minimax(s) => s.search_depth(),
        }
    }

    fn fingerprint(&self) -> u64 {
        match self {
            Self::Coverage(s) => s.fingerprint(),
            Self::Entropy(s) => s.fingerprint(),
            Self::Minimax(s) => s.fingerprint(),
        }
    }

    fn score(&self, candidate: &Word, pool: &[&Word]) -> Score {
        match self {
            Self::Coverage(s) => s.score(candidate, pool),
            Self::Entropy(s) => s.score(candidate, pool),
            Self::Minimax(s) => s.score(candidate, pool),
        }
    }

    fn rank_scored<'a>(&self, pool: &[&'a Word]) -> Vec<(&'a Word, Score)> {
        match self {
            Self::Coverage(s) => s.rank_scored(pool),
            Self::Entropy(s) => s.rank_scored(pool),
            Self::Minimax(s) => s.rank_scored(pool),
        }
    }
}

/// Pure entropy maximization strategy
///
/// Scores a guess by the Shannon entropy of the feedback partition it
/// induces over the pool.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntropyStrategy {
    pub search_depth: Option<usize>,
}

impl EntropyStrategy {
    #[must_use]
    pub const fn new(search_depth: Option<usize>) -> Self {
        Self { search_depth }
    }
}

impl RankingStrategy for EntropyStrategy {
    fn name(&self) -> &'static str {
        "entropy"
    }

    fn search_depth(&self) -> Option<usize> {
        self.search_depth
    }

    fn score(&self, candidate: &Word, pool: &[&Word]) -> Score {
        Score::new(super::entropy::calculate_entropy(candidate, pool))
    }
}

/// Pure minimax strategy
///
/// Prefers the guess whose largest feedback bucket is smallest.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinimaxStrategy {
    pub search_depth: Option<usize>,
}

impl MinimaxStrategy {
    #[must_use]
    pub const fn new(search_depth: Option<usize>) -> Self {
        Self { search_depth }
    }
}

impl RankingStrategy for MinimaxStrategy {
    fn name(&self) -> &'static str {
        "minimax"
    }

    fn search_depth(&self) -> Option<usize> {
        self.search_depth
    }

    fn score(&self, candidate: &Word, pool: &[&Word]) -> Score {
        let max_remaining = super::minimax::calculate_max_remaining(candidate, pool);
        Score::new(-(max_remaining as f64))
    }
}

/// Settings for letter-coverage ranking
#[derive(Debug, Clone, Copy)]
pub struct CoverageConfig {
    /// Leave plural corpus entries out of the letter counts
    pub exclude_plurals: bool,
    /// Added when a word's corpus frequency beats the 75th percentile
    pub frequency_bonus: u64,
    /// Move plural entries behind non-plural ones after sorting
    pub plurals_last: bool,
}

impl Default for CoverageConfig {
    fn default() -> Self {
        Self {
            exclude_plurals: false,
            frequency_bonus: 1000,
            plurals_last: true,
        }
    }
}

/// Letter-coverage strategy
///
/// Scores a word by summing, over its distinct letters, how often each letter
/// occurs across the corpus. Independent of the remaining pool.
#[derive(Debug, Clone)]
pub struct LetterCoverageStrategy {
    letter_counts: [u64; 26],
    frequencies: FrequencyTable,
    bonus_threshold: Option<u64>,
    config: CoverageConfig,
    search_depth: Option<usize>,
}

impl LetterCoverageStrategy {
    /// Letter counts from a plain word list; no frequency bonus
    #[must_use]
    pub fn from_words<'a>(words: impl IntoIterator<Item = &'a Word>) -> Self {
        Self {
            letter_counts: count_letters(words),
            frequencies: FrequencyTable::default(),
            bonus_threshold: None,
            config: CoverageConfig::default(),
            search_depth: None,
        }
    }

    /// Letter counts and frequency bonus from a corpus
    #[must_use]
    pub fn from_frequencies(frequencies: FrequencyTable, config: CoverageConfig) -> Self {
        let letter_counts = count_letters(
            frequencies
                .iter()
                .filter(|entry| !(config.exclude_plurals && entry.is_plural))
                .map(|entry| &entry.word),
        );
        let bonus_threshold = frequencies.percentile(0.75);

        Self {
            letter_counts,
            frequencies,
            bonus_threshold,
            config,
            search_depth: None,
        }
    }

    /// Score only the leading `search_depth` pool members
    #[must_use]
    pub fn with_search_depth(mut self, search_depth: Option<usize>) -> Self {
        self.search_depth = search_depth;
        self
    }

    /// Corpus occurrences of a letter
    #[must_use]
    pub fn letter_count(&self, letter: u8) -> u64 {
        letter_index(letter).map_or(0, |i| self.letter_counts[i])
    }

    /// Frequency a word must exceed to earn the bonus
    #[must_use]
    pub const fn bonus_threshold(&self) -> Option<u64> {
        self.bonus_threshold
    }

    /// Sum of corpus letter counts over the word's distinct letters
    #[must_use]
    pub fn coverage(&self, word: &Word) -> u64 {
        word.distinct_letters()
            .into_iter()
            .map(|letter| self.letter_count(letter))
            .sum()
    }

    fn bonus(&self, word: &Word) -> u64 {
        match self.bonus_threshold {
            Some(threshold) if self.frequencies.frequency(word.text()) > threshold => {
                self.config.frequency_bonus
            }
            _ => 0,
        }
    }
}

impl RankingStrategy for LetterCoverageStrategy {
    fn name(&self) -> &'static str {
        "coverage"
    }

    fn search_depth(&self) -> Option<usize> {
        self.search_depth
    }

    fn fingerprint(&self) -> u64 {
        let mut hasher = FxHasher::default();
        self.letter_counts.hash(&mut hasher);
        self.bonus_threshold.hash(&mut hasher);
        self.config.exclude_plurals.hash(&mut hasher);
        self.config.frequency_bonus.hash(&mut hasher);
        self.config.plurals_last.hash(&mut hasher);
        for entry in self.frequencies.iter() {
            entry.word.text().hash(&mut hasher);
            entry.frequency.hash(&mut hasher);
            entry.is_plural.hash(&mut hasher);
        }
        hasher.finish()
    }

    fn score(&self, candidate: &Word, _pool: &[&Word]) -> Score {
        Score::new((self.coverage(candidate) + self.bonus(candidate)) as f64)
    }

    fn rank_scored<'a>(&self, pool: &[&'a Word]) -> Vec<(&'a Word, Score)> {
        let mut scored = rank_by_score(self, pool);
        if self.config.plurals_last {
            scored.sort_by_key(|(word, _)| self.frequencies.is_plural(word.text()));
        }
        scored
    }
}

fn letter_index(letter: u8) -> Option<usize> {
    letter
        .is_ascii_lowercase()
        .then(|| usize::from(letter - b'a'))
}

fn count_letters<'a>(words: impl IntoIterator<Item = &'a Word>) -> [u64; 26] {
    let mut counts = [0u64; 26];
    for word in words {
        for &letter in word.chars() {
            if let Some(i) = letter_index(letter) {
                counts[i] += 1;
            }
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FrequencyEntry;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    fn texts<'a>(ranked: &[&'a Word]) -> Vec<&'a str> {
        ranked.iter().map(|w| w.text()).collect()
    }

    fn corpus() -> FrequencyTable {
        FrequencyTable::new(
            [("cold", 100, false), ("bold", 5, false), ("cods", 50, true), ("dock", 10, false)]
                .map(|(w, frequency, is_plural)| FrequencyEntry {
                    word: Word::new(w).unwrap(),
                    frequency,
                    is_plural,
                }),
        )
    }

    #[test]
    fn score_orders_by_value() {
        assert!(Score::new(2.0) > Score::new(1.5));
        assert!(Score::new(-1.0) > Score::new(-3.0));
        assert_eq!(Score::new(0.5), Score::new(0.5));
    }

    #[test]
    fn entropy_ranks_best_split_first() {
        let pool = words(&["aaaa", "bbbb", "abab", "zzzz"]);
        let refs: Vec<&Word> = pool.iter().collect();

        let ranked = EntropyStrategy::default().rank(&refs);

        // ABAB splits the pool into singletons; AAAA and BBBB tie and keep pool order
        assert_eq!(texts(&ranked), ["abab", "aaaa", "bbbb", "zzzz"]);
    }

    #[test]
    fn entropy_perfect_split_scores_log2_pool() {
        let pool = words(&["aaaa", "bbbb", "abab", "zzzz"]);
        let refs: Vec<&Word> = pool.iter().collect();

        let scored = EntropyStrategy::default().rank_scored(&refs);

        assert!((scored[0].1.value() - 2.0).abs() < 1e-9);
        for (_, score) in &scored {
            assert!(score.value() >= 0.0 && score.value() <= 2.0 + 1e-9);
        }
    }

    #[test]
    fn search_depth_limits_evaluated_prefix() {
        let pool = words(&["aaaa", "bbbb", "abab", "zzzz"]);
        let refs: Vec<&Word> = pool.iter().collect();
        let strategy = EntropyStrategy::new(Some(2));

        assert_eq!(strategy.rank_scored(&refs).len(), 2);
        assert_eq!(texts(&strategy.rank(&refs)), ["aaaa", "bbbb", "abab", "zzzz"]);
        assert_eq!(strategy.best(&refs).map(Word::text), Some("aaaa"));
    }

    #[test]
    fn search_depth_larger_than_pool() {
        let pool = words(&["aaaa", "abab"]);
        let refs: Vec<&Word> = pool.iter().collect();

        let ranked = EntropyStrategy::new(Some(50)).rank(&refs);

        assert_eq!(ranked.len(), 2);
    }

    #[test]
    fn minimax_ranks_smallest_worst_bucket_first() {
        let pool = words(&["aaaa", "bbbb", "abab", "zzzz"]);
        let refs: Vec<&Word> = pool.iter().collect();

        let scored = MinimaxStrategy::default().rank_scored(&refs);

        assert_eq!(scored[0].0.text(), "abab");
        assert_eq!(scored[0].1.value(), -1.0);
        assert_eq!(scored[3].0.text(), "zzzz");
        assert_eq!(scored[3].1.value(), -3.0);
    }

    #[test]
    fn empty_pool_has_no_best() {
        assert!(EntropyStrategy::default().best(&[]).is_none());
        assert!(MinimaxStrategy::default().rank(&[]).is_empty());
    }

    #[test]
    fn coverage_from_words_counts_distinct_letters() {
        let pool = words(&["aaaa", "bbbb", "abab", "zzzz"]);
        let refs: Vec<&Word> = pool.iter().collect();
        let strategy = LetterCoverageStrategy::from_words(&pool);

        assert_eq!(strategy.letter_count(b'a'), 6);
        assert_eq!(strategy.coverage(&pool[0]), 6);
        assert_eq!(strategy.coverage(&pool[2]), 12);
        assert_eq!(strategy.bonus_threshold(), None);
        assert_eq!(texts(&strategy.rank(&refs)), ["abab", "aaaa", "bbbb", "zzzz"]);
    }

    #[test]
    fn coverage_bonus_and_plurals_last() {
        let pool = words(&["cold", "bold", "cods", "dock"]);
        let refs: Vec<&Word> = pool.iter().collect();
        let strategy =
            LetterCoverageStrategy::from_frequencies(corpus(), CoverageConfig::default());

        assert_eq!(strategy.bonus_threshold(), Some(50));

        let scored = strategy.rank_scored(&refs);
        let order: Vec<&str> = scored.iter().map(|(w, _)| w.text()).collect();
        assert_eq!(order, ["cold", "dock", "bold", "cods"]);
        assert_eq!(scored[0].1.value(), 1013.0);
        assert_eq!(scored[1].1.value(), 12.0);
    }

    #[test]
    fn coverage_excluding_plurals_from_counts() {
        let pool = words(&["cold", "bold", "cods", "dock"]);
        let refs: Vec<&Word> = pool.iter().collect();
        let config = CoverageConfig {
            exclude_plurals: true,
            ..CoverageConfig::default()
        };
        let strategy = LetterCoverageStrategy::from_frequencies(corpus(), config);

        assert_eq!(strategy.letter_count(b's'), 0);
        assert_eq!(texts(&strategy.rank(&refs)), ["cold", "bold", "dock", "cods"]);
    }

    #[test]
    fn coverage_respects_search_depth() {
        let pool = words(&["aaaa", "bbbb", "abab", "zzzz"]);
        let refs: Vec<&Word> = pool.iter().collect();
        let strategy = LetterCoverageStrategy::from_words(&pool).with_search_depth(Some(2));

        assert_eq!(strategy.search_depth(), Some(2));
        assert_eq!(texts(&strategy.rank(&refs)), ["aaaa", "bbbb", "abab", "zzzz"]);
    }

    #[test]
    fn coverage_fingerprint_tracks_settings() {
        let plain = LetterCoverageStrategy::from_frequencies(corpus(), CoverageConfig::default());
        let same = LetterCoverageStrategy::from_frequencies(corpus(), CoverageConfig::default());
        let no_plurals = LetterCoverageStrategy::from_frequencies(
            corpus(),
            CoverageConfig {
                exclude_plurals: true,
                ..CoverageConfig::default()
            },
        );
        let other_corpus = LetterCoverageStrategy::from_words(&words(&["cold", "bold"]));

        assert_eq!(plain.fingerprint(), same.fingerprint());
        assert_ne!(plain.fingerprint(), no_plurals.fingerprint());
        assert_ne!(plain.fingerprint(), other_corpus.fingerprint());
        assert_eq!(
            StrategyType::Coverage(plain.clone()).fingerprint(),
            plain.fingerprint()
        );
    }

    #[test]
    fn strategy_type_delegates() {
        let pool = words(&["aaaa", "bbbb", "abab", "zzzz"]);
        let refs: Vec<&Word> = pool.iter().collect();

        let entropy = StrategyType::Entropy(EntropyStrategy::new(Some(3)));
        assert_eq!(entropy.name(), "entropy");
        assert_eq!(entropy.search_depth(), Some(3));
        assert_eq!(entropy.best(&refs).map(Word::text), Some("abab"));

        let coverage = StrategyType::Coverage(LetterCoverageStrategy::from_words(&pool));
        assert_eq!(coverage.name(), "coverage");
        assert_eq!(coverage.best(&refs).map(Word::text), Some("abab"));
    }
}
