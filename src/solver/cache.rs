//! Opening-guess memoization
//!
//! The first guess of a game depends only on the strategy and the starting
//! pool, so it can be computed once and shared by every game that uses the
//! same dictionary and configuration. The cache is a plain owned value passed
//! by `&mut`; sharing it across threads would need a lock around it.

use super::strategy::RankingStrategy;
use crate::core::Word;
use log::debug;
use rustc_hash::{FxHashMap, FxHasher};
use std::hash::{Hash, Hasher};

/// Ranking configuration and starting pool an opening guess was computed for
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub strategy: &'static str,
    pub search_depth: Option<usize>,
    pub settings: u64,
    pub pool_len: usize,
    pub pool_hash: u64,
}

impl CacheKey {
    /// Key for the opening of a game over `pool`; pool order matters
    #[must_use]
    pub fn for_game<S: RankingStrategy + ?Sized>(strategy: &S, pool: &[&Word]) -> Self {
        let mut hasher = FxHasher::default();
        for word in pool {
            word.text().hash(&mut hasher);
        }

        Self {
            strategy: strategy.name(),
            search_depth: strategy.search_depth(),
            settings: strategy.fingerprint(),
            pool_len: pool.len(),
            pool_hash: hasher.finish(),
        }
    }
}

/// Best opening guess per ranking configuration
#[derive(Debug, Default)]
pub struct OpeningGuessCache {
    entries: FxHashMap<CacheKey, Word>,
    hits: usize,
    misses: usize,
}

impl OpeningGuessCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached opening for `key`, computing and storing it on a miss
    ///
    /// Nothing is stored when `compute` yields `None`.
    pub fn get_or_compute<F>(&mut self, key: CacheKey, compute: F) -> Option<Word>
    where
        F: FnOnce() -> Option<Word>,
    {
        if let Some(word) = self.entries.get(&key) {
            self.hits += 1;
            return Some(word.clone());
        }

        self.misses += 1;
        let word = compute()?;
        debug!(
            "Caching opening guess {word} for {} (depth {:?})",
            key.strategy, key.search_depth
        );
        self.entries.insert(key, word.clone());
        Some(word)
    }

    /// Cached opening for `key`, if any
    #[must_use]
    pub fn get(&self, key: &CacheKey) -> Option<&Word> {
        self.entries.get(key)
    }

    /// Number of cached configurations
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing is cached
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Lookups answered from the cache
    #[must_use]
    pub const fn hits(&self) -> usize {
        self.hits
    }

    /// Lookups that had to compute
    #[must_use]
    pub const fn misses(&self) -> usize {
        self.misses
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{EntropyStrategy, MinimaxStrategy};

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn pool() -> Vec<Word> {
        ["cold", "cord", "card", "warm"].map(word).to_vec()
    }

    #[test]
    fn computes_once_per_key() {
        let mut cache = OpeningGuessCache::new();
        let words = pool();
        let refs: Vec<&Word> = words.iter().collect();
        let key = CacheKey::for_game(&EntropyStrategy::new(Some(10)), &refs);
        let mut calls = 0;

        for _ in 0..3 {
            let opening = cache.get_or_compute(key.clone(), || {
                calls += 1;
                Some(word("cold"))
            });
            assert_eq!(opening, Some(word("cold")));
        }

        assert_eq!(calls, 1);
        assert_eq!(cache.hits(), 2);
        assert_eq!(cache.misses(), 1);
    }

    #[test]
    fn keys_distinguish_strategy_and_depth() {
        let words = pool();
        let refs: Vec<&Word> = words.iter().collect();
        let a = CacheKey::for_game(&EntropyStrategy::new(Some(10)), &refs);
        let b = CacheKey::for_game(&EntropyStrategy::new(Some(20)), &refs);
        let c = CacheKey::for_game(&MinimaxStrategy::new(Some(10)), &refs);
        assert_ne!(a, b);
        assert_ne!(a, c);

        let mut cache = OpeningGuessCache::new();
        cache.get_or_compute(a.clone(), || Some(word("cold")));
        cache.get_or_compute(b.clone(), || Some(word("warm")));
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get(&a), Some(&word("cold")));
        assert_eq!(cache.get(&b), Some(&word("warm")));
        assert!(cache.get(&c).is_none());
    }

    #[test]
    fn failed_compute_is_not_cached() {
        let mut cache = OpeningGuessCache::new();
        let words = pool();
        let refs: Vec<&Word> = words.iter().collect();
        let key = CacheKey::for_game(&EntropyStrategy::default(), &refs);

        assert!(cache.get_or_compute(key.clone(), || None).is_none());
        assert!(cache.is_empty());
        assert_eq!(cache.get_or_compute(key, || Some(word("cold"))), Some(word("cold")));
    }

    #[test]
    fn keys_distinguish_pools() {
        let words = pool();
        let all: Vec<&Word> = words.iter().collect();
        let fewer: Vec<&Word> = words.iter().take(3).collect();
        let reversed: Vec<&Word> = words.iter().rev().collect();
        let strategy = EntropyStrategy::default();

        let key = CacheKey::for_game(&strategy, &all);
        assert_eq!(key, CacheKey::for_game(&strategy, &all));
        assert_ne!(key, CacheKey::for_game(&strategy, &fewer));
        assert_ne!(key, CacheKey::for_game(&strategy, &reversed));
    }
}
