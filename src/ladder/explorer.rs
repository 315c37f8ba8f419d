//! Connected-component exploration
//!
//! Plain FIFO flood-fill from a seed word. Unlike the path finder, a word is
//! recorded once, at the depth it was first reached.

use crate::core::{Dictionary, Word, is_adjacent};
use log::{debug, trace};
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::VecDeque;

/// Words reached from a seed with their first-discovery depth, in discovery order
#[derive(Debug, Clone, Default)]
pub struct VisitedMap<'a> {
    order: Vec<(&'a Word, usize)>,
    depths: FxHashMap<&'a str, usize>,
}

impl<'a> VisitedMap<'a> {
    /// Record a word; returns false if it was already present
    fn insert(&mut self, word: &'a Word, depth: usize) -> bool {
        if self.depths.contains_key(word.text()) {
            return false;
        }
        self.depths.insert(word.text(), depth);
        self.order.push((word, depth));
        true
    }

    /// Number of words reached
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True if nothing was reached
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Check whether a word was reached
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.depths.contains_key(text)
    }

    /// First-discovery depth of a word
    #[must_use]
    pub fn depth_of(&self, text: &str) -> Option<usize> {
        self.depths.get(text).copied()
    }

    /// (word, depth) pairs in discovery order
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&'a Word, usize)> + '_ {
        self.order.iter().copied()
    }

    /// Words in discovery order
    pub fn words(&self) -> impl Iterator<Item = &'a Word> + '_ {
        self.order.iter().map(|&(word, _)| word)
    }

    /// Greatest depth reached
    #[must_use]
    pub fn max_depth(&self) -> usize {
        self.order.last().map_or(0, |&(_, depth)| depth)
    }

    /// Words at the greatest depth, in discovery order
    ///
    /// Discovery order is depth-monotonic, so these form the trailing run of
    /// the map.
    #[must_use]
    pub fn farthest(&self) -> Vec<&'a Word> {
        let max_depth = self.max_depth();
        let mut farthest: Vec<&'a Word> = self
            .iter()
            .rev()
            .take_while(|&(_, depth)| depth == max_depth)
            .map(|(word, _)| word)
            .collect();
        farthest.reverse();
        farthest
    }
}

/// Flood-fill every word reachable from `seed`
///
/// The seed itself is recorded at depth 0 whether or not it is a dictionary member.
///
/// # Examples
/// ```
/// use word_weaver::core::{Dictionary, Word};
/// use word_weaver::ladder::explore;
///
/// let words = ["cold", "cord", "card", "jazz"].map(|w| Word::new(w).unwrap());
/// let dictionary = Dictionary::new(words).unwrap();
/// let seed = Word::new("cold").unwrap();
///
/// let visited = explore(&seed, &dictionary);
/// assert_eq!(visited.len(), 3);
/// assert_eq!(visited.depth_of("card"), Some(2));
/// assert!(!visited.contains("jazz"));
/// ```
#[must_use]
pub fn explore<'a>(seed: &'a Word, dictionary: &'a Dictionary) -> VisitedMap<'a> {
    let mut visited = VisitedMap::default();
    let mut queue = VecDeque::new();

    visited.insert(seed, 0);
    queue.push_back((seed, 0));

    while let Some((current, depth)) = queue.pop_front() {
        for next in dictionary {
            if is_adjacent(current, next) && visited.insert(next, depth + 1) {
                trace!("Adding {next} at depth {}", depth + 1);
                queue.push_back((next, depth + 1));
            }
        }
    }

    visited
}

/// Farthest words from one seed
#[derive(Debug, Clone)]
pub struct DepthProfile<'a> {
    pub seed: &'a Word,
    pub max_depth: usize,
    pub farthest: Vec<&'a Word>,
    pub reachable: usize,
}

/// Component partitioning and depth profiling over one dictionary
pub struct ConnectivityExplorer<'a> {
    dictionary: &'a Dictionary,
}

impl<'a> ConnectivityExplorer<'a> {
    #[must_use]
    pub const fn new(dictionary: &'a Dictionary) -> Self {
        Self { dictionary }
    }

    /// One visited map per connected component, seeded in the given order
    ///
    /// Seeds already claimed by an earlier component are skipped.
    pub fn components<I>(&self, seeds: I) -> Vec<VisitedMap<'a>>
    where
        I: IntoIterator<Item = &'a Word>,
    {
        let mut claimed: FxHashSet<&'a str> = FxHashSet::default();
        let mut components = Vec::new();

        for seed in seeds {
            if claimed.contains(seed.text()) {
                continue;
            }

            let visited = explore(seed, self.dictionary);
            debug!("Component from {seed}: {} words", visited.len());
            claimed.extend(visited.words().map(Word::text));
            components.push(visited);
        }

        components
    }

    /// Components seeded by every dictionary word in order
    #[must_use]
    pub fn all_components(&self) -> Vec<VisitedMap<'a>> {
        self.components(self.dictionary)
    }

    /// Farthest-word profile for each seed, seeds explored independently
    ///
    /// Profiles come back in seed order.
    pub fn depth_profiles<I>(&self, seeds: I) -> Vec<DepthProfile<'a>>
    where
        I: IntoIterator<Item = &'a Word>,
    {
        let seeds: Vec<&'a Word> = seeds.into_iter().collect();
        seeds
            .into_par_iter()
            .map(|seed| {
                let visited = explore(seed, self.dictionary);
                DepthProfile {
                    seed,
                    max_depth: visited.max_depth(),
                    farthest: visited.farthest(),
                    reachable: visited.len(),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::builtin_dictionary;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn texts<'a>(words: impl IntoIterator<Item = &'a Word>) -> Vec<&'a str> {
        words.into_iter().map(Word::text).collect()
    }

    #[test]
    fn explore_records_first_discovery_depth() {
        let dictionary =
            Dictionary::new(["cold", "cord", "card", "ward", "word", "warm"].map(word)).unwrap();
        let seed = word("cold");

        let visited = explore(&seed, &dictionary);

        assert_eq!(visited.len(), 6);
        assert_eq!(visited.depth_of("cold"), Some(0));
        assert_eq!(visited.depth_of("cord"), Some(1));
        assert_eq!(visited.depth_of("card"), Some(2));
        assert_eq!(visited.depth_of("word"), Some(2));
        assert_eq!(visited.depth_of("ward"), Some(3));
        assert_eq!(visited.depth_of("warm"), Some(4));
        assert_eq!(texts(visited.words()), ["cold", "cord", "card", "word", "ward", "warm"]);
    }

    #[test]
    fn discovery_order_is_depth_monotonic() {
        let dictionary = builtin_dictionary();
        let seed = word("cold");

        let visited = explore(&seed, &dictionary);
        let depths: Vec<usize> = visited.iter().map(|(_, d)| d).collect();

        assert!(depths.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn components_partition_dictionary() {
        let dictionary = builtin_dictionary();
        let explorer = ConnectivityExplorer::new(&dictionary);

        let components = explorer.all_components();

        assert_eq!(components.len(), 64);
        assert_eq!(components.iter().map(VisitedMap::len).sum::<usize>(), 838);
        assert_eq!(components.iter().map(VisitedMap::len).max(), Some(760));

        for w in &dictionary {
            let owners = components.iter().filter(|c| c.contains(w.text())).count();
            assert_eq!(owners, 1, "{w} belongs to {owners} components");
        }
    }

    #[test]
    fn neighbours_share_a_component() {
        let dictionary = builtin_dictionary();
        let explorer = ConnectivityExplorer::new(&dictionary);
        let components = explorer.all_components();

        for component in &components {
            for w in component.words() {
                for n in dictionary.iter().filter(|n| is_adjacent(w, n)) {
                    assert!(component.contains(n.text()), "{w} and {n} split");
                }
            }
        }
    }

    #[test]
    fn components_skip_claimed_seeds() {
        let dictionary = Dictionary::new(["cat", "cot", "dog", "dot", "axe"].map(word)).unwrap();
        let explorer = ConnectivityExplorer::new(&dictionary);

        let components = explorer.all_components();

        assert_eq!(components.len(), 2);
        assert_eq!(texts(components[0].words()), ["cat", "cot", "dot", "dog"]);
        assert_eq!(texts(components[1].words()), ["axe"]);
    }

    #[test]
    fn depth_profile_reports_farthest_words() {
        let dictionary = builtin_dictionary();
        let explorer = ConnectivityExplorer::new(&dictionary);
        let seeds = [word("cold"), word("warm"), word("jazz")];

        let profiles = explorer.depth_profiles(&seeds);

        assert_eq!(profiles[0].max_depth, 14);
        assert_eq!(texts(profiles[0].farthest.iter().copied()), ["crab", "drag", "unit"]);
        assert_eq!(profiles[0].reachable, 760);

        assert_eq!(profiles[1].max_depth, 15);
        assert_eq!(texts(profiles[1].farthest.iter().copied()), ["drag"]);

        assert_eq!(profiles[2].max_depth, 0);
        assert_eq!(texts(profiles[2].farthest.iter().copied()), ["jazz"]);
        assert_eq!(profiles[2].reachable, 1);
    }

    #[test]
    fn depth_profiles_do_not_share_claims() {
        let dictionary = Dictionary::new(["cat", "cot", "dot"].map(word)).unwrap();
        let explorer = ConnectivityExplorer::new(&dictionary);
        let seeds = [word("cat"), word("cot")];

        let profiles = explorer.depth_profiles(&seeds);

        assert_eq!(profiles.len(), 2);
        assert_eq!(profiles[0].reachable, 3);
        assert_eq!(profiles[1].reachable, 3);
        assert_eq!(profiles[1].max_depth, 1);
        assert_eq!(texts(profiles[1].farthest.iter().copied()), ["cat", "dot"]);
    }
}
