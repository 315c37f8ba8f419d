//! Component counting and farthest-word commands

use crate::core::{Dictionary, Word};
use crate::ladder::ConnectivityExplorer;

/// One connected component
#[derive(Debug, Clone)]
pub struct ComponentSummary {
    pub seed: String,
    pub words: Vec<String>,
}

impl ComponentSummary {
    #[must_use]
    pub fn size(&self) -> usize {
        self.words.len()
    }
}

/// Result of partitioning a dictionary into components
#[derive(Debug, Clone)]
pub struct CountResult {
    pub dictionary_size: usize,
    pub components: Vec<ComponentSummary>,
}

impl CountResult {
    /// Size of the largest component
    #[must_use]
    pub fn largest(&self) -> usize {
        self.components
            .iter()
            .map(ComponentSummary::size)
            .max()
            .unwrap_or(0)
    }
}

/// Farthest words from one seed
#[derive(Debug, Clone)]
pub struct PathsResult {
    pub seed: String,
    pub max_depth: usize,
    pub farthest: Vec<String>,
    pub reachable: usize,
}

/// Resolve seed words against the dictionary; no seeds means every word
///
/// # Errors
///
/// Returns an error for a seed that is not in the dictionary.
pub fn resolve_seeds<'a>(
    seeds: &[String],
    dictionary: &'a Dictionary,
) -> Result<Vec<&'a Word>, String> {
    if seeds.is_empty() {
        return Ok(dictionary.iter().collect());
    }

    seeds
        .iter()
        .map(|seed| {
            dictionary
                .get(&seed.to_lowercase())
                .ok_or_else(|| format!("Word '{seed}' not in word list"))
        })
        .collect()
}

/// Count connected components reached from the seeds
///
/// # Errors
///
/// Returns an error for a seed that is not in the dictionary.
pub fn count_components(seeds: &[String], dictionary: &Dictionary) -> Result<CountResult, String> {
    let seeds = resolve_seeds(seeds, dictionary)?;
    let explorer = ConnectivityExplorer::new(dictionary);

    let components = explorer
        .components(seeds)
        .into_iter()
        .filter_map(|visited| {
            let words: Vec<String> = visited.words().map(|w| w.text().to_string()).collect();
            let seed = words.first()?.clone();
            Some(ComponentSummary { seed, words })
        })
        .collect();

    Ok(CountResult {
        dictionary_size: dictionary.len(),
        components,
    })
}

/// Farthest words from each seed, explored independently
///
/// # Errors
///
/// Returns an error for a seed that is not in the dictionary.
pub fn find_farthest(
    seeds: &[String],
    dictionary: &Dictionary,
) -> Result<Vec<PathsResult>, String> {
    let seeds = resolve_seeds(seeds, dictionary)?;
    let explorer = ConnectivityExplorer::new(dictionary);

    Ok(explorer
        .depth_profiles(seeds)
        .into_iter()
        .map(|profile| PathsResult {
            seed: profile.seed.text().to_string(),
            max_depth: profile.max_depth,
            farthest: profile
                .farthest
                .iter()
                .map(|w| w.text().to_string())
                .collect(),
            reachable: profile.reachable,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::builtin_dictionary;

    fn seeds(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| (*w).to_string()).collect()
    }

    #[test]
    fn count_whole_dictionary() {
        let dictionary = builtin_dictionary();
        let result = count_components(&[], &dictionary).unwrap();

        assert_eq!(result.components.len(), 64);
        assert_eq!(result.largest(), 760);
        let total: usize = result.components.iter().map(ComponentSummary::size).sum();
        assert_eq!(total, result.dictionary_size);
    }

    #[test]
    fn seeds_in_one_component_count_once() {
        let dictionary = builtin_dictionary();
        let result = count_components(&seeds(&["cold", "warm", "jazz"]), &dictionary).unwrap();

        assert_eq!(result.components.len(), 2);
        assert_eq!(result.components[0].seed, "cold");
        assert_eq!(result.components[0].size(), 760);
        assert_eq!(result.components[1].words, seeds(&["jazz"]));
    }

    #[test]
    fn farthest_from_warm() {
        let dictionary = builtin_dictionary();
        let results = find_farthest(&seeds(&["warm", "cold"]), &dictionary).unwrap();

        assert_eq!(results[0].max_depth, 15);
        assert_eq!(results[0].farthest, seeds(&["drag"]));
        assert_eq!(results[1].max_depth, 14);
        assert_eq!(results[1].farthest, seeds(&["crab", "drag", "unit"]));
        assert_eq!(results[1].reachable, 760);
    }

    #[test]
    fn unknown_seed_is_rejected() {
        let dictionary = builtin_dictionary();
        assert!(find_farthest(&seeds(&["ware"]), &dictionary).is_err());
    }
}
