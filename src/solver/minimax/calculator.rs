//! Minimax worst-case calculation for feedback patterns
//!
//! Given a guess and set of candidates, computes the largest group of
//! candidates left indistinguishable by the guess.

use crate::core::Word;
use crate::solver::entropy::group_by_pattern;

/// Calculate the maximum remaining candidates for a guess
///
/// # Examples
/// ```
/// use word_weaver::core::Word;
/// use word_weaver::solver::minimax::calculate_max_remaining;
///
/// let guess = Word::new("cold").unwrap();
/// let candidates = vec![
///     Word::new("cold").unwrap(),
///     Word::new("warm").unwrap(),
/// ];
/// let candidate_refs: Vec<&Word> = candidates.iter().collect();
///
/// assert_eq!(calculate_max_remaining(&guess, &candidate_refs), 1);
/// ```
#[must_use]
pub fn calculate_max_remaining(guess: &Word, candidates: &[&Word]) -> usize {
    group_by_pattern(guess, candidates)
        .values()
        .max()
        .copied()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    #[test]
    fn max_remaining_all_same_pattern() {
        let guess = Word::new("zzzz").unwrap();
        let candidates = words(&["aaaa", "bbbb", "cccc"]);
        let candidate_refs: Vec<&Word> = candidates.iter().collect();

        assert_eq!(calculate_max_remaining(&guess, &candidate_refs), 3);
    }

    #[test]
    fn max_remaining_empty_candidates() {
        let guess = Word::new("cold").unwrap();
        assert_eq!(calculate_max_remaining(&guess, &[]), 0);
    }

    #[test]
    fn max_remaining_skewed_distribution() {
        let guess = Word::new("zzzz").unwrap();
        let candidates = words(&["aaaa", "zaaa", "bbbb", "azaa"]);
        let candidate_refs: Vec<&Word> = candidates.iter().collect();

        // {aaaa, bbbb} share the all-absent bucket
        assert_eq!(calculate_max_remaining(&guess, &candidate_refs), 2);
    }

    #[test]
    fn max_remaining_bounds() {
        let candidates = words(&["cold", "cord", "card", "ward", "word"]);
        let candidate_refs: Vec<&Word> = candidates.iter().collect();

        for guess in &candidates {
            let max = calculate_max_remaining(guess, &candidate_refs);
            assert!((1..=candidates.len()).contains(&max));
        }
    }
}
