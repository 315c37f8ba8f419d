//! Word analysis command
//!
//! Analyzes how well a word splits the dictionary as an opening guess.

use crate::core::{Dictionary, Word};
use crate::solver::entropy::calculate_metrics;

/// Result of analyzing a word
pub struct AnalysisResult {
    pub word: String,
    pub entropy: f64,
    pub expected_reduction: f64,
    pub expected_remaining: f64,
    pub max_remaining: usize,
    pub pattern_count: usize,
    pub total_candidates: usize,
}

/// Analyze the feedback partition a word induces over the dictionary
///
/// # Errors
///
/// Returns an error if:
/// - The word is invalid (empty or not plain letters)
/// - The word is not in the dictionary
pub fn analyze_word(word: &str, dictionary: &Dictionary) -> Result<AnalysisResult, String> {
    let word_obj = Word::new(word).map_err(|e| format!("Invalid word: {e}"))?;

    if !dictionary.contains(&word_obj) {
        return Err(format!("Word '{word}' not in word list"));
    }

    let candidates: Vec<&Word> = dictionary.iter().collect();
    let metrics = calculate_metrics(&word_obj, &candidates);

    Ok(AnalysisResult {
        word: word_obj.text().to_string(),
        entropy: metrics.entropy,
        expected_reduction: metrics.entropy.exp2(),
        expected_remaining: metrics.expected_remaining,
        max_remaining: metrics.max_partition,
        pattern_count: metrics.pattern_count,
        total_candidates: candidates.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::builtin_dictionary;

    #[test]
    fn analyze_valid_word() {
        let dictionary = builtin_dictionary();
        let result = analyze_word("cold", &dictionary).unwrap();

        assert_eq!(result.word, "cold");
        assert!(result.entropy > 0.0);
        assert!(result.expected_reduction >= 1.0);
        assert!(result.pattern_count > 1);
        assert_eq!(result.total_candidates, dictionary.len());
    }

    #[test]
    fn analyze_invalid_word() {
        let dictionary = builtin_dictionary();

        assert!(analyze_word("ware", &dictionary).is_err());
        assert!(analyze_word("c0ld", &dictionary).is_err());
    }

    #[test]
    fn entropy_properties() {
        let dictionary = builtin_dictionary();
        let result = analyze_word("cold", &dictionary).unwrap();

        assert!(result.entropy <= (result.pattern_count as f64).log2() + 1e-9);
        assert!(result.expected_remaining >= 1.0);
        assert!(result.expected_remaining <= result.max_remaining as f64);
        assert!(result.max_remaining < result.total_candidates);
    }
}
