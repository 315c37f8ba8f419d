//! Formatting utilities for terminal output

use crate::core::{Mark, Pattern};
use colored::Colorize;

/// Format a pattern as emoji string
#[must_use]
pub fn pattern_to_emoji(pattern: &Pattern) -> String {
    pattern.to_emoji()
}

/// Color each letter of a guess by its feedback mark
#[must_use]
pub fn colorize_guess(word: &str, pattern: &Pattern) -> String {
    word.chars()
        .zip(pattern.marks())
        .map(|(ch, mark)| {
            let letter = ch.to_ascii_uppercase().to_string();
            match mark {
                Mark::Correct => letter.green().bold().to_string(),
                Mark::Present => letter.yellow().bold().to_string(),
                Mark::Absent => letter.bright_black().to_string(),
            }
        })
        .collect()
}

/// Short tally of a feedback pattern, e.g. "2 correct, 1 present"
#[must_use]
pub fn feedback_summary(pattern: &Pattern) -> String {
    format!(
        "{} correct, {} present",
        pattern.count_correct(),
        pattern.count_present()
    )
}

/// Join a ladder chain for display
#[must_use]
pub fn format_chain(chain: &[String]) -> String {
    chain.join("-->")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format entropy as a bar scaled to the largest possible entropy
#[must_use]
pub fn entropy_bar(entropy: f64, total_candidates: usize, width: usize) -> String {
    let max_entropy = (total_candidates.max(1) as f64).log2();
    create_progress_bar(entropy, max_entropy, width)
}
