//! Display functions for command results

use super::formatters::{
    colorize_guess, entropy_bar, feedback_summary, format_chain, pattern_to_emoji,
};
use crate::commands::{
    AnalysisResult, BenchmarkResult, CountResult, LadderOutcome, PathsResult, RankResult,
    RegressionResult,
};
use crate::solver::{SolveOutcome, SolveResult};
use colored::Colorize;
use std::time::Duration;

/// Print every shortest chain of one ladder
pub fn print_ladder_outcome(outcome: &LadderOutcome) {
    if outcome.target_missing {
        println!(
            "{}",
            format!("Cannot reach {} with this dictionary.", outcome.target).red()
        );
        return;
    }

    match outcome.depth {
        Some(depth) => println!(
            "{} {}",
            format!("{}", outcome.solution_count).bright_yellow().bold(),
            format!("{depth}-step solutions").bold()
        ),
        None => println!(
            "{}",
            format!("No ladder from {} to {}", outcome.start, outcome.target).yellow()
        ),
    }

    for chain in &outcome.chains {
        println!("{}", format_chain(chain));
    }
}

/// Print the connected components of a dictionary
pub fn print_count_result(result: &CountResult) {
    println!(
        "Found {} connected sets across {} words.",
        format!("{}", result.components.len()).bright_yellow().bold(),
        result.dictionary_size
    );

    for component in &result.components {
        println!(
            "found a set of {} words: {}",
            format!("{}", component.size()).cyan(),
            component.words.join(" ")
        );
    }
}

/// Print the farthest words for each seed
pub fn print_paths_results(results: &[PathsResult]) {
    for result in results {
        println!(
            "{} reaches {} words, farthest at depth {}: {}",
            result.seed.bright_yellow().bold(),
            result.reachable,
            format!("{}", result.max_depth).cyan(),
            result.farthest.join(" ")
        );
    }
}

/// Print a regression run
pub fn print_regression_result(result: &RegressionResult) {
    for failure in &result.failures {
        let fixture = failure.fixture;
        println!(
            "{}",
            format!("{}-->{} test failed:", fixture.start, fixture.target)
                .red()
                .bold()
        );
        println!(
            "  found {} solutions of length {}",
            failure.found_solutions,
            format_depth(failure.found_depth)
        );
        println!(
            "  expected {} of {}",
            fixture.solutions,
            format_depth(fixture.depth)
        );
    }

    if result.all_passed() {
        println!("{}", "All Tests Passed!".green().bold());
    } else {
        println!(
            "{}",
            format!("{} of {} tests failed", result.failures.len(), result.total)
                .red()
                .bold()
        );
    }
}

fn format_depth(depth: Option<usize>) -> String {
    depth.map_or_else(|| "-".to_string(), |d| d.to_string())
}

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.secret.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        let turn = i + 1;
        println!(
            "\nTurn {}: {} {} {}",
            turn,
            colorize_guess(&step.word, &step.pattern),
            pattern_to_emoji(&step.pattern),
            step.pattern.code().bright_black()
        );

        if verbose {
            println!("  Feedback:   {}", feedback_summary(&step.pattern));
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );

            if let Some(entropy) = step.entropy {
                println!("  Entropy:    {entropy:.3} bits");

                if step.candidates_after > 0 {
                    let reduction = step.candidates_before as f64 / step.candidates_after as f64;
                    println!(
                        "  Info gained: {:.3} bits ({:.1}x reduction)",
                        reduction.log2(),
                        reduction
                    );
                }
            }
        }
    }

    println!();
    let turns = result.guesses.len();
    match result.outcome {
        SolveOutcome::Solved => println!(
            "{}",
            format!("✅ Solved in {turns} guesses!").green().bold()
        ),
        SolveOutcome::Unsolvable => println!(
            "{}",
            format!("❌ No candidate left after {turns} guesses").red().bold()
        ),
        SolveOutcome::OutOfGuesses => println!(
            "{}",
            format!("❌ Failed to solve in {turns} guesses").red().bold()
        ),
    }
}

/// Print ranked opening guesses
pub fn print_rank_result(result: &RankResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "OPENING GUESSES:".bright_cyan().bold(),
        result.strategy.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());
    println!(
        "\nScored {} of {} words\n",
        result.evaluated, result.pool_size
    );

    for (i, guess) in result.top.iter().enumerate() {
        println!(
            "  {:>3}. {}  {}",
            i + 1,
            guess.word.to_uppercase().bold(),
            format!("{:.3}", guess.score).bright_yellow()
        );
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "ENTROPY ANALYSIS:".bright_cyan().bold(),
        result.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let bar = entropy_bar(result.entropy, result.total_candidates, 30);

    println!("\n📊 Against {} possible words:", result.total_candidates);
    println!(
        "   Entropy:     [{}] {}",
        bar.green(),
        format!("{:.3} bits", result.entropy).bright_yellow()
    );
    println!("   Patterns:    {}", result.pattern_count);
    println!(
        "   Info gain:   {:.1}x reduction",
        result.expected_reduction
    );
    println!(
        "   Expected:    {:.1} candidates remain",
        result.expected_remaining
    );
    println!("   Worst case:  {} candidates remain", result.max_remaining);
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Solved:           {}",
        format!("{}", result.solved).green()
    );
    if result.unsolved > 0 {
        println!(
            "   Unsolved:         {}",
            format!("{}", result.unsolved).red()
        );
    }
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!(
        "   Opening cache:    {} hits / {} misses",
        result.cache_hits, result.cache_misses
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    if result.solved > 0 {
        println!("\n📈 {}", "Distribution:".bright_cyan().bold());
        for (&guess_count, &count) in &result.distribution {
            let pct = (count as f64 / result.solved as f64) * 100.0;
            let bar_width = (pct / 2.5) as usize;
            let bar = format!(
                "{}{}",
                "█".repeat(bar_width).green(),
                "░"
                    .repeat(40_usize.saturating_sub(bar_width))
                    .bright_black()
            );
            println!("   {guess_count:2}: {bar} {count:4} ({pct:5.1}%)");
        }
    }

    if !result.hardest.is_empty() {
        println!("\n🔥 {}", "Hardest words:".bright_cyan().bold());
        for (word, guesses) in &result.hardest {
            println!("   {} ({guesses} guesses)", word.to_uppercase());
        }
    }
}

/// Print elapsed time for `--statistics`
pub fn print_duration(duration: Duration) {
    println!(
        "{}",
        format!("Duration: {:.6} seconds", duration.as_secs_f64()).bright_black()
    );
}
