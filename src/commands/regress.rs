//! Regression command
//!
//! Checks ladder solution counts and depths against known fixtures.

use crate::core::{Dictionary, Word};
use crate::ladder::find_shortest_paths;
use log::debug;

/// Expected ladder outcome for one pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fixture {
    pub start: &'static str,
    pub target: &'static str,
    pub solutions: usize,
    pub depth: Option<usize>,
}

const fn fixture(
    start: &'static str,
    target: &'static str,
    solutions: usize,
    depth: usize,
) -> Fixture {
    Fixture {
        start,
        target,
        solutions,
        depth: Some(depth),
    }
}

const fn unsolvable(start: &'static str, target: &'static str) -> Fixture {
    Fixture {
        start,
        target,
        solutions: 0,
        depth: None,
    }
}

/// Fixtures for the embedded dictionary
pub const BUILTIN_FIXTURES: &[Fixture] = &[
    fixture("cold", "warm", 3, 4),
    fixture("palm", "read", 10, 7),
    fixture("stay", "woke", 3, 9),
    fixture("fear", "calm", 4, 6),
    fixture("head", "tail", 6, 5),
    fixture("love", "hate", 1, 4),
    fixture("wine", "beer", 1, 6),
    fixture("dark", "lime", 3, 4),
    fixture("book", "read", 2, 5),
    fixture("fish", "bird", 2, 6),
    fixture("cold", "cole", 1, 1),
    fixture("wham", "boom", 1, 6),
    fixture("iamb", "poet", 13, 8),
    unsolvable("soft", "ware"),
    unsolvable("very", "much"),
    unsolvable("oaky", "wine"),
];

/// Fixtures for the full Weaver `4_letter_words.txt` dictionary
///
/// That word list is not bundled, so these values are unverified by the test
/// suite. They only pass with `regress --fixtures weaver -w 4_letter_words.txt`.
pub const WEAVER_FIXTURES: &[Fixture] = &[
    fixture("oaky", "wine", 7, 5),
    fixture("soft", "ware", 3, 4),
    fixture("stay", "woke", 1, 7),
    fixture("very", "much", 2, 6),
    fixture("wham", "boom", 8, 6),
    fixture("fear", "calm", 2, 5),
    fixture("iamb", "poet", 23, 7),
    fixture("palm", "read", 1, 5),
];

/// A fixture whose outcome differed
#[derive(Debug, Clone)]
pub struct FixtureFailure {
    pub fixture: Fixture,
    pub found_solutions: usize,
    pub found_depth: Option<usize>,
}

/// Result of a regression run
#[derive(Debug, Clone)]
pub struct RegressionResult {
    pub total: usize,
    pub failures: Vec<FixtureFailure>,
}

impl RegressionResult {
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Run every fixture against the dictionary
#[must_use]
pub fn run_regression(fixtures: &[Fixture], dictionary: &Dictionary) -> RegressionResult {
    let mut failures = Vec::new();

    for &fixture in fixtures {
        let (Ok(start), Ok(target)) = (Word::new(fixture.start), Word::new(fixture.target)) else {
            continue;
        };

        let result = find_shortest_paths(&start, &target, dictionary);
        debug!(
            "{}-->{}: {} solutions of depth {:?}",
            fixture.start,
            fixture.target,
            result.solution_count(),
            result.depth()
        );

        if result.solution_count() != fixture.solutions || result.depth() != fixture.depth {
            failures.push(FixtureFailure {
                fixture,
                found_solutions: result.solution_count(),
                found_depth: result.depth(),
            });
        }
    }

    RegressionResult {
        total: fixtures.len(),
        failures,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::builtin_dictionary;

    #[test]
    fn builtin_fixtures_pass() {
        let dictionary = builtin_dictionary();
        let result = run_regression(BUILTIN_FIXTURES, &dictionary);

        assert_eq!(result.total, BUILTIN_FIXTURES.len());
        assert!(result.all_passed(), "{:?}", result.failures);
    }

    #[test]
    fn wrong_expectation_is_reported() {
        let dictionary = builtin_dictionary();
        let result = run_regression(&[fixture("cold", "warm", 2, 4)], &dictionary);

        assert_eq!(result.failures.len(), 1);
        assert_eq!(result.failures[0].found_solutions, 3);
        assert_eq!(result.failures[0].found_depth, Some(4));
    }

    #[test]
    fn weaver_fixtures_need_the_weaver_dictionary() {
        let dictionary = builtin_dictionary();
        let result = run_regression(WEAVER_FIXTURES, &dictionary);
        assert!(!result.all_passed());
    }
}
