//! Multi-solution shortest word ladder search
//!
//! Level-synchronized BFS over the implicit adjacency graph. Steps live in an
//! arena and point at their parent by index, so every shortest chain to the
//! target can be rebuilt by walking indices back to the root.

use crate::core::{Dictionary, Word, is_adjacent};
use log::{debug, trace};
use rustc_hash::FxHashMap;

/// One node of the search forest
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step<'a> {
    pub word: &'a Word,
    pub depth: usize,
    /// Arena index of the step this one was reached from (the root points at itself)
    pub parent: usize,
}

/// Bounded breadth-first search for every shortest ladder between two words
///
/// A step is admitted unless its word was already admitted at a strictly
/// lesser depth. Same-depth re-admission keeps every distinct minimal path
/// alive; the target is admitted on every arrival. Once the target has been
/// reached at depth D, nothing deeper than D is admitted and expansion stops.
pub struct PathFinder<'a> {
    target: &'a Word,
    dictionary: &'a Dictionary,
    steps: Vec<Step<'a>>,
    first_depth: FxHashMap<&'a str, usize>,
    solutions: Vec<usize>,
    solution_depth: Option<usize>,
    stopped: bool,
}

impl<'a> PathFinder<'a> {
    /// Prepare a search from `start` to `target` over `dictionary`
    #[must_use]
    pub fn new(start: &'a Word, target: &'a Word, dictionary: &'a Dictionary) -> Self {
        let root = Step {
            word: start,
            depth: 0,
            parent: 0,
        };

        let mut first_depth = FxHashMap::default();
        first_depth.insert(start.text(), 0);

        Self {
            target,
            dictionary,
            steps: vec![root],
            first_depth,
            solutions: Vec::new(),
            solution_depth: None,
            stopped: false,
        }
    }

    /// Run the search to completion
    #[must_use]
    pub fn solve(mut self) -> LadderResult<'a> {
        let start = self.steps[0].word;
        debug!("Find {} starting with {}", self.target, start);

        if !self.dictionary.contains(self.target) {
            debug!("Cannot reach {} with this dictionary", self.target);
            return LadderResult::target_missing(self.steps);
        }

        if start == self.target {
            self.solutions.push(0);
            self.solution_depth = Some(0);
            return self.into_result();
        }

        let dictionary = self.dictionary;
        let mut index = 0;

        while !self.stopped && index < self.steps.len() {
            let Step { word, depth, .. } = self.steps[index];
            trace!("Looking at {word} at step {depth}");

            for candidate in dictionary {
                if is_adjacent(word, candidate) {
                    self.add_step(Step {
                        word: candidate,
                        depth: depth + 1,
                        parent: index,
                    });
                }
            }

            index += 1;
        }

        self.into_result()
    }

    fn add_step(&mut self, step: Step<'a>) {
        if let Some(level) = self.solution_depth
            && step.depth > level
        {
            self.stopped = true;
            return;
        }

        let is_target = step.word == self.target;
        let is_new = self
            .first_depth
            .get(step.word.text())
            .is_none_or(|&first| step.depth <= first);

        if !(is_target || is_new) {
            return;
        }

        let index = self.steps.len();
        self.steps.push(step);

        if is_new {
            self.first_depth.insert(step.word.text(), step.depth);
        }

        if is_target {
            if self.solution_depth.is_none() {
                debug!("Reached {} at depth {}", step.word, step.depth);
                self.solution_depth = Some(step.depth);
            }
            self.solutions.push(index);
        }
    }

    fn into_result(self) -> LadderResult<'a> {
        LadderResult {
            steps: self.steps,
            solutions: self.solutions,
            depth: self.solution_depth,
            target_missing: false,
        }
    }
}

/// Every shortest chain found by a [`PathFinder`]
#[derive(Debug, Clone)]
pub struct LadderResult<'a> {
    steps: Vec<Step<'a>>,
    solutions: Vec<usize>,
    depth: Option<usize>,
    target_missing: bool,
}

impl<'a> LadderResult<'a> {
    const fn target_missing(steps: Vec<Step<'a>>) -> Self {
        Self {
            steps,
            solutions: Vec::new(),
            depth: None,
            target_missing: true,
        }
    }

    /// Number of distinct shortest chains
    #[must_use]
    pub fn solution_count(&self) -> usize {
        self.solutions.len()
    }

    /// Shared number of steps of every solution, `None` when unsolved
    #[must_use]
    pub const fn depth(&self) -> Option<usize> {
        self.depth
    }

    /// True when the search was skipped because the target is not in the dictionary
    #[must_use]
    pub const fn is_target_missing(&self) -> bool {
        self.target_missing
    }

    /// Arena size, i.e. how many steps were admitted
    #[must_use]
    pub fn explored(&self) -> usize {
        self.steps.len()
    }

    /// The step arena
    #[must_use]
    pub fn steps(&self) -> &[Step<'a>] {
        &self.steps
    }

    /// Arena indices of the target-reaching steps, in discovery order
    #[must_use]
    pub fn solution_indices(&self) -> &[usize] {
        &self.solutions
    }

    /// Rebuild the chain ending at arena index `index`, root first
    ///
    /// # Panics
    /// Panics if `index` is outside the arena
    #[must_use]
    pub fn chain(&self, mut index: usize) -> Vec<&'a Word> {
        let mut chain = Vec::with_capacity(self.steps[index].depth + 1);
        loop {
            let step = self.steps[index];
            chain.push(step.word);
            if step.depth == 0 {
                break;
            }
            index = step.parent;
        }
        chain.reverse();
        chain
    }

    /// All solution chains in discovery order
    #[must_use]
    pub fn chains(&self) -> Vec<Vec<&'a Word>> {
        self.solutions.iter().map(|&i| self.chain(i)).collect()
    }
}

/// Find every shortest ladder from `start` to `target`
///
/// # Examples
/// ```
/// use word_weaver::core::{Dictionary, Word};
/// use word_weaver::ladder::find_shortest_paths;
///
/// let words = ["cat", "cot", "dot", "dog", "cag", "dag"].map(|w| Word::new(w).unwrap());
/// let dictionary = Dictionary::new(words).unwrap();
/// let start = Word::new("cat").unwrap();
/// let target = Word::new("dog").unwrap();
///
/// let result = find_shortest_paths(&start, &target, &dictionary);
/// assert_eq!(result.solution_count(), 2);
/// assert_eq!(result.depth(), Some(3));
/// ```
#[must_use]
pub fn find_shortest_paths<'a>(
    start: &'a Word,
    target: &'a Word,
    dictionary: &'a Dictionary,
) -> LadderResult<'a> {
    PathFinder::new(start, target, dictionary).solve()
}
