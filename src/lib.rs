//! Word Weaver
//!
//! Shortest word ladders, dictionary connectivity analysis and a
//! Wordle-style guessing engine over fixed-length word lists.
//!
//! # Quick Start
//!
//! ```rust
//! use word_weaver::ladder::find_shortest_paths;
//! use word_weaver::core::{Pattern, Word};
//! use word_weaver::wordlists::builtin_dictionary;
//!
//! let dictionary = builtin_dictionary();
//! let start = Word::new("cold").unwrap();
//! let target = Word::new("warm").unwrap();
//!
//! // Every shortest ladder
//! let result = find_shortest_paths(&start, &target, &dictionary);
//! assert_eq!(result.depth(), Some(4));
//!
//! // Guess feedback
//! let pattern = Pattern::calculate(&start, &target);
//! println!("Pattern code: {}", pattern.code());
//! ```

// Core domain types
pub mod core;

// Word ladder search and connectivity
pub mod ladder;

// Guessing engine
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
