//! Core domain types
//!
//! Words, the ordered dictionary, adjacency, guess scoring and corpus
//! frequency records. Everything here is pure and deterministic.

mod dictionary;
mod frequency;
mod pattern;
mod word;

pub use dictionary::{Dictionary, DictionaryError};
pub use frequency::{FrequencyEntry, FrequencyTable};
pub use pattern::{Mark, Pattern};
pub use word::{Word, WordError, is_adjacent};
