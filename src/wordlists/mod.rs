//! Word lists
//!
//! Provides the embedded builtin dictionary and loaders for user-supplied
//! dictionaries, denylists and frequency corpora.

mod embedded;
pub mod loader;

use crate::core::Dictionary;
pub use embedded::{BUILTIN, BUILTIN_COUNT};

/// The embedded four-letter dictionary in file order
#[must_use]
pub fn builtin_dictionary() -> Dictionary {
    Dictionary::new(loader::words_from_slice(BUILTIN)).unwrap_or_default()
}
