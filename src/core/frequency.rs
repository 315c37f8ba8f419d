//! Corpus frequency records used by letter-coverage ranking

use super::Word;
use rustc_hash::FxHashMap;

/// One corpus record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyEntry {
    pub word: Word,
    pub frequency: u64,
    pub is_plural: bool,
}

/// Ordered corpus records with O(1) lookup by word
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    entries: Vec<FrequencyEntry>,
    index: FxHashMap<String, usize>,
}

impl FrequencyTable {
    /// Build a table; later records for the same word are ignored
    #[must_use]
    pub fn new(entries: impl IntoIterator<Item = FrequencyEntry>) -> Self {
        let mut table = Self::default();
        for entry in entries {
            if !table.index.contains_key(entry.word.text()) {
                table
                    .index
                    .insert(entry.word.text().to_string(), table.entries.len());
                table.entries.push(entry);
            }
        }
        table
    }

    /// Number of records
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the table holds no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Records in corpus order
    pub fn iter(&self) -> std::slice::Iter<'_, FrequencyEntry> {
        self.entries.iter()
    }

    /// Look up the record for a word
    #[must_use]
    pub fn get(&self, text: &str) -> Option<&FrequencyEntry> {
        self.index.get(text).map(|&i| &self.entries[i])
    }

    /// Corpus frequency of a word, 0 when absent
    #[must_use]
    pub fn frequency(&self, text: &str) -> u64 {
        self.get(text).map_or(0, |entry| entry.frequency)
    }

    /// Plural flag of a word, false when absent
    #[must_use]
    pub fn is_plural(&self, text: &str) -> bool {
        self.get(text).is_some_and(|entry| entry.is_plural)
    }

    /// Nearest-rank percentile of the corpus frequencies
    ///
    /// `fraction` is clamped to `0.0..=1.0`. Returns `None` for an empty table.
    ///
    /// # Examples
    /// ```
    /// use word_weaver::core::{FrequencyEntry, FrequencyTable, Word};
    ///
    /// let table = FrequencyTable::new([10, 40, 20, 30].into_iter().enumerate().map(|(i, f)| {
    ///     FrequencyEntry {
    ///         word: Word::new(["aaaa", "bbbb", "cccc", "dddd"][i]).unwrap(),
    ///         frequency: f,
    ///         is_plural: false,
    ///     }
    /// }));
    /// assert_eq!(table.percentile(0.75), Some(30));
    /// ```
    #[must_use]
    pub fn percentile(&self, fraction: f64) -> Option<u64> {
        if self.entries.is_empty() {
            return None;
        }

        let mut frequencies: Vec<u64> = self.entries.iter().map(|e| e.frequency).collect();
        frequencies.sort_unstable();

        let rank = (fraction.clamp(0.0, 1.0) * frequencies.len() as f64).ceil() as usize;
        Some(frequencies[rank.saturating_sub(1)])
    }
}

impl<'a> IntoIterator for &'a FrequencyTable {
    type Item = &'a FrequencyEntry;
    type IntoIter = std::slice::Iter<'a, FrequencyEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(word: &str, frequency: u64, is_plural: bool) -> FrequencyEntry {
        FrequencyEntry {
            word: Word::new(word).unwrap(),
            frequency,
            is_plural,
        }
    }

    #[test]
    fn lookup_by_word() {
        let table = FrequencyTable::new([entry("cold", 90, false), entry("cats", 12, true)]);
        assert_eq!(table.frequency("cold"), 90);
        assert_eq!(table.frequency("warm"), 0);
        assert!(table.is_plural("cats"));
        assert!(!table.is_plural("cold"));
        assert!(!table.is_plural("warm"));
    }

    #[test]
    fn first_record_wins() {
        let table = FrequencyTable::new([entry("cold", 90, false), entry("cold", 1, true)]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.frequency("cold"), 90);
    }

    #[test]
    fn percentile_nearest_rank() {
        let words = ["aaaa", "bbbb", "cccc", "dddd", "eeee", "ffff", "gggg", "hhhh"];
        let table = FrequencyTable::new(
            words
                .iter()
                .zip(1..)
                .map(|(w, rank)| entry(w, rank * 10, false)),
        );
        assert_eq!(table.percentile(0.75), Some(60));
        assert_eq!(table.percentile(0.0), Some(10));
        assert_eq!(table.percentile(1.0), Some(80));
    }

    #[test]
    fn percentile_empty() {
        assert_eq!(FrequencyTable::default().percentile(0.75), None);
    }
}
