//! Word frequency table.
//!
//! Counts tokens while remembering the order in which each distinct token was
//! first seen. That order is what breaks ties: among words sharing the highest
//! count, the one inserted first wins.

use rustc_hash::FxHashMap;
use tally_types::WordCount;

use crate::analyzer::Tokens;

/// Token counts over one normalized buffer.
///
/// Keys borrow from the buffer, so building the table allocates only the map
/// and the entry list.
#[derive(Debug, Default, Clone)]
pub struct FrequencyTable<'a> {
    /// Token -> index into `entries`.
    slots: FxHashMap<&'a str, usize>,
    /// `(token, count)` in first-insertion order.
    entries: Vec<(&'a str, usize)>,
    total: usize,
    letters: usize,
}

impl<'a> FrequencyTable<'a> {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from a normalized buffer.
    pub fn from_normalized(normalized: &'a str) -> Self {
        let mut table = Self::new();
        for token in Tokens::new(normalized) {
            table.add(token);
        }
        table
    }

    /// Records one occurrence of `word`.
    #[inline]
    pub fn add(&mut self, word: &'a str) {
        self.total += 1;
        self.letters += word.len();

        match self.slots.get(word) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.slots.insert(word, self.entries.len());
                self.entries.push((word, 1));
            }
        }
    }

    /// Occurrences of an already normalized word.
    #[inline]
    pub fn count(&self, word: &str) -> usize {
        self.slots
            .get(word)
            .map_or(0, |&slot| self.entries[slot].1)
    }

    /// Number of tokens recorded.
    #[inline]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct tokens.
    #[inline]
    pub fn distinct(&self) -> usize {
        self.entries.len()
    }

    /// Sum of the lengths of all tokens.
    #[inline]
    pub fn letters(&self) -> usize {
        self.letters
    }

    /// Returns true if no token was recorded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Mean token length, `0.0` for an empty table.
    pub fn average_length(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.letters as f64 / self.total as f64
    }

    /// The token with the highest count.
    ///
    /// Ties go to the token inserted first. `None` for an empty table.
    pub fn most_common(&self) -> Option<(&'a str, usize)> {
        let mut best: Option<(&'a str, usize)> = None;

        for &(word, count) in &self.entries {
            if best.is_none_or(|(_, top)| count > top) {
                best = Some((word, count));
            }
        }

        best
    }

    /// Every distinct token ordered by count (descending), ties in
    /// first-insertion order.
    pub fn ranked(&self) -> Vec<WordCount> {
        let mut ranked: Vec<(&'a str, usize)> = self.entries.clone();
        // Stable sort keeps first-insertion order among equal counts.
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
            .into_iter()
            .map(|(word, count)| WordCount::new(word, count))
            .collect()
    }

    /// The `n` most frequent tokens, ordered as in [`ranked`](Self::ranked).
    pub fn top(&self, n: usize) -> Vec<WordCount> {
        let mut ranked = self.ranked();
        ranked.truncate(n);
        ranked
    }

    /// `(token, count)` pairs in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, usize)> + '_ {
        self.entries.iter().copied()
    }
}
