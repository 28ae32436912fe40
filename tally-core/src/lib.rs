//! Plain-text statistics.
//!
//! Five operations over a borrowed text buffer, all built on one
//! normalization rule (maximal runs of ASCII letters, lowercased):
//!
//! - [`count_occurrences`]: how often a word appears
//! - [`most_common_word`]: the most frequent word
//! - [`average_word_length`]: mean word length
//! - [`count_paragraphs`]: blank-line separated paragraphs
//! - [`count_sentences`]: `.`/`!`/`?` separated sentences
//!
//! None of them fails: degenerate input yields `0`, `0.0`, `None` or `1`.
//! For repeated queries over the same text, [`Document`] caches the analysis.
//!
//! ```
//! assert_eq!(tally_core::count_occurrences("The cat sat on the mat.", "the"), 2);
//! assert_eq!(tally_core::most_common_word("a b b c c c").as_deref(), Some("c"));
//! assert_eq!(tally_core::average_word_length("ab cd"), 2.0);
//! ```

pub mod analyzer;
mod document;
pub mod stats;

pub use analyzer::{TextNormalizer, Tokens};
pub use document::Document;
pub use stats::{count_paragraphs, count_sentences, FrequencyTable};
pub use tally_types::{TextStats, WordCount};

/// Extracts the word tokens of `text` in order of appearance.
///
/// A token is a maximal run of ASCII letters, lowercased. Everything else
/// separates tokens.
pub fn normalize(text: &str) -> Vec<String> {
    let normalized = TextNormalizer::new().normalize(text);
    Tokens::new(&normalized).map(str::to_owned).collect()
}

/// Counts how many tokens of `text` equal `target`.
///
/// `target` loses every non-letter character and is lowercased first; if
/// nothing is left the count is 0.
pub fn count_occurrences(text: &str, target: &str) -> usize {
    let normalizer = TextNormalizer::new();
    let target = normalizer.normalize_target(target);
    if target.is_empty() {
        return 0;
    }

    let normalized = normalizer.normalize(text);
    Tokens::new(&normalized)
        .filter(|&token| token == target)
        .count()
}

/// Returns the most frequent token of `text`.
///
/// Among tokens sharing the highest count, the one seen first wins.
/// `None` when `text` has no tokens.
pub fn most_common_word(text: &str) -> Option<String> {
    let normalized = TextNormalizer::new().normalize(text);
    FrequencyTable::from_normalized(&normalized)
        .most_common()
        .map(|(word, _)| word.to_owned())
}

/// Mean token length of `text`, `0.0` when it has no tokens.
pub fn average_word_length(text: &str) -> f64 {
    let normalized = TextNormalizer::new().normalize(text);
    let (mut tokens, mut letters) = (0usize, 0usize);
    for token in Tokens::new(&normalized) {
        tokens += 1;
        letters += token.len();
    }

    if tokens == 0 {
        return 0.0;
    }
    letters as f64 / tokens as f64
}
