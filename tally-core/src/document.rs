//! A loaded document with its statistics computed once.

use rustc_hash::FxHashMap;
use tally_types::{TextStats, WordCount};

use crate::analyzer::{TextNormalizer, Tokens};
use crate::stats::{count_paragraphs, count_sentences, FrequencyTable};

/// An immutable text together with its cached analysis.
///
/// The free functions in the crate root re-tokenize their input on every
/// call. `Document` normalizes once at construction, keeps the frequency
/// counts and the [`TextStats`] snapshot, and answers repeated lookups from
/// the cache. Every accessor agrees with the corresponding free function.
///
/// `Document` has no interior mutability and can be shared across threads.
///
/// # Example
///
/// ```
/// use tally_core::Document;
///
/// let doc = Document::new("The cat sat on the mat.\n\nThe end.");
/// assert_eq!(doc.count("THE"), 3);
/// assert_eq!(doc.most_common().map(|wc| wc.word.as_str()), Some("the"));
/// assert_eq!(doc.stats().paragraphs, 2);
/// ```
#[derive(Debug, Clone)]
pub struct Document {
    text: String,
    normalized: String,
    counts: FxHashMap<String, usize>,
    ranked: Vec<WordCount>,
    stats: TextStats,
}

impl Document {
    /// Analyzes `text`.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let normalizer = TextNormalizer::new();
        let normalized = normalizer.normalize(&text);

        let table = FrequencyTable::from_normalized(&normalized);
        let counts: FxHashMap<String, usize> = table
            .iter()
            .map(|(word, count)| (word.to_owned(), count))
            .collect();
        let ranked = table.ranked();

        let stats = TextStats {
            words: table.total(),
            distinct_words: table.distinct(),
            letters: table.letters(),
            average_word_length: table.average_length(),
            paragraphs: count_paragraphs(&text),
            sentences: count_sentences(&text),
            most_common: table
                .most_common()
                .map(|(word, count)| WordCount::new(word, count)),
        };

        tracing::debug!(
            bytes = text.len(),
            words = stats.words,
            distinct = stats.distinct_words,
            paragraphs = stats.paragraphs,
            sentences = stats.sentences,
            "document analyzed"
        );

        Self {
            text,
            normalized,
            counts,
            ranked,
            stats,
        }
    }

    /// The original text.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Word tokens in order of appearance.
    #[inline]
    pub fn words(&self) -> Tokens<'_> {
        Tokens::new(&self.normalized)
    }

    /// Occurrences of `target`, normalized the same way as
    /// [`count_occurrences`](crate::count_occurrences).
    pub fn count(&self, target: &str) -> usize {
        let target = TextNormalizer::new().normalize_target(target);
        if target.is_empty() {
            return 0;
        }
        self.counts.get(target.as_str()).copied().unwrap_or(0)
    }

    /// Most frequent word, `None` when the text has no words.
    #[inline]
    pub fn most_common(&self) -> Option<&WordCount> {
        self.stats.most_common.as_ref()
    }

    /// The `n` most frequent words, count descending, ties in first-seen order.
    pub fn top(&self, n: usize) -> &[WordCount] {
        &self.ranked[..n.min(self.ranked.len())]
    }

    /// All statistics of the document.
    #[inline]
    pub fn stats(&self) -> &TextStats {
        &self.stats
    }
}

impl From<String> for Document {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl From<&str> for Document {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}
