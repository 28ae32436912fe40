//! Core types shared by the Tally crates.
//!
//! This crate holds the plain value types that cross crate boundaries:
//!
//! - **Statistics**: [`WordCount`] and [`TextStats`], produced by `tally-core`
//! - **Configuration**: [`ShellConfig`], consumed by the command-line front end
//! - **Errors**: [`LoadError`], the only failure in the system (reading the document)
//!
//! Keeping them here lets the analyzer stay free of I/O and CLI concerns.

#![warn(missing_docs)]

use core::fmt;
use std::path::PathBuf;

/// A word token together with its number of occurrences.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WordCount {
    /// Lowercase ASCII-letter token.
    pub word: String,
    /// Number of times the token appears.
    pub count: usize,
}

impl WordCount {
    /// Creates a new word count.
    #[inline]
    pub fn new(word: impl Into<String>, count: usize) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

impl fmt::Display for WordCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.word, self.count)
    }
}

/// A snapshot of every statistic computed for one document.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStats {
    /// Number of word tokens.
    pub words: usize,
    /// Number of distinct word tokens.
    pub distinct_words: usize,
    /// Total number of letters across all tokens.
    pub letters: usize,
    /// Mean token length, `0.0` when there are no tokens.
    pub average_word_length: f64,
    /// Paragraph count (never 0).
    pub paragraphs: usize,
    /// Sentence count (never 0).
    pub sentences: usize,
    /// Most frequent token, absent for a document without words.
    pub most_common: Option<WordCount>,
}

impl TextStats {
    /// Returns true if the document contained no word tokens.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words == 0
    }
}

impl fmt::Display for TextStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} words ({} distinct), avg length {:.2}, {} paragraphs, {} sentences",
            self.words,
            self.distinct_words,
            self.average_word_length,
            self.paragraphs,
            self.sentences
        )?;

        if let Some(top) = &self.most_common {
            write!(f, ", most common '{}' x{}", top.word, top.count)?;
        }

        Ok(())
    }
}

/// Options for the interactive lookup shell and its final report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    /// Input that ends the lookup loop, compared case-insensitively.
    /// Default: `"quit"`
    pub quit_word: String,
    /// Decimal digits shown for the average word length.
    /// Default: 2
    pub average_precision: usize,
    /// Number of most frequent words listed in the report (0 = none).
    /// Default: 0
    pub top: usize,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            quit_word: "quit".to_string(),
            average_precision: 2,
            top: 0,
        }
    }
}

impl ShellConfig {
    /// Replaces the sentinel that ends the loop.
    pub fn with_quit_word(mut self, quit_word: impl Into<String>) -> Self {
        self.quit_word = quit_word.into();
        self
    }

    /// Sets how many of the most frequent words the report lists.
    pub fn with_top(mut self, top: usize) -> Self {
        self.top = top;
        self
    }

    /// Sets the number of decimals used for the average word length.
    pub fn with_average_precision(mut self, digits: usize) -> Self {
        self.average_precision = digits;
        self
    }

    /// Returns true if `input` is the quit sentinel, ignoring case.
    pub fn is_quit(&self, input: &str) -> bool {
        input.to_lowercase() == self.quit_word.to_lowercase()
    }
}

/// Errors raised while loading the document to analyze.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file could not be opened or read.
    #[error("cannot read {}: {source}", .path.display())]
    Read {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid UTF-8 text.
    #[error("{} is not valid UTF-8: {source}", .path.display())]
    InvalidUtf8 {
        /// Path that was requested.
        path: PathBuf,
        /// Decoding failure, including the offending byte offset.
        #[source]
        source: std::string::FromUtf8Error,
    },
}

impl LoadError {
    /// Path of the document that failed to load.
    pub fn path(&self) -> &std::path::Path {
        match self {
            LoadError::Read { path, .. } | LoadError::InvalidUtf8 { path, .. } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_stats(most_common: Option<WordCount>) -> TextStats {
        TextStats {
            words: 6,
            distinct_words: 3,
            letters: 6,
            average_word_length: 1.0,
            paragraphs: 1,
            sentences: 1,
            most_common,
        }
    }

    #[test]
    fn word_count_display() {
        assert_eq!(WordCount::new("cat", 3).to_string(), "cat: 3");
    }

    #[test]
    fn stats_display_with_most_common() {
        let stats = sample_stats(Some(WordCount::new("c", 3)));
        assert_eq!(
            stats.to_string(),
            "6 words (3 distinct), avg length 1.00, 1 paragraphs, 1 sentences, most common 'c' x3"
        );
    }

    #[test]
    fn stats_display_without_most_common() {
        let stats = sample_stats(None);
        assert!(!stats.to_string().contains("most common"));
    }

    #[test]
    fn stats_empty_flag() {
        let mut stats = sample_stats(None);
        assert!(!stats.is_empty());
        stats.words = 0;
        assert!(stats.is_empty());
    }

    #[test]
    fn shell_config_defaults() {
        let config = ShellConfig::default();
        assert_eq!(config.quit_word, "quit");
        assert_eq!(config.average_precision, 2);
        assert_eq!(config.top, 0);
    }

    #[test]
    fn shell_config_builders() {
        let config = ShellConfig::default()
            .with_quit_word("exit")
            .with_top(5)
            .with_average_precision(3);
        assert_eq!(config.quit_word, "exit");
        assert_eq!(config.top, 5);
        assert_eq!(config.average_precision, 3);
    }

    #[test]
    fn quit_is_case_insensitive() {
        let config = ShellConfig::default();
        assert!(config.is_quit("quit"));
        assert!(config.is_quit("QUIT"));
        assert!(config.is_quit("QuIt"));
        assert!(!config.is_quit("quit "));
        assert!(!config.is_quit("quitter"));
        assert!(!config.is_quit(""));
    }

    #[test]
    fn load_error_reports_path() {
        let err = LoadError::Read {
            path: PathBuf::from("missing.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        assert_eq!(err.path(), std::path::Path::new("missing.txt"));
        assert!(err.to_string().starts_with("cannot read missing.txt"));
    }

    #[test]
    fn invalid_utf8_error_has_source() {
        let source = String::from_utf8(vec![0x66, 0xff]).unwrap_err();
        let err = LoadError::InvalidUtf8 {
            path: PathBuf::from("bad.txt"),
            source,
        };
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().contains("not valid UTF-8"));
    }
}
