//! Streaming tokenizer.
//!
//! Splits the output of [`TextNormalizer`](super::TextNormalizer) into word
//! tokens. Tokens are slices of the normalized buffer, so tokenizing never
//! allocates.
//!
//! ```ignore
//! "the cat sat" -> ("the", 0), ("cat", 1), ("sat", 2)
//! ```
//!
//! ## The Input Contract
//!
//! The tokenizer expects **normalized** input:
//! - Lowercase ASCII letters and single spaces only
//! - No leading or trailing space
//! - No consecutive spaces
//!
//! Violations panic in debug builds.

use memchr::{memchr_iter, Memchr};

/// Iterator over the tokens of a normalized buffer, left to right.
///
/// # Example
///
/// ```
/// use tally_core::analyzer::Tokens;
///
/// let tokens: Vec<&str> = Tokens::new("hello big world").collect();
/// assert_eq!(tokens, ["hello", "big", "world"]);
/// ```
#[derive(Debug, Clone)]
pub struct Tokens<'n> {
    normalized: &'n str,
    spaces: Memchr<'n>,
    start: usize,
    done: bool,
}

impl<'n> Tokens<'n> {
    /// Starts tokenizing `normalized`.
    pub fn new(normalized: &'n str) -> Self {
        let bytes = normalized.as_bytes();

        debug_assert!(
            bytes.first().is_none_or(|&b| b != b' '),
            "tokenizer: leading whitespace, normalizer contract violated"
        );

        debug_assert!(
            bytes.last().is_none_or(|&b| b != b' '),
            "tokenizer: trailing whitespace, normalizer contract violated"
        );

        debug_assert!(
            !normalized.contains("  "),
            "tokenizer: consecutive spaces, normalizer contract violated"
        );

        Self {
            normalized,
            spaces: memchr_iter(b' ', bytes),
            start: 0,
            done: bytes.is_empty(),
        }
    }
}

impl<'n> Iterator for Tokens<'n> {
    type Item = &'n str;

    #[inline]
    fn next(&mut self) -> Option<&'n str> {
        if self.done {
            return None;
        }

        match self.spaces.next() {
            Some(i) => {
                // Splitting on the ASCII space byte always lands on a char boundary.
                let token = &self.normalized[self.start..i];
                self.start = i + 1;
                Some(token)
            }
            None => {
                self.done = true;
                Some(&self.normalized[self.start..])
            }
        }
    }
}

impl core::iter::FusedIterator for Tokens<'_> {}

/// Tokenizes normalized input and emits `(token, position)`.
///
/// Positions start at 0 and increase by one per token.
#[inline]
pub fn tokenize<'n, F>(normalized: &'n str, mut emit: F)
where
    F: FnMut(&'n str, usize),
{
    for (pos, token) in Tokens::new(normalized).enumerate() {
        emit(token, pos);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(input: &str) -> Vec<(&str, usize)> {
        let mut out = Vec::new();
        tokenize(input, |text, pos| out.push((text, pos)));
        out
    }

    #[test]
    fn single_word() {
        let out = collect("hello");
        assert_eq!(out, [("hello", 0)]);
    }

    #[test]
    fn two_words() {
        let out = collect("hello world");
        assert_eq!(out, [("hello", 0), ("world", 1)]);
    }

    #[test]
    fn positions_are_sequential() {
        let out = collect("the quick brown fox");
        assert_eq!(out.len(), 4);
        for (i, (_, pos)) in out.iter().enumerate() {
            assert_eq!(*pos, i);
        }
    }

    #[test]
    fn empty_emits_nothing() {
        assert!(collect("").is_empty());
        assert_eq!(Tokens::new("").next(), None);
    }

    #[test]
    fn single_char_tokens() {
        let tokens: Vec<&str> = Tokens::new("a b c").collect();
        assert_eq!(tokens, ["a", "b", "c"]);
    }

    #[test]
    fn tokens_are_slices_of_input() {
        let input = String::from("hello world");
        let base = input.as_ptr() as usize;
        let end = base + input.len();

        for token in Tokens::new(&input) {
            let ptr = token.as_ptr() as usize;
            assert!(ptr >= base && ptr < end);
        }
    }

    #[test]
    fn iterator_is_fused() {
        let mut tokens = Tokens::new("one");
        assert_eq!(tokens.next(), Some("one"));
        assert_eq!(tokens.next(), None);
        assert_eq!(tokens.next(), None);
    }

    #[test]
    fn matches_str_split() {
        let input = "one two three four five";
        let expected: Vec<&str> = input.split(' ').collect();
        let actual: Vec<&str> = Tokens::new(input).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    #[should_panic(expected = "consecutive spaces")]
    #[cfg(debug_assertions)]
    fn rejects_unnormalized_input() {
        let _ = Tokens::new("hello  world");
    }
}
