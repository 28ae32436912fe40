//! Paragraph and sentence segmentation.
//!
//! Both counters work on the raw text (not the normalized buffer) and share
//! the floor-of-1 policy: degenerate input still counts as one paragraph and
//! one sentence.

use memchr::{memchr3_iter, memchr_iter};

/// Counts paragraphs.
///
/// Paragraphs are groups of non-blank lines separated by at least one blank
/// (whitespace-only) line. `\n` and `\r\n` line endings are equivalent, and any
/// number of blank lines forms a single boundary.
///
/// Returns 1 when the text holds no non-blank line at all.
///
/// # Examples
///
/// ```
/// use tally_core::stats::count_paragraphs;
///
/// assert_eq!(count_paragraphs("Hello.\n\nWorld."), 2);
/// assert_eq!(count_paragraphs("Hello.\nWorld."), 1);
/// assert_eq!(count_paragraphs(""), 1);
/// ```
pub fn count_paragraphs(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut paragraphs = 0usize;
    let mut in_paragraph = false;
    let mut start = 0usize;

    for end in memchr_iter(b'\n', bytes).chain(core::iter::once(bytes.len())) {
        let line = &text[start..end];

        if line.trim().is_empty() {
            in_paragraph = false;
        } else if !in_paragraph {
            paragraphs += 1;
            in_paragraph = true;
        }

        start = end + 1;
    }

    paragraphs.max(1)
}

/// Counts sentences.
///
/// Sentences are the segments between maximal runs of `.`, `!` and `?`;
/// segments that are empty once trimmed are ignored, so `"..."` or `"?!"` is a
/// single boundary.
///
/// Returns 1 when no segment has content.
///
/// # Examples
///
/// ```
/// use tally_core::stats::count_sentences;
///
/// assert_eq!(count_sentences("Hi. Bye!"), 2);
/// assert_eq!(count_sentences("Wait... really?!"), 2);
/// assert_eq!(count_sentences("no terminators here"), 1);
/// ```
pub fn count_sentences(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut sentences = 0usize;
    let mut start = 0usize;

    for end in memchr3_iter(b'.', b'!', b'?', bytes).chain(core::iter::once(bytes.len())) {
        if !text[start..end].trim().is_empty() {
            sentences += 1;
        }
        start = end + 1;
    }

    sentences.max(1)
}
