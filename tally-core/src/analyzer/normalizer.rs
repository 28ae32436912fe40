/// Maps every byte to its lowercase ASCII letter, or to `0x00` for a separator.
///
/// Non-ASCII bytes (including every byte of a multi-byte UTF-8 sequence)
/// map to `0x00`, so the output of the normalizer is always pure ASCII.
#[rustfmt::skip]
const LETTER_TABLE: [u8; 256] = [
    0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,
    0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,
    0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,
    0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,
    0x00,0x61,0x62,0x63,0x64,0x65,0x66,0x67,0x68,0x69,0x6a,0x6b,0x6c,0x6d,0x6e,0x6f,
    0x70,0x71,0x72,0x73,0x74,0x75,0x76,0x77,0x78,0x79,0x7a,0x00,0x00,0x00,0x00,0x00,
    0x00,0x61,0x62,0x63,0x64,0x65,0x66,0x67,0x68,0x69,0x6a,0x6b,0x6c,0x6d,0x6e,0x6f,
    0x70,0x71,0x72,0x73,0x74,0x75,0x76,0x77,0x78,0x79,0x7a,0x00,0x00,0x00,0x00,0x00,
    0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,
    0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,
    0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,
    0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,
    0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,
    0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,
    0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,
    0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,0x00,
];

/// Returns the lowercase letter for `b`, or `None` if `b` separates words.
#[inline(always)]
const fn fold_letter(b: u8) -> Option<u8> {
    match LETTER_TABLE[b as usize] {
        0 => None,
        l => Some(l),
    }
}

/// Word normalizer.
///
/// Extracts maximal runs of ASCII letters (`A-Z`, `a-z`), lowercases them and
/// writes them separated by a single ASCII space:
///
/// - Digits, punctuation and whitespace are separators
/// - Non-ASCII characters are separators (never part of a word)
/// - No leading, trailing or doubled spaces in the output
///
/// The output is exactly the input contract of [`tokenize`](super::tokenize),
/// and normalizing it a second time returns it unchanged.
///
/// # Examples
///
/// ```
/// use tally_core::analyzer::TextNormalizer;
///
/// let normalizer = TextNormalizer::default();
/// assert_eq!(normalizer.normalize("  The CAT, the hat!  "), "the cat the hat");
/// assert_eq!(normalizer.normalize("R2-D2 café"), "r d caf");
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct TextNormalizer;

impl TextNormalizer {
    /// Creates a new normalizer.
    pub const fn new() -> Self {
        Self
    }

    /// Normalizes text into an existing String buffer.
    ///
    /// Clears the buffer before writing. The output is never longer than the
    /// input, so a buffer sized for the input is never reallocated.
    #[inline]
    pub fn normalize_into(&self, input: &str, out: &mut String) {
        out.clear();
        out.reserve(input.len());

        let mut in_word = false;

        for &b in input.as_bytes() {
            match fold_letter(b) {
                Some(letter) => {
                    if !in_word && !out.is_empty() {
                        out.push(' ');
                    }
                    out.push(letter as char);
                    in_word = true;
                }
                None => in_word = false,
            }
        }
    }

    /// Normalizes text and returns a new String.
    #[inline]
    pub fn normalize(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        self.normalize_into(input, &mut out);
        out
    }

    /// Normalizes a lookup target.
    ///
    /// Unlike [`normalize`](Self::normalize), separators are dropped entirely
    /// and the letter runs are joined: `"Don't!"` becomes `"dont"`.
    pub fn normalize_target(&self, target: &str) -> String {
        target.bytes().filter_map(fold_letter).map(char::from).collect()
    }
}
