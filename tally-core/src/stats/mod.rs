//! Counting infrastructure: word frequencies and text segmentation.

mod frequency;
mod segment;

pub use frequency::FrequencyTable;
pub use segment::{count_paragraphs, count_sentences};
