//! Text analysis pipeline.
//!
//! - **Normalizer**: reduces raw text to lowercase ASCII words separated by single spaces
//! - **Tokenizer**: splits normalized text into word tokens without allocating

pub mod normalizer;
pub mod tokenizer;

pub use normalizer::TextNormalizer;
pub use tokenizer::{tokenize, Tokens};
