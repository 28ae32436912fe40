//! Summary printed once the lookup loop ends.

use std::io::{self, Write};

use tally_core::Document;
use tally_types::ShellConfig;

/// Writes the most-common word, average length, paragraph and sentence lines,
/// followed by the top-word list when `config.top` is non-zero.
pub fn write_report<W: Write>(doc: &Document, config: &ShellConfig, out: &mut W) -> io::Result<()> {
    let stats = doc.stats();

    match &stats.most_common {
        Some(top) => writeln!(out, "The most common word in the article is '{}'.", top.word)?,
        None => writeln!(out, "The article is empty, no common word found.")?,
    }

    if stats.words > 0 {
        writeln!(
            out,
            "The average word length is {:.*}.",
            config.average_precision, stats.average_word_length
        )?;
    } else {
        writeln!(out, "The average word length is 0.0 (no words found).")?;
    }

    writeln!(out, "The count of paragraphs is {}.", stats.paragraphs)?;
    writeln!(out, "The count of sentences is {}.", stats.sentences)?;

    if config.top > 0 && !stats.is_empty() {
        writeln!(out, "Top words:")?;
        for entry in doc.top(config.top) {
            writeln!(out, "  {entry}")?;
        }
    }

    tracing::debug!(summary = %stats, "report written");
    Ok(())
}
