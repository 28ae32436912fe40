//! Word lookup loop.
//!
//! The shell is generic over its input and output so it can be driven by a
//! terminal or by in-memory buffers.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tally_core::Document;
use tally_types::ShellConfig;

/// Repeated word lookups against one document.
pub struct Shell<'d> {
    doc: &'d Document,
    config: &'d ShellConfig,
}

impl<'d> Shell<'d> {
    /// Creates a shell over `doc`.
    pub fn new(doc: &'d Document, config: &'d ShellConfig) -> Self {
        Self { doc, config }
    }

    /// Prompts for words until the quit word or end of input.
    ///
    /// Returns the number of lookups answered.
    pub fn run<R: BufRead, W: Write>(&self, mut input: R, out: &mut W) -> Result<usize> {
        let mut line = String::new();
        let mut lookups = 0usize;

        loop {
            write!(
                out,
                "Enter a word to search for (or type '{}' to exit): ",
                self.config.quit_word
            )?;
            out.flush().context("failed to flush prompt")?;

            line.clear();
            let read = input
                .read_line(&mut line)
                .context("failed to read search word")?;

            if read == 0 {
                // End of input: finish the prompt line before leaving.
                writeln!(out)?;
                break;
            }

            let word = line.trim_end_matches(|c: char| c == '\n' || c == '\r');
            if self.config.is_quit(word) {
                break;
            }

            self.lookup(word, out)?;
            lookups += 1;
        }

        writeln!(out, "Exiting word search...")?;
        Ok(lookups)
    }

    /// Answers each word in `words` without prompting.
    pub fn run_batch<W: Write>(&self, words: &[String], out: &mut W) -> Result<usize> {
        for word in words {
            self.lookup(word, out)?;
        }
        Ok(words.len())
    }

    fn lookup<W: Write>(&self, word: &str, out: &mut W) -> Result<()> {
        let count = self.doc.count(word);
        tracing::debug!(word, count, "lookup");

        let unit = if count == 1 { "time" } else { "times" };
        writeln!(out, "The word '{word}' appears {count} {unit} in the article.")?;
        Ok(())
    }
}
