//! Command-line arguments and the top-level run.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tally_core::Document;
use tally_types::ShellConfig;

use crate::report::write_report;
use crate::shell::Shell;
use crate::source;

/// Tally - word statistics for a plain-text article
///
/// Looks up words interactively, then reports the most common word, the
/// average word length and the paragraph and sentence counts.
#[derive(Parser, Debug)]
#[command(name = "tally")]
#[command(
    version,
    after_help = "\
Examples:
  tally                             Analyze ./article.txt interactively
  tally notes.txt                   Analyze another file
  tally notes.txt -w the -w cat     Look up words without prompting
  tally notes.txt --top 10          Also list the 10 most frequent words"
)]
pub struct Cli {
    /// Text file to analyze
    #[arg(default_value = "article.txt")]
    pub path: PathBuf,

    /// Log level (error, warn, info, debug, trace); RUST_LOG takes precedence
    #[arg(long, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    /// Input that ends the interactive lookup loop (case-insensitive)
    #[arg(long, default_value = "quit", env = "TALLY_QUIT_WORD")]
    pub quit_word: String,

    /// Word to look up; repeat to look up several and skip the prompt
    #[arg(long, short = 'w')]
    pub word: Vec<String>,

    /// Number of most frequent words to list in the report
    #[arg(long, default_value = "0")]
    pub top: usize,

    /// Decimal digits for the average word length
    #[arg(long, default_value = "2", value_parser = clap::value_parser!(u8).range(0..=10))]
    pub precision: u8,
}

impl Cli {
    /// Shell and report options derived from the arguments.
    pub fn shell_config(&self) -> ShellConfig {
        ShellConfig::default()
            .with_quit_word(self.quit_word.clone())
            .with_top(self.top)
            .with_average_precision(usize::from(self.precision))
    }
}

/// Loads the document, runs the lookups and prints the report.
pub fn run(cli: Cli) -> Result<()> {
    let text = source::load(&cli.path)?;
    let doc = Document::new(text);
    let config = cli.shell_config();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let shell = Shell::new(&doc, &config);

    let lookups = if cli.word.is_empty() {
        shell.run(io::stdin().lock(), &mut out)?
    } else {
        shell.run_batch(&cli.word, &mut out)?
    };
    tracing::info!(lookups, "lookups finished");

    write_report(&doc, &config, &mut out).context("failed to write report")?;
    out.flush().context("failed to flush stdout")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::ffi::OsString;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["tally"]).unwrap();
        assert_eq!(cli.path, PathBuf::from("article.txt"));
        assert_eq!(cli.log_level, "warn");
        assert!(cli.word.is_empty());
        assert_eq!(cli.shell_config(), ShellConfig::default());
    }

    #[test]
    fn words_and_options() {
        let cli = Cli::try_parse_from([
            "tally", "notes.txt", "-w", "the", "--word", "cat", "--top", "5", "--precision", "3",
            "--quit-word", "exit",
        ])
        .unwrap();

        assert_eq!(cli.path, PathBuf::from("notes.txt"));
        assert_eq!(cli.word, ["the", "cat"]);

        let config = cli.shell_config();
        assert_eq!(config.top, 5);
        assert_eq!(config.average_precision, 3);
        assert_eq!(config.quit_word, "exit");
    }

    #[test]
    fn rejects_unknown_log_level() {
        assert!(Cli::try_parse_from(["tally", "--log-level", "loud"]).is_err());
    }

    #[test]
    fn rejects_out_of_range_precision() {
        assert!(Cli::try_parse_from(["tally", "--precision", "11"]).is_err());
    }

    #[test]
    fn missing_file_fails_run() {
        let dir = tempfile::tempdir().unwrap();
        let cli = Cli::try_parse_from([
            OsString::from("tally"),
            dir.path().join("absent.txt").into_os_string(),
        ])
        .unwrap();

        let err = run(cli).unwrap_err();
        assert!(err.downcast_ref::<tally_types::LoadError>().is_some());
    }
}
