//! Tally - word statistics for a plain-text article.
//!
//! Reads the article once, answers word lookups from a prompt (or from
//! `--word` arguments), then prints a summary.

mod cli;
mod report;
mod shell;
mod source;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // Logs go to stderr so they never interleave with the report on stdout.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    cli::run(cli)
}
