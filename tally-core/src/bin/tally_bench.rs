//! Throughput benchmark for the statistics pipeline.
//!
//! Measures each stage on a large text file (a book, a Wikipedia dump):
//!
//! 1. **Normalize**: raw text to space-joined lowercase words
//! 2. **Tokenize**: splitting the normalized buffer
//! 3. **Frequency**: building the frequency table
//! 4. **Segment**: paragraph and sentence counting on the raw text
//! 5. **Document**: the full cached analysis
//!
//! ## Usage
//!
//! ```bash
//! ./target/release/tally_bench /path/to/book.txt
//! ```
//!
//! Build with `--release` and use an input of 100MB+ for stable numbers.

use std::env;
use std::fs;
use std::io;
use std::time::{Duration, Instant};

use tally_core::analyzer::{TextNormalizer, Tokens};
use tally_core::stats::{count_paragraphs, count_sentences, FrequencyTable};
use tally_core::Document;

const WARMUP_RUNS: usize = 1;
const MEASURE_RUNS: usize = 5;

fn main() -> io::Result<()> {
    let args: Vec<String> = env::args().collect();

    let Some(path) = args.get(1) else {
        eprintln!("Usage: tally_bench <path>");
        std::process::exit(1);
    };

    println!("Loading file...");
    let input = fs::read_to_string(path)?;

    println!("File size: {}\n", fmt_bytes(input.len() as u64));

    let normalized = bench_normalize(&input);
    bench_tokenize(&input, &normalized);
    bench_frequency(&input, &normalized);
    bench_segment(&input);
    bench_document(&input);

    Ok(())
}

fn bench_normalize(input: &str) -> String {
    let normalizer = TextNormalizer::new();
    let mut out = String::with_capacity(input.len());

    println!("=== Normalize ===");

    warmup(|| normalizer.normalize_into(input, &mut out));
    let elapsed = measure(|| normalizer.normalize_into(input, &mut out));

    print_perf("Normalize", input.len(), elapsed, 0);
    out
}

fn bench_tokenize(input: &str, normalized: &str) {
    println!("=== Tokenize ===");

    warmup(|| {
        std::hint::black_box(Tokens::new(normalized).count());
    });

    let mut tokens = 0u64;
    let elapsed = measure(|| {
        tokens = Tokens::new(normalized).count() as u64;
        std::hint::black_box(tokens);
    });

    print_perf("Tokenize", input.len(), elapsed, tokens);
}

fn bench_frequency(input: &str, normalized: &str) {
    println!("=== Frequency table ===");

    warmup(|| {
        std::hint::black_box(FrequencyTable::from_normalized(normalized).distinct());
    });

    let mut tokens = 0u64;
    let elapsed = measure(|| {
        let table = FrequencyTable::from_normalized(normalized);
        tokens = table.total() as u64;
        std::hint::black_box(table.most_common());
    });

    print_perf("Frequency", input.len(), elapsed, tokens);
}

fn bench_segment(input: &str) {
    println!("=== Segment ===");

    warmup(|| {
        std::hint::black_box(count_paragraphs(input) + count_sentences(input));
    });

    let elapsed = measure(|| {
        std::hint::black_box(count_paragraphs(input) + count_sentences(input));
    });

    print_perf("Segment", input.len(), elapsed, 0);
}

fn bench_document(input: &str) {
    println!("=== Document (full analysis) ===");

    warmup(|| {
        std::hint::black_box(Document::new(input));
    });

    let mut tokens = 0u64;
    let elapsed = measure(|| {
        let doc = Document::new(input);
        tokens = doc.stats().words as u64;
        std::hint::black_box(doc);
    });

    print_perf("Document", input.len(), elapsed, tokens);
}

fn warmup<F: FnMut()>(mut f: F) {
    for _ in 0..WARMUP_RUNS {
        f();
    }
}

fn measure<F: FnMut()>(mut f: F) -> Duration {
    let mut total = Duration::ZERO;

    for _ in 0..MEASURE_RUNS {
        let start = Instant::now();
        f();
        total += start.elapsed();
    }

    total / MEASURE_RUNS as u32
}

fn print_perf(label: &str, input_bytes: usize, elapsed: Duration, tokens: u64) {
    let secs = elapsed.as_secs_f64();
    let mib = input_bytes as f64 / (1024.0 * 1024.0);

    println!("--------------------------------");
    println!("Stage       : {}", label);
    println!("Elapsed     : {:.3} s", secs);
    println!("Throughput  : {:.1} MiB/s", mib / secs);

    if tokens > 0 {
        println!("Words       : {}", fmt_count(tokens));
        println!("Words/sec   : {}", fmt_count((tokens as f64 / secs) as u64));
    }

    println!("--------------------------------\n");
}

fn fmt_bytes(b: u64) -> String {
    if b >= 1024 * 1024 * 1024 {
        format!("{:.2} GiB", b as f64 / (1024.0 * 1024.0 * 1024.0))
    } else if b >= 1024 * 1024 {
        format!("{:.2} MiB", b as f64 / (1024.0 * 1024.0))
    } else if b >= 1024 {
        format!("{:.2} KiB", b as f64 / 1024.0)
    } else {
        format!("{} B", b)
    }
}

fn fmt_count(n: u64) -> String {
    let s = n.to_string();
    let mut out = String::with_capacity(s.len() + s.len() / 3);

    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push('_');
        }
        out.push(ch);
    }

    out.chars().rev().collect()
}
