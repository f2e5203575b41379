//! `bench_local.rs`: quick local timing runner (no Criterion)
//!
//! PURPOSE
//! -------
//! - Ad-hoc timing of a full puzzle search at several pool sizes on *your* machine.
//! - Loads the puzzle once, then for each thread count searches the whole word list
//!   several times and reports the median.
//!
//! HOW TO RUN
//! ----------
//! - Optimized build:                `cargo run --bin bench_local --release`
//! - Another puzzle:                 `cargo run --bin bench_local --release -- -p big.txt`
//! - Multiple repeats:               `cargo run --bin bench_local --release -- -r 5`
//! - Pool sizes:                     `cargo run --bin bench_local --release -- -t 1,3,8`
//!
//! NOTES
//! -----
//! - Matches are collected in memory, so printing stays outside the timed section.
//! - One warm-up pass per pool size is done (not included in timing).
//! - We report the *median* over repeats (more robust than mean for small _N_).

use clap::Parser;
use std::hint::black_box;
use std::time::Instant;
use wordgrid::coordinator::{SearchConfig, SearchCoordinator};
use wordgrid::puzzle::Puzzle;
use wordgrid::sink::CollectingSink;

/// Simple local benchmark runner: load a puzzle once, time it at several pool sizes.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the puzzle file
    #[arg(
        short,
        long,
        default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/puzzle.txt")
    )]
    puzzle: String,

    /// Number of repeats per pool size (use >1 to reduce noise; median is reported)
    #[arg(short = 'r', long = "repeats", default_value_t = 3)]
    num_repeats: usize,

    /// Pool sizes to try
    #[arg(short = 't', long = "threads", value_delimiter = ',', default_value = "1,2,3,4")]
    threads: Vec<usize>,
}

/// Small helper: robust central tendency for small samples.
fn median(mut xs: Vec<f64>) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    xs.sort_by(f64::total_cmp);
    let n = xs.len();
    if n % 2 == 1 {
        xs[n / 2]
    } else {
        0.5 * (xs[n / 2 - 1] + xs[n / 2])
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    eprintln!("wordgrid @ {}", env!("GIT_HASH_FULL"));
    eprintln!("Loading puzzle from: {}", cli.puzzle);
    let puzzle = Puzzle::load_from_path(&cli.puzzle)?;
    eprintln!(
        "{} rows x {} columns, {} words",
        puzzle.grid.rows(),
        puzzle.grid.usable_cols(),
        puzzle.words.len()
    );

    let sink = CollectingSink::new();
    let mut summary: Vec<(usize, f64, usize)> = Vec::with_capacity(cli.threads.len());

    for &threads in &cli.threads {
        let coordinator = SearchCoordinator::new(SearchConfig::new(threads)?)?;

        // warm-up
        black_box(coordinator.search_all(&puzzle.grid, &puzzle.words, &sink));

        let mut times = Vec::with_capacity(cli.num_repeats.max(1));
        for _ in 0..cli.num_repeats.max(1) {
            sink.clear();
            let t0 = Instant::now();
            let outcomes = coordinator.search_all(&puzzle.grid, &puzzle.words, &sink);
            times.push(t0.elapsed().as_secs_f64());
            black_box(outcomes);
        }

        summary.push((threads, median(times), sink.len()));
    }

    println!("{:>8}  {:>10}  {:>8}", "threads", "median s", "matches");
    for (threads, secs, matches) in summary {
        println!("{threads:>8}  {secs:>10.4}  {matches:>8}");
    }

    Ok(())
}
