use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use instant::Instant;

use wordgrid::coordinator::{SearchConfig, SearchCoordinator, SearchError};
use wordgrid::errors::PuzzleError;
use wordgrid::puzzle::Puzzle;
use wordgrid::sink::WriterSink;

const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")");

/// Word-search solver: finds each listed word in the grid, forwards or mirrored
#[derive(Parser, Debug)]
#[command(author, version = VERSION, about, long_about = None)]
struct Cli {
    /// Puzzle file: grid rows, a blank line, then a comma-separated word list
    puzzle: PathBuf,

    /// Number of worker threads (positive integer)
    threads: usize,
}

/// Entry point of the wordgrid CLI.
///
/// Delegates to [`try_main`], printing coded errors in detail before exiting with code 1.
fn main() -> ExitCode {
    let debug_enabled = std::env::var("WORDGRID_DEBUG").is_ok();
    wordgrid::log::init_logger(debug_enabled);

    if let Err(e) = try_main() {
        if let Some(search_err) = e.downcast_ref::<SearchError>() {
            eprintln!("Error: {}", search_err.display_detailed());
        } else if let Some(puzzle_err) = e.downcast_ref::<PuzzleError>() {
            eprintln!("Error: {}", puzzle_err.display_detailed());
        } else {
            eprintln!("Error: {e}");
        }
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Steps:
/// 1. Parse CLI arguments and validate the thread count (before touching the puzzle).
/// 2. Start the worker pool.
/// 3. Load the puzzle.
/// 4. Search each word in order; matches stream to stdout as they are found.
/// 5. Print a summary on stderr.
fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = SearchConfig::new(cli.threads)?;
    let coordinator = SearchCoordinator::new(config)?;

    let t_load = Instant::now();
    let puzzle = Puzzle::load_from_path(&cli.puzzle)?;
    let load_secs = t_load.elapsed().as_secs_f64();

    let sink = WriterSink::new(std::io::stdout());
    let mut found_words = 0;

    let t_search = Instant::now();
    for word in &puzzle.words {
        println!("Searching for word: {word}");
        let outcome = coordinator.search(&puzzle.grid, word, &sink);
        if outcome.found {
            found_words += 1;
        } else {
            println!("Word '{word}' not found.");
        }
    }
    let search_secs = t_search.elapsed().as_secs_f64();

    eprintln!(
        "Loaded {}x{} grid in {:.3}s; searched {} words with {} threads in {:.3}s ({} found).",
        puzzle.grid.rows(),
        puzzle.grid.usable_cols(),
        load_secs,
        puzzle.words.len(),
        config.threads(),
        search_secs,
        found_words
    );

    Ok(())
}
