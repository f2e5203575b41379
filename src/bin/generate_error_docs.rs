//! Generate error code documentation from the source of truth (error enums).
//!
//! This binary reads the error codes, descriptions, details, and help text
//! directly from the `PuzzleError` and `SearchError` implementations via their
//! `code()`, `description()`, `details()`, and `help()` methods.
//!
//! Run with:
//! ```bash
//! cargo run --bin generate_error_docs > docs/ERROR_CODES.md
//! ```

use std::io;

use wordgrid::coordinator::SearchError;
use wordgrid::errors::PuzzleError;

/// Macro to generate error documentation for any error type
/// with `code()`, `description()`, `details()`, `help()`, and `display_detailed()` methods
macro_rules! generate_error_docs {
    ($errors:expr) => {
        for error in $errors {
            println!("### {}: {}\n", error.code(), error.description());
            println!("**Details:** {}\n", error.details());

            if let Some(help_text) = error.help() {
                println!("**How to fix:**");
                println!("```");
                println!("{}", help_text);
                println!("```\n");
            }

            println!("**Detailed format:**");
            println!("```");
            println!("{}", error.display_detailed());
            println!("```\n");

            println!("---\n");
        }
    };
}

/// One sample of each `PuzzleError` variant
fn all_puzzle_error_variants() -> Vec<PuzzleError> {
    vec![
        PuzzleError::ReadFailure {
            path: "puzzle.txt".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        },
        PuzzleError::EmptyGrid,
        PuzzleError::MissingWordList,
        // WordListAllocation--create by reserving an impossible capacity
        PuzzleError::WordListAllocation(Vec::<u64>::new().try_reserve_exact(usize::MAX).unwrap_err()),
        PuzzleError::NomError(nom::error::ErrorKind::SeparatedList),
    ]
}

/// One sample of each `SearchError` variant we can construct
fn all_search_error_variants() -> Vec<SearchError> {
    let mut errors = vec![SearchError::InvalidThreadCount { value: 0 }];

    // ThreadPool--rayon only hands these out from its builders; the second global
    // initialization always fails
    let second_init = rayon::ThreadPoolBuilder::new()
        .num_threads(1)
        .build_global()
        .and_then(|()| rayon::ThreadPoolBuilder::new().build_global());
    if let Err(e) = second_init {
        errors.push(SearchError::ThreadPool(e));
    }

    errors
}

fn main() {
    println!("# wordgrid Error Codes\n");
    println!("<!-- generated by `cargo run --bin generate_error_docs`; do not edit by hand -->\n");

    println!("## Puzzle Errors (P001-P005)\n");
    generate_error_docs!(all_puzzle_error_variants());

    println!("## Search Errors (S001-S002)\n");
    generate_error_docs!(all_search_error_variants());
}
