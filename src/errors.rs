//! Error types for loading puzzles, with error codes and helpful messages.
//!
//! # Error Codes
//!
//! Each error variant has a unique code (P001-P005) for documentation lookup:
//!
//! - P001: `ReadFailure` (Puzzle file missing or unreadable)
//! - P002: `EmptyGrid` (No grid lines before the word list)
//! - P003: `MissingWordList` (No word-list line after the grid)
//! - P004: `WordListAllocation` (Out of memory while materializing the word list)
//! - P005: `NomError` (Low-level nom parser error)
//!
//! Search-time errors (thread configuration) live in
//! [`SearchError`](crate::coordinator::SearchError) and use `S` codes.
//!
//! # Examples
//!
//! ```
//! use wordgrid::puzzle::Puzzle;
//!
//! match Puzzle::parse_from_str("\n\n") {
//!     Err(e) => {
//!         assert_eq!(e.code(), "P002");
//!         println!("{}", e.display_detailed());
//!     }
//!     Ok(_) => unreachable!(),
//! }
//! ```

use nom::error::{ErrorKind, ParseError as NomParseError};
use std::collections::TryReserveError;
use std::io;

/// Custom error type for puzzle loading
#[derive(Debug, thiserror::Error)]
pub enum PuzzleError {
    #[error("failed to read puzzle from '{path}': {source}")]
    ReadFailure {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("puzzle has no grid lines")]
    EmptyGrid,

    #[error("puzzle has no word list after the grid")]
    MissingWordList,

    #[error("out of memory while building the word list: {0}")]
    WordListAllocation(#[from] TryReserveError),

    // nom parser error (lowest level)
    #[error("nom parser error: {0:?}")]
    NomError(ErrorKind),
}

impl From<PuzzleError> for io::Error {
    fn from(pe: PuzzleError) -> Self {
        match pe {
            PuzzleError::ReadFailure { source, .. } => source,
            other => io::Error::new(io::ErrorKind::InvalidData, other.to_string()),
        }
    }
}

impl<'a> NomParseError<&'a str> for Box<PuzzleError> {
    fn from_error_kind(_input: &'a str, kind: ErrorKind) -> Self {
        Box::new(PuzzleError::NomError(kind))
    }

    fn append(_input: &'a str, _kind: ErrorKind, other: Self) -> Self {
        other
    }
}

impl PuzzleError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            PuzzleError::ReadFailure { .. } => "P001",
            PuzzleError::EmptyGrid => "P002",
            PuzzleError::MissingWordList => "P003",
            PuzzleError::WordListAllocation(_) => "P004",
            PuzzleError::NomError(_) => "P005",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            PuzzleError::ReadFailure { .. } => "Puzzle file missing or unreadable",
            PuzzleError::EmptyGrid => "No grid lines before the word list",
            PuzzleError::MissingWordList => "No word-list line after the grid",
            PuzzleError::WordListAllocation(_) => "Out of memory while materializing the word list",
            PuzzleError::NomError(_) => "Low-level nom parser error",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            PuzzleError::ReadFailure { .. } => "The puzzle file could not be opened or is not valid UTF-8. No search is attempted.",
            PuzzleError::EmptyGrid => "The grid section is empty: the file contains no non-empty line before the first blank separator line.",
            PuzzleError::MissingWordList => "After the grid and its blank separator line, the file must contain a comma-separated line listing the words to look for.",
            PuzzleError::WordListAllocation(_) => "Memory for the word list could not be reserved. Words materialized so far are released and the batch is abandoned.",
            PuzzleError::NomError(_) => "The word-list line could not be split into words. This is usually a bug in the word-list parser.",
        }
    }

    /// Returns a helpful suggestion or example for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            PuzzleError::ReadFailure { .. } => Some("Check that the path exists and the file is readable UTF-8 text"),
            PuzzleError::EmptyGrid => Some("Start the file with the grid rows, e.g. 'C A T' on the first line"),
            PuzzleError::MissingWordList => Some("Add a blank line after the grid, then the words: 'CAT,DOG,BIRD'"),
            PuzzleError::WordListAllocation(_) => Some("Shorten the word list or free up memory and try again"),
            PuzzleError::NomError(_) => None,
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(base_msg: &str, code: &str, help: Option<&str>) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn allocation_error() -> TryReserveError {
        Vec::<u64>::new().try_reserve_exact(usize::MAX).unwrap_err()
    }

    fn all_variants() -> Vec<PuzzleError> {
        vec![
            PuzzleError::ReadFailure {
                path: "missing.txt".to_string(),
                source: io::Error::new(io::ErrorKind::NotFound, "not found"),
            },
            PuzzleError::EmptyGrid,
            PuzzleError::MissingWordList,
            PuzzleError::WordListAllocation(allocation_error()),
            PuzzleError::NomError(ErrorKind::SeparatedList),
        ]
    }

    #[test]
    fn test_error_codes_and_help() {
        let err = PuzzleError::MissingWordList;
        assert_eq!(err.code(), "P003");
        let detailed = err.display_detailed();
        assert!(detailed.contains("P003"));
        assert!(detailed.contains("CAT,DOG"));
    }

    #[test]
    fn test_all_error_codes_are_unique() {
        let mut codes = std::collections::HashSet::new();
        for err in all_variants() {
            let code = err.code();
            assert!(code.starts_with('P'), "Error code '{}' should start with 'P'", code);
            assert!(codes.insert(code), "Duplicate error code found: {}", code);
        }
        assert_eq!(codes.len(), 5);
    }

    #[test]
    fn test_error_code_format() {
        for err in all_variants() {
            let code = err.code();
            assert_eq!(code.len(), 4, "Error code '{}' should be 4 characters (P0XX)", code);
            assert!(code[1..].parse::<u16>().is_ok(), "Error code '{}' should end with a number", code);
        }
    }

    #[test]
    fn test_read_failure_mentions_path() {
        let variants = all_variants();
        let err = &variants[0];
        let detailed = err.display_detailed();
        assert!(detailed.contains("missing.txt"));
        assert!(detailed.contains("P001"));
    }

    #[test]
    fn test_display_detailed_without_help() {
        let err = PuzzleError::NomError(ErrorKind::SeparatedList);
        assert!(err.help().is_none());
        assert_eq!(err.display_detailed(), format!("{err} (P005)"));
    }

    #[test]
    fn test_into_io_error_keeps_read_failure_kind() {
        let io_err: io::Error = all_variants().remove(0).into();
        assert_eq!(io_err.kind(), io::ErrorKind::NotFound);
        let io_err: io::Error = PuzzleError::EmptyGrid.into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidData);
    }
}
