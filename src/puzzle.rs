//! `puzzle`: load a word-search puzzle from text.
//!
//! File layout:
//!
//! ```text
//! C A T X
//! X D O G
//!
//! CAT,DOG
//! ```
//!
//! - Leading empty lines are skipped.
//! - Grid rows run until the first empty line that follows at least one row. All
//!   whitespace inside a row is stripped, so letters may be space-separated.
//! - The word list is the last non-blank line after the grid. It is split on `,`;
//!   empty entries (e.g. from `CAT,,DOG` or a trailing comma) are dropped.
//!
//! Rows are materialized with [`Grid::from_lines`], so each row carries a line-end cell
//! and the scanners' usable width equals the letter width.
//!
//! `parse_from_str` does no I/O. `load_from_path` reads a file and delegates to it.

use crate::errors::PuzzleError;
use crate::grid::Grid;
use log::debug;
use nom::bytes::complete::take_till;
use nom::character::complete::char;
use nom::multi::separated_list0;
use nom::IResult;
use std::path::Path;

type PResult<'a, O> = IResult<&'a str, O, Box<PuzzleError>>;

/// A parsed puzzle: the grid plus the words to look for, in file order.
#[derive(Debug, Clone)]
pub struct Puzzle {
    pub grid: Grid,
    pub words: Vec<String>,
}

/// Remove every whitespace character from a line.
pub(crate) fn strip_whitespace(line: &str) -> String {
    line.chars().filter(|c| !c.is_whitespace()).collect()
}

/// `seg(,seg)*` where a segment may be empty.
fn comma_segments(input: &str) -> PResult<'_, Vec<&str>> {
    separated_list0(char(','), take_till(|c| c == ','))(input)
}

/// Split a (whitespace-stripped) word-list line into its non-empty words.
///
/// Storage for the list and for each word is reserved fallibly, so running out of
/// memory surfaces as [`PuzzleError::WordListAllocation`] and everything built so far
/// is dropped.
///
/// # Errors
///
/// Returns `PuzzleError::WordListAllocation` if memory cannot be reserved, or
/// `PuzzleError::NomError` if the line cannot be split.
pub fn parse_word_list(line: &str) -> Result<Vec<String>, PuzzleError> {
    let (_, segments) = comma_segments(line).map_err(|e| match e {
        nom::Err::Error(pe) | nom::Err::Failure(pe) => *pe,
        nom::Err::Incomplete(_) => PuzzleError::NomError(nom::error::ErrorKind::Complete),
    })?;

    let mut words = Vec::new();
    words.try_reserve_exact(segments.iter().filter(|s| !s.is_empty()).count())?;
    for segment in segments.into_iter().filter(|s| !s.is_empty()) {
        let mut word = String::new();
        word.try_reserve_exact(segment.len())?;
        word.push_str(segment);
        words.push(word);
    }
    Ok(words)
}

impl Puzzle {
    /// Parse a puzzle from an in-memory string.
    ///
    /// # Errors
    ///
    /// - `PuzzleError::EmptyGrid` if there is no grid row.
    /// - `PuzzleError::MissingWordList` if nothing but blank lines follows the grid.
    /// - Any error from [`parse_word_list`].
    pub fn parse_from_str(contents: &str) -> Result<Puzzle, PuzzleError> {
        let mut lines = contents.lines();

        let mut rows: Vec<String> = Vec::new();
        for line in lines.by_ref() {
            if line.is_empty() {
                if rows.is_empty() {
                    continue;
                }
                break;
            }
            rows.push(strip_whitespace(line));
        }
        if rows.is_empty() {
            return Err(PuzzleError::EmptyGrid);
        }

        let word_line = lines
            .filter(|line| !line.trim().is_empty())
            .last()
            .ok_or(PuzzleError::MissingWordList)?;
        let words = parse_word_list(&strip_whitespace(word_line))?;

        let grid = Grid::from_lines(&rows);
        debug!(
            "Parsed puzzle: {} rows x {} usable columns, {} words",
            grid.rows(),
            grid.usable_cols(),
            words.len()
        );

        Ok(Puzzle { grid, words })
    }

    /// Read a puzzle file and parse it.
    ///
    /// # Errors
    ///
    /// Returns `PuzzleError::ReadFailure` if the file cannot be read, otherwise
    /// anything [`Puzzle::parse_from_str`] returns.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Puzzle, PuzzleError> {
        let path_ref = path.as_ref();
        let data = std::fs::read_to_string(path_ref).map_err(|source| PuzzleError::ReadFailure {
            path: path_ref.display().to_string(),
            source,
        })?;
        Self::parse_from_str(&data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let puzzle = Puzzle::parse_from_str("C A T\nD O G\n\nCAT, DOG\n").unwrap();
        assert_eq!(puzzle.grid.rows(), 2);
        assert_eq!(puzzle.grid.usable_cols(), 3);
        assert_eq!(puzzle.grid.cell(1, 2), 'G');
        assert_eq!(puzzle.words, vec!["CAT", "DOG"]);
    }

    #[test]
    fn test_skips_leading_blank_lines() {
        let puzzle = Puzzle::parse_from_str("\n\nAB\nCD\n\nAB").unwrap();
        assert_eq!(puzzle.grid.rows(), 2);
        assert_eq!(puzzle.words, vec!["AB"]);
    }

    #[test]
    fn test_word_list_is_last_non_blank_line() {
        let puzzle = Puzzle::parse_from_str("AB\n\nIGNORED\nAB,BA\n\n\n").unwrap();
        assert_eq!(puzzle.words, vec!["AB", "BA"]);
    }

    #[test]
    fn test_crlf_line_endings() {
        let puzzle = Puzzle::parse_from_str("AB\r\nCD\r\n\r\nAB,CD\r\n").unwrap();
        assert_eq!(puzzle.grid.rows(), 2);
        assert_eq!(puzzle.grid.usable_cols(), 2);
        assert_eq!(puzzle.words, vec!["AB", "CD"]);
    }

    #[test]
    fn test_ragged_rows_are_padded() {
        let puzzle = Puzzle::parse_from_str("ABCD\nEF\n\nAB").unwrap();
        assert_eq!(puzzle.grid.usable_cols(), 4);
        assert_eq!(puzzle.grid.cell(1, 2), Grid::LINE_END);
        assert_eq!(puzzle.grid.cell(1, 3), Grid::PAD);
    }

    #[test]
    fn test_empty_grid_error() {
        let err = Puzzle::parse_from_str("\n\n").unwrap_err();
        assert!(matches!(err, PuzzleError::EmptyGrid));
        let err = Puzzle::parse_from_str("").unwrap_err();
        assert!(matches!(err, PuzzleError::EmptyGrid));
    }

    #[test]
    fn test_missing_word_list_error() {
        let err = Puzzle::parse_from_str("AB\nCD\n").unwrap_err();
        assert!(matches!(err, PuzzleError::MissingWordList));
        let err = Puzzle::parse_from_str("AB\n\n   \n").unwrap_err();
        assert!(matches!(err, PuzzleError::MissingWordList));
    }

    #[test]
    fn test_parse_word_list_drops_empty_segments() {
        assert_eq!(parse_word_list("CAT,,DOG,").unwrap(), vec!["CAT", "DOG"]);
        assert_eq!(parse_word_list(",,").unwrap(), Vec::<String>::new());
        assert_eq!(parse_word_list("").unwrap(), Vec::<String>::new());
        assert_eq!(parse_word_list("SOLO").unwrap(), vec!["SOLO"]);
    }

    #[test]
    fn test_strip_whitespace() {
        assert_eq!(strip_whitespace(" a b\tc "), "abc");
    }

    #[test]
    fn test_load_missing_file() {
        let err = Puzzle::load_from_path("/definitely/not/here.txt").unwrap_err();
        assert_eq!(err.code(), "P001");
        assert!(err.to_string().contains("/definitely/not/here.txt"));
    }
}
