//! `grid`: the materialized letter grid that every scanner reads from.
//!
//! A [`Grid`] is an immutable, rectangular, row-major array of `char`s. It is built once
//! per puzzle and then shared read-only between the axis scanners, so it needs no
//! synchronization of its own (`Grid` is `Sync` because it owns plain data).
//!
//! Two constructors exist:
//! - [`Grid::new`] takes rows of cells exactly as given. `cols` is the longest row.
//! - [`Grid::from_lines`] materializes text lines the way a line reader sees them: every
//!   row ends with a [`Grid::LINE_END`] cell. The scanners never start a horizontal or
//!   vertical run in the final column (see [`Grid::usable_cols`]), so for line-built grids
//!   the usable width is exactly the letter width.
//!
//! Ragged input is padded with [`Grid::PAD`] on a best-effort basis and is not otherwise
//! validated.

use std::fmt;

/// Immutable `rows` × `cols` character grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<char>,
}

impl Grid {
    /// Filler for cells past the end of a short row.
    pub const PAD: char = '\0';

    /// Terminator cell appended to each row by [`Grid::from_lines`].
    pub const LINE_END: char = '\n';

    /// Build a grid from rows of cells. Short rows are padded with [`Grid::PAD`].
    #[must_use]
    pub fn new(rows: Vec<Vec<char>>) -> Grid {
        let cols = rows.iter().map(Vec::len).max().unwrap_or(0);
        let num_rows = rows.len();

        let mut cells = Vec::with_capacity(num_rows * cols);
        for mut row in rows {
            row.resize(cols, Self::PAD);
            cells.extend(row);
        }

        Grid { rows: num_rows, cols, cells }
    }

    /// Build a grid from text lines, one row per line, each row terminated by
    /// [`Grid::LINE_END`].
    ///
    /// # Example
    /// ```
    /// use wordgrid::grid::Grid;
    ///
    /// let grid = Grid::from_lines(&["CAT", "DOG"]);
    /// assert_eq!(grid.rows(), 2);
    /// assert_eq!(grid.cols(), 4);
    /// assert_eq!(grid.usable_cols(), 3);
    /// ```
    #[must_use]
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Grid {
        Grid::new(
            lines
                .iter()
                .map(|line| line.as_ref().chars().chain(std::iter::once(Self::LINE_END)).collect())
                .collect(),
        )
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of columns the scanners may use. The last column is never a start
    /// position and never a wrap target.
    #[must_use]
    pub fn usable_cols(&self) -> usize {
        self.cols.saturating_sub(1)
    }

    /// The cell at `(row, col)`.
    ///
    /// # Panics
    /// Panics if `row >= rows()` or `col >= cols()`. Scanners keep their indices in range
    /// through their loop bounds.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> char {
        debug_assert!(row < self.rows && col < self.cols);
        self.cells[row * self.cols + col]
    }

    /// Iterate over the rows as slices.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[char]> {
        // chunks_exact panics on a zero chunk size
        self.cells.chunks_exact(self.cols.max(1)).take(self.rows)
    }
}

impl fmt::Display for Grid {
    /// Letters only: padding and line terminators are skipped.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.iter_rows() {
            let text: String = row
                .iter()
                .filter(|&&c| c != Self::PAD && c != Self::LINE_END)
                .collect();
            writeln!(f, "{text}")?;
        }
        Ok(())
    }
}
