//! Axis scanners.
//!
//! Each scanner walks every start position of one axis family and yields a
//! [`MatchRecord`] for each start where all offsets of the word are accepted by
//! [`Orientations::accepts`]. Scanners are plain iterator producers over shared,
//! read-only inputs; they never stop early and they report nothing themselves.
//!
//! Bounds, with `cols = grid.usable_cols()` and `len = word length`:
//!
//! | axis | start rows | start cols | wraparound |
//! |---|---|---|---|
//! | horizontal | `0..rows` | `0..cols` | columns, modulo `cols` |
//! | vertical | `0..rows` | `0..cols` | rows, modulo `rows` |
//! | diagonal | `0..rows-len` | `0..cols-len` | none |
//!
//! The diagonal ranges are exclusive on both ends, so a diagonal never reaches the
//! last row nor the last usable column; no runtime bounds check is needed.
//!
//! Iteration order is deterministic per axis: horizontal and diagonal are row-major,
//! vertical is column-major.

use crate::grid::Grid;
use crate::orientation::Orientations;
use crate::record::{Axis, MatchRecord};

/// Cyclic index: `base + offset`, wrapped back to the start once it reaches `bound`.
///
/// Offsets larger than `bound` wrap as many times as needed.
///
/// ```
/// use wordgrid::scanner::wrap;
///
/// assert_eq!(wrap(1, 2, 5), 3);
/// assert_eq!(wrap(3, 2, 5), 0);
/// assert_eq!(wrap(4, 7, 5), 1);
/// ```
#[must_use]
pub fn wrap(base: usize, offset: usize, bound: usize) -> usize {
    let idx = base + offset;
    if idx >= bound { idx % bound } else { idx }
}

/// Row-major `(i, j)` pairs over `0..rows` × `0..cols`.
fn row_major(rows: usize, cols: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..rows).flat_map(move |i| (0..cols).map(move |j| (i, j)))
}

/// Horizontal runs, wrapping past the right edge of the usable columns.
pub fn scan_horizontal<'a>(
    grid: &'a Grid,
    pattern: &'a Orientations,
) -> impl Iterator<Item = MatchRecord> + 'a {
    let cols = grid.usable_cols();
    row_major(grid.rows(), cols)
        .filter(move |&(i, j)| pattern.matches_at(|k| grid.cell(i, wrap(j, k, cols))))
        .map(move |(i, j)| MatchRecord::new(pattern.word(), Axis::Horizontal, (i + 1, j + 1)))
}

/// Vertical runs, wrapping past the bottom edge. Records carry `(column, row)`.
pub fn scan_vertical<'a>(
    grid: &'a Grid,
    pattern: &'a Orientations,
) -> impl Iterator<Item = MatchRecord> + 'a {
    let rows = grid.rows();
    // column-major: swap the pair produced by row_major
    row_major(grid.usable_cols(), rows)
        .filter(move |&(j, i)| pattern.matches_at(|k| grid.cell(wrap(i, k, rows), j)))
        .map(move |(j, i)| MatchRecord::new(pattern.word(), Axis::Vertical, (j + 1, i + 1)))
}

/// Down-right diagonal runs. No wraparound.
pub fn scan_diagonal<'a>(
    grid: &'a Grid,
    pattern: &'a Orientations,
) -> impl Iterator<Item = MatchRecord> + 'a {
    let len = pattern.len();
    let rows = grid.rows().saturating_sub(len);
    let cols = grid.usable_cols().saturating_sub(len);
    row_major(rows, cols)
        .filter(move |&(i, j)| pattern.matches_at(|k| grid.cell(i + k, j + k)))
        .map(move |(i, j)| MatchRecord::new(pattern.word(), Axis::Diagonal, (i + 1, j + 1)))
}

/// Dispatch to the scanner for `axis`.
pub fn scan<'a>(
    axis: Axis,
    grid: &'a Grid,
    pattern: &'a Orientations,
) -> Box<dyn Iterator<Item = MatchRecord> + 'a> {
    match axis {
        Axis::Horizontal => Box::new(scan_horizontal(grid, pattern)),
        Axis::Vertical => Box::new(scan_vertical(grid, pattern)),
        Axis::Diagonal => Box::new(scan_diagonal(grid, pattern)),
    }
}
