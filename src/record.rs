//! Match records: one reported occurrence of a word in the grid.

use std::fmt;

/// One of the three fixed scanning directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    Horizontal,
    Vertical,
    Diagonal,
}

impl Axis {
    /// Every axis family, in scan-launch order.
    pub const ALL: [Axis; 3] = [Axis::Horizontal, Axis::Vertical, Axis::Diagonal];

    /// Stable index into per-axis arrays.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Axis::Horizontal => 0,
            Axis::Vertical => 1,
            Axis::Diagonal => 2,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Axis::Horizontal => "horizontal",
            Axis::Vertical => "vertical",
            Axis::Diagonal => "diagonal",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single find. Whether the forward or the mirror spelling matched is not recorded.
///
/// `position` is 1-based and its meaning depends on the axis:
/// - `Horizontal`: `(row, column)`
/// - `Vertical`: `(column, row)`, i.e. the line first, then the start within it
/// - `Diagonal`: `(row, column)`
///
/// Use [`MatchRecord::origin`] for a uniform `(row, column)` view.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MatchRecord {
    pub word: String,
    pub axis: Axis,
    pub position: (usize, usize),
}

impl MatchRecord {
    #[must_use]
    pub fn new(word: impl Into<String>, axis: Axis, position: (usize, usize)) -> MatchRecord {
        MatchRecord { word: word.into(), axis, position }
    }

    /// 1-based `(row, column)` of the first cell, whatever the axis.
    #[must_use]
    pub fn origin(&self) -> (usize, usize) {
        match self.axis {
            Axis::Vertical => (self.position.1, self.position.0),
            Axis::Horizontal | Axis::Diagonal => self.position,
        }
    }
}

impl fmt::Display for MatchRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (a, b) = self.position;
        match self.axis {
            Axis::Horizontal => write!(
                f,
                "Word '{}' found in row {a}, starting at column {b} (horizontal)",
                self.word
            ),
            Axis::Vertical => write!(
                f,
                "Word '{}' found in column {a}, starting at row {b} (vertical)",
                self.word
            ),
            Axis::Diagonal => write!(
                f,
                "Word '{}' found on the diagonal, starting at row {a}, column {b}",
                self.word
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_indices_are_distinct() {
        let indices: Vec<usize> = Axis::ALL.iter().map(|a| a.index()).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_horizontal_display() {
        let record = MatchRecord::new("CAT", Axis::Horizontal, (2, 3));
        assert_eq!(record.to_string(), "Word 'CAT' found in row 2, starting at column 3 (horizontal)");
    }

    #[test]
    fn test_vertical_display_uses_column_first() {
        let record = MatchRecord::new("DOG", Axis::Vertical, (4, 1));
        assert_eq!(record.to_string(), "Word 'DOG' found in column 4, starting at row 1 (vertical)");
        assert_eq!(record.origin(), (1, 4));
    }

    #[test]
    fn test_diagonal_display() {
        let record = MatchRecord::new("OX", Axis::Diagonal, (1, 1));
        assert_eq!(record.to_string(), "Word 'OX' found on the diagonal, starting at row 1, column 1");
        assert_eq!(record.origin(), (1, 1));
    }
}
