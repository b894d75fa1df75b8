//! Grid coordinates and dimensions.

use std::fmt::{self, Display};

use crate::GridError;

/// Smallest number of rows or columns for which a run of three fits.
pub const MIN_SIDE: usize = 3;

/// A cell coordinate, zero-based from the top-left corner.
///
/// Positions order row-major, so a sorted collection of positions iterates the
/// grid top to bottom, left to right.
///
/// # Examples
///
/// ```
/// use wordmatch_core::Position;
///
/// let a = Position::new(2, 3);
/// assert!(a.is_adjacent(Position::new(2, 4)));
/// assert!(a.is_adjacent(Position::new(1, 3)));
/// assert!(!a.is_adjacent(Position::new(3, 4)));
/// assert!(!a.is_adjacent(a));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// Row index.
    pub row: usize,
    /// Column index.
    pub col: usize,
}

impl Position {
    /// Creates a position from a row and column.
    #[must_use]
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the Manhattan distance between two positions.
    #[must_use]
    #[inline]
    pub fn manhattan_distance(self, other: Self) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Returns `true` if the positions share an edge (four-directional adjacency).
    #[must_use]
    #[inline]
    pub fn is_adjacent(self, other: Self) -> bool {
        self.manhattan_distance(other) == 1
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Size of a grid, at least [`MIN_SIDE`] in both directions.
///
/// # Examples
///
/// ```
/// use wordmatch_core::{Dimensions, GridError};
///
/// let dims = Dimensions::new(8, 6).unwrap();
/// assert_eq!(dims.len(), 48);
/// assert_eq!(
///     Dimensions::new(2, 8),
///     Err(GridError::TooSmall { rows: 2, cols: 8 })
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    rows: usize,
    cols: usize,
}

impl Dimensions {
    /// Creates grid dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::TooSmall`] if either side is shorter than [`MIN_SIDE`].
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        if rows < MIN_SIDE || cols < MIN_SIDE {
            return Err(GridError::TooSmall { rows, cols });
        }
        Ok(Self { rows, cols })
    }

    /// Number of rows.
    #[must_use]
    #[inline]
    pub const fn rows(self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    #[inline]
    pub const fn cols(self) -> usize {
        self.cols
    }

    /// Total number of cells.
    #[must_use]
    #[inline]
    pub const fn len(self) -> usize {
        self.rows * self.cols
    }

    /// Always `false`: valid dimensions hold at least nine cells.
    #[must_use]
    #[inline]
    pub const fn is_empty(self) -> bool {
        false
    }

    /// Returns `true` if `pos` lies inside the grid.
    #[must_use]
    #[inline]
    pub const fn contains(self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Checks that `pos` lies inside the grid.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] otherwise.
    pub fn check(self, pos: Position) -> Result<(), GridError> {
        if self.contains(pos) {
            Ok(())
        } else {
            Err(GridError::OutOfBounds { pos, dims: self })
        }
    }

    /// Converts a position to its row-major index.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the grid.
    #[must_use]
    #[inline]
    pub fn index_of(self, pos: Position) -> usize {
        assert!(self.contains(pos), "position {pos} is outside the {self} grid");
        pos.row * self.cols + pos.col
    }

    /// Converts a row-major index back to a position.
    #[must_use]
    #[inline]
    pub const fn position_of(self, index: usize) -> Position {
        Position::new(index / self.cols, index % self.cols)
    }

    /// Iterates over all positions in row-major order.
    pub fn positions(self) -> impl DoubleEndedIterator<Item = Position> + ExactSizeIterator {
        (0..self.len()).map(move |i| self.position_of(i))
    }
}

impl Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjacency_is_four_directional() {
        let center = Position::new(1, 1);
        for other in [
            Position::new(0, 1),
            Position::new(2, 1),
            Position::new(1, 0),
            Position::new(1, 2),
        ] {
            assert!(center.is_adjacent(other));
            assert!(other.is_adjacent(center));
        }
        for other in [
            Position::new(0, 0),
            Position::new(2, 2),
            Position::new(1, 3),
            Position::new(1, 1),
        ] {
            assert!(!center.is_adjacent(other));
        }
    }

    #[test]
    fn test_positions_are_row_major() {
        let dims = Dimensions::new(3, 4).unwrap();
        let positions: Vec<_> = dims.positions().collect();
        assert_eq!(positions.len(), 12);
        assert_eq!(positions[0], Position::new(0, 0));
        assert_eq!(positions[3], Position::new(0, 3));
        assert_eq!(positions[4], Position::new(1, 0));
        for (i, pos) in positions.into_iter().enumerate() {
            assert_eq!(dims.index_of(pos), i);
        }
    }

    #[test]
    fn test_check_reports_out_of_bounds() {
        let dims = Dimensions::new(3, 3).unwrap();
        assert!(dims.check(Position::new(2, 2)).is_ok());
        assert_eq!(
            dims.check(Position::new(3, 0)),
            Err(GridError::OutOfBounds {
                pos: Position::new(3, 0),
                dims,
            })
        );
    }

    #[test]
    fn test_too_small_dimensions_rejected() {
        assert!(Dimensions::new(3, 3).is_ok());
        assert!(matches!(
            Dimensions::new(3, 2),
            Err(GridError::TooSmall { rows: 3, cols: 2 })
        ));
        assert!(matches!(
            Dimensions::new(0, 0),
            Err(GridError::TooSmall { .. })
        ));
    }
}
