//! Remove, collapse and refill.
//!
//! A resolve pass clears the matched cells, lets the surviving tokens of each
//! column fall to the bottom in their original order and fills the vacated top
//! cells from a caller-supplied source. The source decides where new tokens
//! come from; this module never checks whether they form new runs.

use crate::{MatchSet, Position, Token, TokenGrid};

/// What a single [`resolve`] pass changed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResolveReport {
    removed_per_column: Vec<usize>,
    refilled: Vec<Position>,
}

impl ResolveReport {
    /// Total number of cells cleared.
    #[must_use]
    pub fn removed(&self) -> usize {
        self.removed_per_column.iter().sum()
    }

    /// Number of cells cleared in each column, indexed by column.
    #[must_use]
    pub fn removed_per_column(&self) -> &[usize] {
        &self.removed_per_column
    }

    /// Positions that received a new token, column by column, top to bottom.
    #[must_use]
    pub fn refilled(&self) -> &[Position] {
        &self.refilled
    }
}

impl TokenGrid {
    /// Clears every cell in `matched` and returns the per-column counts of
    /// cells that actually held a token.
    ///
    /// # Panics
    ///
    /// Panics if a position in `matched` is outside the grid.
    pub fn clear_cells(&mut self, matched: &MatchSet) -> Vec<usize> {
        let mut per_column = vec![0; self.dims().cols()];
        for &pos in matched {
            if self[pos].take().is_some() {
                per_column[pos.col] += 1;
            }
        }
        per_column
    }

    /// Moves the tokens of every column down over the empty cells below them,
    /// keeping their top-to-bottom order.
    ///
    /// Returns the cells left empty, which are always at the top of their
    /// column, listed column by column from the top.
    pub fn collapse(&mut self) -> Vec<Position> {
        let dims = self.dims();
        let mut vacated = Vec::new();
        for col in 0..dims.cols() {
            let survivors: Vec<Token> = (0..dims.rows())
                .filter_map(|row| self[Position::new(row, col)].take())
                .collect();
            let gap = dims.rows() - survivors.len();
            for (row, token) in (gap..dims.rows()).zip(survivors) {
                self[Position::new(row, col)] = Some(token);
            }
            vacated.extend((0..gap).map(|row| Position::new(row, col)));
        }
        vacated
    }
}

/// Runs one remove-collapse-refill pass.
///
/// Every matched cell is cleared, each column is collapsed, and each vacated
/// cell is filled by calling `refill` with its position. New tokens may form
/// new runs; detecting them is left to the caller.
///
/// # Panics
///
/// Panics if a position in `matched` is outside the grid.
///
/// # Examples
///
/// ```
/// use wordmatch_core::{Position, Token, TokenGrid, find_matches, resolve};
///
/// let mut grid: TokenGrid = "
///     ABC
///     AAA
///     CBD
/// "
/// .parse()
/// .unwrap();
///
/// let matched = find_matches(&grid);
/// let report = resolve(&mut grid, &matched, |_| Token::new("X", "x"));
///
/// assert_eq!(report.removed(), 3);
/// // Row 0 fell into row 1; row 0 was refilled.
/// assert_eq!(grid.to_string(), "x x x\nA B C\nC B D");
/// ```
pub fn resolve<F>(grid: &mut TokenGrid, matched: &MatchSet, mut refill: F) -> ResolveReport
where
    F: FnMut(Position) -> Token,
{
    let removed_per_column = grid.clear_cells(matched);
    let refilled = grid.collapse();
    for &pos in &refilled {
        grid[pos] = Some(refill(pos));
    }
    ResolveReport {
        removed_per_column,
        refilled,
    }
}
