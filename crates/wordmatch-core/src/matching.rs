//! Detection of same-category runs.

use std::collections::BTreeSet;

use crate::{Category, Position, TokenGrid};

/// Positions belonging to at least one run, ordered row-major.
pub type MatchSet = BTreeSet<Position>;

/// Length of the window scanned for runs.
const RUN: usize = 3;

/// Finds every cell that is part of a horizontal or vertical run of three or
/// more same-category tokens.
///
/// Each window of three consecutive cells is tested independently and the hits
/// are unioned, so a run of four or five is reported in full and a cell at the
/// crossing of a horizontal and a vertical run appears once. Empty cells never
/// match.
///
/// # Examples
///
/// ```
/// use wordmatch_core::{Position, TokenGrid, find_matches};
///
/// let grid: TokenGrid = "
///     ABAB
///     AAAA
///     ABCB
/// "
/// .parse()
/// .unwrap();
///
/// let matches = find_matches(&grid);
/// // Row 1 plus column 0, sharing (1, 0).
/// assert_eq!(matches.len(), 6);
/// assert!(matches.contains(&Position::new(2, 0)));
/// ```
#[must_use]
pub fn find_matches(grid: &TokenGrid) -> MatchSet {
    let dims = grid.dims();
    let mut matched = MatchSet::new();

    for row in 0..dims.rows() {
        for col in 0..=dims.cols() - RUN {
            let window = [0, 1, 2].map(|i| Position::new(row, col + i));
            if same_category(grid, &window) {
                matched.extend(window);
            }
        }
    }

    for col in 0..dims.cols() {
        for row in 0..=dims.rows() - RUN {
            let window = [0, 1, 2].map(|i| Position::new(row + i, col));
            if same_category(grid, &window) {
                matched.extend(window);
            }
        }
    }

    matched
}

fn same_category(grid: &TokenGrid, window: &[Position; RUN]) -> bool {
    let Some(first) = grid.category_at(window[0]) else {
        return false;
    };
    window[1..]
        .iter()
        .all(|&pos| grid.category_at(pos) == Some(first))
}

/// Returns `true` if placing `category` at `pos` would complete a run with the
/// two cells to its left or the two cells above it.
///
/// Only those four neighbors are consulted, which is exactly the set already
/// placed when a grid is filled in row-major order.
#[must_use]
pub fn completes_run(grid: &TokenGrid, pos: Position, category: &Category) -> bool {
    let same = |p: Position| grid.category_at(p) == Some(category);
    let horizontal = pos.col >= 2
        && same(Position::new(pos.row, pos.col - 1))
        && same(Position::new(pos.row, pos.col - 2));
    let vertical = pos.row >= 2
        && same(Position::new(pos.row - 1, pos.col))
        && same(Position::new(pos.row - 2, pos.col));
    horizontal || vertical
}
