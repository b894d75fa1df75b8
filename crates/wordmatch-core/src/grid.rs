//! The token grid.

use std::{
    fmt::{self, Display},
    ops::{Index, IndexMut},
    str::FromStr,
};

use crate::{Category, Dimensions, GridError, GridParseError, Position, Token};

/// A rectangular grid of cells, each holding a [`Token`] or nothing.
///
/// Cells are stored row-major as plain values. Moving a token means copying it
/// to another index; cells have no identity beyond their position.
///
/// Empty cells only exist while a resolve pass is in progress. Grids handed out
/// by the generator and by game sessions are always full.
///
/// # Text format
///
/// [`FromStr`] reads one character per cell, one row per line. Whitespace inside
/// a line is ignored, blank lines are skipped and `.` marks an empty cell. Every
/// other character becomes a token whose category and text are that character,
/// which keeps test fixtures short:
///
/// ```
/// use wordmatch_core::{Position, TokenGrid};
///
/// let grid: TokenGrid = "
///     AAB
///     BAA
///     AB.
/// "
/// .parse()
/// .unwrap();
///
/// assert_eq!(grid.dims().rows(), 3);
/// assert_eq!(grid.category_at(Position::new(0, 2)).map(|c| c.as_str()), Some("B"));
/// assert!(grid[Position::new(2, 2)].is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenGrid {
    dims: Dimensions,
    cells: Vec<Option<Token>>,
}

impl TokenGrid {
    /// Creates a grid with every cell empty.
    #[must_use]
    pub fn empty(dims: Dimensions) -> Self {
        Self {
            dims,
            cells: vec![None; dims.len()],
        }
    }

    /// Creates a full grid, calling `f` once per cell in row-major order.
    #[must_use]
    pub fn from_fn<F>(dims: Dimensions, mut f: F) -> Self
    where
        F: FnMut(Position) -> Token,
    {
        let cells = dims.positions().map(|pos| Some(f(pos))).collect();
        Self { dims, cells }
    }

    /// Returns the grid dimensions.
    #[must_use]
    #[inline]
    pub fn dims(&self) -> Dimensions {
        self.dims
    }

    /// Returns the token at `pos`, or `None` if the cell is empty or outside the grid.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<&Token> {
        if !self.dims.contains(pos) {
            return None;
        }
        self.cells[self.dims.index_of(pos)].as_ref()
    }

    /// Returns the category at `pos`, or `None` if the cell is empty or outside the grid.
    #[must_use]
    pub fn category_at(&self, pos: Position) -> Option<&Category> {
        self.get(pos).map(Token::category)
    }

    /// Stores `token` at `pos`, returning the previous content.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if `pos` is outside the grid.
    pub fn set(&mut self, pos: Position, token: Option<Token>) -> Result<Option<Token>, GridError> {
        self.dims.check(pos)?;
        let index = self.dims.index_of(pos);
        Ok(std::mem::replace(&mut self.cells[index], token))
    }

    /// Exchanges the contents of two cells.
    ///
    /// Both positions are checked before anything moves.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if either position is outside the grid.
    pub fn swap(&mut self, a: Position, b: Position) -> Result<(), GridError> {
        self.dims.check(a)?;
        self.dims.check(b)?;
        self.cells.swap(self.dims.index_of(a), self.dims.index_of(b));
        Ok(())
    }

    /// Returns `true` if every cell holds a token.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Returns the number of empty cells.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }

    /// Iterates over all cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Option<&Token>)> {
        let dims = self.dims;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (dims.position_of(i), cell.as_ref()))
    }

    /// Iterates over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<Token>]> {
        self.cells.chunks(self.dims.cols())
    }

    /// Iterates over one column, top to bottom.
    ///
    /// # Panics
    ///
    /// Panics if `col` is outside the grid.
    pub fn column(&self, col: usize) -> impl Iterator<Item = Option<&Token>> {
        assert!(col < self.dims.cols(), "column {col} is outside the {} grid", self.dims);
        self.cells
            .iter()
            .skip(col)
            .step_by(self.dims.cols())
            .map(Option::as_ref)
    }
}

impl Index<Position> for TokenGrid {
    type Output = Option<Token>;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.cells[self.dims.index_of(pos)]
    }
}

impl IndexMut<Position> for TokenGrid {
    fn index_mut(&mut self, pos: Position) -> &mut Self::Output {
        let index = self.dims.index_of(pos);
        &mut self.cells[index]
    }
}

impl FromStr for TokenGrid {
    type Err = GridParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<Vec<char>> = s
            .lines()
            .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
            .filter(|row| !row.is_empty())
            .collect();
        let expected = rows.first().ok_or(GridParseError::Empty)?.len();
        for (row, chars) in rows.iter().enumerate() {
            if chars.len() != expected {
                return Err(GridParseError::RaggedRow {
                    row,
                    found: chars.len(),
                    expected,
                });
            }
        }
        let dims = Dimensions::new(rows.len(), expected)?;
        let cells = rows
            .into_iter()
            .flatten()
            .map(|c| {
                (c != '.').then(|| {
                    let name = c.to_string();
                    Token::new(name.as_str(), name.as_str())
                })
            })
            .collect();
        Ok(Self { dims, cells })
    }
}

impl Display for TokenGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = f.width().unwrap_or(0);
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, cell) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                match cell {
                    Some(token) => write!(f, "{:<width$}", token.text())?,
                    None => write!(f, "{:<width$}", ".")?,
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(s: &str) -> TokenGrid {
        s.parse().expect("valid grid")
    }

    #[test]
    fn test_parse_reads_rows_and_empty_cells() {
        let g = grid(
            "
            ABC
            D.F
            GHI
            ",
        );
        assert_eq!(g.dims(), Dimensions::new(3, 3).unwrap());
        assert_eq!(g.get(Position::new(1, 0)).map(Token::text), Some("D"));
        assert!(g.get(Position::new(1, 1)).is_none());
        assert_eq!(g.empty_count(), 1);
        assert!(!g.is_full());
    }

    #[test]
    fn test_parse_rejects_ragged_and_small_grids() {
        assert_eq!("".parse::<TokenGrid>(), Err(GridParseError::Empty));
        assert_eq!(
            "ABC\nAB\nABC".parse::<TokenGrid>(),
            Err(GridParseError::RaggedRow {
                row: 1,
                found: 2,
                expected: 3,
            })
        );
        assert_eq!(
            "AB\nAB".parse::<TokenGrid>(),
            Err(GridParseError::Size(GridError::TooSmall { rows: 2, cols: 2 }))
        );
    }

    #[test]
    fn test_swap_checks_both_positions_first() {
        let mut g = grid("ABC\nDEF\nGHI");
        let before = g.clone();
        assert!(g.swap(Position::new(0, 0), Position::new(0, 3)).is_err());
        assert_eq!(g, before);

        g.swap(Position::new(0, 0), Position::new(2, 2)).unwrap();
        assert_eq!(g.get(Position::new(0, 0)).map(Token::text), Some("I"));
        assert_eq!(g.get(Position::new(2, 2)).map(Token::text), Some("A"));
    }

    #[test]
    fn test_column_and_rows_iterate_in_order() {
        let g = grid("ABC\nDEF\nGHI");
        let column: Vec<_> = g.column(1).map(|t| t.map(Token::text)).collect();
        assert_eq!(column, [Some("B"), Some("E"), Some("H")]);
        assert_eq!(g.rows().count(), 3);
        assert_eq!(g.iter().count(), 9);
    }

    #[test]
    fn test_display_uses_token_text() {
        let mut g = grid("ABC\nDEF\nGHI");
        g.set(Position::new(1, 1), None).unwrap();
        assert_eq!(g.to_string(), "A B C\nD . F\nG H I");
        assert_eq!(format!("{g:2}"), "A  B  C \nD  .  F \nG  H  I ");
    }
}
