use wordmatch_core::{Dimensions, Position, Token, TokenGrid};

/// A read-only copy of a settled board, for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSnapshot {
    dims: Dimensions,
    cells: Vec<Token>,
    score: usize,
}

impl BoardSnapshot {
    pub(crate) fn new(grid: &TokenGrid, score: usize) -> Self {
        debug_assert!(grid.is_full(), "snapshots are only taken of settled boards");
        let cells = grid.iter().filter_map(|(_, token)| token.cloned()).collect();
        Self {
            dims: grid.dims(),
            cells,
            score,
        }
    }

    /// Board dimensions.
    #[must_use]
    pub fn dims(&self) -> Dimensions {
        self.dims
    }

    /// Score at the time of the snapshot.
    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    /// All cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[Token] {
        &self.cells
    }

    /// Returns the token at `pos`, or `None` if `pos` is outside the board.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<&Token> {
        self.dims
            .contains(pos)
            .then(|| &self.cells[self.dims.index_of(pos)])
    }

    /// Iterates over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Token]> {
        self.cells.chunks(self.dims.cols())
    }
}
