use wordmatch_catalog::CatalogError;
use wordmatch_core::{Dimensions, GridError, Position};
use wordmatch_generator::{ConfigurationIssue, GenerateError};

/// Errors returned by [`Game`](crate::Game) operations.
///
/// Refused swaps are not errors; they are reported through
/// [`SwapOutcome`](crate::SwapOutcome).
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum GameError {
    /// A coordinate lies outside the board.
    #[display("position {pos} is outside the {dims} board")]
    OutOfBounds {
        /// Offending position.
        pos: Position,
        /// Board dimensions.
        dims: Dimensions,
    },
    /// A grid handed to the game has empty cells.
    #[display("board has {empty} empty cells")]
    IncompleteGrid {
        /// Number of empty cells.
        empty: usize,
    },
    /// Resolving runs did not reach a board without matches.
    #[display("board did not settle within {passes} cascade passes")]
    Unsettled {
        /// Number of passes attempted.
        passes: usize,
    },
    /// A category lookup or definition failed.
    #[display("catalog error: {_0}")]
    #[from]
    Catalog(CatalogError),
    /// The board could not be generated.
    #[display("generation failed: {_0}")]
    #[from]
    Generate(GenerateError),
}

impl From<GridError> for GameError {
    fn from(err: GridError) -> Self {
        match err {
            GridError::OutOfBounds { pos, dims } => Self::OutOfBounds { pos, dims },
            GridError::TooSmall { .. } => Self::Generate(GenerateError::InvalidConfiguration(
                ConfigurationIssue::Grid(err),
            )),
        }
    }
}
