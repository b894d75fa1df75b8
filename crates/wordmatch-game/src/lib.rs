//! Board engine for the wordmatch puzzle.
//!
//! A [`Game`] owns one session: the settled grid, the score, the category
//! palette and the random stream used for refills. Callers issue swaps with
//! [`Game::attempt_swap`] and render what [`Game::snapshot`] returns; no
//! intermediate cascade state is ever visible between calls.
//!
//! # Examples
//!
//! ```
//! use wordmatch_catalog::TokenCatalog;
//! use wordmatch_core::Position;
//! use wordmatch_game::{GameConfig, SwapRejection};
//!
//! let mut catalog = TokenCatalog::builtin();
//! let mut game = GameConfig::default().start(&mut catalog).unwrap();
//! assert_eq!(game.score(), 0);
//!
//! // Diagonal swaps are refused without touching the board.
//! let before = game.snapshot();
//! let outcome = game
//!     .attempt_swap(Position::new(0, 0), Position::new(1, 1))
//!     .unwrap();
//! assert!(!outcome.accepted);
//! assert_eq!(outcome.rejection, Some(SwapRejection::NotAdjacent));
//! assert_eq!(game.snapshot(), before);
//! ```

pub use self::{
    config::{CategoryDefinition, CategorySelection, DEFAULT_CATEGORY_COUNT, GameConfig},
    error::GameError,
    game::{Game, MAX_CASCADE_PASSES},
    outcome::{SwapOutcome, SwapRejection},
    snapshot::BoardSnapshot,
};

mod config;
mod error;
mod game;
mod outcome;
mod snapshot;
