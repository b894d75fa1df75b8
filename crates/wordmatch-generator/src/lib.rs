//! Reproducible generation of match-free boards.
//!
//! [`BoardGenerator`] fills a grid from a [`Palette`] in row-major order,
//! redrawing any token that would complete a run with the cells already placed
//! to its left or above it. A bounded cleanup sweep then removes whatever runs
//! remain, so every generated board starts without matches.
//!
//! Every board is tied to a [`BoardSeed`]; generating again with the same seed,
//! palette and dimensions yields the same board.
//!
//! # Examples
//!
//! ```
//! use wordmatch_catalog::TokenCatalog;
//! use wordmatch_core::find_matches;
//! use wordmatch_generator::BoardGenerator;
//!
//! let catalog = TokenCatalog::builtin();
//! let palette = catalog
//!     .palette(["fruit", "animal", "color", "tool", "sport"])
//!     .unwrap();
//! let generator = BoardGenerator::new(&palette, 8, 8).unwrap();
//!
//! let board = generator.generate().unwrap();
//! assert!(board.grid.is_full());
//! assert!(find_matches(&board.grid).is_empty());
//!
//! let again = generator.generate_with_seed(board.seed).unwrap();
//! assert_eq!(again.grid, board.grid);
//! ```
//!
//! [`Palette`]: wordmatch_catalog::Palette

pub use self::{
    error::{ConfigurationIssue, GenerateError},
    generator::{
        BoardGenerator, GeneratedBoard, MAX_CLEANUP_PASSES, MAX_FILL_ATTEMPTS, MAX_PLACEMENT_RETRIES,
    },
    seed::{BoardSeed, SeedParseError},
};

mod error;
mod generator;
mod seed;
