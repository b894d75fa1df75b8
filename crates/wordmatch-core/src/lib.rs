//! Core data structures for the wordmatch puzzle engine.
//!
//! This crate provides the value types shared by catalog, generation and game
//! crates, together with the structural algorithms that only depend on the grid
//! itself.
//!
//! # Overview
//!
//! 1. **Coordinates** - [`position`]: [`Position`] (row, column) and the grid
//!    [`Dimensions`].
//! 2. **Tokens** - [`token`]: [`Category`] names and the [`Token`] values that
//!    occupy cells.
//! 3. **Grid** - [`grid`]: [`TokenGrid`], a row-major arena of cells.
//! 4. **Algorithms** - [`matching`] finds runs of three or more same-category
//!    tokens, [`cascade`] removes them, collapses columns and refills the gaps.
//!
//! # Examples
//!
//! ```
//! use wordmatch_core::{Position, TokenGrid, find_matches};
//!
//! let grid: TokenGrid = "
//!     AAA
//!     BCB
//!     CBC
//! "
//! .parse()
//! .unwrap();
//!
//! let matches = find_matches(&grid);
//! assert_eq!(matches.len(), 3);
//! assert!(matches.contains(&Position::new(0, 1)));
//! ```

pub mod cascade;
pub mod error;
pub mod grid;
pub mod matching;
pub mod position;
pub mod token;

pub use self::{
    cascade::{ResolveReport, resolve},
    error::{GridError, GridParseError},
    grid::TokenGrid,
    matching::{MatchSet, completes_run, find_matches},
    position::{Dimensions, MIN_SIDE, Position},
    token::{Category, Token},
};
