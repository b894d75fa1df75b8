//! Token catalog for the wordmatch puzzle engine.
//!
//! The catalog maps category names to the words that can appear on the board
//! and draws random tokens from them. Sessions do not read the catalog while
//! they run: they capture a [`Palette`], an immutable table of the selected
//! categories that was validated once, up front.
//!
//! # Examples
//!
//! ```
//! use rand::SeedableRng as _;
//! use rand_pcg::Pcg64;
//! use wordmatch_catalog::TokenCatalog;
//!
//! let mut catalog = TokenCatalog::builtin();
//! catalog.define("Planet", ["Mars", " venus ", ""]).unwrap();
//! assert_eq!(catalog.tokens_for("planet").unwrap().len(), 2);
//!
//! let mut rng = Pcg64::seed_from_u64(7);
//! let palette = catalog.palette(["planet", "fruit"]).unwrap();
//! let token = palette.draw(&mut rng);
//! assert!(["planet", "fruit"].contains(&token.category().as_str()));
//! ```

pub use self::{catalog::TokenCatalog, error::CatalogError, palette::Palette};

mod builtin;
mod catalog;
mod error;
mod palette;
