use rand_pcg::Pcg64;
use wordmatch_catalog::{CatalogError, Palette, TokenCatalog};
use wordmatch_core::{
    Category, Dimensions, MatchSet, Position, ResolveReport, TokenGrid, find_matches, resolve,
};
use wordmatch_generator::{BoardGenerator, BoardSeed, GeneratedBoard};

use crate::{BoardSnapshot, GameError, SwapOutcome, SwapRejection};

/// Stream label for tokens drawn while the game is played.
const REFILL_STREAM: &str = "refill";

/// Upper bound on resolve passes in one cascade.
pub const MAX_CASCADE_PASSES: usize = 1_000;

/// A match-three session.
///
/// The game owns the board exclusively. Every public operation runs to
/// completion before returning, so callers only ever observe settled boards.
/// The score starts at zero and never decreases.
///
/// Refills are drawn from a stream derived from the board seed: two games built
/// from the same seed and fed the same swaps evolve identically.
///
/// # Example
///
/// ```
/// use wordmatch_catalog::TokenCatalog;
/// use wordmatch_core::find_matches;
/// use wordmatch_game::Game;
///
/// let catalog = TokenCatalog::builtin();
/// let game = Game::new(&catalog, ["fruit", "meat", "fish", "drink", "color"], 8, 8).unwrap();
///
/// assert_eq!(game.score(), 0);
/// assert!(find_matches(game.grid()).is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    grid: TokenGrid,
    score: usize,
    palette: Palette,
    seed: BoardSeed,
    rng: Pcg64,
}

impl Game {
    /// Creates a session with a freshly generated board.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Catalog`] if a category is not in the catalog, and
    /// [`GameError::Generate`] if the categories or dimensions cannot produce a
    /// board.
    pub fn new<I, S>(
        catalog: &TokenCatalog,
        categories: I,
        rows: usize,
        cols: usize,
    ) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_seed(catalog, categories, rows, cols, BoardSeed::random())
    }

    /// Creates the session identified by `seed`.
    ///
    /// # Errors
    ///
    /// Same as [`Game::new`].
    pub fn with_seed<I, S>(
        catalog: &TokenCatalog,
        categories: I,
        rows: usize,
        cols: usize,
        seed: BoardSeed,
    ) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let palette = catalog.palette(categories)?;
        let board = BoardGenerator::new(&palette, rows, cols)?.generate_with_seed(seed)?;
        Ok(Self::from_generated(board, palette))
    }

    /// Creates a session from a board generated with `palette`.
    ///
    /// Cells removed while the generator cleaned up the board are not scored.
    #[must_use]
    pub fn from_generated(board: GeneratedBoard, palette: Palette) -> Self {
        let GeneratedBoard {
            grid,
            seed,
            cleanup_removed: _,
        } = board;
        log::debug!(
            "new {} game with {} categories, seed {seed}",
            grid.dims(),
            palette.len()
        );
        Self {
            grid,
            score: 0,
            palette,
            rng: seed.rng(REFILL_STREAM),
            seed,
        }
    }

    /// Creates a session from an existing grid.
    ///
    /// Useful for replaying a known position. Runs already on the grid are
    /// resolved with refills from `palette` before the session starts; they
    /// are not scored.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::IncompleteGrid`] if a cell is empty,
    /// [`GameError::Catalog`] if a token's category is not in `palette`, and
    /// [`GameError::Unsettled`] if the existing runs keep cascading past
    /// [`MAX_CASCADE_PASSES`] (a single-category palette never settles).
    pub fn from_grid(grid: TokenGrid, palette: Palette, seed: BoardSeed) -> Result<Self, GameError> {
        let empty = grid.empty_count();
        if empty > 0 {
            return Err(GameError::IncompleteGrid { empty });
        }
        if let Some(category) = grid
            .iter()
            .filter_map(|(_, token)| token.map(|t| t.category()))
            .find(|category| palette.index_of(category).is_none())
        {
            return Err(CatalogError::UnknownCategory {
                name: category.to_string(),
            }
            .into());
        }
        let mut game = Self {
            grid,
            score: 0,
            palette,
            rng: seed.rng(REFILL_STREAM),
            seed,
        };
        let matched = game.find_matches();
        if !matched.is_empty() {
            let passes = game.cascade(matched)?;
            game.score = 0;
            log::debug!("settled initial grid in {} passes", passes.len());
        }
        Ok(game)
    }

    /// Returns the current board.
    #[must_use]
    pub fn grid(&self) -> &TokenGrid {
        &self.grid
    }

    /// Returns the board dimensions.
    #[must_use]
    pub fn dims(&self) -> Dimensions {
        self.grid.dims()
    }

    /// Returns the current score.
    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    /// Returns the seed the session was created from.
    #[must_use]
    pub fn seed(&self) -> BoardSeed {
        self.seed
    }

    /// Returns the palette refills are drawn from.
    #[must_use]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Iterates over the categories in play.
    pub fn categories(&self) -> impl ExactSizeIterator<Item = &Category> {
        self.palette.categories()
    }

    /// Returns a copy of the board and score for rendering.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::new(&self.grid, self.score)
    }

    /// Finds every cell that is part of a run on the current board.
    #[must_use]
    pub fn find_matches(&self) -> MatchSet {
        find_matches(&self.grid)
    }

    /// Removes `matched`, collapses the columns and refills them, adding the
    /// number of removed cells to the score.
    ///
    /// This runs a single pass; runs formed by the refill are left in place.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfBounds`] if any position is outside the board.
    /// Nothing is changed in that case.
    pub fn resolve(&mut self, matched: &MatchSet) -> Result<ResolveReport, GameError> {
        let dims = self.grid.dims();
        for &pos in matched {
            dims.check(pos)?;
        }
        Ok(self.resolve_pass(matched))
    }

    /// Swaps two cells if that forms at least one run, then resolves the whole
    /// cascade.
    ///
    /// A swap of non-adjacent cells, or one that forms no run, is refused and
    /// leaves the board exactly as it was.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfBounds`] if either position is outside the
    /// board, and [`GameError::Unsettled`] if the cascade runs past
    /// [`MAX_CASCADE_PASSES`]. Nothing is changed in either case.
    pub fn attempt_swap(&mut self, a: Position, b: Position) -> Result<SwapOutcome, GameError> {
        let dims = self.grid.dims();
        dims.check(a)?;
        dims.check(b)?;

        if !a.is_adjacent(b) {
            log::trace!("refused swap {a} <-> {b}: not adjacent");
            return Ok(SwapOutcome::rejected(SwapRejection::NotAdjacent));
        }

        self.grid.swap(a, b)?;
        let matched = find_matches(&self.grid);
        if matched.is_empty() {
            self.grid.swap(a, b)?;
            log::trace!("refused swap {a} <-> {b}: no match");
            return Ok(SwapOutcome::rejected(SwapRejection::NoMatch));
        }

        let checkpoint = (self.grid.clone(), self.score, self.rng.clone());
        let cascades = match self.cascade(matched) {
            Ok(cascades) => cascades,
            Err(e) => {
                (self.grid, self.score, self.rng) = checkpoint;
                self.grid.swap(a, b)?;
                log::warn!("rolled back swap {a} <-> {b}: {e}");
                return Err(e);
            }
        };
        let outcome = SwapOutcome::accepted(cascades);
        log::debug!(
            "swap {a} <-> {b} removed {} cells in {} passes, score {}",
            outcome.total_removed,
            outcome.passes(),
            self.score
        );
        Ok(outcome)
    }

    fn cascade(&mut self, mut matched: MatchSet) -> Result<Vec<MatchSet>, GameError> {
        let mut passes = Vec::new();
        while !matched.is_empty() {
            if passes.len() == MAX_CASCADE_PASSES {
                return Err(GameError::Unsettled {
                    passes: MAX_CASCADE_PASSES,
                });
            }
            self.resolve_pass(&matched);
            passes.push(matched);
            matched = find_matches(&self.grid);
        }
        Ok(passes)
    }

    fn resolve_pass(&mut self, matched: &MatchSet) -> ResolveReport {
        let Self {
            grid, palette, rng, ..
        } = self;
        let report = resolve(grid, matched, |_| palette.draw(rng));
        self.score += report.removed();
        log::trace!(
            "resolved {} cells, refilled {}",
            report.removed(),
            report.refilled().len()
        );
        report
    }
}
