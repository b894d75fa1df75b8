use rand::Rng;
use wordmatch_catalog::Palette;
use wordmatch_core::{Dimensions, Position, Token, TokenGrid, completes_run, find_matches, resolve};

use crate::{BoardSeed, ConfigurationIssue, GenerateError};

/// Draws tried per cell before falling back to the least recently used category.
pub const MAX_PLACEMENT_RETRIES: usize = 32;

/// Upper bound on cleanup passes after each greedy fill.
pub const MAX_CLEANUP_PASSES: usize = 1_000;

/// Greedy fills tried before giving up on a seed.
pub const MAX_FILL_ATTEMPTS: usize = 64;

/// Stream label for the initial fill and cleanup sweep.
const FILL_STREAM: &str = "fill";

/// A freshly generated board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedBoard {
    /// The full, match-free grid.
    pub grid: TokenGrid,
    /// The seed the board was generated from.
    pub seed: BoardSeed,
    /// Number of cells the cleanup sweep removed. These are not scored.
    pub cleanup_removed: usize,
}

/// Generates match-free boards from a palette.
#[derive(Debug, Clone, Copy)]
pub struct BoardGenerator<'a> {
    palette: &'a Palette,
    dims: Dimensions,
}

impl<'a> BoardGenerator<'a> {
    /// Creates a generator for `rows x cols` boards.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::InvalidConfiguration`] if the palette is empty
    /// or the grid is smaller than 3x3.
    pub fn new(palette: &'a Palette, rows: usize, cols: usize) -> Result<Self, GenerateError> {
        if palette.is_empty() {
            return Err(GenerateError::InvalidConfiguration(
                ConfigurationIssue::NoCategories,
            ));
        }
        let dims = Dimensions::new(rows, cols)
            .map_err(|e| GenerateError::InvalidConfiguration(ConfigurationIssue::Grid(e)))?;
        Ok(Self { palette, dims })
    }

    /// Returns the board dimensions.
    #[must_use]
    pub fn dims(&self) -> Dimensions {
        self.dims
    }

    /// Returns the palette tokens are drawn from.
    #[must_use]
    pub fn palette(&self) -> &'a Palette {
        self.palette
    }

    /// Generates a board from a fresh random seed.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::Unsettled`] if no match-free board was reached
    /// within [`MAX_CLEANUP_PASSES`].
    pub fn generate(&self) -> Result<GeneratedBoard, GenerateError> {
        self.generate_with_seed(BoardSeed::random())
    }

    /// Generates the board identified by `seed`.
    ///
    /// When the cleanup sweep after a greedy fill does not settle, the fill is
    /// restarted from a fresh stream derived from the same seed, up to
    /// [`MAX_FILL_ATTEMPTS`] times.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::Unsettled`] if no attempt reached a match-free
    /// board within [`MAX_CLEANUP_PASSES`].
    pub fn generate_with_seed(&self, seed: BoardSeed) -> Result<GeneratedBoard, GenerateError> {
        for attempt in 0..MAX_FILL_ATTEMPTS {
            let mut rng = if attempt == 0 {
                seed.rng(FILL_STREAM)
            } else {
                seed.rng(&format!("{FILL_STREAM}#{attempt}"))
            };
            let mut grid = self.fill_greedy(&mut rng);
            let Some(cleanup_removed) = self.sweep(&mut grid, &mut rng) else {
                log::debug!("fill attempt {attempt} for board {seed} did not settle");
                continue;
            };
            if cleanup_removed > 0 {
                log::debug!("cleanup removed {cleanup_removed} cells from board {seed}");
            }
            return Ok(GeneratedBoard {
                grid,
                seed,
                cleanup_removed,
            });
        }
        Err(GenerateError::Unsettled {
            passes: MAX_CLEANUP_PASSES,
        })
    }

    fn fill_greedy<R>(&self, rng: &mut R) -> TokenGrid
    where
        R: Rng + ?Sized,
    {
        let mut grid = TokenGrid::empty(self.dims);
        // Tick of the last placement per palette index; 0 means never used.
        let mut last_used = vec![0_usize; self.palette.len()];
        for (tick, pos) in self.dims.positions().enumerate() {
            let (index, token) = self.place(&grid, pos, &last_used, rng);
            last_used[index] = tick + 1;
            grid[pos] = Some(token);
        }
        grid
    }

    fn place<R>(
        &self,
        grid: &TokenGrid,
        pos: Position,
        last_used: &[usize],
        rng: &mut R,
    ) -> (usize, Token)
    where
        R: Rng + ?Sized,
    {
        for _ in 0..MAX_PLACEMENT_RETRIES {
            let index = rng.random_range(0..self.palette.len());
            let token = self.palette.draw_in(index, rng);
            if !completes_run(grid, pos, token.category()) {
                return (index, token);
            }
        }

        let safe = least_recently_used(
            last_used,
            self.palette
                .categories()
                .enumerate()
                .filter(|(_, category)| !completes_run(grid, pos, category))
                .map(|(index, _)| index),
        );
        let index = match safe {
            Some(index) => index,
            None => {
                log::debug!("every category completes a run at {pos}; placing one anyway");
                least_recently_used(last_used, 0..self.palette.len()).unwrap_or_default()
            }
        };
        log::debug!("placement retries exhausted at {pos}, using category #{index}");
        (index, self.palette.draw_in(index, rng))
    }

    fn sweep<R>(&self, grid: &mut TokenGrid, rng: &mut R) -> Option<usize>
    where
        R: Rng + ?Sized,
    {
        let mut removed = 0;
        for _ in 0..MAX_CLEANUP_PASSES {
            let matched = find_matches(grid);
            if matched.is_empty() {
                return Some(removed);
            }
            let report = resolve(grid, &matched, |_| self.palette.draw(rng));
            log::trace!("cleanup pass removed {} cells", report.removed());
            removed += report.removed();
        }
        find_matches(grid).is_empty().then_some(removed)
    }
}

fn least_recently_used<I>(last_used: &[usize], candidates: I) -> Option<usize>
where
    I: Iterator<Item = usize>,
{
    candidates.min_by_key(|&index| last_used[index])
}
