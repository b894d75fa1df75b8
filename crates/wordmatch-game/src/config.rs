use wordmatch_catalog::TokenCatalog;
use wordmatch_core::Category;
use wordmatch_generator::BoardSeed;

use crate::{Game, GameError};

/// Number of categories picked when none are named.
pub const DEFAULT_CATEGORY_COUNT: usize = 5;

/// Stream label for picking random categories.
const CATEGORY_STREAM: &str = "categories";

/// Which categories a session plays with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategorySelection {
    /// Distinct categories drawn at random from the catalog.
    Random {
        /// Number of categories to draw.
        count: usize,
    },
    /// Categories named by the player.
    Named(Vec<String>),
}

impl Default for CategorySelection {
    fn default() -> Self {
        Self::Random {
            count: DEFAULT_CATEGORY_COUNT,
        }
    }
}

/// A custom category to add to the catalog before a session starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryDefinition {
    /// Category name.
    pub name: String,
    /// Words of the category.
    pub words: Vec<String>,
}

/// Session options supplied by the presentation layer.
///
/// # Example
///
/// ```
/// use wordmatch_catalog::TokenCatalog;
/// use wordmatch_game::{CategorySelection, GameConfig};
///
/// let mut catalog = TokenCatalog::builtin();
/// let game = GameConfig::default()
///     .size(6, 7)
///     .define("planet", ["mars", "venus", "saturn"])
///     .categories(CategorySelection::Named(vec![
///         "planet".into(),
///         "fruit".into(),
///         "tool".into(),
///     ]))
///     .start(&mut catalog)
///     .unwrap();
///
/// assert_eq!(game.dims().rows(), 6);
/// assert_eq!(game.categories().len(), 3);
/// assert!(catalog.contains("planet"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Number of rows.
    pub rows: usize,
    /// Number of columns.
    pub cols: usize,
    /// Categories in play.
    pub categories: CategorySelection,
    /// Custom categories defined before the selection is resolved.
    pub overrides: Vec<CategoryDefinition>,
    /// Seed to replay; a random seed is used if `None`.
    pub seed: Option<BoardSeed>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: 8,
            cols: 8,
            categories: CategorySelection::default(),
            overrides: Vec::new(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Sets the board size.
    #[must_use]
    pub fn size(mut self, rows: usize, cols: usize) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    /// Sets the category selection.
    #[must_use]
    pub fn categories(mut self, categories: CategorySelection) -> Self {
        self.categories = categories;
        self
    }

    /// Adds a custom category definition.
    #[must_use]
    pub fn define<I, S>(mut self, name: &str, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.overrides.push(CategoryDefinition {
            name: name.to_owned(),
            words: words.into_iter().map(Into::into).collect(),
        });
        self
    }

    /// Sets the seed.
    #[must_use]
    pub fn seed(mut self, seed: BoardSeed) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Applies the overrides to `catalog` and starts a session.
    ///
    /// The catalog is only updated if the session starts.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Catalog`] if an override is empty, a named category
    /// is unknown or too many random categories are requested, and
    /// [`GameError::Generate`] if no board can be generated.
    pub fn start(&self, catalog: &mut TokenCatalog) -> Result<Game, GameError> {
        let mut updated = catalog.clone();
        for definition in &self.overrides {
            updated.define(&definition.name, &definition.words)?;
        }

        let seed = self.seed.unwrap_or_else(BoardSeed::random);
        let names: Vec<Category> = match &self.categories {
            CategorySelection::Random { count } => {
                updated.sample_categories(*count, &mut seed.rng(CATEGORY_STREAM))?
            }
            CategorySelection::Named(names) => {
                names.iter().map(|name| Category::from(name.as_str())).collect()
            }
        };

        let game = Game::with_seed(&updated, &names, self.rows, self.cols, seed)?;
        *catalog = updated;
        Ok(game)
    }
}

#[cfg(test)]
mod tests {
    use wordmatch_catalog::CatalogError;
    use wordmatch_core::find_matches;

    use super::*;

    fn seed(byte: u8) -> BoardSeed {
        BoardSeed::from_bytes([byte; 32])
    }

    #[test]
    fn test_default_config_starts_eight_by_eight_with_five_categories() {
        let mut catalog = TokenCatalog::builtin();
        let game = GameConfig::default().start(&mut catalog).unwrap();
        assert_eq!(game.dims().rows(), 8);
        assert_eq!(game.dims().cols(), 8);
        assert_eq!(game.categories().len(), DEFAULT_CATEGORY_COUNT);
        assert!(find_matches(game.grid()).is_empty());
        assert_eq!(catalog, TokenCatalog::builtin());
    }

    #[test]
    fn test_seeded_config_is_reproducible() {
        let config = GameConfig::default().seed(seed(5));
        let a = config.start(&mut TokenCatalog::builtin()).unwrap();
        let b = config.start(&mut TokenCatalog::builtin()).unwrap();
        assert_eq!(a.snapshot(), b.snapshot());
        assert!(a.categories().eq(b.categories()));
    }

    #[test]
    fn test_overrides_are_committed_on_success() {
        let mut catalog = TokenCatalog::builtin();
        let game = GameConfig::default()
            .define("Planet", ["Mars", "Venus"])
            .define("fruit", ["durian"])
            .categories(CategorySelection::Named(vec![
                "planet".into(),
                "fruit".into(),
                "color".into(),
            ]))
            .seed(seed(1))
            .start(&mut catalog)
            .unwrap();
        assert_eq!(catalog.len(), 14);
        assert_eq!(catalog.tokens_for("fruit").unwrap().len(), 1);
        assert!(game.grid().iter().all(|(_, token)| {
            token.is_some_and(|t| t.category().as_str() != "fruit" || t.text() == "durian")
        }));
    }

    #[test]
    fn test_failed_start_leaves_catalog_untouched() {
        let mut catalog = TokenCatalog::builtin();
        let result = GameConfig::default()
            .define("planet", ["mars"])
            .categories(CategorySelection::Named(vec!["planet".into(), "gem".into()]))
            .start(&mut catalog);
        assert!(matches!(
            result,
            Err(GameError::Catalog(CatalogError::UnknownCategory { .. }))
        ));
        assert_eq!(catalog, TokenCatalog::builtin());

        let result = GameConfig::default()
            .define("empty", Vec::<String>::new())
            .start(&mut catalog);
        assert!(matches!(
            result,
            Err(GameError::Catalog(CatalogError::EmptyDefinition { .. }))
        ));
    }

    #[test]
    fn test_random_selection_bounds() {
        let mut catalog = TokenCatalog::builtin();
        let too_many = GameConfig::default().categories(CategorySelection::Random { count: 20 });
        assert!(matches!(
            too_many.start(&mut catalog),
            Err(GameError::Catalog(CatalogError::NotEnoughCategories {
                requested: 20,
                available: 13,
            }))
        ));
        let none = GameConfig::default().categories(CategorySelection::Random { count: 0 });
        assert!(matches!(
            none.start(&mut catalog),
            Err(GameError::Generate(_))
        ));
    }
}
