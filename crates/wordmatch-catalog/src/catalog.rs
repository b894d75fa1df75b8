use std::{collections::BTreeMap, sync::Arc};

use rand::{Rng, seq::index};
use wordmatch_core::{Category, Token};

use crate::{CatalogError, Palette, builtin::BUILTIN_WORDS, palette::PaletteEntry};

/// Word list of one category. Shared with every palette built from it.
pub(crate) type Words = Arc<[Arc<str>]>;

/// Mapping from category names to their words.
///
/// The only mutator is [`define`](Self::define), which swaps in a fully built
/// word list, so readers never observe a partially replaced category.
/// Categories iterate in name order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenCatalog {
    entries: BTreeMap<Category, Words>,
}

impl TokenCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog holding the thirteen built-in categories.
    #[must_use]
    pub fn builtin() -> Self {
        let entries = BUILTIN_WORDS
            .iter()
            .map(|(name, words)| {
                let words: Words = words.iter().map(|&w| Arc::from(w)).collect();
                (Category::from(*name), words)
            })
            .collect();
        Self { entries }
    }

    /// Defines or replaces a category.
    ///
    /// The name and every word are trimmed and lowercased; words that end up
    /// empty are dropped. Returns the normalized category.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::EmptyDefinition`] if the name or the word list is
    /// empty after normalization. The catalog is left unchanged.
    pub fn define<I, S>(&mut self, category: &str, words: I) -> Result<Category, CatalogError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let name = normalize(category);
        let words: Words = words
            .into_iter()
            .map(|word| normalize(word.as_ref()))
            .filter(|word| !word.is_empty())
            .map(Arc::from)
            .collect();
        if name.is_empty() || words.is_empty() {
            return Err(CatalogError::EmptyDefinition {
                name: category.to_owned(),
            });
        }
        let category = Category::from(name);
        self.entries.insert(category.clone(), words);
        Ok(category)
    }

    /// Iterates over all category names in name order.
    pub fn categories(&self) -> impl ExactSizeIterator<Item = &Category> {
        self.entries.keys()
    }

    /// Returns the number of defined categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no category is defined.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if `category` is defined.
    #[must_use]
    pub fn contains(&self, category: &str) -> bool {
        self.entries.contains_key(category)
    }

    /// Returns the words of a category. The list is never empty.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownCategory`] if the category is not defined.
    pub fn tokens_for(&self, category: &str) -> Result<&[Arc<str>], CatalogError> {
        self.entry(category).map(|(_, words)| &words[..])
    }

    /// Draws a token of `category`, choosing its word uniformly.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownCategory`] if the category is not defined.
    pub fn draw<R>(&self, category: &str, rng: &mut R) -> Result<Token, CatalogError>
    where
        R: Rng + ?Sized,
    {
        let (category, words) = self.entry(category)?;
        let word = &words[rng.random_range(0..words.len())];
        Ok(Token::new(category.clone(), Arc::clone(word)))
    }

    /// Picks `count` distinct categories uniformly at random.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotEnoughCategories`] if fewer than `count`
    /// categories are defined.
    pub fn sample_categories<R>(&self, count: usize, rng: &mut R) -> Result<Vec<Category>, CatalogError>
    where
        R: Rng + ?Sized,
    {
        let available = self.entries.len();
        if count > available {
            return Err(CatalogError::NotEnoughCategories {
                requested: count,
                available,
            });
        }
        let keys: Vec<&Category> = self.entries.keys().collect();
        Ok(index::sample(rng, available, count)
            .into_iter()
            .map(|i| keys[i].clone())
            .collect())
    }

    /// Resolves a selection of category names into a [`Palette`].
    ///
    /// Repeated names are kept once, at their first occurrence. An empty
    /// selection yields an empty palette; rejecting it is up to the board
    /// generator.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownCategory`] for the first undefined name.
    pub fn palette<I, S>(&self, categories: I) -> Result<Palette, CatalogError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entries: Vec<PaletteEntry> = Vec::new();
        for name in categories {
            let (category, words) = self.entry(name.as_ref())?;
            if entries.iter().any(|entry| entry.category == *category) {
                continue;
            }
            entries.push(PaletteEntry {
                category: category.clone(),
                words: Arc::clone(words),
            });
        }
        Ok(Palette::from_entries(entries))
    }

    fn entry(&self, category: &str) -> Result<(&Category, &Words), CatalogError> {
        self.entries
            .get_key_value(category)
            .ok_or_else(|| CatalogError::UnknownCategory {
                name: category.to_owned(),
            })
    }
}

fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64;

    use super::*;

    #[test]
    fn test_builtin_has_thirteen_categories_of_five_words() {
        let catalog = TokenCatalog::builtin();
        assert_eq!(catalog.len(), 13);
        for category in catalog.categories() {
            assert_eq!(catalog.tokens_for(category.as_str()).unwrap().len(), 5);
        }
        assert!(catalog.contains("fruit"));
        assert!(!catalog.contains("planet"));
    }

    #[test]
    fn test_categories_iterate_in_name_order() {
        let catalog = TokenCatalog::builtin();
        let names: Vec<_> = catalog.categories().map(Category::as_str).collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
    }

    #[test]
    fn test_unknown_category_is_reported() {
        let catalog = TokenCatalog::builtin();
        let mut rng = Pcg64::seed_from_u64(0);
        let expected = CatalogError::UnknownCategory {
            name: "planet".to_owned(),
        };
        assert_eq!(catalog.tokens_for("planet"), Err(expected.clone()));
        assert_eq!(catalog.draw("planet", &mut rng), Err(expected.clone()));
        assert_eq!(
            catalog.palette(["fruit", "planet"]).map(|_| ()),
            Err(expected)
        );
    }

    #[test]
    fn test_define_normalizes_and_replaces() {
        let mut catalog = TokenCatalog::builtin();
        let category = catalog
            .define("  Fruit ", ["  Mango", "", "PAPAYA  ", "   "])
            .unwrap();
        assert_eq!(category.as_str(), "fruit");
        let words: Vec<&str> = catalog
            .tokens_for("fruit")
            .unwrap()
            .iter()
            .map(|w| &**w)
            .collect();
        assert_eq!(words, ["mango", "papaya"]);
        assert_eq!(catalog.len(), 13);
    }

    #[test]
    fn test_define_rejects_empty_definitions_without_change() {
        let mut catalog = TokenCatalog::builtin();
        let before = catalog.clone();
        assert!(matches!(
            catalog.define("fruit", ["", "  "]),
            Err(CatalogError::EmptyDefinition { .. })
        ));
        assert!(matches!(
            catalog.define("   ", ["word"]),
            Err(CatalogError::EmptyDefinition { .. })
        ));
        assert_eq!(catalog, before);
    }

    #[test]
    fn test_draw_yields_catalog_words() {
        let catalog = TokenCatalog::builtin();
        let mut rng = Pcg64::seed_from_u64(42);
        let words = catalog.tokens_for("animal").unwrap();
        for _ in 0..100 {
            let token = catalog.draw("animal", &mut rng).unwrap();
            assert_eq!(token.category().as_str(), "animal");
            assert!(words.iter().any(|w| &**w == token.text()));
        }
    }

    #[test]
    fn test_draw_covers_every_word() {
        let catalog = TokenCatalog::builtin();
        let mut rng = Pcg64::seed_from_u64(1);
        let mut seen = std::collections::BTreeSet::new();
        for _ in 0..500 {
            let token = catalog.draw("color", &mut rng).unwrap();
            seen.insert(token.text().to_owned());
        }
        assert_eq!(seen.len(), 5);
    }

    #[test]
    fn test_sample_categories_is_distinct() {
        let catalog = TokenCatalog::builtin();
        let mut rng = Pcg64::seed_from_u64(3);
        for _ in 0..20 {
            let mut sample = catalog.sample_categories(5, &mut rng).unwrap();
            assert_eq!(sample.len(), 5);
            sample.sort();
            sample.dedup();
            assert_eq!(sample.len(), 5);
            assert!(sample.iter().all(|c| catalog.contains(c.as_str())));
        }
        assert_eq!(
            catalog.sample_categories(14, &mut rng),
            Err(CatalogError::NotEnoughCategories {
                requested: 14,
                available: 13,
            })
        );
    }

    #[test]
    fn test_palette_deduplicates_and_survives_redefinition() {
        let mut catalog = TokenCatalog::builtin();
        let palette = catalog.palette(["fish", "drink", "fish"]).unwrap();
        assert_eq!(palette.len(), 2);

        catalog.define("fish", ["shark"]).unwrap();
        let mut rng = Pcg64::seed_from_u64(9);
        for _ in 0..50 {
            let token = palette.draw(&mut rng);
            assert_ne!(token.text(), "shark");
        }
    }
}
