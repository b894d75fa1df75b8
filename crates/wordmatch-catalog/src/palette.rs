use std::sync::Arc;

use rand::Rng;
use wordmatch_core::{Category, Token};

use crate::catalog::Words;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PaletteEntry {
    pub(crate) category: Category,
    pub(crate) words: Words,
}

/// The validated category selection of one game session.
///
/// Built by [`TokenCatalog::palette`](crate::TokenCatalog::palette). The word
/// lists are captured when the palette is built, so drawing can never fail and
/// later catalog changes do not reach running sessions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    entries: Vec<PaletteEntry>,
}

impl Palette {
    pub(crate) fn from_entries(entries: Vec<PaletteEntry>) -> Self {
        Self { entries }
    }

    /// Number of categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the palette has no categories.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the categories in selection order.
    pub fn categories(&self) -> impl ExactSizeIterator<Item = &Category> {
        self.entries.iter().map(|entry| &entry.category)
    }

    /// Returns the category at `index` in selection order.
    #[must_use]
    pub fn category(&self, index: usize) -> Option<&Category> {
        self.entries.get(index).map(|entry| &entry.category)
    }

    /// Returns the selection index of `category`.
    #[must_use]
    pub fn index_of(&self, category: &Category) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| entry.category == *category)
    }

    /// Draws a token: a uniformly chosen category, then a uniformly chosen word.
    ///
    /// # Panics
    ///
    /// Panics if the palette is empty.
    pub fn draw<R>(&self, rng: &mut R) -> Token
    where
        R: Rng + ?Sized,
    {
        assert!(!self.is_empty(), "cannot draw from an empty palette");
        let index = rng.random_range(0..self.entries.len());
        self.draw_in(index, rng)
    }

    /// Draws a token of the category at `index`, choosing its word uniformly.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn draw_in<R>(&self, index: usize, rng: &mut R) -> Token
    where
        R: Rng + ?Sized,
    {
        let entry = &self.entries[index];
        let word = &entry.words[rng.random_range(0..entry.words.len())];
        Token::new(entry.category.clone(), Arc::clone(word))
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64;

    use crate::TokenCatalog;

    #[test]
    fn test_palette_keeps_selection_order() {
        let catalog = TokenCatalog::builtin();
        let palette = catalog.palette(["tool", "animal", "color"]).unwrap();
        let names: Vec<_> = palette.categories().map(|c| c.as_str()).collect();
        assert_eq!(names, ["tool", "animal", "color"]);
        assert_eq!(palette.category(1).map(|c| c.as_str()), Some("animal"));
        assert_eq!(palette.index_of(&"color".into()), Some(2));
        assert_eq!(palette.index_of(&"fruit".into()), None);
    }

    #[test]
    fn test_draw_uses_every_selected_category() {
        let catalog = TokenCatalog::builtin();
        let palette = catalog.palette(["tool", "animal", "color"]).unwrap();
        let mut rng = Pcg64::seed_from_u64(11);
        let mut counts = [0_usize; 3];
        for _ in 0..300 {
            let token = palette.draw(&mut rng);
            let index = palette.index_of(token.category()).expect("selected category");
            counts[index] += 1;
        }
        assert!(counts.iter().all(|&n| n > 0));
    }

    #[test]
    fn test_draw_in_is_restricted_to_one_category() {
        let catalog = TokenCatalog::builtin();
        let palette = catalog.palette(["shape", "sport"]).unwrap();
        let mut rng = Pcg64::seed_from_u64(5);
        for _ in 0..50 {
            assert_eq!(palette.draw_in(1, &mut rng).category().as_str(), "sport");
        }
    }

    #[test]
    fn test_empty_selection_gives_empty_palette() {
        let catalog = TokenCatalog::builtin();
        let palette = catalog.palette(Vec::<String>::new()).unwrap();
        assert!(palette.is_empty());
        assert_eq!(palette.categories().len(), 0);
    }
}
