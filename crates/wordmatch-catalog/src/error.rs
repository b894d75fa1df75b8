/// Errors raised by [`TokenCatalog`](crate::TokenCatalog) lookups and updates.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum CatalogError {
    /// The category is not defined in the catalog.
    #[display("unknown category: {name:?}")]
    UnknownCategory {
        /// Requested category name.
        name: String,
    },
    /// A definition has an empty name or no non-empty words.
    #[display("category definition {name:?} needs a name and at least one word")]
    EmptyDefinition {
        /// Category name as given by the caller.
        name: String,
    },
    /// More distinct categories were requested than the catalog holds.
    #[display("requested {requested} categories, but only {available} are defined")]
    NotEnoughCategories {
        /// Number of categories requested.
        requested: usize,
        /// Number of categories defined.
        available: usize,
    },
}
