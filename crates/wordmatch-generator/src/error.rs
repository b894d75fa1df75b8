use wordmatch_core::GridError;

/// Why a board configuration was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ConfigurationIssue {
    /// The palette holds no categories.
    #[display("no categories selected")]
    NoCategories,
    /// The grid is too small for runs of three.
    #[display("{_0}")]
    Grid(GridError),
}

/// Errors raised by [`BoardGenerator`](crate::BoardGenerator).
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GenerateError {
    /// The palette or grid size cannot produce a playable board.
    #[display("invalid board configuration: {_0}")]
    InvalidConfiguration(ConfigurationIssue),
    /// Every greedy fill was followed by a cleanup sweep that kept finding
    /// runs. A single category can never produce a match-free board.
    #[display("board did not settle after {passes} cleanup passes")]
    Unsettled {
        /// Number of cleanup passes run.
        passes: usize,
    },
}
