use wordmatch_core::MatchSet;

/// Why a swap was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SwapRejection {
    /// The two cells do not share an edge.
    NotAdjacent,
    /// The swap would not form any run, so it was undone.
    NoMatch,
}

/// Result of [`Game::attempt_swap`](crate::Game::attempt_swap).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapOutcome {
    /// Whether the swap was kept.
    pub accepted: bool,
    /// Why the swap was refused, if it was.
    pub rejection: Option<SwapRejection>,
    /// Cells removed over the whole cascade.
    pub total_removed: usize,
    /// Score gained by this swap. Always equal to `total_removed`.
    pub score_delta: usize,
    /// Cells matched in each cascade pass, first pass first.
    pub cascades: Vec<MatchSet>,
}

impl SwapOutcome {
    pub(crate) fn rejected(reason: SwapRejection) -> Self {
        Self {
            accepted: false,
            rejection: Some(reason),
            total_removed: 0,
            score_delta: 0,
            cascades: Vec::new(),
        }
    }

    pub(crate) fn accepted(cascades: Vec<MatchSet>) -> Self {
        let total_removed = cascades.iter().map(MatchSet::len).sum();
        Self {
            accepted: true,
            rejection: None,
            total_removed,
            score_delta: total_removed,
            cascades,
        }
    }

    /// Number of remove-collapse-refill passes the swap triggered.
    #[must_use]
    pub fn passes(&self) -> usize {
        self.cascades.len()
    }
}
