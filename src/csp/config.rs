//! Solver configuration.

/// Configuration for [`SolverRunner`](super::SolverRunner).
///
/// The defaults reproduce plain backtracking over domains pruned once by
/// AC-3, with no budget and deterministic tie-breaking.
///
/// # Examples
///
/// ```
/// use u_crossword::csp::SolverConfig;
///
/// let config = SolverConfig::default()
///     .with_max_nodes(10_000)
///     .with_seed(7)
///     .with_maintain_arc_consistency(true);
/// assert_eq!(config.max_nodes, 10_000);
/// assert_eq!(config.seed, Some(7));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverConfig {
    /// Maximum number of tentative assignments. 0 = no limit.
    pub max_nodes: usize,

    /// Wall-clock limit in milliseconds, counted from the start of the
    /// solve. 0 = no limit.
    ///
    /// Propagation before search is never interrupted; search stops at its
    /// first node once the limit has passed.
    pub time_limit_ms: u64,

    /// Seed for breaking heuristic ties at random.
    ///
    /// `None` breaks ties by variable order and keeps equally constraining
    /// words in domain order.
    pub seed: Option<u64>,

    /// Re-run AC-3 after every tentative assignment.
    ///
    /// Prunes more per node at the cost of copying domains per search level.
    pub maintain_arc_consistency: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_nodes: 0,
            time_limit_ms: 0,
            seed: None,
            maintain_arc_consistency: false,
        }
    }
}

impl SolverConfig {
    /// Sets the node budget.
    pub fn with_max_nodes(mut self, n: usize) -> Self {
        self.max_nodes = n;
        self
    }

    /// Sets the wall-clock budget in milliseconds.
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = ms;
        self
    }

    /// Sets the tie-breaking seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables or disables AC-3 after every tentative assignment.
    pub fn with_maintain_arc_consistency(mut self, enabled: bool) -> Self {
        self.maintain_arc_consistency = enabled;
        self
    }
}
