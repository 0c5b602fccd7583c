//! Solver configuration
//!
//! Plain values with defaults; the CLI fills them from its flags.

use crate::solver::ScaleGuard;

/// Rounds allowed per game unless configured otherwise
pub const DEFAULT_MAX_ROUNDS: usize = 6;

/// Knobs shared by every command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    /// Rounds before a game counts as lost
    pub max_rounds: usize,
    /// Large-candidate-set approximation
    pub scale_guard: ScaleGuard,
    /// Maximum shortlist size for opener search (`None` = every distinct-letter word)
    pub shortlist_size: Option<usize>,
    /// Score guesses on the rayon thread pool
    pub parallel: bool,
    /// Shuffle the lexicon with this seed before indexing
    pub shuffle_seed: Option<u64>,
    /// Fixed first guess (`None` = compute one)
    pub opener: Option<String>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_rounds: DEFAULT_MAX_ROUNDS,
            scale_guard: ScaleGuard::default(),
            shortlist_size: None,
            parallel: true,
            shuffle_seed: None,
            opener: None,
        }
    }
}
