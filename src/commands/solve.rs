//! Word solving command
//!
//! Plays a game against a known secret and returns the solution path.

use crate::core::Feedback;
use crate::solver::{GuessScore, GuessSelector, SessionState, play};

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    pub opener: String,
    pub max_rounds: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String, opener: String) -> Self {
        Self {
            target,
            opener,
            max_rounds: crate::config::DEFAULT_MAX_ROUNDS,
        }
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub state: SessionState,
    pub guesses: Vec<GuessStep>,
    pub target: String,
}

impl SolveResult {
    #[must_use]
    pub fn success(&self) -> bool {
        self.state == SessionState::Won
    }
}

/// A single guess step in the solution
pub struct GuessStep {
    pub word: String,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// How the guess scored against the candidates it was chosen for
    pub score: GuessScore,
}

/// Solve a specific word with the given selector
///
/// # Errors
///
/// Returns an error if the target or the opener is not a lexicon word.
pub fn solve_word(config: SolveConfig, selector: &GuessSelector<'_>) -> Result<SolveResult, String> {
    let lexicon = selector.lexicon();
    let secret = lexicon
        .resolve(&config.target)
        .map_err(|e| format!("Invalid target word: {e}"))?;
    let opener = lexicon
        .resolve(&config.opener)
        .map_err(|e| format!("Invalid opener: {e}"))?;

    let session = play(selector, opener, secret, config.max_rounds);

    // Re-score each guess against the set it was picked from
    let mut candidates = None;
    let mut guesses = Vec::with_capacity(session.rounds().len());
    for round in session.rounds() {
        let score = selector.score(candidates.as_ref(), round.guess);
        let word = lexicon.word(round.guess);
        candidates = Some(crate::solver::filter(
            selector.index(),
            lexicon,
            candidates.as_ref(),
            round.feedback,
            word,
        ));

        guesses.push(GuessStep {
            word: word.text().to_string(),
            feedback: round.feedback,
            candidates_before: round.candidates_before,
            candidates_after: round.candidates_after,
            score,
        });
    }

    Ok(SolveResult {
        state: session.state(),
        guesses,
        target: lexicon.word(secret).text().to_string(),
    })
}
