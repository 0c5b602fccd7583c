//! Word analysis command
//!
//! Scores a single word as an opener against the whole lexicon.

use crate::solver::GuessSelector;

/// Result of analyzing a word
pub struct AnalysisResult {
    pub word: String,
    /// Sum of remaining candidates over every secret
    pub total: usize,
    /// Average remaining candidates
    pub average: f64,
    /// Largest remaining candidate set
    pub worst: usize,
    pub total_candidates: usize,
    /// Rank among all lexicon words scored the same way (1 = best), when computed
    pub rank: Option<usize>,
}

/// Analyze a word as a first guess
///
/// With `with_rank` every other lexicon word is scored too, to place this
/// one among them.
///
/// # Errors
///
/// Returns an error if the word is invalid or not in the lexicon.
pub fn analyze_word(
    word: &str,
    selector: &GuessSelector<'_>,
    with_rank: bool,
) -> Result<AnalysisResult, String> {
    let lexicon = selector.lexicon();
    let id = lexicon.resolve(word).map_err(|e| format!("Invalid word: {e}"))?;
    let score = selector.score(None, id);

    let rank = with_rank.then(|| {
        let better = lexicon
            .ids()
            .filter(|&other| selector.score(None, other).total < score.total)
            .count();
        better + 1
    });

    Ok(AnalysisResult {
        word: lexicon.word(id).text().to_string(),
        total: score.total,
        average: score.average(),
        worst: score.worst,
        total_candidates: lexicon.len(),
        rank,
    })
}
