//! Opener survey
//!
//! Scores candidate first guesses against every word of the lexicon and ranks
//! them by the average number of candidates they leave behind.

use super::scoring::score_guess;
use crate::corpus::{CandidateIndex, Lexicon, WordId};
use rayon::prelude::*;

/// How well one opener splits the lexicon
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OpenerScore {
    pub word: WordId,
    /// Average remaining candidates over all secrets
    pub average: f64,
    /// Largest remaining candidate set for any secret
    pub worst: usize,
}

/// Score one opener against `hypotheses` with no prior constraint
#[must_use]
pub fn score_opener(
    index: &CandidateIndex,
    lexicon: &Lexicon,
    hypotheses: &[WordId],
    opener: WordId,
) -> OpenerScore {
    let score = score_guess(index, lexicon, None, hypotheses, opener);
    OpenerScore {
        word: opener,
        average: score.average(),
        worst: score.worst,
    }
}

/// Sort ascending by average; equal averages keep their input order
pub fn rank_openers(scores: &mut [OpenerScore]) {
    scores.sort_by(|a, b| a.average.total_cmp(&b.average));
}

/// Score and rank every opener of `openers`
///
/// # Examples
/// ```
/// use wordle_sieve::core::Alphabet;
/// use wordle_sieve::corpus::{CandidateIndex, Lexicon};
/// use wordle_sieve::solver::survey_openers;
///
/// let lexicon = Lexicon::parse(Alphabet::english(), ["crane", "brave", "fjord"]).unwrap();
/// let index = CandidateIndex::build(&lexicon);
/// let openers: Vec<_> = lexicon.ids().collect();
///
/// let ranked = survey_openers(&index, &lexicon, &openers, false);
/// assert_eq!(lexicon.word(ranked[0].word).text(), "crane");
/// assert!((ranked[0].average - 1.0).abs() < f64::EPSILON);
/// ```
#[must_use]
pub fn survey_openers(
    index: &CandidateIndex,
    lexicon: &Lexicon,
    openers: &[WordId],
    parallel: bool,
) -> Vec<OpenerScore> {
    survey_openers_with(index, lexicon, openers, parallel, |_| {})
}

/// Like [`survey_openers`], calling `on_scored` as each opener finishes
///
/// The callback runs on worker threads when `parallel` is set.
pub fn survey_openers_with<F>(
    index: &CandidateIndex,
    lexicon: &Lexicon,
    openers: &[WordId],
    parallel: bool,
    on_scored: F,
) -> Vec<OpenerScore>
where
    F: Fn(&OpenerScore) + Sync,
{
    let hypotheses: Vec<WordId> = lexicon.ids().collect();
    let score = |&opener: &WordId| {
        let score = score_opener(index, lexicon, &hypotheses, opener);
        on_scored(&score);
        score
    };

    let mut scores: Vec<OpenerScore> = if parallel {
        openers.par_iter().map(score).collect()
    } else {
        openers.iter().map(score).collect()
    };
    rank_openers(&mut scores);
    scores
}

/// Slice `index` (0-based) of `count` near-equal slices
///
/// Slices hold `len.div_ceil(count)` items each; the last one takes whatever
/// remains. Returns `None` when `index` is not below `count`.
#[must_use]
pub fn chunk<T>(items: &[T], index: usize, count: usize) -> Option<&[T]> {
    if index >= count {
        return None;
    }
    let size = items.len().div_ceil(count);
    let start = (index * size).min(items.len());
    let end = (start + size).min(items.len());
    Some(&items[start..end])
}
