//! One-ply guess scoring
//!
//! A guess is scored by playing it against every hypothetical secret and
//! summing the sizes of the candidate sets that would remain. Hypotheses
//! that produce the same feedback leave the same set behind, so the filter
//! runs once per distinct feedback and is weighted by how many hypotheses
//! produced it.

use super::filter::{CandidateSet, filtered_len};
use crate::core::Feedback;
use crate::corpus::{CandidateIndex, Lexicon, WordId};
use rustc_hash::FxHashMap;

/// Outcome of scoring one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GuessScore {
    /// Sum of remaining candidates over all hypotheses (lower is better)
    pub total: usize,
    /// Largest remaining candidate set for any hypothesis
    pub worst: usize,
    /// Number of hypothetical secrets the guess was played against
    pub hypotheses: usize,
}

impl GuessScore {
    /// Expected number of remaining candidates
    #[must_use]
    pub fn average(&self) -> f64 {
        if self.hypotheses == 0 {
            return 0.0;
        }
        self.total as f64 / self.hypotheses as f64
    }
}

/// Score `guess` against every hypothesis, narrowing `candidates`
///
/// Pure function of its inputs, safe to call from many threads at once.
///
/// # Examples
/// ```
/// use wordle_sieve::core::Alphabet;
/// use wordle_sieve::corpus::{CandidateIndex, Lexicon};
/// use wordle_sieve::solver::score_guess;
///
/// let lexicon = Lexicon::parse(Alphabet::english(), ["crane", "brave", "fjord"]).unwrap();
/// let index = CandidateIndex::build(&lexicon);
/// let everyone: Vec<_> = lexicon.ids().collect();
///
/// // CRANE tells all three secrets apart
/// let score = score_guess(&index, &lexicon, None, &everyone, lexicon.id_of("crane").unwrap());
/// assert_eq!(score.total, 3);
/// assert_eq!(score.worst, 1);
/// ```
#[must_use]
pub fn score_guess(
    index: &CandidateIndex,
    lexicon: &Lexicon,
    candidates: Option<&CandidateSet>,
    hypotheses: &[WordId],
    guess: WordId,
) -> GuessScore {
    let guess_word = lexicon.word(guess);

    let mut outcomes: FxHashMap<Feedback, usize> = FxHashMap::default();
    for &secret in hypotheses {
        let feedback = Feedback::evaluate(lexicon.word(secret), guess_word);
        *outcomes.entry(feedback).or_insert(0) += 1;
    }

    let mut score = GuessScore {
        hypotheses: hypotheses.len(),
        ..GuessScore::default()
    };
    for (feedback, count) in outcomes {
        let remaining = filtered_len(index, lexicon, candidates, feedback, guess_word);
        score.total += count * remaining;
        score.worst = score.worst.max(remaining);
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Alphabet;
    use crate::solver::filter::filter;

    fn setup(words: &[&str]) -> (Lexicon, CandidateIndex) {
        let lexicon = Lexicon::parse(Alphabet::english(), words).unwrap();
        let index = CandidateIndex::build(&lexicon);
        (lexicon, index)
    }

    fn id(lexicon: &Lexicon, text: &str) -> WordId {
        lexicon.id_of(text).unwrap()
    }

    #[test]
    fn score_matches_naive_sum() {
        let (lexicon, index) = setup(&["crane", "brave", "grate", "irate", "crate", "trace"]);
        let candidates = CandidateSet::all(&lexicon);
        let hypotheses = candidates.as_slice();

        for guess in lexicon.ids() {
            let naive: usize = hypotheses
                .iter()
                .map(|&secret| {
                    let feedback = Feedback::evaluate(lexicon.word(secret), lexicon.word(guess));
                    filter(&index, &lexicon, Some(&candidates), feedback, lexicon.word(guess)).len()
                })
                .sum();

            let score = score_guess(&index, &lexicon, Some(&candidates), hypotheses, guess);
            assert_eq!(score.total, naive);
            assert_eq!(score.hypotheses, hypotheses.len());
        }
    }

    #[test]
    fn uninformative_guess_scores_worst() {
        // ZZZZZ gives all-miss against every secret, so nothing is eliminated
        let (lexicon, index) = setup(&["crane", "brave", "grate", "zzzzz"]);
        let hypotheses = [id(&lexicon, "crane"), id(&lexicon, "brave"), id(&lexicon, "grate")];
        let candidates = CandidateSet::from_sorted(hypotheses.to_vec());

        let score = score_guess(&index, &lexicon, Some(&candidates), &hypotheses, id(&lexicon, "zzzzz"));
        assert_eq!(score.total, 9);
        assert_eq!(score.worst, 3);
        assert!((score.average() - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_hypotheses_score_zero() {
        let (lexicon, index) = setup(&["crane", "brave"]);
        let score = score_guess(&index, &lexicon, None, &[], id(&lexicon, "crane"));
        assert_eq!(score, GuessScore::default());
        assert!(score.average().abs() < f64::EPSILON);
    }
}
