//! Greedy next-guess selection
//!
//! Every untried word of the lexicon is scored against the current candidate
//! set (see [`score_guess`]) and the lowest total wins. Ties go to the lowest
//! `WordId`, so the result does not depend on how the work was split across
//! threads.

use super::filter::CandidateSet;
use super::scoring::{GuessScore, score_guess};
use crate::config::SolverConfig;
use crate::corpus::{CandidateIndex, Corpus, Lexicon, Shortlist, WordId};
use rayon::prelude::*;
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// Default candidate count above which the scale guard kicks in
pub const DEFAULT_SCALE_GUARD: usize = 1000;

/// Approximation for large candidate sets
///
/// Above the threshold, only candidates with five distinct letters are used
/// as hypothetical secrets (when there are any). The guess universe is never
/// restricted. `Disabled` always scores against every candidate, which is the
/// exact one-ply expectation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleGuard {
    Disabled,
    Threshold(usize),
}

impl Default for ScaleGuard {
    fn default() -> Self {
        Self::Threshold(DEFAULT_SCALE_GUARD)
    }
}

impl ScaleGuard {
    /// Hypothetical secrets to score against
    #[must_use]
    pub fn hypotheses<'c>(self, lexicon: &Lexicon, candidates: &'c CandidateSet) -> Cow<'c, [WordId]> {
        let all = Cow::Borrowed(candidates.as_slice());
        let Self::Threshold(threshold) = self else {
            return all;
        };
        if candidates.len() <= threshold {
            return all;
        }

        let distinct: Vec<WordId> = candidates
            .iter()
            .filter(|&id| lexicon.word(id).has_distinct_letters())
            .collect();
        if distinct.is_empty() { all } else { Cow::Owned(distinct) }
    }
}

impl FromStr for ScaleGuard {
    type Err = String;

    /// `off` / `none` / `disabled`, or a candidate-count threshold
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "off" | "none" | "disabled" => Ok(Self::Disabled),
            number => number
                .parse()
                .map(Self::Threshold)
                .map_err(|_| format!("Invalid scale guard '{s}': expected a number or 'off'")),
        }
    }
}

impl fmt::Display for ScaleGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Disabled => write!(f, "off"),
            Self::Threshold(threshold) => write!(f, "{threshold}"),
        }
    }
}

/// Chooses guesses for a lexicon through its candidate index
#[derive(Debug, Clone, Copy)]
pub struct GuessSelector<'a> {
    index: &'a CandidateIndex,
    lexicon: &'a Lexicon,
    scale_guard: ScaleGuard,
    parallel: bool,
}

impl<'a> GuessSelector<'a> {
    /// Selector with the default scale guard and parallel scoring
    #[must_use]
    pub fn new(index: &'a CandidateIndex, lexicon: &'a Lexicon) -> Self {
        Self {
            index,
            lexicon,
            scale_guard: ScaleGuard::default(),
            parallel: true,
        }
    }

    /// Selector over a corpus, tuned by `config`
    #[must_use]
    pub fn from_config(corpus: &'a Corpus, config: &SolverConfig) -> Self {
        Self::new(corpus.index(), corpus.lexicon())
            .with_scale_guard(config.scale_guard)
            .with_parallel(config.parallel)
    }

    #[must_use]
    pub const fn with_scale_guard(mut self, scale_guard: ScaleGuard) -> Self {
        self.scale_guard = scale_guard;
        self
    }

    /// Split scoring across the rayon thread pool (`true`) or run it inline
    #[must_use]
    pub const fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    #[inline]
    #[must_use]
    pub const fn index(&self) -> &'a CandidateIndex {
        self.index
    }

    #[inline]
    #[must_use]
    pub const fn lexicon(&self) -> &'a Lexicon {
        self.lexicon
    }

    #[inline]
    #[must_use]
    pub const fn scale_guard(&self) -> ScaleGuard {
        self.scale_guard
    }

    #[inline]
    #[must_use]
    pub const fn is_parallel(&self) -> bool {
        self.parallel
    }

    /// Pick the next guess for a candidate set
    ///
    /// Returns `None` when the set is empty or every lexicon word has already
    /// been tried. A single remaining candidate is returned without scoring,
    /// unless it was already tried.
    ///
    /// # Examples
    /// ```
    /// use wordle_sieve::core::Alphabet;
    /// use wordle_sieve::corpus::{CandidateIndex, Lexicon};
    /// use wordle_sieve::solver::{CandidateSet, GuessSelector};
    ///
    /// let lexicon = Lexicon::parse(Alphabet::english(), ["crane", "brave", "fjord"]).unwrap();
    /// let index = CandidateIndex::build(&lexicon);
    /// let selector = GuessSelector::new(&index, &lexicon);
    ///
    /// let candidates = CandidateSet::all(&lexicon);
    /// let guess = selector.select_next_guess(&candidates, &[]).unwrap();
    /// assert_eq!(lexicon.word(guess).text(), "crane");
    /// ```
    #[must_use]
    pub fn select_next_guess(&self, candidates: &CandidateSet, tried: &[WordId]) -> Option<WordId> {
        if candidates.is_empty() {
            return None;
        }
        if let Some(only) = candidates.single() {
            if !tried.contains(&only) {
                return Some(only);
            }
        }

        let hypotheses = self.scale_guard.hypotheses(self.lexicon, candidates);
        let universe: Vec<WordId> = self
            .lexicon
            .ids()
            .filter(|id| !tried.contains(id))
            .collect();

        self.best_guess(Some(candidates), &hypotheses, &universe)
            .map(|(id, _)| id)
    }

    /// Best opener, scored against the whole lexicon
    ///
    /// With a shortlist only its words are tried as openers.
    #[must_use]
    pub fn opener(&self, shortlist: Option<&Shortlist>) -> Option<WordId> {
        let hypotheses: Vec<WordId> = self.lexicon.ids().collect();
        let universe = match shortlist {
            Some(shortlist) if !shortlist.is_empty() => Cow::Borrowed(shortlist.ids()),
            _ => Cow::Owned(hypotheses.clone()),
        };

        self.best_guess(None, &hypotheses, &universe)
            .map(|(id, _)| id)
    }

    /// Score a single guess the way selection would
    ///
    /// `None` scores against the unconstrained lexicon.
    #[must_use]
    pub fn score(&self, candidates: Option<&CandidateSet>, guess: WordId) -> GuessScore {
        match candidates {
            Some(candidates) => {
                let hypotheses = self.scale_guard.hypotheses(self.lexicon, candidates);
                score_guess(self.index, self.lexicon, Some(candidates), &hypotheses, guess)
            }
            None => {
                let hypotheses: Vec<WordId> = self.lexicon.ids().collect();
                score_guess(self.index, self.lexicon, None, &hypotheses, guess)
            }
        }
    }

    /// Lowest-scoring word of `universe`, ties to the lowest id
    #[must_use]
    pub fn best_guess(
        &self,
        candidates: Option<&CandidateSet>,
        hypotheses: &[WordId],
        universe: &[WordId],
    ) -> Option<(WordId, GuessScore)> {
        let score = |&guess: &WordId| {
            let score = score_guess(self.index, self.lexicon, candidates, hypotheses, guess);
            (guess, score)
        };
        let key = |(guess, score): &(WordId, GuessScore)| (score.total, *guess);

        if self.parallel {
            universe.par_iter().map(score).min_by_key(key)
        } else {
            universe.iter().map(score).min_by_key(key)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Alphabet, Feedback};
    use crate::solver::filter::filter;
    use crate::wordlists::english_lexicon;

    fn setup(words: &[&str]) -> (Lexicon, CandidateIndex) {
        let lexicon = Lexicon::parse(Alphabet::english(), words).unwrap();
        let index = CandidateIndex::build(&lexicon);
        (lexicon, index)
    }

    fn id(lexicon: &Lexicon, text: &str) -> WordId {
        lexicon.id_of(text).unwrap()
    }

    #[test]
    fn single_candidate_returned_without_scoring() {
        let (lexicon, index) = setup(&["crane", "brave", "grate"]);
        let selector = GuessSelector::new(&index, &lexicon);
        let candidates = CandidateSet::from_sorted(vec![id(&lexicon, "grate")]);

        assert_eq!(
            selector.select_next_guess(&candidates, &[id(&lexicon, "crane")]),
            Some(id(&lexicon, "grate"))
        );
    }

    #[test]
    fn empty_candidates_give_no_guess() {
        let (lexicon, index) = setup(&["crane", "brave"]);
        let selector = GuessSelector::new(&index, &lexicon);
        assert_eq!(selector.select_next_guess(&CandidateSet::default(), &[]), None);
    }

    #[test]
    fn never_returns_tried_guess() {
        let (lexicon, index) = setup(&["crane", "brave", "grate", "irate", "crate"]);
        let selector = GuessSelector::new(&index, &lexicon);
        let candidates = CandidateSet::all(&lexicon);

        let mut tried = Vec::new();
        while let Some(guess) = selector.select_next_guess(&candidates, &tried) {
            assert!(!tried.contains(&guess));
            tried.push(guess);
        }
        assert_eq!(tried.len(), lexicon.len());
    }

    #[test]
    fn ties_break_to_lexicon_order() {
        // Every guess separates the two secrets equally well
        let (lexicon, index) = setup(&["aaaaa", "bbbbb"]);
        let selector = GuessSelector::new(&index, &lexicon);
        let candidates = CandidateSet::all(&lexicon);

        assert_eq!(
            selector.select_next_guess(&candidates, &[]),
            Some(id(&lexicon, "aaaaa"))
        );
        assert_eq!(
            selector.select_next_guess(&candidates, &[id(&lexicon, "aaaaa")]),
            Some(id(&lexicon, "bbbbb"))
        );
    }

    #[test]
    fn sequential_and_parallel_agree() {
        let lexicon = english_lexicon();
        let index = CandidateIndex::build(&lexicon);
        let parallel = GuessSelector::new(&index, &lexicon);
        let sequential = parallel.with_parallel(false);

        let guess = id(&lexicon, "crane");
        for secret in ["brave", "light", "robot"] {
            let feedback = Feedback::evaluate(lexicon.word(id(&lexicon, secret)), lexicon.word(guess));
            let candidates = filter(&index, &lexicon, None, feedback, lexicon.word(guess));

            assert_eq!(
                parallel.select_next_guess(&candidates, &[guess]),
                sequential.select_next_guess(&candidates, &[guess])
            );
        }
    }

    #[test]
    fn chosen_guess_has_minimum_score() {
        let lexicon = english_lexicon();
        let index = CandidateIndex::build(&lexicon);
        let selector = GuessSelector::new(&index, &lexicon);

        let guess = id(&lexicon, "crane");
        let feedback = Feedback::evaluate(lexicon.word(id(&lexicon, "light")), lexicon.word(guess));
        let candidates = filter(&index, &lexicon, None, feedback, lexicon.word(guess));
        assert!(candidates.len() > 1);

        let best = selector.select_next_guess(&candidates, &[guess]).unwrap();
        let best_score = selector.score(Some(&candidates), best).total;
        for other in lexicon.ids().filter(|&w| w != guess).step_by(13) {
            assert!(best_score <= selector.score(Some(&candidates), other).total);
        }
    }

    #[test]
    fn scale_guard_restricts_hypotheses_only_above_threshold() {
        let (lexicon, _) = setup(&["crane", "llama", "speed", "brave"]);
        let candidates = CandidateSet::all(&lexicon);

        let exact = ScaleGuard::Disabled.hypotheses(&lexicon, &candidates);
        assert_eq!(exact.len(), 4);

        let below = ScaleGuard::Threshold(4).hypotheses(&lexicon, &candidates);
        assert_eq!(below.len(), 4);

        let above = ScaleGuard::Threshold(3).hypotheses(&lexicon, &candidates);
        assert_eq!(&*above, &[id(&lexicon, "crane"), id(&lexicon, "brave")]);
    }

    #[test]
    fn scale_guard_falls_back_when_no_distinct_words() {
        let (lexicon, _) = setup(&["llama", "speed", "geese"]);
        let candidates = CandidateSet::all(&lexicon);
        let hypotheses = ScaleGuard::Threshold(1).hypotheses(&lexicon, &candidates);
        assert_eq!(hypotheses.len(), 3);
    }

    #[test]
    fn scale_guard_parsing() {
        assert_eq!("off".parse::<ScaleGuard>(), Ok(ScaleGuard::Disabled));
        assert_eq!("250".parse::<ScaleGuard>(), Ok(ScaleGuard::Threshold(250)));
        assert!("lots".parse::<ScaleGuard>().is_err());
        assert_eq!(ScaleGuard::default().to_string(), DEFAULT_SCALE_GUARD.to_string());
    }

    #[test]
    fn opener_respects_shortlist() {
        let (lexicon, index) = setup(&["llama", "crane", "brave", "fjord", "speed"]);
        let selector = GuessSelector::new(&index, &lexicon);
        let shortlist = Shortlist::build(&lexicon, Some(1));

        let opener = selector.opener(Some(&shortlist)).unwrap();
        assert_eq!(opener, shortlist.ids()[0]);
        assert!(selector.opener(None).is_some());
    }
}
