//! Round-by-round game session
//!
//! A session starts from an opener and alternates between receiving
//! feedback for the current guess and choosing the next one, until the
//! secret is found or no sensible guess is left.

use super::filter::{CandidateSet, filter};
use super::selector::GuessSelector;
use crate::core::Feedback;
use crate::corpus::WordId;
use std::fmt;

/// Why a session stopped without a win
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExhaustReason {
    /// The feedback so far contradicts every word of the lexicon
    NoConsistentWord,
    /// All rounds were used up
    RoundLimit,
    /// Every lexicon word has already been guessed
    NoUntriedGuess,
}

impl fmt::Display for ExhaustReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoConsistentWord => write!(f, "no word is consistent with the feedback"),
            Self::RoundLimit => write!(f, "ran out of rounds"),
            Self::NoUntriedGuess => write!(f, "every word has already been guessed"),
        }
    }
}

/// Session lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Guessing,
    Won,
    Exhausted(ExhaustReason),
}

impl SessionState {
    #[must_use]
    pub const fn is_finished(self) -> bool {
        !matches!(self, Self::Guessing)
    }
}

/// Error type for session operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    /// The session already reached a terminal state
    Finished(SessionState),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finished(SessionState::Won) => write!(f, "Game already won"),
            Self::Finished(SessionState::Exhausted(reason)) => {
                write!(f, "Game is over: {reason}")
            }
            Self::Finished(SessionState::Guessing) => write!(f, "Game is over"),
        }
    }
}

impl std::error::Error for SessionError {}

/// One played round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    pub guess: WordId,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// A single game
///
/// Candidate sets are replaced every round, never edited in place.
#[derive(Debug, Clone)]
pub struct Session<'a> {
    selector: &'a GuessSelector<'a>,
    max_rounds: usize,
    candidates: Option<CandidateSet>,
    rounds: Vec<Round>,
    tried: Vec<WordId>,
    current: Option<WordId>,
    state: SessionState,
}

impl<'a> Session<'a> {
    /// Start a game whose first guess is `opener`
    #[must_use]
    pub const fn new(selector: &'a GuessSelector<'a>, opener: WordId, max_rounds: usize) -> Self {
        Self {
            selector,
            max_rounds,
            candidates: None,
            rounds: Vec::new(),
            tried: Vec::new(),
            current: Some(opener),
            state: SessionState::Guessing,
        }
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Guess to play next; `None` once the session is finished
    #[inline]
    #[must_use]
    pub const fn current_guess(&self) -> Option<WordId> {
        self.current
    }

    /// Candidate set after the last round (`None` before the first)
    #[inline]
    #[must_use]
    pub const fn candidates(&self) -> Option<&CandidateSet> {
        self.candidates.as_ref()
    }

    /// Number of words still possible
    #[must_use]
    pub fn candidate_count(&self) -> usize {
        self.candidates
            .as_ref()
            .map_or_else(|| self.selector.lexicon().len(), CandidateSet::len)
    }

    #[inline]
    #[must_use]
    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    #[inline]
    #[must_use]
    pub const fn max_rounds(&self) -> usize {
        self.max_rounds
    }

    #[inline]
    #[must_use]
    pub const fn selector(&self) -> &'a GuessSelector<'a> {
        self.selector
    }

    /// Play a different word than the suggested one this round
    ///
    /// # Errors
    /// Returns `SessionError::Finished` once the session is over.
    pub fn override_guess(&mut self, guess: WordId) -> Result<(), SessionError> {
        if self.state.is_finished() {
            return Err(SessionError::Finished(self.state));
        }
        self.current = Some(guess);
        Ok(())
    }

    /// Record the feedback for the current guess and advance
    ///
    /// # Errors
    /// Returns `SessionError::Finished` once the session is over.
    pub fn submit(&mut self, feedback: Feedback) -> Result<SessionState, SessionError> {
        let Some(guess) = self.current.filter(|_| !self.state.is_finished()) else {
            return Err(SessionError::Finished(self.state));
        };

        let candidates_before = self.candidate_count();
        self.tried.push(guess);

        if feedback.is_win() {
            self.rounds.push(Round {
                guess,
                feedback,
                candidates_before,
                candidates_after: 1,
            });
            self.candidates = Some(CandidateSet::from_sorted(vec![guess]));
            return Ok(self.finish(SessionState::Won));
        }

        let next = filter(
            self.selector.index(),
            self.selector.lexicon(),
            self.candidates.as_ref(),
            feedback,
            self.selector.lexicon().word(guess),
        );
        self.rounds.push(Round {
            guess,
            feedback,
            candidates_before,
            candidates_after: next.len(),
        });

        let state = if next.is_empty() {
            SessionState::Exhausted(ExhaustReason::NoConsistentWord)
        } else if self.rounds.len() >= self.max_rounds {
            SessionState::Exhausted(ExhaustReason::RoundLimit)
        } else {
            match self.selector.select_next_guess(&next, &self.tried) {
                Some(guess) => {
                    self.current = Some(guess);
                    SessionState::Guessing
                }
                None => SessionState::Exhausted(ExhaustReason::NoUntriedGuess),
            }
        };
        self.candidates = Some(next);

        if state.is_finished() {
            return Ok(self.finish(state));
        }
        Ok(state)
    }

    /// Take back the last round, making its guess current again
    ///
    /// Candidates are recomputed from the remaining rounds. Returns false when
    /// there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(last) = self.rounds.pop() else {
            return false;
        };
        self.tried.pop();

        let index = self.selector.index();
        let lexicon = self.selector.lexicon();
        self.candidates = self.rounds.iter().fold(None, |candidates, round| {
            Some(filter(
                index,
                lexicon,
                candidates.as_ref(),
                round.feedback,
                lexicon.word(round.guess),
            ))
        });
        self.current = Some(last.guess);
        self.state = SessionState::Guessing;
        true
    }

    fn finish(&mut self, state: SessionState) -> SessionState {
        self.state = state;
        self.current = None;
        state
    }
}

/// Self-play: run a full session against a known secret
///
/// # Examples
/// ```
/// use wordle_sieve::core::Alphabet;
/// use wordle_sieve::corpus::{CandidateIndex, Lexicon};
/// use wordle_sieve::solver::{GuessSelector, SessionState, play};
///
/// let lexicon = Lexicon::parse(Alphabet::english(), ["crane", "brave", "grate", "fjord"]).unwrap();
/// let index = CandidateIndex::build(&lexicon);
/// let selector = GuessSelector::new(&index, &lexicon);
///
/// let opener = lexicon.id_of("crane").unwrap();
/// let secret = lexicon.id_of("grate").unwrap();
/// let session = play(&selector, opener, secret, 6);
/// assert_eq!(session.state(), SessionState::Won);
/// ```
#[must_use]
pub fn play<'a>(
    selector: &'a GuessSelector<'a>,
    opener: WordId,
    secret: WordId,
    max_rounds: usize,
) -> Session<'a> {
    let lexicon = selector.lexicon();
    let mut session = Session::new(selector, opener, max_rounds);

    while let Some(guess) = session.current_guess() {
        let feedback = Feedback::evaluate(lexicon.word(secret), lexicon.word(guess));
        if session.submit(feedback).is_err() {
            break;
        }
    }

    session
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Alphabet;
    use crate::corpus::{CandidateIndex, Lexicon};
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
    fn opener_win_finishes_immediately() {
        let (lexicon, index) = setup(&["crane", "brave", "grate"]);
        let selector = GuessSelector::new(&index, &lexicon);
        let session = play(&selector, id(&lexicon, "crane"), id(&lexicon, "crane"), 6);

        assert_eq!(session.state(), SessionState::Won);
        assert_eq!(session.rounds().len(), 1);
        assert_eq!(session.current_guess(), None);
    }

    #[test]
    fn contradictory_feedback_exhausts() {
        let (lexicon, index) = setup(&["crane", "brave", "grate"]);
        let selector = GuessSelector::new(&index, &lexicon);
        let mut session = Session::new(&selector, id(&lexicon, "crane"), 6);

        let state = session.submit("YYYYY".parse().unwrap()).unwrap();
        assert_eq!(state, SessionState::Exhausted(ExhaustReason::NoConsistentWord));
        assert_eq!(session.candidate_count(), 0);
        assert_eq!(session.current_guess(), None);

        let err = session.submit(Feedback::ALL_HIT).unwrap_err();
        assert_eq!(
            err,
            SessionError::Finished(SessionState::Exhausted(ExhaustReason::NoConsistentWord))
        );
    }

    #[test]
    fn single_candidate_becomes_next_guess() {
        let (lexicon, index) = setup(&["crane", "brave", "fjord"]);
        let selector = GuessSelector::new(&index, &lexicon);
        let mut session = Session::new(&selector, id(&lexicon, "crane"), 6);

        // CRANE against FJORD leaves only FJORD
        let feedback = Feedback::evaluate(lexicon.word(id(&lexicon, "fjord")), lexicon.word(id(&lexicon, "crane")));
        assert_eq!(session.submit(feedback), Ok(SessionState::Guessing));
        assert_eq!(session.candidate_count(), 1);
        assert_eq!(session.current_guess(), Some(id(&lexicon, "fjord")));
    }

    #[test]
    fn round_limit_exhausts() {
        let (lexicon, index) = setup(&["crane", "brave", "grate", "irate", "crate"]);
        let selector = GuessSelector::new(&index, &lexicon);
        let mut session = Session::new(&selector, id(&lexicon, "crane"), 1);

        let feedback = Feedback::evaluate(lexicon.word(id(&lexicon, "grate")), lexicon.word(id(&lexicon, "crane")));
        assert_eq!(
            session.submit(feedback),
            Ok(SessionState::Exhausted(ExhaustReason::RoundLimit))
        );
    }

    #[test]
    fn secret_stays_candidate_during_self_play() {
        let lexicon = english_lexicon();
        let index = CandidateIndex::build(&lexicon);
        let selector = GuessSelector::new(&index, &lexicon);
        let opener = id(&lexicon, "crane");

        for secret in lexicon.ids().step_by(37) {
            let session = play(&selector, opener, secret, 10);
            assert_eq!(session.state(), SessionState::Won, "{}", lexicon.word(secret));

            let guesses: Vec<WordId> = session.rounds().iter().map(|r| r.guess).collect();
            for (i, round) in session.rounds().iter().enumerate() {
                assert!(round.candidates_after <= round.candidates_before);
                assert!(!guesses[..i].contains(&round.guess));
            }
            assert!(session.candidates().unwrap().contains(secret));
        }
    }

    #[test]
    fn candidate_sets_contain_secret_every_round() {
        let lexicon = english_lexicon();
        let index = CandidateIndex::build(&lexicon);
        let selector = GuessSelector::new(&index, &lexicon);
        let secret = id(&lexicon, "robot");
        let mut session = Session::new(&selector, id(&lexicon, "crane"), 10);

        while let Some(guess) = session.current_guess() {
            let feedback = Feedback::evaluate(lexicon.word(secret), lexicon.word(guess));
            session.submit(feedback).unwrap();
            assert!(session.candidates().unwrap().contains(secret));
        }
        assert_eq!(session.state(), SessionState::Won);
    }

    #[test]
    fn undo_restores_previous_round() {
        let lexicon = english_lexicon();
        let index = CandidateIndex::build(&lexicon);
        let selector = GuessSelector::new(&index, &lexicon);
        let crane = id(&lexicon, "crane");
        let mut session = Session::new(&selector, crane, 6);

        let feedback = Feedback::evaluate(lexicon.word(id(&lexicon, "light")), lexicon.word(crane));
        session.submit(feedback).unwrap();
        let after_first = session.candidates().cloned();
        let second = session.current_guess().unwrap();

        session.submit("YYYYY".parse().unwrap()).unwrap();

        assert!(session.undo());
        assert_eq!(session.state(), SessionState::Guessing);
        assert_eq!(session.current_guess(), Some(second));
        assert_eq!(session.candidates().cloned(), after_first);

        assert!(session.undo());
        assert_eq!(session.current_guess(), Some(crane));
        assert!(session.candidates().is_none());
        assert!(!session.undo());
    }

    #[test]
    fn override_guess_changes_next_play() {
        let (lexicon, index) = setup(&["crane", "brave", "grate"]);
        let selector = GuessSelector::new(&index, &lexicon);
        let mut session = Session::new(&selector, id(&lexicon, "crane"), 6);

        session.override_guess(id(&lexicon, "grate")).unwrap();
        assert_eq!(session.current_guess(), Some(id(&lexicon, "grate")));
        assert_eq!(session.submit(Feedback::ALL_HIT), Ok(SessionState::Won));
        assert!(session.override_guess(id(&lexicon, "brave")).is_err());
    }
}
