//! Candidate elimination
//!
//! One round of feedback is turned into one candidate list per position, taken
//! straight from the [`CandidateIndex`] where possible. Repeated guess letters
//! need an exact or minimum letter count, which no precomputed list can
//! express, so those lists are derived on the fly. The lists (plus the prior
//! candidate set, if any) are then intersected with the smallest list driving
//! and binary searches against all the others.

use crate::core::{CharResult, Feedback, WORD_LENGTH, Word};
use crate::corpus::{CandidateIndex, Lexicon, WordId};
use std::borrow::Cow;

/// Ascending list of words consistent with every feedback seen so far
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CandidateSet(Vec<WordId>);

impl CandidateSet {
    /// Every word of a lexicon
    #[must_use]
    pub fn all(lexicon: &Lexicon) -> Self {
        Self(lexicon.ids().collect())
    }

    /// Wrap ids that are already strictly ascending
    #[must_use]
    pub fn from_sorted(ids: Vec<WordId>) -> Self {
        debug_assert!(
            ids.windows(2).all(|w| w[0] < w[1]),
            "candidate ids must be strictly ascending"
        );
        Self(ids)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, id: WordId) -> bool {
        self.0.binary_search(&id).is_ok()
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[WordId] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = WordId> + '_ {
        self.0.iter().copied()
    }

    /// The only member, if exactly one remains
    #[must_use]
    pub fn single(&self) -> Option<WordId> {
        match self.0.as_slice() {
            [only] => Some(*only),
            _ => None,
        }
    }
}

/// Narrow `prior` with one round of feedback for `guess`
///
/// `prior = None` means no constraints yet (the whole lexicon). An empty
/// result means the feedback contradicts everything seen before.
///
/// # Examples
/// ```
/// use wordle_sieve::core::{Alphabet, Feedback};
/// use wordle_sieve::corpus::{CandidateIndex, Lexicon};
/// use wordle_sieve::solver::filter;
///
/// let lexicon = Lexicon::parse(Alphabet::english(), ["brave", "grave", "crane", "irate"]).unwrap();
/// let index = CandidateIndex::build(&lexicon);
///
/// let guess = lexicon.word(lexicon.id_of("crane").unwrap());
/// let feedback: Feedback = "-GG-G".parse().unwrap();
/// let remaining = filter(&index, &lexicon, None, feedback, guess);
///
/// let words: Vec<&str> = remaining.iter().map(|id| lexicon.word(id).text()).collect();
/// assert_eq!(words, ["brave", "grave", "irate"]);
/// ```
#[must_use]
pub fn filter(
    index: &CandidateIndex,
    lexicon: &Lexicon,
    prior: Option<&CandidateSet>,
    feedback: Feedback,
    guess: &Word,
) -> CandidateSet {
    let prior = prior.map(CandidateSet::as_slice);
    let lists = position_lists(index, lexicon, prior, feedback, guess);

    let mut survivors = Vec::new();
    intersect(&lists, prior, |id| survivors.push(id));
    CandidateSet(survivors)
}

/// Size of [`filter`]'s result without materializing it
#[must_use]
pub fn filtered_len(
    index: &CandidateIndex,
    lexicon: &Lexicon,
    prior: Option<&CandidateSet>,
    feedback: Feedback,
    guess: &Word,
) -> usize {
    let prior = prior.map(CandidateSet::as_slice);
    let lists = position_lists(index, lexicon, prior, feedback, guess);

    let mut count = 0;
    intersect(&lists, prior, |_| count += 1);
    count
}

fn position_lists<'a>(
    index: &'a CandidateIndex,
    lexicon: &Lexicon,
    prior: Option<&[WordId]>,
    feedback: Feedback,
    guess: &Word,
) -> [Cow<'a, [WordId]>; WORD_LENGTH] {
    std::array::from_fn(|position| position_list(index, lexicon, prior, feedback, guess, position))
}

fn position_list<'a>(
    index: &'a CandidateIndex,
    lexicon: &Lexicon,
    prior: Option<&[WordId]>,
    feedback: Feedback,
    guess: &Word,
    position: usize,
) -> Cow<'a, [WordId]> {
    let letter = guess.letter_at(position);

    match feedback.get(position) {
        CharResult::InPosition => Cow::Borrowed(index.in_position(position, letter)),
        CharResult::NotInWord => {
            let others = marked_copies(feedback, guess, letter);
            if others == 0 {
                return Cow::Borrowed(index.forbidden(letter));
            }
            // The letter is present, exactly `others` times, and not here
            let elsewhere = index.wrong_position(position, letter);
            Cow::Owned(derive(lexicon, narrower(elsewhere, prior), |word| {
                word.letter_at(position) != letter && word.count_of(letter) == others
            }))
        }
        CharResult::WrongPosition => {
            let elsewhere = index.wrong_position(position, letter);
            let required = marked_copies(feedback, guess, letter);
            if required <= 1 {
                return Cow::Borrowed(elsewhere);
            }
            Cow::Owned(derive(lexicon, narrower(elsewhere, prior), |word| {
                word.letter_at(position) != letter && word.count_of(letter) >= required
            }))
        }
    }
}

/// Guess positions holding `letter` that were not marked `NotInWord`
fn marked_copies(feedback: Feedback, guess: &Word, letter: u8) -> usize {
    guess
        .letters()
        .iter()
        .zip(feedback.results())
        .filter(|&(&l, &result)| l == letter && result != CharResult::NotInWord)
        .count()
}

/// Shorter of the index list and the prior set; both are valid sources
fn narrower<'s>(list: &'s [WordId], prior: Option<&'s [WordId]>) -> &'s [WordId] {
    match prior {
        Some(prior) if prior.len() < list.len() => prior,
        _ => list,
    }
}

fn derive(lexicon: &Lexicon, source: &[WordId], keep: impl Fn(&Word) -> bool) -> Vec<WordId> {
    source
        .iter()
        .copied()
        .filter(|&id| keep(lexicon.word(id)))
        .collect()
}

/// Visit every id present in all lists, in ascending order
fn intersect(
    lists: &[Cow<'_, [WordId]>; WORD_LENGTH],
    prior: Option<&[WordId]>,
    mut visit: impl FnMut(WordId),
) {
    let mut all: [&[WordId]; WORD_LENGTH + 1] = [&[]; WORD_LENGTH + 1];
    for (slot, list) in all.iter_mut().zip(lists) {
        *slot = &**list;
    }
    let count = match prior {
        Some(prior) => {
            all[WORD_LENGTH] = prior;
            WORD_LENGTH + 1
        }
        None => WORD_LENGTH,
    };
    let all = &all[..count];

    if all.iter().any(|list| list.is_empty()) {
        return;
    }

    let Some((driver_index, driver)) = all.iter().enumerate().min_by_key(|(_, list)| list.len())
    else {
        return;
    };

    for &id in *driver {
        let in_all = all
            .iter()
            .enumerate()
            .all(|(i, list)| i == driver_index || list.binary_search(&id).is_ok());
        if in_all {
            visit(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Alphabet;
    use crate::wordlists::english_lexicon;

    fn setup(words: &[&str]) -> (Lexicon, CandidateIndex) {
        let lexicon = Lexicon::parse(Alphabet::english(), words).unwrap();
        let index = CandidateIndex::build(&lexicon);
        (lexicon, index)
    }

    fn word<'a>(lexicon: &'a Lexicon, text: &str) -> &'a Word {
        lexicon.word(lexicon.id_of(text).unwrap())
    }

    fn texts<'a>(lexicon: &'a Lexicon, set: &CandidateSet) -> Vec<&'a str> {
        set.iter().map(|id| lexicon.word(id).text()).collect()
    }

    /// Candidates `c` of `pool` with evaluate(c, guess) == feedback
    fn brute_force(
        lexicon: &Lexicon,
        pool: &CandidateSet,
        feedback: Feedback,
        guess: &Word,
    ) -> CandidateSet {
        CandidateSet::from_sorted(
            pool.iter()
                .filter(|&id| Feedback::evaluate(lexicon.word(id), guess) == feedback)
                .collect(),
        )
    }

    #[test]
    fn crane_against_brave_pins_and_forbids() {
        let lexicon = english_lexicon();
        let index = CandidateIndex::build(&lexicon);
        let guess = word(&lexicon, "crane");
        let feedback = Feedback::evaluate(word(&lexicon, "brave"), guess);

        let remaining = filter(&index, &lexicon, None, feedback, guess);
        assert!(remaining.contains(lexicon.id_of("brave").unwrap()));

        let [c, r, a, n, e] = ['c', 'r', 'a', 'n', 'e'].map(|ch| Alphabet::english().index_of(ch).unwrap());
        for id in remaining.iter() {
            let w = lexicon.word(id);
            assert_eq!(w.letter_at(1), r);
            assert_eq!(w.letter_at(2), a);
            assert_eq!(w.letter_at(4), e);
            assert!(!w.contains(c));
            assert!(!w.contains(n));
        }
    }

    #[test]
    fn repeated_letter_miss_means_exact_count() {
        // LLAMA against ALLOT: L at 1, another L but not at 0, exactly one A
        let (lexicon, index) = setup(&["allot", "atoll", "ladle", "lolly", "ultra", "llama"]);
        let guess = word(&lexicon, "llama");
        let feedback = Feedback::evaluate(word(&lexicon, "allot"), guess);

        let remaining = filter(&index, &lexicon, None, feedback, guess);
        assert_eq!(remaining, brute_force(&lexicon, &CandidateSet::all(&lexicon), feedback, guess));
        assert_eq!(texts(&lexicon, &remaining), ["allot"]);
    }

    #[test]
    fn repeated_present_letters_need_minimum_count() {
        let (lexicon, index) = setup(&["eerie", "elder", "ember", "geese", "speed", "erase"]);
        let guess = word(&lexicon, "geese");

        for secret in ["eerie", "elder", "speed", "erase"] {
            let feedback = Feedback::evaluate(word(&lexicon, secret), guess);
            let remaining = filter(&index, &lexicon, None, feedback, guess);
            assert_eq!(
                remaining,
                brute_force(&lexicon, &CandidateSet::all(&lexicon), feedback, guess),
                "secret {secret}"
            );
            assert!(remaining.contains(lexicon.id_of(secret).unwrap()));
        }
    }

    #[test]
    fn contradictory_feedback_yields_empty_set() {
        let (lexicon, index) = setup(&["crane", "brave", "grave"]);
        let guess = word(&lexicon, "crane");
        let feedback: Feedback = "YYYYY".parse().unwrap();

        let remaining = filter(&index, &lexicon, None, feedback, guess);
        assert!(remaining.is_empty());
        assert_eq!(filtered_len(&index, &lexicon, None, feedback, guess), 0);
    }

    #[test]
    fn matches_brute_force_on_embedded_lexicon() {
        let lexicon = english_lexicon();
        let index = CandidateIndex::build(&lexicon);
        let everything = CandidateSet::all(&lexicon);

        let guesses = ["crane", "llama", "speed", "allot", "geese", "error"];
        let secrets: Vec<WordId> = lexicon.ids().step_by(7).collect();

        for guess in guesses.iter().filter_map(|g| lexicon.id_of(g)) {
            let guess = lexicon.word(guess);
            for &secret in &secrets {
                let feedback = Feedback::evaluate(lexicon.word(secret), guess);
                let expected = brute_force(&lexicon, &everything, feedback, guess);

                let remaining = filter(&index, &lexicon, None, feedback, guess);
                assert_eq!(remaining, expected, "{guess} against {}", lexicon.word(secret));
                assert_eq!(
                    filtered_len(&index, &lexicon, None, feedback, guess),
                    expected.len()
                );
            }
        }
    }

    #[test]
    fn secret_survives_successive_rounds() {
        let lexicon = english_lexicon();
        let index = CandidateIndex::build(&lexicon);

        for secret in lexicon.ids().step_by(11) {
            let mut candidates: Option<CandidateSet> = None;
            for guess in ["crane", "doubt", "light", "speed"] {
                let guess = word(&lexicon, guess);
                let feedback = Feedback::evaluate(lexicon.word(secret), guess);
                let next = filter(&index, &lexicon, candidates.as_ref(), feedback, guess);

                assert!(next.contains(secret));
                if let Some(previous) = &candidates {
                    assert!(next.len() <= previous.len());
                    assert!(next.iter().all(|id| previous.contains(id)));
                }
                candidates = Some(next);
            }
        }
    }

    #[test]
    fn reapplying_feedback_is_idempotent() {
        let lexicon = english_lexicon();
        let index = CandidateIndex::build(&lexicon);
        let guess = word(&lexicon, "speed");
        let feedback = Feedback::evaluate(word(&lexicon, "these"), guess);

        let once = filter(&index, &lexicon, None, feedback, guess);
        let twice = filter(&index, &lexicon, Some(&once), feedback, guess);
        assert_eq!(once, twice);
    }

    #[test]
    fn candidate_set_accessors() {
        let set = CandidateSet::from_sorted(vec![WordId::new(2), WordId::new(5)]);
        assert_eq!(set.len(), 2);
        assert!(set.contains(WordId::new(5)));
        assert!(!set.contains(WordId::new(3)));
        assert_eq!(set.single(), None);

        let single = CandidateSet::from_sorted(vec![WordId::new(4)]);
        assert_eq!(single.single(), Some(WordId::new(4)));
        assert!(CandidateSet::default().is_empty());
    }
}
