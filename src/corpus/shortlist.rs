//! Ranked opener shortlist
//!
//! Words with five distinct letters, ranked by how common their letters are
//! across the whole corpus. Only used to limit which words are tried as
//! openers; hypothetical secrets always cover the full lexicon.

use super::{Lexicon, WordId};

/// Ranked subset of the lexicon, best-scored first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortlist {
    ids: Vec<WordId>,
    scores: Vec<usize>,
}

impl Shortlist {
    /// Rank distinct-letter words by summed letter frequency
    ///
    /// A letter's frequency is its total number of occurrences over every
    /// word of the lexicon. Ties keep lexicon order. With `max_size` the list
    /// is truncated to the best `max_size` words.
    ///
    /// # Examples
    /// ```
    /// use wordle_sieve::core::Alphabet;
    /// use wordle_sieve::corpus::{Lexicon, Shortlist};
    ///
    /// let lexicon = Lexicon::parse(Alphabet::english(), ["llama", "crane", "brave", "fjord"]).unwrap();
    /// let shortlist = Shortlist::build(&lexicon, Some(2));
    ///
    /// let words: Vec<&str> = shortlist.ids().iter().map(|&id| lexicon.word(id).text()).collect();
    /// assert_eq!(words, ["crane", "brave"]);
    /// ```
    #[must_use]
    pub fn build(lexicon: &Lexicon, max_size: Option<usize>) -> Self {
        let mut frequency = vec![0usize; lexicon.alphabet().len()];
        for word in lexicon.words() {
            for &letter in word.letters() {
                frequency[usize::from(letter)] += 1;
            }
        }

        let mut ranked: Vec<(WordId, usize)> = lexicon
            .entries()
            .filter(|(_, word)| word.has_distinct_letters())
            .map(|(id, word)| {
                let score = word
                    .letters()
                    .iter()
                    .map(|&letter| frequency[usize::from(letter)])
                    .sum();
                (id, score)
            })
            .collect();

        // Stable sort: equal scores stay in lexicon order
        ranked.sort_by(|(_, a), (_, b)| b.cmp(a));
        if let Some(max) = max_size {
            ranked.truncate(max);
        }

        let (ids, scores) = ranked.into_iter().unzip();
        Self { ids, scores }
    }

    /// Ids in rank order
    #[inline]
    #[must_use]
    pub fn ids(&self) -> &[WordId] {
        &self.ids
    }

    /// Letter-frequency scores, parallel to [`Shortlist::ids`]
    #[inline]
    #[must_use]
    pub fn scores(&self) -> &[usize] {
        &self.scores
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
