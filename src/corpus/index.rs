//! Precomputed letter/position index over a lexicon
//!
//! Three families of ascending `WordId` lists, one list per letter (and per
//! position where relevant):
//! - `forbidden[letter]`: words without the letter
//! - `in_position[pos][letter]`: words with the letter at `pos`
//! - `wrong_position[pos][letter]`: words with the letter, but not at `pos`
//!
//! The index is built once and only read afterwards, so it can be shared
//! freely between sessions and worker threads.

use super::{Lexicon, WordId};
use crate::core::WORD_LENGTH;

/// Read-only candidate index
#[derive(Debug, Clone)]
pub struct CandidateIndex {
    alphabet_len: usize,
    word_count: usize,
    forbidden: Vec<Vec<WordId>>,
    // Flattened [position][letter] tables
    in_position: Vec<Vec<WordId>>,
    wrong_position: Vec<Vec<WordId>>,
}

impl CandidateIndex {
    /// Build the index with a single pass over the lexicon
    ///
    /// Words are visited in ascending id order, so every list comes out sorted
    /// without an explicit sort.
    ///
    /// # Examples
    /// ```
    /// use wordle_sieve::core::Alphabet;
    /// use wordle_sieve::corpus::{CandidateIndex, Lexicon};
    ///
    /// let lexicon = Lexicon::parse(Alphabet::english(), ["crane", "brave", "allot"]).unwrap();
    /// let index = CandidateIndex::build(&lexicon);
    ///
    /// let r = Alphabet::english().index_of('r').unwrap();
    /// assert_eq!(index.in_position(1, r).len(), 2);
    /// assert_eq!(index.forbidden(r).len(), 1);
    /// ```
    #[must_use]
    pub fn build(lexicon: &Lexicon) -> Self {
        let alphabet_len = lexicon.alphabet().len();
        let mut forbidden = vec![Vec::new(); alphabet_len];
        let mut in_position = vec![Vec::new(); alphabet_len * WORD_LENGTH];
        let mut wrong_position = vec![Vec::new(); alphabet_len * WORD_LENGTH];

        for (id, word) in lexicon.entries() {
            for (letter, forbidden_list) in (0..=u8::MAX).zip(forbidden.iter_mut()) {
                if !word.contains(letter) {
                    forbidden_list.push(id);
                    continue;
                }

                for position in 0..WORD_LENGTH {
                    let slot = position * alphabet_len + usize::from(letter);
                    if word.letter_at(position) == letter {
                        in_position[slot].push(id);
                    } else {
                        wrong_position[slot].push(id);
                    }
                }
            }
        }

        Self {
            alphabet_len,
            word_count: lexicon.len(),
            forbidden,
            in_position,
            wrong_position,
        }
    }

    /// Number of words the index was built from
    #[inline]
    #[must_use]
    pub const fn word_count(&self) -> usize {
        self.word_count
    }

    #[inline]
    #[must_use]
    pub const fn alphabet_len(&self) -> usize {
        self.alphabet_len
    }

    /// Words not containing `letter`
    #[inline]
    #[must_use]
    pub fn forbidden(&self, letter: u8) -> &[WordId] {
        &self.forbidden[usize::from(letter)]
    }

    /// Words with `letter` at `position`
    #[inline]
    #[must_use]
    pub fn in_position(&self, position: usize, letter: u8) -> &[WordId] {
        &self.in_position[self.slot(position, letter)]
    }

    /// Words containing `letter` somewhere other than `position`
    #[inline]
    #[must_use]
    pub fn wrong_position(&self, position: usize, letter: u8) -> &[WordId] {
        &self.wrong_position[self.slot(position, letter)]
    }

    #[inline]
    fn slot(&self, position: usize, letter: u8) -> usize {
        debug_assert!(position < WORD_LENGTH, "position out of range");
        position * self.alphabet_len + usize::from(letter)
    }
}
