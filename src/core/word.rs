//! Word representation
//!
//! A Word stores its lowercase text together with the alphabet index of each
//! letter, which is what the index and the feedback rule work with.

use super::{Alphabet, WORD_LENGTH};
use std::fmt;

/// A validated 5-letter word
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    letters: [u8; WORD_LENGTH],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    UnknownLetter(char),
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be exactly {WORD_LENGTH} letters, got {len}")
            }
            Self::UnknownLetter(letter) => {
                write!(f, "Letter '{letter}' is not part of the alphabet")
            }
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Parse a word against an alphabet
    ///
    /// Input is trimmed and lowercased. Length is measured in characters, so
    /// multi-byte letters such as `ñ` count once.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5 letters
    /// - A character is not part of the alphabet
    ///
    /// # Examples
    /// ```
    /// use wordle_sieve::core::{Alphabet, Word};
    ///
    /// let word = Word::parse("Crane", &Alphabet::english()).unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::parse("too long", &Alphabet::english()).is_err());
    /// assert!(Word::parse("niño", &Alphabet::spanish()).is_err());
    /// assert!(Word::parse("baños", &Alphabet::spanish()).is_ok());
    /// ```
    pub fn parse(text: &str, alphabet: &Alphabet) -> Result<Self, WordError> {
        let text = text.trim().to_lowercase();

        let length = text.chars().count();
        if length != WORD_LENGTH {
            return Err(WordError::InvalidLength(length));
        }

        let mut letters = [0u8; WORD_LENGTH];
        for (slot, ch) in letters.iter_mut().zip(text.chars()) {
            *slot = alphabet
                .index_of(ch)
                .ok_or(WordError::UnknownLetter(ch))?;
        }

        Ok(Self { text, letters })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Alphabet indices of the letters, in position order
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; WORD_LENGTH] {
        &self.letters
    }

    /// Letter index at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> u8 {
        self.letters[position]
    }

    /// Check if the word contains a letter
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: u8) -> bool {
        self.letters.contains(&letter)
    }

    /// Number of copies of a letter
    #[inline]
    #[must_use]
    pub fn count_of(&self, letter: u8) -> usize {
        self.letters.iter().filter(|&&l| l == letter).count()
    }

    /// True when no letter repeats
    #[must_use]
    pub fn has_distinct_letters(&self) -> bool {
        self.letters
            .iter()
            .enumerate()
            .all(|(i, letter)| !self.letters[i + 1..].contains(letter))
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
