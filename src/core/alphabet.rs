//! Closed letter alphabets
//!
//! Words are stored as letter indices into an [`Alphabet`], so the candidate
//! index can address its buckets with plain integers instead of characters.

use std::fmt;
use std::str::FromStr;

const ENGLISH_LETTERS: &str = "abcdefghijklmnopqrstuvwxyz";
const SPANISH_LETTERS: &str = "abcdefghijklmnñopqrstuvwxyz";

/// An ordered, duplicate-free set of lowercase letters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    letters: Vec<char>,
}

/// Error type for alphabet definitions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlphabetError {
    Empty,
    TooManyLetters(usize),
    DuplicateLetter(char),
}

impl fmt::Display for AlphabetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Alphabet must contain at least one letter"),
            Self::TooManyLetters(count) => {
                write!(f, "Alphabet may hold at most 255 letters, got {count}")
            }
            Self::DuplicateLetter(letter) => write!(f, "Letter '{letter}' appears twice"),
        }
    }
}

impl std::error::Error for AlphabetError {}

impl Alphabet {
    /// Build an alphabet from its letters, in index order
    ///
    /// Letters are lowercased before they are stored.
    ///
    /// # Errors
    /// Returns `AlphabetError` if the definition is empty, holds more than 255
    /// letters, or repeats a letter.
    ///
    /// # Examples
    /// ```
    /// use wordle_sieve::core::Alphabet;
    ///
    /// let abc = Alphabet::new("ABC").unwrap();
    /// assert_eq!(abc.len(), 3);
    /// assert_eq!(abc.index_of('b'), Some(1));
    /// assert!(Alphabet::new("aba").is_err());
    /// ```
    pub fn new(definition: &str) -> Result<Self, AlphabetError> {
        let mut letters: Vec<char> = Vec::new();
        for ch in definition.chars().filter_map(|c| c.to_lowercase().next()) {
            if letters.contains(&ch) {
                return Err(AlphabetError::DuplicateLetter(ch));
            }
            letters.push(ch);
        }

        if letters.is_empty() {
            return Err(AlphabetError::Empty);
        }
        if letters.len() > usize::from(u8::MAX) {
            return Err(AlphabetError::TooManyLetters(letters.len()));
        }

        Ok(Self { letters })
    }

    /// The 26-letter English alphabet
    #[must_use]
    pub fn english() -> Self {
        Self {
            letters: ENGLISH_LETTERS.chars().collect(),
        }
    }

    /// The 27-letter Spanish alphabet (with ñ after n)
    #[must_use]
    pub fn spanish() -> Self {
        Self {
            letters: SPANISH_LETTERS.chars().collect(),
        }
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always false; construction rejects empty alphabets
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Index of a letter, case-insensitive
    #[must_use]
    pub fn index_of(&self, letter: char) -> Option<u8> {
        let lower = letter.to_lowercase().next()?;
        self.letters
            .iter()
            .position(|&c| c == lower)
            .and_then(|i| u8::try_from(i).ok())
    }

    /// Letter stored at `index`
    ///
    /// # Panics
    /// Panics if `index` is not below [`Alphabet::len`].
    #[inline]
    #[must_use]
    pub fn letter(&self, index: u8) -> char {
        self.letters[usize::from(index)]
    }

    /// All letters in index order
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::english()
    }
}

impl FromStr for Alphabet {
    type Err = AlphabetError;

    /// Accepts the names `english` and `spanish`, or a literal letter list
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "english" | "en" => Ok(Self::english()),
            "spanish" | "es" => Ok(Self::spanish()),
            letters => Self::new(letters),
        }
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in &self.letters {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}
