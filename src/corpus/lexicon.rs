//! The ordered word list every other component refers to by `WordId`

use crate::core::{Alphabet, Word, WordError};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rustc_hash::FxHashMap;
use std::fmt;

/// Position of a word in its [`Lexicon`]
///
/// Candidate lists are kept sorted by `WordId`, so comparisons and
/// intersections never touch the word text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WordId(u32);

impl WordId {
    #[inline]
    #[must_use]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Index into [`Lexicon::words`]
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for WordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Error type for lexicon construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexiconError {
    Empty,
    TooLarge(usize),
    InvalidEntry { entry: usize, source: WordError },
}

impl fmt::Display for LexiconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Lexicon contains no words"),
            Self::TooLarge(count) => write!(f, "Lexicon is too large ({count} words)"),
            Self::InvalidEntry { entry, source } => {
                write!(f, "Entry {} is not a valid word: {source}", entry + 1)
            }
        }
    }
}

impl std::error::Error for LexiconError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidEntry { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Error type for guesses submitted from outside the engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    Word(WordError),
    OutOfVocabulary(String),
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Word(err) => write!(f, "Invalid word: {err}"),
            Self::OutOfVocabulary(word) => write!(f, "Word '{word}' not in word list"),
        }
    }
}

impl std::error::Error for GuessError {}

impl From<WordError> for GuessError {
    fn from(err: WordError) -> Self {
        Self::Word(err)
    }
}

/// Immutable ordered word list
///
/// Each word's position is its [`WordId`]. Duplicates are dropped when the
/// lexicon is built, keeping the first occurrence.
#[derive(Debug, Clone)]
pub struct Lexicon {
    alphabet: Alphabet,
    words: Vec<Word>,
    ids: FxHashMap<String, WordId>,
}

impl Lexicon {
    /// Build a lexicon from words parsed against `alphabet`
    ///
    /// # Errors
    /// Returns `LexiconError::Empty` when no words are given, or
    /// `LexiconError::TooLarge` when the ids would not fit in 32 bits.
    pub fn new(alphabet: Alphabet, words: Vec<Word>) -> Result<Self, LexiconError> {
        let mut unique = Vec::with_capacity(words.len());
        let mut ids = FxHashMap::default();

        for word in words {
            if ids.contains_key(word.text()) {
                continue;
            }
            let id = u32::try_from(unique.len()).map_err(|_| LexiconError::TooLarge(unique.len()))?;
            ids.insert(word.text().to_string(), WordId(id));
            unique.push(word);
        }

        if unique.is_empty() {
            return Err(LexiconError::Empty);
        }

        Ok(Self {
            alphabet,
            words: unique,
            ids,
        })
    }

    /// Parse every entry strictly, rejecting the first invalid one
    ///
    /// # Errors
    /// Returns `LexiconError::InvalidEntry` naming the offending entry, or any
    /// error from [`Lexicon::new`].
    ///
    /// # Examples
    /// ```
    /// use wordle_sieve::core::Alphabet;
    /// use wordle_sieve::corpus::Lexicon;
    ///
    /// let lexicon = Lexicon::parse(Alphabet::english(), ["crane", "brave"]).unwrap();
    /// assert_eq!(lexicon.len(), 2);
    /// assert!(Lexicon::parse(Alphabet::english(), ["crane", "toolong"]).is_err());
    /// ```
    pub fn parse<I, S>(alphabet: Alphabet, entries: I) -> Result<Self, LexiconError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = entries
            .into_iter()
            .enumerate()
            .map(|(entry, text)| {
                Word::parse(text.as_ref(), &alphabet)
                    .map_err(|source| LexiconError::InvalidEntry { entry, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(alphabet, words)
    }

    /// Reorder the words with a seeded shuffle
    ///
    /// Ids are reassigned, so any index built from the old order must be
    /// rebuilt. Only tie-breaking between equally scored guesses changes.
    #[must_use]
    pub fn shuffled(mut self, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        self.words.shuffle(&mut rng);
        self.ids = self
            .words
            .iter()
            .zip(0u32..)
            .map(|(word, id)| (word.text().to_string(), WordId(id)))
            .collect();
        self
    }

    #[inline]
    #[must_use]
    pub const fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; construction rejects empty lexicons
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Word behind an id
    ///
    /// # Panics
    /// Panics if the id was not issued by this lexicon.
    #[inline]
    #[must_use]
    pub fn word(&self, id: WordId) -> &Word {
        &self.words[id.index()]
    }

    /// All ids in ascending order
    pub fn ids(&self) -> impl Iterator<Item = WordId> {
        (0..self.words.len() as u32).map(WordId)
    }

    /// `(id, word)` pairs in ascending id order
    pub fn entries(&self) -> impl Iterator<Item = (WordId, &Word)> {
        self.words.iter().zip(0u32..).map(|(word, id)| (WordId(id), word))
    }

    /// Exact lookup of already-normalized text
    #[must_use]
    pub fn id_of(&self, text: &str) -> Option<WordId> {
        self.ids.get(text).copied()
    }

    /// Validate user input and find its id
    ///
    /// # Errors
    /// Returns `GuessError::Word` for malformed input and
    /// `GuessError::OutOfVocabulary` for a well-formed word not in the list.
    pub fn resolve(&self, text: &str) -> Result<WordId, GuessError> {
        let word = Word::parse(text, &self.alphabet)?;
        self.id_of(word.text())
            .ok_or_else(|| GuessError::OutOfVocabulary(word.text().to_string()))
    }
}
