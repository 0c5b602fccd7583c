//! Word list loading utilities
//!
//! Reads lexicon entries from files or embedded constants. Entries are
//! whitespace-separated; anything that is not a valid word over the alphabet
//! is skipped and counted.

use crate::core::{Alphabet, Word};
use std::fs;
use std::io;
use std::path::Path;

/// Words read from a list, plus how many entries were rejected
#[derive(Debug, Clone, Default)]
pub struct LoadedWords {
    pub words: Vec<Word>,
    pub skipped: usize,
}

/// Load words from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_sieve::core::Alphabet;
/// use wordle_sieve::wordlists::loader::load_from_file;
///
/// let loaded = load_from_file("data/words.txt", &Alphabet::english()).unwrap();
/// println!("Loaded {} words ({} skipped)", loaded.words.len(), loaded.skipped);
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, alphabet: &Alphabet) -> io::Result<LoadedWords> {
    let content = fs::read_to_string(path)?;
    Ok(parse_entries(content.split_whitespace(), alphabet))
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_sieve::core::Alphabet;
/// use wordle_sieve::wordlists::ENGLISH;
/// use wordle_sieve::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(ENGLISH, &Alphabet::english());
/// assert_eq!(words.len(), ENGLISH.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str], alphabet: &Alphabet) -> Vec<Word> {
    parse_entries(slice.iter().copied(), alphabet).words
}

fn parse_entries<'s>(entries: impl Iterator<Item = &'s str>, alphabet: &Alphabet) -> LoadedWords {
    let mut loaded = LoadedWords::default();
    for entry in entries {
        match Word::parse(entry, alphabet) {
            Ok(word) => loaded.words.push(word),
            Err(_) => loaded.skipped += 1,
        }
    }
    loaded
}
