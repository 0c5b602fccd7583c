//! Word lists for Wordle solving
//!
//! Provides the embedded English list compiled into the binary, and loading
//! of custom lists from disk.

mod embedded;
pub mod loader;

pub use embedded::{ENGLISH, ENGLISH_COUNT};

use crate::core::Alphabet;
use crate::corpus::Lexicon;

/// Lexicon over the embedded English list
///
/// # Panics
///
/// Panics if the embedded list is empty, which build.rs rules out.
#[must_use]
pub fn english_lexicon() -> Lexicon {
    let alphabet = Alphabet::english();
    let words = loader::words_from_slice(ENGLISH, &alphabet);
    Lexicon::new(alphabet, words).expect("embedded word list is not empty")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_count_matches_const() {
        assert_eq!(ENGLISH.len(), ENGLISH_COUNT);
    }

    #[test]
    fn english_words_are_valid() {
        for &word in ENGLISH {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn english_lexicon_has_no_duplicates() {
        let lexicon = english_lexicon();
        assert_eq!(lexicon.len(), ENGLISH_COUNT);
    }

    #[test]
    fn lookup_by_text() {
        let lexicon = english_lexicon();
        let crane = lexicon.id_of("crane").unwrap();
        assert_eq!(lexicon.word(crane).text(), "crane");
        assert!(lexicon.id_of("fjord").is_none());
    }
}
