//! Core domain types for the game
//!
//! Letters, words and per-letter feedback. Everything here is pure and
//! independent of any particular word list.

mod alphabet;
mod feedback;
mod word;

pub use alphabet::{Alphabet, AlphabetError};
pub use feedback::{CharResult, Feedback, FeedbackParseError};
pub use word::{Word, WordError};

/// Number of letters in every word of the game
pub const WORD_LENGTH: usize = 5;
