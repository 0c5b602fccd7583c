//! Per-letter feedback and the duplicate-aware evaluation rule
//!
//! Each guess position is classified as:
//! - `InPosition` (🟩): the secret has the same letter at that position
//! - `WrongPosition` (🟨): the secret still has an unclaimed copy of the letter
//! - `NotInWord` (⬜): every copy of the letter in the secret is already claimed
//!
//! Exact matches claim their copies first; the remaining copies are handed
//! out to the other guess positions from left to right.

use super::{WORD_LENGTH, Word};
use std::fmt;
use std::str::FromStr;

/// Classification of a single guess position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharResult {
    NotInWord,
    WrongPosition,
    InPosition,
}

impl CharResult {
    /// Emoji tile used in game transcripts
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::NotInWord => '⬜',
            Self::WrongPosition => '🟨',
            Self::InPosition => '🟩',
        }
    }

    /// ASCII code accepted back by the parser
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::NotInWord => '-',
            Self::WrongPosition => 'Y',
            Self::InPosition => 'G',
        }
    }

    fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'G' | 'g' | '🟩' | '2' => Some(Self::InPosition),
            'Y' | 'y' | '🟨' | '1' => Some(Self::WrongPosition),
            '-' | '_' | '.' | '⬜' | '⬛' | '0' | 'B' | 'b' | 'X' | 'x' => Some(Self::NotInWord),
            _ => None,
        }
    }
}

/// Feedback for one guess: one [`CharResult`] per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([CharResult; WORD_LENGTH]);

/// Error type for feedback strings typed by a player
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackParseError {
    InvalidLength(usize),
    InvalidSymbol(char),
}

impl fmt::Display for FeedbackParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Feedback must have {WORD_LENGTH} symbols, got {len}")
            }
            Self::InvalidSymbol(symbol) => {
                write!(f, "Unknown feedback symbol '{symbol}' (use G, Y or -)")
            }
        }
    }
}

impl std::error::Error for FeedbackParseError {}

impl Feedback {
    /// Every position matched
    pub const ALL_HIT: Self = Self([CharResult::InPosition; WORD_LENGTH]);

    #[inline]
    #[must_use]
    pub const fn new(results: [CharResult; WORD_LENGTH]) -> Self {
        Self(results)
    }

    /// Compute the feedback shown when `guess` is played against `secret`
    ///
    /// # Examples
    /// ```
    /// use wordle_sieve::core::{Alphabet, Feedback, Word};
    ///
    /// let alphabet = Alphabet::english();
    /// let secret = Word::parse("brave", &alphabet).unwrap();
    /// let guess = Word::parse("crane", &alphabet).unwrap();
    ///
    /// let feedback = Feedback::evaluate(&secret, &guess);
    /// assert_eq!(feedback.to_string(), "⬜🟩🟩⬜🟩");
    /// assert!(!feedback.is_win());
    /// ```
    #[must_use]
    pub fn evaluate(secret: &Word, guess: &Word) -> Self {
        let secret = secret.letters();
        let guess = guess.letters();
        let mut results = [CharResult::NotInWord; WORD_LENGTH];

        // Secret letters left over once exact matches have claimed theirs
        let mut spare = [None; WORD_LENGTH];
        // Allow: Index needed to compare guess[i] with secret[i] and set results[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if guess[i] == secret[i] {
                results[i] = CharResult::InPosition;
            } else {
                spare[i] = Some(secret[i]);
            }
        }

        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if results[i] == CharResult::InPosition {
                continue;
            }
            if let Some(slot) = spare.iter_mut().find(|slot| **slot == Some(guess[i])) {
                *slot = None;
                results[i] = CharResult::WrongPosition;
            }
        }

        Self(results)
    }

    /// True when every position is `InPosition`
    #[inline]
    #[must_use]
    pub fn is_win(self) -> bool {
        self == Self::ALL_HIT
    }

    #[inline]
    #[must_use]
    pub const fn results(&self) -> &[CharResult; WORD_LENGTH] {
        &self.0
    }

    /// Result at a specific position (0-4)
    #[inline]
    #[must_use]
    pub const fn get(&self, position: usize) -> CharResult {
        self.0[position]
    }

    /// Number of positions with the given result
    #[must_use]
    pub fn count(&self, result: CharResult) -> usize {
        self.0.iter().filter(|&&r| r == result).count()
    }

    /// ASCII rendering such as `-GG-G`
    #[must_use]
    pub fn to_code(self) -> String {
        self.0.iter().map(|r| r.code()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for result in &self.0 {
            write!(f, "{}", result.symbol())?;
        }
        Ok(())
    }
}

impl FromStr for Feedback {
    type Err = FeedbackParseError;

    /// Parse `G`/`Y`/`-` codes or emoji tiles, e.g. `"GY-GY"` or `"🟩🟨⬜🟩🟨"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s.trim().chars().collect();
        if symbols.len() != WORD_LENGTH {
            return Err(FeedbackParseError::InvalidLength(symbols.len()));
        }

        let mut results = [CharResult::NotInWord; WORD_LENGTH];
        for (slot, &symbol) in results.iter_mut().zip(&symbols) {
            *slot = CharResult::from_symbol(symbol)
                .ok_or(FeedbackParseError::InvalidSymbol(symbol))?;
        }

        Ok(Self(results))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Alphabet;
    use super::CharResult::{InPosition as Hit, NotInWord as Miss, WrongPosition as Near};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn word(text: &str) -> Word {
        Word::parse(text, &Alphabet::english()).unwrap()
    }

    fn evaluate(secret: &str, guess: &str) -> Feedback {
        Feedback::evaluate(&word(secret), &word(guess))
    }

    #[test]
    fn all_miss() {
        assert_eq!(evaluate("fghij", "abcde"), Feedback::new([Miss; 5]));
    }

    #[test]
    fn self_evaluation_is_win() {
        for text in ["crane", "llama", "speed", "aaaaa"] {
            let feedback = evaluate(text, text);
            assert_eq!(feedback, Feedback::ALL_HIT);
            assert!(feedback.is_win());
        }
    }

    #[test]
    fn crane_against_brave() {
        assert_eq!(
            evaluate("brave", "crane"),
            Feedback::new([Miss, Hit, Hit, Miss, Hit])
        );
    }

    #[test]
    fn llama_against_allot_apportions_copies() {
        // ALLOT has two L's: position 1 is exact, position 0 takes the other
        let feedback = evaluate("allot", "llama");
        assert_eq!(feedback, Feedback::new([Near, Hit, Near, Miss, Miss]));
    }

    #[test]
    fn exact_match_claims_before_earlier_misplaced_copy() {
        // Only one O left for the first O after the exact match at position 3
        assert_eq!(
            evaluate("floor", "robot"),
            Feedback::new([Near, Near, Miss, Hit, Miss])
        );
        // The only E in the secret goes to the exact match, not the earlier E's
        assert_eq!(
            evaluate("spine", "geese"),
            Feedback::new([Miss, Miss, Miss, Near, Hit])
        );
        assert_eq!(
            evaluate("creep", "geese"),
            Feedback::new([Miss, Near, Hit, Miss, Miss])
        );
    }

    #[test]
    fn surplus_copies_are_misses() {
        assert_eq!(
            evaluate("erase", "speed"),
            Feedback::new([Near, Miss, Near, Near, Miss])
        );
        assert_eq!(
            evaluate("abbey", "eeeee"),
            Feedback::new([Miss, Miss, Miss, Hit, Miss])
        );
    }

    #[test]
    fn counts_and_rendering() {
        let feedback = evaluate("brave", "crane");
        assert_eq!(feedback.count(Hit), 3);
        assert_eq!(feedback.count(Near), 0);
        assert_eq!(feedback.count(Miss), 2);
        assert_eq!(feedback.to_code(), "-GG-G");
        assert_eq!(feedback.to_string(), "⬜🟩🟩⬜🟩");
    }

    #[test]
    fn parse_codes_and_emoji() {
        let p1: Feedback = "GY-GY".parse().unwrap();
        let p2: Feedback = "🟩🟨⬜🟩🟨".parse().unwrap();
        let p3: Feedback = "gy_gy".parse().unwrap();
        let p4: Feedback = "21021".parse().unwrap();

        assert_eq!(p1, Feedback::new([Hit, Near, Miss, Hit, Near]));
        assert_eq!(p1, p2);
        assert_eq!(p1, p3);
        assert_eq!(p1, p4);
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert_eq!(
            "GYG".parse::<Feedback>(),
            Err(FeedbackParseError::InvalidLength(3))
        );
        assert_eq!(
            "GYGGYG".parse::<Feedback>(),
            Err(FeedbackParseError::InvalidLength(6))
        );
        assert_eq!(
            "GQGGY".parse::<Feedback>(),
            Err(FeedbackParseError::InvalidSymbol('Q'))
        );
    }

    #[test]
    fn display_round_trips_through_parser() {
        let feedback = evaluate("allot", "llama");
        assert_eq!(feedback.to_string().parse::<Feedback>(), Ok(feedback));
        assert_eq!(feedback.to_code().parse::<Feedback>(), Ok(feedback));
    }

    #[test]
    fn random_pairs_respect_letter_supply() {
        // Small alphabet so repeated letters are common
        let alphabet = Alphabet::new("abcde").unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let mut random_word = || {
            let text: String = (0..WORD_LENGTH)
                .map(|_| alphabet.letter(rng.random_range(0..5)))
                .collect();
            Word::parse(&text, &alphabet).unwrap()
        };

        for _ in 0..2000 {
            let secret = random_word();
            let guess = random_word();
            let feedback = Feedback::evaluate(&secret, &guess);

            let exact = (0..WORD_LENGTH)
                .filter(|&i| secret.letter_at(i) == guess.letter_at(i))
                .count();
            assert_eq!(feedback.count(Hit), exact);

            for letter in 0..5u8 {
                let marked = (0..WORD_LENGTH)
                    .filter(|&i| guess.letter_at(i) == letter && feedback.get(i) != Miss)
                    .count();
                assert_eq!(
                    marked,
                    secret.count_of(letter).min(guess.count_of(letter)),
                    "{guess} against {secret}"
                );
            }
        }
    }
}
