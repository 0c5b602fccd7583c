//! Wordle Sieve
//!
//! A Wordle engine that answers "which words are still possible?" from a
//! precomputed letter/position index instead of rescanning the word list,
//! and picks each next guess by one-ply search over the whole lexicon.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_sieve::core::Feedback;
//! use wordle_sieve::corpus::CandidateIndex;
//! use wordle_sieve::solver::{GuessSelector, filter};
//! use wordle_sieve::wordlists::english_lexicon;
//!
//! let lexicon = english_lexicon();
//! let index = CandidateIndex::build(&lexicon);
//!
//! let guess = lexicon.word(lexicon.id_of("crane").unwrap());
//! let secret = lexicon.word(lexicon.id_of("brave").unwrap());
//! let feedback = Feedback::evaluate(secret, guess);
//!
//! let candidates = filter(&index, &lexicon, None, feedback, guess);
//! assert!(candidates.contains(lexicon.id_of("brave").unwrap()));
//!
//! let selector = GuessSelector::new(&index, &lexicon);
//! let next = selector.select_next_guess(&candidates, &[lexicon.id_of("crane").unwrap()]);
//! assert!(next.is_some());
//! ```

// Core domain types
pub mod core;

// Lexicon, index and shortlist
pub mod corpus;

// Solving algorithms
pub mod solver;

// Solver settings
pub mod config;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
