//! Wordle solving algorithms
//!
//! Elimination narrows the candidate set after each round, scoring rates a
//! guess by how far it would narrow it, and the selector picks the best one.

mod filter;
mod scoring;
mod selector;
mod session;
mod survey;

pub use filter::{CandidateSet, filter, filtered_len};
pub use scoring::{GuessScore, score_guess};
pub use selector::{DEFAULT_SCALE_GUARD, GuessSelector, ScaleGuard};
pub use session::{ExhaustReason, Round, Session, SessionError, SessionState, play};
pub use survey::{OpenerScore, chunk, rank_openers, score_opener, survey_openers, survey_openers_with};
