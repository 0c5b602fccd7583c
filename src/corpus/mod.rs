//! Word corpus: the lexicon and the structures precomputed from it

mod index;
mod lexicon;
mod shortlist;

pub use index::CandidateIndex;
pub use lexicon::{GuessError, Lexicon, LexiconError, WordId};
pub use shortlist::Shortlist;

/// A lexicon together with its candidate index
///
/// Built once per word list load and then only borrowed.
#[derive(Debug, Clone)]
pub struct Corpus {
    lexicon: Lexicon,
    index: CandidateIndex,
}

impl Corpus {
    /// Index a lexicon
    #[must_use]
    pub fn new(lexicon: Lexicon) -> Self {
        let index = CandidateIndex::build(&lexicon);
        Self { lexicon, index }
    }

    #[inline]
    #[must_use]
    pub const fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    #[inline]
    #[must_use]
    pub const fn index(&self) -> &CandidateIndex {
        &self.index
    }
}
