//! Opener survey command
//!
//! Ranks shortlisted first guesses by the average candidate count they leave.

use crate::corpus::Shortlist;
use crate::output::formatters::progress_bar;
use crate::solver::{GuessSelector, OpenerScore, chunk, survey_openers_with};
use colored::Colorize;
use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

/// One slice `k` of `n` of the opener list, written `k/n` with `k` from 1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkSpec {
    pub index: usize,
    pub count: usize,
}

impl FromStr for ChunkSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (k, n) = s
            .split_once('/')
            .ok_or_else(|| format!("Expected k/n, got '{s}'"))?;
        let k: usize = k.trim().parse().map_err(|e| format!("Invalid chunk '{k}': {e}"))?;
        let n: usize = n.trim().parse().map_err(|e| format!("Invalid chunk count '{n}': {e}"))?;
        if n == 0 || k == 0 || k > n {
            return Err(format!("Chunk must satisfy 1 <= k <= n, got {k}/{n}"));
        }
        Ok(Self { index: k - 1, count: n })
    }
}

impl fmt::Display for ChunkSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.index + 1, self.count)
    }
}

/// Survey options
#[derive(Debug, Clone, Copy, Default)]
pub struct SurveyConfig {
    /// Shortlist size limit (`None` = every distinct-letter word)
    pub shortlist_size: Option<usize>,
    pub chunk: Option<ChunkSpec>,
}

/// Ranked survey output
pub struct SurveyResult {
    pub ranked: Vec<OpenerScore>,
    /// Openers considered in this run
    pub surveyed: usize,
    pub shortlist_len: usize,
    pub duration: Duration,
}

/// Run the opener survey over the shortlist (or one chunk of it)
#[must_use]
pub fn run_survey(selector: &GuessSelector<'_>, config: SurveyConfig) -> SurveyResult {
    let lexicon = selector.lexicon();
    let shortlist = Shortlist::build(lexicon, config.shortlist_size);
    let openers = match config.chunk {
        Some(spec) => chunk(shortlist.ids(), spec.index, spec.count).unwrap_or_default(),
        None => shortlist.ids(),
    };

    println!(
        "🔎 Surveying {} of {} shortlisted openers against {} secrets...",
        openers.len(),
        shortlist.len(),
        lexicon.len()
    );

    let pb = progress_bar(openers.len() as u64);
    let start = Instant::now();
    let ranked = survey_openers_with(
        selector.index(),
        lexicon,
        openers,
        selector.is_parallel(),
        |_| pb.inc(1),
    );
    pb.finish_with_message("Complete!");

    SurveyResult {
        surveyed: openers.len(),
        shortlist_len: shortlist.len(),
        ranked,
        duration: start.elapsed(),
    }
}

/// Print the best `top` openers
pub fn print_survey_result(result: &SurveyResult, selector: &GuessSelector<'_>, top: usize) {
    let lexicon = selector.lexicon();

    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "OPENER SURVEY".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!(
        "\n  Surveyed {} of {} openers in {:.2}s\n",
        result.surveyed,
        result.shortlist_len,
        result.duration.as_secs_f64()
    );

    for (rank, score) in result.ranked.iter().take(top).enumerate() {
        println!(
            "  {:>3}. {}  avg {}  worst {}",
            rank + 1,
            lexicon.word(score.word).text().to_uppercase().bright_white().bold(),
            format!("{:8.3}", score.average).bright_yellow(),
            score.worst
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::CandidateIndex;
    use crate::wordlists::english_lexicon;

    #[test]
    fn chunk_spec_parses() {
        assert_eq!("2/4".parse::<ChunkSpec>(), Ok(ChunkSpec { index: 1, count: 4 }));
        assert_eq!(ChunkSpec { index: 1, count: 4 }.to_string(), "2/4");
        assert!("0/4".parse::<ChunkSpec>().is_err());
        assert!("5/4".parse::<ChunkSpec>().is_err());
        assert!("1/0".parse::<ChunkSpec>().is_err());
        assert!("14".parse::<ChunkSpec>().is_err());
    }

    #[test]
    fn chunks_partition_the_survey() {
        let lexicon = english_lexicon();
        let index = CandidateIndex::build(&lexicon);
        let selector = GuessSelector::new(&index, &lexicon);

        let whole = run_survey(&selector, SurveyConfig { shortlist_size: Some(9), chunk: None });
        assert_eq!(whole.surveyed, 9);

        let mut parts = 0;
        for k in 0..2 {
            let config = SurveyConfig {
                shortlist_size: Some(9),
                chunk: Some(ChunkSpec { index: k, count: 2 }),
            };
            let part = run_survey(&selector, config);
            for score in &part.ranked {
                assert!(whole.ranked.contains(score));
            }
            parts += part.surveyed;
        }
        assert_eq!(parts, 9);
    }
}
