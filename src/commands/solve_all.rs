//! Solve every secret - comprehensive solver evaluation
//!
//! Self-plays the solver against every lexicon word (or a subset) and
//! collects statistics.

use crate::corpus::WordId;
use crate::output::formatters::progress_bar;
use crate::solver::{ExhaustReason, GuessSelector, SessionState, play};
use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Which secrets to play against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SecretSelection {
    /// Every lexicon word
    #[default]
    All,
    /// The first `n` lexicon words
    First(usize),
    /// `n` words drawn with a seeded shuffle
    Sample { size: usize, seed: u64 },
}

impl SecretSelection {
    /// Resolve to concrete secrets, in play order
    #[must_use]
    pub fn secrets(self, lexicon_len: usize) -> Vec<WordId> {
        let all = (0..lexicon_len).filter_map(|i| u32::try_from(i).ok().map(WordId::new));
        match self {
            Self::All => all.collect(),
            Self::First(n) => all.take(n).collect(),
            Self::Sample { size, seed } => {
                let mut ids: Vec<WordId> = all.collect();
                ids.shuffle(&mut StdRng::seed_from_u64(seed));
                ids.truncate(size);
                ids
            }
        }
    }
}

/// Result from playing a single secret
#[derive(Debug, Clone)]
pub struct SecretResult {
    pub secret: WordId,
    pub rounds: usize,
    pub state: SessionState,
}

/// Statistics from a solve-all run
#[derive(Debug)]
pub struct SolveAllStatistics {
    pub total_words: usize,
    pub solved: usize,
    pub failed: usize,
    pub failures: FxHashMap<ExhaustReason, usize>,
    pub round_distribution: FxHashMap<usize, usize>,
    pub total_time: Duration,
    pub average_rounds: f64,
    pub max_rounds: usize,
    pub hardest_words: Vec<(String, usize)>,
    pub opener: String,
}

/// Self-play `opener` against each selected secret
///
/// Secrets are played on the rayon pool when the selector is parallel.
#[must_use]
pub fn run_solve_all(
    selector: &GuessSelector<'_>,
    opener: WordId,
    selection: SecretSelection,
    max_rounds: usize,
) -> SolveAllStatistics {
    let lexicon = selector.lexicon();
    let secrets = selection.secrets(lexicon.len());

    println!(
        "🎯 Solving {} words starting from {}...",
        secrets.len(),
        lexicon.word(opener).text().to_uppercase().bright_green()
    );

    let pb = progress_bar(secrets.len() as u64);
    let total_start = Instant::now();

    let run = |&secret: &WordId| {
        let session = play(selector, opener, secret, max_rounds);
        pb.inc(1);
        SecretResult {
            secret,
            rounds: session.rounds().len(),
            state: session.state(),
        }
    };
    let results: Vec<SecretResult> = if selector.is_parallel() {
        secrets.par_iter().map(run).collect()
    } else {
        secrets.iter().map(run).collect()
    };

    pb.finish_with_message("Complete!");

    let mut stats = collect_statistics(selector, &results);
    stats.total_time = total_start.elapsed();
    stats.opener = lexicon.word(opener).text().to_string();
    stats
}

fn collect_statistics(selector: &GuessSelector<'_>, results: &[SecretResult]) -> SolveAllStatistics {
    let lexicon = selector.lexicon();
    let mut round_distribution = FxHashMap::default();
    let mut failures = FxHashMap::default();

    for result in results {
        match result.state {
            SessionState::Won => *round_distribution.entry(result.rounds).or_insert(0) += 1,
            SessionState::Exhausted(reason) => *failures.entry(reason).or_insert(0) += 1,
            SessionState::Guessing => {}
        }
    }

    let won = || results.iter().filter(|r| r.state == SessionState::Won);
    let solved = won().count();
    let total_rounds: usize = won().map(|r| r.rounds).sum();
    let average_rounds = if solved > 0 {
        total_rounds as f64 / solved as f64
    } else {
        0.0
    };

    let mut hardest_words: Vec<(String, usize)> = won()
        .filter(|r| r.rounds >= 5)
        .map(|r| (lexicon.word(r.secret).text().to_string(), r.rounds))
        .collect();
    hardest_words.sort_by_key(|(_, n)| std::cmp::Reverse(*n));
    hardest_words.truncate(10);

    SolveAllStatistics {
        total_words: results.len(),
        solved,
        failed: results.len() - solved,
        failures,
        round_distribution,
        total_time: Duration::ZERO,
        average_rounds,
        max_rounds: won().map(|r| r.rounds).max().unwrap_or(0),
        hardest_words,
        opener: String::new(),
    }
}

/// Print solve-all statistics
pub fn print_solve_all_statistics(stats: &SolveAllStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Solve-All Results ");
    println!("{}", "═".repeat(70));

    let total = stats.total_words.max(1) as f64;

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Opener:              {}", stats.opener.to_uppercase());
    println!("  Total words played:  {}", stats.total_words);
    println!(
        "  Successfully solved: {} {}",
        stats.solved,
        format!("({:.1}%)", stats.solved as f64 / total * 100.0).green()
    );
    if stats.failed > 0 {
        println!(
            "  Failed to solve:     {} {}",
            stats.failed,
            format!("({:.1}%)", stats.failed as f64 / total * 100.0).red()
        );
        for (reason, count) in &stats.failures {
            println!("    {reason}: {count}");
        }
    }
    println!(
        "  Average rounds:      {}",
        format!("{:.3}", stats.average_rounds).bright_yellow().bold()
    );
    println!("  Total time:          {:.2}s", stats.total_time.as_secs_f64());
    println!(
        "  Time per word:       {:.1}ms",
        stats.total_time.as_millis() as f64 / total
    );

    println!("\n📈 {}", "Round Distribution".bright_cyan().bold());
    let max_count = stats.round_distribution.values().copied().max().unwrap_or(1);
    for rounds in 1..=stats.max_rounds {
        let count = stats.round_distribution.get(&rounds).copied().unwrap_or(0);
        let percentage = count as f64 / stats.solved.max(1) as f64 * 100.0;
        let bar_len = (count * 40 / max_count.max(1)).max(usize::from(count > 0));
        let bar = format!(
            "{}{}",
            "█".repeat(bar_len).green(),
            "░".repeat(40_usize.saturating_sub(bar_len)).bright_black()
        );
        println!("  {rounds} rounds: {bar} {count:4} ({percentage:5.1}%)");
    }

    if !stats.hardest_words.is_empty() {
        println!("\n😰 {}", "Hardest Words (5+ rounds)".yellow().bold());
        for (word, rounds) in stats.hardest_words.iter().take(5) {
            println!("  {} ({} rounds)", word.to_uppercase().yellow(), rounds);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::CandidateIndex;
    use crate::wordlists::english_lexicon;

    #[test]
    fn selection_first_and_all() {
        assert_eq!(SecretSelection::All.secrets(4).len(), 4);
        let first = SecretSelection::First(2).secrets(4);
        assert_eq!(first, vec![WordId::new(0), WordId::new(1)]);
        assert_eq!(SecretSelection::First(10).secrets(4).len(), 4);
    }

    #[test]
    fn sample_is_seeded() {
        let a = SecretSelection::Sample { size: 5, seed: 42 }.secrets(100);
        let b = SecretSelection::Sample { size: 5, seed: 42 }.secrets(100);
        assert_eq!(a, b);
        assert_eq!(a.len(), 5);

        let mut unique = a.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), 5);
    }

    #[test]
    fn solve_all_subset() {
        let lexicon = english_lexicon();
        let index = CandidateIndex::build(&lexicon);
        let selector = GuessSelector::new(&index, &lexicon);
        let opener = lexicon.id_of("crane").unwrap();

        let stats = run_solve_all(&selector, opener, SecretSelection::First(25), 10);

        assert_eq!(stats.total_words, 25);
        assert_eq!(stats.solved, 25);
        assert_eq!(stats.failed, 0);
        assert_eq!(stats.round_distribution.values().sum::<usize>(), 25);
        assert!(stats.average_rounds >= 1.0);
        assert!(stats.failures.is_empty());
        assert_eq!(stats.opener, "crane");
    }

    #[test]
    fn round_limit_failures_are_counted() {
        let lexicon = english_lexicon();
        let index = CandidateIndex::build(&lexicon);
        let selector = GuessSelector::new(&index, &lexicon).with_parallel(false);
        let opener = lexicon.id_of("crane").unwrap();

        let stats = run_solve_all(&selector, opener, SecretSelection::First(10), 1);

        // Only CRANE itself can be solved in one round
        let crane_played = usize::from(opener.index() < 10);
        assert_eq!(stats.solved, crane_played);
        assert_eq!(stats.failures.get(&ExhaustReason::RoundLimit).copied().unwrap_or(0), 10 - crane_played);
    }
}
