//! Display functions for command results

use super::formatters::{create_progress_bar, feedback_to_emoji};
use crate::commands::{AnalysisResult, SolveResult};
use crate::solver::SessionState;
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        let turn = i + 1;
        println!(
            "\nTurn {}: {} {}",
            turn,
            step.word.to_uppercase(),
            feedback_to_emoji(step.feedback)
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            println!(
                "  Expected:   {:.1} candidates (worst {})",
                step.score.average(),
                step.score.worst
            );
            if step.candidates_after > 0 {
                println!(
                    "  Reduction:  {:.1}x",
                    step.candidates_before as f64 / step.candidates_after as f64
                );
            }
        }
    }

    println!();
    match result.state {
        SessionState::Won => println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        ),
        SessionState::Exhausted(reason) => println!(
            "{}",
            format!(
                "❌ Failed to solve in {} guesses: {reason}",
                result.guesses.len()
            )
            .red()
            .bold()
        ),
        SessionState::Guessing => {}
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "OPENER ANALYSIS:".bright_cyan().bold(),
        result.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let total = result.total_candidates as f64;
    let bar = create_progress_bar(total - result.average, total, 30);

    println!("\n📊 Against {} possible secrets:", result.total_candidates);
    println!(
        "   Elimination: [{}] {}",
        bar.green(),
        format!("{:.1}%", (1.0 - result.average / total.max(1.0)) * 100.0).bright_yellow()
    );
    println!("   Expected:    {:.2} candidates remain", result.average);
    println!("   Worst case:  {} candidates remain", result.worst);
    if let Some(rank) = result.rank {
        println!("   Rank:        #{rank} of {}", result.total_candidates);
    }
}
