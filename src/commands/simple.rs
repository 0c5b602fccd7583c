//! Simple interactive CLI mode
//!
//! Text-based interactive solver without TUI

use crate::core::Feedback;
use crate::corpus::WordId;
use crate::output::formatters::{feedback_tiles, feedback_to_emoji};
use crate::solver::{GuessSelector, Session, SessionState};
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_simple(selector: &GuessSelector<'_>, opener: WordId, max_rounds: usize) -> Result<(), String> {
    let lexicon = selector.lexicon();

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║               Wordle Sieve - Interactive Mode                ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("I'll suggest the guess that leaves the fewest candidates on average.");
    println!("After each guess, enter the feedback pattern:\n");
    println!("  - Use G/g/🟩 for green (correct position)");
    println!("  - Use Y/y/🟨 for yellow (wrong position)");
    println!("  - Use -/_/⬜ for gray (not in word)");
    println!("  - Or type 'win' if you got it right!\n");
    println!("Commands: 'quit' to exit, 'new' for new game, 'undo' to undo last guess,");
    println!("          'play WORD' to enter a different guess\n");

    let mut session = Session::new(selector, opener, max_rounds);

    loop {
        let Some(guess) = session.current_guess() else {
            match session.state() {
                SessionState::Won => print_victory(&session),
                SessionState::Exhausted(reason) => {
                    println!("\n❌ Game over: {reason}.");
                    println!("Type 'undo' to go back, or 'new' to start over.\n");
                }
                SessionState::Guessing => {}
            }

            match get_user_input("Command (new/undo/quit)")?.to_lowercase().as_str() {
                "undo" | "u" => {
                    if session.undo() {
                        println!("✓ Undone! Back to round {}\n", session.rounds().len() + 1);
                    }
                }
                "new" | "n" | "yes" | "y" => {
                    session = Session::new(selector, opener, max_rounds);
                    println!("\n🔄 New game started!\n");
                }
                _ => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
            continue;
        };

        let candidates_count = session.candidate_count();
        println!("────────────────────────────────────────────────────────────");
        println!(
            "Round {}: {candidates_count} candidates remaining",
            session.rounds().len() + 1
        );
        println!("────────────────────────────────────────────────────────────");

        let score = selector.score(session.candidates(), guess);
        println!("\n📊 Suggested guess: {}", lexicon.word(guess).text().to_uppercase());
        println!("   Expected remain:  {:.1} candidates", score.average());
        println!("   Worst case:       {} candidates\n", score.worst);

        if let Some(candidates) = session.candidates().filter(|c| c.len() <= 10) {
            println!("Remaining candidates:");
            for id in candidates.iter() {
                println!("  • {}", lexicon.word(id).text().to_uppercase());
            }
            println!();
        }

        let feedback = loop {
            let input = get_user_input("Enter feedback (G/Y/-, 'win', or command)")?;
            let lowered = input.to_lowercase();

            match lowered.as_str() {
                "quit" | "q" | "exit" => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                "new" | "n" => {
                    session = Session::new(selector, opener, max_rounds);
                    println!("\n🔄 New game started!\n");
                    break None;
                }
                "undo" | "u" => {
                    if session.undo() {
                        println!("✓ Undone! Back to round {}\n", session.rounds().len() + 1);
                        break None;
                    }
                    println!("Nothing to undo!\n");
                }
                "win" | "correct" | "solved" => break Some(Feedback::ALL_HIT),
                _ => {
                    if let Some(word) = lowered.strip_prefix("play ") {
                        match lexicon.resolve(word) {
                            Ok(id) => {
                                session.override_guess(id).map_err(|e| e.to_string())?;
                                println!("✓ Playing {} instead\n", word.trim().to_uppercase());
                                break None;
                            }
                            Err(e) => println!("❌ {e}\n"),
                        }
                        continue;
                    }
                    match input.parse::<Feedback>() {
                        Ok(feedback) => break Some(feedback),
                        Err(e) => println!("❌ {e}! Use G/Y/-, 'win', or '🟩🟨⬜🟩🟨'\n"),
                    }
                }
            }
        };

        if let Some(feedback) = feedback {
            session.submit(feedback).map_err(|e| e.to_string())?;
        }
    }
}

fn print_victory(session: &Session<'_>) {
    let lexicon = session.selector().lexicon();
    let rounds = session.rounds().len();

    println!("\n{}", "═".repeat(70).bright_cyan());
    println!(
        "{}",
        "    🎉 🎊 ✨  W O R D L E   S O L V E D !  ✨ 🎊 🎉    "
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(70).bright_cyan());
    println!(
        "\n  Solution found in {} {}",
        rounds.to_string().bright_cyan().bold(),
        if rounds == 1 { "guess" } else { "guesses" }
    );

    println!("\n  Guess history:");
    for (i, round) in session.rounds().iter().enumerate() {
        let word = lexicon.word(round.guess);
        println!(
            "    {}. {} {}",
            (i + 1).to_string().bright_black(),
            feedback_tiles(word, round.feedback),
            feedback_to_emoji(round.feedback)
        );
    }
    println!("\n{}", "═".repeat(70).bright_cyan());
    println!();
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;
    if read == 0 {
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}
