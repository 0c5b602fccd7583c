//! Formatting utilities for terminal output

use crate::core::{CharResult, Feedback, Word};
use colored::{ColoredString, Colorize};
use indicatif::{ProgressBar, ProgressStyle};

/// Format feedback as an emoji string
#[must_use]
pub fn feedback_to_emoji(feedback: Feedback) -> String {
    feedback.to_string()
}

/// Render a guess as coloured letter tiles
#[must_use]
pub fn feedback_tiles(word: &Word, feedback: Feedback) -> String {
    word.text()
        .chars()
        .zip(feedback.results())
        .map(|(letter, &result)| tile(letter, result).to_string())
        .collect()
}

fn tile(letter: char, result: CharResult) -> ColoredString {
    let text = format!(" {} ", letter.to_uppercase());
    match result {
        CharResult::InPosition => text.black().on_green().bold(),
        CharResult::WrongPosition => text.black().on_yellow().bold(),
        CharResult::NotInWord => text.white().on_bright_black(),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Progress bar for long runs over `len` items
#[must_use]
pub fn progress_bar(len: u64) -> ProgressBar {
    let pb = ProgressBar::new(len);
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓▒░");
    pb.set_style(style);
    pb
}
