//! Interactive TUI interface
//!
//! Full-screen mode where the player types the feedback the game showed.

mod app;
mod rendering;

pub use app::{App, GuessInfo, InputMode, Message, MessageStyle, Statistics, run_tui};
