//! TUI application state and logic

use crate::core::Feedback;
use crate::corpus::WordId;
use crate::solver::{GuessSelector, Session, SessionState};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub selector: &'a GuessSelector<'a>,
    pub opener: WordId,
    pub max_rounds: usize,
    pub session: Session<'a>,
    pub current_guess: Option<GuessInfo>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
    pub manual_word: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Feedback,
    ManualWord,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct GuessInfo {
    pub word: WordId,
    pub expected_remaining: f64,
    pub worst: usize,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub guess_distribution: [usize; 7],
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(selector: &'a GuessSelector<'a>, opener: WordId, max_rounds: usize) -> Self {
        Self {
            selector,
            opener,
            max_rounds,
            session: Session::new(selector, opener, max_rounds),
            current_guess: None,
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: "Welcome! I'll suggest the guess that narrows the field most."
                        .to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Enter feedback pattern (e.g., 'GY-GY' or '🟩🟨⬜🟩🟨')".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Feedback,
            manual_word: String::new(),
        }
    }

    pub fn compute_suggestion(&mut self) {
        self.current_guess = self.session.current_guess().map(|word| {
            let score = self.selector.score(self.session.candidates(), word);
            GuessInfo {
                word,
                expected_remaining: score.average(),
                worst: score.worst,
            }
        });
    }

    pub fn handle_feedback(&mut self, input: &str) {
        let feedback = match input.parse::<Feedback>() {
            Ok(feedback) => feedback,
            Err(e) => {
                self.add_message(&format!("{e}! Use G/Y/-  or 🟩🟨⬜"), MessageStyle::Error);
                return;
            }
        };

        let state = match self.session.submit(feedback) {
            Ok(state) => state,
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                return;
            }
        };
        self.input_buffer.clear();
        self.compute_suggestion();

        match state {
            SessionState::Won => {
                self.stats.games_won += 1;
                self.stats.total_games += 1;
                let guess_count = self.session.rounds().len();
                if let Some(slot) = self.stats.guess_distribution.get_mut(guess_count) {
                    *slot += 1;
                }
                self.input_mode = InputMode::GameOver;

                let celebration = match guess_count {
                    1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                    3 => "✨ SPLENDID! Three guesses! ✨",
                    4 => "👏 GREAT JOB! Four guesses! 👏",
                    5 => "🎉 NICE WORK! Five guesses! 🎉",
                    6 => "😅 PHEW! Got it in six! 😅",
                    _ => "🎊 SOLVED! 🎊",
                };
                self.add_message(celebration, MessageStyle::Success);
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            SessionState::Exhausted(reason) => {
                self.stats.total_games += 1;
                self.input_mode = InputMode::GameOver;
                self.add_message(
                    &format!("Game over: {reason}. Press 'u' to undo or 'n' for new game."),
                    MessageStyle::Error,
                );
            }
            SessionState::Guessing => {
                let remaining = self.session.candidate_count();
                self.add_message(&format!("{remaining} candidates remaining"), MessageStyle::Info);
            }
        }
    }

    pub fn new_game(&mut self) {
        self.session = Session::new(self.selector, self.opener, self.max_rounds);
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Feedback;
        self.add_message("New game started!", MessageStyle::Info);
        self.compute_suggestion();
    }

    pub fn undo_last(&mut self) {
        if self.input_mode == InputMode::GameOver {
            // The finished game was already counted
            self.stats.total_games = self.stats.total_games.saturating_sub(1);
            if self.session.state() == SessionState::Won {
                self.stats.games_won = self.stats.games_won.saturating_sub(1);
                if let Some(slot) = self.stats.guess_distribution.get_mut(self.session.rounds().len()) {
                    *slot = slot.saturating_sub(1);
                }
            }
        }

        if self.session.undo() {
            self.input_mode = InputMode::Feedback;
            self.compute_suggestion();
            self.add_message("Undone!", MessageStyle::Info);
        } else {
            self.add_message("Nothing to undo!", MessageStyle::Error);
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    #[must_use]
    pub fn candidates_count(&self) -> usize {
        self.session.candidate_count()
    }

    pub fn use_manual_word(&mut self) {
        let word = self.manual_word.clone();
        let lexicon = self.selector.lexicon();

        let id = match lexicon.resolve(&word) {
            Ok(id) => id,
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                return;
            }
        };
        if let Err(e) = self.session.override_guess(id) {
            self.add_message(&e.to_string(), MessageStyle::Error);
            return;
        }

        let previous = self.current_guess.take();
        self.compute_suggestion();

        let note = match (previous, &self.current_guess) {
            (Some(suggested), Some(manual))
                if suggested.expected_remaining < manual.expected_remaining =>
            {
                Some(format!(
                    "Note: {} expected {:.1} remaining ({:.1} fewer)",
                    lexicon.word(suggested.word).text().to_uppercase(),
                    suggested.expected_remaining,
                    manual.expected_remaining - suggested.expected_remaining
                ))
            }
            _ => None,
        };
        if let Some(note) = note {
            self.add_message(&note, MessageStyle::Info);
        }
        let expected = self.current_guess.as_ref().map(|g| g.expected_remaining);
        if let Some(expected) = expected {
            self.add_message(
                &format!("Using: {} ({expected:.1} expected remaining)", word.to_uppercase()),
                MessageStyle::Success,
            );
        }

        self.input_mode = InputMode::Feedback;
        self.manual_word.clear();
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::GameOver => match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                KeyCode::Char('u') => self.undo_last(),
                _ => {}
            },
            InputMode::Feedback => match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                KeyCode::Char('u') => self.undo_last(),
                KeyCode::Tab => {
                    self.input_mode = InputMode::ManualWord;
                    self.add_message("Enter your own word (5 letters)", MessageStyle::Info);
                }
                KeyCode::Char(c) => self.input_buffer.push(c),
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => {
                    let input = self.input_buffer.clone();
                    self.handle_feedback(&input);
                }
                _ => {}
            },
            InputMode::ManualWord => match key.code {
                KeyCode::Esc => {
                    self.input_mode = InputMode::Feedback;
                    self.manual_word.clear();
                    self.add_message("Cancelled manual word entry", MessageStyle::Info);
                }
                KeyCode::Tab => {
                    self.input_mode = InputMode::Feedback;
                    self.manual_word.clear();
                }
                KeyCode::Char(c) => {
                    if self.manual_word.chars().count() < 5 && c.is_alphabetic() {
                        self.manual_word.extend(c.to_lowercase());
                    }
                }
                KeyCode::Backspace => {
                    self.manual_word.pop();
                }
                KeyCode::Enter => {
                    if self.manual_word.chars().count() == 5 {
                        self.use_manual_word();
                    } else {
                        self.add_message("Word must be exactly 5 letters!", MessageStyle::Error);
                    }
                }
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    app.compute_suggestion();

    while !app.should_quit {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }
    }

    Ok(())
}
