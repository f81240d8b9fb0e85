//! TUI application state and logic

use crate::core::WORD_LENGTH;
use crate::game::{Game, GameError, SessionStatus};
use crate::source::WordSource;
use crate::stats::ScoreStore;
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
use std::time::Duration;

/// Application state
pub struct App<W, S> {
    pub game: Game<W, S>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<W: WordSource, S: ScoreStore> App<W, S> {
    #[must_use]
    pub fn new(game: Game<W, S>) -> Self {
        let load_warning = game
            .stats()
            .load_warning()
            .map(|err| format!("Score history unreadable, starting fresh: {err}"));

        let mut app = Self {
            game,
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: "Welcome! Guess the hidden 5-letter word.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type a word and press Enter.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            should_quit: false,
            input_mode: InputMode::Guessing,
        };

        if let Some(text) = load_warning {
            app.add_message(&text, MessageStyle::Error);
        }
        app
    }

    /// Append a typed letter, ignoring anything past 5 letters
    pub fn push_char(&mut self, c: char) {
        if self.input_buffer.len() < WORD_LENGTH && c.is_ascii_alphabetic() {
            self.input_buffer.push(c.to_ascii_lowercase());
        }
    }

    /// Submit the input buffer as a guess
    pub async fn submit_input(&mut self) {
        let input = self.input_buffer.clone();

        match self.game.submit_guess(&input).await {
            Ok(report) => {
                self.input_buffer.clear();

                match report.status {
                    SessionStatus::Won { guesses_used } => {
                        let celebration = match guesses_used {
                            1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                            2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                            3 => "✨ SPLENDID! Three guesses! ✨",
                            4 => "👏 GREAT JOB! Four guesses! 👏",
                            5 => "🎉 NICE WORK! Five guesses! 🎉",
                            _ => "😅 PHEW! Got it in six! 😅",
                        };
                        self.add_message(celebration, MessageStyle::Success);
                        if let Some(summary) = report.summary {
                            self.add_message(&summary.to_string(), MessageStyle::Info);
                        }
                        self.input_mode = InputMode::GameOver;
                    }
                    SessionStatus::Lost => {
                        let answer = self
                            .game
                            .session()
                            .revealed_answer()
                            .map(|w| w.text().to_uppercase())
                            .unwrap_or_default();
                        self.add_message(
                            &format!("💀 Game over! The word was: {answer}"),
                            MessageStyle::Error,
                        );
                        self.input_mode = InputMode::GameOver;
                    }
                    SessionStatus::InProgress => {
                        let left = self.game.session().remaining_tries();
                        self.add_message(
                            &format!("{left} {} left", if left == 1 { "try" } else { "tries" }),
                            MessageStyle::Info,
                        );
                    }
                }

                if let Some(warning) = report.stats_warning {
                    self.add_message(
                        &format!("Score not saved: {warning}"),
                        MessageStyle::Error,
                    );
                }

                if self.input_mode == InputMode::GameOver {
                    self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
                }
            }
            Err(GameError::Validation(err)) => {
                self.add_message(&err.to_string(), MessageStyle::Error);
            }
            Err(err @ GameError::SessionTerminated) => {
                self.input_mode = InputMode::GameOver;
                self.add_message(&err.to_string(), MessageStyle::Error);
            }
        }
    }

    pub async fn new_game(&mut self) {
        self.game.new_session().await;
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Guessing;
        self.add_message("New game started! Good luck.", MessageStyle::Info);
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

    /// Apply one key press
    pub async fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::GameOver => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') => self.new_game().await,
                _ => {}
            },
            InputMode::Guessing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char(c) => self.push_char(c),
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit_input().await,
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
pub async fn run_tui<W: WordSource, S: ScoreStore>(app: App<W, S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app).await;

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

async fn run_app<B, W, S>(terminal: &mut Terminal<B>, mut app: App<W, S>) -> Result<()>
where
    B: ratatui::backend::Backend,
    W: WordSource,
    S: ScoreStore,
{
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
        {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind == KeyEventKind::Press {
                app.handle_key(key).await;
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
