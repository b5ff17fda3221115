//! TUI application state and logic

use crate::config::GameConfig;
use crate::game::{GameResult, Outcome, Session, TargetSource, Vocabulary};
use crate::stats::{Statistics, StatsStore};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::warn;

/// Application state
pub struct App<'a> {
    pub session: Session<'a>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
    vocabulary: &'a Vocabulary,
    targets: Box<dyn TargetSource + 'a>,
    config: GameConfig,
    store: Option<StatsStore>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
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

impl<'a> App<'a> {
    /// Create the app and start the first game
    ///
    /// Without a store, statistics are kept in memory for this run only.
    ///
    /// # Errors
    ///
    /// Returns an error if the first session cannot be created.
    pub fn new(
        vocabulary: &'a Vocabulary,
        mut targets: Box<dyn TargetSource + 'a>,
        config: GameConfig,
        store: Option<StatsStore>,
    ) -> Result<Self> {
        let session = Session::new(targets.next_target(), vocabulary, &config)?;

        let stats = match store.as_ref().map(StatsStore::load).transpose() {
            Ok(stats) => stats.unwrap_or_default(),
            Err(e) => {
                warn!(error = %e, "ignoring unreadable statistics");
                Statistics::default()
            }
        };

        let mut app = Self {
            session,
            input_buffer: String::new(),
            messages: Vec::new(),
            stats,
            should_quit: false,
            input_mode: InputMode::Guessing,
            vocabulary,
            targets,
            config,
            store,
        };
        app.add_message(
            &format!(
                "Guess the {}-letter word in {} tries.",
                config.word_length, config.max_attempts
            ),
            MessageStyle::Info,
        );
        Ok(app)
    }

    pub fn push_char(&mut self, c: char) {
        if self.input_mode == InputMode::Guessing
            && c.is_ascii_alphabetic()
            && self.input_buffer.len() < self.session.word_length()
        {
            self.input_buffer.push(c.to_ascii_lowercase());
        }
    }

    pub fn pop_char(&mut self) {
        self.input_buffer.pop();
    }

    /// Submit the typed word as a guess
    pub fn submit(&mut self) {
        if self.input_mode != InputMode::Guessing {
            return;
        }

        let input = std::mem::take(&mut self.input_buffer);
        match self.session.submit_guess(&input) {
            Ok(record) => {
                let solved = record.feedback().is_solved();
                if !solved && !self.session.is_terminal() {
                    let remaining = self.session.attempts_remaining();
                    self.add_message(
                        &format!(
                            "{remaining} {} left",
                            if remaining == 1 { "guess" } else { "guesses" }
                        ),
                        MessageStyle::Info,
                    );
                }
            }
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                // Keep the text so a typo can be fixed
                if e.is_recoverable() {
                    self.input_buffer = input;
                }
            }
        }

        if self.session.is_terminal() {
            self.finish_game();
        }
    }

    /// Give up on the current game without recording it
    pub fn abandon(&mut self) {
        self.session.abandon();
    }

    /// Start a fresh session with a new target
    ///
    /// An unfinished game is abandoned first.
    ///
    /// # Errors
    ///
    /// Returns an error if the new session cannot be created.
    pub fn new_game(&mut self) -> Result<()> {
        self.session.abandon();
        self.session = Session::new(self.targets.next_target(), self.vocabulary, &self.config)?;
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Guessing;
        self.add_message("New game started!", MessageStyle::Info);
        Ok(())
    }

    fn finish_game(&mut self) {
        self.input_mode = InputMode::GameOver;

        match self.session.outcome() {
            Outcome::Won { attempts } => {
                let celebration = match attempts {
                    1 => "🎯 HOLE IN ONE!",
                    2 => "🔥 MAGNIFICENT!",
                    3 => "✨ SPLENDID!",
                    4 => "👏 GREAT JOB!",
                    5 => "🎉 NICE WORK!",
                    _ => "😅 PHEW!",
                };
                self.add_message(
                    &format!(
                        "{celebration} Solved in {attempts}/{}",
                        self.session.max_attempts()
                    ),
                    MessageStyle::Success,
                );
            }
            Outcome::Lost => {
                let target = self.session.target().text().to_uppercase();
                self.add_message(
                    &format!("Out of guesses. The word was {target}"),
                    MessageStyle::Error,
                );
            }
            Outcome::Abandoned | Outcome::InProgress => return,
        }

        if let Some(result) = self.session.result() {
            self.record(&result);
        }
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    fn record(&mut self, result: &GameResult) {
        match self.store.as_ref().map(|store| store.record_result(result)) {
            Some(Ok(stats)) => self.stats = stats,
            Some(Err(e)) => {
                warn!(error = %e, "failed to save statistics");
                self.stats.record(result);
                self.add_message("Could not save statistics", MessageStyle::Error);
            }
            None => self.stats.record(result),
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

    /// Apply one key press
    ///
    /// # Errors
    ///
    /// Returns an error if a new game cannot be started.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.abandon();
            self.should_quit = true;
            return Ok(());
        }

        match self.input_mode {
            InputMode::GameOver => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') => self.new_game()?,
                _ => {}
            },
            InputMode::Guessing => match key.code {
                KeyCode::Esc => {
                    self.abandon();
                    self.should_quit = true;
                }
                KeyCode::Char(c) => self.push_char(c),
                KeyCode::Backspace => self.pop_char(),
                KeyCode::Enter => self.submit(),
                _ => {}
            },
        }
        Ok(())
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App<'_>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App<'_>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key)?;
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
